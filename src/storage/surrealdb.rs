use crate::config::config::StorageConfig;
use crate::error::{AppError, Result};
use std::sync::Arc;
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
    opt::auth::Root,
};
use tokio::sync::Mutex;

/// SurrealDB 连接池
///
/// 嵌入式引擎（`rocksdb://`、`mem://`）不需要认证；远程引擎在配置了
/// 用户名时以 root 身份登录。
#[derive(Clone)]
pub struct SurrealPool {
    /// 数据库连接
    db: Arc<Mutex<Option<Surreal<Any>>>>,
    /// 连接配置
    config: StorageConfig,
}

impl SurrealPool {
    /// 创建新的连接池
    pub async fn new(config: StorageConfig) -> Result<Self> {
        let db: Surreal<Any> = connect(config.url.as_str()).await?;

        if let Some(username) = config.username.as_deref() {
            db.signin(Root {
                username,
                password: config.password.as_deref().unwrap_or_default(),
            })
            .await?;
        }

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;

        tracing::debug!(url = %config.url, ns = %config.namespace, db = %config.database, "SurrealDB connected");

        Ok(Self {
            db: Arc::new(Mutex::new(Some(db))),
            config,
        })
    }

    /// 获取内部数据库实例
    pub async fn inner(&self) -> Result<Surreal<Any>> {
        let guard = self.db.lock().await;
        guard
            .as_ref()
            .cloned()
            .ok_or_else(|| AppError::Database("Database connection closed".into()))
    }

    /// 关闭连接
    pub async fn close(&self) {
        let mut guard = self.db.lock().await;
        *guard = None;
        tracing::debug!(url = %self.config.url, "SurrealDB connection closed");
    }
}
