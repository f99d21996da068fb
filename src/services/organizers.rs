//! 组织者服务

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::config::AppConfig;
use crate::error::Result;
use crate::models::{Organizer, OrganizerType};
use crate::observability::FetchObserver;
use crate::remote::HttpOrganizerSource;
use crate::services::fetcher::CacheBackedFetcher;
use crate::storage::{SurrealPool, SurrealStore};

/// 组织者持久化表名
pub const ORGANIZER_TABLE: &str = "organizer";

/// 组织者服务 trait
#[async_trait]
pub trait OrganizersService: Send + Sync {
    /// 获取全部组织者（缓存优先）
    async fn fetch_organizers(&self) -> Result<Vec<Organizer>>;

    /// 丢弃缓存
    async fn invalidate(&self) -> Result<()>;
}

/// 组织者服务实现
pub type OrganizersServiceImpl = CacheBackedFetcher<Organizer, OrganizerType>;

#[async_trait]
impl OrganizersService for OrganizersServiceImpl {
    async fn fetch_organizers(&self) -> Result<Vec<Organizer>> {
        self.fetch_all().await
    }

    async fn invalidate(&self) -> Result<()> {
        CacheBackedFetcher::invalidate(self).await
    }
}

/// 创建组织者服务：SurrealDB 缓存 + HTTP 数据源
pub async fn create_organizers_service(
    config: &AppConfig,
    observer: Arc<dyn FetchObserver>,
) -> Result<Box<dyn OrganizersService>> {
    let pool = SurrealPool::new(config.storage.clone()).await?;
    let store = SurrealStore::<Organizer>::new(pool, ORGANIZER_TABLE);
    let remote = HttpOrganizerSource::new(&config.api)?;

    let service = OrganizersServiceImpl::new(Arc::new(store), Arc::new(remote))
        .with_strategy(config.fetch.strategy)
        .with_observer(observer);

    Ok(Box::new(service))
}
