use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::services::fetcher::FillStrategy;

/// 远程 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// API 根地址
    pub base_url: String,
    /// 活动标识，组织者列表挂在活动下
    pub event_slug: String,
    /// `Api-Authorization-Key` 请求头
    pub api_key: Option<String>,
    /// 每个分段请求的记录数
    pub per_page: u32,
    /// 请求超时（秒）
    pub timeout_secs: u64,
    /// User-Agent
    pub user_agent: String,
}

/// 本地缓存存储配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// SurrealDB 连接地址，例如 `rocksdb://./data/cache` 或 `mem://`
    pub url: String,
    /// 命名空间
    pub namespace: String,
    /// 数据库名称
    pub database: String,
    /// 用户名（嵌入式引擎留空）
    pub username: Option<String>,
    /// 密码
    pub password: Option<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
    /// 日志文件目录
    pub log_dir: Option<PathBuf>,
}

/// 缓存填充配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FetchConfig {
    /// 分段拉取策略
    pub strategy: FillStrategy,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 远程 API 配置
    pub api: ApiConfig,
    /// 存储配置
    pub storage: StorageConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 缓存填充配置
    pub fetch: FetchConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api.droidcon.co.ke/v1".into(),
                event_slug: "droidconke-2022-281".into(),
                api_key: None,
                per_page: 100,
                timeout_secs: 30,
                user_agent: concat!("droidcon-cache/", env!("CARGO_PKG_VERSION")).into(),
            },
            storage: StorageConfig {
                url: "rocksdb://./data/droidcon-cache".into(),
                namespace: "droidconke".into(),
                database: "cache".into(),
                username: None,
                password: None,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
            },
            fetch: FetchConfig {
                strategy: FillStrategy::Sequential,
            },
            app_name: "droidcon-cache".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config
    }

    /// 按环境名选择预设，未知环境使用开发配置
    pub fn for_environment(environment: &str) -> Self {
        match environment {
            "production" | "prod" => Self::production(),
            _ => Self::development(),
        }
    }

    /// 测试用配置：内存存储，指向给定 API 地址
    pub fn in_memory(base_url: &str) -> Self {
        let mut config = Self::development();
        config.api.base_url = base_url.into();
        config.storage.url = "mem://".into();
        config.environment = "test".into();
        config
    }
}
