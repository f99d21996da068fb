use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "DROIDCON_";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序：
    /// 1. `DROIDCON_ENVIRONMENT` 选定的预设（默认开发环境）
    /// 2. ./config.toml
    /// 3. `DROIDCON_` 前缀的环境变量（嵌套键用 `__` 分隔）
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Self::figment(path.as_ref()).extract()
    }

    fn figment(path: &Path) -> Figment {
        let environment = std::env::var(format!("{ENV_PREFIX}ENVIRONMENT")).unwrap_or_default();
        Figment::from(Serialized::defaults(AppConfig::for_environment(&environment)))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.api.base_url.is_empty() {
            return Err(ConfigValidationError::MissingApiUrl);
        }

        if reqwest::Url::parse(&config.api.base_url).is_err() {
            return Err(ConfigValidationError::InvalidApiUrl(
                config.api.base_url.clone(),
            ));
        }

        if config.api.event_slug.is_empty() {
            return Err(ConfigValidationError::MissingEventSlug);
        }

        if config.api.per_page == 0 {
            return Err(ConfigValidationError::InvalidPageSize);
        }

        if config.storage.url.is_empty() {
            return Err(ConfigValidationError::MissingStorageUrl);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("API 地址未配置")]
    MissingApiUrl,

    #[error("API 地址无效: {0}")]
    InvalidApiUrl(String),

    #[error("活动标识未配置")]
    MissingEventSlug,

    #[error("分页大小无效，必须大于 0")]
    InvalidPageSize,

    #[error("存储连接 URL 未配置")]
    MissingStorageUrl,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}
