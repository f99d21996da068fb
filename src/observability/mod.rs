//! 可观测性模块
//!
//! 提供日志初始化、缓存填充事件钩子以及简单计数指标。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::config::LoggingConfig;
use crate::error::{AppError, Result};
use crate::remote::RemoteError;

// ===== Logging =====

/// 初始化全局 tracing 订阅者
///
/// `RUST_LOG` 优先于配置中的级别。配置了 `log_dir` 时额外按天滚动写文件，
/// 返回的 guard 需要保持到进程结束。
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::Config(format!("invalid log level: {e}")))?;

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "droidcon-cache.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().json().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    let (json_layer, text_layer) = if config.structured {
        (Some(fmt::layer().json().with_writer(std::io::stderr)), None)
    } else {
        (None, Some(fmt::layer().with_writer(std::io::stderr)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Internal(format!("tracing already initialised: {e}")))?;

    Ok(guard)
}

// ===== Fetch hook =====

/// 缓存填充事件钩子
///
/// 所有方法默认为空实现。远程失败在填充阶段被吸收，这里是唯一能观察到
/// 它们的地方。
pub trait FetchObserver: Send + Sync {
    /// 缓存命中，未访问网络
    fn on_cache_hit(&self, _records: usize) {}

    /// 缓存为空，开始填充
    fn on_cache_miss(&self) {}

    /// 某个分段拉取成功并已写入缓存
    fn on_segment_filled(&self, _segment: &str, _records: usize) {}

    /// 某个分段拉取失败，已跳过
    fn on_segment_failed(&self, _segment: &str, _error: &RemoteError) {}
}

/// 不做任何事情的钩子
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FetchObserver for NoopObserver {}

// ===== Simple Metrics =====

/// 缓存填充计数
#[derive(Clone, Default)]
pub struct FetchMetrics {
    pub cache_hits_total: Arc<AtomicU64>,
    pub cache_misses_total: Arc<AtomicU64>,
    pub segments_filled_total: Arc<AtomicU64>,
    pub segment_failures_total: Arc<AtomicU64>,
    pub records_filled_total: Arc<AtomicU64>,
}

impl FetchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生成 Prometheus 文本格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP cache_hits_total Fetches served from the local store without network access
# TYPE cache_hits_total counter
cache_hits_total {}
# HELP cache_misses_total Fetches that found the local store empty
# TYPE cache_misses_total counter
cache_misses_total {}
# HELP segments_filled_total Segment fetches that populated the local store
# TYPE segments_filled_total counter
segments_filled_total {}
# HELP segment_failures_total Segment fetches that failed and were skipped
# TYPE segment_failures_total counter
segment_failures_total {}
# HELP records_filled_total Records upserted from the network
# TYPE records_filled_total counter
records_filled_total {}
"#,
            self.cache_hits_total.load(Ordering::SeqCst),
            self.cache_misses_total.load(Ordering::SeqCst),
            self.segments_filled_total.load(Ordering::SeqCst),
            self.segment_failures_total.load(Ordering::SeqCst),
            self.records_filled_total.load(Ordering::SeqCst),
        )
    }
}

impl FetchObserver for FetchMetrics {
    fn on_cache_hit(&self, _records: usize) {
        self.cache_hits_total.fetch_add(1, Ordering::SeqCst);
    }

    fn on_cache_miss(&self) {
        self.cache_misses_total.fetch_add(1, Ordering::SeqCst);
    }

    fn on_segment_filled(&self, _segment: &str, records: usize) {
        self.segments_filled_total.fetch_add(1, Ordering::SeqCst);
        self.records_filled_total
            .fetch_add(records as u64, Ordering::SeqCst);
    }

    fn on_segment_failed(&self, _segment: &str, _error: &RemoteError) {
        self.segment_failures_total.fetch_add(1, Ordering::SeqCst);
    }
}
