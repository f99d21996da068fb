//! 缓存优先的记录拉取
//!
//! 本地缓存为空时才按分段访问网络并写入缓存，之后总是返回缓存内容。
//! 非空但过期的缓存不会被刷新，只有显式 [`CacheBackedFetcher::invalidate`]
//! 之后的下一次拉取才会重新填充。

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{Record, Segment};
use crate::observability::{FetchObserver, NoopObserver};
use crate::remote::{Page, RemoteResult, RemoteSource};
use crate::storage::LocalStore;

/// 缓存未命中时各分段的拉取方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStrategy {
    /// 按分段顺序逐个拉取
    #[default]
    Sequential,
    /// 同时发出所有分段请求，结果按分段顺序写入
    Concurrent,
}

/// 缓存优先拉取器
pub struct CacheBackedFetcher<R: Record, S: Segment> {
    store: Arc<dyn LocalStore<R>>,
    remote: Arc<dyn RemoteSource<R, S>>,
    observer: Arc<dyn FetchObserver>,
    strategy: FillStrategy,
}

impl<R: Record, S: Segment> CacheBackedFetcher<R, S> {
    pub fn new(store: Arc<dyn LocalStore<R>>, remote: Arc<dyn RemoteSource<R, S>>) -> Self {
        Self {
            store,
            remote,
            observer: Arc::new(NoopObserver),
            strategy: FillStrategy::default(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_strategy(mut self, strategy: FillStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// 返回本地缓存中的全部记录
    ///
    /// 远程失败只会被记录并跳过；返回的错误只可能来自本地缓存本身。
    /// 填充过程中写入缓存失败会立即中止，剩余分段不再写入。
    pub async fn fetch_all(&self) -> Result<Vec<R>> {
        let cached = self.store.fetch_all().await?;
        if !cached.is_empty() {
            debug!(records = cached.len(), "Local cache hit");
            self.observer.on_cache_hit(cached.len());
            return Ok(cached);
        }

        info!(segments = S::all().len(), strategy = ?self.strategy, "Local cache empty, filling from remote");
        self.observer.on_cache_miss();

        match self.strategy {
            FillStrategy::Sequential => {
                for &segment in S::all() {
                    let result = self.remote.fetch(segment).await;
                    self.absorb(segment, result).await?;
                }
            }
            FillStrategy::Concurrent => {
                let results =
                    join_all(S::all().iter().map(|&segment| self.remote.fetch(segment))).await;
                for (&segment, result) in S::all().iter().zip(results) {
                    self.absorb(segment, result).await?;
                }
            }
        }

        self.store.fetch_all().await
    }

    /// 清空本地缓存，下一次 `fetch_all` 会重新填充
    pub async fn invalidate(&self) -> Result<()> {
        info!("Invalidating local cache");
        self.store.clear().await
    }

    async fn absorb(&self, segment: S, result: RemoteResult<Page<R>>) -> Result<()> {
        match result {
            Ok(page) => {
                if page.meta.has_more_pages {
                    debug!(%segment, next_page = ?page.meta.next_page, "Remote has more pages; caching the first only");
                }
                self.store.insert(&page.records).await?;
                debug!(%segment, records = page.records.len(), "Segment cached");
                self.observer
                    .on_segment_filled(segment.as_str(), page.records.len());
            }
            Err(error) => {
                warn!(%segment, %error, "Segment fetch failed, skipping");
                self.observer.on_segment_failed(segment.as_str(), &error);
            }
        }
        Ok(())
    }
}
