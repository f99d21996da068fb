//! 进程内缓存实现

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::Record;
use crate::storage::repository::LocalStore;

/// 基于 `BTreeMap` 的本地缓存，进程退出即丢失
pub struct InMemoryStore<R: Record> {
    records: RwLock<BTreeMap<R::Id, R>>,
}

impl<R: Record> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// 预置数据的缓存
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let store = Self::new();
        store
            .records
            .write()
            .extend(records.into_iter().map(|r| (r.id(), r)));
        store
    }
}

impl<R: Record> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> LocalStore<R> for InMemoryStore<R> {
    async fn fetch_all(&self) -> Result<Vec<R>> {
        Ok(self.records.read().values().cloned().collect())
    }

    async fn insert(&self, records: &[R]) -> Result<()> {
        let mut guard = self.records.write();
        for record in records {
            guard.insert(record.id(), record.clone());
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.records.write().clear();
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.records.read().len() as u64)
    }
}
