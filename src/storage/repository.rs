use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::marker::PhantomData;

use crate::error::Result;
use crate::models::Record;
use crate::storage::surrealdb::SurrealPool;

/// 本地缓存 trait
///
/// `insert` 按身份标识做 upsert，重复写入同一记录是幂等的。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocalStore<R: Record>: Send + Sync {
    /// 读取全部记录，按身份标识升序
    async fn fetch_all(&self) -> Result<Vec<R>>;

    /// 按身份标识插入或覆盖记录
    async fn insert(&self, records: &[R]) -> Result<()>;

    /// 清空缓存
    async fn clear(&self) -> Result<()>;

    /// 统计数量
    async fn count(&self) -> Result<u64> {
        Ok(self.fetch_all().await?.len() as u64)
    }
}

/// 持久化行：记录本身加写入时间
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedRow<R> {
    payload: R,
    cached_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

/// SurrealDB 缓存实现
///
/// 每条记录存为 `table:⟨id⟩`，因此 upsert 天然按身份去重。
#[derive(Clone)]
pub struct SurrealStore<R> {
    pool: SurrealPool,
    table: String,
    _marker: PhantomData<R>,
}

impl<R> SurrealStore<R> {
    pub fn new(pool: SurrealPool, table: &str) -> Self {
        Self {
            pool,
            table: table.to_string(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<R> LocalStore<R> for SurrealStore<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    async fn fetch_all(&self) -> Result<Vec<R>> {
        let db = self.pool.inner().await?;
        let rows: Vec<CachedRow<R>> = db.select(self.table.as_str()).await?;

        let mut records: Vec<R> = rows.into_iter().map(|row| row.payload).collect();
        records.sort_by_key(|r| r.id());
        Ok(records)
    }

    async fn insert(&self, records: &[R]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let db = self.pool.inner().await?;
        let cached_at = Utc::now();
        for record in records {
            let row = CachedRow {
                payload: record.clone(),
                cached_at,
            };
            let _: Option<CachedRow<R>> = db
                .upsert((self.table.as_str(), record.id().to_string()))
                .content(row)
                .await?;
        }

        tracing::debug!(table = %self.table, count = records.len(), "Upserted records");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let db = self.pool.inner().await?;
        let _: Vec<CachedRow<R>> = db.delete(self.table.as_str()).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64> {
        let db = self.pool.inner().await?;
        let result: Option<CountRow> = db
            .query("SELECT count() FROM type::table($table) GROUP ALL")
            .bind(("table", self.table.clone()))
            .await?
            .take(0)?;
        Ok(result.map(|row| row.count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::AppConfig;
    use crate::models::{Organizer, OrganizerType};

    async fn memory_store() -> SurrealStore<Organizer> {
        let config = AppConfig::in_memory("http://localhost").storage;
        let pool = SurrealPool::new(config).await.unwrap();
        SurrealStore::new(pool, "organizer")
    }

    #[tokio::test]
    async fn test_empty_table_reads_as_empty() {
        let store = memory_store().await;
        assert!(store.fetch_all().await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_upsert_collapses_by_identity() {
        let store = memory_store().await;
        let first = Organizer::new(2, "B", OrganizerType::Company);
        let mut renamed = first.clone();
        renamed.name = "B Ltd".into();

        store
            .insert(&[first, Organizer::new(1, "A", OrganizerType::Individual)])
            .await
            .unwrap();
        store.insert(&[renamed]).await.unwrap();

        let records = store.fetch_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].name, "B Ltd");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let store = memory_store().await;
        store
            .insert(&[Organizer::new(1, "A", OrganizerType::Individual)])
            .await
            .unwrap();
        store.clear().await.unwrap();
        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_database_error() {
        let store = memory_store().await;
        store.pool.close().await;
        let err = store.fetch_all().await.unwrap_err();
        assert!(matches!(err, crate::error::AppError::Database(_)));
    }
}
