//! 存储层模块
//!
//! 本地缓存是返回给调用方的唯一数据来源。持久化实现基于 SurrealDB，
//! 另提供一个进程内实现用于临时运行和测试。

pub mod memory;
pub mod repository;
pub mod surrealdb;

pub use memory::InMemoryStore;
pub use repository::{LocalStore, SurrealStore};
pub use surrealdb::SurrealPool;
