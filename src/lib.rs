//! droidcon-cache - DroidconKE 数据层
//!
//! 以本地持久化缓存为唯一数据来源，仅在缓存为空时按分段从远程 API
//! 拉取组织者数据并写入缓存。

pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod remote;
pub mod services;
pub mod storage;
