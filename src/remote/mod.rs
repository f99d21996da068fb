//! 远程数据源模块
//!
//! 定义远程拉取端口及其结果类型。远程结果只用于填充本地缓存，
//! 永远不会直接返回给调用方。

pub mod dto;
pub mod organizers_api;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Record, Segment};

pub use organizers_api::HttpOrganizerSource;

/// 远程拉取失败的原因
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemoteError {
    /// 网络不可达、超时等传输层错误
    #[error("传输错误: {0}")]
    Transport(String),

    /// 非 2xx 响应
    #[error("远程返回状态 {status}: {body}")]
    Status { status: u16, body: String },

    /// 响应体无法解析
    #[error("响应解析失败: {0}")]
    Decode(String),
}

/// 一次远程调用的结果
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// 分页元数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub count: u32,
    pub per_page: u32,
    pub current_page: u32,
    pub next_page: Option<u32>,
    pub has_more_pages: bool,
    pub next_page_url: Option<String>,
    pub previous_page_url: Option<String>,
}

/// 一页远程记录
#[derive(Debug, Clone)]
pub struct Page<R> {
    pub records: Vec<R>,
    pub meta: PageMeta,
}

impl<R> Page<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            meta: PageMeta::default(),
        }
    }

    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = meta;
        self
    }
}

/// 按分段拉取记录的远程数据源
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteSource<R: Record, S: Segment>: Send + Sync {
    /// 拉取指定分段的一页记录
    async fn fetch(&self, segment: S) -> RemoteResult<Page<R>>;
}
