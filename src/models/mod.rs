//! 核心数据模型模块
//!
//! 定义可缓存记录的抽象以及组织者模型。

pub mod organizer;
pub mod record;

pub use organizer::*;
pub use record::{Record, Segment};
