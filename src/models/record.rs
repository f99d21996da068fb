//! 记录与分段抽象
//!
//! 缓存层只关心两件事：记录的身份标识，以及远程数据按哪些分段拉取。

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// 可缓存的领域记录
///
/// 记录构造后不可变，按身份标识比较。
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// 身份标识类型
    type Id: Ord + Hash + Clone + Display + Send + Sync;

    /// 返回记录的身份标识
    fn id(&self) -> Self::Id;
}

/// 远程记录集合的命名分段
///
/// 分段集合在编译期固定。
pub trait Segment: Copy + Debug + Display + Send + Sync + 'static {
    /// 全部分段，按拉取顺序排列
    fn all() -> &'static [Self];

    /// 分段在远程接口中的名称
    fn as_str(&self) -> &'static str;
}
