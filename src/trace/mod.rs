//! 排序步骤轨迹
//!
//! 算法一次性运行完毕，把每个语义动作记录为 `TraceEvent`；
//! 回放侧只消费这份轨迹，不再接触算法本身。

mod event;
mod store;
mod sequence;

pub use event::TraceEvent;
pub use store::TraceStore;
pub use sequence::{Trace, TraceError};

/// 被排序的元素值
pub type Value = i64;
