//! 轨迹事件
//!
//! 一个事件对应一次语义动作，载荷形状随种类而定。

use super::Value;
use serde::{Deserialize, Serialize};

/// 轨迹中的一个不可变事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    /// 比较两个下标，不修改数据
    Compare { i: usize, j: usize },
    /// 交换两个下标上的值
    Swap { i: usize, j: usize },
    /// 把 `idx` 处的值写成 `value`（插入排序的右移）
    Overwrite { idx: usize, value: Value },
    /// 当前待插入的元素
    Select { idx: usize },
    /// 被右移元素的最终落点
    Insert { idx: usize, value: Value },
    /// 快速排序的枢轴
    Pivot { idx: usize },
    /// 该下标已到达最终位置
    MarkSorted { idx: usize },
    /// 用完整序列替换可视值
    ArraySnapshot { values: Vec<Value> },
    /// 终止事件，每条轨迹恰好一个且位于末尾
    Done,
}

impl TraceEvent {
    /// 事件引用到的所有下标
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            TraceEvent::Compare { i, j } | TraceEvent::Swap { i, j } => vec![i, j],
            TraceEvent::Overwrite { idx, .. }
            | TraceEvent::Select { idx }
            | TraceEvent::Insert { idx, .. }
            | TraceEvent::Pivot { idx }
            | TraceEvent::MarkSorted { idx } => vec![idx],
            TraceEvent::ArraySnapshot { .. } | TraceEvent::Done => Vec::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TraceEvent::Done)
    }

    /// 事件种类名（与 JSON 中的 `kind` 一致）
    pub fn kind(&self) -> &'static str {
        match self {
            TraceEvent::Compare { .. } => "compare",
            TraceEvent::Swap { .. } => "swap",
            TraceEvent::Overwrite { .. } => "overwrite",
            TraceEvent::Select { .. } => "select",
            TraceEvent::Insert { .. } => "insert",
            TraceEvent::Pivot { .. } => "pivot",
            TraceEvent::MarkSorted { .. } => "mark_sorted",
            TraceEvent::ArraySnapshot { .. } => "array_snapshot",
            TraceEvent::Done => "done",
        }
    }
}
