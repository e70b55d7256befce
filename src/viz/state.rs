//! 事件到可视状态的映射

use super::highlight::{Highlight, SnapshotPolicy};
use crate::trace::{TraceEvent, Value};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// 应用一个事件后的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Continue,
    /// 应用的是 `done`，回放应停止
    Finished,
}

/// 值序列 + 高亮
///
/// 瞬时高亮与就位标记分开存放；对外合并为一个映射，瞬时高亮优先。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualState {
    values: Vec<Value>,
    transient: BTreeMap<usize, Highlight>,
    sorted: BTreeSet<usize>,
    policy: SnapshotPolicy,
}

impl VisualState {
    pub fn new(values: Vec<Value>, policy: SnapshotPolicy) -> Self {
        Self {
            values,
            transient: BTreeMap::new(),
            sorted: BTreeSet::new(),
            policy,
        }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn policy(&self) -> SnapshotPolicy {
        self.policy
    }

    /// 当前高亮映射；不在映射中的下标没有高亮
    pub fn highlights(&self) -> BTreeMap<usize, Highlight> {
        let mut out: BTreeMap<usize, Highlight> =
            self.sorted.iter().map(|&i| (i, Highlight::Sorted)).collect();
        out.extend(self.transient.iter().map(|(&i, &h)| (i, h)));
        out
    }

    pub fn highlight(&self, idx: usize) -> Option<Highlight> {
        self.transient
            .get(&idx)
            .copied()
            .or_else(|| self.sorted.contains(&idx).then_some(Highlight::Sorted))
    }

    /// 替换全部值并清空高亮
    pub fn reset(&mut self, values: Vec<Value>) {
        self.values = values;
        self.clear_highlights();
    }

    pub fn clear_highlights(&mut self) {
        self.transient.clear();
        self.sorted.clear();
    }

    /// 丢掉上一个事件的高亮，按策略决定是否保留就位标记
    fn replace_highlights(&mut self, marks: &[(usize, Highlight)]) {
        self.transient.clear();
        if self.policy == SnapshotPolicy::ClearAll {
            self.sorted.clear();
        }
        self.transient.extend(marks.iter().copied());
    }

    /// 应用一个轨迹事件
    pub fn apply(&mut self, ev: &TraceEvent) -> ApplyOutcome {
        trace!(kind = ev.kind(), "应用事件");
        match ev {
            TraceEvent::Compare { i, j } => {
                self.replace_highlights(&[(*i, Highlight::Compare), (*j, Highlight::Compare)]);
            }
            TraceEvent::Swap { i, j } => {
                self.values.swap(*i, *j);
                self.replace_highlights(&[(*i, Highlight::Swap), (*j, Highlight::Swap)]);
            }
            TraceEvent::ArraySnapshot { values } => {
                self.values.clone_from(values);
                self.replace_highlights(&[]);
            }
            TraceEvent::Overwrite { idx, value } => {
                self.values[*idx] = *value;
                self.replace_highlights(&[(*idx, Highlight::Overwrite)]);
            }
            TraceEvent::Select { idx } => self.replace_highlights(&[(*idx, Highlight::Select)]),
            TraceEvent::Pivot { idx } => self.replace_highlights(&[(*idx, Highlight::Pivot)]),
            // 值已由之前的右移和快照写好
            TraceEvent::Insert { idx, .. } => {
                self.replace_highlights(&[(*idx, Highlight::Insert)]);
            }
            TraceEvent::MarkSorted { idx } => {
                self.transient.remove(idx);
                self.sorted.insert(*idx);
            }
            TraceEvent::Done => {
                self.clear_highlights();
                return ApplyOutcome::Finished;
            }
        }
        ApplyOutcome::Continue
    }

    /// 从当前状态依次应用整条轨迹（不经过调度器）
    pub fn apply_all<'a, I>(&mut self, events: I) -> usize
    where
        I: IntoIterator<Item = &'a TraceEvent>,
    {
        let mut applied = 0;
        for ev in events {
            applied += 1;
            if self.apply(ev) == ApplyOutcome::Finished {
                break;
            }
        }
        applied
    }
}
