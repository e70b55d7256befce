//! 轨迹存储
//!
//! 持有当前轨迹和一个只前进的游标。

use super::event::TraceEvent;
use super::sequence::Trace;
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct TraceStore {
    trace: Option<Trace>,
    cursor: usize,
}

impl TraceStore {
    /// 替换轨迹并把游标归零
    pub fn load(&mut self, trace: Trace) {
        debug!(events = trace.len(), input_len = trace.input_len, "加载轨迹");
        self.trace = Some(trace);
        self.cursor = 0;
    }

    /// 丢弃轨迹，游标归零
    pub fn clear(&mut self) {
        self.trace = None;
        self.cursor = 0;
    }

    /// 取出游标处的事件并前进；耗尽时返回 `None`。
    ///
    /// 耗尽后继续调用属于调用方错误，须先 `load`。
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&TraceEvent> {
        let Some(trace) = self.trace.as_ref() else {
            warn!("next() without a loaded trace");
            return None;
        };
        if self.cursor >= trace.len() {
            warn!(cursor = self.cursor, "next() on exhausted trace");
            return None;
        }
        let at = self.cursor;
        self.cursor += 1;
        trace.get(at)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.len()
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }
}
