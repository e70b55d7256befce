//! 轨迹记录器
//!
//! 持有生成器的工作副本，并负责把动作追加为事件。

use crate::trace::{Trace, TraceEvent, Value};

/// 工作副本 + 事件缓冲
#[derive(Debug)]
pub struct TraceRecorder {
    a: Vec<Value>,
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    pub fn new(values: &[Value]) -> Self {
        Self {
            a: values.to_vec(),
            events: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    pub fn get(&self, idx: usize) -> Value {
        self.a[idx]
    }

    /// 追加一个事件。越界下标是生成器的编程错误，直接 panic。
    pub fn emit(&mut self, ev: TraceEvent) {
        for idx in ev.indices() {
            assert!(
                idx < self.a.len(),
                "{} event references index {idx} outside 0..{}",
                ev.kind(),
                self.a.len()
            );
        }
        self.events.push(ev);
    }

    pub fn compare(&mut self, i: usize, j: usize) {
        self.emit(TraceEvent::Compare { i, j });
    }

    /// 发出 `swap`，在工作副本上交换，再发出交换后的快照
    pub fn swap(&mut self, i: usize, j: usize) {
        self.emit(TraceEvent::Swap { i, j });
        self.a.swap(i, j);
        self.snapshot();
    }

    /// 写入工作副本（不发事件）
    pub fn set(&mut self, idx: usize, value: Value) {
        self.a[idx] = value;
    }

    pub fn snapshot(&mut self) {
        let values = self.a.clone();
        self.events.push(TraceEvent::ArraySnapshot { values });
    }

    /// 追加终止事件，交出轨迹
    pub fn finish(mut self) -> Trace {
        self.events.push(TraceEvent::Done);
        Trace::new(self.a.len(), self.events)
    }
}
