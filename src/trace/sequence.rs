//! 完整轨迹及其校验

use super::event::TraceEvent;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 轨迹不满足结构约束
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("trace is empty")]
    Empty,
    #[error("trace does not end with done")]
    MissingDone,
    #[error("done event at position {at} is not the last event")]
    DoneNotLast { at: usize },
    #[error("event {at} references index {idx}, input length is {len}")]
    IndexOutOfRange { at: usize, idx: usize, len: usize },
    #[error("snapshot at event {at} has {got} values, expected {len}")]
    SnapshotLength { at: usize, got: usize, len: usize },
}

/// 一次生成得到的有序事件序列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// 生成时输入序列的长度
    pub input_len: usize,
    pub events: Vec<TraceEvent>,
}

impl Trace {
    pub fn new(input_len: usize, events: Vec<TraceEvent>) -> Self {
        Self { input_len, events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, at: usize) -> Option<&TraceEvent> {
        self.events.get(at)
    }

    /// 检查：非空、`done` 恰好一次且在末尾、下标在 `[0, input_len)` 内、快照长度一致。
    pub fn validate(&self) -> Result<(), TraceError> {
        let last = self.events.len().checked_sub(1).ok_or(TraceError::Empty)?;
        let len = self.input_len;
        for (at, ev) in self.events.iter().enumerate() {
            if ev.is_done() && at != last {
                return Err(TraceError::DoneNotLast { at });
            }
            if let Some(&idx) = ev.indices().iter().find(|&&idx| idx >= len) {
                return Err(TraceError::IndexOutOfRange { at, idx, len });
            }
            if let TraceEvent::ArraySnapshot { values } = ev {
                if values.len() != len {
                    return Err(TraceError::SnapshotLength {
                        at,
                        got: values.len(),
                        len,
                    });
                }
            }
        }
        if !self.events[last].is_done() {
            return Err(TraceError::MissingDone);
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEvent;
    type IntoIter = std::slice::Iter<'a, TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
