use super::highlight::Highlight;
use super::state::VisualState;
use crate::trace::{TraceEvent, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 一个可回放的帧（JSON）：应用某个事件之后的可视状态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// 时钟时间（毫秒）
    pub t_ms: u64,
    /// 应用该事件后的游标
    pub cursor: usize,
    pub event: TraceEvent,
    pub values: Vec<Value>,
    pub highlights: BTreeMap<usize, Highlight>,
}

/// 一个简单的帧收集器（存内存，运行结束写 JSON 文件）
#[derive(Debug, Default)]
pub struct FrameLog {
    pub frames: Vec<Frame>,
}

impl FrameLog {
    pub fn record(&mut self, t_ms: u64, cursor: usize, event: &TraceEvent, state: &VisualState) {
        self.frames.push(Frame {
            t_ms,
            cursor,
            event: event.clone(),
            values: state.values().to_vec(),
            highlights: state.highlights(),
        });
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
