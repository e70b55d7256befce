//! 排序算法轨迹生成器
//!
//! 每个生成器在输入的私有副本上完整运行一次排序，只产出轨迹，不改动输入。
//! 新的比较排序只需实现 `TraceGenerator`。

mod bubble;
mod insertion;
mod quick;
mod recorder;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use quick::QuickSort;
pub use recorder::TraceRecorder;

use crate::trace::{Trace, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 由输入序列生成轨迹。实现必须是纯函数：同一输入得到同一轨迹。
pub trait TraceGenerator {
    fn name(&self) -> &'static str;
    fn generate(&self, values: &[Value]) -> Trace;
}

/// 可选的排序算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Quick];

    pub fn generator(self) -> &'static dyn TraceGenerator {
        match self {
            Algorithm::Bubble => &BubbleSort,
            Algorithm::Insertion => &InsertionSort,
            Algorithm::Quick => &QuickSort,
        }
    }

    pub fn generate(self, values: &[Value]) -> Trace {
        self.generator().generate(values)
    }

    pub fn as_str(self) -> &'static str {
        self.generator().name()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{0}` (expected bubble, insertion or quick)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == name)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
