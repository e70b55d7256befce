use crate::algo::Algorithm;
use crate::sim::SimTime;
use crate::viz::SnapshotPolicy;
use serde::{Deserialize, Serialize};

use super::error::PlaybackError;

pub const DEFAULT_SIZE: usize = 12;
pub const DEFAULT_SPEED_MS: u64 = 300;

/// 控件的取值范围；由调用方负责限制，核心只做最低限度的钳制
pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 24;
pub const MIN_SPEED_MS: u64 = 20;
pub const MAX_SPEED_MS: u64 = 1000;

/// 两个 tick 的最小间隔（毫秒）
pub const MIN_TICK_MS: u64 = 10;

/// 随机值范围（闭区间）
pub const VALUE_MIN: i64 = 10;
pub const VALUE_MAX: i64 = 99;

/// 回放配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub size: usize,
    pub speed_ms: u64,
    pub algorithm: Algorithm,
    /// 随机数种子；为空时取系统熵
    pub seed: Option<u64>,
    pub snapshot_policy: SnapshotPolicy,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            speed_ms: DEFAULT_SPEED_MS,
            algorithm: Algorithm::default(),
            seed: None,
            snapshot_policy: SnapshotPolicy::default(),
        }
    }
}

impl PlaybackConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, PlaybackError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 实际生成的元素个数，至少为 1
    pub fn effective_size(&self) -> usize {
        self.size.max(1)
    }

    /// tick 间隔，不小于 `MIN_TICK_MS`
    pub fn interval(&self) -> SimTime {
        SimTime::from_millis(self.speed_ms.max(MIN_TICK_MS))
    }
}
