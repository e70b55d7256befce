//! 回放调度器
//!
//! `Player` 持有轨迹存储、可视状态和待触发 tick 的句柄；
//! 每个 tick 是挂在 `Simulator` 上的 `Tick` 事件，暂停/重置时显式取消。

mod config;
mod error;
mod player;
mod world;

pub use config::{
    DEFAULT_SIZE, DEFAULT_SPEED_MS, MAX_SIZE, MAX_SPEED_MS, MIN_SIZE, MIN_SPEED_MS,
    MIN_TICK_MS, PlaybackConfig, VALUE_MAX, VALUE_MIN,
};
pub use error::PlaybackError;
pub use player::{PlayState, Player, StepReport};
pub use world::{PlayerWorld, Tick};
