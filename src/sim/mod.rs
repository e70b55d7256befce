//! 虚拟时钟与事件调度
//!
//! 回放调度器不直接依赖墙钟：每个 tick 都是挂在 `Simulator` 上的事件，
//! 由外部驱动推进时间。暂停/重置通过 `TimerId` 显式取消尚未触发的 tick。

// 子模块声明
mod event;
mod scheduled_event;
mod simulator;
mod time;
mod world;

// 重新导出公共接口
pub use event::Event;
pub use scheduled_event::{ScheduledEvent, TimerId};
pub use simulator::Simulator;
pub use time::SimTime;
pub use world::World;
