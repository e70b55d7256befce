//! 世界 trait
//!
//! 定义事件作用的状态容器接口。

use super::simulator::Simulator;
use std::any::Any;

/// 事件作用的世界：由业务层实现（例如回放调度器 + 可视状态）。
pub trait World: Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn on_tick(&mut self, _sim: &mut Simulator) {}
}
