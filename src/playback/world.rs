//! 回放世界与 tick 事件

use super::player::{Player, StepReport};
use crate::sim::{Event, Simulator, World};
use crate::viz::FrameLog;
use std::any::Any;

/// 持有回放调度器的世界；开启 `frames` 时在 `on_tick` 中逐 tick 记录帧
pub struct PlayerWorld {
    pub player: Player,
    pub frames: Option<FrameLog>,
    last_step: Option<StepReport>,
}

impl PlayerWorld {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            frames: None,
            last_step: None,
        }
    }

    pub fn with_frames(mut self) -> Self {
        self.frames = Some(FrameLog::default());
        self
    }
}

impl World for PlayerWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn on_tick(&mut self, sim: &mut Simulator) {
        let Some(step) = self.last_step.take() else {
            return;
        };
        if let Some(log) = self.frames.as_mut() {
            log.record(
                sim.now().as_millis(),
                step.cursor,
                &step.event,
                self.player.visual(),
            );
        }
    }
}

/// 回放推进一步
#[derive(Debug, Clone, Copy)]
pub struct Tick;

impl Event for Tick {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let w = world
            .as_any_mut()
            .downcast_mut::<PlayerWorld>()
            .expect("world must be PlayerWorld");

        w.last_step = w.player.tick(sim);
    }
}
