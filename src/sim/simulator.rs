//! 仿真器
//!
//! 定义事件驱动仿真器，维护当前时间、事件队列与未触发事件集合。

use super::event::Event;
use super::scheduled_event::{ScheduledEvent, TimerId};
use super::time::SimTime;
use super::world::World;
use std::collections::{BinaryHeap, HashSet};
use tracing::{debug, info, trace};

/// 事件驱动仿真器：维护当前时间与事件队列。
///
/// 被取消的事件仍留在堆中，出堆时直接丢弃，不推进时间。
#[derive(Default)]
pub struct Simulator {
    now: SimTime,
    next_seq: u64,
    q: BinaryHeap<ScheduledEvent>,
    live: HashSet<u64>,
}

impl Simulator {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 尚未执行且未被取消的事件数
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    /// 句柄对应的事件是否仍会执行
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.live.contains(&id.0)
    }

    /// 调度事件在指定时间执行，返回可用于取消的句柄
    #[tracing::instrument(skip(self, ev), fields(event_type = std::any::type_name::<E>(), schedule_at = ?at))]
    pub fn schedule<E: Event>(&mut self, at: SimTime, ev: E) -> TimerId {
        let seq = self.next_seq;
        trace!(now = ?self.now, seq, "调度事件");

        self.next_seq = self.next_seq.wrapping_add(1);
        self.q.push(ScheduledEvent {
            at,
            seq,
            ev: Box::new(ev),
        });
        self.live.insert(seq);

        debug!(queue_size = self.q.len(), "事件已加入队列");
        TimerId(seq)
    }

    /// 取消尚未执行的事件。已执行或已取消时返回 false。
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let removed = self.live.remove(&id.0);
        debug!(seq = id.0, removed, "取消事件");
        removed
    }

    /// 弹出下一个未被取消的事件（跳过已取消的条目）
    fn pop_live(&mut self, until: Option<SimTime>) -> Option<ScheduledEvent> {
        while let Some(top) = self.q.peek() {
            if until.is_some_and(|u| top.at > u) {
                return None;
            }
            let item = self.q.pop()?;
            if self.live.remove(&item.seq) {
                return Some(item);
            }
            trace!(seq = item.seq, "丢弃已取消事件");
        }
        None
    }

    /// 执行下一个事件。队列为空时返回 false。
    pub fn step(&mut self, world: &mut dyn World) -> bool {
        match self.pop_live(None) {
            Some(item) => {
                self.now = item.at;
                item.ev.execute(self, world);
                world.on_tick(self);
                true
            }
            None => false,
        }
    }

    /// 运行直到事件队列为空或到达 `until`。
    pub fn run_until(&mut self, until: SimTime, world: &mut dyn World) {
        while let Some(item) = self.pop_live(Some(until)) {
            self.now = item.at;
            item.ev.execute(self, world);
            world.on_tick(self);
        }
        self.now = self.now.max(until);
    }

    /// 运行所有事件直到队列为空。
    #[tracing::instrument(skip(self, world))]
    pub fn run(&mut self, world: &mut dyn World) {
        info!("▶️  开始运行");
        debug!(now = ?self.now, queue_size = self.q.len(), "初始状态");

        let mut event_count = 0;
        while let Some(item) = self.pop_live(None) {
            event_count += 1;
            self.now = item.at;

            debug!(
                event_num = event_count,
                now = ?self.now,
                seq = item.seq,
                remaining_queue = self.q.len(),
                "执行事件"
            );

            item.ev.execute(self, world);
            world.on_tick(self);
        }

        info!(
            total_events = event_count,
            final_time = ?self.now,
            "✅ 运行完成"
        );
    }
}
