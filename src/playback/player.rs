//! 回放状态机
//!
//! 只有两个状态：`Idle`（初始、也是两次运行之间的状态）和 `Running`。
//! `play()` 总是从当前显示的值重新生成轨迹，暂停后再播放并不是断点续播。

use super::config::{PlaybackConfig, VALUE_MAX, VALUE_MIN};
use super::error::PlaybackError;
use super::world::Tick;
use crate::algo::Algorithm;
use crate::sim::{SimTime, Simulator, TimerId};
use crate::trace::{Trace, TraceEvent, TraceStore, Value};
use crate::viz::{ApplyOutcome, Highlight, VisualState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Idle,
    Running,
}

/// 一个 tick 实际应用的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// 应用后游标位置
    pub cursor: usize,
    pub event: TraceEvent,
    pub outcome: ApplyOutcome,
}

/// 回放调度器
pub struct Player {
    config: PlaybackConfig,
    visual: VisualState,
    store: TraceStore,
    state: PlayState,
    pending: Option<TimerId>,
    rng: StdRng,
    applied: u64,
}

impl Player {
    /// 按配置生成随机初始值
    pub fn new(config: PlaybackConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let values = random_values(&mut rng, config.effective_size());
        let visual = VisualState::new(values, config.snapshot_policy);
        Self {
            config,
            visual,
            store: TraceStore::default(),
            state: PlayState::Idle,
            pending: None,
            rng,
            applied: 0,
        }
    }

    /// 以给定的值作为初始可视状态
    pub fn with_values(config: PlaybackConfig, values: Vec<Value>) -> Self {
        let mut player = Self::new(config);
        player.visual.reset(values);
        player
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    pub fn values(&self) -> &[Value] {
        self.visual.values()
    }

    pub fn highlights(&self) -> BTreeMap<usize, Highlight> {
        self.visual.highlights()
    }

    pub fn store(&self) -> &TraceStore {
        &self.store
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    /// 尚未触发的 tick
    pub fn pending_tick(&self) -> Option<TimerId> {
        self.pending
    }

    /// 自上次重置以来应用过的事件数
    pub fn applied(&self) -> u64 {
        self.applied
    }

    fn ensure_idle(&self, op: &'static str) -> Result<(), PlaybackError> {
        if self.is_running() {
            warn!(op, "rejected while running");
            return Err(PlaybackError::Busy { op });
        }
        Ok(())
    }

    /// 改变元素个数并重新生成随机值
    pub fn set_size(&mut self, size: usize) -> Result<(), PlaybackError> {
        self.ensure_idle("change size")?;
        self.config.size = size;
        let values = random_values(&mut self.rng, self.config.effective_size());
        self.visual.reset(values);
        self.store.clear();
        debug!(size = self.config.effective_size(), "size changed");
        Ok(())
    }

    /// 运行中也可调整；已排队的 tick 不受影响，从下一个 tick 起生效
    pub fn set_speed(&mut self, speed_ms: u64) {
        self.config.speed_ms = speed_ms;
        debug!(interval = ?self.config.interval(), "speed changed");
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), PlaybackError> {
        self.ensure_idle("change algorithm")?;
        self.config.algorithm = algorithm;
        self.store.clear();
        debug!(%algorithm, "algorithm changed");
        Ok(())
    }

    /// 按名称选择算法（`bubble` / `insertion` / `quick`）
    pub fn set_algorithm_name(&mut self, name: &str) -> Result<(), PlaybackError> {
        let algorithm: Algorithm = name.parse()?;
        self.set_algorithm(algorithm)
    }

    /// 直接替换显示的值（配置中的 size 不变，重置时仍按 size 生成）
    pub fn set_values(&mut self, values: Vec<Value>) -> Result<(), PlaybackError> {
        self.ensure_idle("replace values")?;
        self.visual.reset(values);
        self.store.clear();
        Ok(())
    }

    /// 从当前显示的值生成新轨迹并开始回放；运行中调用无效果。
    ///
    /// 返回是否真正开始了一次新的运行。
    #[tracing::instrument(skip(self, sim), fields(algorithm = %self.config.algorithm))]
    pub fn play(&mut self, sim: &mut Simulator) -> bool {
        if self.is_running() {
            debug!(cursor = self.store.cursor(), "already running");
            return false;
        }
        let trace = self.config.algorithm.generate(self.visual.values());
        info!(events = trace.len(), values = self.visual.len(), "▶️  开始回放");
        self.start(trace, sim);
        true
    }

    /// 回放一条外部提供的轨迹（例如从 JSON 读入），须先通过校验
    pub fn play_trace(&mut self, trace: Trace, sim: &mut Simulator) -> Result<(), PlaybackError> {
        self.ensure_idle("load a trace")?;
        trace.validate()?;
        if trace.input_len != self.visual.len() {
            return Err(PlaybackError::LengthMismatch {
                trace: trace.input_len,
                shown: self.visual.len(),
            });
        }
        info!(events = trace.len(), "▶️  回放外部轨迹");
        self.start(trace, sim);
        Ok(())
    }

    fn start(&mut self, trace: Trace, sim: &mut Simulator) {
        self.cancel_pending(sim);
        self.store.load(trace);
        self.state = PlayState::Running;
        let now = sim.now();
        self.schedule_tick(sim, now);
    }

    /// 停止并取消未触发的 tick；保留轨迹与游标
    #[tracing::instrument(skip(self, sim))]
    pub fn pause(&mut self, sim: &mut Simulator) {
        if self.is_running() {
            info!(cursor = self.store.cursor(), "⏸️  暂停");
        }
        self.state = PlayState::Idle;
        self.cancel_pending(sim);
    }

    /// 暂停，按配置的 size 重新随机，丢弃轨迹并清空所有高亮
    #[tracing::instrument(skip(self, sim))]
    pub fn reset(&mut self, sim: &mut Simulator) {
        self.pause(sim);
        let values = random_values(&mut self.rng, self.config.effective_size());
        self.visual.reset(values);
        self.store.clear();
        self.applied = 0;
        info!(size = self.visual.len(), "🔄 重置");
    }

    /// 执行一个 tick：取下一个事件应用到可视状态，仍在运行则排下一个 tick。
    ///
    /// 由 `Tick` 事件触发时挂起句柄已出队，取消无效果；直接调用时取消排队中的
    /// tick，保证任何时刻最多一个未触发的 tick。
    pub fn tick(&mut self, sim: &mut Simulator) -> Option<StepReport> {
        self.cancel_pending(sim);
        if !self.is_running() {
            debug!("tick while idle, ignored");
            return None;
        }
        let Some(event) = self.store.next().cloned() else {
            self.state = PlayState::Idle;
            debug!("trace exhausted");
            return None;
        };
        let outcome = self.visual.apply(&event);
        let report = StepReport {
            cursor: self.store.cursor(),
            event,
            outcome,
        };
        self.applied += 1;
        debug!(cursor = report.cursor, kind = report.event.kind(), now = ?sim.now(), "tick");

        if outcome == ApplyOutcome::Finished {
            self.state = PlayState::Idle;
            info!(applied = self.applied, now = ?sim.now(), "✅ 回放完成");
        }
        if self.is_running() {
            let at = sim.now().saturating_add(self.config.interval());
            self.schedule_tick(sim, at);
        }
        Some(report)
    }

    fn schedule_tick(&mut self, sim: &mut Simulator, at: SimTime) {
        self.pending = Some(sim.schedule(at, Tick));
    }

    fn cancel_pending(&mut self, sim: &mut Simulator) {
        if let Some(id) = self.pending.take() {
            sim.cancel(id);
        }
    }
}

fn random_values(rng: &mut StdRng, n: usize) -> Vec<Value> {
    (0..n).map(|_| rng.gen_range(VALUE_MIN..=VALUE_MAX)).collect()
}
