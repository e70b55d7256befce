//! 可视状态
//!
//! 外部渲染器观察的值序列与逐下标高亮，只由回放调度器应用轨迹事件来修改。
//! 另附纯文本帧渲染和逐帧 JSON 记录（用于离线回放）。

mod frame;
mod highlight;
mod render;
mod state;

pub use frame::{Frame, FrameLog};
pub use highlight::{Highlight, SnapshotPolicy};
pub use render::render_frame;
pub use state::{ApplyOutcome, VisualState};
