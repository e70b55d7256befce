use super::TraceGenerator;
use super::recorder::TraceRecorder;
use crate::trace::{Trace, TraceEvent, Value};

/// 相邻比较的冒泡排序，n-1 趟
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl TraceGenerator for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn generate(&self, values: &[Value]) -> Trace {
        let mut rec = TraceRecorder::new(values);
        let n = rec.len();
        for pass in 0..n.saturating_sub(1) {
            for j in 0..n - 1 - pass {
                rec.compare(j, j + 1);
                if rec.get(j) > rec.get(j + 1) {
                    rec.swap(j, j + 1);
                }
            }
            // 本趟结束后末尾 n-1-pass 处已就位
            rec.emit(TraceEvent::MarkSorted { idx: n - 1 - pass });
        }
        rec.finish()
    }
}
