use super::TraceGenerator;
use super::recorder::TraceRecorder;
use crate::trace::{Trace, TraceEvent, Value};

/// Lomuto 划分的递归快速排序，先左后右
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl TraceGenerator for QuickSort {
    fn name(&self) -> &'static str {
        "quick"
    }

    fn generate(&self, values: &[Value]) -> Trace {
        let mut rec = TraceRecorder::new(values);
        if !rec.is_empty() {
            let hi = rec.len() - 1;
            sort_range(&mut rec, 0, hi);
        }
        rec.finish()
    }
}

/// 对闭区间 `[lo, hi]` 排序；长度不超过 1 时不发任何事件
fn sort_range(rec: &mut TraceRecorder, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }
    let p = partition(rec, lo, hi);
    rec.emit(TraceEvent::MarkSorted { idx: p });
    if p > lo {
        sort_range(rec, lo, p - 1);
    }
    sort_range(rec, p + 1, hi);
}

fn partition(rec: &mut TraceRecorder, lo: usize, hi: usize) -> usize {
    let pivot = rec.get(hi);
    let mut i = lo;
    rec.emit(TraceEvent::Pivot { idx: hi });
    for j in lo..hi {
        rec.compare(j, hi);
        if rec.get(j) < pivot {
            rec.swap(i, j);
            i += 1;
        }
    }
    rec.swap(i, hi);
    i
}
