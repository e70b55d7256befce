use super::TraceGenerator;
use super::recorder::TraceRecorder;
use crate::trace::{Trace, TraceEvent, Value};

/// 插入排序：逐个选中元素，前驱比它大就右移一格
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl TraceGenerator for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn generate(&self, values: &[Value]) -> Trace {
        let mut rec = TraceRecorder::new(values);
        for i in 1..rec.len() {
            let key = rec.get(i);
            rec.emit(TraceEvent::Select { idx: i });
            // `slot` 是 key 的候选落点，即 j+1
            let mut slot = i;
            while slot > 0 && rec.get(slot - 1) > key {
                let j = slot - 1;
                rec.compare(j, slot);
                let shifted = rec.get(j);
                rec.set(slot, shifted);
                rec.emit(TraceEvent::Overwrite {
                    idx: slot,
                    value: shifted,
                });
                rec.snapshot();
                slot = j;
            }
            rec.set(slot, key);
            rec.emit(TraceEvent::Insert {
                idx: slot,
                value: key,
            });
            rec.snapshot();
        }
        rec.finish()
    }
}
