use serde::{Deserialize, Serialize};
use std::fmt;

/// 某个下标当前被强调的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Compare,
    Swap,
    Overwrite,
    Insert,
    Select,
    Pivot,
    Sorted,
}

impl Highlight {
    pub fn as_str(self) -> &'static str {
        match self {
            Highlight::Compare => "compare",
            Highlight::Swap => "swap",
            Highlight::Overwrite => "overwrite",
            Highlight::Insert => "insert",
            Highlight::Select => "select",
            Highlight::Pivot => "pivot",
            Highlight::Sorted => "sorted",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 非 `mark_sorted` 事件替换高亮时，已就位标记如何处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotPolicy {
    /// 一并清除。已知缺陷：就位标记会在下一个快照或高亮替换时消失
    #[default]
    ClearAll,
    /// 保留就位标记，直到 `done` 或重置
    KeepSorted,
}
