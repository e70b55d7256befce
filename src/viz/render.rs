//! 纯文本帧
//!
//! 每个下标一行：下标、值、按值长度的条形、高亮标签。

use super::highlight::Highlight;
use crate::trace::Value;
use std::collections::BTreeMap;
use std::fmt::Write;

const BAR_CHAR: char = '█';

pub fn render_frame(values: &[Value], highlights: &BTreeMap<usize, Highlight>) -> String {
    let mut out = String::new();
    for (idx, &v) in values.iter().enumerate() {
        let bar: String = std::iter::repeat_n(BAR_CHAR, (v.max(0) as usize).div_ceil(4)).collect();
        let tag = highlights.get(&idx).map_or("", |h| h.as_str());
        // 写入 String 不会失败
        let _ = writeln!(out, "{idx:>3} {v:>4} {bar:<25} {tag}");
    }
    out
}
