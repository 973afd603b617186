//! 时长文本解析
//!
//! 导出表中的时长是形如 `2天3小时15分` 的自由文本，
//! 排序前需要统一换算成分钟或小时。
//!
//! ## 两种解析策略
//! - 分钟: 只接受带后缀的文本，纯数字视为无效（返回0）
//! - 小时: 额外接受纯数字文本，按小时直接解释（可带小数）
//!
//! 两者都不会报错，任何解析失败都返回0。

use crate::types::Cell;
use lazy_static::lazy_static;
use regex::Regex;

/// 单位后缀及其对应的分钟数，必须按此降序出现
const UNIT_SUFFIXES: [(&str, i64); 3] = [("天", 24 * 60), ("小时", 60), ("分", 1)];

/// 缺失值标记
const PLACEHOLDER: &str = "-";

lazy_static! {
    static ref BARE_NUMBER_RE: Regex = Regex::new(r"^(?:\d+\.?\d*|\.\d+)$").unwrap();
}

/// 时长文本转分钟数
///
/// # Examples
/// ```
/// use flow_perf_common::parse_duration_minutes;
///
/// assert_eq!(parse_duration_minutes("2天3小时15分"), 3195);
/// assert_eq!(parse_duration_minutes("45分"), 45);
/// assert_eq!(parse_duration_minutes("45"), 0);
/// ```
pub fn parse_duration_minutes(text: &str) -> i64 {
    let text = text.trim();
    if is_blank(text) {
        return 0;
    }
    parse_suffixed(text).unwrap_or(0)
}

/// 时长文本转小时数
///
/// 纯数字文本（`"5"`, `"5.5"`）直接作为小时数。
///
/// # Examples
/// ```
/// use flow_perf_common::parse_duration_hours;
///
/// assert_eq!(parse_duration_hours("5"), 5.0);
/// assert_eq!(parse_duration_hours("2天3小时"), 51.0);
/// ```
pub fn parse_duration_hours(text: &str) -> f64 {
    let text = text.trim();
    if is_blank(text) {
        return 0.0;
    }
    if BARE_NUMBER_RE.is_match(text) {
        return text.parse::<f64>().unwrap_or(0.0);
    }
    parse_suffixed(text)
        .map(|minutes| minutes as f64 / 60.0)
        .unwrap_or(0.0)
}

/// 单元格时长（分钟）
pub fn cell_minutes(cell: &Cell) -> i64 {
    cell.display_text()
        .map(|text| parse_duration_minutes(&text))
        .unwrap_or(0)
}

/// 单元格时长（小时）
pub fn cell_hours(cell: &Cell) -> f64 {
    cell.display_text()
        .map(|text| parse_duration_hours(&text))
        .unwrap_or(0.0)
}

fn is_blank(text: &str) -> bool {
    text.is_empty() || text == PLACEHOLDER
}

/// 从左到右按后缀切分并累加分钟数
///
/// 没有任何后缀、段落不是整数、后缀顺序错误或 `分` 之后还有文本时返回 `None`。
/// `天` / `小时` 之后不带后缀的剩余文本被忽略，保留已累加的值。
fn parse_suffixed(text: &str) -> Option<i64> {
    let mut rest = text;
    let mut total: i64 = 0;
    let mut matched = false;

    for (suffix, minutes_per_unit) in UNIT_SUFFIXES {
        if let Some((segment, tail)) = rest.split_once(suffix) {
            let value: i64 = segment.trim().parse().ok()?;
            total = total.checked_add(value.checked_mul(minutes_per_unit)?)?;
            rest = tail;
            matched = true;

            if minutes_per_unit == 1 && !rest.trim().is_empty() {
                return None;
            }
        }
    }

    matched.then_some(total)
}
