//! 表格原始数据类型
//!
//! - Cell: 单元格的无类型标量（文本、数字、布尔、缺失）
//! - RawSheet: 按行存储的原始工作表网格，不带任何结构信息

use serde::{Deserialize, Serialize};

static EMPTY_CELL: Cell = Cell::Empty;

/// 单元格值
///
/// 序列化为对应的JSON标量，缺失值为 `null`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Cell {
    /// 缺失值或空白文本
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(n) => n.is_nan(),
            Cell::Bool(_) => false,
        }
    }

    /// 显示用文本（去除首尾空白）
    ///
    /// 整数值的数字不带小数点，缺失值返回 `None`。
    pub fn display_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Cell::Number(n) if n.is_nan() => None,
            Cell::Number(n) => Some(format_number(*n)),
            Cell::Bool(b) => Some(b.to_string()),
        }
    }

    /// 尽力转换为数值，失败时返回 `None`
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Empty | Cell::Bool(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// 计数字段：无法解析或为负数时记为0
    pub fn as_count(&self) -> u64 {
        match self.as_f64() {
            Some(n) if n >= 0.0 => n.trunc() as u64,
            _ => 0,
        }
    }

    /// 缺失值规整为 `Cell::Empty`，其他原样保留
    pub fn normalized(&self) -> Cell {
        if self.is_missing() {
            Cell::Empty
        } else {
            self.clone()
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

/// 数字转显示文本，整数不带 `.0`
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// 原始工作表
///
/// 行可以长短不一，宽度取最长的一行。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSheet {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl RawSheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// 工作表名称
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// 行数
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// 列数（最长行）
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// 取单元格，越界时返回缺失值
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    /// 各列非空单元格数量
    pub fn non_empty_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.width()];
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                if !cell.is_missing() {
                    counts[col] += 1;
                }
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_is_missing() {
        assert!(Cell::Empty.is_missing());
        assert!(Cell::Text("   ".to_string()).is_missing());
        assert!(Cell::Number(f64::NAN).is_missing());
        assert!(!Cell::Number(0.0).is_missing());
        assert!(!Cell::from("-").is_missing());
    }

    #[test]
    fn test_cell_display_text() {
        assert_eq!(Cell::from(" 张三 ").display_text(), Some("张三".to_string()));
        assert_eq!(Cell::Number(15.0).display_text(), Some("15".to_string()));
        assert_eq!(Cell::Number(2.5).display_text(), Some("2.5".to_string()));
        assert_eq!(Cell::Empty.display_text(), None);
        assert_eq!(Cell::from("").display_text(), None);
    }

    #[test]
    fn test_cell_as_count() {
        assert_eq!(Cell::from("15").as_count(), 15);
        assert_eq!(Cell::Number(200.0).as_count(), 200);
        assert_eq!(Cell::Number(3.9).as_count(), 3);
        assert_eq!(Cell::from("abc").as_count(), 0);
        assert_eq!(Cell::from("-").as_count(), 0);
        assert_eq!(Cell::Number(-4.0).as_count(), 0);
        assert_eq!(Cell::Empty.as_count(), 0);
    }

    #[test]
    fn test_cell_serialize() {
        let cells = vec![
            Cell::Empty,
            Cell::Number(1.5),
            Cell::from("12.5%"),
            Cell::Bool(true),
        ];
        let json = serde_json::to_string(&cells).expect("序列化失败");
        assert_eq!(json, r#"[null,1.5,"12.5%",true]"#);
    }

    #[test]
    fn test_raw_sheet_shape() {
        let sheet = RawSheet::new(
            "测试",
            vec![
                vec![Cell::from("a")],
                vec![Cell::from("b"), Cell::Empty, Cell::Number(1.0)],
                vec![],
            ],
        );
        assert_eq!(sheet.height(), 3);
        assert_eq!(sheet.width(), 3);
        assert_eq!(sheet.cell(1, 2), &Cell::Number(1.0));
        assert_eq!(sheet.cell(0, 2), &Cell::Empty);
        assert_eq!(sheet.cell(9, 9), &Cell::Empty);
        assert_eq!(sheet.non_empty_counts(), vec![2, 0, 1]);
    }
}
