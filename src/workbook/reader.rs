//! 通过 calamine 读取工作簿
//!
//! `.xls` / `.xlsx` 均通过 `open_workbook_auto` 打开，
//! 工作表转换为 [`RawSheet`]，单元格保持在原来的绝对位置。

use crate::error::{PerfReportError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use flow_perf_common::{Cell, RawSheet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 已打开的工作簿
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    /// 打开工作簿
    ///
    /// 文件不存在时返回 `FileNotFound`，格式无法识别时返回 `Workbook`。
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PerfReportError::FileNotFound(path.display().to_string()));
        }

        let sheets = open_workbook_auto(path).map_err(|e| {
            PerfReportError::Workbook(format!("{}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "工作簿已打开");
        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 工作表名称（按工作簿中的顺序）
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// 读取指定工作表
    pub fn read_sheet(&mut self, name: &str) -> Result<RawSheet> {
        if !self.sheet_names().iter().any(|n| n == name) {
            return Err(PerfReportError::SheetNotFound {
                workbook: self.path.display().to_string(),
                sheet: name.to_string(),
            });
        }

        let range = self.sheets.worksheet_range(name).map_err(|e| {
            PerfReportError::Workbook(format!("{} / {}: {}", self.path.display(), name, e))
        })?;

        let sheet = range_to_sheet(name, &range);
        debug!(
            sheet = name,
            rows = sheet.height(),
            cols = sheet.width(),
            "工作表已读取"
        );
        Ok(sheet)
    }

    /// 读取第一个工作表
    pub fn read_first_sheet(&mut self) -> Result<RawSheet> {
        let name = self.sheet_names().into_iter().next().ok_or_else(|| {
            PerfReportError::Workbook(format!("{}: 工作簿中没有工作表", self.path.display()))
        })?;
        self.read_sheet(&name)
    }
}

/// calamine 的 Range 转换为 RawSheet
///
/// Range只覆盖已使用区域，左上角不在A1时补齐前导空行/空列。
pub fn range_to_sheet(name: &str, range: &Range<Data>) -> RawSheet {
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(data_to_cell));
        rows.push(cells);
    }

    RawSheet::new(name, rows)
}

/// 单元格值转换
///
/// 日期时间保留为Excel序列值，错误单元格视为缺失。
pub fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
