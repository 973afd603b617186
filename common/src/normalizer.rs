//! 工作表规整
//!
//! 原始网格 → 类型化记录。
//!
//! ## 处理流程
//! 1. 按实际列数选择列名清单（不匹配则报错）
//! 2. 丢弃前导的标题行/列名行
//! 3. 丢弃主键为空或为合计标记的行
//! 4. 逐行转换为记录，保持原始顺序

use crate::error::Result;
use crate::schema::{is_total_marker, SheetKind, SheetSchema};
use crate::types::{Cell, RawSheet};

static MISSING: Cell = Cell::Empty;

/// 按列名访问的一行数据
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    columns: &'static [&'static str],
    cells: &'a [Cell],
}

impl<'a> RowView<'a> {
    pub fn new(columns: &'static [&'static str], cells: &'a [Cell]) -> Self {
        Self { columns, cells }
    }

    /// 取指定列的单元格，列不存在于当前结构或行过短时返回缺失值
    pub fn get(&self, column: &str) -> &'a Cell {
        self.columns
            .iter()
            .position(|c| *c == column)
            .and_then(|idx| self.cells.get(idx))
            .unwrap_or(&MISSING)
    }
}

/// 可由工作表行构造的记录
pub trait SheetRecord: Sized {
    /// 对应的工作表种类
    const KIND: SheetKind;

    /// 由主键（已去空白）和整行数据构造记录
    fn from_row(name: String, row: &RowView<'_>) -> Self;
}

/// 规整工作表为记录序列
///
/// # Arguments
/// * `sheet` - 原始工作表
///
/// # Returns
/// * `Ok(Vec<R>)` - 按原始顺序排列的记录
/// * `Err(Error::ShapeMismatch)` - 列数与已知结构不符
pub fn normalize<R: SheetRecord>(sheet: &RawSheet) -> Result<Vec<R>> {
    normalize_with(sheet, R::KIND.schema(), R::from_row)
}

/// 使用显式结构规整工作表
pub fn normalize_with<R, F>(sheet: &RawSheet, schema: &SheetSchema, build: F) -> Result<Vec<R>>
where
    F: Fn(String, &RowView<'_>) -> R,
{
    let columns = schema.resolve_columns(sheet.name(), sheet.width())?;

    let records = sheet
        .rows()
        .iter()
        .skip(schema.leading_rows)
        .filter_map(|cells| {
            let row = RowView::new(columns, cells);
            let name = row.get(schema.key_column).display_text()?;
            if is_total_marker(&name) {
                return None;
            }
            Some(build(name, &row))
        })
        .collect();

    Ok(records)
}

/// 取单列名单
///
/// 丢弃前导行后读取第一列，去除首尾空白，跳过空单元格。
/// 保留原始顺序和重复项。
pub fn extract_name_list(sheet: &RawSheet, schema: &SheetSchema) -> Vec<String> {
    sheet
        .rows()
        .iter()
        .skip(schema.leading_rows)
        .filter_map(|cells| cells.first().and_then(Cell::display_text))
        .collect()
}
