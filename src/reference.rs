//! 基本信息工作簿
//!
//! 主要负责人名单和各业务分类的模板清单。

use crate::error::Result;
use crate::workbook::Workbook;
use flow_perf_common::{extract_name_list, CategoryIndex, SheetKind};
use tracing::debug;

/// 读取主要负责人名单
///
/// 第一列的非空单元格，去除首尾空白，保持原始顺序。
pub fn load_main_persons(workbook: &mut Workbook, sheet_name: &str) -> Result<Vec<String>> {
    let sheet = workbook.read_sheet(sheet_name)?;
    let names = extract_name_list(&sheet, SheetKind::MainPersons.schema());
    debug!(sheet = sheet_name, count = names.len(), "主要负责人已读取");
    Ok(names)
}

/// 构建分类索引
///
/// 按给定顺序读取各分类工作表。任一工作表读取失败即返回错误，不返回部分结果。
pub fn build_categories(workbook: &mut Workbook, sheet_names: &[String]) -> Result<CategoryIndex> {
    let schema = SheetKind::Category.schema();
    let mut index = CategoryIndex::new();

    for name in sheet_names {
        let sheet = workbook.read_sheet(name)?;
        let members = extract_name_list(&sheet, schema);
        debug!(category = %name, members = members.len(), "分类已读取");
        index.insert(name.clone(), members);
    }

    Ok(index)
}
