//! 工作表结构定义
//!
//! 每种已知工作表对应一条声明式结构：需要丢弃的前导行数、
//! 按位置命名的列清单，以及实际观察到的备用列清单。
//! 列数与任何一份清单都不符时视为结构错误，不做猜测。

use crate::error::{Error, Result};

pub const TEMPLATE_NAME: &str = "模板名称";
pub const INITIATED: &str = "发起流程数";
pub const MONTH_ON_MONTH: &str = "环比";
pub const YEAR_ON_YEAR: &str = "同比";
pub const COMPLETED: &str = "完成流程数";
pub const COMPLETED_MONTH_ON_MONTH: &str = "完成环比";
pub const AVG_RUN_TIME: &str = "平均运行时长";
pub const RUN_TIME_MONTH_ON_MONTH: &str = "运行时长环比";
pub const OVERDUE_CLOSE_RATIO: &str = "超期结束比例";
pub const AVG_OVERDUE_TIME: &str = "平均超期时长";
pub const UNFINISHED: &str = "未结束流程数";
pub const OVERDUE_UNFINISHED: &str = "超期未结束流程数";
pub const REMARK: &str = "备注";

pub const PERSON_NAME: &str = "人员名称";
pub const DEPARTMENT: &str = "部门名称";
pub const UNIT: &str = "单位名称";
pub const PROCESSED: &str = "处理数";
pub const AVG_PROCESSING_TIME: &str = "平均处理时长";
pub const OVERDUE_PROCESSED: &str = "超期处理数";
pub const OVERDUE_PROCESSED_RATIO: &str = "超期处理比例";
pub const AVG_OVERDUE_TIME_2: &str = "平均超期时长2";
pub const UNPROCESSED: &str = "未处理流程数";
pub const OVERDUE_UNPROCESSED: &str = "超期未处理流程数";

/// 合计行标记
pub const TOTAL_ROW_MARKERS: &[&str] = &["合计", "总计"];

const PROCESS_COLUMNS: &[&str] = &[
    TEMPLATE_NAME,
    INITIATED,
    MONTH_ON_MONTH,
    YEAR_ON_YEAR,
    COMPLETED,
    COMPLETED_MONTH_ON_MONTH,
    AVG_RUN_TIME,
    RUN_TIME_MONTH_ON_MONTH,
    OVERDUE_CLOSE_RATIO,
    AVG_OVERDUE_TIME,
    UNFINISHED,
    OVERDUE_UNFINISHED,
    REMARK,
];

const PERSON_COLUMNS: &[&str] = &[
    PERSON_NAME,
    DEPARTMENT,
    UNIT,
    PROCESSED,
    AVG_PROCESSING_TIME,
    OVERDUE_PROCESSED,
    OVERDUE_PROCESSED_RATIO,
    AVG_OVERDUE_TIME,
    AVG_OVERDUE_TIME_2,
    UNPROCESSED,
    OVERDUE_UNPROCESSED,
    REMARK,
];

const MAIN_PERSON_COLUMNS: &[&str] = &[PERSON_NAME];

const CATEGORY_COLUMNS: &[&str] = &[TEMPLATE_NAME];

/// 旧版导出：没有第二个超期时长列和备注列
const PERSON_COLUMNS_COMPACT: &[&str] = &[
    PERSON_NAME,
    DEPARTMENT,
    UNIT,
    PROCESSED,
    AVG_PROCESSING_TIME,
    OVERDUE_PROCESSED,
    OVERDUE_PROCESSED_RATIO,
    AVG_OVERDUE_TIME,
    UNPROCESSED,
    OVERDUE_UNPROCESSED,
];

/// 已知的工作表种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKind {
    /// 流程效率明细
    ProcessEfficiency,
    /// 人员效率明细
    PersonEfficiency,
    /// 主要负责人名单
    MainPersons,
    /// 业务分类流程清单
    Category,
}

impl std::fmt::Display for SheetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetKind::ProcessEfficiency => write!(f, "流程效率明细"),
            SheetKind::PersonEfficiency => write!(f, "人员效率明细"),
            SheetKind::MainPersons => write!(f, "主要负责人"),
            SheetKind::Category => write!(f, "流程分类"),
        }
    }
}

/// 列布局
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// 按位置命名的列，列数必须与主清单或某个备用清单一致
    Named {
        primary: &'static [&'static str],
        fallbacks: &'static [&'static [&'static str]],
    },
    /// 只取第一列，忽略其余列
    FirstColumn,
}

/// 单个工作表种类的结构
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSchema {
    pub kind: SheetKind,
    /// 数据之前需要丢弃的行数（标题行、列名行）
    pub leading_rows: usize,
    pub layout: ColumnLayout,
    /// 主键列，为空或为合计标记的行会被丢弃
    pub key_column: &'static str,
}

const PROCESS_SCHEMA: SheetSchema = SheetSchema {
    kind: SheetKind::ProcessEfficiency,
    // 列名行 + 两行标题
    leading_rows: 3,
    layout: ColumnLayout::Named {
        primary: PROCESS_COLUMNS,
        fallbacks: &[],
    },
    key_column: TEMPLATE_NAME,
};

const PERSON_SCHEMA: SheetSchema = SheetSchema {
    kind: SheetKind::PersonEfficiency,
    leading_rows: 2,
    layout: ColumnLayout::Named {
        primary: PERSON_COLUMNS,
        fallbacks: &[PERSON_COLUMNS_COMPACT],
    },
    key_column: PERSON_NAME,
};

const MAIN_PERSONS_SCHEMA: SheetSchema = SheetSchema {
    kind: SheetKind::MainPersons,
    leading_rows: 0,
    layout: ColumnLayout::FirstColumn,
    key_column: PERSON_NAME,
};

const CATEGORY_SCHEMA: SheetSchema = SheetSchema {
    kind: SheetKind::Category,
    // 第一行是列名
    leading_rows: 1,
    layout: ColumnLayout::FirstColumn,
    key_column: TEMPLATE_NAME,
};

impl SheetKind {
    /// 对应的结构定义
    pub fn schema(self) -> &'static SheetSchema {
        match self {
            SheetKind::ProcessEfficiency => &PROCESS_SCHEMA,
            SheetKind::PersonEfficiency => &PERSON_SCHEMA,
            SheetKind::MainPersons => &MAIN_PERSONS_SCHEMA,
            SheetKind::Category => &CATEGORY_SCHEMA,
        }
    }
}

impl SheetSchema {
    /// 根据实际列数选择列名清单
    ///
    /// # Arguments
    /// * `sheet_name` - 用于错误信息的工作表名
    /// * `width` - 工作表实际列数
    ///
    /// # Returns
    /// * `Ok(&[&str])` - 与列数一致的列名清单（`FirstColumn` 布局只含主键列）
    /// * `Err(Error::ShapeMismatch)` - 没有匹配的清单
    pub fn resolve_columns(
        &self,
        sheet_name: &str,
        width: usize,
    ) -> Result<&'static [&'static str]> {
        match self.layout {
            ColumnLayout::FirstColumn => Ok(match self.kind {
                SheetKind::MainPersons => MAIN_PERSON_COLUMNS,
                _ => CATEGORY_COLUMNS,
            }),
            ColumnLayout::Named { primary, fallbacks } => {
                if width == primary.len() {
                    return Ok(primary);
                }
                fallbacks
                    .iter()
                    .copied()
                    .find(|columns| columns.len() == width)
                    .ok_or_else(|| Error::ShapeMismatch {
                        sheet: sheet_name.to_string(),
                        expected: std::iter::once(primary.len())
                            .chain(fallbacks.iter().map(|c| c.len()))
                            .collect(),
                        actual: width,
                    })
            }
        }
    }
}

/// 是否为合计行的名称
pub fn is_total_marker(name: &str) -> bool {
    let name = name.trim();
    TOTAL_ROW_MARKERS.contains(&name)
}
