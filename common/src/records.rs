//! 规整后的记录类型
//!
//! 字段序列化名沿用导出表的中文列名，前端按这些键读取。

use crate::duration::{cell_hours, cell_minutes};
use crate::normalizer::{RowView, SheetRecord};
use crate::schema::{self, SheetKind};
use crate::types::Cell;
use serde::{Deserialize, Serialize};

/// 流程模板效率记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    #[serde(rename = "模板名称")]
    pub name: String,

    #[serde(rename = "发起流程数")]
    pub initiated: u64,

    #[serde(rename = "环比", default)]
    pub month_on_month: Cell,

    #[serde(rename = "同比", default)]
    pub year_on_year: Cell,

    #[serde(rename = "完成流程数")]
    pub completed: u64,

    #[serde(rename = "完成环比", default)]
    pub completed_month_on_month: Cell,

    /// 原始显示值，例如 `2天3小时`
    #[serde(rename = "平均运行时长", default)]
    pub avg_run_time: Cell,

    /// 平均运行时长（小时）
    #[serde(rename = "平均运行时长_数值")]
    pub avg_run_time_hours: f64,

    #[serde(rename = "运行时长环比", default)]
    pub run_time_month_on_month: Cell,

    #[serde(rename = "超期结束比例", default)]
    pub overdue_close_ratio: Cell,

    #[serde(rename = "平均超期时长", default)]
    pub avg_overdue_time: Cell,

    /// 平均超期时长（小时）
    #[serde(rename = "平均超期时长_数值")]
    pub avg_overdue_hours: f64,

    #[serde(rename = "未结束流程数")]
    pub unfinished: u64,

    #[serde(rename = "超期未结束流程数")]
    pub overdue_unfinished: u64,

    #[serde(rename = "备注", default)]
    pub remark: Cell,
}

impl SheetRecord for ProcessRecord {
    const KIND: SheetKind = SheetKind::ProcessEfficiency;

    fn from_row(name: String, row: &RowView<'_>) -> Self {
        let avg_run_time = row.get(schema::AVG_RUN_TIME).normalized();
        let avg_overdue_time = row.get(schema::AVG_OVERDUE_TIME).normalized();

        Self {
            name,
            initiated: row.get(schema::INITIATED).as_count(),
            month_on_month: row.get(schema::MONTH_ON_MONTH).normalized(),
            year_on_year: row.get(schema::YEAR_ON_YEAR).normalized(),
            completed: row.get(schema::COMPLETED).as_count(),
            completed_month_on_month: row.get(schema::COMPLETED_MONTH_ON_MONTH).normalized(),
            avg_run_time_hours: cell_hours(&avg_run_time),
            avg_run_time,
            run_time_month_on_month: row.get(schema::RUN_TIME_MONTH_ON_MONTH).normalized(),
            overdue_close_ratio: row.get(schema::OVERDUE_CLOSE_RATIO).normalized(),
            avg_overdue_hours: cell_hours(&avg_overdue_time),
            avg_overdue_time,
            unfinished: row.get(schema::UNFINISHED).as_count(),
            overdue_unfinished: row.get(schema::OVERDUE_UNFINISHED).as_count(),
            remark: row.get(schema::REMARK).normalized(),
        }
    }
}

/// 人员效率记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(rename = "人员名称")]
    pub name: String,

    #[serde(rename = "部门名称", default)]
    pub department: Option<String>,

    #[serde(rename = "单位名称", default)]
    pub unit: Option<String>,

    #[serde(rename = "处理数")]
    pub processed: u64,

    /// 原始显示值，缺失时为 `None`
    #[serde(rename = "平均处理时长", default)]
    pub avg_processing_time: Option<String>,

    /// 平均处理时长（分钟）
    #[serde(rename = "平均处理时长_分钟")]
    pub avg_processing_minutes: i64,

    #[serde(rename = "超期处理数")]
    pub overdue_processed: u64,

    #[serde(rename = "超期处理比例", default)]
    pub overdue_ratio: Cell,

    #[serde(rename = "平均超期时长", default)]
    pub avg_overdue_time: Cell,

    /// 只存在于12列导出
    #[serde(rename = "平均超期时长2", default)]
    pub avg_overdue_time_2: Cell,

    #[serde(rename = "未处理流程数")]
    pub unprocessed: u64,

    #[serde(rename = "超期未处理流程数")]
    pub overdue_unprocessed: u64,

    #[serde(rename = "备注", default)]
    pub remark: Cell,
}

impl SheetRecord for PersonRecord {
    const KIND: SheetKind = SheetKind::PersonEfficiency;

    fn from_row(name: String, row: &RowView<'_>) -> Self {
        let avg_processing = row.get(schema::AVG_PROCESSING_TIME);

        Self {
            name,
            department: row.get(schema::DEPARTMENT).display_text(),
            unit: row.get(schema::UNIT).display_text(),
            processed: row.get(schema::PROCESSED).as_count(),
            avg_processing_time: avg_processing.display_text(),
            avg_processing_minutes: cell_minutes(avg_processing),
            overdue_processed: row.get(schema::OVERDUE_PROCESSED).as_count(),
            overdue_ratio: row.get(schema::OVERDUE_PROCESSED_RATIO).normalized(),
            avg_overdue_time: row.get(schema::AVG_OVERDUE_TIME).normalized(),
            avg_overdue_time_2: row.get(schema::AVG_OVERDUE_TIME_2).normalized(),
            unprocessed: row.get(schema::UNPROCESSED).as_count(),
            overdue_unprocessed: row.get(schema::OVERDUE_UNPROCESSED).as_count(),
            remark: row.get(schema::REMARK).normalized(),
        }
    }
}
