//! 各排名的生成与输出形式
//!
//! 人员排名输出精简的投影，模板排名输出完整记录并附加名次。

use crate::config::RankingLimits;
use flow_perf_common::{rank, CategoryMembership, PersonRecord, ProcessRecord, Ranked, SortDirection};
use serde::Serialize;

/// 缺失值的显示
const PLACEHOLDER: &str = "-";

/// 个人流程处理数排名
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonThroughputEntry {
    #[serde(rename = "排名")]
    pub rank: usize,
    #[serde(rename = "人员名称")]
    pub name: String,
    #[serde(rename = "部门名称")]
    pub department: String,
    #[serde(rename = "处理数")]
    pub processed: u64,
    #[serde(rename = "平均处理时长")]
    pub avg_processing_time: String,
    #[serde(rename = "未处理流程数")]
    pub unprocessed: u64,
}

/// 主要负责人流程处理数排名
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderThroughputEntry {
    #[serde(rename = "排名")]
    pub rank: usize,
    #[serde(rename = "负责人姓名")]
    pub name: String,
    #[serde(rename = "部门名称")]
    pub department: String,
    #[serde(rename = "处理数")]
    pub processed: u64,
    #[serde(rename = "平均处理时长")]
    pub avg_processing_time: String,
    #[serde(rename = "未处理流程数")]
    pub unprocessed: u64,
}

/// 主要负责人处理时长排名
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderDurationEntry {
    #[serde(rename = "排名")]
    pub rank: usize,
    #[serde(rename = "负责人姓名")]
    pub name: String,
    #[serde(rename = "部门名称")]
    pub department: String,
    #[serde(rename = "平均处理时长")]
    pub avg_processing_time: String,
    #[serde(rename = "处理数")]
    pub processed: u64,
    #[serde(rename = "未处理流程数")]
    pub unprocessed: u64,
}

/// 带名次的模板记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedProcess {
    #[serde(rename = "排名")]
    pub rank: usize,
    #[serde(flatten)]
    pub record: ProcessRecord,
}

impl From<Ranked<'_, ProcessRecord>> for RankedProcess {
    fn from(ranked: Ranked<'_, ProcessRecord>) -> Self {
        Self {
            rank: ranked.rank,
            record: ranked.record.clone(),
        }
    }
}

fn department_or_placeholder(person: &PersonRecord) -> String {
    person
        .department
        .clone()
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn processing_time_or_placeholder(person: &PersonRecord) -> String {
    person
        .avg_processing_time
        .clone()
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn is_main_person(main_persons: &[String]) -> impl Fn(&PersonRecord) -> bool + '_ {
    move |person| main_persons.iter().any(|name| name == &person.name)
}

/// 个人流程处理数排名（按处理数）
pub fn personal_process_ranking(
    persons: &[PersonRecord],
    limits: &RankingLimits,
) -> Vec<PersonThroughputEntry> {
    rank(
        persons,
        |p| p.processed as f64,
        SortDirection::Descending,
        None,
        limits.personal_process,
    )
    .into_iter()
    .map(|ranked| PersonThroughputEntry {
        rank: ranked.rank,
        name: ranked.record.name.clone(),
        department: department_or_placeholder(ranked.record),
        processed: ranked.record.processed,
        avg_processing_time: processing_time_or_placeholder(ranked.record),
        unprocessed: ranked.record.unprocessed,
    })
    .collect()
}

/// 主要负责人流程处理数排名
pub fn main_person_process_ranking(
    persons: &[PersonRecord],
    main_persons: &[String],
    limits: &RankingLimits,
) -> Vec<LeaderThroughputEntry> {
    let filter = is_main_person(main_persons);

    rank(
        persons,
        |p| p.processed as f64,
        SortDirection::Descending,
        Some(&filter),
        limits.main_person_process,
    )
    .into_iter()
    .map(|ranked| LeaderThroughputEntry {
        rank: ranked.rank,
        name: ranked.record.name.clone(),
        department: department_or_placeholder(ranked.record),
        processed: ranked.record.processed,
        avg_processing_time: processing_time_or_placeholder(ranked.record),
        unprocessed: ranked.record.unprocessed,
    })
    .collect()
}

/// 主要负责人处理时长排名（按平均处理时长的分钟数）
pub fn main_person_duration_ranking(
    persons: &[PersonRecord],
    main_persons: &[String],
    limits: &RankingLimits,
) -> Vec<LeaderDurationEntry> {
    let filter = is_main_person(main_persons);

    rank(
        persons,
        |p| p.avg_processing_minutes as f64,
        SortDirection::Descending,
        Some(&filter),
        limits.main_person_duration,
    )
    .into_iter()
    .map(|ranked| LeaderDurationEntry {
        rank: ranked.rank,
        name: ranked.record.name.clone(),
        department: department_or_placeholder(ranked.record),
        avg_processing_time: processing_time_or_placeholder(ranked.record),
        processed: ranked.record.processed,
        unprocessed: ranked.record.unprocessed,
    })
    .collect()
}

/// 模板发起流程数排名
pub fn flow_ranking(processes: &[ProcessRecord], limits: &RankingLimits) -> Vec<RankedProcess> {
    rank(
        processes,
        |p| p.initiated as f64,
        SortDirection::Descending,
        None,
        limits.flow,
    )
    .into_iter()
    .map(RankedProcess::from)
    .collect()
}

/// 模板平均运行时长排名
pub fn duration_ranking(processes: &[ProcessRecord], limits: &RankingLimits) -> Vec<RankedProcess> {
    rank(
        processes,
        |p| p.avg_run_time_hours,
        SortDirection::Descending,
        None,
        limits.duration,
    )
    .into_iter()
    .map(RankedProcess::from)
    .collect()
}

/// 单个分类内的平均运行时长排名
pub fn category_ranking(
    processes: &[ProcessRecord],
    category: &CategoryMembership,
    limits: &RankingLimits,
) -> Vec<RankedProcess> {
    let filter = |p: &ProcessRecord| category.contains(&p.name);

    rank(
        processes,
        |p| p.avg_run_time_hours,
        SortDirection::Descending,
        Some(&filter),
        limits.category,
    )
    .into_iter()
    .map(RankedProcess::from)
    .collect()
}
