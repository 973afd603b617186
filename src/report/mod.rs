//! 报表生成
//!
//! 规整后的记录 → 各排名 → 报表JSON。

mod artifact;
mod assembler;
pub mod rankings;

pub use artifact::{merge_sections, write_report};
pub use assembler::{generated_at, personnel_sections, process_sections, ReportAssembler};
pub use rankings::{LeaderDurationEntry, LeaderThroughputEntry, PersonThroughputEntry, RankedProcess};

use flow_perf_common::{CategoryIndex, ProcessRecord};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// 完整报表
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// 总是 `true`：生成失败时返回错误，不写出报表。前端读取此标记
    pub success: bool,
    /// ISO-8601 生成时间
    pub generated_at: String,
    #[serde(flatten)]
    pub personnel: PersonnelSections,
    #[serde(flatten)]
    pub process: ProcessSections,
}

/// 人员效率明细生成的部分
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonnelSections {
    pub personal_process_ranking: Vec<PersonThroughputEntry>,
    pub main_person_process_ranking: Vec<LeaderThroughputEntry>,
    pub main_person_duration_ranking: Vec<LeaderDurationEntry>,
}

/// 流程效率明细生成的部分
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessSections {
    pub flow_ranking: Vec<RankedProcess>,
    pub duration_ranking: Vec<RankedProcess>,
    pub category_rankings: CategoryRankings,
    pub categories: CategoryIndex,
    pub raw_data: Vec<ProcessRecord>,
    pub statistics: Statistics,
}

/// 分类名 → 排名
///
/// 按分类配置顺序序列化为JSON对象。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryRankings {
    entries: Vec<(String, Vec<RankedProcess>)>,
}

impl CategoryRankings {
    pub fn push(&mut self, category: impl Into<String>, ranking: Vec<RankedProcess>) {
        self.entries.push((category.into(), ranking));
    }

    pub fn get(&self, category: &str) -> Option<&[RankedProcess]> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, ranking)| ranking.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RankedProcess])> {
        self.entries
            .iter()
            .map(|(name, ranking)| (name.as_str(), ranking.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CategoryRankings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, ranking) in &self.entries {
            map.serialize_entry(category, ranking)?;
        }
        map.end()
    }
}

/// 汇总数字
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// 模板数
    pub total_flows: usize,
    pub total_initiated: u64,
    pub total_completed: u64,
    /// 有运行时长的模板的平均值（小时），没有时为0
    pub average_run_time_hours: f64,
}

impl Statistics {
    pub fn from_records(records: &[ProcessRecord]) -> Self {
        let timed: Vec<f64> = records
            .iter()
            .map(|r| r.avg_run_time_hours)
            .filter(|h| *h > 0.0)
            .collect();

        let average_run_time_hours = if timed.is_empty() {
            0.0
        } else {
            timed.iter().sum::<f64>() / timed.len() as f64
        };

        Self {
            total_flows: records.len(),
            total_initiated: saturating_total(records.iter().map(|r| r.initiated)),
            total_completed: saturating_total(records.iter().map(|r| r.completed)),
            average_run_time_hours,
        }
    }
}

/// 计数合计，超出 `u64` 范围时停在最大值
fn saturating_total(counts: impl Iterator<Item = u64>) -> u64 {
    counts.fold(0u64, u64::saturating_add)
}
