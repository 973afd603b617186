use super::rankings;
use super::{CategoryRankings, PersonnelSections, ProcessSections, Report, Statistics};
use crate::config::{Config, RankingLimits};
use crate::error::Result;
use crate::reference;
use crate::workbook::Workbook;
use chrono::{Local, SecondsFormat};
use flow_perf_common::{normalize, CategoryIndex, PersonRecord, ProcessRecord};
use tracing::{info, warn};

/// 报表组装
///
/// 读取 → 规整 → 分类 → 排名。任一步骤失败都直接返回错误，不生成部分报表。
pub struct ReportAssembler<'a> {
    config: &'a Config,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// 流程效率明细 + 分类 → 模板相关的排名
    pub fn build_process_sections(&self) -> Result<ProcessSections> {
        let mut workbook = Workbook::open(&self.config.process_workbook)?;
        let sheet = workbook.read_first_sheet()?;
        let records: Vec<ProcessRecord> = normalize(&sheet)?;
        info!(sheet = sheet.name(), records = records.len(), "流程效率明细已规整");

        let mut reference = Workbook::open(&self.config.reference_workbook)?;
        let categories = reference::build_categories(&mut reference, &self.config.category_sheets)?;
        info!(categories = categories.len(), "流程分类已读取");

        for (template, owners) in categories.overlapping_members() {
            warn!(template = %template, categories = ?owners, "模板属于多个分类，将出现在每个分类的排名中");
        }

        Ok(process_sections(records, categories, &self.config.limits))
    }

    /// 人员效率明细 + 主要负责人 → 人员相关的排名
    pub fn build_personnel_sections(&self) -> Result<PersonnelSections> {
        let mut workbook = Workbook::open(&self.config.personnel_workbook)?;
        let sheet = workbook.read_first_sheet()?;
        let persons: Vec<PersonRecord> = normalize(&sheet)?;
        info!(sheet = sheet.name(), records = persons.len(), "人员效率明细已规整");

        let mut reference = Workbook::open(&self.config.reference_workbook)?;
        let main_persons =
            reference::load_main_persons(&mut reference, &self.config.main_person_sheet)?;
        info!(count = main_persons.len(), "主要负责人已读取");

        Ok(personnel_sections(&persons, &main_persons, &self.config.limits))
    }

    /// 完整报表
    pub fn assemble(&self) -> Result<Report> {
        let personnel = self.build_personnel_sections()?;
        let process = self.build_process_sections()?;

        Ok(Report {
            success: true,
            generated_at: generated_at(),
            personnel,
            process,
        })
    }
}

/// 由规整后的模板记录生成各排名
pub fn process_sections(
    records: Vec<ProcessRecord>,
    categories: CategoryIndex,
    limits: &RankingLimits,
) -> ProcessSections {
    let mut category_rankings = CategoryRankings::default();
    for category in categories.iter() {
        category_rankings.push(
            category.category.clone(),
            rankings::category_ranking(&records, category, limits),
        );
    }

    ProcessSections {
        flow_ranking: rankings::flow_ranking(&records, limits),
        duration_ranking: rankings::duration_ranking(&records, limits),
        category_rankings,
        categories,
        statistics: Statistics::from_records(&records),
        raw_data: records,
    }
}

/// 由规整后的人员记录生成各排名
pub fn personnel_sections(
    persons: &[PersonRecord],
    main_persons: &[String],
    limits: &RankingLimits,
) -> PersonnelSections {
    PersonnelSections {
        personal_process_ranking: rankings::personal_process_ranking(persons, limits),
        main_person_process_ranking: rankings::main_person_process_ranking(
            persons,
            main_persons,
            limits,
        ),
        main_person_duration_ranking: rankings::main_person_duration_ranking(
            persons,
            main_persons,
            limits,
        ),
    }
}

/// 当前时间（ISO-8601，本地时区）
pub fn generated_at() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_perf_common::Cell;

    fn process(name: &str, initiated: u64, hours: f64) -> ProcessRecord {
        ProcessRecord {
            name: name.into(),
            initiated,
            avg_run_time: Cell::from(format!("{}小时", hours)),
            avg_run_time_hours: hours,
            ..Default::default()
        }
    }

    #[test]
    fn test_process_sections() {
        let records = vec![
            process("销售合同", 5, 2.0),
            process("采购申请", 8, 9.0),
            process("销售报价", 0, 4.0),
        ];
        let mut categories = CategoryIndex::new();
        categories.insert("销售类流程", vec!["销售合同".into(), "销售报价".into()]);
        categories.insert("采购类流程", vec!["采购申请".into()]);

        let sections = process_sections(records, categories, &RankingLimits::default());

        // 发起流程数为0的模板不参与排名
        assert_eq!(sections.flow_ranking.len(), 2);
        assert_eq!(sections.flow_ranking[0].record.name, "采购申请");
        assert_eq!(sections.duration_ranking.len(), 3);
        assert_eq!(sections.raw_data.len(), 3);
        assert_eq!(sections.statistics.total_initiated, 13);

        let names: Vec<_> = sections.category_rankings.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["销售类流程", "采购类流程"]);
        let sales = sections.category_rankings.get("销售类流程").unwrap();
        assert_eq!(sales[0].record.name, "销售报价");
        assert_eq!(sales[1].record.name, "销售合同");
    }

    #[test]
    fn test_category_without_matches_is_empty() {
        let mut categories = CategoryIndex::new();
        categories.insert("项目&产品管理类流程", vec!["不存在的模板".into()]);

        let sections = process_sections(
            vec![process("销售合同", 5, 2.0)],
            categories,
            &RankingLimits::default(),
        );
        assert_eq!(
            sections.category_rankings.get("项目&产品管理类流程"),
            Some(&[][..])
        );
    }

    #[test]
    fn test_generated_at_is_iso8601() {
        let ts = generated_at();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok(), "{}", ts);
    }
}
