use crate::cli::InputArgs;
use crate::error::{PerfReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 运行配置
///
/// 输入文件路径为相对路径时相对于当前目录解析。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 流程效率明细
    pub process_workbook: PathBuf,
    /// 人员效率明细
    pub personnel_workbook: PathBuf,
    /// 基本信息（主要负责人 + 流程分类）
    pub reference_workbook: PathBuf,
    /// 输出JSON
    pub output: PathBuf,
    pub main_person_sheet: String,
    /// 分类工作表名，按此顺序输出
    pub category_sheets: Vec<String>,
    pub limits: RankingLimits,
}

/// 各排名保留的名次数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingLimits {
    pub personal_process: usize,
    pub main_person_process: usize,
    pub main_person_duration: usize,
    pub flow: usize,
    pub duration: usize,
    pub category: usize,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            personal_process: 20,
            main_person_process: 15,
            main_person_duration: 15,
            flow: 10,
            duration: 10,
            category: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            process_workbook: PathBuf::from("流程效率明细.xls"),
            personnel_workbook: PathBuf::from("人员效率明细.xls"),
            reference_workbook: PathBuf::from("基本信息.xlsx"),
            output: PathBuf::from("chart_data.json"),
            main_person_sheet: "主要负责人".into(),
            category_sheets: vec![
                "销售类流程".into(),
                "采购类流程".into(),
                "项目&产品管理类流程".into(),
            ],
            limits: RankingLimits::default(),
        }
    }
}

impl Config {
    /// 读取配置
    ///
    /// 指定了路径时文件必须存在；否则读取默认路径，不存在时使用默认值。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(PerfReportError::FileNotFound(path.display().to_string()));
                }
                Self::load_from(path)
            }
            None => {
                let default_path = Self::config_path()?;
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PerfReportError::Config("找不到主目录".into()))?;
        Ok(home.join(".config").join("flow-perf").join("config.json"))
    }

    /// 用命令行参数覆盖路径
    pub fn apply_overrides(&mut self, args: &InputArgs) {
        if let Some(path) = &args.process {
            self.process_workbook = path.clone();
        }
        if let Some(path) = &args.personnel {
            self.personnel_workbook = path.clone();
        }
        if let Some(path) = &args.reference {
            self.reference_workbook = path.clone();
        }
        if let Some(path) = &args.output {
            self.output = path.clone();
        }
    }

    fn validate(&self) -> Result<()> {
        if self.main_person_sheet.trim().is_empty() {
            return Err(PerfReportError::Config("main_person_sheet 不能为空".into()));
        }
        if let Some(sheet) = self.category_sheets.iter().find(|s| s.trim().is_empty()) {
            return Err(PerfReportError::Config(format!(
                "category_sheets 中存在空工作表名: {:?}",
                sheet
            )));
        }
        Ok(())
    }
}
