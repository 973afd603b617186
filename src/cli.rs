use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flow-perf")]
#[command(about = "营销平台流程绩效数据整理与排名生成工具", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 配置文件（默认: ~/.config/flow-perf/config.json）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// 输入/输出路径（覆盖配置文件）
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// 流程效率明细工作簿
    #[arg(long)]
    pub process: Option<PathBuf>,

    /// 人员效率明细工作簿
    #[arg(long)]
    pub personnel: Option<PathBuf>,

    /// 基本信息工作簿（主要负责人、流程分类）
    #[arg(long)]
    pub reference: Option<PathBuf>,

    /// 输出JSON文件
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 生成完整报表（覆盖输出文件）
    Run {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// 只重新生成部分排名，合并进已有输出文件
    Update {
        /// 更新范围 (personnel/process)
        #[arg(required = true)]
        section: UpdateSection,

        #[command(flatten)]
        inputs: InputArgs,
    },

    /// 查看工作簿结构（文件或文件夹）
    Inspect {
        /// 工作簿文件或包含工作簿的文件夹
        #[arg(required = true)]
        path: PathBuf,

        /// 每个工作表预览的行数
        #[arg(short, long, default_value = "10")]
        rows: usize,
    },

    /// 显示/初始化配置
    Config {
        /// 显示当前配置
        #[arg(long)]
        show: bool,

        /// 写入默认配置文件
        #[arg(long)]
        init: bool,

        /// 覆盖已存在的配置文件
        #[arg(long)]
        force: bool,
    },
}

/// 部分更新的范围
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateSection {
    /// 个人流程处理数 / 主要负责人流程数 / 主要负责人处理时长
    Personnel,
    /// 流程数 / 运行时长 / 分类排名、分类、原始数据、统计
    Process,
}

impl std::str::FromStr for UpdateSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personnel" | "person" | "人员" => Ok(UpdateSection::Personnel),
            "process" | "flow" | "流程" => Ok(UpdateSection::Process),
            _ => Err(format!("Unknown section: {}. Use personnel or process", s)),
        }
    }
}

impl std::fmt::Display for UpdateSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateSection::Personnel => write!(f, "personnel"),
            UpdateSection::Process => write!(f, "process"),
        }
    }
}
