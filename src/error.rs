use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerfReportError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("找不到文件: {0}")]
    FileNotFound(String),

    #[error("工作簿 {workbook} 中找不到工作表: {sheet}")]
    SheetNotFound { workbook: String, sheet: String },

    #[error("工作簿读取错误: {0}")]
    Workbook(String),

    #[error("输出文件错误: {0}")]
    Artifact(String),

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] flow_perf_common::Error),
}

pub type Result<T> = std::result::Result<T, PerfReportError>;
