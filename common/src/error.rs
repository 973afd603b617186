//! 错误类型定义

use thiserror::Error;

/// 公共错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// 工作表列数与已知结构都不匹配
    #[error("Shape mismatch in {sheet}: expected {expected:?} columns, found {actual}")]
    ShapeMismatch {
        sheet: String,
        expected: Vec<usize>,
        actual: usize,
    },
}

/// Result类型别名
pub type Result<T> = std::result::Result<T, Error>;
