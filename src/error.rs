use thiserror::Error;

use crate::consts::{BIN_NAME, EXAMPLE_DATE};

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("用法 / Usage: {bin} <开始日期 / start date YYYYMMDD>", bin = BIN_NAME)]
    Usage,

    #[error("日期格式错误 / Invalid date format \"{input}\" (expected 8 digits, YYYYMMDD)")]
    Format { input: String },

    #[error("无效日期 / Not a calendar date: \"{input}\"")]
    Calendar { input: String },

    #[error("文件不存在 / File not found: {name}")]
    MissingFile { name: String },

    #[error("{0}")]
    Delegate(#[from] DelegateError),
}

impl AppError {
    /// Usage example printed after argument errors
    pub(crate) fn hint(&self) -> Option<String> {
        match self {
            AppError::Usage | AppError::Format { .. } => {
                Some(format!("示例 / Example: {BIN_NAME} {EXAMPLE_DATE}"))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum DelegateError {
    #[error("No downstream command configured")]
    Empty,

    #[error("{program} not found. Please install it or set `command` in the config file.")]
    NotFound { program: String },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}
