// ==========================================
// 采购分析报表系统 - 报表层错误类型
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// 报表运行错误
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("数据源不可用 ({db_path}): {message}")]
    DataSourceUnavailable { db_path: String, message: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("文件写入失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),
}

impl ReportError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
