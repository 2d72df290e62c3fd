// ==========================================
// 采购分析报表系统 - 报表层
// ==========================================
// 职责: 会话管理, 报表编排, 控制台与文件输出
// ==========================================

pub mod console;
pub mod error;
pub mod export;
pub mod runner;
pub mod session;

pub use error::{ReportError, ReportResult};
pub use runner::{ReportRunner, RunSummary};
pub use session::ReportSession;
