// ==========================================
// 采购分析报表系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑, 只做读取/写入与行映射
// 约束: 所有查询使用参数化,防止 SQL 注入
// ==========================================

pub mod error;
pub mod procurement_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use procurement_repo::ProcurementRepository;
