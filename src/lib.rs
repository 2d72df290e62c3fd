// ==========================================
// 采购分析报表系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 只读批处理报表 (供应商绩效评分 + 库存/发票告警)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与报表对象
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 聚合与评分
pub mod engine;

// 报表层 - 会话/编排/输出
pub mod report;

// 配置层 - 运行配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA/建表）
pub mod db;

// 样例数据
pub mod seed;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{InvoiceStatus, MovementType, OrderStatus};

// 领域实体
pub use domain::{
    Alert, Invoice, Order, OrderLine, ProcurementReport, Product, StockMovement, Vendor,
    VendorScore,
};

// 引擎
pub use engine::{StockEngine, VendorPerformanceScorer};

// 报表
pub use report::{ReportError, ReportRunner, ReportSession, RunSummary};

// 配置
pub use config::ReportConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "采购分析报表系统";
