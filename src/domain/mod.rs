// ==========================================
// 采购分析报表系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、报表结果对象
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod invoice;
pub mod order;
pub mod report;
pub mod stock;
pub mod types;
pub mod vendor;

// 重导出核心类型
pub use invoice::{Invoice, InvoiceLine};
pub use order::{Order, OrderLine};
pub use report::{
    Alert, OverdueInvoice, PendingOrder, ProcurementReport, StockLevel, VendorDelayRate,
    VendorScore, VendorSpend,
};
pub use stock::StockMovement;
pub use types::{InvoiceStatus, MovementType, OrderStatus};
pub use vendor::{Product, Vendor};
