// ==========================================
// 采购分析报表系统 - 引擎层
// ==========================================
// 职责: 报表聚合与绩效评分, 纯函数
// 红线: Engine 不拼 SQL, 输入均为仓储层读取的行
// ==========================================

pub mod alerts;
pub mod delivery;
pub mod invoice;
pub mod numeric;
pub mod scoring;
pub mod spend;
pub mod stock;
pub mod vendor_stats;

// 重导出核心引擎
pub use alerts::build_alerts;
pub use delivery::{average_delivery_delay, delayed_order_rate, pending_orders};
pub use invoice::overdue_invoices;
pub use numeric::round_2dp;
pub use scoring::VendorPerformanceScorer;
pub use spend::total_spend_per_vendor;
pub use stock::{StockEngine, DEFAULT_LOW_STOCK_THRESHOLD};
pub use vendor_stats::{collect_vendor_stats, VendorStats};
