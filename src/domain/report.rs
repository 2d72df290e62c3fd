// ==========================================
// 采购分析报表系统 - 报表结果对象
// ==========================================
// 职责: 各报表引擎的输出行, 由控制台/文件输出层消费
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 供应商采购总额
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorSpend {
    pub vendor_name: String,
    pub total_spend: f64, // 已保留 2 位小数
}

/// 供应商延迟率 (百分比, 0..=100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorDelayRate {
    pub vendor_name: String,
    pub delay_rate: f64,
}

/// 待交付订单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub order_id: i64,
    pub vendor_name: String,
    pub product_name: String,
    pub order_date: NaiveDate,
}

/// 产品当前库存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub product_id: i64,
    pub product_name: String,
    pub current_stock: i64,
}

/// 逾期发票
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueInvoice {
    pub invoice_id: i64,
    pub order_id: i64,
    pub vendor_name: String,
    pub due_date: NaiveDate,
}

/// 供应商绩效评分 (0..=100, 已保留 2 位小数)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorScore {
    pub vendor_name: String,
    pub performance_score: f64,
}

// ==========================================
// Alert - 告警
// ==========================================
// Display 输出即 alerts.txt 中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Alert {
    LowStock {
        product_name: String,
        current_stock: i64,
    },
    OverdueInvoice {
        invoice_id: i64,
        order_id: i64,
        vendor_name: String,
        due_date: NaiveDate,
    },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::LowStock {
                product_name,
                current_stock,
            } => write!(
                f,
                "LOW STOCK ALERT: {} stock is low ({} units)",
                product_name, current_stock
            ),
            Alert::OverdueInvoice {
                invoice_id,
                order_id,
                vendor_name,
                due_date,
            } => write!(
                f,
                "OVERDUE INVOICE ALERT: Invoice {} for Order {} from {} was due {}",
                invoice_id,
                order_id,
                vendor_name,
                due_date.format("%Y-%m-%d")
            ),
        }
    }
}

/// 一次完整报表运行的结果汇总
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcurementReport {
    pub spend_per_vendor: Vec<VendorSpend>,
    pub average_delivery_delay: Option<f64>,
    pub delay_rates: Vec<VendorDelayRate>,
    pub pending_orders: Vec<PendingOrder>,
    pub stock_levels: Vec<StockLevel>,
    pub overdue_invoices: Vec<OverdueInvoice>,
    pub vendor_scores: Vec<VendorScore>,
}
