// ==========================================
// 采购分析报表系统 - 发票领域模型
// ==========================================

use crate::domain::types::InvoiceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Invoice - 发票
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: i64,
    pub order_id: i64,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
}

// ==========================================
// InvoiceLine - 发票 ⋈ 订单 ⋈ 供应商 视图
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub invoice_id: i64,
    pub order_id: i64,
    pub vendor_name: String,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
}
