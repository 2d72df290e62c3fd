// ==========================================
// 采购分析报表系统 - 订单领域模型
// ==========================================
// Order: orders 表原始记录
// OrderLine: 订单 ⋈ 供应商 ⋈ 产品 的只读视图,供报表引擎使用
// ==========================================

use crate::domain::types::OrderStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Order - 采购订单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub vendor_id: i64,
    pub product_id: i64,
    pub order_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>, // 未交付时为空
    pub quantity: i64,                    // > 0
    pub status: OrderStatus,
}

// ==========================================
// OrderLine - 订单明细视图
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_id: i64,
    pub vendor_id: i64,
    pub vendor_name: String,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i64,
    pub order_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    pub status: OrderStatus,
}

impl OrderLine {
    /// 行金额 = 单价 × 数量
    pub fn line_amount(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }

    /// 交付天数 (delivery_date - order_date)，未交付返回 None
    pub fn delivery_days(&self) -> Option<i64> {
        self.delivery_date
            .map(|delivered| (delivered - self.order_date).num_days())
    }
}
