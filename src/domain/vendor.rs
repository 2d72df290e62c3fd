// ==========================================
// 采购分析报表系统 - 供应商与产品领域模型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Vendor - 供应商
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub vendor_id: i64,      // 供应商ID
    pub vendor_name: String, // 显示名称
}

impl Vendor {
    pub fn new(vendor_id: i64, vendor_name: &str) -> Self {
        Self {
            vendor_id,
            vendor_name: vendor_name.to_string(),
        }
    }
}

// ==========================================
// Product - 产品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub unit_price: f64, // 单价 (货币金额)
}

impl Product {
    pub fn new(product_id: i64, product_name: &str, unit_price: f64) -> Self {
        Self {
            product_id,
            product_name: product_name.to_string(),
            unit_price,
        }
    }
}
