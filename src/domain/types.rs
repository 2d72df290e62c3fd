// ==========================================
// 采购分析报表系统 - 领域类型定义
// ==========================================
// 订单状态 / 发票状态 / 库存流水方向
// 序列化格式与数据库存储值一致 (Delivered / IN / Overdue ...)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 订单状态 (Order Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Delivered, // 已交付
    Delayed,   // 延迟
    Pending,   // 待交付
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Delivered => write!(f, "Delivered"),
            OrderStatus::Delayed => write!(f, "Delayed"),
            OrderStatus::Pending => write!(f, "Pending"),
        }
    }
}

impl OrderStatus {
    /// 从数据库存储值解析（精确匹配，区分大小写）
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Delivered" => Some(OrderStatus::Delivered),
            "Delayed" => Some(OrderStatus::Delayed),
            "Pending" => Some(OrderStatus::Pending),
            _ => None,
        }
    }
}

// ==========================================
// 发票状态 (Invoice Status)
// ==========================================
// 逾期由状态字段显式标记,不按日期推导
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,    // 已付款
    Unpaid,  // 未付款
    Overdue, // 逾期
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceStatus::Paid => write!(f, "Paid"),
            InvoiceStatus::Unpaid => write!(f, "Unpaid"),
            InvoiceStatus::Overdue => write!(f, "Overdue"),
        }
    }
}

impl InvoiceStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Paid" => Some(InvoiceStatus::Paid),
            "Unpaid" => Some(InvoiceStatus::Unpaid),
            "Overdue" => Some(InvoiceStatus::Overdue),
            _ => None,
        }
    }
}

// ==========================================
// 库存流水方向 (Movement Type)
// ==========================================
// 数量本身带符号,方向标签仅作冗余校验
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    In,  // 入库
    Out, // 出库
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementType::In => write!(f, "IN"),
            MovementType::Out => write!(f, "OUT"),
        }
    }
}

impl MovementType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "IN" => Some(MovementType::In),
            "OUT" => Some(MovementType::Out),
            _ => None,
        }
    }

    /// 带符号数量与方向标签是否一致 (0 视为一致)
    pub fn agrees_with(&self, quantity: i64) -> bool {
        match self {
            MovementType::In => quantity >= 0,
            MovementType::Out => quantity <= 0,
        }
    }
}
