// ==========================================
// 采购分析报表系统 - 库存流水领域模型
// ==========================================

use crate::domain::types::MovementType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// StockMovement - 库存流水
// ==========================================
// 红线: 库存 = Σ 带符号数量, movement_type 只做一致性提示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub movement_id: i64,
    pub product_id: i64,
    pub movement_date: NaiveDate,
    pub quantity: i64, // 带符号: 入库为正, 出库为负
    pub movement_type: MovementType,
}

impl StockMovement {
    pub fn is_direction_consistent(&self) -> bool {
        self.movement_type.agrees_with(self.quantity)
    }
}
