// ==========================================
// 采购分析报表系统 - 库存引擎
// ==========================================
// 红线: 当前库存 = 该产品全部流水带符号数量之和
// 方向标签与符号不一致时只告警, 不修正数量
// ==========================================

use crate::domain::report::StockLevel;
use crate::domain::stock::StockMovement;
use crate::domain::vendor::Product;
use std::collections::HashMap;

/// 默认低库存阈值（严格小于时告警）
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

// ==========================================
// StockEngine - 库存引擎
// ==========================================
pub struct StockEngine {
    low_stock_threshold: i64,
}

impl Default for StockEngine {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_STOCK_THRESHOLD)
    }
}

impl StockEngine {
    pub fn new(low_stock_threshold: i64) -> Self {
        Self { low_stock_threshold }
    }

    pub fn low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
    }

    /// 计算各产品当前库存
    ///
    /// # 返回
    /// 至少有一条流水的产品, 按产品列表顺序
    pub fn current_stock_levels(
        &self,
        products: &[Product],
        movements: &[StockMovement],
    ) -> Vec<StockLevel> {
        let mut totals: HashMap<i64, i64> = HashMap::new();

        for movement in movements {
            if !movement.is_direction_consistent() {
                tracing::warn!(
                    movement_id = movement.movement_id,
                    product_id = movement.product_id,
                    quantity = movement.quantity,
                    movement_type = %movement.movement_type,
                    "库存流水方向与数量符号不一致, 以带符号数量为准"
                );
            }
            let current = totals.entry(movement.product_id).or_insert(0);
            match current.checked_add(movement.quantity) {
                Some(sum) => *current = sum,
                None => {
                    tracing::warn!(
                        product_id = movement.product_id,
                        movement_id = movement.movement_id,
                        "库存累计溢出, 截断到 i64 边界"
                    );
                    *current = current.saturating_add(movement.quantity);
                }
            }
        }

        products
            .iter()
            .filter_map(|p| {
                totals.get(&p.product_id).map(|&stock| StockLevel {
                    product_id: p.product_id,
                    product_name: p.product_name.clone(),
                    current_stock: stock,
                })
            })
            .collect()
    }

    /// 低库存产品（current_stock < 阈值）
    pub fn low_stock<'a>(&self, levels: &'a [StockLevel]) -> Vec<&'a StockLevel> {
        levels
            .iter()
            .filter(|l| l.current_stock < self.low_stock_threshold)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::MovementType;
    use chrono::NaiveDate;

    fn mv(id: i64, product_id: i64, qty: i64, t: MovementType) -> StockMovement {
        StockMovement {
            movement_id: id,
            product_id,
            movement_date: NaiveDate::from_ymd_opt(2025, 7, 22).unwrap(),
            quantity: qty,
            movement_type: t,
        }
    }

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Smart Thermostat", 199.99),
            Product::new(2, "Solar Panel", 499.99),
            Product::new(3, "Heat Pump", 799.99),
        ]
    }

    #[test]
    fn test_stock_is_signed_sum() {
        let engine = StockEngine::default();
        let movements = vec![
            mv(1, 1, 10, MovementType::In),
            mv(2, 2, 5, MovementType::In),
            mv(4, 1, 7, MovementType::In),
            mv(6, 1, -4, MovementType::Out),
            mv(7, 2, -2, MovementType::Out),
        ];
        let levels = engine.current_stock_levels(&products(), &movements);
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].product_name, "Smart Thermostat");
        assert_eq!(levels[0].current_stock, 13);
        assert_eq!(levels[1].current_stock, 3);
    }

    #[test]
    fn test_inconsistent_direction_still_uses_sign() {
        let engine = StockEngine::default();
        let movements = vec![mv(1, 3, 8, MovementType::In), mv(2, 3, 2, MovementType::Out)];
        let levels = engine.current_stock_levels(&products(), &movements);
        assert_eq!(levels[0].current_stock, 10);
    }

    #[test]
    fn test_overflowing_total_saturates() {
        let engine = StockEngine::default();
        let movements = vec![
            mv(1, 1, i64::MAX, MovementType::In),
            mv(2, 1, 5, MovementType::In),
            mv(3, 2, i64::MIN, MovementType::Out),
            mv(4, 2, -1, MovementType::Out),
        ];
        let levels = engine.current_stock_levels(&products(), &movements);
        assert_eq!(levels[0].current_stock, i64::MAX);
        assert_eq!(levels[1].current_stock, i64::MIN);
    }

    #[test]
    fn test_low_stock_boundary_is_strict() {
        let engine = StockEngine::default();
        let levels = vec![
            StockLevel { product_id: 1, product_name: "A".to_string(), current_stock: 10 },
            StockLevel { product_id: 2, product_name: "B".to_string(), current_stock: 9 },
            StockLevel { product_id: 3, product_name: "C".to_string(), current_stock: -1 },
        ];
        let low: Vec<&str> = engine
            .low_stock(&levels)
            .iter()
            .map(|l| l.product_name.as_str())
            .collect();
        assert_eq!(low, vec!["B", "C"]);
    }

    #[test]
    fn test_custom_threshold() {
        let engine = StockEngine::new(3);
        let levels = vec![StockLevel { product_id: 1, product_name: "A".to_string(), current_stock: 3 }];
        assert!(engine.low_stock(&levels).is_empty());
    }
}
