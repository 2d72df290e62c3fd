// ==========================================
// 采购分析报表系统 - 供应商订单统计
// ==========================================
// 职责: 按供应商分组订单明细, 计算采购额 / 订单数 / 延迟数
// 输出: 与供应商列表同序 (插入顺序), 无订单的供应商计数为 0
// ==========================================

use crate::domain::order::OrderLine;
use crate::domain::types::OrderStatus;
use crate::domain::vendor::Vendor;
use std::collections::HashMap;

/// 单个供应商的订单聚合
#[derive(Debug, Clone, PartialEq)]
pub struct VendorStats {
    pub vendor_id: i64,
    pub vendor_name: String,
    pub total_spend: f64,  // Σ 单价 × 数量 (未舍入)
    pub order_count: u32,
    pub delayed_count: u32,
}

impl VendorStats {
    fn empty(vendor: &Vendor) -> Self {
        Self {
            vendor_id: vendor.vendor_id,
            vendor_name: vendor.vendor_name.clone(),
            total_spend: 0.0,
            order_count: 0,
            delayed_count: 0,
        }
    }

    pub fn has_orders(&self) -> bool {
        self.order_count > 0
    }

    /// 延迟率 (百分比)；无订单时为 None
    pub fn delay_rate(&self) -> Option<f64> {
        if self.order_count == 0 {
            return None;
        }
        Some(self.delayed_count as f64 * 100.0 / self.order_count as f64)
    }
}

/// 按供应商聚合订单明细
///
/// 明细中出现但不在供应商列表里的 vendor_id 会被忽略
pub fn collect_vendor_stats(vendors: &[Vendor], lines: &[OrderLine]) -> Vec<VendorStats> {
    let mut stats: Vec<VendorStats> = vendors.iter().map(VendorStats::empty).collect();
    let index: HashMap<i64, usize> = vendors
        .iter()
        .enumerate()
        .map(|(i, v)| (v.vendor_id, i))
        .collect();

    for line in lines {
        let Some(&i) = index.get(&line.vendor_id) else {
            tracing::debug!(
                order_id = line.order_id,
                vendor_id = line.vendor_id,
                "订单所属供应商不在供应商列表中, 跳过"
            );
            continue;
        };
        let entry = &mut stats[i];
        entry.total_spend += line.line_amount();
        entry.order_count += 1;
        if line.status == OrderStatus::Delayed {
            entry.delayed_count += 1;
        }
    }

    stats
}
