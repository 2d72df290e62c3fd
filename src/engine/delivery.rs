// ==========================================
// 采购分析报表系统 - 交付分析
// ==========================================
// 职责: 平均交付天数 / 供应商延迟率 / 待交付订单
// 红线: delivery_date 为空的订单不参与平均天数计算
// ==========================================

use crate::domain::order::OrderLine;
use crate::domain::report::{PendingOrder, VendorDelayRate};
use crate::domain::types::OrderStatus;
use crate::engine::vendor_stats::VendorStats;

/// 平均交付天数（delivery_date - order_date 的日历天数均值）
///
/// 没有任何已交付订单时返回 None
pub fn average_delivery_delay(lines: &[OrderLine]) -> Option<f64> {
    let days: Vec<i64> = lines.iter().filter_map(OrderLine::delivery_days).collect();
    if days.is_empty() {
        return None;
    }
    Some(days.iter().sum::<i64>() as f64 / days.len() as f64)
}

/// 各供应商延迟订单占比（仅含有订单的供应商，按供应商顺序）
pub fn delayed_order_rate(stats: &[VendorStats]) -> Vec<VendorDelayRate> {
    stats
        .iter()
        .filter_map(|s| {
            s.delay_rate().map(|rate| VendorDelayRate {
                vendor_name: s.vendor_name.clone(),
                delay_rate: rate,
            })
        })
        .collect()
}

/// 待交付订单（状态严格等于 Pending）
pub fn pending_orders(lines: &[OrderLine]) -> Vec<PendingOrder> {
    lines
        .iter()
        .filter(|l| l.status == OrderStatus::Pending)
        .map(|l| PendingOrder {
            order_id: l.order_id,
            vendor_name: l.vendor_name.clone(),
            product_name: l.product_name.clone(),
            order_date: l.order_date,
        })
        .collect()
}
