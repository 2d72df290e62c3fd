// ==========================================
// 采购分析报表系统 - 采购额分析
// ==========================================
// 输入: 供应商订单统计
// 输出: 有订单供应商的采购总额, 降序 (同额保持供应商顺序)
// ==========================================

use crate::domain::report::VendorSpend;
use crate::engine::numeric::round_2dp;
use crate::engine::vendor_stats::VendorStats;

/// 各供应商采购总额（保留 2 位小数，降序）
pub fn total_spend_per_vendor(stats: &[VendorStats]) -> Vec<VendorSpend> {
    let mut rows: Vec<VendorSpend> = stats
        .iter()
        .filter(|s| s.has_orders())
        .map(|s| VendorSpend {
            vendor_name: s.vendor_name.clone(),
            total_spend: round_2dp(s.total_spend),
        })
        .collect();

    // sort_by 为稳定排序
    rows.sort_by(|a, b| b.total_spend.total_cmp(&a.total_spend));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(name: &str, spend: f64, orders: u32) -> VendorStats {
        VendorStats {
            vendor_id: 0,
            vendor_name: name.to_string(),
            total_spend: spend,
            order_count: orders,
            delayed_count: 0,
        }
    }

    #[test]
    fn test_spend_sorted_desc_and_rounded() {
        let input = vec![
            stats("EcoSmart Vendors", 3799.9000000000005, 2),
            stats("Green Supply Co.", 4499.85, 2),
            stats("Idle Vendor", 0.0, 0),
            stats("SolarTech Solutions", 3399.92, 2),
        ];
        let rows = total_spend_per_vendor(&input);
        assert_eq!(
            rows,
            vec![
                VendorSpend { vendor_name: "Green Supply Co.".to_string(), total_spend: 4499.85 },
                VendorSpend { vendor_name: "EcoSmart Vendors".to_string(), total_spend: 3799.9 },
                VendorSpend { vendor_name: "SolarTech Solutions".to_string(), total_spend: 3399.92 },
            ]
        );
    }

    #[test]
    fn test_equal_spend_keeps_vendor_order() {
        let input = vec![stats("A", 10.0, 1), stats("B", 10.0, 1)];
        let rows = total_spend_per_vendor(&input);
        assert_eq!(rows[0].vendor_name, "A");
        assert_eq!(rows[1].vendor_name, "B");
    }
}
