// ==========================================
// 采购分析报表系统 - 供应商绩效评分引擎
// ==========================================
// 公式:
//   score = 0.5 × (100 − delay_rate) + 50 × (spend / max_spend)
// 规则:
// - 无订单的供应商: delay_rate = 0, spend = 0
// - 不存在正的 max_spend 时, 采购额项恒为 0
// - 结果保留 2 位小数, 按分数降序, 同分保持供应商顺序
// ==========================================

use crate::domain::report::VendorScore;
use crate::engine::numeric::round_2dp;
use crate::engine::vendor_stats::VendorStats;

/// 准时项权重 (作用于 100 − delay_rate)
pub const ON_TIME_WEIGHT: f64 = 0.5;

/// 采购额项满分 (spend / max_spend 的系数)
pub const SPEND_WEIGHT: f64 = 50.0;

// ==========================================
// VendorPerformanceScorer - 绩效评分引擎
// ==========================================
pub struct VendorPerformanceScorer {
    // 无状态引擎
}

impl Default for VendorPerformanceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorPerformanceScorer {
    pub fn new() -> Self {
        Self {}
    }

    /// 全局最大采购额（仅统计有订单的供应商）
    pub fn global_max_spend(&self, stats: &[VendorStats]) -> Option<f64> {
        stats
            .iter()
            .filter(|s| s.has_orders())
            .map(|s| s.total_spend)
            .reduce(f64::max)
    }

    /// 单个供应商的原始分数（未舍入）
    pub fn raw_score(&self, delay_rate: f64, spend: f64, max_spend: Option<f64>) -> f64 {
        let spend_term = match max_spend {
            Some(max) if max > 0.0 => SPEND_WEIGHT * (spend / max),
            _ => 0.0,
        };
        ON_TIME_WEIGHT * (100.0 - delay_rate) + spend_term
    }

    /// 计算全部供应商的绩效排名
    ///
    /// # 参数
    /// - `stats`: 与供应商列表同序的订单统计（含无订单供应商）
    ///
    /// # 返回
    /// (供应商名称, 分数) 列表, 分数降序
    pub fn score(&self, stats: &[VendorStats]) -> Vec<VendorScore> {
        let max_spend = self.global_max_spend(stats);
        if max_spend.map_or(true, |m| m <= 0.0) {
            tracing::warn!("没有任何供应商存在正的采购额, 采购额项按 0 计");
        }

        let mut scores: Vec<VendorScore> = stats
            .iter()
            .map(|s| {
                let delay_rate = s.delay_rate().unwrap_or(0.0);
                let spend = if s.has_orders() { s.total_spend } else { 0.0 };
                let raw = self.raw_score(delay_rate, spend, max_spend);
                tracing::debug!(
                    vendor = %s.vendor_name,
                    delay_rate,
                    spend,
                    raw_score = raw,
                    "vendor score"
                );
                VendorScore {
                    vendor_name: s.vendor_name.clone(),
                    performance_score: round_2dp(raw),
                }
            })
            .collect();

        // sort_by 为稳定排序, 同分保持供应商插入顺序
        scores.sort_by(|a, b| b.performance_score.total_cmp(&a.performance_score));
        scores
    }
}
