// ==========================================
// 采购分析报表系统 - 数值工具
// ==========================================
// 舍入在应用层完成, 不依赖 SQL ROUND
// 规则: 保留 2 位小数, 中点远离零 (与 SQLite ROUND 一致)
// ==========================================

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// 金额/评分保留小数位数
pub const REPORT_DECIMAL_PLACES: u32 = 2;

/// 保留 2 位小数（中点远离零）
///
/// NaN / 无穷大无法转成 Decimal，原样返回
pub fn round_2dp(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(REPORT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_2dp(0.125), 0.13);
        assert_eq!(round_2dp(-0.125), -0.13);
        assert_eq!(round_2dp(67.2225185283954), 67.22);
        assert_eq!(round_2dp(87.77814816049423), 87.78);
    }

    #[test]
    fn test_round_keeps_float_noise_out() {
        assert_eq!(round_2dp(3799.9000000000005), 3799.9);
        assert_eq!(round_2dp(100.0), 100.0);
    }

    #[test]
    fn test_round_non_finite_passthrough() {
        assert!(round_2dp(f64::NAN).is_nan());
        assert_eq!(round_2dp(f64::INFINITY), f64::INFINITY);
    }
}
