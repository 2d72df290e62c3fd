// ==========================================
// 采购分析报表系统 - 控制台输出
// ==========================================
// 按固定顺序输出各报表段落, 文本格式不作兼容性承诺
// ==========================================

use crate::domain::report::ProcurementReport;
use std::io::{self, Write};

/// 输出完整报表
pub fn write_report<W: Write>(out: &mut W, report: &ProcurementReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total Spend per Vendor:")?;
    for row in &report.spend_per_vendor {
        writeln!(out, "  {}: ${:.2}", row.vendor_name, row.total_spend)?;
    }

    writeln!(out)?;
    writeln!(out, "Average Delivery Delay (in days):")?;
    match report.average_delivery_delay {
        Some(days) => writeln!(out, "  {:.2} days", days)?,
        None => writeln!(out, "  No deliveries recorded")?,
    }

    writeln!(out)?;
    writeln!(out, "Delayed Order Rate by Vendor:")?;
    for row in &report.delay_rates {
        writeln!(out, "  {}: {:.2}% delayed", row.vendor_name, row.delay_rate)?;
    }

    writeln!(out)?;
    writeln!(out, "Pending Orders:")?;
    if report.pending_orders.is_empty() {
        writeln!(out, "  No pending orders.")?;
    }
    for row in &report.pending_orders {
        writeln!(
            out,
            "  Order {} - {} - {} (Ordered: {})",
            row.order_id,
            row.vendor_name,
            row.product_name,
            row.order_date.format("%Y-%m-%d")
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Current Stock Levels:")?;
    for row in &report.stock_levels {
        writeln!(out, "  {}: {}", row.product_name, row.current_stock)?;
    }

    writeln!(out)?;
    writeln!(out, "Overdue Invoices:")?;
    if report.overdue_invoices.is_empty() {
        writeln!(out, "  No overdue invoices.")?;
    }
    for row in &report.overdue_invoices {
        writeln!(
            out,
            "  Invoice {} for Order {} - {}, Due: {}",
            row.invoice_id,
            row.order_id,
            row.vendor_name,
            row.due_date.format("%Y-%m-%d")
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Vendor Performance Scores:")?;
    for row in &report.vendor_scores {
        writeln!(out, "  {}: {:.2}", row.vendor_name, row.performance_score)?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_prints_placeholders() {
        let mut buf = Vec::new();
        write_report(&mut buf, &ProcurementReport::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("No deliveries recorded"));
        assert!(text.contains("No pending orders."));
        assert!(text.contains("No overdue invoices."));
    }
}
