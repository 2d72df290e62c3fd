// ==========================================
// 采购分析报表系统 - 发票分析
// ==========================================
// 逾期判定只看状态字段 (Overdue), 不做日期比较
// ==========================================

use crate::domain::invoice::InvoiceLine;
use crate::domain::report::OverdueInvoice;
use crate::domain::types::InvoiceStatus;

/// 逾期发票（按 invoice_id 顺序）
pub fn overdue_invoices(lines: &[InvoiceLine]) -> Vec<OverdueInvoice> {
    lines
        .iter()
        .filter(|l| l.status == InvoiceStatus::Overdue)
        .map(|l| OverdueInvoice {
            invoice_id: l.invoice_id,
            order_id: l.order_id,
            vendor_name: l.vendor_name.clone(),
            due_date: l.due_date,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn inv(id: i64, due: &str, status: InvoiceStatus) -> InvoiceLine {
        InvoiceLine {
            invoice_id: id,
            order_id: id + 100,
            vendor_name: "EcoSmart Vendors".to_string(),
            due_date: NaiveDate::parse_from_str(due, "%Y-%m-%d").unwrap(),
            status,
        }
    }

    #[test]
    fn test_only_status_overdue_counts() {
        // 3 号已过期但状态为 Unpaid, 不计入
        let lines = vec![
            inv(1, "2025-07-10", InvoiceStatus::Paid),
            inv(3, "2020-01-01", InvoiceStatus::Unpaid),
            inv(4, "2025-07-25", InvoiceStatus::Overdue),
        ];
        let overdue = overdue_invoices(&lines);
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].invoice_id, 4);
        assert_eq!(overdue[0].order_id, 104);
    }
}
