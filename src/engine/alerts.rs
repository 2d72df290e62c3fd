// ==========================================
// 采购分析报表系统 - 告警生成
// ==========================================
// 顺序: 先低库存, 后逾期发票
// ==========================================

use crate::domain::report::{Alert, OverdueInvoice, StockLevel};

/// 组装告警列表
pub fn build_alerts(low_stock: &[&StockLevel], overdue: &[OverdueInvoice]) -> Vec<Alert> {
    let stock_alerts = low_stock.iter().map(|l| Alert::LowStock {
        product_name: l.product_name.clone(),
        current_stock: l.current_stock,
    });

    let invoice_alerts = overdue.iter().map(|i| Alert::OverdueInvoice {
        invoice_id: i.invoice_id,
        order_id: i.order_id,
        vendor_name: i.vendor_name.clone(),
        due_date: i.due_date,
    });

    stock_alerts.chain(invoice_alerts).collect()
}
