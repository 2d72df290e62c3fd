// ==========================================
// 采购分析报表系统 - 样例数据
// ==========================================
// 职责: 重建 schema 并写入固定样例数据集
// 规模: 3 供应商 / 4 产品 / 6 订单 / 8 库存流水 / 5 发票
// ==========================================

use crate::db::{drop_schema, init_schema};
use crate::domain::invoice::Invoice;
use crate::domain::order::Order;
use crate::domain::stock::StockMovement;
use crate::domain::types::{InvoiceStatus, MovementType, OrderStatus};
use crate::domain::vendor::{Product, Vendor};
use crate::repository::{ProcurementRepository, RepositoryError, RepositoryResult};
use chrono::NaiveDate;
use rusqlite::Connection;

/// 样例数据集
#[derive(Debug, Clone)]
pub struct SampleDataset {
    pub vendors: Vec<Vendor>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub stock_movements: Vec<StockMovement>,
    pub invoices: Vec<Invoice>,
}

/// 写入计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub vendors: usize,
    pub products: usize,
    pub orders: usize,
    pub stock_movements: usize,
    pub invoices: usize,
}

fn date(y: i32, m: u32, d: u32) -> RepositoryResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| RepositoryError::FieldValueError {
        field: "date".to_string(),
        message: format!("非法日期: {}-{}-{}", y, m, d),
    })
}

fn order(
    order_id: i64,
    vendor_id: i64,
    product_id: i64,
    ordered: NaiveDate,
    delivered: Option<NaiveDate>,
    quantity: i64,
    status: OrderStatus,
) -> Order {
    Order {
        order_id,
        vendor_id,
        product_id,
        order_date: ordered,
        delivery_date: delivered,
        quantity,
        status,
    }
}

fn movement(movement_id: i64, product_id: i64, on: NaiveDate, quantity: i64) -> StockMovement {
    let movement_type = if quantity < 0 {
        MovementType::Out
    } else {
        MovementType::In
    };
    StockMovement {
        movement_id,
        product_id,
        movement_date: on,
        quantity,
        movement_type,
    }
}

fn invoice(
    invoice_id: i64,
    order_id: i64,
    invoiced: NaiveDate,
    due: NaiveDate,
    paid: Option<NaiveDate>,
    status: InvoiceStatus,
) -> Invoice {
    Invoice {
        invoice_id,
        order_id,
        invoice_date: invoiced,
        due_date: due,
        paid_date: paid,
        status,
    }
}

/// 固定样例数据集（2025 年 7 月）
pub fn sample_dataset() -> RepositoryResult<SampleDataset> {
    let jul = |d: u32| date(2025, 7, d);

    let vendors = vec![
        Vendor::new(1, "Green Supply Co."),
        Vendor::new(2, "EcoSmart Vendors"),
        Vendor::new(3, "SolarTech Solutions"),
    ];

    let products = vec![
        Product::new(1, "Smart Thermostat", 199.99),
        Product::new(2, "Solar Panel", 499.99),
        Product::new(3, "Heat Pump", 799.99),
        Product::new(4, "Battery Pack", 299.99),
    ];

    let orders = vec![
        order(1, 1, 1, jul(1)?, Some(jul(5)?), 10, OrderStatus::Delivered),
        order(2, 1, 2, jul(1)?, Some(jul(10)?), 5, OrderStatus::Delivered),
        order(3, 2, 3, jul(3)?, Some(jul(8)?), 3, OrderStatus::Delivered),
        order(4, 2, 1, jul(7)?, Some(jul(18)?), 7, OrderStatus::Delayed),
        order(5, 3, 4, jul(5)?, Some(jul(20)?), 6, OrderStatus::Delivered),
        order(6, 3, 3, jul(10)?, None, 2, OrderStatus::Pending),
    ];

    let stock_movements = vec![
        movement(1, 1, jul(5)?, 10),
        movement(2, 2, jul(10)?, 5),
        movement(3, 3, jul(8)?, 3),
        movement(4, 1, jul(18)?, 7),
        movement(5, 4, jul(20)?, 6),
        movement(6, 1, jul(22)?, -4),
        movement(7, 2, jul(22)?, -2),
        movement(8, 3, jul(22)?, -1),
    ];

    let invoices = vec![
        invoice(1, 1, jul(5)?, jul(10)?, Some(jul(9)?), InvoiceStatus::Paid),
        invoice(2, 2, jul(10)?, jul(20)?, Some(jul(19)?), InvoiceStatus::Paid),
        invoice(3, 3, jul(8)?, jul(15)?, None, InvoiceStatus::Unpaid),
        invoice(4, 4, jul(18)?, jul(25)?, None, InvoiceStatus::Overdue),
        invoice(5, 5, jul(20)?, jul(28)?, None, InvoiceStatus::Unpaid),
    ];

    Ok(SampleDataset {
        vendors,
        products,
        orders,
        stock_movements,
        invoices,
    })
}

/// 删除并重建全部业务表
pub fn reset_schema(conn: &Connection) -> RepositoryResult<()> {
    drop_schema(conn)?;
    init_schema(conn)?;
    Ok(())
}

/// 在单个事务中写入数据集
pub fn seed_dataset(conn: &Connection, dataset: &SampleDataset) -> RepositoryResult<SeedSummary> {
    let tx = conn.unchecked_transaction()?;
    {
        let repo = ProcurementRepository::new(&tx);
        for v in &dataset.vendors {
            repo.insert_vendor(v)?;
        }
        for p in &dataset.products {
            repo.insert_product(p)?;
        }
        for o in &dataset.orders {
            repo.insert_order(o)?;
        }
        for m in &dataset.stock_movements {
            repo.insert_stock_movement(m)?;
        }
        for i in &dataset.invoices {
            repo.insert_invoice(i)?;
        }
    }
    tx.commit()?;

    let summary = SeedSummary {
        vendors: dataset.vendors.len(),
        products: dataset.products.len(),
        orders: dataset.orders.len(),
        stock_movements: dataset.stock_movements.len(),
        invoices: dataset.invoices.len(),
    };
    tracing::info!(?summary, "样例数据写入完成");
    Ok(summary)
}

/// 重建 schema 并写入样例数据
pub fn seed_sample_data(conn: &Connection) -> RepositoryResult<SeedSummary> {
    reset_schema(conn)?;
    seed_dataset(conn, &sample_dataset()?)
}
