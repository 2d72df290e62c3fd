// ==========================================
// 采购分析报表系统 - 采购数据仓储
// ==========================================
// 职责: vendors / products / orders / stock_movements / invoices 的读取与写入
// 说明: 聚合计算不在 SQL 中完成, 由 engine 层基于读取结果计算
// ==========================================

use crate::domain::invoice::{Invoice, InvoiceLine};
use crate::domain::order::{Order, OrderLine};
use crate::domain::stock::StockMovement;
use crate::domain::types::{InvoiceStatus, MovementType, OrderStatus};
use crate::domain::vendor::{Product, Vendor};
use crate::repository::error::RepositoryResult;
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

/// 采购数据仓储
///
/// 持有借用的连接, 连接生命周期由调用方 (ReportSession / seed) 管理
pub struct ProcurementRepository<'a> {
    conn: &'a Connection,
}

/// 把文本列解析为枚举, 失败时转为 FromSqlConversionFailure
fn parse_text_column<T>(
    row: &Row<'_>,
    idx: usize,
    field: &str,
    parse: fn(&str) -> Option<T>,
) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    parse(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("{} 取值非法: {}", field, raw).into(),
        )
    })
}

impl<'a> ProcurementRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    // ==========================================
    // 读取
    // ==========================================

    /// 全部供应商（按 vendor_id，即插入顺序）
    pub fn list_vendors(&self) -> RepositoryResult<Vec<Vendor>> {
        let mut stmt = self
            .conn
            .prepare("SELECT vendor_id, vendor_name FROM vendors ORDER BY vendor_id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Vendor {
                vendor_id: row.get(0)?,
                vendor_name: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// 全部产品（按 product_id）
    pub fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        let mut stmt = self.conn.prepare(
            "SELECT product_id, product_name, unit_price FROM products ORDER BY product_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Product {
                product_id: row.get(0)?,
                product_name: row.get(1)?,
                unit_price: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// orders 原始记录（按 order_id）
    pub fn list_orders(&self) -> RepositoryResult<Vec<Order>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT order_id, vendor_id, product_id, order_date, delivery_date, quantity, status
            FROM orders
            ORDER BY order_id
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Order {
                order_id: row.get(0)?,
                vendor_id: row.get(1)?,
                product_id: row.get(2)?,
                order_date: row.get(3)?,
                delivery_date: row.get(4)?,
                quantity: row.get(5)?,
                status: parse_text_column(row, 6, "orders.status", OrderStatus::parse)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// 订单明细视图: orders ⋈ vendors ⋈ products（按 order_id）
    pub fn list_order_lines(&self) -> RepositoryResult<Vec<OrderLine>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT
                o.order_id,
                o.vendor_id,
                v.vendor_name,
                p.product_name,
                p.unit_price,
                o.quantity,
                o.order_date,
                o.delivery_date,
                o.status
            FROM orders o
            JOIN vendors v ON o.vendor_id = v.vendor_id
            JOIN products p ON o.product_id = p.product_id
            ORDER BY o.order_id
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(OrderLine {
                order_id: row.get(0)?,
                vendor_id: row.get(1)?,
                vendor_name: row.get(2)?,
                product_name: row.get(3)?,
                unit_price: row.get(4)?,
                quantity: row.get(5)?,
                order_date: row.get(6)?,
                delivery_date: row.get(7)?,
                status: parse_text_column(row, 8, "orders.status", OrderStatus::parse)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// 库存流水（按 movement_id）
    pub fn list_stock_movements(&self) -> RepositoryResult<Vec<StockMovement>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT movement_id, product_id, movement_date, quantity, type
            FROM stock_movements
            ORDER BY movement_id
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(StockMovement {
                movement_id: row.get(0)?,
                product_id: row.get(1)?,
                movement_date: row.get(2)?,
                quantity: row.get(3)?,
                movement_type: parse_text_column(
                    row,
                    4,
                    "stock_movements.type",
                    MovementType::parse,
                )?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// 发票视图: invoices ⋈ orders ⋈ vendors（按 invoice_id）
    pub fn list_invoice_lines(&self) -> RepositoryResult<Vec<InvoiceLine>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT i.invoice_id, o.order_id, v.vendor_name, i.due_date, i.status
            FROM invoices i
            JOIN orders o ON i.order_id = o.order_id
            JOIN vendors v ON o.vendor_id = v.vendor_id
            ORDER BY i.invoice_id
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(InvoiceLine {
                invoice_id: row.get(0)?,
                order_id: row.get(1)?,
                vendor_name: row.get(2)?,
                due_date: row.get(3)?,
                status: parse_text_column(row, 4, "invoices.status", InvoiceStatus::parse)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    // ==========================================
    // 写入（仅用于建库/样例数据）
    // ==========================================

    pub fn insert_vendor(&self, vendor: &Vendor) -> RepositoryResult<()> {
        self.conn.execute(
            "INSERT INTO vendors (vendor_id, vendor_name) VALUES (?1, ?2)",
            params![vendor.vendor_id, vendor.vendor_name],
        )?;
        Ok(())
    }

    pub fn insert_product(&self, product: &Product) -> RepositoryResult<()> {
        self.conn.execute(
            "INSERT INTO products (product_id, product_name, unit_price) VALUES (?1, ?2, ?3)",
            params![product.product_id, product.product_name, product.unit_price],
        )?;
        Ok(())
    }

    pub fn insert_order(&self, order: &Order) -> RepositoryResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO orders (order_id, vendor_id, product_id, order_date, delivery_date, quantity, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                order.order_id,
                order.vendor_id,
                order.product_id,
                order.order_date,
                order.delivery_date,
                order.quantity,
                order.status.to_string(),
            ],
        )?;
        Ok(())
    }

    pub fn insert_stock_movement(&self, movement: &StockMovement) -> RepositoryResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO stock_movements (movement_id, product_id, movement_date, quantity, type)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                movement.movement_id,
                movement.product_id,
                movement.movement_date,
                movement.quantity,
                movement.movement_type.to_string(),
            ],
        )?;
        Ok(())
    }

    pub fn insert_invoice(&self, invoice: &Invoice) -> RepositoryResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO invoices (invoice_id, order_id, invoice_date, due_date, paid_date, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                invoice.invoice_id,
                invoice.order_id,
                invoice.invoice_date,
                invoice.due_date,
                invoice.paid_date,
                invoice.status.to_string(),
            ],
        )?;
        Ok(())
    }
}
