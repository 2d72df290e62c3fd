// ==========================================
// 采购分析报表系统 - SQLite 连接与建表
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 集中维护五张业务表的 DDL 与 schema_version
// ==========================================

use rusqlite::OptionalExtension;
use rusqlite::{Connection, OpenFlags};
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 当前代码所期望的 schema_version
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// 业务表（按依赖逆序，DROP 时使用）
pub const BUSINESS_TABLES: [&str; 5] = [
    "invoices",
    "stock_movements",
    "orders",
    "products",
    "vendors",
];

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS vendors (
    vendor_id INTEGER PRIMARY KEY,
    vendor_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS products (
    product_id INTEGER PRIMARY KEY,
    product_name TEXT NOT NULL,
    unit_price REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS orders (
    order_id INTEGER PRIMARY KEY,
    vendor_id INTEGER NOT NULL REFERENCES vendors(vendor_id),
    product_id INTEGER NOT NULL REFERENCES products(product_id),
    order_date TEXT NOT NULL,
    delivery_date TEXT,
    quantity INTEGER NOT NULL CHECK(quantity > 0),
    status TEXT NOT NULL CHECK(status IN ('Delivered', 'Delayed', 'Pending'))
);

CREATE TABLE IF NOT EXISTS stock_movements (
    movement_id INTEGER PRIMARY KEY,
    product_id INTEGER NOT NULL REFERENCES products(product_id),
    movement_date TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    type TEXT NOT NULL CHECK(type IN ('IN', 'OUT'))
);

CREATE TABLE IF NOT EXISTS invoices (
    invoice_id INTEGER PRIMARY KEY,
    order_id INTEGER NOT NULL REFERENCES orders(order_id),
    invoice_date TEXT NOT NULL,
    due_date TEXT NOT NULL,
    paid_date TEXT,
    status TEXT NOT NULL CHECK(status IN ('Paid', 'Unpaid', 'Overdue'))
);
"#;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 以只读方式打开已有数据库（文件不存在时报错，不会新建）
pub fn open_sqlite_connection_read_only(db_path: &str) -> rusqlite::Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(db_path, flags)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 创建业务表并登记 schema_version（幂等）
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [CURRENT_SCHEMA_VERSION],
    )?;
    Ok(())
}

/// 删除全部业务表及 schema_version
pub fn drop_schema(conn: &Connection) -> rusqlite::Result<()> {
    for table in BUSINESS_TABLES {
        conn.execute_batch(&format!("DROP TABLE IF EXISTS {};", table))?;
    }
    conn.execute_batch("DROP TABLE IF EXISTS schema_version;")?;
    Ok(())
}

/// 列出缺失的业务表（按 BUSINESS_TABLES 顺序）
pub fn missing_business_tables(conn: &Connection) -> rusqlite::Result<Vec<&'static str>> {
    let mut stmt = conn.prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1")?;
    let mut missing = Vec::new();
    for table in BUSINESS_TABLES {
        if !stmt.exists([table])? {
            missing.push(table);
        }
    }
    Ok(missing)
}

/// 读取 schema_version（若表不存在则返回 None）
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> = conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        assert_eq!(read_schema_version(&conn).unwrap(), None);

        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
        assert_eq!(read_schema_version(&conn).unwrap(), Some(CURRENT_SCHEMA_VERSION));
    }

    #[test]
    fn test_drop_schema_removes_tables() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        drop_schema(&conn).unwrap();
        assert_eq!(read_schema_version(&conn).unwrap(), None);
        assert_eq!(missing_business_tables(&conn).unwrap(), BUSINESS_TABLES.to_vec());
    }

    #[test]
    fn test_missing_business_tables_lists_only_absent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        assert!(missing_business_tables(&conn).unwrap().is_empty());

        conn.execute_batch("DROP TABLE invoices; DROP TABLE stock_movements;").unwrap();
        assert_eq!(
            missing_business_tables(&conn).unwrap(),
            vec!["invoices", "stock_movements"]
        );
    }

    #[test]
    fn test_read_only_open_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.db");
        assert!(open_sqlite_connection_read_only(path.to_str().unwrap()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_movement_type_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        init_schema(&conn).unwrap();
        conn.execute("INSERT INTO products VALUES (1, 'P', 1.0)", []).unwrap();
        let res = conn.execute(
            "INSERT INTO stock_movements VALUES (1, 1, '2025-07-01', 5, 'MOVE')",
            [],
        );
        assert!(res.is_err());
    }
}
