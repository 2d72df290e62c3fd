// 重建 schema 并写入样例数据集。
//
// Usage:
//   cargo run --bin seed_sample_db -- [db_path]
//
// 已存在的数据库会先备份为 <db_path>.bak.<时间戳>。

use anyhow::Context;
use chrono::Local;
use procurement_analytics::config::ReportConfig;
use procurement_analytics::db::open_sqlite_connection;
use procurement_analytics::{logging, seed};
use std::fs;
use std::path::Path;

fn backup_existing_db(db_path: &str) -> anyhow::Result<()> {
    let path = Path::new(db_path);
    if !path.exists() {
        return Ok(());
    }

    let ts = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let backup_path = format!("{}.bak.{}", db_path, ts);
    fs::copy(path, &backup_path)
        .with_context(|| format!("备份数据库失败: {} -> {}", db_path, backup_path))?;

    tracing::info!(from = db_path, to = %backup_path, "已备份旧数据库");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let db_path = ReportConfig::load()
        .context("加载配置失败")?
        .with_db_path(std::env::args().nth(1))
        .resolve_db_path();

    backup_existing_db(&db_path)?;

    let conn = open_sqlite_connection(&db_path)
        .with_context(|| format!("无法打开数据库: {}", db_path))?;
    let summary = seed::seed_sample_data(&conn).context("写入样例数据失败")?;

    println!("Database setup complete: {}", db_path);
    println!(
        "vendors={} products={} orders={} stock_movements={} invoices={}",
        summary.vendors, summary.products, summary.orders, summary.stock_movements, summary.invoices
    );
    Ok(())
}
