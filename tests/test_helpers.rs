// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 临时数据库创建、样例数据写入、报表配置构造
// ==========================================

#![allow(dead_code)]

use procurement_analytics::config::ReportConfig;
use procurement_analytics::db::{init_schema, open_sqlite_connection};
use procurement_analytics::seed;
use rusqlite::Connection;
use std::error::Error;
use tempfile::TempDir;

/// 创建临时目录并初始化空 schema
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(TempDir, String), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("procurement.db").to_string_lossy().to_string();

    let conn = open_sqlite_connection(&db_path)?;
    init_schema(&conn)?;

    Ok((dir, db_path))
}

/// 创建临时数据库并写入样例数据集
pub fn create_sample_db() -> Result<(TempDir, String), Box<dyn Error>> {
    let (dir, db_path) = create_test_db()?;
    let conn = open_sqlite_connection(&db_path)?;
    seed::seed_sample_data(&conn)?;
    Ok((dir, db_path))
}

/// 打开测试数据库连接
pub fn open_test_connection(db_path: &str) -> Result<Connection, Box<dyn Error>> {
    Ok(open_sqlite_connection(db_path)?)
}

/// 输出到临时目录下 out/ 的报表配置
pub fn test_config(dir: &TempDir, db_path: &str) -> ReportConfig {
    ReportConfig {
        db_path: Some(db_path.to_string()),
        output_dir: dir.path().join("out"),
        performance_csv: "vendor_performance.csv".to_string(),
        alerts_file: "alerts.txt".to_string(),
        low_stock_threshold: 10,
    }
}
