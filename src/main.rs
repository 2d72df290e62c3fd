// ==========================================
// 采购分析报表系统 - 主入口
// ==========================================
// 用法:
//   procurement-analytics [db_path]
// 依次输出全部报表, 并导出 vendor_performance.csv / alerts.txt
// ==========================================

use anyhow::Context;
use procurement_analytics::{logging, ReportConfig, ReportRunner};

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", procurement_analytics::APP_NAME, procurement_analytics::VERSION);
    tracing::info!("==================================================");

    let config = ReportConfig::load()
        .context("加载配置失败")?
        .with_db_path(std::env::args().nth(1));
    let db_path = config.resolve_db_path();
    tracing::info!(
        db_path = %db_path,
        output_dir = %config.output_dir.display(),
        low_stock_threshold = config.low_stock_threshold,
        "使用配置"
    );

    let runner = ReportRunner::new(config.with_db_path(Some(db_path.clone())));
    let summary = runner
        .run()
        .with_context(|| format!("报表运行失败 (db: {})", db_path))?;

    println!();
    println!(
        "Exported vendor performance to '{}'",
        summary.performance_csv.display()
    );
    println!("Exported alerts to '{}'", summary.alerts_file.display());
    Ok(())
}
