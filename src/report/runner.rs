// ==========================================
// 采购分析报表系统 - 报表编排
// ==========================================
// 流程: 打开会话 → 读取数据 → 逐项计算 → 控制台输出 → 文件导出 → 关闭会话
// 单线程, 顺序执行, 无重试
// ==========================================

use crate::config::ReportConfig;
use crate::domain::report::{Alert, ProcurementReport};
use crate::engine::{
    average_delivery_delay, build_alerts, collect_vendor_stats, delayed_order_rate,
    overdue_invoices, pending_orders, total_spend_per_vendor, StockEngine,
    VendorPerformanceScorer,
};
use crate::perf::StepGuard;
use crate::report::console::write_report;
use crate::report::error::{ReportError, ReportResult};
use crate::report::export::{export_alerts, export_performance_csv};
use crate::report::session::ReportSession;
use crate::repository::RepositoryResult;
use std::io::Write;
use std::path::PathBuf;

/// 一次运行的产出
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: ProcurementReport,
    pub alerts: Vec<Alert>,
    pub performance_csv: PathBuf,
    pub alerts_file: PathBuf,
}

// ==========================================
// ReportRunner - 报表编排器
// ==========================================
pub struct ReportRunner {
    config: ReportConfig,
    stock_engine: StockEngine,
    scorer: VendorPerformanceScorer,
}

impl ReportRunner {
    pub fn new(config: ReportConfig) -> Self {
        let stock_engine = StockEngine::new(config.low_stock_threshold);
        Self {
            config,
            stock_engine,
            scorer: VendorPerformanceScorer::new(),
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// 运行完整报表序列, 控制台输出写到 stdout
    pub fn run(&self) -> ReportResult<RunSummary> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.run_with_output(&mut handle)
    }

    /// 运行完整报表序列, 控制台输出写到给定 writer
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> ReportResult<RunSummary> {
        let db_path = self.config.resolve_db_path();
        tracing::info!(db_path = %db_path, "开始报表运行");
        let session = ReportSession::open(&db_path)?;

        // 出错时 session 在 Drop 中释放
        let (report, alerts) = self.collect(&session)?;
        session.close()?;

        write_report(out, &report).map_err(|e| ReportError::Io {
            path: "<console>".to_string(),
            source: e,
        })?;

        let performance_csv = self.config.performance_csv_path();
        let alerts_file = self.config.alerts_path();
        export_performance_csv(&performance_csv, &report.vendor_scores)?;
        export_alerts(&alerts_file, &alerts)?;

        tracing::info!(
            vendors = report.vendor_scores.len(),
            alerts = alerts.len(),
            "报表运行完成"
        );

        Ok(RunSummary {
            report,
            alerts,
            performance_csv,
            alerts_file,
        })
    }

    /// 读取数据并计算全部报表与告警
    pub fn collect(&self, session: &ReportSession) -> ReportResult<(ProcurementReport, Vec<Alert>)> {
        let repo = session.repository()?;

        let vendors = timed_read("list_vendors", || repo.list_vendors())?;
        let products = timed_read("list_products", || repo.list_products())?;
        let lines = timed_read("list_order_lines", || repo.list_order_lines())?;
        let movements = timed_read("list_stock_movements", || repo.list_stock_movements())?;
        let invoice_lines = timed_read("list_invoice_lines", || repo.list_invoice_lines())?;

        // 以下均为内存计算
        let stats = collect_vendor_stats(&vendors, &lines);
        let stock_levels = self.stock_engine.current_stock_levels(&products, &movements);
        let overdue = overdue_invoices(&invoice_lines);
        let alerts = build_alerts(&self.stock_engine.low_stock(&stock_levels), &overdue);

        let report = ProcurementReport {
            spend_per_vendor: total_spend_per_vendor(&stats),
            average_delivery_delay: average_delivery_delay(&lines),
            delay_rates: delayed_order_rate(&stats),
            pending_orders: pending_orders(&lines),
            stock_levels,
            overdue_invoices: overdue,
            vendor_scores: self.scorer.score(&stats),
        };
        tracing::debug!(
            vendors = vendors.len(),
            order_lines = lines.len(),
            pending = report.pending_orders.len(),
            overdue = report.overdue_invoices.len(),
            "报表计算完成"
        );
        Ok((report, alerts))
    }
}

/// 在 StepGuard 内执行一次仓储读取并记录行数
fn timed_read<T, F>(step: &'static str, read: F) -> ReportResult<Vec<T>>
where
    F: FnOnce() -> RepositoryResult<Vec<T>>,
{
    let mut perf = StepGuard::new(step);
    let rows = read()?;
    perf.record_rows(rows.len());
    Ok(rows)
}
