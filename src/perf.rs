// ==========================================
// 采购分析报表系统 - 性能统计
// ==========================================
// 每次仓储读取记录: 耗时 / SQL 数 / 慢 SQL 数 / 结果行数
// 依赖 rusqlite `trace` 特性提供的 trace/profile 回调
// 回调只在开关打开时挂到连接上, 关闭时连接上没有回调
// ==========================================

use rusqlite::Connection;
use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// SQL 统计开关环境变量
pub const PERF_SQL_ENV: &str = "PROCUREMENT_PERF_SQL";
/// 慢 SQL 阈值环境变量（毫秒）
pub const SLOW_SQL_MS_ENV: &str = "PROCUREMENT_SLOW_SQL_MS";

static SLOW_SQL_THRESHOLD_MS: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static STEP_DEPTH: Cell<u32> = Cell::new(0);
    static SQL_COUNT: Cell<u64> = Cell::new(0);
    static SLOW_SQL_COUNT: Cell<u64> = Cell::new(0);
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 压成单行并按字符截断
fn truncate_sql(sql: &str, max_chars: usize) -> String {
    let flat = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &flat[..cut]),
        None => flat,
    }
}

/// 安装 SQLite 语句 trace/profile（用于 SQL 计数 + 慢查询日志）
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭
/// - `PROCUREMENT_PERF_SQL=1` 强制开启
/// - `PROCUREMENT_SLOW_SQL_MS=50` 配置慢 SQL 阈值（毫秒）
pub fn install_sqlite_tracing(conn: &mut Connection) {
    let enabled = match std::env::var(PERF_SQL_ENV) {
        Ok(v) => is_true(&v),
        Err(_) => cfg!(debug_assertions),
    };

    if !enabled {
        conn.trace(None);
        conn.profile(None);
        return;
    }

    let slow_ms = std::env::var(SLOW_SQL_MS_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(if cfg!(debug_assertions) { 50 } else { 200 });
    SLOW_SQL_THRESHOLD_MS.store(slow_ms, Ordering::Relaxed);

    attach_callbacks(conn);
}

fn attach_callbacks(conn: &mut Connection) {
    conn.trace(Some(sql_trace_callback));
    conn.profile(Some(sql_profile_callback));
}

fn in_step() -> bool {
    STEP_DEPTH.with(|d| d.get() > 0)
}

fn bump(counter: &'static std::thread::LocalKey<Cell<u64>>) {
    counter.with(|c| c.set(c.get().saturating_add(1)));
}

fn sql_trace_callback(_sql: &str) {
    if in_step() {
        bump(&SQL_COUNT);
    }
}

fn sql_profile_callback(sql: &str, duration: Duration) {
    let ms = duration.as_millis() as u64;
    let threshold = SLOW_SQL_THRESHOLD_MS.load(Ordering::Relaxed);
    if threshold == 0 || ms < threshold {
        return;
    }

    tracing::warn!(
        target: "slow_sql",
        duration_ms = ms,
        sql = %truncate_sql(sql, 420),
        "slow sql"
    );
    if in_step() {
        bump(&SLOW_SQL_COUNT);
    }
}

/// 单个步骤的统计快照
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepStats {
    pub elapsed_ms: u64,
    pub sql_count: u64,
    pub slow_sql_count: u64,
    pub rows: Option<usize>,
}

/// 仓储读取性能 Guard
///
/// 只包住访问数据库的代码; Drop 时输出一条 `target: "perf"` 日志
///
/// ```ignore
/// let mut perf = procurement_analytics::perf::StepGuard::new("list_order_lines");
/// let rows = repo.list_order_lines()?;
/// perf.record_rows(rows.len());
/// ```
pub struct StepGuard {
    step: &'static str,
    start: Instant,
    sql_start: u64,
    slow_sql_start: u64,
    rows: Option<usize>,
}

impl StepGuard {
    pub fn new(step: &'static str) -> Self {
        STEP_DEPTH.with(|d| d.set(d.get().saturating_add(1)));
        Self {
            step,
            start: Instant::now(),
            sql_start: SQL_COUNT.with(|c| c.get()),
            slow_sql_start: SLOW_SQL_COUNT.with(|c| c.get()),
            rows: None,
        }
    }

    /// 记录本步骤读出的行数
    pub fn record_rows(&mut self, rows: usize) {
        self.rows = Some(rows);
    }

    /// 截至当前的统计
    pub fn stats(&self) -> StepStats {
        StepStats {
            elapsed_ms: self.start.elapsed().as_millis() as u64,
            sql_count: SQL_COUNT.with(|c| c.get()).saturating_sub(self.sql_start),
            slow_sql_count: SLOW_SQL_COUNT
                .with(|c| c.get())
                .saturating_sub(self.slow_sql_start),
            rows: self.rows,
        }
    }
}

impl Drop for StepGuard {
    fn drop(&mut self) {
        let stats = self.stats();
        tracing::info!(
            target: "perf",
            step = self.step,
            elapsed_ms = stats.elapsed_ms,
            sql_count = stats.sql_count,
            slow_sql_count = stats.slow_sql_count,
            rows = ?stats.rows,
            "done"
        );

        STEP_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_true() {
        assert!(is_true(" YES "));
        assert!(is_true("1"));
        assert!(!is_true("0"));
        assert!(!is_true("off"));
    }

    #[test]
    fn test_truncate_sql_flattens_whitespace() {
        assert_eq!(truncate_sql("SELECT 1\n    FROM t", 100), "SELECT 1 FROM t");
        assert_eq!(truncate_sql("SELECT 12345", 6), "SELECT…");
        assert_eq!(truncate_sql("SELECT '采购'", 9), "SELECT '采…");
    }

    #[test]
    fn test_step_guard_restores_depth() {
        {
            let mut guard = StepGuard::new("unit");
            guard.record_rows(3);
            assert!(in_step());
            assert_eq!(guard.stats().rows, Some(3));
        }
        assert!(!in_step());
    }

    #[test]
    fn test_step_guard_counts_statements_inside_step_only() {
        let mut conn = Connection::open_in_memory().unwrap();
        attach_callbacks(&mut conn);

        conn.execute_batch("CREATE TABLE t (v INTEGER);").unwrap();

        let guard = StepGuard::new("count");
        conn.execute("INSERT INTO t VALUES (1)", []).unwrap();
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM t", [], |r| r.get(0)).unwrap();
        assert_eq!(n, 1);
        assert_eq!(guard.stats().sql_count, 2);
    }
}
