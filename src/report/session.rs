// ==========================================
// 采购分析报表系统 - 报表会话
// ==========================================
// 职责: 数据源连接的作用域获取与释放
// 红线: 任何退出路径 (成功/错误/panic) 都会释放连接
// ==========================================

use crate::db::{
    missing_business_tables, open_sqlite_connection_read_only, read_schema_version,
    CURRENT_SCHEMA_VERSION,
};
use crate::perf::install_sqlite_tracing;
use crate::report::error::{ReportError, ReportResult};
use crate::repository::{ProcurementRepository, RepositoryError};
use rusqlite::Connection;

/// 只读报表会话
pub struct ReportSession {
    db_path: String,
    conn: Option<Connection>,
}

impl ReportSession {
    /// 打开数据源并校验业务表
    ///
    /// - 五张业务表缺任意一张: SchemaMismatch
    /// - 无 schema_version (外部建库): 仅告警
    /// - schema_version 与当前版本不同: SchemaMismatch
    pub fn open(db_path: &str) -> ReportResult<Self> {
        let mut conn = open_sqlite_connection_read_only(db_path).map_err(|e| {
            ReportError::DataSourceUnavailable {
                db_path: db_path.to_string(),
                message: e.to_string(),
            }
        })?;

        let missing = missing_business_tables(&conn).map_err(RepositoryError::from)?;
        if !missing.is_empty() {
            return Err(RepositoryError::SchemaMismatch(format!(
                "缺少业务表: {}",
                missing.join(", ")
            ))
            .into());
        }

        let version = read_schema_version(&conn).map_err(RepositoryError::from)?;
        match version {
            None => tracing::warn!(db_path, "未登记 schema_version, 按现有业务表读取"),
            Some(v) if v != CURRENT_SCHEMA_VERSION => {
                return Err(RepositoryError::SchemaMismatch(format!(
                    "schema_version={} (当前支持 {})",
                    v, CURRENT_SCHEMA_VERSION
                ))
                .into());
            }
            Some(_) => {}
        }

        install_sqlite_tracing(&mut conn);
        tracing::info!(db_path, schema_version = ?version, "数据库连接已打开");

        Ok(Self {
            db_path: db_path.to_string(),
            conn: Some(conn),
        })
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// 借出仓储
    pub fn repository(&self) -> ReportResult<ProcurementRepository<'_>> {
        match self.conn.as_ref() {
            Some(conn) => Ok(ProcurementRepository::new(conn)),
            None => Err(ReportError::DataSourceUnavailable {
                db_path: self.db_path.clone(),
                message: "连接已关闭".to_string(),
            }),
        }
    }

    /// 显式关闭连接, 返回关闭错误
    pub fn close(mut self) -> ReportResult<()> {
        match self.conn.take() {
            Some(conn) => {
                conn.close().map_err(|(_, e)| RepositoryError::from(e))?;
                tracing::info!(db_path = %self.db_path, "数据库连接已关闭");
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Drop for ReportSession {
    fn drop(&mut self) {
        // 未经 close() 的路径 (错误返回 / panic) 在此释放
        if let Some(conn) = self.conn.take() {
            drop(conn);
            tracing::warn!(db_path = %self.db_path, "数据库连接在异常路径上释放");
        }
    }
}
