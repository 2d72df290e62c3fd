// ==========================================
// 采购分析报表系统 - 报表配置
// ==========================================
// 来源:
// - 默认值
// - JSON 配置文件 (PROCUREMENT_CONFIG 指定路径, 字段均可省略)
// - 环境变量覆写
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置相关环境变量
pub mod config_keys {
    pub const CONFIG_FILE: &str = "PROCUREMENT_CONFIG";
    pub const DB_PATH: &str = "PROCUREMENT_DB_PATH";
    pub const OUTPUT_DIR: &str = "PROCUREMENT_OUTPUT_DIR";
    pub const LOW_STOCK_THRESHOLD: &str = "PROCUREMENT_LOW_STOCK_THRESHOLD";
}

/// 默认数据库文件名
pub const DEFAULT_DB_FILE: &str = "advanced_procurement.db";
/// 绩效评分 CSV 文件名
pub const DEFAULT_PERFORMANCE_CSV: &str = "vendor_performance.csv";
/// 告警文本文件名
pub const DEFAULT_ALERTS_FILE: &str = "alerts.txt";

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误 ({path}): {source}")]
    FileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

// ==========================================
// ReportConfig - 报表运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub db_path: Option<String>,    // SQLite 数据库路径 (None 时取默认位置)
    pub output_dir: PathBuf,        // 导出目录
    pub performance_csv: String,    // 绩效评分 CSV 文件名
    pub alerts_file: String,        // 告警文件名
    pub low_stock_threshold: i64,   // 低库存阈值 (严格小于)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            output_dir: PathBuf::from("."),
            performance_csv: DEFAULT_PERFORMANCE_CSV.to_string(),
            alerts_file: DEFAULT_ALERTS_FILE.to_string(),
            low_stock_threshold: crate::engine::stock::DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl ReportConfig {
    /// 从进程环境加载配置
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(|key| std::env::var(key).ok())
    }

    /// 从给定的变量来源加载配置
    ///
    /// # 参数
    /// - env: 变量读取函数（测试中可替换为 HashMap）
    pub fn from_sources<F>(env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| {
            env(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = match lookup(config_keys::CONFIG_FILE) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(db_path) = lookup(config_keys::DB_PATH) {
            config.db_path = Some(db_path);
        }
        if let Some(dir) = lookup(config_keys::OUTPUT_DIR) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(config_keys::LOW_STOCK_THRESHOLD) {
            config.low_stock_threshold =
                raw.parse::<i64>().map_err(|e| ConfigError::InvalidValue {
                    key: config_keys::LOW_STOCK_THRESHOLD.to_string(),
                    value: raw.clone(),
                    message: e.to_string(),
                })?;
        }

        Ok(config)
    }

    /// 从 JSON 文件加载（未出现的字段取默认值）
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::FileParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// 命令行指定的数据库路径优先
    pub fn with_db_path(mut self, db_path: Option<String>) -> Self {
        if let Some(path) = db_path.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()) {
            self.db_path = Some(path);
        }
        self
    }

    /// 实际使用的数据库路径; 未指定时才落到默认位置
    pub fn resolve_db_path(&self) -> String {
        match &self.db_path {
            Some(path) => path.clone(),
            None => get_default_db_path(),
        }
    }

    pub fn performance_csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.performance_csv)
    }

    pub fn alerts_path(&self) -> PathBuf {
        self.output_dir.join(&self.alerts_file)
    }
}

/// 默认数据库路径
///
/// 顺序: 用户数据目录 → 当前目录 (会创建用户数据目录下的子目录)
pub fn get_default_db_path() -> String {
    let mut path = PathBuf::from(".").join(DEFAULT_DB_FILE);

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("procurement-analytics");
        // 目录创建失败时退回当前目录
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join(DEFAULT_DB_FILE);
        }
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let config = ReportConfig::from_sources(env_of(&[
            (config_keys::DB_PATH, "/tmp/p.db"),
            (config_keys::OUTPUT_DIR, "/tmp/out"),
            (config_keys::LOW_STOCK_THRESHOLD, " 5 "),
        ]))
        .unwrap();

        assert_eq!(config.db_path.as_deref(), Some("/tmp/p.db"));
        assert_eq!(config.resolve_db_path(), "/tmp/p.db");
        assert_eq!(config.low_stock_threshold, 5);
        assert_eq!(
            config.performance_csv_path(),
            PathBuf::from("/tmp/out/vendor_performance.csv")
        );
        assert_eq!(config.alerts_path(), PathBuf::from("/tmp/out/alerts.txt"));
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let err = ReportConfig::from_sources(env_of(&[(config_keys::LOW_STOCK_THRESHOLD, "ten")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_cli_db_path_wins() {
        let config = ReportConfig::from_sources(env_of(&[(config_keys::DB_PATH, "/tmp/env.db")]))
            .unwrap()
            .with_db_path(Some("cli.db".to_string()));
        assert_eq!(config.resolve_db_path(), "cli.db");

        let config = config.with_db_path(Some("   ".to_string()));
        assert_eq!(config.resolve_db_path(), "cli.db");
    }

    #[test]
    fn test_db_path_only_comes_from_given_sources() {
        // 未提供 DB_PATH 时保持 None, 不读取进程环境
        let config = ReportConfig::from_sources(env_of(&[])).unwrap();
        assert_eq!(config.db_path, None);

        let config = config.with_db_path(None);
        assert_eq!(config.db_path, None);
    }
}
