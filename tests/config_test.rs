// ==========================================
// ReportConfig 集成测试
// ==========================================
// 测试目标: JSON 配置文件与环境变量的覆写顺序
// ==========================================

use procurement_analytics::config::{config_keys, ConfigError, ReportConfig};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

fn env_from(map: HashMap<&'static str, String>) -> impl Fn(&str) -> Option<String> {
    move |key| map.get(key).cloned()
}

#[test]
fn test_partial_json_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("report.json");
    fs::write(&file, r#"{ "output_dir": "/tmp/reports", "low_stock_threshold": 25 }"#).unwrap();

    let mut env = HashMap::new();
    env.insert(config_keys::CONFIG_FILE, file.to_string_lossy().to_string());
    env.insert(config_keys::DB_PATH, "/data/procurement.db".to_string());

    let config = ReportConfig::from_sources(env_from(env)).expect("config should load");
    assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
    assert_eq!(config.low_stock_threshold, 25);
    assert_eq!(config.performance_csv, "vendor_performance.csv");
    assert_eq!(config.alerts_file, "alerts.txt");
    assert_eq!(config.db_path.as_deref(), Some("/data/procurement.db"));
}

#[test]
fn test_env_threshold_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("report.json");
    fs::write(&file, r#"{ "low_stock_threshold": 25 }"#).unwrap();

    let mut env = HashMap::new();
    env.insert(config_keys::CONFIG_FILE, file.to_string_lossy().to_string());
    env.insert(config_keys::LOW_STOCK_THRESHOLD, "7".to_string());

    let config = ReportConfig::from_sources(env_from(env)).unwrap();
    assert_eq!(config.low_stock_threshold, 7);
}

#[test]
fn test_missing_and_malformed_config_files() {
    let dir = tempfile::tempdir().unwrap();

    let mut env = HashMap::new();
    env.insert(
        config_keys::CONFIG_FILE,
        dir.path().join("absent.json").to_string_lossy().to_string(),
    );
    let err = ReportConfig::from_sources(env_from(env)).unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    let mut env = HashMap::new();
    env.insert(config_keys::CONFIG_FILE, bad.to_string_lossy().to_string());
    let err = ReportConfig::from_sources(env_from(env)).unwrap_err();
    assert!(matches!(err, ConfigError::FileParse { .. }));
}
