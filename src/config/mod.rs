// ==========================================
// 采购分析报表系统 - 配置层
// ==========================================
// 职责: 报表运行配置, 支持多级覆写
// 优先级: 默认值 < JSON 配置文件 < 环境变量 < 命令行参数
// ==========================================

pub mod report_config;

// 重导出核心配置
pub use report_config::{config_keys, ConfigError, ReportConfig};
