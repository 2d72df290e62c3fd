// ==========================================
// 采购分析报表系统 - 文件导出
// ==========================================
// vendor_performance.csv: vendor_name,performance_score (降序, 2 位小数)
// alerts.txt: 每行一条告警
// ==========================================

use crate::domain::report::{Alert, VendorScore};
use crate::report::error::{ReportError, ReportResult};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV 表头
pub const PERFORMANCE_CSV_HEADER: [&str; 2] = ["vendor_name", "performance_score"];

/// 写绩效评分 CSV
pub fn write_performance_csv<W: Write>(writer: W, scores: &[VendorScore]) -> ReportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(PERFORMANCE_CSV_HEADER)?;
    for score in scores {
        csv_writer.write_record([
            score.vendor_name.as_str(),
            format!("{:.2}", score.performance_score).as_str(),
        ])?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// 写告警文本
pub fn write_alerts<W: Write>(mut writer: W, alerts: &[Alert]) -> std::io::Result<()> {
    for alert in alerts {
        writeln!(writer, "{}", alert)?;
    }
    writer.flush()
}

fn create_file(path: &Path) -> ReportResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    Ok(BufWriter::new(file))
}

/// 导出绩效评分 CSV 文件
pub fn export_performance_csv(path: &Path, scores: &[VendorScore]) -> ReportResult<()> {
    write_performance_csv(create_file(path)?, scores)?;
    tracing::info!(path = %path.display(), rows = scores.len(), "绩效评分已导出");
    Ok(())
}

/// 导出告警文件（无告警时写空文件）
pub fn export_alerts(path: &Path, alerts: &[Alert]) -> ReportResult<()> {
    write_alerts(create_file(path)?, alerts).map_err(|e| ReportError::io(path, e))?;
    tracing::info!(path = %path.display(), alerts = alerts.len(), "告警已导出");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_layout() {
        let scores = vec![
            VendorScore { vendor_name: "Green Supply Co.".to_string(), performance_score: 100.0 },
            VendorScore { vendor_name: "Acme, Inc.".to_string(), performance_score: 50.5 },
        ];
        let mut buf = Vec::new();
        write_performance_csv(&mut buf, &scores).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "vendor_name,performance_score\nGreen Supply Co.,100.00\n\"Acme, Inc.\",50.50\n"
        );
    }

    #[test]
    fn test_export_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("alerts.txt");
        let alerts = vec![Alert::LowStock {
            product_name: "Heat Pump".to_string(),
            current_stock: 2,
        }];
        export_alerts(&path, &alerts).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "LOW STOCK ALERT: Heat Pump stock is low (2 units)\n"
        );
    }
}
