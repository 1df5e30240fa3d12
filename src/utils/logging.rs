//! 日志工具模块
//!
//! 提供日志初始化、运行报告文件和输出格式化的辅助函数

use crate::error::{AppError, AppResult};
use crate::services::stats::ContentStats;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// `RUST_LOG` 优先；未设置时 verbose 为 debug 级别，否则为 info。
/// 重复调用是安全的。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化运行报告文件
///
/// # 参数
/// - `report_path`: 报告文件路径
pub fn init_report_file(report_path: &str) -> AppResult<()> {
    let header = format!(
        "{}\n种子内容生成报告 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(report_path, header).map_err(|e| AppError::file_write_failed(report_path, e))
}

/// 向运行报告追加一段内容
pub fn append_report(report_path: &str, text: &str) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(report_path)
        .map_err(|e| AppError::file_write_failed(report_path, e))?;

    writeln!(file, "{}", text).map_err(|e| AppError::file_write_failed(report_path, e))
}

/// 记录程序启动信息
///
/// # 参数
/// - `branch_id`: 分支ID
/// - `source`: 内容来源（目录或内置）
pub fn log_startup(branch_id: &str, source: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 种子内容生成");
    info!("🏷️ 分支: {}", branch_id);
    info!("📁 内容来源: {}", source);
    info!("{}", "=".repeat(60));
}

/// 记录内容加载信息
pub fn log_content_loaded(sets: usize, questions: usize) {
    info!("✓ 找到 {} 个内容集，共 {} 道题目", sets, questions);
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 内容统计
/// - `output_path`: 导出文件路径
/// - `report_path`: 报告文件路径
pub fn print_final_stats(stats: &ContentStats, output_path: &str, report_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 生成完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    for line in stats.to_string().lines() {
        info!("{}", line);
    }
    info!("{}", "=".repeat(60));
    info!("\n导出文件: {}", output_path);
    info!("报告已保存至: {}", report_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("こんにちは世界", 5), "こんにちは...");
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn test_report_file_header_and_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let path = path.to_str().unwrap();

        init_report_file(path).unwrap();
        append_report(path, "题目总数: 3").unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert!(text.starts_with(&"=".repeat(60)));
        assert!(text.contains("种子内容生成报告"));
        assert!(text.ends_with("题目总数: 3\n"));
    }
}
