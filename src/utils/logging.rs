use crate::models::ParserStrategy;
use anyhow::Result;
/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 订阅器，默认级别 info，可用 `RUST_LOG` 覆盖
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n题库生成日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `source_count`: 来源数量
/// - `group_size`: 每个练习的题目数
pub fn log_startup(source_count: usize, group_size: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库生成");
    info!("📄 来源数量: {}", source_count);
    info!("📦 每个练习题目数: {}", group_size);
    info!("{}", "=".repeat(60));
}

/// 记录单个来源开始处理
pub fn log_source_start(index: usize, total: usize, name: &str, strategy: ParserStrategy) {
    info!("\n{}", "─".repeat(60));
    info!("[{}/{}] 正在解析 {} ({})", index, total, name, strategy);
}

/// 记录单个来源的处理结果
///
/// # 参数
/// - `name`: 来源显示名称
/// - `questions`: 题目数
/// - `exercises`: 练习数
/// - `dropped`: 丢弃的题目块数
pub fn log_source_complete(name: &str, questions: usize, exercises: usize, dropped: usize) {
    if questions == 0 {
        warn!("⚠️ {}: 没有解析出题目，不写入目录", name);
    } else {
        info!("✓ {}: 找到 {} 道题目，共 {} 个练习", name, questions, exercises);
    }
    if dropped > 0 {
        info!("  丢弃题目块: {}", dropped);
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `rows`: 每个来源的 (名称, 题目数, 练习数, 丢弃数)
/// - `output_path`: 输出文件路径
pub fn print_final_stats(rows: &[(String, usize, usize, usize)], output_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    for (name, questions, exercises, dropped) in rows {
        info!(
            "  - {}: {} 个练习, {} 道题目, 丢弃 {}",
            name, exercises, questions, dropped
        );
    }
    info!("{}", "=".repeat(60));
    info!("\n✅ 已生成: {}", output_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
