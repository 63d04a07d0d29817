//! 日志工具模块
//!
//! 提供日志初始化与格式化输出的辅助函数

use crate::config::Config;
use crate::models::Level;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志（默认 info，可用 RUST_LOG 覆盖）
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 合并课次单字表");
    info!("📁 资料夹: {}", config.data_dir.display());
    info!("📄 输出档案: {}", config.output_path().display());
    info!("{}", "=".repeat(60));
}

/// 记录找到的档案数量
pub fn log_files_found(total: usize) {
    info!("✓ 找到 {} 个课次档案", total);
}

/// 记录各等级、课次的列数
pub fn log_lesson_counts(counts: &BTreeMap<(Level, u32), usize>) {
    info!("{}", "─".repeat(60));
    for ((level, lesson), count) in counts {
        info!("{} 第{}課: {} 笔", level, lesson, count);
    }
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功读取的档案数
/// - `failed`: 读取失败的档案数
/// - `rows`: 合并后的列数
/// - `duplicates`: 去除的重复列数
/// - `output`: 输出档案路径
pub fn print_final_stats(success: usize, failed: usize, rows: usize, duplicates: usize, output: &Path) {
    info!("{}", "=".repeat(60));
    info!("📊 合并完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {}/{}", success, success + failed);
    info!("❌ 失败: {}", failed);
    info!("📝 合并后 {} 笔（去除重复 {} 笔）", rows, duplicates);
    info!("{}", "=".repeat(60));
    let shown = output.canonicalize().unwrap_or_else(|_| output.to_path_buf());
    info!("已输出：{}", shown.display());
}
