/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::models::GradingResult;

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 当前配置（API 密钥不会被输出）
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 智能批改助手");
    info!("🤖 模型: {} ({})", config.llm_model_name, config.llm_api_base_url);
    info!("🔤 OCR 语言: {}", config.ocr_language);
    info!("📐 分数策略: {}", config.score_policy);
    info!("{}", "=".repeat(60));
}

/// 记录一次批改的汇总信息
///
/// # 参数
/// - `student`: 学生姓名
/// - `result`: 批改结果
/// - `elapsed`: 总耗时
pub fn log_run_summary(student: &str, result: &GradingResult, elapsed: Duration) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 批改完成: {}", student);
    info!("📊 参考分数: {}/20", result.score);
    info!("💬 评语预览: {}", truncate_text(&result.comment, 80));
    info!("⏱ 耗时: {:.1}s", elapsed.as_secs_f64());
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
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
