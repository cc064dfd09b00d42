/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use crate::orchestrator::DocumentStats;
use std::path::Path;
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 当前生效的配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题目文本抽取");
    info!("📁 工作目录: {}", config.workspace.display());
    if config.input_files.is_empty() {
        info!("📋 输入: 扫描目录中的 .{} 文件", config.input_extension);
    } else {
        info!("📋 输入: {}", config.input_files.join(", "));
    }
    info!("💾 输出: {}", config.output_file.display());
    info!("{}", "=".repeat(60));
}

/// 记录文档加载信息
///
/// # 参数
/// - `loaded`: 成功加载的文档数
/// - `requested`: 计划加载的文档数
pub fn log_documents_loaded(loaded: usize, requested: usize) {
    info!("✓ 已加载 {}/{} 个文档", loaded, requested);
}

/// 记录单个文档开始处理
pub fn log_document_start(doc_index: usize, source: &str, line_count: usize) {
    info!("\n[文档 {}] {}", doc_index, "─".repeat(30));
    info!("[文档 {}] 开始处理: {} ({} 行)", doc_index, source, line_count);
}

/// 记录单个文档处理结果
pub fn log_document_complete(doc_index: usize, stats: &DocumentStats) {
    info!(
        "[文档 {}] 题块统计: 识别 {}, 输出 {}, 丢弃 {}",
        doc_index, stats.blocks, stats.emitted, stats.dropped
    );
}

/// 打印最终统计信息
///
/// # 参数
/// - `emitted`: 输出的题目总数
/// - `documents`: 处理的文档数
/// - `output_file`: 输出文件路径
pub fn print_final_stats(emitted: usize, documents: usize, output_file: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📄 文档: {}", documents);
    info!("✅ 共 {} 道题目已保存至: {}", emitted, output_file.display());
    info!("{}", "=".repeat(60));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("Çağrı", 3), "Çağ...");
        assert_eq!(truncate_text("kısa", 10), "kısa");
    }
}
