//! 解析收集服务 - 业务能力层

use crate::infrastructure::LineCursor;
use crate::rules::{classify_line, is_block_start, LineKind, PATTERNS};
use crate::utils::text::join_fragments;

/// 收集答案之后的解析文本
///
/// 遇到 🟦、`12 - C` 答案速查行或下一题的起始行时停止
pub fn collect_explanation(cursor: &mut LineCursor<'_>) -> String {
    let lines = cursor.take_while(|line| !ends_explanation(line));
    join_fragments(lines.iter().filter_map(|line| relabel(line)))
}

fn ends_explanation(line: &str) -> bool {
    matches!(
        classify_line(line),
        Some(LineKind::BlockGlyph | LineKind::SummaryKey)
    ) || is_block_start(line)
}

/// `Açıklama:` 前缀去掉；`Yanlış ifade` 统一为 `关键词: 内容`；其余原样保留
fn relabel(line: &str) -> Option<String> {
    if let Some(caps) = PATTERNS.explanation_prefix.captures(line) {
        let rest = caps.get(1).map_or("", |m| m.as_str()).trim();
        return (!rest.is_empty()).then(|| rest.to_string());
    }

    if let Some(caps) = PATTERNS.wrong_statement_prefix.captures(line) {
        let keyword = caps.get(1).map_or("", |m| m.as_str());
        let rest = caps.get(2).map_or("", |m| m.as_str()).trim();
        return Some(if rest.is_empty() {
            line.to_string()
        } else {
            format!("{}: {}", keyword, rest)
        });
    }

    Some(line.to_string())
}

/// 合并答案行内的解析和后续收集到的解析
pub fn merge_explanation(inline: &str, collected: &str) -> String {
    join_fragments([inline, collected])
}
