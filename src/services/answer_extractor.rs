//! 答案提取服务 - 业务能力层

use crate::infrastructure::LineCursor;
use crate::models::{Answer, ChoiceOption};
use crate::rules::{answer_remainder, classify_line, LineKind, PATTERNS};
use crate::utils::text::{join_fragments, normalize_label};

/// 答案行解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerLine {
    pub answer: Answer,
    /// 答案行里 `Açıklama:` 之后的内容
    pub inline_explanation: String,
}

/// 向后查找答案行（跳过中间的其他行）
///
/// 找到时消费到该行为止；找不到时消费剩余所有行，后续不再收集解析
pub fn find_answer_line(cursor: &mut LineCursor<'_>) -> Option<String> {
    let found = cursor.seek(|line| classify_line(line) == Some(LineKind::Answer));
    if found.is_none() {
        cursor.skip_to_end();
    }
    found
}

/// 解析答案行
///
/// # 参数
/// - `line`: 完整的答案行
/// - `options`: 本题已收集的选项，用于把标签还原为选项文本
pub fn resolve_answer_line(line: &str, options: &[ChoiceOption]) -> AnswerLine {
    let cleaned: String = answer_remainder(line)
        .unwrap_or("")
        .chars()
        .filter(|c| !matches!(c, '_' | '*'))
        .collect();

    let mut pieces = PATTERNS.inline_explanation.split(&cleaned);
    let answer_text = pieces.next().unwrap_or("").trim();
    let inline_explanation = join_fragments(pieces);

    AnswerLine {
        answer: interpret_answer(answer_text, options),
        inline_explanation,
    }
}

/// 把答案文本解释为标签引用或自由文本
///
/// 以单个字母开头、后跟 `)`/`.` 或直接结束时视为候选标签；
/// 标签属于已知选项或带有显式标点时采用标签，
/// 答案文本取标签后的剩余文本，没有则取选项文本
fn interpret_answer(text: &str, options: &[ChoiceOption]) -> Answer {
    if let Some(caps) = PATTERNS.label_reference.captures(text) {
        if let Some(raw) = caps.get(1).and_then(|m| m.as_str().chars().next()) {
            let label = normalize_label(raw);
            let has_punct = caps.get(2).is_some_and(|m| !m.as_str().is_empty());
            let residual = caps.get(3).map_or("", |m| m.as_str()).trim();
            let option = find_option(options, label);

            if option.is_some() || has_punct {
                let text = if residual.is_empty() {
                    option.map_or("", |o| o.text.as_str())
                } else {
                    residual
                };
                return Answer::labeled(label, text);
            }
        }
    }

    Answer::free_text(text)
}

/// 按标签查找选项，重复标签时以最后一个为准
pub fn find_option(options: &[ChoiceOption], label: char) -> Option<&ChoiceOption> {
    options.iter().rev().find(|o| o.label == label)
}
