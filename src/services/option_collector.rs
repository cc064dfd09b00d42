//! 选项收集服务 - 业务能力层
//!
//! 支持两种排版：
//! - 每行一个选项：`A) Paris`
//! - 一行多个选项：`A) Paris B) London* C) Berlin`
//!
//! 选项末尾的 `*` 或文本中的 `++` 表示正确答案（只取第一个）

use crate::infrastructure::LineCursor;
use crate::models::{Answer, ChoiceOption};
use crate::rules::{classify_line, LineKind, PATTERNS};
use crate::utils::text::{normalize_label, strip_emphasis};

/// 选项收集结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCollection {
    pub options: Vec<ChoiceOption>,
    /// 行内标记出的正确选项
    pub marked_answer: Option<Answer>,
}

/// 单个选项及是否带正确标记
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionToken {
    pub option: ChoiceOption,
    pub marked: bool,
}

/// 从当前位置连续收集选项行，停在第一个非选项行上
pub fn collect_options(cursor: &mut LineCursor<'_>) -> OptionCollection {
    let lines = cursor.take_while(|line| classify_line(line) == Some(LineKind::OptionLine));

    let mut collection = OptionCollection::default();
    for token in lines.iter().flat_map(|line| parse_option_line(line)) {
        if token.marked && collection.marked_answer.is_none() {
            collection.marked_answer = Some(Answer::labeled(
                token.option.label,
                token.option.text.clone(),
            ));
        }
        collection.options.push(token.option);
    }
    collection
}

/// 解析一行中的所有选项
///
/// 同一行的后续选项必须与第一个选项大小写一致、分隔符相同，且后面还有正文。
/// 第一个选项分隔符后有空白时，后续选项也必须有，避免把 `T.C.` 之类误判为选项
pub fn parse_option_line(line: &str) -> Vec<OptionToken> {
    let Some(caps) = PATTERNS.option_head.captures(line) else {
        return Vec::new();
    };
    let line_emphasis = caps.get(1).map_or(0, |m| m.as_str().len());
    let Some(first_label) = caps.get(2).and_then(|m| m.as_str().chars().next()) else {
        return Vec::new();
    };
    let separator = caps.get(3).map_or("", |m| m.as_str());
    let spaced = caps.get(4).is_some_and(|m| !m.as_str().is_empty());
    let rest = caps.get(5).map_or("", |m| m.as_str());

    // 前面补一个空格，使紧跟在首个选项后的标签也能匹配到边界
    let haystack = format!(" {}", rest);
    let mut labels = vec![first_label];
    let mut spans = Vec::new();
    let mut text_start = 0;
    let mut search_at = 0;

    while let Some(inline) = PATTERNS.inline_label.captures_at(&haystack, search_at) {
        let (Some(whole), Some(label), Some(sep)) = (inline.get(0), inline.get(1), inline.get(2))
        else {
            break;
        };
        let gap = inline.get(3).is_some_and(|m| !m.as_str().is_empty());
        let accepted = label.as_str().chars().next().filter(|label| {
            label.is_uppercase() == first_label.is_uppercase()
                && sep.as_str() == separator
                && (gap || !spaced)
                && !haystack[whole.end()..].trim().is_empty()
        });

        match accepted {
            Some(label) => {
                spans.push(&haystack[text_start..whole.start()]);
                labels.push(label);
                text_start = whole.end();
                search_at = whole.end();
            }
            // 被拒绝的候选只跳过开头的空白字符，后面的标签仍可匹配
            None => {
                search_at = whole.start()
                    + haystack[whole.start()..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
            }
        }
    }
    spans.push(&haystack[text_start..]);

    let last = spans.len() - 1;
    labels
        .into_iter()
        .zip(spans)
        .enumerate()
        .map(|(i, (label, raw))| {
            // 整行外层的强调符号在最后一个选项的末尾闭合
            let outer = if i == last { line_emphasis } else { 0 };
            let (text, marked) = detect_marker(raw, outer);
            OptionToken {
                option: ChoiceOption::new(normalize_label(label), text),
                marked,
            }
        })
        .collect()
}

/// 识别并去掉正确答案标记
///
/// `outer_emphasis` 为行首已被吃掉的强调符号数量，用于判断末尾的 `*` 是闭合强调还是标记
fn detect_marker(raw: &str, outer_emphasis: usize) -> (String, bool) {
    let text = raw.trim();

    if text.contains("++") {
        let cleaned = text.replace("++", " ");
        let cleaned = strip_emphasis(&cleaned).split_whitespace().collect::<Vec<_>>().join(" ");
        return (cleaned, true);
    }

    let leading = text.chars().take_while(|c| *c == '*').count() + outer_emphasis;
    let trailing = text.chars().rev().take_while(|c| *c == '*').count();
    let marked = trailing > leading;

    (strip_emphasis(text).to_string(), marked)
}
