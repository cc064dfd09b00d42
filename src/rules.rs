//! 识别规则
//!
//! 每条规则是一个具名的 (正则, 提取函数) 对，按固定优先级依次尝试，
//! 第一个命中的规则生效。新增题源格式时只需在列表中插入新规则，
//! 不影响已有规则的先后顺序。
//!
//! ## 题目起始规则（优先级从高到低）
//! 1. `numbered` - `12)`、`**3.**`、`• 4)` 等阿拉伯数字题号
//! 2. `soru_prefixed` - `Soru 5`、`Soru-5`、`S-5`
//! 3. `bullet` - 项目符号 + 大写字母开头（题号取题块序号）
//!
//! ## 行类型规则
//! `block_glyph` → `answer` → `explanation` → `wrong_statement` → `summary_key` → `option`

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// 题目字母（含土耳其语字母）
const LETTER: &str = "A-Za-zÇĞİÖŞÜçğıöşü";
/// 大写字母（答案速查表用）
const UPPER: &str = "A-ZÇĞİÖŞÜ";

/// 具名识别规则
pub struct Recognizer<T> {
    pub name: &'static str,
    pattern: Regex,
    extract: fn(&'static str, &Captures<'_>) -> Option<T>,
}

impl<T> Recognizer<T> {
    fn new(
        name: &'static str,
        pattern: &str,
        extract: fn(&'static str, &Captures<'_>) -> Option<T>,
    ) -> Self {
        // 规则正则都是编译期常量，失败说明模式本身写错了
        Self {
            name,
            pattern: Regex::new(pattern).expect("static regex must compile"),
            extract,
        }
    }

    /// 判断并提取
    pub fn recognize(&self, line: &str) -> Option<T> {
        self.pattern
            .captures(line)
            .and_then(|caps| (self.extract)(self.name, &caps))
    }
}

/// 题目起始行的识别结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStart {
    /// 命中的规则名
    pub rule: &'static str,
    /// 显式题号
    pub number: Option<u32>,
    /// 去掉题号标记后的剩余文本
    pub rest: String,
}

/// 行类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// 🟦 解析块标记
    BlockGlyph,
    /// `Cevap:` / `Answer:`
    Answer,
    /// `Açıklama:` / `Explanation:`
    Explanation,
    /// `Yanlış ...` / `Wrong statement`
    WrongStatement,
    /// `12 - C` 答案速查表
    SummaryKey,
    /// `A) ...` 选项
    OptionLine,
}

/// 题目起始规则，按优先级排列
pub static BLOCK_START_RULES: LazyLock<Vec<Recognizer<BlockStart>>> = LazyLock::new(|| {
    vec![
        Recognizer::new(
            "numbered",
            r"^\s*[*_•●▪–-]*\s*[*_]*\s*(\d{1,3})\s*([.)])(.*)$",
            ordinal_start,
        ),
        Recognizer::new(
            "soru_prefixed",
            r"(?i)^\s*[*_•●▪–-]*\s*(?:soru\s*[-:.]?|s\s*-)\s*(\d{1,3})\s*[.):\-]?(.*)$",
            numbered_start,
        ),
        Recognizer::new("bullet", r"^\s*[•●▪–*-]\s+[*_]*\s*(\p{Lu}.*)$", bullet_start),
    ]
});

/// 行类型规则，按优先级排列
pub static LINE_RULES: LazyLock<Vec<Recognizer<LineKind>>> = LazyLock::new(|| {
    vec![
        Recognizer::new("block_glyph", r"^🟦", |_, _| Some(LineKind::BlockGlyph)),
        Recognizer::new("answer", &PATTERNS.answer_line_src, |_, _| {
            Some(LineKind::Answer)
        }),
        Recognizer::new("explanation", &PATTERNS.explanation_line_src, |_, _| {
            Some(LineKind::Explanation)
        }),
        Recognizer::new(
            "wrong_statement",
            r"(?i)^[*_]*\s*(?:yanl[ıiIİ][şŞ]|wrong\s+statement\b)",
            |_, _| Some(LineKind::WrongStatement),
        ),
        Recognizer::new(
            "summary_key",
            &format!(r"^\d+\s*-\s*[{UPPER}]"),
            |_, _| Some(LineKind::SummaryKey),
        ),
        Recognizer::new("option", &PATTERNS.option_head_src, |_, _| {
            Some(LineKind::OptionLine)
        }),
    ]
});

/// 各阶段直接使用的提取正则
pub struct Patterns {
    /// 行首选项：`**A)** 文本`，捕获 (前导强调, 标签, 分隔符, 分隔符后空白, 文本)
    pub option_head: Regex,
    /// 同一行内后续选项的边界：空白 + 标签 + 分隔符，捕获 (标签, 分隔符, 分隔符后空白)
    pub inline_label: Regex,
    /// 答案行，捕获答案剩余部分
    pub answer_line: Regex,
    /// 答案行内嵌的解析标记
    pub inline_explanation: Regex,
    /// 答案中的标签引用，捕获 (标签, 标点, 剩余文本)
    pub label_reference: Regex,
    /// 解析行前缀，捕获剩余部分
    pub explanation_prefix: Regex,
    /// 错误表述前缀，捕获 (关键词, 剩余部分)
    pub wrong_statement_prefix: Regex,
    /// 起始行中混入的 `Soru:` / `Question:` 前缀
    pub boilerplate: Regex,
    /// 题干前残留的题号
    pub ordinal_remnant: Regex,

    answer_line_src: String,
    explanation_line_src: String,
    option_head_src: String,
}

impl Patterns {
    fn new() -> Self {
        let option_head_src = format!(r"^([*_]*)([{LETTER}])([.):\-])(\s*)(.*)$");
        let answer_line_src = r"(?i)^[*_]*\s*(?:(?:doğru|correct)\s+)?(?:cevap\b[*_]*\s*[:：]?|answer[*_]*\s*[:：])[*_]*\s*(.*)$".to_string();
        let explanation_prefix_src = r"(?i)^[*_]*\s*(?:a[çcÇC][ıiIİ]klama|açexplanation|explanation)\b[*_]*\s*[:：]?[*_]*\s*(.*)$";
        // 行类型只看开头：`Açıklamalar` 也算解析行，但前缀不会被去掉
        let explanation_line_src =
            r"(?i)^[*_]*\s*(?:a[çcÇC][ıiIİ]klama|(?:aç)?explanation\b)".to_string();

        Self {
            option_head: compile(&option_head_src),
            inline_label: compile(&format!(r"\s[*_]*([{LETTER}])([.):\-])[*_]*(\s*)")),
            answer_line: compile(&answer_line_src),
            inline_explanation: compile(
                r"(?i)a[çcÇC][ıiIİ]klama\s*[:：]?\s*|explanation\s*[:：]\s*",
            ),
            label_reference: compile(&format!(r"^([{LETTER}])([).]|$)\s*(.*)$")),
            explanation_prefix: compile(explanation_prefix_src),
            wrong_statement_prefix: compile(
                r"(?i)^[*_]*\s*(yanl[ıiIİ][şŞ]\s+[iİI]fade|wrong\s+statement)\b[*_]*\s*[:：]?[*_]*\s*(.*)$",
            ),
            boilerplate: compile(r"(?i)^(?:soru|question)\s*[:：]\s*"),
            ordinal_remnant: compile(r"^\d{1,3}\s*[.)]\s*"),
            answer_line_src,
            explanation_line_src,
            option_head_src,
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex must compile")
}

pub static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::new);

fn numbered_start(rule: &'static str, caps: &Captures<'_>) -> Option<BlockStart> {
    Some(BlockStart {
        rule,
        number: caps.get(1).and_then(|m| m.as_str().parse().ok()),
        rest: caps.get(2).map_or("", |m| m.as_str()).to_string(),
    })
}

fn ordinal_start(rule: &'static str, caps: &Captures<'_>) -> Option<BlockStart> {
    let rest = caps.get(3).map_or("", |m| m.as_str());
    // `1.5` 这类小数不是题号
    let is_dot = caps.get(2).is_some_and(|m| m.as_str() == ".");
    if is_dot && rest.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(BlockStart {
        rule,
        number: caps.get(1).and_then(|m| m.as_str().parse().ok()),
        rest: rest.to_string(),
    })
}

fn bullet_start(rule: &'static str, caps: &Captures<'_>) -> Option<BlockStart> {
    let rest = caps.get(1)?.as_str();
    // 带项目符号的选项、答案、解析行不算新题
    if classify_line(rest).is_some() {
        return None;
    }
    Some(BlockStart {
        rule,
        number: None,
        rest: rest.to_string(),
    })
}

/// 按优先级识别题目起始行
pub fn match_block_start(line: &str) -> Option<BlockStart> {
    BLOCK_START_RULES.iter().find_map(|r| r.recognize(line))
}

pub fn is_block_start(line: &str) -> bool {
    match_block_start(line).is_some()
}

/// 按优先级判断行类型，普通文本返回 None
pub fn classify_line(line: &str) -> Option<LineKind> {
    LINE_RULES.iter().find_map(|r| r.recognize(line))
}

/// 答案行的剩余部分，非答案行返回 None
pub fn answer_remainder(line: &str) -> Option<&str> {
    PATTERNS
        .answer_line
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// 去掉 `Soru:` 之类的前缀
pub fn strip_boilerplate(text: &str) -> &str {
    match PATTERNS.boilerplate.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// 去掉题干开头残留的 `12)` / `12.`
pub fn strip_ordinal_remnant(text: &str) -> &str {
    match PATTERNS.ordinal_remnant.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(line: &str) -> Option<(&'static str, Option<u32>, String)> {
        match_block_start(line).map(|s| (s.rule, s.number, s.rest.trim().to_string()))
    }

    #[test]
    fn test_numbered_variants() {
        assert_eq!(
            start("12) Başkent neresidir?"),
            Some(("numbered", Some(12), "Başkent neresidir?".to_string()))
        );
        assert_eq!(start("  **3)** Soru").map(|s| s.1), Some(Some(3)));
        assert_eq!(start("7. Hangisi").map(|s| s.1), Some(Some(7)));
        assert_eq!(start("8.").map(|s| s.1), Some(Some(8)));
    }

    #[test]
    fn test_decimal_is_not_block_start() {
        assert_eq!(start("1.5 milyon kişi"), None);
        assert_eq!(start("12.30'da başladı"), None);
    }

    #[test]
    fn test_dot_without_space_is_block_start() {
        assert_eq!(
            start("3.Hangisi doğrudur?"),
            Some(("numbered", Some(3), "Hangisi doğrudur?".to_string()))
        );
        assert_eq!(start("**1.**Başkent?").map(|s| s.1), Some(Some(1)));
    }

    #[test]
    fn test_soru_prefixed() {
        assert_eq!(
            start("Soru 5: Hangisi doğrudur?"),
            Some(("soru_prefixed", Some(5), "Hangisi doğrudur?".to_string()))
        );
        assert_eq!(start("S-14 Metin").map(|s| (s.0, s.1)), Some(("soru_prefixed", Some(14))));
        assert_eq!(start("Sorular aşağıdadır"), None);
    }

    #[test]
    fn test_bullet_without_digits() {
        assert_eq!(
            start("• Osmanlı Devleti ne zaman kuruldu?"),
            Some(("bullet", None, "Osmanlı Devleti ne zaman kuruldu?".to_string()))
        );
        assert_eq!(start("- küçük harfle başlıyor"), None);
    }

    #[test]
    fn test_numeric_wins_over_bullet() {
        assert_eq!(start("• 4) Soru metni").map(|s| (s.0, s.1)), Some(("numbered", Some(4))));
    }

    #[test]
    fn test_bulleted_option_is_not_block_start() {
        assert_eq!(start("- A) Paris"), None);
        assert_eq!(start("- Cevap: B"), None);
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("🟦 Açıklamalar"), Some(LineKind::BlockGlyph));
        assert_eq!(classify_line("Doğru Cevap: B"), Some(LineKind::Answer));
        assert_eq!(classify_line("**Cevap** C"), Some(LineKind::Answer));
        assert_eq!(classify_line("Answer: B"), Some(LineKind::Answer));
        assert_eq!(classify_line("Açıklama: çünkü"), Some(LineKind::Explanation));
        assert_eq!(classify_line("Yanlış ifade: x"), Some(LineKind::WrongStatement));
        assert_eq!(classify_line("12 - C"), Some(LineKind::SummaryKey));
        assert_eq!(classify_line("b) ikinci"), Some(LineKind::OptionLine));
        assert_eq!(classify_line("Ç: Çorum"), Some(LineKind::OptionLine));
        assert_eq!(classify_line("Açıklamalar: sonda"), Some(LineKind::Explanation));
        assert_eq!(classify_line("Explanations are below"), None);
        assert_eq!(classify_line("Cevapları aşağıda"), None);
        assert_eq!(classify_line("Answer the question"), None);
        assert_eq!(classify_line("Düz metin"), None);
    }

    #[test]
    fn test_answer_remainder() {
        assert_eq!(answer_remainder("Cevap: C Açıklama: x"), Some("C Açıklama: x"));
        assert_eq!(answer_remainder("DOĞRU CEVAP：A"), Some("A"));
        assert_eq!(answer_remainder("Correct answer: Blue"), Some("Blue"));
        assert_eq!(answer_remainder("A) Paris"), None);
    }

    #[test]
    fn test_strip_helpers() {
        assert_eq!(strip_boilerplate("Soru: Metin"), "Metin");
        assert_eq!(strip_boilerplate("Metin"), "Metin");
        assert_eq!(strip_ordinal_remnant("12) Metin"), "Metin");
    }
}
