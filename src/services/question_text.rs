//! 题干收集服务 - 业务能力层

use crate::infrastructure::LineCursor;
use crate::models::Block;
use crate::rules::{classify_line, strip_ordinal_remnant, LineKind};
use crate::utils::text::{join_fragments, strip_emphasis};

/// 从题块开头收集题干
///
/// 遇到选项、答案、错误表述、解析或 🟦 标记时停止，该行留给后续阶段；
/// 空行跳过但不终止收集
pub fn collect_question_text(cursor: &mut LineCursor<'_>) -> String {
    let parts = cursor.take_while(|line| !ends_question_text(line));
    join_fragments(parts.iter().map(|p| strip_emphasis(p)))
}

fn ends_question_text(line: &str) -> bool {
    matches!(
        classify_line(line),
        Some(
            LineKind::OptionLine
                | LineKind::Answer
                | LineKind::WrongStatement
                | LineKind::Explanation
                | LineKind::BlockGlyph
        )
    )
}

/// 题干为空时退回到起始行上的文本
pub fn fallback_question_text(block: &Block) -> String {
    strip_emphasis(strip_ordinal_remnant(strip_emphasis(&block.leading_text))).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collect_until_option() {
        let body = lines(&["**Aşağıdakilerden", "", "hangisi doğrudur?**", "A) Bir", "B) İki"]);
        let mut cursor = LineCursor::new(&body);

        let text = collect_question_text(&mut cursor);
        assert_eq!(text, "Aşağıdakilerden hangisi doğrudur?");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_stops_on_answer_and_explanation() {
        let body = lines(&["Türkiye'nin başkenti?", "Cevap: Ankara"]);
        let mut cursor = LineCursor::new(&body);
        assert_eq!(collect_question_text(&mut cursor), "Türkiye'nin başkenti?");
        assert_eq!(cursor.position(), 1);

        let body = lines(&["🟦 Açıklamalar"]);
        let mut cursor = LineCursor::new(&body);
        assert_eq!(collect_question_text(&mut cursor), "");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_stops_on_plural_explanation_heading() {
        let body = lines(&["Hangisi doğrudur?", "Açıklamalar: sonda", "A) Bir"]);
        let mut cursor = LineCursor::new(&body);
        assert_eq!(collect_question_text(&mut cursor), "Hangisi doğrudur?");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_summary_key_does_not_stop() {
        let body = lines(&["1923 - Cumhuriyet ilan edildi mi?", "Cevap: Evet"]);
        let mut cursor = LineCursor::new(&body);
        assert_eq!(
            collect_question_text(&mut cursor),
            "1923 - Cumhuriyet ilan edildi mi?"
        );
    }

    #[test]
    fn test_fallback_strips_ordinal() {
        let block = Block::new(4, "**4) Hangisi?**");
        assert_eq!(fallback_question_text(&block), "Hangisi?");
    }
}
