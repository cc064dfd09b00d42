//! 题块处理流程 - 流程层
//!
//! 核心职责：定义"一个题块"的完整解析流程
//!
//! 流程顺序：
//! 1. 题干收集（为空时退回起始行文本）
//! 2. 选项收集（记录行内标记的正确选项）
//! 3. 答案行查找与解析（没有可用答案时退回行内标记）
//! 4. 解析收集

use tracing::debug;

use crate::config::Config;
use crate::infrastructure::LineCursor;
use crate::models::{Answer, Block, ParsedQuestion};
use crate::services::{
    collect_explanation, collect_options, collect_question_text, fallback_question_text,
    find_answer_line, merge_explanation, resolve_answer_line, AnswerLine, OptionCollection,
};
use crate::utils::logging::truncate_text;
use crate::workflow::block_ctx::BlockCtx;

/// 题块丢弃原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// 没有题干
    EmptyQuestion,
    /// 没有答案文本
    EmptyAnswer,
}

/// 题块处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOutcome {
    /// 输出
    Emitted(ParsedQuestion),
    /// 静默丢弃
    Dropped(DropReason),
}

/// 题块处理流程
///
/// - 编排四个解析阶段
/// - 决定题块是输出还是丢弃
/// - 不分配 id，不持有任何跨题块状态
pub struct BlockFlow {
    verbose_logging: bool,
}

impl BlockFlow {
    /// 创建新的题块处理流程
    pub fn new(config: &Config) -> Self {
        Self {
            verbose_logging: config.verbose_logging,
        }
    }

    pub fn run(&self, block: &Block, ctx: &BlockCtx) -> BlockOutcome {
        let parsed = parse_block(block, &ctx.source);

        let reason = if parsed.question.is_empty() {
            Some(DropReason::EmptyQuestion)
        } else if parsed.answer.text.is_empty() {
            Some(DropReason::EmptyAnswer)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                if self.verbose_logging {
                    debug!(
                        "{} 丢弃题号 {}: {:?} | 起始行: {}",
                        ctx,
                        block.number,
                        reason,
                        truncate_text(&block.leading_text, 40)
                    );
                }
                BlockOutcome::Dropped(reason)
            }
            None => {
                if self.verbose_logging {
                    debug!(
                        "{} 题号 {} | 选项 {} 个 | 题干: {}",
                        ctx,
                        parsed.number,
                        parsed.options.len(),
                        truncate_text(&parsed.question, 60)
                    );
                }
                BlockOutcome::Emitted(parsed)
            }
        }
    }
}

/// 解析单个题块（纯函数，不做过滤）
pub fn parse_block(block: &Block, source: &str) -> ParsedQuestion {
    let mut cursor = LineCursor::new(&block.body);

    // ========== 阶段 1: 题干 ==========
    let mut question = collect_question_text(&mut cursor);
    if question.is_empty() {
        question = fallback_question_text(block);
    }

    // ========== 阶段 2: 选项 ==========
    let OptionCollection {
        options,
        marked_answer,
    } = collect_options(&mut cursor);

    // ========== 阶段 3: 答案 ==========
    let (explicit, inline_explanation) = match find_answer_line(&mut cursor) {
        Some(line) => {
            let AnswerLine {
                answer,
                inline_explanation,
            } = resolve_answer_line(&line, &options);
            (Some(answer), inline_explanation)
        }
        None => (None, String::new()),
    };
    let answer = choose_answer(explicit, marked_answer);

    // ========== 阶段 4: 解析 ==========
    let collected = collect_explanation(&mut cursor);
    let explanation = merge_explanation(&inline_explanation, &collected);

    ParsedQuestion {
        source: source.to_string(),
        number: block.number,
        question,
        options,
        answer,
        explanation,
    }
}

/// 显式答案行给出答案文本时优先；否则使用行内标记的选项
fn choose_answer(explicit: Option<Answer>, marked: Option<Answer>) -> Answer {
    match (explicit, marked) {
        (Some(answer), _) if !answer.text.is_empty() => answer,
        (_, Some(marked)) => marked,
        (explicit, None) => explicit.unwrap_or_default(),
    }
}
