//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理单个文档的所有题块，是文档级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **切分题块**：`RawDocument` → `Vec<Block>`
//! 2. **流程调度**：逐个题块委托 `BlockFlow`
//! 3. **分配 id**：使用外部传入的 `IdSequence`，不依赖全局状态
//! 4. **统计输出**：记录识别/输出/丢弃数量

use crate::models::{ParsedQuestion, QuestionRecord, RawDocument};
use crate::services::split_blocks;
use crate::utils::logging::{log_document_complete, log_document_start};
use crate::workflow::{parse_block, BlockCtx, BlockFlow, BlockOutcome};

/// 递增的 id 生成器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// 下一个将要分配的 id
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// 文档处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub blocks: usize,
    pub emitted: usize,
    pub dropped: usize,
}

impl std::ops::AddAssign for DocumentStats {
    fn add_assign(&mut self, other: Self) {
        self.blocks += other.blocks;
        self.emitted += other.emitted;
        self.dropped += other.dropped;
    }
}

/// 处理单个文档
///
/// # 参数
/// - `doc`: 文档
/// - `doc_index`: 文档索引（用于日志）
/// - `flow`: 题块处理流程
/// - `ids`: id 生成器，按题块顺序为输出的题目分配 id
///
/// # 返回
/// 返回 (输出的题目记录, 统计)
pub fn process_document(
    doc: &RawDocument,
    doc_index: usize,
    flow: &BlockFlow,
    ids: &mut IdSequence,
) -> (Vec<QuestionRecord>, DocumentStats) {
    log_document_start(doc_index, &doc.source, doc.lines.len());

    let blocks = split_blocks(doc);
    let mut stats = DocumentStats {
        blocks: blocks.len(),
        ..Default::default()
    };
    let mut records = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        let ctx = BlockCtx::new(doc.source.as_str(), doc_index, index + 1);

        match flow.run(block, &ctx) {
            BlockOutcome::Emitted(parsed) => {
                records.push(parsed.into_record(ids.next_id()));
                stats.emitted += 1;
            }
            BlockOutcome::Dropped(_) => {
                stats.dropped += 1;
            }
        }
    }

    log_document_complete(doc_index, &stats);
    (records, stats)
}

/// 解析文档中所有可输出的题目（纯函数，不分配 id）
pub fn parse_document(doc: &RawDocument) -> Vec<ParsedQuestion> {
    split_blocks(doc)
        .iter()
        .map(|block| parse_block(block, &doc.source))
        .filter(ParsedQuestion::is_emittable)
        .collect()
}

/// 按文件顺序、文件内题块顺序解析所有文档并分配 id
///
/// 返回记录和用过之后的 id 生成器，方便调用方继续追加
pub fn parse_documents(
    docs: &[RawDocument],
    ids: IdSequence,
) -> (Vec<QuestionRecord>, IdSequence) {
    docs.iter()
        .flat_map(parse_document)
        .fold((Vec::new(), ids), |(mut records, mut ids), parsed| {
            records.push(parsed.into_record(ids.next_id()));
            (records, ids)
        })
}

/// 按文件顺序处理多个文档，返回记录和汇总统计
pub fn process_documents(
    docs: &[RawDocument],
    flow: &BlockFlow,
    ids: &mut IdSequence,
) -> (Vec<QuestionRecord>, DocumentStats) {
    let mut all = Vec::new();
    let mut total = DocumentStats::default();

    for (index, doc) in docs.iter().enumerate() {
        let (records, stats) = process_document(doc, index + 1, flow, ids);
        all.extend(records);
        total += stats;
    }

    (all, total)
}
