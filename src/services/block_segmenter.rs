//! 题块切分服务 - 业务能力层
//!
//! 把整篇文档切成一个个题块，只认题目起始行，不关心题块内部结构

use crate::infrastructure::LineCursor;
use crate::models::{Block, RawDocument};
use crate::rules::{match_block_start, strip_boilerplate};
use crate::utils::text::strip_emphasis;

/// 切分题块
///
/// - 起始行之前的内容丢弃
/// - 两个起始行之间的行原样放入前一个题块
/// - 没有显式题号时，题号取题块序号（从 1 开始）
pub fn split_blocks(doc: &RawDocument) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut current: Option<Block> = None;
    let mut cursor = LineCursor::new(&doc.lines);

    while let Some(line) = cursor.advance_raw() {
        if let Some(start) = match_block_start(line) {
            blocks.extend(current.take());
            let position = blocks.len() as u32 + 1;
            current = Some(Block::new(
                start.number.unwrap_or(position),
                leading_text(&start.rest),
            ));
        } else if let Some(block) = current.as_mut() {
            block.body.push(line.to_string());
        }
    }

    blocks.extend(current);
    blocks
}

fn leading_text(rest: &str) -> String {
    strip_emphasis(strip_boilerplate(strip_emphasis(rest))).to_string()
}
