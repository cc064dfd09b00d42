//! 题块处理上下文
//!
//! 封装"我正在处理哪个文件的第几个题块"这一信息

use std::fmt::Display;

/// 题块处理上下文
#[derive(Debug, Clone)]
pub struct BlockCtx {
    /// 来源文件标签
    pub source: String,

    /// 文档索引（仅用于日志显示）
    pub doc_index: usize,

    /// 题块在文档中的索引（从1开始）
    pub block_index: usize,
}

impl BlockCtx {
    /// 创建新的题块上下文
    pub fn new(source: impl Into<String>, doc_index: usize, block_index: usize) -> Self {
        Self {
            source: source.into(),
            doc_index,
            block_index,
        }
    }
}

impl Display for BlockCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文档 {} ({}) 题块#{}]",
            self.doc_index, self.source, self.block_index
        )
    }
}
