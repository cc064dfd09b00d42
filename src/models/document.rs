use crate::utils::text::normalize_content;

/// 原始文档：按行切分的输入文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// 来源标签（文件名）
    pub source: String,
    pub lines: Vec<String>,
}

impl RawDocument {
    /// 规范化换行后按行切分
    pub fn from_text(source: impl Into<String>, content: &str) -> Self {
        let lines = normalize_content(content)
            .split('\n')
            .map(String::from)
            .collect();
        Self {
            source: source.into(),
            lines,
        }
    }
}

/// 题块：从一个题目起始行到下一个起始行之前的所有行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// 声明的题号，缺省时为题块序号
    pub number: u32,
    /// 起始行去掉题号标记后剩余的文本
    pub leading_text: String,
    /// 起始行之后的原始行
    pub body: Vec<String>,
}

impl Block {
    pub fn new(number: u32, leading_text: impl Into<String>) -> Self {
        Self {
            number,
            leading_text: leading_text.into(),
            body: Vec::new(),
        }
    }
}
