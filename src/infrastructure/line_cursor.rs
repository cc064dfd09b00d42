//! 行游标 - 基础设施层
//!
//! 持有不可变的行序列和当前位置，只暴露扫描能力。
//! 所有读取到的行都经过 `normalize_line`，空行由调用方决定是否跳过。

use crate::utils::text::normalize_line;

/// 行游标
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: &'a [String],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, pos: 0 }
    }

    /// 当前位置（下一个未消费行的下标）
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// 查看当前行（已规范化），不移动
    pub fn peek(&self) -> Option<String> {
        self.lines.get(self.pos).map(|l| normalize_line(l))
    }

    /// 消费当前行
    pub fn advance(&mut self) -> Option<String> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// 消费当前行，返回未经规范化的原文
    pub fn advance_raw(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.pos)?;
        self.pos += 1;
        Some(line.as_str())
    }

    /// 跳过空行，返回下一个非空行但不消费它
    pub fn next_non_blank(&mut self) -> Option<String> {
        while let Some(line) = self.peek() {
            if !line.is_empty() {
                return Some(line);
            }
            self.pos += 1;
        }
        None
    }

    /// 连续消费满足条件的非空行（空行透明跳过），停在第一个不满足的行上
    pub fn take_while(&mut self, mut pred: impl FnMut(&str) -> bool) -> Vec<String> {
        let mut taken = Vec::new();
        while let Some(line) = self.next_non_blank() {
            if !pred(&line) {
                break;
            }
            self.pos += 1;
            taken.push(line);
        }
        taken
    }

    /// 消费剩余的所有行
    pub fn skip_to_end(&mut self) {
        self.pos = self.lines.len();
    }

    /// 向前查找第一个满足条件的行并消费它（连同之前跳过的行）；
    /// 找不到时位置保持不变
    pub fn seek(&mut self, mut pred: impl FnMut(&str) -> bool) -> Option<String> {
        let found = self.lines[self.pos.min(self.lines.len())..]
            .iter()
            .map(|l| normalize_line(l))
            .position(|line| !line.is_empty() && pred(&line))?;

        self.pos += found;
        self.advance()
    }
}
