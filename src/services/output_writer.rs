//! 输出写入服务 - 业务能力层
//!
//! 只负责把题目记录写成 JSON 文件，不关心记录从哪里来

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::QuestionRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 输出写入服务
pub struct OutputWriter {
    output_path: PathBuf,
    pretty: bool,
}

impl OutputWriter {
    /// 创建新的输出写入服务
    pub fn new(output_path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output_path: output_path.into(),
            pretty,
        }
    }

    /// 使用配置中的输出路径创建
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.output_file, config.pretty_output)
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 渲染 JSON 文本
    pub fn render(&self, records: &[QuestionRecord]) -> AppResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        Ok(json)
    }

    /// 写入输出文件，父目录不存在时自动创建
    pub async fn write(&self, records: &[QuestionRecord]) -> AppResult<()> {
        let json = self.render(records)?;

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::file_write_failed(parent, e))?;
            }
        }

        debug!(
            "写入输出: {} | 题目数: {} | 字节数: {}",
            self.output_path.display(),
            records.len(),
            json.len()
        );

        tokio::fs::write(&self.output_path, json)
            .await
            .map_err(|e| AppError::file_write_failed(&self.output_path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, ChoiceOption};

    fn record() -> QuestionRecord {
        QuestionRecord {
            id: 1,
            source: "1.txt".to_string(),
            number: 1,
            question: "Başkent?".to_string(),
            options: vec![ChoiceOption::new('A', "Ankara")],
            answer: Answer::labeled('A', "Ankara"),
            explanation: String::new(),
        }
    }

    #[test]
    fn test_render_pretty_uses_two_space_indent() {
        let writer = OutputWriter::new("out.json", true);
        let json = writer.render(&[record()]).unwrap();
        assert!(json.starts_with("[\n  {\n    \"id\": 1,"));
    }

    #[test]
    fn test_render_empty() {
        let writer = OutputWriter::new("out.json", false);
        assert_eq!(writer.render(&[]).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_write_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("questions.json");
        let writer = OutputWriter::new(&path, false);

        writer.write(&[record()]).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<QuestionRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, vec![record()]);
    }
}
