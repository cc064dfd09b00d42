use serde::{Deserialize, Serialize};

/// 选择题选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// 大写单字母标签
    pub label: char,
    pub text: String,
}

impl ChoiceOption {
    pub fn new(label: char, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// 答案
///
/// `label` 缺省时序列化为空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(
        serialize_with = "serialize_label",
        deserialize_with = "deserialize_label"
    )]
    pub label: Option<char>,
    pub text: String,
}

impl Answer {
    pub fn labeled(label: char, text: impl Into<String>) -> Self {
        Self {
            label: Some(label),
            text: text.into(),
        }
    }

    pub fn free_text(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }
}

fn serialize_label<S>(label: &Option<char>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match label {
        Some(c) => serializer.serialize_char(*c),
        None => serializer.serialize_str(""),
    }
}

// Helper function to deserialize "" as None and a one-letter string as Some
fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<char>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct LabelVisitor;

    impl<'de> Visitor<'de> for LabelVisitor {
        type Value = Option<char>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an empty string or a single-letter label")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (None, _) => Ok(None),
                (Some(c), None) => Ok(Some(c)),
                _ => Err(E::invalid_value(serde::de::Unexpected::Str(value), &self)),
            }
        }

        fn visit_char<E>(self, value: char) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(LabelVisitor)
}

/// 单个题块的解析结果（尚未分配 id）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuestion {
    pub source: String,
    pub number: u32,
    pub question: String,
    pub options: Vec<ChoiceOption>,
    pub answer: Answer,
    pub explanation: String,
}

impl ParsedQuestion {
    /// 题干和答案文本都非空才会被输出
    pub fn is_emittable(&self) -> bool {
        !self.question.is_empty() && !self.answer.text.is_empty()
    }

    /// 分配 id，生成最终记录
    pub fn into_record(self, id: u64) -> QuestionRecord {
        QuestionRecord {
            id,
            source: self.source,
            number: self.number,
            question: self.question,
            options: self.options,
            answer: self.answer,
            explanation: self.explanation,
        }
    }
}

/// 输出数据集中的一道题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u64,
    pub source: String,
    pub number: u32,
    pub question: String,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    pub answer: Answer,
    #[serde(default)]
    pub explanation: String,
}
