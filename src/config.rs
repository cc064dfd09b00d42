use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 程序配置文件
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 输入文件所在目录
    pub workspace: PathBuf,
    /// 按顺序处理的输入文件（相对 workspace），为空时扫描整个目录
    pub input_files: Vec<String>,
    /// 扫描目录时使用的扩展名
    pub input_extension: String,
    /// 输出 JSON 文件
    pub output_file: PathBuf,
    /// 是否格式化输出 JSON
    pub pretty_output: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: PathBuf::from("."),
            input_files: (1..=5).map(|i| format!("{}.txt", i)).collect(),
            input_extension: "txt".to_string(),
            output_file: PathBuf::from("data").join("questions.json"),
            pretty_output: true,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 默认配置 + 环境变量
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env()
    }

    /// 从 TOML 文件加载配置，未出现的字段使用默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 用环境变量覆盖当前配置
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_vars(|name| std::env::var(name).ok())
    }

    fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(workspace) = var("QUIZ_WORKSPACE") {
            self.workspace = PathBuf::from(workspace);
        }
        if let Some(files) = var("QUIZ_INPUT_FILES") {
            self.input_files = files
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(output) = var("QUIZ_OUTPUT_FILE") {
            self.output_file = PathBuf::from(output);
        }
        if let Some(value) = var("QUIZ_PRETTY_OUTPUT") {
            self.pretty_output = parse_bool("QUIZ_PRETTY_OUTPUT", &value)?;
        }
        if let Some(value) = var("VERBOSE_LOGGING") {
            self.verbose_logging = parse_bool("VERBOSE_LOGGING", &value)?;
        }
        Ok(self)
    }

    /// 输入文件的完整路径，与 input_files 一一对应
    pub fn input_paths(&self) -> Vec<(String, PathBuf)> {
        self.input_files
            .iter()
            .map(|name| (name.clone(), self.workspace.join(name)))
            .collect()
    }
}

fn parse_bool(var_name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: "bool".to_string(),
        }),
    }
}
