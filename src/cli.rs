//! 命令行参数
//!
//! 优先级：默认值 → 配置文件 → 环境变量 → 命令行

use crate::config::Config;
use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// 将考试文本转换为题目 JSON
#[derive(Debug, Parser)]
#[command(name = "question-extractor", version)]
pub struct Cli {
    /// 输入文件（相对 workspace），不指定则使用配置中的列表
    pub files: Vec<String>,

    /// TOML 配置文件
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 输入文件所在目录
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// 输出 JSON 文件
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 扫描整个 workspace 目录，忽略配置中的文件列表
    #[arg(long, conflicts_with = "files")]
    pub scan: bool,

    /// 输出紧凑 JSON
    #[arg(long)]
    pub compact: bool,

    /// 显示详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 合并所有配置来源
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)?.with_env()?,
            None => Config::from_env()?,
        };
        Ok(self.apply(config))
    }

    /// 用命令行参数覆盖配置
    pub fn apply(&self, mut config: Config) -> Config {
        if !self.files.is_empty() {
            config.input_files = self.files.clone();
        }
        if self.scan {
            config.input_files.clear();
        }
        if let Some(workspace) = &self.workspace {
            config.workspace = workspace.clone();
        }
        if let Some(output) = &self.output {
            config.output_file = output.clone();
        }
        if self.compact {
            config.pretty_output = false;
        }
        if self.verbose {
            config.verbose_logging = true;
        }
        config
    }
}
