//! # Question Extractor
//!
//! 把格式松散的考试文本（土耳其语/英语）解析为结构化题目 JSON 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 与业务无关的底层能力
//! - `LineCursor` - 行游标，只读切片 + 位置，各阶段通过它消费行
//! - `rules` - 具名识别规则列表，按优先级判断题目起始行和行类型
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个阶段只处理单个题块
//! - `block_segmenter` - 把文档切分为题块
//! - `question_text` / `option_collector` / `answer_extractor` / `explanation_collector` - 四个解析阶段
//! - `OutputWriter` - 写 JSON 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个题块"的完整解析流程
//! - `BlockCtx` - 上下文封装（source + doc_index + block_index）
//! - `BlockFlow` - 流程编排（题干 → 选项 → 答案 → 解析 → 输出/丢弃）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，负责加载与输出
//! - `orchestrator/document_processor` - 单个文档处理器，遍历题块并分配 id
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod rules;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::LineCursor;
pub use models::{Answer, Block, ChoiceOption, ParsedQuestion, QuestionRecord, RawDocument};
pub use orchestrator::{parse_document, parse_documents, App, IdSequence, RunSummary};
pub use workflow::{parse_block, BlockCtx, BlockFlow, BlockOutcome};
