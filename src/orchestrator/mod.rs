//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 管理应用生命周期（初始化、运行）
//! - 按配置顺序加载文档（Vec<RawDocument>）
//! - 写出 JSON 并输出全局统计信息
//!
//! ### `document_processor` - 单个文档处理器
//! - 切分单个文档的所有题块（Vec<Block>）
//! - 复用 BlockFlow 处理每个题块
//! - 通过外部传入的 IdSequence 分配 id
//! - 输出单个文档的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<RawDocument>)
//!     ↓
//! document_processor (处理 Vec<Block>)
//!     ↓
//! workflow::BlockFlow (处理单个 Block)
//!     ↓
//! services (能力层：segment / question / option / answer / explanation / output)
//!     ↓
//! rules + infrastructure (识别规则、LineCursor)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，document_processor 管单个
//! 2. **无全局状态**：id 序列显式传递
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure
//! 4. **无业务逻辑**：只做调度和统计，不做具体解析判断

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::{App, RunSummary};
pub use document_processor::{
    parse_document, parse_documents, process_document, process_documents, DocumentStats,
    IdSequence,
};
