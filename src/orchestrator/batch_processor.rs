//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责所有输入文档的处理和输出。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：根据配置创建题块流程和输出服务
//! 2. **批量加载**：按配置顺序加载所有输入文档（缺失文件跳过）
//! 3. **顺序处理**：按文件顺序处理，保证 id 按文件、题块顺序分配
//! 4. **写入输出**：没有题目时也写出空数组
//! 5. **全局统计**：汇总所有文档的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个题块的细节
//! - **向下委托**：委托 document_processor 处理单个文档

use crate::config::Config;
use crate::models::load_documents;
use crate::orchestrator::document_processor::{process_documents, IdSequence};
use crate::services::OutputWriter;
use crate::utils::logging::{log_documents_loaded, log_startup, print_final_stats};
use crate::workflow::BlockFlow;
use anyhow::{Context, Result};
use tracing::{info, warn};

/// 运行结果汇总
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// 成功加载的文档数
    pub documents: usize,
    pub blocks: usize,
    pub emitted: usize,
    pub dropped: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    flow: BlockFlow,
    writer: OutputWriter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        let flow = BlockFlow::new(&config);
        let writer = OutputWriter::from_config(&config);

        Self {
            config,
            flow,
            writer,
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        log_startup(&self.config);

        info!("\n📁 正在加载输入文档...");
        let (documents, requested) = load_documents(&self.config)
            .await
            .context("加载输入文档失败")?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到可处理的输入文件，将输出空数组");
        } else {
            log_documents_loaded(documents.len(), requested);
        }

        let mut ids = IdSequence::default();
        let (records, total) = process_documents(&documents, &self.flow, &mut ids);

        self.writer.write(&records).await.with_context(|| {
            format!("写入输出文件失败: {}", self.writer.output_path().display())
        })?;

        print_final_stats(records.len(), documents.len(), self.writer.output_path());

        Ok(RunSummary {
            documents: documents.len(),
            blocks: total.blocks,
            emitted: total.emitted,
            dropped: total.dropped,
        })
    }
}
