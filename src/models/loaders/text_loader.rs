use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use crate::models::document::RawDocument;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从文本文件加载数据并转换为 RawDocument 对象
pub async fn load_text_document(path: &Path, source: &str) -> AppResult<RawDocument> {
    let content = fs::read_to_string(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::file_not_found(path),
        _ => AppError::file_read_failed(path, e),
    })?;

    Ok(RawDocument::from_text(source, &content))
}

/// 列出文件夹中指定扩展名的文件，按文件名排序
pub async fn discover_text_files(folder: &Path, extension: &str) -> AppResult<Vec<String>> {
    if !folder.is_dir() {
        return Err(FileError::DirectoryNotFound {
            path: folder.to_path_buf(),
        }
        .into());
    }

    let mut names = Vec::new();
    let mut entries = fs::read_dir(folder)
        .await
        .map_err(|e| AppError::file_read_failed(folder, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder, e))?
    {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension) {
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                names.push(name.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}

/// 按配置加载所有输入文档
///
/// 文件不存在时记录警告并跳过，其余错误直接返回
///
/// # 返回
/// 返回 (成功加载的文档, 计划加载的文件数)
pub async fn load_documents(config: &Config) -> AppResult<(Vec<RawDocument>, usize)> {
    let inputs: Vec<(String, PathBuf)> = if config.input_files.is_empty() {
        discover_text_files(&config.workspace, &config.input_extension)
            .await?
            .into_iter()
            .map(|name| {
                let path = config.workspace.join(&name);
                (name, path)
            })
            .collect()
    } else {
        config.input_paths()
    };

    let requested = inputs.len();
    let mut documents = Vec::with_capacity(requested);

    for (source, path) in inputs {
        match load_text_document(&path, &source).await {
            Ok(doc) => {
                tracing::debug!("已加载: {} ({} 行)", source, doc.lines.len());
                documents.push(doc);
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!("⚠️ 文件不存在，跳过: {}", path.display());
            }
            Err(e) => return Err(e),
        }
    }

    Ok((documents, requested))
}
