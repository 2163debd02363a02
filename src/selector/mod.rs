// 文件选择入口
//
// 把拖放事件、文件输入框 change 事件和文件系统句柄数组统一转换为文件记录列表

mod event;

use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::SelectorConfig;
use crate::error::{Result, SelectorError};
use crate::file::{to_file_with_path, FileWithPath};
use crate::traversal::FileTree;
use crate::transfer::{FileHandle, FileSystemHandle, ItemKind, ItemResolver, TransferItem};

pub use event::*;

/// 操作系统生成的缩略图缓存文件，drop 结果中剔除
pub const THUMBNAIL_CACHE_FILES: &[&str] = &[
    ".DS_Store", // macOS
    "Thumbs.db", // Windows
];

/// 文件选择器
#[derive(Debug, Clone)]
pub struct FileSelector {
    resolver: ItemResolver,
}

impl FileSelector {
    pub fn new(config: &SelectorConfig) -> Self {
        Self {
            resolver: ItemResolver::new(config.secure_context),
        }
    }

    /// 从任意事件输入中获取文件
    ///
    /// - 拖放事件：只保留 kind 为 file 的条目；非 drop 事件原样返回条目，
    ///   drop 事件解析全部条目、展平并剔除缩略图缓存文件
    /// - 文件系统句柄数组：并发获取全部文件
    /// - 其他输入：返回空列表，不报错
    pub async fn from_event(&self, input: impl Into<EventInput>) -> Result<Vec<Selection>> {
        match input.into() {
            EventInput::Drag(DragEvent {
                event_type,
                data_transfer: Some(data_transfer),
            }) => self.from_data_transfer(data_transfer, &event_type).await,
            EventInput::Handles(handles) => match file_handles_of(&handles) {
                Some(handles) => {
                    let files = self.from_file_handles(&handles).await?;
                    Ok(files.into_iter().map(Selection::File).collect())
                }
                None => {
                    debug!("句柄数组中存在非文件句柄，按未识别输入处理");
                    Ok(Vec::new())
                }
            },
            EventInput::Drag(_) | EventInput::Change(_) | EventInput::Other => {
                debug!("未识别的事件输入，返回空列表");
                Ok(Vec::new())
            }
        }
    }

    /// 从文件输入框的 change 事件获取文件
    ///
    /// 事件目标必须是带文件列表的文件输入元素，否则返回 `InvalidInputTarget`
    pub async fn from_change_event(&self, event: &ChangeEvent) -> Result<Vec<FileWithPath>> {
        match &event.target {
            Some(EventTarget::FileInput { files: Some(files) }) => Ok(files
                .iter()
                .map(|file| to_file_with_path(file, None))
                .collect()),
            _ => Err(SelectorError::InvalidInputTarget),
        }
    }

    /// 从文件系统句柄获取文件，并发获取，结果顺序与句柄顺序一致
    pub async fn from_file_handles(
        &self,
        handles: &[Arc<dyn FileHandle>],
    ) -> Result<Vec<FileWithPath>> {
        try_join_all(handles.iter().map(|handle| async move {
            let file = handle
                .get_file()
                .await
                .map_err(|source| SelectorError::HandleAccess { source })?;
            Ok::<_, SelectorError>(to_file_with_path(&file, None))
        }))
        .await
    }

    async fn from_data_transfer(
        &self,
        data_transfer: DataTransfer,
        event_type: &str,
    ) -> Result<Vec<Selection>> {
        let items: Vec<Arc<dyn TransferItem>> = data_transfer
            .items
            .into_iter()
            .filter(|item| item.kind() == ItemKind::File)
            .collect();

        // 只有 dragstart 与 drop 能访问条目内容，其余事件返回原始条目
        if event_type != DROP_EVENT {
            debug!("{} 事件: 返回 {} 个未解析条目", event_type, items.len());
            return Ok(items.into_iter().map(Selection::Item).collect());
        }

        let trees = try_join_all(items.into_iter().map(|item| self.resolver.resolve(item))).await?;
        let files = FileTree::Branch(trees).flatten();
        let total = files.len();

        let files: Vec<Selection> = files
            .into_iter()
            .filter(|file| !is_thumbnail_cache(file.name()))
            .map(Selection::File)
            .collect();

        info!(
            "drop 事件解析完成: {} 个文件 (剔除缓存文件 {} 个)",
            files.len(),
            total - files.len()
        );
        Ok(files)
    }
}

fn is_thumbnail_cache(name: &str) -> bool {
    THUMBNAIL_CACHE_FILES.iter().any(|ignored| *ignored == name)
}

/// 数组中每个元素都是文件句柄时才视为句柄数组
fn file_handles_of(handles: &[FileSystemHandle]) -> Option<Vec<Arc<dyn FileHandle>>> {
    handles
        .iter()
        .map(|handle| match handle {
            FileSystemHandle::File(file) => Some(Arc::clone(file)),
            FileSystemHandle::Directory { .. } => None,
        })
        .collect()
}
