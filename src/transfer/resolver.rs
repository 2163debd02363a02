// 拖放条目解析
//
// 决策顺序：
// 1. 条目不提供旧版访问器 → 直接走文件解析
// 2. 旧版访问器得到目录条目 → 目录遍历
// 3. 得到文件条目或没有条目 → 文件解析，携带条目完整路径
// 4. 文件解析：安全上下文下优先新版句柄，句柄不可用时回退到同步访问器

use std::sync::Arc;
use tracing::{debug, warn};

use super::{EntryLookup, FileSystemHandle, HandleLookup, TransferItem};
use crate::entry::{is_directory, Entry};
use crate::error::{Result, SelectorError};
use crate::file::{to_file_with_path, FileWithPath};
use crate::traversal::{walk_directory, FileTree};

/// 拖放条目解析器
#[derive(Debug, Clone, Copy)]
pub struct ItemResolver {
    /// 宿主是否处于安全上下文（决定是否尝试新版句柄访问器）
    secure_context: bool,
}

impl ItemResolver {
    pub fn new(secure_context: bool) -> Self {
        Self { secure_context }
    }

    /// 解析单个条目
    ///
    /// 普通文件得到一个叶子；目录得到嵌套的遍历结果
    pub async fn resolve(&self, item: Arc<dyn TransferItem>) -> Result<FileTree> {
        let entry = match item.webkit_get_as_entry() {
            EntryLookup::Unsupported | EntryLookup::Missing => None,
            EntryLookup::Found(entry) => Some(entry),
        };

        // 目录始终走遍历，不论是否支持新版句柄
        if let Some(Entry::Directory(dir)) = entry.as_ref().filter(|e| is_directory(e)) {
            debug!("拖放目录: {}", dir.full_path());
            return walk_directory(Arc::clone(dir)).await;
        }

        let entry_path = entry.as_ref().map(Entry::full_path);
        let file = self.resolve_file(item.as_ref(), entry_path).await?;
        Ok(FileTree::Leaf(file))
    }

    /// 文件解析：新版句柄优先，其次同步访问器
    async fn resolve_file(
        &self,
        item: &dyn TransferItem,
        entry_path: Option<&str>,
    ) -> Result<FileWithPath> {
        if let Some(file) = self.from_file_system_handle(item, entry_path).await? {
            return Ok(file);
        }

        let file = item.get_as_file().ok_or_else(|| {
            warn!("拖放条目无法获取文件 (type={:?})", item.mime_type());
            SelectorError::not_a_file(item)
        })?;
        Ok(to_file_with_path(&file, entry_path))
    }

    /// 通过新版句柄获取文件
    ///
    /// 返回 `Ok(None)` 表示该途径不可用，应回退
    async fn from_file_system_handle(
        &self,
        item: &dyn TransferItem,
        entry_path: Option<&str>,
    ) -> Result<Option<FileWithPath>> {
        if !self.secure_context || !item.supports_file_system_handle() {
            return Ok(None);
        }

        let lookup = item
            .get_as_file_system_handle()
            .await
            .map_err(|source| SelectorError::HandleAccess { source })?;

        let handle = match lookup {
            HandleLookup::Undefined => {
                debug!("文件系统句柄为 undefined，回退到 getAsFile");
                return Ok(None);
            }
            HandleLookup::Found(FileSystemHandle::File(handle)) => handle,
            HandleLookup::Null | HandleLookup::Found(FileSystemHandle::Directory { .. }) => {
                return Err(SelectorError::not_a_file(item));
            }
        };

        let file = handle
            .get_file()
            .await
            .map_err(|source| SelectorError::HandleAccess { source })?;

        // 条目完整路径优先于句柄
        Ok(Some(to_file_with_path(&file, entry_path)))
    }
}
