// 本地路径构造的拖放条目

use async_trait::async_trait;
use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use super::entry::{NativeDirectoryEntry, NativeFileEntry, NativeFileHandle};
use super::{child_full_path, file_name_of, raw_file_from_metadata};
use crate::config::NativeConfig;
use crate::entry::Entry;
use crate::error::HostError;
use crate::file::{mime_type_for_name, RawFile};
use crate::selector::DragEvent;
use crate::transfer::{EntryLookup, FileSystemHandle, HandleLookup, ItemKind, TransferItem};

/// 由本地路径构造的拖放条目
///
/// 构造时读取一次元数据，之后的能力探测都基于这次结果
#[derive(Clone)]
pub struct NativeTransferItem {
    path: PathBuf,
    mime_type: String,
    entry: Entry,
    handle: FileSystemHandle,
    file: Option<RawFile>,
}

impl NativeTransferItem {
    pub async fn open(path: impl AsRef<Path>, config: &NativeConfig) -> Result<Self, HostError> {
        let path = path.as_ref();
        let name = file_name_of(path)?;
        let full_path = child_full_path("", &name);

        let metadata = if config.follow_symlinks {
            fs::metadata(path).await?
        } else {
            fs::symlink_metadata(path).await?
        };

        if metadata.is_dir() {
            let entry = NativeDirectoryEntry::new(name.as_str(), full_path, path, config.clone());
            return Ok(Self {
                path: path.to_path_buf(),
                mime_type: String::new(),
                entry: Entry::Directory(Arc::new(entry)),
                handle: FileSystemHandle::Directory { name },
                file: None,
            });
        }

        if !metadata.is_file() {
            return Err(HostError::new(
                "TypeMismatchError",
                format!("不是普通文件或目录: {}", path.display()),
            ));
        }

        Ok(Self {
            path: path.to_path_buf(),
            mime_type: mime_type_for_name(&name).unwrap_or_default().to_string(),
            entry: Entry::File(Arc::new(NativeFileEntry::new(name.as_str(), full_path, path))),
            handle: FileSystemHandle::File(Arc::new(NativeFileHandle::new(name.as_str(), path))),
            file: Some(raw_file_from_metadata(&name, path, &metadata)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TransferItem for NativeTransferItem {
    fn kind(&self) -> ItemKind {
        ItemKind::File
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn webkit_get_as_entry(&self) -> EntryLookup {
        EntryLookup::Found(self.entry.clone())
    }

    fn supports_file_system_handle(&self) -> bool {
        true
    }

    async fn get_as_file_system_handle(&self) -> Result<HandleLookup, HostError> {
        Ok(HandleLookup::Found(self.handle.clone()))
    }

    fn get_as_file(&self) -> Option<RawFile> {
        self.file.clone()
    }
}

/// 用本地路径模拟一次拖放事件
pub async fn drop_event(
    paths: &[PathBuf],
    event_type: &str,
    config: &NativeConfig,
) -> Result<DragEvent, HostError> {
    let items = try_join_all(paths.iter().map(|path| NativeTransferItem::open(path, config))).await?;
    let items: Vec<Arc<dyn TransferItem>> = items
        .into_iter()
        .map(|item| Arc::new(item) as Arc<dyn TransferItem>)
        .collect();
    Ok(DragEvent::new(event_type, items))
}
