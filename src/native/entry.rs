// 本地文件与目录条目

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{self, ReadDir};
use tracing::debug;

use super::{child_full_path, raw_file_from_metadata};
use crate::config::NativeConfig;
use crate::entry::{DirectoryEntry, DirectoryReader, Entry, FileEntry};
use crate::error::HostError;
use crate::file::RawFile;
use crate::transfer::FileHandle;

/// 本地文件条目
#[derive(Debug, Clone)]
pub struct NativeFileEntry {
    name: String,
    full_path: String,
    path: PathBuf,
}

impl NativeFileEntry {
    pub fn new(name: impl Into<String>, full_path: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            path: path.into(),
        }
    }
}

#[async_trait]
impl FileEntry for NativeFileEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_path(&self) -> &str {
        &self.full_path
    }

    async fn file(&self) -> Result<RawFile, HostError> {
        read_local_file(&self.name, &self.path).await
    }
}

/// 本地文件句柄
#[derive(Debug, Clone)]
pub struct NativeFileHandle {
    name: String,
    path: PathBuf,
}

impl NativeFileHandle {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[async_trait]
impl FileHandle for NativeFileHandle {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_file(&self) -> Result<RawFile, HostError> {
        read_local_file(&self.name, &self.path).await
    }
}

async fn read_local_file(name: &str, path: &Path) -> Result<RawFile, HostError> {
    let metadata = fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(HostError::new(
            "TypeMismatchError",
            format!("不是文件: {}", path.display()),
        ));
    }
    Ok(raw_file_from_metadata(name, path, &metadata))
}

/// 本地目录条目
#[derive(Debug, Clone)]
pub struct NativeDirectoryEntry {
    name: String,
    full_path: String,
    path: PathBuf,
    config: NativeConfig,
}

impl NativeDirectoryEntry {
    pub fn new(
        name: impl Into<String>,
        full_path: impl Into<String>,
        path: impl Into<PathBuf>,
        config: NativeConfig,
    ) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            path: path.into(),
            config,
        }
    }
}

impl DirectoryEntry for NativeDirectoryEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_path(&self) -> &str {
        &self.full_path
    }

    fn create_reader(&self) -> Box<dyn DirectoryReader> {
        Box::new(NativeDirectoryReader::new(
            self.path.clone(),
            self.full_path.clone(),
            self.config.clone(),
        ))
    }
}

enum ReaderState {
    /// 尚未打开目录
    Pending,
    Reading(ReadDir),
    /// 已返回过最后一个非空批次
    Done,
}

/// 本地分页目录读取器
///
/// 每批最多 `page_size` 个条目，目录读完后返回空批次
pub struct NativeDirectoryReader {
    path: PathBuf,
    full_path: String,
    config: NativeConfig,
    state: ReaderState,
}

impl NativeDirectoryReader {
    pub fn new(path: PathBuf, full_path: String, config: NativeConfig) -> Self {
        Self {
            path,
            full_path,
            config,
            state: ReaderState::Pending,
        }
    }
}

#[async_trait]
impl DirectoryReader for NativeDirectoryReader {
    async fn read_entries(&mut self) -> Result<Vec<Entry>, HostError> {
        if let ReaderState::Pending = self.state {
            self.state = ReaderState::Reading(fs::read_dir(&self.path).await?);
        }

        let ReaderState::Reading(read_dir) = &mut self.state else {
            return Ok(Vec::new());
        };

        let page_size = self.config.page_size.max(1);
        let mut batch = Vec::with_capacity(page_size);
        let mut exhausted = false;

        while batch.len() < page_size {
            match read_dir.next_entry().await? {
                Some(dir_entry) => {
                    let entry = child_entry(&dir_entry, &self.full_path, &self.config).await?;
                    batch.push(entry);
                }
                None => {
                    exhausted = true;
                    break;
                }
            }
        }

        if exhausted {
            self.state = ReaderState::Done;
        }

        debug!("本地目录读取: {} 返回 {} 个条目", self.path.display(), batch.len());
        Ok(batch)
    }
}

/// 按文件类型把目录项转换为条目
///
/// 不跟随符号链接时，链接本身作为异常条目
async fn child_entry(
    dir_entry: &fs::DirEntry,
    parent_full_path: &str,
    config: &NativeConfig,
) -> Result<Entry, HostError> {
    let path = dir_entry.path();
    let name = dir_entry.file_name().to_string_lossy().to_string();
    let full_path = child_full_path(parent_full_path, &name);

    let mut file_type = dir_entry.file_type().await?;
    if file_type.is_symlink() && config.follow_symlinks {
        file_type = fs::metadata(&path).await?.file_type();
    }

    let entry = if file_type.is_dir() {
        Entry::Directory(Arc::new(NativeDirectoryEntry::new(
            name,
            full_path,
            path,
            config.clone(),
        )))
    } else if file_type.is_file() {
        Entry::File(Arc::new(NativeFileEntry::new(name, full_path, path)))
    } else {
        debug!("跳过非常规文件: {}", path.display());
        Entry::Unknown { name, full_path }
    };
    Ok(entry)
}
