// 拖放条目模块
//
// 拖放子系统暴露的文件树句柄：文件条目、目录条目、分页目录读取器

mod classify;
mod cursor;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::error::HostError;
use crate::file::RawFile;

pub use classify::{classify, is_directory, is_file, EntryKind};
pub(crate) use cursor::BatchCursor;

/// 文件条目：异步产出文件，可能失败
#[async_trait]
pub trait FileEntry: Send + Sync {
    fn name(&self) -> &str;

    /// 条目在拖放文件树中的完整路径，例如 `/dir/a.txt`
    fn full_path(&self) -> &str;

    async fn file(&self) -> Result<RawFile, HostError>;
}

/// 目录条目：创建一个一次性的分页读取器
pub trait DirectoryEntry: Send + Sync {
    fn name(&self) -> &str;

    fn full_path(&self) -> &str;

    fn create_reader(&self) -> Box<dyn DirectoryReader>;
}

/// 分页目录读取器
///
/// 每次调用返回下一批子条目，空批次表示读取结束。
/// `&mut self` 保证同一读取器上不会有重叠的读取。
#[async_trait]
pub trait DirectoryReader: Send {
    async fn read_entries(&mut self) -> Result<Vec<Entry>, HostError>;
}

/// 条目
#[derive(Clone)]
pub enum Entry {
    File(Arc<dyn FileEntry>),
    Directory(Arc<dyn DirectoryEntry>),
    /// 既不是文件也不是目录的异常条目，不产出任何文件
    Unknown { name: String, full_path: String },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => file.name(),
            Self::Directory(dir) => dir.name(),
            Self::Unknown { name, .. } => name,
        }
    }

    pub fn full_path(&self) -> &str {
        match self {
            Self::File(file) => file.full_path(),
            Self::Directory(dir) => dir.full_path(),
            Self::Unknown { full_path, .. } => full_path,
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("kind", &classify(self))
            .field("full_path", &self.full_path())
            .finish()
    }
}
