// 拖放条目与文件系统句柄
//
// 宿主侧能力对象的抽象，以及逐条目的解析策略

mod resolver;

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::entry::Entry;
use crate::error::HostError;
use crate::file::RawFile;

pub use resolver::ItemResolver;

/// 拖放条目的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    /// 拖动的文本等非文件内容
    String,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::String => write!(f, "string"),
        }
    }
}

/// 旧版条目访问器（`webkitGetAsEntry`）的结果
#[derive(Debug, Clone)]
pub enum EntryLookup {
    /// 条目不提供该访问器
    Unsupported,
    /// 访问器存在但没有返回条目
    Missing,
    Found(Entry),
}

/// 文件系统句柄
#[derive(Clone)]
pub enum FileSystemHandle {
    File(Arc<dyn FileHandle>),
    Directory { name: String },
}

impl FileSystemHandle {
    pub fn name(&self) -> &str {
        match self {
            Self::File(handle) => handle.name(),
            Self::Directory { name } => name,
        }
    }
}

impl fmt::Debug for FileSystemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(handle) => f.debug_tuple("File").field(&handle.name()).finish(),
            Self::Directory { name } => f.debug_struct("Directory").field("name", name).finish(),
        }
    }
}

/// 新版句柄访问器（`getAsFileSystemHandle`）的结果
#[derive(Debug, Clone)]
pub enum HandleLookup {
    /// 浏览器缺陷导致返回 undefined，视为不可用
    Undefined,
    /// 返回 null
    Null,
    Found(FileSystemHandle),
}

/// 文件句柄
#[async_trait]
pub trait FileHandle: Send + Sync {
    fn name(&self) -> &str;

    async fn get_file(&self) -> Result<RawFile, HostError>;
}

/// 拖放负载中的一个条目
///
/// 能力探测（访问器是否存在）由宿主适配器在构造时完成，
/// 默认实现表示对应能力不存在
#[async_trait]
pub trait TransferItem: Send + Sync {
    fn kind(&self) -> ItemKind;

    fn mime_type(&self) -> &str;

    fn webkit_get_as_entry(&self) -> EntryLookup {
        EntryLookup::Unsupported
    }

    fn supports_file_system_handle(&self) -> bool {
        false
    }

    async fn get_as_file_system_handle(&self) -> Result<HandleLookup, HostError> {
        Ok(HandleLookup::Undefined)
    }

    /// 同步回退访问器
    fn get_as_file(&self) -> Option<RawFile>;
}
