// 文件记录数据类型定义

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 文件内容来源
///
/// 克隆只复制引用，不复制内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileBody {
    /// 内存中的字节
    Memory(Arc<[u8]>),
    /// 本地磁盘上的文件
    Local(PathBuf),
}

impl FileBody {
    /// 读取全部内容（仅供调用方使用，选择流程本身不读取内容）
    pub async fn bytes(&self) -> std::io::Result<Vec<u8>> {
        match self {
            Self::Memory(data) => Ok(data.to_vec()),
            Self::Local(path) => tokio::fs::read(path).await,
        }
    }

    /// 本地文件路径
    pub fn local_path(&self) -> Option<&Path> {
        match self {
            Self::Memory(_) => None,
            Self::Local(path) => Some(path),
        }
    }
}

impl From<Vec<u8>> for FileBody {
    fn from(data: Vec<u8>) -> Self {
        Self::Memory(data.into())
    }
}

impl From<&[u8]> for FileBody {
    fn from(data: &[u8]) -> Self {
        Self::Memory(data.into())
    }
}

/// 宿主提供的原始文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub name: String,
    pub size: u64,
    /// 最后修改时间（毫秒时间戳）
    pub last_modified: i64,
    /// MIME 类型，可能为空
    pub mime_type: String,
    /// 目录选择时浏览器给出的相对路径，可能为空
    pub webkit_relative_path: Option<String>,
    pub body: FileBody,
}

impl RawFile {
    /// 由内存内容创建文件
    pub fn new(name: impl Into<String>, data: impl Into<FileBody>) -> Self {
        let body = data.into();
        let size = match &body {
            FileBody::Memory(data) => data.len() as u64,
            FileBody::Local(_) => 0,
        };
        Self {
            name: name.into(),
            size,
            last_modified: 0,
            mime_type: String::new(),
            webkit_relative_path: None,
            body,
        }
    }

    /// 由本地文件创建（大小由调用方从元数据给出）
    pub fn local(name: impl Into<String>, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            last_modified: 0,
            mime_type: String::new(),
            webkit_relative_path: None,
            body: FileBody::Local(path.into()),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn with_last_modified(mut self, last_modified: i64) -> Self {
        self.last_modified = last_modified;
        self
    }

    pub fn with_relative_path(mut self, relative_path: impl Into<String>) -> Self {
        self.webkit_relative_path = Some(relative_path.into());
        self
    }
}

/// 带路径的文件记录
///
/// 构造后不可修改：所有字段只读，`path` 一经确定不再变化
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileWithPath {
    name: String,
    size: u64,
    last_modified: i64,
    #[serde(rename = "type")]
    mime_type: String,
    path: String,
    relative_path: String,
    #[serde(skip)]
    webkit_relative_path: Option<String>,
    #[serde(skip)]
    body: FileBody,
}

impl FileWithPath {
    pub(crate) fn new(file: RawFile, path: String, relative_path: String) -> Self {
        Self {
            name: file.name,
            size: file.size,
            last_modified: file.last_modified,
            mime_type: file.mime_type,
            path,
            relative_path,
            webkit_relative_path: file.webkit_relative_path,
            body: file.body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn last_modified(&self) -> i64 {
        self.last_modified
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn body(&self) -> &FileBody {
        &self.body
    }

    /// 还原为原始文件（保留推断出的 MIME 类型），可再次装饰
    pub fn file(&self) -> RawFile {
        RawFile {
            name: self.name.clone(),
            size: self.size,
            last_modified: self.last_modified,
            mime_type: self.mime_type.clone(),
            webkit_relative_path: self.webkit_relative_path.clone(),
            body: self.body.clone(),
        }
    }
}
