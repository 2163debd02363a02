//! 错误类型定义
//!
//! - `HostError`：宿主环境（浏览器或本地适配器）上报的原始错误，原样向上传递
//! - `SelectorError`：文件选择流程对外暴露的错误

use crate::transfer::{ItemKind, TransferItem};

/// 宿主能力对象上报的错误（类似 DOMException）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{name}: {message}")]
pub struct HostError {
    /// 错误名称，例如 `NotFoundError`
    pub name: String,
    /// 错误描述
    pub message: String,
}

impl HostError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(err: std::io::Error) -> Self {
        let name = match err.kind() {
            std::io::ErrorKind::NotFound => "NotFoundError",
            std::io::ErrorKind::PermissionDenied => "NotAllowedError",
            _ => "NotReadableError",
        };
        Self::new(name, err.to_string())
    }
}

/// 文件选择错误
#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    /// 所有解析策略都无法得到文件
    #[error("拖放条目不是文件 (kind={kind}, type={mime_type:?})")]
    NotAFile { kind: ItemKind, mime_type: String },

    /// 目录分页读取失败
    #[error("读取目录失败: {path}")]
    DirectoryRead {
        path: String,
        #[source]
        source: HostError,
    },

    /// 文件条目无法产出文件
    #[error("读取文件条目失败: {path}")]
    FileRead {
        path: String,
        #[source]
        source: HostError,
    },

    /// 获取文件系统句柄或句柄内文件失败
    #[error("访问文件系统句柄失败")]
    HandleAccess {
        #[source]
        source: HostError,
    },

    /// change 事件未绑定到带文件列表的文件输入元素
    #[error("事件未关联到有效的文件输入元素")]
    InvalidInputTarget,
}

impl SelectorError {
    /// 由拖放条目构造 `NotAFile`，保留条目的 kind 与 type 便于排查
    pub fn not_a_file(item: &dyn TransferItem) -> Self {
        Self::NotAFile {
            kind: item.kind(),
            mime_type: item.mime_type().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectorError>;
