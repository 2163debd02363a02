// File Selector Library
// 把拖放、文件输入框变更与文件句柄统一解析为带路径的文件列表

// 配置管理模块
pub mod config;

// 错误类型
pub mod error;

// 文件记录与路径修饰
pub mod file;

// 目录条目抽象
pub mod entry;

// 拖放条目与文件系统句柄
pub mod transfer;

// 目录遍历引擎
pub mod traversal;

// 事件入口
pub mod selector;

// 本地文件系统适配器
pub mod native;

// 日志系统
pub mod logging;

#[cfg(test)]
pub(crate) mod testing;

// 导出常用类型
pub use config::AppConfig;
pub use entry::{DirectoryEntry, DirectoryReader, Entry, FileEntry};
pub use error::{HostError, Result, SelectorError};
pub use file::{to_file_with_path, FileBody, FileWithPath, RawFile};
pub use selector::{ChangeEvent, DragEvent, EventInput, FileSelector, Selection};
pub use transfer::{FileHandle, FileSystemHandle, ItemKind, ItemResolver, TransferItem};
pub use traversal::FileTree;
