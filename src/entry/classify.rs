// 条目分类

use serde::Serialize;

use super::Entry;

/// 条目类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
    /// 异常条目，按“没有文件”处理
    Unsupported,
}

pub fn classify(entry: &Entry) -> EntryKind {
    match entry {
        Entry::File(_) => EntryKind::File,
        Entry::Directory(_) => EntryKind::Directory,
        Entry::Unknown { .. } => EntryKind::Unsupported,
    }
}

pub fn is_directory(entry: &Entry) -> bool {
    classify(entry) == EntryKind::Directory
}

pub fn is_file(entry: &Entry) -> bool {
    classify(entry) == EntryKind::File
}
