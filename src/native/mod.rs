// 本地文件系统适配器
//
// 用 tokio::fs 实现全部宿主能力接口，使遍历引擎可以脱离浏览器驱动

mod entry;
mod item;

pub use entry::{NativeDirectoryEntry, NativeDirectoryReader, NativeFileEntry, NativeFileHandle};
pub use item::{drop_event, NativeTransferItem};

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::error::HostError;
use crate::file::RawFile;

/// 由路径与元数据构造原始文件
pub(crate) fn raw_file_from_metadata(
    name: &str,
    path: &Path,
    metadata: &std::fs::Metadata,
) -> RawFile {
    let last_modified = metadata
        .modified()
        .ok()
        .map(system_time_to_millis)
        .unwrap_or_default();
    RawFile::local(name, path, metadata.len()).with_last_modified(last_modified)
}

/// 将 SystemTime 转换为毫秒时间戳
fn system_time_to_millis(time: SystemTime) -> i64 {
    let datetime: DateTime<Utc> = time.into();
    datetime.timestamp_millis()
}

/// 读取文件名
pub(crate) fn file_name_of(path: &Path) -> Result<String, HostError> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| {
            HostError::new(
                "NotFoundError",
                format!("路径没有文件名: {}", path.display()),
            )
        })
}

/// 拼接子条目完整路径
pub(crate) fn child_full_path(parent: &str, name: &str) -> String {
    format!("{}/{}", parent.trim_end_matches('/'), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_full_path() {
        assert_eq!(child_full_path("/dir", "a.txt"), "/dir/a.txt");
        assert_eq!(child_full_path("/dir/", "a.txt"), "/dir/a.txt");
        assert_eq!(child_full_path("", "a.txt"), "/a.txt");
    }

    #[test]
    fn test_file_name_of_root_fails() {
        assert!(file_name_of(Path::new("/")).is_err());
        assert_eq!(file_name_of(Path::new("/tmp/x.txt")).unwrap(), "x.txt");
    }

    #[test]
    fn test_system_time_to_millis() {
        let time = SystemTime::UNIX_EPOCH + std::time::Duration::from_millis(1_500);
        assert_eq!(system_time_to_millis(time), 1_500);
    }
}
