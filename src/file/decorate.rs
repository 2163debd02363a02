// 路径与 MIME 装饰
//
// 把宿主文件转换为不可变的带路径记录，原始文件不受影响

use super::mime::mime_type_for_name;
use super::types::{FileWithPath, RawFile};

/// 生成带路径的文件记录
///
/// - MIME 类型：原文件类型非空则保留，否则按扩展名推断，推断不到保持为空
/// - `path`：显式路径（包括空串）优先，其次是非空的 webkit 相对路径，最后是文件名
/// - `relative_path`：显式路径，其次 webkit 相对路径，最后是 `/` + 文件名
pub fn to_file_with_path(file: &RawFile, path: Option<&str>) -> FileWithPath {
    let mut decorated = file.clone();
    if decorated.mime_type.is_empty() {
        if let Some(mime) = mime_type_for_name(&decorated.name) {
            decorated.mime_type = mime.to_string();
        }
    }

    let webkit_path = file
        .webkit_relative_path
        .as_deref()
        .filter(|p| !p.is_empty());

    let (path, relative_path) = match (path, webkit_path) {
        (Some(explicit), _) => (explicit.to_string(), explicit.to_string()),
        (None, Some(webkit)) => (webkit.to_string(), webkit.to_string()),
        (None, None) => (file.name.clone(), format!("/{}", file.name)),
    };

    FileWithPath::new(decorated, path, relative_path)
}
