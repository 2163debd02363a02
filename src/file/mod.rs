// 文件记录模块
//
// 原始文件描述、扩展名到 MIME 的映射，以及带路径文件记录的生成

mod decorate;
mod mime;
mod types;

pub use decorate::to_file_with_path;
pub use mime::{mime_type_for_extension, mime_type_for_name};
pub use types::*;
