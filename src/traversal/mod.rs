// 目录遍历模块
//
// 递归、异步地展开拖放的目录树

mod tree;
mod walker;

pub use tree::FileTree;
pub use walker::{resolve_entry, walk_directory};
