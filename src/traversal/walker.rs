// 目录遍历器
//
// 批次读取严格串行：第 N+1 次读取只在第 N 批条目进入解析队列之后发出；
// 已读到的批次在等待下一次读取期间并发解析。
// 任一读取或文件解析失败都会使整个目录失败，不保留部分结果。

use async_recursion::async_recursion;
use futures::future::{try_join_all, BoxFuture};
use futures::stream::{FuturesOrdered, StreamExt};
use futures::FutureExt;
use std::sync::Arc;
use tracing::debug;

use super::tree::FileTree;
use crate::entry::{classify, BatchCursor, DirectoryEntry, Entry, EntryKind, FileEntry};
use crate::error::{Result, SelectorError};
use crate::file::to_file_with_path;

/// 遍历一个目录条目
///
/// 返回的树按“批次 → 批内条目”嵌套，由调用方展平
#[async_recursion]
pub async fn walk_directory(dir: Arc<dyn DirectoryEntry>) -> Result<FileTree> {
    let full_path = dir.full_path().to_string();
    let mut cursor = BatchCursor::new(dir.create_reader(), full_path.as_str());

    // 每个批次一个待完成的解析单元，按批次顺序产出
    let mut pending: FuturesOrdered<BoxFuture<'static, Result<FileTree>>> = FuturesOrdered::new();
    let mut resolved: Vec<FileTree> = Vec::new();

    loop {
        let read = cursor.next_batch();
        tokio::pin!(read);

        // 等待本次读取时继续推进已入队的批次
        let batch = loop {
            tokio::select! {
                biased;
                batch = &mut read => break batch?,
                Some(done) = pending.next(), if !pending.is_empty() => resolved.push(done?),
            }
        };

        match batch {
            Some(entries) => pending.push_back(resolve_batch(entries).boxed()),
            None => break,
        }
    }

    while let Some(done) = pending.next().await {
        resolved.push(done?);
    }

    debug!(
        "目录遍历完成: {} ({} 个批次, {} 个文件)",
        full_path,
        resolved.len(),
        resolved.iter().map(FileTree::len).sum::<usize>()
    );

    Ok(FileTree::Branch(resolved))
}

/// 并发解析同一批内的全部条目
async fn resolve_batch(entries: Vec<Entry>) -> Result<FileTree> {
    let trees = try_join_all(entries.into_iter().map(resolve_entry)).await?;
    Ok(FileTree::Branch(trees))
}

/// 解析单个条目
///
/// 文件条目得到一个叶子，目录条目递归遍历，异常条目不产出文件
pub async fn resolve_entry(entry: Entry) -> Result<FileTree> {
    match (classify(&entry), entry) {
        (EntryKind::Directory, Entry::Directory(dir)) => walk_directory(dir).await,
        (EntryKind::File, Entry::File(file)) => resolve_file_entry(file.as_ref()).await,
        (_, entry) => {
            debug!("跳过无法识别的条目: {}", entry.full_path());
            Ok(FileTree::empty())
        }
    }
}

async fn resolve_file_entry(entry: &dyn FileEntry) -> Result<FileTree> {
    let file = entry
        .file()
        .await
        .map_err(|source| SelectorError::FileRead {
            path: entry.full_path().to_string(),
            source,
        })?;
    Ok(FileTree::Leaf(to_file_with_path(&file, Some(entry.full_path()))))
}
