// 分页读取游标
//
// 把“每次回调一批”的读取协议包装成单槽请求/响应：
// 每次 `next_batch` 只发出一次读取，读到空批次或失败后不再触碰读取器

use tracing::debug;

use super::{DirectoryReader, Entry};
use crate::error::{Result, SelectorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    Open,
    Exhausted,
    Failed,
}

pub(crate) struct BatchCursor {
    reader: Box<dyn DirectoryReader>,
    path: String,
    state: CursorState,
    /// 已完成的读取次数
    reads: usize,
}

impl BatchCursor {
    pub(crate) fn new(reader: Box<dyn DirectoryReader>, path: impl Into<String>) -> Self {
        Self {
            reader,
            path: path.into(),
            state: CursorState::Open,
            reads: 0,
        }
    }

    /// 读取下一批
    ///
    /// 返回 `Ok(None)` 表示读取结束
    pub(crate) async fn next_batch(&mut self) -> Result<Option<Vec<Entry>>> {
        if self.state != CursorState::Open {
            return Ok(None);
        }

        let batch = match self.reader.read_entries().await {
            Ok(batch) => batch,
            Err(source) => {
                self.state = CursorState::Failed;
                return Err(SelectorError::DirectoryRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        self.reads += 1;

        if batch.is_empty() {
            debug!("目录读取结束: {} (共 {} 次读取)", self.path, self.reads);
            self.state = CursorState::Exhausted;
            return Ok(None);
        }

        debug!(
            "目录批次 #{}: {} 个条目 ({})",
            self.reads,
            batch.len(),
            self.path
        );
        Ok(Some(batch))
    }

    #[cfg(test)]
    pub(crate) fn reads(&self) -> usize {
        self.reads
    }
}
