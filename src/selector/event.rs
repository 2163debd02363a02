// 事件输入与选择结果类型

use std::fmt;
use std::sync::Arc;

use crate::file::{FileWithPath, RawFile};
use crate::transfer::{FileSystemHandle, TransferItem};

/// 唯一会解析条目内容的拖放事件类型
pub const DROP_EVENT: &str = "drop";

/// 拖放负载
#[derive(Clone, Default)]
pub struct DataTransfer {
    pub items: Vec<Arc<dyn TransferItem>>,
}

impl DataTransfer {
    pub fn new(items: Vec<Arc<dyn TransferItem>>) -> Self {
        Self { items }
    }
}

impl fmt::Debug for DataTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTransfer")
            .field("items", &self.items.len())
            .finish()
    }
}

/// 拖放事件
#[derive(Debug, Clone)]
pub struct DragEvent {
    /// 事件类型，例如 `dragenter`、`dragover`、`drop`
    pub event_type: String,
    pub data_transfer: Option<DataTransfer>,
}

impl DragEvent {
    pub fn new(event_type: impl Into<String>, items: Vec<Arc<dyn TransferItem>>) -> Self {
        Self {
            event_type: event_type.into(),
            data_transfer: Some(DataTransfer::new(items)),
        }
    }

    pub fn drop_event(items: Vec<Arc<dyn TransferItem>>) -> Self {
        Self::new(DROP_EVENT, items)
    }

    pub fn is_drop(&self) -> bool {
        self.event_type == DROP_EVENT
    }
}

/// change 事件的目标元素
#[derive(Debug, Clone)]
pub enum EventTarget {
    /// `<input type="file">`，文件列表可能缺失
    FileInput { files: Option<Vec<RawFile>> },
    /// 其他元素
    Element { tag_name: String },
}

/// 文件输入框的 change 事件
#[derive(Debug, Clone, Default)]
pub struct ChangeEvent {
    pub target: Option<EventTarget>,
}

impl ChangeEvent {
    pub fn from_files(files: Vec<RawFile>) -> Self {
        Self {
            target: Some(EventTarget::FileInput { files: Some(files) }),
        }
    }
}

/// `from_event` 可接受的输入
#[derive(Debug, Clone)]
pub enum EventInput {
    Drag(DragEvent),
    Change(ChangeEvent),
    Handles(Vec<FileSystemHandle>),
    /// 任何无法识别的对象
    Other,
}

impl From<DragEvent> for EventInput {
    fn from(event: DragEvent) -> Self {
        Self::Drag(event)
    }
}

impl From<ChangeEvent> for EventInput {
    fn from(event: ChangeEvent) -> Self {
        Self::Change(event)
    }
}

impl From<Vec<FileSystemHandle>> for EventInput {
    fn from(handles: Vec<FileSystemHandle>) -> Self {
        Self::Handles(handles)
    }
}

/// 选择结果：已解析的文件记录，或非 drop 事件下未解析的原始条目
#[derive(Clone)]
pub enum Selection {
    File(FileWithPath),
    Item(Arc<dyn TransferItem>),
}

impl Selection {
    pub fn into_file(self) -> Option<FileWithPath> {
        match self {
            Self::File(file) => Some(file),
            Self::Item(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<&Arc<dyn TransferItem>> {
        match self {
            Self::File(_) => None,
            Self::Item(item) => Some(item),
        }
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(file) => f.debug_tuple("File").field(file).finish(),
            Self::Item(item) => f
                .debug_struct("Item")
                .field("kind", &item.kind())
                .field("type", &item.mime_type())
                .finish(),
        }
    }
}
