//! 测试用的宿主能力替身

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::entry::{DirectoryEntry, DirectoryReader, Entry, FileEntry};
use crate::error::HostError;
use crate::file::RawFile;
use crate::transfer::{EntryLookup, FileHandle, HandleLookup, ItemKind, TransferItem};

fn name_of(full_path: &str) -> String {
    full_path.rsplit('/').next().unwrap_or(full_path).to_string()
}

pub(crate) struct MockFileEntry {
    name: String,
    full_path: String,
    result: Result<RawFile, HostError>,
    /// 产出文件前让出执行权的次数
    delay: usize,
}

#[async_trait]
impl FileEntry for MockFileEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_path(&self) -> &str {
        &self.full_path
    }

    async fn file(&self) -> Result<RawFile, HostError> {
        for _ in 0..self.delay {
            tokio::task::yield_now().await;
        }
        self.result.clone()
    }
}

pub(crate) fn mock_file(full_path: &str, content: &[u8]) -> Entry {
    let name = name_of(full_path);
    Entry::File(Arc::new(MockFileEntry {
        result: Ok(RawFile::new(name.clone(), content)),
        name,
        full_path: full_path.to_string(),
        delay: 0,
    }))
}

pub(crate) fn slow_file(full_path: &str, delay: usize) -> Entry {
    let name = name_of(full_path);
    Entry::File(Arc::new(MockFileEntry {
        result: Ok(RawFile::new(name.clone(), Vec::new())),
        name,
        full_path: full_path.to_string(),
        delay,
    }))
}

pub(crate) fn failing_file(full_path: &str, error: HostError) -> Entry {
    Entry::File(Arc::new(MockFileEntry {
        name: name_of(full_path),
        full_path: full_path.to_string(),
        result: Err(error),
        delay: 0,
    }))
}

/// 按预设批次返回子条目的目录
///
/// 批次用完后返回空批次；记录读取次数并检测重叠读取
pub(crate) struct MockDirectory {
    name: String,
    full_path: String,
    batches: Vec<Result<Vec<Entry>, HostError>>,
    reads: Arc<AtomicUsize>,
    in_flight: Arc<AtomicBool>,
    overlapped: Arc<AtomicBool>,
}

impl MockDirectory {
    pub(crate) fn new(full_path: &str, batches: Vec<Result<Vec<Entry>, HostError>>) -> Arc<Self> {
        Arc::new(Self {
            name: name_of(full_path),
            full_path: full_path.to_string(),
            batches,
            reads: Arc::new(AtomicUsize::new(0)),
            in_flight: Arc::new(AtomicBool::new(false)),
            overlapped: Arc::new(AtomicBool::new(false)),
        })
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn saw_overlapping_reads(&self) -> bool {
        self.overlapped.load(Ordering::SeqCst)
    }
}

impl DirectoryEntry for MockDirectory {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_path(&self) -> &str {
        &self.full_path
    }

    fn create_reader(&self) -> Box<dyn DirectoryReader> {
        Box::new(MockReader {
            batches: self.batches.clone().into_iter(),
            reads: Arc::clone(&self.reads),
            in_flight: Arc::clone(&self.in_flight),
            overlapped: Arc::clone(&self.overlapped),
        })
    }
}

struct MockReader {
    batches: std::vec::IntoIter<Result<Vec<Entry>, HostError>>,
    reads: Arc<AtomicUsize>,
    in_flight: Arc<AtomicBool>,
    overlapped: Arc<AtomicBool>,
}

#[async_trait]
impl DirectoryReader for MockReader {
    async fn read_entries(&mut self) -> Result<Vec<Entry>, HostError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            self.overlapped.store(true, Ordering::SeqCst);
        }
        // 模拟浏览器回调：先让出执行权
        tokio::task::yield_now().await;
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.in_flight.store(false, Ordering::SeqCst);
        self.batches.next().unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// 单批次目录
pub(crate) fn mock_dir(full_path: &str, children: Vec<Entry>) -> Entry {
    Entry::Directory(MockDirectory::new(full_path, vec![Ok(children)]))
}

pub(crate) struct MockFileHandle {
    file: RawFile,
}

impl MockFileHandle {
    pub(crate) fn new(file: RawFile) -> Arc<Self> {
        Arc::new(Self { file })
    }
}

#[async_trait]
impl FileHandle for MockFileHandle {
    fn name(&self) -> &str {
        &self.file.name
    }

    async fn get_file(&self) -> Result<RawFile, HostError> {
        Ok(self.file.clone())
    }
}

/// 可配置的拖放条目
#[derive(Clone)]
pub(crate) struct MockItem {
    kind: ItemKind,
    mime_type: String,
    entry: EntryLookup,
    handle: Option<Result<HandleLookup, HostError>>,
    file: Option<RawFile>,
    handle_calls: Arc<Mutex<usize>>,
}

impl MockItem {
    fn base(kind: ItemKind, mime_type: &str, file: Option<RawFile>) -> Self {
        Self {
            kind,
            mime_type: mime_type.to_string(),
            entry: EntryLookup::Unsupported,
            handle: None,
            file,
            handle_calls: Arc::new(Mutex::new(0)),
        }
    }

    pub(crate) fn file(file: RawFile) -> Arc<Self> {
        let mime_type = file.mime_type.clone();
        Arc::new(Self::base(ItemKind::File, &mime_type, Some(file)))
    }

    pub(crate) fn without_file(mime_type: &str) -> Arc<Self> {
        Arc::new(Self::base(ItemKind::File, mime_type, None))
    }

    pub(crate) fn string() -> Arc<Self> {
        Arc::new(Self::base(ItemKind::String, "text/plain", None))
    }

    pub(crate) fn with_entry(self: Arc<Self>, entry: Entry) -> Arc<Self> {
        let mut item = Arc::unwrap_or_clone(self);
        item.entry = EntryLookup::Found(entry);
        Arc::new(item)
    }

    pub(crate) fn with_missing_entry(self: Arc<Self>) -> Arc<Self> {
        let mut item = Arc::unwrap_or_clone(self);
        item.entry = EntryLookup::Missing;
        Arc::new(item)
    }

    pub(crate) fn with_handle(self: Arc<Self>, lookup: HandleLookup) -> Arc<Self> {
        let mut item = Arc::unwrap_or_clone(self);
        item.handle = Some(Ok(lookup));
        Arc::new(item)
    }

    pub(crate) fn with_handle_error(self: Arc<Self>, error: HostError) -> Arc<Self> {
        let mut item = Arc::unwrap_or_clone(self);
        item.handle = Some(Err(error));
        Arc::new(item)
    }

    pub(crate) fn handle_calls(&self) -> usize {
        *self.handle_calls.lock().unwrap()
    }
}

#[async_trait]
impl TransferItem for MockItem {
    fn kind(&self) -> ItemKind {
        self.kind
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn webkit_get_as_entry(&self) -> EntryLookup {
        self.entry.clone()
    }

    fn supports_file_system_handle(&self) -> bool {
        self.handle.is_some()
    }

    async fn get_as_file_system_handle(&self) -> Result<HandleLookup, HostError> {
        *self.handle_calls.lock().unwrap() += 1;
        self.handle.clone().unwrap_or(Ok(HandleLookup::Undefined))
    }

    fn get_as_file(&self) -> Option<RawFile> {
        self.file.clone()
    }
}
