//! File-backed record store.
//!
//! On-disk layout:
//!
//! ```text
//! <store_dir>/
//! ├─ LOCK           # Advisory lock for single-writer
//! └─ contacts.log   # Append-only record log
//! ```
//!
//! Each log frame is a little-endian `u32` payload length followed by the
//! CBOR encoding of one [`Record`]. Frames are only ever appended.

use crate::error::{StoreError, StoreResult};
use crate::store::RecordStore;
use fs2::FileExt;
use parking_lot::{Mutex, RwLock};
use rolodex_core::{Record, RecordId};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Name of the advisory lock file.
pub const LOCK_FILE: &str = "LOCK";
/// Name of the record log.
pub const LOG_FILE: &str = "contacts.log";

const FRAME_HEADER: usize = 4;

/// Append target of the record log.
trait LogFile: Write + Seek {
    fn sync(&mut self) -> io::Result<()>;
    fn truncate(&mut self, len: u64) -> io::Result<()>;
}

impl LogFile for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_data()
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

/// The writable end of the record log.
///
/// A failed append is cut back off the log. If that cut fails too, the log
/// ends in a torn frame and refuses further appends.
#[derive(Debug)]
struct Log<F> {
    file: F,
    damaged_at: Option<u64>,
}

impl<F: LogFile> Log<F> {
    fn new(file: F) -> Self {
        Self {
            file,
            damaged_at: None,
        }
    }

    fn append(&mut self, frame: &[u8]) -> StoreResult<()> {
        if let Some(offset) = self.damaged_at {
            return Err(StoreError::Damaged { offset });
        }

        let start = self.file.seek(SeekFrom::End(0))?;
        let written = self
            .file
            .write_all(frame)
            .and_then(|()| self.file.sync());
        let Err(e) = written else {
            return Ok(());
        };

        if let Err(cut) = self.file.truncate(start) {
            error!(
                offset = start,
                error = %e,
                truncate_error = %cut,
                "failed to remove partial frame; record log is read-only until reopened"
            );
            self.damaged_at = Some(start);
        }
        Err(e.into())
    }
}

/// A persistent record store backed by an append-only log.
///
/// The whole log is replayed into memory on open, so `list` never touches
/// the disk. `add` appends one frame and syncs it before returning.
///
/// # Thread Safety
///
/// A `FileStore` holds an exclusive lock on its directory. Only one instance
/// can be open per directory at a time; within a process it can be shared
/// across threads.
///
/// # Example
///
/// ```no_run
/// use rolodex_store::{FileStore, RecordStore};
/// use std::path::Path;
///
/// let store = FileStore::open(Path::new("contacts")).unwrap();
/// store.add("alice").unwrap();
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    log: Mutex<Log<File>>,
    records: RwLock<Vec<Record>>,
    _lock_file: File,
}

impl FileStore {
    /// Opens or creates a store in `dir`.
    ///
    /// A torn trailing frame left by an interrupted append is cut off.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Another process holds the lock (returns `Locked`)
    /// - A complete frame fails to decode (returns `Corrupted`)
    /// - I/O errors occur
    pub fn open(dir: &Path) -> StoreResult<Self> {
        fs::create_dir_all(dir)?;

        let lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(dir.join(LOCK_FILE))?;
        if lock_file.try_lock_exclusive().is_err() {
            return Err(StoreError::Locked);
        }

        let mut log = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(dir.join(LOG_FILE))?;

        let mut bytes = Vec::new();
        log.read_to_end(&mut bytes)?;

        let (records, valid_len) = replay(&bytes)?;
        if valid_len < bytes.len() as u64 {
            warn!(
                dropped = bytes.len() as u64 - valid_len,
                "truncating torn frame at end of record log"
            );
            log.set_len(valid_len)?;
            log.sync_all()?;
        }
        debug!(records = records.len(), path = %dir.display(), "opened record log");

        Ok(Self {
            path: dir.to_path_buf(),
            log: Mutex::new(Log::new(log)),
            records: RwLock::new(records),
            _lock_file: lock_file,
        })
    }

    /// Returns the store directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path to the record log.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.path.join(LOG_FILE)
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl RecordStore for FileStore {
    fn list(&self) -> StoreResult<Vec<Record>> {
        Ok(self.records.read().clone())
    }

    fn add(&self, name: &str) -> StoreResult<RecordId> {
        let record = Record::new(RecordId::new(), name);
        let frame = encode_frame(&record)?;

        let mut log = self.log.lock();
        log.append(&frame)?;

        let id = record.id;
        self.records.write().push(record);
        Ok(id)
    }
}

fn encode_frame(record: &Record) -> StoreResult<Vec<u8>> {
    let mut payload = Vec::new();
    ciborium::into_writer(record, &mut payload)
        .map_err(|e| StoreError::Encoding(e.to_string()))?;
    let len = u32::try_from(payload.len())
        .map_err(|_| StoreError::Encoding(format!("record too large: {} bytes", payload.len())))?;

    let mut frame = Vec::with_capacity(FRAME_HEADER + payload.len());
    frame.extend_from_slice(&len.to_le_bytes());
    frame.extend_from_slice(&payload);
    Ok(frame)
}

/// Decodes every complete frame and returns the records plus the length of
/// the valid prefix.
fn replay(bytes: &[u8]) -> StoreResult<(Vec<Record>, u64)> {
    let mut records = Vec::new();
    let mut offset = 0usize;

    while offset + FRAME_HEADER <= bytes.len() {
        let header = [
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ];
        let len = u32::from_le_bytes(header) as usize;
        let start = offset + FRAME_HEADER;
        let Some(end) = start.checked_add(len).filter(|&end| end <= bytes.len()) else {
            break;
        };

        let record: Record = ciborium::from_reader(&bytes[start..end])
            .map_err(|e| StoreError::corrupted(offset as u64, e.to_string()))?;
        records.push(record);
        offset = end;
    }

    Ok((records, offset as u64))
}
