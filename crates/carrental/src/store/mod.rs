//! Storage layer for carrental.
//!
//! Every entity lives in its own file of homogeneous fixed-size records. The
//! file has no header: its only self-description is that its length is a
//! multiple of the record size. A shorter tail is treated as a truncated
//! final record and ignored.
//!
//! Updates overwrite one record in place. Deletes rebuild the file into a
//! sibling temporary file and swap it over the original with a rename.

pub mod codec;
pub mod counter;

use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

pub use codec::{FieldReader, FieldWriter, FixedRecord};
pub use counter::SequenceCounter;

/// What is currently on disk behind a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FileStatus {
    /// The file has never been created.
    Missing,
    /// The file exists and is zero bytes long.
    Empty,
    /// The file holds data.
    Populated {
        /// Number of complete records.
        records: u64,
        /// Bytes after the last complete record.
        trailing_bytes: u64,
    },
}

impl FileStatus {
    /// Number of complete records (zero when missing or empty).
    #[must_use]
    pub fn records(&self) -> u64 {
        match self {
            Self::Missing | Self::Empty => 0,
            Self::Populated { records, .. } => *records,
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "not created yet"),
            Self::Empty => write!(f, "empty"),
            Self::Populated {
                records,
                trailing_bytes: 0,
            } => write!(f, "{records} record(s)"),
            Self::Populated {
                records,
                trailing_bytes,
            } => write!(
                f,
                "{records} record(s), {trailing_bytes} trailing byte(s) ignored"
            ),
        }
    }
}

/// A file of fixed-size records of one kind.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: FixedRecord> RecordStore<R> {
    /// Open a store backed by the file at `path`.
    ///
    /// Creates the parent directories if they don't exist. The file itself is
    /// created lazily by the first append.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opened {} store at {}", R::KIND, path.display());
        Ok(Self {
            path,
            _record: PhantomData,
        })
    }

    /// Get the path to the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record at the end of the file, creating it if absent.
    ///
    /// A partial record left at the end of the file is cut off first, so the
    /// new record starts on a record boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the full record
    /// cannot be written.
    pub fn append(&self, record: &R) -> Result<()> {
        let encoded = codec::encode_record(record);
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.path)
            .map_err(|e| Error::store("open", &self.path, e))?;

        let len = file
            .metadata()
            .map_err(|e| Error::store("stat", &self.path, e))?
            .len();
        let size = R::SIZE as u64;
        let aligned = len - len % size;
        if aligned != len {
            warn!(
                "Dropping {} trailing bytes from {} before appending a {} record",
                len - aligned,
                self.path.display(),
                R::KIND
            );
            file.set_len(aligned)
                .map_err(|e| Error::store("truncate", &self.path, e))?;
        }

        file.seek(SeekFrom::Start(aligned))
            .map_err(|e| Error::store("seek in", &self.path, e))?;
        file.write_all(&encoded)
            .map_err(|e| Error::store("append to", &self.path, e))?;

        debug!("Appended {} record to {}", R::KIND, self.path.display());
        Ok(())
    }

    /// Iterate over the records in file order.
    ///
    /// A missing file yields nothing. The iterator stops quietly at a short
    /// final record. Call again to restart from the beginning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be opened.
    pub fn scan(&self) -> Result<Records<R>> {
        let reader = match File::open(&self.path) {
            Ok(file) => Some(BufReader::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(Error::store("open", &self.path, e)),
        };

        Ok(Records {
            reader,
            path: self.path.clone(),
            buf: vec![0u8; R::SIZE],
            _record: PhantomData,
        })
    }

    /// Report whether the file is missing, empty, or holds data.
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read.
    pub fn status(&self) -> Result<FileStatus> {
        let len = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileStatus::Missing),
            Err(e) => return Err(Error::store("stat", &self.path, e)),
        };

        if len == 0 {
            return Ok(FileStatus::Empty);
        }

        let size = R::SIZE as u64;
        let status = FileStatus::Populated {
            records: len / size,
            trailing_bytes: len % size,
        };
        if len % size != 0 {
            warn!(
                "{} has {} trailing bytes after its last {} record",
                self.path.display(),
                len % size,
                R::KIND
            );
        }
        Ok(status)
    }

    /// True if the file is missing or exactly zero bytes long.
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(matches!(
            self.status()?,
            FileStatus::Missing | FileStatus::Empty
        ))
    }

    /// Count complete records.
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read.
    pub fn count(&self) -> Result<usize> {
        Ok(usize::try_from(self.status()?.records()).unwrap_or(usize::MAX))
    }

    /// Read every record into memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load_all(&self) -> Result<Vec<R>> {
        self.scan()?.collect()
    }

    /// Find the first record matching `predicate` and its ordinal position.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn find_first<P>(&self, mut predicate: P) -> Result<Option<(usize, R)>>
    where
        P: FnMut(&R) -> bool,
    {
        for (index, record) in self.scan()?.enumerate() {
            let record = record?;
            if predicate(&record) {
                return Ok(Some((index, record)));
            }
        }
        Ok(None)
    }

    /// Rewrite the first record matching `predicate` with `mutate` applied.
    ///
    /// Only that record's bytes are written; every other record keeps its
    /// bytes and offset. Returns the position and new value of the record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record matches, or a store error if
    /// the file cannot be read or written.
    pub fn update_in_place<P, M>(&self, mut predicate: P, mutate: M) -> Result<(usize, R)>
    where
        P: FnMut(&R) -> bool,
        M: FnOnce(&mut R),
    {
        let mut file = match OpenOptions::new().read(true).write(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound { entity: R::KIND })
            }
            Err(e) => return Err(Error::store("open", &self.path, e)),
        };

        let step = i64::try_from(R::SIZE)
            .map_err(|_| Error::internal(format!("{} record size overflows i64", R::KIND)))?;
        let mut buf = vec![0u8; R::SIZE];
        let mut index = 0;

        while read_record(&mut file, &mut buf).map_err(|e| Error::store("read", &self.path, e))? {
            let mut record: R = codec::decode_record(&buf);
            if predicate(&record) {
                mutate(&mut record);
                let encoded = codec::encode_record(&record);
                file.seek(SeekFrom::Current(-step))
                    .map_err(|e| Error::store("seek in", &self.path, e))?;
                file.write_all(&encoded)
                    .map_err(|e| Error::store("write", &self.path, e))?;

                debug!(
                    "Updated {} record {} in {}",
                    R::KIND,
                    index,
                    self.path.display()
                );
                return Ok((index, record));
            }
            index += 1;
        }

        Err(Error::NotFound { entity: R::KIND })
    }

    /// Remove every record matching `predicate`.
    ///
    /// Returns how many records were removed. The file is only rewritten when
    /// at least one record matched.
    ///
    /// # Errors
    ///
    /// Returns an error if any step of the rebuild fails. The original file
    /// is left untouched unless the final rename succeeded.
    pub fn delete_where<P>(&self, mut predicate: P) -> Result<usize>
    where
        P: FnMut(&R) -> bool,
    {
        self.rebuild(|_, record| predicate(record))
    }

    /// Remove the record at ordinal position `index`.
    ///
    /// Returns `false` if there is no record at that position.
    ///
    /// # Errors
    ///
    /// Returns an error if any step of the rebuild fails.
    pub fn delete_by_index(&self, index: usize) -> Result<bool> {
        Ok(self.rebuild(|position, _| position == index)? > 0)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn rebuild<F>(&self, remove: F) -> Result<usize>
    where
        F: FnMut(usize, &R) -> bool,
    {
        self.rebuild_with(remove, |from, to| fs::rename(from, to))
    }

    /// Rebuild without the removed records, then move the temp file over the
    /// record file with `replace`.
    fn rebuild_with<F, S>(&self, mut remove: F, replace: S) -> Result<usize>
    where
        F: FnMut(usize, &R) -> bool,
        S: FnOnce(&Path, &Path) -> io::Result<()>,
    {
        let source = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(Error::store("open", &self.path, e)),
        };

        let temp_path = self.temp_path();
        let removed = match self.copy_retained(source, &temp_path, &mut remove) {
            Ok(removed) => removed,
            Err(e) => {
                let _ = fs::remove_file(&temp_path);
                return Err(e);
            }
        };

        if removed == 0 {
            let _ = fs::remove_file(&temp_path);
            return Ok(0);
        }

        if let Err(e) = replace(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(Error::store("replace", &self.path, e));
        }

        info!(
            "Removed {} {} record(s) from {}",
            removed,
            R::KIND,
            self.path.display()
        );
        Ok(removed)
    }

    fn copy_retained<F>(&self, source: File, temp_path: &Path, remove: &mut F) -> Result<usize>
    where
        F: FnMut(usize, &R) -> bool,
    {
        let mut reader = BufReader::new(source);
        let temp = File::create(temp_path).map_err(|e| Error::store("create", temp_path, e))?;
        let mut writer = BufWriter::new(temp);

        let mut buf = vec![0u8; R::SIZE];
        let mut index = 0;
        let mut removed = 0;

        while read_record(&mut reader, &mut buf).map_err(|e| Error::store("read", &self.path, e))? {
            let record: R = codec::decode_record(&buf);
            if remove(index, &record) {
                removed += 1;
            } else {
                writer
                    .write_all(&buf)
                    .map_err(|e| Error::store("write", temp_path, e))?;
            }
            index += 1;
        }

        let temp = writer
            .into_inner()
            .map_err(|e| Error::store("write", temp_path, e.into_error()))?;
        temp.sync_all()
            .map_err(|e| Error::store("sync", temp_path, e))?;
        Ok(removed)
    }
}

/// Lazy iterator over the records of a [`RecordStore`].
#[derive(Debug)]
pub struct Records<R> {
    reader: Option<BufReader<File>>,
    path: PathBuf,
    buf: Vec<u8>,
    _record: PhantomData<fn() -> R>,
}

impl<R: FixedRecord> Iterator for Records<R> {
    type Item = Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        match read_record(reader, &mut self.buf) {
            Ok(true) => Some(Ok(codec::decode_record(&self.buf))),
            Ok(false) => {
                self.reader = None;
                None
            }
            Err(e) => {
                self.reader = None;
                Some(Err(Error::store("read", &self.path, e)))
            }
        }
    }
}

/// Fill `buf` with the next record. `Ok(false)` means end of data, including
/// a final record that was cut short.
fn read_record(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<bool> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        key: String,
        value: i32,
    }

    impl FixedRecord for Entry {
        const KIND: &'static str = "entry";
        const SIZE: usize = 12 + 4;

        fn encode(&self, out: &mut FieldWriter<'_>) {
            out.text(&self.key, 12);
            out.i32(self.value);
        }

        fn decode(input: &mut FieldReader<'_>) -> Self {
            Self {
                key: input.text(12),
                value: input.i32(),
            }
        }
    }

    fn entry(key: &str, value: i32) -> Entry {
        Entry {
            key: key.to_string(),
            value,
        }
    }

    fn create_test_store() -> (TempDir, RecordStore<Entry>) {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let store = RecordStore::open(dir.path().join("entries.bin")).unwrap();
        (dir, store)
    }

    fn fill(store: &RecordStore<Entry>, keys: &[&str]) {
        for (i, key) in keys.iter().enumerate() {
            store.append(&entry(key, i as i32)).unwrap();
        }
    }

    fn keys(store: &RecordStore<Entry>) -> Vec<String> {
        store
            .load_all()
            .unwrap()
            .into_iter()
            .map(|e| e.key)
            .collect()
    }

    #[test]
    fn test_scan_missing_file_is_empty() {
        let (_dir, store) = create_test_store();

        assert_eq!(store.status().unwrap(), FileStatus::Missing);
        assert!(store.is_empty().unwrap());
        assert_eq!(store.scan().unwrap().count(), 0);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_zero_length_file_is_empty() {
        let (_dir, store) = create_test_store();
        File::create(store.path()).unwrap();

        assert_eq!(store.status().unwrap(), FileStatus::Empty);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_append_and_scan_in_order() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b", "c", "d"]);

        assert_eq!(keys(&store), vec!["a", "b", "c", "d"]);
        assert_eq!(store.count().unwrap(), 4);
        assert!(!store.is_empty().unwrap());
        assert_eq!(
            fs::metadata(store.path()).unwrap().len(),
            4 * Entry::SIZE as u64
        );
    }

    #[test]
    fn test_scan_is_restartable() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b"]);

        let first: Vec<Entry> = store.scan().unwrap().map(|r| r.unwrap()).collect();
        let second: Vec<Entry> = store.scan().unwrap().map(|r| r.unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reopen_round_trip() {
        let (dir, store) = create_test_store();
        let written = vec![entry("alpha", 1), entry("beta", -2), entry("gamma", 3)];
        for e in &written {
            store.append(e).unwrap();
        }
        drop(store);

        let reopened: RecordStore<Entry> =
            RecordStore::open(dir.path().join("entries.bin")).unwrap();
        assert_eq!(reopened.load_all().unwrap(), written);
    }

    #[test]
    fn test_trailing_partial_record_is_ignored() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b"]);

        let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
        file.write_all(&[1, 2, 3]).unwrap();
        drop(file);

        assert_eq!(keys(&store), vec!["a", "b"]);
        assert_eq!(
            store.status().unwrap(),
            FileStatus::Populated {
                records: 2,
                trailing_bytes: 3
            }
        );
    }

    #[test]
    fn test_find_first_returns_position() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b", "b", "c"]);

        let (index, found) = store.find_first(|e| e.key == "b").unwrap().unwrap();
        assert_eq!(index, 1);
        assert_eq!(found.value, 1);

        assert!(store.find_first(|e| e.key == "z").unwrap().is_none());
    }

    #[test]
    fn test_update_in_place_touches_one_record() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b", "c"]);
        let before = fs::read(store.path()).unwrap();

        let (index, updated) = store
            .update_in_place(|e| e.key == "b", |e| e.value = 99)
            .unwrap();
        assert_eq!(index, 1);
        assert_eq!(updated.value, 99);

        let after = fs::read(store.path()).unwrap();
        assert_eq!(before.len(), after.len());
        let size = Entry::SIZE;
        assert_eq!(before[..size], after[..size]);
        assert_ne!(before[size..2 * size], after[size..2 * size]);
        assert_eq!(before[2 * size..], after[2 * size..]);

        assert_eq!(store.load_all().unwrap()[1], entry("b", 99));
    }

    #[test]
    fn test_update_in_place_first_match_wins() {
        let (_dir, store) = create_test_store();
        fill(&store, &["dup", "dup"]);

        store
            .update_in_place(|e| e.key == "dup", |e| e.value = 7)
            .unwrap();

        let values: Vec<i32> = store.load_all().unwrap().iter().map(|e| e.value).collect();
        assert_eq!(values, vec![7, 1]);
    }

    #[test]
    fn test_update_in_place_not_found() {
        let (_dir, store) = create_test_store();

        let err = store.update_in_place(|_| true, |_| {}).unwrap_err();
        assert!(err.is_not_found());

        fill(&store, &["a"]);
        let before = fs::read(store.path()).unwrap();
        let err = store
            .update_in_place(|e| e.key == "z", |e| e.value = 5)
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_delete_where_preserves_order() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b", "c", "b", "d"]);

        let removed = store.delete_where(|e| e.key == "b").unwrap();
        assert_eq!(removed, 2);
        assert_eq!(keys(&store), vec!["a", "c", "d"]);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_delete_where_no_match_leaves_file() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b"]);
        let before = fs::read(store.path()).unwrap();

        assert_eq!(store.delete_where(|e| e.key == "z").unwrap(), 0);
        assert_eq!(fs::read(store.path()).unwrap(), before);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_delete_on_missing_file() {
        let (_dir, store) = create_test_store();
        assert_eq!(store.delete_where(|_| true).unwrap(), 0);
        assert!(!store.delete_by_index(0).unwrap());
    }

    #[test]
    fn test_delete_by_index() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b", "c"]);

        assert!(store.delete_by_index(1).unwrap());
        assert_eq!(keys(&store), vec!["a", "c"]);

        assert!(!store.delete_by_index(5).unwrap());
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_delete_keeps_remaining_bytes_identical() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b", "c"]);
        let before = fs::read(store.path()).unwrap();

        store.delete_by_index(0).unwrap();

        let after = fs::read(store.path()).unwrap();
        assert_eq!(after, before[Entry::SIZE..]);
    }

    #[test]
    fn test_delete_failure_leaves_original_intact() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b"]);
        let before = fs::read(store.path()).unwrap();

        // A directory squatting on the temp path makes the rebuild fail.
        fs::create_dir(store.temp_path()).unwrap();

        let err = store.delete_where(|e| e.key == "a").unwrap_err();
        assert!(matches!(err, Error::Store { .. }));
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_failed_replace_leaves_original_intact() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b", "c"]);
        let before = fs::read(store.path()).unwrap();

        let mut temp_written = None;
        let err = store
            .rebuild_with(
                |_, e| e.key == "b",
                |from, _| {
                    temp_written = Some(fs::read(from).unwrap());
                    Err(io::Error::new(io::ErrorKind::PermissionDenied, "rename refused"))
                },
            )
            .unwrap_err();

        assert!(matches!(err, Error::Store { .. }));
        let temp_written = temp_written.unwrap();
        assert_eq!(temp_written.len(), 2 * Entry::SIZE);
        assert_eq!(fs::read(store.path()).unwrap(), before);
        assert!(!store.temp_path().exists());
        assert_eq!(keys(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_drops_partial_tail() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a"]);

        let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
        file.write_all(&[1, 2, 3]).unwrap();
        drop(file);

        store.append(&entry("b", 2)).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![entry("a", 0), entry("b", 2)]);
        assert_eq!(
            store.status().unwrap(),
            FileStatus::Populated {
                records: 2,
                trailing_bytes: 0
            }
        );
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested/deeper/entries.bin");

        let store: RecordStore<Entry> = RecordStore::open(&nested).unwrap();
        assert!(nested.parent().unwrap().exists());

        store.append(&entry("a", 1)).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_delete_drops_trailing_bytes() {
        let (_dir, store) = create_test_store();
        fill(&store, &["a", "b"]);
        let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
        file.write_all(&[9; 5]).unwrap();
        drop(file);

        store.delete_by_index(0).unwrap();
        assert_eq!(
            store.status().unwrap(),
            FileStatus::Populated {
                records: 1,
                trailing_bytes: 0
            }
        );
    }

    #[test]
    fn test_file_status_records() {
        assert_eq!(FileStatus::Missing.records(), 0);
        assert_eq!(FileStatus::Empty.records(), 0);
        assert_eq!(
            FileStatus::Populated {
                records: 3,
                trailing_bytes: 1
            }
            .records(),
            3
        );
    }

    #[test]
    fn test_file_status_display() {
        assert_eq!(FileStatus::Missing.to_string(), "not created yet");
        assert_eq!(
            FileStatus::Populated {
                records: 2,
                trailing_bytes: 0
            }
            .to_string(),
            "2 record(s)"
        );
        assert!(FileStatus::Populated {
            records: 2,
            trailing_bytes: 7
        }
        .to_string()
        .contains("7 trailing byte(s)"));
    }
}
