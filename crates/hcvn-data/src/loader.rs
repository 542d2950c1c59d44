//! JSON loading and lazy iteration over per-parent data files.
//!
//! Every data file is a JSON object whose keys are ignored and whose values
//! are record field maps. The file name (minus extension) is the parent code
//! of every record inside it.

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use hcvn_model::DivisionRecord;
use serde_json::{Map, Value};

use crate::discovery::{list_json_files, parent_code};
use crate::error::{DataError, Result};

/// Reads a file and parses it as a top-level JSON object.
///
/// Object key order is preserved as it appears in the file.
pub fn read_json_object(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DataError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DataError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| DataError::JsonParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Object(map) => {
            tracing::debug!(path = %path.display(), entries = map.len(), "Read data file");
            Ok(map)
        }
        _ => Err(DataError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Builds one record, attaching the file and key to any failure.
pub(crate) fn parse_record<R: DivisionRecord>(path: &Path, key: String, value: Value) -> Result<R> {
    R::from_value(value).map_err(|source| DataError::MalformedRecord {
        path: path.to_path_buf(),
        key,
        source,
    })
}

/// Loads every record from a single data file.
///
/// A missing file is zero records.
pub fn load_records<R: DivisionRecord>(path: &Path) -> Result<Vec<R>> {
    let map = match read_json_object(path) {
        Ok(map) => map,
        Err(DataError::FileNotFound { .. }) => {
            tracing::debug!(path = %path.display(), "No data file, treating as empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    map.into_iter()
        .map(|(key, value)| parse_record(path, key, value))
        .collect()
}

/// Records still to be yielded from the file being read.
struct OpenFile {
    path: PathBuf,
    parent_code: String,
    entries: serde_json::map::IntoIter,
}

/// Lazy sequence of `(parent_code, record)` pairs over a directory of data files.
///
/// Files are visited in sorted file-name order and each is read only once
/// the previous one is exhausted. The first error ends the sequence.
///
/// # Example
///
/// ```rust,ignore
/// use hcvn_data::DivisionIter;
/// use hcvn_model::District;
///
/// for pair in DivisionIter::<District>::scan(Path::new("data/quan_huyen"))? {
///     let (province_code, district) = pair?;
///     println!("{province_code}: {district}");
/// }
/// ```
pub struct DivisionIter<R> {
    files: std::vec::IntoIter<PathBuf>,
    current: Option<OpenFile>,
    failed: bool,
    _record: PhantomData<fn() -> R>,
}

impl<R: DivisionRecord> DivisionIter<R> {
    /// Lists the data files in `dir` without reading any of them yet.
    pub fn scan(dir: &Path) -> Result<Self> {
        Ok(Self::from_files(list_json_files(dir)?))
    }

    /// Iterates the given files in the given order.
    pub fn from_files(files: Vec<PathBuf>) -> Self {
        Self {
            files: files.into_iter(),
            current: None,
            failed: false,
            _record: PhantomData,
        }
    }

    fn open(path: PathBuf) -> Result<OpenFile> {
        let entries = read_json_object(&path)?.into_iter();
        Ok(OpenFile {
            parent_code: parent_code(&path),
            path,
            entries,
        })
    }
}

impl<R: DivisionRecord> Iterator for DivisionIter<R> {
    type Item = Result<(String, R)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(file) = &mut self.current {
                if let Some((key, value)) = file.entries.next() {
                    let item = parse_record(&file.path, key, value)
                        .map(|record| (file.parent_code.clone(), record));
                    if item.is_err() {
                        self.failed = true;
                        self.current = None;
                    }
                    return Some(item);
                }
                self.current = None;
            }

            let path = self.files.next()?;
            match Self::open(path) {
                Ok(file) => self.current = Some(file),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<R: DivisionRecord> FusedIterator for DivisionIter<R> {}

impl<R> std::fmt::Debug for DivisionIter<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DivisionIter")
            .field("remaining_files", &self.files.len())
            .field("current", &self.current.as_ref().map(|file| &file.path))
            .field("failed", &self.failed)
            .finish()
    }
}
