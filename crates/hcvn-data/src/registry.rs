//! Province registry.
//!
//! Provinces are the root of the hierarchy and are loaded once into an
//! in-memory index. Districts and wards are never cached; see
//! [`DivisionIter`](crate::DivisionIter).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

use hcvn_model::{DivisionRecord, Province};

use crate::error::Result;
use crate::loader::{parse_record, read_json_object};
use crate::paths::DataConfig;

/// In-memory index of every province, in file order.
#[derive(Debug, Clone)]
pub struct ProvinceRegistry {
    provinces: Vec<Province>,
    by_code: HashMap<String, usize>,
    source: PathBuf,
}

impl ProvinceRegistry {
    /// Loads the province file named by `config`.
    ///
    /// # Errors
    ///
    /// Returns a data-load error if the file is missing, unreadable or not a
    /// JSON object, and a malformed-record error if any entry cannot be built
    /// into a [`Province`].
    pub fn load(config: &DataConfig) -> Result<Self> {
        Self::from_file(&config.provinces_path())
    }

    /// Loads provinces from an explicit file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let map = read_json_object(path)?;

        let mut provinces = Vec::with_capacity(map.len());
        let mut by_code = HashMap::with_capacity(map.len());

        for (key, value) in map {
            let province: Province = parse_record(path, key, value)?;
            if by_code.contains_key(province.code()) {
                tracing::warn!(
                    code = province.code(),
                    path = %path.display(),
                    "Duplicate province code, keeping first occurrence"
                );
                continue;
            }
            by_code.insert(province.code().to_string(), provinces.len());
            provinces.push(province);
        }

        tracing::info!(
            count = provinces.len(),
            path = %path.display(),
            "Loaded province registry"
        );

        Ok(Self {
            provinces,
            by_code,
            source: path.to_path_buf(),
        })
    }

    /// All provinces in the order they appear in the backing file.
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Province> {
        self.provinces.iter()
    }

    /// Find a province by its code.
    pub fn get(&self, code: &str) -> Option<&Province> {
        self.by_code.get(code).map(|&idx| &self.provinces[idx])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    /// File the registry was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl<'a> IntoIterator for &'a ProvinceRegistry {
    type Item = &'a Province;
    type IntoIter = std::slice::Iter<'a, Province>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Registry over the bundled data, shared for the process lifetime.
static DEFAULT_REGISTRY: OnceLock<ProvinceRegistry> = OnceLock::new();

/// Serializes first-time loading so concurrent callers never read twice.
static DEFAULT_REGISTRY_INIT: Mutex<()> = Mutex::new(());

/// Returns the province registry over the bundled data.
///
/// Loaded on first access and reused afterwards. A failed load is not
/// cached, so a later call tries again.
pub fn default_registry() -> Result<&'static ProvinceRegistry> {
    if let Some(registry) = DEFAULT_REGISTRY.get() {
        return Ok(registry);
    }

    let _guard = DEFAULT_REGISTRY_INIT
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(registry) = DEFAULT_REGISTRY.get() {
        return Ok(registry);
    }

    let registry = ProvinceRegistry::load(&DataConfig::default())?;
    Ok(DEFAULT_REGISTRY.get_or_init(|| registry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DataError, ErrorKind};
    use tempfile::TempDir;

    fn registry_from(contents: &str) -> Result<ProvinceRegistry> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tinh_tp.json");
        std::fs::write(&path, contents).unwrap();
        ProvinceRegistry::from_file(&path)
    }

    #[test]
    fn test_keeps_file_order() {
        let registry = registry_from(
            r#"{
                "79": {"code": "79", "name": "Hồ Chí Minh"},
                "01": {"code": "01", "name": "Hà Nội"},
                "48": {"code": "48", "name": "Đà Nẵng"}
            }"#,
        )
        .unwrap();

        let codes: Vec<_> = registry.iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec!["79", "01", "48"]);
        assert_eq!(registry.get("01").map(|p| p.name()), Some("Hà Nội"));
        assert!(registry.get("02").is_none());
    }

    #[test]
    fn test_duplicate_code_keeps_first() {
        let registry = registry_from(
            r#"{
                "a": {"code": "01", "name": "Hà Nội"},
                "b": {"code": "01", "name": "Hà Tây"}
            }"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("01").map(|p| p.name()), Some("Hà Nội"));
    }

    #[test]
    fn test_missing_file_is_data_load_error() {
        let dir = TempDir::new().unwrap();
        let err = ProvinceRegistry::load(&DataConfig::with_data_dir(dir.path())).unwrap_err();
        assert!(matches!(err, DataError::FileNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::DataLoad);
    }

    #[test]
    fn test_invalid_json_is_data_load_error() {
        let err = registry_from("{\"01\": ").unwrap_err();
        assert!(matches!(err, DataError::JsonParse { .. }));
    }

    #[test]
    fn test_malformed_province() {
        let err = registry_from(r#"{"01": {"name": "Hà Nội"}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
    }

    #[test]
    fn test_default_registry_is_shared() {
        let first = default_registry().expect("load bundled provinces");
        let second = default_registry().expect("load bundled provinces");
        assert!(std::ptr::eq(first, second));
        assert!(!first.is_empty());
    }
}
