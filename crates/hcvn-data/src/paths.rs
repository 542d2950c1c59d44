//! Data directory layout and path resolution.
//!
//! ```text
//! data/
//! ├── tinh_tp.json          # all provinces
//! ├── quan_huyen/           # districts, one file per province
//! │   └── <province_code>.json
//! └── xa_phuong/            # wards, one file per district
//!     └── <district_code>.json
//! ```

use std::path::PathBuf;

/// File holding every province.
pub const PROVINCES_FILE: &str = "tinh_tp.json";

/// Subdirectory of per-province district files.
pub const DISTRICTS_DIR: &str = "quan_huyen";

/// Subdirectory of per-district ward files.
pub const WARDS_DIR: &str = "xa_phuong";

/// Extension of every per-parent data file.
pub const DATA_FILE_EXTENSION: &str = "json";

/// The data directory shipped with this crate.
pub fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Where a [`DivisionSource`](crate::DivisionSource) reads from.
///
/// The default points at the bundled data. Use [`DataConfig::with_data_dir`]
/// to read the same layout from another root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    /// Root of the data layout.
    pub data_dir: PathBuf,
    /// Province file name, relative to `data_dir`.
    pub provinces_file: String,
    /// District subdirectory, relative to `data_dir`.
    pub districts_dir: String,
    /// Ward subdirectory, relative to `data_dir`.
    pub wards_dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::with_data_dir(bundled_data_dir())
    }
}

impl DataConfig {
    /// Standard layout rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            provinces_file: PROVINCES_FILE.to_string(),
            districts_dir: DISTRICTS_DIR.to_string(),
            wards_dir: WARDS_DIR.to_string(),
        }
    }

    pub fn provinces_path(&self) -> PathBuf {
        self.data_dir.join(&self.provinces_file)
    }

    pub fn districts_path(&self) -> PathBuf {
        self.data_dir.join(&self.districts_dir)
    }

    pub fn wards_path(&self) -> PathBuf {
        self.data_dir.join(&self.wards_dir)
    }

    /// District file for one province, e.g. `quan_huyen/01.json`.
    pub fn district_file(&self, province_code: &str) -> PathBuf {
        self.districts_path()
            .join(format!("{province_code}.{DATA_FILE_EXTENSION}"))
    }

    /// Ward file for one district, e.g. `xa_phuong/001.json`.
    pub fn ward_file(&self, district_code: &str) -> PathBuf {
        self.wards_path()
            .join(format!("{district_code}.{DATA_FILE_EXTENSION}"))
    }
}
