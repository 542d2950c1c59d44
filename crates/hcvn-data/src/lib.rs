//! Vietnam's administrative hierarchy from bundled JSON files.
//!
//! This crate provides:
//!
//! - **Province registry**: every province, loaded once and indexed by code
//! - **District and ward iteration**: lazy walks over per-parent JSON files,
//!   yielding each record paired with its parent's code
//! - **Per-parent lookups**: the districts of one province, the wards of one
//!   district
//!
//! # Data Directory Structure
//!
//! ```text
//! data/
//! ├── tinh_tp.json             # all provinces
//! ├── quan_huyen/
//! │   ├── 01.json              # districts of province 01
//! │   └── ...
//! └── xa_phuong/
//!     ├── 001.json             # wards of district 001
//!     └── ...
//! ```
//!
//! The file name is the only link between a child and its parent.
//!
//! The shipped `data/` directory is a sample: every province, but district
//! files for only Hà Nội (01), Đà Nẵng (48) and Hồ Chí Minh (79), and ward
//! files for only a handful of their districts. Point a [`DataConfig`] at a
//! complete copy of the same layout for nationwide iteration.
//!
//! # Example
//!
//! ```rust,ignore
//! use hcvn_data::{iter_all_districts, iter_all_provinces};
//! use hcvn_model::DivisionRecord;
//!
//! for province in iter_all_provinces()? {
//!     println!("{}", province.name());
//! }
//!
//! for pair in iter_all_districts()? {
//!     let (province_code, district) = pair?;
//!     println!("{province_code}: {}", district.name());
//! }
//! ```

pub mod discovery;
pub mod error;
pub mod loader;
pub mod paths;
pub mod registry;
pub mod source;

// === Error Types ===
pub use error::{DataError, ErrorKind, Result};

// === Paths and Configuration ===
pub use paths::{DISTRICTS_DIR, DataConfig, PROVINCES_FILE, WARDS_DIR, bundled_data_dir};

// === Loading ===
pub use discovery::list_json_files;
pub use loader::{DivisionIter, load_records, read_json_object};
pub use registry::{ProvinceRegistry, default_registry};
pub use source::DivisionSource;

// === Record Types ===
pub use hcvn_model::{District, DivisionRecord, DivisionType, Province, UnitKind, Ward};

/// Every province in the bundled data, in file order.
///
/// The first call loads the province registry; later calls reuse it.
pub fn iter_all_provinces() -> Result<std::slice::Iter<'static, Province>> {
    Ok(default_registry()?.iter())
}

/// Every district in the bundled data, paired with its province code.
///
/// Re-reads the district files on every call.
pub fn iter_all_districts() -> Result<DivisionIter<District>> {
    DivisionSource::bundled().iter_districts()
}

/// Every ward in the bundled data, paired with its district code.
///
/// Re-reads the ward files on every call.
pub fn iter_all_wards() -> Result<DivisionIter<Ward>> {
    DivisionSource::bundled().iter_wards()
}
