//! Explicitly configured access to a data directory.

use hcvn_model::{District, Ward};

use crate::error::Result;
use crate::loader::{DivisionIter, load_records};
use crate::paths::DataConfig;
use crate::registry::ProvinceRegistry;

/// Entry points over one data directory.
///
/// [`DivisionSource::bundled`] reads the data shipped with the crate; any
/// other [`DataConfig`] reads the same layout from elsewhere. Districts and
/// wards are re-read from disk on every call.
#[derive(Debug, Clone, Default)]
pub struct DivisionSource {
    config: DataConfig,
}

impl DivisionSource {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    /// Source over the bundled data directory.
    pub fn bundled() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    /// Reads the province file into a fresh registry.
    pub fn load_provinces(&self) -> Result<ProvinceRegistry> {
        ProvinceRegistry::load(&self.config)
    }

    /// Every district in the country, paired with its province code.
    pub fn iter_districts(&self) -> Result<DivisionIter<District>> {
        DivisionIter::scan(&self.config.districts_path())
    }

    /// Every ward in the country, paired with its district code.
    pub fn iter_wards(&self) -> Result<DivisionIter<Ward>> {
        DivisionIter::scan(&self.config.wards_path())
    }

    /// Districts of one province. A province without a district file has none.
    pub fn districts_of(&self, province_code: &str) -> Result<Vec<District>> {
        if !is_file_name_code(province_code) {
            return Ok(Vec::new());
        }
        load_records(&self.config.district_file(province_code))
    }

    /// Wards of one district. A district without a ward file has none.
    pub fn wards_of(&self, district_code: &str) -> Result<Vec<Ward>> {
        if !is_file_name_code(district_code) {
            return Ok(Vec::new());
        }
        load_records(&self.config.ward_file(district_code))
    }
}

/// A code can only name a data file if it is a single path component.
fn is_file_name_code(code: &str) -> bool {
    !code.is_empty() && code != "." && code != ".." && !code.contains(['/', '\\'])
}
