//! Province, district and ward records.
//!
//! Field names follow the bundled JSON files. Unknown fields are rejected at
//! parse time; optional fields default to `None` and are skipped on output.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{DivisionType, UnitKind};
use crate::record::DivisionRecord;

/// Top-level division: a province or centrally-governed city.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Province {
    code: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<UnitKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name_with_type: Option<String>,
}

impl Province {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            slug: None,
            kind: None,
            name_with_type: None,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

impl DivisionRecord for Province {
    const DIVISION_TYPE: DivisionType = DivisionType::Province;

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> Option<UnitKind> {
        self.kind
    }

    fn name_with_type(&self) -> Option<&str> {
        self.name_with_type.as_deref()
    }
}

/// Second-level division, owned by the province whose code names its file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct District {
    code: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<UnitKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name_with_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path_with_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_code: Option<String>,
}

impl District {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            slug: None,
            kind: None,
            name_with_type: None,
            path: None,
            path_with_type: None,
            parent_code: None,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Comma-separated ancestry, e.g. `"Ba Đình, Hà Nội"`.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn path_with_type(&self) -> Option<&str> {
        self.path_with_type.as_deref()
    }

    /// Parent code as written inside the record, if the source carried one.
    ///
    /// The authoritative parent is the file the record was read from; this
    /// field is informational only.
    pub fn parent_code(&self) -> Option<&str> {
        self.parent_code.as_deref()
    }
}

impl DivisionRecord for District {
    const DIVISION_TYPE: DivisionType = DivisionType::District;

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> Option<UnitKind> {
        self.kind
    }

    fn name_with_type(&self) -> Option<&str> {
        self.name_with_type.as_deref()
    }
}

/// Third-level division, owned by the district whose code names its file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ward {
    code: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<UnitKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name_with_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path_with_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_code: Option<String>,
}

impl Ward {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            slug: None,
            kind: None,
            name_with_type: None,
            path: None,
            path_with_type: None,
            parent_code: None,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Comma-separated ancestry, e.g. `"Phúc Xá, Ba Đình, Hà Nội"`.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn path_with_type(&self) -> Option<&str> {
        self.path_with_type.as_deref()
    }

    pub fn parent_code(&self) -> Option<&str> {
        self.parent_code.as_deref()
    }
}

impl DivisionRecord for Ward {
    const DIVISION_TYPE: DivisionType = DivisionType::Ward;

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> Option<UnitKind> {
        self.kind
    }

    fn name_with_type(&self) -> Option<&str> {
        self.name_with_type.as_deref()
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.code)
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.code)
    }
}

impl fmt::Display for Ward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.code)
    }
}
