//! Shared behaviour of the three record types.

use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde_json::Value;

use crate::enums::{DivisionType, UnitKind};
use crate::error::{RecordError, Result};

/// A record at one level of the administrative hierarchy.
///
/// Implemented by [`Province`](crate::Province), [`District`](crate::District)
/// and [`Ward`](crate::Ward). The loader is generic over this trait so the same
/// file walk serves districts and wards.
pub trait DivisionRecord: DeserializeOwned + Sized {
    /// Hierarchy level of this record type.
    const DIVISION_TYPE: DivisionType;

    /// Stable identifier, also the file name of this record's children.
    fn code(&self) -> &str;

    /// Short name without the unit prefix, e.g. `"Ba Đình"`.
    fn name(&self) -> &str;

    /// Legal unit kind, when the source carried one.
    fn kind(&self) -> Option<UnitKind>;

    /// Full name with the unit prefix, e.g. `"Quận Ba Đình"`.
    fn name_with_type(&self) -> Option<&str>;

    /// Prefers `name_with_type`, falling back to `name`.
    fn display_name(&self) -> &str {
        self.name_with_type().unwrap_or_else(|| self.name())
    }

    /// Builds a record from a parsed JSON field map.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Malformed`] when `code` or `name` is missing or
    /// not a string, an optional field has the wrong shape, or the map holds
    /// a field the record does not know. Anything other than a JSON object
    /// is rejected, including arrays that would otherwise fill fields by
    /// position.
    fn from_value(value: Value) -> Result<Self> {
        let malformed = |source: serde_json::Error| RecordError::Malformed {
            division: Self::DIVISION_TYPE,
            source,
        };

        if !value.is_object() {
            return Err(malformed(serde_json::Error::invalid_type(
                unexpected(&value),
                &"a record object",
            )));
        }

        serde_json::from_value(value).map_err(malformed)
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
