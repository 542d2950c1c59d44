//! Type-safe enumerations for administrative divisions.
//!
//! - [`DivisionType`]: the hierarchy level a record belongs to
//! - [`UnitKind`]: the legal unit kind carried by the `type` field of the
//!   bundled data (`tinh`, `quan`, `phuong`, ...)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level of a record in the province → district → ward hierarchy.
///
/// Used for display and categorization only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionType {
    /// Province or centrally-governed city.
    Province,
    /// District, urban district, town or provincial city.
    District,
    /// Ward, commune or township.
    Ward,
}

impl DivisionType {
    /// Returns the canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DivisionType::Province => "province",
            DivisionType::District => "district",
            DivisionType::Ward => "ward",
        }
    }

    /// Returns the Vietnamese label used in the bundled locale.
    pub const fn label(&self) -> &'static str {
        match self {
            DivisionType::Province => "Tỉnh/Thành phố",
            DivisionType::District => "Quận/Huyện",
            DivisionType::Ward => "Xã/Phường",
        }
    }

    /// Returns the next level down, if any.
    pub const fn child(&self) -> Option<DivisionType> {
        match self {
            DivisionType::Province => Some(DivisionType::District),
            DivisionType::District => Some(DivisionType::Ward),
            DivisionType::Ward => None,
        }
    }
}

impl fmt::Display for DivisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DivisionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "province" => Ok(DivisionType::Province),
            "district" => Ok(DivisionType::District),
            "ward" => Ok(DivisionType::Ward),
            _ => Err(format!("Unknown division type: {s}")),
        }
    }
}

/// Legal unit kind as written in the `type` field of the bundled data.
///
/// `ThanhPho` appears at both the province level (centrally-governed city)
/// and the district level (provincial city).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    /// Tỉnh
    Tinh,
    /// Thành phố
    ThanhPho,
    /// Quận
    Quan,
    /// Huyện
    Huyen,
    /// Thị xã
    ThiXa,
    /// Phường
    Phuong,
    /// Xã
    Xa,
    /// Thị trấn
    ThiTran,
}

impl UnitKind {
    /// Returns the slug as it appears in the data files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Tinh => "tinh",
            UnitKind::ThanhPho => "thanh-pho",
            UnitKind::Quan => "quan",
            UnitKind::Huyen => "huyen",
            UnitKind::ThiXa => "thi-xa",
            UnitKind::Phuong => "phuong",
            UnitKind::Xa => "xa",
            UnitKind::ThiTran => "thi-tran",
        }
    }

    /// Returns the Vietnamese prefix used in `name_with_type`.
    pub const fn label(&self) -> &'static str {
        match self {
            UnitKind::Tinh => "Tỉnh",
            UnitKind::ThanhPho => "Thành phố",
            UnitKind::Quan => "Quận",
            UnitKind::Huyen => "Huyện",
            UnitKind::ThiXa => "Thị xã",
            UnitKind::Phuong => "Phường",
            UnitKind::Xa => "Xã",
            UnitKind::ThiTran => "Thị trấn",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for UnitKind {
    type Err = String;

    /// Parses the data-file slug (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tinh" => Ok(UnitKind::Tinh),
            "thanh-pho" => Ok(UnitKind::ThanhPho),
            "quan" => Ok(UnitKind::Quan),
            "huyen" => Ok(UnitKind::Huyen),
            "thi-xa" => Ok(UnitKind::ThiXa),
            "phuong" => Ok(UnitKind::Phuong),
            "xa" => Ok(UnitKind::Xa),
            "thi-tran" => Ok(UnitKind::ThiTran),
            _ => Err(format!("Unknown unit kind: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_type_from_str() {
        assert_eq!(
            "Province".parse::<DivisionType>().unwrap(),
            DivisionType::Province
        );
        assert_eq!(" ward ".parse::<DivisionType>().unwrap(), DivisionType::Ward);
        assert!("county".parse::<DivisionType>().is_err());
    }

    #[test]
    fn test_division_type_child() {
        assert_eq!(DivisionType::Province.child(), Some(DivisionType::District));
        assert_eq!(DivisionType::District.child(), Some(DivisionType::Ward));
        assert_eq!(DivisionType::Ward.child(), None);
    }

    #[test]
    fn test_unit_kind_slug_round_trip() {
        for kind in [
            UnitKind::Tinh,
            UnitKind::ThanhPho,
            UnitKind::Quan,
            UnitKind::Huyen,
            UnitKind::ThiXa,
            UnitKind::Phuong,
            UnitKind::Xa,
            UnitKind::ThiTran,
        ] {
            assert_eq!(kind.as_str().parse::<UnitKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unit_kind_serde_uses_slug() {
        let kind: UnitKind = serde_json::from_str("\"thi-tran\"").unwrap();
        assert_eq!(kind, UnitKind::ThiTran);
        assert_eq!(
            serde_json::to_string(&UnitKind::ThanhPho).unwrap(),
            "\"thanh-pho\""
        );
    }

    #[test]
    fn test_unit_kind_display_uses_label() {
        assert_eq!(UnitKind::Huyen.to_string(), "Huyện");
    }
}
