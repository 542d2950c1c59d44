//! Record types for Vietnam's administrative hierarchy.
//!
//! The hierarchy has three levels, largest to smallest:
//!
//! ```text
//! Province (tỉnh / thành phố trực thuộc trung ương)
//! └── District (quận / huyện / thị xã / thành phố thuộc tỉnh)
//!     └── Ward (phường / xã / thị trấn)
//! ```
//!
//! Records hold only their own fields. A child never embeds its parent; the
//! loader in `hcvn-data` hands the parent code back alongside each record.
//!
//! # Example
//!
//! ```
//! use hcvn_model::{DivisionRecord, District};
//!
//! let value = serde_json::json!({ "code": "001", "name": "Ba Đình", "type": "quan" });
//! let district = District::from_value(value).unwrap();
//! assert_eq!(district.code(), "001");
//! ```

pub mod division;
pub mod enums;
pub mod error;
pub mod record;

pub use division::{District, Province, Ward};
pub use enums::{DivisionType, UnitKind};
pub use error::{RecordError, Result};
pub use record::DivisionRecord;
