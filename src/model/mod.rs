//! # Mountain Record
//!
//! The single resource type managed by the service.
//!
//! Equality is content-based: two mountains are "the same mountain" when all
//! five descriptive fields match. The server-assigned `id` is deliberately
//! excluded so that client-submitted records (always `id = 0`) compare equal
//! to their stored counterparts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A mountain record.
///
/// `id` is assigned by the store at insertion time and is `0` on records
/// built client-side for upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mountain {
    /// Server-assigned identifier; `0` until inserted
    #[serde(default)]
    pub id: u64,

    /// Mountain name
    pub name: String,

    /// Altitude in meters
    pub altitude: i64,

    /// Mountain range
    pub range: String,

    /// Country
    pub country: String,

    /// True if in the Northern hemisphere
    #[serde(rename = "isNorthern")]
    pub is_northern: bool,
}

impl Mountain {
    /// Create a mountain with an id of zero, ready for upload.
    pub fn new(
        name: impl Into<String>,
        altitude: i64,
        range: impl Into<String>,
        country: impl Into<String>,
        is_northern: bool,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            altitude,
            range: range.into(),
            country: country.into(),
            is_northern,
        }
    }
}

/// Five-field content equality; `id` never participates.
impl PartialEq for Mountain {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.altitude == other.altitude
            && self.range == other.range
            && self.country == other.country
            && self.is_northern == other.is_northern
    }
}

impl Eq for Mountain {}

impl fmt::Display for Mountain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is in the {} range in {}. It is in the {} hemisphere and is {}m high.",
            self.name,
            self.range,
            self.country,
            if self.is_northern { "Northern" } else { "Southern" },
            self.altitude
        )
    }
}
