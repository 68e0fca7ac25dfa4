//! # Input Validation
//!
//! Pure, side-effect-free predicates applied to filter and update inputs
//! before they reach the store.
//!
//! Country and range values are checked against closed whitelists. This is a
//! documented simplification: it bounds the catalogue's vocabulary rather
//! than attempting real geographic validation.
//!
//! An absent filter is always valid: not supplied means not checked and not
//! applied.

use crate::model::Mountain;
use crate::store::MountainQuery;

/// Accepted countries. Closed set, fixed at compile time.
pub const VALID_COUNTRIES: &[&str] = &["Argentina", "Nepal", "Peru", "Wales", "Cymru"];

/// Accepted mountain ranges. Closed set, fixed at compile time.
pub const VALID_RANGES: &[&str] = &[
    "Eryri",
    "Snowdonia",
    "Andes",
    "Himalayas",
    "BannauBrycheiniog",
    "Annapurna",
];

/// A country is valid iff it is whitelisted.
pub fn is_valid_country(country: &str) -> bool {
    VALID_COUNTRIES.contains(&country)
}

/// A range is valid iff it is whitelisted.
pub fn is_valid_range(range: &str) -> bool {
    VALID_RANGES.contains(&range)
}

/// A name is valid iff non-empty.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
}

/// A hemisphere filter is valid iff it is literally "true" or "false".
pub fn is_valid_hemisphere(hemisphere: &str) -> bool {
    hemisphere == "true" || hemisphere == "false"
}

/// An altitude is valid iff it parses as an integer greater than zero.
pub fn is_valid_altitude(altitude: &str) -> bool {
    matches!(altitude.parse::<i64>(), Ok(n) if n > 0)
}

/// Checks every supplied filter of a query; absent filters pass.
///
/// The `id` filter is not validated here: it is not part of the validation
/// contract, and an unparsable id simply matches nothing.
pub fn query_is_valid(query: &MountainQuery) -> bool {
    query.country.as_deref().is_none_or(is_valid_country)
        && query.range.as_deref().is_none_or(is_valid_range)
        && query.name.as_deref().is_none_or(is_valid_name)
        && query.hemisphere.as_deref().is_none_or(is_valid_hemisphere)
        && query.altitude.as_deref().is_none_or(is_valid_altitude)
}

/// Checks a full mountain record, as submitted to an update.
///
/// The hemisphere is a real boolean on a typed record and needs no check.
pub fn mountain_is_valid(mountain: &Mountain) -> bool {
    is_valid_country(&mountain.country)
        && is_valid_range(&mountain.range)
        && is_valid_name(&mountain.name)
        && mountain.altitude > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_whitelist() {
        assert!(is_valid_country("Nepal"));
        assert!(is_valid_country("Cymru"));
        assert!(!is_valid_country("lemon"));
        assert!(!is_valid_country("nepal"));
        assert!(!is_valid_country(""));
    }

    #[test]
    fn test_range_whitelist() {
        assert!(is_valid_range("Eryri"));
        assert!(is_valid_range("BannauBrycheiniog"));
        assert!(!is_valid_range("Alps"));
    }

    #[test]
    fn test_name_non_empty() {
        assert!(is_valid_name("Makalu"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_hemisphere_literals_only() {
        assert!(is_valid_hemisphere("true"));
        assert!(is_valid_hemisphere("false"));
        assert!(!is_valid_hemisphere("True"));
        assert!(!is_valid_hemisphere("north"));
        assert!(!is_valid_hemisphere(""));
    }

    #[test]
    fn test_altitude_positive_integer() {
        assert!(is_valid_altitude("1"));
        assert!(is_valid_altitude("8485"));
        assert!(!is_valid_altitude("0"));
        assert!(!is_valid_altitude("-5"));
        assert!(!is_valid_altitude("tall"));
        assert!(!is_valid_altitude(""));
    }

    #[test]
    fn test_empty_query_is_valid() {
        assert!(query_is_valid(&MountainQuery::default()));
    }

    #[test]
    fn test_query_one_bad_filter_fails_all() {
        let query = MountainQuery {
            country: Some("Nepal".to_string()),
            altitude: Some("not-a-number".to_string()),
            ..Default::default()
        };
        assert!(!query_is_valid(&query));
    }

    #[test]
    fn test_query_id_filter_never_checked() {
        let query = MountainQuery {
            id: Some("garbage".to_string()),
            ..Default::default()
        };
        assert!(query_is_valid(&query));
    }

    #[test]
    fn test_mountain_validity() {
        use crate::model::Mountain;

        let good = Mountain::new("Annapurna", 8091, "Annapurna", "Nepal", true);
        assert!(mountain_is_valid(&good));

        let bad_country = Mountain::new("Annapurna", 8091, "Annapurna", "Tibet", true);
        assert!(!mountain_is_valid(&bad_country));

        let bad_altitude = Mountain::new("Annapurna", 0, "Annapurna", "Nepal", true);
        assert!(!mountain_is_valid(&bad_altitude));

        let bad_name = Mountain::new("", 8091, "Annapurna", "Nepal", true);
        assert!(!mountain_is_valid(&bad_name));
    }
}
