//! Query filters for mountain lookups.
//!
//! Filters are all optional and conjunctive. Values are kept in their raw
//! query-string form so validation can inspect exactly what the caller sent;
//! parsing happens at match time.

use crate::model::Mountain;

/// A set of optional, ANDed filters over the mountain collection.
///
/// An absent field is not applied. `altitude` means strictly greater than.
#[derive(Debug, Clone, Default)]
pub struct MountainQuery {
    /// Exact country match
    pub country: Option<String>,

    /// Exact range match
    pub range: Option<String>,

    /// Exact name match
    pub name: Option<String>,

    /// Exact id match, parsed as an integer
    pub id: Option<String>,

    /// Hemisphere match, "true" or "false"
    pub hemisphere: Option<String>,

    /// Strictly-greater-than altitude bound
    pub altitude: Option<String>,
}

impl MountainQuery {
    /// Filter by country only.
    pub fn by_country(country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            ..Default::default()
        }
    }

    /// Filter by id only.
    pub fn by_id(id: u64) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    /// Whether a mountain satisfies every supplied filter.
    ///
    /// An id filter that does not parse as an integer matches nothing, and
    /// likewise for an unparsable altitude bound.
    pub fn matches(&self, mountain: &Mountain) -> bool {
        self.country
            .as_deref()
            .is_none_or(|c| mountain.country == c)
            && self.range.as_deref().is_none_or(|r| mountain.range == r)
            && self.name.as_deref().is_none_or(|n| mountain.name == n)
            && self
                .id
                .as_deref()
                .is_none_or(|id| id.parse::<u64>().is_ok_and(|id| mountain.id == id))
            && self
                .hemisphere
                .as_deref()
                .is_none_or(|h| mountain.is_northern.to_string() == h)
            && self
                .altitude
                .as_deref()
                .is_none_or(|a| a.parse::<i64>().is_ok_and(|a| mountain.altitude > a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn makalu() -> Mountain {
        let mut m = Mountain::new("Makalu", 8485, "Himalayas", "Nepal", true);
        m.id = 5;
        m
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(MountainQuery::default().matches(&makalu()));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let query = MountainQuery {
            country: Some("Nepal".to_string()),
            altitude: Some("8400".to_string()),
            ..Default::default()
        };
        assert!(query.matches(&makalu()));

        let query = MountainQuery {
            country: Some("Nepal".to_string()),
            altitude: Some("8485".to_string()),
            ..Default::default()
        };
        // Altitude bound is strict: 8485 > 8485 is false.
        assert!(!query.matches(&makalu()));
    }

    #[test]
    fn test_exact_matches() {
        let m = makalu();
        assert!(MountainQuery::by_country("Nepal").matches(&m));
        assert!(!MountainQuery::by_country("Peru").matches(&m));
        assert!(MountainQuery::by_id(5).matches(&m));
        assert!(!MountainQuery::by_id(6).matches(&m));
    }

    #[test]
    fn test_hemisphere_matches_boolean_rendering() {
        let m = makalu();
        let query = MountainQuery {
            hemisphere: Some("true".to_string()),
            ..Default::default()
        };
        assert!(query.matches(&m));

        let query = MountainQuery {
            hemisphere: Some("false".to_string()),
            ..Default::default()
        };
        assert!(!query.matches(&m));
    }

    #[test]
    fn test_unparsable_id_matches_nothing() {
        let query = MountainQuery {
            id: Some("five".to_string()),
            ..Default::default()
        };
        assert!(!query.matches(&makalu()));
    }
}
