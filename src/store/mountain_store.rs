//! The mutex-guarded mountain collection.

use std::sync::RwLock;

use crate::model::Mountain;
use crate::validation;

use super::errors::{StoreError, StoreResult};
use super::filter::MountainQuery;

const FIRST_ID: u64 = 1;

/// Collection state guarded as a unit: the id counter moves only inside the
/// same write-locked critical section that mutates the list.
struct StoreInner {
    mountains: Vec<Mountain>,
    next_id: u64,
}

/// The authoritative in-memory set of mountains.
///
/// Insert, update and delete serialize on the write lock; queries share the
/// read lock. Each public call is exactly one critical section, so a
/// completed insert is visible to every subsequent query and no query ever
/// observes a partially applied batch.
pub struct MountainStore {
    inner: RwLock<StoreInner>,
}

impl MountainStore {
    /// Create an empty store. Ids start at 1 and are never reused.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                mountains: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    /// Insert a batch of candidate mountains.
    ///
    /// The batch is rejected as a unit when it is empty
    /// (`StoreError::EmptyBatch`) or when any candidate already exists in the
    /// store by five-field equality (`StoreError::Conflict`); in both cases
    /// the store is left untouched.
    ///
    /// Otherwise candidates are processed in input order. Each one is checked
    /// again versus the now-growing collection, so a duplicate pair inside
    /// the batch inserts once and skips the second occurrence silently. Each
    /// inserted mountain takes the next id; skipped candidates consume none.
    pub fn insert(&self, batch: Vec<Mountain>) -> StoreResult<()> {
        if batch.is_empty() {
            return Err(StoreError::EmptyBatch);
        }

        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        if batch
            .iter()
            .any(|candidate| inner.mountains.contains(candidate))
        {
            return Err(StoreError::Conflict);
        }

        for mut candidate in batch {
            if !inner.mountains.contains(&candidate) {
                candidate.id = inner.next_id;
                inner.next_id += 1;
                inner.mountains.push(candidate);
            }
        }

        Ok(())
    }

    /// Return every mountain satisfying the query, in insertion order.
    ///
    /// A query carrying an invalid filter short-circuits to an empty list;
    /// deciding whether that empty list means "invalid" or "no match" is the
    /// transport layer's job.
    pub fn query(&self, query: &MountainQuery) -> StoreResult<Vec<Mountain>> {
        if !validation::query_is_valid(query) {
            return Ok(Vec::new());
        }

        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner
            .mountains
            .iter()
            .filter(|m| query.matches(m))
            .cloned()
            .collect())
    }

    /// Replace all descriptive fields of the mountain with the given id.
    ///
    /// The id itself is preserved. The replacement must pass validation
    /// (`StoreError::InvalidMountain`); no duplicate check is performed, so
    /// an update may legally make two stored records equal.
    pub fn update_by_id(&self, id: u64, replacement: Mountain) -> StoreResult<()> {
        if !validation::mountain_is_valid(&replacement) {
            return Err(StoreError::InvalidMountain);
        }

        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let existing = inner
            .mountains
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound(id))?;

        existing.name = replacement.name;
        existing.altitude = replacement.altitude;
        existing.range = replacement.range;
        existing.country = replacement.country;
        existing.is_northern = replacement.is_northern;

        Ok(())
    }

    /// Remove the mountain with the given id.
    pub fn delete_by_id(&self, id: u64) -> StoreResult<()> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let position = inner
            .mountains
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound(id))?;

        inner.mountains.remove(position);
        Ok(())
    }

    /// Number of stored mountains.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.mountains.len())
            .unwrap_or(0)
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MountainStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, altitude: i64, range: &str, country: &str, northern: bool) -> Mountain {
        Mountain::new(name, altitude, range, country, northern)
    }

    #[test]
    fn test_empty_batch_rejected() {
        let store = MountainStore::new();
        assert_eq!(store.insert(Vec::new()), Err(StoreError::EmptyBatch));
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_assigns_ids_from_one_in_order() {
        let store = MountainStore::new();
        store
            .insert(vec![
                sample("Annapurna", 8091, "Himalayas", "Nepal", true),
                sample("Makalu", 8485, "Himalayas", "Nepal", true),
            ])
            .unwrap();

        let all = store.query(&MountainQuery::default()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[0].name, "Annapurna");
        assert_eq!(all[1].id, 2);
        assert_eq!(all[1].name, "Makalu");
    }

    #[test]
    fn test_overlap_with_store_is_conflict_and_no_partial_insert() {
        let store = MountainStore::new();
        store
            .insert(vec![sample("Makalu", 8485, "Himalayas", "Nepal", true)])
            .unwrap();

        let result = store.insert(vec![
            sample("Annapurna", 8091, "Himalayas", "Nepal", true),
            sample("Makalu", 8485, "Himalayas", "Nepal", true),
        ]);
        assert_eq!(result, Err(StoreError::Conflict));
        // The new Annapurna must not have been inserted.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_internal_batch_duplicate_is_deduped_not_conflict() {
        let store = MountainStore::new();
        store
            .insert(vec![
                sample("Makalu", 8485, "Himalayas", "Nepal", true),
                sample("Makalu", 8485, "Himalayas", "Nepal", true),
            ])
            .unwrap();

        let all = store.query(&MountainQuery::default()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 1);
    }

    #[test]
    fn test_skipped_duplicates_consume_no_ids() {
        let store = MountainStore::new();
        store
            .insert(vec![
                sample("Makalu", 8485, "Himalayas", "Nepal", true),
                sample("Makalu", 8485, "Himalayas", "Nepal", true),
                sample("Annapurna", 8091, "Himalayas", "Nepal", true),
            ])
            .unwrap();

        let all = store.query(&MountainQuery::default()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].name, "Annapurna");
        assert_eq!(all[1].id, 2);
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_id() {
        let store = MountainStore::new();
        store
            .insert(vec![sample("Annapurna", 8091, "Himalayas", "Nepal", true)])
            .unwrap();

        store
            .update_by_id(1, sample("Annapurna", 8091, "Annapurna", "Nepal", true))
            .unwrap();

        let found = store.query(&MountainQuery::by_id(1)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
        assert_eq!(found[0].range, "Annapurna");
    }

    #[test]
    fn test_update_rejects_invalid_and_unknown() {
        let store = MountainStore::new();
        store
            .insert(vec![sample("Annapurna", 8091, "Himalayas", "Nepal", true)])
            .unwrap();

        assert_eq!(
            store.update_by_id(1, sample("Annapurna", 8091, "Himalayas", "Tibet", true)),
            Err(StoreError::InvalidMountain)
        );
        assert_eq!(
            store.update_by_id(99, sample("Annapurna", 8091, "Himalayas", "Nepal", true)),
            Err(StoreError::NotFound(99))
        );
    }

    #[test]
    fn test_update_may_create_duplicate() {
        let store = MountainStore::new();
        store
            .insert(vec![
                sample("Annapurna", 8091, "Himalayas", "Nepal", true),
                sample("Makalu", 8485, "Himalayas", "Nepal", true),
            ])
            .unwrap();

        // Turning Makalu into a copy of Annapurna is accepted.
        store
            .update_by_id(2, sample("Annapurna", 8091, "Himalayas", "Nepal", true))
            .unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = MountainStore::new();
        store
            .insert(vec![
                sample("Annapurna", 8091, "Himalayas", "Nepal", true),
                sample("Makalu", 8485, "Himalayas", "Nepal", true),
            ])
            .unwrap();

        store.delete_by_id(1).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.delete_by_id(1), Err(StoreError::NotFound(1)));
    }

    #[test]
    fn test_invalid_query_returns_empty_not_error() {
        let store = MountainStore::new();
        store
            .insert(vec![sample("Annapurna", 8091, "Himalayas", "Nepal", true)])
            .unwrap();

        let query = MountainQuery::by_country("lemon");
        assert_eq!(store.query(&query).unwrap(), Vec::new());
    }
}
