//! Fenced Resource Collection
//!
//! Holds one page-owned list of entities together with its load lifecycle.
//! Loads are fenced with monotonically increasing sequence numbers so a
//! slow response from an older request can never overwrite a newer one.
//! Mutations reconcile against the server's returned representation.

use crate::entity::Entity;
use crate::error::SyncError;

/// Where a collection is in its load lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No load has been issued yet
    #[default]
    NotLoaded,
    /// A load is in flight (existing items stay visible meanwhile)
    Loading,
    /// The latest issued load completed and its list was applied
    Loaded,
    /// The latest issued load failed; the list was emptied
    Failed(String),
}

/// Proof that a load was issued, carrying its fence sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What `complete_load` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response belonged to the newest issued load and was applied
    Applied,
    /// A newer load had been issued since; the response was discarded
    Stale,
}

/// A user-scoped list of entities plus its load/reconciliation state
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T: Entity> {
    items: Vec<T>,
    phase: LoadPhase,
    issued_seq: u64,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Collection<T> {
    /// An empty, not-yet-loaded collection
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::NotLoaded,
            issued_seq: 0,
        }
    }

    // ========================
    // Load lifecycle
    // ========================

    /// Start a load, invalidating every earlier in-flight load
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued_seq += 1;
        self.phase = LoadPhase::Loading;
        LoadTicket {
            seq: self.issued_seq,
        }
    }

    /// Land a load response. Stale tickets are discarded without touching
    /// state; the newest ticket replaces the list wholesale on success and
    /// empties it on failure.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<T>, SyncError>,
    ) -> LoadOutcome {
        if ticket.seq != self.issued_seq {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Loaded;
            }
            Err(err) => {
                self.items.clear();
                self.phase = LoadPhase::Failed(err.to_string());
            }
        }
        LoadOutcome::Applied
    }

    // ========================
    // Mutation reconciliation (server representation wins)
    // ========================

    /// Append an entity the server just created
    pub fn apply_created(&mut self, entity: T) {
        self.items.push(entity);
    }

    /// Replace the element with the same id by the server's representation
    pub fn apply_updated(&mut self, updated: T) -> bool {
        if let Some(slot) = self.items.iter_mut().find(|it| it.id() == updated.id()) {
            *slot = updated;
            true
        } else {
            false
        }
    }

    /// Drop the element with the given id
    pub fn apply_removed(&mut self, id: T::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|it| it.id() != id);
        self.items.len() != before
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|it| it.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// True once a load has landed, even if the list came back empty
    pub fn has_loaded(&self) -> bool {
        self.phase == LoadPhase::Loaded
    }

    /// The failure message of the latest load, if it failed
    pub fn load_error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        label: String,
    }

    impl Entity for Row {
        type Id = i64;

        fn id(&self) -> Self::Id {
            self.id
        }
    }

    fn row(id: i64, label: &str) -> Row {
        Row {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_successful_load_replaces_wholesale() {
        let mut col = Collection::new();
        let t1 = col.begin_load();
        col.complete_load(t1, Ok(vec![row(1, "a"), row(2, "b")]));
        assert_eq!(col.len(), 2);
        assert!(col.has_loaded());

        let t2 = col.begin_load();
        assert!(col.is_loading());
        assert_eq!(col.complete_load(t2, Ok(vec![row(3, "c")])), LoadOutcome::Applied);
        assert_eq!(col.items(), &[row(3, "c")]);
    }

    #[test]
    fn test_failed_load_empties_and_records_error() {
        let mut col = Collection::new();
        let t1 = col.begin_load();
        col.complete_load(t1, Ok(vec![row(1, "a")]));

        let t2 = col.begin_load();
        col.complete_load(t2, Err(SyncError::network(Some(500), "server exploded")));
        assert!(col.is_empty());
        assert_eq!(col.load_error(), Some("server exploded"));
        assert!(!col.has_loaded());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut col = Collection::new();
        let old = col.begin_load();
        let new = col.begin_load();

        // The newer request lands first.
        assert_eq!(col.complete_load(new, Ok(vec![row(2, "fresh")])), LoadOutcome::Applied);
        // The older one straggles in afterwards and must not overwrite it.
        assert_eq!(
            col.complete_load(old, Ok(vec![row(1, "stale")])),
            LoadOutcome::Stale
        );
        assert_eq!(col.items(), &[row(2, "fresh")]);
        assert!(col.has_loaded());
    }

    #[test]
    fn test_stale_failure_cannot_clobber_newer_success() {
        let mut col = Collection::new();
        let old = col.begin_load();
        let new = col.begin_load();
        col.complete_load(new, Ok(vec![row(7, "keep")]));
        col.complete_load(old, Err(SyncError::network(None, "timeout")));
        assert_eq!(col.len(), 1);
        assert!(col.load_error().is_none());
    }

    #[test]
    fn test_created_appends_at_the_end() {
        let mut col = Collection::new();
        let t = col.begin_load();
        col.complete_load(t, Ok(vec![row(1, "a")]));
        col.apply_created(row(9, "new"));
        assert_eq!(col.items().last(), Some(&row(9, "new")));
    }

    #[test]
    fn test_updated_replaces_matching_id_only() {
        let mut col = Collection::new();
        let t = col.begin_load();
        col.complete_load(t, Ok(vec![row(1, "a"), row(2, "b")]));

        assert!(col.apply_updated(row(2, "b-prime")));
        assert_eq!(col.get(2), Some(&row(2, "b-prime")));
        assert_eq!(col.get(1), Some(&row(1, "a")));
        assert_eq!(col.len(), 2);

        // Unknown ids do not grow the list.
        assert!(!col.apply_updated(row(99, "ghost")));
        assert_eq!(col.len(), 2);
    }

    #[test]
    fn test_removed_drops_matching_id() {
        let mut col = Collection::new();
        let t = col.begin_load();
        col.complete_load(t, Ok(vec![row(1, "a"), row(2, "b")]));

        assert!(col.apply_removed(1));
        assert_eq!(col.items(), &[row(2, "b")]);
        assert!(!col.apply_removed(1));
    }

    #[test]
    fn test_empty_result_is_a_normal_loaded_state() {
        let mut col: Collection<Row> = Collection::new();
        let t = col.begin_load();
        col.complete_load(t, Ok(vec![]));
        assert!(col.is_empty());
        assert!(col.has_loaded());
        assert!(col.load_error().is_none());
    }
}
