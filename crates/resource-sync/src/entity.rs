//! Core Entity Trait
//!
//! The contract every synced resource type must satisfy: a stable,
//! server-assigned identifier that reconciliation can key on.

/// Core trait for all synced resource entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for sync operations
pub type SyncResult<T> = Result<T, crate::error::SyncError>;
