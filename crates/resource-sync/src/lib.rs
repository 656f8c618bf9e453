//! Resource Session Machinery
//!
//! Framework-independent state for resource pages: session resolution,
//! fenced collection loading, draft/dialog state, declarative validation,
//! and the single-slot notification model. The UI crate binds these into
//! reactive signals; nothing in here depends on a renderer, so all of it
//! is testable natively.

mod collection;
mod draft;
mod entity;
mod error;
mod notify;
mod schema;
mod session;

pub use collection::{Collection, LoadOutcome, LoadPhase, LoadTicket};
pub use draft::{DraftMode, DraftState, FormDraft};
pub use entity::{Entity, SyncResult};
pub use error::{SyncError, ValidationError};
pub use notify::{Notice, NotificationState, Severity, AUTO_DISMISS_MS};
pub use schema::{FieldRule, NumericRange, ResourceSchema};
pub use session::SessionState;
