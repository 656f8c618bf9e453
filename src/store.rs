//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Page-owned
//! collections live in their pages; only cross-page state sits here: the
//! current route, the resolved session, and the notification slot.

use leptos::prelude::*;
use reactive_stores::Store;
use resource_sync::{Notice, NotificationState, SessionState};

use crate::models::UserIdentity;

/// Client-side routes; everything past Register sits behind the session guard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Register,
    ManagePets,
    Appointments,
    Billing,
    Medications,
    MedicalRecords,
    Vets,
    Profile,
    Faq,
}

impl Route {
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Home | Route::Login | Route::Register)
    }

    /// Nav label for the route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Register => "Register",
            Route::ManagePets => "Manage Pets",
            Route::Appointments => "Appointments",
            Route::Billing => "Billing",
            Route::Medications => "Medications",
            Route::MedicalRecords => "Medical Records",
            Route::Vets => "Vets",
            Route::Profile => "Profile",
            Route::Faq => "FAQ",
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current client-side route
    pub route: Route,
    /// Resolved session (identity once authenticated)
    pub session: SessionState<UserIdentity>,
    /// The single transient notification slot
    pub notices: NotificationState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Navigate to a route
pub fn store_navigate(store: &AppStore, route: Route) {
    *store.route().write() = route;
}

/// Publish a notice, superseding the current one. Returns the generation
/// the auto-dismiss timer must present.
pub fn store_publish_notice(store: &AppStore, notice: Notice) -> u64 {
    store.notices().write().publish(notice)
}

pub fn store_notify_success(store: &AppStore, message: impl Into<String>) -> u64 {
    store_publish_notice(store, Notice::success(message))
}

pub fn store_notify_error(store: &AppStore, message: impl Into<String>) -> u64 {
    store_publish_notice(store, Notice::error(message))
}

pub fn store_notify_info(store: &AppStore, message: impl Into<String>) -> u64 {
    store_publish_notice(store, Notice::info(message))
}

/// Dismiss the notice belonging to `generation`; stale timers are no-ops
pub fn store_dismiss_notice(store: &AppStore, generation: u64) {
    store.notices().write().dismiss(generation);
}
