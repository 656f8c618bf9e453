//! Session Boundary
//!
//! The one place that touches persisted auth state (localStorage), plus the
//! session handle provided through context. Components never read or write
//! the token themselves; they go through `Session`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use resource_sync::SessionState;

use crate::api;
use crate::models::UserIdentity;
use crate::store::{store_navigate, store_notify_info, AppStateStoreFields, AppStore, Route};

const TOKEN_KEY: &str = "authToken";
const AUTHENTICATED_KEY: &str = "authenticated";

// ========================
// Storage boundary
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(AUTHENTICATED_KEY, "true");
    }
}

fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(AUTHENTICATED_KEY);
    }
}

// ========================
// Session handle
// ========================

/// Session handle provided via context
#[derive(Clone, Copy)]
pub struct Session {
    store: AppStore,
}

impl Session {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.session().read().is_authenticated()
    }

    pub fn is_pending(&self) -> bool {
        self.store.session().read().is_pending()
    }

    pub fn user(&self) -> Option<UserIdentity> {
        self.store.session().read().user().cloned()
    }

    /// The resolved user id; every user-scoped request derives from this
    pub fn user_id(&self) -> Option<i64> {
        self.store.session().read().user().map(|u| u.id)
    }

    /// Boot-time resolution. With no stored token the session resolves to
    /// Unauthenticated immediately, issuing no request at all; otherwise the
    /// token is exchanged for the identity and cleared if rejected.
    pub fn resolve(&self) {
        let store = self.store;
        let Some(token) = load_token() else {
            *store.session().write() = SessionState::Unauthenticated;
            return;
        };
        *store.session().write() = SessionState::Resolving;
        spawn_local(async move {
            match api::current_user(&token).await {
                Ok(user) => {
                    *store.session().write() = SessionState::Authenticated(user);
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[session] stored token rejected: {}", err).into(),
                    );
                    clear_token();
                    *store.session().write() = SessionState::Unauthenticated;
                }
            }
        });
    }

    /// Persist the token and enter the authenticated state after login
    pub fn establish(&self, token: &str, user: UserIdentity) {
        save_token(token);
        *self.store.session().write() = SessionState::Authenticated(user);
    }

    /// Drop the persisted token and the in-memory identity
    pub fn logout(&self) {
        clear_token();
        *self.store.session().write() = SessionState::Unauthenticated;
        store_navigate(&self.store, Route::Home);
        store_notify_info(&self.store, "You have been logged out.");
    }
}

/// Create the session handle and put it into context
pub fn provide_session(store: AppStore) -> Session {
    let session = Session::new(store);
    provide_context(session);
    session
}

/// Get the session handle from context
pub fn use_session() -> Session {
    expect_context::<Session>()
}
