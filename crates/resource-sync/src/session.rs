//! Session State
//!
//! The lifecycle of the authenticated user: Unresolved on boot, Resolving
//! while the stored token is being exchanged for an identity, and then
//! either Authenticated or Unauthenticated. Protected views render only in
//! the Authenticated state.

/// Where the session is in its resolution lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState<U> {
    /// Boot state; nothing has been checked yet
    Unresolved,
    /// A stored token is being exchanged for the user identity
    Resolving,
    Authenticated(U),
    /// No token, or the token was rejected
    Unauthenticated,
}

impl<U> Default for SessionState<U> {
    fn default() -> Self {
        SessionState::Unresolved
    }
}

impl<U> SessionState<U> {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// True while the boot-time resolution has not finished yet
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Unresolved | SessionState::Resolving)
    }

    pub fn user(&self) -> Option<&U> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn into_user(self) -> Option<U> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Who {
        id: i64,
        name: String,
    }

    #[test]
    fn test_boot_state_is_pending() {
        let state: SessionState<Who> = SessionState::default();
        assert!(state.is_pending());
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn test_resolving_is_still_pending() {
        let state: SessionState<Who> = SessionState::Resolving;
        assert!(state.is_pending());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_authenticated_exposes_the_user() {
        let state = SessionState::Authenticated(Who {
            id: 4,
            name: "ninernation".into(),
        });
        assert!(state.is_authenticated());
        assert!(!state.is_pending());
        assert_eq!(state.user().map(|u| u.id), Some(4));
        assert_eq!(state.into_user().map(|u| u.name), Some("ninernation".into()));
    }

    #[test]
    fn test_unauthenticated_is_resolved_but_locked_out() {
        let state: SessionState<Who> = SessionState::Unauthenticated;
        assert!(!state.is_pending());
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }
}
