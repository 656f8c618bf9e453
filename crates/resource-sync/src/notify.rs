//! Transient Notifications
//!
//! One visible notice at a time. Publishing supersedes whatever is showing,
//! and every publish bumps a generation counter so the auto-dismiss timer
//! of a superseded notice can never close its successor.

/// How long a notice stays up before auto-dismissing
pub const AUTO_DISMISS_MS: u32 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// CSS modifier class for the toast
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// A single transient message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

/// The single notification slot plus its supersede fence
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationState {
    current: Option<Notice>,
    generation: u64,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice, replacing the current one. Returns the generation the
    /// caller must present to dismiss exactly this notice.
    pub fn publish(&mut self, notice: Notice) -> u64 {
        self.generation += 1;
        self.current = Some(notice);
        self.generation
    }

    /// Dismiss the notice belonging to `generation`. A stale generation
    /// (the notice was already superseded) is a no-op.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_shows_one_notice() {
        let mut state = NotificationState::new();
        assert!(!state.is_visible());

        state.publish(Notice::success("Pet added successfully!"));
        assert!(state.is_visible());
        assert_eq!(state.current().unwrap().severity, Severity::Success);
    }

    #[test]
    fn test_new_notice_supersedes_the_current_one() {
        let mut state = NotificationState::new();
        state.publish(Notice::info("first"));
        state.publish(Notice::error("second"));

        assert_eq!(state.current().unwrap().message, "second");
        assert_eq!(state.current().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_stale_timer_cannot_dismiss_the_successor() {
        let mut state = NotificationState::new();
        let first = state.publish(Notice::info("first"));
        state.publish(Notice::info("second"));

        // The first notice's timer fires after it was superseded.
        assert!(!state.dismiss(first));
        assert!(state.is_visible());
        assert_eq!(state.current().unwrap().message, "second");
    }

    #[test]
    fn test_current_generation_dismisses() {
        let mut state = NotificationState::new();
        let gen = state.publish(Notice::success("done"));
        assert!(state.dismiss(gen));
        assert!(!state.is_visible());

        // Dismissing again changes nothing.
        assert!(!state.dismiss(gen));
    }

    #[test]
    fn test_severity_css_classes() {
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(Severity::Info.as_str(), "info");
    }
}
