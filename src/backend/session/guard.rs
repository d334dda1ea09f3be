//! Gate in front of the dashboard.
//!
//! ```text
//! Loading --(record found)----------> Authenticated
//!         \--(missing or malformed)--> Redirecting
//! ```
//!
//! A store that cannot be read leaves the guard in `Loading`.

use super::{SessionError, SessionStore, UserProfile};
use crate::backend::utils::route;

pub const AUTH_REQUIRED_TITLE: &str = "Authentication required";
pub const AUTH_REQUIRED_DESCRIPTION: &str = "Please log in to access the dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// A message for the user, independent of how it gets shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn auth_required() -> Self {
        Self {
            title: AUTH_REQUIRED_TITLE.to_string(),
            description: AUTH_REQUIRED_DESCRIPTION.to_string(),
            severity: Severity::Warning,
        }
    }
}

/// What the guard asks of its host when it turns a visitor away.
pub trait GuardEffects {
    fn notify(&mut self, notice: Notice);
    fn redirect(&mut self, route: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Loading,
    Authenticated(UserProfile),
    Redirecting,
}

#[derive(Debug, Clone, Default)]
pub struct SessionGuard {
    state: GuardState,
    checked: bool,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    #[cfg(test)]
    pub fn profile(&self) -> Option<&UserProfile> {
        match &self.state {
            GuardState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    /// Consults the store once. Later calls return the settled state without
    /// touching the store or the effects again.
    pub fn check<S, E>(&mut self, store: &S, effects: &mut E) -> &GuardState
    where
        S: SessionStore + ?Sized,
        E: GuardEffects + ?Sized,
    {
        if self.checked {
            return &self.state;
        }
        self.checked = true;

        match store.read().and_then(|record| record.ok_or(SessionError::Missing)) {
            Ok(record) => {
                let profile = UserProfile::from(record);
                log::info!("Session found for {}", profile.display_name());
                self.state = GuardState::Authenticated(profile);
            }
            Err(err) if err.redirects() => {
                log::warn!("Dashboard access denied ({err}), redirecting to {}", route::LOGIN);
                effects.notify(Notice::auth_required());
                effects.redirect(route::LOGIN);
                self.state = GuardState::Redirecting;
            }
            Err(err) => {
                log::error!("Cannot check session: {err}");
            }
        }

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::session::{MemorySessionStore, SessionRecord};
    use crate::backend::utils::route::Route;

    #[derive(Default)]
    struct Recorder {
        notices: Vec<Notice>,
        redirects: Vec<String>,
    }

    impl GuardEffects for Recorder {
        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }

        fn redirect(&mut self, route: &str) {
            self.redirects.push(route.to_string());
        }
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn read(&self) -> Result<Option<SessionRecord>, SessionError> {
            Err(SessionError::Unavailable("disk gone".to_string()))
        }

        fn save(&self, _record: &SessionRecord) -> Result<(), SessionError> {
            Err(SessionError::Unavailable("disk gone".to_string()))
        }

        fn clear(&self) -> Result<(), SessionError> {
            Err(SessionError::Unavailable("disk gone".to_string()))
        }
    }

    #[test]
    fn starts_loading() {
        let guard = SessionGuard::new();
        assert_eq!(guard.state(), &GuardState::Loading);
        assert!(guard.profile().is_none());
    }

    #[test]
    fn missing_session_redirects_once_with_one_warning() {
        let store = MemorySessionStore::empty();
        let mut effects = Recorder::default();
        let mut guard = SessionGuard::new();

        assert_eq!(guard.check(&store, &mut effects), &GuardState::Redirecting);
        // A second run on the same mount must not repeat anything.
        assert_eq!(guard.check(&store, &mut effects), &GuardState::Redirecting);

        assert_eq!(effects.redirects, vec!["/login".to_string()]);
        assert_eq!(effects.notices, vec![Notice::auth_required()]);
        assert_eq!(effects.notices[0].severity, Severity::Warning);
        assert!(guard.profile().is_none());
        assert_eq!(store.reads(), 1);
    }

    #[test]
    fn malformed_session_takes_the_missing_path() {
        let store = MemorySessionStore::with_raw("{\"name\": oops");
        let mut effects = Recorder::default();
        let mut guard = SessionGuard::new();

        assert_eq!(guard.check(&store, &mut effects), &GuardState::Redirecting);
        assert_eq!(effects.redirects.len(), 1);
        assert_eq!(effects.notices.len(), 1);
    }

    #[test]
    fn stored_session_authenticates_without_side_effects() {
        let store = MemorySessionStore::with_raw(r#"{"name":"Asha","email":"asha@swapseva.in"}"#);
        let mut effects = Recorder::default();
        let mut guard = SessionGuard::new();

        guard.check(&store, &mut effects);

        let profile = guard.profile().expect("authenticated");
        assert_eq!(profile.display_name(), "Asha");
        assert_eq!(profile.display_email(), "asha@swapseva.in");
        assert!(effects.notices.is_empty());
        assert!(effects.redirects.is_empty());
    }

    #[test]
    fn session_cleared_after_mount_goes_unnoticed() {
        let store = MemorySessionStore::with_raw(r#"{"name":"Asha"}"#);
        let mut effects = Recorder::default();
        let mut guard = SessionGuard::new();
        guard.check(&store, &mut effects);

        store.clear().unwrap();
        guard.check(&store, &mut effects);

        assert!(matches!(guard.state(), GuardState::Authenticated(_)));
        assert_eq!(store.reads(), 1);
    }

    #[test]
    fn unreadable_store_stays_loading() {
        let mut effects = Recorder::default();
        let mut guard = SessionGuard::new();

        assert_eq!(guard.check(&BrokenStore, &mut effects), &GuardState::Loading);
        // Not retried on the same mount.
        assert_eq!(guard.check(&MemorySessionStore::empty(), &mut effects), &GuardState::Loading);
        assert!(effects.notices.is_empty());
        assert!(effects.redirects.is_empty());
    }

    #[test]
    fn redirect_target_is_the_routed_login_page() {
        let mut effects = Recorder::default();
        let mut guard = SessionGuard::new();
        guard.check(&MemorySessionStore::empty(), &mut effects);

        assert_eq!(effects.redirects, vec![route::LOGIN.to_string()]);
        assert_eq!(effects.redirects[0].parse::<Route>().ok(), Some(Route::Login {}));
    }
}
