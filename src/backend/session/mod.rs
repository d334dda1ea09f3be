//! Persisted login session: the record written at login, the store that
//! keeps it, and the guard that gates the dashboard on it.

pub mod error;
pub mod guard;
pub mod record;
pub mod store;

pub use error::SessionError;
pub use guard::{GuardEffects, GuardState, Notice, SessionGuard, Severity};
pub use record::{SessionRecord, UserProfile};
#[cfg(test)]
pub use store::MemorySessionStore;
pub use store::{FileSessionStore, SessionStore};
