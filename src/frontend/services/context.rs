//! Session context shared through the component tree.

use crate::backend::session::{SessionError, SessionRecord, SessionStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// Persists the record produced by the login form.
    pub fn login(&self, name: &str, email: &str) -> Result<(), SessionError> {
        let record = SessionRecord::new(name.trim(), email.trim());
        self.store.save(&record)?;
        log::info!("Logged in as {}", name.trim());
        Ok(())
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        log::info!("Logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::session::MemorySessionStore;

    #[test]
    fn login_then_logout_round_trips_through_store() {
        let store = Arc::new(MemorySessionStore::empty());
        let session = SessionContext::new(store.clone());

        session.login(" Asha ", "asha@swapseva.in").unwrap();
        let record = session.store().read().unwrap().unwrap();
        assert_eq!(record.name.as_deref(), Some("Asha"));
        assert_eq!(record.email.as_deref(), Some("asha@swapseva.in"));

        session.logout().unwrap();
        assert_eq!(store.raw(), None);
    }
}
