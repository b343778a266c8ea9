//! Session management
//!
//! The session is the `(token, userId)` pair written by a successful login.
//! Persistence sits behind `SessionStore` so the gateway and the view
//! controllers can run against an in-memory store in tests.

use crate::error::{ClientError, ClientResult};
use crate::web::{Entries, LocalStorage};
use leptos::prelude::{RwSignal, Set, Signal, With, use_context};
use vibecommerce_shared::{STORAGE_TOKEN_KEY, STORAGE_USER_ID_KEY};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The stored login: a bearer token and, when the backend sent one, the user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            token: token.into(),
            user_id,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

/// Where the session lives between page loads.
pub trait SessionStore {
    /// A session exists iff a token is stored.
    fn load(&self) -> Option<Session>;
    /// Persists both entries; a missing user id removes any stale one.
    fn save(&self, session: &Session) -> ClientResult<()>;
    fn clear(&self);
}

// =========================================================
// Entry-backed implementation
// =========================================================

/// Reads the session from the `token` / `userId` entries.
fn read_session(entries: &impl Entries) -> Option<Session> {
    let token = entries.read(STORAGE_TOKEN_KEY)?;
    Some(Session::new(token, entries.read(STORAGE_USER_ID_KEY)))
}

/// Writes both entries. A failed write leaves nothing behind, so storage never
/// holds a token the UI does not know about.
fn write_session(entries: &impl Entries, session: &Session) -> ClientResult<()> {
    if !entries.write(STORAGE_TOKEN_KEY, &session.token) {
        clear_session(entries);
        return Err(ClientError::Storage(STORAGE_TOKEN_KEY));
    }
    match session.user_id() {
        Some(user_id) if !entries.write(STORAGE_USER_ID_KEY, user_id) => {
            clear_session(entries);
            Err(ClientError::Storage(STORAGE_USER_ID_KEY))
        }
        Some(_) => Ok(()),
        None => {
            entries.remove(STORAGE_USER_ID_KEY);
            Ok(())
        }
    }
}

fn clear_session(entries: &impl Entries) {
    entries.remove(STORAGE_TOKEN_KEY);
    entries.remove(STORAGE_USER_ID_KEY);
}

/// The session as kept in browser local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        read_session(&LocalStorage)
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        write_session(&LocalStorage, session)
    }

    fn clear(&self) {
        clear_session(&LocalStorage)
    }
}

// =========================================================
// In-memory implementation (tests)
// =========================================================

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Rc<RefCell<Option<Session>>>,
}

#[cfg(test)]
impl MemorySessionStore {
    pub fn signed_in(token: &str, user_id: Option<&str>) -> Self {
        let store = Self::default();
        *store.inner.borrow_mut() = Some(Session::new(token, user_id.map(str::to_string)));
        store
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.borrow().clone()
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        *self.inner.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.inner.borrow_mut() = None;
    }
}

// =========================================================
// Reactive mirror
// =========================================================

/// Reactive copy of the stored session, shared through context.
///
/// Storage stays the source of truth; whoever writes the store calls
/// `refresh` so the navigation bar re-renders.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
}

impl SessionContext {
    pub fn new(initial: Option<Session>) -> Self {
        Self {
            session: RwSignal::new(initial),
        }
    }

    /// True while a token is stored; drives the navbar links.
    pub fn is_signed_in(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Option::is_some))
    }

    /// Re-reads `store` after a login or logout.
    pub fn refresh(&self, store: &impl SessionStore) {
        self.session.set(store.load());
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
