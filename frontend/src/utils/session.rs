use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use gloo::storage::{LocalStorage, Storage};
use leptos::*;
use wasm_bindgen::JsValue;

use super::error::{Error, ErrorKind, Result};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Where the login flow leaves its credential
///
/// Only presence of the token matters here, it is never validated.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_session(&self, token: &str, user: &str) -> Result<()>;
    fn clear_session(&self) -> Result<()>;
}

fn storage_error(key: &str, err: JsValue) -> Error {
    Error::new(ErrorKind::Browser, format!("local storage `{key}`: {err:?}"))
}

/// Browser `localStorage`
///
/// Goes through [`LocalStorage::raw`] so values stay plain strings, the login
/// flow does not JSON encode them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn token(&self) -> Option<String> {
        match LocalStorage::raw().get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(err = ?err, "cannot read session token");
                None
            }
        }
    }

    fn set_session(&self, token: &str, user: &str) -> Result<()> {
        let storage = LocalStorage::raw();
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|err| storage_error(TOKEN_KEY, err))?;
        storage
            .set_item(USER_KEY, user)
            .map_err(|err| storage_error(USER_KEY, err))
    }

    fn clear_session(&self) -> Result<()> {
        let storage = LocalStorage::raw();
        let token = storage
            .remove_item(TOKEN_KEY)
            .map_err(|err| storage_error(TOKEN_KEY, err));
        let user = storage
            .remove_item(USER_KEY)
            .map_err(|err| storage_error(USER_KEY, err));
        token.and(user)
    }
}

/// In-process store, for places without browser storage
#[derive(Debug, Default)]
pub struct MemorySessionStore(RefCell<BTreeMap<&'static str, String>>);

impl MemorySessionStore {
    pub fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    fn set_session(&self, token: &str, user: &str) -> Result<()> {
        let mut map = self.0.borrow_mut();
        map.insert(TOKEN_KEY, token.to_owned());
        map.insert(USER_KEY, user.to_owned());
        Ok(())
    }

    fn clear_session(&self) -> Result<()> {
        let mut map = self.0.borrow_mut();
        map.remove(TOKEN_KEY);
        map.remove(USER_KEY);
        Ok(())
    }
}

/// Derive login state from a [`SessionStore`]
#[derive(Clone)]
pub struct SessionDetector {
    store: Rc<dyn SessionStore>,
    logged_in: bool,
}

impl SessionDetector {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            store,
            logged_in: false,
        }
    }

    /// read token once, an empty token counts as absent
    pub fn mount(&mut self) {
        self.logged_in = self.store.token().is_some_and(|t| !t.is_empty());
    }

    /// Always ends logged out, a store failure is returned so it can be
    /// reported
    pub fn logout(&mut self) -> Result<()> {
        let cleared = self.store.clear_session();
        self.logged_in = false;
        cleared
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}

#[derive(Clone, Copy)]
pub struct Session {
    detector: RwSignal<SessionDetector>,
}

impl Session {
    /// The store is read once, from an effect, so nothing touches browser
    /// storage during server rendering.
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        let detector = create_rw_signal(SessionDetector::new(store));
        create_effect(move |_| detector.update(SessionDetector::mount));
        Self { detector }
    }

    pub fn is_logged_in(&self) -> Signal<bool> {
        let detector = self.detector;
        Signal::derive(move || detector.with(SessionDetector::is_logged_in))
    }

    pub fn logout(&self) {
        self.detector.update(|detector| {
            if let Err(err) = detector.logout() {
                tracing::warn!(%err, "session is not fully cleared");
            }
        });
    }
}

/// Put session state in context
pub fn provide_session(store: Rc<dyn SessionStore>) {
    provide_context(Session::new(store));
}

pub fn use_session() -> Session {
    expect_context()
}
