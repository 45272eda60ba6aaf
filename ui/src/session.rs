//! Guest session flag
//!
//! The flag lives in the tab's `sessionStorage`, so it survives reloads but
//! disappears with the tab. Views reach it through the [`GuestSession`]
//! context value instead of reading storage directly.

use gloo_storage::{SessionStorage, Storage};
use leptos::prelude::*;
use std::cell::RefCell;

/// Storage key holding the guest flag
pub const STORAGE_KEY_GUEST: &str = "nex-ai-guest";

const GUEST_VALUE: &str = "true";

/// Raw string storage for the flag
pub trait FlagStorage {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
    fn remove(&self);
}

/// `window.sessionStorage`, stored as a plain `"true"` string
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

impl FlagStorage for BrowserSessionStorage {
    fn read(&self) -> Option<String> {
        SessionStorage::raw()
            .get_item(STORAGE_KEY_GUEST)
            .ok()
            .flatten()
    }

    fn write(&self, value: &str) {
        if SessionStorage::raw()
            .set_item(STORAGE_KEY_GUEST, value)
            .is_err()
        {
            tracing::warn!("Failed to persist guest flag");
        }
    }

    fn remove(&self) {
        if SessionStorage::raw()
            .remove_item(STORAGE_KEY_GUEST)
            .is_err()
        {
            tracing::warn!("Failed to clear guest flag");
        }
    }
}

/// In-memory storage, used off the browser
#[derive(Debug, Default)]
pub struct MemoryStorage {
    value: RefCell<Option<String>>,
}

impl FlagStorage for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn write(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }

    fn remove(&self) {
        self.value.borrow_mut().take();
    }
}

/// Reads and writes the guest flag through a [`FlagStorage`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionFlagStore<S> {
    storage: S,
}

impl<S: FlagStorage> SessionFlagStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Unset or unreadable reads as `false`
    pub fn is_guest(&self) -> bool {
        self.storage.read().as_deref() == Some(GUEST_VALUE)
    }

    pub fn login(&self) {
        self.storage.write(GUEST_VALUE);
    }

    pub fn logout(&self) {
        self.storage.remove();
    }
}

/// Reactive guest flag provided to the router and pages
#[derive(Clone, Copy)]
pub struct GuestSession {
    flag: RwSignal<bool>,
    store: SessionFlagStore<BrowserSessionStorage>,
}

impl GuestSession {
    /// Initialize from the stored flag
    pub fn init() -> Self {
        let store = SessionFlagStore::new(BrowserSessionStorage);
        let is_guest = store.is_guest();
        tracing::debug!(is_guest, "Restored guest session");
        Self {
            flag: RwSignal::new(is_guest),
            store,
        }
    }

    pub fn is_guest(&self) -> bool {
        self.flag.get()
    }

    pub fn is_guest_untracked(&self) -> bool {
        self.flag.get_untracked()
    }

    pub fn login(&self) {
        self.store.login();
        self.flag.set(true);
    }

    pub fn logout(&self) {
        self.store.logout();
        self.flag.set(false);
    }
}
