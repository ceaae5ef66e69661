//! Tab-lifetime session context holding the current user identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the application root and injected through Leptos context. Login
//! writes the identity returned by the API; logout clears it. Nothing here is
//! persisted, so a full reload starts anonymous even while the token cookie
//! survives.
//!
//! DESIGN
//! ======
//! The identity lives in one `RwSignal`. Views read it reactively through
//! `user_signal()`; non-view code reads it untracked and may subscribe to
//! changes with plain callbacks.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::prelude::*;

use crate::net::types::User;

type Listener = Arc<dyn Fn(Option<&User>) + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

/// Shared, cloneable handle to the session state.
#[derive(Clone)]
pub struct SessionStore {
    user: RwSignal<Option<User>>,
    listeners: Arc<Mutex<Listeners>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &self.user())
            .field("listeners", &self.listeners().entries.len())
            .finish()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            user: RwSignal::new(None),
            listeners: Arc::default(),
        }
    }
}

impl SessionStore {
    /// Empty (anonymous) session.
    pub fn new() -> Self {
        Self::default()
    }

    fn listeners(&self) -> MutexGuard<'_, Listeners> {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Current identity, read without tracking.
    pub fn user(&self) -> Option<User> {
        self.user.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with_untracked(Option::is_some)
    }

    /// Reactive view of the identity for components.
    pub fn user_signal(&self) -> ReadSignal<Option<User>> {
        self.user.read_only()
    }

    /// Replace the identity and notify every subscriber. `None` clears it.
    pub fn set_user(&self, user: Option<User>) {
        self.user.set(user.clone());
        let listeners: Vec<Listener> = self
            .listeners()
            .entries
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        // Lock released so listeners may read or write the store.
        for listener in listeners {
            listener(user.as_ref());
        }
    }

    pub fn clear(&self) {
        self.set_user(None);
    }

    /// Register `listener` for every future change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(Option<&User>) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners();
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners();
        let before = listeners.entries.len();
        listeners.entries.retain(|(existing, _)| *existing != id);
        listeners.entries.len() != before
    }
}
