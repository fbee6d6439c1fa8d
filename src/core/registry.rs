//! # Subscription registry.
//!
//! [`Registry`] maps each declared [`EventType`] to its ordered list of [`Subscription`]s.
//! It holds no lock of its own; [`EventHub`](crate::EventHub) wraps it in a single mutex.
//!
//! ## Per-type states
//! ```text
//!              declare                 subscribe
//! Undeclared ──────────► Declared-Empty ──────────► Declared-With-Subscribers
//!                              ▲  ▲                        │   │
//!                              │  └──── unsubscribe(last) ─┘   │
//!                              └───────────── clear ───────────┘
//! ```
//!
//! ## Rules
//! - A list exists iff its type was declared; nothing ever un-declares a type.
//! - Lists keep insertion order; duplicates are allowed.
//! - Removal is stable and removes one entry at a time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::events::EventType;
use crate::handlers::{HandlerRef, ScopeRef, same_handler};

/// A registered handler plus the scope it is invoked against.
#[derive(Clone)]
pub struct Subscription {
    /// `None` is a placeholder that does nothing when fired.
    pub handler: Option<HandlerRef>,
    /// `None` means no explicit scope.
    pub scope: Option<ScopeRef>,
}

impl Subscription {
    fn matches(&self, handler: Option<&HandlerRef>) -> bool {
        match (&self.handler, handler) {
            (Some(mine), Some(theirs)) => same_handler(mine, theirs),
            (None, None) => true,
            _ => false,
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("handler", &self.handler.as_ref().map(|h| h.name()))
            .field("scoped", &self.scope.is_some())
            .finish()
    }
}

/// Declared event types and their subscribers.
#[derive(Debug, Default)]
pub struct Registry {
    lists: HashMap<EventType, Vec<Subscription>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `event` with an empty list. Returns `false` if it was already declared.
    pub fn declare(&mut self, event: EventType) -> bool {
        if self.lists.contains_key(&event) {
            return false;
        }
        self.lists.insert(event, Vec::new());
        true
    }

    /// True if `event` has been declared.
    pub fn contains(&self, event: &EventType) -> bool {
        self.lists.contains_key(event)
    }

    /// Appends a subscription.
    ///
    /// If `event` is undeclared nothing changes and the subscription is handed back, so the
    /// caller can drop it after releasing its lock.
    pub fn push(&mut self, event: &EventType, sub: Subscription) -> Result<(), Subscription> {
        match self.lists.get_mut(event) {
            Some(list) => {
                list.push(sub);
                Ok(())
            }
            None => Err(sub),
        }
    }

    /// Index of the first subscription whose handler matches, if any.
    pub fn position(&self, event: &EventType, handler: Option<&HandlerRef>) -> Option<usize> {
        self.lists
            .get(event)?
            .iter()
            .position(|sub| sub.matches(handler))
    }

    /// Removes the first matching subscription. Returns it, if one was removed.
    pub fn remove_first(
        &mut self,
        event: &EventType,
        handler: Option<&HandlerRef>,
    ) -> Option<Subscription> {
        let idx = self.position(event, handler)?;
        self.lists.get_mut(event).map(|list| list.remove(idx))
    }

    /// Empties the list of `event`, keeping it declared. Returns the removed entries.
    ///
    /// The entries are moved out rather than dropped here, so handler and scope destructors
    /// run wherever the caller drops them.
    pub fn clear(&mut self, event: &EventType) -> Option<Vec<Subscription>> {
        self.lists.get_mut(event).map(std::mem::take)
    }

    /// Copy of the current list of `event` for lock-free iteration.
    pub fn snapshot(&self, event: &EventType) -> Option<Arc<[Subscription]>> {
        self.lists.get(event).map(|list| Arc::from(list.as_slice()))
    }

    /// Number of subscriptions of `event`, `None` if undeclared.
    pub fn len_of(&self, event: &EventType) -> Option<usize> {
        self.lists.get(event).map(Vec::len)
    }

    /// Returns sorted list of declared types.
    pub fn list(&self) -> Vec<EventType> {
        let mut names: Vec<EventType> = self.lists.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}
