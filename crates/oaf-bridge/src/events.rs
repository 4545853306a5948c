//! Host event emitter with `on`/`off` registration and scoped subscriptions.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use oaf_common::{HostEvent, HostEventKind};

/// Callback invoked for every matching host event.
pub type EventHandler = Arc<dyn Fn(&HostEvent) + Send + Sync>;

/// Identifies one handler registration, for `off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Dispatches host events to handlers registered per event kind.
#[derive(Default)]
pub struct EventEmitter {
    next_id: AtomicU64,
    handlers: Mutex<HashMap<HostEventKind, Vec<(HandlerId, EventHandler)>>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`.
    pub fn on<F>(&self, kind: HostEventKind, handler: F) -> HandlerId
    where
        F: Fn(&HostEvent) + Send + Sync + 'static,
    {
        self.register(kind, Arc::new(handler))
    }

    /// Remove a registration. Returns `false` if it was already gone.
    pub fn off(&self, kind: &HostEventKind, id: HandlerId) -> bool {
        let mut handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(list) = handlers.get_mut(kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|(existing, _)| *existing != id);
        let removed = list.len() != before;
        if list.is_empty() {
            handlers.remove(kind);
        }
        removed
    }

    /// Deliver an event to every handler registered for its kind.
    ///
    /// Handlers run outside the registry lock, so they may call `on`/`off`.
    /// Returns the number of handlers invoked.
    pub fn emit(&self, event: &HostEvent) -> usize {
        let targets: Vec<EventHandler> = {
            let handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
            handlers
                .get(&event.kind)
                .map(|list| list.iter().map(|(_, h)| Arc::clone(h)).collect())
                .unwrap_or_default()
        };
        for handler in &targets {
            handler(event);
        }
        targets.len()
    }

    pub fn handler_count(&self, kind: &HostEventKind) -> usize {
        let handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        handlers.get(kind).map_or(0, Vec::len)
    }

    /// Register one handler for several kinds at once. Every registration is
    /// removed when the returned [`Subscription`] is dropped.
    pub fn subscribe<I, F>(self: &Arc<Self>, kinds: I, handler: F) -> Subscription
    where
        I: IntoIterator<Item = HostEventKind>,
        F: Fn(&HostEvent) + Send + Sync + 'static,
    {
        let handler: EventHandler = Arc::new(handler);
        let registrations = kinds
            .into_iter()
            .map(|kind| {
                let id = self.register(kind.clone(), Arc::clone(&handler));
                (kind, id)
            })
            .collect();
        Subscription {
            emitter: Arc::downgrade(self),
            registrations,
        }
    }

    fn register(&self, kind: HostEventKind, handler: EventHandler) -> HandlerId {
        let id = HandlerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        handlers.entry(kind).or_default().push((id, handler));
        id
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        let counts: HashMap<&str, usize> = handlers
            .iter()
            .map(|(kind, list)| (kind.as_str(), list.len()))
            .collect();
        f.debug_struct("EventEmitter").field("handlers", &counts).finish()
    }
}

/// Scoped set of handler registrations; unregisters on drop.
#[must_use = "dropping a Subscription unregisters its handlers immediately"]
pub struct Subscription {
    emitter: Weak<EventEmitter>,
    registrations: Vec<(HostEventKind, HandlerId)>,
}

impl Subscription {
    pub fn kinds(&self) -> impl Iterator<Item = &HostEventKind> {
        self.registrations.iter().map(|(kind, _)| kind)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("registrations", &self.registrations)
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(emitter) = self.emitter.upgrade() else {
            return;
        };
        for (kind, id) in self.registrations.drain(..) {
            emitter.off(&kind, id);
        }
    }
}
