//! Form event registry with disposable subscriptions

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use super::surface::FieldId;

/// Events a form host delivers to registered handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The value of a text field changed
    Input(FieldId),
    /// Focus left a field
    Blur(FieldId),
    /// The user asked to submit
    Submit,
}

type Handler = Arc<dyn Fn(FormEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Handlers registered for one form
#[derive(Clone, Default)]
pub struct FormEvents {
    registry: Arc<Mutex<Registry>>,
}

impl FormEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it stays registered until the subscription is dropped
    pub fn on<F>(&self, handler: F) -> Subscription
    where
        F: Fn(FormEvent) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Arc::new(handler)));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver an event to every registered handler, in registration order
    pub fn emit(&self, event: FormEvent) {
        // Handlers may touch the registry, so call them without the lock held.
        let handlers: Vec<Handler> = lock(&self.registry)
            .handlers
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in handlers {
            handler(event);
        }
    }
}

/// Keeps a handler registered; dropping it unregisters the handler
#[must_use = "dropping a Subscription unregisters its handler"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).handlers.retain(|(id, _)| *id != self.id);
        }
    }
}
