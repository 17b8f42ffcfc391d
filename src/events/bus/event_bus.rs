// src/events/bus/event_bus.rs
//
// Core event bus implementation.
//
// Synchronous and deterministic: handlers execute immediately, in
// subscription order, on the emitting call stack. A panicking handler is
// isolated so sibling handlers still run.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::events::types::DomainEvent;

/// Type-erased event handler; downcast to the concrete event type inside.
type EventHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// Central coordination point for all domain events. Services emit and
/// subscribe without direct dependencies on each other.
pub struct EventBus {
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Subscribe to a specific event type. Handlers run in subscription
    /// order.
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: EventHandler = Box::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            } else {
                log::error!(
                    "event handler downcast failed for {}",
                    std::any::type_name::<E>()
                );
            }
        });

        let mut handlers = self.handlers.write().unwrap();
        handlers
            .entry(TypeId::of::<E>())
            .or_insert_with(Vec::new)
            .push(wrapped);
    }

    /// Emit an event to every subscribed handler, synchronously.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let handlers = self.handlers.read().unwrap();
        let event_handlers = handlers.get(&TypeId::of::<E>());

        log::debug!(
            "[event] {} (id: {}) | {} handlers",
            event.event_type(),
            event.event_id(),
            event_handlers.map(|h| h.len()).unwrap_or(0)
        );

        if let Some(event_handlers) = event_handlers {
            for (idx, handler) in event_handlers.iter().enumerate() {
                let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    handler(&event as &dyn Any);
                }));

                if result.is_err() {
                    log::error!("handler {} for {} panicked", idx, event.event_type());
                }
            }
        }
    }

    /// Number of subscribers for a specific event type.
    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        let handlers = self.handlers.read().unwrap();
        handlers
            .get(&TypeId::of::<E>())
            .map(|h| h.len())
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Shared-reference clone; all clones observe the same subscriptions.
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::{RatingSubmitted, RatingsCleared, SessionEnded};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_subscribe_and_emit() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);

        bus.subscribe::<RatingSubmitted, _>(move |event| {
            assert_eq!(event.movie_id, 7);
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(RatingSubmitted::new(1, 7, 4));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_multiple_handlers_execute_in_order() {
        let bus = EventBus::new();
        let sequence = Arc::new(RwLock::new(Vec::new()));

        for tag in 1..=3 {
            let seq = Arc::clone(&sequence);
            bus.subscribe::<SessionEnded, _>(move |_| {
                seq.write().unwrap().push(tag);
            });
        }

        bus.emit(SessionEnded::new(42));

        assert_eq!(*sequence.read().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_subscriber_count() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count::<RatingsCleared>(), 0);

        bus.subscribe::<RatingsCleared, _>(|_| {});
        bus.subscribe::<RatingsCleared, _>(|_| {});
        assert_eq!(bus.subscriber_count::<RatingsCleared>(), 2);

        // Different event type is unaffected
        assert_eq!(bus.subscriber_count::<SessionEnded>(), 0);
    }

    #[test]
    fn test_handler_panic_doesnt_break_bus() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe::<SessionEnded, _>(|_| {
            panic!("intentional panic");
        });

        let counter_clone = Arc::clone(&counter);
        bus.subscribe::<SessionEnded, _>(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.emit(SessionEnded::new(1));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
