// src/services/session_service.rs
//
// Session facade over the external auth collaborator.
//
// The engine never authenticates anyone; it is told about sign-in and
// sign-out and republishes those facts as events so per-user state can
// react. "No user" is a first-class mode.

use std::sync::{Arc, RwLock};

use crate::domain::{UserId, UserSession};
use crate::events::{EventBus, SessionEnded, SessionStarted};

pub struct SessionStore {
    current: RwLock<Option<UserSession>>,
    event_bus: Arc<EventBus>,
}

impl SessionStore {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            current: RwLock::new(None),
            event_bus,
        }
    }

    /// Record a sign-in (or an existing session discovered on app entry).
    /// Replaces any previous session.
    pub fn sign_in(&self, user: UserSession) {
        let event = SessionStarted::new(user.id, user.username.clone());
        *self.current.write().unwrap() = Some(user);
        self.event_bus.emit(event);
    }

    /// Record a sign-out. A no-op when nobody is signed in.
    pub fn sign_out(&self) {
        let previous = self.current.write().unwrap().take();
        if let Some(user) = previous {
            self.event_bus.emit(SessionEnded::new(user.id));
        }
    }

    pub fn current_user(&self) -> Option<UserSession> {
        self.current.read().unwrap().clone()
    }

    pub fn current_user_id(&self) -> Option<UserId> {
        self.current.read().unwrap().as_ref().map(|u| u.id)
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.read().unwrap().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_replaces_previous_session() {
        let store = SessionStore::new(Arc::new(EventBus::new()));
        store.sign_in(UserSession::new(1, "ana"));
        store.sign_in(UserSession::new(2, "bruno"));
        assert_eq!(store.current_user_id(), Some(2));
    }

    #[test]
    fn test_sign_out_emits_session_ended_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let bus = Arc::new(EventBus::new());
        let ended = Arc::new(AtomicUsize::new(0));
        let ended_clone = Arc::clone(&ended);
        bus.subscribe::<SessionEnded, _>(move |_| {
            ended_clone.fetch_add(1, Ordering::SeqCst);
        });

        let store = SessionStore::new(bus);
        store.sign_in(UserSession::new(5, "carla"));
        store.sign_out();
        store.sign_out();

        assert_eq!(ended.load(Ordering::SeqCst), 1);
        assert!(!store.is_signed_in());
    }
}
