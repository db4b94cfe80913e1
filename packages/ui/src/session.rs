//! Session state for the application.
//!
//! The session is an explicit three-state machine rather than an implicit
//! global client: a view either doesn't know yet ([`SessionState::Unknown`]),
//! knows nobody is signed in, or holds the signed-in user. The
//! [`SessionHub`] makes the state observable: a subscriber's callback fires
//! once immediately with the current state, then again on every
//! [`SessionHub::publish`]. Dropping the returned [`Subscription`] releases
//! the callback; it is never invoked afterwards.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state as observed by views.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Initial state, before the first server round-trip resolves.
    #[default]
    Unknown,
    Unauthenticated,
    Authenticated(UserInfo),
}

impl SessionState {
    /// Fold an observed identity (possibly none) into a state.
    pub fn from_observed(user: Option<UserInfo>) -> Self {
        match user {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

type Callback = Box<dyn FnMut(&SessionState)>;

#[derive(Default)]
struct HubInner {
    state: SessionState,
    next_id: u64,
    subscribers: Vec<(u64, Callback)>,
    /// Ids unsubscribed while a dispatch had the subscriber list checked out.
    dead: Vec<u64>,
}

/// Observable holder of the current session state.
///
/// Single-threaded by design: it lives on the UI scheduler and is shared via
/// `Rc`, so callbacks may freely capture signals.
#[derive(Clone, Default)]
pub struct SessionHub {
    inner: Rc<RefCell<HubInner>>,
}

impl SessionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state, cloned.
    pub fn current(&self) -> SessionState {
        self.inner.borrow().state.clone()
    }

    /// Replace the state and notify every live subscriber.
    pub fn publish(&self, state: SessionState) {
        let mut checked_out = {
            let mut inner = self.inner.borrow_mut();
            inner.state = state.clone();
            std::mem::take(&mut inner.subscribers)
        };

        // The borrow is released while callbacks run, so a callback may
        // subscribe or drop a Subscription without deadlocking. Drops that
        // happen mid-dispatch land in `dead` and are honoured both here and
        // when the list is merged back.
        for (id, callback) in checked_out.iter_mut() {
            let is_dead = self.inner.borrow().dead.contains(id);
            if !is_dead {
                callback(&state);
            }
        }

        let mut inner = self.inner.borrow_mut();
        let dead = std::mem::take(&mut inner.dead);
        checked_out.retain(|(id, _)| !dead.contains(id));
        let added_during_dispatch = std::mem::take(&mut inner.subscribers);
        inner.subscribers = checked_out;
        inner.subscribers.extend(added_during_dispatch);
    }

    /// Register a callback. Fires once immediately with the current state,
    /// then on every future publish until the returned guard is dropped.
    pub fn subscribe(&self, mut callback: impl FnMut(&SessionState) + 'static) -> Subscription {
        let current = self.current();
        callback(&current);

        let id = {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let id = inner.next_id;
            inner.subscribers.push((id, Box::new(callback)));
            id
        };

        Subscription {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// Guard for one hub subscription. Unsubscribes exactly once, on drop.
pub struct Subscription {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.hub.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(id, _)| *id != self.id);
        if inner.subscribers.len() == before {
            // The list is checked out by a running dispatch; flag the id so
            // the dispatcher skips and discards it.
            inner.dead.push(self.id);
        }
    }
}

/// Provider component that owns the hub and seeds it from the server.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let hub = use_hook(SessionHub::new);
    let mut state = use_signal(|| hub.current());

    // Mirror the hub into a signal for the provider's lifetime. The guard
    // lives in the hook so it drops with the component.
    let _mirror = use_hook(|| {
        Rc::new(hub.subscribe(move |s| {
            state.set(s.clone());
        }))
    });

    // Resolve the current identity once on mount.
    let seed_hub = hub.clone();
    use_future(move || {
        let hub = seed_hub.clone();
        async move {
            match api::get_current_user().await {
                Ok(user) => hub.publish(SessionState::from_observed(user)),
                Err(e) => {
                    tracing::error!("Session lookup failed: {}", e);
                    hub.publish(SessionState::Unauthenticated);
                }
            }
        }
    });

    use_context_provider(|| hub);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// The reactive session state. Updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The hub itself, for flows that change the session (sign-in, sign-out).
pub fn use_session_hub() -> SessionHub {
    use_context::<SessionHub>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserInfo {
        UserInfo {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            name: None,
        }
    }

    #[test]
    fn from_observed_maps_presence_to_state() {
        assert_eq!(
            SessionState::from_observed(None),
            SessionState::Unauthenticated
        );
        assert!(SessionState::from_observed(Some(user("u1"))).is_authenticated());
    }

    #[test]
    fn subscribe_fires_immediately_with_current_state() {
        let hub = SessionHub::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = hub.subscribe(move |s| sink.borrow_mut().push(s.clone()));
        assert_eq!(*seen.borrow(), [SessionState::Unknown]);
    }

    #[test]
    fn publish_notifies_subscribers_in_order() {
        let hub = SessionHub::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = hub.subscribe(move |s| sink.borrow_mut().push(s.clone()));

        hub.publish(SessionState::Authenticated(user("u1")));
        hub.publish(SessionState::Unauthenticated);

        assert_eq!(
            *seen.borrow(),
            [
                SessionState::Unknown,
                SessionState::Authenticated(user("u1")),
                SessionState::Unauthenticated,
            ]
        );
        assert_eq!(hub.current(), SessionState::Unauthenticated);
    }

    #[test]
    fn dropped_subscription_never_fires_again() {
        let hub = SessionHub::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let sub = hub.subscribe(move |s| sink.borrow_mut().push(s.clone()));

        drop(sub);
        hub.publish(SessionState::Unauthenticated);

        assert_eq!(*seen.borrow(), [SessionState::Unknown]);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_during_dispatch_is_safe() {
        let hub = SessionHub::new();

        // First subscriber drops the second's guard from inside its callback.
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let victim_handle = victim.clone();
        let _killer = hub.subscribe(move |s| {
            if matches!(s, SessionState::Unauthenticated) {
                victim_handle.borrow_mut().take();
            }
        });

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        *victim.borrow_mut() = Some(hub.subscribe(move |s| sink.borrow_mut().push(s.clone())));

        hub.publish(SessionState::Unauthenticated);
        hub.publish(SessionState::Authenticated(user("u1")));

        // The victim saw the immediate fire only; nothing after its drop.
        assert_eq!(*seen.borrow(), [SessionState::Unknown]);
        assert_eq!(hub.subscriber_count(), 1);
    }

    #[test]
    fn subscribe_during_dispatch_receives_later_publishes() {
        let hub = SessionHub::new();
        let late: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let hub2 = hub.clone();
        let late2 = late.clone();
        let sink = seen.clone();
        let _sub = hub.subscribe(move |s| {
            if matches!(s, SessionState::Unauthenticated) && late2.borrow().is_none() {
                let sink = sink.clone();
                *late2.borrow_mut() =
                    Some(hub2.subscribe(move |s| sink.borrow_mut().push(s.clone())));
            }
        });

        hub.publish(SessionState::Unauthenticated);
        // Immediate fire with the state current at subscribe time.
        assert_eq!(*seen.borrow(), [SessionState::Unauthenticated]);

        hub.publish(SessionState::Authenticated(user("u1")));
        assert_eq!(
            *seen.borrow(),
            [
                SessionState::Unauthenticated,
                SessionState::Authenticated(user("u1")),
            ]
        );
    }

    #[test]
    fn dropping_after_hub_is_gone_is_a_no_op() {
        let hub = SessionHub::new();
        let sub = hub.subscribe(|_| {});
        drop(hub);
        drop(sub);
    }
}
