//! Single-threaded observable values with cancellable subscriptions.
//!
//! [`Watched`] stands in for the host's change detection: setting a value
//! notifies every active listener with the new and previous value. Each
//! listener receives its own [`Subscription`] and may cancel it from inside
//! the callback; a cancelled listener is never called again, not even by a
//! notification issued while the cancelling callback is still running.
//!
//! Updates issued from inside a callback are queued. They are applied and
//! delivered in order once every listener has seen the current update, so a
//! listener never observes a change older than one it has already seen.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

/// A change notification: the value after and before the update.
#[derive(Debug)]
pub struct Change<'a, T> {
    /// The new value, `None` if the value was cleared.
    pub new: Option<&'a T>,
    /// The previous value, `None` if there was none.
    pub old: Option<&'a T>,
}

impl<T> Clone for Change<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Change<'_, T> {}

impl<'a, T> Change<'a, T> {
    /// Creates a change notification.
    #[must_use]
    pub const fn new(new: Option<&'a T>, old: Option<&'a T>) -> Self {
        Self { new, old }
    }
}

impl<T: PartialEq> Change<'_, T> {
    /// Returns whether the new value differs from the previous one.
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.new != self.old
    }
}

/// Handle to a listener registered on a [`Watched`] value.
///
/// Dropping the handle does not cancel the listener.
#[derive(Debug, Clone)]
pub struct Subscription {
    active: Rc<Cell<bool>>,
}

impl Subscription {
    fn new() -> Self {
        Self {
            active: Rc::new(Cell::new(true)),
        }
    }

    /// Stops further notifications. Takes effect immediately.
    pub fn cancel(&self) {
        self.active.set(false);
    }

    /// Returns whether the listener still receives notifications.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

type Callback<T> = Rc<RefCell<dyn FnMut(Change<'_, T>, &Subscription)>>;

/// New value, previous value, and the listeners to notify.
type Update<T> = (Option<T>, Option<T>, Vec<(Subscription, Callback<T>)>);

struct Listener<T> {
    subscription: Subscription,
    callback: Callback<T>,
}

struct State<T> {
    value: Option<T>,
    listeners: Vec<Listener<T>>,
    pending: VecDeque<Option<T>>,
    dispatching: bool,
}

/// An observable value.
///
/// Clones share the same value and listeners.
pub struct Watched<T> {
    state: Rc<RefCell<State<T>>>,
}

impl<T> Clone for Watched<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> Default for Watched<T> {
    fn default() -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                value: None,
                listeners: Vec::new(),
                pending: VecDeque::new(),
                dispatching: false,
            })),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Watched<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Watched")
            .field("value", &state.value)
            .field("listeners", &state.listeners.len())
            .field("pending", &state.pending.len())
            .finish()
    }
}

impl<T: Clone + 'static> Watched<T> {
    /// Creates a watched value with no value yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a watched value holding `value`.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        let watched = Self::new();
        watched.state.borrow_mut().value = Some(value);
        watched
    }

    /// Returns a copy of the current value.
    ///
    /// Inside a callback this is the value being delivered; updates queued
    /// by callbacks are not visible until their own delivery starts.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.state.borrow().value.clone()
    }

    /// Registers a listener called on every subsequent update.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(Change<'_, T>, &Subscription) + 'static,
    {
        let subscription = Subscription::new();
        self.state.borrow_mut().listeners.push(Listener {
            subscription: subscription.clone(),
            callback: Rc::new(RefCell::new(callback)),
        });
        subscription
    }

    /// Replaces the value and notifies listeners.
    pub fn set(&self, value: T) {
        self.replace(Some(value));
    }

    /// Clears the value and notifies listeners.
    pub fn clear(&self) {
        self.replace(None);
    }

    /// Returns the number of active listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state
            .borrow()
            .listeners
            .iter()
            .filter(|listener| listener.subscription.is_active())
            .count()
    }

    fn replace(&self, value: Option<T>) {
        {
            let mut state = self.state.borrow_mut();
            state.pending.push_back(value);
            if state.dispatching {
                trace!(pending = state.pending.len(), "update queued during notification");
                return;
            }
            state.dispatching = true;
        }

        while let Some((new, old, listeners)) = self.next_update() {
            for (subscription, callback) in listeners {
                // A listener earlier in this pass may have cancelled this one.
                if !subscription.is_active() {
                    continue;
                }
                let mut handler = callback.borrow_mut();
                (*handler)(Change::new(new.as_ref(), old.as_ref()), &subscription);
            }
        }
    }

    /// Applies the next queued update and snapshots the listeners to notify.
    /// Returns `None` and ends the dispatch once the queue is empty.
    fn next_update(&self) -> Option<Update<T>> {
        let mut state = self.state.borrow_mut();
        let Some(value) = state.pending.pop_front() else {
            state.dispatching = false;
            return None;
        };
        let old = std::mem::replace(&mut state.value, value);
        state
            .listeners
            .retain(|listener| listener.subscription.is_active());
        let listeners = state
            .listeners
            .iter()
            .map(|listener| (listener.subscription.clone(), Rc::clone(&listener.callback)))
            .collect();
        Some((state.value.clone(), old, listeners))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Seen = Rc<RefCell<Vec<(Option<u32>, Option<u32>)>>>;

    fn recorder(watched: &Watched<u32>) -> (Subscription, Seen) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = watched.subscribe(move |change, _| {
            sink.borrow_mut()
                .push((change.new.copied(), change.old.copied()));
        });
        (subscription, seen)
    }

    #[test]
    fn test_notifies_new_and_old() {
        let watched = Watched::new();
        let (_subscription, seen) = recorder(&watched);

        watched.set(1);
        watched.set(2);
        watched.clear();

        assert_eq!(
            *seen.borrow(),
            vec![(Some(1), None), (Some(2), Some(1)), (None, Some(2))]
        );
        assert_eq!(watched.get(), None);
    }

    #[test]
    fn test_cancel_stops_notifications() {
        let watched = Watched::with_value(0);
        let (subscription, seen) = recorder(&watched);

        watched.set(1);
        subscription.cancel();
        watched.set(2);

        assert_eq!(seen.borrow().len(), 1);
        assert!(!subscription.is_active());
        assert_eq!(watched.listener_count(), 0);
    }

    #[test]
    fn test_cancel_inside_callback_blocks_nested_notification() {
        let watched = Watched::new();
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let inner = watched.clone();
        watched.subscribe(move |_, subscription| {
            counter.set(counter.get() + 1);
            subscription.cancel();
            inner.set(99);
        });

        watched.set(1);
        watched.set(2);

        assert_eq!(calls.get(), 1);
        assert_eq!(watched.get(), Some(2));
    }

    #[test]
    fn test_listener_cancelled_by_earlier_listener() {
        let watched = Watched::new();
        let later = Rc::new(RefCell::new(None::<Subscription>));

        let to_cancel = Rc::clone(&later);
        watched.subscribe(move |_, _| {
            if let Some(subscription) = to_cancel.borrow().as_ref() {
                subscription.cancel();
            }
        });
        let (subscription, seen) = recorder(&watched);
        *later.borrow_mut() = Some(subscription);

        watched.set(1);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_change_detection() {
        assert!(!Change::new(Some(&1), Some(&1)).is_change());
        assert!(Change::new(Some(&1), None).is_change());
        assert!(!Change::<u32>::new(None, None).is_change());
    }

    #[test]
    fn test_update_from_callback_reaches_later_listeners_in_order() {
        let watched = Watched::new();
        let inner = watched.clone();
        watched.subscribe(move |change, _| {
            if change.new == Some(&1) {
                inner.set(99);
            }
        });
        let (_subscription, seen) = recorder(&watched);

        watched.set(1);

        assert_eq!(*seen.borrow(), vec![(Some(1), None), (Some(99), Some(1))]);
        assert_eq!(watched.get(), Some(99));
    }

    #[test]
    fn test_update_from_callback_is_delivered_to_itself_afterwards() {
        let watched = Watched::new();
        let seen: Seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let inner = watched.clone();
        watched.subscribe(move |change, _| {
            sink.borrow_mut()
                .push((change.new.copied(), change.old.copied()));
            if change.new == Some(&1) {
                inner.set(2);
                assert_eq!(inner.get(), Some(1));
            }
        });

        watched.set(1);

        assert_eq!(*seen.borrow(), vec![(Some(1), None), (Some(2), Some(1))]);
        assert_eq!(watched.get(), Some(2));
    }
}
