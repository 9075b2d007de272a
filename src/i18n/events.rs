// SPDX-License-Identifier: MPL-2.0
//! The `languageChanged` notification and its observers.
//!
//! Observers are called synchronously, in registration order, from inside
//! [`LocalizationManager::set_current_language`]. Channel subscribers are
//! sent the event afterwards; disconnected receivers are dropped.
//!
//! [`LocalizationManager::set_current_language`]: super::LocalizationManager::set_current_language

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

/// Event name broadcast when the selected language changes.
pub const LANGUAGE_CHANGED: &str = "languageChanged";

/// The selected language changed. Carries no payload; observers re-read
/// whatever they display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChanged;

impl LanguageChanged {
    pub const NAME: &'static str = LANGUAGE_CHANGED;
}

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(LanguageChanged)>;

#[derive(Default)]
pub struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
    channels: Vec<Sender<LanguageChanged>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(LanguageChanged) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Returns a receiver that gets one [`LanguageChanged`] per change.
    pub fn subscribe_channel(&mut self) -> Receiver<LanguageChanged> {
        let (tx, rx) = mpsc::channel();
        self.channels.push(tx);
        rx
    }

    /// Number of live callbacks and channels.
    pub fn len(&self) -> usize {
        self.callbacks.len() + self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn notify(&mut self) {
        for (_, callback) in &mut self.callbacks {
            callback(LanguageChanged);
        }
        self.channels.retain(|tx| tx.send(LanguageChanged).is_ok());
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("callbacks", &self.callbacks.len())
            .field("channels", &self.channels.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn callbacks_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();

        let first = Rc::clone(&log);
        observers.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        observers.subscribe(move |_| second.borrow_mut().push("second"));

        observers.notify();
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::new();
        let counter = Rc::clone(&count);
        let id = observers.subscribe(move |_| *counter.borrow_mut() += 1);

        observers.notify();
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn channel_receives_each_notification() {
        let mut observers = Observers::new();
        let rx = observers.subscribe_channel();

        observers.notify();
        observers.notify();

        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn dropped_receivers_are_pruned() {
        let mut observers = Observers::new();
        let rx = observers.subscribe_channel();
        assert_eq!(observers.len(), 1);

        drop(rx);
        observers.notify();
        assert!(observers.is_empty());
    }

    #[test]
    fn event_name_matches_constant() {
        assert_eq!(LanguageChanged::NAME, "languageChanged");
    }
}
