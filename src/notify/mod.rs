//! Typed change notifications. Views (or tests) subscribe to hear when a
//! store changed, instead of the window-broadcast events the original web
//! app used. Single-threaded on purpose: everything runs on one connection.

use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Entries,
    Templates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreChange {
    pub store: Store,
}

type Subscriber = Box<dyn Fn(&StoreChange)>;

#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: RefCell<Vec<Subscriber>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, f: F)
    where
        F: Fn(&StoreChange) + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(f));
    }

    pub fn emit(&self, store: Store) {
        let change = StoreChange { store };
        for sub in self.subscribers.borrow().iter() {
            sub(&change);
        }
    }
}
