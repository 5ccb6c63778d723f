//! Typed observable value with synchronous change notification.

use std::cell::RefCell;
use std::rc::Rc;

pub type Subscriber<T> = Rc<dyn Fn(&Rc<T>)>;

/// Holds one value and tells every subscriber each time it is replaced.
///
/// The value sits behind an `Rc`: readers get cheap snapshots, and
/// [`Store::update`] goes through `Rc::make_mut`, so a snapshot a
/// subscriber kept never changes under it.
pub struct Store<T> {
    value: RefCell<Rc<T>>,
    subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T: Clone> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(Rc::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Current value.
    pub fn get(&self) -> Rc<T> {
        Rc::clone(&*self.value.borrow())
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(self.value.borrow().as_ref())
    }

    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = Rc::new(value);
        self.notify();
    }

    /// Mutate in place (copy-on-write) and notify.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut value = self.value.borrow_mut();
            f(Rc::make_mut(&mut *value))
        };
        self.notify();
        result
    }

    /// Like [`Store::update`], but `f` reports whether it changed anything
    /// and subscribers only hear about it when it did.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let changed = {
            let mut value = self.value.borrow_mut();
            f(Rc::make_mut(&mut *value))
        };
        if changed {
            self.notify();
        }
        changed
    }

    /// Register `subscriber`. It is called right away with the current
    /// value and then after every replacement until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, subscriber: impl Fn(&Rc<T>) + 'static) -> Subscription<T> {
        let subscriber: Subscriber<T> = Rc::new(subscriber);
        self.subscribers.borrow_mut().push(Rc::clone(&subscriber));
        (subscriber)(&self.get());
        Subscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    // No borrow is held while callbacks run, so a subscriber may write back.
    fn notify(&self) {
        let value = self.get();
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)(&value);
        }
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Keeps a subscriber registered for as long as it lives.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription<T> {
    subscriber: Subscriber<T>,
    subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
