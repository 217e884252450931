//! Named one-way message channels
//!
//! Single-threaded FIFO queues shared through `Rc<RefCell<_>>`. Senders can
//! be cloned freely; the receiver cannot, so a channel has at most one
//! subscriber.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

struct Shared<T> {
    name: String,
    queue: RefCell<VecDeque<T>>,
}

/// Sending half of a channel
pub struct Sender<T> {
    shared: Rc<Shared<T>>,
}

/// Receiving half of a channel (unique per channel)
pub struct Receiver<T> {
    shared: Rc<Shared<T>>,
}

/// Create a channel with the given port name
pub fn channel<T>(name: impl Into<String>) -> (Sender<T>, Receiver<T>) {
    let shared = Rc::new(Shared {
        name: name.into(),
        queue: RefCell::new(VecDeque::new()),
    });
    (
        Sender {
            shared: shared.clone(),
        },
        Receiver { shared },
    )
}

impl<T> Sender<T> {
    /// Queue a message; delivery happens when the receiver drains
    pub fn send(&self, msg: T) {
        self.shared.queue.borrow_mut().push_back(msg);
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T> Receiver<T> {
    /// Take the oldest queued message, if any
    pub fn try_recv(&self) -> Option<T> {
        self.shared.queue.borrow_mut().pop_front()
    }

    /// Iterate queued messages oldest first until the queue is empty
    ///
    /// Messages sent while iterating are picked up too.
    pub fn drain(&self) -> impl Iterator<Item = T> + '_ {
        std::iter::from_fn(move || self.try_recv())
    }

    pub fn len(&self) -> usize {
        self.shared.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.queue.borrow().is_empty()
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }
}

impl<T> fmt::Debug for Sender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender").field("name", &self.shared.name).finish()
    }
}

impl<T> fmt::Debug for Receiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Receiver")
            .field("name", &self.shared.name)
            .field("pending", &self.len())
            .finish()
    }
}
