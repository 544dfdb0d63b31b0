//! Shared lifecycle for one mounted frame loop: a cancellation flag plus the
//! slot holding the loop's resources. The mount handle and the tick closure
//! each hold a clone; `dispose` lowers the flag and empties the slot in the
//! same call, so release never waits on the next frame callback (which a
//! hidden tab may throttle or suspend indefinitely).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct LoopHandle<R> {
    running: Rc<Cell<bool>>,
    slot: Rc<RefCell<Option<R>>>,
}

impl<R> Clone for LoopHandle<R> {
    fn clone(&self) -> Self {
        Self {
            running: self.running.clone(),
            slot: self.slot.clone(),
        }
    }
}

impl<R> LoopHandle<R> {
    /// A running loop holding `resources`. `None` is a valid slot: the loop
    /// keeps ticking inertly (degraded mode) until disposed.
    pub fn new(resources: Option<R>) -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
            slot: Rc::new(RefCell::new(resources)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Run `f` on the resources if the slot is still occupied.
    pub fn with<T>(&self, f: impl FnOnce(&mut R) -> T) -> Option<T> {
        self.slot.borrow_mut().as_mut().map(f)
    }

    /// Lower the flag and drop the resources together. Idempotent.
    pub fn dispose(&self) {
        self.running.set(false);
        self.slot.borrow_mut().take();
    }
}
