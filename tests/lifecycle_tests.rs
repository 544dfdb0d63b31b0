// Host-side tests for the frame-loop lifecycle handle.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/lifecycle.rs"]
mod lifecycle;

use lifecycle::LoopHandle;
use std::cell::Cell;
use std::rc::Rc;

/// Flips a shared flag when dropped, so a test can pin down *when* the
/// resources went away.
struct DropFlag(Rc<Cell<bool>>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

#[test]
fn dispose_releases_resources_in_the_same_call() {
    let dropped = Rc::new(Cell::new(false));
    let handle = LoopHandle::new(Some(DropFlag(dropped.clone())));
    let tick_side = handle.clone();
    assert!(tick_side.is_running());
    assert!(!dropped.get());

    handle.dispose();

    // No tick ran between dispose and these asserts: the resources must be
    // gone already, not parked until the next frame callback fires.
    assert!(dropped.get());
    assert!(!tick_side.is_running());
    assert!(tick_side.with(|_| ()).is_none());
}

#[test]
fn dispose_is_idempotent() {
    let dropped = Rc::new(Cell::new(false));
    let handle = LoopHandle::new(Some(DropFlag(dropped.clone())));

    handle.dispose();
    handle.dispose();

    assert!(dropped.get());
    assert!(!handle.is_running());
}

#[test]
fn clones_share_one_slot() {
    let handle = LoopHandle::new(Some(0u32));
    let tick_side = handle.clone();

    tick_side.with(|n| *n += 1);
    tick_side.with(|n| *n += 1);
    assert_eq!(handle.with(|n| *n), Some(2));
}

#[test]
fn empty_slot_still_runs_until_disposed() {
    // Degraded mode: no GPU, the loop ticks inertly but stays cancellable.
    let handle = LoopHandle::<DropFlag>::new(None);
    assert!(handle.is_running());
    assert!(handle.with(|_| ()).is_none());

    handle.dispose();
    assert!(!handle.is_running());
}
