//! Element types for exercising container semantics.

use std::cell::Cell;
use std::rc::Rc;

/// A value that can be moved but never cloned.
///
/// [`MoveOnly::take_from`] mirrors a move out of a named value: the source is
/// left holding `0`. The default value is `5`.
#[derive(Debug, PartialEq, Eq)]
pub struct MoveOnly {
    x: usize,
}

impl MoveOnly {
    pub fn new(x: usize) -> MoveOnly {
        MoveOnly { x }
    }

    pub fn get(&self) -> usize {
        self.x
    }

    /// Moves the value out of `other`, leaving `0` behind.
    pub fn take_from(other: &mut MoveOnly) -> MoveOnly {
        MoveOnly {
            x: std::mem::take(&mut other.x),
        }
    }
}

impl Default for MoveOnly {
    fn default() -> Self {
        MoveOnly::new(5)
    }
}

/// Counts how many [`Tracked`] values created from it have been dropped.
#[derive(Debug, Clone, Default)]
pub struct DropTracker {
    drops: Rc<Cell<usize>>,
}

impl DropTracker {
    pub fn new() -> DropTracker {
        DropTracker::default()
    }

    /// Creates a tracked element holding `value`.
    pub fn item(&self, value: i32) -> Tracked {
        Tracked {
            value,
            drops: self.drops.clone(),
        }
    }

    /// Number of tracked elements dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// An element that reports its drop to a [`DropTracker`].
///
/// Clones report to the same tracker.
#[derive(Debug, Clone)]
pub struct Tracked {
    value: i32,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Shared budget of successful clones for [`Fragile`] values.
#[derive(Debug, Clone)]
pub struct CloneBudget {
    remaining: Rc<Cell<usize>>,
}

impl CloneBudget {
    /// Allows `clones` clones before the next one panics.
    pub fn new(clones: usize) -> CloneBudget {
        CloneBudget {
            remaining: Rc::new(Cell::new(clones)),
        }
    }

    pub fn item(&self, value: i32) -> Fragile {
        Fragile {
            value,
            budget: self.clone(),
        }
    }

    pub fn set(&self, clones: usize) {
        self.remaining.set(clones);
    }
}

/// An element whose `clone` panics once its [`CloneBudget`] is exhausted.
#[derive(Debug)]
pub struct Fragile {
    value: i32,
    budget: CloneBudget,
}

impl Fragile {
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        let remaining = self.budget.remaining.get();
        assert!(remaining > 0, "clone budget exhausted");
        self.budget.remaining.set(remaining - 1);
        Fragile {
            value: self.value,
            budget: self.budget.clone(),
        }
    }
}

impl PartialEq for Fragile {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
