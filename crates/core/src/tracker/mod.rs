use parking_lot::Mutex;

use crate::compare::has_changed;
use crate::list::DepList;


/// Owns the previous dependency list for a single tracked computation
///
/// The compare functions are stateless; every embedder ends up storing the
/// previous list somewhere between evaluations. `DepTracker` packages that
/// storage: feed it the current list on each evaluation and run the
/// computation when it says so.
///
/// # Examples
///
/// ```rust
/// use depwatch_core::{DepTracker, deps};
///
/// let mut tracker = DepTracker::new();
/// assert!(tracker.should_run(deps![1, "a"])); // first evaluation
/// assert!(!tracker.should_run(deps![1, "a"]));
/// assert!(tracker.should_run(deps![2, "a"]));
/// ```
pub struct DepTracker {
    /// Previous dependencies for comparison
    prev_deps: Option<DepList>,
    /// How many times the tracked computation was told to run
    runs: usize,
}

impl DepTracker {
    pub fn new() -> Self {
        Self {
            prev_deps: None,
            runs: 0,
        }
    }

    /// Compare the current list against the previous evaluation's list
    ///
    /// Returns true when the computation should run: on the first call, on
    /// a length mismatch, or when any position changed. The current list is
    /// retained as the new previous list whenever the computation runs.
    pub fn should_run(&mut self, next: DepList) -> bool {
        let changed = has_changed(self.prev_deps.as_ref(), &next);
        if changed {
            self.prev_deps = Some(next);
            self.runs += 1;
        }
        changed
    }

    /// Forget the previous list so the next call reports changed
    pub fn reset(&mut self) {
        self.prev_deps = None;
    }

    /// Number of times `should_run` reported changed
    pub fn runs(&self) -> usize {
        self.runs
    }
}

impl Default for DepTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A memoized value keyed by a dependency list
///
/// Holds the last computed value together with the list it was computed
/// from, and recomputes only when the list changes. Interior state is
/// behind a mutex, so a cell shared between threads hands out consistent
/// values.
///
/// # Examples
///
/// ```rust
/// use depwatch_core::{MemoCell, deps};
///
/// let cell = MemoCell::new();
/// let value = cell.get_or_compute(deps![2, 3], || 2 * 3);
/// assert_eq!(value, 6);
///
/// // Same dependencies: the cached value is returned, not recomputed
/// let value = cell.get_or_compute(deps![2, 3], || unreachable!());
/// assert_eq!(value, 6);
/// ```
pub struct MemoCell<T> {
    state: Mutex<Option<(DepList, T)>>,
}

impl<T: Clone> MemoCell<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(None),
        }
    }

    /// Return the cached value, recomputing it first if the dependency
    /// list changed since the last computation
    ///
    /// The cell's lock is held while `compute` runs, so concurrent callers
    /// with unchanged dependencies observe a single computation. `compute`
    /// must not access the same cell: the lock is not reentrant and doing
    /// so deadlocks.
    pub fn get_or_compute<F>(&self, deps: DepList, compute: F) -> T
    where
        F: FnOnce() -> T,
    {
        let mut state = self.state.lock();
        if let Some((prev_deps, value)) = state.as_ref() {
            if !has_changed(Some(prev_deps), &deps) {
                return value.clone();
            }
        }
        tracing::debug!(
            target: "depwatch::memo",
            deps = ?deps,
            "dependencies changed, recomputing memoized value"
        );
        let value = compute();
        *state = Some((deps, value.clone()));
        value
    }

    /// Drop the cached value so the next access recomputes
    pub fn invalidate(&self) {
        *self.state.lock() = None;
    }
}

impl<T: Clone> Default for MemoCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
