//! Dependency-list change detection
//!
//! The comparison algorithm behind React-style dependency arrays, as a
//! standalone library: given the ordered list of values a memoized
//! computation, effect, or callback was last evaluated with and the list it
//! is about to be evaluated with, decide whether it should re-run.
//!
//! Comparison is strictly positional and identity-style by default; a
//! caller-supplied equality strategy can replace it on the typed surface.
//! The compare functions are pure and stateless. [`DepTracker`] and
//! [`MemoCell`] package the previous-list storage embedders otherwise
//! re-write themselves.

pub mod compare;
pub mod list;
pub mod tracker;
pub mod value;

pub use compare::{has_changed, has_changed_eq, has_changed_with};
pub use list::DepList;
pub use tracker::{DepTracker, MemoCell};
pub use value::DepValue;
