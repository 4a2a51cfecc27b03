pub use depwatch_core::{
    DepList, DepTracker, DepValue, MemoCell, deps,
    compare::{has_changed, has_changed_eq, has_changed_with},
};

pub mod prelude {
    pub use super::*;
}
