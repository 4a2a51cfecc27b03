use crate::value::DepValue;


/// An ordered, fixed-length list of tracked values captured at one
/// evaluation point
///
/// A list is immutable once captured: the next evaluation produces a new
/// list that supersedes this one, it never mutates it. Entries are opaque;
/// comparison is strictly positional, entry *i* of one list against entry
/// *i* of the other.
pub struct DepList {
    entries: Vec<Box<dyn DepValue>>,
}

impl DepList {
    /// Create a list from already-boxed entries
    pub fn new(entries: Vec<Box<dyn DepValue>>) -> Self {
        Self { entries }
    }

    /// Create an empty list (the "run once" dependency set)
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of tracked entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list tracks no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at a position, if present
    pub fn get(&self, index: usize) -> Option<&dyn DepValue> {
        self.entries.get(index).map(|entry| entry.as_ref())
    }

    /// Iterate over the entries in order
    pub fn iter(&self) -> impl Iterator<Item = &dyn DepValue> {
        self.entries.iter().map(|entry| entry.as_ref())
    }

    /// Determine whether this list differs from a previous capture
    ///
    /// Lists of different lengths always report changed, without attempting
    /// positional comparison. Otherwise positions are scanned left to right
    /// and the scan stops at the first entry that compares unequal. Each
    /// position is checked by hash first as a fast reject before the full
    /// equality comparison.
    pub fn changed_from(&self, previous: &DepList) -> bool {
        if self.entries.len() != previous.entries.len() {
            return true;
        }
        self.entries
            .iter()
            .zip(previous.entries.iter())
            .any(|(next, prev)| {
                next.value_hash() != prev.value_hash() || !next.value_eq(prev.as_ref())
            })
    }
}

impl Clone for DepList {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.iter().map(|entry| entry.clone_value()).collect(),
        }
    }
}

impl Default for DepList {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for DepList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for entry in &self.entries {
            list.entry(&format_args!("{}", entry.debug_value()));
        }
        list.finish()
    }
}

impl PartialEq for DepList {
    fn eq(&self, other: &Self) -> bool {
        !self.changed_from(other)
    }
}

impl From<Vec<Box<dyn DepValue>>> for DepList {
    fn from(entries: Vec<Box<dyn DepValue>>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<Box<dyn DepValue>> for DepList {
    fn from_iter<I: IntoIterator<Item = Box<dyn DepValue>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Capture a dependency list from a sequence of values
///
/// Entries may be of mixed types; each must implement [`DepValue`].
///
/// # Examples
///
/// ```rust
/// use depwatch_core::deps;
///
/// let list = deps![1, "a", true];
/// assert_eq!(list.len(), 3);
///
/// let empty = deps![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! deps {
    () => {
        $crate::list::DepList::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::list::DepList::new(vec![
            $(Box::new($value) as Box<dyn $crate::value::DepValue>),+
        ])
    };
}
