use std::any::Any;


/// Trait for a single opaque entry of a dependency list
/// This enables change detection across type-erased values
pub trait DepValue: Any + Send + Sync {
    /// Compare this value with another entry for equality
    ///
    /// Equality is identity-style: a value is equal to another only if the
    /// other is the same concrete type and compares equal as that type.
    /// Structural similarity across types never counts as equal.
    fn value_eq(&self, other: &dyn DepValue) -> bool;

    /// Clone this value as a boxed trait object
    fn clone_value(&self) -> Box<dyn DepValue>;

    /// Get a debug representation of the value
    fn debug_value(&self) -> String;

    /// Get a hash of the value for fast comparison
    /// This enables a quick reject before the equality comparison: values
    /// that compare equal under `value_eq` must hash equal.
    fn value_hash(&self) -> u64;
}

// Add as_any method to DepValue trait
impl dyn DepValue {
    pub fn as_any(&self) -> &dyn Any {
        self
    }
}

fn hash_one<T: std::hash::Hash>(value: &T) -> u64 {
    use std::hash::{Hash, Hasher};
    let mut hasher = ahash::AHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

// Implement DepValue for common types:

// Implement for primitive types
macro_rules! impl_dep_value_for_primitive {
    ($($t:ty),*) => {
        $(
            impl DepValue for $t {
                fn value_eq(&self, other: &dyn DepValue) -> bool {
                    if let Some(other_val) = other.as_any().downcast_ref::<$t>() {
                        self == other_val
                    } else {
                        false
                    }
                }

                fn clone_value(&self) -> Box<dyn DepValue> {
                    Box::new(*self)
                }

                fn debug_value(&self) -> String {
                    format!("{:?}", self)
                }

                fn value_hash(&self) -> u64 {
                    hash_one(self)
                }
            }
        )*
    };
}

impl_dep_value_for_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char
);

// Special implementations for floating point types (which don't implement Hash)
impl DepValue for f32 {
    fn value_eq(&self, other: &dyn DepValue) -> bool {
        if let Some(other_val) = other.as_any().downcast_ref::<f32>() {
            self == other_val
        } else {
            false
        }
    }

    fn clone_value(&self) -> Box<dyn DepValue> {
        Box::new(*self)
    }

    fn debug_value(&self) -> String {
        format!("{:?}", self)
    }

    fn value_hash(&self) -> u64 {
        // For f32, we use the bit representation for hashing.
        // 0.0 and -0.0 compare equal, so they must hash equal.
        let canonical = if *self == 0.0 { 0.0f32 } else { *self };
        canonical.to_bits() as u64
    }
}

impl DepValue for f64 {
    fn value_eq(&self, other: &dyn DepValue) -> bool {
        if let Some(other_val) = other.as_any().downcast_ref::<f64>() {
            self == other_val
        } else {
            false
        }
    }

    fn clone_value(&self) -> Box<dyn DepValue> {
        Box::new(*self)
    }

    fn debug_value(&self) -> String {
        format!("{:?}", self)
    }

    fn value_hash(&self) -> u64 {
        // For f64, we use the bit representation for hashing.
        // 0.0 and -0.0 compare equal, so they must hash equal.
        let canonical = if *self == 0.0 { 0.0f64 } else { *self };
        canonical.to_bits()
    }
}

impl DepValue for String {
    fn value_eq(&self, other: &dyn DepValue) -> bool {
        if let Some(other_val) = other.as_any().downcast_ref::<String>() {
            self == other_val
        } else {
            false
        }
    }

    fn clone_value(&self) -> Box<dyn DepValue> {
        Box::new(self.clone())
    }

    fn debug_value(&self) -> String {
        format!("{:?}", self)
    }

    fn value_hash(&self) -> u64 {
        hash_one(self)
    }
}

impl DepValue for &'static str {
    fn value_eq(&self, other: &dyn DepValue) -> bool {
        if let Some(other_val) = other.as_any().downcast_ref::<&'static str>() {
            self == other_val
        } else {
            false
        }
    }

    fn clone_value(&self) -> Box<dyn DepValue> {
        Box::new(*self)
    }

    fn debug_value(&self) -> String {
        format!("{:?}", self)
    }

    fn value_hash(&self) -> u64 {
        hash_one(self)
    }
}

// Implement DepValue for Option<T> where T: DepValue
impl<T> DepValue for Option<T>
where
    T: DepValue + Clone + PartialEq + std::fmt::Debug + 'static,
{
    fn value_eq(&self, other: &dyn DepValue) -> bool {
        if let Some(other_option) = other.as_any().downcast_ref::<Option<T>>() {
            match (self, other_option) {
                (None, None) => true,
                (Some(a), Some(b)) => a.value_eq(b),
                _ => false,
            }
        } else {
            false
        }
    }

    fn clone_value(&self) -> Box<dyn DepValue> {
        Box::new(self.clone())
    }

    fn debug_value(&self) -> String {
        match self {
            None => "None".to_string(),
            Some(value) => format!("Some({})", value.debug_value()),
        }
    }

    fn value_hash(&self) -> u64 {
        match self {
            None => hash_one(&0u8),
            Some(value) => {
                use std::hash::{Hash, Hasher};
                let mut hasher = ahash::AHasher::default();
                1u8.hash(&mut hasher);
                value.value_hash().hash(&mut hasher);
                hasher.finish()
            }
        }
    }
}
