use crate::list::DepList;

#[cfg(test)]
mod tests;

/// Determine whether a tracked computation should re-run given its
/// dependency lists
///
/// This mirrors the dependency-array comparison of React-style hooks:
/// - `previous` absent (first evaluation) always reports changed, so the
///   computation runs on mount
/// - lists of different lengths always report changed, without positional
///   comparison (defensive policy, never an error)
/// - otherwise positions are compared left to right under identity-style
///   equality, stopping at the first difference
///
/// The function is pure and stateless: the caller owns the previous list
/// and passes both lists explicitly on every call.
///
/// # Examples
///
/// ```rust
/// use depwatch_core::{deps, has_changed};
///
/// let first = deps![1, "a", true];
/// assert!(has_changed(None, &first));
///
/// let prev = deps![1, "a"];
/// assert!(!has_changed(Some(&prev), &deps![1, "a"]));
/// assert!(has_changed(Some(&prev), &deps![2, "a"]));
/// ```
pub fn has_changed(previous: Option<&DepList>, next: &DepList) -> bool {
    match previous {
        None => {
            // First evaluation - always run
            tracing::trace!(
                target: "depwatch::compare",
                next = ?next,
                "no previous list, reporting changed"
            );
            true
        }
        Some(previous) => {
            let changed = next.changed_from(previous);
            tracing::trace!(
                target: "depwatch::compare",
                previous = ?previous,
                next = ?next,
                changed,
                "compared dependency lists"
            );
            changed
        }
    }
}

/// Typed variant of [`has_changed`] over homogeneous slices, using the
/// element type's `PartialEq`
pub fn has_changed_eq<T: PartialEq>(previous: Option<&[T]>, next: &[T]) -> bool {
    has_changed_with(previous, next, |a, b| a == b)
}

/// Typed variant of [`has_changed`] with a caller-supplied equality
/// strategy
///
/// The equality function is assumed pure and side-effect free. It replaces
/// the default identity comparison entirely: entries that differ under
/// identity but compare equal under `eq` report unchanged. A panic raised
/// by `eq` propagates to the caller unchanged.
///
/// # Examples
///
/// ```rust
/// use depwatch_core::has_changed_with;
///
/// let prev = [1.0000f64];
/// let next = [1.0001f64];
/// assert!(!has_changed_with(
///     Some(&prev[..]),
///     &next,
///     |a, b| (a - b).abs() < 0.001
/// ));
/// ```
pub fn has_changed_with<T, F>(previous: Option<&[T]>, next: &[T], eq: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    let Some(previous) = previous else {
        tracing::trace!(
            target: "depwatch::compare",
            len = next.len(),
            "no previous slice, reporting changed"
        );
        return true;
    };
    if previous.len() != next.len() {
        tracing::trace!(
            target: "depwatch::compare",
            previous_len = previous.len(),
            next_len = next.len(),
            "length mismatch, reporting changed"
        );
        return true;
    }
    previous
        .iter()
        .zip(next.iter())
        .any(|(prev, next)| !eq(prev, next))
}
