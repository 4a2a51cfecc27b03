use super::*;
use crate::deps;
use rstest::rstest;

/// A missing previous list always reports changed (first-run semantics)
#[test]
fn test_no_previous_reports_changed() {
    assert!(has_changed(None, &deps![1, "a", true]));
    assert!(has_changed(None, &deps![]));
}

/// A list compared against an equal capture reports unchanged
#[test]
fn test_equal_lists_report_unchanged() {
    let prev = deps![1, "a"];
    let next = deps![1, "a"];
    assert!(!has_changed(Some(&prev), &next));
}

/// Comparing a list against its own clone is reflexive
#[test]
fn test_reflexivity() {
    let list = deps![1, "a", true, 2.5f64, Some(7u8)];
    let same = list.clone();
    assert!(!has_changed(Some(&list), &same));
}

#[rstest]
#[case(deps![1, "a"], deps![2, "a"], true)]
#[case(deps![1, "a"], deps![1, "b"], true)]
#[case(deps![1, "a"], deps![1, "a"], false)]
#[case(deps![1], deps![1, 2], true)]
#[case(deps![1, 2], deps![1], true)]
#[case(deps![], deps![], false)]
fn test_comparison_scenarios(
    #[case] prev: crate::list::DepList,
    #[case] next: crate::list::DepList,
    #[case] expected: bool,
) {
    assert_eq!(has_changed(Some(&prev), &next), expected);
}

/// Test the typed slice surface with default equality
#[test]
fn test_has_changed_eq() {
    assert!(has_changed_eq::<i32>(None, &[1, 2]));
    assert!(!has_changed_eq(Some(&[1, 2][..]), &[1, 2]));
    assert!(has_changed_eq(Some(&[1, 2][..]), &[1, 3]));
    assert!(has_changed_eq(Some(&[1][..]), &[1, 2]));

    let prev = ["a".to_string(), "b".to_string()];
    let next = ["a".to_string(), "b".to_string()];
    assert!(!has_changed_eq(Some(&prev[..]), &next));
}

/// A custom equality strategy is honored even where default equality
/// would report changed
#[test]
fn test_custom_equality_honored() {
    let prev = [1.0000f64];
    let next = [1.0001f64];

    // Default equality sees a difference
    assert!(has_changed_eq(Some(&prev[..]), &next));

    // Tolerance-based equality does not
    assert!(!has_changed_with(Some(&prev[..]), &next, |a, b| {
        (a - b).abs() < 0.001
    }));
}

/// Custom equality can also be stricter than the default
#[test]
fn test_custom_equality_stricter() {
    let prev = ["Case"];
    let next = ["case"];
    assert!(has_changed_with(Some(&prev[..]), &next, |a, b| a == b));
    assert!(!has_changed_with(Some(&prev[..]), &next, |a, b| {
        a.eq_ignore_ascii_case(b)
    }));
}

/// Length mismatch short-circuits before the custom equality runs
#[test]
fn test_length_mismatch_skips_equality() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    let calls = AtomicUsize::new(0);

    let prev = [1];
    let next = [1, 2];
    let changed = has_changed_with(Some(&prev[..]), &next, |a, b| {
        calls.fetch_add(1, Ordering::Relaxed);
        a == b
    });

    assert!(changed);
    assert_eq!(calls.load(Ordering::Relaxed), 0);
}

/// The scan stops at the first differing position
#[test]
fn test_short_circuit_on_first_difference() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    let calls = AtomicUsize::new(0);

    let prev = [1, 2, 3, 4];
    let next = [9, 2, 3, 4];
    let changed = has_changed_with(Some(&prev[..]), &next, |a, b| {
        calls.fetch_add(1, Ordering::Relaxed);
        a == b
    });

    assert!(changed);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

/// A panic from the caller-supplied equality propagates unchanged
#[test]
#[should_panic(expected = "equality exploded")]
fn test_equality_panic_propagates() {
    let prev = [1];
    let next = [1];
    has_changed_with(Some(&prev[..]), &next, |_, _| {
        panic!("equality exploded")
    });
}

/// Identical calls are deterministic
#[test]
fn test_deterministic() {
    let prev = deps![1, "a"];
    let next = deps![2, "a"];
    for _ in 0..10 {
        assert!(has_changed(Some(&prev), &next));
    }
}
