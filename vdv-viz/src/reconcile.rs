//! Keyed enter/update/exit reconciliation.
//!
//! D3's data join decides, by key, which marks to create, update, or fade
//! out. The same partition is computed here so it can be unit-tested (and
//! logged) without any rendering environment: the chart scripts stay a
//! dumb projection of the data they are handed.

use std::collections::HashSet;

/// The keyed diff between a previous render and new data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPlan {
    /// Keys new to this render, in new-data order.
    pub enter: Vec<String>,
    /// Keys present in both renders, in new-data order.
    pub update: Vec<String>,
    /// Keys gone from this render, in previous-render order.
    pub exit: Vec<String>,
}

impl RenderPlan {
    /// True when nothing entered or exited (positions may still change).
    pub fn is_stable(&self) -> bool {
        self.enter.is_empty() && self.exit.is_empty()
    }
}

/// Partition `next` against `prev_keys` by key equality.
pub fn reconcile<T, F>(prev_keys: &[String], next: &[T], key: F) -> RenderPlan
where
    F: Fn(&T) -> &str,
{
    let prev: HashSet<&str> = prev_keys.iter().map(String::as_str).collect();
    let next_keys: HashSet<&str> = next.iter().map(|item| key(item)).collect();

    let mut plan = RenderPlan::default();
    for item in next {
        let k = key(item);
        if prev.contains(k) {
            plan.update.push(k.to_string());
        } else {
            plan.enter.push(k.to_string());
        }
    }
    for k in prev_keys {
        if !next_keys.contains(k.as_str()) {
            plan.exit.push(k.clone());
        }
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_previous_means_all_enter() {
        let plan = reconcile(&[], &["A", "B"], |k| *k);
        assert_eq!(plan.enter, keys(&["A", "B"]));
        assert!(plan.update.is_empty());
        assert!(plan.exit.is_empty());
    }

    #[test]
    fn partition_is_complete() {
        let prev = keys(&["A", "B", "C"]);
        let next = ["B", "D"];
        let plan = reconcile(&prev, &next, |k| *k);
        assert_eq!(plan.enter, keys(&["D"]));
        assert_eq!(plan.update, keys(&["B"]));
        assert_eq!(plan.exit, keys(&["A", "C"]));
    }

    #[test]
    fn disjoint_sets_fully_replace() {
        let prev = keys(&["A", "B"]);
        let next = ["C", "D"];
        let plan = reconcile(&prev, &next, |k| *k);
        assert_eq!(plan.enter, keys(&["C", "D"]));
        assert_eq!(plan.exit, keys(&["A", "B"]));
        assert!(!plan.is_stable());
    }

    #[test]
    fn identical_sets_are_stable() {
        let prev = keys(&["A", "B"]);
        let next = ["B", "A"]; // reordered only
        let plan = reconcile(&prev, &next, |k| *k);
        assert!(plan.is_stable());
        assert_eq!(plan.update, keys(&["B", "A"]));
    }
}
