//! The incremental bar-chart display controller.
//!
//! Owns the full dataset, the working set currently on screen, the source
//! (insertion) order, and the reveal cursor. All methods are synchronous
//! and free of rendering concerns; the app crate re-renders after each
//! mutation.

use crate::reconcile::{reconcile, RenderPlan};
use crate::sort::{self, SortCriterion};
use vdv_data::province::ProvinceGrdp;

/// Controller for the add/remove/sort bar chart.
///
/// Invariants: working-set names are unique (the render key), the cursor
/// only ever advances, and the source order records exactly the sequence in
/// which records entered the working set.
#[derive(Debug, Clone)]
pub struct DisplayController {
    dataset: Vec<ProvinceGrdp>,
    working: Vec<ProvinceGrdp>,
    source_order: Vec<String>,
    cursor: usize,
    criterion: SortCriterion,
    rendered_keys: Vec<String>,
}

impl DisplayController {
    /// Build a controller revealing the first `initial_count` records.
    ///
    /// The initial slice is presented GRDP-descending and that presentation
    /// order seeds the source order, so the `Original` criterion restores
    /// the opening view.
    pub fn new(dataset: Vec<ProvinceGrdp>, initial_count: usize) -> Self {
        let cursor = initial_count.min(dataset.len());
        let mut working: Vec<ProvinceGrdp> = dataset[..cursor].to_vec();
        working.sort_by(|a, b| b.grdp.total_cmp(&a.grdp));
        let source_order = working.iter().map(|r| r.name.clone()).collect();
        DisplayController {
            dataset,
            working,
            source_order,
            cursor,
            criterion: SortCriterion::default(),
            rendered_keys: Vec::new(),
        }
    }

    /// Reveal the next unrevealed record. No-op when the dataset is
    /// exhausted; returns whether anything changed.
    pub fn add(&mut self) -> bool {
        if self.cursor >= self.dataset.len() {
            return false;
        }
        let record = self.dataset[self.cursor].clone();
        log::debug!("add: revealing {:?}", record.name);
        self.source_order.push(record.name.clone());
        self.working.push(record);
        self.cursor += 1;
        self.resort();
        true
    }

    /// Remove the most recently added record (the tail of the source
    /// order). No-op on an empty working set; the cursor never moves back,
    /// so a removed record is not revealed again. Returns the removed name.
    pub fn remove(&mut self) -> Option<String> {
        let name = self.source_order.pop()?;
        // The dataset has unique names; if a duplicate ever slips in, drop
        // the newest occurrence.
        if let Some(idx) = self.working.iter().rposition(|r| r.name == name) {
            self.working.remove(idx);
        }
        log::debug!("remove: dropped {:?}", name);
        self.resort();
        Some(name)
    }

    /// Switch the sort criterion and re-sort the working set. The source
    /// order and cursor are untouched.
    pub fn set_criterion(&mut self, criterion: SortCriterion) {
        self.criterion = criterion;
        self.resort();
    }

    fn resort(&mut self) {
        sort::apply(self.criterion, &mut self.working, &self.source_order);
    }

    /// The records currently displayed, in display order.
    pub fn working_set(&self) -> &[ProvinceGrdp] {
        &self.working
    }

    /// The active sort criterion.
    pub fn criterion(&self) -> SortCriterion {
        self.criterion
    }

    /// How many dataset records are still unrevealed.
    pub fn remaining(&self) -> usize {
        self.dataset.len() - self.cursor
    }

    /// The reveal cursor (next dataset index to be added).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Min/max GRDP over the *currently displayed* records, or `None` when
    /// the working set is empty. This is the color-scale domain: colors are
    /// relative to what is on screen, not to the full dataset.
    pub fn metric_extent(&self) -> Option<(f64, f64)> {
        let first = self.working.first()?.grdp;
        let extent = self.working.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.grdp), hi.max(r.grdp))
        });
        Some(extent)
    }

    /// Diff the working set against the previously rendered keys and
    /// remember the new keys for the next call.
    ///
    /// Returns `None` when the displayed keys are unchanged in both
    /// membership and order; records never change in place, so callers can
    /// skip the redraw entirely.
    pub fn render_plan(&mut self) -> Option<RenderPlan> {
        let plan = reconcile(&self.rendered_keys, &self.working, |r| r.name.as_str());
        let unchanged = plan.is_stable() && plan.update == self.rendered_keys;
        self.rendered_keys = self.working.iter().map(|r| r.name.clone()).collect();
        if unchanged {
            None
        } else {
            Some(plan)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, grdp: f64) -> ProvinceGrdp {
        ProvinceGrdp {
            name: name.to_string(),
            grdp,
        }
    }

    fn names(working: &[ProvinceGrdp]) -> Vec<&str> {
        working.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn initial_slice_is_grdp_descending() {
        let dataset = vec![record("A", 10.0), record("B", 30.0), record("C", 20.0)];
        let ctl = DisplayController::new(dataset, 2);
        assert_eq!(names(ctl.working_set()), vec!["B", "A"]);
        assert_eq!(ctl.cursor(), 2);
        assert_eq!(ctl.remaining(), 1);
    }

    #[test]
    fn add_is_a_noop_when_exhausted() {
        let dataset = vec![record("A", 10.0)];
        let mut ctl = DisplayController::new(dataset, 1);
        assert!(!ctl.add());
        assert_eq!(ctl.cursor(), 1);
        assert_eq!(ctl.working_set().len(), 1);
    }

    #[test]
    fn remove_is_a_noop_when_empty() {
        let mut ctl = DisplayController::new(Vec::new(), 5);
        assert_eq!(ctl.remove(), None);
        assert_eq!(ctl.cursor(), 0);
    }

    #[test]
    fn remove_does_not_move_the_cursor() {
        let dataset = vec![record("A", 10.0), record("B", 30.0), record("C", 20.0)];
        let mut ctl = DisplayController::new(dataset, 2);
        ctl.remove();
        assert_eq!(ctl.cursor(), 2);
        // The next add reveals C, not the removed record.
        assert!(ctl.add());
        assert!(names(ctl.working_set()).contains(&"C"));
    }

    #[test]
    fn spec_scenario_add_sort_remove() {
        // [A:10, B:30, C:20], reveal 2, Add, sort grdp-desc, Remove.
        let dataset = vec![record("A", 10.0), record("B", 30.0), record("C", 20.0)];
        let mut ctl = DisplayController::new(dataset, 2);
        assert!(ctl.add());
        ctl.set_criterion(SortCriterion::GrdpDesc);
        assert_eq!(names(ctl.working_set()), vec!["B", "C", "A"]);
        // Remove pops the insertion-ordered last record, which is C.
        assert_eq!(ctl.remove(), Some("C".to_string()));
        assert_eq!(names(ctl.working_set()), vec!["B", "A"]);
    }

    #[test]
    fn original_recovers_add_order_without_removals() {
        let dataset = vec![
            record("A", 10.0),
            record("B", 30.0),
            record("C", 20.0),
            record("D", 25.0),
        ];
        let mut ctl = DisplayController::new(dataset, 2);
        let opening: Vec<String> = ctl
            .working_set()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        ctl.add();
        ctl.add();
        ctl.set_criterion(SortCriterion::NameAsc);
        ctl.set_criterion(SortCriterion::Original);
        let mut expected = opening;
        expected.extend(["C".to_string(), "D".to_string()]);
        let got: Vec<String> = ctl
            .working_set()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn working_and_source_stay_in_step() {
        let dataset = vec![record("A", 10.0), record("B", 30.0), record("C", 20.0)];
        let mut ctl = DisplayController::new(dataset, 2);
        ctl.add();
        ctl.set_criterion(SortCriterion::GrdpAsc);
        ctl.remove();
        ctl.remove();
        assert_eq!(ctl.working_set().len(), ctl.source_order.len());
    }

    #[test]
    fn metric_extent_tracks_the_displayed_set() {
        let dataset = vec![record("A", 10.0), record("B", 30.0), record("C", 20.0)];
        let mut ctl = DisplayController::new(dataset, 3);
        assert_eq!(ctl.metric_extent(), Some((10.0, 30.0)));
        // The source order is [B, C, A] (descending seed), so the first
        // remove drops A and narrows the color domain.
        ctl.remove();
        assert_eq!(ctl.metric_extent(), Some((20.0, 30.0)));
        ctl.remove();
        assert_eq!(ctl.metric_extent(), Some((30.0, 30.0)));
    }

    #[test]
    fn render_plan_tracks_enters_and_exits() {
        let dataset = vec![record("A", 10.0), record("B", 30.0), record("C", 20.0)];
        let mut ctl = DisplayController::new(dataset, 2);
        let first = ctl.render_plan().unwrap();
        assert_eq!(first.enter.len(), 2);
        assert!(first.exit.is_empty());

        ctl.add();
        let second = ctl.render_plan().unwrap();
        assert_eq!(second.enter, vec!["C".to_string()]);
        assert_eq!(second.update.len(), 2);

        ctl.remove();
        let third = ctl.render_plan().unwrap();
        assert_eq!(third.exit, vec!["C".to_string()]);
    }

    #[test]
    fn render_plan_is_none_when_the_view_is_unchanged() {
        let dataset = vec![record("A", 10.0), record("B", 30.0), record("C", 20.0)];
        let mut ctl = DisplayController::new(dataset, 2);
        assert!(ctl.render_plan().is_some());
        // The opening view is already GRDP-descending, so selecting that
        // criterion changes nothing on screen.
        ctl.set_criterion(SortCriterion::GrdpDesc);
        assert!(ctl.render_plan().is_none());
        // A reorder with the same membership is a stable plan, but it still
        // needs a redraw.
        ctl.set_criterion(SortCriterion::NameAsc);
        let plan = ctl.render_plan().unwrap();
        assert!(plan.is_stable());
    }
}
