//! Sort criteria for the incremental bar chart.

use vdv_data::province::ProvinceGrdp;

/// The four orderings offered by the bar chart's sort selector.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SortCriterion {
    /// Ascending by each record's rank in the source (insertion) order.
    #[default]
    Original,
    /// Lexicographic ascending by province name.
    NameAsc,
    /// Numeric descending by GRDP.
    GrdpDesc,
    /// Numeric ascending by GRDP.
    GrdpAsc,
}

impl SortCriterion {
    /// Parse a `<select>` option value; unknown values fall back to
    /// `Original` rather than erroring.
    pub fn from_value(value: &str) -> SortCriterion {
        match value {
            "name-asc" => SortCriterion::NameAsc,
            "grdp-desc" => SortCriterion::GrdpDesc,
            "grdp-asc" => SortCriterion::GrdpAsc,
            _ => SortCriterion::Original,
        }
    }

    /// The `<select>` option value for this criterion.
    pub fn value(&self) -> &'static str {
        match self {
            SortCriterion::Original => "original",
            SortCriterion::NameAsc => "name-asc",
            SortCriterion::GrdpDesc => "grdp-desc",
            SortCriterion::GrdpAsc => "grdp-asc",
        }
    }

    /// Human-readable label for the selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortCriterion::Original => "Original order",
            SortCriterion::NameAsc => "Name (A-Z)",
            SortCriterion::GrdpDesc => "GRDP (high to low)",
            SortCriterion::GrdpAsc => "GRDP (low to high)",
        }
    }

    /// All criteria, in selector display order.
    pub fn all() -> [SortCriterion; 4] {
        [
            SortCriterion::Original,
            SortCriterion::NameAsc,
            SortCriterion::GrdpDesc,
            SortCriterion::GrdpAsc,
        ]
    }
}

/// Re-sort the working set in place under `criterion`.
///
/// `source_order` is the insertion history; `Original` ranks by the first
/// index of each name there (records missing from it sort last). All sorts
/// are stable, so reapplying a criterion never reshuffles equal records.
pub fn apply(criterion: SortCriterion, working: &mut [ProvinceGrdp], source_order: &[String]) {
    match criterion {
        SortCriterion::NameAsc => working.sort_by(|a, b| a.name.cmp(&b.name)),
        SortCriterion::GrdpDesc => working.sort_by(|a, b| b.grdp.total_cmp(&a.grdp)),
        SortCriterion::GrdpAsc => working.sort_by(|a, b| a.grdp.total_cmp(&b.grdp)),
        SortCriterion::Original => working.sort_by_key(|record| {
            source_order
                .iter()
                .position(|name| *name == record.name)
                .unwrap_or(usize::MAX)
        }),
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

    #[test]
    fn from_value_round_trips() {
        for criterion in SortCriterion::all() {
            assert_eq!(SortCriterion::from_value(criterion.value()), criterion);
        }
        assert_eq!(SortCriterion::from_value("bogus"), SortCriterion::Original);
    }

    #[test]
    fn grdp_desc_orders_numerically() {
        let mut working = vec![record("A", 10.0), record("B", 30.0), record("C", 20.0)];
        apply(SortCriterion::GrdpDesc, &mut working, &[]);
        let names: Vec<&str> = working.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn original_ranks_by_source_order() {
        let mut working = vec![record("C", 20.0), record("A", 10.0), record("B", 30.0)];
        let source: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        apply(SortCriterion::Original, &mut working, &source);
        let names: Vec<&str> = working.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut once = vec![record("B", 30.0), record("A", 10.0), record("C", 20.0)];
        apply(SortCriterion::NameAsc, &mut once, &[]);
        let mut twice = once.clone();
        apply(SortCriterion::NameAsc, &mut twice, &[]);
        assert_eq!(once, twice);
    }
}
