//! Nearest-sample lookup for the multi-line focus markers.

use chrono::NaiveDate;
use vdv_data::covid::SeriesPoint;

/// Find the first sample at or after `probe` in a date-ascending series.
///
/// This is the bisector lookup the line chart's hover uses: the pointer's
/// x-position inverts to a date and each country's focus marker snaps
/// forward to the nearest sample. Returns `None` past the end of the
/// series.
pub fn nearest_at_or_after(points: &[SeriesPoint], probe: NaiveDate) -> Option<&SeriesPoint> {
    let idx = points.partition_point(|p| p.date < probe);
    points.get(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: u32, cases: u32) -> SeriesPoint {
        SeriesPoint {
            date: NaiveDate::from_ymd_opt(2020, 4, day).unwrap(),
            cases,
        }
    }

    fn probe(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 4, day).unwrap()
    }

    #[test]
    fn exact_hit_returns_that_sample() {
        let points = vec![point(1, 10), point(3, 20), point(5, 30)];
        assert_eq!(nearest_at_or_after(&points, probe(3)), Some(&points[1]));
    }

    #[test]
    fn between_samples_snaps_forward() {
        let points = vec![point(1, 10), point(3, 20), point(5, 30)];
        assert_eq!(nearest_at_or_after(&points, probe(2)), Some(&points[1]));
        assert_eq!(nearest_at_or_after(&points, probe(4)), Some(&points[2]));
    }

    #[test]
    fn before_the_series_returns_the_first_sample() {
        let points = vec![point(10, 10), point(12, 20)];
        assert_eq!(nearest_at_or_after(&points, probe(1)), Some(&points[0]));
    }

    #[test]
    fn past_the_end_returns_none() {
        let points = vec![point(1, 10), point(3, 20)];
        assert_eq!(nearest_at_or_after(&points, probe(4)), None);
        assert_eq!(nearest_at_or_after(&[], probe(1)), None);
    }
}
