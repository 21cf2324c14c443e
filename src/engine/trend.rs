use serde::Serialize;

use crate::error::{Error, Result};

/// Percent change of the last element of `series` against the element `k`
/// positions earlier.
///
/// Lookback is index-based and assumes one point per sampling interval
/// (daily for the TVL feeds), so `k = 7` means "a week ago" only on a
/// gapless daily series. Two defaults are part of the contract, not error
/// recovery: a series shorter than `k + 1` reports 0% (insufficient history
/// is not extrapolated), and a zero reference reports 0% (never NaN or
/// infinity).
pub fn percent_change(series: &[f64], k: usize) -> f64 {
    let current = match series.last() {
        Some(current) => *current,
        None => return 0.0,
    };
    let n = series.len() - 1;
    // Insufficient history: compare the current value to itself.
    let reference = if n >= k { series[n - k] } else { current };
    if reference == 0.0 {
        return 0.0;
    }
    (current - reference) / reference * 100.0
}

/// Current value of an ordered series plus its short-horizon changes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendSummary {
    pub current: f64,
    pub change_1d: f64,
    pub change_7d: f64,
}

impl TrendSummary {
    /// Derive from an ascending series. An empty series is an impossible
    /// state for the feeds this runs on (history endpoints always return at
    /// least one point), so it is guarded as a derivation error.
    pub fn from_series(series: &[f64]) -> Result<Self> {
        let current = series
            .last()
            .copied()
            .ok_or_else(|| Error::Derivation("empty series, no current value".to_string()))?;
        Ok(Self {
            current,
            change_1d: percent_change(series, 1),
            change_7d: percent_change(series, 7),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_matches_definition() {
        let series = [100.0, 110.0, 99.0];
        let expected = (99.0 - 110.0) / 110.0 * 100.0;
        assert_eq!(percent_change(&series, 1), expected);
    }

    #[test]
    fn percent_change_short_series_is_zero() {
        let series = [80.0, 90.0];
        assert_eq!(percent_change(&series, 7), 0.0);
        assert_eq!(percent_change(&[42.0], 1), 0.0);
        assert_eq!(percent_change(&[], 1), 0.0);
    }

    #[test]
    fn percent_change_zero_reference_is_zero_not_infinite() {
        let series = [0.0, 50.0];
        let change = percent_change(&series, 1);
        assert_eq!(change, 0.0);
        assert!(change.is_finite());
    }

    #[test]
    fn percent_change_accepts_arbitrary_lookback() {
        let series = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(percent_change(&series, 4), 400.0);
        assert_eq!(percent_change(&series, 2), (50.0 - 30.0) / 30.0 * 100.0);
    }

    #[test]
    fn trend_summary_daily_and_weekly_changes() {
        // Eight daily points: last = 80, prior day = 99, week ago = 100.
        let series = [100.0, 110.0, 99.0, 105.0, 102.0, 95.0, 99.0, 80.0];
        let summary = TrendSummary::from_series(&series).unwrap();
        assert_eq!(summary.current, 80.0);
        assert!((summary.change_1d - (80.0 - 99.0) / 99.0 * 100.0).abs() < 1e-9);
        assert!((summary.change_7d - -20.0).abs() < 1e-9);
    }

    #[test]
    fn trend_summary_rejects_empty_series() {
        assert!(matches!(
            TrendSummary::from_series(&[]),
            Err(Error::Derivation(_))
        ));
    }
}
