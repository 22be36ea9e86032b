use super::YearSeries;

/// Result of a successful estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Annualized percentage figure.
    pub value: f64,
    /// Most recent non-forecast year the estimate refers to.
    pub reference_year: i32,
}

/// Derive a single headline percentage from a multi-year percent-change
/// series.
///
/// Behavior:
/// - Years beyond `current_year` are treated as forecasts and ignored; the
///   most recent remaining year becomes the reference year.
/// - A positive `window_years` restricts the input to that many consecutive
///   years ending at the reference year; zero disables windowing.
/// - Each percentage `p` is mapped to its log-growth `ln(1 + p/100)`; years
///   at or below -100 percent are skipped (undefined log).
/// - The result is the median log-growth converted back to a percentage.
///   Medianing in log space keeps single-year outliers from dragging the
///   figure the way an arithmetic mean of percentages would, while matching
///   the compounding nature of price-level change.
///
/// Returns `None` when no usable year remains at any step.
#[must_use]
pub fn estimate(series: &YearSeries, window_years: u32, current_year: i32) -> Option<Estimate> {
    let historical: Vec<(i32, f64)> = series.iter().filter(|&(year, _)| year <= current_year).collect();
    let (reference_year, _) = *historical.last()?;

    let cutoff = if window_years == 0 {
        i64::MIN
    } else {
        i64::from(reference_year) - i64::from(window_years) + 1
    };
    let windowed: Vec<f64> = historical
        .iter()
        .filter(|&&(year, _)| i64::from(year) >= cutoff)
        .map(|&(_, pct)| pct)
        .collect();
    if windowed.is_empty() {
        return None;
    }

    let mut logs: Vec<f64> = windowed
        .iter()
        .filter(|&&pct| pct > -100.0)
        .map(|&pct| (1.0 + pct / 100.0).ln())
        .collect();
    if logs.is_empty() {
        return None;
    }
    logs.sort_by(f64::total_cmp);

    let median = median_sorted(&logs);
    Some(Estimate {
        value: (median.exp() - 1.0) * 100.0,
        reference_year,
    })
}

/// Standard median over an already-sorted slice: the middle value for odd
/// counts, the mean of the two middle values for even counts.
fn median_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        f64::midpoint(sorted[mid - 1], sorted[mid])
    }
}
