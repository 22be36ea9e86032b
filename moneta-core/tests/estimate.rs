use moneta_core::{YearSeries, estimate};

fn series(entries: &[(i32, f64)]) -> YearSeries {
    entries.iter().copied().collect()
}

#[test]
fn outlier_year_does_not_drag_the_estimate() {
    // One hyperinflation-style year in an otherwise calm series; the naive
    // arithmetic mean would land near 11.8%.
    let s = series(&[
        (2018, 1.2),
        (2019, 2.0),
        (2020, 50.0),
        (2021, 3.1),
        (2022, 2.8),
    ]);
    let est = estimate(&s, 5, 2023).expect("estimate");
    assert_eq!(est.reference_year, 2022);
    // median of the log-growth values is the 2.8% year
    assert!((est.value - 2.8).abs() < 1e-9, "got {}", est.value);
    assert!(est.value < 5.0);
}

#[test]
fn forecast_years_are_excluded() {
    let s = series(&[(2022, 3.0), (2024, 99.0), (2029, 80.0)]);
    let est = estimate(&s, 5, 2023).expect("estimate");
    assert_eq!(est.reference_year, 2022);
    assert!((est.value - 3.0).abs() < 1e-9);
}

#[test]
fn all_forecast_series_yields_absent() {
    let s = series(&[(2030, 2.0), (2031, 2.5)]);
    assert!(estimate(&s, 5, 2023).is_none());
}

#[test]
fn empty_series_yields_absent() {
    assert!(estimate(&YearSeries::new(), 5, 2023).is_none());
}

#[test]
fn window_restricts_to_recent_years() {
    // The year 2000 spike is outside a 2-year window ending 2022.
    let s = series(&[(2000, 40.0), (2021, 2.0), (2022, 4.0)]);
    let est = estimate(&s, 2, 2025).expect("estimate");
    assert_eq!(est.reference_year, 2022);
    let expected = ((1.02f64 * 1.04).sqrt() - 1.0) * 100.0;
    assert!((est.value - expected).abs() < 1e-9);
}

#[test]
fn zero_window_uses_all_historical_years() {
    let s = series(&[(2000, 40.0), (2021, 2.0), (2022, 4.0)]);
    let est = estimate(&s, 0, 2025).expect("estimate");
    // odd count, median is the 4% year
    assert!((est.value - 4.0).abs() < 1e-9);
}

#[test]
fn even_count_takes_the_middle_pair() {
    let s = series(&[(2021, 2.0), (2022, 4.0)]);
    let est = estimate(&s, 0, 2025).expect("estimate");
    let expected = ((1.02f64 * 1.04).sqrt() - 1.0) * 100.0;
    assert!((est.value - expected).abs() < 1e-9);
}

#[test]
fn total_collapse_years_are_skipped() {
    let s = series(&[(2020, -100.0), (2021, -250.0), (2022, 2.0)]);
    let est = estimate(&s, 5, 2023).expect("estimate");
    assert!((est.value - 2.0).abs() < 1e-9);
}

#[test]
fn only_collapse_years_yield_absent() {
    let s = series(&[(2020, -100.0), (2021, -250.0)]);
    assert!(estimate(&s, 5, 2023).is_none());
}
