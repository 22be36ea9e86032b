mod helpers;

use helpers::{MockConnector, country, currency, date};
use moneta::Moneta;
use moneta_core::MonetaError;

#[tokio::test]
async fn reference_currency_country_is_pinned_to_exactly_one() {
    // The rate source reports noise for EUR; it must never be consulted.
    let source = MockConnector::builder()
        .name("all")
        .returns_meta("EUR", "IRL")
        .rate_fn(|_, _| panic!("rate source must not be consulted for the reference currency"))
        .returns_latest(2.1, 2024)
        .returns_series(&[(2022, 8.1), (2023, 5.2), (2024, 2.1)])
        .build();

    let moneta = Moneta::builder().with_connector(source).build().unwrap();
    let record = moneta
        .country_record(&country("IE"), None, date(2025, 10, 15))
        .await;

    let fx = record.fx.expect("fx populated");
    assert_eq!(fx.rate, 1.0);
    assert_eq!(fx.as_of, Some(date(2025, 10, 15)));
}

#[tokio::test]
async fn the_document_currency_beats_the_provider_currency() {
    let source = MockConnector::builder()
        .name("all")
        .returns_meta("USD", "IRL")
        .rate_fn(|_, _| panic!("rate source must not be consulted for the reference currency"))
        .build();

    let moneta = Moneta::builder().with_connector(source).build().unwrap();
    let record = moneta
        .country_record(&country("IE"), Some(currency("EUR")), date(2025, 10, 15))
        .await;

    assert_eq!(record.currency, Some(currency("EUR")));
    assert_eq!(record.fx.map(|fx| fx.rate), Some(1.0));
}

#[tokio::test]
async fn non_reference_currencies_resolve_through_the_rate_sources() {
    let source = MockConnector::builder()
        .name("all")
        .returns_meta("ARS", "ARG")
        .returns_rate(1616.4)
        .build();

    let moneta = Moneta::builder().with_connector(source).build().unwrap();
    let record = moneta
        .country_record(&country("AR"), None, date(2025, 10, 15))
        .await;

    assert_eq!(record.currency, Some(currency("ARS")));
    let fx = record.fx.expect("fx populated");
    assert!((fx.rate - 1616.4).abs() < 1e-12);
}

#[tokio::test]
async fn the_series_estimate_feeds_the_headline_figure() {
    let source = MockConnector::builder()
        .name("all")
        .returns_meta("EUR", "IRL")
        .returns_series(&[
            (2018, 1.2),
            (2019, 2.0),
            (2020, 50.0),
            (2021, 3.1),
            (2022, 2.8),
        ])
        .latest_fn(|_, _| panic!("scalar source must not be consulted when the estimate succeeds"))
        .build();

    let moneta = Moneta::builder().with_connector(source).build().unwrap();
    let record = moneta
        .country_record(&country("IE"), None, date(2023, 6, 1))
        .await;

    let inflation = record.inflation.expect("inflation populated");
    assert!((inflation.value - 2.8).abs() < 1e-9);
    assert_eq!(inflation.year, Some(2022));
    assert!(record.inflation_series.is_some());
}

#[tokio::test]
async fn an_absent_series_estimate_falls_back_to_the_scalar() {
    let source = MockConnector::builder()
        .name("all")
        .returns_meta("EUR", "IRL")
        .series_fn(|_, _| Err(MonetaError::not_found("no series")))
        .returns_latest(5.21, 2023)
        .build();

    let moneta = Moneta::builder().with_connector(source).build().unwrap();
    let record = moneta
        .country_record(&country("IE"), None, date(2025, 1, 1))
        .await;

    let inflation = record.inflation.expect("inflation populated");
    assert!((inflation.value - 5.21).abs() < 1e-12);
    assert_eq!(inflation.year, Some(2023));
    assert!(record.inflation_series.is_none());
}

#[tokio::test]
async fn alpha3_from_metadata_reaches_later_lookups() {
    let source = MockConnector::builder()
        .name("all")
        .returns_meta("EUR", "IRL")
        .series_fn(|country, _| {
            assert_eq!(country.alpha3.as_deref(), Some("IRL"));
            Ok([(2023, 5.2)].into_iter().collect())
        })
        .build();

    let moneta = Moneta::builder().with_connector(source).build().unwrap();
    let record = moneta
        .country_record(&country("IE"), None, date(2025, 1, 1))
        .await;
    assert!(record.inflation_series.is_some());
}

#[tokio::test]
async fn every_source_failing_still_yields_a_record() {
    let broken = MockConnector::builder()
        .name("broken")
        .meta_fn(|_| Err(MonetaError::source_failure("broken", "down")))
        .latest_fn(|_, _| Err(MonetaError::source_failure("broken", "down")))
        .series_fn(|_, _| Err(MonetaError::source_failure("broken", "down")))
        .rate_fn(|_, _| Err(MonetaError::source_failure("broken", "down")))
        .build();

    let moneta = Moneta::builder().with_connector(broken).build().unwrap();
    let record = moneta
        .country_record(&country("IE"), None, date(2025, 1, 1))
        .await;

    assert_eq!(record.country, country("IE"));
    assert!(record.currency.is_none());
    assert!(record.inflation.is_none());
    assert!(record.ppp.is_none());
    assert!(record.fx.is_none());
    assert!(record.inflation_series.is_none());
}
