use moneta_core::MonetaError;

#[test]
fn messages_carry_the_failing_source() {
    let e = MonetaError::source_failure("moneta-worldbank", "connection refused");
    assert_eq!(e.to_string(), "moneta-worldbank failed: connection refused");

    let e = MonetaError::source_timeout("moneta-ecb", "reference-rate");
    assert_eq!(e.to_string(), "source timed out: reference-rate via moneta-ecb");
}

#[test]
fn not_found_and_unsupported_are_descriptive() {
    assert_eq!(
        MonetaError::not_found("reference rate for ARS").to_string(),
        "not found: reference rate for ARS"
    );
    assert_eq!(
        MonetaError::unsupported("country-meta").to_string(),
        "unsupported capability: country-meta"
    );
}

#[test]
fn aggregates_wrap_the_individual_failures() {
    let e = MonetaError::AllSourcesFailed(vec![
        MonetaError::not_found("a"),
        MonetaError::source_failure("b", "boom"),
    ]);
    let msg = e.to_string();
    assert!(msg.contains("all sources failed"));
    assert!(msg.contains("boom"));
}
