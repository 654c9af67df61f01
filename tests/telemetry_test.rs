//! Integration tests for telemetry initialization and span helpers.

#[test]
fn telemetry_initializes_without_endpoint() {
    // The global subscriber can only be set once per process; a second
    // init returning Err is acceptable.
    let config = burrito::telemetry::TelemetryConfig {
        endpoint: None,
        service_name: "burrito-test".to_string(),
        log_level: "debug".to_string(),
    };
    let guard = burrito::telemetry::init_telemetry(config);
    if let Ok(guard) = guard {
        guard.force_flush();
    }
}

#[test]
fn lookup_span_records_key_and_outcome() {
    let span = burrito::telemetry::lookup::start_lookup_span("DB_PASS");
    burrito::telemetry::lookup::record_key(&span, "prod/db/password");
    burrito::telemetry::lookup::record_outcome(&span, "resolved");
}

#[test]
fn metric_instruments_work_without_exporter() {
    use opentelemetry::KeyValue;

    burrito::telemetry::metrics::parameters_resolved().add(1, &[]);
    burrito::telemetry::metrics::parameters_skipped()
        .add(1, &[KeyValue::new("reason", "not_found")]);
    burrito::telemetry::metrics::lookup_duration_ms().record(1.5, &[]);
}
