//! Metric instruments for parameter lookups.
//!
//! Uses the globally-registered `MeterProvider`; without OTLP export the
//! instruments are no-ops.

use opentelemetry::metrics::{Counter, Histogram, Meter};

fn meter() -> Meter {
    opentelemetry::global::meter("burrito")
}

/// Counter: parameters written to the script.
pub fn parameters_resolved() -> Counter<u64> {
    meter()
        .u64_counter("burrito.parameters.resolved")
        .with_description("Number of parameters resolved and exported")
        .build()
}

/// Counter: parameters left out of the script.
/// Labels: `reason` ("not_found" | "unset_variable" | "invalid_variable" | "request").
pub fn parameters_skipped() -> Counter<u64> {
    meter()
        .u64_counter("burrito.parameters.skipped")
        .with_description("Number of parameters skipped after a failed lookup")
        .build()
}

/// Histogram: parameter store round trip in milliseconds.
pub fn lookup_duration_ms() -> Histogram<f64> {
    meter()
        .f64_histogram("burrito.lookup.duration_ms")
        .with_description("Parameter store lookup duration in milliseconds")
        .with_unit("ms")
        .build()
}
