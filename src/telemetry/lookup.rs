//! Span helpers for parameter lookups.

use tracing::Span;

/// Start a span for resolving one variable.
///
/// `lookup.key` and `lookup.outcome` are declared empty and filled in by
/// the resolver. The key is recorded; the value never is.
pub fn start_lookup_span(variable: &str) -> Span {
    tracing::info_span!(
        "parameter.lookup",
        "lookup.variable" = variable,
        "lookup.key" = tracing::field::Empty,
        "lookup.outcome" = tracing::field::Empty,
    )
}

/// Record the lookup key on a span from [`start_lookup_span`].
pub fn record_key(span: &Span, key: &str) {
    span.record("lookup.key", key);
}

/// Record the lookup outcome ("resolved" or a skip reason).
pub fn record_outcome(span: &Span, outcome: &str) {
    span.record("lookup.outcome", outcome);
}
