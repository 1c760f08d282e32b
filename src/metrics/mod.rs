//! Metrics module
//!
//! Prometheus counters for authorizer decisions.

use crate::authorizer::Outcome;
use lazy_static::lazy_static;
use prometheus::{register_counter_vec, CounterVec, Encoder, TextEncoder};

lazy_static! {
    pub static ref DECISIONS_TOTAL: CounterVec = register_counter_vec!(
        "authorizer_decisions_total",
        "Authorization decisions by outcome",
        &["outcome"] // allow, deny, no_policy, unauthorized, invalid_token
    ).unwrap();
}

/// Record a decision
pub fn record_decision(outcome: &Outcome) {
    DECISIONS_TOTAL.with_label_values(&[outcome.label()]).inc();
}

/// Render the default registry in the Prometheus text exposition format
pub fn gather_text() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&prometheus::gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
