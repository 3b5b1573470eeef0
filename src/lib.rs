//! Cost and timeline estimates for visa applications.
//!
//! Questionnaire answers are turned into a cost breakdown
//! ([`services::cost_aggregator`]) and a four-phase timeline
//! ([`services::timeline_allocator`]). Both calculations are pure; the
//! `commands` module wires them to YAML input, reports and charts.

pub mod commands;
pub mod domain;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;
