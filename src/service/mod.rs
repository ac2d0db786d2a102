//! The aggregation engine.
//!
//! `aggregator` owns the caller-facing fan-out and the observable
//! [`aggregator::Aggregation`] handle; `enrichment` holds the per-player
//! background chains.

pub mod aggregator;
pub(crate) mod enrichment;
