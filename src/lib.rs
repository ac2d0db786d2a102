//! Player intel aggregation core for EVE Online local scans.
//!
//! Looks up player names against ESI, fans out character, killboard history
//! and killboard statistics lookups per resolved player, and merges the
//! results into shared [`model::player::PlayerRecord`]s. Primary identity
//! data is returned immediately; everything else is filled in by detached,
//! cancellable background enrichment observable through
//! [`service::aggregator::Aggregation`].

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod util;

pub use config::Config;
pub use service::aggregator::{Aggregation, PlayerInformationAggregator};
