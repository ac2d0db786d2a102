//! Data models for the aggregation core.
//!
//! `esi` and `zkill` hold the wire shapes consumed from the two remote
//! APIs; `player` holds the denormalized aggregate record handed to the UI.

pub mod esi;
pub mod player;
pub mod zkill;
