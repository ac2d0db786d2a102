//! Error types for the aggregation core.
//!
//! Errors are split by how far they travel: [`ResolutionError`] is the only
//! error that crosses the caller boundary (without resolved IDs no records
//! can be built), [`RemoteError`] describes a single failed remote call, and
//! [`EnrichmentError`] stays inside the background enrichment chains where
//! every failure is logged and absorbed into an unpopulated field group.

use thiserror::Error;

/// Configuration error (missing environment variable).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Failure of a single remote call against ESI or zKillboard.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Network-level failure or undecodable response body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("{service} returned HTTP {status} for {url}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Failure of the initial batched name-to-ID resolution.
///
/// This is the only failure `aggregate_for` surfaces; partial resolution
/// (some names unknown) is not an error, unresolved names are dropped.
#[derive(Error, Debug)]
#[error("failed to resolve player names to character IDs: {0}")]
pub struct ResolutionError(#[from] pub RemoteError);

/// Outcome of one step of a background enrichment chain.
///
/// The `Remote` variant is a real failure; the rest describe data that is
/// legitimately absent (empty history, structure/NPC killmails). Neither
/// kind propagates: the chain logs it and leaves its field group unset.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("kill history is empty")]
    NoKillHistory,
    #[error("no kill history entry matched the kill filter")]
    NoMatchingKill,
    #[error("killmail has no final-blow attacker")]
    NoFinalBlow,
    #[error("killmail victim or final-blow attacker carries no character/ship/weapon ID")]
    MissingParticipant,
    #[error("name resolution response is missing ID {0}")]
    UnresolvedName(i64),
}

impl EnrichmentError {
    /// Whether this is a normal "nothing to show" outcome rather than a
    /// failed lookup. Data-absent outcomes are logged at debug, the rest
    /// at warn.
    pub fn is_data_absent(&self) -> bool {
        matches!(
            self,
            Self::NoKillHistory | Self::NoMatchingKill | Self::NoFinalBlow | Self::MissingParticipant
        )
    }
}
