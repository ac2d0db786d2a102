//! Wire models for the zKillboard API.

use serde::{Deserialize, Serialize};

/// One line of a character's kill history from `GET /api/characterID/{id}/`,
/// most-recent-first. The zkb hash is required to fetch full detail from
/// ESI's killmail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillHistoryEntry {
    pub killmail_id: i64,
    pub zkb: ZkbMetadata,
}

/// zKillboard-side metadata attached to a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZkbMetadata {
    pub hash: String,
}

/// Aggregate character statistics from `GET /api/stats/characterID/{id}/`.
///
/// zKillboard omits zero-valued fields from the response, so every counter
/// defaults to zero: a successfully fetched stats record always populates
/// all six counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterStats {
    pub danger_ratio: i64,
    pub gang_ratio: i64,
    pub ships_destroyed: i64,
    pub ships_lost: i64,
    pub solo_kills: i64,
    pub solo_losses: i64,
}
