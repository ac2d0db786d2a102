//! Wire models for the ESI endpoints the aggregator consumes.
//!
//! Only the fields the aggregation pipeline reads are modeled; everything
//! else in the responses is ignored. Optional fields stay `Option`
//! because ESI genuinely omits them (characters without an alliance,
//! structure victims and NPC attackers without a character ID).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One resolved (ID, display name) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedId {
    pub id: i64,
    pub name: String,
}

/// Response body of `POST /universe/ids/`.
///
/// ESI buckets resolved names by category and omits empty buckets; only
/// the characters bucket is consumed. Names that did not resolve simply
/// do not appear, which is how unresolvable player names get dropped
/// without an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniverseIds {
    #[serde(default)]
    pub characters: Vec<NamedId>,
}

/// One element of the `POST /universe/names/` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRef {
    pub category: String,
    pub id: i64,
    pub name: String,
}

/// Public character information from `GET /characters/{id}/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterPublicInfo {
    pub name: String,
    pub corporation_id: i64,
    #[serde(default)]
    pub alliance_id: Option<i64>,
    #[serde(default)]
    pub security_status: Option<f64>,
    pub birthday: DateTime<Utc>,
}

/// Full killmail detail from `GET /killmails/{id}/{hash}/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Killmail {
    pub killmail_time: DateTime<Utc>,
    pub solar_system_id: i64,
    pub victim: Victim,
    pub attackers: Vec<Attacker>,
}

/// Killmail victim; structures have no character ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Victim {
    #[serde(default)]
    pub character_id: Option<i64>,
    pub ship_type_id: i64,
}

/// One killmail attacker; NPC entries omit character, ship and weapon IDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attacker {
    #[serde(default)]
    pub character_id: Option<i64>,
    #[serde(default)]
    pub ship_type_id: Option<i64>,
    #[serde(default)]
    pub weapon_type_id: Option<i64>,
    #[serde(default)]
    pub final_blow: bool,
}
