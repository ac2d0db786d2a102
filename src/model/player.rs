//! The denormalized player record shared between the caller and the
//! background enrichment chains.
//!
//! Identity fields are fixed at creation and immutable. Everything else
//! lives behind a single `RwLock` and transitions from absent to present
//! at most once, written only by the chain that owns the field group:
//! statistics fields by the statistics chain, standing/birthday and
//! corporation/alliance names by the profile chain, latest activity by
//! the history chain. Writers never hold the lock across an await.

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::model::zkill::CharacterStats;

/// The enrichment field groups a chain can populate, used to tag update
/// events so observers know which fields just appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    /// Danger/gang ratios and kill/loss counters.
    Statistics,
    /// Security standing and birthday.
    Profile,
    /// Corporation and alliance names.
    Affiliation,
    /// The latest-kill narrative.
    LatestActivity,
}

/// One field-group population event emitted by an enrichment chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentUpdate {
    pub character_id: i64,
    pub group: FieldGroup,
}

/// Narrative of a player's most recent kill, all IDs resolved to display
/// names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestActivity {
    pub date: DateTime<Utc>,
    pub victim_name: String,
    pub victim_ship: String,
    pub attacker_name: String,
    pub attacker_ship: String,
    pub attacker_weapon: String,
    pub solar_system: String,
}

/// Killboard-derived detail for one player. Every field stays `None` until
/// its owning chain completes; a failed chain leaves its fields unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDetails {
    pub danger_ratio: Option<i64>,
    pub gang_ratio: Option<i64>,
    pub ships_destroyed: Option<i64>,
    pub ships_lost: Option<i64>,
    pub solo_kills: Option<i64>,
    pub solo_losses: Option<i64>,
    pub birthday: Option<DateTime<Utc>>,
    pub latest_activity: Option<LatestActivity>,
}

/// The mutable half of a [`PlayerRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerEnrichment {
    pub security_standing: Option<f64>,
    pub corporation_name: Option<String>,
    pub alliance_name: Option<String>,
    pub details: PlayerDetails,
}

/// One aggregated player, shared as `Arc<PlayerRecord>` between the
/// returned record set and the detached enrichment task.
#[derive(Debug)]
pub struct PlayerRecord {
    character_id: i64,
    character_name: String,
    portrait_url: String,
    enrichment: RwLock<PlayerEnrichment>,
}

impl PlayerRecord {
    pub(crate) fn new(character_id: i64, character_name: String, portrait_url: String) -> Self {
        Self {
            character_id,
            character_name,
            portrait_url,
            enrichment: RwLock::new(PlayerEnrichment::default()),
        }
    }

    pub fn character_id(&self) -> i64 {
        self.character_id
    }

    pub fn character_name(&self) -> &str {
        &self.character_name
    }

    /// Image-server URL for the character portrait. Best-effort: the UI
    /// resolves it and falls back to a placeholder if it is dead.
    pub fn portrait_url(&self) -> &str {
        &self.portrait_url
    }

    /// A point-in-time copy of the enrichment state.
    pub fn snapshot(&self) -> PlayerEnrichment {
        self.enrichment
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn set_statistics(&self, stats: &CharacterStats) {
        let mut enrichment = self.write();
        let details = &mut enrichment.details;
        details.danger_ratio = Some(stats.danger_ratio);
        details.gang_ratio = Some(stats.gang_ratio);
        details.ships_destroyed = Some(stats.ships_destroyed);
        details.ships_lost = Some(stats.ships_lost);
        details.solo_kills = Some(stats.solo_kills);
        details.solo_losses = Some(stats.solo_losses);
    }

    pub(crate) fn set_profile(&self, security_standing: Option<f64>, birthday: DateTime<Utc>) {
        let mut enrichment = self.write();
        enrichment.security_standing = security_standing;
        enrichment.details.birthday = Some(birthday);
    }

    pub(crate) fn set_affiliation(&self, corporation: Option<String>, alliance: Option<String>) {
        let mut enrichment = self.write();
        enrichment.corporation_name = corporation;
        enrichment.alliance_name = alliance;
    }

    pub(crate) fn set_latest_activity(&self, activity: LatestActivity) {
        self.write().details.latest_activity = Some(activity);
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, PlayerEnrichment> {
        self.enrichment
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
