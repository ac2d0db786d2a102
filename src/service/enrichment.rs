//! Per-player background enrichment chains.
//!
//! Three chains run concurrently per player and own disjoint field groups
//! of the shared record:
//! - statistics: killboard stats -> ratio/counter fields;
//! - profile: character profile -> standing/birthday, then one batched
//!   name lookup -> corporation/alliance names;
//! - latest activity: kill history -> killmail detail -> one batched name
//!   lookup -> the narrative block.
//!
//! Chains are mutually unordered; within the activity chain each step
//! strictly follows the previous one. Every failure is logged with the
//! character ID and absorbed: the chain's field group stays unpopulated
//! and nothing propagates out of the detached task.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::{
    data::{esi::EsiRepository, zkillboard::ZkillboardRepository},
    error::EnrichmentError,
    model::{
        esi::{Killmail, NameRef},
        player::{EnrichmentUpdate, FieldGroup, LatestActivity, PlayerRecord},
    },
    service::aggregator::KillFilter,
    util::eve::filter_valid_entity_ids,
};

/// Everything one player's enrichment task needs.
pub(crate) struct EnrichmentContext {
    pub esi: Arc<EsiRepository>,
    pub zkillboard: Arc<ZkillboardRepository>,
    pub record: Arc<PlayerRecord>,
    pub kill_filter: Option<KillFilter>,
    pub updates: UnboundedSender<EnrichmentUpdate>,
    pub cancel: CancellationToken,
}

/// Entry point of one player's detached enrichment task: runs the three
/// chains concurrently, raced against the cancellation token.
pub(crate) async fn enrich_player(context: EnrichmentContext) {
    tokio::select! {
        _ = context.cancel.cancelled() => {
            tracing::debug!(
                character_id = context.record.character_id(),
                "enrichment cancelled"
            );
        }
        _ = async {
            tokio::join!(
                enrich_statistics(&context),
                enrich_profile(&context),
                enrich_latest_activity(&context),
            );
        } => {}
    }
}

async fn enrich_statistics(context: &EnrichmentContext) {
    let character_id = context.record.character_id();
    match context.zkillboard.get_stats(character_id).await {
        Ok(stats) => {
            context.record.set_statistics(&stats);
            notify(context, FieldGroup::Statistics);
        }
        Err(error) => {
            tracing::warn!(character_id, %error, "killboard statistics enrichment failed");
        }
    }
}

/// Standing and birthday come straight from the profile; corporation and
/// alliance names need a second, batched lookup. A failed lookup leaves
/// the names unset but keeps the standing that was already written.
async fn enrich_profile(context: &EnrichmentContext) {
    let character_id = context.record.character_id();
    let profile = match context.esi.get_character(character_id).await {
        Ok(profile) => profile,
        Err(error) => {
            tracing::warn!(character_id, %error, "character profile enrichment failed");
            return;
        }
    };

    context
        .record
        .set_profile(profile.security_status, profile.birthday);
    notify(context, FieldGroup::Profile);

    let entity_ids = filter_valid_entity_ids(&[Some(profile.corporation_id), profile.alliance_id]);
    if entity_ids.is_empty() {
        return;
    }

    let names = match context.esi.resolve_names(&entity_ids).await {
        Ok(names) => names,
        Err(error) => {
            tracing::warn!(character_id, %error, "corporation/alliance name lookup failed");
            return;
        }
    };

    let corporation = name_of(&names, profile.corporation_id);
    let alliance = profile.alliance_id.and_then(|id| name_of(&names, id));
    context.record.set_affiliation(corporation, alliance);
    notify(context, FieldGroup::Affiliation);
}

async fn enrich_latest_activity(context: &EnrichmentContext) {
    let character_id = context.record.character_id();
    match latest_activity_for(context, character_id).await {
        Ok(activity) => {
            context.record.set_latest_activity(activity);
            notify(context, FieldGroup::LatestActivity);
        }
        Err(error) if error.is_data_absent() => {
            tracing::debug!(character_id, %error, "no latest killboard activity to show");
        }
        Err(error) => {
            tracing::warn!(character_id, %error, "latest activity enrichment failed");
        }
    }
}

/// history -> first matching entry -> killmail detail -> narrative.
async fn latest_activity_for(
    context: &EnrichmentContext,
    character_id: i64,
) -> Result<LatestActivity, EnrichmentError> {
    let history = context.zkillboard.get_history(character_id).await?;
    if history.is_empty() {
        return Err(EnrichmentError::NoKillHistory);
    }

    let entry = match &context.kill_filter {
        Some(filter) => history.iter().find(|entry| filter(entry)),
        None => history.first(),
    }
    .ok_or(EnrichmentError::NoMatchingKill)?;

    let killmail = context
        .esi
        .get_killmail(entry.killmail_id, &entry.zkb.hash)
        .await?;

    build_narrative(context, &killmail).await
}

/// Resolves the six narrative IDs (victim, victim ship, final-blow
/// attacker, attacker ship, attacker weapon, solar system) in one batched
/// call and assembles the activity block.
async fn build_narrative(
    context: &EnrichmentContext,
    killmail: &Killmail,
) -> Result<LatestActivity, EnrichmentError> {
    let final_blow = killmail
        .attackers
        .iter()
        .find(|attacker| attacker.final_blow)
        .ok_or(EnrichmentError::NoFinalBlow)?;

    // Structure victims and NPC attackers carry no character/ship/weapon
    // IDs; there is no narrative to build for those killmails.
    let victim_id = killmail
        .victim
        .character_id
        .ok_or(EnrichmentError::MissingParticipant)?;
    let attacker_id = final_blow
        .character_id
        .ok_or(EnrichmentError::MissingParticipant)?;
    let attacker_ship_id = final_blow
        .ship_type_id
        .ok_or(EnrichmentError::MissingParticipant)?;
    let attacker_weapon_id = final_blow
        .weapon_type_id
        .ok_or(EnrichmentError::MissingParticipant)?;

    let ids = [
        victim_id,
        killmail.victim.ship_type_id,
        attacker_id,
        attacker_ship_id,
        attacker_weapon_id,
        killmail.solar_system_id,
    ];
    let names = context.esi.resolve_names(&ids).await?;

    Ok(LatestActivity {
        date: killmail.killmail_time,
        victim_name: require_name(&names, victim_id)?,
        victim_ship: require_name(&names, killmail.victim.ship_type_id)?,
        attacker_name: require_name(&names, attacker_id)?,
        attacker_ship: require_name(&names, attacker_ship_id)?,
        attacker_weapon: require_name(&names, attacker_weapon_id)?,
        solar_system: require_name(&names, killmail.solar_system_id)?,
    })
}

fn name_of(names: &[NameRef], id: i64) -> Option<String> {
    names
        .iter()
        .find(|name| name.id == id)
        .map(|name| name.name.clone())
}

fn require_name(names: &[NameRef], id: i64) -> Result<String, EnrichmentError> {
    name_of(names, id).ok_or(EnrichmentError::UnresolvedName(id))
}

fn notify(context: &EnrichmentContext, group: FieldGroup) {
    // The receiver may already be gone if the caller only watches the
    // records themselves.
    let _ = context.updates.send(EnrichmentUpdate {
        character_id: context.record.character_id(),
        group,
    });
}
