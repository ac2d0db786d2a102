//! Factories for mock wire-model data used across tests.

use chrono::{DateTime, Utc};
use evespy::model::{
    esi::{Attacker, CharacterPublicInfo, Killmail, NameRef, NamedId, Victim},
    zkill::{CharacterStats, KillHistoryEntry, ZkbMetadata},
};

pub fn mock_named_id(id: i64, name: &str) -> NamedId {
    NamedId {
        id,
        name: name.to_string(),
    }
}

pub fn mock_name_ref(category: &str, id: i64, name: &str) -> NameRef {
    NameRef {
        category: category.to_string(),
        id,
        name: name.to_string(),
    }
}

pub fn mock_character(corporation_id: i64, alliance_id: Option<i64>) -> CharacterPublicInfo {
    CharacterPublicInfo {
        name: "Hyziri".to_string(),
        corporation_id,
        alliance_id,
        security_status: Some(-0.100_373_643),
        birthday: timestamp("2018-12-20T16:11:54Z"),
    }
}

pub fn mock_stats() -> CharacterStats {
    CharacterStats {
        danger_ratio: 55,
        gang_ratio: 80,
        ships_destroyed: 1_234,
        ships_lost: 87,
        solo_kills: 37,
        solo_losses: 12,
    }
}

pub fn mock_history_entry(killmail_id: i64, hash: &str) -> KillHistoryEntry {
    KillHistoryEntry {
        killmail_id,
        zkb: ZkbMetadata {
            hash: hash.to_string(),
        },
    }
}

/// A killmail with one final-blow player attacker and one NPC entry
/// without IDs, the way real killmails mix both.
pub fn mock_killmail(
    victim_id: i64,
    victim_ship_id: i64,
    attacker_id: i64,
    attacker_ship_id: i64,
    attacker_weapon_id: i64,
    solar_system_id: i64,
) -> Killmail {
    Killmail {
        killmail_time: timestamp("2024-11-02T19:45:12Z"),
        solar_system_id,
        victim: Victim {
            character_id: Some(victim_id),
            ship_type_id: victim_ship_id,
        },
        attackers: vec![
            Attacker {
                character_id: None,
                ship_type_id: None,
                weapon_type_id: None,
                final_blow: false,
            },
            Attacker {
                character_id: Some(attacker_id),
                ship_type_id: Some(attacker_ship_id),
                weapon_type_id: Some(attacker_weapon_id),
                final_blow: true,
            },
        ],
    }
}

/// A killmail whose only final-blow attacker is an NPC without a
/// character ID.
pub fn mock_npc_killmail(victim_id: i64, victim_ship_id: i64, solar_system_id: i64) -> Killmail {
    Killmail {
        killmail_time: timestamp("2024-11-02T19:45:12Z"),
        solar_system_id,
        victim: Victim {
            character_id: Some(victim_id),
            ship_type_id: victim_ship_id,
        },
        attackers: vec![Attacker {
            character_id: None,
            ship_type_id: Some(587),
            weapon_type_id: None,
            final_blow: true,
        }],
    }
}

pub fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}
