//! Repository over the zKillboard API.

use crate::{
    data::check_status,
    error::RemoteError,
    model::zkill::{CharacterStats, KillHistoryEntry},
};

const SERVICE: &str = "zKillboard";

pub struct ZkillboardRepository {
    client: reqwest::Client,
    base_url: String,
}

impl ZkillboardRepository {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches a character's recent kill history via
    /// `GET /api/characterID/{id}/`, most-recent-first.
    pub async fn get_history(
        &self,
        character_id: i64,
    ) -> Result<Vec<KillHistoryEntry>, RemoteError> {
        let url = format!("{}/api/characterID/{}/", self.base_url, character_id);
        let response = check_status(SERVICE, self.client.get(&url).send().await?)?;

        Ok(response.json().await?)
    }

    /// Fetches a character's aggregate statistics via
    /// `GET /api/stats/characterID/{id}/`.
    pub async fn get_stats(&self, character_id: i64) -> Result<CharacterStats, RemoteError> {
        let url = format!("{}/api/stats/characterID/{}/", self.base_url, character_id);
        let response = check_status(SERVICE, self.client.get(&url).send().await?)?;

        Ok(response.json().await?)
    }
}
