//! Repository over the EVE Swagger Interface (ESI).
//!
//! Covers the unauthenticated endpoints the aggregator needs: batched
//! name/ID resolution in both directions, public character information and
//! killmail detail. Portrait references are plain image-server URLs and
//! need no request at all.

use std::collections::BTreeSet;

use crate::{
    data::check_status,
    error::RemoteError,
    model::esi::{CharacterPublicInfo, Killmail, NameRef, NamedId, UniverseIds},
    util::eve::IMAGE_SERVER_URL,
};

const SERVICE: &str = "ESI";

pub struct EsiRepository {
    client: reqwest::Client,
    base_url: String,
}

impl EsiRepository {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Batch-resolves free-text names to character (ID, name) pairs via
    /// `POST /universe/ids/`. Best-effort: names ESI does not know are
    /// absent from the result. Empty input returns empty without a
    /// request (ESI rejects an empty body).
    pub async fn resolve_ids(&self, names: &[String]) -> Result<Vec<NamedId>, RemoteError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/universe/ids/", self.base_url);
        let response = check_status(SERVICE, self.client.post(&url).json(&names).send().await?)?;
        let resolved: UniverseIds = response.json().await?;

        Ok(resolved.characters)
    }

    /// Batch-resolves numeric IDs back to display names via
    /// `POST /universe/names/`. IDs are deduplicated and sorted first;
    /// ESI answers 400 for a body containing duplicates.
    pub async fn resolve_names(&self, ids: &[i64]) -> Result<Vec<NameRef>, RemoteError> {
        let unique: BTreeSet<i64> = ids.iter().copied().collect();
        if unique.is_empty() {
            return Ok(Vec::new());
        }
        let unique: Vec<i64> = unique.into_iter().collect();

        let url = format!("{}/universe/names/", self.base_url);
        let response = check_status(SERVICE, self.client.post(&url).json(&unique).send().await?)?;

        Ok(response.json().await?)
    }

    /// Fetches public character information via `GET /characters/{id}/`.
    pub async fn get_character(
        &self,
        character_id: i64,
    ) -> Result<CharacterPublicInfo, RemoteError> {
        let url = format!("{}/characters/{}/", self.base_url, character_id);
        let response = check_status(SERVICE, self.client.get(&url).send().await?)?;

        Ok(response.json().await?)
    }

    /// Fetches full killmail detail via `GET /killmails/{id}/{hash}/`.
    /// The hash comes from the killboard history entry; an invalid or
    /// expired hash surfaces as a status error.
    pub async fn get_killmail(
        &self,
        killmail_id: i64,
        hash: &str,
    ) -> Result<Killmail, RemoteError> {
        let url = format!("{}/killmails/{}/{}/", self.base_url, killmail_id, hash);
        let response = check_status(SERVICE, self.client.get(&url).send().await?)?;

        Ok(response.json().await?)
    }

    /// Image-server URL for a character portrait of the given pixel size.
    pub fn portrait_url(&self, character_id: i64, size: u32) -> String {
        format!(
            "{}/characters/{}/portrait?size={}",
            IMAGE_SERVER_URL, character_id, size
        )
    }
}
