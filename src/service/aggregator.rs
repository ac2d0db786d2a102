//! Player information aggregation: the caller-facing fan-out.
//!
//! `aggregate_for` performs exactly one remote round trip (the batched
//! name resolution) before returning a usable record set; everything else
//! runs as detached per-player enrichment tasks observable and cancellable
//! through the returned [`Aggregation`] handle.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{
    config::Config,
    data::{esi::EsiRepository, zkillboard::ZkillboardRepository},
    error::{RemoteError, ResolutionError},
    model::{
        player::{EnrichmentUpdate, PlayerRecord},
        zkill::KillHistoryEntry,
    },
    service::enrichment::{self, EnrichmentContext},
    util::eve::DEFAULT_PORTRAIT_SIZE,
};

/// Predicate selecting which kill history entry feeds the latest-activity
/// narrative. Defaults to the first (most recent) entry.
pub type KillFilter = Arc<dyn Fn(&KillHistoryEntry) -> bool + Send + Sync>;

pub struct PlayerInformationAggregator {
    esi: Arc<EsiRepository>,
    zkillboard: Arc<ZkillboardRepository>,
    kill_filter: Option<KillFilter>,
}

impl PlayerInformationAggregator {
    /// Builds the aggregator and both repositories from one config.
    pub fn new(config: &Config) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Builds against an existing HTTP client.
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            esi: Arc::new(EsiRepository::new(client.clone(), &config.esi_url)),
            zkillboard: Arc::new(ZkillboardRepository::new(client, &config.zkillboard_url)),
            kill_filter: None,
        }
    }

    /// Installs a caller-supplied kill history predicate.
    pub fn with_kill_filter(mut self, filter: KillFilter) -> Self {
        self.kill_filter = Some(filter);
        self
    }

    /// Aggregates player information for a set of free-text player names.
    ///
    /// Resolves all names in one batched call (names ESI does not know are
    /// dropped silently), then returns immediately with one record per
    /// resolved player carrying identity and portrait reference. One
    /// detached enrichment task per player fills in statistics, profile
    /// and latest-activity fields afterwards; observe them via
    /// [`Aggregation::next_update`] or record snapshots.
    ///
    /// Only a total failure of the batched resolution is an error. Every
    /// enrichment failure is logged and scoped to one field group of one
    /// player.
    pub async fn aggregate_for<I, S>(&self, players: I) -> Result<Aggregation, ResolutionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = players.into_iter().map(Into::into).collect();
        let resolved = self.esi.resolve_ids(&names).await?;

        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let mut records = Vec::with_capacity(resolved.len());
        let mut tasks = Vec::with_capacity(resolved.len());
        for mapping in resolved {
            let record = Arc::new(PlayerRecord::new(
                mapping.id,
                mapping.name,
                self.esi.portrait_url(mapping.id, DEFAULT_PORTRAIT_SIZE),
            ));
            records.push(Arc::clone(&record));

            let context = EnrichmentContext {
                esi: Arc::clone(&self.esi),
                zkillboard: Arc::clone(&self.zkillboard),
                record,
                kill_filter: self.kill_filter.clone(),
                updates: updates_tx.clone(),
                cancel: cancel.child_token(),
            };
            tasks.push(tokio::spawn(enrichment::enrich_player(context)));
        }

        Ok(Aggregation {
            records,
            updates: updates_rx,
            cancel,
            tasks,
        })
    }
}

/// Handle over one aggregation request: the immediately-usable records,
/// the enrichment update stream and the cancellation switch.
///
/// Dropping the handle cancels in-flight enrichment; the records
/// themselves stay valid for as long as the caller holds them.
pub struct Aggregation {
    records: Vec<Arc<PlayerRecord>>,
    updates: UnboundedReceiver<EnrichmentUpdate>,
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl Aggregation {
    /// The record set, one entry per resolved player, identity fields
    /// populated.
    pub fn records(&self) -> &[Arc<PlayerRecord>] {
        &self.records
    }

    /// Next field-group population event; `None` once every enrichment
    /// task has finished and the channel drained.
    pub async fn next_update(&mut self) -> Option<EnrichmentUpdate> {
        self.updates.recv().await
    }

    /// Stops all in-flight enrichment at the next suspension point.
    /// Fields already populated stay populated.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Waits for every enrichment task to finish and hands back the
    /// records. Chains absorb their own failures, so join errors can only
    /// come from cancellation or a panic and are ignored here.
    pub async fn join(mut self) -> Vec<Arc<PlayerRecord>> {
        join_all(self.tasks.drain(..)).await;
        std::mem::take(&mut self.records)
    }
}

impl Drop for Aggregation {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
