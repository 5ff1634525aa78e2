//! IGDB lookups

use async_trait::async_trait;
use gameshelf_core::GameMetadataSource;
use gameshelf_domain::{GameRecord, GameshelfError, Result, TimeToBeat};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use super::client::{IgdbClient, RequestOptions};
use super::mapping::to_game_record;
use super::query::{
    external_game_query, time_to_beat_query, EXTERNAL_GAMES_ENDPOINT, TIME_TO_BEAT_ENDPOINT,
};
use super::types::ExternalGameRow;

/// Game metadata lookups backed by IGDB
pub struct IgdbService {
    client: IgdbClient,
}

impl IgdbService {
    pub fn new(client: IgdbClient) -> Self {
        Self { client }
    }

    /// Find the game a Steam app id belongs to
    ///
    /// Returns `Ok(None)` when IGDB has no row for the id or the row carries
    /// no game. A match triggers a second request for completion estimates
    /// unless the game has no id.
    ///
    /// # Errors
    /// Propagates client errors; `Decode` if the body is not the expected
    /// JSON.
    #[instrument(skip(self))]
    pub async fn search_by_external_id(&self, external_id: &str) -> Result<Option<GameRecord>> {
        let body = self.post(EXTERNAL_GAMES_ENDPOINT, external_game_query(external_id)).await?;
        let rows: Vec<ExternalGameRow> = decode_array(&body)?;

        let Some(game) = rows.into_iter().next().and_then(|row| row.game) else {
            debug!("no external game row");
            return Ok(None);
        };
        if game.is_empty() {
            debug!("external game row has an empty game object");
            return Ok(None);
        }

        let time_to_beat = match game.id {
            Some(id) => self.get_time_to_beat(id).await?,
            None => Vec::new(),
        };

        let record = to_game_record(&game, &time_to_beat);
        info!(game_id = ?record.external_id, title = ?record.title, "IGDB game found");
        Ok(Some(record))
    }

    /// Completion estimates for an IGDB game id
    ///
    /// An empty or `null` body is an empty list.
    ///
    /// # Errors
    /// Propagates client errors; `Decode` if the body is not the expected
    /// JSON.
    #[instrument(skip(self))]
    pub async fn get_time_to_beat(&self, game_id: u64) -> Result<Vec<TimeToBeat>> {
        let body = self.post(TIME_TO_BEAT_ENDPOINT, time_to_beat_query(game_id)).await?;
        let entries: Vec<TimeToBeat> = decode_array(&body)?;
        debug!(entries = entries.len(), "time-to-beat entries received");
        Ok(entries)
    }

    async fn post(&self, endpoint: &str, query: String) -> Result<String> {
        let response =
            self.client.request(Method::POST, endpoint, RequestOptions::with_body(query)).await?;
        response
            .text()
            .await
            .map_err(|e| GameshelfError::network(format!("failed to read IGDB response: {e}")))
    }
}

#[async_trait]
impl GameMetadataSource for IgdbService {
    async fn search_by_external_id(&self, external_id: &str) -> Result<Option<GameRecord>> {
        IgdbService::search_by_external_id(self, external_id).await
    }

    async fn get_time_to_beat(&self, game_id: u64) -> Result<Vec<TimeToBeat>> {
        IgdbService::get_time_to_beat(self, game_id).await
    }
}

/// Decode a JSON array, treating an empty body or `null` as no rows
fn decode_array<T: DeserializeOwned>(body: &str) -> Result<Vec<T>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Option<Vec<T>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| GameshelfError::decode(format!("unexpected IGDB response body: {e}")))
}
