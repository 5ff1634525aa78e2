//! Catalog service - lookup use cases

use std::sync::Arc;

use gameshelf_domain::{GameRecord, Result, TimeToBeat};
use tracing::{debug, info};

use super::ports::GameMetadataSource;

/// Game lookups against a metadata source
pub struct CatalogService {
    source: Arc<dyn GameMetadataSource>,
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(source: Arc<dyn GameMetadataSource>) -> Self {
        Self { source }
    }

    /// Look up a game by Steam app id
    pub async fn lookup_steam_app(&self, app_id: u32) -> Result<Option<GameRecord>> {
        let record = self.source.search_by_external_id(&app_id.to_string()).await?;

        match &record {
            Some(game) => info!(app_id, title = ?game.title, "matched Steam app"),
            None => debug!(app_id, "no game matches Steam app"),
        }

        Ok(record)
    }

    /// Completion estimates for a game
    pub async fn time_to_beat(&self, game_id: u64) -> Result<Vec<TimeToBeat>> {
        self.source.get_time_to_beat(game_id).await
    }
}
