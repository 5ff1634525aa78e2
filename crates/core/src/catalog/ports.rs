//! Catalog port interfaces

use async_trait::async_trait;
use gameshelf_domain::{GameRecord, Result, TimeToBeat};

/// Source of game metadata keyed by storefront identifiers
#[async_trait]
pub trait GameMetadataSource: Send + Sync {
    /// Find a game by its Steam app id
    ///
    /// Returns `Ok(None)` when the source has no matching game.
    async fn search_by_external_id(&self, external_id: &str) -> Result<Option<GameRecord>>;

    /// Completion estimates for a game in the source's own id space
    async fn get_time_to_beat(&self, game_id: u64) -> Result<Vec<TimeToBeat>>;
}
