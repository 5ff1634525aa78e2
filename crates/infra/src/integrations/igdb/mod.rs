//! IGDB integration
//!
//! Looks up game metadata in IGDB (the Twitch-owned game database) and maps
//! it onto [`gameshelf_domain::GameRecord`].
//!
//! # Architecture
//!
//! - **Auth**: `AccessTokenProvider`, implemented by the shared
//!   client-credentials `TokenCache`
//! - **Client**: `IgdbClient` - adds `Client-ID`/`Authorization` headers and
//!   the `v4/` prefix, turns non-2xx responses into errors
//! - **Service**: `IgdbService` - the two queries plus the payload mapping;
//!   implements the `GameMetadataSource` port
//!
//! # Usage
//!
//! ```no_run
//! use gameshelf_domain::IgdbConfig;
//! use gameshelf_infra::integrations::igdb::{IgdbClient, IgdbService};
//!
//! # async fn example() -> gameshelf_domain::Result<()> {
//! let config = IgdbConfig::new(
//!     "https://api.igdb.com/",
//!     "https://id.twitch.tv/oauth2",
//!     std::env::var("IGDB_CLIENT_ID").unwrap_or_default(),
//!     std::env::var("IGDB_CLIENT_SECRET").unwrap_or_default(),
//! );
//! let service = IgdbService::new(IgdbClient::new(&config)?);
//!
//! if let Some(game) = service.search_by_external_id("1903340").await? {
//!     println!("{:?} scored {:?}", game.title, game.critic_score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Nothing is retried. Transport failures surface as `Network`, rejected
//! credentials as `Auth`, other non-2xx statuses as `Http`, and unexpected
//! bodies as `Decode`. A search without a match is `Ok(None)`.

pub mod auth;
pub mod client;
pub mod mapping;
pub mod query;
pub mod service;
pub mod types;

pub use auth::AccessTokenProvider;
pub use client::{IgdbClient, RequestOptions, API_VERSION_PREFIX};
pub use service::IgdbService;
pub use types::{ExternalGameRow, IgdbGame, IgdbPlatform};
