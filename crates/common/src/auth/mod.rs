//! OAuth2 client-credentials authentication
//!
//! Service-to-service auth for the IGDB API: the service exchanges its own
//! client id/secret for a bearer token and reuses that token until shortly
//! before it expires.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   TokenCache    │  get_or_refresh(): read-through, fixed key
//! └────────┬────────┘
//!          │
//!          ├──► TokenStore          (get / put with TTL; injected)
//!          │       ├── MemoryTokenStore  (Clock-driven, deterministic)
//!          │       └── MokaTokenStore    (moka, per-entry expiry)
//!          │
//!          └──► TokenIssuer         (obtains a fresh grant)
//!                  └── ClientCredentialsClient  (POST <auth_url>/token)
//! ```
//!
//! There is no lock around the read-then-write in [`TokenCache`]: two
//! callers that both observe an expired token will each authenticate and
//! each receive a usable token. The second `put` simply overwrites the first.

pub mod client;
pub mod store;
pub mod token_cache;
pub mod traits;
pub mod types;

pub use client::{AuthError, ClientCredentialsClient};
pub use store::{MemoryTokenStore, MokaTokenStore};
pub use token_cache::{TokenCache, EXPIRY_SAFETY_MARGIN_SECONDS, TOKEN_CACHE_KEY};
pub use traits::{TokenIssuer, TokenStore};
pub use types::{TokenGrant, TokenResponse, DEFAULT_EXPIRES_IN_SECONDS};
