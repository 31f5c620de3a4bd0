//! IdeaForge HTTP client
//!
//! Typed reqwest clients for the backend API. Authenticated clients attach
//! the session's access token as a bearer token to every request.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{AuthenticatedApiClient, TypedClientBuilder};
pub use types::UserDetailsResponse;
