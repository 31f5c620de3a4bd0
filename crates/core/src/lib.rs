//! IdeaForge client core
//!
//! Platform-neutral pieces of the browser client: the session bootstrap,
//! token renewal, the navigation guard and the storage and identity seams
//! they run against.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod guard;
pub mod identity;
pub mod renewal;
pub mod session;
pub mod storage;
pub mod validation;

#[cfg(any(test, feature = "tests"))]
pub mod tests;

pub use bootstrap::{BootstrapOutcome, SessionBootstrap};
pub use config::PortalConfig;
pub use error::{CoreError, CoreResult};
pub use guard::{GuardedRoute, NavigationDecision, ProfileStatus, ProfileStatusSource};
pub use identity::{IdentityClient, InitOptions, OnLoad, PageControl};
pub use renewal::{RenewalHandle, RenewalOutcome, RenewalStats, RenewalTask, TokenRenewer};
pub use session::Session;
pub use storage::{KeyValueStore, MemoryStore, SessionStore, StorageKeys};
