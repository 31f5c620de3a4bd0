//! IdeaForge browser client
//!
//! Authenticates against Keycloak before anything is rendered, keeps the
//! access token fresh in the background and guards every route on the
//! profile status.

pub mod app;
pub mod browser;
pub mod error;
pub mod guard;
pub mod keycloak;
pub mod logging;
pub mod routes;
pub mod session;
pub mod startup;
pub mod views;

pub use app::App;
pub use error::{FrontendError, FrontendResult};
pub use routes::Route;
pub use session::{SessionContext, SessionProvider, use_session};
pub use startup::start;
