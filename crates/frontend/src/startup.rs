//! Two-phase startup: authenticate, then mount

use crate::app::{App, AppProps};
use crate::browser::{BrowserPage, BrowserStorage};
use crate::error::FrontendResult;
use crate::keycloak::KeycloakClient;
use crate::session::SessionContext;
use gloo_timers::future::IntervalStream;
use ideaforge_core::guard::StaticProfileStatus;
use ideaforge_core::renewal;
use ideaforge_core::{
    BootstrapOutcome, IdentityClient, PortalConfig, SessionBootstrap, SessionStore, TokenRenewer,
};
use ideaforge_http::AuthenticatedApiClient;
use std::rc::Rc;
use tracing::{debug, error, info, warn};
use wasm_bindgen_futures::spawn_local;

/// Start the client. The application is mounted only after authentication succeeds.
pub async fn start() {
    match run().await {
        Ok(true) => info!("application mounted"),
        Ok(false) => debug!("waiting for page reload"),
        Err(error) => error!(%error, "startup aborted, application not mounted"),
    }
}

async fn run() -> FrontendResult<bool> {
    let config = PortalConfig::load()?;
    info!(
        identity_url = %config.identity.url,
        realm = %config.identity.realm,
        api_base_url = %config.api.base_url,
        "starting IdeaForge client"
    );

    let identity: Rc<dyn IdentityClient> = Rc::new(KeycloakClient::new(&config.identity)?);
    let store = SessionStore::new(
        Rc::new(BrowserStorage::local()?),
        config.session.keys.clone(),
    );

    let bootstrap = SessionBootstrap::new(Rc::clone(&identity), store.clone(), Rc::new(BrowserPage));
    let session = match bootstrap.authenticate().await {
        BootstrapOutcome::Authenticated(session) => session,
        BootstrapOutcome::NoSession => return Ok(false),
        BootstrapOutcome::Failed(error) => return Err(error.into()),
    };

    let renewer = TokenRenewer::new(
        Rc::clone(&identity),
        store.clone(),
        config.session.min_validity_secs,
    );
    let period_ms = u32::try_from(config.session.refresh_interval().as_millis()).unwrap_or(u32::MAX);
    let (renewal, task) = renewal::schedule(renewer, IntervalStream::new(period_ms));
    spawn_local(task);

    if config.api.fetch_user_details {
        match AuthenticatedApiClient::new(&config.api.base_url, &session.access_token) {
            Ok(client) => spawn_local(load_user_details(client, store.clone())),
            Err(error) => error!(%error, "cannot build API client, skipping user details"),
        }
    }

    let session = SessionContext::new(identity, store, renewal, &StaticProfileStatus::default());
    yew::Renderer::<App>::with_props(AppProps { session }).render();
    Ok(true)
}

/// Fetch and store the user details; failures never block the application
async fn load_user_details(client: AuthenticatedApiClient, store: SessionStore) {
    match client.load_user_details(&store).await {
        Ok(()) => debug!("user details stored"),
        Err(error) if error.is_auth_expired() => {
            warn!(%error, "access token rejected while fetching user details");
        }
        Err(error) => error!(%error, "error fetching user details"),
    }
}
