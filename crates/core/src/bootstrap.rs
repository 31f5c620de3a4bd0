//! Session bootstrap: authenticate first, mount second
//!
//! Startup is a two-phase protocol. [`SessionBootstrap::authenticate`] talks to
//! the identity client and persists the session; its typed outcome decides
//! whether the application is mounted at all.

use crate::error::{CoreError, CoreResult};
use crate::identity::{IdentityClient, InitOptions, PageControl};
use crate::session::Session;
use crate::storage::SessionStore;
use std::rc::Rc;
use tracing::{error, info, warn};

/// Result of the authentication phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// A session was established and persisted; the application can mount
    Authenticated(Session),
    /// The identity client reported no session; a page reload was requested
    NoSession,
    /// Initialization failed; the application must not mount
    Failed(CoreError),
}

impl BootstrapOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The established session, if any
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::NoSession | Self::Failed(_) => None,
        }
    }
}

/// Authenticates the user before the application shell is mounted
pub struct SessionBootstrap {
    identity: Rc<dyn IdentityClient>,
    store: SessionStore,
    page: Rc<dyn PageControl>,
    options: InitOptions,
}

impl SessionBootstrap {
    /// Create a bootstrap that requires an authenticated session
    pub fn new(
        identity: Rc<dyn IdentityClient>,
        store: SessionStore,
        page: Rc<dyn PageControl>,
    ) -> Self {
        Self {
            identity,
            store,
            page,
            options: InitOptions::login_required(),
        }
    }

    /// Initialize the identity client and persist the resulting session.
    ///
    /// With no session the page is reloaded, which retries the whole startup.
    /// There is no bound on how often that happens.
    pub async fn authenticate(&self) -> BootstrapOutcome {
        match self.identity.init(self.options.clone()).await {
            Ok(true) => match self.capture_session() {
                Ok(session) => {
                    info!("identity client authenticated, session persisted");
                    BootstrapOutcome::Authenticated(session)
                }
                Err(error) => {
                    error!(%error, "failed to capture authenticated session");
                    BootstrapOutcome::Failed(error)
                }
            },
            Ok(false) => {
                warn!("identity client reported no authenticated session, reloading page");
                self.page.reload();
                BootstrapOutcome::NoSession
            }
            Err(error) => {
                error!(%error, "identity client initialization failed");
                BootstrapOutcome::Failed(error)
            }
        }
    }

    fn capture_session(&self) -> CoreResult<Session> {
        let access_token = self
            .identity
            .access_token()
            .ok_or_else(|| CoreError::identity("authenticated without an access token"))?;
        let refresh_token = self
            .identity
            .refresh_token()
            .ok_or_else(|| CoreError::identity("authenticated without a refresh token"))?;

        let session = Session::new(access_token, refresh_token);
        self.store.persist(&session)?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::mock::{MockIdentity, MockPage};
    use crate::storage::{KeyValueStore, MemoryStore, StorageKeys};
    use mockall::predicate::eq;

    fn create_bootstrap(
        identity: MockIdentity,
        page: MockPage,
    ) -> (Rc<MemoryStore>, SessionBootstrap) {
        let memory = Rc::new(MemoryStore::new());
        let store = SessionStore::new(memory.clone(), StorageKeys::default());
        let bootstrap = SessionBootstrap::new(Rc::new(identity), store, Rc::new(page));
        (memory, bootstrap)
    }

    #[tokio::test]
    async fn test_no_session_reloads_once_without_writes() {
        let mut identity = MockIdentity::new();
        identity
            .expect_init()
            .with(eq(InitOptions::login_required()))
            .times(1)
            .returning(|_| Ok(false));
        identity.expect_access_token().never();

        let mut page = MockPage::new();
        page.expect_reload().times(1).return_const(());

        let (memory, bootstrap) = create_bootstrap(identity, page);
        let outcome = bootstrap.authenticate().await;

        assert_eq!(outcome, BootstrapOutcome::NoSession);
        assert_eq!(memory.write_count(), 0);
        assert!(memory.is_empty());
    }

    #[tokio::test]
    async fn test_authenticated_session_is_persisted() {
        let mut identity = MockIdentity::new();
        identity.expect_init().times(1).returning(|_| Ok(true));
        identity
            .expect_access_token()
            .returning(|| Some("access-abc".to_string()));
        identity
            .expect_refresh_token()
            .returning(|| Some("refresh-xyz".to_string()));

        let mut page = MockPage::new();
        page.expect_reload().never();

        let (memory, bootstrap) = create_bootstrap(identity, page);
        let outcome = bootstrap.authenticate().await;

        assert!(outcome.is_authenticated());
        assert_eq!(
            outcome.session(),
            Some(&Session::new("access-abc", "refresh-xyz"))
        );
        assert_eq!(
            memory.get(StorageKeys::ACCESS_TOKEN).unwrap().as_deref(),
            Some("access-abc")
        );
        assert_eq!(
            memory.get(StorageKeys::REFRESH_TOKEN).unwrap().as_deref(),
            Some("refresh-xyz")
        );
    }

    #[tokio::test]
    async fn test_init_rejection_fails_without_reload() {
        let mut identity = MockIdentity::new();
        identity
            .expect_init()
            .times(1)
            .returning(|_| Err(CoreError::identity("Failed to initialize Keycloak")));

        let mut page = MockPage::new();
        page.expect_reload().never();

        let (memory, bootstrap) = create_bootstrap(identity, page);
        let outcome = bootstrap.authenticate().await;

        assert_eq!(
            outcome,
            BootstrapOutcome::Failed(CoreError::identity("Failed to initialize Keycloak"))
        );
        assert!(outcome.session().is_none());
        assert_eq!(memory.write_count(), 0);
    }

    #[tokio::test]
    async fn test_authenticated_without_refresh_token_fails() {
        let mut identity = MockIdentity::new();
        identity.expect_init().returning(|_| Ok(true));
        identity
            .expect_access_token()
            .returning(|| Some("access-abc".to_string()));
        identity.expect_refresh_token().returning(|| None);

        let mut page = MockPage::new();
        page.expect_reload().never();

        let (memory, bootstrap) = create_bootstrap(identity, page);
        let outcome = bootstrap.authenticate().await;

        assert!(matches!(outcome, BootstrapOutcome::Failed(CoreError::Identity { .. })));
        assert!(memory.is_empty());
    }
}
