//! Session context shared with every routed view

use ideaforge_core::{IdentityClient, ProfileStatus, ProfileStatusSource, RenewalHandle, SessionStore};
use std::rc::Rc;
use tracing::{error, info};
use yew::prelude::*;

/// Everything a view needs from the authenticated session
#[derive(Clone)]
pub struct SessionContext {
    pub identity: Rc<dyn IdentityClient>,
    pub store: SessionStore,
    pub renewal: RenewalHandle,
    pub profile_status: ProfileStatus,
}

impl SessionContext {
    pub fn new(
        identity: Rc<dyn IdentityClient>,
        store: SessionStore,
        renewal: RenewalHandle,
        profile: &dyn ProfileStatusSource,
    ) -> Self {
        Self {
            identity,
            store,
            renewal,
            profile_status: profile.profile_status(),
        }
    }

    /// End the session with the provider, then stop renewals and forget the stored session.
    ///
    /// A failed provider logout leaves the local session running.
    pub async fn logout(&self) {
        if let Err(error) = self.identity.logout().await {
            error!(%error, "logout failed, keeping the current session");
            return;
        }

        self.renewal.cancel();
        if let Err(error) = self.store.clear() {
            error!(%error, "failed to clear stored session");
        }
        info!("logged out");
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.identity, &other.identity)
            && self.renewal == other.renewal
            && self.profile_status == other.profile_status
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub session: SessionContext,
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    html! {
        <ContextProvider<SessionContext> context={props.session.clone()}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook returning a callback that logs the user out
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let session = use_session();
    Callback::from(move |_| {
        let session = session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            session.logout().await;
        });
    })
}
