//! Profile guard applied to every routed view

use crate::routes::Route;
use crate::session::use_session;
use ideaforge_core::NavigationDecision;
use ideaforge_core::guard::guard_navigation;
use yew::prelude::*;
use yew_router::prelude::Redirect;

#[derive(Properties, PartialEq)]
pub struct ProfileGuardProps {
    pub route: Route,
    pub children: Children,
}

/// Renders the view, or redirects to the profile page when it must be completed first
#[function_component(ProfileGuard)]
pub fn profile_guard(props: &ProfileGuardProps) -> Html {
    let session = use_session();

    match guard_navigation(&props.route, session.profile_status) {
        NavigationDecision::Proceed => html! { <>{ props.children.clone() }</> },
        NavigationDecision::Redirect(to) => html! { <Redirect<Route> {to} /> },
    }
}
