//! Page components
//!
//! The pages themselves are outside this client's scope; each renders its
//! heading inside the shared layout.

use crate::routes::Route;
use crate::session::{use_logout, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub route: Route,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let on_logout = use_logout();

    html! {
        <nav class="flex items-center gap-4 p-4 border-b border-gray-200">
            { for Route::NAVIGATION.into_iter().map(|route| html! {
                <Link<Route> to={route}>{ route.title() }</Link<Route>>
            }) }
            <button onclick={on_logout} class="ml-auto text-gray-600 hover:text-gray-900">
                {"Logout"}
            </button>
        </nav>
    }
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <Navigation />
            <main class="p-6">
                <h1 class="text-2xl font-bold mb-4">{ props.route.title() }</h1>
                { props.children.clone() }
            </main>
        </div>
    }
}

#[function_component(ProfileDetails)]
fn profile_details() -> Html {
    let session = use_session();
    let details = match session.store.user_details() {
        Ok(details) => details,
        Err(error) => {
            tracing::warn!(%error, "failed to read user details");
            None
        }
    };

    match details {
        Some(details) => html! { <pre class="text-sm break-all">{ details }</pre> },
        None => html! { <p class="text-gray-600">{"No user details loaded."}</p> },
    }
}

/// Render the view for a route
pub fn render(route: Route) -> Html {
    match route {
        Route::Profile => html! {
            <Page {route}><ProfileDetails /></Page>
        },
        Route::Error => html! {
            <Page {route}><p>{"Something went wrong."}</p></Page>
        },
        Route::NotFound => html! {
            <Page {route}><p>{"This page does not exist."}</p></Page>
        },
        Route::Home | Route::GenerateIdea | Route::ViewIdeas | Route::ViewOrders => html! {
            <Page {route} />
        },
    }
}
