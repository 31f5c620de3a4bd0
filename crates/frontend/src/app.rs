use crate::guard::ProfileGuard;
use crate::routes::Route;
use crate::session::{SessionContext, SessionProvider};
use crate::views;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub session: SessionContext,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider session={props.session.clone()}>
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    html! {
        <ProfileGuard {route}>{ views::render(route) }</ProfileGuard>
    }
}
