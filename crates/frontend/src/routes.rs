//! Client-side route table

use ideaforge_core::GuardedRoute;
use yew_router::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/generate-idea")]
    GenerateIdea,
    #[at("/view-ideas")]
    ViewIdeas,
    #[at("/view-orders")]
    ViewOrders,
    #[at("/profile")]
    Profile,
    #[at("/error")]
    Error,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes shown in the navigation bar
    pub const NAVIGATION: [Self; 5] = [
        Self::Home,
        Self::GenerateIdea,
        Self::ViewIdeas,
        Self::ViewOrders,
        Self::Profile,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::GenerateIdea => "Generate Idea",
            Self::ViewIdeas => "View Ideas",
            Self::ViewOrders => "View Orders",
            Self::Profile => "Profile",
            Self::Error => "Error",
            Self::NotFound => "Not Found",
        }
    }
}

impl GuardedRoute for Route {
    fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::GenerateIdea => "GenerateIdea",
            Self::ViewIdeas => "ViewIdeas",
            Self::ViewOrders => "ViewOrders",
            Self::Profile => "Profile",
            Self::Error => "Error",
            Self::NotFound => "NotFound",
        }
    }

    fn profile() -> Self {
        Self::Profile
    }
}
