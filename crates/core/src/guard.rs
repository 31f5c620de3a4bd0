//! Navigation guard driven by the profile-completion status

use serde::{Deserialize, Serialize};

/// Route name the guard redirects to
pub const PROFILE_ROUTE_NAME: &str = "Profile";

/// Whether the user's profile is complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProfileStatus {
    #[default]
    Complete,
    Incomplete,
}

impl ProfileStatus {
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Source of truth for the profile status
pub trait ProfileStatusSource {
    fn profile_status(&self) -> ProfileStatus;
}

/// A fixed profile status.
///
/// Nothing computes completeness from the backend yet, so the application
/// runs with `StaticProfileStatus::default()`, which is always complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticProfileStatus(pub ProfileStatus);

impl ProfileStatusSource for StaticProfileStatus {
    fn profile_status(&self) -> ProfileStatus {
        self.0
    }
}

/// A named client-side route the guard can inspect
pub trait GuardedRoute: Sized {
    /// Route name as shown in the route table
    fn name(&self) -> &'static str;

    /// The profile route
    fn profile() -> Self;

    fn is_profile(&self) -> bool {
        self.name() == PROFILE_ROUTE_NAME
    }
}

/// Result of running the guard for a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision<R> {
    /// Continue to the requested route
    Proceed,
    /// Navigate to this route instead
    Redirect(R),
}

impl<R> NavigationDecision<R> {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Decide whether a navigation to `target` may proceed.
///
/// An incomplete profile pins every navigation to the profile route.
pub fn guard_navigation<R: GuardedRoute>(target: &R, status: ProfileStatus) -> NavigationDecision<R> {
    if status.is_complete() || target.is_profile() {
        NavigationDecision::Proceed
    } else {
        tracing::debug!(
            target_route = target.name(),
            "profile incomplete, redirecting to {PROFILE_ROUTE_NAME}"
        );
        NavigationDecision::Redirect(R::profile())
    }
}
