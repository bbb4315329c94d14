//! Role-gated wrapper for protected route content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through this component so gating behavior
//! stays identical app-wide: block on hydration, bounce anonymous or
//! wrong-role visitors to login (carrying the requested location), and hold
//! unapproved accounts at the approval notice.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::state::context::AuthContext;
use crate::util::auth::{RouteDecision, login_redirect_target, route_decision};

use super::pending_notice::PendingNotice;

/// Gate `children` behind authentication, approval, and a role allow-list.
///
/// The guard itself never navigates while loading; redirects only fire once
/// hydration has settled the state.
#[component]
pub fn RequireRole(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let location = use_location();

    {
        let auth = auth.clone();
        Effect::new(move || {
            let state = auth.state().get();
            if route_decision(&state, allowed) == RouteDecision::RedirectToLogin {
                let target = login_redirect_target(&location.pathname.get_untracked());
                navigate(&target, NavigateOptions::default());
            }
        });
    }

    view! {
        {move || match route_decision(&auth.state().get(), allowed) {
            RouteDecision::Loading => view! {
                <div class="route-guard__loading">"Loading..."</div>
            }
            .into_any(),
            // The redirect effect handles navigation; render nothing while
            // the router catches up.
            RouteDecision::RedirectToLogin => ().into_any(),
            RouteDecision::PendingApproval => view! { <PendingNotice/> }.into_any(),
            RouteDecision::Allow => children().into_any(),
        }}
    }
}
