//! Root route: forwards to the role dashboard or the login view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::context::AuthContext;
use crate::util::auth::home_destination;

/// `/` has no content of its own; once hydration settles it forwards
/// anonymous visitors to login and everyone else to their role home.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(target) = home_destination(&auth.state().get()) {
            navigate(&target, NavigateOptions::default());
        }
    });

    view! { <div class="route-guard__loading">"Loading..."</div> }
}
