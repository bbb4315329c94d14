//! Shared header for authenticated views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::context::AuthContext;

/// Identity display, profile link, and sign-out for authenticated pages.
#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let identity = {
        let auth = auth.clone();
        move || {
            auth.state()
                .get()
                .user
                .map(|user| (user.full_name, user.role.label()))
        }
    };

    let on_logout = move |_| {
        auth.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">"Campus"</a>
            <nav class="app-header__nav">
                <a href="/profile">"Profile"</a>
            </nav>
            {move || {
                identity().map(|(name, role)| {
                    view! {
                        <span class="app-header__identity">
                            {name} <span class="app-header__role">{role}</span>
                        </span>
                    }
                })
            }}
            <button class="app-header__logout" on:click=on_logout>
                "Sign out"
            </button>
        </header>
    }
}
