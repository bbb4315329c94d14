//! Registration page for teacher and student accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registration never signs the caller in: new accounts start `pending`
//! and an administrator has to approve them before login works, so the
//! success path lands on a notice rather than a dashboard.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::net::types::{RegisterPayload, Role};
use crate::state::context::AuthContext;
use crate::util::errors::ErrorNotice;

/// Roles a visitor may register as; admin accounts are provisioned
/// server-side.
fn role_from_selection(value: &str) -> Option<Role> {
    match value {
        "teacher" => Some(Role::Teacher),
        "student" => Some(Role::Student),
        _ => None,
    }
}

fn validate_register_input(
    full_name: &str,
    username: &str,
    email: &str,
    password: &str,
    role_value: &str,
) -> Result<RegisterPayload, &'static str> {
    let full_name = full_name.trim();
    let username = username.trim();
    let email = email.trim();
    if full_name.is_empty() || username.is_empty() || email.is_empty() {
        return Err("Fill in your name, username, and email.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    let Some(role) = role_from_selection(role_value) else {
        return Err("Choose whether you are registering as a teacher or a student.");
    };
    Ok(RegisterPayload {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        full_name: full_name.to_owned(),
        role,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    // Copy handle so the submit handler can live inside `Show` children,
    // which are re-rendered and need `Fn + Copy` captures.
    let auth = StoredValue::new(expect_context::<AuthContext>());

    let full_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role_value = RwSignal::new("student".to_owned());
    let busy = RwSignal::new(false);
    let submitted = RwSignal::new(false);
    let error = RwSignal::new(None::<ErrorNotice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_register_input(
            &full_name.get(),
            &username.get(),
            &email.get(),
            &password.get(),
            &role_value.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(ErrorNotice { message: message.to_owned(), recovery: None }));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.get_value();
            leptos::task::spawn_local(async move {
                match auth.register(&payload).await {
                    Ok(_) => submitted.set(true),
                    Err(err) => error.set(Some(crate::util::errors::classify(Some(&err)))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &payload);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Campus"</h1>
                <Show
                    when=move || !submitted.get()
                    fallback=|| {
                        view! {
                            <p class="login-message">
                                "Registration submitted. An administrator must approve "
                                "your account before you can sign in."
                            </p>
                            <p class="login-card__subtitle">
                                <a href="/login">"Back to sign in"</a>
                            </p>
                        }
                    }
                >
                    <p class="login-card__subtitle">"Create an account"</p>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.edu"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password (8+ characters)"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <select
                            class="login-input"
                            prop:value=move || role_value.get()
                            on:change=move |ev| role_value.set(event_target_value(&ev))
                        >
                            <option value="student">"Student"</option>
                            <option value="teacher">"Teacher"</option>
                        </select>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                    </form>
                    <ErrorBanner notice=error/>
                    <div class="login-divider"></div>
                    <p class="login-card__subtitle">
                        "Already approved? " <a href="/login">"Sign in"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}
