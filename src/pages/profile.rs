//! Profile page: optimistic local edits plus explicit server resync.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::error_banner::ErrorBanner;
use crate::components::route_guard::RequireRole;
use crate::net::types::{AccountStatus, Role, UserUpdate};
use crate::state::context::AuthContext;
use crate::util::errors::ErrorNotice;

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Teacher, Role::Student];

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Build the patch from the form fields; blank fields are left untouched
/// rather than cleared.
fn profile_update(full_name: &str, phone: &str, department: &str) -> UserUpdate {
    UserUpdate {
        full_name: non_empty(full_name),
        phone: non_empty(phone),
        department: non_empty(department),
        ..UserUpdate::default()
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireRole allowed=ALL_ROLES>
            <AppHeader/>
            <ProfileForm/>
        </RequireRole>
    }
}

#[component]
fn ProfileForm() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let saved = RwSignal::new(false);
    let error = RwSignal::new(None::<ErrorNotice>);

    // Seed the form once from the current user; later refreshes must not
    // stomp in-progress edits.
    {
        let auth = auth.clone();
        let seeded = RwSignal::new(false);
        Effect::new(move || {
            if seeded.get() {
                return;
            }
            if let Some(user) = auth.state().get().user {
                full_name.set(user.full_name);
                phone.set(user.phone.unwrap_or_default());
                department.set(user.department.unwrap_or_default());
                seeded.set(true);
            }
        });
    }

    let account_line = {
        let auth = auth.clone();
        move || {
            auth.state().get().user.map(|user| {
                format!(
                    "{} - {} - {}",
                    user.username,
                    user.role.label(),
                    match user.status {
                        AccountStatus::Pending => "pending approval",
                        AccountStatus::Approved => "approved",
                        AccountStatus::Rejected => "rejected",
                    }
                )
            })
        }
    };

    let on_save = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            auth.update_user(&profile_update(&full_name.get(), &phone.get(), &department.get()));
            saved.set(true);
        }
    };

    let on_refresh = move |_| {
        saved.set(false);
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                // A failed refresh already logged us out; the guard will
                // bounce to login. Classify anyway for the brief interim.
                if let Err(err) = auth.refresh_user().await {
                    error.set(Some(crate::util::errors::classify(Some(&err))));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &auth;
        }
    };

    view! {
        <main class="profile">
            <h1>"Your profile"</h1>
            <p class="profile__account">{account_line}</p>
            <form class="profile__form" on:submit=on_save>
                <label>
                    "Full name"
                    <input
                        class="login-input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Phone"
                    <input
                        class="login-input"
                        type="text"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Department"
                    <input
                        class="login-input"
                        type="text"
                        prop:value=move || department.get()
                        on:input=move |ev| department.set(event_target_value(&ev))
                    />
                </label>
                <button class="login-button" type="submit">"Save"</button>
            </form>
            <Show when=move || saved.get()>
                <p class="profile__saved">"Saved. Changes sync on your next refresh."</p>
            </Show>
            <button class="profile__refresh" on:click=on_refresh>
                "Refresh from server"
            </button>
            <ErrorBanner notice=error/>
        </main>
    }
}
