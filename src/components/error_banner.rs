//! Inline error surface for auth forms and guarded pages.
//!
//! DESIGN
//! ======
//! Pages own the `Option<ErrorNotice>` signal and set it from classified
//! failures; this component only renders the message and, when the
//! classification suggests one, the recovery button.

use leptos::prelude::*;

use crate::util::errors::{self, ErrorNotice};

/// Render the current error notice, if any, with its recovery affordance.
#[component]
pub fn ErrorBanner(notice: RwSignal<Option<ErrorNotice>>) -> impl IntoView {
    view! {
        {move || {
            notice.get().map(|notice| {
                view! {
                    <div class="error-banner" role="alert">
                        <span class="error-banner__message">{notice.message.clone()}</span>
                        {notice.recovery.map(|recovery| {
                            view! {
                                <button
                                    class="error-banner__action"
                                    on:click=move |_| errors::perform(recovery.action)
                                >
                                    {recovery.label}
                                </button>
                            }
                        })}
                    </div>
                }
            })
        }}
    }
}
