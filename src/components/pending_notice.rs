//! Static notice shown to authenticated-but-unapproved accounts.

use leptos::prelude::*;

/// Rendered in place of protected content while the account awaits admin
/// approval (or was rejected). Deliberately not a redirect: the user stays
/// on the URL they asked for.
#[component]
pub fn PendingNotice() -> impl IntoView {
    view! {
        <div class="pending-notice">
            <h2>"Account awaiting approval"</h2>
            <p>
                "Your account has been created but an administrator has not "
                "approved it yet. You will be able to use the app once it is "
                "approved."
            </p>
        </div>
    }
}
