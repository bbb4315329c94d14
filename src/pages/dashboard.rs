//! Role dashboards: the landing shells behind the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! These pages are deliberately thin. Their job is to be the protected
//! content each role lands on; the actual gating lives in `RequireRole`.

use leptos::prelude::*;

use crate::components::app_header::AppHeader;
use crate::components::route_guard::RequireRole;
use crate::net::types::Role;

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const TEACHER_ONLY: &[Role] = &[Role::Teacher];
const STUDENT_ONLY: &[Role] = &[Role::Student];

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <RequireRole allowed=ADMIN_ONLY>
            <AppHeader/>
            <main class="dashboard">
                <h1>"Admin dashboard"</h1>
                <p>"Review registrations and manage accounts across the school."</p>
            </main>
        </RequireRole>
    }
}

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    view! {
        <RequireRole allowed=TEACHER_ONLY>
            <AppHeader/>
            <main class="dashboard">
                <h1>"Teacher dashboard"</h1>
                <p>"Review submitted activities and track your classes."</p>
            </main>
        </RequireRole>
    }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    view! {
        <RequireRole allowed=STUDENT_ONLY>
            <AppHeader/>
            <main class="dashboard">
                <h1>"Student dashboard"</h1>
                <p>"Submit activities and follow your approvals and credits."</p>
            </main>
        </RequireRole>
    }
}
