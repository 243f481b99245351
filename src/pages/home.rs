//! Landing page after sign-in.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::ModuleId;
use crate::pages::parse_route_id;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::token::Role;

/// Route of the supervisors list for `module_id`.
#[must_use]
pub fn supervisors_path(module_id: ModuleId) -> String {
    format!("/admin/module/{module_id}/supervisors")
}

/// Greets the user. Admins get a shortcut to a module's supervisors; students
/// reach review workspaces through links from their assignments.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let module_input = RwSignal::new(String::new());
    let module_link = move || module_input.with(|raw| parse_route_id(raw)).map(supervisors_path);
    let is_admin = move || auth.with(|a| a.role() == Some(Role::Admin));

    view! {
        <div class="home-page">
            <h1>{move || format!("Welcome, {}", auth.with(AuthState::display_name))}</h1>
            <Show
                when=is_admin
                fallback=|| view! { <p>"Open a peer review from your assignment to start grading."</p> }
            >
                <label>
                    "Module"
                    <input type="number" on:input=move |ev| module_input.set(event_target_value(&ev))/>
                </label>
                {move || module_link().map(|href| view! { <a class="btn" href=href>"Supervisors"</a> })}
            </Show>
        </div>
    }
}
