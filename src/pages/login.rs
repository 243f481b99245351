//! Login page: email, password, and the role whose login route to use.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;
use crate::util::auth::SessionController;
use crate::util::token::Role;

/// Role chosen in the login form.
#[must_use]
pub fn role_from_value(value: &str) -> Role {
    match value {
        "student" => Role::Student,
        "staff" => Role::Staff,
        "admin" => Role::Admin,
        _ => Role::Unknown,
    }
}

/// Inline message for a failed login request.
#[must_use]
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(400 | 401 | 403) => "Invalid email or password.".to_owned(),
        other => other.message(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let controller = expect_context::<SessionController>();
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Signed-in users have nothing to do here.
    let home = navigate.clone();
    Effect::new(move || {
        if auth.with(|a| !a.loading && a.session.is_some()) {
            home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = LoginRequest { email: email.get_untracked().trim().to_owned(), password: password.get_untracked() };
        if request.email.is_empty() || request.password.is_empty() {
            error.set(Some("Email and password are required.".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);
        let cfg = config.get_value();
        let selected = role.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = match api::login(&cfg, selected, &request).await {
                Ok(token) => match controller.login(&token) {
                    Ok(true) => Ok(()),
                    Ok(false) => Err("That session has already expired.".to_owned()),
                    Err(e) => {
                        log::warn!("login returned an unreadable token: {e}");
                        Err("Login failed.".to_owned())
                    }
                },
                Err(e) => {
                    log::warn!("login failed: {e}");
                    Err(login_error_message(&e))
                }
            };
            busy.set(false);
            match outcome {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Peer Review"</h1>
            <form class="login-page__form" on:submit=on_submit>
                <label>
                    "Email"
                    <input type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev))/>
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Role"
                    <select on:change=move |ev| role.set(role_from_value(&event_target_value(&ev)))>
                        <option value="student" selected=true>
                            "Student"
                        </option>
                        <option value="staff">"Staff"</option>
                        <option value="admin">"Admin"</option>
                    </select>
                </label>
                {move || error.get().map(|e| view! { <p class="login-page__error">{e}</p> })}
                <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
