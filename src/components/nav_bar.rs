//! Top bar with the signed-in user's name and a logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::SessionController;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let controller = expect_context::<SessionController>();
    let navigate = use_navigate();

    let user_name = move || auth.with(AuthState::display_name);
    let signed_in = move || auth.with(|a| a.session.is_some());

    let on_logout = move |_| {
        controller.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="toolbar">
            <a href="/" class="toolbar__back" title="Home">
                "Peer Review"
            </a>
            <span class="toolbar__spacer"></span>
            <Show when=signed_in>
                <span class="toolbar__user">{user_name}</span>
            </Show>
            <button class="btn toolbar__logout" disabled=move || !signed_in() on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}
