//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::nav_bar::NavBar;
use crate::config::ClientConfig;
use crate::pages::{home::HomePage, login::LoginPage, peer_review::PeerReviewPage, supervisors::SupervisorsPage};
use crate::util::auth::SessionController;

/// Root application component.
///
/// Resolves the client config, bootstraps the session from storage, and
/// provides the config, the read-only auth signal, and the session controller
/// to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let controller = SessionController::install(&config);
    if controller.bootstrap_session() {
        log::info!("restored session from storage");
    }

    provide_context(config);
    provide_context(controller.reader());
    provide_context(controller);

    view! {
        <Title text="Peer Review"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/admin/module/:module_id/supervisors") view=SupervisorsPage/>
                    <Route
                        path=path!("/student/module/:module_id/assignment/:assignment_id/question/:question_id/review")
                        view=PeerReviewPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
