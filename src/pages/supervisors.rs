//! Admin list of staff supervising a module.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paginated with the configured page size. The route's module id becomes the
//! `moduleId` filter; any change to filters or page re-fetches, and only the
//! newest response is applied.

#[cfg(test)]
#[path = "supervisors_test.rs"]
mod supervisors_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::pagination_bar::PaginationBar;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::{ModuleId, Supervision};
use crate::pages::parse_route_id;
use crate::state::auth::AuthState;
use crate::state::listing::{Filters, ListState};
use crate::util::auth::{install_role_guard, install_unauth_redirect};
use crate::util::token::Role;

/// Filters selecting the supervisions of `module_id`.
#[must_use]
pub fn supervision_filters(module_id: ModuleId) -> Filters {
    Filters::new().with("moduleId", module_id)
}

#[component]
pub fn SupervisorsPage() -> impl IntoView {
    let auth = expect_context::<ReadSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    install_role_guard(auth, Role::Admin, navigate);

    let params = use_params_map();
    let module_id = Memo::new(move |_| params.with(|p| p.get("module_id").and_then(|raw| parse_route_id(&raw))));
    let is_admin = Memo::new(move |_| auth.with(|a| a.role() == Some(Role::Admin)));

    let list = RwSignal::new(ListState::<Supervision>::paginated(Filters::new(), config.page_size));
    let query = Memo::new(move |_| list.with(ListState::query));

    Effect::new(move || {
        let Some(id) = module_id.get() else {
            return;
        };
        if !is_admin.get() {
            return;
        }
        let query = query.get();
        let filters = supervision_filters(id);
        if query.filters != filters {
            // Re-runs through `query` once the filters land.
            list.update(|l| {
                l.set_filters(filters);
            });
            return;
        }
        let Some(ticket) = list.try_update(ListState::begin_fetch) else {
            return;
        };
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_supervisions(&config, &query).await;
            list.update(|l| {
                l.apply(ticket, result);
            });
        });
    });

    let on_select = Callback::new(move |page: u32| {
        list.update(|l| {
            l.set_page(page);
        });
    });
    let on_show_all = Callback::new(move |()| list.update(ListState::show_full_list));

    let page = Signal::derive(move || list.with(ListState::page));
    let total_pages = Signal::derive(move || list.with(|l| l.total_pages.unwrap_or(1)));

    view! {
        <div class="supervisors-page">
            <Show when=move || is_admin.get()>
                <h1>"Supervisors"</h1>
                <Show when=move || module_id.get().is_none()>
                    <p class="supervisors-page__error">"Unknown module."</p>
                </Show>
                <Show when=move || list.with(|l| l.loading)>
                    <p>"Loading supervisors..."</p>
                </Show>
                {move || list.with(|l| l.error.clone()).map(|e| view! { <p class="supervisors-page__error">{e}</p> })}
                <table class="supervisors-page__table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            list.with(|l| l.rows.clone())
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{row.staff.id}</td>
                                            <td>{row.staff.name}</td>
                                            <td>{row.staff.email}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || list.with(ListState::shows_pagination)>
                    <PaginationBar page=page total_pages=total_pages on_select=on_select on_show_all=on_show_all/>
                </Show>
            </Show>
        </div>
    }
}
