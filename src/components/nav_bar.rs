//! Nav Bar Component
//!
//! Tab bar for switching between views, plus the backend liveness badge.

use leptos::prelude::*;

use crate::store::{use_app_store, BackendStatus, Page, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    let badge = move || match store.backend().get() {
        BackendStatus::Unknown => ("status-badge unknown", "Checking backend..."),
        BackendStatus::Online => ("status-badge online", "Backend online"),
        BackendStatus::Offline => ("status-badge offline", "Backend offline"),
    };

    view! {
        <header class="nav-bar">
            <span class="nav-brand">"Ops Hub"</span>
            <nav class="nav-tabs">
                {Page::ALL
                    .iter()
                    .map(|&page| {
                        let tab_class = move || {
                            if store.page().get() == page { "nav-tab active" } else { "nav-tab" }
                        };
                        view! {
                            <button class=tab_class on:click=move |_| store.page().set(page)>
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class=move || badge().0>{move || badge().1}</span>
        </header>
    }
}
