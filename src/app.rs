//! Ops Hub Frontend App
//!
//! Shell component: nav bar on top, the selected page below.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{AdminView, BriefView, ChangesView, DashboardView, InventoryView, MenuView, NavBar, ReviewsView};
use crate::config::AppConfig;
use crate::store::{use_api, AppState, AppStateStoreFields, AppStore, BackendStatus, Page};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store: AppStore = Store::new(AppState::new(config));
    provide_context(store);
    let api = use_api();

    // Liveness probe on mount; the result only drives the badge
    Effect::new(move |_| {
        let client = api.client();
        spawn_local(async move {
            let status = match client.ping().await {
                Ok(ping) => {
                    log::info!("[App] Backend online: {}", ping.message);
                    BackendStatus::Online
                }
                Err(e) => {
                    log::warn!("[App] Backend unreachable at {}: {}", client.base_url(), e);
                    BackendStatus::Offline
                }
            };
            store.backend().set(status);
        });
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match store.page().get() {
                    Page::Dashboard => view! { <DashboardView /> }.into_any(),
                    Page::Brief => view! { <BriefView /> }.into_any(),
                    Page::Inventory => view! { <InventoryView /> }.into_any(),
                    Page::Reviews => view! { <ReviewsView /> }.into_any(),
                    Page::Changes => view! { <ChangesView /> }.into_any(),
                    Page::Menu => view! { <MenuView /> }.into_any(),
                    Page::Admin => view! { <AdminView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
