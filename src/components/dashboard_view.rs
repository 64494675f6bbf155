//! Dashboard View
//!
//! Landing page: today's headline counts from the brief, and shortcuts.

use leptos::prelude::*;

use super::view_state::{spawn_load, LoadState};
use super::{Spinner, StatCard};
use crate::api::BriefApi;
use crate::lifetime::use_view_scope;
use crate::models::BriefData;
use crate::store::{use_api, use_app_store, AppStateStoreFields, Page};

#[component]
pub fn DashboardView() -> impl IntoView {
    let store = use_app_store();
    let api = use_api();
    let scope = use_view_scope();

    let (brief, set_brief) = signal::<Option<BriefData>>(None);
    let (state, set_state) = signal(LoadState::default());

    Effect::new(move |_| {
        let client = api.client();
        spawn_load(
            scope,
            "Dashboard",
            async move { client.get_brief().await },
            set_state,
            move |data| set_brief.set(Some(data)),
        );
    });

    let count = move |pick: fn(&BriefData) -> usize| {
        Signal::derive(move || brief.with(|b| b.as_ref().map(pick).unwrap_or(0)).to_string())
    };
    let active_changes = |b: &BriefData| b.changes.iter().filter(|c| c.is_active).count();

    view! {
        <section class="page dashboard">
            <h1>"Dashboard"</h1>
            <Show when=move || state.get() == LoadState::Loaded fallback=|| view! { <Spinner /> }>
                <div class="stat-grid">
                    <StatCard label="86'd Items" value=count(|b| b.eighty_six_items.len()) tone="tone-danger" />
                    <StatCard label="Low Stock" value=count(|b| b.low_stock_items.len()) tone="tone-warning" />
                    <StatCard label="Recent Reviews" value=count(|b| b.recent_reviews.len()) />
                    <StatCard label="Active Changes" value=count(active_changes) tone="tone-info" />
                </div>
            </Show>
            <div class="quick-links">
                {Page::ALL
                    .iter()
                    .filter(|&&page| page != Page::Dashboard)
                    .map(|&page| {
                        view! {
                            <button class="card quick-link" on:click=move |_| store.page().set(page)>
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
