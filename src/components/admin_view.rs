//! Admin View
//!
//! Record counts plus the bulk operations: seed fixtures, wipe everything,
//! and export the whole store as JSON.

use leptos::prelude::*;

use super::view_state::{spawn_action, spawn_load, LoadState};
use super::{ConfirmButton, Notice, NoticeBanner, StatCard};
use crate::api::AdminApi;
use crate::browser;
use crate::display::{dated_file_name, today};
use crate::error::ApiError;
use crate::flows;
use crate::lifetime::use_view_scope;
use crate::models::{AdminStats, ClearSummary, InjectSummary};
use crate::store::use_api;

fn inject_message(summary: &InjectSummary) -> String {
    let counts = format!(
        "{} menu items, {} inventory rows, {} reviews, {} changes",
        summary.menu_count, summary.inventory_count, summary.reviews_count, summary.changes_count
    );
    if summary.message.is_empty() {
        format!("Injected {}", counts)
    } else {
        format!("{} ({})", summary.message, counts)
    }
}

fn clear_message(summary: &ClearSummary) -> String {
    let deleted = summary.total_deleted_text();
    if summary.message.is_empty() {
        format!("Deleted {}", deleted)
    } else {
        format!("{} (deleted: {})", summary.message, deleted)
    }
}

#[component]
pub fn AdminView() -> impl IntoView {
    let api = use_api();
    let scope = use_view_scope();

    let (stats, set_stats) = signal(AdminStats::default());
    let (state, set_state) = signal(LoadState::default());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let client = api.client();
        spawn_load(scope, "Admin", async move { client.admin_stats().await }, set_state, move |loaded| {
            set_stats.set(loaded)
        });
    });

    let on_inject = move |_| {
        let client = api.client();
        spawn_action(
            scope,
            "Admin",
            async move { flows::inject_data(&client).await },
            set_busy,
            set_notice,
            move |(summary, refreshed)| {
                if let Some(refreshed) = refreshed {
                    set_stats.set(refreshed);
                }
                set_notice.set(Some(Notice::success(inject_message(&summary))));
            },
        );
    };

    let on_clear = Callback::new(move |_: ()| {
        let client = api.client();
        spawn_action(
            scope,
            "Admin",
            async move { flows::clear_data(&client).await },
            set_busy,
            set_notice,
            move |(summary, refreshed)| {
                if let Some(refreshed) = refreshed {
                    set_stats.set(refreshed);
                }
                set_notice.set(Some(Notice::success(clear_message(&summary))));
            },
        );
    });

    let on_export = move |_| {
        let client = api.client();
        spawn_action(
            scope,
            "Admin",
            async move {
                let bytes = client.export_data().await?;
                let file_name = dated_file_name("restaurant-data", today(), "json");
                browser::save_bytes(&file_name, "application/json", &bytes)?;
                log::info!("[Admin] Exported {} bytes to {}", bytes.len(), file_name);
                Ok::<_, ApiError>(())
            },
            set_busy,
            set_notice,
            move |()| set_notice.set(Some(Notice::success("Data exported successfully!"))),
        );
    };

    let count = move |pick: fn(&AdminStats) -> u32| {
        Signal::derive(move || {
            if state.get() == LoadState::Loading {
                "...".to_string()
            } else {
                stats.with(pick).to_string()
            }
        })
    };

    view! {
        <section class="page admin">
            <h1>"Admin"</h1>

            <div class="stat-grid">
                <StatCard label="Menu Items" value=count(|s| s.menu_count) />
                <StatCard label="Inventory" value=count(|s| s.inventory_count) />
                <StatCard label="Reviews" value=count(|s| s.reviews_count) />
                <StatCard label="Changes" value=count(|s| s.changes_count) />
            </div>

            <NoticeBanner notice=notice set_notice=set_notice />

            <div class="card admin-actions">
                <div class="admin-action">
                    <h3>"Inject Sample Data"</h3>
                    <p class="muted">"Seed menu, inventory, reviews and changes with demo records."</p>
                    <button class="btn btn-primary" disabled=move || busy.get() on:click=on_inject>
                        "Inject Data"
                    </button>
                </div>
                <div class="admin-action">
                    <h3>"Export Data"</h3>
                    <p class="muted">"Download every record as JSON."</p>
                    <button class="btn" disabled=move || busy.get() on:click=on_export>
                        "Export JSON"
                    </button>
                </div>
                <div class="admin-action danger-zone">
                    <h3>"Clear All Data"</h3>
                    <p class="muted">"Permanently delete every record."</p>
                    <ConfirmButton
                        label="Clear Data"
                        prompt="Delete ALL data? This cannot be undone."
                        button_class="btn btn-danger"
                        disabled=busy
                        on_confirm=on_clear
                    />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_message_accepts_text_or_count() {
        let counted = ClearSummary { message: "All data cleared".to_string(), total_deleted: serde_json::json!(42) };
        assert_eq!(clear_message(&counted), "All data cleared (deleted: 42)");

        let phrased = ClearSummary { message: String::new(), total_deleted: serde_json::json!("all records") };
        assert_eq!(clear_message(&phrased), "Deleted all records");
    }

    #[test]
    fn test_inject_message_lists_counts() {
        let summary = InjectSummary {
            message: "Sample data injected".to_string(),
            menu_count: 4,
            inventory_count: 3,
            reviews_count: 3,
            changes_count: 2,
        };
        assert_eq!(
            inject_message(&summary),
            "Sample data injected (4 menu items, 3 inventory rows, 3 reviews, 2 changes)"
        );
    }
}
