//! Brief View
//!
//! Today's pre-shift brief: one composed snapshot from the backend, with
//! regenerate, PDF download and a print-friendly layout.

use leptos::prelude::*;

use super::view_state::{spawn_load, LoadState};
use super::Spinner;
use crate::api::BriefApi;
use crate::browser;
use crate::display::{dated_file_name, format_date, format_time, stars, today};
use crate::lifetime::use_view_scope;
use crate::models::{BriefData, Change, InventoryItem, Review};
use crate::store::use_api;

#[component]
pub fn BriefView() -> impl IntoView {
    let api = use_api();
    let scope = use_view_scope();

    let (brief, set_brief) = signal::<Option<BriefData>>(None);
    let (state, set_state) = signal(LoadState::default());

    let load = move || {
        let client = api.client();
        spawn_load(scope, "Brief", async move { client.get_brief().await }, set_state, move |data| {
            set_brief.set(Some(data))
        });
    };

    Effect::new(move |_| load());

    let on_download = move |_| {
        let client = api.client();
        let file_name = dated_file_name("pre-shift-brief", today(), "pdf");
        if let Err(e) = browser::open_download(&client.brief_pdf_url(), &file_name) {
            log::error!("[Brief] PDF download failed: {}", e);
        }
    };

    view! {
        <section class="page brief">
            <div class="page-header no-print">
                <h1>"Pre-Shift Brief"</h1>
                <div class="actions">
                    <button class="btn" disabled=move || state.get() == LoadState::Loading on:click=move |_| load()>
                        "Regenerate"
                    </button>
                    <button class="btn" on:click=on_download>"Download PDF"</button>
                    <button class="btn" on:click=move |_| browser::print_page()>"Print"</button>
                </div>
            </div>
            {move || match (state.get(), brief.get()) {
                (LoadState::Loading, None) => view! { <Spinner /> }.into_any(),
                (_, None) => view! { <p class="empty">"No brief available."</p> }.into_any(),
                (_, Some(data)) => view! { <BriefSheet data=data /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn BriefSheet(data: BriefData) -> impl IntoView {
    let active_changes: Vec<Change> = data.changes.into_iter().filter(|c| c.is_active).collect();

    view! {
        <article class="brief-sheet printable">
            <header class="brief-meta">
                <h2>{format_date(Some(data.date.as_str()))}</h2>
                <p class="muted">"Generated at " {format_time(&data.generated_at)}</p>
            </header>
            <BriefSection title="86'd Items" empty="Nothing 86'd today." count=data.eighty_six_items.len()>
                <StockList items=data.eighty_six_items />
            </BriefSection>
            <BriefSection title="Low Stock" empty="Nothing running low." count=data.low_stock_items.len()>
                <StockList items=data.low_stock_items />
            </BriefSection>
            <BriefSection title="Recent Reviews" empty="No recent reviews." count=data.recent_reviews.len()>
                <ReviewList reviews=data.recent_reviews />
            </BriefSection>
            <BriefSection title="Active Changes" empty="No active changes." count=active_changes.len()>
                <ul class="brief-list">
                    {active_changes
                        .into_iter()
                        .map(|c| {
                            view! {
                                <li>
                                    <strong>{c.title}</strong>
                                    {c.detail.map(|d| view! { <p>{d}</p> })}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </BriefSection>
        </article>
    }
}

#[component]
fn BriefSection(title: &'static str, empty: &'static str, count: usize, children: Children) -> impl IntoView {
    view! {
        <section class="brief-section">
            <h3>{title} " (" {count} ")"</h3>
            {if count == 0 {
                view! { <p class="empty">{empty}</p> }.into_any()
            } else {
                children().into_any()
            }}
        </section>
    }
}

#[component]
fn StockList(items: Vec<InventoryItem>) -> impl IntoView {
    view! {
        <ul class="brief-list">
            {items
                .into_iter()
                .map(|item| {
                    let name = item.display_name().to_string();
                    view! {
                        <li>
                            <strong>{name}</strong>
                            {item.notes.map(|n| view! { <span class="muted">" - " {n}</span> })}
                            {item.expected_back.map(|d| view! { <span class="muted">" (back " {d} ")"</span> })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// "Jan 15, 2025 · service"
fn review_meta(review: &Review) -> String {
    let date = format_date(review.created_at.as_deref());
    match review.theme.as_deref() {
        Some(theme) if !theme.is_empty() => format!("{} · {}", date, theme),
        _ => date,
    }
}

#[component]
fn ReviewList(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <ul class="brief-list">
            {reviews
                .into_iter()
                .map(|r| {
                    view! {
                        <li>
                            <span class="stars">{stars(r.rating)}</span>
                            <span class="source">{r.source.clone()}</span>
                            <span class="muted">{review_meta(&r)}</span>
                            {r.text.map(|t| view! { <p>{t}</p> })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(created_at: Option<&str>, theme: Option<&str>) -> Review {
        Review {
            review_id: "1".to_string(),
            source: "Google".to_string(),
            rating: 4,
            text: Some("Great pasta".to_string()),
            created_at: created_at.map(str::to_string),
            theme: theme.map(str::to_string),
            url: None,
        }
    }

    #[test]
    fn test_review_meta_shows_date_and_theme() {
        assert_eq!(review_meta(&review(Some("2025-01-15T10:00:00"), Some("service"))), "Jan 15, 2025 · service");
    }

    #[test]
    fn test_review_meta_without_theme_is_date_only() {
        assert_eq!(review_meta(&review(Some("2025-01-15T10:00:00"), None)), "Jan 15, 2025");
        assert_eq!(review_meta(&review(None, Some(""))), "-");
    }
}
