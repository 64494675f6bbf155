//! Reviews View
//!
//! Guest reviews for a trailing window, filterable by rating and source,
//! shown as a flat list or grouped per platform.

use leptos::prelude::*;

use super::view_state::{spawn_load, LoadState};
use super::{Spinner, StatCard};
use crate::api::ReviewApi;
use crate::config::REVIEW_WINDOWS;
use crate::display::{format_average, format_date, format_percent, stars};
use crate::filters::{filter_reviews, group_by_source, review_sources, review_stats, ReviewFilter};
use crate::lifetime::use_view_scope;
use crate::models::Review;
use crate::store::{use_api, use_app_store, AppStateStoreFields};

#[component]
pub fn ReviewsView() -> impl IntoView {
    let store = use_app_store();
    let api = use_api();
    let scope = use_view_scope();

    let (reviews, set_reviews) = signal(Vec::<Review>::new());
    let (state, set_state) = signal(LoadState::default());
    let (days, set_days) = signal(store.config().read_untracked().review_days);
    let (filter, set_filter) = signal(ReviewFilter::default());
    let (grouped, set_grouped) = signal(false);

    // Refetch whenever the window changes
    Effect::new(move |_| {
        let window = days.get();
        let client = api.client();
        spawn_load(
            scope,
            "Reviews",
            async move { client.list_reviews(window).await },
            set_state,
            move |loaded| {
                log::info!("[Reviews] Loaded {} reviews for {} days", loaded.len(), window);
                set_reviews.set(loaded);
            },
        );
    });

    let visible = Memo::new(move |_| filter.with(|f| reviews.with(|list| filter_reviews(list, f))));
    let sources = Memo::new(move |_| reviews.with(|list| review_sources(list)));
    let stats = Memo::new(move |_| reviews.with(|list| review_stats(list)));

    view! {
        <section class="page reviews">
            <div class="page-header">
                <h1>"Reviews"</h1>
                <select
                    prop:value=move || days.get().to_string()
                    on:change=move |ev| {
                        if let Ok(window) = event_target_value(&ev).parse::<u32>() {
                            set_days.set(window);
                        }
                    }
                >
                    {REVIEW_WINDOWS
                        .iter()
                        .map(|&d| view! { <option value=d.to_string()>"Last " {d} " days"</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="stat-grid">
                <StatCard label="Average Rating" value=Signal::derive(move || format_average(stats.get().average)) />
                <StatCard label="Total Reviews" value=Signal::derive(move || stats.get().total.to_string()) />
                <StatCard
                    label="Positive"
                    value=Signal::derive(move || format_percent(stats.get().positive_percent))
                    hint="4 stars and up"
                    tone="tone-success"
                />
            </div>

            <div class="filter-row">
                <select
                    on:change=move |ev| {
                        let rating = event_target_value(&ev).parse::<u8>().ok();
                        set_filter.update(|f| f.rating = rating);
                    }
                >
                    <option value="">"All ratings"</option>
                    {(1..=5u8).rev().map(|r| view! { <option value=r.to_string()>{stars(r)}</option> }).collect_view()}
                </select>
                <select
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_filter.update(|f| f.source = (!value.is_empty()).then_some(value));
                    }
                >
                    <option value="">"All sources"</option>
                    <For
                        each=move || sources.get()
                        key=|s| s.clone()
                        children=move |s| view! { <option value=s.clone()>{s.clone()}</option> }
                    />
                </select>
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || grouped.get()
                        on:change=move |ev| set_grouped.set(event_target_checked(&ev))
                    />
                    "Group by source"
                </label>
            </div>

            <Show when=move || state.get() == LoadState::Loaded fallback=|| view! { <Spinner /> }>
                {move || {
                    let list = visible.get();
                    if list.is_empty() {
                        view! { <p class="empty">"No reviews in this window."</p> }.into_any()
                    } else if grouped.get() {
                        group_by_source(&list)
                            .into_iter()
                            .map(|group| {
                                let heading = format!(
                                    "{} · {} reviews · avg {}",
                                    group.source,
                                    group.reviews.len(),
                                    format_average(Some(group.average))
                                );
                                view! {
                                    <div class="review-group">
                                        <h3>{heading}</h3>
                                        <ReviewCards reviews=group.reviews />
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    } else {
                        view! { <ReviewCards reviews=list /> }.into_any()
                    }
                }}
            </Show>
        </section>
    }
}

#[component]
fn ReviewCards(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <div class="review-list">
            {reviews
                .into_iter()
                .map(|r| {
                    view! {
                        <div class="card review-card">
                            <div class="review-head">
                                <span class="stars">{stars(r.rating)}</span>
                                <span class="source">{r.source}</span>
                                <span class="muted">{format_date(r.created_at.as_deref())}</span>
                            </div>
                            {r.text.map(|t| view! { <p>{t}</p> })}
                            {r.theme.map(|t| view! { <span class="tag">{t}</span> })}
                            {r.url.map(|u| view! { <a href=u target="_blank" rel="noopener">"View"</a> })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
