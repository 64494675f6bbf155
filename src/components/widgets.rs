//! Small shared widgets: spinner, stat card, notice banner, status badge.

use std::fmt;

use leptos::prelude::*;

use crate::models::StockStatus;

/// Inline result message shown after a user action
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(message: impl fmt::Display) -> Self {
        Notice::Success(format!("✅ {}", message))
    }

    /// Error text as received (backend `detail` or transport message)
    pub fn error(err: impl fmt::Display) -> Self {
        Notice::Error(format!("❌ Error: {}", err))
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "notice notice-success",
            Notice::Error(_) => "notice notice-error",
        }
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner"></div>
        </div>
    }
}

/// Dismissable banner for the current notice, if any
#[component]
pub fn NoticeBanner(notice: ReadSignal<Option<Notice>>, set_notice: WriteSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! {
                <div class=n.class()>
                    <p>{n.text().to_string()}</p>
                    <button type="button" class="notice-close" on:click=move |_| set_notice.set(None)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] hint: Option<String>,
    #[prop(into, optional)] tone: Option<String>,
) -> impl IntoView {
    let card_class = format!("card stat-card {}", tone.unwrap_or_default());
    view! {
        <div class=card_class>
            <p class="stat-label">{label}</p>
            <p class="stat-value">{move || value.get()}</p>
            {hint.map(|h| view! { <p class="stat-hint">{h}</p> })}
        </div>
    }
}

pub fn status_badge_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Ok => "badge badge-ok",
        StockStatus::Low => "badge badge-low",
        StockStatus::EightySix => "badge badge-86",
    }
}

#[component]
pub fn StatusBadge(status: StockStatus) -> impl IntoView {
    view! { <span class=status_badge_class(status)>{status.as_str().to_uppercase()}</span> }
}
