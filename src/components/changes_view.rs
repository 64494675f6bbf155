//! Changes View
//!
//! Staff announcements: create, edit, toggle active, delete.

use leptos::prelude::*;

use super::view_state::{spawn_action, spawn_load, LoadState};
use super::{ConfirmButton, Notice, NoticeBanner, Spinner, StatCard};
use crate::api::ChangeApi;
use crate::display::{format_percent, format_timestamp};
use crate::filters::{change_stats, split_changes};
use crate::flows;
use crate::forms::ChangeForm;
use crate::lifetime::use_view_scope;
use crate::models::Change;
use crate::store::use_api;

#[component]
pub fn ChangesView() -> impl IntoView {
    let api = use_api();
    let scope = use_view_scope();

    let (changes, set_changes) = signal(Vec::<Change>::new());
    let (state, set_state) = signal(LoadState::default());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (busy, set_busy) = signal(false);
    let (form, set_form) = signal(ChangeForm::default());
    // `Some(change_id)` while the form edits an existing change
    let (editing, set_editing) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let client = api.client();
        spawn_load(scope, "Changes", async move { client.list_changes().await }, set_state, move |loaded| {
            set_changes.set(loaded)
        });
    });

    let sections = Memo::new(move |_| changes.with(|list| split_changes(list)));
    let stats = Memo::new(move |_| changes.with(|list| change_stats(list)));

    let reset_form = move || {
        set_form.set(ChangeForm::default());
        set_editing.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = api.client();
        let current = form.get_untracked();
        let target = editing.get_untracked();
        spawn_action(
            scope,
            "Changes",
            async move {
                match target {
                    Some(change_id) => flows::edit_change(&client, &change_id, &current).await,
                    None => flows::create_change(&client, &current).await,
                }
            },
            set_busy,
            set_notice,
            move |loaded| {
                if let Some(loaded) = loaded {
                    set_changes.set(loaded);
                }
                reset_form();
            },
        );
    };

    let on_edit = Callback::new(move |change: Change| {
        set_form.set(ChangeForm::from_change(&change));
        set_editing.set(Some(change.change_id));
    });

    let on_toggle = Callback::new(move |(change_id, active): (String, bool)| {
        let client = api.client();
        spawn_action(
            scope,
            "Changes",
            async move { flows::set_change_active(&client, &change_id, active).await },
            set_busy,
            set_notice,
            move |loaded| {
                if let Some(loaded) = loaded {
                    set_changes.set(loaded);
                }
            },
        );
    });

    let on_delete = Callback::new(move |change_id: String| {
        let client = api.client();
        spawn_action(
            scope,
            "Changes",
            async move { flows::delete_change(&client, &change_id).await },
            set_busy,
            set_notice,
            move |loaded| {
                if let Some(loaded) = loaded {
                    set_changes.set(loaded);
                }
            },
        );
    });

    let render_list = move |list: Vec<Change>| {
        list.into_iter()
            .map(|change| {
                view! { <ChangeCard change=change busy=busy on_edit=on_edit on_toggle=on_toggle on_delete=on_delete /> }
            })
            .collect_view()
    };

    view! {
        <section class="page changes">
            <h1>"Changes"</h1>

            <div class="stat-grid">
                <StatCard label="Active" value=Signal::derive(move || stats.get().active.to_string()) tone="tone-info" />
                <StatCard label="Total" value=Signal::derive(move || stats.get().total.to_string()) />
                <StatCard label="Active Rate" value=Signal::derive(move || format_percent(stats.get().active_percent)) />
            </div>

            <NoticeBanner notice=notice set_notice=set_notice />

            <form class="card change-form" on:submit=on_submit>
                <h3>{move || if editing.get().is_some() { "Edit Change" } else { "New Change" }}</h3>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.title = value);
                    }
                />
                <textarea
                    placeholder="Details"
                    prop:value=move || form.with(|f| f.detail.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.detail = value);
                    }
                ></textarea>
                <div class="actions">
                    <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                        {move || if editing.get().is_some() { "Save" } else { "Post Change" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button type="button" class="btn" on:click=move |_| reset_form()>"Cancel"</button>
                    </Show>
                </div>
            </form>

            <Show when=move || state.get() == LoadState::Loaded fallback=|| view! { <Spinner /> }>
                <h2>"Active"</h2>
                {move || {
                    let active = sections.with(|(active, _)| active.clone());
                    if active.is_empty() {
                        view! { <p class="empty">"No active changes."</p> }.into_any()
                    } else {
                        render_list(active).into_any()
                    }
                }}
                <h2>"Inactive"</h2>
                {move || {
                    let inactive = sections.with(|(_, inactive)| inactive.clone());
                    if inactive.is_empty() {
                        view! { <p class="empty">"No inactive changes."</p> }.into_any()
                    } else {
                        render_list(inactive).into_any()
                    }
                }}
            </Show>
        </section>
    }
}

#[component]
fn ChangeCard(
    change: Change,
    busy: ReadSignal<bool>,
    on_edit: Callback<Change>,
    on_toggle: Callback<(String, bool)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let card_class = if change.is_active { "card change-card" } else { "card change-card inactive" };
    let toggle_label = if change.is_active { "Deactivate" } else { "Activate" };
    let next_active = !change.is_active;
    let change_id = change.change_id.clone();
    let delete_id = change.change_id.clone();
    let meta = format!("{} · {}", change.created_by, format_timestamp(change.created_at.as_deref()));
    let stored = StoredValue::new(change.clone());

    view! {
        <div class=card_class>
            <h3>{change.title}</h3>
            {change.detail.map(|d| view! { <p>{d}</p> })}
            <p class="muted">{meta}</p>
            <div class="row-actions">
                <button class="btn" disabled=move || busy.get() on:click=move |_| on_edit.run(stored.get_value())>
                    "Edit"
                </button>
                <button
                    class="btn"
                    disabled=move || busy.get()
                    on:click=move |_| on_toggle.run((change_id.clone(), next_active))
                >
                    {toggle_label}
                </button>
                <ConfirmButton
                    label="Delete"
                    prompt="Delete this change?"
                    button_class="btn btn-danger"
                    disabled=busy
                    on_confirm=Callback::new(move |_: ()| on_delete.run(delete_id.clone()))
                />
            </div>
        </div>
    }
}
