//! Inventory View
//!
//! The 86 board: stock status per menu item with filters, inline edit,
//! delete, and CSV import.

use leptos::html;
use leptos::prelude::*;

use super::view_state::{spawn_action, spawn_load, LoadState};
use super::{ConfirmButton, Notice, NoticeBanner, Spinner, StatusBadge};
use crate::browser;
use crate::display::format_timestamp;
use crate::error::ActionError;
use crate::filters::{count_by_status, filter_inventory, StatusFilter};
use crate::flows;
use crate::forms::{InventoryEditForm, InventoryForm};
use crate::lifetime::use_view_scope;
use crate::models::{InventoryItem, MenuItem, StockStatus};
use crate::store::use_api;

#[component]
pub fn InventoryView() -> impl IntoView {
    let api = use_api();
    let scope = use_view_scope();

    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (menu, set_menu) = signal(Vec::<MenuItem>::new());
    let (state, set_state) = signal(LoadState::default());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (busy, set_busy) = signal(false);
    let (status_filter, set_status_filter) = signal(StatusFilter::All);
    let (search, set_search) = signal(String::new());
    let (form, set_form) = signal(InventoryForm::default());
    let (editing, set_editing) = signal::<Option<u32>>(None);
    let file_input = NodeRef::<html::Input>::new();

    // Inventory rows reference menu items, so both arrive before first render
    Effect::new(move |_| {
        let client = api.client();
        spawn_load(
            scope,
            "Inventory",
            async move { flows::load_inventory_board(&client).await },
            set_state,
            move |(loaded, menu_items)| {
                log::info!("[Inventory] Loaded {} items", loaded.len());
                set_items.set(loaded);
                set_menu.set(menu_items);
            },
        );
    });

    let visible = Memo::new(move |_| search.with(|s| items.with(|list| filter_inventory(list, status_filter.get(), s))));
    let counts = Memo::new(move |_| items.with(|list| count_by_status(list)));

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = api.client();
        let current = form.get_untracked();
        spawn_action(
            scope,
            "Inventory",
            async move { flows::create_inventory(&client, &current).await },
            set_busy,
            set_notice,
            move |loaded| {
                if let Some(loaded) = loaded {
                    set_items.set(loaded);
                }
                set_form.set(InventoryForm::default());
                set_notice.set(Some(Notice::success("Inventory item added")));
            },
        );
    };

    let on_save = Callback::new(move |(id, edit): (u32, InventoryEditForm)| {
        let client = api.client();
        spawn_action(
            scope,
            "Inventory",
            async move { flows::update_inventory(&client, id, &edit).await },
            set_busy,
            set_notice,
            move |loaded| {
                if let Some(loaded) = loaded {
                    set_items.set(loaded);
                }
                set_editing.set(None);
            },
        );
    });

    let on_delete = Callback::new(move |id: u32| {
        let client = api.client();
        spawn_action(
            scope,
            "Inventory",
            async move { flows::delete_inventory(&client, id).await },
            set_busy,
            set_notice,
            move |loaded| {
                if let Some(loaded) = loaded {
                    set_items.set(loaded);
                }
            },
        );
    });

    let on_upload = move |_| {
        let Some(input) = file_input.get() else { return };
        let Some(file) = browser::selected_file(&input) else {
            set_notice.set(Some(Notice::error("Choose a CSV file first")));
            return;
        };
        let client = api.client();
        spawn_action(
            scope,
            "Inventory",
            async move {
                let name = file.name();
                let contents = browser::read_file(&file).await?;
                let uploaded = flows::upload_inventory(&client, &name, contents).await?;
                Ok::<_, ActionError>(uploaded)
            },
            set_busy,
            set_notice,
            move |(summary, loaded)| {
                let message = summary.message.unwrap_or_else(|| match summary.rows {
                    Some(rows) => format!("Imported {} rows", rows),
                    None => "CSV uploaded".to_string(),
                });
                if let Some(loaded) = loaded {
                    set_items.set(loaded);
                }
                set_notice.set(Some(Notice::success(message)));
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
            },
        );
    };

    view! {
        <section class="page inventory">
            <div class="page-header">
                <h1>"86 Board"</h1>
                <div class="upload-row">
                    <input type="file" accept=".csv,text/csv" node_ref=file_input />
                    <button class="btn" disabled=move || busy.get() on:click=on_upload>"Upload CSV"</button>
                </div>
            </div>

            <NoticeBanner notice=notice set_notice=set_notice />

            <form class="card inline-form" on:submit=on_create>
                <select
                    prop:value=move || form.with(|f| f.item_id.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.item_id = value);
                    }
                >
                    <option value="">"Select menu item..."</option>
                    <For
                        each=move || menu.get()
                        key=|m| m.item_id.clone()
                        children=move |m| {
                            view! { <option value=m.item_id.clone()>{m.name.clone()} " (" {m.item_id.clone()} ")"</option> }
                        }
                    />
                </select>
                <StatusSelect
                    value=Signal::derive(move || form.with(|f| f.status))
                    on_change=Callback::new(move |status| set_form.update(|f| f.status = status))
                />
                <input
                    type="text"
                    placeholder="Notes"
                    prop:value=move || form.with(|f| f.notes.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.notes = value);
                    }
                />
                <input
                    type="date"
                    title="Expected back"
                    prop:value=move || form.with(|f| f.expected_back.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.expected_back = value);
                    }
                />
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>"Add"</button>
            </form>

            <div class="filter-row">
                {StatusFilter::OPTIONS
                    .iter()
                    .map(|&option| {
                        let count = move || match option {
                            StatusFilter::All => items.with(|list| list.len()),
                            StatusFilter::Only(status) => counts.with(|c| c.get(&status).copied().unwrap_or(0)),
                        };
                        let chip_class = move || {
                            if status_filter.get() == option { "chip active" } else { "chip" }
                        };
                        view! {
                            <button class=chip_class on:click=move |_| set_status_filter.set(option)>
                                {option.label()} " (" {count} ")"
                            </button>
                        }
                    })
                    .collect_view()}
                <input
                    type="search"
                    class="search"
                    placeholder="Search items..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || state.get() == LoadState::Loaded fallback=|| view! { <Spinner /> }>
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| view! { <p class="empty">"No inventory items match."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Item"</th>
                                <th>"Status"</th>
                                <th>"Notes"</th>
                                <th>"Expected Back"</th>
                                <th>"Updated"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                visible
                                    .get()
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <InventoryRow
                                                item=item
                                                editing=editing
                                                set_editing=set_editing
                                                busy=busy
                                                on_save=on_save
                                                on_delete=on_delete
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn InventoryRow(
    item: InventoryItem,
    editing: ReadSignal<Option<u32>>,
    set_editing: WriteSignal<Option<u32>>,
    busy: ReadSignal<bool>,
    on_save: Callback<(u32, InventoryEditForm)>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let id = item.id;
    let (draft, set_draft) = signal(InventoryEditForm::from_item(&item));
    let name = item.display_name().to_string();
    let item = StoredValue::new(item);

    let start_edit = move |_| {
        set_draft.set(item.with_value(InventoryEditForm::from_item));
        set_editing.set(Some(id));
    };

    view! {
        <tr>
            <td>
                <strong>{name}</strong>
                <div class="muted">{item.with_value(|i| i.item_id.clone())}</div>
            </td>
            {move || {
                if editing.get() == Some(id) {
                    view! {
                        <td>
                            <StatusSelect
                                value=Signal::derive(move || draft.with(|d| d.status))
                                on_change=Callback::new(move |status| set_draft.update(|d| d.status = status))
                            />
                        </td>
                        <td>
                            <input
                                type="text"
                                prop:value=move || draft.with(|d| d.notes.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_draft.update(|d| d.notes = value);
                                }
                            />
                        </td>
                        <td>
                            <input
                                type="date"
                                prop:value=move || draft.with(|d| d.expected_back.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_draft.update(|d| d.expected_back = value);
                                }
                            />
                        </td>
                        <td></td>
                        <td class="row-actions">
                            <button
                                class="btn btn-primary"
                                disabled=move || busy.get()
                                on:click=move |_| on_save.run((id, draft.get_untracked()))
                            >
                                "Save"
                            </button>
                            <button class="btn" on:click=move |_| set_editing.set(None)>"Cancel"</button>
                        </td>
                    }
                        .into_any()
                } else {
                    let current = item.get_value();
                    view! {
                        <td><StatusBadge status=current.status /></td>
                        <td>{current.notes.unwrap_or_default()}</td>
                        <td>{current.expected_back.unwrap_or_else(|| "-".to_string())}</td>
                        <td class="muted">{format_timestamp(current.updated_at.as_deref())}</td>
                        <td class="row-actions">
                            <button class="btn" on:click=start_edit>"Edit"</button>
                            <ConfirmButton
                                label="Delete"
                                prompt="Delete this item?"
                                button_class="btn btn-danger"
                                disabled=busy
                                on_confirm=Callback::new(move |_: ()| on_delete.run(id))
                            />
                        </td>
                    }
                        .into_any()
                }
            }}
        </tr>
    }
}

/// `<select>` over the three stock states
#[component]
fn StatusSelect(#[prop(into)] value: Signal<StockStatus>, on_change: Callback<StockStatus>) -> impl IntoView {
    view! {
        <select
            prop:value=move || value.get().as_str()
            on:change=move |ev| {
                if let Some(status) = StockStatus::from_wire(&event_target_value(&ev)) {
                    on_change.run(status);
                }
            }
        >
            {StockStatus::ALL
                .iter()
                .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                .collect_view()}
        </select>
    }
}
