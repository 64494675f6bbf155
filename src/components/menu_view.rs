//! Menu View

use leptos::prelude::*;

use super::view_state::{spawn_action, spawn_load, LoadState};
use super::{ConfirmButton, Notice, NoticeBanner, Spinner};
use crate::api::MenuApi;
use crate::display::format_price;
use crate::filters::filter_menu;
use crate::flows;
use crate::forms::MenuForm;
use crate::lifetime::use_view_scope;
use crate::models::MenuItem;
use crate::store::use_api;

#[component]
pub fn MenuView() -> impl IntoView {
    let api = use_api();
    let scope = use_view_scope();

    let (menu, set_menu) = signal(Vec::<MenuItem>::new());
    let (state, set_state) = signal(LoadState::default());
    let (notice, set_notice) = signal::<Option<Notice>>(None);
    let (busy, set_busy) = signal(false);
    let (search, set_search) = signal(String::new());
    let (form, set_form) = signal(MenuForm::default());

    Effect::new(move |_| {
        let client = api.client();
        spawn_load(scope, "Menu", async move { client.list_menu().await }, set_state, move |loaded| {
            set_menu.set(loaded)
        });
    });

    let visible = Memo::new(move |_| search.with(|s| menu.with(|list| filter_menu(list, s))));

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = api.client();
        let current = form.get_untracked();
        spawn_action(
            scope,
            "Menu",
            async move { flows::create_menu_item(&client, &current).await },
            set_busy,
            set_notice,
            move |loaded| {
                if let Some(loaded) = loaded {
                    set_menu.set(loaded);
                }
                set_form.set(MenuForm::default());
                set_notice.set(Some(Notice::success("Menu item added")));
            },
        );
    };

    let on_toggle = Callback::new(move |(item_id, active): (String, bool)| {
        let client = api.client();
        spawn_action(
            scope,
            "Menu",
            async move { flows::set_menu_item_active(&client, &item_id, active).await },
            set_busy,
            set_notice,
            move |loaded| {
                if let Some(loaded) = loaded {
                    set_menu.set(loaded);
                }
            },
        );
    });

    let on_delete = Callback::new(move |item_id: String| {
        let client = api.client();
        spawn_action(
            scope,
            "Menu",
            async move { flows::delete_menu_item(&client, &item_id).await },
            set_busy,
            set_notice,
            move |loaded| {
                if let Some(loaded) = loaded {
                    set_menu.set(loaded);
                }
            },
        );
    });

    view! {
        <section class="page menu">
            <h1>"Menu"</h1>

            <NoticeBanner notice=notice set_notice=set_notice />

            <form class="card inline-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Item ID (e.g. CHK-001)"
                    prop:value=move || form.with(|f| f.item_id.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.item_id = value);
                    }
                />
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.name = value);
                    }
                />
                <input
                    type="text"
                    placeholder="Price"
                    prop:value=move || form.with(|f| f.price.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.price = value);
                    }
                />
                <input
                    type="text"
                    placeholder="Allergens"
                    prop:value=move || form.with(|f| f.allergy_flags.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.allergy_flags = value);
                    }
                />
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.active)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            set_form.update(|f| f.active = checked);
                        }
                    />
                    "Active"
                </label>
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>"Add"</button>
            </form>

            <div class="filter-row">
                <input
                    type="search"
                    class="search"
                    placeholder="Search menu..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || state.get() == LoadState::Loaded fallback=|| view! { <Spinner /> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th>"Price"</th>
                            <th>"Allergens"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .map(|item| {
                                    let toggle_id = item.item_id.clone();
                                    let delete_id = item.item_id.clone();
                                    let active = item.active;
                                    let next_active = !active;
                                    view! {
                                        <tr class:inactive=!active>
                                            <td>
                                                <strong>{item.name}</strong>
                                                <div class="muted">{item.item_id}</div>
                                            </td>
                                            <td>{format_price(item.price)}</td>
                                            <td>{item.allergy_flags.unwrap_or_default()}</td>
                                            <td>{if active { "Active" } else { "Inactive" }}</td>
                                            <td class="row-actions">
                                                <button
                                                    class="btn"
                                                    disabled=move || busy.get()
                                                    on:click=move |_| on_toggle.run((toggle_id.clone(), next_active))
                                                >
                                                    {if next_active { "Activate" } else { "Deactivate" }}
                                                </button>
                                                <ConfirmButton
                                                    label="Delete"
                                                    prompt="Delete this menu item?"
                                                    button_class="btn btn-danger"
                                                    disabled=busy
                                                    on_confirm=Callback::new(move |_: ()| on_delete.run(delete_id.clone()))
                                                />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
