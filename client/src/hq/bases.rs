use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use commerce_galaxy_shared::selection::bases_on_planet;
use commerce_galaxy_shared::{Base, BaseEdit, Operation};

use crate::hq::store::{HqStore, mutate};
use crate::theme;

const DEFAULT_BASE_SIZE: u32 = 25;

#[derive(Clone, Copy)]
struct BaseEditor {
    editing: RwSignal<Option<String>>,
    name: RwSignal<String>,
    size: RwSignal<u32>,
}

/// Create form plus the editable base table.
#[component]
pub(crate) fn BaseSection() -> impl IntoView {
    let store: HqStore = expect_context();
    let message: RwSignal<Option<String>> = RwSignal::new(None);
    let new_name = RwSignal::new(String::new());
    let new_size = RwSignal::new(DEFAULT_BASE_SIZE);
    let editor = BaseEditor {
        editing: RwSignal::new(None),
        name: RwSignal::new(String::new()),
        size: RwSignal::new(0),
    };

    let visible_bases = Memo::new(move |_| {
        let planet = store.selection.with(|s| s.planet.clone());
        store
            .bases
            .with(|bases| bases_on_planet(bases.items(), planet.as_deref()))
    });

    let on_create = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (api, session) = store.handles();
        let name = new_name.get_untracked().trim().to_string();
        let size = new_size.get_untracked();
        let planet = store.selection.with_untracked(|s| s.planet.clone());
        mutate(
            message,
            Operation::CreateBase,
            async move {
                api.create_base(session.as_ref(), &name, size, planet.as_deref())
                    .await
            },
            move || {
                new_name.set(String::new());
                new_size.set(DEFAULT_BASE_SIZE);
                store.refresh_bases();
            },
        );
    };

    provide_context(editor);
    provide_context(BaseMessage(message));

    view! {
        <section style=theme::PANEL>
            <h2 style="font-size: 1.5rem; margin: 0 0 16px;">"Bases"</h2>
            <form on:submit=on_create style="display: flex; gap: 8px; align-items: center; margin-bottom: 16px;">
                <input
                    type="text"
                    placeholder="Base name"
                    style=theme::INPUT
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="1"
                    style=theme::INPUT
                    prop:value=move || new_size.get().to_string()
                    on:input=move |ev| new_size.set(event_target_value(&ev).parse().unwrap_or(0))
                />
                <button type="submit" style=theme::button(theme::PURPLE)>"Create Base"</button>
            </form>
            {move || {
                store.selection.with(|s| s.planet.is_none()).then(|| view! {
                    <p style="color: #9ca3af; font-size: 0.875rem;">"Select a planet to place a new base."</p>
                })
            }}
            <table style=theme::TABLE>
                <thead>
                    <tr>
                        <th style=theme::CELL>"ID"</th>
                        <th style=theme::CELL>"Name"</th>
                        <th style=theme::CELL>"Size"</th>
                        <th style=theme::CELL>"Planet"</th>
                        <th style=theme::CELL>"User"</th>
                        <th style=theme::CELL>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible_bases.get()
                        key=|base| (base.id.clone(), base.name.clone(), base.size)
                        children=move |base| view! { <BaseRow base=base /> }
                    />
                </tbody>
            </table>
            {move || message.get().map(|text| view! { <p style=theme::MESSAGE>{text}</p> })}
        </section>
    }
}

#[derive(Clone, Copy)]
struct BaseMessage(RwSignal<Option<String>>);

#[component]
fn BaseRow(base: Base) -> impl IntoView {
    let store: HqStore = expect_context();
    let editor: BaseEditor = expect_context();
    let BaseMessage(message) = expect_context();

    let id = StoredValue::new(base.id.clone());
    let is_editing = move || editor.editing.with(|e| e.as_deref() == Some(id.get_value().as_str()));
    let is_selected =
        move || store.selection.with(|s| s.base.as_deref() == Some(id.get_value().as_str()));

    let start_edit = {
        let base = base.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            editor.editing.set(Some(base.id.clone()));
            editor.name.set(base.name.clone());
            editor.size.set(base.size);
        }
    };

    let save_edit = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let (api, session) = store.handles();
        let base_id = id.get_value();
        let edit = BaseEdit {
            name: editor.name.get_untracked(),
            size: editor.size.get_untracked(),
        };
        mutate(
            message,
            Operation::UpdateBase,
            async move { api.update_base(session.as_ref(), &base_id, &edit).await },
            move || {
                editor.editing.set(None);
                store.refresh_bases();
            },
        );
    };

    let delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let (api, session) = store.handles();
        let base_id = id.get_value();
        mutate(
            message,
            Operation::DeleteBase,
            async move { api.delete_base(session.as_ref(), &base_id).await },
            move || {
                store.refresh_bases();
                store.refresh_buildings();
            },
        );
    };

    let owner = base.user.as_ref().map(|u| u.username.clone()).unwrap_or_default();
    let name = base.name.clone();
    let size = base.size;

    view! {
        <tr
            style=move || if is_selected() { theme::SELECTED_ROW } else { theme::ROW }
            on:click=move |_| store.selection.update(|s| s.select_base(&id.get_value()))
        >
            <td style=theme::CELL>{base.id.clone()}</td>
            <td style=theme::CELL>
                {move || if is_editing() {
                    view! {
                        <input
                            type="text"
                            style=theme::INPUT
                            prop:value=move || editor.name.get()
                            on:input=move |ev| editor.name.set(event_target_value(&ev))
                            on:click=|ev| ev.stop_propagation()
                        />
                    }.into_any()
                } else {
                    name.clone().into_any()
                }}
            </td>
            <td style=theme::CELL>
                {move || if is_editing() {
                    view! {
                        <input
                            type="number"
                            style=theme::INPUT
                            prop:value=move || editor.size.get().to_string()
                            on:input=move |ev| editor.size.set(event_target_value(&ev).parse().unwrap_or(0))
                            on:click=|ev| ev.stop_propagation()
                        />
                    }.into_any()
                } else {
                    size.to_string().into_any()
                }}
            </td>
            <td style=theme::CELL>{base.planet.name.clone()}</td>
            <td style=theme::CELL>{owner}</td>
            <td style=theme::CELL>
                {move || if is_editing() {
                    view! {
                        <button style=theme::button(theme::GREEN) on:click=save_edit>"\u{2713}"</button>
                        <button
                            style=theme::button(theme::GRAY)
                            on:click=move |ev| {
                                ev.stop_propagation();
                                editor.editing.set(None);
                            }
                        >
                            "Cancel"
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button style=theme::button(theme::BLUE) on:click=start_edit.clone()>"Edit"</button>
                        <button style=theme::button(theme::RED) on:click=delete>"Delete"</button>
                    }.into_any()
                }}
            </td>
        </tr>
    }
}
