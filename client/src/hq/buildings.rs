use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use commerce_galaxy_shared::selection::buildings_in_base;
use commerce_galaxy_shared::{Building, Operation};

use crate::hq::store::{HqStore, mutate};
use crate::theme;

#[component]
pub(crate) fn BuildingSection() -> impl IntoView {
    let store: HqStore = expect_context();
    let message: RwSignal<Option<String>> = RwSignal::new(None);
    let catalog_choice: RwSignal<String> = RwSignal::new(String::new());

    let visible_buildings = Memo::new(move |_| {
        let base = store.selection.with(|s| s.base.clone());
        store
            .buildings
            .with(|buildings| buildings_in_base(buildings.items(), base.as_deref()))
    });

    let on_create = move |ev: SubmitEvent| {
        ev.prevent_default();
        let catalog_id = catalog_choice.get_untracked();
        let (api, session) = store.handles();
        let base = store.selection.with_untracked(|s| s.base.clone());
        mutate(
            message,
            Operation::CreateBuilding,
            async move {
                api.create_building(session.as_ref(), &catalog_id, base.as_deref())
                    .await
            },
            move || store.refresh_buildings(),
        );
    };

    let delete = move |building_id: String| {
        let (api, session) = store.handles();
        mutate(
            message,
            Operation::DeleteBuilding,
            async move { api.delete_building(session.as_ref(), &building_id).await },
            move || store.refresh_buildings(),
        );
    };

    view! {
        <section style=theme::PANEL>
            <h2 style="font-size: 1.5rem; margin: 0 0 16px;">"Buildings"</h2>
            <form on:submit=on_create style="display: flex; gap: 8px; align-items: center; margin-bottom: 16px;">
                <select
                    style=theme::INPUT
                    prop:value=move || catalog_choice.get()
                    on:change=move |ev| catalog_choice.set(event_target_value(&ev))
                >
                    <option value="" disabled=true>"Select a building"</option>
                    {move || {
                        store.catalogs.with(|catalogs| {
                            catalogs
                                .items()
                                .iter()
                                .map(|item| {
                                    let label = format!("{} ({}, size {})", item.name, item.kind, item.size);
                                    view! { <option value=item.id.clone()>{label}</option> }
                                })
                                .collect_view()
                        })
                    }}
                </select>
                <button type="submit" style=theme::button(theme::BLUE)>"Add Building"</button>
            </form>
            <table style=theme::TABLE>
                <thead>
                    <tr>
                        <th style=theme::CELL>"ID"</th>
                        <th style=theme::CELL>"Name"</th>
                        <th style=theme::CELL>"Size"</th>
                        <th style=theme::CELL>"Type"</th>
                        <th style=theme::CELL>"Base"</th>
                        <th style=theme::CELL>"Producing"</th>
                        <th style=theme::CELL>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible_buildings.get()
                        key=|building| building.id.clone()
                        children=move |building: Building| {
                            let id = StoredValue::new(building.id.clone());
                            let is_selected = move || {
                                store.selection.with(|s| s.building.as_deref() == Some(id.get_value().as_str()))
                            };
                            let base_name = base_label(store, &building);
                            let producing = move || {
                                let building_id = id.get_value();
                                store.buildings.with(|c| {
                                    c.items()
                                        .iter()
                                        .find(|b| b.id == building_id)
                                        .and_then(|b| b.producing.as_ref().map(|r| r.name.clone()))
                                        .unwrap_or_else(|| "Idle".to_string())
                                })
                            };
                            view! {
                                <tr
                                    style=move || if is_selected() { theme::SELECTED_ROW } else { theme::ROW }
                                    on:click=move |_| store.selection.update(|s| s.select_building(&id.get_value()))
                                >
                                    <td style=theme::CELL>{building.id.clone()}</td>
                                    <td style=theme::CELL>{building.catalog.name.clone()}</td>
                                    <td style=theme::CELL>{building.catalog.size}</td>
                                    <td style=theme::CELL>{building.catalog.kind.clone()}</td>
                                    <td style=theme::CELL>{base_name}</td>
                                    <td style=theme::CELL>{producing}</td>
                                    <td style=theme::CELL>
                                        <button
                                            style=theme::button(theme::RED)
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                delete(id.get_value());
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            {move || message.get().map(|text| view! { <p style=theme::MESSAGE>{text}</p> })}
        </section>
    }
}

/// Embedded base name, or the name from the base list when the API sent only an id.
fn base_label(store: HqStore, building: &Building) -> String {
    if !building.base.name.is_empty() {
        return building.base.name.clone();
    }
    store.bases.with_untracked(|bases| {
        bases
            .items()
            .iter()
            .find(|base| base.id == building.base.id)
            .map(|base| base.name.clone())
            .unwrap_or_else(|| building.base.id.clone())
    })
}
