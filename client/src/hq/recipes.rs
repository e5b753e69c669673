use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use commerce_galaxy_shared::queue::Direction;
use commerce_galaxy_shared::selection::recipes_for;
use commerce_galaxy_shared::{BuildingEdit, EditGate, Recipe};

use crate::countdown;
use crate::hq::store::HqStore;
use crate::theme;

/// Recipe picker, current production with its countdown, and the queue editor
/// for the selected building.
#[component]
pub(crate) fn RecipeSection() -> impl IntoView {
    let store: HqStore = expect_context();
    let message: RwSignal<Option<String>> = RwSignal::new(None);
    let recipe_choice: RwSignal<Option<String>> = RwSignal::new(None);
    let remaining: RwSignal<Option<String>> = RwSignal::new(None);
    let gate = RwSignal::new(EditGate::default());
    let busy = move || gate.with(EditGate::is_busy);

    let selected_building = Memo::new(move |_| {
        let id = store.selection.with(|s| s.building.clone())?;
        store
            .buildings
            .with(|c| c.items().iter().find(|b| b.id == id).cloned())
    });

    let offered = Memo::new(move |_| {
        let building = selected_building.get()?;
        Some(store.recipes.with(|c| recipes_for(c.items(), &building)))
    });

    let chosen_recipe = Memo::new(move |_| {
        let id = recipe_choice.get()?;
        offered
            .get()?
            .into_iter()
            .find(|recipe| recipe.id == id)
    });

    let selected_id = Memo::new(move |_| store.selection.with(|s| s.building.clone()));

    // Reset the picker when another building is selected.
    Effect::new(move || {
        let _ = selected_id.get();
        recipe_choice.set(None);
    });

    Effect::new(move || {
        countdown::watch(selected_building.get(), remaining);
        on_cleanup(countdown::stop);
    });

    let write_building = move |edit: BuildingEdit| {
        if !gate.try_update(EditGate::try_begin).unwrap_or(false) {
            return;
        }
        let (api, session) = store.handles();
        spawn_local(async move {
            let result = edit.send(&api, session.as_ref()).await;
            if let Err(e) = &result {
                web_sys::console::warn_1(&format!("Building update failed: {e}").into());
            }
            let succeeded = result.is_ok();
            let text = store.buildings.try_update(|c| edit.settle(c, result));
            gate.update(EditGate::finish);
            message.set(text);
            if succeeded {
                store.refresh_buildings();
            }
        });
    };

    let add_to_queue = move |_: leptos::ev::MouseEvent| {
        let (Some(building), Some(recipe)) = (selected_building.get_untracked(), chosen_recipe.get_untracked())
        else {
            return;
        };
        write_building(BuildingEdit::append(&building, &recipe));
    };

    let move_item = move |index: usize, direction: Direction| {
        if let Some(edit) = selected_building
            .get_untracked()
            .and_then(|building| BuildingEdit::move_item(&building, index, direction))
        {
            write_building(edit);
        }
    };

    let remove_item = move |index: usize| {
        if let Some(edit) = selected_building
            .get_untracked()
            .and_then(|building| BuildingEdit::remove_item(&building, index))
        {
            write_building(edit);
        }
    };

    let start_production = move |recipe: Recipe| {
        let Some(building) = selected_building.get_untracked() else {
            return;
        };
        match BuildingEdit::start(&building, &recipe, chrono::Utc::now()) {
            Ok(edit) => write_building(edit),
            Err(refusal) => message.set(Some(refusal.to_string())),
        }
    };

    let cancel_production = move |_: leptos::ev::MouseEvent| {
        if let Some(building) = selected_building.get_untracked() {
            write_building(BuildingEdit::cancel(&building));
        }
    };

    view! {
        <section style=theme::PANEL>
            <h2 style="font-size: 1.5rem; margin: 0 0 16px;">"Recipes"</h2>
            {move || {
                if selected_building.with(Option::is_none) {
                    return view! { <p>"Select a building to manage production."</p> }.into_any();
                }
                view! {
                    <div style="margin-bottom: 16px;">
                        <label for="recipeDropdown" style="display: block; margin-bottom: 8px;">
                            "Select Recipe to Add:"
                        </label>
                        <select
                            id="recipeDropdown"
                            style=theme::INPUT
                            prop:value=move || recipe_choice.get().unwrap_or_default()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                recipe_choice.set((!value.is_empty()).then_some(value));
                            }
                        >
                            <option value="" disabled=true>"Select a recipe"</option>
                            {move || {
                                offered
                                    .get()
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|recipe| view! { <option value=recipe.id.clone()>{recipe.name.clone()}</option> })
                                    .collect_view()
                            }}
                        </select>
                        <button
                            style=format!("{} margin-left: 16px;", theme::button(theme::GREEN))
                            disabled=move || busy() || recipe_choice.with(Option::is_none)
                            on:click=add_to_queue
                        >
                            "Add Recipe"
                        </button>
                    </div>
                    {move || chosen_recipe.get().map(|recipe| view! {
                        <RecipeTable recipe=recipe on_start=Callback::new(start_production) />
                    })}
                    <h3 style="font-size: 1.25rem; margin: 16px 0 8px;">"Currently Producing:"</h3>
                    {move || match selected_building.get().and_then(|b| b.producing) {
                        Some(recipe) => view! {
                            <div style="display: flex; align-items: center; gap: 16px; margin-bottom: 16px;">
                                <p>{recipe.name}</p>
                                <p>"Time Remaining: " {move || remaining.get().unwrap_or_else(|| "N/A".to_string())}</p>
                                <button
                                    style=theme::button(theme::RED)
                                    disabled=move || busy()
                                    on:click=cancel_production
                                >
                                    "Delete"
                                </button>
                            </div>
                        }.into_any(),
                        None => view! { <p style="margin-bottom: 16px;">"None"</p> }.into_any(),
                    }}
                    <h3 style="font-size: 1.25rem; margin: 0 0 8px;">"Production Queue:"</h3>
                    {move || {
                        let items = selected_building.get().map(|b| b.queue).unwrap_or_default();
                        if items.is_empty() {
                            return view! { <p style="margin-bottom: 16px;">"No items in queue"</p> }.into_any();
                        }
                        let last = items.len() - 1;
                        view! {
                            <ul style="list-style: none; padding: 0; margin: 0 0 16px;">
                                {items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, recipe)| view! {
                                        <li style="display: flex; align-items: center; gap: 8px; margin-bottom: 8px;">
                                            <p style="margin: 0 16px 0 0;">{recipe.name}</p>
                                            <button
                                                style=theme::button(theme::BLUE)
                                                disabled=move || busy() || index == 0
                                                on:click=move |_| move_item(index, Direction::Up)
                                            >
                                                "Up"
                                            </button>
                                            <button
                                                style=theme::button(theme::BLUE)
                                                disabled=move || busy() || index == last
                                                on:click=move |_| move_item(index, Direction::Down)
                                            >
                                                "Down"
                                            </button>
                                            <button
                                                style=theme::button(theme::RED)
                                                disabled=move || busy()
                                                on:click=move |_| remove_item(index)
                                            >
                                                "Remove"
                                            </button>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                }
                .into_any()
            }}
            {move || message.get().map(|text| view! { <p style=theme::MESSAGE>{text}</p> })}
        </section>
    }
}

#[component]
fn RecipeTable(recipe: Recipe, on_start: Callback<Recipe>) -> impl IntoView {
    let start = {
        let recipe = recipe.clone();
        move |_: leptos::ev::MouseEvent| on_start.run(recipe.clone())
    };

    view! {
        <table style=theme::TABLE>
            <thead>
                <tr>
                    <th style=theme::CELL>"ID"</th>
                    <th style=theme::CELL>"Name"</th>
                    <th style=theme::CELL>"Symbol"</th>
                    <th style=theme::CELL>"Time"</th>
                    <th style=theme::CELL>"Amount"</th>
                    <th style=theme::CELL>"Type"</th>
                    <th style=theme::CELL>"Resource"</th>
                    <th style=theme::CELL>"Catalog"</th>
                    <th style=theme::CELL>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <tr>
                    <td style=theme::CELL>{recipe.id}</td>
                    <td style=theme::CELL>{recipe.name}</td>
                    <td style=theme::CELL>{recipe.symbol}</td>
                    <td style=theme::CELL>{recipe.time}</td>
                    <td style=theme::CELL>{recipe.amount}</td>
                    <td style=theme::CELL>{recipe.kind}</td>
                    <td style=theme::CELL>{recipe.resource.name}</td>
                    <td style=theme::CELL>{recipe.catalog.name}</td>
                    <td style=theme::CELL>
                        <button style=theme::button(theme::GREEN) on:click=start>"Start"</button>
                    </td>
                </tr>
            </tbody>
        </table>
    }
}
