use leptos::prelude::*;

use crate::hq::store::HqStore;
use crate::theme;

#[component]
pub(crate) fn PlanetSection() -> impl IntoView {
    let store: HqStore = expect_context();
    let planets = store.planets;
    let selection = store.selection;

    view! {
        <section style=theme::PANEL>
            <h2 style="font-size: 1.5rem; margin: 0 0 16px;">"Planets"</h2>
            <table style=theme::TABLE>
                <thead>
                    <tr>
                        <th style=theme::CELL>"ID"</th>
                        <th style=theme::CELL>"Name"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || planets.with(|c| c.items().to_vec())
                        key=|planet| planet.id.clone()
                        children=move |planet| {
                            let id = planet.id.clone();
                            let is_selected = {
                                let id = id.clone();
                                move || selection.with(|s| s.planet.as_deref() == Some(id.as_str()))
                            };
                            view! {
                                <tr
                                    style=move || if is_selected() { theme::SELECTED_ROW } else { theme::ROW }
                                    on:click=move |_| selection.update(|s| s.select_planet(&id))
                                >
                                    <td style=theme::CELL>{planet.id.clone()}</td>
                                    <td style=theme::CELL>{planet.name.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
