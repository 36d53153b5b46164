use dioxus::prelude::*;

use crate::{
    domain::{AppState, Category, CategoryFilter, InventoryQuery, ItemId, SortKey},
    ui::{components::inventory_table::InventoryTable, theme},
};

#[component]
pub fn InventoryPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let mut search = use_signal(String::new);
    let mut category = use_signal(CategoryFilter::default);
    let mut sort = use_signal(SortKey::default);

    let query = InventoryQuery {
        search: search(),
        category: category(),
        sort: sort(),
    };
    let rows = state.with(|st| query.apply(st.inventory.items()));
    let count = rows.len();

    let on_edit = move |id: ItemId| {
        let name = state.with(|st| st.inventory.get(id).map(|item| item.name.clone()));
        tracing::info!(id, ?name, "edit requested");
    };

    rsx! {
        div { class: "space-y-6",
            div {
                h1 { class: "{theme::PAGE_TITLE}", "Gestão de Inventário" }
                p { class: "mt-2 {theme::TEXT_MUTED}", "Gerencie e filtre os itens do estoque" }
            }

            section { class: "{theme::PANEL} space-y-4 p-5",
                h2 { class: "text-sm font-semibold text-slate-200", "🔍 Filtros e Busca" }
                div { class: "grid gap-4 md:grid-cols-3",
                    input {
                        class: "{theme::INPUT}",
                        r#type: "search",
                        placeholder: "Buscar itens...",
                        value: search(),
                        oninput: move |evt| search.set(evt.value()),
                    }
                    select {
                        class: "{theme::INPUT}",
                        value: category().value(),
                        onchange: move |evt| category.set(CategoryFilter::from_value(&evt.value())),
                        option { value: "all", "Todas as Categorias" }
                        for option_category in Category::ALL {
                            option { value: option_category.label(), "{option_category.label()}" }
                        }
                    }
                    select {
                        class: "{theme::INPUT}",
                        value: sort().value(),
                        onchange: move |evt| sort.set(SortKey::from_value(&evt.value())),
                        for key in SortKey::ALL {
                            option { value: key.value(), "{key.label()}" }
                        }
                    }
                }
            }

            section { class: "space-y-3",
                h2 { class: "text-sm font-semibold text-slate-200", "📦 Lista de Itens ({count})" }
                InventoryTable { items: rows, on_edit }
            }
        }
    }
}
