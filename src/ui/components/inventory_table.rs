use dioxus::prelude::*;

use super::status_badge::StatusBadge;
use crate::domain::{format_br_date, InventoryItem, ItemId};
use crate::ui::theme;

#[component]
pub fn InventoryTable(items: Vec<InventoryItem>, on_edit: EventHandler<ItemId>) -> Element {
    let is_empty = items.is_empty();
    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Nome" }
                        th { class: "px-4 py-3 font-medium", "Categoria" }
                        th { class: "px-4 py-3 font-medium text-center", "Quantidade" }
                        th { class: "px-4 py-3 font-medium", "Data de Validade" }
                        th { class: "px-4 py-3 font-medium", "Data de Aquisição" }
                        th { class: "px-4 py-3 font-medium text-center", "Status" }
                        th { class: "px-4 py-3 font-medium text-center", "Ações" }
                    }
                }
                tbody {
                    class: "{theme::TABLE_DIVIDER}",
                    for item in items {
                        InventoryRow { key: "{item.id}", item: item.clone(), on_edit }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::TEXT_MUTED}",
                                colspan: "7",
                                "Nenhum item encontrado com os filtros atuais."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InventoryRow(item: InventoryItem, on_edit: EventHandler<ItemId>) -> Element {
    let id = item.id;
    rsx! {
        tr {
            class: "transition-colors hover:bg-slate-800/40",
            td { class: "px-4 py-3 font-medium text-slate-100", "{item.name}" }
            td { class: "px-4 py-3",
                span {
                    class: "inline-flex rounded-full border border-emerald-500/20 px-2 py-0.5 text-xs text-emerald-300",
                    "{item.category.label()}"
                }
            }
            td { class: "px-4 py-3 text-center font-semibold text-slate-100", "{item.quantity}" }
            td { class: "px-4 py-3 {theme::TEXT_MUTED}", "📅 {format_br_date(item.expiry_date)}" }
            td { class: "px-4 py-3 {theme::TEXT_MUTED}", "📅 {format_br_date(item.acquisition_date)}" }
            td { class: "px-4 py-3 text-center", StatusBadge { status: item.status } }
            td { class: "px-4 py-3 text-center",
                button {
                    class: "rounded-md px-2 py-1 text-slate-400 hover:text-emerald-300",
                    title: "Editar",
                    onclick: move |_| on_edit.call(id),
                    "✏️"
                }
            }
        }
    }
}
