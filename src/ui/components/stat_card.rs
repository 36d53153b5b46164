use dioxus::prelude::*;

use crate::domain::DashboardStat;
use crate::ui::theme;

#[component]
pub fn StatCard(stat: DashboardStat) -> Element {
    rsx! {
        div {
            class: "{theme::PANEL} p-5 shadow-sm transition hover:border-slate-700",
            div { class: "flex items-center justify-between",
                h3 { class: "text-sm font-medium text-slate-400", "{stat.title}" }
                span { class: "text-lg", "{stat.icon.glyph()}" }
            }
            p { class: "mt-2 text-3xl font-bold text-slate-100", "{stat.value}" }
            p { class: "mt-1 text-xs {theme::stat_tone(stat.tone)}", "{stat.change}" }
        }
    }
}
