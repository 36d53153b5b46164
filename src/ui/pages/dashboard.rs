use dioxus::prelude::*;

use crate::{
    domain::{CATEGORY_DISTRIBUTION, DASHBOARD_STATS, STOCK_TREND},
    ui::{
        components::{
            charts::{bar_chart_svg, line_chart_svg, pie_chart_svg, ChartFrame},
            stat_card::StatCard,
        },
        theme,
    },
};

#[component]
pub fn DashboardPage() -> Element {
    // Static series: render once per mount.
    let charts = use_hook(|| {
        (
            bar_chart_svg(&CATEGORY_DISTRIBUTION, 480, 300),
            pie_chart_svg(&CATEGORY_DISTRIBUTION, 480, 300),
            line_chart_svg(&STOCK_TREND, 960, 300),
        )
    });
    let (bars, pie, trend) = charts;

    rsx! {
        div { class: "space-y-8",
            div {
                h1 { class: "{theme::PAGE_TITLE}", "Dashboard" }
                p { class: "mt-2 {theme::TEXT_MUTED}", "Visão geral do inventário da equipe SAE" }
            }

            section { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-4",
                for stat in DASHBOARD_STATS.iter().cloned() {
                    StatCard { stat }
                }
            }

            section { class: "grid gap-6 lg:grid-cols-2",
                ChartFrame { title: "Itens por Categoria".to_string(), svg: bars }
                ChartFrame { title: "Distribuição de Estoque".to_string(), svg: pie }
            }

            ChartFrame { title: "Evolução do Estoque".to_string(), svg: trend }
        }
    }
}
