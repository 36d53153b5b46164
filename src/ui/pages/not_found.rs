use dioxus::prelude::*;

use crate::{app::Route, ui::theme};

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = format!("/{}", segments.join("/"));
    use_hook(|| tracing::warn!(%path, "unknown route"));

    rsx! {
        div { class: "flex flex-col items-center gap-4 py-24 text-center",
            p { class: "text-6xl font-bold text-emerald-400", "404" }
            h1 { class: "text-xl font-semibold text-slate-100", "Página não encontrada" }
            p { class: "{theme::TEXT_MUTED}", "{path}" }
            button {
                class: "{theme::BTN_PRIMARY}",
                onclick: move |_| {
                    nav.push(Route::Dashboard {});
                },
                "Voltar ao Dashboard"
            }
        }
    }
}
