use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::navigation::{nav_entries, NavDrawer, NavEntry};
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME, APP_TAGLINE};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let mut drawer = use_signal(NavDrawer::default);
    let open = drawer().is_open();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/90 backdrop-blur px-6",
                div { class: "mx-auto flex h-16 max-w-6xl items-center justify-between gap-6",
                    div { class: "flex items-center gap-3",
                        div { class: "flex h-10 w-10 items-center justify-center rounded-lg bg-emerald-600 text-xl", "📦" }
                        div {
                            h1 { class: "text-xl font-bold tracking-tight", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500", "{APP_TAGLINE}" }
                        }
                    }

                    nav { class: "hidden gap-1 md:flex",
                        for entry in nav_entries() {
                            NavButton {
                                active: entry.is_active(&current_route),
                                entry: entry.clone(),
                                on_navigate: move |_| drawer.with_mut(|d| d.close()),
                            }
                        }
                    }

                    button {
                        class: "rounded-lg border border-slate-700 px-3 py-2 text-sm md:hidden",
                        aria_label: "Abrir menu",
                        aria_expanded: "{open}",
                        onclick: move |_| drawer.with_mut(|d| d.toggle()),
                        if open { "✕" } else { "☰" }
                    }
                }

                if open {
                    nav { class: "flex flex-col gap-1 border-t border-slate-900 py-3 md:hidden",
                        for entry in nav_entries() {
                            NavButton {
                                active: entry.is_active(&current_route),
                                entry: entry.clone(),
                                on_navigate: move |_| drawer.with_mut(|d| d.close()),
                            }
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-6xl px-6 pb-6 text-right text-xs text-slate-600",
                "{APP_NAME} {version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, entry: NavEntry, on_navigate: EventHandler<()>) -> Element {
    let nav = use_navigator();
    let target = entry.route.clone();
    rsx! {
        button {
            class: "{theme::nav_link(active)}",
            onclick: move |_| {
                nav.push(target.clone());
                on_navigate.call(());
            },
            span { "{entry.icon}" }
            "{entry.label}"
        }
    }
}
