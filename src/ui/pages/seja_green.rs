use dioxus::prelude::*;

use crate::{
    domain::{
        collection_points, filter_points, next_reward_threshold, progress_percent, AppState,
        CollectionPoint, MaterialType, RedeemState, Reward, REWARDS,
    },
    ui::theme,
};

const HOW_IT_WORKS: [(&str, &str); 3] = [
    ("Separe", "Separe plásticos, eletrônicos e metais corretamente"),
    ("Descarte", "Leve aos pontos de coleta indicados no mapa"),
    ("Ganhe", "Acumule pontos e troque por recompensas"),
];

#[component]
pub fn SejaGreenPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let (team_points, redeemable) = state.with(|st| (st.team_points, st.redeemable_rewards()));

    let all_points = use_hook(|| {
        collection_points().unwrap_or_else(|err| {
            tracing::warn!("collection points unavailable: {err}");
            Vec::new()
        })
    });
    let mut selected = use_signal(|| None::<MaterialType>);
    let visible = filter_points(&all_points, selected());

    let threshold = next_reward_threshold(&REWARDS, team_points);
    let progress = progress_percent(team_points, threshold);
    let progress_label = match threshold {
        Some(goal) => format!("{team_points}/{goal} pts"),
        None => format!("{team_points} pts"),
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center gap-3",
                div { class: "flex h-12 w-12 items-center justify-center rounded-xl bg-emerald-600 text-2xl", "🌿" }
                div {
                    h1 { class: "{theme::PAGE_TITLE}", "Seja Green" }
                    p { class: "{theme::TEXT_MUTED}", "Descarte consciente, ganhe recompensas" }
                }
            }

            section { class: "{theme::PANEL} flex flex-col gap-6 p-6 md:flex-row md:items-center",
                div { class: "flex items-center gap-4",
                    div { class: "flex h-14 w-14 items-center justify-center rounded-full bg-emerald-500/20 text-2xl", "🏆" }
                    div {
                        p { class: "text-sm {theme::TEXT_MUTED}", "Pontos da Equipe" }
                        p { class: "text-4xl font-bold text-emerald-300", "{team_points}" }
                        p { class: "text-xs {theme::TEXT_MUTED}", "{redeemable} recompensas disponíveis" }
                    }
                }
                div { class: "flex-1 space-y-2",
                    div { class: "flex justify-between text-sm",
                        span { class: "{theme::TEXT_MUTED}", "Próxima recompensa" }
                        span { class: "font-semibold text-slate-200", "{progress_label}" }
                    }
                    div { class: "h-3 w-full overflow-hidden rounded-full bg-slate-800",
                        div {
                            class: "h-full rounded-full bg-emerald-500",
                            style: "width: {progress:.0}%",
                        }
                    }
                }
            }

            div { class: "grid gap-6 lg:grid-cols-3",
                div { class: "space-y-6 lg:col-span-2",
                    section { class: "{theme::PANEL} space-y-4 p-6",
                        div {
                            h2 { class: "text-lg font-semibold text-slate-100", "📍 Mapa de Pontos de Coleta" }
                            p { class: "text-sm {theme::TEXT_MUTED}", "Clique nos filtros para visualizar pontos específicos" }
                        }
                        div { class: "flex flex-wrap gap-2",
                            button {
                                class: "{theme::btn_filter(selected().is_none())}",
                                onclick: move |_| selected.set(None),
                                "Todos"
                            }
                            for material in MaterialType::ALL {
                                button {
                                    class: "{theme::btn_filter(selected() == Some(material))}",
                                    onclick: move |_| selected.set(Some(material)),
                                    "{material.icon()} {material.label()}"
                                }
                            }
                        }
                        CollectionMap { points: visible }
                        div { class: "flex flex-wrap gap-4 text-sm",
                            for material in MaterialType::ALL {
                                div { class: "flex items-center gap-2",
                                    div { class: "h-4 w-4 rounded-full {theme::material_marker(material)}" }
                                    span { class: "{theme::TEXT_MUTED}", "{material.label()}" }
                                }
                            }
                        }
                    }

                    section { class: "{theme::PANEL} space-y-4 p-6",
                        h2 { class: "text-lg font-semibold text-slate-100", "Como Funciona?" }
                        div { class: "grid gap-4 md:grid-cols-3",
                            for (step, (title, text)) in HOW_IT_WORKS.iter().enumerate() {
                                div { class: "space-y-2 text-center",
                                    div { class: "mx-auto flex h-12 w-12 items-center justify-center rounded-full bg-emerald-500/20 text-lg font-bold text-emerald-300",
                                        "{step + 1}"
                                    }
                                    h4 { class: "font-semibold text-slate-100", "{title}" }
                                    p { class: "text-sm {theme::TEXT_MUTED}", "{text}" }
                                }
                            }
                        }
                    }
                }

                div { class: "space-y-6",
                    section { class: "{theme::PANEL} space-y-4 p-6",
                        div {
                            h2 { class: "text-lg font-semibold text-slate-100", "🎁 Recompensas" }
                            p { class: "text-sm {theme::TEXT_MUTED}", "Troque seus pontos por prêmios" }
                        }
                        for reward in REWARDS.iter() {
                            RewardCard { key: "{reward.id}", reward: reward.clone(), team_points }
                        }
                    }

                    section { class: "{theme::PANEL} space-y-3 p-6",
                        h2 { class: "text-lg font-semibold text-slate-100", "Pontos por Material" }
                        for material in MaterialType::ALL {
                            div { class: "flex items-center justify-between rounded-lg bg-slate-900/60 p-3",
                                div { class: "flex items-center gap-3",
                                    div { class: "flex h-8 w-8 items-center justify-center rounded-full {theme::material_soft(material)}",
                                        "{material.icon()}"
                                    }
                                    span { class: "text-sm font-medium text-slate-200", "{material.label()}" }
                                }
                                span { class: "font-bold text-emerald-300", "{material.points_label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CollectionMap(points: Vec<CollectionPoint>) -> Element {
    rsx! {
        div { class: "map-surface",
            for line in 1..10 {
                div { class: "map-grid-h", style: "top: {line * 10}%" }
                div { class: "map-grid-v", style: "left: {line * 10}%" }
            }
            div { class: "map-caption", "Arena Fórmula SAE Brasil" }
            for point in points {
                div {
                    key: "{point.id}",
                    class: "map-marker group",
                    style: "left: {point.position.x()}%; top: {point.position.y()}%",
                    div { class: "flex h-10 w-10 items-center justify-center rounded-full shadow-lg {theme::material_marker(point.material)}",
                        "{point.material.icon()}"
                    }
                    div { class: "map-tooltip",
                        p { class: "text-sm font-semibold", "{point.name}" }
                        p { class: "text-xs {theme::TEXT_MUTED}", "{point.location}" }
                    }
                }
            }
        }
    }
}

#[component]
fn RewardCard(reward: Reward, team_points: u32) -> Element {
    let redeem = RedeemState::for_reward(&reward, team_points);
    let frame = if redeem.enabled() {
        "border-emerald-500/30 bg-emerald-500/5 hover:bg-emerald-500/10"
    } else {
        "border-slate-800 bg-slate-900/30"
    };
    let badge = if team_points >= reward.points_cost {
        "bg-emerald-600 text-white"
    } else {
        "bg-slate-800 text-slate-300"
    };
    let label = redeem.label();
    let name = reward.name;
    rsx! {
        div { class: "rounded-lg border p-4 transition {frame}",
            div { class: "mb-2 flex items-start justify-between",
                h4 { class: "font-semibold text-slate-100", "{reward.name}" }
                span { class: "rounded-full px-2 py-0.5 text-xs font-semibold {badge}", "{reward.points_cost} pts" }
            }
            p { class: "mb-3 text-sm {theme::TEXT_MUTED}", "{reward.description}" }
            button {
                class: "w-full {theme::BTN_PRIMARY}",
                disabled: !redeem.enabled(),
                onclick: move |_| tracing::info!(reward = name, "redeem requested"),
                "{label}"
            }
        }
    }
}
