use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{AddItemPage, DashboardPage, InventoryPage, NotFoundPage, SejaGreenPage},
        shell::Shell,
    },
    util::{assets, config::load_config},
};

#[derive(Routable, Clone, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/inventory")]
    Inventory {},
    #[route("/add-item")]
    AddItem {},
    #[route("/seja-green")]
    SejaGreen {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    use_context_provider(|| config.clone());

    let state = use_signal(|| AppState::from_config(&config));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Inventory() -> Element {
    rsx! { Shell { InventoryPage {} } }
}

#[component]
pub fn AddItem() -> Element {
    rsx! { Shell { AddItemPage {} } }
}

#[component]
pub fn SejaGreen() -> Element {
    rsx! { Shell { SejaGreenPage {} } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! { Shell { NotFoundPage { segments } } }
}
