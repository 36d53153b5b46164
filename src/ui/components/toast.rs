use dioxus::prelude::*;

use crate::util::{config::AppConfig, generate_id};

const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn new(
        variant: ToastVariant,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_id("toast"),
            title: title.into(),
            description: description.into(),
            variant,
        }
    }
}

/// Appends to the queue, dropping the oldest entry past the cap.
pub fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    variant: ToastVariant,
    title: impl Into<String>,
    description: impl Into<String>,
) {
    let message = ToastMessage::new(variant, title, description);
    tracing::debug!(title = %message.title, ?variant, "toast");
    toasts.with_mut(|entries| enqueue(entries, message));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let views = toasts()
        .into_iter()
        .map(ToastView::from)
        .collect::<Vec<_>>();

    if views.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 z-50 flex justify-center sm:justify-end sm:px-6",
            ul {
                class: "space-y-3",
                for view in views {
                    ToastCard { key: "{view.id}", view: view.clone(), toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(view: ToastView, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let config = use_context::<AppConfig>();
    let toast_id = view.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        let ttl = config.toast_dismiss();
        async move {
            tokio::time::sleep(ttl).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let mut toasts = toasts;
    let class = format!(
        "pointer-events-auto flex w-80 items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {}",
        view.theme
    );
    rsx! {
        li {
            class: class,
            div { class: "flex-1",
                p { class: "text-sm font-semibold", "{view.title}" }
                p { class: "mt-1 text-xs opacity-90", "{view.description}" }
            }
            button {
                class: "text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| {
                    let target = view.id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "✕"
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct ToastView {
    id: String,
    title: String,
    description: String,
    theme: &'static str,
}

impl From<ToastMessage> for ToastView {
    fn from(message: ToastMessage) -> Self {
        let theme = match message.variant {
            ToastVariant::Default => "border-emerald-500/40 bg-slate-900/90 text-emerald-100",
            ToastVariant::Destructive => "border-rose-500/40 bg-rose-950/90 text-rose-100",
        };

        ToastView {
            id: message.id,
            title: message.title,
            description: message.description,
            theme,
        }
    }
}
