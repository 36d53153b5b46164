use std::time::Duration;

use dioxus::{core::spawn_forever, prelude::*};

use crate::{
    app::Route,
    domain::{
        success_description, AppState, Category, DraftField, ItemForm, SubmitOutcome,
        ERROR_DESCRIPTION, ERROR_TITLE, SUCCESS_TITLE,
    },
    ui::{
        components::toast::{push_toast, ToastMessage, ToastVariant},
        theme,
    },
    util::config::AppConfig,
};

#[component]
pub fn AddItemPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<AppConfig>();
    let nav = use_navigator();

    let mut form = use_signal(ItemForm::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = form.with_mut(|f| f.submit());
        let redirect = redirect_after(&outcome, config.redirect_delay());
        match outcome {
            SubmitOutcome::Created(item) => {
                let created = state.with_mut(|st| st.add_item(item));
                push_toast(
                    toasts,
                    ToastVariant::Default,
                    SUCCESS_TITLE,
                    success_description(&created.name),
                );
            }
            SubmitOutcome::Rejected(err) => {
                tracing::debug!("item rejected: {err}");
                push_toast(
                    toasts,
                    ToastVariant::Destructive,
                    ERROR_TITLE,
                    ERROR_DESCRIPTION,
                );
            }
        }
        // Root-scoped so leaving the page early does not drop the jump.
        if let Some((target, delay)) = redirect {
            spawn_forever(async move {
                tokio::time::sleep(delay).await;
                nav.push(target);
            });
        }
    };

    let category = form.with(|f| f.draft.category.clone());
    let description = form.with(|f| f.draft.description.clone());

    rsx! {
        div { class: "mx-auto max-w-3xl space-y-6",
            div {
                h1 { class: "{theme::PAGE_TITLE}", "Adicionar Novo Item" }
                p { class: "mt-2 {theme::TEXT_MUTED}", "Cadastre um novo item no inventário da equipe" }
            }

            form {
                class: "{theme::PANEL} space-y-6 p-6",
                onsubmit: on_submit,
                h2 { class: "text-sm font-semibold text-slate-200", "Informações do Item" }

                div { class: "grid gap-4 md:grid-cols-2",
                    DraftInput {
                        form,
                        field: DraftField::Name,
                        label: "Nome do Item *",
                        placeholder: "Ex: Pneus Slick",
                    }
                    div {
                        label { class: "{theme::LABEL}", "Categoria *" }
                        select {
                            class: "{theme::INPUT}",
                            value: category,
                            onchange: move |evt| form.with_mut(|f| f.edit(DraftField::Category, evt.value())),
                            option { value: "", disabled: true, "Selecione uma categoria" }
                            for option_category in Category::ALL {
                                option { value: option_category.label(), "{option_category.label()}" }
                            }
                        }
                    }
                    DraftInput {
                        form,
                        field: DraftField::Quantity,
                        label: "Quantidade *",
                        input_type: "number",
                        placeholder: "0",
                    }
                    DraftInput {
                        form,
                        field: DraftField::Supplier,
                        label: "Fornecedor",
                        placeholder: "Nome do fornecedor",
                    }
                    DraftInput {
                        form,
                        field: DraftField::AcquisitionDate,
                        label: "Data de Aquisição",
                        input_type: "date",
                    }
                    DraftInput {
                        form,
                        field: DraftField::ExpiryDate,
                        label: "Data de Validade",
                        input_type: "date",
                    }
                    DraftInput {
                        form,
                        field: DraftField::Price,
                        label: "Preço (R$)",
                        input_type: "number",
                        placeholder: "0,00",
                    }
                }

                div {
                    label { class: "{theme::LABEL}", "Descrição" }
                    textarea {
                        class: "{theme::INPUT} min-h-24",
                        placeholder: "Detalhes adicionais sobre o item",
                        value: description,
                        oninput: move |evt| form.with_mut(|f| f.edit(DraftField::Description, evt.value())),
                    }
                }

                div { class: "flex justify-end gap-3",
                    button {
                        class: "{theme::BTN_OUTLINE}",
                        r#type: "button",
                        onclick: move |_| {
                            nav.push(Route::Inventory {});
                        },
                        "Cancelar"
                    }
                    button { class: "{theme::BTN_PRIMARY}", r#type: "submit", "💾 Salvar Item" }
                }
            }
        }
    }
}

#[component]
fn DraftInput(
    form: Signal<ItemForm>,
    field: DraftField,
    label: &'static str,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: &'static str,
) -> Element {
    let mut form = form;
    let value = form.with(|f| f.draft.field(field).to_string());
    let step = if field == DraftField::Price { "0.01" } else { "1" };
    rsx! {
        div {
            label { class: "{theme::LABEL}", "{label}" }
            input {
                class: "{theme::INPUT}",
                r#type: input_type,
                step,
                placeholder,
                value,
                oninput: move |evt| form.with_mut(|f| f.edit(field, evt.value())),
            }
        }
    }
}

/// Listing route and wait applied after a submit; rejected drafts stay put.
pub fn redirect_after(outcome: &SubmitOutcome, delay: Duration) -> Option<(Route, Duration)> {
    match outcome {
        SubmitOutcome::Created(_) => Some((Route::Inventory {}, delay)),
        SubmitOutcome::Rejected(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DraftError;

    #[test]
    fn created_item_jumps_to_listing_after_configured_delay() {
        let mut form = ItemForm::default();
        form.edit(DraftField::Name, "Pneus Slick");
        form.edit(DraftField::Category, "Mecânica");
        form.edit(DraftField::Quantity, "5");
        let outcome = form.submit();

        let delay = AppConfig::default().redirect_delay();
        assert_eq!(delay, Duration::from_millis(1_000));
        assert_eq!(
            redirect_after(&outcome, delay),
            Some((Route::Inventory {}, Duration::from_millis(1_000)))
        );
        assert_eq!(Route::Inventory {}.to_string(), "/inventory");
    }

    #[test]
    fn rejected_draft_does_not_navigate() {
        let outcome = SubmitOutcome::Rejected(DraftError::MissingRequired);
        assert_eq!(redirect_after(&outcome, Duration::from_secs(1)), None);
    }
}
