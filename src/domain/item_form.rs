//! Draft state and submit rules for the add-item form.

use thiserror::Error;

use super::item::{parse_input_date, Category, NewItem};

pub const ERROR_TITLE: &str = "Erro";
pub const ERROR_DESCRIPTION: &str = "Preencha todos os campos obrigatórios";
pub const SUCCESS_TITLE: &str = "Item adicionado!";

/// Editable fields of the form, kept as raw text until submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Category,
    Quantity,
    Supplier,
    AcquisitionDate,
    ExpiryDate,
    Price,
    Description,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub supplier: String,
    pub acquisition_date: String,
    pub expiry_date: String,
    pub price: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Preencha todos os campos obrigatórios")]
    MissingRequired,
}

impl ItemDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Category => &self.category,
            DraftField::Quantity => &self.quantity,
            DraftField::Supplier => &self.supplier,
            DraftField::AcquisitionDate => &self.acquisition_date,
            DraftField::ExpiryDate => &self.expiry_date,
            DraftField::Price => &self.price,
            DraftField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Category => &mut self.category,
            DraftField::Quantity => &mut self.quantity,
            DraftField::Supplier => &mut self.supplier,
            DraftField::AcquisitionDate => &mut self.acquisition_date,
            DraftField::ExpiryDate => &mut self.expiry_date,
            DraftField::Price => &mut self.price,
            DraftField::Description => &mut self.description,
        };
        *slot = value.into();
    }

    /// Checks the required fields and converts the text into a typed item.
    ///
    /// Name, category and quantity are required. A category outside the closed
    /// list or a quantity that is not a whole number count as missing. Optional
    /// fields that fail to parse are dropped.
    pub fn validate(&self) -> Result<NewItem, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingRequired);
        }
        let category =
            Category::from_label(self.category.trim()).ok_or(DraftError::MissingRequired)?;
        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| DraftError::MissingRequired)?;

        Ok(NewItem {
            name: name.to_string(),
            category,
            quantity,
            expiry_date: parse_input_date(&self.expiry_date),
            acquisition_date: parse_input_date(&self.acquisition_date),
            supplier: non_blank(&self.supplier),
            price: self
                .price
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|price| price.is_finite() && *price > 0.0),
            description: non_blank(&self.description),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// What the page has to do after a submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Created(NewItem),
    Rejected(DraftError),
}

/// Form controller: `Editing -> Submitting -> Editing`, resetting the draft on success.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemForm {
    pub draft: ItemDraft,
    pub phase: FormPhase,
}

impl ItemForm {
    pub fn edit(&mut self, field: DraftField, value: impl Into<String>) {
        if self.phase == FormPhase::Editing {
            self.draft.set(field, value);
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.phase = FormPhase::Submitting;
        let outcome = match self.draft.validate() {
            Ok(item) => {
                self.draft = ItemDraft::default();
                SubmitOutcome::Created(item)
            }
            Err(err) => SubmitOutcome::Rejected(err),
        };
        self.phase = FormPhase::Editing;
        outcome
    }
}

pub fn success_description(name: &str) -> String {
    format!("{name} foi adicionado ao inventário com sucesso.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ItemForm {
        let mut form = ItemForm::default();
        form.edit(DraftField::Name, "Pneus Slick");
        form.edit(DraftField::Category, "Mecânica");
        form.edit(DraftField::Quantity, "5");
        form
    }

    #[test]
    fn valid_submit_creates_item_and_resets() {
        let mut form = filled();
        form.edit(DraftField::Supplier, "AutoParts Brasil");
        form.edit(DraftField::ExpiryDate, "2026-01-31");
        let SubmitOutcome::Created(item) = form.submit() else {
            panic!("expected the item to be created");
        };
        assert_eq!(item.name, "Pneus Slick");
        assert_eq!(item.category, Category::Mecanica);
        assert_eq!(item.quantity, 5);
        assert_eq!(item.supplier.as_deref(), Some("AutoParts Brasil"));
        assert!(item.expiry_date.is_some());
        assert_eq!(form.draft, ItemDraft::default());
        assert_eq!(form.phase, FormPhase::Editing);
        assert!(success_description(&item.name).contains("Pneus Slick"));
    }

    #[test]
    fn each_missing_required_field_is_rejected_without_clearing() {
        for field in [DraftField::Name, DraftField::Category, DraftField::Quantity] {
            let mut form = filled();
            form.edit(DraftField::Description, "algo");
            form.edit(field, "");
            let before = form.draft.clone();
            assert_eq!(
                form.submit(),
                SubmitOutcome::Rejected(DraftError::MissingRequired)
            );
            assert_eq!(form.draft, before);
            assert_eq!(form.phase, FormPhase::Editing);
        }
    }

    #[test]
    fn whitespace_and_garbage_count_as_missing() {
        let mut form = filled();
        form.edit(DraftField::Name, "   ");
        assert!(matches!(form.submit(), SubmitOutcome::Rejected(_)));

        let mut form = filled();
        form.edit(DraftField::Quantity, "dez");
        assert!(matches!(form.submit(), SubmitOutcome::Rejected(_)));

        let mut form = filled();
        form.edit(DraftField::Category, "Motor");
        assert!(matches!(form.submit(), SubmitOutcome::Rejected(_)));
    }

    #[test]
    fn price_is_optional() {
        let mut draft = filled().draft;
        assert_eq!(draft.validate().map(|item| item.price), Ok(None));
        draft.set(DraftField::Price, "49.90");
        assert_eq!(draft.validate().map(|item| item.price), Ok(Some(49.90)));
        draft.set(DraftField::Price, "-3");
        assert_eq!(draft.validate().map(|item| item.price), Ok(None));
    }

    #[test]
    fn error_message_matches_notification_text() {
        assert_eq!(DraftError::MissingRequired.to_string(), ERROR_DESCRIPTION);
    }

    #[test]
    fn field_accessors_cover_every_field() {
        let mut draft = ItemDraft::default();
        draft.set(DraftField::Description, "Compostos macios");
        assert_eq!(draft.field(DraftField::Description), "Compostos macios");
        assert_eq!(draft.field(DraftField::Price), "");
    }
}
