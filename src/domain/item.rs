//! Inventory item records and their closed enumerations.

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};

pub type ItemId = u32;

/// Part family an item belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Mecanica,
    Eletronica,
    Aerodinamica,
    Freios,
    Suspensao,
    Outros,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Mecanica,
        Category::Eletronica,
        Category::Aerodinamica,
        Category::Freios,
        Category::Suspensao,
        Category::Outros,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Mecanica => "Mecânica",
            Category::Eletronica => "Eletrônica",
            Category::Aerodinamica => "Aerodinâmica",
            Category::Freios => "Freios",
            Category::Suspensao => "Suspensão",
            Category::Outros => "Outros",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

/// Stock health of an item. Assigned once, never recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    Ok,
    Low,
    Critical,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Ok, ItemStatus::Low, ItemStatus::Critical];

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Ok => "OK",
            ItemStatus::Low => "Alerta",
            ItemStatus::Critical => "Crítico",
        }
    }

    /// Initial status for items registered through the form.
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0..=1 => ItemStatus::Critical,
            2..=4 => ItemStatus::Low,
            _ => ItemStatus::Ok,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub expiry_date: Option<Date>,
    pub acquisition_date: Option<Date>,
    pub status: ItemStatus,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl InventoryItem {
    /// Builds one of the authored seed records.
    pub fn seeded(
        id: ItemId,
        name: &str,
        category: Category,
        quantity: u32,
        expiry_date: Date,
        acquisition_date: Date,
        status: ItemStatus,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            category,
            quantity,
            expiry_date: Some(expiry_date),
            acquisition_date: Some(acquisition_date),
            status,
            supplier: None,
            price: None,
            description: None,
        }
    }
}

/// A validated item that has not been given an id yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub expiry_date: Option<Date>,
    pub acquisition_date: Option<Date>,
    pub supplier: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl NewItem {
    pub fn into_item(self, id: ItemId) -> InventoryItem {
        InventoryItem {
            id,
            status: ItemStatus::from_quantity(self.quantity),
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            expiry_date: self.expiry_date,
            acquisition_date: self.acquisition_date,
            supplier: self.supplier,
            price: self.price,
            description: self.description,
        }
    }
}

/// Parses the `yyyy-mm-dd` value produced by a date input.
pub fn parse_input_date(value: &str) -> Option<Date> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Date::parse(value, format_description!("[year]-[month]-[day]")).ok()
}

/// Formats a date the way pt-BR users read it (`dd/mm/yyyy`).
pub fn format_br_date(date: Option<Date>) -> String {
    date.and_then(|d| d.format(format_description!("[day]/[month]/[year]")).ok())
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("Motor"), None);
        assert_eq!(Category::from_label("mecânica"), None);
    }

    #[test]
    fn every_status_has_a_label() {
        for status in ItemStatus::ALL {
            assert!(!status.label().is_empty());
        }
        assert_eq!(ItemStatus::Critical.label(), "Crítico");
    }

    #[test]
    fn status_from_quantity_thresholds() {
        assert_eq!(ItemStatus::from_quantity(0), ItemStatus::Critical);
        assert_eq!(ItemStatus::from_quantity(1), ItemStatus::Critical);
        assert_eq!(ItemStatus::from_quantity(4), ItemStatus::Low);
        assert_eq!(ItemStatus::from_quantity(5), ItemStatus::Ok);
    }

    #[test]
    fn parses_date_inputs() {
        assert_eq!(parse_input_date("2025-12-31"), Some(date!(2025 - 12 - 31)));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("31/12/2025"), None);
    }

    #[test]
    fn formats_dates_for_display() {
        assert_eq!(format_br_date(Some(date!(2024 - 01 - 15))), "15/01/2024");
        assert_eq!(format_br_date(None), "—");
    }
}
