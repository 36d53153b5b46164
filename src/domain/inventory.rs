//! Inventory store plus the search / category / sort engine behind the listing.

use std::cmp::Ordering;

use time::{macros::date, Date};

use super::item::{Category, InventoryItem, ItemId, ItemStatus, NewItem};

/// Category restriction applied on top of the text search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Value used by the `<select>` element.
    pub fn value(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn from_value(value: &str) -> Self {
        Category::from_label(value)
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

/// Ordering options for the listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Quantity,
    ExpiryDate,
    AcquisitionDate,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Quantity,
        SortKey::ExpiryDate,
        SortKey::AcquisitionDate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Quantity => "Quantidade",
            Self::ExpiryDate => "Data de Validade",
            Self::AcquisitionDate => "Data de Aquisição",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Quantity => "quantity",
            Self::ExpiryDate => "expiryDate",
            Self::AcquisitionDate => "acquisitionDate",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.value() == value)
            .unwrap_or_default()
    }
}

/// Everything the listing page lets the user tweak.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl InventoryQuery {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let needle = self.search.to_lowercase();
        let text_hit = item.name.to_lowercase().contains(&needle)
            || item.category.label().to_lowercase().contains(&needle);
        text_hit && self.category.admits(item.category)
    }

    /// Filters then sorts, leaving `items` untouched.
    pub fn apply(&self, items: &[InventoryItem]) -> Vec<InventoryItem> {
        let mut view = filter_items(items, self);
        sort_items(&mut view, self.sort);
        view
    }
}

/// Order-preserving subsequence of `items` accepted by `query`.
pub fn filter_items(items: &[InventoryItem], query: &InventoryQuery) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| query.matches(item))
        .cloned()
        .collect()
}

/// Stable sort; items without a date go last.
pub fn sort_items(items: &mut [InventoryItem], key: SortKey) {
    items.sort_by(|a, b| match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        SortKey::ExpiryDate => cmp_dates(a.expiry_date, b.expiry_date),
        SortKey::AcquisitionDate => cmp_dates(a.acquisition_date, b.acquisition_date),
    });
}

fn cmp_dates(a: Option<Date>, b: Option<Date>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Single in-memory owner of the item list shared by the listing and the form.
#[derive(Clone, Debug, PartialEq)]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new(seed_items())
    }
}

impl InventoryStore {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn next_id(&self) -> ItemId {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }

    pub fn insert(&mut self, new_item: NewItem) -> &InventoryItem {
        let item = new_item.into_item(self.next_id());
        tracing::info!(id = item.id, name = %item.name, "inventory item added");
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }
}

pub fn seed_items() -> Vec<InventoryItem> {
    use Category::*;
    use ItemStatus::*;

    vec![
        InventoryItem::seeded(1, "Pneus Hoosier R25B", Mecanica, 12, date!(2025 - 12 - 31), date!(2024 - 01 - 15), Ok),
        InventoryItem::seeded(2, "ECU MoTeC M150", Eletronica, 2, date!(2026 - 06 - 30), date!(2024 - 03 - 20), Ok),
        InventoryItem::seeded(3, "Freios AP Racing", Freios, 4, date!(2025 - 12 - 23), date!(2024 - 02 - 10), Low),
        InventoryItem::seeded(4, "Asa Dianteira Carbono", Aerodinamica, 1, date!(2025 - 12 - 18), date!(2024 - 05 - 05), Critical),
        InventoryItem::seeded(5, "Amortecedores Öhlins", Suspensao, 8, date!(2026 - 03 - 30), date!(2024 - 04 - 12), Ok),
        InventoryItem::seeded(6, "Sensores de Temperatura", Eletronica, 15, date!(2025 - 11 - 20), date!(2024 - 01 - 28), Ok),
        InventoryItem::seeded(7, "Corrente de Transmissão", Mecanica, 3, date!(2025 - 12 - 21), date!(2024 - 03 - 15), Low),
        InventoryItem::seeded(8, "Discos de Freio", Freios, 6, date!(2025 - 07 - 25), date!(2024 - 02 - 20), Ok),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[InventoryItem]) -> Vec<ItemId> {
        items.iter().map(|item| item.id).collect()
    }

    fn query(search: &str, category: CategoryFilter) -> InventoryQuery {
        InventoryQuery {
            search: search.to_string(),
            category,
            sort: SortKey::Name,
        }
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let items = seed_items();
        let view = filter_items(&items, &InventoryQuery::default());
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn search_is_case_insensitive_on_name_and_category() {
        let items = seed_items();
        assert_eq!(ids(&filter_items(&items, &query("FREIO", CategoryFilter::All))), vec![3, 8]);
        assert_eq!(ids(&filter_items(&items, &query("eletrônica", CategoryFilter::All))), vec![2, 6]);
        assert_eq!(ids(&filter_items(&items, &query("öhlins", CategoryFilter::All))), vec![5]);
    }

    #[test]
    fn category_filter_intersects_search() {
        let items = seed_items();
        let mecanica = CategoryFilter::Only(Category::Mecanica);
        assert_eq!(ids(&filter_items(&items, &query("", mecanica))), vec![1, 7]);
        assert_eq!(ids(&filter_items(&items, &query("pneus", mecanica))), vec![1]);
        assert!(filter_items(&items, &query("pneus", CategoryFilter::Only(Category::Freios))).is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_does_not_touch_source() {
        let items = seed_items();
        let q = query("de", CategoryFilter::All);
        let once = filter_items(&items, &q);
        let twice = filter_items(&once, &q);
        assert_eq!(once, twice);
        assert_eq!(items, seed_items());
    }

    #[test]
    fn filter_result_is_a_subsequence() {
        let items = seed_items();
        for search in ["", "a", "ECU", "x", "ão"] {
            for filter in std::iter::once(CategoryFilter::All)
                .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            {
                let view = filter_items(&items, &query(search, filter));
                let mut source = items.iter();
                for picked in &view {
                    assert!(source.any(|item| item == picked));
                }
                let expected = items.iter().filter(|item| {
                    let needle = search.to_lowercase();
                    (item.name.to_lowercase().contains(&needle)
                        || item.category.label().to_lowercase().contains(&needle))
                        && filter.admits(item.category)
                });
                assert_eq!(view.len(), expected.count());
            }
        }
    }

    #[test]
    fn sorts_by_each_key() {
        let items = seed_items();
        let mut view = items.clone();
        sort_items(&mut view, SortKey::Quantity);
        assert_eq!(ids(&view), vec![4, 2, 7, 3, 8, 5, 1, 6]);

        sort_items(&mut view, SortKey::ExpiryDate);
        assert_eq!(ids(&view), vec![8, 6, 4, 7, 3, 1, 5, 2]);

        sort_items(&mut view, SortKey::AcquisitionDate);
        assert_eq!(ids(&view), vec![1, 6, 3, 8, 7, 2, 5, 4]);

        sort_items(&mut view, SortKey::Name);
        assert_eq!(ids(&view), vec![5, 4, 7, 8, 2, 3, 1, 6]);
    }

    #[test]
    fn missing_dates_sort_last() {
        let mut store = InventoryStore::default();
        store.insert(NewItem {
            name: "Arruelas".into(),
            category: Category::Outros,
            quantity: 50,
            expiry_date: None,
            acquisition_date: None,
            supplier: None,
            price: None,
            description: None,
        });
        let mut view = store.items().to_vec();
        sort_items(&mut view, SortKey::ExpiryDate);
        assert_eq!(view.last().map(|item| item.id), Some(9));
    }

    #[test]
    fn apply_filters_then_sorts() {
        let items = seed_items();
        let q = InventoryQuery {
            search: String::new(),
            category: CategoryFilter::Only(Category::Eletronica),
            sort: SortKey::Quantity,
        };
        assert_eq!(ids(&q.apply(&items)), vec![2, 6]);
        let q = InventoryQuery { sort: SortKey::Name, ..q };
        assert_eq!(ids(&q.apply(&items)), vec![2, 6]);
    }

    #[test]
    fn select_values_round_trip() {
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_value("Suspensão"),
            CategoryFilter::Only(Category::Suspensao)
        );
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_value(key.value()), key);
        }
        assert_eq!(SortKey::from_value("bogus"), SortKey::Name);
    }

    #[test]
    fn store_assigns_unique_ids_and_derives_status() {
        let mut store = InventoryStore::default();
        let added = store.insert(NewItem {
            name: "Pneus Slick".into(),
            category: Category::Mecanica,
            quantity: 5,
            expiry_date: None,
            acquisition_date: None,
            supplier: Some("AutoParts Brasil".into()),
            price: Some(120.0),
            description: None,
        });
        assert_eq!(added.id, 9);
        assert_eq!(added.status, ItemStatus::Ok);
        assert_eq!(store.len(), 9);
        assert_eq!(store.get(9).map(|item| item.name.as_str()), Some("Pneus Slick"));
    }
}
