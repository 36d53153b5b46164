pub mod add_item;
pub mod dashboard;
pub mod inventory;
pub mod not_found;
pub mod seja_green;

pub use add_item::AddItemPage;
pub use dashboard::DashboardPage;
pub use inventory::InventoryPage;
pub use not_found::NotFoundPage;
pub use seja_green::SejaGreenPage;
