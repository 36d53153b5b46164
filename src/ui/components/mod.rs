pub mod charts;
pub mod inventory_table;
pub mod stat_card;
pub mod status_badge;
pub mod toast;
