//! Inventory, form and recycling logic. Nothing here touches the UI.

pub mod app_state;
pub mod dashboard;
pub mod green;
pub mod inventory;
pub mod item;
pub mod item_form;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use dashboard::{
    shares, DashboardStat, SeriesPoint, StatIcon, StatTone, CATEGORY_DISTRIBUTION,
    DASHBOARD_STATS, STOCK_TREND,
};
#[allow(unused_imports)]
pub use green::{
    collection_points, filter_points, next_reward_threshold, progress_percent, CollectionPoint,
    MapError, MapPosition, MaterialType, RedeemState, Reward, REWARDS,
};
#[allow(unused_imports)]
pub use inventory::{
    filter_items, sort_items, CategoryFilter, InventoryQuery, InventoryStore, SortKey,
};
#[allow(unused_imports)]
pub use item::{format_br_date, Category, InventoryItem, ItemId, ItemStatus, NewItem};
#[allow(unused_imports)]
pub use item_form::{
    success_description, DraftError, DraftField, FormPhase, ItemDraft, ItemForm, SubmitOutcome,
    ERROR_DESCRIPTION, ERROR_TITLE, SUCCESS_TITLE,
};
