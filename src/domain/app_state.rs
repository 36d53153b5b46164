use super::{green::REWARDS, inventory::InventoryStore, item::NewItem, InventoryItem};
use crate::util::config::AppConfig;

/// Process-wide state shared through context. Lives in memory only.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub inventory: InventoryStore,
    /// Recycling balance. Nothing in the app credits or spends it.
    pub team_points: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            inventory: InventoryStore::default(),
            team_points: config.team_points,
        }
    }

    pub fn add_item(&mut self, item: NewItem) -> InventoryItem {
        self.inventory.insert(item).clone()
    }

    pub fn redeemable_rewards(&self) -> usize {
        REWARDS
            .iter()
            .filter(|reward| super::RedeemState::for_reward(reward, self.team_points).enabled())
            .count()
    }
}
