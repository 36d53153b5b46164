//! Route list for the header and the open/closed state of the mobile drawer.

use crate::app::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub route: Route,
    pub icon: &'static str,
    pub label: &'static str,
}

impl NavEntry {
    pub fn is_active(&self, current: &Route) -> bool {
        &self.route == current
    }
}

/// Header links, in display order.
pub fn nav_entries() -> [NavEntry; 4] {
    [
        NavEntry {
            route: Route::Dashboard {},
            icon: "📊",
            label: "Dashboard",
        },
        NavEntry {
            route: Route::Inventory {},
            icon: "📦",
            label: "Inventário",
        },
        NavEntry {
            route: Route::AddItem {},
            icon: "➕",
            label: "Adicionar Item",
        },
        NavEntry {
            route: Route::SejaGreen {},
            icon: "🌿",
            label: "Seja Green",
        },
    ]
}

/// Mobile overlay panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_entry_is_active_per_page() {
        for current in [
            Route::Dashboard {},
            Route::Inventory {},
            Route::AddItem {},
            Route::SejaGreen {},
        ] {
            let active = nav_entries()
                .iter()
                .filter(|entry| entry.is_active(&current))
                .count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn unknown_route_activates_nothing() {
        let lost = Route::NotFound {
            segments: vec!["nope".to_string()],
        };
        assert!(nav_entries().iter().all(|entry| !entry.is_active(&lost)));
    }

    #[test]
    fn routes_render_expected_paths() {
        let paths: Vec<String> = nav_entries()
            .iter()
            .map(|entry| entry.route.to_string())
            .collect();
        assert_eq!(paths, vec!["/", "/inventory", "/add-item", "/seja-green"]);
    }

    #[test]
    fn drawer_toggles_and_closes() {
        let mut drawer = NavDrawer::default();
        assert!(!drawer.is_open());
        drawer.toggle();
        assert!(drawer.is_open());
        drawer.close();
        assert!(!drawer.is_open());
        drawer.close();
        assert!(!drawer.is_open());
    }
}
