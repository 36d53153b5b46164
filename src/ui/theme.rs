//! Class lookup tables shared by the pages. Every closed enum maps to a style
//! here with an exhaustive `match`, so a new variant fails to compile until it
//! gets one.

use crate::domain::{ItemStatus, MaterialType, StatTone};

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str = "rounded-lg bg-emerald-600 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-500 disabled:cursor-not-allowed disabled:opacity-50";

pub const BTN_OUTLINE: &str = "rounded-lg border border-slate-700 px-4 py-2 text-sm text-slate-300 hover:border-emerald-600 hover:text-emerald-300";

pub fn btn_filter(active: bool) -> &'static str {
    if active {
        "rounded-lg px-3 py-1.5 text-sm font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40"
    } else {
        "rounded-lg px-3 py-1.5 text-sm text-slate-400 border border-slate-700 hover:border-emerald-600 hover:text-emerald-300"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub const INPUT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none";

pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";

// ============================================
// PANEL / TABLE / TEXT
// ============================================

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";

pub const TABLE_CONTAINER: &str = "overflow-x-auto rounded-xl border border-slate-800";

pub const TABLE_HEADER: &str = "bg-slate-900/80 text-xs uppercase text-slate-400";

pub const TABLE_DIVIDER: &str = "divide-y divide-slate-800";

pub const TEXT_MUTED: &str = "text-slate-500";

pub const PAGE_TITLE: &str = "text-3xl font-bold text-slate-100";

// ============================================
// NAVIGATION
// ============================================

pub fn nav_link(active: bool) -> &'static str {
    if active {
        "flex items-center gap-2 rounded-lg px-4 py-2 text-sm font-semibold bg-emerald-500/15 text-emerald-300 border border-emerald-500/40"
    } else {
        "flex items-center gap-2 rounded-lg px-4 py-2 text-sm text-slate-400 border border-transparent hover:border-slate-700 hover:text-slate-200"
    }
}

// ============================================
// VARIANT LOOKUPS
// ============================================

pub fn status_badge(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Ok => "border-emerald-500/40 bg-emerald-500/10 text-emerald-300",
        ItemStatus::Low => "border-amber-500/40 bg-amber-500/10 text-amber-300",
        ItemStatus::Critical => "border-rose-500/40 bg-rose-500/10 text-rose-300",
    }
}

pub fn stat_tone(tone: StatTone) -> &'static str {
    match tone {
        StatTone::Success => "text-emerald-400",
        StatTone::Warning => "text-amber-400",
        StatTone::Info => "text-sky-400",
    }
}

/// Solid marker colour on the map and legend.
pub fn material_marker(material: MaterialType) -> &'static str {
    match material {
        MaterialType::Plastic => "bg-blue-500",
        MaterialType::Electronic => "bg-amber-500",
        MaterialType::Metal => "bg-slate-500",
    }
}

pub fn material_soft(material: MaterialType) -> &'static str {
    match material {
        MaterialType::Plastic => "bg-blue-500/20 text-blue-300",
        MaterialType::Electronic => "bg-amber-500/20 text-amber-300",
        MaterialType::Metal => "bg-slate-500/20 text-slate-300",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_styles_are_total_and_distinct() {
        let styles: Vec<_> = ItemStatus::ALL.iter().map(|s| status_badge(*s)).collect();
        assert!(styles.iter().all(|style| !style.is_empty()));
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert!(status_badge(ItemStatus::Critical).contains("rose"));
        assert!(status_badge(ItemStatus::Low).contains("amber"));
    }

    #[test]
    fn every_material_has_a_marker() {
        for material in MaterialType::ALL {
            assert!(material_marker(material).starts_with("bg-"));
            assert!(!material_soft(material).is_empty());
        }
    }
}
