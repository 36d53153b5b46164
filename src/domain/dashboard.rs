//! Fixed summary figures and chart series shown on the dashboard.

/// Colour hint for a stat card's change note.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatTone {
    Success,
    Warning,
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Package,
    Alert,
    Trend,
    Archive,
}

impl StatIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            StatIcon::Package => "📦",
            StatIcon::Alert => "⚠️",
            StatIcon::Trend => "📈",
            StatIcon::Archive => "🗄️",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: StatIcon,
    pub tone: StatTone,
}

/// One labelled point of a chart series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: u32,
}

pub const fn point(label: &'static str, value: u32) -> SeriesPoint {
    SeriesPoint { label, value }
}

pub static DASHBOARD_STATS: [DashboardStat; 4] = [
    DashboardStat {
        title: "Total de Itens",
        value: "148",
        change: "+12% este mês",
        icon: StatIcon::Package,
        tone: StatTone::Success,
    },
    DashboardStat {
        title: "Itens Críticos",
        value: "8",
        change: "Baixo estoque",
        icon: StatIcon::Alert,
        tone: StatTone::Warning,
    },
    DashboardStat {
        title: "Valor Total",
        value: "R$ 47.2K",
        change: "+8.2% este mês",
        icon: StatIcon::Trend,
        tone: StatTone::Success,
    },
    DashboardStat {
        title: "Categorias",
        value: "12",
        change: "Ativas",
        icon: StatIcon::Archive,
        tone: StatTone::Info,
    },
];

/// Items per category; feeds both the bar and the pie chart.
pub static CATEGORY_DISTRIBUTION: [SeriesPoint; 5] = [
    point("Mecânica", 45),
    point("Eletrônica", 32),
    point("Aerodinâmica", 28),
    point("Freios", 19),
    point("Suspensão", 24),
];

/// Six-month stock level trend.
pub static STOCK_TREND: [SeriesPoint; 6] = [
    point("Jan", 120),
    point("Fev", 132),
    point("Mar", 141),
    point("Abr", 148),
    point("Mai", 145),
    point("Jun", 152),
];

/// Share of each point in its series, as whole percentages.
pub fn shares(series: &[SeriesPoint]) -> Vec<(&'static str, f64)> {
    let total: u32 = series.iter().map(|p| p.value).sum();
    series
        .iter()
        .map(|p| {
            let share = if total == 0 {
                0.0
            } else {
                f64::from(p.value) * 100.0 / f64::from(total)
            };
            (p.label, share)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_sum_to_hundred() {
        let total: f64 = shares(&CATEGORY_DISTRIBUTION).iter().map(|(_, s)| s).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(shares(&CATEGORY_DISTRIBUTION)[0].0, "Mecânica");
    }

    #[test]
    fn empty_series_has_zero_shares() {
        assert!(shares(&[point("x", 0)]).iter().all(|(_, s)| *s == 0.0));
    }

    #[test]
    fn trend_covers_six_months() {
        assert_eq!(STOCK_TREND.len(), 6);
        assert_eq!(STOCK_TREND.last().map(|p| p.value), Some(152));
    }
}
