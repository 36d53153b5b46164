//! "Seja Green" recycling programme: collection points, rewards and point rules.

use thiserror::Error;

/// Recyclable material accepted at a collection point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialType {
    Plastic,
    Electronic,
    Metal,
}

impl MaterialType {
    pub const ALL: [MaterialType; 3] = [
        MaterialType::Plastic,
        MaterialType::Electronic,
        MaterialType::Metal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MaterialType::Plastic => "Plástico",
            MaterialType::Electronic => "Eletrônico",
            MaterialType::Metal => "Metal",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MaterialType::Plastic => "♻️",
            MaterialType::Electronic => "🔌",
            MaterialType::Metal => "🔧",
        }
    }

    /// Points credited per disposal.
    pub fn points(&self) -> u32 {
        match self {
            MaterialType::Electronic => 3,
            MaterialType::Metal => 2,
            MaterialType::Plastic => 1,
        }
    }

    pub fn points_label(&self) -> String {
        let points = self.points();
        let suffix = if points > 1 { "s" } else { "" };
        format!("+{points} pt{suffix}")
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("map coordinate {axis}={value} is outside 0..=100")]
    OutOfBounds { axis: char, value: f32 },
}

/// Percentage position on the arena map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    x: f32,
    y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Result<Self, MapError> {
        for (axis, value) in [('x', x), ('y', y)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(MapError::OutOfBounds { axis, value });
            }
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CollectionPoint {
    pub id: &'static str,
    pub name: &'static str,
    pub material: MaterialType,
    pub location: &'static str,
    pub position: MapPosition,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reward {
    pub id: &'static str,
    pub name: &'static str,
    pub points_cost: u32,
    pub description: &'static str,
    pub available: bool,
}

/// Whether the redeem button is live, and what it says.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedeemState {
    Redeemable,
    Unavailable,
    Short(u32),
}

impl RedeemState {
    pub fn for_reward(reward: &Reward, team_points: u32) -> Self {
        if !reward.available {
            RedeemState::Unavailable
        } else if team_points < reward.points_cost {
            RedeemState::Short(reward.points_cost - team_points)
        } else {
            RedeemState::Redeemable
        }
    }

    pub fn enabled(&self) -> bool {
        matches!(self, RedeemState::Redeemable)
    }

    pub fn label(&self) -> String {
        match self {
            RedeemState::Redeemable => "Resgatar".to_string(),
            RedeemState::Unavailable => "Indisponível".to_string(),
            RedeemState::Short(missing) => format!("Faltam {missing} pts"),
        }
    }
}

pub fn filter_points(
    points: &[CollectionPoint],
    selected: Option<MaterialType>,
) -> Vec<CollectionPoint> {
    points
        .iter()
        .filter(|point| selected.map_or(true, |material| point.material == material))
        .cloned()
        .collect()
}

/// Cheapest available reward the team cannot afford yet.
pub fn next_reward_threshold(rewards: &[Reward], team_points: u32) -> Option<u32> {
    rewards
        .iter()
        .filter(|reward| reward.available && reward.points_cost > team_points)
        .map(|reward| reward.points_cost)
        .min()
}

/// Progress towards the next reward, clamped to `0..=100`.
pub fn progress_percent(team_points: u32, threshold: Option<u32>) -> f64 {
    match threshold {
        Some(0) | None => 100.0,
        Some(goal) => (f64::from(team_points) * 100.0 / f64::from(goal)).min(100.0),
    }
}

pub fn collection_points() -> Result<Vec<CollectionPoint>, MapError> {
    use MaterialType::*;

    let point = |id: &'static str,
                 name: &'static str,
                 material: MaterialType,
                 location: &'static str,
                 x: f32,
                 y: f32|
     -> Result<CollectionPoint, MapError> {
        Ok(CollectionPoint {
            id,
            name,
            material,
            location,
            position: MapPosition::new(x, y)?,
        })
    };

    Ok(vec![
        point("1", "Ponto Plásticos A", Plastic, "Pavilhão Principal", 25.0, 30.0)?,
        point("2", "Ponto Eletrônicos", Electronic, "Área Técnica", 60.0, 45.0)?,
        point("3", "Ponto Metais A", Metal, "Box de Manutenção", 40.0, 70.0)?,
        point("4", "Ponto Plásticos B", Plastic, "Entrada Sul", 75.0, 25.0)?,
        point("5", "Ponto Metais B", Metal, "Área de Descarte", 20.0, 60.0)?,
        point("6", "Ponto Eletrônicos B", Electronic, "Laboratório", 85.0, 65.0)?,
    ])
}

pub static REWARDS: [Reward; 4] = [
    Reward {
        id: "1",
        name: "Snack Box",
        points_cost: 10,
        description: "Uma caixa com diversos snacks",
        available: true,
    },
    Reward {
        id: "2",
        name: "Camiseta SAE",
        points_cost: 25,
        description: "Camiseta oficial do evento",
        available: true,
    },
    Reward {
        id: "3",
        name: "Kit Ferramentas",
        points_cost: 50,
        description: "Kit básico de ferramentas",
        available: true,
    },
    Reward {
        id: "4",
        name: "Ingresso VIP",
        points_cost: 100,
        description: "Acesso VIP às áreas restritas",
        available: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn reward(name: &str) -> &'static Reward {
        REWARDS.iter().find(|r| r.name == name).expect("reward exists")
    }

    #[test]
    fn eligibility_with_thirty_five_points() {
        assert!(RedeemState::for_reward(reward("Snack Box"), 35).enabled());
        assert!(RedeemState::for_reward(reward("Camiseta SAE"), 35).enabled());

        let kit = RedeemState::for_reward(reward("Kit Ferramentas"), 35);
        assert!(!kit.enabled());
        assert_eq!(kit.label(), "Faltam 15 pts");

        let vip = RedeemState::for_reward(reward("Ingresso VIP"), 35);
        assert_eq!(vip, RedeemState::Unavailable);
        assert_eq!(vip.label(), "Indisponível");
    }

    #[test]
    fn unavailable_wins_over_points() {
        let vip = RedeemState::for_reward(reward("Ingresso VIP"), 1_000);
        assert!(!vip.enabled());
        assert_eq!(vip.label(), "Indisponível");
    }

    #[test]
    fn exact_balance_is_enough() {
        assert_eq!(
            RedeemState::for_reward(reward("Kit Ferramentas"), 50),
            RedeemState::Redeemable
        );
    }

    #[test]
    fn map_filter_by_material() {
        let points = collection_points().expect("static points are in bounds");
        let metal = filter_points(&points, Some(MaterialType::Metal));
        assert_eq!(metal.iter().map(|p| p.id).collect::<Vec<_>>(), vec!["3", "5"]);
        assert!(metal.iter().all(|p| p.material == MaterialType::Metal));
        assert_eq!(filter_points(&points, None), points);
    }

    #[test]
    fn positions_are_bounded() {
        assert!(MapPosition::new(0.0, 100.0).is_ok());
        assert_eq!(
            MapPosition::new(100.5, 10.0),
            Err(MapError::OutOfBounds { axis: 'x', value: 100.5 })
        );
        assert!(MapPosition::new(10.0, -1.0).is_err());
    }

    #[test]
    fn next_reward_and_progress() {
        assert_eq!(next_reward_threshold(&REWARDS, 35), Some(50));
        assert_eq!(progress_percent(35, Some(50)), 70.0);
        assert_eq!(next_reward_threshold(&REWARDS, 60), None);
        assert_eq!(progress_percent(60, None), 100.0);
    }

    #[test]
    fn material_points_table() {
        assert_eq!(MaterialType::Electronic.points(), 3);
        assert_eq!(MaterialType::Metal.points_label(), "+2 pts");
        assert_eq!(MaterialType::Plastic.points_label(), "+1 pt");
    }

    #[test]
    fn catalog_costs_are_positive() {
        assert!(REWARDS.iter().all(|r| r.points_cost > 0));
    }
}
