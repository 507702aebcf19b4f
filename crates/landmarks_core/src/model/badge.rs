//! Earned badge model.
//!
//! Badges are a fixed reward list rendered in the expandable badge tray.

use serde::{Deserialize, Serialize};

/// Badge display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Red,
    Orange,
    Green,
    Blue,
    Purple,
}

/// One earned badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: u32,
    pub badge_name: String,
    pub symbol_name: String,
    pub color: BadgeColor,
}

impl Badge {
    fn new(id: u32, badge_name: &str, symbol_name: &str, color: BadgeColor) -> Self {
        Self {
            id,
            badge_name: badge_name.to_string(),
            symbol_name: symbol_name.to_string(),
            color,
        }
    }
}

/// Returns the badges earned in the sample data set.
pub fn earned_badges() -> Vec<Badge> {
    vec![
        Badge::new(1, "First Favorite", "heart.fill", BadgeColor::Red),
        Badge::new(2, "Collector", "square.stack.3d.up.fill", BadgeColor::Orange),
        Badge::new(3, "Explorer", "globe.americas.fill", BadgeColor::Green),
        Badge::new(4, "Mountaineer", "mountain.2.fill", BadgeColor::Blue),
        Badge::new(5, "Sun Seeker", "sun.max.fill", BadgeColor::Purple),
    ]
}
