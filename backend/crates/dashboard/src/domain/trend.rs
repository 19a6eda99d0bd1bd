//! Trend Calculation
//!
//! Percentage change between two periods, plus the direction and tone shown
//! on each KPI tile.

use derive_more::Display;
use serde::Serialize;

/// Percentage change from `previous` to `current`
///
/// A zero baseline saturates: 0 when both are zero, otherwise 100.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current == 0.0 { 0.0 } else { 100.0 };
    }
    (current - previous) / previous * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[display("up")]
    Up,
    #[display("down")]
    Down,
}

impl Direction {
    /// Equal values count as `Up`
    pub fn between(current: f64, previous: f64) -> Self {
        if current >= previous {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[display("good")]
    Good,
    #[display("bad")]
    Bad,
}

/// Whether growth in a metric is desirable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

impl Polarity {
    pub const fn tone(&self, direction: Direction) -> Tone {
        match (self, direction) {
            (Polarity::HigherIsBetter, Direction::Up) => Tone::Good,
            (Polarity::HigherIsBetter, Direction::Down) => Tone::Bad,
            (Polarity::LowerIsBetter, Direction::Up) => Tone::Bad,
            (Polarity::LowerIsBetter, Direction::Down) => Tone::Good,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub pct: f64,
    pub direction: Direction,
    pub tone: Tone,
}

impl Trend {
    pub fn between(current: f64, previous: f64, polarity: Polarity) -> Self {
        let direction = Direction::between(current, previous);
        Self {
            pct: percent_change(current, previous),
            direction,
            tone: polarity.tone(direction),
        }
    }
}
