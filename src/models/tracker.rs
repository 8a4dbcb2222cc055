use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{MAX_WEIGHT, MIN_WEIGHT, ML_PER_KG, PLANT_STAGES};
use crate::error::{HydroError, Result};

/// The plant that grows as the user drinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Plant {
    #[default]
    Flower,
    Cactus,
    Monstera,
}

impl Plant {
    pub const ALL: [Plant; 3] = [Plant::Flower, Plant::Cactus, Plant::Monstera];

    /// Name used in the record and in asset file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Plant::Flower => "flower",
            Plant::Cactus => "cactus",
            Plant::Monstera => "monstera",
        }
    }

    /// Parse a plant name, falling back to `Flower` for anything unknown
    pub fn parse_or_default(name: &str) -> Self {
        match name.trim() {
            "flower" => Plant::Flower,
            "cactus" => Plant::Cactus,
            "monstera" => Plant::Monstera,
            _ => Plant::Flower,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Plant::Flower => Plant::Cactus,
            Plant::Cactus => Plant::Monstera,
            Plant::Monstera => Plant::Flower,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Plant::Flower => Plant::Monstera,
            Plant::Cactus => Plant::Flower,
            Plant::Monstera => Plant::Cactus,
        }
    }
}

impl From<String> for Plant {
    fn from(name: String) -> Self {
        Plant::parse_or_default(&name)
    }
}

impl From<Plant> for &'static str {
    fn from(plant: Plant) -> Self {
        plant.as_str()
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily goal in millilitres for a body weight in kilograms
pub fn daily_goal_for(weight: u32) -> u32 {
    weight * ML_PER_KG
}

/// The persisted tracker record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    pub weight: u32,
    pub daily_goal: u32,
    pub current_intake: u32,
    pub plant: Plant,
    pub last_update: NaiveDate,
    pub days_completed: u32,
}

impl TrackerState {
    /// Create a fresh record, as produced by first-run setup
    pub fn new(weight: u32, plant: Plant, today: NaiveDate) -> Self {
        Self {
            weight,
            daily_goal: daily_goal_for(weight),
            current_intake: 0,
            plant,
            last_update: today,
            days_completed: 0,
        }
    }

    /// Check a freshly loaded record and re-derive the goal from the weight
    pub fn validated(mut self) -> Result<Self> {
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&self.weight) {
            return Err(HydroError::InvalidRecord("weight out of range"));
        }
        self.daily_goal = daily_goal_for(self.weight);
        Ok(self)
    }

    /// Change the weight, keeping the goal in sync
    pub fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
        self.daily_goal = daily_goal_for(weight);
    }

    /// Record a drink. Returns whether the goal is met afterwards.
    pub fn add_water(&mut self, amount: u32) -> bool {
        self.current_intake = self.current_intake.saturating_add(amount);
        self.goal_met()
    }

    /// Zero today's intake
    pub fn reset_intake(&mut self) {
        self.current_intake = 0;
    }

    pub fn goal_met(&self) -> bool {
        self.current_intake >= self.daily_goal
    }

    /// Millilitres still to drink today
    pub fn remaining(&self) -> u32 {
        self.daily_goal.saturating_sub(self.current_intake)
    }

    /// Fraction of the goal reached, capped at 1.0
    pub fn progress(&self) -> f64 {
        if self.daily_goal == 0 {
            return 1.0;
        }
        (self.current_intake as f64 / self.daily_goal as f64).min(1.0)
    }

    /// Growth stage of the plant, 0 through 4
    pub fn stage(&self) -> u8 {
        let stage = (self.progress() * PLANT_STAGES as f64).floor() as u8;
        stage.min(PLANT_STAGES - 1)
    }
}
