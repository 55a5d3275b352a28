//! Nutrition calculator input and result models.

use serde::{Deserialize, Serialize};

/// Biological gender used by the Mifflin-St Jeor formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Weight goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Gain,
    Lose,
}

/// Activity tier applied to BMR to estimate maintenance calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Extreme,
}

impl ActivityLevel {
    /// Fixed multiplier table.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::Extreme => 1.9,
        }
    }
}

/// Form input for the calculator, persisted after every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionInput {
    pub gender: Option<Gender>,
    pub age: u32,
    /// Current weight in kilograms
    pub weight: f64,
    pub goal: Option<Goal>,
    /// Desired weight in kilograms
    pub target_weight: f64,
    /// Height in centimeters
    pub height: f64,
    pub activity_level: ActivityLevel,
}

impl Default for NutritionInput {
    /// Zeroed form with the activity level back at its starting tier.
    fn default() -> Self {
        Self {
            gender: None,
            age: 0,
            weight: 0.0,
            goal: None,
            target_weight: 0.0,
            height: 0.0,
            activity_level: ActivityLevel::Moderate,
        }
    }
}

/// Derived calorie and macro targets, persisted alongside the input.
///
/// All values are rounded to the nearest integer at construction except
/// `activity_multiplier`, which keeps its table precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionResult {
    pub bmr: i64,
    pub maintenance_calories: i64,
    pub target_calories: i64,
    pub protein_grams: i64,
    pub fat_grams: i64,
    pub carb_grams: i64,
    pub activity_multiplier: f64,
}
