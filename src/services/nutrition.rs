// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calorie and macro target calculator.
//!
//! A pure validate/compute pipeline over the form input, plus a thin
//! persistence layer: the input snapshot is saved after every edit and the
//! result alongside it after every explicit calculation, so a reload shows
//! the same numbers without recomputation.

use crate::error::FieldErrors;
use crate::models::{Gender, Goal, NutritionInput, NutritionResult};
use crate::store::{keys, Store};

/// Largest allowed |target − current| weight difference, in kg.
const MAX_WEIGHT_DELTA: f64 = 30.0;

/// Run all validation rules, returning per-field messages on failure.
pub fn validate(input: &NutritionInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if input.gender.is_none() {
        errors.insert("gender", "Select a gender".to_string());
    }
    if input.age < 10 || input.age > 70 {
        errors.insert("age", "Age must be between 10 and 70".to_string());
    }
    if !(40.0..=150.0).contains(&input.weight) {
        errors.insert("weight", "Weight must be 40 to 150 kg".to_string());
    }
    if input.goal.is_none() {
        errors.insert("goal", "Select a goal".to_string());
    }
    if !(100.0..=250.0).contains(&input.height) {
        errors.insert("height", "Height must be 100 to 250 cm".to_string());
    }

    if input.target_weight == 0.0 {
        errors.insert("target_weight", "Enter a target weight".to_string());
    } else if let Some(goal) = input.goal {
        let difference = input.target_weight - input.weight;

        match goal {
            Goal::Gain if difference <= 0.0 => {
                errors.insert(
                    "target_weight",
                    "Target weight must exceed current weight to gain".to_string(),
                );
            }
            Goal::Lose if difference >= 0.0 => {
                errors.insert(
                    "target_weight",
                    "Target weight must be below current weight to lose".to_string(),
                );
            }
            _ if difference.abs() > MAX_WEIGHT_DELTA => {
                errors.insert(
                    "target_weight",
                    "Difference must not exceed 30 kg".to_string(),
                );
            }
            Goal::Gain if input.target_weight < 40.0 => {
                errors.insert("target_weight", "Minimum weight is 40 kg".to_string());
            }
            Goal::Lose if input.target_weight > 150.0 => {
                errors.insert("target_weight", "Maximum weight is 150 kg".to_string());
            }
            _ => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Compute calorie and macro targets from validated input.
///
/// Mifflin-St Jeor BMR scaled by the activity multiplier; intermediates
/// chain unrounded and each output rounds once at result construction.
pub fn compute(input: &NutritionInput) -> NutritionResult {
    let bmr = match input.gender {
        Some(Gender::Male) => {
            10.0 * input.weight + 6.25 * input.height - 5.0 * input.age as f64 + 5.0
        }
        _ => 10.0 * input.weight + 6.25 * input.height - 5.0 * input.age as f64 - 161.0,
    };

    let activity_multiplier = input.activity_level.multiplier();
    let maintenance = bmr * activity_multiplier;

    let target = match input.goal {
        Some(Goal::Gain) => maintenance * 1.15,
        _ => maintenance * 0.85,
    };

    let protein = match input.goal {
        Some(Goal::Gain) => 2.0 * input.weight,
        _ => 1.6 * input.weight,
    };
    let fat = 1.2 * input.weight;
    let carbs = (target - protein * 4.0 - fat * 9.0) / 4.0;

    NutritionResult {
        bmr: bmr.round() as i64,
        maintenance_calories: maintenance.round() as i64,
        target_calories: target.round() as i64,
        protein_grams: protein.round() as i64,
        fat_grams: fat.round() as i64,
        carb_grams: carbs.round() as i64,
        activity_multiplier,
    }
}

/// Nutrition screen state, persisted under `nutritionData` / `nutritionResult`.
pub struct NutritionService {
    store: Store,
}

impl NutritionService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Hydrate persisted input and result.
    ///
    /// Store failures degrade to the zeroed form / no result.
    pub async fn load(&self) -> (NutritionInput, Option<NutritionResult>) {
        let input = match self.store.get::<NutritionInput>(keys::NUTRITION_DATA).await {
            Ok(Some(input)) => input,
            Ok(None) => NutritionInput::default(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load nutrition input");
                NutritionInput::default()
            }
        };

        let result = match self
            .store
            .get::<NutritionResult>(keys::NUTRITION_RESULT)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load nutrition result");
                None
            }
        };

        (input, result)
    }

    /// Persist the input snapshot. Called after every edit; best effort.
    pub async fn save_input(&self, input: &NutritionInput) {
        if let Err(e) = self.store.set(keys::NUTRITION_DATA, input).await {
            tracing::warn!(error = %e, "Failed to persist nutrition input");
        }
    }

    /// Validate, compute, and persist input and result together.
    pub async fn calculate(&self, input: &NutritionInput) -> Result<NutritionResult, FieldErrors> {
        validate(input)?;

        let result = compute(input);
        tracing::info!(
            bmr = result.bmr,
            target_calories = result.target_calories,
            "Nutrition targets calculated"
        );

        if let Err(e) = self.store.set(keys::NUTRITION_DATA, input).await {
            tracing::warn!(error = %e, "Failed to persist nutrition input");
        }
        if let Err(e) = self.store.set(keys::NUTRITION_RESULT, &result).await {
            tracing::warn!(error = %e, "Failed to persist nutrition result");
        }

        Ok(result)
    }

    /// Clear persisted input and result, returning the zeroed form.
    pub async fn reset(&self) -> NutritionInput {
        if let Err(e) = self.store.remove(keys::NUTRITION_DATA).await {
            tracing::warn!(error = %e, "Failed to clear nutrition input");
        }
        if let Err(e) = self.store.remove(keys::NUTRITION_RESULT).await {
            tracing::warn!(error = %e, "Failed to clear nutrition result");
        }
        NutritionInput::default()
    }
}
