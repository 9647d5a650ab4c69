//! Body metrics and calorie estimation.

use crate::models::{Category, Gender};

/// MET applied to labels outside the fixed category set.
pub const DEFAULT_MET: f64 = 5.0;

/// Body weight assumed for calorie estimates when no profile is saved.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

pub fn met_for_label(label: &str) -> f64 {
    label.parse::<Category>().map_or(DEFAULT_MET, Category::met)
}

/// Calories burned over `duration_minutes`, rounded half to even.
pub fn estimate_calories(category: Category, weight_kg: f64, duration_minutes: u64) -> u64 {
    let burned = category.met() * 3.5 * weight_kg / 200.0 * duration_minutes as f64;
    burned.round_ties_even().max(0.0) as u64
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Mifflin-St Jeor basal metabolic rate in kcal/day.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::M => base + 5.0,
        Gender::F => base - 161.0,
    }
}
