//! Parse-and-validate step for submitted forms.
//!
//! Every field arrives as an optional string. Parsing is strict: values are
//! trimmed, then must be plain base-10 numbers. Nothing is truncated.

use crate::errors::ValidationError;
use crate::models::{AddWorkoutForm, AutoWorkoutForm, Category, Gender, ProfileForm};

pub const DEFAULT_WEEKLY_GOAL: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub category: Category,
    pub workout: String,
    pub duration: u64,
    pub calories: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAutoWorkout {
    pub category: Category,
    pub workout: String,
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    pub name: String,
    pub registration_id: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub weekly_calorie_goal: u64,
}

pub fn validate_workout(form: &AddWorkoutForm) -> Result<NewWorkout, ValidationError> {
    let (Some(workout), Some(duration), Some(calories), Some(category)) = (
        present(&form.workout),
        present(&form.duration),
        present(&form.calories),
        present(&form.category),
    ) else {
        return Err(ValidationError::MissingField);
    };

    let category = parse_category(category)?;
    let (Some(duration), Some(calories)) = (parse_integer(duration), parse_integer(calories))
    else {
        return Err(ValidationError::NotNumeric);
    };
    let duration = positive_duration(duration)?;
    let calories = u64::try_from(calories).map_err(|_| ValidationError::NegativeCalories)?;

    Ok(NewWorkout {
        category,
        workout: workout.to_string(),
        duration,
        calories,
    })
}

pub fn validate_auto_workout(form: &AutoWorkoutForm) -> Result<NewAutoWorkout, ValidationError> {
    let (Some(workout), Some(duration), Some(category)) = (
        present(&form.workout),
        present(&form.duration),
        present(&form.category),
    ) else {
        return Err(ValidationError::MissingField);
    };

    let category = parse_category(category)?;
    let duration = parse_integer(duration).ok_or(ValidationError::NotNumeric)?;
    let duration = positive_duration(duration)?;

    Ok(NewAutoWorkout {
        category,
        workout: workout.to_string(),
        duration,
    })
}

pub fn validate_profile(form: &ProfileForm) -> Result<NewProfile, ValidationError> {
    let name = required_text(&form.name, "name is required")?;
    let registration_id = required_text(&form.registration_id, "registration id is required")?;

    let age = present(&form.age)
        .and_then(parse_integer)
        .ok_or_else(|| invalid_profile("age must be a whole number"))?;
    let age = u32::try_from(age)
        .ok()
        .filter(|age| *age > 0)
        .ok_or_else(|| invalid_profile("age must be a positive number"))?;

    let gender = match present(&form.gender).map(str::to_uppercase).as_deref() {
        Some("M") => Gender::M,
        Some("F") => Gender::F,
        _ => return Err(invalid_profile("gender must be M or F")),
    };

    let height_cm = positive_measure(&form.height_cm, "height")?;
    let weight_kg = positive_measure(&form.weight_kg, "weight")?;

    let weekly_calorie_goal = match present(&form.weekly_calorie_goal) {
        None => DEFAULT_WEEKLY_GOAL,
        Some(raw) => parse_integer(raw)
            .and_then(|goal| u64::try_from(goal).ok())
            .ok_or_else(|| invalid_profile("weekly calorie goal must be a non-negative whole number"))?,
    };

    Ok(NewProfile {
        name: name.to_string(),
        registration_id: registration_id.to_string(),
        age,
        gender,
        height_cm,
        weight_kg,
        weekly_calorie_goal,
    })
}

/// Trimmed value, or `None` when absent or blank.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

fn parse_category(value: &str) -> Result<Category, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidCategory)
}

fn parse_integer(value: &str) -> Option<i64> {
    value.parse::<i64>().ok()
}

fn positive_duration(duration: i64) -> Result<u64, ValidationError> {
    u64::try_from(duration)
        .ok()
        .filter(|minutes| *minutes > 0)
        .ok_or(ValidationError::NonPositiveDuration)
}

fn required_text<'a>(field: &'a Option<String>, cause: &str) -> Result<&'a str, ValidationError> {
    present(field).ok_or_else(|| invalid_profile(cause))
}

fn positive_measure(field: &Option<String>, label: &str) -> Result<f64, ValidationError> {
    let value = present(field)
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .ok_or_else(|| invalid_profile(&format!("{label} must be a number")))?;
    if value <= 0.0 {
        return Err(invalid_profile(&format!("{label} must be greater than zero")));
    }
    Ok(value)
}

fn invalid_profile(cause: &str) -> ValidationError {
    ValidationError::InvalidProfile(cause.to_string())
}
