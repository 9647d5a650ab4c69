use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Workout phase. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Warm-up")]
    WarmUp,
    #[serde(rename = "Workout")]
    Workout,
    #[serde(rename = "Cool-down")]
    CoolDown,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::WarmUp, Category::Workout, Category::CoolDown];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::WarmUp => "Warm-up",
            Category::Workout => "Workout",
            Category::CoolDown => "Cool-down",
        }
    }

    /// Metabolic equivalent used for calorie estimates.
    pub fn met(self) -> f64 {
        match self {
            Category::WarmUp => 3.0,
            Category::Workout => 6.0,
            Category::CoolDown => 2.5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCategory;

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or(UnknownCategory)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutEntry {
    pub workout: String,
    pub duration: u64,
    pub calories: u64,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub registration_id: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub weekly_calorie_goal: u64,
    pub bmi: f64,
    pub bmr: f64,
}

/// Entries logged on one calendar day, grouped by category.
#[derive(Debug, Clone, Default)]
pub struct DailyLog {
    pub sessions: BTreeMap<Category, Vec<WorkoutEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct AddWorkoutForm {
    pub workout: Option<String>,
    pub duration: Option<String>,
    pub calories: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AutoWorkoutForm {
    pub workout: Option<String>,
    pub duration: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub name: Option<String>,
    pub registration_id: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub height_cm: Option<String>,
    pub weight_kg: Option<String>,
    pub weekly_calorie_goal: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Start,
    Consistency,
    Dedication,
}

impl Tier {
    pub fn from_minutes(total_minutes: u64) -> Self {
        if total_minutes < 30 {
            Tier::Start
        } else if total_minutes < 60 {
            Tier::Consistency
        } else {
            Tier::Dedication
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Start => "Good start! Keep moving 💪",
            Tier::Consistency => "Nice work! You're building consistency 🔥",
            Tier::Dedication => "Excellent dedication! Keep up the great work 🏆",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NumberedEntry {
    pub number: usize,
    #[serde(flatten)]
    pub entry: WorkoutEntry,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub minutes: u64,
    pub calories: u64,
    pub sessions: Vec<NumberedEntry>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_minutes: u64,
    pub total_calories: u64,
    pub tier: Tier,
    pub message: &'static str,
    pub categories: Vec<CategorySummary>,
    pub weekly_calories: u64,
    pub weekly_goal: Option<u64>,
    pub weekly_progress_percent: u8,
}

#[derive(Debug, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub minutes: u64,
    pub calories: u64,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub category: Category,
    pub workout: String,
    pub duration: u64,
    pub calories: u64,
    pub date: String,
}
