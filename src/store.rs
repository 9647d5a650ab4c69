use crate::errors::ValidationError;
use crate::metrics::{self, DEFAULT_WEIGHT_KG};
use crate::models::{
    AddWorkoutForm, AutoWorkoutForm, Category, DailyLog, ProfileForm, UserProfile, WorkoutEntry,
};
use crate::validation::{validate_auto_workout, validate_profile, validate_workout};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// In-memory workout log. Lives as long as the process.
#[derive(Debug, Clone)]
pub struct WorkoutStore {
    sessions: BTreeMap<Category, Vec<WorkoutEntry>>,
    profile: Option<UserProfile>,
    daily: BTreeMap<NaiveDate, DailyLog>,
}

impl Default for WorkoutStore {
    fn default() -> Self {
        Self {
            sessions: Category::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
            profile: None,
            daily: BTreeMap::new(),
        }
    }
}

impl WorkoutStore {
    pub fn add_entry(
        &mut self,
        form: &AddWorkoutForm,
        now: NaiveDateTime,
    ) -> Result<(Category, WorkoutEntry), ValidationError> {
        let input = validate_workout(form)?;
        let entry = WorkoutEntry {
            workout: input.workout,
            duration: input.duration,
            calories: input.calories,
            timestamp: now,
        };
        self.push(input.category, entry.clone());
        Ok((input.category, entry))
    }

    /// Like `add_entry`, but calories come from the MET estimate using the
    /// saved profile weight.
    pub fn add_entry_auto(
        &mut self,
        form: &AutoWorkoutForm,
        now: NaiveDateTime,
    ) -> Result<(Category, WorkoutEntry), ValidationError> {
        let input = validate_auto_workout(form)?;
        let weight_kg = self
            .profile
            .as_ref()
            .map_or(DEFAULT_WEIGHT_KG, |profile| profile.weight_kg);
        let entry = WorkoutEntry {
            workout: input.workout,
            duration: input.duration,
            calories: metrics::estimate_calories(input.category, weight_kg, input.duration),
            timestamp: now,
        };
        self.push(input.category, entry.clone());
        Ok((input.category, entry))
    }

    pub fn save_profile(&mut self, form: &ProfileForm) -> Result<&UserProfile, ValidationError> {
        let input = validate_profile(form)?;
        let profile = UserProfile {
            bmi: metrics::bmi(input.weight_kg, input.height_cm),
            bmr: metrics::bmr(input.weight_kg, input.height_cm, input.age, input.gender),
            name: input.name,
            registration_id: input.registration_id,
            age: input.age,
            gender: input.gender,
            height_cm: input.height_cm,
            weight_kg: input.weight_kg,
            weekly_calorie_goal: input.weekly_calorie_goal,
        };
        Ok(&*self.profile.insert(profile))
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn sessions(&self, category: Category) -> &[WorkoutEntry] {
        self.sessions.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories in display order with their entries in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[WorkoutEntry])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.sessions(category)))
    }

    pub fn entries(&self) -> impl Iterator<Item = &WorkoutEntry> {
        self.sessions.values().flatten()
    }

    pub fn entry_count(&self) -> usize {
        self.sessions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    pub fn daily(&self, date: NaiveDate) -> Option<&DailyLog> {
        self.daily.get(&date)
    }

    fn push(&mut self, category: Category, entry: WorkoutEntry) {
        self.daily
            .entry(entry.timestamp.date())
            .or_default()
            .sessions
            .entry(category)
            .or_default()
            .push(entry.clone());
        self.sessions.entry(category).or_default().push(entry);
    }
}
