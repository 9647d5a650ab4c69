use crate::models::{CategorySummary, DailyPoint, NumberedEntry, SummaryResponse, Tier, WorkoutEntry};
use crate::store::WorkoutStore;
use chrono::{Duration, Local, NaiveDate};

pub const WEEK_DAYS: i64 = 7;

pub fn build_summary(store: &WorkoutStore) -> SummaryResponse {
    build_summary_at(Local::now().date_naive(), store)
}

pub fn build_summary_at(today: NaiveDate, store: &WorkoutStore) -> SummaryResponse {
    let mut total_minutes = 0u64;
    let mut total_calories = 0u64;
    let mut categories = Vec::new();

    for (category, entries) in store.categories() {
        let minutes = entries
            .iter()
            .fold(0u64, |sum, entry| sum.saturating_add(entry.duration));
        let calories = entries
            .iter()
            .fold(0u64, |sum, entry| sum.saturating_add(entry.calories));
        total_minutes = total_minutes.saturating_add(minutes);
        total_calories = total_calories.saturating_add(calories);

        categories.push(CategorySummary {
            category,
            minutes,
            calories,
            sessions: entries
                .iter()
                .enumerate()
                .map(|(index, entry)| NumberedEntry {
                    number: index + 1,
                    entry: entry.clone(),
                })
                .collect(),
        });
    }

    let tier = Tier::from_minutes(total_minutes);
    let weekly_calories = weekly_calories(today, store.entries());
    let weekly_goal = store.profile().map(|profile| profile.weekly_calorie_goal);

    SummaryResponse {
        total_minutes,
        total_calories,
        tier,
        message: tier.message(),
        categories,
        weekly_calories,
        weekly_goal,
        weekly_progress_percent: weekly_progress_percent(weekly_calories, weekly_goal),
    }
}

/// Calories logged from six days before `today` through `today`.
pub fn weekly_calories<'a>(
    today: NaiveDate,
    entries: impl IntoIterator<Item = &'a WorkoutEntry>,
) -> u64 {
    let start = today - Duration::days(WEEK_DAYS - 1);
    entries
        .into_iter()
        .filter(|entry| (start..=today).contains(&entry.timestamp.date()))
        .fold(0u64, |sum, entry| sum.saturating_add(entry.calories))
}

/// Share of the weekly goal reached, floored and capped at 100.
pub fn weekly_progress_percent(weekly_calories: u64, goal: Option<u64>) -> u8 {
    match goal {
        Some(goal) if goal > 0 => {
            let percent = u128::from(weekly_calories) * 100 / u128::from(goal);
            percent.min(100) as u8
        }
        _ => 0,
    }
}

pub fn build_daily(store: &WorkoutStore) -> Vec<DailyPoint> {
    build_daily_at(Local::now().date_naive(), store)
}

pub fn build_daily_at(today: NaiveDate, store: &WorkoutStore) -> Vec<DailyPoint> {
    let mut days = Vec::with_capacity(WEEK_DAYS as usize);
    for offset in (0..WEEK_DAYS).rev() {
        let date = today - Duration::days(offset);
        let mut point = DailyPoint {
            date: date.to_string(),
            minutes: 0,
            calories: 0,
            sessions: 0,
        };
        if let Some(log) = store.daily(date) {
            for entry in log.sessions.values().flatten() {
                point.minutes = point.minutes.saturating_add(entry.duration);
                point.calories = point.calories.saturating_add(entry.calories);
                point.sessions += 1;
            }
        }
        days.push(point);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddWorkoutForm, ProfileForm};
    use chrono::NaiveDateTime;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()
    }

    fn log(store: &mut WorkoutStore, category: &str, duration: u64, calories: u64, days_ago: i64) {
        let when: NaiveDateTime = (today() - Duration::days(days_ago)).and_hms_opt(9, 0, 0).unwrap();
        let form = AddWorkoutForm {
            workout: Some(format!("{category} session")),
            duration: Some(duration.to_string()),
            calories: Some(calories.to_string()),
            category: Some(category.to_string()),
        };
        store.add_entry(&form, when).unwrap();
    }

    fn save_goal(store: &mut WorkoutStore, goal: &str) {
        let form = ProfileForm {
            name: Some("Pat".into()),
            registration_id: Some("P-1".into()),
            age: Some("40".into()),
            gender: Some("F".into()),
            height_cm: Some("170".into()),
            weight_kg: Some("65".into()),
            weekly_calorie_goal: Some(goal.into()),
        };
        store.save_profile(&form).unwrap();
    }

    #[test]
    fn empty_store_starts_at_first_tier() {
        let summary = build_summary_at(today(), &WorkoutStore::default());
        assert_eq!(summary.total_minutes, 0);
        assert_eq!(summary.tier, Tier::Start);
        assert_eq!(summary.categories.len(), 3);
        assert_eq!(summary.weekly_progress_percent, 0);
        assert_eq!(summary.weekly_goal, None);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_minutes(29), Tier::Start);
        assert_eq!(Tier::from_minutes(30), Tier::Consistency);
        assert_eq!(Tier::from_minutes(59), Tier::Consistency);
        assert_eq!(Tier::from_minutes(60), Tier::Dedication);
    }

    #[test]
    fn totals_span_all_categories() {
        let mut store = WorkoutStore::default();
        log(&mut store, "Warm-up", 20, 200, 0);
        log(&mut store, "Workout", 45, 350, 0);
        log(&mut store, "Cool-down", 15, 50, 0);

        let summary = build_summary_at(today(), &store);
        assert_eq!(summary.total_minutes, 80);
        assert_eq!(summary.total_calories, 600);
        assert_eq!(summary.tier, Tier::Dedication);
        assert_eq!(summary.categories[1].minutes, 45);
        assert_eq!(summary.categories[1].sessions[0].number, 1);
    }

    #[test]
    fn weekly_window_includes_six_days_back() {
        let mut store = WorkoutStore::default();
        log(&mut store, "Workout", 30, 100, 0);
        log(&mut store, "Workout", 30, 200, 6);
        log(&mut store, "Workout", 30, 400, 7);

        assert_eq!(weekly_calories(today(), store.entries()), 300);
    }

    #[test]
    fn weekly_progress_against_goal() {
        let mut store = WorkoutStore::default();
        save_goal(&mut store, "500");
        log(&mut store, "Workout", 30, 400, 1);

        let summary = build_summary_at(today(), &store);
        assert_eq!(summary.weekly_calories, 400);
        assert_eq!(summary.weekly_progress_percent, 80);
    }

    #[test]
    fn progress_percent_is_floored_and_capped() {
        assert_eq!(weekly_progress_percent(999, Some(1000)), 99);
        assert_eq!(weekly_progress_percent(2500, Some(1000)), 100);
        assert_eq!(weekly_progress_percent(400, Some(0)), 0);
        assert_eq!(weekly_progress_percent(400, None), 0);
    }

    #[test]
    fn daily_series_covers_last_seven_days() {
        let mut store = WorkoutStore::default();
        log(&mut store, "Warm-up", 10, 30, 2);
        log(&mut store, "Workout", 25, 220, 2);

        let days = build_daily_at(today(), &store);
        assert_eq!(days.len(), 7);
        assert_eq!(days[6].date, "2026-01-10");
        let point = days.iter().find(|day| day.date == "2026-01-08").expect("missing day");
        assert_eq!(point.minutes, 35);
        assert_eq!(point.calories, 250);
        assert_eq!(point.sessions, 2);
    }
}
