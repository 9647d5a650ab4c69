use crate::errors::PreconditionError;
use crate::models::{ReportRow, UserProfile};
use crate::pdf::{Font, PdfWriter};
use crate::store::WorkoutStore;

const COLUMNS: [f32; 5] = [0.0, 90.0, 280.0, 370.0, 440.0];
const MAX_WORKOUT_CHARS: usize = 32;

pub struct Report {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub fn export_report(store: &WorkoutStore) -> Result<Report, PreconditionError> {
    let profile = store.profile().ok_or(PreconditionError::ProfileRequired)?;
    let rows = report_rows(store);
    Ok(Report {
        filename: report_filename(&profile.name),
        bytes: render_pdf(profile, &rows),
    })
}

/// All entries, category-major then insertion order.
pub fn report_rows(store: &WorkoutStore) -> Vec<ReportRow> {
    store
        .categories()
        .flat_map(|(category, entries)| {
            entries.iter().map(move |entry| ReportRow {
                category,
                workout: entry.workout.clone(),
                duration: entry.duration,
                calories: entry.calories,
                date: entry.timestamp.date().to_string(),
            })
        })
        .collect()
}

pub fn report_filename(name: &str) -> String {
    format!("{}_weekly_report.pdf", name.replace(' ', "_"))
}

fn render_pdf(profile: &UserProfile, rows: &[ReportRow]) -> Vec<u8> {
    let mut pdf = PdfWriter::new();
    pdf.text(Font::Bold, 18.0, "Weekly Fitness Report");
    pdf.gap(6.0);

    let header = [
        format!("Name: {}", profile.name),
        format!("Registration ID: {}", profile.registration_id),
        format!("Age: {}", profile.age),
        format!("Gender: {}", profile.gender.as_str()),
        format!("Height: {:.1} cm", profile.height_cm),
        format!("Weight: {:.1} kg", profile.weight_kg),
        format!("BMI: {:.2}", profile.bmi),
        format!("BMR: {:.0} kcal/day", profile.bmr),
    ];
    for line in &header {
        pdf.text(Font::Regular, 11.0, line);
    }
    pdf.gap(10.0);

    pdf.row(
        Font::Bold,
        10.0,
        &COLUMNS,
        &["Category", "Workout", "Duration (min)", "Calories", "Date"],
    );
    if rows.is_empty() {
        pdf.text(Font::Regular, 10.0, "No workouts logged.");
    }
    for row in rows {
        let workout = truncate(&row.workout, MAX_WORKOUT_CHARS);
        let duration = row.duration.to_string();
        let calories = row.calories.to_string();
        pdf.row(
            Font::Regular,
            10.0,
            &COLUMNS,
            &[row.category.as_str(), &workout, &duration, &calories, &row.date],
        );
    }

    pdf.finish()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars - 3).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddWorkoutForm, Category, ProfileForm};
    use chrono::NaiveDate;

    fn add(store: &mut WorkoutStore, workout: &str, category: &str, day: u32) {
        let when = NaiveDate::from_ymd_opt(2026, 3, day)
            .unwrap()
            .and_hms_opt(18, 15, 0)
            .unwrap();
        let form = AddWorkoutForm {
            workout: Some(workout.into()),
            duration: Some("25".into()),
            calories: Some("180".into()),
            category: Some(category.into()),
        };
        store.add_entry(&form, when).unwrap();
    }

    fn save_profile(store: &mut WorkoutStore, name: &str) {
        let form = ProfileForm {
            name: Some(name.into()),
            registration_id: Some("GYM-7".into()),
            age: Some("28".into()),
            gender: Some("F".into()),
            height_cm: Some("168".into()),
            weight_kg: Some("61".into()),
            weekly_calorie_goal: None,
        };
        store.save_profile(&form).unwrap();
    }

    #[test]
    fn export_requires_profile() {
        let mut store = WorkoutStore::default();
        add(&mut store, "Row", "Workout", 1);
        assert!(matches!(
            export_report(&store),
            Err(PreconditionError::ProfileRequired)
        ));
    }

    #[test]
    fn filename_replaces_spaces() {
        assert_eq!(report_filename("Jane Doe"), "Jane_Doe_weekly_report.pdf");
        assert_eq!(report_filename("Solo"), "Solo_weekly_report.pdf");
    }

    #[test]
    fn rows_are_category_major_in_insertion_order() {
        let mut store = WorkoutStore::default();
        add(&mut store, "Stretch", "Cool-down", 2);
        add(&mut store, "Squat", "Workout", 2);
        add(&mut store, "Jog", "Warm-up", 3);
        add(&mut store, "Bench", "Workout", 3);

        let rows = report_rows(&store);
        let order: Vec<_> = rows.iter().map(|row| (row.category, row.workout.as_str())).collect();
        assert_eq!(
            order,
            [
                (Category::WarmUp, "Jog"),
                (Category::Workout, "Squat"),
                (Category::Workout, "Bench"),
                (Category::CoolDown, "Stretch"),
            ]
        );
        assert_eq!(rows[0].date, "2026-03-03");
        assert_eq!(rows[0].duration, 25);
        assert_eq!(rows[0].calories, 180);
    }

    #[test]
    fn export_renders_profile_and_rows() {
        let mut store = WorkoutStore::default();
        save_profile(&mut store, "Jane Doe");
        add(&mut store, "Deadlift", "Workout", 4);

        let report = export_report(&store).unwrap();
        assert_eq!(report.filename, "Jane_Doe_weekly_report.pdf");
        let text = String::from_utf8(report.bytes).unwrap();
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("(Name: Jane Doe) Tj"));
        assert!(text.contains("(Registration ID: GYM-7) Tj"));
        assert!(text.contains("(Deadlift) Tj"));
        assert!(text.contains("(2026-03-04) Tj"));
    }

    #[test]
    fn long_workout_names_are_shortened() {
        let long = "x".repeat(40);
        let short = truncate(&long, MAX_WORKOUT_CHARS);
        assert_eq!(short.chars().count(), MAX_WORKOUT_CHARS);
        assert!(short.ends_with("..."));
    }
}
