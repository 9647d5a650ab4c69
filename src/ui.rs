use crate::flash::Flash;
use crate::guides::{DIET_PLANS, WORKOUT_PLAN};
use crate::metrics::met_for_label;
use crate::models::{Category, SummaryResponse, UserProfile, WorkoutEntry};
use crate::store::WorkoutStore;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write as _;

pub fn render_index(
    store: &WorkoutStore,
    summary: &SummaryResponse,
    flashes: &[Flash],
    version: &str,
) -> String {
    fill(
        INDEX_HTML,
        &[
            ("STYLE", STYLE),
            ("VERSION", &*text(version)),
            ("CATEGORY_OPTIONS", &*category_options()),
            ("WORKOUT_PLAN", &*render_workout_plan()),
            ("DIET_GUIDE", &*render_diet_guide()),
            ("PROGRESS", &*render_progress(store.is_empty(), summary)),
            ("PROFILE", &*render_profile(store.profile())),
            ("SESSIONS", &*render_sessions(store)),
            ("FLASHES", &*render_flashes(flashes)),
        ],
    )
}

pub fn render_summary(summary: &SummaryResponse, version: &str) -> String {
    let mut categories = String::new();
    for category in &summary.categories {
        let _ = write!(
            categories,
            r#"<section class="card"><h2>{} <small>{} min · {} cal</small></h2>"#,
            category.category, category.minutes, category.calories
        );
        if category.sessions.is_empty() {
            categories.push_str(r#"<p class="muted">No sessions recorded for this category.</p>"#);
        } else {
            categories.push_str("<ol>");
            for numbered in &category.sessions {
                let _ = write!(
                    categories,
                    r#"<li value="{}">{}</li>"#,
                    numbered.number,
                    entry_line(&numbered.entry)
                );
            }
            categories.push_str("</ol>");
        }
        categories.push_str("</section>");
    }

    fill(
        SUMMARY_HTML,
        &[
            ("STYLE", STYLE),
            ("VERSION", &*text(version)),
            ("TOTAL", &*summary.total_minutes.to_string()),
            ("TOTAL_CALORIES", &*summary.total_calories.to_string()),
            ("TIER", summary.tier.message()),
            ("WEEKLY", &*weekly_line(summary)),
            ("CATEGORIES", &*categories),
        ],
    )
}

pub fn render_not_found(path: &str, version: &str) -> String {
    fill(
        NOT_FOUND_HTML,
        &[
            ("STYLE", STYLE),
            ("VERSION", &*text(version)),
            ("PATH", &*text(path)),
        ],
    )
}

/// Replaces `{{NAME}}` slots in a single pass. Inserted values are never
/// scanned again, so user text that looks like a slot stays literal.
fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let mut html = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        html.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            html.push_str(&rest[open..]);
            return html;
        };
        let name = &after[..close];
        match slots.iter().find(|(slot, _)| *slot == name) {
            Some((_, value)) => html.push_str(value),
            None => html.push_str(&rest[open..open + close + 4]),
        }
        rest = &after[close + 2..];
    }
    html.push_str(rest);
    html
}

fn render_flashes(flashes: &[Flash]) -> String {
    let mut html = String::new();
    for flash in flashes {
        let _ = write!(
            html,
            r#"<div class="status" data-type="{}">{}</div>"#,
            flash.kind.css_class(),
            text(&flash.message)
        );
    }
    html
}

fn category_options() -> String {
    Category::ALL
        .iter()
        .map(|category| {
            format!(
                r#"<option value="{}">{}</option>"#,
                attr(category.as_str()),
                category
            )
        })
        .collect()
}

fn entry_line(entry: &WorkoutEntry) -> String {
    format!(
        "<strong>{}</strong> - {} min, {} cal <span class=\"muted\">{}</span>",
        text(&entry.workout),
        entry.duration,
        entry.calories,
        entry.timestamp.format("%Y-%m-%d %H:%M")
    )
}

fn render_sessions(store: &WorkoutStore) -> String {
    if store.is_empty() {
        return r#"<p class="muted">No workouts logged yet.</p>"#.to_string();
    }

    let mut html = String::new();
    for (category, entries) in store.categories() {
        let _ = write!(html, "<h3>{category}</h3>");
        if entries.is_empty() {
            html.push_str(r#"<p class="muted">No sessions recorded for this category.</p>"#);
            continue;
        }
        for entry in entries {
            let _ = write!(html, r#"<div class="workout-item">{}</div>"#, entry_line(entry));
        }
    }
    html
}

fn render_profile(profile: Option<&UserProfile>) -> String {
    match profile {
        None => r#"<p class="muted">No profile saved yet.</p>"#.to_string(),
        Some(profile) => format!(
            r#"<p class="profile-card"><strong>{}</strong> ({}) · {} yrs · {} · {:.1} cm · {:.1} kg<br />BMI {:.2} · BMR {:.0} kcal/day · weekly goal {} cal</p>"#,
            text(&profile.name),
            text(&profile.registration_id),
            profile.age,
            profile.gender.as_str(),
            profile.height_cm,
            profile.weight_kg,
            profile.bmi,
            profile.bmr,
            profile.weekly_calorie_goal
        ),
    }
}

fn render_workout_plan() -> String {
    let mut html = String::new();
    for (label, exercises) in WORKOUT_PLAN {
        let _ = write!(
            html,
            r#"<div class="guide"><h3>{} <small>MET {}</small></h3><ul>"#,
            text(label),
            met_for_label(label)
        );
        for exercise in exercises {
            let _ = write!(html, "<li>{}</li>", text(exercise));
        }
        html.push_str("</ul></div>");
    }
    html
}

fn render_diet_guide() -> String {
    let mut html = String::new();
    for (goal, foods) in DIET_PLANS {
        let _ = write!(html, r#"<div class="guide"><h3>{}</h3><ul>"#, text(goal));
        for food in foods {
            let _ = write!(html, "<li>{}</li>", text(food));
        }
        html.push_str("</ul></div>");
    }
    html
}

fn render_progress(is_empty: bool, summary: &SummaryResponse) -> String {
    let hidden = r#" style="display:none""#;
    let (empty_style, summary_style) = if is_empty { ("", hidden) } else { (hidden, "") };

    let peak = summary
        .categories
        .iter()
        .map(|category| category.minutes)
        .max()
        .unwrap_or(0)
        .max(1);

    let mut bars = String::new();
    for category in &summary.categories {
        let width = category.minutes.saturating_mul(100) / peak;
        let _ = write!(
            bars,
            r#"<div class="bar-row"><span class="bar-label">{}</span><div class="bar"><div class="bar-fill" style="width:{width}%"></div></div><span class="bar-value">{} min</span></div>"#,
            category.category, category.minutes
        );
    }

    format!(
        r#"<p id="progress-empty" class="empty-progress"{empty_style}>No workout data logged yet. Log a session to see your progress!</p>
      <div id="progress-summary"{summary_style}>{bars}</div>
      <p class="lifetime">LIFETIME TOTAL: {} minutes logged across all categories.</p>
      <p>{}</p>
      <div class="bar"><div class="bar-fill goal" style="width:{}%"></div></div>"#,
        summary.total_minutes,
        weekly_line(summary),
        summary.weekly_progress_percent
    )
}

fn weekly_line(summary: &SummaryResponse) -> String {
    match summary.weekly_goal {
        Some(goal) => format!(
            "This week: {} of {} cal goal ({}%).",
            summary.weekly_calories, goal, summary.weekly_progress_percent
        ),
        None => format!(
            "This week: {} cal. Save a profile to set a weekly goal.",
            summary.weekly_calories
        ),
    }
}

const STYLE: &str = r#"
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      margin: 0;
    }

    .card, .guide, .workout-item {
      background: white;
      border-radius: 18px;
      padding: 14px 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .workout-item {
      margin-bottom: 8px;
      background: #eafaf1;
    }

    form {
      display: grid;
      gap: 8px;
    }

    input, select {
      padding: 8px;
      border: 1px solid #ccc;
      border-radius: 8px;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .tab {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .tab.active {
      background: var(--accent-2);
      color: white;
    }

    .muted {
      color: #8b857d;
    }

    .status {
      font-size: 0.95rem;
      padding: 8px 12px;
      border-radius: 12px;
    }

    .status[data-type="error"] {
      color: #c63b2b;
      background: #fdecea;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
      background: #eafaf1;
    }

    .bar-row {
      display: grid;
      grid-template-columns: 100px 1fr 80px;
      gap: 10px;
      align-items: center;
    }

    .bar {
      height: 12px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      background: var(--accent);
    }

    .bar-fill.goal {
      background: #2d7a4b;
    }
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>ACEestFitness and Gym</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>ACEestFitness and Gym</h1>
      <p class="muted">Log sessions, follow a plan and watch your progress.</p>
    </header>

    {{FLASHES}}

    <nav class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="log">🏋️ Log Workouts</button>
      <button class="tab" type="button" data-tab="plan">💡 Workout Plan</button>
      <button class="tab" type="button" data-tab="diet">🥗 Diet Guide</button>
      <button class="tab" type="button" data-tab="progress">📈 Progress Tracker</button>
    </nav>

    <section class="panel" id="tab-log">
      <div class="card">
        <h2>Add a session</h2>
        <form method="post" action="/add">
          <label for="workout">Workout Name</label>
          <input type="text" id="workout" name="workout" required />
          <label for="duration">Duration (minutes)</label>
          <input type="number" id="duration" name="duration" min="1" required />
          <label for="calories">Calories Burned</label>
          <input type="number" id="calories" name="calories" min="0" required />
          <label for="category">Category</label>
          <select id="category" name="category">{{CATEGORY_OPTIONS}}</select>
          <button type="submit">Add Workout</button>
        </form>
      </div>

      <div class="card">
        <h2>Quick add (estimated calories)</h2>
        <form method="post" action="/add-auto">
          <input type="text" name="workout" placeholder="Workout name" required />
          <input type="number" name="duration" min="1" placeholder="Minutes" required />
          <select name="category">{{CATEGORY_OPTIONS}}</select>
          <button type="submit">Add with estimate</button>
        </form>
      </div>

      <div class="card">
        <h2>Your profile</h2>
        {{PROFILE}}
        <form method="post" action="/user/save">
          <input type="text" name="name" placeholder="Name" required />
          <input type="text" name="registration_id" placeholder="Registration ID" required />
          <input type="number" name="age" min="1" placeholder="Age" required />
          <select name="gender"><option value="M">M</option><option value="F">F</option></select>
          <input type="text" name="height_cm" placeholder="Height (cm)" required />
          <input type="text" name="weight_kg" placeholder="Weight (kg)" required />
          <input type="number" name="weekly_calorie_goal" min="0" placeholder="Weekly calorie goal (2000)" />
          <button type="submit">Save profile</button>
        </form>
        <p><a href="/export/pdf">Download PDF report</a> · <a href="/summary">View summary</a></p>
      </div>

      <div class="card">
        <h2>Logged Workouts</h2>
        {{SESSIONS}}
      </div>
    </section>

    <section class="panel" id="tab-plan" hidden>
      <h2>Personalized Workout Plan Guide</h2>
      {{WORKOUT_PLAN}}
    </section>

    <section class="panel" id="tab-diet" hidden>
      <h2>Nutritional Goal Setting Guide</h2>
      {{DIET_GUIDE}}
    </section>

    <section class="panel" id="tab-progress" hidden>
      <h2>Progress Tracker</h2>
      {{PROGRESS}}
    </section>

    <footer class="muted">Version {{VERSION}}</footer>
  </main>

  <script>
    const tabs = Array.from(document.querySelectorAll('.tab'));
    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        tabs.forEach((other) => other.classList.toggle('active', other === button));
        document.querySelectorAll('.panel').forEach((panel) => {
          panel.hidden = panel.id !== `tab-${button.dataset.tab}`;
        });
      });
    });
  </script>
</body>
</html>
"#;

const SUMMARY_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Session Summary</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Session Summary</h1>
      <p>Total Time Spent: {{TOTAL}} minutes</p>
      <p>Total Calories: {{TOTAL_CALORIES}} cal</p>
      <p><strong>{{TIER}}</strong></p>
      <p>{{WEEKLY}}</p>
    </header>
    {{CATEGORIES}}
    <p><a href="/">Back to log</a></p>
    <footer class="muted">Version {{VERSION}}</footer>
  </main>
</body>
</html>
"#;

const NOT_FOUND_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>Not Found</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <h1>Not Found</h1>
    <p>No page at <code>{{PATH}}</code>.</p>
    <p><a href="/">Back to log</a></p>
    <footer class="muted">Version {{VERSION}}</footer>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flash::FlashKind;
    use crate::models::{AddWorkoutForm, ProfileForm};
    use crate::stats::build_summary_at;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
    }

    fn store_with(entries: &[(&str, &str, &str, &str)]) -> WorkoutStore {
        let mut store = WorkoutStore::default();
        let when = today().and_hms_opt(7, 0, 0).unwrap();
        for (workout, duration, calories, category) in entries {
            let form = AddWorkoutForm {
                workout: Some(workout.to_string()),
                duration: Some(duration.to_string()),
                calories: Some(calories.to_string()),
                category: Some(category.to_string()),
            };
            store.add_entry(&form, when).unwrap();
        }
        store
    }

    fn index_for(store: &WorkoutStore, flashes: &[Flash]) -> String {
        render_index(store, &build_summary_at(today(), store), flashes, "1.2.3")
    }

    #[test]
    fn empty_index_shows_placeholders() {
        let page = index_for(&WorkoutStore::default(), &[]);
        assert!(page.contains("No workouts logged yet."));
        assert!(page.contains("No workout data logged yet. Log a session to see your progress!"));
        assert!(page.contains(r#"id="progress-summary" style="display:none""#));
        assert!(page.contains("LIFETIME TOTAL: 0 minutes logged across all categories."));
        assert!(page.contains("Version 1.2.3"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn index_lists_sessions_and_empty_categories() {
        let store = store_with(&[("Cycling", "45", "400", "Warm-up"), ("Yoga", "60", "180", "Cool-down")]);
        let page = index_for(&store, &[]);
        assert!(page.contains("<strong>Cycling</strong> - 45 min, 400 cal"));
        assert!(page.contains("<strong>Yoga</strong> - 60 min, 180 cal"));
        assert!(page.contains("No sessions recorded for this category."));
        assert!(page.contains(r#"id="progress-empty" class="empty-progress" style="display:none""#));
        assert!(page.contains("LIFETIME TOTAL: 105 minutes logged across all categories."));
    }

    #[test]
    fn index_escapes_user_text() {
        let store = store_with(&[("<b>Run</b>", "10", "10", "Workout")]);
        let page = index_for(&store, &[]);
        assert!(page.contains("&lt;b&gt;Run&lt;/b&gt;"));
        assert!(!page.contains("<b>Run</b>"));
    }

    #[test]
    fn index_renders_flashes_and_guides() {
        let flash = Flash {
            kind: FlashKind::Error,
            message: "Calories cannot be negative.".into(),
        };
        let page = index_for(&WorkoutStore::default(), &[flash]);
        assert!(page.contains(r#"data-type="error">Calories cannot be negative."#));
        assert!(page.contains("Personalized Workout Plan Guide"));
        assert!(page.contains("Nutritional Goal Setting Guide"));
        for (_, exercises) in WORKOUT_PLAN {
            for exercise in exercises {
                assert!(page.contains(&*text(exercise)));
            }
        }
        for (_, foods) in DIET_PLANS {
            for food in foods {
                assert!(page.contains(&*text(food)));
            }
        }
    }

    #[test]
    fn summary_page_shows_totals_and_tier() {
        let store = store_with(&[("Sprint", "20", "200", "Warm-up"), ("Lift", "45", "350", "Workout")]);
        let page = render_summary(&build_summary_at(today(), &store), "dev");
        assert!(page.contains("Total Time Spent: 65 minutes"));
        assert!(page.contains("Excellent dedication! Keep up the great work"));
        assert!(page.contains(r#"<li value="1"><strong>Sprint</strong>"#));

        let empty = render_summary(&build_summary_at(today(), &WorkoutStore::default()), "dev");
        assert!(empty.contains("Total Time Spent: 0 minutes"));
        assert!(empty.contains("Good start! Keep moving"));
    }

    #[test]
    fn slot_names_in_user_text_stay_literal() {
        let store = store_with(&[("{{FLASHES}}", "10", "10", "Workout")]);
        let flash = Flash {
            kind: FlashKind::Success,
            message: "✅ Added {{FLASHES}} (10 min) to Workout.".into(),
        };
        let page = index_for(&store, &[flash]);
        assert!(page.contains("<strong>{{FLASHES}}</strong> - 10 min, 10 cal"));
        assert_eq!(page.matches(r#"<div class="status""#).count(), 1);

        let mut store = WorkoutStore::default();
        let profile = ProfileForm {
            name: Some("{{SESSIONS}}".into()),
            registration_id: Some("{{VERSION}}".into()),
            age: Some("30".into()),
            gender: Some("F".into()),
            height_cm: Some("165".into()),
            weight_kg: Some("60".into()),
            weekly_calorie_goal: None,
        };
        store.save_profile(&profile).unwrap();
        let page = index_for(&store, &[]);
        assert!(page.contains("<strong>{{SESSIONS}}</strong> ({{VERSION}})"));
        assert_eq!(page.matches("No workouts logged yet.").count(), 1);
        assert_eq!(page.matches("Version 1.2.3").count(), 1);
    }

    #[test]
    fn unknown_slots_are_left_in_place() {
        assert_eq!(
            fill("a {{X}} b {{Y}} {{", &[("X", "1")]),
            "a 1 b {{Y}} {{"
        );
    }
}
