use crate::errors::AppError;
use crate::models::{AddWorkoutForm, AutoWorkoutForm, DailyPoint, ProfileForm, SummaryResponse};
use crate::report::export_report;
use crate::state::AppState;
use crate::stats::{build_daily, build_summary};
use crate::ui::{render_index, render_not_found, render_summary};
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let flashes = state.flashes.take().await;
    let store = state.store.lock().await;
    let summary = build_summary(&store);
    Html(render_index(&store, &summary, &flashes, &state.config.app_version))
}

pub async fn summary(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_summary(&build_summary(&store), &state.config.app_version))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let store = state.store.lock().await;
    Json(build_summary(&store))
}

pub async fn get_daily(State(state): State<AppState>) -> Json<Vec<DailyPoint>> {
    let store = state.store.lock().await;
    Json(build_daily(&store))
}

pub async fn add_workout(
    State(state): State<AppState>,
    Form(form): Form<AddWorkoutForm>,
) -> Redirect {
    let result = state.store.lock().await.add_entry(&form, now());
    match result {
        Ok((category, entry)) => {
            info!(%category, workout = %entry.workout, duration = entry.duration, "workout added");
            state
                .flashes
                .success(format!(
                    "✅ Added {} ({} min) to {category}.",
                    entry.workout, entry.duration
                ))
                .await;
        }
        Err(err) => {
            warn!("rejected workout: {err}");
            state.flashes.error(err.to_string()).await;
        }
    }
    Redirect::to("/")
}

pub async fn add_workout_auto(
    State(state): State<AppState>,
    Form(form): Form<AutoWorkoutForm>,
) -> Redirect {
    let result = state.store.lock().await.add_entry_auto(&form, now());
    match result {
        Ok((category, entry)) => {
            info!(%category, workout = %entry.workout, calories = entry.calories, "estimated workout added");
            state
                .flashes
                .success(format!(
                    "✅ Added {} ({} min, ~{} cal) to {category}.",
                    entry.workout, entry.duration, entry.calories
                ))
                .await;
        }
        Err(err) => {
            warn!("rejected estimated workout: {err}");
            state.flashes.error(err.to_string()).await;
        }
    }
    Redirect::to("/")
}

pub async fn save_profile(
    State(state): State<AppState>,
    Form(form): Form<ProfileForm>,
) -> Redirect {
    let result = state
        .store
        .lock()
        .await
        .save_profile(&form)
        .map(|profile| profile.name.clone());
    match result {
        Ok(name) => {
            info!(name = %name, "profile saved");
            state.flashes.success(format!("✅ Saved profile for {name}.")).await;
        }
        Err(err) => {
            warn!("rejected profile: {err}");
            state.flashes.error(err.to_string()).await;
        }
    }
    Redirect::to("/")
}

pub async fn export_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let result = export_report(&*state.store.lock().await);
    let report = match result {
        Ok(report) => report,
        Err(err) => {
            warn!("export refused: {err}");
            state.flashes.error(err.to_string()).await;
            return Ok(Redirect::to("/").into_response());
        }
    };

    info!(filename = %report.filename, bytes = report.bytes.len(), "report exported");
    let disposition = content_disposition(&report.filename);
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(report.bytes.into())
        .map_err(AppError::internal)?;
    Ok(response)
}

pub async fn not_found(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    warn!(path = %uri.path(), "no route");
    (
        StatusCode::NOT_FOUND,
        Html(render_not_found(uri.path(), &state.config.app_version)),
    )
}

/// Attachment header with an ASCII fallback and the exact UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|ch| match ch {
            '"' | '\\' => '_',
            ' '..='~' => ch,
            _ => '_',
        })
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
