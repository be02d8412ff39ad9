use crate::errors::AppError;
use crate::models::{
    ImportResponse, MoodEntry, SaveMoodRequest, SaveMoodResponse, SummaryResponse, TodayResponse,
};
use crate::state::AppState;
use crate::stats::{build_summary, build_summary_at, date_key};
use crate::ui::render_index;
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = today();
    let store = state.store.lock().await;
    let summary = build_summary_at(today, store.entries());
    Html(render_index(&date_key(today), &summary))
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    let today = today();
    let store = state.store.lock().await;
    Json(TodayResponse {
        date: date_key(today),
        entry: store.entry_for(today).cloned(),
    })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<SummaryResponse> {
    let store = state.store.lock().await;
    Json(build_summary(store.entries()))
}

pub async fn save_mood(
    State(state): State<AppState>,
    Json(payload): Json<SaveMoodRequest>,
) -> Result<Json<SaveMoodResponse>, AppError> {
    let today = today();
    let entry = MoodEntry::new(
        today,
        payload.mood,
        normalize_activities(payload.activities),
        payload.notes.trim().to_string(),
    );

    let mut store = state.store.lock().await;
    let saved = store.upsert(entry).await?.clone();
    info!(date = %saved.date, mood = %saved.mood, "mood saved");

    Ok(Json(SaveMoodResponse {
        entry: saved,
        summary: build_summary_at(today, store.entries()),
    }))
}

pub async fn export_data(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store.lock().await;
    let payload = store.export_snapshot()?;
    let disposition = format!("attachment; filename=\"{}\"", export_file_name(today()));

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payload,
    ))
}

pub async fn import_data(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ImportResponse>, AppError> {
    let mut store = state.store.lock().await;
    match store.import_replace(&body).await {
        Ok(imported) => Ok(Json(ImportResponse { imported })),
        Err(err) => {
            warn!("import rejected: {err}");
            Err(err.into())
        }
    }
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("mood-tracker-data-{}.json", date_key(date))
}

/// Trims tags, drops blanks and repeats, keeps first-seen order.
fn normalize_activities(activities: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(activities.len());
    for activity in activities {
        let activity = activity.trim();
        if !activity.is_empty() && !kept.iter().any(|existing| existing == activity) {
            kept.push(activity.to_string());
        }
    }
    kept
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
