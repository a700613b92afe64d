use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::error::RestError;
use crate::http::response::{cache_status, format_timestamp, last_update};
use crate::http::{AppState, SERVICE_NAME};
use crate::news::{Country, Topic};

pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": SERVICE_NAME,
        "status": "online",
        "endpoints": {
            "/": "Home page",
            "/health": "Service and cache status",
            "/news/:type": "Cached news (crypto or gold)",
            "/config/type/:type": "Force a refresh of a news type (crypto or gold)",
            "/config/country/:type/:country": "Change the country for a news type",
            "/scheduled": "Refresh every news type (external scheduler hook)",
        },
    }))
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let cache = cache_status(state.refresher.cache()).await;

    Json(json!({
        "status": "online",
        "service": SERVICE_NAME,
        "timestamp": format_timestamp(Utc::now()),
        "cache": cache,
    }))
}

pub async fn news(
    Path(topic): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RestError> {
    let topic: Topic = topic.parse()?;

    state.refresher.refresh_if_stale(topic).await;
    let entry = state.refresher.cache().get(topic).await;

    Ok(Json(json!({
        "type": topic,
        "country": entry.country,
        "lastUpdate": last_update(&entry),
        "count": entry.article_count(),
        "news": entry.news(),
    })))
}

pub async fn refresh_topic(
    Path(topic): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RestError> {
    let topic: Topic = topic.parse()?;

    let updated = state.refresher.refresh_current(topic).await;
    let entry = state.refresher.cache().get(topic).await;

    let message = if updated {
        format!("Cache {topic} updated")
    } else {
        format!("Cache {topic} refresh failed, serving previous data")
    };

    Ok(Json(json!({
        "message": message,
        "type": topic,
        "country": entry.country,
        "lastUpdate": last_update(&entry),
        "articlesCount": entry.article_count(),
    })))
}

pub async fn change_country(
    Path((topic, country)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, RestError> {
    let topic: Topic = topic.parse()?;
    let country = Country::parse(&country)?;

    info!("changing {} country to {}", topic, country);
    let updated = state.refresher.refresh(topic, country).await;
    let entry = state.refresher.cache().get(topic).await;

    // on failure the entry keeps its previous country
    let message = if updated {
        format!("Country changed for {topic}")
    } else {
        format!("Refresh failed, country unchanged for {topic}")
    };

    Ok(Json(json!({
        "message": message,
        "type": topic,
        "country": entry.country,
        "lastUpdate": last_update(&entry),
        "articlesCount": entry.article_count(),
    })))
}

pub async fn scheduled(State(state): State<AppState>) -> impl IntoResponse {
    info!("external scheduled refresh triggered");
    state.refresher.refresh_all().await;
    let cache = cache_status(state.refresher.cache()).await;

    Json(json!({
        "message": "Scheduled refresh completed",
        "cache": cache,
    }))
}
