//! HTTP handler functions for the safe-commute API.

use actix_web::{HttpResponse, web};
use safe_commute_server_models::{ApiError, ApiHealth, ChatRequest, ChatResponse, CrimeDataResponse};
use safe_commute_source::{fetch_manhattan_incidents, normalize};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/crime-data`
///
/// Fetches the Manhattan incident feed, normalizes it, and returns the
/// `{"data": [...]}` envelope. Query parameters are not honoured; every
/// request re-fetches upstream.
pub async fn crime_data(state: web::Data<AppState>) -> HttpResponse {
    match fetch_manhattan_incidents(&state.http, &state.config.crime).await {
        Ok(raws) => {
            let data = normalize(&raws);
            HttpResponse::Ok().json(CrimeDataResponse { data })
        }
        Err(e) => {
            log::error!("Failed to fetch crime data: {e}");
            HttpResponse::InternalServerError().json(ApiError {
                error: "Failed to fetch crime data".to_string(),
                details: Some(e.to_string()),
            })
        }
    }
}

/// `GET /api/news`
///
/// Transparent pass-through of the configured news feed with fixed
/// query parameters. The upstream JSON body is forwarded as-is.
pub async fn news(state: web::Data<AppState>) -> HttpResponse {
    let config = &state.config.news;
    let mut request = state
        .http
        .get(&config.api_url)
        .query(&[("country", "us"), ("category", "crime"), ("language", "en")]);

    if let Some(key) = &config.api_key {
        request = request.query(&[("apikey", key.as_str())]);
    }

    let result = match request.send().await {
        Ok(response) => response.json::<serde_json::Value>().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            log::error!("Failed to fetch news: {e}");
            HttpResponse::InternalServerError().json(ApiError {
                error: "Failed to fetch news".to_string(),
                details: None,
            })
        }
    }
}

/// `POST /api/chat`
///
/// Stateless keyword-matched safety assistant.
pub async fn chat(body: web::Json<ChatRequest>) -> HttpResponse {
    HttpResponse::Ok().json(ChatResponse {
        response: safe_commute_chat::respond(&body.message).to_string(),
    })
}
