//! JSON API routes
//!
//! Every response is wrapped in the `{success, data|error, ...}`
//! envelope consumed by the frontend.

use crate::catalog::{CatalogStats, Event, RegisterPayload, RegistrationStatus, ValidationError};

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::state::{ServerState, SharedCatalog};

#[derive(Serialize)]
struct EventListResponse {
    success: bool,
    data: Vec<Event>,
    count: usize,
}

#[derive(Serialize)]
struct EventResponse {
    success: bool,
    data: Event,
}

#[derive(Serialize)]
struct StatsResponse {
    success: bool,
    data: CatalogStats,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

#[derive(Serialize)]
struct RegistrationConfirmation {
    registration_id: String,
    event_title: String,
    participant_name: String,
    email: String,
    status: RegistrationStatus,
}

#[derive(Serialize)]
struct RegisterResponse {
    success: bool,
    message: String,
    data: RegistrationConfirmation,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message.to_owned(),
        }),
    )
        .into_response()
}

async fn list_events(State(catalog): State<SharedCatalog>) -> Response {
    let events = catalog.load();
    let count = events.len();
    Json(EventListResponse {
        success: true,
        data: events,
        count,
    })
    .into_response()
}

async fn get_event(
    State(catalog): State<SharedCatalog>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    // A non-numeric id is not a route we serve, same reply as the API
    // fallback.
    let Ok(Path(id)) = id else {
        return error_response(StatusCode::NOT_FOUND, "Resource not found");
    };

    match catalog.find_by_id(id) {
        Some(event) => Json(EventResponse {
            success: true,
            data: event,
        })
        .into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Event not found"),
    }
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: Option<String>,
}

async fn search_events(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    let query = query.trim();
    if query.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Search query is required");
    }

    let results = catalog.search(query);
    let count = results.len();
    Json(EventListResponse {
        success: true,
        data: results,
        count,
    })
    .into_response()
}

async fn register(
    State(catalog): State<SharedCatalog>,
    payload: Result<Json<RegisterPayload>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid request body");
    };

    let accepted = match catalog.validate_registration(&payload) {
        Ok(accepted) => accepted,
        Err(err) => {
            let status = match err {
                ValidationError::UnknownEvent(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_REQUEST,
            };
            return error_response(status, &err.to_string());
        }
    };

    // Nothing is stored: the confirmation is computed from the payload
    // and the matched event.
    let registration = accepted.registration;
    (
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "Registration successful".to_owned(),
            data: RegistrationConfirmation {
                registration_id: registration.registration_id,
                event_title: accepted.event.title,
                participant_name: registration.participant_name,
                email: registration.email,
                status: registration.status,
            },
        }),
    )
        .into_response()
}

async fn stats(State(catalog): State<SharedCatalog>) -> Response {
    Json(StatsResponse {
        success: true,
        data: catalog.stats(),
    })
    .into_response()
}

async fn api_fallback() -> Response {
    error_response(StatusCode::NOT_FOUND, "Resource not found")
}

pub fn make_api_routes(state: ServerState) -> Router {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/search", get(search_events))
        .route("/events/{id}", get(get_event))
        .route("/register", post(register))
        .route("/stats", get(stats))
        .fallback(api_fallback)
        .with_state(state)
}
