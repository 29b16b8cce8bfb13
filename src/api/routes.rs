//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::domain::{Event, EventId, Summary};
use crate::error::AppError;
use crate::event_store::SharedEventRepository;
use crate::handlers::{CreateEventCommand, EventHandler, UpdateEventCommand};

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<SharedEventRepository> {
    Router::new()
        .route("/events", post(create_event).get(list_events))
        .route(
            "/events/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events/:id/summary", get(get_event_summary))
}

/// Turn extractor rejections into our error body
fn event_id(path: Result<Path<EventId>, PathRejection>) -> Result<EventId, AppError> {
    path.map(|Path(id)| id)
        .map_err(|e| AppError::InvalidRequest(format!("Invalid event ID: {}", e.body_text())))
}

fn event_body(body: Result<Json<Event>, JsonRejection>) -> Result<Event, AppError> {
    body.map(|Json(event)| event)
        .map_err(|e| AppError::InvalidRequest(format!("Invalid request body: {}", e.body_text())))
}

// =========================================================================
// POST /events
// =========================================================================

/// Create a new event
async fn create_event(
    State(repository): State<SharedEventRepository>,
    body: Result<Json<Event>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let event = event_body(body)?;
    let handler = EventHandler::new(repository);

    let created = handler.create(CreateEventCommand::new(event))?;

    Ok((StatusCode::CREATED, Json(created)))
}

// =========================================================================
// GET /events
// =========================================================================

/// List all events
async fn list_events(
    State(repository): State<SharedEventRepository>,
) -> Result<Json<Vec<Event>>, AppError> {
    let handler = EventHandler::new(repository);
    Ok(Json(handler.list()?))
}

// =========================================================================
// GET /events/:id
// =========================================================================

/// Get event by ID
async fn get_event(
    State(repository): State<SharedEventRepository>,
    path: Result<Path<EventId>, PathRejection>,
) -> Result<Json<Event>, AppError> {
    let id = event_id(path)?;
    let handler = EventHandler::new(repository);
    Ok(Json(handler.get(id)?))
}

// =========================================================================
// PUT /events/:id
// =========================================================================

/// Replace an event
async fn update_event(
    State(repository): State<SharedEventRepository>,
    path: Result<Path<EventId>, PathRejection>,
    body: Result<Json<Event>, JsonRejection>,
) -> Result<Json<Event>, AppError> {
    let id = event_id(path)?;
    let handler = EventHandler::new(repository);

    // Unknown ids are reported before body problems
    handler.get(id)?;
    let event = event_body(body)?;

    let updated = handler.update(UpdateEventCommand::new(id, event))?;

    Ok(Json(updated))
}

// =========================================================================
// DELETE /events/:id
// =========================================================================

/// Delete an event
async fn delete_event(
    State(repository): State<SharedEventRepository>,
    path: Result<Path<EventId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = event_id(path)?;
    let handler = EventHandler::new(repository);

    handler.delete(id)?;

    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
// GET /events/:id/summary
// =========================================================================

/// Compute balances and settlements for an event
async fn get_event_summary(
    State(repository): State<SharedEventRepository>,
    path: Result<Path<EventId>, PathRejection>,
) -> Result<Json<Summary>, AppError> {
    let id = event_id(path)?;
    let handler = EventHandler::new(repository);
    Ok(Json(handler.summary(id)?))
}
