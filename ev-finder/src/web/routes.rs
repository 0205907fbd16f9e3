//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{Coordinate, StationId};
use crate::finder::{FinderError, LocationState, SearchOutcome};
use crate::map::MapView;

use super::dto::*;
use super::sessions::SharedSession;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &std::path::Path) -> Router {
    Router::new()
        .route("/", get(new_session))
        .route("/health", get(health))
        .route("/s/:session", get(finder_page))
        .route("/s/:session/location", post(report_location))
        .route("/s/:session/search", post(search))
        .route("/s/:session/select/:station", post(select_station))
        .route("/s/:session/map", get(map_view))
        .route("/s/:session/directions/:station", get(directions))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn page_url(id: Uuid) -> String {
    format!("/s/{id}")
}

fn render<T: Template>(status: StatusCode, template: T) -> Result<Response, AppError> {
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok((status, Html(html)).into_response())
}

async fn lookup(state: &AppState, id: Uuid) -> Result<SharedSession, AppError> {
    state.sessions.get(&id).await.ok_or_else(|| AppError::NotFound {
        message: format!("session {id} not found or expired"),
    })
}

/// Start a fresh session and send the browser to its page.
async fn new_session(State(state): State<AppState>) -> Redirect {
    let id = state.sessions.create().await;
    info!(session = %id, live = state.sessions.entry_count(), "session created");
    Redirect::to(&page_url(id))
}

/// The finder page: tracking placeholder until located, then sidebar and map.
async fn finder_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let Some(shared) = state.sessions.get(&id).await else {
        return render(
            StatusCode::NOT_FOUND,
            ErrorTemplate {
                title: "Session expired".to_string(),
                message: "This search session no longer exists.".to_string(),
            },
        );
    };

    // Take the alert and the snapshot together so it is shown exactly once,
    // alongside the state that raised it.
    let (view, notice) = {
        let mut session = shared.lock().await;
        let notice = session.take_notice();
        (session.view(), notice)
    };

    let Some(user) = view.location.coordinate() else {
        return render(
            StatusCode::OK,
            TrackingTemplate {
                session_id: id,
                denied: view.location == LocationState::Denied,
                notice: notice.map(|n| n.message()),
            },
        );
    };

    let map = MapView::build(&state.map, &view).ok_or(FinderError::LocationUnresolved)?;
    let map_json = serde_json::to_string(&map).map_err(|e| AppError::Internal {
        message: format!("failed to serialize map: {e}"),
    })?;

    render(
        StatusCode::OK,
        FinderTemplate::from_view(id, user, &view, map_json, notice),
    )
}

/// Receive the browser's one-shot position fix or its failure.
async fn report_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(report): Json<LocationReport>,
) -> Result<Json<LocationResponse>, AppError> {
    let shared = lookup(&state, id).await?;
    let mut session = shared.lock().await;

    let applied = if let Some(reason) = report.error {
        info!(session = %id, %reason, "browser gave no position fix");
        session.deny_location()
    } else {
        let (Some(latitude), Some(longitude)) = (report.latitude, report.longitude) else {
            return Err(AppError::BadRequest {
                message: "latitude and longitude are required".to_string(),
            });
        };
        let coordinate = Coordinate::new(latitude, longitude).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;
        session.resolve_location(coordinate)
    };

    Ok(Json(LocationResponse::new(session.location(), applied)))
}

/// Run a charger search with the submitted filter.
///
/// The session is unlocked while the backend is queried, so a second
/// search can start meanwhile; whichever was started last wins.
async fn search(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let shared = lookup(&state, id).await?;

    let ticket = {
        let mut session = shared.lock().await;
        session.set_filter(form.to_filter());
        session.begin_search()?
    };

    let result = state.chargers.search(ticket.query()).await;

    let mut session = shared.lock().await;
    let outcome = session.complete_search(ticket, result);

    // Browsers go back to the page, which shows any pending alert.
    if accepts_html(&headers) {
        return Ok(Redirect::to(&page_url(id)).into_response());
    }

    let notice = match &outcome {
        SearchOutcome::Failed(notice) => {
            session.take_notice();
            Some(*notice)
        }
        _ => None,
    };
    let view = session.view();
    drop(session);

    Ok(Json(SearchResponse {
        outcome: SearchResponse::outcome_name(&outcome),
        notice,
        message: notice.map(|n| n.message()),
        has_searched: view.has_searched,
        stations: view.stations.to_vec(),
        map: MapView::build(&state.map, &view),
    })
    .into_response())
}

/// Make a station the map's fly-to target.
async fn select_station(
    State(state): State<AppState>,
    Path((id, station)): Path<(Uuid, String)>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let shared = lookup(&state, id).await?;

    let view = {
        let mut session = shared.lock().await;
        session.select_station(&StationId::new(station))?;
        session.view()
    };

    if accepts_html(&headers) {
        return Ok(Redirect::to(&page_url(id)).into_response());
    }

    let map = MapView::build(&state.map, &view).ok_or(FinderError::LocationUnresolved)?;
    Ok(Json(map).into_response())
}

/// Current map for a session.
async fn map_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MapView>, AppError> {
    let shared = lookup(&state, id).await?;
    let view = shared.lock().await.view();
    let map = MapView::build(&state.map, &view).ok_or(FinderError::LocationUnresolved)?;
    Ok(Json(map))
}

/// Redirect to the external route planner for a station.
async fn directions(
    State(state): State<AppState>,
    Path((id, station)): Path<(Uuid, String)>,
) -> Result<Redirect, AppError> {
    let shared = lookup(&state, id).await?;
    let url = shared.lock().await.directions(&StationId::new(station))?;
    Ok(Redirect::to(&url))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<FinderError> for AppError {
    fn from(e: FinderError) -> Self {
        match e {
            FinderError::LocationUnresolved => AppError::Conflict {
                message: e.to_string(),
            },
            FinderError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
