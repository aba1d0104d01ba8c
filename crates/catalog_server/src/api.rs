//! HTTP routes for the content catalog.

use crate::{ApiError, ContentOutcome, ContentService, ProblemDetails};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use catalog_core::{Content, ContentId, ContentInput};
use serde_json::json;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI description of the content routes.
#[derive(OpenApi)]
#[openapi(
    paths(
        list_contents,
        get_content,
        create_content,
        update_content,
        delete_content,
        add_genres,
        remove_genres
    ),
    components(schemas(Content, ContentInput, ContentId, ProblemDetails)),
    tags((name = "content", description = "Content records and their genres"))
)]
pub struct ApiDoc;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct ApiState {
    service: ContentService,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(service: ContentService) -> Self {
        Self { service }
    }
}

/// Creates the catalog API router.
///
/// | Method | Path | Operation |
/// |--------|------|-----------|
/// | GET | `/content` | list |
/// | POST | `/content` | create |
/// | GET | `/content/:id` | get |
/// | PATCH | `/content/:id` | update |
/// | DELETE | `/content/:id` | delete |
/// | POST | `/content/:id/genre` | add genres |
/// | DELETE | `/content/:id/genre` | remove genres |
///
/// The OpenAPI document is served at [`OPENAPI_PATH`] with Swagger UI under
/// `/swagger-ui`.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_PATH, ApiDoc::openapi()))
        .route("/health", get(health_check))
        .route("/content", get(list_contents).post(create_content))
        .route(
            "/content/:id",
            get(get_content).patch(update_content).delete(delete_content),
        )
        .route("/content/:id/genre", post(add_genres).delete(remove_genres))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Every content record, in store order.
#[utoipa::path(
    get,
    path = "/content",
    tag = "content",
    responses(
        (status = 200, description = "All records", body = [Content]),
        (status = 404, description = "Store is empty"),
        (status = 500, description = "Store fault", body = ProblemDetails)
    )
)]
async fn list_contents(
    State(state): State<ApiState>,
) -> Result<ContentOutcome<Vec<Content>>, ApiError> {
    Ok(state.service.list_contents().await?)
}

/// One content record.
#[utoipa::path(
    get,
    path = "/content/{id}",
    tag = "content",
    params(("id" = ContentId, Path, description = "Content id")),
    responses(
        (status = 200, description = "The record", body = Content),
        (status = 404, description = "No record with this id"),
        (status = 500, description = "Store fault", body = ProblemDetails)
    )
)]
async fn get_content(
    State(state): State<ApiState>,
    Path(id): Path<ContentId>,
) -> Result<ContentOutcome<Content>, ApiError> {
    Ok(state.service.get_content(id).await?)
}

/// Store a new record under a fresh id.
#[utoipa::path(
    post,
    path = "/content",
    tag = "content",
    request_body = ContentInput,
    responses(
        (status = 200, description = "The created record", body = Content),
        (status = 500, description = "Store fault", body = ProblemDetails)
    )
)]
async fn create_content(
    State(state): State<ApiState>,
    Json(input): Json<ContentInput>,
) -> Result<ContentOutcome<Content>, ApiError> {
    Ok(state.service.create_content(input).await?)
}

/// Full replace: fields absent from the body are cleared, not kept.
#[utoipa::path(
    patch,
    path = "/content/{id}",
    tag = "content",
    params(("id" = ContentId, Path, description = "Content id")),
    request_body = ContentInput,
    responses(
        (status = 200, description = "The updated record", body = Content),
        (status = 404, description = "No record with this id"),
        (status = 500, description = "Store fault", body = ProblemDetails)
    )
)]
async fn update_content(
    State(state): State<ApiState>,
    Path(id): Path<ContentId>,
    Json(input): Json<ContentInput>,
) -> Result<ContentOutcome<Content>, ApiError> {
    Ok(state.service.update_content(id, input).await?)
}

/// Always 200 with the requested id, existing or not.
#[utoipa::path(
    delete,
    path = "/content/{id}",
    tag = "content",
    params(("id" = ContentId, Path, description = "Content id")),
    responses(
        (status = 200, description = "The requested id", body = ContentId),
        (status = 500, description = "Store fault", body = ProblemDetails)
    )
)]
async fn delete_content(
    State(state): State<ApiState>,
    Path(id): Path<ContentId>,
) -> Result<Json<ContentId>, ApiError> {
    Ok(Json(state.service.delete_content(id).await?))
}

/// Append genres the record does not already carry.
#[utoipa::path(
    post,
    path = "/content/{id}/genre",
    tag = "content",
    params(("id" = ContentId, Path, description = "Content id")),
    request_body = [String],
    responses(
        (status = 200, description = "The updated record", body = Content),
        (status = 404, description = "No record with this id"),
        (status = 500, description = "Store fault", body = ProblemDetails)
    )
)]
async fn add_genres(
    State(state): State<ApiState>,
    Path(id): Path<ContentId>,
    Json(genres): Json<Vec<String>>,
) -> ContentOutcome<Content> {
    state.service.add_genres(id, genres).await
}

/// Drop every occurrence of the given genres.
#[utoipa::path(
    delete,
    path = "/content/{id}/genre",
    tag = "content",
    params(("id" = ContentId, Path, description = "Content id")),
    request_body = [String],
    responses(
        (status = 200, description = "The updated record", body = Content),
        (status = 404, description = "No record with this id"),
        (status = 500, description = "Store fault", body = ProblemDetails)
    )
)]
async fn remove_genres(
    State(state): State<ApiState>,
    Path(id): Path<ContentId>,
    Json(genres): Json<Vec<String>>,
) -> ContentOutcome<Content> {
    state.service.remove_genres(id, genres).await
}
