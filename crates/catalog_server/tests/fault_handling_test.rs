//! Store faults surface as a generic 500 problem response.

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use catalog_core::{Content, ContentId, ContentInput};
use catalog_error::{CatalogResult, StoreError, StoreErrorKind};
use catalog_interface::ContentRepository;
use catalog_server::{
    ApiState, ContentOutcome, ContentService, INTERNAL_ERROR_TITLE, ProblemDetails, create_router,
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

/// Reads succeed with a fixed record; every write faults.
struct ReadOnlyRepository {
    content: Content,
}

#[async_trait]
impl ContentRepository for ReadOnlyRepository {
    async fn get_content(&self, id: ContentId) -> CatalogResult<Option<Content>> {
        Ok((id == self.content.id).then(|| self.content.clone()))
    }

    async fn get_many_contents(&self) -> CatalogResult<Vec<Content>> {
        Ok(vec![self.content.clone()])
    }

    async fn create_content(&self, _input: ContentInput) -> CatalogResult<Option<Content>> {
        Ok(None)
    }

    async fn update_content(
        &self,
        _id: ContentId,
        _input: ContentInput,
    ) -> CatalogResult<Option<Content>> {
        Err(StoreError::new(StoreErrorKind::Unavailable("read-only".to_string())))?
    }

    async fn delete_content(&self, _id: ContentId) -> CatalogResult<ContentId> {
        Err(StoreError::new(StoreErrorKind::Unavailable("read-only".to_string())))?
    }
}

fn fixture() -> (Content, ContentService) {
    let content = Content::from_input(
        ContentId::generate(),
        ContentInput {
            genre_list: vec!["Drama".to_string()],
            ..ContentInput::titled("Movie A")
        },
    );
    let service = ContentService::new(Arc::new(ReadOnlyRepository {
        content: content.clone(),
    }));
    (content, service)
}

async fn send(app: Router, method: Method, uri: &str, body: serde_json::Value) -> (StatusCode, Option<String>, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, bytes.to_vec())
}

fn assert_problem(status: StatusCode, content_type: Option<String>, body: &[u8]) {
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));
    let problem: ProblemDetails = serde_json::from_slice(body).unwrap();
    assert_eq!(problem.status, 500);
    assert_eq!(problem.title, INTERNAL_ERROR_TITLE);
}

#[tokio::test]
async fn add_genres_fault_is_trapped() {
    let (content, service) = fixture();
    let outcome = service
        .add_genres(content.id, vec!["Comedy".to_string()])
        .await;
    assert_eq!(outcome, ContentOutcome::Failed);
}

#[tokio::test]
async fn remove_genres_fault_is_trapped() {
    let (content, service) = fixture();
    let outcome = service
        .remove_genres(content.id, vec!["Drama".to_string()])
        .await;
    assert_eq!(outcome, ContentOutcome::Failed);
}

#[tokio::test]
async fn genre_routes_answer_500_on_fault() {
    let (content, service) = fixture();
    let app = create_router(ApiState::new(service));
    let uri = format!("/content/{}/genre", content.id);

    let (status, content_type, body) =
        send(app.clone(), Method::POST, &uri, json!(["Comedy"])).await;
    assert_problem(status, content_type, &body);

    let (status, content_type, body) = send(app, Method::DELETE, &uri, json!(["Drama"])).await;
    assert_problem(status, content_type, &body);
}

#[tokio::test]
async fn genre_routes_still_report_missing_content() {
    let (_, service) = fixture();
    let app = create_router(ApiState::new(service));
    let uri = format!("/content/{}/genre", ContentId::generate());

    let (status, _, body) = send(app, Method::POST, &uri, json!(["Comedy"])).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn create_without_record_answers_500() {
    let (_, service) = fixture();
    let app = create_router(ApiState::new(service));
    let (status, content_type, body) =
        send(app, Method::POST, "/content", json!({"title": "Movie B"})).await;
    assert_problem(status, content_type, &body);
}

#[tokio::test]
async fn update_and_delete_faults_answer_500() {
    let (content, service) = fixture();
    let app = create_router(ApiState::new(service));
    let uri = format!("/content/{}", content.id);

    let (status, content_type, body) =
        send(app.clone(), Method::PATCH, &uri, json!({"title": "Movie B"})).await;
    assert_problem(status, content_type, &body);

    let (status, content_type, body) = send(app, Method::DELETE, &uri, json!(null)).await;
    assert_problem(status, content_type, &body);
}

/// Every operation faults, reads included.
struct UnavailableRepository;

fn unavailable<T>() -> CatalogResult<T> {
    Err(StoreError::new(StoreErrorKind::Unavailable("connection refused".to_string())))?
}

#[async_trait]
impl ContentRepository for UnavailableRepository {
    async fn get_content(&self, _id: ContentId) -> CatalogResult<Option<Content>> {
        unavailable()
    }

    async fn get_many_contents(&self) -> CatalogResult<Vec<Content>> {
        unavailable()
    }

    async fn create_content(&self, _input: ContentInput) -> CatalogResult<Option<Content>> {
        unavailable()
    }

    async fn update_content(
        &self,
        _id: ContentId,
        _input: ContentInput,
    ) -> CatalogResult<Option<Content>> {
        unavailable()
    }

    async fn delete_content(&self, _id: ContentId) -> CatalogResult<ContentId> {
        unavailable()
    }
}

fn unavailable_app() -> Router {
    create_router(ApiState::new(ContentService::new(Arc::new(UnavailableRepository))))
}

#[tokio::test]
async fn list_fault_answers_500() {
    let (status, content_type, body) =
        send(unavailable_app(), Method::GET, "/content", json!(null)).await;
    assert_problem(status, content_type, &body);
}

#[tokio::test]
async fn get_fault_answers_500() {
    let uri = format!("/content/{}", ContentId::generate());
    let (status, content_type, body) = send(unavailable_app(), Method::GET, &uri, json!(null)).await;
    assert_problem(status, content_type, &body);
}

#[tokio::test]
async fn genre_fetch_fault_answers_500() {
    let uri = format!("/content/{}/genre", ContentId::generate());

    let (status, content_type, body) =
        send(unavailable_app(), Method::POST, &uri, json!(["Comedy"])).await;
    assert_problem(status, content_type, &body);

    let (status, content_type, body) =
        send(unavailable_app(), Method::DELETE, &uri, json!(["Drama"])).await;
    assert_problem(status, content_type, &body);
}

#[tokio::test]
async fn genre_fetch_fault_is_trapped_by_service() {
    let service = ContentService::new(Arc::new(UnavailableRepository));
    let outcome = service
        .add_genres(ContentId::generate(), vec!["Comedy".to_string()])
        .await;
    assert_eq!(outcome, ContentOutcome::Failed);
}
