use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;
use uuid::Uuid;

use crate::modules::products_api::core::product::{ProductPayload, ProductResponse};
use crate::modules::products_api::use_cases::manage_products::handler::ApplicationError;
use crate::shared::core::error_body::ErrorBody;
use crate::shell::state::AppState;

pub const DELETED_MESSAGE: &str = "Product deleted successfully";

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Rule(violation) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new(violation.to_string())),
            )
                .into_response(),
            error @ ApplicationError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody::new(error.to_string())),
            )
                .into_response(),
            ApplicationError::Repository(error) => {
                warn!(%error, "product repository failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, ApplicationError> {
    Uuid::parse_str(raw).map_err(|_| ApplicationError::NotFound)
}

pub async fn list(State(state): State<AppState>) -> Response {
    match state.products.list().await {
        Ok(records) => {
            let body: Vec<ProductResponse> = records.iter().map(ProductResponse::from).collect();
            Json(body).into_response()
        }
        Err(error) => error.into_response(),
    }
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = match parse_id(&id) {
        Ok(id) => state.products.get(id).await,
        Err(error) => Err(error),
    };
    match result {
        Ok(record) => Json(ProductResponse::from(&record)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.products.create(&payload).await {
        Ok(record) => (StatusCode::CREATED, Json(ProductResponse::from(&record))).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let result = match parse_id(&id) {
        Ok(id) => state.products.update(id, &payload).await,
        Err(error) => Err(error),
    };
    match result {
        Ok(record) => Json(ProductResponse::from(&record)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = match parse_id(&id) {
        Ok(id) => state.products.delete(id).await,
        Err(error) => Err(error),
    };
    match result {
        Ok(()) => (StatusCode::OK, DELETED_MESSAGE).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod manage_products_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::products_api::adapters::outbound::repository_in_memory::InMemoryProductRepository;
    use crate::modules::products_api::use_cases::manage_products::handler::ProductsHandler;
    use crate::shell::state::AppState;

    use super::{create, delete, get as get_one, list, update};

    const LAPTOP: &str = r#"{"name":"Laptop Gamer","price":999.99,"sku":"PROD-001"}"#;

    fn make_test_state() -> AppState {
        AppState {
            products: Arc::new(ProductsHandler::new(Arc::new(
                InMemoryProductRepository::new(),
            ))),
        }
    }

    fn make_offline_state() -> AppState {
        let mut repository = InMemoryProductRepository::new();
        repository.toggle_offline();
        AppState {
            products: Arc::new(ProductsHandler::new(Arc::new(repository))),
        }
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/products", get(list).post(create))
            .route("/products/{id}", get(get_one).put(update).delete(delete))
            .with_state(state)
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create_laptop(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/products", LAPTOP))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_created_product() {
        let response = app(make_test_state())
            .oneshot(json_request("POST", "/products", LAPTOP))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert!(json.get("id").is_some());
        assert_eq!(json["name"], "Laptop Gamer");
        assert_eq!(json["sku"], "PROD-001");
        assert_eq!(json["missingLetter"], "b");
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_create_body_carries_an_id() {
        let body = r#"{"id":"0190a1b2-0000-7000-8000-000000000001","name":"Mouse","price":1,"sku":"M"}"#;
        let response = app(make_test_state())
            .oneshot(json_request("POST", "/products", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_400_with_the_rule_message() {
        let body = r#"{"name":"Mouse","price":0,"sku":"M"}"#;
        let response = app(make_test_state())
            .oneshot(json_request("POST", "/products", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Price must be bigger than zero" })
        );
    }

    #[tokio::test]
    async fn it_should_return_400_on_a_duplicate_sku() {
        let app = app(make_test_state());
        create_laptop(&app).await;

        let response = app
            .oneshot(json_request("POST", "/products", LAPTOP))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "SKU already registered" })
        );
    }

    #[tokio::test]
    async fn it_should_list_every_product() {
        let app = app(make_test_state());
        let id = create_laptop(&app).await;

        let response = app
            .oneshot(Request::get("/products").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().map(Vec::len), Some(1));
        assert_eq!(json[0]["id"], id.as_str());
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_updated_product() {
        let app = app(make_test_state());
        let id = create_laptop(&app).await;
        let body = r#"{"name":"Laptop Pro","price":1500,"sku":"PROD-001"}"#;

        let response = app
            .oneshot(json_request("PUT", &format!("/products/{id}"), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["id"], id.as_str());
        assert_eq!(json["name"], "Laptop Pro");
        assert_eq!(json["price"], 1500.0);
    }

    #[tokio::test]
    async fn it_should_return_404_when_updating_an_unknown_product() {
        let response = app(make_test_state())
            .oneshot(json_request(
                "PUT",
                "/products/0190a1b2-0000-7000-8000-000000000099",
                LAPTOP,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Product not found" })
        );
    }

    #[tokio::test]
    async fn it_should_delete_a_product_once() {
        let app = app(make_test_state());
        let id = create_laptop(&app).await;
        let uri = format!("/products/{id}");

        let response = app
            .clone()
            .oneshot(Request::delete(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Product deleted successfully");

        let again = app
            .oneshot(Request::delete(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_404_for_a_malformed_id() {
        let response = app(make_test_state())
            .oneshot(Request::get("/products/not-a-uuid").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app(make_test_state())
            .oneshot(json_request("POST", "/products", "not-json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_repository_is_offline() {
        let response = app(make_offline_state())
            .oneshot(json_request("POST", "/products", LAPTOP))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
