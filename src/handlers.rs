use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::{
    calculator::Arithmetic,
    config::BuildSettings,
    error::Error,
    info::{HostSnapshot, InfoPage},
    views::{self, IndexView, MessageView},
};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<BuildSettings>,
    pub calculator: Arc<dyn Arithmetic>,
    /// Source of the per-request host snapshot.
    pub host: fn() -> HostSnapshot,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/Home", get(index))
        .route("/Home/Index", get(index))
        .route("/Home/About", get(about))
        .route("/Home/Contact", get(contact))
        .route("/api/info", get(info))
        .route("/api/calculator/add", get(add))
        .route("/api/calculator/multiply", get(multiply))
        .route("/api/calculator/square", get(square))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn assemble(state: &AppState) -> Result<InfoPage, Error> {
    InfoPage::assemble(&state.settings, &(state.host)())
}

async fn index(State(state): State<AppState>) -> Result<Response, Error> {
    let page = assemble(&state)?;
    views::render(&IndexView::from(page))
}

async fn about() -> Result<Response, Error> {
    views::render(&MessageView::about())
}

async fn contact() -> Result<Response, Error> {
    views::render(&MessageView::contact())
}

async fn info(State(state): State<AppState>) -> Result<Json<InfoPage>, Error> {
    assemble(&state).map(Json)
}

#[derive(Debug, Deserialize)]
struct Operands {
    a: i32,
    b: i32,
}

#[derive(Debug, Deserialize)]
struct Operand {
    a: i32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculationResult {
    pub result: i32,
}

async fn add(
    State(state): State<AppState>,
    Query(Operands { a, b }): Query<Operands>,
) -> Json<CalculationResult> {
    Json(CalculationResult {
        result: state.calculator.add(a, b),
    })
}

async fn multiply(
    State(state): State<AppState>,
    Query(Operands { a, b }): Query<Operands>,
) -> Json<CalculationResult> {
    Json(CalculationResult {
        result: state.calculator.multiply(a, b),
    })
}

async fn square(
    State(state): State<AppState>,
    Query(Operand { a }): Query<Operand>,
) -> Json<CalculationResult> {
    Json(CalculationResult {
        result: state.calculator.square(a),
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt as _;

    use super::*;
    use crate::calculator::Calculator;

    fn fixed_host() -> HostSnapshot {
        HostSnapshot {
            hostname: "test-host".to_owned(),
            vars: vec![
                ("ZETA".to_owned(), "last".to_owned()),
                ("ALPHA".to_owned(), "first".to_owned()),
            ],
        }
    }

    fn app(build_hash: Option<&str>) -> Router {
        router(AppState {
            settings: Arc::new(BuildSettings {
                environment: Some("Test".to_owned()),
                build_hash: build_hash.map(str::to_owned),
                ..BuildSettings::default()
            }),
            calculator: Arc::new(Calculator),
            host: fixed_host,
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn index_renders_diagnostics() {
        for uri in ["/", "/Home", "/Home/Index"] {
            let (status, body) = get(app(Some("0123456789abcdef")), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains("01234567"));
            assert!(body.contains("test-host"));
            let alpha = body.find("ALPHA = first").unwrap();
            let zeta = body.find("ZETA = last").unwrap();
            assert!(alpha < zeta);
        }
    }

    #[tokio::test]
    async fn index_without_build_hash_is_500() {
        let (status, body) = get(app(None), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("BuildHash"));
    }

    #[tokio::test]
    async fn index_with_short_build_hash_is_500() {
        let (status, body) = get(app(Some("abc")), "/Home/Index").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("3 characters"));
    }

    #[tokio::test]
    async fn static_pages_do_not_need_build_hash() {
        let (status, body) = get(app(None), "/Home/About").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Your application description page."));

        let (status, body) = get(app(None), "/Home/Contact").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Your contact page."));
    }

    #[tokio::test]
    async fn info_as_json() {
        let (status, body) = get(app(Some("0123456789abcdef")), "/api/info").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["build"]["short_build_hash"], "01234567");
        assert_eq!(json["build"]["environment"], "Test");
        assert_eq!(json["runtime"]["hostname"], "test-host");
        assert_eq!(
            json["environment_variables"],
            serde_json::json!(["ALPHA = first", "ZETA = last"])
        );
    }

    #[tokio::test]
    async fn calculator_endpoints() {
        let cases = [
            ("/api/calculator/add?a=7&b=8", 15),
            ("/api/calculator/multiply?a=7&b=8", 56),
            ("/api/calculator/square?a=7", 49),
        ];
        for (uri, expected) in cases {
            let (status, body) = get(app(None), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            let result: CalculationResult = serde_json::from_str(&body).unwrap();
            assert_eq!(result.result, expected, "{uri}");
        }
    }

    #[tokio::test]
    async fn calculator_rejects_bad_operands() {
        let (status, _) = get(app(None), "/api/calculator/add?a=7").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get(app(None), "/api/calculator/square?a=seven").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn mutation_methods_are_not_allowed() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/calculator/add?a=1&b=2")
            .body(Body::empty())
            .unwrap();
        let response = app(None).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
