use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use http::StatusCode;
use http::header::CONTENT_TYPE;
use http_body_util::BodyExt;

use routeparam::config::{BodyFormat, ExtractorConfig, RejectionStatus};
use routeparam::middleware::{IntParamGuard, Pipeline, Processing};
use routeparam::request::RoutedRequest;
use routeparam::request::path::{IntParamExtractor, get_int_param};
use routeparam::response::{Response, ResponseSink};
use routeparam::router::Router;

// Reject the request unless `test_id` is an integer, otherwise write a `200 OK`.
fn mock_param(request: &RoutedRequest<'_, '_>, sink: &mut ResponseSink) -> Processing {
    if get_int_param("test_id", sink, request).is_err() {
        return Processing::Halt;
    }
    sink.write(Response::ok()).unwrap();
    Processing::Continue
}

fn test_router() -> Router {
    let mut router = Router::new();
    router
        .route("/test/{test_id}", Pipeline::new().stage(mock_param))
        .unwrap();
    router
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[test]
fn a_valid_integer_reaches_the_handler() {
    let request = http::Request::get("/test/123").body(()).unwrap();
    let response = test_router().handle(request);
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn a_non_numeric_value_is_rejected() {
    let request = http::Request::get("/test/abc").body(()).unwrap();
    let response = test_router().handle(request);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    insta::assert_snapshot!(body_text(response).await, @r"
    Invalid URL.
    `test_id` is set to `abc`, which we can't parse as an integer
    ");
}

#[tokio::test]
async fn an_out_of_range_value_is_rejected() {
    let request = http::Request::get("/test/123456789012345678901234567890")
        .body(())
        .unwrap();
    let response = test_router().handle(request);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn a_missing_parameter_is_rejected() {
    let mut router = Router::new();
    router
        .route("/test/{id}", Pipeline::new().stage(mock_param))
        .unwrap();

    let request = http::Request::get("/test/123").body(()).unwrap();
    let response = router.handle(request);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    insta::assert_snapshot!(body_text(response).await, @r"
    Invalid URL.
    The path parameter `test_id` is missing
    ");
}

#[test]
fn the_downstream_stage_never_runs_after_a_rejection() {
    let reached = Arc::new(AtomicBool::new(false));
    let downstream = {
        let reached = reached.clone();
        move |_: &RoutedRequest<'_, '_>, sink: &mut ResponseSink| {
            reached.store(true, Ordering::SeqCst);
            let _ = sink.write(Response::ok());
            Processing::Continue
        }
    };
    let mut router = Router::new();
    router
        .route(
            "/test/{test_id}",
            Pipeline::new()
                .stage(IntParamGuard::new("test_id"))
                .stage(downstream),
        )
        .unwrap();

    let request = http::Request::get("/test/abc").body(()).unwrap();
    assert_eq!(router.handle(request).status(), StatusCode::BAD_REQUEST);
    assert!(!reached.load(Ordering::SeqCst));

    let request = http::Request::get("/test/42").body(()).unwrap();
    assert_eq!(router.handle(request).status(), StatusCode::OK);
    assert!(reached.load(Ordering::SeqCst));
}

#[tokio::test]
async fn the_value_is_handed_back_to_the_caller() {
    let mut router = Router::new();
    router
        .route(
            "/test/{test_id}",
            Pipeline::new().stage(
                |request: &RoutedRequest<'_, '_>, sink: &mut ResponseSink| {
                    let Ok(test_id) = get_int_param("test_id", sink, request) else {
                        return Processing::Halt;
                    };
                    let doubled = (test_id * 2).to_string();
                    let _ = sink.write(Response::ok().set_typed_body(doubled));
                    Processing::Continue
                },
            ),
        )
        .unwrap();

    let request = http::Request::get("/test/-21").body(()).unwrap();
    let response = router.handle(request);
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "-42");
}

#[tokio::test]
async fn json_rejections() {
    let config = ExtractorConfig {
        rejection_status: RejectionStatus::try_from(422).unwrap(),
        body_format: BodyFormat::Json,
    };
    let mut router = Router::new();
    router
        .route(
            "/test/{test_id}",
            Pipeline::new().stage(IntParamGuard::with_extractor(
                "test_id",
                IntParamExtractor::new(config),
            )),
        )
        .unwrap();

    let request = http::Request::get("/test/abc").body(()).unwrap();
    let response = router.handle(request);
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["parameter"], "test_id");
    assert_eq!(
        body["error"],
        "`test_id` is set to `abc`, which we can't parse as an integer"
    );
}
