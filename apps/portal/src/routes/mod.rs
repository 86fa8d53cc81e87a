pub mod health;
pub mod portal;

use axum::{
    extract::{Path, State},
    routing::{get, MethodRouter},
    Router,
};

use crate::records::RecordCategory;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router: Router<AppState> = Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/",
            get(portal::handle_show_form).post(portal::handle_lookup),
        );

    RecordCategory::ALL
        .into_iter()
        .fold(router, |router, category| {
            router.route(
                &format!("/{}/:person_id", category.slug()),
                record_route(category),
            )
        })
        .with_state(state)
}

fn record_route(category: RecordCategory) -> MethodRouter<AppState> {
    get(
        move |State(state): State<AppState>, Path(person_id): Path<String>| async move {
            portal::handle_record(state, category, person_id).await
        },
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::hr_client::stub::StubHrApi;
    use crate::hr_client::Endpoints;
    use crate::views::Views;

    const BASE: &str = "http://hr.test/odata/v2";

    fn app(hr: Arc<StubHrApi>) -> Router {
        build_router(AppState {
            hr,
            endpoints: Arc::new(Endpoints::from_base(BASE)),
            views: Arc::new(Views::new().unwrap()),
        })
    }

    fn post_mobile(mobile: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(format!("mobile={mobile}")))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let resp = app(Arc::new(StubHrApi::respond(200, json!({}))))
            .oneshot(get_request("/health"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_get_root_shows_form() {
        let hr = Arc::new(StubHrApi::respond(200, json!({})));
        let resp = app(hr.clone()).oneshot(get_request("/")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("Employee Self Service"));
        assert!(!body.contains("color:red"));
        assert!(hr.calls().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_found_shows_menu() {
        let hr = Arc::new(StubHrApi::respond(
            200,
            json!({"d": {"results": [{"personIdExternal": "12345"}]}}),
        ));

        let resp = app(hr.clone()).oneshot(post_mobile("9876543210")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("Welcome 12345"));
        assert!(body.contains("/personal/12345"));
        assert!(body.contains("/job/12345"));
        assert!(body.contains("/comp/12345"));
        assert_eq!(
            hr.calls()[0].1,
            "phoneNumber eq '9876543210' and phoneType eq '10605'"
        );
    }

    #[tokio::test]
    async fn test_lookup_not_found_reshows_form() {
        let hr = Arc::new(StubHrApi::respond(200, json!({"d": {"results": []}})));

        let resp = app(hr).oneshot(post_mobile("0000000000")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("Phone number cannot be found. Contact your HR."));
        assert!(body.contains("name='mobile'"));
        assert!(!body.contains("Welcome"));
    }

    #[tokio::test]
    async fn test_lookup_upstream_error_reshows_form() {
        let hr = Arc::new(StubHrApi::respond(500, json!({})));

        let resp = app(hr).oneshot(post_mobile("123")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("API connection failed."));
        assert!(body.contains("name='mobile'"));
        assert!(!body.contains("Welcome"));
    }

    #[tokio::test]
    async fn test_lookup_form_value_is_url_decoded() {
        let hr = Arc::new(StubHrApi::respond(200, json!({"d": {"results": []}})));

        app(hr.clone())
            .oneshot(post_mobile("%2B49%20170"))
            .await
            .unwrap();

        assert_eq!(
            hr.calls()[0].1,
            "phoneNumber eq '+49 170' and phoneType eq '10605'"
        );
    }

    #[tokio::test]
    async fn test_lookup_without_mobile_is_rejected() {
        let hr = Arc::new(StubHrApi::respond(200, json!({})));
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("phone=1"))
            .unwrap();

        let resp = app(hr.clone()).oneshot(req).await.unwrap();

        assert!(resp.status().is_client_error());
        assert!(hr.calls().is_empty());
    }

    #[tokio::test]
    async fn test_personal_record_renders_payload() {
        let hr = Arc::new(StubHrApi::respond(200, json!({"mock": "data"})));

        let resp = app(hr.clone()).oneshot(get_request("/personal/12345")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("mock"));
        assert!(body.contains("Personal Information"));
        assert_eq!(
            hr.calls(),
            vec![(
                format!("{BASE}/PerPersonal"),
                "personIdExternal eq '12345'".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_job_record_failure_message() {
        let hr = Arc::new(StubHrApi::respond_raw(503, "unavailable"));

        let resp = app(hr.clone()).oneshot(get_request("/job/12345")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("Failed to fetch job information."));
        assert!(body.contains("Back to Home"));
        assert_eq!(hr.calls()[0].0, format!("{BASE}/EmpJob"));
    }

    #[tokio::test]
    async fn test_comp_route_hits_compensation_endpoint() {
        let hr = Arc::new(StubHrApi::respond(200, json!({"d": {"results": []}})));

        let resp = app(hr.clone()).oneshot(get_request("/comp/777")).await.unwrap();

        assert!(body_text(resp).await.contains("Compensation Information"));
        assert_eq!(
            hr.calls(),
            vec![(
                format!("{BASE}/Compensation"),
                "personIdExternal eq '777'".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_repeated_record_fetch_renders_identically() {
        let hr = Arc::new(StubHrApi::respond(200, json!({"jobTitle": "Engineer", "grade": 7})));
        let router = app(hr);

        let first = body_text(router.clone().oneshot(get_request("/job/1")).await.unwrap()).await;
        let second = body_text(router.oneshot(get_request("/job/1")).await.unwrap()).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_category_is_not_routed() {
        let hr = Arc::new(StubHrApi::respond(200, json!({})));

        for uri in ["/salary/12345", "/personal", "/PerPhone/12345"] {
            let resp = app(hr.clone()).oneshot(get_request(uri)).await.unwrap();
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }
        assert!(hr.calls().is_empty());
    }
}
