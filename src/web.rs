// 🌐 Web Host - axum routes over the pure renderer
// Every interaction mutates the session's ViewState, then the whole page is rendered again.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use uuid::Uuid;

use crate::contact::ContactSubmission;
use crate::content::Portfolio;
use crate::nav::NavSelection;
use crate::render::render_now;
use crate::session::{SessionStore, ViewState};
use crate::templates::ErrorTemplate;
use crate::theme::{BASE_STYLESHEET, STYLESHEET_HREF};

pub const SESSION_COOKIE: &str = "portfolio_session";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<Portfolio>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(content: Portfolio) -> Self {
        AppState {
            content: Arc::new(content),
            sessions: SessionStore::new(),
        }
    }
}

/// API Response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    #[serde(default)]
    return_to: Option<String>,
}

// ============================================================================
// Session plumbing
// ============================================================================

fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
}

fn with_session_cookie(mut response: Response, id: Uuid, created: bool) -> Response {
    if created {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

/// Only follow redirects back into our own pages
fn safe_return_path(raw: Option<&str>) -> String {
    match raw {
        Some(path) if path == "/" => path.to_string(),
        Some(path) if path.starts_with("/page/") => {
            NavSelection::from_slug(&path["/page/".len()..]).href()
        }
        _ => "/".to_string(),
    }
}

fn render_response(state: &AppState, view: &ViewState) -> Response {
    match render_now(view, &state.content) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Error rendering {} page: {:#}", view.nav.slug(), e);
            let msg = "The page could not be rendered.";
            let template = ErrorTemplate {
                title: "Error",
                message: msg,
            };
            let body = template.render().unwrap_or_else(|_| msg.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
        }
    }
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET / - Render the session's current page. Read-only: never allocates a session.
async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let view = state.sessions.peek(session_cookie(&headers));
    render_response(&state, &view)
}

/// GET /page/:slug - Select a destination and render it
async fn page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    let (id, created) = state.sessions.get_or_create(session_cookie(&headers));
    let nav = NavSelection::from_slug(&slug);
    let view = state.sessions.update(id, |view| view.select(nav));
    info!(session = %id, page = nav.slug(), "navigated");
    with_session_cookie(render_response(&state, &view), id, created)
}

/// POST /theme - Flip dark/light, then go back where we were
async fn toggle_theme(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ThemeForm>,
) -> Response {
    let (id, created) = state.sessions.get_or_create(session_cookie(&headers));
    let view = state.sessions.update(id, |view| view.toggle_theme());
    info!(session = %id, theme = view.theme.as_str(), "theme toggled");

    let target = safe_return_path(form.return_to.as_deref());
    with_session_cookie(Redirect::to(&target).into_response(), id, created)
}

/// POST /contact - Validate the form and render the outcome
async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(submission): Form<ContactSubmission>,
) -> Response {
    let (id, created) = state.sessions.get_or_create(session_cookie(&headers));
    let recipient = state.content.profile.contact_email.clone();
    let view = state
        .sessions
        .update(id, |view| view.submit_contact(submission, &recipient));

    match view.contact.mailto() {
        Some(_) => info!(session = %id, "contact link issued"),
        None => info!(session = %id, "contact form rejected"),
    }

    with_session_cookie(render_response(&state, &view), id, created)
}

/// GET /static/portfolio.css - Base stylesheet
async fn serve_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        BASE_STYLESHEET,
    )
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/content - The compiled-in datasets
async fn api_content(State(state): State<AppState>) -> Response {
    Json(ApiResponse::ok(state.content.as_ref())).into_response()
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/content", get(api_content));

    Router::new()
        .route("/", get(index))
        .route("/page/:slug", get(page))
        .route("/theme", post(toggle_theme))
        .route("/contact", post(submit_contact))
        .route(STYLESHEET_HREF, get(serve_css))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    fn app() -> (AppState, Router) {
        let state = AppState::new(Portfolio::default());
        (state.clone(), create_router(state))
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn cookie_of(response: &Response) -> String {
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn form_post(uri: &str, cookie: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::COOKIE, cookie)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_with(uri: &str, cookie: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_home_without_session() {
        let (state, router) = app();
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let html = body_text(response).await;
        assert!(html.contains("data-page=\"home\""));
        assert!(state.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_cookieless_reads_do_not_grow_sessions() {
        let (state, router) = app();
        for i in 0..1000 {
            let request = if i % 2 == 0 {
                Request::builder().uri("/").body(Body::empty()).unwrap()
            } else {
                get_with("/", "portfolio_session=not-a-uuid")
            };
            let response = router.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
        assert!(state.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_interactions_stay_within_capacity() {
        let state = AppState {
            content: Arc::new(Portfolio::default()),
            sessions: SessionStore::with_capacity(8),
        };
        let router = create_router(state.clone());

        for _ in 0..100 {
            let response = router
                .clone()
                .oneshot(Request::builder().uri("/page/skills").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert!(cookie_of(&response).starts_with("portfolio_session="));
        }
        assert_eq!(state.sessions.len(), 8);
    }

    #[tokio::test]
    async fn test_known_cookie_reuses_session() {
        let (state, router) = app();
        let id = state.sessions.create();
        let cookie = format!("other=1; {}={}", SESSION_COOKIE, id);

        let response = router.oneshot(get_with("/page/skills", &cookie)).await.unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(state.sessions.state(id).nav, NavSelection::Skills);
        assert_eq!(state.sessions.len(), 1);
    }

    #[tokio::test]
    async fn test_navigation_persists_across_requests() {
        let (state, router) = app();
        let id = state.sessions.create();
        let cookie = format!("{}={}", SESSION_COOKIE, id);

        let response = router.clone().oneshot(get_with("/page/awards", &cookie)).await.unwrap();
        assert!(body_text(response).await.contains("data-page=\"awards\""));

        let response = router.oneshot(get_with("/", &cookie)).await.unwrap();
        assert!(body_text(response).await.contains("data-page=\"awards\""));
    }

    #[tokio::test]
    async fn test_unknown_slug_lands_on_contact() {
        let (_, router) = app();
        let response = router
            .oneshot(Request::builder().uri("/page/blog").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(body_text(response).await.contains("data-page=\"contact\""));
    }

    #[tokio::test]
    async fn test_theme_toggle_redirects_back() {
        let (state, router) = app();
        let id = state.sessions.create();
        let cookie = format!("{}={}", SESSION_COOKIE, id);

        let response = router
            .clone()
            .oneshot(form_post("/theme", &cookie, "return_to=%2Fpage%2Fprojects"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/page/projects");
        assert_eq!(state.sessions.state(id).theme.as_str(), "light");

        let response = router
            .oneshot(form_post("/theme", &cookie, "return_to=https%3A%2F%2Fevil.example"))
            .await
            .unwrap();
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(state.sessions.state(id).theme.as_str(), "dark");
    }

    #[tokio::test]
    async fn test_contact_submit_success_and_error() {
        let (state, router) = app();
        let id = state.sessions.create();
        let cookie = format!("{}={}", SESSION_COOKIE, id);

        let response = router
            .clone()
            .oneshot(form_post(
                "/contact",
                &cookie,
                "name=Ada&email=ada%40example.com&message=Hello+world",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("class=\"mailto-link\""));
        assert!(html.contains("Hello%20world"));

        let response = router
            .oneshot(form_post("/contact", &cookie, "name=&email=x%40y.com&message=hi"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(!html.contains("class=\"mailto-link\""));
        assert!(html.contains("missing: name"));
        assert!(state.sessions.state(id).contact.mailto().is_none());
    }

    #[tokio::test]
    async fn test_api_endpoints() {
        let (_, router) = app();

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");

        let response = router
            .oneshot(Request::builder().uri("/api/content").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["data"]["projects"].as_array().unwrap().len(), 4);
        assert_eq!(json["data"]["skills"][0]["category"], "AI/ML");
    }

    #[tokio::test]
    async fn test_stylesheet_served() {
        let (_, router) = app();
        let response = router
            .oneshot(Request::builder().uri("/static/portfolio.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");
        assert!(body_text(response).await.contains(".badge"));
    }

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(None), "/");
        assert_eq!(safe_return_path(Some("/")), "/");
        assert_eq!(safe_return_path(Some("/page/skills")), "/page/skills");
        assert_eq!(safe_return_path(Some("//evil.example")), "/");
        assert_eq!(safe_return_path(Some("/page/<x>")), "/page/contact");
    }
}
