use axum::{
    body::Body,
    extract::Query,
    http::{header, Response, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_derive::Deserialize;
use tokio::sync::mpsc::Sender;

use crate::errors::{Error, Result};
use crate::geometry::Size;
use crate::json_api::{
    HitRequest, HitResponse, RenderRequest, RenderResponse, JSON_API_VERSION,
};
use crate::{render_map, render_str, RenderConfig, VERSION};

// Generated SVG carries inline presentation attributes only; nothing else
// is needed from any origin.
const CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; frame-ancestors 'none'";

/// Query parameters for `/api/render`. With `format=raw` the body is a
/// bare map document and these settings apply; otherwise they come from
/// the JSON request body.
#[derive(Debug, Default, Deserialize)]
struct RequestConfig {
    #[serde(default)]
    format: ResponseFormat,
    width: Option<f64>,
    height: Option<f64>,
    zoom: Option<f64>,
    selected: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum ResponseFormat {
    #[default]
    Json,
    Raw,
}

impl From<RequestConfig> for RenderConfig {
    fn from(config: RequestConfig) -> Self {
        let default = RenderConfig::default();
        RenderConfig {
            canvas: Size::new(
                config.width.unwrap_or(default.canvas.width),
                config.height.unwrap_or(default.canvas.height),
            ),
            zoom: config.zoom.unwrap_or(default.zoom),
            selected: config.selected,
            ..default
        }
    }
}

fn respond(status: StatusCode, content_type: &str, body: impl Into<Body>) -> Response<Body> {
    (
        status,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_SECURITY_POLICY, CSP.to_string()),
        ],
        body.into(),
    )
        .into_response()
}

fn json_response<T: Serialize>(is_error: bool, response: &T) -> Response<Body> {
    match serde_json::to_string(response) {
        Ok(body) => {
            let status = if is_error {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::OK
            };
            respond(status, "application/json", body)
        }
        Err(e) => respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            "text/plain",
            format!("Error: {e}"),
        ),
    }
}

async fn render(Query(config): Query<RequestConfig>, input: String) -> impl IntoResponse {
    match config.format {
        // for JSON format the config is included in the JSON request body
        ResponseFormat::Json => render_json_handler(&input),
        ResponseFormat::Raw => render_raw_handler(&input, config),
    }
}

fn render_json_handler(input: &str) -> Response<Body> {
    let response = match serde_json::from_str::<RenderRequest>(input) {
        Ok(request) => {
            if request.version != JSON_API_VERSION {
                RenderResponse::error(format!(
                    "Unsupported API version: {} (expected {})",
                    request.version, JSON_API_VERSION
                ))
            } else {
                match render_map(&request.map, &request.config) {
                    Ok(svg) => RenderResponse::success(svg),
                    Err(e) => RenderResponse::error(e.to_string()),
                }
            }
        }
        Err(e) => RenderResponse::error(format!("Invalid JSON request: {e}")),
    };
    if let Some(err) = &response.error {
        tracing::info!("render request failed: {err}");
    }
    json_response(response.error.is_some(), &response)
}

fn render_raw_handler(input: &str, config: RequestConfig) -> Response<Body> {
    match render_str(input, &config.into()) {
        Ok(svg) => respond(StatusCode::OK, "image/svg+xml", svg),
        Err(e) => {
            tracing::info!("raw render request failed: {e}");
            respond(StatusCode::BAD_REQUEST, "text/plain", format!("Error: {e}"))
        }
    }
}

async fn hit(input: String) -> impl IntoResponse {
    hit_handler(&input)
}

fn hit_handler(input: &str) -> Response<Body> {
    let response = match serde_json::from_str::<HitRequest>(input) {
        Ok(request) if request.version != JSON_API_VERSION => HitResponse::error(format!(
            "Unsupported API version: {} (expected {})",
            request.version, JSON_API_VERSION
        )),
        Ok(request) => request.resolve(),
        Err(e) => HitResponse::error(format!("Invalid JSON request: {e}")),
    };
    match (&response.error, &response.code) {
        (Some(err), _) => tracing::info!("hit request failed: {err}"),
        (None, code) => tracing::info!("hit request: {}", code.as_deref().unwrap_or("-")),
    }
    json_response(response.error.is_some(), &response)
}

async fn version() -> impl IntoResponse {
    respond(
        StatusCode::OK,
        "application/json",
        format!(r#"{{"version":"{VERSION}","api":{JSON_API_VERSION}}}"#),
    )
}

fn app() -> Router {
    Router::new()
        .route("/api/version", get(version))
        .route("/api/render", post(render))
        .route("/api/hit", post(hit))
}

/// Serve the HTTP API on `listen_addr` (default `127.0.0.1:3003`).
///
/// If `ready` is given, a message is sent on it once the listener is
/// bound.
pub async fn start_server(listen_addr: Option<&str>, ready: Option<Sender<()>>) -> Result<()> {
    let addr = listen_addr.unwrap_or("127.0.0.1:3003");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on: http://{addr}");
    if let Some(ready) = ready {
        ready.send(()).await.map_err(Error::from_err)?;
    }
    axum::serve(listener, app()).await?;
    Ok(())
}
