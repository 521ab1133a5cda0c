//! Origin policy applied to every request.
//!
//! Allow-listed origins get credentialed CORS headers echoing their origin. Other origins
//! are served normally without those headers; browsers enforce the rest. Every `OPTIONS`
//! request is answered with an empty `204` before routing.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::CorsSettings;

const ALLOW_HEADERS: &str = "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, \
Authorization, accept, origin, Cache-Control, X-Requested-With";
const ALLOW_METHODS: &str = "POST, OPTIONS, GET, PUT";

#[derive(Clone, Debug)]
pub struct OriginPolicy {
    allowed_origins: Arc<[String]>,
}

impl OriginPolicy {
    pub fn new(allowed_origins: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            allowed_origins: allowed_origins.into_iter().map(Into::<String>::into).collect(),
        }
    }

    /// The request's `Origin` header, if it exactly matches an allow-listed origin.
    pub fn allowed_origin<'a>(&self, headers: &'a HeaderMap) -> Option<&'a HeaderValue> {
        let origin = headers.get(header::ORIGIN)?;
        let origin_str = origin.to_str().ok()?;
        self.allowed_origins
            .iter()
            .any(|allowed| allowed == origin_str)
            .then_some(origin)
    }

    fn apply(origin: HeaderValue, headers: &mut HeaderMap) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
    }
}

impl From<&CorsSettings> for OriginPolicy {
    fn from(settings: &CorsSettings) -> Self {
        Self::new(settings.allowed_origins.iter().cloned())
    }
}

pub async fn origin_policy(
    State(policy): State<OriginPolicy>,
    req: Request,
    next: Next,
) -> Response {
    let allowed_origin = policy.allowed_origin(req.headers()).cloned();
    if allowed_origin.is_none() && req.headers().contains_key(header::ORIGIN) {
        tracing::debug!(origin = ?req.headers().get(header::ORIGIN), "Origin not allow-listed");
    }

    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    if let Some(origin) = allowed_origin {
        OriginPolicy::apply(origin, response.headers_mut());
    }

    response
}
