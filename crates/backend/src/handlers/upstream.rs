use axum::body::{Body, Bytes};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::Response;

/// Forwarded request headers
const FORWARDED_HEADERS: [header::HeaderName; 3] =
    [header::CONTENT_TYPE, header::COOKIE, header::ACCEPT];

/// Real admin API that receives bypassed requests
pub struct Upstream {
    client: reqwest::Client,
    base_url: String,
}

impl Upstream {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replay the request upstream and relay status, content type, cookies and body
    pub async fn forward(&self, parts: &Parts, body: Bytes) -> anyhow::Result<Response> {
        let path = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let url = format!("{}{}", self.base_url, path);
        let method = reqwest::Method::from_bytes(parts.method.as_str().as_bytes())?;

        let mut builder = self.client.request(method, &url).body(body.to_vec());
        for name in FORWARDED_HEADERS {
            if let Some(value) = parts.headers.get(&name).and_then(|v| v.to_str().ok()) {
                builder = builder.header(name.as_str(), value);
            }
        }

        let upstream = builder.send().await?;
        let status = StatusCode::from_u16(upstream.status().as_u16())?;
        let content_type = upstream
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let set_cookies: Vec<String> = upstream
            .headers()
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();
        let bytes = upstream.bytes().await?;

        let mut response = Response::builder().status(status);
        if let Some(content_type) = content_type {
            response = response.header(header::CONTENT_TYPE, content_type);
        }
        for set_cookie in set_cookies {
            response = response.header(header::SET_COOKIE, set_cookie);
        }
        Ok(response.body(Body::from(bytes))?)
    }
}
