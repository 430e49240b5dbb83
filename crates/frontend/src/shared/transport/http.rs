use async_trait::async_trait;
use contracts::system::auth::SESSION_COOKIE;
use contracts::system::http::{encode_form, ApiRequest, ApiResponse, FormPart, Method, RequestBody};
use reqwest::header::{CONTENT_TYPE, SET_COOKIE};
use reqwest::multipart;

use super::{Transport, TransportError};

/// Real network transport.
///
/// Keeps a cookie store so the session cookie set by login is sent with
/// every later call.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn multipart_form(parts: Vec<FormPart>) -> Result<multipart::Form, TransportError> {
    let mut form = multipart::Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let file = multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

/// Choose the `Set-Cookie` value to report: the session cookie when the
/// server sent several, otherwise the first one
fn session_set_cookie<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut first = None;
    for value in values {
        let name = value
            .split(';')
            .next()
            .and_then(|pair| pair.split_once('='))
            .map(|(name, _)| name.trim());
        if name == Some(SESSION_COOKIE) {
            return Some(value.to_string());
        }
        first.get_or_insert(value);
    }
    first.map(str::to_string)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url(&request.path);
        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(pairs) => builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encode_form(&pairs)),
            RequestBody::Multipart(parts) => builder.multipart(multipart_form(parts)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let set_cookie = session_set_cookie(
            response
                .headers()
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok()),
        );
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(ApiResponse {
            status,
            body,
            set_cookie,
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
