//! Blocking HTTP client for the admin REST API.
//!
//! All server interaction is plain request/response; non-2xx responses are
//! decoded into `AppError::Server` using the error envelope when the body
//! carries one.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::filename::extract_filename;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_DISPOSITION};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = concat!("reefadmin/", env!("CARGO_PKG_VERSION"));

/// Raw download returned by the export endpoints.
#[derive(Debug, Clone)]
pub struct Blob {
    pub bytes: Vec<u8>,
    /// Filename suggested by the server via Content-Disposition.
    pub filename: Option<String>,
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: cfg.api_base_url.trim_end_matches('/').to_string(),
            token: cfg.auth_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str, params: &[(String, String)]) -> AppResult<T> {
        let builder = self.http.get(self.url(path)).query(params);
        self.send_json(builder)
    }

    pub fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let builder = self.http.post(self.url(path)).json(body);
        self.send_json(builder)
    }

    /// POST without a body (approve-style endpoints).
    pub fn post_empty<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let builder = self.http.post(self.url(path));
        self.send_json(builder)
    }

    pub fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let builder = self.http.patch(self.url(path)).json(body);
        self.send_json(builder)
    }

    pub fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let builder = self.http.delete(self.url(path));
        self.send_json(builder)
    }

    /// DELETE carrying a JSON body (bulk endpoints).
    pub fn delete_with_body<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let builder = self.http.delete(self.url(path)).json(body);
        self.send_json(builder)
    }

    /// POST expecting a binary download instead of a JSON envelope.
    pub fn post_blob<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        accept: &str,
    ) -> AppResult<Blob> {
        let builder = self
            .http
            .post(self.url(path))
            .header(ACCEPT, accept)
            .json(body);

        let response = self.authorized(builder).send()?;
        let response = Self::check_status(response)?;

        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(extract_filename);

        let bytes = response.bytes()?.to_vec();
        Ok(Blob { bytes, filename })
    }

    fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let response = self.authorized(builder).send()?;
        let response = Self::check_status(response)?;
        Ok(response.json()?)
    }

    /// Turn a non-2xx response into `AppError::Server`, pulling `code` and
    /// `message` out of the error envelope when the body parses as one.
    fn check_status(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let (code, message) = decode_error_body(&body);
        Err(AppError::Server {
            status: status.as_u16(),
            code,
            message: message.unwrap_or_else(|| status.to_string()),
        })
    }
}

fn decode_error_body(body: &str) -> (Option<String>, Option<String>) {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return (None, None);
    };

    let code = value
        .get("code")
        .and_then(Value::as_str)
        .map(str::to_string);
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);
    (code, message)
}
