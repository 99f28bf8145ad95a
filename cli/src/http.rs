//! Thin `reqwest` wrapper for the booking REST API.
//!
//! Paths come from `booking::endpoints`. By default requests go through the
//! host server's `/backend` proxy so the CLI follows whichever backend is
//! active; an empty prefix talks to a backend directly.

use reqwest::header::{AUTHORIZATION, CONTENT_DISPOSITION};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use booking::ApiError;
use booking::error::extract_server_message;

use crate::CliError;

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    api_prefix: String,
    token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: &str, api_prefix: &str, token: Option<String>) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_prefix: api_prefix.trim_end_matches('/').to_owned(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// Host server URL, outside the API prefix.
    pub fn host_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{path}", self.base_url, self.api_prefix)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.api_url(path));
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    pub async fn get_host(&self, path: &str) -> Result<String, CliError> {
        let response = self.http.get(self.host_url(path)).send().await?;
        Ok(checked(response).await?.text().await?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let response = self.request(Method::GET, path).send().await?;
        decode(checked(response).await?).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, CliError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        decode(checked(response).await?).await
    }

    /// POST whose reply is a confirmation message rather than a record.
    pub async fn post_for_message<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<String, CliError> {
        let mut builder = self.request(Method::POST, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        message(checked(response).await?).await
    }

    /// Bodiless POST that answers with a record.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let response = self.request(Method::POST, path).send().await?;
        decode(checked(response).await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<String, CliError> {
        let response = self.request(Method::DELETE, path).send().await?;
        message(checked(response).await?).await
    }

    /// Multipart upload under the `file` field.
    pub async fn upload(&self, path: &str, file_name: String, bytes: Vec<u8>) -> Result<String, CliError> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let response = self.request(Method::POST, path).multipart(form).send().await?;
        message(checked(response).await?).await
    }

    /// Raw body plus the server's `Content-Disposition`, for downloads.
    pub async fn download(&self, path: &str) -> Result<(Vec<u8>, Option<String>), CliError> {
        let response = checked(self.request(Method::GET, path).send().await?).await?;
        let disposition =
            response.headers().get(CONTENT_DISPOSITION).and_then(|v| v.to_str().ok()).map(str::to_owned);
        Ok((response.bytes().await?.to_vec(), disposition))
    }
}

/// Turn a non-success status into the shared `ApiError` classification.
async fn checked(response: Response) -> Result<Response, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), &body).into())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CliError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()).into())
}

async fn message(response: Response) -> Result<String, CliError> {
    let body = response.text().await?;
    Ok(extract_server_message(&body).unwrap_or_else(|| "OK".to_owned()))
}
