//! HTTP client for an external astrology engine service.
//!
//! The engine exposes two JSON endpoints:
//!
//! - `POST {base_url}/subject` with the birth specification, answering with
//!   the raw subject (planets, lunar node, house cusps)
//! - `POST {base_url}/aspects` with that subject, answering with its aspects
//!   in relevance order

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::domain::chart::{BirthData, RawAspect, RawSubject};
use crate::ports::{AstrologyEngine, EngineError};

/// Astrology engine reached over HTTP.
pub struct HttpAstrologyEngine {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl HttpAstrologyEngine {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, EngineError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, EngineError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let response = Self::check_status(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| EngineError::Malformed(e.to_string()))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> EngineError {
        if e.is_timeout() {
            EngineError::Timeout(self.timeout.as_secs())
        } else {
            EngineError::Transport(e.to_string())
        }
    }

    async fn check_status(response: Response) -> Result<Response, EngineError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status.as_u16(), body))
    }

    fn status_error(status: u16, body: String) -> EngineError {
        match status {
            404 => EngineError::Location(body),
            _ => EngineError::Upstream {
                status,
                message: body,
            },
        }
    }
}

/// Wire form of a birth specification.
#[derive(Debug, Serialize)]
struct SubjectRequest<'a> {
    name: &'a str,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    city: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    nation: Option<&'a str>,
}

impl<'a> From<&'a BirthData> for SubjectRequest<'a> {
    fn from(birth: &'a BirthData) -> Self {
        Self {
            name: &birth.name,
            year: birth.year(),
            month: birth.month(),
            day: birth.day(),
            hour: birth.hour(),
            minute: birth.minute(),
            city: &birth.city,
            nation: birth.nation.as_deref(),
        }
    }
}

#[async_trait]
impl AstrologyEngine for HttpAstrologyEngine {
    async fn compute_subject(&self, birth: &BirthData) -> Result<RawSubject, EngineError> {
        tracing::debug!(name = %birth.name, city = %birth.city, "Requesting subject from engine");
        self.post("subject", &SubjectRequest::from(birth)).await
    }

    async fn relevant_aspects(&self, subject: &RawSubject) -> Result<Vec<RawAspect>, EngineError> {
        self.post("aspects", subject).await
    }
}
