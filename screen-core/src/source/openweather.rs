use async_trait::async_trait;
use reqwest::Client;

use crate::error::FetchError;
use crate::model::{WeatherQuery, WeatherResponse};

use super::WeatherSource;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Client for the OpenWeather current-weather endpoint.
///
/// Issues exactly one GET per call, with the location and API key passed as
/// query parameters. No timeout, retry, or backoff policy is applied.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
}

impl Default for OpenWeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenWeatherClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch_current(&self, query: &WeatherQuery) -> Result<WeatherResponse, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query.location.as_str()),
                ("appid", query.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = res.status();
        let body = res.text().await.map_err(FetchError::from_transport)?;

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                code: status,
                body: truncate_body(&body),
            });
        }

        if body.trim().is_empty() {
            return Err(FetchError::EmptyResponse(
                "server returned an empty body".to_string(),
            ));
        }

        serde_json::from_str(&body).map_err(|e| FetchError::EmptyResponse(e.to_string()))
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherResponse, FetchError> {
        self.fetch_current(query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Cut on a char boundary; byte 200 may fall inside a multi-byte char.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}
