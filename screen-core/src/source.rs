use crate::{FetchError, WeatherQuery, WeatherResponse};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Seam between the screen controller and whatever produces weather data.
///
/// Production code uses [`openweather::OpenWeatherClient`]; controller tests
/// drive the screen through fakes.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherResponse, FetchError>;
}
