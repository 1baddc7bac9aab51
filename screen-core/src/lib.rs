//! Core library for the weather screen.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather source and the OpenWeather client
//! - The screen controller that projects a fetch outcome onto display state
//!
//! It is used by `screen-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod screen;
pub mod source;

pub use config::Config;
pub use error::FetchError;
pub use model::{DisplayState, WeatherQuery, WeatherResponse};
pub use screen::{FetchOutcome, Phase, ScreenController};
pub use source::{WeatherSource, openweather::OpenWeatherClient};
