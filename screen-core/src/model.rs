use serde::Deserialize;

/// Parameters of a single weather lookup, constructed once at call time.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub location: String,
    pub api_key: String,
}

impl WeatherQuery {
    pub fn new(location: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            api_key: api_key.into(),
        }
    }
}

/// Subset of the OpenWeather current-weather payload the screen needs.
///
/// No `units` parameter is sent with the request, so the temperatures are
/// whatever the API returns by default (Kelvin); they are displayed verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub main: MainReadings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp_min: f64,
    pub temp_max: f64,
}

/// The two temperature strings shown to the user.
///
/// Starts blank and is written at most once, from the single
/// successful-response path. On any failure it keeps its initial value,
/// so the visible failure mode is simply blank fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub min_temp: String,
    pub max_temp: String,
}
