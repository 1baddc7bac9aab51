use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::warn;

use crate::error::FetchError;
use crate::model::{DisplayState, WeatherQuery, WeatherResponse};
use crate::source::WeatherSource;

/// What the fetch task posts back when it completes.
pub type FetchOutcome = Result<WeatherResponse, FetchError>;

/// Lifecycle of one screen activation. Terminal states are not re-entered;
/// nothing in this flow re-triggers the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Succeeded,
    Failed,
}

/// Orchestrates the single fetch-and-render flow of the screen.
///
/// Owns [`DisplayState`]; all writes go through [`ScreenController::apply`],
/// which must run on the thread that reads the display. The fetch itself is
/// spawned off that thread and posts its outcome over a oneshot channel.
#[derive(Debug)]
pub struct ScreenController {
    display: DisplayState,
    phase: Phase,
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenController {
    pub fn new() -> Self {
        Self {
            display: DisplayState::default(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Launch the one-shot fetch task.
    ///
    /// Exactly one fetch is started per activation; there is no retry,
    /// timeout, or cancellation. Dropping the returned receiver discards the
    /// in-flight result, matching a screen torn down mid-fetch.
    pub fn start_fetch(
        &mut self,
        source: Arc<dyn WeatherSource>,
        query: WeatherQuery,
    ) -> oneshot::Receiver<FetchOutcome> {
        debug_assert_eq!(self.phase, Phase::Idle, "one fetch per screen activation");
        self.phase = Phase::Fetching;

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = source.fetch_weather(&query).await;
            // Receiver gone means the screen no longer exists; discard.
            let _ = tx.send(outcome);
        });
        rx
    }

    /// Project a fetch outcome onto the display state.
    ///
    /// The only writer of [`DisplayState`]. On failure the display keeps its
    /// blank initial value and a single diagnostic line is emitted.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(response) => {
                self.display.min_temp = response.main.temp_min.to_string();
                self.display.max_temp = response.main.temp_max.to_string();
                self.phase = Phase::Succeeded;
            }
            Err(err) => {
                warn!(kind = err.kind(), "weather fetch failed: {err}");
                self.phase = Phase::Failed;
            }
        }
    }

    /// Full activation: start the fetch, await its completion, apply it.
    pub async fn run_once(&mut self, source: Arc<dyn WeatherSource>, query: WeatherQuery) {
        let rx = self.start_fetch(source, query);
        match rx.await {
            Ok(outcome) => self.apply(outcome),
            Err(_) => {
                // Sender dropped without an outcome (fetch task panicked).
                warn!(kind = "unknown", "weather task ended without an outcome");
                self.phase = Phase::Failed;
            }
        }
    }
}
