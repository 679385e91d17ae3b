//! Station abstraction: one processing step of the corpus pipeline.

use crate::pipeline::error::StationError;

/// A processing step that turns inputs into outputs.
///
/// Stations run on worker threads and own any per-thread state.
pub trait Station: Send {
    type Input: Send;
    type Output: Send;

    /// Name for logging/debugging.
    fn name(&self) -> &'static str;

    /// Processes one input.
    ///
    /// The corpus pipeline expects one output per input: `Ok(None)` or an
    /// error stops the worker running the station.
    fn process(&mut self, input: Self::Input) -> Result<Option<Self::Output>, StationError>;
}
