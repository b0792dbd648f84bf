//! Engine construction errors.

use thiserror::Error;

/// Failures that prevent an engine from being built.
///
/// Out-of-range commands and stale timer firings are not errors; they are
/// clamped or discarded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A configured constant is outside its usable range
    #[error("invalid reader config: {0}")]
    InvalidConfig(&'static str),

    /// The platform timer needed to pace words could not be acquired
    #[error("timer unavailable: {0}")]
    TimerUnavailable(String),
}
