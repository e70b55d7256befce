use crate::algo::UnknownAlgorithm;
use crate::trace::TraceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("cannot {op} while playback is running")]
    Busy { op: &'static str },
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
    #[error("invalid trace: {0}")]
    InvalidTrace(#[from] TraceError),
    #[error("trace was generated for {trace} values but {shown} are displayed")]
    LengthMismatch { trace: usize, shown: usize },
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
