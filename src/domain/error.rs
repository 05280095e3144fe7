use thiserror::Error;

use super::body::BodyId;

/// Failures at the engine boundary. Stepping itself never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("unknown body {0}")]
    UnknownBody(BodyId),

    #[error("invalid world settings: {0}")]
    InvalidSettings(String),
}
