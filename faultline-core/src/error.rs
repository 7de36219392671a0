use thiserror::Error;

/// Errors crossing the engine's port boundaries.
///
/// Handlers catch these at item granularity; only store-level failures while
/// listing the queue or recording pass completion ever reach the driver, and
/// the driver logs rather than propagates them.
#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("model error: {0}")]
    Model(#[from] faultline_model::ModelError),

    #[error("settings error: {0}")]
    Config(#[from] faultline_config::ConfigError),

    #[error("store error: {0}")]
    Store(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
