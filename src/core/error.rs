//! Error types for the logger system
//!
//! Logging calls never fail. These errors surface only from construction,
//! configuration, sinks, and teardown.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Worker thread could not be started
    #[error("Failed to spawn {destination} worker: {source}")]
    WorkerSpawn {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    /// Worker thread panicked before it finished draining
    #[error("{destination} worker panicked: {message}")]
    WorkerPanicked { destination: String, message: String },

    /// Global logger was initialized twice
    #[error("Global logger already initialized")]
    AlreadyInitialized,

    /// Global logger used before initialization
    #[error("Global logger not initialized")]
    NotInitialized,

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn worker_spawn(destination: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::WorkerSpawn {
            destination: destination.into(),
            source,
        }
    }

    pub fn worker_panicked(destination: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::WorkerPanicked {
            destination: destination.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
