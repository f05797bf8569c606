//! Error types for the CARROT client

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur before a request reaches the wire.
///
/// Transport and server-side failures are not errors from the caller's point
/// of view: they are normalized into the returned response text. The only
/// failure that aborts an operation is a local one.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A parameter named a local file that could not be read
    #[error("Unable to read the file supplied for {param} at {}", path.display())]
    FileRead {
        /// Name of the parameter that referenced the file
        param: String,
        /// Path the caller supplied
        path: PathBuf,
        /// Underlying I/O error, logged at debug level by the body builder
        #[source]
        source: std::io::Error,
    },
}
