//! Error types for resource responses.
//!
//! - [`ConfigError`] - Errors raised while configuring a response table

use crate::format::Format;
use thiserror::Error;

/// Errors raised while configuring responses.
///
/// These surface at class-definition time, never while dispatching a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Formats were published without a callback while none is on record.
    #[error("missing callback for new published format(s): {}", join(.formats))]
    MissingPublishCallback {
        /// The formats that were being published.
        formats: Vec<Format>,
    },
}

fn join(formats: &[Format]) -> String {
    formats
        .iter()
        .map(Format::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
