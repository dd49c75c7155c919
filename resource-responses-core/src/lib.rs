//! # resource-responses-core
//!
//! Core types for declaring, per controller action, how each response
//! format is produced.
//!
//! This crate has no framework dependencies and is meant to be imported by
//! host integrations that only need the data model.
//!
//! # Model
//!
//! - [`Collector`]: one per controller class, maps [`Action`] names to their
//!   [`Response`] table.
//! - [`Response`]: the ordered [`Format`] → [`Callback`] table for one action,
//!   with a group of published formats sharing one callback and a default
//!   callback for the fallback `any` format.
//! - [`Responder`]: the host's negotiation object that dispatch drives.
//!
//! Callbacks receive the controller instance explicitly. Binding one to an
//! instance yields a [`Wrapped`] callback the responder can run directly.
//!
//! # Error Types
//!
//! - [`ConfigError`] - Configuration errors, the only failure this crate reports

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callback;
mod collector;
mod error;
mod format;
mod responder;
mod response;

// Re-exports
pub use callback::{Callback, Wrapped};
pub use collector::Collector;
pub use error::ConfigError;
pub use format::{Action, Format};
pub use responder::Responder;
pub use response::Response;
