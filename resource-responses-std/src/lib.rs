//! # resource-responses-std
//!
//! Standard implementations on top of `resource-responses-core`.
//!
//! This crate provides:
//! - **Class registries**: [`ControllerClass`] with explicit copy-on-subclass
//! - **Controller integration**: [`Controller`] (`wrap`, `response_for`)
//! - **Dispatch**: [`dispatch`], the custom → published → `any` walk
//! - **Standard responders**: [`Negotiator`], [`LoggingResponder`]
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use resource_responses_core;

// Modules
pub mod class;
pub mod controller;
pub mod dispatch;
pub mod responders;
pub mod testing;

pub use class::{ControllerClass, ResponsesGuard};
pub use controller::Controller;
pub use dispatch::{Dispatched, dispatch};
pub use responders::{LoggingResponder, Negotiator, Selection};
