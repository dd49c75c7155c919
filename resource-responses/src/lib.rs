//! # resource-responses
//!
//! Declare, per controller action, how each response format is produced,
//! then replay those declarations against the host framework's
//! content-negotiation responder when a request arrives.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use resource_responses::prelude::*;
//!
//! static PAGES: LazyLock<ControllerClass<PagesController, String>> =
//!     LazyLock::new(|| ControllerClass::new("PagesController"));
//!
//! responses!(PAGES, {
//!     plural => {
//!         publish [xml, json] => |c| c.serialize();
//!         default => |c| c.render_index();
//!     },
//! })?;
//!
//! impl Controller for PagesController {
//!     type Output = String;
//!     type Reply = Option<String>;
//!
//!     fn class(&self) -> &ControllerClass<Self, String> { &PAGES }
//!
//!     fn respond_to<'a, F>(&'a self, register: F) -> Option<String>
//!     where
//!         F: FnOnce(&mut dyn Responder<'a, Self, String>),
//!     {
//!         let mut negotiator = Negotiator::new(self.format.clone());
//!         register(&mut negotiator);
//!         negotiator.select().render()
//!     }
//! }
//!
//! let body = controller.response_for("plural");
//! ```
//!
//! ## Precedence
//!
//! Dispatch registers custom formats first, then published formats, then
//! the fallback `any`. A responder that picks the first matching
//! registration therefore prefers a custom format over a published one and
//! a published one over the default.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use resource_responses_core::{
    // Names
    Action,
    // Callbacks
    Callback,
    // Registry
    Collector,
    // Error types
    ConfigError,
    Format,
    // Responder
    Responder,
    Response,
    Wrapped,
};

pub use resource_responses_std::{
    // Class registry
    ControllerClass,
    // Controller integration
    Controller,
    // Dispatch
    Dispatched,
    ResponsesGuard,
    dispatch,
};

#[cfg(feature = "macros")]
mod macros;

/// Standard responder implementations.
pub mod responders {
    pub use resource_responses_std::responders::{
        LoggingResponder, Negotiator, Selection, logging, negotiate,
    };
}

/// Testing utilities.
pub mod testing {
    pub use resource_responses_std::testing::{Call, RecordingResponder, Target, WrapLog};
}

/// Prelude module - common imports for resource responses.
///
/// # Usage
///
/// ```rust,ignore
/// use resource_responses::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action, Callback, Collector, ConfigError, Controller, ControllerClass, Format, Responder,
        Response, Wrapped,
        responders::{Negotiator, Selection},
    };

    #[cfg(feature = "macros")]
    pub use crate::responses;
}

#[doc(hidden)]
pub mod __private {
    use resource_responses_core::{Callback, ConfigError, Response};

    /// Build a callback typed after the table it will be stored in.
    pub fn callback_for<C, O, F>(_response: &Response<C, O>, f: F) -> Callback<C, O>
    where
        C: 'static,
        O: 'static,
        F: Fn(&C) -> O + Send + Sync + 'static,
    {
        Callback::new(f)
    }

    /// Report a rejected `publish` and hand the error back.
    pub fn rejected(class: &str, action: &str, err: ConfigError) -> ConfigError {
        #[cfg(feature = "tracing")]
        tracing::warn!(class, action, error = %err, "rejected response configuration");
        #[cfg(not(feature = "tracing"))]
        let _ = (class, action);
        err
    }
}
