//! Testing utilities for resource responses.
//!
//! # Features
//!
//! - [`RecordingResponder`]: A responder that records every registration, in order
//! - [`WrapLog`]: Records the callbacks a controller's `wrap` was asked to bind

use resource_responses_core::{Callback, Format, Responder, Wrapped};
use std::{
    fmt,
    sync::{Mutex, PoisonError},
};

// ============================================================================
// Recording Responder
// ============================================================================

/// Which responder entry point received a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `Responder::format` with this format.
    Format(Format),
    /// `Responder::any`.
    Any,
}

/// One registration seen by a [`RecordingResponder`].
pub struct Call<C, O> {
    /// Where the registration went.
    pub target: Target,
    /// The callback behind the handler, if one was supplied.
    pub callback: Option<Callback<C, O>>,
}

impl<C, O> Call<C, O> {
    /// The format name, `any` for the fallback.
    pub fn name(&self) -> &str {
        match &self.target {
            Target::Format(format) => format.as_str(),
            Target::Any => "any",
        }
    }
}

/// A responder that records every registration it receives.
///
/// # Example
///
/// ```rust,ignore
/// let mut responder = RecordingResponder::new();
/// dispatch(&response, |cb, f| cb.bind(&ctx, f), &mut responder);
///
/// assert_eq!(responder.names(), ["iphone", "xml", "json", "any"]);
/// ```
pub struct RecordingResponder<C, O> {
    calls: Vec<Call<C, O>>,
}

impl<C, O> RecordingResponder<C, O> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// The recorded registrations, in order.
    pub fn calls(&self) -> &[Call<C, O>] {
        &self.calls
    }

    /// The recorded format names, in order.
    pub fn names(&self) -> Vec<&str> {
        self.calls.iter().map(Call::name).collect()
    }

    /// Number of registrations recorded.
    pub fn count(&self) -> usize {
        self.calls.len()
    }

    /// Consume the recorder, returning its registrations.
    pub fn into_calls(self) -> Vec<Call<C, O>> {
        self.calls
    }
}

impl<C, O> fmt::Debug for Call<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("target", &self.target)
            .field("callback", &self.callback)
            .finish()
    }
}

impl<C, O> fmt::Debug for RecordingResponder<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<C, O> Default for RecordingResponder<C, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C, O> Responder<'a, C, O> for RecordingResponder<C, O> {
    fn format(&mut self, format: &Format, handler: Option<Wrapped<'a, C, O>>) {
        self.calls.push(Call {
            target: Target::Format(format.clone()),
            callback: handler.map(|h| h.callback().clone()),
        });
    }

    fn any(&mut self, handler: Option<Wrapped<'a, C, O>>) {
        self.calls.push(Call {
            target: Target::Any,
            callback: handler.map(|h| h.callback().clone()),
        });
    }
}

// ============================================================================
// Wrap Log
// ============================================================================

/// Records the callbacks passed through a controller's `wrap`.
///
/// # Example
///
/// ```rust,ignore
/// impl Controller for PagesController {
///     fn wrap<'a>(&'a self, cb: &Callback<Self, String>, f: &Format) -> Wrapped<'a, Self, String> {
///         self.wraps.record(cb);
///         cb.bind(self, f)
///     }
///     // ...
/// }
///
/// assert_eq!(controller.wraps.count_of(&publish_block), 2);
/// ```
pub struct WrapLog<C, O> {
    wrapped: Mutex<Vec<Callback<C, O>>>,
}

impl<C, O> WrapLog<C, O> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            wrapped: Mutex::new(Vec::new()),
        }
    }

    /// Record a callback being wrapped.
    pub fn record(&self, callback: &Callback<C, O>) {
        self.wrapped
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(callback.clone());
    }

    /// Total number of wraps recorded.
    pub fn count(&self) -> usize {
        self.wrapped.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// How many times this particular callback was wrapped.
    pub fn count_of(&self, callback: &Callback<C, O>) -> usize {
        self.wrapped
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|cb| cb.ptr_eq(callback))
            .count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.wrapped
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<C, O> fmt::Debug for WrapLog<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapLog")
            .field("count", &self.count())
            .finish()
    }
}

impl<C, O> Default for WrapLog<C, O> {
    fn default() -> Self {
        Self::new()
    }
}
