//! Logging responder for dispatch observation.

use resource_responses_core::{Format, Responder, Wrapped};

/// A responder wrapper that logs each registration before forwarding it.
pub struct LoggingResponder<R> {
    inner: R,
}

impl<R> LoggingResponder<R> {
    /// Wrap `inner`.
    pub const fn new(inner: R) -> Self {
        Self { inner }
    }

    /// The wrapped responder.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Unwrap, returning the inner responder.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<'a, C, O, R> Responder<'a, C, O> for LoggingResponder<R>
where
    R: Responder<'a, C, O>,
{
    fn format(&mut self, format: &Format, handler: Option<Wrapped<'a, C, O>>) {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(%format, handler = handler.is_some(), "Registering format");
        }
        self.inner.format(format, handler);
    }

    fn any(&mut self, handler: Option<Wrapped<'a, C, O>>) {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(handler = handler.is_some(), "Registering fallback");
        }
        self.inner.any(handler);
    }
}
