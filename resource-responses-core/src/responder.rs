//! # Responder
//!
//! The host framework's content-negotiation object. Dispatch tells it, one
//! format at a time, which handler to use for that format; the responder
//! decides which of those handlers actually runs for the incoming request.
//!
//! Registration order is significant. A responder is expected to pick the
//! *first* registration matching the requested format, which is what makes
//! custom formats beat published ones and published ones beat the default.

use crate::{callback::Wrapped, format::Format};

/// Receives `(format, handler)` registrations during dispatch.
///
/// A `None` handler means "this format is known; render it the default way".
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot receive responses for context `{C}`",
    label = "missing `Responder` implementation",
    note = "Implement `Responder<'a, {C}, {O}>` with `format` and `any`."
)]
pub trait Responder<'a, C, O> {
    /// Register a handler for a named format.
    fn format(&mut self, format: &Format, handler: Option<Wrapped<'a, C, O>>);

    /// Register the fallback handler, matched by any requested format.
    fn any(&mut self, handler: Option<Wrapped<'a, C, O>>);
}

impl<'a, C, O, R> Responder<'a, C, O> for &mut R
where
    R: Responder<'a, C, O> + ?Sized,
{
    fn format(&mut self, format: &Format, handler: Option<Wrapped<'a, C, O>>) {
        (**self).format(format, handler);
    }

    fn any(&mut self, handler: Option<Wrapped<'a, C, O>>) {
        (**self).any(handler);
    }
}
