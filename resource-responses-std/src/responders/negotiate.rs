//! A single-format negotiating responder.
//!
//! [`Negotiator`] mirrors how a host framework resolves a request whose
//! format is already known (from an extension or a parsed `Accept` header):
//! the first registration naming that format wins, otherwise the `any`
//! registration, otherwise the request is not acceptable.

use resource_responses_core::{Format, Responder, Wrapped};
use std::fmt;

/// The outcome of negotiation.
pub enum Selection<'a, C, O> {
    /// Run this handler.
    Handler(Wrapped<'a, C, O>),
    /// The format is known but has no handler; render it the default way.
    Default(Format),
    /// Nothing registered matches the requested format.
    NotAcceptable,
}

impl<C, O> Selection<'_, C, O> {
    /// Run the selected handler, if one was selected.
    pub fn render(self) -> Option<O> {
        match self {
            Selection::Handler(handler) => Some(handler.call()),
            Selection::Default(_) | Selection::NotAcceptable => None,
        }
    }

    /// Whether anything matched.
    pub fn is_acceptable(&self) -> bool {
        !matches!(self, Selection::NotAcceptable)
    }

    /// The format that was matched, if any.
    pub fn format(&self) -> Option<&Format> {
        match self {
            Selection::Handler(handler) => Some(handler.format()),
            Selection::Default(format) => Some(format),
            Selection::NotAcceptable => None,
        }
    }
}

impl<C, O> fmt::Debug for Selection<'_, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Handler(handler) => f.debug_tuple("Handler").field(handler).finish(),
            Selection::Default(format) => f.debug_tuple("Default").field(format).finish(),
            Selection::NotAcceptable => f.write_str("NotAcceptable"),
        }
    }
}

/// Collects registrations and selects one for the requested format.
pub struct Negotiator<'a, C, O> {
    requested: Format,
    registered: Vec<(Format, Option<Wrapped<'a, C, O>>)>,
    fallback: Option<Option<Wrapped<'a, C, O>>>,
}

impl<'a, C, O> Negotiator<'a, C, O> {
    /// Negotiate for `requested`.
    pub fn new(requested: impl Into<Format>) -> Self {
        Self {
            requested: requested.into(),
            registered: Vec::new(),
            fallback: None,
        }
    }

    /// The requested format.
    pub fn requested(&self) -> &Format {
        &self.requested
    }

    /// The registered format names, in registration order.
    pub fn formats(&self) -> impl Iterator<Item = &Format> + '_ {
        self.registered.iter().map(|(format, _)| format)
    }

    /// Pick the handler for the requested format.
    pub fn select(self) -> Selection<'a, C, O> {
        let Self {
            requested,
            registered,
            fallback,
        } = self;

        let matched = registered.into_iter().find(|(format, _)| *format == requested);
        match (matched, fallback) {
            (Some((_, Some(handler))), _) => Selection::Handler(handler),
            (Some((format, None)), _) => Selection::Default(format),
            (None, Some(Some(handler))) => Selection::Handler(handler),
            (None, Some(None)) => Selection::Default(requested),
            (None, None) => Selection::NotAcceptable,
        }
    }
}

impl<'a, C, O> Responder<'a, C, O> for Negotiator<'a, C, O> {
    fn format(&mut self, format: &Format, handler: Option<Wrapped<'a, C, O>>) {
        self.registered.push((format.clone(), handler));
    }

    // The first fallback registered wins, like any other format.
    fn any(&mut self, handler: Option<Wrapped<'a, C, O>>) {
        if self.fallback.is_none() {
            self.fallback = Some(handler);
        }
    }
}

impl<C, O> fmt::Debug for Negotiator<'_, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Negotiator")
            .field("requested", &self.requested)
            .field("registered", &self.formats().collect::<Vec<_>>())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
