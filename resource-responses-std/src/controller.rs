//! # Controller integration
//!
//! The [`Controller`] trait is the seam between a host framework's controller
//! type and its class-level [`ControllerClass`]. The host supplies two things:
//!
//! - the class accessor ([`Controller::class`]), usually a `static`;
//! - its "respond to the requested format" facility
//!   ([`Controller::respond_to`]), which hands dispatch a [`Responder`] and
//!   turns whatever the responder picked into a reply.
//!
//! [`Controller::response_for`] then ties them together for an action.

use crate::{class::ControllerClass, dispatch::dispatch};
use resource_responses_core::{Callback, Format, Responder, Wrapped};

/// A host controller whose actions respond through a [`ControllerClass`].
///
/// # Example
///
/// ```rust,ignore
/// impl Controller for PagesController {
///     type Output = String;
///     type Reply = Option<String>;
///
///     fn class(&self) -> &ControllerClass<Self, String> {
///         &PAGES
///     }
///
///     fn respond_to<'a, F>(&'a self, register: F) -> Option<String>
///     where
///         F: FnOnce(&mut dyn Responder<'a, Self, String>),
///     {
///         let mut negotiator = Negotiator::new(self.requested_format.clone());
///         register(&mut negotiator);
///         negotiator.select().render()
///     }
/// }
///
/// let body = controller.response_for("index");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Controller`",
    label = "missing `Controller` implementation",
    note = "Implement `class` and `respond_to` to dispatch configured responses."
)]
pub trait Controller: Sized + 'static {
    /// What a response callback produces.
    type Output: 'static;

    /// What [`Controller::respond_to`] (and so [`Controller::response_for`])
    /// returns.
    type Reply;

    /// The class-level registry this controller belongs to.
    fn class(&self) -> &ControllerClass<Self, Self::Output>;

    /// Give `register` a responder for the current request, then produce the
    /// reply from whatever it selected.
    fn respond_to<'a, F>(&'a self, register: F) -> Self::Reply
    where
        F: FnOnce(&mut dyn Responder<'a, Self, Self::Output>);

    /// Bind `callback` so it runs against this instance.
    fn wrap<'a>(
        &'a self,
        callback: &Callback<Self, Self::Output>,
        format: &Format,
    ) -> Wrapped<'a, Self, Self::Output> {
        callback.bind(self, format)
    }

    /// Respond to the current request with the handlers configured for
    /// `action`.
    fn response_for(&self, action: &str) -> Self::Reply {
        let class = self.class();
        let response = class.response(action);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("response_for", class = class.name(), action).entered();

        self.respond_to(|responder| {
            let _dispatched = dispatch(&response, |cb, format| self.wrap(cb, format), responder);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                formats = _dispatched.formats,
                published = _dispatched.published,
                default = _dispatched.default,
                "responses dispatched"
            );
        })
    }
}
