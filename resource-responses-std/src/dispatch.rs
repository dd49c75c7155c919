//! The dispatch algorithm.
//!
//! Walks a [`Response`] and registers its handlers with a [`Responder`] in a
//! fixed order:
//!
//! 1. custom formats, in first-registration order (a format without a
//!    callback is still registered, with no handler);
//! 2. published formats, each with the shared publish callback;
//! 3. the fallback `any` format, exactly once, with the default callback if
//!    there is one.
//!
//! Dispatch never mutates the response table.

use resource_responses_core::{Callback, Format, Responder, Response, Wrapped};

/// What a single dispatch registered with the responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatched {
    /// Number of custom formats registered.
    pub formats: usize,
    /// Number of published formats registered.
    pub published: usize,
    /// Whether the `any` registration carried a default callback.
    pub default: bool,
}

impl Dispatched {
    /// Total registrations made, including the trailing `any`.
    pub const fn registrations(&self) -> usize {
        self.formats + self.published + 1
    }
}

/// Drive `responder` from `response`, binding every callback through `wrap`.
pub fn dispatch<'a, C: 'a, O, W, R>(
    response: &Response<C, O>,
    mut wrap: W,
    responder: &mut R,
) -> Dispatched
where
    W: FnMut(&Callback<C, O>, &Format) -> Wrapped<'a, C, O>,
    R: Responder<'a, C, O> + ?Sized,
{
    let mut dispatched = Dispatched::default();

    for (format, callback) in response.each_format() {
        #[cfg(feature = "tracing")]
        tracing::trace!(%format, handler = callback.is_some(), "custom format");

        responder.format(format, callback.map(|cb| wrap(cb, format)));
        dispatched.formats += 1;
    }

    for (format, callback) in response.each_published() {
        #[cfg(feature = "tracing")]
        tracing::trace!(%format, "published format");

        responder.format(format, Some(wrap(callback, format)));
        dispatched.published += 1;
    }

    let default = response.default().map(|cb| wrap(cb, &Format::ANY));
    dispatched.default = default.is_some();

    #[cfg(feature = "tracing")]
    tracing::trace!(handler = dispatched.default, "any format");

    responder.any(default);
    dispatched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingResponder, Target};

    fn cb(out: &'static str) -> Callback<(), &'static str> {
        Callback::new(move |_| out)
    }

    fn run(
        response: &Response<(), &'static str>,
    ) -> (RecordingResponder<(), &'static str>, Dispatched) {
        let mut responder = RecordingResponder::new();
        let dispatched = dispatch(response, |cb, f| cb.bind(&(), f), &mut responder);
        (responder, dispatched)
    }

    #[test]
    fn custom_then_published_then_any() {
        let mut response = Response::new();
        let iblock = cb("iphone");
        let pblock = cb("published");
        let default = cb("default");
        response.register_format("iphone", Some(iblock.clone()));
        response.publish(["xml", "json"], Some(pblock.clone())).unwrap();
        response.set_default(default.clone());

        let (responder, dispatched) = run(&response);

        assert_eq!(responder.names(), ["iphone", "xml", "json", "any"]);
        let calls = responder.calls();
        assert!(calls[0].callback.as_ref().unwrap().ptr_eq(&iblock));
        assert!(calls[1].callback.as_ref().unwrap().ptr_eq(&pblock));
        assert!(calls[2].callback.as_ref().unwrap().ptr_eq(&pblock));
        assert!(calls[3].callback.as_ref().unwrap().ptr_eq(&default));
        assert_eq!(calls[3].target, Target::Any);

        assert_eq!(
            dispatched,
            Dispatched {
                formats: 1,
                published: 2,
                default: true
            }
        );
        assert_eq!(dispatched.registrations(), 4);
    }

    #[test]
    fn any_is_offered_without_a_default() {
        let response = Response::new();
        let (responder, dispatched) = run(&response);

        assert_eq!(responder.names(), ["any"]);
        assert!(responder.calls()[0].callback.is_none());
        assert!(!dispatched.default);
    }

    #[test]
    fn custom_format_without_callback_is_still_offered() {
        let mut response = Response::new();
        response.register_format("iphone", None);
        response.set_default(cb("default"));

        let (responder, _) = run(&response);

        assert_eq!(responder.names(), ["iphone", "any"]);
        assert!(responder.calls()[0].callback.is_none());
        assert!(responder.calls()[1].callback.is_some());
    }

    #[test]
    fn wrap_runs_once_per_registered_callback() {
        let mut response = Response::new();
        response.register_format("iphone", None);
        response.register_format("popup", Some(cb("popup")));
        response.publish(["xml", "json"], Some(cb("p"))).unwrap();
        response.set_default(cb("default"));

        let mut wrapped = Vec::new();
        let mut responder = RecordingResponder::new();
        dispatch(
            &response,
            |cb, f| {
                wrapped.push(f.to_string());
                cb.bind(&(), f)
            },
            &mut responder,
        );

        assert_eq!(wrapped, ["popup", "xml", "json", "any"]);
    }
}
