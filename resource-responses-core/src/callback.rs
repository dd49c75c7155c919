//! Response callbacks.
//!
//! A [`Callback`] never captures the controller it renders for. The
//! controller instance is handed to it explicitly at call time, and
//! [`Callback::bind`] produces a [`Wrapped`] callback that carries that
//! instance along so a responder can run it without knowing about contexts.

use crate::format::Format;
use std::{fmt, sync::Arc};

type CallbackFn<C, O> = dyn Fn(&C, &Format) -> O + Send + Sync;

/// A shareable response callback over a context `C` producing `O`.
///
/// Cloning a `Callback` is cheap and yields a handle to the same function.
pub struct Callback<C, O = ()> {
    inner: Arc<CallbackFn<C, O>>,
}

impl<C: 'static, O: 'static> Callback<C, O> {
    /// Create a callback that only needs the context.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&C) -> O + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(move |ctx: &C, _format: &Format| f(ctx)),
        }
    }

    /// Create a callback that also receives the format it is invoked for.
    ///
    /// Useful for a single callback shared by several published formats.
    pub fn with_format<F>(f: F) -> Self
    where
        F: Fn(&C, &Format) -> O + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }
}

impl<C, O> Callback<C, O> {
    /// Invoke the callback against a context.
    pub fn call(&self, ctx: &C, format: &Format) -> O {
        (self.inner)(ctx, format)
    }

    /// Bind the callback to a context, producing a zero-argument callback.
    pub fn bind<'a>(&self, ctx: &'a C, format: &Format) -> Wrapped<'a, C, O> {
        Wrapped {
            callback: self.clone(),
            ctx,
            format: format.clone(),
        }
    }

    /// Whether both handles point at the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C, O> Clone for Callback<C, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C, O> fmt::Debug for Callback<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

/// A callback bound to the controller instance it runs against.
pub struct Wrapped<'a, C, O = ()> {
    callback: Callback<C, O>,
    ctx: &'a C,
    format: Format,
}

impl<'a, C, O> Wrapped<'a, C, O> {
    /// Run the callback with its bound context.
    pub fn call(&self) -> O {
        self.callback.call(self.ctx, &self.format)
    }

    /// The format this callback was bound for.
    pub fn format(&self) -> &Format {
        &self.format
    }

    /// The underlying callback.
    pub fn callback(&self) -> &Callback<C, O> {
        &self.callback
    }

    /// The bound context.
    pub fn context(&self) -> &'a C {
        self.ctx
    }
}

impl<C, O> Clone for Wrapped<'_, C, O> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            ctx: self.ctx,
            format: self.format.clone(),
        }
    }
}

impl<C, O> fmt::Debug for Wrapped<'_, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapped")
            .field("callback", &self.callback)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
