#![allow(dead_code)]

use resource_responses::{
    Callback, Controller, ControllerClass, Format, Responder, Wrapped,
    testing::{RecordingResponder, WrapLog},
};
use std::sync::Arc;

// ============================================================================
// Recording Controller
// ============================================================================

pub type Class = ControllerClass<RecordingController, String>;

/// A controller whose responder records registrations instead of picking one.
pub struct RecordingController {
    pub foo: String,
    pub wraps: WrapLog<RecordingController, String>,
    class: Arc<Class>,
}

impl RecordingController {
    pub fn new(class: &Arc<Class>) -> Self {
        Self {
            foo: String::new(),
            wraps: WrapLog::new(),
            class: Arc::clone(class),
        }
    }
}

impl Controller for RecordingController {
    type Output = String;
    type Reply = RecordingResponder<Self, String>;

    fn class(&self) -> &Class {
        &self.class
    }

    fn respond_to<'a, F>(&'a self, register: F) -> Self::Reply
    where
        F: FnOnce(&mut dyn Responder<'a, Self, String>),
    {
        let mut responder = RecordingResponder::new();
        register(&mut responder);
        responder
    }

    fn wrap<'a>(
        &'a self,
        callback: &Callback<Self, String>,
        format: &Format,
    ) -> Wrapped<'a, Self, String> {
        self.wraps.record(callback);
        callback.bind(self, format)
    }
}

/// A fresh class derived from a shared application root.
pub fn application_subclass(name: &'static str) -> Arc<Class> {
    Arc::new(Class::new("ApplicationController").subclass(name))
}

/// A callback rendering fixed text.
pub fn text(body: &'static str) -> Callback<RecordingController, String> {
    Callback::new(move |_| body.to_string())
}
