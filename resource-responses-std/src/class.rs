//! Class-level response registries.
//!
//! A [`ControllerClass`] is the attachment point for one controller type's
//! [`Collector`]. Subclassing is explicit: [`ControllerClass::subclass`]
//! derives a child whose collector is a deep copy of the parent's, so
//! configuring one class never leaks into another.
//!
//! Configuration is expected to happen once, when the class is set up.
//! Dispatch only ever reads, and works on a cloned [`Response`] snapshot so
//! no lock is held while callbacks run.

use resource_responses_core::{Collector, Response};
use std::{
    borrow::Cow,
    fmt,
    sync::{PoisonError, RwLock, RwLockWriteGuard},
};

/// Write access to a class's [`Collector`].
pub type ResponsesGuard<'a, C, O> = RwLockWriteGuard<'a, Collector<C, O>>;

/// The per-class registry of action responses.
///
/// # Example
///
/// ```rust,ignore
/// static PAGES: LazyLock<ControllerClass<PagesController, String>> =
///     LazyLock::new(|| ControllerClass::new("PagesController"));
///
/// PAGES.configure(|r| {
///     r.get("index").set_default(Callback::new(|c: &PagesController| c.render_index()));
/// });
/// ```
pub struct ControllerClass<C, O = ()> {
    name: Cow<'static, str>,
    parent: Option<Cow<'static, str>>,
    collector: RwLock<Collector<C, O>>,
}

impl<C, O> ControllerClass<C, O> {
    /// Create a root class with an empty collector.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            collector: RwLock::new(Collector::new()),
        }
    }

    /// Derive a child class from this one.
    ///
    /// The child starts with a deep copy of this class's responses as they
    /// stand now. Later changes on either side stay on that side.
    pub fn subclass(&self, name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        let collector = self.snapshot();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            class = %name,
            parent = %self.name,
            actions = collector.len(),
            "derived responses from parent class"
        );

        Self {
            name,
            parent: Some(self.name.clone()),
            collector: RwLock::new(collector),
        }
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the class this one was derived from.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Write access to the class's collector.
    pub fn responses(&self) -> ResponsesGuard<'_, C, O> {
        self.collector.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `configure` against a copy of the class's collector, store the
    /// copy back, and return the closure's result.
    ///
    /// No lock is held while `configure` runs, so it may read the class
    /// (`response`, `snapshot`, `subclass`); those reads see the responses
    /// as they stood before this call.
    ///
    /// ```rust,ignore
    /// PAGES.configure(|r| -> Result<(), ConfigError> {
    ///     r.get("plural").publish(["xml", "json"], Some(publish))?;
    ///     r.get("plural").set_default(default);
    ///     Ok(())
    /// })?;
    /// ```
    pub fn configure<F, T>(&self, configure: F) -> T
    where
        F: FnOnce(&mut Collector<C, O>) -> T,
    {
        let mut collector = self.snapshot();
        let result = configure(&mut collector);

        #[cfg(feature = "tracing")]
        tracing::debug!(class = %self.name, actions = collector.len(), "responses configured");

        *self.responses() = collector;
        result
    }

    /// A deep copy of the class's collector.
    pub fn snapshot(&self) -> Collector<C, O> {
        self.collector
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// A copy of the response table for `action`.
    ///
    /// An action that was never configured yields an empty table; the
    /// collector itself is left untouched.
    pub fn response(&self, action: &str) -> Response<C, O> {
        self.collector
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .find(action)
            .cloned()
            .unwrap_or_default()
    }
}

impl<C, O> fmt::Debug for ControllerClass<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerClass")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("responses", &*self.collector.read().unwrap_or_else(PoisonError::into_inner))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_responses_core::{Callback, ConfigError, Format};

    type Class = ControllerClass<(), &'static str>;

    fn cb(out: &'static str) -> Callback<(), &'static str> {
        Callback::new(move |_| out)
    }

    fn formats(class: &Class, action: &str) -> Vec<String> {
        class
            .response(action)
            .each_format()
            .map(|(f, _)| f.to_string())
            .collect()
    }

    #[test]
    fn configure_yields_the_collector() {
        let class = Class::new("PagesController");
        let result: Result<(), ConfigError> = class.configure(|r| {
            r.get("plural").publish(["xml"], Some(cb("xml")))?;
            r.get("plural").set_default(cb("default"));
            Ok(())
        });
        assert!(result.is_ok());

        let plural = class.response("plural");
        assert_eq!(plural.publish_formats(), &[Format::XML]);
        assert!(plural.default().is_some());
    }

    #[test]
    fn configure_surfaces_publish_errors() {
        let class = Class::new("PagesController");
        let result = class.configure(|r| r.get("plural").publish(["json"], None).map(|_| ()));

        assert!(matches!(
            result,
            Err(ConfigError::MissingPublishCallback { .. })
        ));
    }

    #[test]
    fn configure_can_read_the_class() {
        let class = Class::new("PagesController");
        class.responses().get("plural").register_format("html", None);

        let (before, derived) = class.configure(|r| {
            r.get("plural").register_format("iphone", None);
            let before = class.response("plural").contains_format("iphone");
            let derived = class.subclass("SpecialPagesController");
            let _ = format!("{class:?}");
            (before, derived)
        });

        assert!(!before);
        assert_eq!(formats(&derived, "plural"), ["html"]);
        assert_eq!(formats(&class, "plural"), ["html", "iphone"]);
    }

    #[test]
    fn unconfigured_action_is_empty_and_not_stored() {
        let class = Class::new("PagesController");
        assert!(class.response("missing").is_empty());
        assert!(class.snapshot().is_empty());
    }

    #[test]
    fn subclass_does_not_share_responses() {
        let parent = Class::new("ApplicationController");
        parent.responses().get("plural").register_format("html", None);

        let child = parent.subclass("PagesController");
        assert_eq!(child.parent(), Some("ApplicationController"));
        assert_eq!(formats(&child, "plural"), ["html"]);

        child.responses().get("plural").register_format("iphone", None);
        parent.responses().get("plural").register_format("popup", None);

        assert_eq!(formats(&parent, "plural"), ["html", "popup"]);
        assert_eq!(formats(&child, "plural"), ["html", "iphone"]);
    }

    #[test]
    fn siblings_and_grandchildren_are_independent() {
        let root = Class::new("ApplicationController");
        root.responses().get("index").set_default(cb("root"));

        let a = root.subclass("A");
        let b = root.subclass("B");
        a.responses().get("index").set_default(cb("a"));
        let grandchild = a.subclass("AA");
        b.responses().get("index").clear_default();

        let default_of = |class: &Class| {
            class
                .response("index")
                .default()
                .map(|cb| cb.call(&(), &Format::ANY))
        };
        assert_eq!(default_of(&root), Some("root"));
        assert_eq!(default_of(&a), Some("a"));
        assert_eq!(default_of(&grandchild), Some("a"));
        assert_eq!(default_of(&b), None);
    }
}
