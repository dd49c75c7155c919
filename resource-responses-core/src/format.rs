//! Format and action names.
//!
//! Both are cheap string newtypes. Static names borrow, runtime names own.

use std::{borrow::Borrow, borrow::Cow, fmt};

/// A named response representation a request may target (`xml`, `json`,
/// or an arbitrary name such as `iphone`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Format(Cow<'static, str>);

impl Format {
    /// The fallback format, matched when nothing more specific is.
    pub const ANY: Format = Format::from_static("any");
    /// HTML.
    pub const HTML: Format = Format::from_static("html");
    /// XML.
    pub const XML: Format = Format::from_static("xml");
    /// JSON.
    pub const JSON: Format = Format::from_static("json");

    /// Create a format from any string-like name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Create a format from a static name without allocating.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The format name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the fallback [`Format::ANY`].
    pub fn is_any(&self) -> bool {
        self.as_str() == Self::ANY.as_str()
    }
}

/// A controller action name (`index`, `plural`, `create`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Action(Cow<'static, str>);

impl Action {
    /// Create an action from any string-like name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Create an action from a static name without allocating.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The action name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! name_conversions {
    ($ty:ident) => {
        impl From<&'static str> for $ty {
            fn from(name: &'static str) -> Self {
                Self::from_static(name)
            }
        }

        impl From<String> for $ty {
            fn from(name: String) -> Self {
                Self(Cow::Owned(name))
            }
        }

        impl From<&$ty> for $ty {
            fn from(name: &$ty) -> Self {
                name.clone()
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

name_conversions!(Format);
name_conversions!(Action);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn static_and_owned_names_compare_equal() {
        assert_eq!(Format::from("xml"), Format::new(String::from("xml")));
        assert_eq!(Format::XML, "xml");
        assert!(Format::from("any").is_any());
        assert!(!Format::JSON.is_any());
    }

    #[test]
    fn maps_can_be_probed_with_str() {
        let mut map = HashMap::new();
        map.insert(Action::from("plural"), 1);
        map.insert(Action::new(String::from("singular")), 2);

        assert_eq!(map.get("plural"), Some(&1));
        assert_eq!(map.get("singular"), Some(&2));
        assert_eq!(map.get("missing"), None);
    }
}
