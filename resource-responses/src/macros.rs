//! The `responses!` configuration DSL.

/// Configure a [`ControllerClass`](crate::ControllerClass) declaratively.
///
/// Each action block accepts, in any order and any number of times:
///
/// - `publish [fmt, ...] => callback;` publish formats under a shared callback
/// - `publish [fmt, ...];` add formats to an existing publish group
/// - `default => callback;` the fallback `any` callback
/// - `fmt => callback;` a custom format
/// - `fmt;` a custom format rendered the framework's default way
///
/// Callbacks are closures over the controller (`|c| ...`). The whole block
/// evaluates to `Result<(), ConfigError>`; the first failing `publish` stops
/// configuration.
///
/// # Example
///
/// ```rust,ignore
/// responses!(PAGES, {
///     plural => {
///         publish [xml, json] => |c| c.serialize();
///         default => |c| c.render("index");
///         iphone => |c| c.render("index.iphone");
///         popup;
///     },
///     singular => {
///         publish [xml, json];
///     },
/// })?;
/// ```
#[macro_export]
macro_rules! responses {
    ($class:expr, { $($action:ident => { $($body:tt)* }),* $(,)? }) => {{
        let class = &$class;
        class.configure(|collector| -> ::core::result::Result<(), $crate::ConfigError> {
            $(
                {
                    #[allow(unused_variables)]
                    let response = collector.get(stringify!($action));
                    $crate::__response_entries!(class, stringify!($action), response; $($body)*);
                }
            )*
            ::core::result::Result::Ok(())
        })
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __response_entries {
    ($class:ident, $action:expr, $r:ident;) => {};

    ($class:ident, $action:expr, $r:ident; publish [$($fmt:ident),+ $(,)?] => $cb:expr; $($rest:tt)*) => {
        let callback = $crate::__private::callback_for(&*$r, $cb);
        $r.publish([$(stringify!($fmt)),+], ::core::option::Option::Some(callback))
            .map_err(|err| $crate::__private::rejected($class.name(), $action, err))?;
        $crate::__response_entries!($class, $action, $r; $($rest)*);
    };

    ($class:ident, $action:expr, $r:ident; publish [$($fmt:ident),+ $(,)?]; $($rest:tt)*) => {
        $r.publish([$(stringify!($fmt)),+], ::core::option::Option::None)
            .map_err(|err| $crate::__private::rejected($class.name(), $action, err))?;
        $crate::__response_entries!($class, $action, $r; $($rest)*);
    };

    ($class:ident, $action:expr, $r:ident; default => $cb:expr; $($rest:tt)*) => {
        let callback = $crate::__private::callback_for(&*$r, $cb);
        $r.set_default(callback);
        $crate::__response_entries!($class, $action, $r; $($rest)*);
    };

    ($class:ident, $action:expr, $r:ident; $fmt:ident => $cb:expr; $($rest:tt)*) => {
        let callback = $crate::__private::callback_for(&*$r, $cb);
        $r.register_format(stringify!($fmt), ::core::option::Option::Some(callback));
        $crate::__response_entries!($class, $action, $r; $($rest)*);
    };

    ($class:ident, $action:expr, $r:ident; $fmt:ident; $($rest:tt)*) => {
        $r.register_format(stringify!($fmt), ::core::option::Option::None);
        $crate::__response_entries!($class, $action, $r; $($rest)*);
    };
}
