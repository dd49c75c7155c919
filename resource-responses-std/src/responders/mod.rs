//! Standard responders.

pub mod logging;
pub mod negotiate;

pub use logging::LoggingResponder;
pub use negotiate::{Negotiator, Selection};
