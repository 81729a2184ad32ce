//! Common infrastructure shared by the eckit crates
//!
//! Currently this is the logging bootstrap and the helpers that keep key
//! material out of log output.

pub mod logging;

pub use logging::LoggingTransformer;
