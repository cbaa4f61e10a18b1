//! # Built-in observers
//!
//! Small, self-contained observers useful for demos and debugging.
//!
//! - [`LogWriter`]: records every pushed email through `tracing`.

mod log;

pub use log::LogWriter;
