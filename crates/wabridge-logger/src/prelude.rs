//! Prelude module - commonly used types for convenient import.
//!
//! Use `use wabridge_logger::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust,no_run
//! use wabridge_logger::prelude::*;
//!
//! # fn main() -> LoggerResult<()> {
//! let log = FileLogger::open(&LogOptions::new("/tmp/client.log").with_module("Main"))?;
//! log.sub("Store").warn(format_args!("cache miss"));
//! # Ok(())
//! # }
//! ```

// Errors
pub use crate::{LoggerError, LoggerResult};

// Configuration
pub use crate::{FailurePolicy, LogOptions};

// Loggers
pub use crate::{FileLayer, FileLogger, Level, LogSink, Logger};
