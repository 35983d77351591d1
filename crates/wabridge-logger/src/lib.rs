//! Wabridge Logger - Rotation-tolerant file logging for chat client hosts.
//!
//! This crate provides:
//! - A single process-wide log file shared by any number of loggers
//! - Module-tagged sub-loggers (`Client/Socket`, `Client/Database`, ...)
//! - Atomic lines under concurrent writers
//! - Transparent recreation of the log file after external rotation
//! - A `tracing` layer writing into the same file
//!
//! Lines look like `15:04:05.000 [Client/Socket INFO] connected`.
//!
//! # Example
//!
//! ```rust,no_run
//! use wabridge_logger::{FileLogger, LogOptions, Logger};
//!
//! # fn main() -> wabridge_logger::LoggerResult<()> {
//! let log = FileLogger::open(&LogOptions::new("/tmp/client.log").with_module("Client"))?;
//!
//! let socket = log.sub("Socket");
//! socket.info(format_args!("connected to {}", "web.whatsapp.com"));
//! socket.debug(format_args!("not written unless verbose"));
//!
//! log.close()?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod layer;
mod level;
mod logger;
mod options;
mod sink;

pub use error::{LoggerError, LoggerResult};
pub use layer::FileLayer;
pub use level::Level;
pub use logger::{FileLogger, Logger};
pub use options::{FailurePolicy, LogOptions};
pub use sink::LogSink;
