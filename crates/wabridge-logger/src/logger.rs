//! Module-tagged loggers over a shared sink.

use std::fmt;
use std::sync::Arc;

use crate::error::LoggerResult;
use crate::level::Level;
use crate::options::LogOptions;
use crate::sink::LogSink;

/// Logging interface handed to the chat client.
///
/// Messages are passed as [`fmt::Arguments`] so that suppressed debug lines
/// are never formatted:
///
/// ```rust,no_run
/// # use wabridge_logger::Logger;
/// # fn demo(log: &dyn Logger, jid: &str) {
/// log.info(format_args!("connected as {jid}"));
/// # }
/// ```
pub trait Logger: Send + Sync {
    /// Log at error level.
    fn error(&self, args: fmt::Arguments<'_>);

    /// Log at warn level.
    fn warn(&self, args: fmt::Arguments<'_>);

    /// Log at info level.
    fn info(&self, args: fmt::Arguments<'_>);

    /// Log at debug level; only verbose loggers write these.
    fn debug(&self, args: fmt::Arguments<'_>);

    /// Derive a logger for a child module.
    fn sub(&self, module: &str) -> Box<dyn Logger>;
}

/// A logger writing to a [`LogSink`] under a module label.
///
/// Cloning is cheap; clones and sub-loggers share the sink. Closing any of
/// them closes the sink for all.
#[derive(Clone)]
pub struct FileLogger {
    sink: Arc<LogSink>,
    module: String,
    verbose: bool,
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogger")
            .field("module", &self.module)
            .field("verbose", &self.verbose)
            .field("path", &self.sink.path())
            .finish()
    }
}

impl FileLogger {
    /// Open a logger on the process-wide sink.
    ///
    /// # Errors
    ///
    /// See [`LogSink::open`].
    pub fn open(options: &LogOptions) -> LoggerResult<Self> {
        LogSink::global().open(options)
    }

    pub(crate) fn new(sink: Arc<LogSink>, module: String, verbose: bool) -> Self {
        Self {
            sink,
            module,
            verbose,
        }
    }

    /// Close the shared sink.
    ///
    /// # Errors
    ///
    /// See [`LogSink::close`].
    pub fn close(&self) -> LoggerResult<()> {
        self.sink.close()
    }

    /// Derive a logger whose label is `<parent>/<module>`.
    ///
    /// If either label is empty the other is used alone. Verbosity is
    /// inherited.
    #[must_use]
    pub fn sub(&self, module: &str) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            module: join_module(&self.module, module),
            verbose: self.verbose,
        }
    }

    /// Get the module label.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Check whether debug lines are written.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Get the sink this logger writes to.
    #[must_use]
    pub fn sink(&self) -> &Arc<LogSink> {
        &self.sink
    }

    fn output(&self, level: Level, send: bool, args: fmt::Arguments<'_>) {
        if !send {
            return;
        }
        self.sink.emit(level, &self.module, args);
    }
}

impl Logger for FileLogger {
    fn error(&self, args: fmt::Arguments<'_>) {
        self.output(Level::Error, true, args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.output(Level::Warn, true, args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.output(Level::Info, true, args);
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.output(Level::Debug, self.verbose, args);
    }

    fn sub(&self, module: &str) -> Box<dyn Logger> {
        Box::new(FileLogger::sub(self, module))
    }
}

pub(crate) fn join_module(parent: &str, child: &str) -> String {
    match (parent.is_empty(), child.is_empty()) {
        (true, _) => child.to_string(),
        (false, true) => parent.to_string(),
        (false, false) => format!("{parent}/{child}"),
    }
}
