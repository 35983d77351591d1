//! `tracing` integration.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::level::Level;
use crate::logger::{FileLogger, join_module};
use crate::sink::LogSink;

/// A [`Layer`] that writes `tracing` events into a [`LogSink`].
///
/// Each event becomes one line in the usual format. The event target is
/// appended to the logger's module label, `TRACE` and `DEBUG` are written as
/// `DEBUG` (only when the logger is verbose), and fields other than the
/// message follow it as `key=value`.
///
/// ```rust,no_run
/// use tracing_subscriber::layer::SubscriberExt;
/// use tracing_subscriber::util::SubscriberInitExt;
/// use wabridge_logger::{FileLayer, FileLogger, LogOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let log = FileLogger::open(&LogOptions::new("client.log").with_module("Main"))?;
/// tracing_subscriber::registry()
///     .with(FileLayer::new(&log))
///     .try_init()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileLayer {
    sink: Arc<LogSink>,
    module: String,
    verbose: bool,
}

impl FileLayer {
    /// Create a layer writing through `logger`'s sink, label and verbosity.
    #[must_use]
    pub fn new(logger: &FileLogger) -> Self {
        Self {
            sink: Arc::clone(logger.sink()),
            module: logger.module().to_string(),
            verbose: logger.is_verbose(),
        }
    }
}

impl<S> Layer<S> for FileLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Level::from(*metadata.level());
        if level == Level::Debug && !self.verbose {
            return;
        }

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let module = join_module(&self.module, metadata.target());
        self.sink.emit(
            level,
            &module,
            format_args!("{}{}", visitor.message, visitor.fields),
        );
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}
