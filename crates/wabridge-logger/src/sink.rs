//! The shared log stream.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use chrono::{Local, NaiveTime};

use crate::error::{LoggerError, LoggerResult};
use crate::level::Level;
use crate::logger::FileLogger;
use crate::options::{FailurePolicy, LogOptions};

static GLOBAL: LazyLock<Arc<LogSink>> = LazyLock::new(LogSink::new);

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

#[derive(Debug, Default)]
struct SinkState {
    file: Option<File>,
    /// Kept after `close` so a later write can reopen the same file.
    path: Option<PathBuf>,
    /// Set only by `open`. A write after `close` restores `file` but leaves
    /// this clear, so the single-file check stays released.
    open: bool,
    on_failure: FailurePolicy,
}

/// One output file shared by any number of [`FileLogger`]s.
///
/// A sink holds at most one active file. Every line is formatted and written
/// under a single lock, so concurrent writers never interleave. Before each
/// write the sink checks that the file still exists on disk; if an external
/// process removed or renamed it, the file is recreated and the line goes to
/// the new file.
///
/// [`LogSink::global`] is the process-wide sink used by
/// [`FileLogger::open`]. Separate sinks can be built with [`LogSink::new`].
#[derive(Debug, Default)]
pub struct LogSink {
    state: Mutex<SinkState>,
}

impl LogSink {
    /// Create an empty, unopened sink.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Get the process-wide sink.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Open the sink's file and return a logger writing to it.
    ///
    /// The first call creates the file, truncating it unless
    /// [`LogOptions::append`] is set. Later calls naming the same file share
    /// the open stream; their module label and verbosity apply only to the
    /// returned logger. The failure policy is fixed by the call that opens
    /// the file. On a closed sink, a stream reopened by a late write is
    /// replaced.
    ///
    /// # Errors
    ///
    /// - [`LoggerError::AlreadyOpen`] if a different file is open. The open
    ///   file is left untouched.
    /// - [`LoggerError::MissingFilename`] if no filename is set.
    /// - [`LoggerError::Io`] if the file cannot be created.
    pub fn open(self: &Arc<Self>, options: &LogOptions) -> LoggerResult<FileLogger> {
        if options.filename.as_os_str().is_empty() {
            return Err(LoggerError::MissingFilename);
        }

        let mut state = self.lock();
        if state.open {
            if let Some(active) = state.path.as_deref()
                && active != options.filename
            {
                return Err(LoggerError::AlreadyOpen {
                    requested: options.filename.clone(),
                    active: active.to_path_buf(),
                });
            }
        } else {
            let file = create(&options.filename, options.append)?;
            state.file = Some(file);
            state.path = Some(options.filename.clone());
            state.open = true;
            state.on_failure = options.on_failure;
        }
        drop(state);

        Ok(FileLogger::new(
            Arc::clone(self),
            options.module.clone(),
            options.verbose,
        ))
    }

    /// Close the file.
    ///
    /// Affects every logger sharing this sink. A later write reopens the
    /// same file in append mode without marking the sink open again, so a
    /// later [`open`](Self::open) may still name a different file.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the file to disk fails.
    pub fn close(&self) -> LoggerResult<()> {
        let mut state = self.lock();
        state.open = false;
        match state.file.take() {
            Some(file) => file.sync_all().map_err(LoggerError::from),
            None => Ok(()),
        }
    }

    /// Check whether the sink is open, i.e. [`open`](Self::open) succeeded
    /// and [`close`](Self::close) has not been called since.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lock().open
    }

    /// Get the path of the current (or most recently closed) file.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.lock().path.clone()
    }

    /// Write one line.
    ///
    /// Does nothing if the sink was never opened. If the file is gone or the
    /// sink was closed, the file is reopened first; the open flag is left
    /// as it is. When the reopen or the write fails the sink's
    /// [`FailurePolicy`] applies.
    pub(crate) fn emit(&self, level: Level, module: &str, args: fmt::Arguments<'_>) {
        let mut state = self.lock();
        let SinkState {
            file,
            path,
            on_failure,
            ..
        } = &mut *state;

        let Some(path) = path.as_deref() else {
            return;
        };

        if file.is_none() || fs::metadata(path).is_err() {
            match reopen(path) {
                Ok(reopened) => *file = Some(reopened),
                Err(err) => {
                    fail(*on_failure, path, "reopen", &err);
                    return;
                },
            }
        }

        let line = format_line(Local::now().time(), module, level, args);
        if let Some(file) = file.as_mut()
            && let Err(err) = file.write_all(line.as_bytes())
        {
            fail(*on_failure, path, "write", &err);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Render one log line, newline included.
///
/// `HH:MM:SS.mmm [<module> <LEVEL>] <message>`
pub(crate) fn format_line(
    time: NaiveTime,
    module: &str,
    level: Level,
    args: fmt::Arguments<'_>,
) -> String {
    format!("{} [{module} {level}] {args}\n", time.format(TIME_FORMAT))
}

fn create(path: &Path, append: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options.open(path)
}

fn reopen(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn fail(policy: FailurePolicy, path: &Path, action: &str, err: &io::Error) {
    match policy {
        FailurePolicy::Abort => {
            eprintln!(
                "wabridge-logger: cannot {action} log file {}: {err}",
                path.display()
            );
            std::process::abort();
        },
        FailurePolicy::Discard => {},
    }
}
