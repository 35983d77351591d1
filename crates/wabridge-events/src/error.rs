//! Dispatch error types.

use std::fmt;

use thiserror::Error;

use crate::event_type::EventType;

/// Failure returned by an event handler.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result returned by an event handler.
pub type HandlerResult = Result<(), HandlerError>;

/// Errors returned by [`HandlerRegistry::dispatch`](crate::HandlerRegistry::dispatch).
///
/// Callers usually treat [`DispatchError::NoHandlerFound`] as informational,
/// [`DispatchError::HandlerFailed`] as a real failure and
/// [`DispatchError::UnknownEvent`] as a sign that the catalogue is out of
/// sync with the client.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No handler is registered for the event's type.
    #[error("no handler for event {event_type} (payload: {payload})")]
    NoHandlerFound {
        /// Type of the undelivered event.
        event_type: EventType,
        /// Rendering of the undelivered payload.
        payload: String,
    },

    /// A handler returned a failure; later handlers were not invoked.
    #[error("handler {handler} failed on {event_type} event: {source}")]
    HandlerFailed {
        /// Type of the event being handled.
        event_type: EventType,
        /// Name of the failing handler.
        handler: String,
        /// The handler's own failure.
        #[source]
        source: HandlerError,
    },

    /// The payload is not a known client event.
    #[error("unknown event {payload}, can't dispatch")]
    UnknownEvent {
        /// Rendering of the offending payload.
        payload: String,
    },
}

impl DispatchError {
    /// Get the kind of this error.
    #[must_use]
    pub fn kind(&self) -> DispatchErrorKind {
        match self {
            Self::NoHandlerFound { .. } => DispatchErrorKind::NoHandlerFound,
            Self::HandlerFailed { .. } => DispatchErrorKind::HandlerFailed,
            Self::UnknownEvent { .. } => DispatchErrorKind::UnknownEvent,
        }
    }

    /// Check whether the error only reports a missing handler.
    #[must_use]
    pub fn is_no_handler(&self) -> bool {
        matches!(self, Self::NoHandlerFound { .. })
    }

    /// Get the handler's failure, if a handler failed.
    #[must_use]
    pub fn handler_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::HandlerFailed { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Kind of a [`DispatchError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchErrorKind {
    /// See [`DispatchError::NoHandlerFound`].
    NoHandlerFound,
    /// See [`DispatchError::HandlerFailed`].
    HandlerFailed,
    /// See [`DispatchError::UnknownEvent`].
    UnknownEvent,
}

impl DispatchErrorKind {
    /// Every error kind.
    pub const ALL: [DispatchErrorKind; 3] =
        [Self::NoHandlerFound, Self::HandlerFailed, Self::UnknownEvent];

    /// Get the display name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoHandlerFound => "NoHandlerFound",
            Self::HandlerFailed => "HandlerFailed",
            Self::UnknownEvent => "UnknownEvent",
        }
    }
}

impl fmt::Display for DispatchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A handler panicked while handling an event.
#[derive(Debug, Error)]
#[error("handler panicked: {message}")]
pub struct HandlerPanic {
    /// The panic message, when it was a string.
    pub message: String,
}

/// A numeric tag or name that does not identify an event type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event type: {0}")]
pub struct UnknownEventType(pub String);
