//! Event handler trait.

use crate::error::HandlerResult;
use crate::event::Event;

/// Caller-supplied logic bound to an event type.
///
/// Handlers run synchronously on the dispatching thread, in registration
/// order. Returning an error stops the chain for that event.
pub trait EventHandler: Send + Sync {
    /// Handle one event.
    ///
    /// The event is the one given to the dispatcher, unchanged. A handler
    /// registered for [`EventType::Message`](crate::EventType::Message) can
    /// rely on receiving [`Event::Message`].
    ///
    /// # Errors
    ///
    /// Any failure; it is wrapped in
    /// [`DispatchError::HandlerFailed`](crate::DispatchError::HandlerFailed).
    fn handle(&self, event: &Event) -> HandlerResult;

    /// Optional name for debugging.
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "anonymous"
    }
}

/// A closure-based handler.
pub struct FnHandler<F>
where
    F: Fn(&Event) -> HandlerResult + Send + Sync,
{
    name: String,
    handler: F,
}

impl<F> FnHandler<F>
where
    F: Fn(&Event) -> HandlerResult + Send + Sync,
{
    /// Create a new closure handler.
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }
}

impl<F> EventHandler for FnHandler<F>
where
    F: Fn(&Event) -> HandlerResult + Send + Sync,
{
    fn handle(&self, event: &Event) -> HandlerResult {
        (self.handler)(event)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for FnHandler<F>
where
    F: Fn(&Event) -> HandlerResult + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload;

    struct Unnamed;

    impl EventHandler for Unnamed {
        fn handle(&self, _event: &Event) -> HandlerResult {
            Ok(())
        }
    }

    #[test]
    fn test_default_name() {
        assert_eq!(Unnamed.name(), "anonymous");
    }

    #[test]
    fn test_fn_handler() {
        let handler = FnHandler::new("reject_disconnect", |event| match event {
            Event::Disconnected(_) => Err("unexpected disconnect".into()),
            _ => Ok(()),
        });

        assert_eq!(handler.name(), "reject_disconnect");
        assert!(handler.handle(&Event::Connected(payload::Connected {})).is_ok());

        let err = handler
            .handle(&Event::Disconnected(payload::Disconnected {}))
            .unwrap_err();
        assert_eq!(err.to_string(), "unexpected disconnect");
    }
}
