//! Handler registry and dispatcher.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use tracing::{debug, trace};

use crate::error::{DispatchError, HandlerPanic, HandlerResult};
use crate::event::Event;
use crate::event_type::EventType;
use crate::handler::{EventHandler, FnHandler};

static GLOBAL: LazyLock<HandlerRegistry> = LazyLock::new(HandlerRegistry::new);

/// Ordered handlers per event type.
///
/// Handlers for one type run in the order they were registered. The same
/// handler may be registered more than once. There is no way to remove a
/// handler once registered.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: RwLock<HashMap<EventType, Vec<Arc<dyn EventHandler>>>>,
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}

impl HandlerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Get the process-wide registry.
    #[must_use]
    pub fn global() -> &'static HandlerRegistry {
        &GLOBAL
    }

    /// Append a handler to the list for `event_type`.
    pub fn register(&self, event_type: EventType, handler: Arc<dyn EventHandler>) {
        let name = handler.name().to_string();

        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let list = handlers.entry(event_type).or_default();
        list.push(handler);
        let position = list.len();
        drop(handlers);

        debug!(
            event_type = %event_type,
            handler_name = %name,
            position,
            "Handler registered"
        );
    }

    /// Register a closure as a handler for `event_type`.
    pub fn register_fn<F>(&self, event_type: EventType, name: impl Into<String>, handler: F)
    where
        F: Fn(&Event) -> HandlerResult + Send + Sync + 'static,
    {
        self.register(event_type, Arc::new(FnHandler::new(name, handler)));
    }

    /// Invoke the handlers registered for the event's type.
    ///
    /// Handlers run in registration order on the calling thread. The first
    /// failing handler stops the chain. A panicking handler counts as a
    /// failing one.
    ///
    /// The handler list is copied out of the registry before any handler
    /// runs, so handlers may register further handlers; those take effect
    /// from the next dispatch.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::NoHandlerFound`] when nothing is registered for the
    ///   event's type.
    /// - [`DispatchError::HandlerFailed`] when a handler fails.
    pub fn dispatch(&self, event: &Event) -> Result<(), DispatchError> {
        let event_type = event.event_type();

        let Some(handlers) = self.snapshot(event_type) else {
            return Err(DispatchError::NoHandlerFound {
                event_type,
                payload: format!("{event:?}"),
            });
        };

        for handler in &handlers {
            trace!(
                event_type = %event_type,
                handler_name = %handler.name(),
                "Invoking handler"
            );

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler.handle(event)))
                .unwrap_or_else(|payload| {
                    Err(HandlerPanic {
                        message: panic_message(payload.as_ref()),
                    }
                    .into())
                });

            if let Err(source) = outcome {
                return Err(DispatchError::HandlerFailed {
                    event_type,
                    handler: handler.name().to_string(),
                    source,
                });
            }
        }

        trace!(
            event_type = %event_type,
            handler_count = handlers.len(),
            "Event dispatched"
        );
        Ok(())
    }

    /// Convert an opaque client payload and dispatch it.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnknownEvent`] when `payload` is not one of the
    /// [`payload`](crate::payload) records, otherwise as for
    /// [`dispatch`](Self::dispatch).
    pub fn dispatch_any<T>(&self, payload: T) -> Result<(), DispatchError>
    where
        T: Any + Send + fmt::Debug,
    {
        match Event::from_any(Box::new(payload)) {
            Ok(event) => self.dispatch(&event),
            Err(raw) => Err(DispatchError::UnknownEvent {
                payload: describe::<T>(raw),
            }),
        }
    }

    /// Dispatch a payload whose concrete type is only known at runtime.
    ///
    /// A boxed payload carries no type name, so an unknown one is reported
    /// by its [`TypeId`](std::any::TypeId) only. Prefer
    /// [`dispatch_any`](Self::dispatch_any) whenever the static type is
    /// available; its error names the type and shows the payload.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnknownEvent`] when `payload` is not one of the
    /// [`payload`](crate::payload) records, otherwise as for
    /// [`dispatch`](Self::dispatch).
    pub fn dispatch_boxed(&self, payload: Box<dyn Any + Send>) -> Result<(), DispatchError> {
        match Event::from_any(payload) {
            Ok(event) => self.dispatch(&event),
            Err(raw) => Err(DispatchError::UnknownEvent {
                payload: format!(
                    "of type {:?} (not a catalogue record; use dispatch_any to name it)",
                    (*raw).type_id()
                ),
            }),
        }
    }

    /// Get the number of handlers registered for `event_type`.
    #[must_use]
    pub fn handler_count(&self, event_type: EventType) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&event_type)
            .map_or(0, Vec::len)
    }

    /// Get the event types that have at least one handler, in catalogue order.
    #[must_use]
    pub fn registered_types(&self) -> Vec<EventType> {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let mut types: Vec<EventType> = handlers.keys().copied().collect();
        types.sort_unstable();
        types
    }

    /// Get the total number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(Vec::len)
            .sum()
    }

    /// Check if no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    fn snapshot(&self, event_type: EventType) -> Option<Vec<Arc<dyn EventHandler>>> {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        handlers.get(&event_type).filter(|l| !l.is_empty()).cloned()
    }
}

fn describe<T: Any + fmt::Debug>(raw: Box<dyn Any + Send>) -> String {
    match raw.downcast::<T>() {
        Ok(payload) => format!("{} {payload:?}", type_name::<T>()),
        Err(_) => type_name::<T>().to_string(),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Register a handler on the process-wide registry.
pub fn register(event_type: EventType, handler: Arc<dyn EventHandler>) {
    HandlerRegistry::global().register(event_type, handler);
}

/// Register a closure on the process-wide registry.
pub fn register_fn<F>(event_type: EventType, name: impl Into<String>, handler: F)
where
    F: Fn(&Event) -> HandlerResult + Send + Sync + 'static,
{
    HandlerRegistry::global().register_fn(event_type, name, handler);
}

/// Dispatch an event through the process-wide registry.
///
/// # Errors
///
/// See [`HandlerRegistry::dispatch`].
pub fn dispatch(event: &Event) -> Result<(), DispatchError> {
    HandlerRegistry::global().dispatch(event)
}

/// Convert and dispatch an opaque payload through the process-wide registry.
///
/// # Errors
///
/// See [`HandlerRegistry::dispatch_any`].
pub fn dispatch_any<T>(payload: T) -> Result<(), DispatchError>
where
    T: Any + Send + fmt::Debug,
{
    HandlerRegistry::global().dispatch_any(payload)
}
