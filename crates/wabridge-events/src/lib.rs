//! Wabridge Events - Typed event registry and dispatcher for chat clients.
//!
//! This crate provides:
//! - The closed catalogue of client events ([`EventType`], [`Event`] and the
//!   [`payload`] records)
//! - A handler registry keyed by event type
//! - Synchronous, ordered dispatch with a precise error taxonomy
//!
//! # Architecture
//!
//! The chat client decodes protocol frames into event records and hands each
//! one to the dispatcher. The dispatcher maps the record to its
//! [`EventType`], looks up the handlers registered for that type and invokes
//! them in registration order. The first failing handler stops the chain.
//!
//! # Example
//!
//! ```rust
//! use wabridge_events::{Event, EventType, HandlerRegistry, payload};
//!
//! let registry = HandlerRegistry::new();
//!
//! registry.register_fn(EventType::Message, "echo", |event| {
//!     if let Event::Message(msg) = event {
//!         assert_eq!(msg.text.as_deref(), Some("hello"));
//!     }
//!     Ok(())
//! });
//!
//! // Records coming straight from the client are converted on the way in.
//! registry
//!     .dispatch_any(payload::Message {
//!         text: Some("hello".to_string()),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! // Nothing listens for receipts yet.
//! let err = registry.dispatch_any(payload::Receipt::default()).unwrap_err();
//! assert!(err.is_no_handler());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod payload;
pub mod prelude;

mod error;
mod event;
mod event_type;
mod handler;
mod registry;

pub use error::{
    DispatchError, DispatchErrorKind, HandlerError, HandlerPanic, HandlerResult, UnknownEventType,
};
pub use event::Event;
pub use event_type::EventType;
pub use handler::{EventHandler, FnHandler};
pub use registry::{HandlerRegistry, dispatch, dispatch_any, register, register_fn};
