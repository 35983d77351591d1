//! Prelude module - commonly used types for convenient import.
//!
//! Use `use wabridge_events::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust
//! use wabridge_events::prelude::*;
//!
//! let registry = HandlerRegistry::new();
//! registry.register_fn(EventType::Connected, "online", |_| Ok(()));
//!
//! registry
//!     .dispatch(&Event::Connected(wabridge_events::payload::Connected {}))
//!     .unwrap();
//! ```

// Event catalogue
pub use crate::{Event, EventType};

// Handlers
pub use crate::{EventHandler, FnHandler, HandlerError, HandlerResult};

// Registry
pub use crate::{DispatchError, DispatchErrorKind, HandlerRegistry};
