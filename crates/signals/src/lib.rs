//! Publish/subscribe signal hub for editor components.
//!
//! Named channels carry a single payload type `P`. Listeners register with a
//! priority and an optional receiver context, and are invoked synchronously
//! in priority order when a channel is dispatched. The hub is re-entrant:
//! listeners may register, remove, halt or dispatch on the channel that is
//! currently firing.

mod hub;

pub use hub::{Context, Listener, Signal, SignalHub};
