//! Event notifications.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: Something that happened (infection, outbreak, draw, ...)
//! - [`EventQueue`]: Single ordered channel, plus the terminal outcome
//! - [`ListenerRegistry`]: Callbacks receiving events in registration order
//!
//! Engine operations push into an `EventQueue` they are lent; the match
//! controller drains it at the end of each operation and hands the batch to
//! its listeners.

mod event;
mod listener;
mod queue;

pub use event::GameEvent;
pub use listener::{Listener, ListenerId, ListenerRegistry};
pub use queue::EventQueue;
