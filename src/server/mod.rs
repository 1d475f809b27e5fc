//! Control server lifecycle: listener, accept loop, connection table.

pub mod listener;

pub use listener::{ControlServer, ServerError};
