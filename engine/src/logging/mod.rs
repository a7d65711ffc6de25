//! Logging plumbing.
//!
//! The harness never writes to the terminal while a tick is being timed. Records go
//! through the `log` facade into a channel and are drained by the front end between
//! experiments.

pub mod channel;

pub use channel::{ChannelLogger, LogMessage};
