//! Webhook authentication protocol.
//!
//! This module is the security boundary of the crate: it decides whether an
//! inbound HTTP callback was produced by a holder of the shared secret,
//! recently, over exactly the bytes that arrived on the wire.

pub mod verify;

pub use verify::*;
