//! Configuration structures and loading utilities.
//!
//! This module contains all configuration structures used by the crate,
//! including environment variable loading and default values.

pub mod endpoints;
pub mod payments;
pub mod signer;
pub mod tasks;
pub mod webhook;

pub use endpoints::*;
pub use payments::*;
pub use signer::*;
pub use tasks::*;
pub use webhook::*;
