//! Business logic and service layer modules.
//!
//! This module contains the clients and helpers around the verification
//! core: the broker client, the Lightning settlement client, the hardware
//! signing bridge, the reward calculator, and metrics collection.

pub mod auth;
pub mod metrics;
pub mod payments;
pub mod rewards;
pub mod signer;
pub mod tasks;

pub use auth::*;
pub use metrics::*;
pub use payments::*;
pub use rewards::*;
pub use signer::*;
pub use tasks::*;
