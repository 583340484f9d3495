//! Data structures and request/response models.

pub mod api;
pub mod event;
pub mod payment;
pub mod task;

pub use api::*;
pub use event::*;
pub use payment::*;
pub use task::*;
