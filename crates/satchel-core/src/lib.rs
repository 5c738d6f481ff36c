//! # satchel-core
//!
//! Foundation crate for the satchel context-budgeting system.
//! Defines the entity model, errors, result models, and constants.
//! Every other crate in the workspace depends on this.

pub mod constants;
pub mod entity;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use entity::Entity;
pub use errors::{ConfigError, InputError, SatchelError, SatchelResult};
pub use models::{FitResult, MultiFitResult, RejectReason, RejectedEntity, SourceAllocation};
