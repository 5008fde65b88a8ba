//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! shared by the scoring and planning modules.

mod dependency_points;
mod errors;
mod timestamp;

pub use dependency_points::DependencyPoints;
pub use errors::ValidationError;
pub use timestamp::Timestamp;
