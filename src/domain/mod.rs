//! Domain layer containing the scoring and planning rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects and errors
//! - `intake` - Survey answer vocabulary and the `ResponseRecord`
//! - `assessment` - Risk scoring, dependency scoring, badge assignment
//! - `plan` - Personalized plan builders and their synthesizer
//!
//! Nothing in this layer performs I/O or reads the clock.

pub mod assessment;
pub mod foundation;
pub mod intake;
pub mod plan;
