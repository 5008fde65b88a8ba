//! Quit Plan - Deterministic quit-plan engine
//!
//! Turns a user's intake survey answers into a relapse-risk assessment, a
//! behavioral dependency score, an identity badge, and a personalized action
//! plan. Scoring and planning are pure; the only time-dependent step (badge
//! stamping) reads the injected [`ports::Clock`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
