//! Assessment Module - Pure scoring services over intake answers.
//!
//! # Components
//!
//! - `RiskScorer` - Additive relapse-risk points, three tiers (low/medium/high)
//! - `DependencyScorer` - 0-100 dependency score from five capped components
//! - `BadgeAssigner` - Identity badge from the primary motivation
//!
//! The risk and dependency scorers read overlapping questions against
//! different vocabularies and weights. They are kept apart and their results
//! are never reconciled.

mod badge;
mod dependency_scorer;
mod risk_scorer;

pub use badge::{BadgeAssigner, BadgeType, UserBadge};
pub use dependency_scorer::{
    DependencyBreakdown, DependencyRiskLevel, DependencyScore, DependencyScorer, MorningUseWindow,
    UsageFrequency,
};
pub use risk_scorer::{
    FirstUseWindow, RiskAssessment, RiskLevel, RiskScorer, HIGH_RISK_THRESHOLD,
    MEDIUM_RISK_THRESHOLD,
};
