//! Intake adapters - read collected survey answers into a `ResponseRecord`.

mod json_reader;

pub use json_reader::{IntakeError, JsonIntakeReader};
