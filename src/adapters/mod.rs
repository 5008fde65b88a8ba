//! Adapters - Implementations of port interfaces and edge readers.
//!
//! - `clock` - System and fixed clocks
//! - `intake` - JSON intake reader

pub mod clock;
pub mod intake;

pub use clock::{FixedClock, SystemClock};
pub use intake::{IntakeError, JsonIntakeReader};
