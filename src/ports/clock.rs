//! Clock port - Interface for reading the current time.
//!
//! Badge assignment is the only step of plan generation that depends on
//! the time of the call. Reading it through this port keeps the rest of the
//! pipeline reproducible.

use crate::domain::foundation::Timestamp;

/// Port for obtaining the current time.
pub trait Clock: Send + Sync {
    /// The current moment.
    fn now(&self) -> Timestamp;
}
