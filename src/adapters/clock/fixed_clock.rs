//! Clock that always reports the same instant.
//!
//! Used in tests and when replaying a stored intake so that the resulting
//! badge is byte-for-byte reproducible.

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: Timestamp,
}

impl FixedClock {
    pub fn new(instant: Timestamp) -> Self {
        Self { instant }
    }

    /// Fixed clock at the given Unix time.
    pub fn at_unix_secs(secs: i64) -> Self {
        Self::new(Timestamp::from_unix_secs(secs))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.instant
    }
}
