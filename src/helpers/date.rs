//! Date helper functions

use chrono::{Datelike, Local};

/// Source of the current year for the page footer
pub trait Clock {
    fn year(&self) -> i32;
}

/// Reads the local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(2020).year(), 2020);
    }

    #[test]
    fn test_system_clock_matches_chrono() {
        let before = Local::now().year();
        let year = SystemClock.year();
        let after = Local::now().year();
        assert!(year == before || year == after);
    }
}
