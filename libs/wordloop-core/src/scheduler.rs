//! Long-term review interval scheduling.
//!
//! Classic expanding-interval progression keyed by the consecutive-correct
//! streak, with a doubling fallback once the table runs out.

use crate::error::{Result, SessionError};

/// Review intervals in days, indexed by streak (1-based).
const INTERVALS: [u32; 7] = [1, 2, 4, 7, 15, 30, 60];

/// Minimum interval once the streak is past the table.
const LONG_TENURE_FLOOR_DAYS: u32 = 90;

/// Next review interval in days for an item whose streak just reached
/// `consecutive_correct`.
///
/// Streaks 1 through 7 come straight from the table. Past that, the interval
/// doubles from `current_interval_days` with a 90-day floor. A streak of
/// zero is rejected: completion increments the streak before scheduling.
pub fn review_interval(consecutive_correct: u32, current_interval_days: u32) -> Result<u32> {
    match consecutive_correct {
        0 => Err(SessionError::ZeroStreak),
        n @ 1..=7 => Ok(INTERVALS[n as usize - 1]),
        _ => Ok((current_interval_days * 2).max(LONG_TENURE_FLOOR_DAYS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        for (streak, days) in [(1, 1), (2, 2), (3, 4), (4, 7), (5, 15), (6, 30), (7, 60)] {
            assert_eq!(review_interval(streak, 1).unwrap(), days);
        }
    }

    #[test]
    fn table_ignores_current_interval() {
        assert_eq!(review_interval(3, 500).unwrap(), 4);
    }

    #[test]
    fn past_table_doubles_with_floor() {
        // 2 * 10 = 20 is under the 90-day floor
        assert_eq!(review_interval(8, 10).unwrap(), 90);
        // 2 * 100 = 200 clears it
        assert_eq!(review_interval(8, 100).unwrap(), 200);
        assert_eq!(review_interval(12, 45).unwrap(), 90);
    }

    #[test]
    fn zero_streak_is_rejected() {
        assert!(matches!(
            review_interval(0, 1),
            Err(SessionError::ZeroStreak)
        ));
    }

    #[test]
    fn same_input_same_output() {
        assert_eq!(
            review_interval(5, 7).unwrap(),
            review_interval(5, 7).unwrap()
        );
    }
}
