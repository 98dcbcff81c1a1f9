//! Score accrual rules

use crate::consts::{PASS_BONUS, SPEED_SCORE_DIVISOR};

/// Points for one tick of driving: `floor(speed / 10)` moving forward, nothing otherwise
#[inline]
pub fn speed_points(speed: f32) -> u64 {
    if speed > 0.0 {
        (speed / SPEED_SCORE_DIVISOR).floor() as u64
    } else {
        0
    }
}

/// Points for traffic culled at its far edge
#[inline]
pub fn pass_points(culled: u32) -> u64 {
    culled as u64 * PASS_BONUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_points() {
        assert_eq!(speed_points(0.0), 0);
        assert_eq!(speed_points(-15.0), 0);
        assert_eq!(speed_points(9.99), 0);
        assert_eq!(speed_points(10.0), 1);
        assert_eq!(speed_points(20.0), 2);
        assert_eq!(speed_points(25.0), 2);
    }

    #[test]
    fn test_pass_points() {
        assert_eq!(pass_points(0), 0);
        assert_eq!(pass_points(3), 30);
    }
}
