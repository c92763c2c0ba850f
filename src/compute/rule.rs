//! Conway's B3/S23 transition rule.

/// Next state of a cell given its current state and live-neighbor count.
///
/// - Alive cells survive with 2 or 3 live neighbors, otherwise die.
/// - Dead cells are born with exactly 3 live neighbors, otherwise stay dead.
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rule_table() {
        // (alive, neighbors) -> next, for all 18 combinations.
        let expected_alive = [false, false, true, true, false, false, false, false, false];
        let expected_dead = [false, false, false, true, false, false, false, false, false];

        for n in 0..=8u8 {
            assert_eq!(
                next_state(true, n),
                expected_alive[n as usize],
                "alive with {} neighbors",
                n
            );
            assert_eq!(
                next_state(false, n),
                expected_dead[n as usize],
                "dead with {} neighbors",
                n
            );
        }
    }

    #[test]
    fn test_documented_cases() {
        assert!(!next_state(true, 1));
        assert!(next_state(false, 3));
        assert!(!next_state(true, 4));
    }

    proptest! {
        #[test]
        fn prop_birth_implies_three(n in 0u8..=8) {
            if next_state(false, n) {
                prop_assert_eq!(n, 3);
            }
        }
    }
}
