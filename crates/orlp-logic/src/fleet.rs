//! Fleet sizing — how many recyclers a debris field gets and how the energy
//! budget is split between them.

use crate::constants::fleet::{DEBRIS_PER_RECYCLER, MAX_RECYCLERS};

/// Number of recyclers deployed for `debris_count` debris items.
///
/// One recycler per started block of 50 debris, capped at 3. An empty field
/// gets no recyclers.
pub fn recycler_count(debris_count: u32) -> u32 {
    debris_count.div_ceil(DEBRIS_PER_RECYCLER).min(MAX_RECYCLERS)
}

/// Starting energy of each recycler: an equal share of the budget.
pub fn energy_share(energy_budget: f64, recyclers: u32) -> f64 {
    if recyclers == 0 {
        return 0.0;
    }
    energy_budget / recyclers as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recycler_count_caps_at_three() {
        assert_eq!(recycler_count(150), 3);
        assert_eq!(recycler_count(151), 3);
        assert_eq!(recycler_count(10_000), 3);
    }

    #[test]
    fn test_recycler_count_rounds_up() {
        assert_eq!(recycler_count(1), 1);
        assert_eq!(recycler_count(10), 1);
        assert_eq!(recycler_count(50), 1);
        assert_eq!(recycler_count(51), 2);
        assert_eq!(recycler_count(100), 2);
    }

    #[test]
    fn test_empty_field_has_no_recyclers() {
        assert_eq!(recycler_count(0), 0);
        assert_eq!(energy_share(500.0, 0), 0.0);
    }

    #[test]
    fn test_energy_share_is_equal() {
        let share = energy_share(500.0, 3);
        assert!((share * 3.0 - 500.0).abs() < 1e-9);
        assert_eq!(energy_share(500.0, 1), 500.0);
    }
}
