use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `dp` fractional digits, sending exact midpoints to the
/// even neighbour (22.125 -> 22.12, 22.135 -> 22.14).
pub fn round_half_even(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_midpoints_go_to_even_digit() {
        assert_eq!(round_half_even(dec!(22.125), 2), dec!(22.12));
        assert_eq!(round_half_even(dec!(22.135), 2), dec!(22.14));
        assert_eq!(round_half_even(dec!(-22.125), 2), dec!(-22.12));
    }

    #[test]
    fn test_non_midpoints_round_to_nearest() {
        assert_eq!(round_half_even(dec!(22.126), 2), dec!(22.13));
        assert_eq!(round_half_even(dec!(22.124), 2), dec!(22.12));
        assert_eq!(round_half_even(dec!(7), 2), dec!(7));
    }
}
