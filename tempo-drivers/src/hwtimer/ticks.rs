//! Modulo-2^32 tick arithmetic

/// Load value for free-running monotone counting: the full 32-bit range.
pub(crate) const FREE_RUN_LOAD: u32 = u32::MAX;

/// Forward distance from `from` to `to` on the modulo-2^32 circle.
///
/// Monotone remaining-time is measured this way: the counter counts up
/// toward the match value and may wrap before reaching it, so the distance
/// is always taken in the counting direction.
pub(crate) fn wrap_distance(from: u32, to: u32) -> u32 {
    to.wrapping_sub(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_without_wrap() {
        assert_eq!(wrap_distance(10, 42), 32);
    }

    #[test]
    fn distance_across_the_wrap() {
        // Counter just below the wrap point, match just past it.
        assert_eq!(wrap_distance(0xFFFF_FFF0, 0x0000_0010), 0x20);
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(wrap_distance(0xDEAD_BEEF, 0xDEAD_BEEF), 0);
    }

    proptest! {
        #[test]
        fn distance_inverts_any_offset(start in any::<u32>(), offset in any::<u32>()) {
            prop_assert_eq!(wrap_distance(start, start.wrapping_add(offset)), offset);
        }
    }
}
