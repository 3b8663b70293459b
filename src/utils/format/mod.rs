// Display formatting for countdown unit values

/// Renders a unit value as a two-digit, zero-padded decimal string. Values of
/// 100 or more keep their natural digit count.
pub fn format_unit(value: u64) -> String {
    format!("{value:02}")
}

#[cfg(test)]
mod tests {
    use super::format_unit;
    use test_case::test_case;

    #[test_case(0, "00")]
    #[test_case(7, "07")]
    #[test_case(41, "41")]
    #[test_case(99, "99")]
    #[test_case(100, "100")]
    #[test_case(123, "123")]
    fn pads_to_two_digits(value: u64, expected: &str) {
        assert_eq!(format_unit(value), expected);
    }
}
