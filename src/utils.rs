use crate::config::SECONDS_PER_MINUTE;
use once_cell::sync::Lazy;
use regex::Regex;

// Leading run of digits, optionally preceded by whitespace
static LEADING_DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)").unwrap());

/// Coerce raw field text into a non-negative whole number.
///
/// Takes the leading digits of the input and ignores whatever follows.
/// Empty, non-numeric and negative input all become `0`; values that do not
/// fit a `u32` saturate instead of failing.
///
/// # Examples
/// ```
/// use countdown_timer::utils::coerce_field_input;
/// assert_eq!(coerce_field_input("12"), 12);
/// assert_eq!(coerce_field_input("5abc"), 5);
/// assert_eq!(coerce_field_input(""), 0);
/// assert_eq!(coerce_field_input("-3"), 0);
/// ```
pub fn coerce_field_input(input: &str) -> u32 {
    let Some(captures) = LEADING_DIGITS_REGEX.captures(input) else {
        return 0;
    };
    captures[1].parse::<u32>().unwrap_or(u32::MAX)
}

/// Zero-pad a field value to at least two digits.
pub fn format_two_digits(value: u32) -> String {
    format!("{:02}", value)
}

/// Render a number of seconds as `MM:SS`.
pub fn format_clock(total_seconds: u32) -> String {
    format!(
        "{}:{}",
        format_two_digits(total_seconds / SECONDS_PER_MINUTE),
        format_two_digits(total_seconds % SECONDS_PER_MINUTE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn coerces_plain_numbers() {
        assert_eq!(coerce_field_input("0"), 0);
        assert_eq!(coerce_field_input("30"), 30);
        assert_eq!(coerce_field_input("007"), 7);
        assert_eq!(coerce_field_input("  42"), 42);
    }

    #[test]
    fn coerces_garbage_to_zero() {
        assert_eq!(coerce_field_input(""), 0);
        assert_eq!(coerce_field_input("abc"), 0);
        assert_eq!(coerce_field_input("-15"), 0);
        assert_eq!(coerce_field_input("+"), 0);
        assert_eq!(coerce_field_input(".5"), 0);
    }

    #[test]
    fn keeps_leading_digits_only() {
        assert_eq!(coerce_field_input("12abc"), 12);
        assert_eq!(coerce_field_input("3.9"), 3);
        assert_eq!(coerce_field_input("1e3"), 1);
    }

    #[test]
    fn does_not_clamp_out_of_range_seconds() {
        assert_eq!(coerce_field_input("75"), 75);
        assert_eq!(coerce_field_input("150"), 150);
    }

    #[test]
    fn saturates_huge_values() {
        assert_eq!(coerce_field_input("99999999999999999999"), u32::MAX);
    }

    #[test]
    fn pads_to_two_digits() {
        assert_eq!(format_two_digits(5), "05");
        assert_eq!(format_two_digits(59), "59");
        assert_eq!(format_two_digits(130), "130");
    }

    #[test]
    fn formats_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(45), "00:45");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(330), "05:30");
        assert_eq!(format_clock(100 * 60 + 1), "100:01");
    }
}
