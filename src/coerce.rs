//! Conversions from raw option values to typed values.
//!
//! All lookups that return a typed value with a default go through these functions. They never
//! fail: callers that need to reject malformed input use [`Args::parse`](crate::Args::parse).

/// Converts `value` to an integer the lenient way.
///
/// Leading whitespace and an optional sign are accepted, then the longest run of ASCII digits is
/// read. Anything after the digits is ignored. A value without digits (including the empty value
/// of a bare flag) is `0`. Out of range values saturate.
pub fn lenient_i64(value: &str) -> i64 {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut n: i64 = 0;
    for d in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(d - b'0');
        let next = n
            .checked_mul(10)
            .and_then(|n| if negative { n.checked_sub(d) } else { n.checked_add(d) });
        match next {
            Some(next) => n = next,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    n
}

/// Whether an option value turns its boolean on. Only the exact text `0` is false.
pub fn is_truthy(value: &str) -> bool {
    value != "0"
}

/// What a `-noX` value means for `X`: `-noX=0` leaves `X` on, anything else turns it off
pub fn negation_result(value: &str) -> bool {
    !is_truthy(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(lenient_i64("11"), 11);
        assert_eq!(lenient_i64("-11"), -11);
        assert_eq!(lenient_i64("+11"), 11);
        assert_eq!(lenient_i64("  7"), 7);
        assert_eq!(lenient_i64("12abc"), 12);
    }

    #[test]
    fn non_numbers_are_zero() {
        assert_eq!(lenient_i64(""), 0);
        assert_eq!(lenient_i64("NaN"), 0);
        assert_eq!(lenient_i64("NotANumber"), 0);
        assert_eq!(lenient_i64("-"), 0);
        assert_eq!(lenient_i64("verbose"), 0);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(lenient_i64("99999999999999999999"), i64::MAX);
        assert_eq!(lenient_i64("-99999999999999999999"), i64::MIN);
        assert_eq!(lenient_i64("-9223372036854775808"), i64::MIN);
    }

    #[test]
    fn truthiness_is_textual() {
        assert!(is_truthy(""));
        assert!(is_truthy("1"));
        assert!(is_truthy("false"));
        assert!(is_truthy("00"));
        assert!(!is_truthy("0"));

        assert!(!negation_result(""));
        assert!(!negation_result("1"));
        assert!(negation_result("0"));
    }
}
