//! Lenient integer parsing for query and path parameters.
//!
//! Reads the integer prefix of a string: leading whitespace is skipped, one
//! optional sign is accepted, then the longest run of digits is consumed and
//! anything after it is ignored. A `0x`/`0X` prefix switches to hexadecimal.
//! So `"10abc"` reads as 10, `"1.5"` as 1 and `"1e3"` as 1.

/// Parse the integer prefix of `raw`.
///
/// Returns `None` when no digit follows the optional sign, or when the value
/// does not fit in `i64`.
pub(crate) fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_integer_prefix() {
        let cases = [
            ("42", 42),
            ("  7", 7),
            ("\t12\n", 12),
            ("+5", 5),
            ("-3", -3),
            ("10abc", 10),
            ("1.5", 1),
            ("1e3", 1),
            ("007", 7),
            ("0x1A", 26),
            ("0Xff", 255),
            ("-0", 0),
        ];
        for (raw, expected) in cases {
            assert_eq!(leading_int(raw), Some(expected), "{raw:?}");
        }
    }

    #[test]
    fn no_digits_is_none() {
        for raw in ["", "   ", "abc", "+", "-", "--1", "+-1", ".5", "0x", "NaN", "x3"] {
            assert_eq!(leading_int(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn out_of_range_is_none() {
        assert_eq!(leading_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(leading_int("9223372036854775808"), None);
    }
}
