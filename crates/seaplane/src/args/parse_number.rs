use crate::error::{SeaplaneError, SeaplaneResult};

/// Strict base-10 integer parse: the whole token must be a number.
///
/// Only a leading `-` is accepted as a sign; `+`, whitespace, radix prefixes
/// and trailing characters are rejected.
pub fn parse_integer(token: &str) -> SeaplaneResult<i64> {
    let parsed = match token.as_bytes().first() {
        Some(b'+') => None,
        _ => token.parse::<i64>().ok(),
    };
    parsed.ok_or_else(|| SeaplaneError::ParseFailure {
        token: token.to_owned(),
        expected: "integer",
    })
}

/// Floating-point parse: leading C whitespace is skipped, the rest of the
/// token must be a float literal.
///
/// Accepts decimal and exponent forms (`1`, `-0.5`, `.5`, `2.`, `1e-3`) as
/// well as `inf`, `infinity` and `nan` in any case.
pub fn parse_real(token: &str) -> SeaplaneResult<f64> {
    token
        .trim_start_matches(is_c_space)
        .parse::<f64>()
        .map_err(|_| SeaplaneError::ParseFailure {
            token: token.to_owned(),
            expected: "real number",
        })
}

#[inline]
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_accepts() {
        assert_eq!(parse_integer("42"), Ok(42));
        assert_eq!(parse_integer("-17"), Ok(-17));
        assert_eq!(parse_integer("0"), Ok(0));
        assert_eq!(parse_integer("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_integer("-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn test_integer_rejects_partial() {
        for token in [
            "4x", "", " 4", "4 ", "+8", "+", "-", "0x10", "1.0", "1e3", "9223372036854775808",
        ] {
            let err = parse_integer(token).unwrap_err();
            assert_eq!(
                err,
                SeaplaneError::ParseFailure {
                    token: token.to_string(),
                    expected: "integer"
                },
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_real_accepts() {
        assert_eq!(parse_real("7.3"), Ok(7.3));
        assert_eq!(parse_real("-0.5"), Ok(-0.5));
        assert_eq!(parse_real(".5"), Ok(0.5));
        assert_eq!(parse_real("2."), Ok(2.0));
        assert_eq!(parse_real("1e-3"), Ok(0.001));
        assert_eq!(parse_real("10"), Ok(10.0));
        assert_eq!(parse_real("inf"), Ok(f64::INFINITY));
        assert!(parse_real("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_real_skips_leading_whitespace() {
        assert_eq!(parse_real(" 1.5"), Ok(1.5));
        assert_eq!(parse_real("\t\n-2"), Ok(-2.0));
        assert_eq!(parse_real("\x0B\x0C\r3e2"), Ok(300.0));
    }

    #[test]
    fn test_real_rejects_partial() {
        for token in ["1.5x", "", "   ", "1.5 ", "1,5", "0x1p3"] {
            let err = parse_real(token).unwrap_err();
            assert_eq!(err.to_string(), format!("Failed to parse {} as real number", token));
        }
    }
}
