//! Number formatting and parsing shared by the encoders and parsers.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;

/// Largest decimal exponent magnitude accepted in a grade (`1e4096`).
const MAX_EXPONENT: u32 = 4096;

/// Formats a float the way the engine's input reader expects: fixed notation
/// with six decimals (`1.500000`), `nan`/`inf`/`-inf` for non-finite values.
#[derive(Clone, Copy)]
pub(crate) struct Fixed(pub f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("nan")
        } else {
            write!(f, "{:.6}", self.0)
        }
    }
}

/// Parses an exact rational of any size: `a/b`, an integer, or a decimal with
/// an optional exponent (`0.125`, `-1.5e-3`). Whitespace around the value and
/// around `/` is allowed.
pub(crate) fn parse_rational(raw: &str) -> Result<BigRational, String> {
    let s = raw.trim();

    if let Some((num, den)) = s.split_once('/') {
        let (num, den) = (num.trim(), den.trim());
        let numer =
            parse_signed_digits(num).ok_or_else(|| format!("invalid numerator '{num}'"))?;
        let denom = parse_digits(den).ok_or_else(|| format!("invalid denominator '{den}'"))?;
        if den.bytes().all(|b| b == b'0') {
            return Err("zero denominator".to_string());
        }
        return Ok(BigRational::new(numer, denom));
    }

    parse_decimal(s).ok_or_else(|| format!("'{s}' is not a rational number"))
}

fn parse_decimal(s: &str) -> Option<BigRational> {
    let (negative, unsigned) = split_sign(s)?;

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], parse_exponent(&unsigned[pos + 1..])?),
        None => (unsigned, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut numer: BigInt = format!("{int_part}{frac_part}").parse().ok()?;
    if negative {
        numer = -numer;
    }

    // value = digits * 10^(exponent - fraction digits)
    let scale = exponent - i64::try_from(frac_part.len()).ok()?;
    let power = pow10(u32::try_from(scale.unsigned_abs()).ok()?);
    if scale >= 0 {
        Some(BigRational::from_integer(numer * power))
    } else {
        Some(BigRational::new(numer, power))
    }
}

fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

fn split_sign(s: &str) -> Option<(bool, &str)> {
    Some(match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    })
}

fn parse_exponent(s: &str) -> Option<i64> {
    let (negative, digits) = split_sign(s)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = digits.parse().ok().filter(|v| *v <= MAX_EXPONENT)?;
    let value = i64::from(value);
    Some(if negative { -value } else { value })
}

fn parse_signed_digits(s: &str) -> Option<BigInt> {
    let (negative, digits) = split_sign(s)?;
    let value = parse_digits(digits)?;
    Some(if negative { -value } else { value })
}

fn parse_digits(s: &str) -> Option<BigInt> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Fuzz-only entrypoint for grade parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_rational(input: &str) -> Result<(), String> {
    parse_rational(input).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn fixed_uses_six_decimals() {
        assert_eq!(Fixed(1.5).to_string(), "1.500000");
        assert_eq!(Fixed(-0.25).to_string(), "-0.250000");
        assert_eq!(Fixed(3.0).to_string(), "3.000000");
        assert_eq!(Fixed(f64::NAN).to_string(), "nan");
        assert_eq!(Fixed(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn parses_fractions_and_integers() {
        assert_eq!(parse_rational("1/2").unwrap(), r(1, 2));
        assert_eq!(parse_rational(" -3 / 6 ").unwrap(), r(-1, 2));
        assert_eq!(parse_rational("7").unwrap(), r(7, 1));
        assert_eq!(parse_rational("+4/2").unwrap(), r(2, 1));
    }

    #[test]
    fn parses_decimals_exactly() {
        assert_eq!(parse_rational("0.125").unwrap(), r(1, 8));
        assert_eq!(parse_rational(".5").unwrap(), r(1, 2));
        assert_eq!(parse_rational("-1.5e-3").unwrap(), r(-3, 2000));
        assert_eq!(parse_rational("2E2").unwrap(), r(200, 1));
    }

    #[test]
    fn rejects_garbage() {
        for bad in [
            "", "abc", "1/0", "1/00", "1/-2", "1.2.3", "e5", ".", "1/", "--1", "1_000", "1e99999",
        ] {
            assert!(parse_rational(bad).is_err(), "accepted '{bad}'");
        }
    }

    #[test]
    fn grades_are_not_limited_to_64_bits() {
        let big_denom: BigInt = "36893488147419103232".parse().unwrap();
        assert_eq!(
            parse_rational("1/36893488147419103232").unwrap(),
            BigRational::new(BigInt::from(1), big_denom)
        );

        let numer: BigInt = "1234567890123456789".parse().unwrap();
        assert_eq!(
            parse_rational("0.1234567890123456789").unwrap(),
            BigRational::new(numer, pow10(19))
        );

        assert_eq!(
            parse_rational("-98765432109876543210987654321").unwrap(),
            BigRational::from_integer("-98765432109876543210987654321".parse().unwrap())
        );
    }
}
