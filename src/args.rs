//! Resolution of positional command-line arguments.
//!
//! Parsing is permissive: anything that does not read as a number falls
//! back to the default for that position instead of producing an error.

use crate::GridParams;
use std::str::FromStr;

/// One-line usage message printed for `--help`.
pub const USAGE: &str = "usage: [bin] <size> <frequency>";

const HELP_FLAG: &str = "--help";

/// Parses `input` as `T`, returning `default` when it is absent or malformed.
pub fn parse_or_default<T: FromStr>(input: Option<&str>, default: T) -> T {
    input
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Resolves the grid size from the integer at the start of `input`.
///
/// An optional sign followed by decimal digits, or hex digits after `0x`,
/// is read and anything after it ignored, so `"3.7"` and `"3abc"` give 3
/// and `"1e3"` gives 1. Values past the `i64` range saturate. Text without
/// leading digits yields [`GridParams::DEFAULT_SIZE`].
pub fn parse_size(input: Option<&str>) -> i64 {
    input
        .and_then(|s| integer_prefix(s.trim_start()))
        .unwrap_or(GridParams::DEFAULT_SIZE)
}

/// Resolves the fill frequency from the longest float at the start of `input`.
///
/// `"0.9x"` gives 0.9. Infinities are accepted, `NaN` is not.
pub fn parse_frequency(input: Option<&str>) -> f64 {
    parse_or_default(
        input.map(|s| float_prefix(s.trim_start())),
        GridParams::DEFAULT_FREQUENCY,
    )
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

fn integer_prefix(text: &str) -> Option<i64> {
    let (negative, rest) = split_sign(text);
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end]
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(d))
        });
    Some(if negative { -magnitude } else { magnitude })
}

fn digits_at(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |b| b.iter().take_while(|c| c.is_ascii_digit()).count())
}

/// Returns the longest prefix of `text` that reads as a float, or `""`.
fn float_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["infinity", "inf"] {
        let rest = &text[end..];
        if rest.get(..word.len()).is_some_and(|w| w.eq_ignore_ascii_case(word)) {
            return &text[..end + word.len()];
        }
    }

    let int_digits = digits_at(bytes, end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_at(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    // exponent only counts when it has digits
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_at(bytes, exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    &text[..end]
}

/// A resolved invocation of the command-line tool.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub params: GridParams,
    /// Set when the first argument is exactly `--help`.
    pub help: bool,
}

impl Invocation {
    /// Builds an invocation from the arguments following the program name.
    ///
    /// Only the first two arguments are considered.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let first = args.next();
        let second = args.next();

        let help = first.as_deref() == Some(HELP_FLAG);
        let params = GridParams {
            size: parse_size(first.as_deref()),
            frequency: parse_frequency(second.as_deref()),
        };

        Self { params, help }
    }
}
