//! Parsing user-typed arrays
//!
//! Input is filtered rather than rejected wholesale: tokens that are not
//! numbers, or are not positive, are dropped. An input with no surviving
//! values, or with more than [`MAX_ARRAY_SIZE`] of them, is an error.

use tracing::warn;

use crate::config::MAX_ARRAY_SIZE;
use crate::error::{Error, Result};

/// Read a leading optional sign and integer, ignoring anything after.
///
/// `"12abc"` reads as 12, `"3.7"` as 3 and `"0x1F"` as 31. Returns `None`
/// when there are no leading digits or the value does not fit in an `i64`.
fn leading_integer(token: &str) -> Option<i64> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits = rest
        .bytes()
        .take_while(|b| (*b as char).is_digit(radix))
        .count();
    if digits == 0 {
        return None;
    }
    let value = i64::from_str_radix(&rest[..digits], radix).ok()?;
    Some(if negative { -value } else { value })
}

/// Parse a comma-separated list of positive integers.
pub fn parse_custom_array(text: &str) -> Result<Vec<i64>> {
    let values: Vec<i64> = text
        .split(',')
        .filter_map(|token| leading_integer(token.trim()))
        .filter(|&value| value > 0)
        .collect();

    if values.is_empty() {
        warn!(input = text, "rejected custom array with no positive integers");
        return Err(Error::EmptyCustomArray {
            input: text.to_string(),
        });
    }
    if values.len() > MAX_ARRAY_SIZE {
        warn!(len = values.len(), "rejected custom array over the size limit");
        return Err(Error::InvalidSize {
            size: values.len(),
            min: 1,
            max: MAX_ARRAY_SIZE,
        });
    }
    Ok(values)
}
