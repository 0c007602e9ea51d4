//! 64-bit identifier hex coding.
//!
//! # Invariants
//! - Hex form is the two's-complement `u64` of the id, lowercase, unpadded.
//! - `dehexify_id(&hexify_id(x)) == Ok(x)` for every `i64`.

use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Renders an id as unsigned hex (negative ids wrap to the upper half).
pub fn hexify_id(id: i64) -> String {
    format!("{:x}", id as u64)
}

/// Parses unsigned hex back into a signed id.
///
/// Surrounding whitespace and a `0x` prefix are accepted.
pub fn dehexify_id(hex: &str) -> Result<i64, IdError> {
    let trimmed = hex.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(IdError::Empty);
    }

    match u64::from_str_radix(digits, 16) {
        Ok(value) => Ok(value as i64),
        Err(err) => {
            debug!(
                "event=id_dehexify module=ids status=error input_len={} error={}",
                hex.len(),
                err
            );
            Err(IdError::InvalidHex {
                input: hex.to_string(),
                message: err.to_string(),
            })
        }
    }
}

/// Renders ids as a parenthesized comma list, e.g. `(1,2,3)`.
pub fn ids_to_str(ids: &[i64]) -> String {
    let joined = ids
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("({joined})")
}

/// Identifier parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// Input is blank (or only a `0x` prefix).
    Empty,
    /// Input is not a hex number that fits in 64 bits.
    InvalidHex { input: String, message: String },
}

impl Display for IdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "id hex cannot be empty"),
            Self::InvalidHex { input, message } => {
                write!(f, "invalid id hex `{input}`: {message}")
            }
        }
    }
}

impl Error for IdError {}

#[cfg(test)]
mod tests {
    use super::{dehexify_id, IdError};

    #[test]
    fn prefix_only_input_is_empty() {
        assert_eq!(dehexify_id("0x"), Err(IdError::Empty));
        assert_eq!(dehexify_id("   "), Err(IdError::Empty));
    }

    #[test]
    fn overflowing_input_is_rejected() {
        let err = dehexify_id("1ffffffffffffffff").unwrap_err();
        assert!(matches!(err, IdError::InvalidHex { .. }));
    }
}
