//! Decimal text to integer decoding.
//!
//! [`parse_prefix`] is the front parser: it reads one integer token from the
//! start of the input and reports how many bytes it used. [`decode`] and
//! [`decode_bytes`] build on it and additionally require that the token
//! spans the whole input.

use super::DecimalInt;
use super::Error;
use super::MINUS;

/// Decodes canonical or zero-padded decimal text into an integer.
///
/// The text must consist of an optional `-` (signed types only) followed by
/// one or more ASCII digits and nothing else. Values outside the range of
/// `T` are rejected rather than wrapped.
///
/// ```
/// use numtext::codec::{decode, Error};
///
/// assert_eq!(decode::<i32>("-2147483648"), Ok(i32::MIN));
/// assert_eq!(decode::<u8>("256"), Err(Error::OutOfRange { type_name: "u8" }));
/// assert_eq!(decode::<i64>("123abc"), Err(Error::TrailingInput(3)));
/// ```
pub fn decode<T: DecimalInt>(text: &str) -> Result<T, Error> {
    decode_bytes(text.as_bytes())
}

/// Decodes decimal text given as raw bytes. See [`decode`].
pub fn decode_bytes<T: DecimalInt>(bytes: &[u8]) -> Result<T, Error> {
    let result = parse_prefix::<T>(bytes).and_then(|(value, consumed)| {
        // We must have consumed all of the input.
        if consumed != bytes.len() {
            return Err(Error::TrailingInput(consumed));
        }
        Ok(value)
    });

    if let Err(error) = &result {
        tracing::trace!(
            %error,
            target_type = T::TYPE_NAME,
            input_len = bytes.len(),
            "rejected decimal input"
        );
    }

    result
}

/// Parses one integer token from the start of `bytes`.
///
/// Digits are consumed until the first non-digit byte or the end of input,
/// whichever comes first. Unlike [`decode`], bytes left after the token are
/// not an error.
///
/// ## Returns
/// * `Ok((value, bytes_read))` - The decoded value and consumed bytes
/// * `Err(Error)` - If no token starts at the beginning of the input, or if
///   the token does not fit in `T`
pub fn parse_prefix<T: DecimalInt>(bytes: &[u8]) -> Result<(T, usize), Error> {
    if bytes.is_empty() {
        return Err(Error::EmptyInput);
    }

    let negative = T::SIGNED && bytes[0] == MINUS;
    let digits_start = usize::from(negative);

    let mut value = T::ZERO;
    let mut position = digits_start;

    while let Some(&byte) = bytes.get(position) {
        if !byte.is_ascii_digit() {
            break;
        }

        let digit = byte - b'0';
        let next = match negative {
            true => value.push_negative_digit(digit),
            false => value.push_digit(digit),
        };
        value = next.ok_or(Error::OutOfRange { type_name: T::TYPE_NAME })?;
        position += 1;
    }

    if position == digits_start {
        return Err(Error::MissingDigits(digits_start));
    }

    Ok((value, position))
}
