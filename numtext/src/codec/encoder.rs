//! Integer to decimal text encoding.
//!
//! Digits are produced least-significant first by repeated division, then
//! reversed in place. The sign is written before the digits and a NUL
//! terminator after them, all inside a [`DecimalBuffer`] whose capacity is
//! proven sufficient at build time.

use std::fmt;
use std::ops::Deref;

use super::DecimalBuffer;
use super::DecimalInt;
use super::DECIMAL_BUFFER_LEN;
use super::MINUS;
use super::RADIX;
use super::TERMINATOR;

/// The decimal form of an integer, held on the stack.
///
/// Dereferences to [`str`]. The underlying buffer also carries a NUL
/// terminator, available through [`DecimalText::as_bytes_with_nul`].
#[derive(Clone, Copy)]
pub struct DecimalText {
    buf: DecimalBuffer,
    len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl DecimalText {
    /// Returns the decimal text.
    pub fn as_str(&self) -> &str {
        as_ascii_str(&self.buf[..self.len])
    }

    /// Returns the decimal text as bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the decimal text followed by its NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Number of characters in the decimal text. Never zero.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl Deref for DecimalText {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for DecimalText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for DecimalText {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for DecimalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for DecimalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq for DecimalText {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for DecimalText {}

impl PartialEq<str> for DecimalText {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for DecimalText {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Encodes `value` as canonical decimal text.
///
/// The output is the shortest text that decodes back to `value`: a `-` if
/// and only if the value is negative, then the digits without leading zeros.
/// This never fails.
///
/// ```
/// use numtext::codec::encode;
///
/// assert_eq!(encode(-42i8), "-42");
/// assert_eq!(encode(u64::MAX), "18446744073709551615");
/// ```
pub fn encode<T: DecimalInt>(value: T) -> DecimalText {
    let mut buf = [0; DECIMAL_BUFFER_LEN];
    let len = write_decimal(value, &mut buf);
    DecimalText { buf, len }
}

/// Encodes `value` into a caller-owned buffer and returns the written text.
///
/// The buffer holds a NUL terminator right after the returned text.
pub fn encode_into<T: DecimalInt>(value: T, buf: &mut DecimalBuffer) -> &str {
    let len = write_decimal(value, buf);
    as_ascii_str(&buf[..len])
}

/// Writes the decimal form of `value` followed by a terminator into `buf`,
/// returning the length of the text without the terminator.
fn write_decimal<T: DecimalInt>(value: T, buf: &mut DecimalBuffer) -> usize {
    // The terminator must land strictly before the end of the buffer.
    let end = buf.len() - 1;
    let mut position = 0;

    if T::SIGNED && value.below_zero() {
        buf[position] = MINUS;
        position += 1;
    }

    let digits_start = position;
    let mut magnitude = value.magnitude();
    loop {
        debug_assert!(position < end, "decimal buffer overrun");
        buf[position] = b'0' + (magnitude % RADIX as u64) as u8;
        position += 1;
        magnitude /= RADIX as u64;

        if magnitude == 0 {
            break;
        }
    }
    buf[digits_start..position].reverse();

    debug_assert!(position < end, "decimal buffer overrun");
    buf[position] = TERMINATOR;

    position
}

fn as_ascii_str(bytes: &[u8]) -> &str {
    // `write_decimal` only writes ASCII digits and the minus sign.
    std::str::from_utf8(bytes).expect("decimal text is always ASCII")
}
