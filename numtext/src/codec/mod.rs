//! # Decimal Integer Codec
//!
//! This module converts fixed-width integers to and from their decimal ASCII
//! representation without touching the heap.
//!
//! ## Format
//!
//! The text form is `["-"] digit+`:
//! - A leading `-` only for negative values of signed types
//! - No leading `+`, no grouping separators, no surrounding whitespace
//! - [`encode`] never emits leading zeros (zero itself is the single `0`)
//!
//! ## Buffer Sizing
//!
//! Encoding writes into a fixed stack buffer of [`DECIMAL_BUFFER_LEN`] bytes.
//! Dividing the bit width by three over-estimates the number of decimal
//! digits (2^3 ~ 10^1), so `ceil(bits / 3)` digits plus one sign byte plus
//! one NUL terminator always fit. The bound is checked at build time for
//! every supported integer type, so encoding has no failure path.
//!
//! ## Validation
//!
//! Decoding is strict: the whole input must be consumed by a single integer
//! token. `"123abc"`, `" 1"`, `""` and `"-"` are all rejected, and so is any
//! value outside the range of the target type.

use std::fmt;

mod decoder;
mod encoder;

pub use decoder::decode;
pub use decoder::decode_bytes;
pub use decoder::parse_prefix;
pub use encoder::encode;
pub use encoder::encode_into;
pub use encoder::DecimalText;

/// ASCII minus sign, the only sign accepted or produced.
const MINUS: u8 = b'-';

/// NUL terminator written after the last digit.
const TERMINATOR: u8 = 0;

/// Radix of the text representation.
const RADIX: u8 = 10;

/// Number of bytes a value of `bits` width may need when rendered: one
/// decimal digit per three bits (rounded up), a sign and a terminator.
const fn required_len(bits: u32) -> usize {
    bits.div_ceil(3) as usize + 2
}

/// Capacity in bytes of every encoding buffer. Derived from the widest
/// supported integer (64 bits) so that it strictly exceeds
/// [`required_len`] for all of them.
pub const DECIMAL_BUFFER_LEN: usize = required_len(u64::BITS) + 1;

/// A stack buffer large enough to hold the decimal form of any supported
/// integer, including the sign and the NUL terminator.
pub type DecimalBuffer = [u8; DECIMAL_BUFFER_LEN];

/// Errors that can occur while decoding decimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Attempted to decode from an empty input.
    #[error("empty input")]
    EmptyInput,

    /// No integer token starts at the beginning of the input. The value is
    /// the position where a digit was expected.
    #[error("expected a decimal digit at position {0}")]
    MissingDigits(usize),

    /// A valid integer token was found but did not extend to the end of
    /// the input. The value is the position of the first unconsumed byte.
    #[error("unexpected trailing input at position {0}")]
    TrailingInput(usize),

    /// The value does not fit in the target integer type.
    #[error("decimal value does not fit in {type_name}")]
    OutOfRange {
        /// Name of the target integer type
        type_name: &'static str,
    },
}

/// Classification of codec errors. Every decoding failure, whatever its
/// cause, is an invalid argument from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input text is not the decimal form of a value of the target type.
    InvalidArgument,
}

impl Error {
    /// Returns the error class of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

mod sealed {
    /// Digit-level arithmetic the codec needs from an integer type.
    pub trait Sealed: Sized {
        /// Whether the value is below zero.
        fn below_zero(self) -> bool;

        /// The absolute value, widened to 64 bits.
        fn magnitude(self) -> u64;

        /// Computes `self * 10 + digit`, or `None` on overflow.
        fn push_digit(self, digit: u8) -> Option<Self>;

        /// Computes `self * 10 - digit`, or `None` on underflow. Negative
        /// values are accumulated downwards so that `MIN` is reachable.
        fn push_negative_digit(self, digit: u8) -> Option<Self>;
    }
}

/// Integer types that can be converted to and from decimal text.
///
/// This trait is sealed and implemented for `i8`, `i16`, `i32`, `i64`,
/// `isize`, `u8`, `u16`, `u32`, `u64` and `usize`. The [`SIGNED`] constant
/// selects the signed or unsigned code path at compile time.
///
/// [`SIGNED`]: DecimalInt::SIGNED
pub trait DecimalInt:
    sealed::Sealed + Copy + Eq + Ord + fmt::Debug + fmt::Display + 'static
{
    /// Whether values of this type may be negative.
    const SIGNED: bool;
    /// Width of the type in bits.
    const BITS: u32;
    /// Name of the type, used in error messages.
    const TYPE_NAME: &'static str;
    /// The value zero.
    const ZERO: Self;
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
}

macro_rules! impl_decimal_int {
    ($signed:tt => $($t:ty),+) => {$(
        const _: () = assert!(
            DECIMAL_BUFFER_LEN > required_len(<$t>::BITS),
            "the decimal buffer is too small for this integer type",
        );

        impl sealed::Sealed for $t {
            #[inline]
            fn below_zero(self) -> bool {
                impl_decimal_int!(@below_zero $signed, self)
            }

            #[allow(clippy::unnecessary_cast)]
            #[inline]
            fn magnitude(self) -> u64 {
                impl_decimal_int!(@magnitude $signed, self)
            }

            #[inline]
            fn push_digit(self, digit: u8) -> Option<Self> {
                self.checked_mul(RADIX as $t)?.checked_add(digit as $t)
            }

            #[inline]
            fn push_negative_digit(self, digit: u8) -> Option<Self> {
                self.checked_mul(RADIX as $t)?.checked_sub(digit as $t)
            }
        }

        impl DecimalInt for $t {
            const SIGNED: bool = $signed;
            const BITS: u32 = <$t>::BITS;
            const TYPE_NAME: &'static str = stringify!($t);
            const ZERO: Self = 0;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
        }
    )+};
    (@below_zero true, $value:expr) => {
        $value < 0
    };
    (@below_zero false, $value:expr) => {
        false
    };
    (@magnitude true, $value:expr) => {
        $value.unsigned_abs() as u64
    };
    (@magnitude false, $value:expr) => {
        $value as u64
    };
}

impl_decimal_int!(true => i8, i16, i32, i64, isize);
impl_decimal_int!(false => u8, u16, u32, u64, usize);
