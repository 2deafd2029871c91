//! Runtime selection of the integer type used by the codec.

use serde::Deserialize;

use crate::codec;
use crate::codec::DecimalInt;
use crate::codec::DecimalText;

/// The integer types supported by the codec, for when the target type is
/// only known at runtime (configuration, command line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IntType {
    /// 8-bit signed
    I8,
    /// 16-bit signed
    I16,
    /// 32-bit signed
    I32,
    /// 64-bit signed
    I64,
    /// Pointer-sized signed
    Isize,
    /// 8-bit unsigned
    U8,
    /// 16-bit unsigned
    U16,
    /// 32-bit unsigned
    U32,
    /// 64-bit unsigned
    U64,
    /// Pointer-sized unsigned
    Usize,
}

/// Calls a generic function with the concrete type selected by an
/// [`IntType`].
macro_rules! dispatch {
    ($int_type:expr, $func:ident($($arg:expr),*)) => {
        match $int_type {
            IntType::I8 => $func::<i8>($($arg),*),
            IntType::I16 => $func::<i16>($($arg),*),
            IntType::I32 => $func::<i32>($($arg),*),
            IntType::I64 => $func::<i64>($($arg),*),
            IntType::Isize => $func::<isize>($($arg),*),
            IntType::U8 => $func::<u8>($($arg),*),
            IntType::U16 => $func::<u16>($($arg),*),
            IntType::U32 => $func::<u32>($($arg),*),
            IntType::U64 => $func::<u64>($($arg),*),
            IntType::Usize => $func::<usize>($($arg),*),
        }
    };
}

impl IntType {
    /// Name of the selected type, as written in Rust.
    pub fn name(self) -> &'static str {
        dispatch!(self, type_name())
    }

    /// Whether the selected type is signed.
    pub fn is_signed(self) -> bool {
        dispatch!(self, is_signed())
    }

    /// Decodes `text` as the selected type and re-encodes it, producing the
    /// canonical form (`"007"` becomes `"7"`, `"-0"` becomes `"0"`).
    pub fn canonical(self, text: &str) -> Result<DecimalText, codec::Error> {
        dispatch!(self, canonical(text))
    }

    /// The encoded minimum and maximum values of the selected type.
    pub fn bounds(self) -> (DecimalText, DecimalText) {
        dispatch!(self, bounds())
    }
}

fn type_name<T: DecimalInt>() -> &'static str {
    T::TYPE_NAME
}

fn is_signed<T: DecimalInt>() -> bool {
    T::SIGNED
}

fn canonical<T: DecimalInt>(text: &str) -> Result<DecimalText, codec::Error> {
    codec::decode::<T>(text).map(codec::encode)
}

fn bounds<T: DecimalInt>() -> (DecimalText, DecimalText) {
    (codec::encode(T::MIN), codec::encode(T::MAX))
}
