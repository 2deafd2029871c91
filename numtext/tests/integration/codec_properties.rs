//! End-to-end checks of the decimal codec contract through the public API.

use numtext::codec::decode;
use numtext::codec::encode;
use numtext::codec::Error;
use numtext::codec::ErrorKind;
use numtext::DecimalInt;

use proptest::prelude::*;
use test_case::test_case;

/// Encodes `value`, checks the text, and decodes it back.
fn assert_round_trip<T: DecimalInt>(value: T, expected: &str) {
    let text = encode(value);
    assert_eq!(text, expected);
    assert_eq!(decode::<T>(&text), Ok(value));
}

#[test_case(i8::MIN, "-128" ; "i8 min")]
#[test_case(i8::MAX, "127" ; "i8 max")]
#[test_case(i16::MIN, "-32768" ; "i16 min")]
#[test_case(i16::MAX, "32767" ; "i16 max")]
#[test_case(i32::MIN, "-2147483648" ; "i32 min")]
#[test_case(i32::MAX, "2147483647" ; "i32 max")]
#[test_case(i64::MIN, "-9223372036854775808" ; "i64 min")]
#[test_case(i64::MAX, "9223372036854775807" ; "i64 max")]
#[test_case(u8::MIN, "0" ; "u8 min")]
#[test_case(u8::MAX, "255" ; "u8 max")]
#[test_case(u16::MAX, "65535" ; "u16 max")]
#[test_case(u32::MAX, "4294967295" ; "u32 max")]
#[test_case(u64::MAX, "18446744073709551615" ; "u64 max")]
fn boundary_values_round_trip<T: DecimalInt>(value: T, expected: &str) {
    assert_round_trip(value, expected);
}

#[test]
fn pointer_sized_boundaries_round_trip() {
    assert_round_trip(isize::MIN, &isize::MIN.to_string());
    assert_round_trip(isize::MAX, &isize::MAX.to_string());
    assert_round_trip(usize::MAX, &usize::MAX.to_string());
}

#[test_case("" ; "empty")]
#[test_case("-" ; "sign only")]
#[test_case("123abc" ; "partial match")]
#[test_case(" 123" ; "leading space")]
#[test_case("123\n" ; "trailing newline")]
#[test_case("+123" ; "plus sign")]
#[test_case("1,234" ; "grouping separator")]
#[test_case("99999999999999999999" ; "overflow")]
#[test_case("١٢٣" ; "non ascii digits")]
fn malformed_inputs_are_invalid_arguments(text: &str) {
    let error = decode::<i64>(text).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn unsigned_targets_reject_any_sign() {
    assert_eq!(decode::<u32>("-5"), Err(Error::MissingDigits(0)));
    assert_eq!(decode::<u64>("-0"), Err(Error::MissingDigits(0)));
    assert_eq!(decode::<i32>("-5"), Ok(-5));
}

#[test]
fn overflow_is_rejected_for_every_width() {
    assert_eq!(
        decode::<u64>("99999999999999999999"),
        Err(Error::OutOfRange { type_name: "u64" })
    );
    assert_eq!(
        decode::<i64>("9223372036854775808"),
        Err(Error::OutOfRange { type_name: "i64" })
    );
    assert_eq!(
        decode::<i16>("-32769"),
        Err(Error::OutOfRange { type_name: "i16" })
    );
    assert_eq!(
        decode::<u8>("1000"),
        Err(Error::OutOfRange { type_name: "u8" })
    );
}

/// Rejections are logged at trace level; this makes sure logging a
/// rejection never interferes with the result.
#[test_log::test]
fn rejections_are_reported_with_logging_enabled() {
    assert_eq!(decode::<u8>("12 "), Err(Error::TrailingInput(2)));
}

#[test]
fn non_canonical_inputs_decode_but_do_not_round_trip_textually() {
    let value = decode::<i32>("007").unwrap();
    assert_eq!(value, 7);
    assert_eq!(encode(value), "7");

    let value = decode::<i32>("-000").unwrap();
    assert_eq!(encode(value), "0");
}

proptest! {
    #[test]
    fn round_trip_i8(value: i8) {
        prop_assert_eq!(decode::<i8>(&encode(value)), Ok(value));
    }

    #[test]
    fn round_trip_i16(value: i16) {
        prop_assert_eq!(decode::<i16>(&encode(value)), Ok(value));
    }

    #[test]
    fn round_trip_i32(value: i32) {
        prop_assert_eq!(decode::<i32>(&encode(value)), Ok(value));
    }

    #[test]
    fn round_trip_i64(value: i64) {
        prop_assert_eq!(decode::<i64>(&encode(value)), Ok(value));
    }

    #[test]
    fn round_trip_u8(value: u8) {
        prop_assert_eq!(decode::<u8>(&encode(value)), Ok(value));
    }

    #[test]
    fn round_trip_u16(value: u16) {
        prop_assert_eq!(decode::<u16>(&encode(value)), Ok(value));
    }

    #[test]
    fn round_trip_u32(value: u32) {
        prop_assert_eq!(decode::<u32>(&encode(value)), Ok(value));
    }

    #[test]
    fn round_trip_u64(value: u64) {
        prop_assert_eq!(decode::<u64>(&encode(value)), Ok(value));
    }

    /// Any text that decodes and is canonical is reproduced exactly.
    #[test]
    fn canonical_text_round_trips(text in "0|-?[1-9][0-9]{0,18}") {
        if let Ok(value) = decode::<i64>(&text) {
            let encoded = encode(value);
            prop_assert_eq!(encoded.as_str(), text.as_str());
        }
    }

    /// Values that fit a wider type but not a narrower one are rejected by
    /// the narrower decoder instead of being truncated.
    #[test]
    fn narrowing_is_rejected(value: i64) {
        let text = encode(value);
        let narrow = decode::<i32>(&text);
        match i32::try_from(value) {
            Ok(expected) => {
                prop_assert_eq!(narrow, Ok(expected));
            }
            Err(_) => {
                prop_assert_eq!(narrow, Err(Error::OutOfRange { type_name: "i32" }));
            }
        }
    }
}
