//! Primitive byte-level conversions: endian-aware unpacking of every SEG-Y sample format
//! into `f32`, and the IBM System/360 float codec in both directions.
use crate::enums::SampleFormatCode;
use crate::errors::*;

use ibmfloat::F32;
use std::array::TryFromSliceError;
use std::convert::TryInto;

/// A chosen-once, reused-per-trace decoder from raw sample bytes to `f32`.
pub type BitConverter = fn(&[u8]) -> Result<f32, TryFromSliceError>;

/// Unpacks a big-endian IBM System/360 float into IEEE-754, per the primitive codec's
/// `ibm2ieee` contract.
///
/// ```
/// # use segy_core::bitconverter::ibm2ieee;
/// let value = ibm2ieee([0xC2, 0x76, 0xA0, 0x00]);
/// assert!((value - (-118.625)).abs() < 1e-3);
/// ```
pub fn ibm2ieee(bytes: [u8; 4]) -> f32 {
    f32::from(F32::from_be_bytes(bytes))
}

/// Packs an IEEE-754 `f32` into a big-endian IBM System/360 float, per the primitive
/// codec's `ieee2ibm` contract: sign bit, 7-bit excess-64 base-16 exponent, 24-bit fraction.
///
/// IEEE zero maps to IBM zero. NaN and infinities have no IBM representation and are
/// rejected rather than silently clamped; values whose magnitude overflows the 7-bit
/// exponent range are rejected the same way.
///
/// ```
/// # use segy_core::bitconverter::ieee2ibm;
/// assert_eq!(ieee2ibm(-118.625).unwrap(), [0xC2, 0x76, 0xA0, 0x00]);
/// ```
pub fn ieee2ibm(value: f32) -> Result<[u8; 4], SegyError> {
    if !value.is_finite() {
        return Err(SegyError::Encoding {
            msg: format!("{} has no IBM System/360 representation", value),
        });
    }
    if value == 0.0 {
        return Ok([0, 0, 0, 0]);
    }

    let sign = if value.is_sign_negative() { 0x80u8 } else { 0x00u8 };

    // IBM floats store their fraction as 0.0625 <= fraction < 1, scaled by 16^exponent;
    // normalize the magnitude into that window, one hex digit of exponent at a time.
    let mut fraction = value.abs() as f64;
    let mut exponent = 0i32;
    while fraction >= 1.0 {
        fraction /= 16.0;
        exponent += 1;
    }
    while fraction < 0.0625 {
        fraction *= 16.0;
        exponent -= 1;
    }

    let biased_exponent = exponent + 64;
    if !(0..=127).contains(&biased_exponent) {
        return Err(SegyError::Encoding {
            msg: format!("{} is out of range for an IBM System/360 float", value),
        });
    }

    let mantissa = (fraction * 16_777_216.0).round() as u32; // 24-bit fraction, 2^24 = 16_777_216
    Ok([
        sign | biased_exponent as u8,
        (mantissa >> 16) as u8,
        (mantissa >> 8) as u8,
        mantissa as u8,
    ])
}

fn decode_ibm_float32(input: &[u8]) -> Result<f32, TryFromSliceError> {
    Ok(ibm2ieee(input.try_into()?))
}

/// Generates a pair of big-endian/little-endian decoders for a primitive numeric type,
/// collapsing what would otherwise be one hand-written closure per (type, endianness) pair.
macro_rules! endian_pair {
    ($be:ident, $le:ident, $ty:ty) => {
        fn $be(input: &[u8]) -> Result<f32, TryFromSliceError> {
            Ok(<$ty>::from_be_bytes(input.try_into()?) as f32)
        }
        fn $le(input: &[u8]) -> Result<f32, TryFromSliceError> {
            Ok(<$ty>::from_le_bytes(input.try_into()?) as f32)
        }
    };
}

endian_pair!(decode_i16_be, decode_i16_le, i16);
endian_pair!(decode_i32_be, decode_i32_le, i32);
endian_pair!(decode_i64_be, decode_i64_le, i64);
endian_pair!(decode_u16_be, decode_u16_le, u16);
endian_pair!(decode_u32_be, decode_u32_le, u32);
endian_pair!(decode_u64_be, decode_u64_le, u64);
endian_pair!(decode_f32_be, decode_f32_le, f32);
endian_pair!(decode_f64_be, decode_f64_le, f64);

// Single-byte types have no endianness to speak of.
fn decode_i8(input: &[u8]) -> Result<f32, TryFromSliceError> {
    Ok(i8::from_be_bytes(input.try_into()?) as f32)
}
fn decode_u8(input: &[u8]) -> Result<f32, TryFromSliceError> {
    Ok(u8::from_be_bytes(input.try_into()?) as f32)
}

/// Picks the decoder for `format`/`le`, to be reused across every trace in a file rather
/// than re-dispatched per sample.
/// ```
/// # use segy_core::bitconverter::converter_chooser;
/// # use segy_core::enums::SampleFormatCode;
/// let bytes_to_f32_converter: fn(&[u8]) -> Result<f32, _> =
///     converter_chooser(SampleFormatCode::Float32, false).unwrap();
///
/// let bytes = 42.0f32.to_be_bytes();
/// let nmbr = bytes_to_f32_converter(&bytes[..]).unwrap();
/// assert_eq!(nmbr, 42.);
/// ```
pub fn converter_chooser(format: SampleFormatCode, le: bool) -> Result<BitConverter, SegyError> {
    use SampleFormatCode::*;

    let f: BitConverter = match (format, le) {
        (IbmFloat32, _) => decode_ibm_float32,
        (Int32, true) => decode_i32_le,
        (Int32, false) => decode_i32_be,
        (Int16, true) => decode_i16_le,
        (Int16, false) => decode_i16_be,
        (Float32, true) => decode_f32_le,
        (Float32, false) => decode_f32_be,
        (Float64, true) => decode_f64_le,
        (Float64, false) => decode_f64_be,
        (Int8, _) => decode_i8,
        (Int64, true) => decode_i64_le,
        (Int64, false) => decode_i64_be,
        (UInt32, true) => decode_u32_le,
        (UInt32, false) => decode_u32_be,
        (UInt16, true) => decode_u16_le,
        (UInt16, false) => decode_u16_be,
        (UInt64, true) => decode_u64_le,
        (UInt64, false) => decode_u64_be,
        (UInt8, _) => decode_u8,
        (Int24, _) | (UInt24, _) => {
            return Err(SegyError::BitConversionError {
                msg: "Parsing of 24-bit integers is not implemented.".to_string(),
            });
        }
        (FixPoint32, _) => {
            return Err(SegyError::BitConversionError {
                msg: "FixPoint32 are obsolete.".to_string(),
            });
        }
    };
    Ok(f)
}

/// Truncates a byte slice at its first null byte and lossily decodes the rest as UTF-8,
/// the convention this family uses for fixed-width, null-padded ASCII fields.
/// ```
/// # use segy_core::bitconverter::ascii_bytes_to_string;
/// let input = b"I am an ascii string 123456!?";
/// let output = ascii_bytes_to_string(input);
/// assert_eq!(&output, "I am an ascii string 123456!?");
///
/// let input = b"hello\0world";
/// let output = ascii_bytes_to_string(&input[..]);
/// assert_eq!(&output, "hello");
/// ```
pub fn ascii_bytes_to_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ibm_float_round_trips_within_one_ulp() {
        let packed = ieee2ibm(-118.625).unwrap();
        assert_eq!(packed, [0xC2, 0x76, 0xA0, 0x00]);
        let unpacked = ibm2ieee(packed);
        assert_eq!(unpacked, -118.625);
    }

    #[test]
    fn ibm_float_zero_round_trips() {
        assert_eq!(ieee2ibm(0.0).unwrap(), [0, 0, 0, 0]);
        assert_eq!(ibm2ieee([0, 0, 0, 0]), 0.0);
    }

    #[test]
    fn ibm_float_rejects_non_finite() {
        assert!(ieee2ibm(f32::NAN).is_err());
        assert!(ieee2ibm(f32::INFINITY).is_err());
        assert!(ieee2ibm(f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn ibm_float_arbitrary_values_round_trip() {
        for v in [1.0f32, -1.0, 0.5, 3.14159, 1_000_000.0, -0.000_123] {
            let packed = ieee2ibm(v).unwrap();
            let unpacked = ibm2ieee(packed);
            assert!((unpacked - v).abs() / v.abs() < 1e-6, "{} round-tripped to {}", v, unpacked);
        }
    }
}
