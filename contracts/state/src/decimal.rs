//! 16-byte decimal wire format.
//!
//! Plugin programs store fixed-point values as `rust_decimal::Decimal::serialize()`
//! output: a little-endian flags word (scale in bits 16..24, sign in bit 31)
//! followed by the 96-bit mantissa.

use borsh::io::{Error, ErrorKind, Read, Result as IoResult, Write};
use borsh::BorshDeserialize;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::StateError;

pub const DECIMAL_LEN: usize = 16;

const MAX_SCALE: u32 = 28;
const RESERVED_FLAG_BITS: u32 = 0x7F00_FFFF;

pub fn decode_decimal(bytes: [u8; DECIMAL_LEN]) -> Result<Decimal, StateError> {
    let flags = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    if flags & RESERVED_FLAG_BITS != 0 {
        return Err(StateError::InvalidDecimal(format!(
            "reserved flag bits set: {flags:#010x}"
        )));
    }

    let scale = (flags >> 16) & 0xFF;
    if scale > MAX_SCALE {
        return Err(StateError::InvalidDecimal(format!(
            "scale {scale} exceeds {MAX_SCALE}"
        )));
    }

    Ok(Decimal::deserialize(bytes))
}

pub fn encode_decimal(value: Decimal) -> [u8; DECIMAL_LEN] {
    value.serialize()
}

pub fn decimal_from_f64(value: f64) -> Result<Decimal, StateError> {
    if !value.is_finite() {
        return Err(StateError::InvalidDecimal(format!("{value} is not finite")));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| StateError::InvalidDecimal(format!("{value} is out of range")))
}

fn invalid_data(e: StateError) -> Error {
    Error::new(ErrorKind::InvalidData, e.to_string())
}

pub(crate) fn read_decimal<R: Read>(reader: &mut R) -> IoResult<Decimal> {
    let bytes = <[u8; DECIMAL_LEN]>::deserialize_reader(reader)?;
    decode_decimal(bytes).map_err(invalid_data)
}

pub(crate) fn write_decimal<W: Write>(value: &Decimal, writer: &mut W) -> IoResult<()> {
    writer.write_all(&encode_decimal(*value))
}

pub(crate) fn read_decimal_array<R: Read, const N: usize>(
    reader: &mut R,
) -> IoResult<[Decimal; N]> {
    let raw = <[[u8; DECIMAL_LEN]; N]>::deserialize_reader(reader)?;
    let mut values = [Decimal::ZERO; N];
    for (value, bytes) in values.iter_mut().zip(raw) {
        *value = decode_decimal(bytes).map_err(invalid_data)?;
    }
    Ok(values)
}

pub(crate) fn write_decimal_array<W: Write, const N: usize>(
    values: &[Decimal; N],
    writer: &mut W,
) -> IoResult<()> {
    for value in values {
        write_decimal(value, writer)?;
    }
    Ok(())
}
