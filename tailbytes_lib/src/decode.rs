/** ------------------------------------------------------------
 * Two's complement decoding of byte sequences
 * ------------------------------------------------------------- */
use crate::byte_order::ByteOrder;
use crate::errors::{DecodeError, InvalidReason};
use log::{debug, trace};
use num_bigint::BigInt;

/**
 * Decoding parameters
 */
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DecodeConfig {
    pub byte_order: ByteOrder,
}

impl DecodeConfig {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self { byte_order }
    }
}

/**
 * Check that every value of a loosely typed sequence is a byte
 */
fn to_byte_vec(values: &[i64]) -> Result<Vec<u8>, DecodeError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u8::try_from(value).map_err(|_| DecodeError::InvalidByteSequence {
                reason: InvalidReason::OutOfRange { index, value },
            })
        })
        .collect()
}

/**
 * Decode a sequence of byte values into a signed integer.
 *
 * The width of the integer is the length of the sequence, so `[0xff]`
 * decodes to -1 while `[0xff, 0x00]` (little endian) decodes to 255.
 * There is no upper bound on the length.
 *
 * # Example
 *
 * ```
 * use num_bigint::BigInt;
 * use tailbytes_lib::{decode_signed, ByteOrder};
 *
 * let value = decode_signed(&[1, 56, 1, 67], ByteOrder::Little).unwrap();
 * assert_eq!(value, BigInt::from(1124153345));
 * ```
 */
pub fn decode_signed(values: &[i64], order: ByteOrder) -> Result<BigInt, DecodeError> {
    let bytes = to_byte_vec(values)?;
    decode_bytes(&bytes, order)
}

/**
 * Same as [`decode_signed`], for input that is already typed as bytes
 */
pub fn decode_bytes(bytes: &[u8], order: ByteOrder) -> Result<BigInt, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidByteSequence {
            reason: InvalidReason::Empty,
        });
    }

    let order = order.resolve();
    trace!("bytes {:02x?} ({} endian)", bytes, order);
    let value = if order.is_little() {
        BigInt::from_signed_bytes_le(bytes)
    } else {
        BigInt::from_signed_bytes_be(bytes)
    };

    debug!("decoded {} bytes into {}", bytes.len(), value);
    Ok(value)
}

/**
 * Decoding with a configuration instead of a bare byte order
 */
pub fn decode_with(values: &[i64], config: &DecodeConfig) -> Result<BigInt, DecodeError> {
    decode_signed(values, config.byte_order)
}

/**
 * Fixed width integers that can be read from raw bytes
 */
pub trait FromBytes: Sized {
    const WIDTH: usize;

    fn from_bytes(bytes: &[u8], order: ByteOrder) -> Result<Self, DecodeError>;
}

/**
 * Fixed width integers that can be written as raw bytes
 */
pub trait ToBytes {
    fn to_bytes(&self, order: ByteOrder) -> Vec<u8>;
}

macro_rules! impl_bytes {
    ($($ty:ty),*) => {
        $(
            impl FromBytes for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                fn from_bytes(bytes: &[u8], order: ByteOrder) -> Result<Self, DecodeError> {
                    let array: [u8; std::mem::size_of::<$ty>()] =
                        bytes.try_into().map_err(|_| DecodeError::LengthMismatch {
                            expected: Self::WIDTH,
                            given: bytes.len(),
                        })?;
                    Ok(if order.is_little() {
                        <$ty>::from_le_bytes(array)
                    } else {
                        <$ty>::from_be_bytes(array)
                    })
                }
            }

            impl ToBytes for $ty {
                fn to_bytes(&self, order: ByteOrder) -> Vec<u8> {
                    if order.is_little() {
                        self.to_le_bytes().into()
                    } else {
                        self.to_be_bytes().into()
                    }
                }
            }
        )*
    };
}

impl_bytes!(i8, i16, i32, i64, i128, u8, u16, u32, u64);
