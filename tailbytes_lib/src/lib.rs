mod byte_order;
mod decode;
mod errors;
mod stack;
mod tail;

pub use byte_order::ByteOrder;
pub use decode::{decode_bytes, decode_signed, decode_with, DecodeConfig, FromBytes, ToBytes};
pub use errors::{ConfigError, DecodeError, InvalidReason, TailError, TailbytesError};
pub use stack::ByteStack;
pub use tail::pop_n;

pub use num_bigint::BigInt;

/**
 * Pop `count` values off the tail of `seq` and decode them as a signed
 * integer
 *
 * \param seq    Sequence of byte values, shortened by `count`
 * \param count  Number of trailing values to decode
 * \param config Byte order to decode with
 *
 */
pub fn pop_decode(
    seq: &mut Vec<i64>,
    count: usize,
    config: &DecodeConfig,
) -> Result<BigInt, TailbytesError> {
    let popped = pop_n(seq, count)?;
    Ok(decode_with(&popped, config)?)
}
