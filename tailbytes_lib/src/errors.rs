/** ------------------------------------------------------------
 * Error types raised by this lib.
 * ------------------------------------------------------------- */
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TailError {
    #[error("Cannot pop {requested} elements from a sequence of length {available}")]
    EmptySequence { requested: usize, available: usize },
}

/**
 * Why a byte sequence was rejected
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Empty,
    OutOfRange { index: usize, value: i64 },
    NotAByte { index: usize },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Empty => write!(f, "sequence is empty"),
            InvalidReason::OutOfRange { index, value } => {
                write!(f, "value {} at index {} is not a byte", value, index)
            }
            InvalidReason::NotAByte { index } => {
                write!(f, "element at index {} is not a byte", index)
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid byte sequence: {reason}")]
    InvalidByteSequence { reason: InvalidReason },
    #[error("Expected exactly {expected} bytes, got {given}")]
    LengthMismatch { expected: usize, given: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown byte order '{0}' (expected little, big or native)")]
    UnknownByteOrder(String),
}

/**
 * Umbrella error for callers chaining pop and decode
 */
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TailbytesError {
    #[error(transparent)]
    Tail(#[from] TailError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
