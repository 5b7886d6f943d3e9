/** ------------------------------------------------------------
 * Byte stack holding integers as raw bytes
 * ------------------------------------------------------------- */
use crate::byte_order::ByteOrder;
use crate::decode::{FromBytes, ToBytes};
use crate::errors::TailbytesError;
use crate::tail::pop_n;

/**
 * Stack of raw bytes.
 *
 * Integers are pushed as their byte representation in the stack's
 * byte order and popped back at a fixed width.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteStack {
    bytes: Vec<u8>,
    order: ByteOrder,
}

impl ByteStack {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            bytes: Vec::new(),
            order,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    pub fn push_int<I: ToBytes>(&mut self, value: I) {
        let bytes = value.to_bytes(self.order);
        self.push_bytes(&bytes);
    }

    pub fn pop_n(&mut self, count: usize) -> Result<Vec<u8>, TailbytesError> {
        Ok(pop_n(&mut self.bytes, count)?)
    }

    /// Pop `I::WIDTH` bytes and read them as an `I`
    pub fn pop_int<I: FromBytes>(&mut self) -> Result<I, TailbytesError> {
        let bytes = pop_n(&mut self.bytes, I::WIDTH)?;
        Ok(I::from_bytes(&bytes, self.order)?)
    }
}

impl From<Vec<u8>> for ByteStack {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            order: ByteOrder::default(),
        }
    }
}
