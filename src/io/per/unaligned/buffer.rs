use super::slice::bit_string_copy_bulked;
use super::BitWrite;
use super::BYTE_LEN;
use crate::io::per::Error;
use crate::io::per::ErrorKind;

/// Growable write buffer. The optional capacity limits the number of bits that can be written
/// in total, exceeding it fails with [`ErrorKind::CapacityExceeded`] before anything is written.
#[derive(Debug, Default, Clone)]
pub struct BitBuffer {
    pub(crate) buffer: Vec<u8>,
    pub(crate) write_position: usize,
    pub(crate) capacity_bits: Option<usize>,
}

impl BitBuffer {
    pub fn with_capacity(capacity_bytes: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity_bytes),
            ..Default::default()
        }
    }

    /// Creates a buffer that refuses to grow beyond `limit_bits`
    pub fn with_limit(limit_bits: usize) -> Self {
        Self {
            buffer: Vec::with_capacity((limit_bits + BYTE_LEN - 1) / BYTE_LEN),
            write_position: 0,
            capacity_bits: Some(limit_bits),
        }
    }

    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.buffer[..]
    }

    #[inline]
    pub const fn bit_len(&self) -> usize {
        self.write_position
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.write_position = 0;
    }

    #[inline]
    pub(crate) fn ensure_can_write_additional_bits(&mut self, bit_len: usize) -> Result<(), Error> {
        let required_bits = self.write_position + bit_len;
        if let Some(capacity_bits) = self.capacity_bits {
            if required_bits > capacity_bits {
                return Err(ErrorKind::CapacityExceeded {
                    capacity_bits,
                    required_bits,
                }
                .into());
            }
        }
        let required_bytes = (required_bits + BYTE_LEN - 1) / BYTE_LEN;
        if required_bytes > self.buffer.len() {
            self.buffer.resize(required_bytes, 0x00);
        }
        Ok(())
    }
}

impl From<BitBuffer> for Vec<u8> {
    fn from(buffer: BitBuffer) -> Self {
        buffer.buffer
    }
}

impl BitWrite for BitBuffer {
    #[inline]
    fn write_bit(&mut self, bit: bool) -> Result<(), Error> {
        self.ensure_can_write_additional_bits(1)?;
        let mask = 0x80 >> (self.write_position % BYTE_LEN);
        if bit {
            self.buffer[self.write_position / BYTE_LEN] |= mask;
        } else {
            self.buffer[self.write_position / BYTE_LEN] &= !mask;
        }
        self.write_position += 1;
        Ok(())
    }

    #[inline]
    fn write_bits(&mut self, src: &[u8]) -> Result<(), Error> {
        self.write_bits_with_offset_len(src, 0, src.len() * BYTE_LEN)
    }

    #[inline]
    fn write_bits_with_offset(&mut self, src: &[u8], src_bit_offset: usize) -> Result<(), Error> {
        self.write_bits_with_offset_len(src, src_bit_offset, src.len() * BYTE_LEN - src_bit_offset)
    }

    #[inline]
    fn write_bits_with_len(&mut self, src: &[u8], bit_len: usize) -> Result<(), Error> {
        self.write_bits_with_offset_len(src, 0, bit_len)
    }

    #[inline]
    fn write_bits_with_offset_len(
        &mut self,
        src: &[u8],
        src_bit_offset: usize,
        src_bit_len: usize,
    ) -> Result<(), Error> {
        self.ensure_can_write_additional_bits(src_bit_len)?;
        bit_string_copy_bulked(
            src,
            src_bit_offset,
            &mut self.buffer[..],
            self.write_position,
            src_bit_len,
        )?;
        self.write_position += src_bit_len;
        Ok(())
    }
}
