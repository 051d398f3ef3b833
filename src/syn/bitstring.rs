use crate::io::per::Error;
use crate::syn::{UperReader, UperWriter};

/// Bit string content that does not fit into an unsigned integer, left aligned
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitString(Vec<u8>, u64);

impl BitString {
    pub fn with_len(bits: u64) -> Self {
        BitString(vec![0x00; ((bits + 7) / 8) as usize], bits)
    }

    pub fn from_bytes(bytes: Vec<u8>, bits: u64) -> Self {
        debug_assert!(bytes.len() as u64 * 8 >= bits);
        BitString(bytes, bits)
    }

    pub fn is_bit_set(&self, bit: u64) -> bool {
        let byte = bit / 8;
        let mask = 0x80_u8 >> (bit % 8);
        bit < self.1
            && self
                .0
                .get(byte as usize)
                .map(|b| *b & mask != 0)
                .unwrap_or(false)
    }

    pub fn set_bit(&mut self, bit: u64) {
        self.ensure_vec_large_enough(bit + 1);
        let mask = 0x80_u8 >> (bit % 8);
        self.0[(bit / 8) as usize] |= mask;
    }

    pub fn reset_bit(&mut self, bit: u64) {
        self.ensure_vec_large_enough(bit + 1);
        let mask = 0x80_u8 >> (bit % 8);
        self.0[(bit / 8) as usize] &= !mask;
    }

    fn ensure_vec_large_enough(&mut self, bits: u64) {
        if bits > self.1 {
            let bytes = ((bits + 7) / 8) as usize;
            if self.0.len() < bytes {
                self.0.resize(bytes, 0x00);
            }
            self.1 = bits;
        }
    }

    #[inline]
    pub fn bit_len(&self) -> u64 {
        self.1
    }

    #[inline]
    pub fn as_byte_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn write_sized(
        &self,
        writer: &mut UperWriter,
        lower: u64,
        upper: u64,
    ) -> Result<(), Error> {
        writer.write_bit_string(self.as_byte_slice(), self.1, lower, upper)
    }

    pub fn read_sized(reader: &mut UperReader<'_>, lower: u64, upper: u64) -> Result<Self, Error> {
        let (bytes, bits) = reader.read_bit_string(lower, upper)?;
        Ok(BitString(bytes, bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset() {
        let mut bits = BitString::with_len(70);
        assert!(!bits.is_bit_set(69));
        bits.set_bit(69);
        assert!(bits.is_bit_set(69));
        bits.reset_bit(69);
        assert!(!bits.is_bit_set(69));
        assert_eq!(70, bits.bit_len());
        assert_eq!(9, bits.as_byte_slice().len());
    }

    #[test]
    fn test_grows_on_demand() {
        let mut bits = BitString::default();
        bits.set_bit(9);
        assert_eq!(10, bits.bit_len());
        assert!(bits.is_bit_set(9));
        assert!(!bits.is_bit_set(10));
    }
}
