use super::BitRead;
use super::BYTE_LEN;
use crate::io::per::Error;

/// Read cursor over a borrowed byte slice. Reads never go beyond `len` bits, which might be
/// less than the bits of the slice (PDUs are octet aligned, but the content might not be) and
/// can be narrowed temporarily for open types through [`Bits::with_limit`].
#[derive(Debug, Clone, Copy)]
pub struct Bits<'a> {
    pub(crate) slice: &'a [u8],
    pub(crate) pos: usize,
    pub(crate) len: usize,
}

impl<'a> From<&'a [u8]> for Bits<'a> {
    fn from(slice: &'a [u8]) -> Self {
        Self {
            slice,
            pos: 0,
            len: slice.len() * BYTE_LEN,
        }
    }
}

/// A `len` beyond the bits of the slice is clamped to the slice
impl<'a> From<(&'a [u8], usize)> for Bits<'a> {
    fn from((slice, len): (&'a [u8], usize)) -> Self {
        Self {
            slice,
            pos: 0,
            len: len.min(slice.len() * BYTE_LEN),
        }
    }
}

impl<'a> Bits<'a> {
    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn remaining(&self) -> usize {
        self.len - self.pos
    }

    #[inline]
    pub(crate) fn ensure_remaining(&self, bits: usize) -> Result<(), Error> {
        if bits > self.remaining() {
            Err(Error::end_of_stream(bits, self.remaining()))
        } else {
            Ok(())
        }
    }

    /// Moves the position `bits` ahead without reading them
    pub fn skip(&mut self, bits: usize) -> Result<(), Error> {
        self.ensure_remaining(bits)?;
        self.pos += bits;
        Ok(())
    }

    /// Skips the padding bits up to the next octet boundary, if not already aligned
    pub fn skip_to_octet_boundary(&mut self) -> Result<(), Error> {
        let padding = (BYTE_LEN - (self.pos % BYTE_LEN)) % BYTE_LEN;
        self.skip(padding)
    }

    /// Restricts the readable bits to the next `bits` while `f` is executed. Afterwards the
    /// position is placed right behind the restricted region, regardless of how many bits `f`
    /// consumed, and the previous limit is restored.
    pub fn with_limit<T, F: FnOnce(&mut Self) -> Result<T, Error>>(
        &mut self,
        bits: usize,
        f: F,
    ) -> Result<T, Error> {
        self.ensure_remaining(bits)?;
        let original_len = self.len;
        let end = self.pos + bits;
        self.len = end;
        let result = f(self);
        self.len = original_len;
        self.pos = end;
        result
    }
}

impl BitRead for Bits<'_> {
    #[inline]
    fn read_bit(&mut self) -> Result<bool, Error> {
        self.ensure_remaining(1)?;
        let bit = self.slice[self.pos / BYTE_LEN] & (0x80 >> (self.pos % BYTE_LEN)) != 0;
        self.pos += 1;
        Ok(bit)
    }

    #[inline]
    fn read_bits(&mut self, dst: &mut [u8]) -> Result<(), Error> {
        self.read_bits_with_offset_len(dst, 0, dst.len() * BYTE_LEN)
    }

    #[inline]
    fn read_bits_with_offset(
        &mut self,
        dst: &mut [u8],
        dst_bit_offset: usize,
    ) -> Result<(), Error> {
        self.read_bits_with_offset_len(dst, dst_bit_offset, dst.len() * BYTE_LEN - dst_bit_offset)
    }

    #[inline]
    fn read_bits_with_len(&mut self, dst: &mut [u8], dst_bit_len: usize) -> Result<(), Error> {
        self.read_bits_with_offset_len(dst, 0, dst_bit_len)
    }

    #[inline]
    fn read_bits_with_offset_len(
        &mut self,
        dst: &mut [u8],
        dst_bit_offset: usize,
        dst_bit_len: usize,
    ) -> Result<(), Error> {
        self.ensure_remaining(dst_bit_len)?;
        bit_string_copy_bulked(self.slice, self.pos, dst, dst_bit_offset, dst_bit_len)?;
        self.pos += dst_bit_len;
        Ok(())
    }
}

#[inline]
fn bit_string_copy(
    src: &[u8],
    src_bit_position: usize,
    dst: &mut [u8],
    dst_bit_position: usize,
    len: usize,
) -> Result<(), Error> {
    if dst.len() * BYTE_LEN < dst_bit_position + len {
        return Err(Error::insufficient_space_in_destination_buffer());
    }
    if src.len() * BYTE_LEN < src_bit_position + len {
        return Err(Error::insufficient_data_in_source_buffer());
    }
    for bit in 0..len {
        let dst_byte_pos = (dst_bit_position + bit) / BYTE_LEN;
        let dst_bit_pos = BYTE_LEN - ((dst_bit_position + bit) % BYTE_LEN) - 1;

        let src_byte_pos = (src_bit_position + bit) / BYTE_LEN;
        let src_bit_pos = BYTE_LEN - ((src_bit_position + bit) % BYTE_LEN) - 1;

        if src[src_byte_pos] & (0x01 << src_bit_pos) != 0 {
            dst[dst_byte_pos] |= 0x01 << dst_bit_pos;
        } else {
            dst[dst_byte_pos] &= !(0x01 << dst_bit_pos);
        }
    }
    Ok(())
}

/// Copies `len` bits from `src` to `dst`, octet wise for the aligned middle part
#[inline]
pub(crate) fn bit_string_copy_bulked(
    src: &[u8],
    src_bit_position: usize,
    dst: &mut [u8],
    dst_bit_position: usize,
    len: usize,
) -> Result<(), Error> {
    // chosen by real world tests
    if len <= BYTE_LEN * 2 {
        return bit_string_copy(src, src_bit_position, dst, dst_bit_position, len);
    }

    if dst.len() * BYTE_LEN < dst_bit_position + len {
        return Err(Error::insufficient_space_in_destination_buffer());
    }
    if src.len() * BYTE_LEN < src_bit_position + len {
        return Err(Error::insufficient_data_in_source_buffer());
    }

    let bits_till_full_byte_src = (BYTE_LEN - (src_bit_position % BYTE_LEN)) % BYTE_LEN;

    if bits_till_full_byte_src != 0 {
        bit_string_copy(
            src,
            src_bit_position,
            dst,
            dst_bit_position,
            bits_till_full_byte_src.min(len),
        )?;

        if len <= bits_till_full_byte_src {
            return Ok(());
        }
    }

    let src_bit_position = src_bit_position + bits_till_full_byte_src;
    let dst_bit_position = dst_bit_position + bits_till_full_byte_src;
    let len = len - bits_till_full_byte_src;

    let dst_byte_index = dst_bit_position / BYTE_LEN;
    let dst_byte_offset = dst_bit_position % BYTE_LEN;
    let src_byte_index = src_bit_position / BYTE_LEN;
    let len_in_bytes = len / BYTE_LEN;

    if dst_byte_offset == 0 {
        dst[dst_byte_index..dst_byte_index + len_in_bytes]
            .copy_from_slice(&src[src_byte_index..src_byte_index + len_in_bytes]);
    } else {
        for index in 0..len_in_bytes {
            let byte = src[index + src_byte_index];
            let half_left = byte >> dst_byte_offset;
            let half_right = byte << (BYTE_LEN - dst_byte_offset);

            // keep the bits on the left that were copied already
            dst[index + dst_byte_index] =
                (dst[index + dst_byte_index] & (0xFF << (BYTE_LEN - dst_byte_offset))) | half_left;
            dst[index + dst_byte_index + 1] = half_right;
        }
    }

    if len % BYTE_LEN == 0 {
        Ok(())
    } else {
        bit_string_copy(
            src,
            src_bit_position + (len_in_bytes * BYTE_LEN),
            dst,
            dst_bit_position + (len_in_bytes * BYTE_LEN),
            len % BYTE_LEN,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::per::ErrorKind;

    #[test]
    fn test_read_bit_stops_at_len() {
        let data = [0b1010_0000];
        let mut bits = Bits::from((&data[..], 3));
        assert!(bits.read_bit().unwrap());
        assert!(!bits.read_bit().unwrap());
        assert!(bits.read_bit().unwrap());
        assert_eq!(
            &ErrorKind::EndOfStream {
                requested: 1,
                available: 0
            },
            bits.read_bit().unwrap_err().kind()
        );
    }

    #[test]
    fn test_len_is_clamped_to_the_slice() {
        let data = [0b1000_0000];
        let mut bits = Bits::from((&data[..], 20));
        assert_eq!(8, bits.len());
        assert!(bits.read_bit().unwrap());
        assert_eq!(7, bits.remaining());
        let mut dst = [0u8; 2];
        assert!(matches!(
            bits.read_bits(&mut dst).unwrap_err().kind(),
            ErrorKind::EndOfStream { .. }
        ));
    }

    #[test]
    fn test_read_bits_does_not_read_beyond_the_slice() {
        let data = [0xFFu8, 0xFF];
        let mut bits = Bits::from(&data[..]);
        let mut dst = [0u8; 3];
        assert!(bits.read_bits(&mut dst).is_err());
        // a failed read does not move the cursor
        assert_eq!(0, bits.pos());
    }

    #[test]
    fn test_with_limit_skips_unread_bits() {
        let data = [0b1100_0000, 0b1000_0000];
        let mut bits = Bits::from(&data[..]);
        let first = bits.with_limit(8, |bits| bits.read_bit()).unwrap();
        assert!(first);
        assert_eq!(8, bits.pos());
        assert!(bits.read_bit().unwrap());
        assert_eq!(7, bits.remaining());
    }

    #[test]
    fn test_with_limit_restricts_reading() {
        let data = [0xFFu8, 0xFF];
        let mut bits = Bits::from(&data[..]);
        let mut dst = [0u8; 2];
        assert!(bits.with_limit(8, |bits| bits.read_bits(&mut dst)).is_err());
        assert_eq!(8, bits.pos());
        assert_eq!(16, bits.len());
    }

    #[test]
    fn test_bulked_copy_unaligned() {
        let src = [0b1010_1010, 0b1100_1100, 0b1111_0000, 0b0000_1111];
        let mut dst = [0u8; 4];
        bit_string_copy_bulked(&src, 3, &mut dst, 5, 24).unwrap();
        let mut expected = [0u8; 4];
        bit_string_copy(&src, 3, &mut expected, 5, 24).unwrap();
        assert_eq!(expected, dst);
    }
}
