use crate::io::per::bit_width;
use crate::io::per::Error;
use crate::io::per::ErrorKind;
use crate::io::per::PackedRead;
use crate::io::per::PackedWrite;
use crate::io::per::LENGTH_CONSTRAINED_LIMIT;

pub mod buffer;
pub mod slice;

pub const BYTE_LEN: usize = 8;

/// Length determinants in this range are written in a single octet (ITU-TX.691 11.9.3.6)
const LENGTH_DETERMINANT_SHORT: u64 = 127;
/// Length determinants in this range are written in two octets (ITU-TX.691 11.9.3.7)
const LENGTH_DETERMINANT_LONG: u64 = 16 * 1024 - 1;

pub trait BitRead {
    fn read_bit(&mut self) -> Result<bool, Error>;

    fn read_bits(&mut self, dst: &mut [u8]) -> Result<(), Error>;

    fn read_bits_with_offset(&mut self, dst: &mut [u8], dst_bit_offset: usize)
        -> Result<(), Error>;

    fn read_bits_with_len(&mut self, dst: &mut [u8], dst_bit_len: usize) -> Result<(), Error>;

    fn read_bits_with_offset_len(
        &mut self,
        dst: &mut [u8],
        dst_bit_offset: usize,
        dst_bit_len: usize,
    ) -> Result<(), Error>;
}

impl<T: BitRead> PackedRead for T {
    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 12
    #[inline]
    fn read_boolean(&mut self) -> Result<bool, Error> {
        self.read_bit()
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 11.5
    #[inline]
    fn read_constrained_whole_number(
        &mut self,
        lower_bound: i64,
        upper_bound: i64,
    ) -> Result<i64, Error> {
        let range = upper_bound - lower_bound;
        if range > 0 {
            let offset = self.read_non_negative_binary_integer(None, Some(range as u64))?;
            let value = lower_bound + offset as i64;
            // a width of n bits can carry more than the range, e.g. 504..511 for 0..503
            if value > upper_bound {
                Err(Error::value_not_in_range(value, lower_bound, upper_bound))
            } else {
                Ok(value)
            }
        } else {
            Ok(lower_bound)
        }
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 11.9.4
    fn read_length_determinant(
        &mut self,
        lower_bound: Option<u64>,
        upper_bound: Option<u64>,
    ) -> Result<u64, Error> {
        match upper_bound {
            Some(upper) if upper < LENGTH_CONSTRAINED_LIMIT => {
                // 11.9.4.1 -> 11.9.3.3
                let lower = lower_bound.unwrap_or(0);
                if lower == upper {
                    Ok(lower)
                } else {
                    let length = self.read_non_negative_binary_integer(Some(lower), Some(upper))?;
                    if length > upper {
                        Err(Error::size_not_in_range(length, lower, upper))
                    } else {
                        Ok(length)
                    }
                }
            }
            _ => {
                // 11.9.3.5
                if !self.read_bit()? {
                    // 11.9.3.6: less than or equal to 127
                    self.read_non_negative_binary_integer(None, Some(LENGTH_DETERMINANT_SHORT))
                } else if !self.read_bit()? {
                    // 11.9.3.7: greater than 127 and less than or equal to 16K
                    self.read_non_negative_binary_integer(None, Some(LENGTH_DETERMINANT_LONG))
                } else {
                    // 11.9.3.8: fragments are never produced for RRC PDUs
                    Err(Error::unsupported("fragmented length determinant"))
                }
            }
        }
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 11.9.3.4
    #[inline]
    fn read_normally_small_length(&mut self) -> Result<u64, Error> {
        self.read_normally_small_non_negative_whole_number()
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 11.6
    fn read_normally_small_non_negative_whole_number(&mut self) -> Result<u64, Error> {
        let greater_or_equal_to_64 = self.read_boolean()?;
        if greater_or_equal_to_64 {
            // 11.6.2 -> 11.7.4: semi constrained with a lower bound of zero
            self.read_non_negative_binary_integer(None, None)
        } else {
            // 11.6.1
            self.read_non_negative_binary_integer(None, Some(63))
        }
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 11.3
    fn read_non_negative_binary_integer(
        &mut self,
        lower_bound: Option<u64>,
        upper_bound: Option<u64>,
    ) -> Result<u64, Error> {
        let range = match (lower_bound, upper_bound) {
            (None, None) => None,
            (lb, ub) => Some((lb.unwrap_or(0), ub.unwrap_or(i64::MAX as u64))),
        };

        if let Some((lower, upper)) = range {
            let offset_bits = (upper - lower).leading_zeros() as usize;
            let mut bytes = [0u8; std::mem::size_of::<u64>()];
            self.read_bits_with_offset(&mut bytes, offset_bits)?;
            Ok(lower + u64::from_be_bytes(bytes))
        } else {
            let length = self.read_length_determinant(None, None)? as usize;
            let mut bytes = [0u8; std::mem::size_of::<u64>()];
            if length > bytes.len() {
                return Err(Error::unsupported("integer wider than 64 bits"));
            }
            let offset = bytes.len() - length;
            self.read_bits(&mut bytes[offset..])?;
            Ok(u64::from_be_bytes(bytes))
        }
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 16
    fn read_bitstring(
        &mut self,
        lower_bound_size: Option<u64>,
        upper_bound_size: Option<u64>,
    ) -> Result<(Vec<u8>, u64), Error> {
        let bit_len = match (lower_bound_size, upper_bound_size) {
            // 16.10
            (Some(lower), Some(upper)) if lower == upper && upper < LENGTH_CONSTRAINED_LIMIT => {
                upper
            }
            // 16.11
            (lower, upper) => self.read_length_determinant(lower, upper)?,
        };

        let mut buffer = vec![0u8; (bit_len as usize + BYTE_LEN - 1) / BYTE_LEN];
        self.read_bits_with_len(&mut buffer[..], bit_len as usize)?;
        Ok((buffer, bit_len))
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 17
    fn read_octetstring(
        &mut self,
        lower_bound_size: Option<u64>,
        upper_bound_size: Option<u64>,
    ) -> Result<Vec<u8>, Error> {
        let byte_len = match (lower_bound_size, upper_bound_size) {
            // 17.5
            (_, Some(0)) => return Ok(Vec::default()),
            // 17.7
            (Some(lower), Some(upper)) if lower == upper && upper < LENGTH_CONSTRAINED_LIMIT => {
                upper
            }
            // 17.8
            (lower, upper) => self.read_length_determinant(lower, upper)?,
        };

        let mut buffer = vec![0u8; byte_len as usize];
        self.read_bits(&mut buffer[..])?;
        Ok(buffer)
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 23
    fn read_choice_index(&mut self, std_variants: u64, extensible: bool) -> Result<u64, Error> {
        if extensible && self.read_bit()? {
            // 23.8
            Ok(self.read_normally_small_non_negative_whole_number()? + std_variants)
        } else if std_variants > 1 {
            // 23.6
            self.read_non_negative_binary_integer(None, Some(std_variants - 1))
        } else {
            // 23.4
            Ok(0)
        }
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 14
    fn read_enumeration_index(&mut self, std_variants: u64, extensible: bool) -> Result<u64, Error> {
        if extensible && self.read_bit()? {
            // 14.3
            Ok(self.read_normally_small_non_negative_whole_number()? + std_variants)
        } else {
            // 14.2
            self.read_non_negative_binary_integer(None, Some(std_variants.saturating_sub(1)))
        }
    }
}

pub trait BitWrite {
    fn write_bit(&mut self, bit: bool) -> Result<(), Error>;

    fn write_bits(&mut self, src: &[u8]) -> Result<(), Error>;

    fn write_bits_with_offset(&mut self, src: &[u8], src_bit_offset: usize) -> Result<(), Error>;

    fn write_bits_with_len(&mut self, src: &[u8], bit_len: usize) -> Result<(), Error>;

    fn write_bits_with_offset_len(
        &mut self,
        src: &[u8],
        src_bit_offset: usize,
        src_bit_len: usize,
    ) -> Result<(), Error>;
}

impl<T: BitWrite> PackedWrite for T {
    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 12
    #[inline]
    fn write_boolean(&mut self, boolean: bool) -> Result<(), Error> {
        self.write_bit(boolean)
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 11.5
    #[inline]
    fn write_constrained_whole_number(
        &mut self,
        lower_bound: i64,
        upper_bound: i64,
        value: i64,
    ) -> Result<(), Error> {
        if value < lower_bound || value > upper_bound {
            return Err(Error::value_not_in_range(value, lower_bound, upper_bound));
        }
        let range = upper_bound - lower_bound;
        if range > 0 {
            self.write_non_negative_binary_integer(
                None,
                Some(range as u64),
                (value - lower_bound) as u64,
            )
        } else {
            Ok(())
        }
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 11.9.4
    fn write_length_determinant(
        &mut self,
        lower_bound: Option<u64>,
        upper_bound: Option<u64>,
        length: u64,
    ) -> Result<(), Error> {
        match upper_bound {
            Some(upper) if upper < LENGTH_CONSTRAINED_LIMIT => {
                // 11.9.4.1 -> 11.9.3.3
                let lower = lower_bound.unwrap_or(0);
                if length < lower || length > upper {
                    Err(Error::size_not_in_range(length, lower, upper))
                } else if lower == upper {
                    Ok(())
                } else {
                    self.write_non_negative_binary_integer(Some(lower), Some(upper), length)
                }
            }
            _ => {
                if length <= LENGTH_DETERMINANT_SHORT {
                    // 11.9.3.6
                    self.write_bit(false)?;
                    self.write_non_negative_binary_integer(
                        None,
                        Some(LENGTH_DETERMINANT_SHORT),
                        length,
                    )
                } else if length <= LENGTH_DETERMINANT_LONG {
                    // 11.9.3.7
                    self.write_bit(true)?;
                    self.write_bit(false)?;
                    self.write_non_negative_binary_integer(
                        None,
                        Some(LENGTH_DETERMINANT_LONG),
                        length,
                    )
                } else {
                    Err(Error::size_not_in_range(length, 0, LENGTH_DETERMINANT_LONG))
                }
            }
        }
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 11.9.3.4
    #[inline]
    fn write_normally_small_length(&mut self, value: u64) -> Result<(), Error> {
        self.write_normally_small_non_negative_whole_number(value)
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 11.6
    fn write_normally_small_non_negative_whole_number(&mut self, value: u64) -> Result<(), Error> {
        if value <= 63 {
            // 11.6.1
            self.write_bit(false)?;
            self.write_non_negative_binary_integer(None, Some(63), value)
        } else {
            // 11.6.2
            self.write_bit(true)?;
            self.write_non_negative_binary_integer(None, None, value)
        }
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 11.3
    fn write_non_negative_binary_integer(
        &mut self,
        lower_bound: Option<u64>,
        upper_bound: Option<u64>,
        value: u64,
    ) -> Result<(), Error> {
        let range = match (lower_bound, upper_bound) {
            (None, None) => None,
            (lb, ub) => Some((lb.unwrap_or(0), ub.unwrap_or(i64::MAX as u64))),
        };

        if let Some((lower, upper)) = range {
            let bits = bit_width(lower as i64, upper as i64);
            let bytes = (value - lower).to_be_bytes();
            self.write_bits_with_offset(&bytes[..], bytes.len() * BYTE_LEN - bits)
        } else {
            let bytes = value.to_be_bytes();
            let leading_zero_bytes = (value.leading_zeros() as usize / BYTE_LEN).min(bytes.len() - 1);
            self.write_length_determinant(None, None, (bytes.len() - leading_zero_bytes) as u64)?;
            self.write_bits(&bytes[leading_zero_bytes..])
        }
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 16
    fn write_bitstring(
        &mut self,
        lower_bound_size: Option<u64>,
        upper_bound_size: Option<u64>,
        src: &[u8],
        offset: u64,
        len: u64,
    ) -> Result<(), Error> {
        match (lower_bound_size, upper_bound_size) {
            // 16.10
            (Some(lower), Some(upper)) if lower == upper && upper < LENGTH_CONSTRAINED_LIMIT => {
                if len != upper {
                    return Err(Error::size_not_in_range(len, lower, upper));
                }
            }
            // 16.11
            (lower, upper) => self.write_length_determinant(lower, upper, len)?,
        }
        self.write_bits_with_offset_len(src, offset as usize, len as usize)
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 17
    fn write_octetstring(
        &mut self,
        lower_bound_size: Option<u64>,
        upper_bound_size: Option<u64>,
        src: &[u8],
    ) -> Result<(), Error> {
        let len = src.len() as u64;
        match (lower_bound_size, upper_bound_size) {
            // 17.7
            (Some(lower), Some(upper)) if lower == upper && upper < LENGTH_CONSTRAINED_LIMIT => {
                if len != upper {
                    return Err(Error::size_not_in_range(len, lower, upper));
                }
            }
            // 17.8
            (lower, upper) => self.write_length_determinant(lower, upper, len)?,
        }
        self.write_bits(src)
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 23
    fn write_choice_index(
        &mut self,
        std_variants: u64,
        extensible: bool,
        index: u64,
    ) -> Result<(), Error> {
        if index >= std_variants && !extensible {
            return Err(Error::value_not_in_range(
                index as i64,
                0,
                std_variants as i64 - 1,
            ));
        }
        if extensible {
            self.write_bit(index >= std_variants)?;
        }
        if index >= std_variants {
            // 23.8
            self.write_normally_small_non_negative_whole_number(index - std_variants)
        } else if std_variants > 1 {
            // 23.6
            self.write_non_negative_binary_integer(None, Some(std_variants - 1), index)
        } else {
            // 23.4
            Ok(())
        }
    }

    /// ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 14
    fn write_enumeration_index(
        &mut self,
        std_variants: u64,
        extensible: bool,
        index: u64,
    ) -> Result<(), Error> {
        if index >= std_variants && !extensible {
            return Err(ErrorKind::ValueNotInRange(
                index as i64,
                0,
                std_variants as i64 - 1,
            )
            .into());
        }
        if extensible {
            self.write_bit(index >= std_variants)?;
        }
        if index >= std_variants {
            // 14.3
            self.write_normally_small_non_negative_whole_number(index - std_variants)
        } else {
            // 14.2
            self.write_non_negative_binary_integer(
                None,
                Some(std_variants.saturating_sub(1)),
                index,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::buffer::BitBuffer;
    use super::slice::Bits;
    use super::*;

    fn written(f: impl FnOnce(&mut BitBuffer) -> Result<(), Error>) -> (Vec<u8>, usize) {
        let mut buffer = BitBuffer::default();
        f(&mut buffer).unwrap();
        let bits = buffer.bit_len();
        (buffer.into(), bits)
    }

    #[test]
    fn test_constrained_whole_number_uses_minimal_width() {
        let (bytes, bits) = written(|b| b.write_constrained_whole_number(0, 503, 357));
        assert_eq!(9, bits);
        assert_eq!(&[0b1011_0010, 0b1000_0000], &bytes[..]);

        let mut bits = Bits::from((&bytes[..], 9));
        assert_eq!(357, bits.read_constrained_whole_number(0, 503).unwrap());
    }

    #[test]
    fn test_constrained_whole_number_rejects_out_of_range() {
        let mut buffer = BitBuffer::default();
        assert_eq!(
            ErrorKind::ValueNotInRange(504, 0, 503),
            buffer
                .write_constrained_whole_number(0, 503, 504)
                .unwrap_err()
                .into_kind()
        );
        assert_eq!(
            ErrorKind::ValueNotInRange(-71, -70, -22),
            buffer
                .write_constrained_whole_number(-70, -22, -71)
                .unwrap_err()
                .into_kind()
        );
        assert_eq!(0, buffer.bit_len());
    }

    #[test]
    fn test_decoded_value_beyond_upper_bound_is_rejected() {
        // nine bits of 1 => 511 > 503
        let data = [0xFF, 0x80];
        let mut bits = Bits::from((&data[..], 9));
        assert_eq!(
            &ErrorKind::ValueNotInRange(511, 0, 503),
            bits.read_constrained_whole_number(0, 503).unwrap_err().kind()
        );
    }

    #[test]
    fn test_negative_lower_bound() {
        let (bytes, bits) = written(|b| b.write_constrained_whole_number(-70, -22, -64));
        assert_eq!(6, bits);
        let mut reader = Bits::from((&bytes[..], bits));
        assert_eq!(-64, reader.read_constrained_whole_number(-70, -22).unwrap());
    }

    #[test]
    fn test_unconstrained_length_determinant() {
        let (bytes, bits) = written(|b| b.write_length_determinant(None, None, 8));
        assert_eq!((vec![0x08], 8), (bytes, bits));

        let (bytes, bits) = written(|b| b.write_length_determinant(None, None, 300));
        assert_eq!(16, bits);
        assert_eq!(vec![0x81, 0x2C], bytes);
        let mut reader = Bits::from((&bytes[..], bits));
        assert_eq!(300, reader.read_length_determinant(None, None).unwrap());
    }

    #[test]
    fn test_constrained_length_determinant() {
        let (bytes, bits) = written(|b| b.write_length_determinant(Some(2), Some(3), 3));
        assert_eq!((vec![0x80], 1), (bytes, bits));
        let mut buffer = BitBuffer::default();
        assert_eq!(
            &ErrorKind::SizeNotInRange(4, 2, 3),
            buffer
                .write_length_determinant(Some(2), Some(3), 4)
                .unwrap_err()
                .kind()
        );
    }

    #[test]
    fn test_normally_small_number() {
        let (bytes, bits) = written(|b| b.write_normally_small_non_negative_whole_number(4));
        assert_eq!((vec![0b0000_1000], 7), (bytes, bits));

        let (bytes, bits) = written(|b| b.write_normally_small_non_negative_whole_number(64));
        assert_eq!(1 + 8 + 8, bits);
        let mut reader = Bits::from((&bytes[..], bits));
        assert_eq!(
            64,
            reader
                .read_normally_small_non_negative_whole_number()
                .unwrap()
        );
    }

    #[test]
    fn test_extensible_choice_index() {
        let (bytes, bits) = written(|b| b.write_choice_index(5, true, 5));
        assert_eq!(1 + 7, bits);
        let mut reader = Bits::from((&bytes[..], bits));
        assert_eq!(5, reader.read_choice_index(5, true).unwrap());

        let (bytes, bits) = written(|b| b.write_choice_index(2, false, 1));
        assert_eq!((vec![0x80], 1), (bytes, bits));

        let mut buffer = BitBuffer::default();
        assert!(buffer.write_choice_index(2, false, 2).is_err());
    }

    #[test]
    fn test_enumeration_index_of_single_variant_takes_no_bits() {
        let (_, bits) = written(|b| b.write_enumeration_index(1, false, 0));
        assert_eq!(0, bits);
    }

    #[test]
    fn test_octetstring_fixed_and_variable() {
        let (bytes, bits) = written(|b| b.write_octetstring(Some(3), Some(3), &[1, 2, 3]));
        assert_eq!((vec![1, 2, 3], 24), (bytes, bits));

        let (bytes, bits) = written(|b| b.write_octetstring(None, None, &[0xAB]));
        assert_eq!((vec![0x01_u8, 0xAB], 16), (bytes.clone(), bits));

        let mut reader = Bits::from((&bytes[..], bits));
        assert_eq!(vec![0xAB], reader.read_octetstring(None, None).unwrap());
    }

    #[test]
    fn test_bitstring_of_variable_size() {
        let (bytes, bits) =
            written(|b| b.write_bitstring(Some(1), Some(8), &[0b1010_0000], 0, 3));
        // 3 bits length (3 - 1 = 2) and 3 bits of content
        assert_eq!(6, bits);
        let mut reader = Bits::from((&bytes[..], bits));
        assert_eq!(
            (vec![0b1010_0000], 3),
            reader.read_bitstring(Some(1), Some(8)).unwrap()
        );
    }

    proptest::proptest! {
        #[test]
        fn constrained_whole_number_round_trips(
            lower in -100_000_i64..100_000,
            span in 0_i64..1_000_000,
            offset in 0_i64..1_000_000,
        ) {
            let upper = lower + span;
            let value = lower + offset % (span + 1);
            let (bytes, bits) = written(|b| b.write_constrained_whole_number(lower, upper, value));
            proptest::prop_assert_eq!(crate::io::per::bit_width(lower, upper), bits);

            let mut reader = Bits::from((&bytes[..], bits));
            proptest::prop_assert_eq!(
                value,
                reader.read_constrained_whole_number(lower, upper).unwrap()
            );
            proptest::prop_assert_eq!(0, reader.remaining());
        }

        #[test]
        fn normally_small_length_round_trips(length in 0_u64..64) {
            let (bytes, bits) = written(|b| b.write_normally_small_length(length));
            proptest::prop_assert_eq!(7, bits);

            let mut reader = Bits::from((&bytes[..], bits));
            proptest::prop_assert_eq!(length, reader.read_normally_small_length().unwrap());
        }
    }
}
