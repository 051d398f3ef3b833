use byteorder::ByteOrder;
use byteorder::NetworkEndian;
use crate::diag::DiagnosticSink;
use crate::diag::NOOP;
use crate::io::per::err::Error;
use crate::io::per::err::ErrorKind;
use crate::io::per::unaligned::buffer::BitBuffer;
use crate::io::per::unaligned::BitRead;
use crate::io::per::unaligned::BitWrite;
use crate::io::per::unaligned::BYTE_LEN;
use crate::io::per::PackedRead;
use crate::io::per::PackedWrite;
use crate::syn::enumerated::Enumerated;
use crate::syn::{Readable, Writable};
use std::convert::TryFrom;

pub use crate::io::per::unaligned::slice::Bits;

#[derive(Debug, Default, Clone)]
pub struct UperWriter {
    bits: BitBuffer,
}

impl UperWriter {
    pub fn with_capacity(capacity_bytes: usize) -> Self {
        Self {
            bits: BitBuffer::with_capacity(capacity_bytes),
        }
    }

    /// A writer that fails with [`ErrorKind::CapacityExceeded`] instead of growing beyond
    /// `limit_bits`
    pub fn with_limit(limit_bits: usize) -> Self {
        Self {
            bits: BitBuffer::with_limit(limit_bits),
        }
    }

    pub fn byte_content(&self) -> &[u8] {
        self.bits.content()
    }

    pub const fn bit_len(&self) -> usize {
        self.bits.bit_len()
    }

    /// The total number of bits written so far
    #[inline]
    pub const fn finish(&self) -> usize {
        self.bits.bit_len()
    }

    pub fn into_bytes_vec(self) -> Vec<u8> {
        debug_assert_eq!(
            (self.bit_len() + BYTE_LEN - 1) / BYTE_LEN,
            self.bits.byte_len()
        );
        self.bits.into()
    }

    /// The content as complete encoding, which is never empty: an empty value is represented
    /// by a single zero octet (ITU-TX.691 11.1)
    pub fn into_octets(self) -> Vec<u8> {
        if self.bit_len() == 0 {
            vec![0x00]
        } else {
            self.into_bytes_vec()
        }
    }

    pub fn as_reader(&self) -> UperReader<'_> {
        UperReader::from_bits(self.byte_content(), self.bit_len())
    }

    #[inline]
    pub fn write<T: Writable + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        value.write(self)
    }

    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<(), Error> {
        self.bits.write_bit(bit)
    }

    /// Writes the `width` least significant bits of `value`
    pub fn write_bits(&mut self, value: u64, width: usize) -> Result<(), Error> {
        debug_assert!(width <= 64);
        if width < 64 && value >> width != 0 {
            return Err(Error::value_not_in_range(
                value as i64,
                0,
                ((1_u64 << width) - 1) as i64,
            ));
        }
        let mut bytes = [0u8; std::mem::size_of::<u64>()];
        NetworkEndian::write_u64(&mut bytes[..], value);
        self.bits
            .write_bits_with_offset(&bytes[..], bytes.len() * BYTE_LEN - width)
    }

    /// Writes `value` as constrained whole number in `ceil(log2(upper - lower + 1))` bits
    #[inline]
    pub fn write_int<T: Into<i64>>(&mut self, value: T, lower: i64, upper: i64) -> Result<(), Error> {
        self.bits
            .write_constrained_whole_number(lower, upper, value.into())
    }

    /// Writes a presence bit for each OPTIONAL or DEFAULT field in declaration order
    #[inline]
    pub fn write_presence(&mut self, flags: &[bool]) -> Result<(), Error> {
        flags.iter().try_for_each(|flag| self.bits.write_bit(*flag))
    }

    /// Fills the current octet with zero bits
    pub fn pad_to_octet(&mut self) -> Result<(), Error> {
        let padding = (BYTE_LEN - (self.bit_len() % BYTE_LEN)) % BYTE_LEN;
        self.bits.write_bits_with_len(&[0x00], padding)
    }

    pub fn write_octets_aligned(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.pad_to_octet()?;
        self.bits.write_bits(bytes)
    }

    #[inline]
    pub fn write_enumerated<E: Enumerated>(&mut self, value: &E) -> Result<(), Error> {
        self.bits
            .write_enumeration_index(E::VARIANTS.len() as u64, E::EXTENSIBLE, value.ordinal())
    }

    /// Writes the index of the selected alternative out of `variants` root alternatives. For an
    /// extensible choice, an index beyond the root alternatives needs to be followed by an
    /// open type, see [`UperWriter::write_open_type`].
    pub fn write_choice_index(
        &mut self,
        name: &'static str,
        index: u64,
        variants: u64,
        extensible: bool,
    ) -> Result<(), Error> {
        if index >= variants && !extensible {
            return Err(ErrorKind::ChoiceVariantMismatch { name, index }.into());
        }
        self.bits.write_choice_index(variants, extensible, index)
    }

    #[inline]
    pub fn write_normally_small_length(&mut self, value: u64) -> Result<(), Error> {
        self.bits.write_normally_small_length(value)
    }

    #[inline]
    pub fn write_length(&mut self, length: usize, lower: u64, upper: u64) -> Result<(), Error> {
        self.bits
            .write_length_determinant(Some(lower), Some(upper), length as u64)
    }

    pub fn write_sequence_of<T: Writable>(
        &mut self,
        values: &[T],
        lower: u64,
        upper: u64,
    ) -> Result<(), Error> {
        self.write_sequence_of_with(values, lower, upper, |w, value| value.write(w))
    }

    pub fn write_sequence_of_with<T, F: FnMut(&mut Self, &T) -> Result<(), Error>>(
        &mut self,
        values: &[T],
        lower: u64,
        upper: u64,
        mut f: F,
    ) -> Result<(), Error> {
        self.write_length(values.len(), lower, upper)?;
        values.iter().try_for_each(|value| f(self, value))
    }

    pub fn write_octet_string(
        &mut self,
        bytes: &[u8],
        lower: Option<u64>,
        upper: Option<u64>,
    ) -> Result<(), Error> {
        self.bits.write_octetstring(lower, upper, bytes)
    }

    pub fn write_bit_string(
        &mut self,
        bytes: &[u8],
        bit_len: u64,
        lower: u64,
        upper: u64,
    ) -> Result<(), Error> {
        self.bits
            .write_bitstring(Some(lower), Some(upper), bytes, 0, bit_len)
    }

    /// Writes the content produced by `f` as open type: a length determinant counting octets
    /// followed by the content padded to the next octet (ITU-TX.691 11.2)
    pub fn write_open_type<F: FnOnce(&mut UperWriter) -> Result<(), Error>>(
        &mut self,
        f: F,
    ) -> Result<(), Error> {
        let mut writer = UperWriter::with_capacity(64);
        f(&mut writer)?;
        let octets = writer.into_octets();
        self.bits.write_octetstring(None, None, &octets[..])
    }

    /// Writes already encoded open type content
    pub fn write_open_type_octets(&mut self, octets: &[u8]) -> Result<(), Error> {
        self.bits.write_octetstring(None, None, octets)
    }
}

pub struct UperReader<'a> {
    bits: Bits<'a>,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> From<Bits<'a>> for UperReader<'a> {
    fn from(bits: Bits<'a>) -> Self {
        UperReader { bits, sink: &NOOP }
    }
}

impl<'a> From<&'a [u8]> for UperReader<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::from(Bits::from(data))
    }
}

impl<'a> UperReader<'a> {
    pub fn from_bits(data: &'a [u8], bit_len: usize) -> Self {
        Self::from(Bits::from((data, bit_len)))
    }

    /// Replaces the sink that receives the diagnostics of this reader
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    #[inline]
    pub const fn bits_remaining(&self) -> usize {
        self.bits.remaining()
    }

    #[inline]
    pub const fn pos(&self) -> usize {
        self.bits.pos()
    }

    /// Reports a wire value that is accepted but cannot be interpreted any further
    pub fn diagnostic(&self, context: &str, text: &str) {
        if cfg!(feature = "descriptive-diagnostics") {
            self.sink
                .diagnostic(context, &format!("{text} (at bit {})", self.bits.pos()));
        } else {
            self.sink.diagnostic(context, text);
        }
    }

    /// The number of bits left before the end of the data or the current limit
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        self.bits.remaining()
    }

    #[inline]
    pub fn read<T: Readable>(&mut self) -> Result<T, Error> {
        T::read(self)
    }

    #[inline]
    pub fn read_bit(&mut self) -> Result<bool, Error> {
        self.bits.read_bit()
    }

    /// Reads `width` bits as unsigned integer
    pub fn read_bits<T: TryFrom<u64>>(&mut self, width: usize) -> Result<T, Error> {
        debug_assert!(width <= 64);
        let mut bytes = [0u8; std::mem::size_of::<u64>()];
        let offset = bytes.len() * BYTE_LEN - width;
        self.bits.read_bits_with_offset(&mut bytes[..], offset)?;
        let value = NetworkEndian::read_u64(&bytes[..]);
        T::try_from(value).map_err(|_| Error::value_not_in_range(value as i64, 0, value as i64))
    }

    /// Reads a constrained whole number of `ceil(log2(upper - lower + 1))` bits
    pub fn read_int<T: TryFrom<i64>>(&mut self, lower: i64, upper: i64) -> Result<T, Error> {
        let value = self.bits.read_constrained_whole_number(lower, upper)?;
        T::try_from(value).map_err(|_| Error::value_not_in_range(value, lower, upper))
    }

    /// Reads the presence bits of `N` OPTIONAL or DEFAULT fields
    pub fn read_presence<const N: usize>(&mut self) -> Result<[bool; N], Error> {
        let mut flags = [false; N];
        for flag in flags.iter_mut() {
            *flag = self.bits.read_bit()?;
        }
        Ok(flags)
    }

    pub fn skip_to_octet_boundary(&mut self) -> Result<(), Error> {
        self.bits.skip_to_octet_boundary()
    }

    pub fn read_octets_aligned(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        self.skip_to_octet_boundary()?;
        let mut bytes = vec![0u8; len];
        self.bits.read_bits(&mut bytes[..])?;
        Ok(bytes)
    }

    /// Reads all remaining octets of the current limit, for example of an open type
    pub fn read_remaining_octets(&mut self) -> Result<Vec<u8>, Error> {
        let remaining = self.bits.remaining();
        let mut bytes = vec![0u8; remaining / BYTE_LEN];
        self.bits.read_bits(&mut bytes[..])?;
        self.bits.skip(remaining % BYTE_LEN)?;
        Ok(bytes)
    }

    /// Reads an enumeration value. Spare values are accepted and reported to the sink, a value
    /// beyond the extension marker of an extensible enumeration yields
    /// [`ErrorKind::UnknownExtensionValue`].
    pub fn read_enumerated<E: Enumerated>(&mut self) -> Result<E, Error> {
        let count = E::VARIANTS.len() as u64;
        let index = self.bits.read_enumeration_index(count, E::EXTENSIBLE)?;
        match E::from_ordinal(index) {
            Some(value) => {
                if value.is_spare() {
                    self.diagnostic(E::NAME, &format!("spare value {}", value.to_text()));
                }
                Ok(value)
            }
            None if E::EXTENSIBLE && index >= count => Err(ErrorKind::UnknownExtensionValue {
                name: E::NAME,
                index,
            }
            .into()),
            None => Err(Error::invalid_enumeration_index(E::NAME, index, count)),
        }
    }

    /// Reads the index of a choice with `variants` root alternatives. The index of a
    /// non-extensible choice is range-checked, for an extensible choice an index beyond the
    /// root alternatives is returned as is and needs to be followed by reading an open type.
    pub fn read_choice_index(
        &mut self,
        name: &'static str,
        variants: u64,
        extensible: bool,
    ) -> Result<u64, Error> {
        let index = self.bits.read_choice_index(variants, extensible)?;
        if !extensible && index >= variants {
            Err(Error::invalid_choice_index(name, index, variants))
        } else {
            Ok(index)
        }
    }

    #[inline]
    pub fn read_normally_small_length(&mut self) -> Result<u64, Error> {
        self.bits.read_normally_small_length()
    }

    #[inline]
    pub fn read_length(&mut self, lower: u64, upper: u64) -> Result<usize, Error> {
        Ok(self
            .bits
            .read_length_determinant(Some(lower), Some(upper))? as usize)
    }

    pub fn read_sequence_of<T: Readable>(&mut self, lower: u64, upper: u64) -> Result<Vec<T>, Error> {
        self.read_sequence_of_with(lower, upper, |r| r.read())
    }

    pub fn read_sequence_of_with<T, F: FnMut(&mut Self) -> Result<T, Error>>(
        &mut self,
        lower: u64,
        upper: u64,
        mut f: F,
    ) -> Result<Vec<T>, Error> {
        let len = self.read_length(lower, upper)?;
        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            values.push(f(self)?);
        }
        Ok(values)
    }

    pub fn read_octet_string(
        &mut self,
        lower: Option<u64>,
        upper: Option<u64>,
    ) -> Result<Vec<u8>, Error> {
        self.bits.read_octetstring(lower, upper)
    }

    pub fn read_bit_string(&mut self, lower: u64, upper: u64) -> Result<(Vec<u8>, u64), Error> {
        self.bits.read_bitstring(Some(lower), Some(upper))
    }

    /// Restricts reading to the next `bits` while `f` is executed, afterwards the reader is
    /// positioned right behind these bits
    pub fn with_limit<T, F: FnOnce(&mut Self) -> Result<T, Error>>(
        &mut self,
        bits: usize,
        f: F,
    ) -> Result<T, Error> {
        self.bits.ensure_remaining(bits)?;
        let original_len = self.bits.len;
        let end = self.bits.pos + bits;
        self.bits.len = end;
        let result = f(self);
        self.bits.len = original_len;
        self.bits.pos = end;
        result
    }

    /// Reads the length determinant of an open type and returns the length of its content in
    /// bits, failing if that would exceed the remaining bits
    pub fn read_open_type_len(&mut self, name: &'static str) -> Result<usize, Error> {
        let octets = self.bits.read_length_determinant(None, None)? as usize;
        let length_bits = octets * BYTE_LEN;
        if length_bits > self.bits.remaining() {
            Err(ErrorKind::ExtensionLengthOverrun {
                name,
                length_bits,
                available_bits: self.bits.remaining(),
            }
            .into())
        } else {
            Ok(length_bits)
        }
    }

    /// Reads an open type whose content is decoded by `f`, unconsumed content bits (padding)
    /// are skipped
    pub fn read_open_type<T, F: FnOnce(&mut Self) -> Result<T, Error>>(
        &mut self,
        name: &'static str,
        f: F,
    ) -> Result<T, Error> {
        let bits = self.read_open_type_len(name)?;
        self.with_limit(bits, f)
    }

    /// Reads an open type without interpreting its content
    pub fn read_open_type_octets(&mut self, name: &'static str) -> Result<Vec<u8>, Error> {
        let bits = self.read_open_type_len(name)?;
        self.with_limit(bits, |r| r.read_remaining_octets())
    }

    /// Skips the remaining bits of the current limit. Used for trailing non-critical extensions
    /// that are not decoded by this codec, their presence is reported to the sink.
    pub fn ignore_trailing_extension(&mut self, context: &str) -> Result<(), Error> {
        self.diagnostic(
            context,
            &format!(
                "ignoring nonCriticalExtension and {} trailing bits",
                self.bits.remaining()
            ),
        );
        self.bits.skip(self.bits.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectingSink;

    #[test]
    fn test_write_bits_rejects_wide_values() {
        let mut writer = UperWriter::default();
        assert!(writer.write_bits(0b100, 2).is_err());
        writer.write_bits(0b11, 2).unwrap();
        writer.write_bits(0xABCD, 16).unwrap();
        assert_eq!(18, writer.finish());
        let mut reader = writer.as_reader();
        assert_eq!(3, reader.read_bits::<u8>(2).unwrap());
        assert_eq!(0xABCD, reader.read_bits::<u16>(16).unwrap());
        assert_eq!(0, reader.bits_remaining());
    }

    #[test]
    fn test_bytes_aligned() {
        let mut writer = UperWriter::default();
        writer.write_bit(true).unwrap();
        writer.write_octets_aligned(&[0x12, 0x34]).unwrap();
        assert_eq!(24, writer.finish());
        assert_eq!(&[0x80, 0x12, 0x34], writer.byte_content());

        let mut reader = writer.as_reader();
        assert!(reader.read_bit().unwrap());
        assert_eq!(vec![0x12, 0x34], reader.read_octets_aligned(2).unwrap());
    }

    #[test]
    fn test_empty_open_type_takes_one_octet() {
        let mut writer = UperWriter::default();
        writer.write_open_type(|_| Ok(())).unwrap();
        assert_eq!(&[0x01, 0x00], writer.byte_content());
    }

    #[test]
    fn test_open_type_is_padded_and_skipped() {
        let mut writer = UperWriter::default();
        writer
            .write_open_type(|w| w.write_int(5_u8, 0, 7))
            .unwrap();
        writer.write_bit(true).unwrap();
        assert_eq!(&[0x01, 0b1010_0000, 0x80], writer.byte_content());

        let mut reader = writer.as_reader();
        let value: u8 = reader.read_open_type("test", |r| r.read_int(0, 7)).unwrap();
        assert_eq!(5, value);
        assert!(reader.read_bit().unwrap());
    }

    #[test]
    fn test_open_type_overrun() {
        let data = [0x05, 0xFF, 0xFF];
        let mut reader = UperReader::from(&data[..]);
        assert_eq!(
            &ErrorKind::ExtensionLengthOverrun {
                name: "test",
                length_bits: 40,
                available_bits: 16
            },
            reader.read_open_type_octets("test").unwrap_err().kind()
        );
    }

    #[test]
    fn test_sequence_of_size_is_checked() {
        let mut writer = UperWriter::default();
        assert_eq!(
            &ErrorKind::SizeNotInRange(0, 1, 8),
            writer
                .write_sequence_of::<bool>(&[], 1, 8)
                .unwrap_err()
                .kind()
        );
        writer
            .write_sequence_of(&[true, false, true], 1, 8)
            .unwrap();
        assert_eq!(3 + 3, writer.finish());
        let mut reader = writer.as_reader();
        assert_eq!(
            vec![true, false, true],
            reader.read_sequence_of::<bool>(1, 8).unwrap()
        );
    }

    #[test]
    fn test_ignore_trailing_extension_reports() {
        let data = [0xFF];
        let sink = CollectingSink::default();
        let mut reader = UperReader::from(&data[..]).with_sink(&sink);
        reader.read_bit().unwrap();
        reader.ignore_trailing_extension("Paging-v920-IEs").unwrap();
        assert_eq!(0, reader.bits_remaining());
        assert!(sink.contains("Paging-v920-IEs"));
    }

    #[test]
    fn test_limit_of_writer() {
        let mut writer = UperWriter::with_limit(8);
        writer.write_bits(0xFF, 8).unwrap();
        assert_eq!(
            &ErrorKind::CapacityExceeded {
                capacity_bits: 8,
                required_bits: 9
            },
            writer.write_bit(false).unwrap_err().kind()
        );
    }
}
