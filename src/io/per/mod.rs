//! This module defines the traits to encode and decode the basic ASN.1 PER primitives that the
//! RRC information elements are composed of. Only the UNALIGNED variant is used on the LTE
//! radio interface, see [`unaligned`] for the bit level implementation.

pub mod err;
pub mod unaligned;

pub use err::Error;
pub use err::ErrorKind;

/// Upper bound of a length that is still encoded as a constrained whole number
pub const LENGTH_CONSTRAINED_LIMIT: u64 = 64 * 1024;

/// Number of bits a constrained whole number within `lower..=upper` occupies in UNALIGNED PER,
/// which is `ceil(log2(upper - lower + 1))`
#[inline]
pub const fn bit_width(lower: i64, upper: i64) -> usize {
    let range = upper.wrapping_sub(lower) as u64;
    (u64::BITS - range.leading_zeros()) as usize
}

pub trait PackedRead {
    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 12, the boolean type is represented
    /// through a single bit, where 1 represents `true` and 0 represents `false`.
    fn read_boolean(&mut self) -> Result<bool, Error>;

    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 3.7.7, a constrained whole number
    /// is a whole number with a lower- and upper-bound constrained
    fn read_constrained_whole_number(
        &mut self,
        lower_bound: i64,
        upper_bound: i64,
    ) -> Result<i64, Error>;

    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 3.7.17, the length determinant is
    /// a number used to count bits, octets (bytes), characters or components
    fn read_length_determinant(
        &mut self,
        lower_bound: Option<u64>,
        upper_bound: Option<u64>,
    ) -> Result<u64, Error>;

    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 3.7.19, a number without constrains
    /// and is likely to be small. It is used where small lengths are more likely than large values.
    fn read_normally_small_length(&mut self) -> Result<u64, Error>;

    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 3.7.18, an unconstrained integer
    /// where small numbers appear more often the large numbers.
    fn read_normally_small_non_negative_whole_number(&mut self) -> Result<u64, Error>;

    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 3.7.20,
    fn read_non_negative_binary_integer(
        &mut self,
        lower_bound: Option<u64>,
        upper_bound: Option<u64>,
    ) -> Result<u64, Error>;

    /// Reads a bit string of `lower_bound_size..=upper_bound_size` bits and returns the content,
    /// left aligned, together with its length in bits
    fn read_bitstring(
        &mut self,
        lower_bound_size: Option<u64>,
        upper_bound_size: Option<u64>,
    ) -> Result<(Vec<u8>, u64), Error>;

    fn read_octetstring(
        &mut self,
        lower_bound_size: Option<u64>,
        upper_bound_size: Option<u64>,
    ) -> Result<Vec<u8>, Error>;

    /// Reads the raw index, the caller is responsible to range-check it against the variants
    /// it knows about
    fn read_choice_index(&mut self, std_variants: u64, extensible: bool) -> Result<u64, Error>;

    /// Reads the raw index, the caller is responsible to range-check it against the variants
    /// it knows about
    fn read_enumeration_index(&mut self, std_variants: u64, extensible: bool)
        -> Result<u64, Error>;
}

pub trait PackedWrite {
    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 12, the boolean type is represented
    /// through a single bit, where 1 represents `true` and 0 represents `false`.
    fn write_boolean(&mut self, boolean: bool) -> Result<(), Error>;

    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 3.7.7, a constrained whole number
    /// is a whole number with a lower- and upper-bound constrained
    fn write_constrained_whole_number(
        &mut self,
        lower_bound: i64,
        upper_bound: i64,
        value: i64,
    ) -> Result<(), Error>;

    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 3.7.17, the length determinant is
    /// a number used to count bits, octets (bytes), characters or components
    fn write_length_determinant(
        &mut self,
        lower_bound: Option<u64>,
        upper_bound: Option<u64>,
        length: u64,
    ) -> Result<(), Error>;

    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 3.7.19, a number without constrains
    /// and is likely to be small. It is used where small lengths are more likely than large values.
    fn write_normally_small_length(&mut self, value: u64) -> Result<(), Error>;

    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 3.7.18, an unconstrained integer
    /// where small numbers appear more often the large numbers.
    fn write_normally_small_non_negative_whole_number(&mut self, value: u64) -> Result<(), Error>;

    /// According to ITU-TX.691 | ISO/IEC 8825-2:2015, chapter 3.7.20,
    fn write_non_negative_binary_integer(
        &mut self,
        lower_bound: Option<u64>,
        upper_bound: Option<u64>,
        value: u64,
    ) -> Result<(), Error>;

    fn write_bitstring(
        &mut self,
        lower_bound_size: Option<u64>,
        upper_bound_size: Option<u64>,
        src: &[u8],
        offset: u64,
        len: u64,
    ) -> Result<(), Error>;

    fn write_octetstring(
        &mut self,
        lower_bound_size: Option<u64>,
        upper_bound_size: Option<u64>,
        src: &[u8],
    ) -> Result<(), Error>;

    fn write_choice_index(
        &mut self,
        std_variants: u64,
        extensible: bool,
        index: u64,
    ) -> Result<(), Error>;

    fn write_enumeration_index(
        &mut self,
        std_variants: u64,
        extensible: bool,
        index: u64,
    ) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_width() {
        assert_eq!(0, bit_width(0, 0));
        assert_eq!(1, bit_width(0, 1));
        assert_eq!(2, bit_width(0, 3));
        assert_eq!(3, bit_width(1, 8));
        assert_eq!(9, bit_width(0, 503));
        assert_eq!(10, bit_width(0, 1023));
        assert_eq!(11, bit_width(0, 1535));
        assert_eq!(6, bit_width(-70, -22));
        assert_eq!(16, bit_width(0, 65535));
    }
}
