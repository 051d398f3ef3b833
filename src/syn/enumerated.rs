//! Enumerated values map a compact ordinal to a display text and, where the standard defines
//! one, a numeric meaning. Both tables are generated together with the enum by
//! [`enumerated!`](crate::enumerated), so they are attached to the type and cannot diverge.

pub trait Enumerated: Sized + Copy + 'static {
    const NAME: &'static str;
    /// All variants ordered by their ordinal
    const VARIANTS: &'static [Self];
    /// The display text of each variant, indexed by the ordinal
    const TEXT: &'static [&'static str];
    /// Whether the enumeration has an extension marker
    const EXTENSIBLE: bool = false;

    fn ordinal(&self) -> u64;

    #[inline]
    fn ordinal_count() -> u64 {
        Self::VARIANTS.len() as u64
    }

    #[inline]
    fn from_ordinal(ordinal: u64) -> Option<Self> {
        Self::VARIANTS.get(ordinal as usize).copied()
    }

    #[inline]
    fn to_text(&self) -> &'static str {
        Self::TEXT[self.ordinal() as usize]
    }

    /// Whether the value is reserved by the standard for future use
    #[inline]
    fn is_spare(&self) -> bool {
        self.to_text().starts_with("spare")
    }
}

/// The numeric meaning of an enumeration value, e.g. `ms1500` means `1500`. Spare values and
/// values without numeric meaning (e.g. `infinity`) return `None`.
pub trait EnumeratedNumeric: Enumerated {
    type Numeric: Copy;

    fn to_numeric(&self) -> Option<Self::Numeric>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::per::ErrorKind;
    use crate::syn::{Readable, UperReader, UperWriter, Writable};

    enumerated! {
        pub enum TestTimer: "TestTimer", numeric u16 {
            Ms100 = "ms100" => 100,
            Ms200 = "ms200" => 200,
            Ms1500 = "ms1500" => 1500,
            Spare1 = "spare1",
        }
    }

    enumerated! {
        pub enum TestExtensible: "TestExtensible", extensible {
            A = "a",
            B = "b",
            C = "c",
        }
    }

    enumerated! {
        pub enum TestPlain: "TestPlain" {
            First = "first",
            Second = "second",
            Third = "third",
        }
    }

    #[test]
    fn test_tables() {
        assert_eq!(4, TestTimer::ordinal_count());
        assert_eq!("ms1500", TestTimer::Ms1500.to_text());
        assert_eq!(Some(1500), TestTimer::Ms1500.to_numeric());
        assert_eq!(None, TestTimer::Spare1.to_numeric());
        assert!(TestTimer::Spare1.is_spare());
        assert!(!TestTimer::Ms100.is_spare());
        assert_eq!(Some(TestTimer::Ms200), TestTimer::from_ordinal(1));
        assert_eq!(None, TestTimer::from_ordinal(4));
        assert_eq!("ms200", TestTimer::Ms200.to_string());
    }

    #[test]
    fn test_width_is_ceil_log2() {
        let mut writer = UperWriter::default();
        TestPlain::Third.write(&mut writer).unwrap();
        assert_eq!(2, writer.finish());
        assert_eq!(&[0b1000_0000], writer.byte_content());

        let mut writer = UperWriter::default();
        TestExtensible::C.write(&mut writer).unwrap();
        assert_eq!(1 + 2, writer.finish());
    }

    #[test]
    fn test_spare_is_accepted() {
        let data = [0b1100_0000];
        let mut reader = UperReader::from_bits(&data, 2);
        assert_eq!(TestTimer::Spare1, TestTimer::read(&mut reader).unwrap());
    }

    #[test]
    fn test_out_of_range_ordinal_is_rejected() {
        let data = [0b1100_0000];
        let mut reader = UperReader::from_bits(&data, 2);
        assert_eq!(
            &ErrorKind::InvalidEnumerationIndex {
                name: "TestPlain",
                index: 3,
                count: 3
            },
            TestPlain::read(&mut reader).unwrap_err().kind()
        );
    }

    #[test]
    fn test_extension_value_is_rejected() {
        // extension bit set, normally small number 0
        let data = [0b1000_0000];
        let mut reader = UperReader::from_bits(&data, 8);
        assert_eq!(
            &ErrorKind::UnknownExtensionValue {
                name: "TestExtensible",
                index: 3
            },
            TestExtensible::read(&mut reader).unwrap_err().kind()
        );
    }
}
