//! The critical extensions pattern lets a later release replace the whole body of a message
//! while keeping its message type:
//!
//! ```text
//! criticalExtensions CHOICE {
//!     c1 CHOICE { message-r8 Message-r8-IEs, spare3 NULL, spare2 NULL, spare1 NULL },
//!     criticalExtensionsFuture SEQUENCE {}
//! }
//! ```
//!
//! Some messages omit the `c1` level and directly choose between the body and the
//! `criticalExtensionsFuture`.

use crate::io::per::Error;
use crate::io::per::ErrorKind;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

/// The body of a message behind a critical extensions choice. `C1` is the number of
/// alternatives of the inner `c1` choice, or zero if there is no `c1` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CriticalExtensions<T, const C1: u64> {
    Current(T),
    /// A spare alternative of `c1`, valid on the wire but without defined content. The index
    /// is the position within `c1` and therefore never zero.
    Spare(u64),
    /// The `criticalExtensionsFuture` slot of a later release
    Future,
}

impl<T, const C1: u64> CriticalExtensions<T, C1> {
    pub fn current(&self) -> Option<&T> {
        match self {
            CriticalExtensions::Current(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_current(self) -> Option<T> {
        match self {
            CriticalExtensions::Current(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_future(&self) -> bool {
        matches!(self, CriticalExtensions::Future)
    }
}

impl<T, const C1: u64> From<T> for CriticalExtensions<T, C1> {
    fn from(value: T) -> Self {
        CriticalExtensions::Current(value)
    }
}

impl<T: Writable, const C1: u64> Writable for CriticalExtensions<T, C1> {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        const NAME: &str = "criticalExtensions";
        match self {
            CriticalExtensions::Current(value) => {
                writer.write_choice_index(NAME, 0, 2, false)?;
                if C1 > 0 {
                    writer.write_choice_index("c1", 0, C1, false)?;
                }
                value.write(writer)
            }
            CriticalExtensions::Spare(index) => {
                if *index == 0 || *index >= C1 {
                    return Err(ErrorKind::ChoiceVariantMismatch {
                        name: "c1",
                        index: *index,
                    }
                    .into());
                }
                writer.write_choice_index(NAME, 0, 2, false)?;
                writer.write_choice_index("c1", *index, C1, false)
            }
            CriticalExtensions::Future => writer.write_choice_index(NAME, 1, 2, false),
        }
    }
}

impl<T: Readable, const C1: u64> Readable for CriticalExtensions<T, C1> {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        const NAME: &str = "criticalExtensions";
        match reader.read_choice_index(NAME, 2, false)? {
            0 => {
                let index = if C1 > 0 {
                    reader.read_choice_index("c1", C1, false)?
                } else {
                    0
                };
                if index == 0 {
                    Ok(CriticalExtensions::Current(reader.read()?))
                } else {
                    reader.diagnostic("c1", &format!("spare critical extension {index}"));
                    Ok(CriticalExtensions::Spare(index))
                }
            }
            _ => {
                reader.diagnostic(NAME, "criticalExtensionsFuture");
                Ok(CriticalExtensions::Future)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectingSink;

    type WithC1 = CriticalExtensions<bool, 4>;
    type WithoutC1 = CriticalExtensions<bool, 0>;

    #[test]
    fn test_current_with_c1() {
        let mut writer = UperWriter::default();
        WithC1::Current(true).write(&mut writer).unwrap();
        // outer index, c1 index (2 bits), the body
        assert_eq!(1 + 2 + 1, writer.finish());
        assert_eq!(
            WithC1::Current(true),
            WithC1::read(&mut writer.as_reader()).unwrap()
        );
    }

    #[test]
    fn test_current_without_c1() {
        let mut writer = UperWriter::default();
        WithoutC1::Current(false).write(&mut writer).unwrap();
        assert_eq!(2, writer.finish());
    }

    #[test]
    fn test_spare_and_future_are_valid() {
        let sink = CollectingSink::default();
        // criticalExtensions 0, c1 spare1 (3)
        let data = [0b0110_0000];
        let mut reader = UperReader::from_bits(&data, 3).with_sink(&sink);
        assert_eq!(WithC1::Spare(3), WithC1::read(&mut reader).unwrap());
        assert!(sink.contains("c1"));

        let data = [0b1000_0000];
        let mut reader = UperReader::from_bits(&data, 1).with_sink(&sink);
        assert!(WithC1::read(&mut reader).unwrap().is_future());
        assert!(sink.contains("criticalExtensions"));
    }

    #[test]
    fn test_spare_zero_is_a_mismatch() {
        let mut writer = UperWriter::default();
        assert_eq!(
            &ErrorKind::ChoiceVariantMismatch {
                name: "c1",
                index: 0
            },
            WithC1::Spare(0).write(&mut writer).unwrap_err().kind()
        );
    }
}
