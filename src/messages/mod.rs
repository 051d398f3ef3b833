//! The messages of each logical channel.
//!
//! A channel message is a choice over the message types legal on that channel. Apart from the
//! BCCH-BCH, these are grouped in a `c1` choice next to an empty `messageClassExtension`
//! reserved for later releases:
//!
//! ```text
//! DL-DCCH-MessageType ::= CHOICE {
//!     c1 CHOICE { csfbParametersResponseCDMA2000 ..., ..., spare1 NULL },
//!     messageClassExtension SEQUENCE {}
//! }
//! ```
//!
//! Message bodies use the critical extensions pattern of [`crate::syn::critical`]. Their
//! `nonCriticalExtension` chains are not decoded unless stated otherwise, see
//! [`skip_non_critical_extension`].

pub mod bcch;
pub mod ccch;
pub mod dcch;
pub mod inter_node;
pub mod mcch;
pub mod pcch;

pub use bcch::{BcchBchMessage, BcchDlSchMessage};
pub use ccch::{DlCcchMessage, UlCcchMessage};
pub use dcch::{DlDcchMessage, UlDcchMessage};
pub use inter_node::{
    HandoverCommand, HandoverPreparationInformation, UeRadioAccessCapabilityInformation,
};
pub use mcch::McchMessage;
pub use pcch::PcchMessage;

use crate::io::per::Error;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

/// Writes the choice of the `c1` branch followed by the index of the message within `c1`
pub(crate) fn write_c1_index(
    writer: &mut UperWriter,
    name: &'static str,
    index: u64,
    c1_variants: u64,
) -> Result<(), Error> {
    writer.write_choice_index(name, 0, 2, false)?;
    writer.write_choice_index("c1", index, c1_variants, false)
}

pub(crate) fn write_message_class_extension(
    writer: &mut UperWriter,
    name: &'static str,
) -> Result<(), Error> {
    writer.write_choice_index(name, 1, 2, false)
}

/// Reads the index of the message within `c1`, `None` for the `messageClassExtension`
pub(crate) fn read_c1_index(
    reader: &mut UperReader<'_>,
    name: &'static str,
    c1_variants: u64,
) -> Result<Option<u64>, Error> {
    match reader.read_choice_index(name, 2, false)? {
        0 => reader.read_choice_index("c1", c1_variants, false).map(Some),
        _ => {
            reader.diagnostic(name, "messageClassExtension");
            Ok(None)
        }
    }
}

/// A received `nonCriticalExtension` that is not decoded. It is always the last field of a
/// message, so everything up to the end of the message is skipped.
pub(crate) fn skip_non_critical_extension(
    reader: &mut UperReader<'_>,
    present: bool,
    context: &str,
) -> Result<(), Error> {
    if present {
        reader.ignore_trailing_extension(context)
    } else {
        Ok(())
    }
}

/// The `-IEs` of a message whose only field is its `nonCriticalExtension`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyIes;

impl Writable for EmptyIes {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])
    }
}

impl Readable for EmptyIes {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        skip_non_critical_extension(reader, non_critical, "nonCriticalExtension")?;
        Ok(EmptyIes)
    }
}

/// Reports a spare alternative of a `c1` choice, which is a valid wire value without content
pub(crate) fn spare_message(reader: &UperReader<'_>, name: &'static str, index: u64) -> u64 {
    reader.diagnostic(name, &format!("spare message type {index}"));
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectingSink;

    #[test]
    fn test_c1_index_layout() {
        let mut writer = UperWriter::default();
        write_c1_index(&mut writer, "DL-DCCH-Message", 4, 16).unwrap();
        assert_eq!(5, writer.finish());
        assert_eq!(&[0b0010_0000], writer.byte_content());
        assert_eq!(
            Some(4),
            read_c1_index(&mut writer.as_reader(), "DL-DCCH-Message", 16).unwrap()
        );
    }

    #[test]
    fn test_message_class_extension_is_reported() {
        let sink = CollectingSink::default();
        let mut writer = UperWriter::default();
        write_message_class_extension(&mut writer, "UL-CCCH-Message").unwrap();
        let mut reader = UperReader::from_bits(writer.byte_content(), 1).with_sink(&sink);
        assert_eq!(None, read_c1_index(&mut reader, "UL-CCCH-Message", 2).unwrap());
        assert!(sink.contains("UL-CCCH-Message"));
    }

    #[test]
    fn test_non_critical_extension_skips_to_the_end() {
        let sink = CollectingSink::default();
        let data = [0xFF, 0xFF];
        let mut reader = UperReader::from(&data[..]).with_sink(&sink);
        skip_non_critical_extension(&mut reader, false, "test").unwrap();
        assert_eq!(16, reader.remaining_bits());
        skip_non_critical_extension(&mut reader, true, "test").unwrap();
        assert_eq!(0, reader.remaining_bits());
        assert!(sink.contains("test"));
    }
}
