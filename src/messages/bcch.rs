//! Broadcast control channel, mapped either to the BCH (the MIB only) or the DL-SCH.

use crate::codec::LogicalChannelMessage;
use crate::ies::system_information::{
    MasterInformationBlock, SystemInformation, SystemInformationBlockType1,
};
use crate::io::per::Error;
use crate::messages::{read_c1_index, write_c1_index, write_message_class_extension};
use crate::syn::{Readable, UperReader, UperWriter, Writable};

/// `BCCH-BCH-Message`, a `MasterInformationBlock` without any choice around it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BcchBchMessage(pub MasterInformationBlock);

impl Writable for BcchBchMessage {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.0)
    }
}

impl Readable for BcchBchMessage {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        reader.read().map(BcchBchMessage)
    }
}

impl LogicalChannelMessage for BcchBchMessage {
    const NAME: &'static str = "BCCH-BCH-Message";
}

/// `BCCH-DL-SCH-Message`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BcchDlSchMessage {
    SystemInformation(SystemInformation),
    SystemInformationBlockType1(Box<SystemInformationBlockType1>),
    MessageClassExtension,
}

impl Writable for BcchDlSchMessage {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            BcchDlSchMessage::SystemInformation(si) => {
                write_c1_index(writer, Self::NAME, 0, 2)?;
                writer.write(si)
            }
            BcchDlSchMessage::SystemInformationBlockType1(sib1) => {
                write_c1_index(writer, Self::NAME, 1, 2)?;
                writer.write(sib1)
            }
            BcchDlSchMessage::MessageClassExtension => {
                write_message_class_extension(writer, Self::NAME)
            }
        }
    }
}

impl Readable for BcchDlSchMessage {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match read_c1_index(reader, Self::NAME, 2)? {
            Some(0) => BcchDlSchMessage::SystemInformation(reader.read()?),
            Some(_) => BcchDlSchMessage::SystemInformationBlockType1(reader.read()?),
            None => BcchDlSchMessage::MessageClassExtension,
        })
    }
}

impl LogicalChannelMessage for BcchDlSchMessage {
    const NAME: &'static str = "BCCH-DL-SCH-Message";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectingSink;
    use crate::ies::system_information::{
        SibTypeAndInfo, SystemInformationBlockType9, SystemInformationR8,
    };
    use crate::syn::critical::CriticalExtensions;

    #[test]
    fn test_system_information_layout() {
        let message = BcchDlSchMessage::SystemInformation(CriticalExtensions::Current(
            SystemInformationR8 {
                sib_type_and_info: vec![SibTypeAndInfo::Sib9(
                    SystemInformationBlockType9::default(),
                )],
                late_non_critical_extension: None,
            },
        ));
        let mut writer = UperWriter::default();
        writer.write(&message).unwrap();
        // message type, criticalExtensions, v8a0 flag, list size, SIB choice, SIB9
        assert_eq!(2 + 1 + 1 + 5 + (1 + 4) + 2, writer.finish());
        // 0 0 0 0 00000 0 0111 0 0
        assert_eq!(&[0b0000_0000, 0b0001_1100], writer.byte_content());
        assert_eq!(
            message,
            BcchDlSchMessage::decode_from(writer.byte_content()).unwrap()
        );
    }

    #[test]
    fn test_future_system_information() {
        let message = BcchDlSchMessage::SystemInformation(CriticalExtensions::Future);
        let bytes = message.encode_to_vec().unwrap();
        assert_eq!(vec![0b0010_0000], bytes);
        assert_eq!(message, BcchDlSchMessage::decode_from(&bytes).unwrap());
    }

    #[test]
    fn test_message_class_extension() {
        let sink = CollectingSink::default();
        let bytes = BcchDlSchMessage::MessageClassExtension
            .encode_to_vec()
            .unwrap();
        assert_eq!(vec![0x80], bytes);
        let mut reader = UperReader::from(&bytes[..]).with_sink(&sink);
        assert_eq!(
            BcchDlSchMessage::MessageClassExtension,
            reader.read().unwrap()
        );
        assert!(sink.contains(BcchDlSchMessage::NAME));
    }
}
