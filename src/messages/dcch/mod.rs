//! Dedicated control channel, the messages of an established RRC connection.

use crate::codec::LogicalChannelMessage;
use crate::ies::common::DedicatedInfoNas;
use crate::io::per::{Error, ErrorKind};
use crate::messages::{read_c1_index, spare_message, write_c1_index, write_message_class_extension};
use crate::syn::{Readable, UperReader, UperWriter, Writable};

/// Implements the codec of a message made of a transaction identifier and its critical
/// extensions
macro_rules! transaction_message {
    ($name:ident, $body:ty, $c1:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub rrc_transaction_identifier: RrcTransactionIdentifier,
            pub critical_extensions: CriticalExtensions<$body, $c1>,
        }

        impl Writable for $name {
            fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
                writer.write(&self.rrc_transaction_identifier)?;
                writer.write(&self.critical_extensions)
            }
        }

        impl Readable for $name {
            fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
                Ok($name {
                    rrc_transaction_identifier: reader.read()?,
                    critical_extensions: reader.read()?,
                })
            }
        }
    };
}

pub mod downlink;
pub mod uplink;

use downlink::*;
use uplink::*;

/// `dedicatedInfoType` of the information transfer messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DedicatedInfoType {
    Nas(DedicatedInfoNas),
    Cdma2000OneXrtt(Vec<u8>),
    Cdma2000Hrpd(Vec<u8>),
}

impl Writable for DedicatedInfoType {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            DedicatedInfoType::Nas(nas) => {
                writer.write_choice_index("dedicatedInfoType", 0, 3, false)?;
                writer.write(nas)
            }
            DedicatedInfoType::Cdma2000OneXrtt(octets) => {
                writer.write_choice_index("dedicatedInfoType", 1, 3, false)?;
                writer.write_octet_string(octets, None, None)
            }
            DedicatedInfoType::Cdma2000Hrpd(octets) => {
                writer.write_choice_index("dedicatedInfoType", 2, 3, false)?;
                writer.write_octet_string(octets, None, None)
            }
        }
    }
}

impl Readable for DedicatedInfoType {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match reader.read_choice_index("dedicatedInfoType", 3, false)? {
            0 => DedicatedInfoType::Nas(reader.read()?),
            1 => DedicatedInfoType::Cdma2000OneXrtt(reader.read_octet_string(None, None)?),
            _ => DedicatedInfoType::Cdma2000Hrpd(reader.read_octet_string(None, None)?),
        })
    }
}

const C1_VARIANTS: u64 = 16;

/// Rejects the index of a spare alternative that is out of the spare range of a `c1`
fn check_spare(name: &'static str, index: u64, first_spare: u64) -> Result<(), Error> {
    if (first_spare..C1_VARIANTS).contains(&index) {
        Ok(())
    } else {
        Err(ErrorKind::ChoiceVariantMismatch { name, index }.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DlDcchMessage {
    CsfbParametersResponseCdma2000(CsfbParametersResponseCdma2000),
    DlInformationTransfer(DlInformationTransfer),
    HandoverFromEutraPreparationRequest(HandoverFromEutraPreparationRequest),
    MobilityFromEutraCommand(MobilityFromEutraCommand),
    RrcConnectionReconfiguration(Box<RrcConnectionReconfiguration>),
    RrcConnectionRelease(RrcConnectionRelease),
    SecurityModeCommand(SecurityModeCommand),
    UeCapabilityEnquiry(UeCapabilityEnquiry),
    CounterCheck(CounterCheck),
    /// `spare4` to `spare1`, by their index within `c1` (12..=15)
    Spare(u64),
    MessageClassExtension,
}

impl DlDcchMessage {
    const FIRST_SPARE: u64 = 12;
}

impl Writable for DlDcchMessage {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        macro_rules! message {
            ($index:literal, $value:expr) => {{
                write_c1_index(writer, Self::NAME, $index, C1_VARIANTS)?;
                writer.write($value)
            }};
        }
        match self {
            DlDcchMessage::CsfbParametersResponseCdma2000(m) => message!(0, m),
            DlDcchMessage::DlInformationTransfer(m) => message!(1, m),
            DlDcchMessage::HandoverFromEutraPreparationRequest(m) => message!(2, m),
            DlDcchMessage::MobilityFromEutraCommand(m) => message!(3, m),
            DlDcchMessage::RrcConnectionReconfiguration(m) => message!(4, m.as_ref()),
            DlDcchMessage::RrcConnectionRelease(m) => message!(5, m),
            DlDcchMessage::SecurityModeCommand(m) => message!(6, m),
            DlDcchMessage::UeCapabilityEnquiry(m) => message!(7, m),
            DlDcchMessage::CounterCheck(m) => message!(8, m),
            DlDcchMessage::Spare(index) => {
                check_spare(Self::NAME, *index, Self::FIRST_SPARE)?;
                write_c1_index(writer, Self::NAME, *index, C1_VARIANTS)
            }
            DlDcchMessage::MessageClassExtension => {
                write_message_class_extension(writer, Self::NAME)
            }
        }
    }
}

impl Readable for DlDcchMessage {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let index = match read_c1_index(reader, Self::NAME, C1_VARIANTS)? {
            Some(index) => index,
            None => return Ok(DlDcchMessage::MessageClassExtension),
        };
        Ok(match index {
            0 => DlDcchMessage::CsfbParametersResponseCdma2000(reader.read()?),
            1 => DlDcchMessage::DlInformationTransfer(reader.read()?),
            2 => DlDcchMessage::HandoverFromEutraPreparationRequest(reader.read()?),
            3 => DlDcchMessage::MobilityFromEutraCommand(reader.read()?),
            4 => DlDcchMessage::RrcConnectionReconfiguration(Box::new(reader.read()?)),
            5 => DlDcchMessage::RrcConnectionRelease(reader.read()?),
            6 => DlDcchMessage::SecurityModeCommand(reader.read()?),
            7 => DlDcchMessage::UeCapabilityEnquiry(reader.read()?),
            8 => DlDcchMessage::CounterCheck(reader.read()?),
            9 => return Err(Error::unsupported("UEInformationRequest-r9")),
            10 => return Err(Error::unsupported("LoggedMeasurementConfiguration-r10")),
            11 => return Err(Error::unsupported("RNReconfiguration-r10")),
            index => DlDcchMessage::Spare(spare_message(reader, Self::NAME, index)),
        })
    }
}

impl LogicalChannelMessage for DlDcchMessage {
    const NAME: &'static str = "DL-DCCH-Message";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UlDcchMessage {
    CsfbParametersRequestCdma2000(CsfbParametersRequestCdma2000),
    MeasurementReport(Box<MeasurementReport>),
    RrcConnectionReconfigurationComplete(RrcConnectionReconfigurationComplete),
    RrcConnectionReestablishmentComplete(RrcConnectionReestablishmentComplete),
    RrcConnectionSetupComplete(RrcConnectionSetupComplete),
    SecurityModeComplete(SecurityModeComplete),
    SecurityModeFailure(SecurityModeFailure),
    UeCapabilityInformation(UeCapabilityInformation),
    UlInformationTransfer(UlInformationTransfer),
    CounterCheckResponse(CounterCheckResponse),
    ProximityIndication(ProximityIndication),
    MessageClassExtension,
}

impl Writable for UlDcchMessage {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        macro_rules! message {
            ($index:literal, $value:expr) => {{
                write_c1_index(writer, Self::NAME, $index, C1_VARIANTS)?;
                writer.write($value)
            }};
        }
        match self {
            UlDcchMessage::CsfbParametersRequestCdma2000(m) => message!(0, m),
            UlDcchMessage::MeasurementReport(m) => message!(1, m.as_ref()),
            UlDcchMessage::RrcConnectionReconfigurationComplete(m) => message!(2, m),
            UlDcchMessage::RrcConnectionReestablishmentComplete(m) => message!(3, m),
            UlDcchMessage::RrcConnectionSetupComplete(m) => message!(4, m),
            UlDcchMessage::SecurityModeComplete(m) => message!(5, m),
            UlDcchMessage::SecurityModeFailure(m) => message!(6, m),
            UlDcchMessage::UeCapabilityInformation(m) => message!(7, m),
            UlDcchMessage::UlInformationTransfer(m) => message!(9, m),
            UlDcchMessage::CounterCheckResponse(m) => message!(10, m),
            UlDcchMessage::ProximityIndication(m) => message!(12, m),
            UlDcchMessage::MessageClassExtension => {
                write_message_class_extension(writer, Self::NAME)
            }
        }
    }
}

impl Readable for UlDcchMessage {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let index = match read_c1_index(reader, Self::NAME, C1_VARIANTS)? {
            Some(index) => index,
            None => return Ok(UlDcchMessage::MessageClassExtension),
        };
        Ok(match index {
            0 => UlDcchMessage::CsfbParametersRequestCdma2000(reader.read()?),
            1 => UlDcchMessage::MeasurementReport(Box::new(reader.read()?)),
            2 => UlDcchMessage::RrcConnectionReconfigurationComplete(reader.read()?),
            3 => UlDcchMessage::RrcConnectionReestablishmentComplete(reader.read()?),
            4 => UlDcchMessage::RrcConnectionSetupComplete(reader.read()?),
            5 => UlDcchMessage::SecurityModeComplete(reader.read()?),
            6 => UlDcchMessage::SecurityModeFailure(reader.read()?),
            7 => UlDcchMessage::UeCapabilityInformation(reader.read()?),
            8 => return Err(Error::unsupported("ULHandoverPreparationTransfer")),
            9 => UlDcchMessage::UlInformationTransfer(reader.read()?),
            10 => UlDcchMessage::CounterCheckResponse(reader.read()?),
            11 => return Err(Error::unsupported("UEInformationResponse-r9")),
            12 => UlDcchMessage::ProximityIndication(reader.read()?),
            13 => return Err(Error::unsupported("RNReconfigurationComplete-r10")),
            14 => return Err(Error::unsupported("MBMSCountingResponse-r10")),
            _ => return Err(Error::unsupported("InterFreqRSTDMeasurementIndication-r10")),
        })
    }
}

impl LogicalChannelMessage for UlDcchMessage {
    const NAME: &'static str = "UL-DCCH-Message";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectingSink;
    use crate::ies::common::RrcTransactionIdentifier;
    use crate::messages::EmptyIes;
    use crate::syn::critical::CriticalExtensions;

    #[test]
    fn test_information_transfer_layout() {
        let message = DlDcchMessage::DlInformationTransfer(DlInformationTransfer {
            rrc_transaction_identifier: RrcTransactionIdentifier(2),
            critical_extensions: CriticalExtensions::Current(DlInformationTransferR8 {
                dedicated_info_type: DedicatedInfoType::Nas(DedicatedInfoNas(vec![0x07, 0x61])),
            }),
        });
        let bytes = message.encode_to_vec().unwrap();
        // c1 1, identifier 2, c1 0, no extension, NAS, length 2
        assert_eq!(vec![0x0C, 0x00, 0x10, 0x3B, 0x08], bytes);
        assert_eq!(message, DlDcchMessage::decode_from(&bytes).unwrap());
    }

    #[test]
    fn test_dl_spare_messages() {
        let sink = CollectingSink::default();
        let bytes = DlDcchMessage::Spare(15).encode_to_vec().unwrap();
        assert_eq!(vec![0b0111_1000], bytes);
        let mut reader = UperReader::from(&bytes[..]).with_sink(&sink);
        assert_eq!(DlDcchMessage::Spare(15), reader.read::<DlDcchMessage>().unwrap());
        assert!(sink.contains("DL-DCCH-Message"));

        assert_eq!(
            &ErrorKind::ChoiceVariantMismatch {
                name: "DL-DCCH-Message",
                index: 9
            },
            DlDcchMessage::Spare(9).encode_to_vec().unwrap_err().kind()
        );
    }

    #[test]
    fn test_later_release_messages_are_unsupported() {
        for (index, name) in [
            (9, "UEInformationRequest-r9"),
            (10, "LoggedMeasurementConfiguration-r10"),
            (11, "RNReconfiguration-r10"),
        ] {
            let data = [(index as u8) << 3];
            assert_eq!(
                &ErrorKind::Unsupported(name),
                DlDcchMessage::decode_from(&data).unwrap_err().kind()
            );
        }
        for (index, name) in [
            (8, "ULHandoverPreparationTransfer"),
            (11, "UEInformationResponse-r9"),
            (13, "RNReconfigurationComplete-r10"),
            (14, "MBMSCountingResponse-r10"),
            (15, "InterFreqRSTDMeasurementIndication-r10"),
        ] {
            let data = [(index as u8) << 3];
            assert_eq!(
                &ErrorKind::Unsupported(name),
                UlDcchMessage::decode_from(&data).unwrap_err().kind()
            );
        }
    }

    #[test]
    fn test_security_mode_complete_layout() {
        let message = UlDcchMessage::SecurityModeComplete(SecurityModeComplete {
            rrc_transaction_identifier: RrcTransactionIdentifier(3),
            critical_extensions: CriticalExtensions::Current(EmptyIes),
        });
        let bytes = message.encode_to_vec().unwrap();
        // message type, c1 5, identifier 3, critical extensions, no non-critical extension
        assert_eq!(vec![0b0010_1110, 0b0000_0000], bytes);
        assert_eq!(message, UlDcchMessage::decode_from(&bytes).unwrap());
    }

    #[test]
    fn test_message_class_extension() {
        let bytes = UlDcchMessage::MessageClassExtension.encode_to_vec().unwrap();
        assert_eq!(vec![0x80], bytes);
        assert_eq!(
            UlDcchMessage::MessageClassExtension,
            UlDcchMessage::decode_from(&bytes).unwrap()
        );
    }
}
