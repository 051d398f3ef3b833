//! Common control channel, used while no dedicated connection exists.

use crate::codec::LogicalChannelMessage;
use crate::ies::common::{
    read_phys_cell_id, write_phys_cell_id, CRnti, PhysCellId, RrcTransactionIdentifier,
    STmsi, ShortMacI,
};
use crate::ies::radio_resource::RadioResourceConfigDedicated;
use crate::io::per::Error;
use crate::messages::{
    read_c1_index, skip_non_critical_extension, write_c1_index, write_message_class_extension,
    EmptyIes,
};
use crate::syn::critical::CriticalExtensions;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

/// `RRCConnectionReestablishment-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionReestablishmentR8 {
    pub radio_resource_config_dedicated: RadioResourceConfigDedicated,
    /// 0..7
    pub next_hop_chaining_count: u8,
}

impl Writable for RrcConnectionReestablishmentR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write(&self.radio_resource_config_dedicated)?;
        writer.write_int(self.next_hop_chaining_count, 0, 7)
    }
}

impl Readable for RrcConnectionReestablishmentR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = RrcConnectionReestablishmentR8 {
            radio_resource_config_dedicated: reader.read()?,
            next_hop_chaining_count: reader.read_int(0, 7)?,
        };
        skip_non_critical_extension(reader, non_critical, "RRCConnectionReestablishment-v8a0-IEs")?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionReestablishment {
    pub rrc_transaction_identifier: RrcTransactionIdentifier,
    pub critical_extensions: CriticalExtensions<RrcConnectionReestablishmentR8, 8>,
}

impl Writable for RrcConnectionReestablishment {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.rrc_transaction_identifier)?;
        writer.write(&self.critical_extensions)
    }
}

impl Readable for RrcConnectionReestablishment {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(RrcConnectionReestablishment {
            rrc_transaction_identifier: reader.read()?,
            critical_extensions: reader.read()?,
        })
    }
}

/// `RRCConnectionReestablishmentReject`, a message without content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionReestablishmentReject {
    pub critical_extensions: CriticalExtensions<EmptyIes, 0>,
}

impl Writable for RrcConnectionReestablishmentReject {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.critical_extensions)
    }
}

impl Readable for RrcConnectionReestablishmentReject {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(RrcConnectionReestablishmentReject {
            critical_extensions: reader.read()?,
        })
    }
}

/// `RRCConnectionReject-r8-IEs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionRejectR8 {
    /// Seconds, 1..16
    pub wait_time: u8,
}

impl Writable for RrcConnectionRejectR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write_int(self.wait_time, 1, 16)
    }
}

impl Readable for RrcConnectionRejectR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = RrcConnectionRejectR8 {
            wait_time: reader.read_int(1, 16)?,
        };
        skip_non_critical_extension(reader, non_critical, "RRCConnectionReject-v8a0-IEs")?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionReject {
    pub critical_extensions: CriticalExtensions<RrcConnectionRejectR8, 4>,
}

impl Writable for RrcConnectionReject {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.critical_extensions)
    }
}

impl Readable for RrcConnectionReject {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(RrcConnectionReject {
            critical_extensions: reader.read()?,
        })
    }
}

/// `RRCConnectionSetup-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionSetupR8 {
    pub radio_resource_config_dedicated: RadioResourceConfigDedicated,
}

impl Writable for RrcConnectionSetupR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write(&self.radio_resource_config_dedicated)
    }
}

impl Readable for RrcConnectionSetupR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = RrcConnectionSetupR8 {
            radio_resource_config_dedicated: reader.read()?,
        };
        skip_non_critical_extension(reader, non_critical, "RRCConnectionSetup-v8a0-IEs")?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionSetup {
    pub rrc_transaction_identifier: RrcTransactionIdentifier,
    pub critical_extensions: CriticalExtensions<RrcConnectionSetupR8, 8>,
}

impl Writable for RrcConnectionSetup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.rrc_transaction_identifier)?;
        writer.write(&self.critical_extensions)
    }
}

impl Readable for RrcConnectionSetup {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(RrcConnectionSetup {
            rrc_transaction_identifier: reader.read()?,
            critical_extensions: reader.read()?,
        })
    }
}

/// `DL-CCCH-Message`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DlCcchMessage {
    RrcConnectionReestablishment(Box<RrcConnectionReestablishment>),
    RrcConnectionReestablishmentReject(RrcConnectionReestablishmentReject),
    RrcConnectionReject(RrcConnectionReject),
    RrcConnectionSetup(Box<RrcConnectionSetup>),
    MessageClassExtension,
}

impl Writable for DlCcchMessage {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            DlCcchMessage::RrcConnectionReestablishment(message) => {
                write_c1_index(writer, Self::NAME, 0, 4)?;
                writer.write(message)
            }
            DlCcchMessage::RrcConnectionReestablishmentReject(message) => {
                write_c1_index(writer, Self::NAME, 1, 4)?;
                writer.write(message)
            }
            DlCcchMessage::RrcConnectionReject(message) => {
                write_c1_index(writer, Self::NAME, 2, 4)?;
                writer.write(message)
            }
            DlCcchMessage::RrcConnectionSetup(message) => {
                write_c1_index(writer, Self::NAME, 3, 4)?;
                writer.write(message)
            }
            DlCcchMessage::MessageClassExtension => {
                write_message_class_extension(writer, Self::NAME)
            }
        }
    }
}

impl Readable for DlCcchMessage {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match read_c1_index(reader, Self::NAME, 4)? {
            Some(0) => DlCcchMessage::RrcConnectionReestablishment(reader.read()?),
            Some(1) => DlCcchMessage::RrcConnectionReestablishmentReject(reader.read()?),
            Some(2) => DlCcchMessage::RrcConnectionReject(reader.read()?),
            Some(_) => DlCcchMessage::RrcConnectionSetup(reader.read()?),
            None => DlCcchMessage::MessageClassExtension,
        })
    }
}

impl LogicalChannelMessage for DlCcchMessage {
    const NAME: &'static str = "DL-CCCH-Message";
}

/// `ReestabUE-Identity`, the identity the UE had in the cell where the failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReestabUeIdentity {
    pub c_rnti: CRnti,
    pub phys_cell_id: PhysCellId,
    pub short_mac_i: ShortMacI,
}

impl Writable for ReestabUeIdentity {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_bits(u64::from(self.c_rnti), 16)?;
        write_phys_cell_id(writer, self.phys_cell_id)?;
        writer.write_bits(u64::from(self.short_mac_i), 16)
    }
}

impl Readable for ReestabUeIdentity {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(ReestabUeIdentity {
            c_rnti: reader.read_bits(16)?,
            phys_cell_id: read_phys_cell_id(reader)?,
            short_mac_i: reader.read_bits(16)?,
        })
    }
}

enumerated! {
    pub enum ReestablishmentCause: "ReestablishmentCause" {
        ReconfigurationFailure = "reconfigurationFailure",
        HandoverFailure = "handoverFailure",
        OtherFailure = "otherFailure",
        Spare1 = "spare1",
    }
}

/// `RRCConnectionReestablishmentRequest-r8-IEs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionReestablishmentRequestR8 {
    pub ue_identity: ReestabUeIdentity,
    pub reestablishment_cause: ReestablishmentCause,
    /// `BIT STRING (SIZE (2))`
    pub spare: u8,
}

impl Writable for RrcConnectionReestablishmentRequestR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.ue_identity)?;
        writer.write(&self.reestablishment_cause)?;
        writer.write_bits(u64::from(self.spare), 2)
    }
}

impl Readable for RrcConnectionReestablishmentRequestR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(RrcConnectionReestablishmentRequestR8 {
            ue_identity: reader.read()?,
            reestablishment_cause: reader.read()?,
            spare: reader.read_bits(2)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionReestablishmentRequest {
    pub critical_extensions: CriticalExtensions<RrcConnectionReestablishmentRequestR8, 0>,
}

impl Writable for RrcConnectionReestablishmentRequest {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.critical_extensions)
    }
}

impl Readable for RrcConnectionReestablishmentRequest {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(RrcConnectionReestablishmentRequest {
            critical_extensions: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialUeIdentity {
    STmsi(STmsi),
    /// `BIT STRING (SIZE (40))`
    RandomValue(u64),
}

impl Writable for InitialUeIdentity {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            InitialUeIdentity::STmsi(s_tmsi) => {
                writer.write_choice_index("InitialUE-Identity", 0, 2, false)?;
                writer.write(s_tmsi)
            }
            InitialUeIdentity::RandomValue(value) => {
                writer.write_choice_index("InitialUE-Identity", 1, 2, false)?;
                writer.write_bits(*value, 40)
            }
        }
    }
}

impl Readable for InitialUeIdentity {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match reader.read_choice_index("InitialUE-Identity", 2, false)? {
            0 => InitialUeIdentity::STmsi(reader.read()?),
            _ => InitialUeIdentity::RandomValue(reader.read_bits(40)?),
        })
    }
}

enumerated! {
    pub enum EstablishmentCause: "EstablishmentCause" {
        Emergency = "emergency",
        HighPriorityAccess = "highPriorityAccess",
        MtAccess = "mt-Access",
        MoSignalling = "mo-Signalling",
        MoData = "mo-Data",
        DelayTolerantAccess = "delayTolerantAccess-v1020",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

/// `RRCConnectionRequest-r8-IEs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionRequestR8 {
    pub ue_identity: InitialUeIdentity,
    pub establishment_cause: EstablishmentCause,
    /// `BIT STRING (SIZE (1))`
    pub spare: bool,
}

impl Writable for RrcConnectionRequestR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.ue_identity)?;
        writer.write(&self.establishment_cause)?;
        writer.write_bit(self.spare)
    }
}

impl Readable for RrcConnectionRequestR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(RrcConnectionRequestR8 {
            ue_identity: reader.read()?,
            establishment_cause: reader.read()?,
            spare: reader.read_bit()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionRequest {
    pub critical_extensions: CriticalExtensions<RrcConnectionRequestR8, 0>,
}

impl Writable for RrcConnectionRequest {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.critical_extensions)
    }
}

impl Readable for RrcConnectionRequest {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(RrcConnectionRequest {
            critical_extensions: reader.read()?,
        })
    }
}

/// `UL-CCCH-Message`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UlCcchMessage {
    RrcConnectionReestablishmentRequest(RrcConnectionReestablishmentRequest),
    RrcConnectionRequest(RrcConnectionRequest),
    MessageClassExtension,
}

impl Writable for UlCcchMessage {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            UlCcchMessage::RrcConnectionReestablishmentRequest(message) => {
                write_c1_index(writer, Self::NAME, 0, 2)?;
                writer.write(message)
            }
            UlCcchMessage::RrcConnectionRequest(message) => {
                write_c1_index(writer, Self::NAME, 1, 2)?;
                writer.write(message)
            }
            UlCcchMessage::MessageClassExtension => {
                write_message_class_extension(writer, Self::NAME)
            }
        }
    }
}

impl Readable for UlCcchMessage {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match read_c1_index(reader, Self::NAME, 2)? {
            Some(0) => UlCcchMessage::RrcConnectionReestablishmentRequest(reader.read()?),
            Some(_) => UlCcchMessage::RrcConnectionRequest(reader.read()?),
            None => UlCcchMessage::MessageClassExtension,
        })
    }
}

impl LogicalChannelMessage for UlCcchMessage {
    const NAME: &'static str = "UL-CCCH-Message";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectingSink;
    use crate::ies::radio_resource::dedicated::SrbToAddMod;
    use crate::io::per::ErrorKind;
    use crate::syn::choice::ExplicitOrDefault;

    fn srb1_setup() -> RadioResourceConfigDedicated {
        RadioResourceConfigDedicated {
            srb_to_add_mod_list: Some(vec![SrbToAddMod {
                srb_identity: 1,
                rlc_config: Some(ExplicitOrDefault::Default),
                logical_channel_config: Some(ExplicitOrDefault::Default),
            }]),
            ..Default::default()
        }
    }

    #[test]
    fn test_connection_setup_layout() {
        let message = DlCcchMessage::RrcConnectionSetup(Box::new(RrcConnectionSetup {
            rrc_transaction_identifier: RrcTransactionIdentifier(0),
            critical_extensions: CriticalExtensions::Current(RrcConnectionSetupR8 {
                radio_resource_config_dedicated: srb1_setup(),
            }),
        }));
        let bytes = message.encode_to_vec().unwrap();
        assert_eq!(vec![0x60, 0x10, 0x1B], bytes);
        assert_eq!(message, DlCcchMessage::decode_from(&bytes).unwrap());
    }

    #[test]
    fn test_reestablishment_round_trip() {
        let message = DlCcchMessage::RrcConnectionReestablishment(Box::new(
            RrcConnectionReestablishment {
                rrc_transaction_identifier: RrcTransactionIdentifier(3),
                critical_extensions: CriticalExtensions::Current(
                    RrcConnectionReestablishmentR8 {
                        radio_resource_config_dedicated: srb1_setup(),
                        next_hop_chaining_count: 5,
                    },
                ),
            },
        ));
        let bytes = message.encode_to_vec().unwrap();
        assert_eq!(message, DlCcchMessage::decode_from(&bytes).unwrap());
    }

    #[test]
    fn test_reject_wait_time() {
        let message = DlCcchMessage::RrcConnectionReject(RrcConnectionReject {
            critical_extensions: CriticalExtensions::Current(RrcConnectionRejectR8 {
                wait_time: 16,
            }),
        });
        let mut writer = UperWriter::default();
        writer.write(&message).unwrap();
        // message type, criticalExtensions with c1, non-critical flag, wait time
        assert_eq!(3 + 3 + 1 + 4, writer.finish());
        assert_eq!(&[0b0100_0001, 0b1110_0000], writer.byte_content());
        assert_eq!(message, writer.as_reader().read::<DlCcchMessage>().unwrap());

        let invalid = RrcConnectionRejectR8 { wait_time: 0 };
        assert_eq!(
            &ErrorKind::ValueNotInRange(0, 1, 16),
            UperWriter::default().write(&invalid).unwrap_err().kind()
        );
    }

    #[test]
    fn test_reestablishment_reject_spare_and_future() {
        let sink = CollectingSink::default();
        let message = DlCcchMessage::RrcConnectionReestablishmentReject(
            RrcConnectionReestablishmentReject {
                critical_extensions: CriticalExtensions::Future,
            },
        );
        let bytes = message.encode_to_vec().unwrap();
        assert_eq!(vec![0b0011_0000], bytes);
        let mut reader = UperReader::from(&bytes[..]).with_sink(&sink);
        assert_eq!(message, reader.read::<DlCcchMessage>().unwrap());
        assert!(sink.contains("criticalExtensions"));
    }

    #[test]
    fn test_reestablishment_request_layout() {
        let message = UlCcchMessage::RrcConnectionReestablishmentRequest(
            RrcConnectionReestablishmentRequest {
                critical_extensions: CriticalExtensions::Current(
                    RrcConnectionReestablishmentRequestR8 {
                        ue_identity: ReestabUeIdentity {
                            c_rnti: 0x1234,
                            phys_cell_id: 357,
                            short_mac_i: 0xABCD,
                        },
                        reestablishment_cause: ReestablishmentCause::OtherFailure,
                        spare: 0,
                    },
                ),
            },
        );
        let mut writer = UperWriter::default();
        writer.write(&message).unwrap();
        assert_eq!(1 + 1 + 1 + 16 + 9 + 16 + 2 + 2, writer.finish());
        assert_eq!(
            &[0x02, 0x46, 0x96, 0x5A, 0xBC, 0xD8],
            writer.byte_content()
        );
        assert_eq!(message, writer.as_reader().read::<UlCcchMessage>().unwrap());
    }

    #[test]
    fn test_connection_request_random_value() {
        let message = UlCcchMessage::RrcConnectionRequest(RrcConnectionRequest {
            critical_extensions: CriticalExtensions::Current(RrcConnectionRequestR8 {
                ue_identity: InitialUeIdentity::RandomValue(0x12_3456_789A),
                establishment_cause: EstablishmentCause::MoSignalling,
                spare: false,
            }),
        });
        let mut writer = UperWriter::default();
        writer.write(&message).unwrap();
        // message type, criticalExtensions, identity choice, random value, cause, spare
        assert_eq!(2 + 1 + 1 + 40 + 3 + 1, writer.finish());
        assert_eq!(message, writer.as_reader().read::<UlCcchMessage>().unwrap());
    }

    #[test]
    fn test_spare_cause_is_accepted() {
        let sink = CollectingSink::default();
        let request = RrcConnectionRequestR8 {
            ue_identity: InitialUeIdentity::STmsi(STmsi {
                mmec: 1,
                m_tmsi: 2,
            }),
            establishment_cause: EstablishmentCause::Spare1,
            spare: false,
        };
        let mut writer = UperWriter::default();
        writer.write(&request).unwrap();
        let mut reader = writer.as_reader().with_sink(&sink);
        assert_eq!(request, reader.read::<RrcConnectionRequestR8>().unwrap());
        assert!(sink.contains("EstablishmentCause"));
    }
}
