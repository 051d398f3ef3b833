//! The messages of the UL-DCCH.

use crate::ies::bounds::{MAX_DRB, MAX_PLMN};
use crate::ies::common::{
    DedicatedInfoNas, PlmnIdentity, RrcTransactionIdentifier, ARFCN_EUTRA_MAX, ARFCN_UTRA_MAX,
};
use crate::ies::measurement::MeasResults;
use crate::ies::ue_capability::{
    read_ue_capability_rat_container_list, write_ue_capability_rat_container_list,
    UeCapabilityRatContainer,
};
use crate::io::per::Error;
use crate::messages::dcch::DedicatedInfoType;
use crate::messages::{skip_non_critical_extension, EmptyIes};
use crate::syn::choice::UnknownAlternative;
use crate::syn::critical::CriticalExtensions;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

/// `CSFBParametersRequestCDMA2000`, which has no transaction identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsfbParametersRequestCdma2000 {
    pub critical_extensions: CriticalExtensions<EmptyIes, 0>,
}

impl Writable for CsfbParametersRequestCdma2000 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.critical_extensions)
    }
}

impl Readable for CsfbParametersRequestCdma2000 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(CsfbParametersRequestCdma2000 {
            critical_extensions: reader.read()?,
        })
    }
}

/// `MeasurementReport-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementReportR8 {
    pub meas_results: MeasResults,
}

impl Writable for MeasurementReportR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write(&self.meas_results)
    }
}

impl Readable for MeasurementReportR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = MeasurementReportR8 {
            meas_results: reader.read()?,
        };
        skip_non_critical_extension(reader, non_critical, "MeasurementReport-v8a0-IEs")?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementReport {
    pub critical_extensions: CriticalExtensions<MeasurementReportR8, 8>,
}

impl Writable for MeasurementReport {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.critical_extensions)
    }
}

impl Readable for MeasurementReport {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(MeasurementReport {
            critical_extensions: reader.read()?,
        })
    }
}

transaction_message!(RrcConnectionReconfigurationComplete, EmptyIes, 0);
transaction_message!(RrcConnectionReestablishmentComplete, EmptyIes, 0);
transaction_message!(SecurityModeComplete, EmptyIes, 0);
transaction_message!(SecurityModeFailure, EmptyIes, 0);

/// `RegisteredMME`, the MME the UE is registered at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredMme {
    pub plmn_identity: Option<PlmnIdentity>,
    /// `BIT STRING (SIZE (16))`
    pub mmegi: u16,
    pub mmec: u8,
}

impl Writable for RegisteredMme {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.plmn_identity.is_some()])?;
        if let Some(plmn_identity) = &self.plmn_identity {
            writer.write(plmn_identity)?;
        }
        writer.write_bits(u64::from(self.mmegi), 16)?;
        writer.write_bits(u64::from(self.mmec), 8)
    }
}

impl Readable for RegisteredMme {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [plmn_identity] = reader.read_presence()?;
        Ok(RegisteredMme {
            plmn_identity: if plmn_identity {
                Some(reader.read()?)
            } else {
                None
            },
            mmegi: reader.read_bits(16)?,
            mmec: reader.read_bits(8)?,
        })
    }
}

/// `RRCConnectionSetupComplete-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionSetupCompleteR8 {
    /// Index into the PLMN identity list broadcast in SIB1, 1..6
    pub selected_plmn_identity: u8,
    pub registered_mme: Option<RegisteredMme>,
    pub dedicated_info_nas: DedicatedInfoNas,
}

impl Writable for RrcConnectionSetupCompleteR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.registered_mme.is_some(), false])?;
        writer.write_int(self.selected_plmn_identity, 1, MAX_PLMN as i64)?;
        if let Some(mme) = &self.registered_mme {
            writer.write(mme)?;
        }
        writer.write(&self.dedicated_info_nas)
    }
}

impl Readable for RrcConnectionSetupCompleteR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [registered_mme, non_critical] = reader.read_presence()?;
        let value = RrcConnectionSetupCompleteR8 {
            selected_plmn_identity: reader.read_int(1, MAX_PLMN as i64)?,
            registered_mme: if registered_mme {
                Some(reader.read()?)
            } else {
                None
            },
            dedicated_info_nas: reader.read()?,
        };
        skip_non_critical_extension(reader, non_critical, "RRCConnectionSetupComplete-v8a0-IEs")?;
        Ok(value)
    }
}

transaction_message!(RrcConnectionSetupComplete, RrcConnectionSetupCompleteR8, 4);

/// `UECapabilityInformation-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UeCapabilityInformationR8 {
    pub ue_capability_rat_container_list: Vec<UeCapabilityRatContainer>,
}

impl Writable for UeCapabilityInformationR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        write_ue_capability_rat_container_list(writer, &self.ue_capability_rat_container_list)
    }
}

impl Readable for UeCapabilityInformationR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = UeCapabilityInformationR8 {
            ue_capability_rat_container_list: read_ue_capability_rat_container_list(reader)?,
        };
        skip_non_critical_extension(reader, non_critical, "UECapabilityInformation-v8a0-IEs")?;
        Ok(value)
    }
}

transaction_message!(UeCapabilityInformation, UeCapabilityInformationR8, 8);

/// `ULInformationTransfer-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UlInformationTransferR8 {
    pub dedicated_info_type: DedicatedInfoType,
}

impl Writable for UlInformationTransferR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write(&self.dedicated_info_type)
    }
}

impl Readable for UlInformationTransferR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = UlInformationTransferR8 {
            dedicated_info_type: reader.read()?,
        };
        skip_non_critical_extension(reader, non_critical, "ULInformationTransfer-v8a0-IEs")?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UlInformationTransfer {
    pub critical_extensions: CriticalExtensions<UlInformationTransferR8, 4>,
}

impl Writable for UlInformationTransfer {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.critical_extensions)
    }
}

impl Readable for UlInformationTransfer {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(UlInformationTransfer {
            critical_extensions: reader.read()?,
        })
    }
}

/// `DRB-CountInfo`, the full COUNT values of a DRB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrbCountInfo {
    /// 1..32
    pub drb_identity: u8,
    pub count_uplink: u32,
    pub count_downlink: u32,
}

impl Writable for DrbCountInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.drb_identity, 1, 32)?;
        writer.write_int(self.count_uplink, 0, i64::from(u32::MAX))?;
        writer.write_int(self.count_downlink, 0, i64::from(u32::MAX))
    }
}

impl Readable for DrbCountInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(DrbCountInfo {
            drb_identity: reader.read_int(1, 32)?,
            count_uplink: reader.read_int(0, i64::from(u32::MAX))?,
            count_downlink: reader.read_int(0, i64::from(u32::MAX))?,
        })
    }
}

/// `CounterCheckResponse-r8-IEs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterCheckResponseR8 {
    /// 0..11 entries
    pub drb_count_info_list: Vec<DrbCountInfo>,
}

impl Writable for CounterCheckResponseR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write_sequence_of(&self.drb_count_info_list, 0, MAX_DRB)
    }
}

impl Readable for CounterCheckResponseR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = CounterCheckResponseR8 {
            drb_count_info_list: reader.read_sequence_of(0, MAX_DRB)?,
        };
        skip_non_critical_extension(reader, non_critical, "CounterCheckResponse-v8a0-IEs")?;
        Ok(value)
    }
}

transaction_message!(CounterCheckResponse, CounterCheckResponseR8, 0);

enumerated! {
    pub enum ProximityType: "ProximityIndication-type-r9", extensible {
        Entering = "entering",
        Leaving = "leaving",
    }
}

/// The carrier of the CSG cell the UE is near to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProximityCarrierFreq {
    Eutra(u32),
    Utra(u16),
    Unknown(UnknownAlternative),
}

impl ProximityCarrierFreq {
    const NAME: &'static str = "ProximityIndication-carrierFreq-r9";
}

impl Writable for ProximityCarrierFreq {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            ProximityCarrierFreq::Eutra(arfcn) => {
                writer.write_choice_index(Self::NAME, 0, 2, true)?;
                writer.write_int(*arfcn, 0, ARFCN_EUTRA_MAX)
            }
            ProximityCarrierFreq::Utra(arfcn) => {
                writer.write_choice_index(Self::NAME, 1, 2, true)?;
                writer.write_int(*arfcn, 0, ARFCN_UTRA_MAX)
            }
            ProximityCarrierFreq::Unknown(unknown) => unknown.write(writer, Self::NAME, 2, 2),
        }
    }
}

impl Readable for ProximityCarrierFreq {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match reader.read_choice_index(Self::NAME, 2, true)? {
            0 => ProximityCarrierFreq::Eutra(reader.read_int(0, ARFCN_EUTRA_MAX)?),
            1 => ProximityCarrierFreq::Utra(reader.read_int(0, ARFCN_UTRA_MAX)?),
            index => {
                ProximityCarrierFreq::Unknown(UnknownAlternative::read(reader, Self::NAME, index)?)
            }
        })
    }
}

/// `ProximityIndication-r9-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProximityIndicationR9 {
    pub proximity_type: ProximityType,
    pub carrier_freq: ProximityCarrierFreq,
}

impl Writable for ProximityIndicationR9 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write(&self.proximity_type)?;
        writer.write(&self.carrier_freq)
    }
}

impl Readable for ProximityIndicationR9 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = ProximityIndicationR9 {
            proximity_type: reader.read()?,
            carrier_freq: reader.read()?,
        };
        skip_non_critical_extension(reader, non_critical, "ProximityIndication-v930-IEs")?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProximityIndication {
    pub critical_extensions: CriticalExtensions<ProximityIndicationR9, 4>,
}

impl Writable for ProximityIndication {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.critical_extensions)
    }
}

impl Readable for ProximityIndication {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(ProximityIndication {
            critical_extensions: reader.read()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::LogicalChannelMessage;
    use crate::ies::ue_capability::tests::sample_capability;
    use crate::messages::UlDcchMessage;

    #[test]
    fn test_setup_complete_layout() {
        let message = UlDcchMessage::RrcConnectionSetupComplete(RrcConnectionSetupComplete {
            rrc_transaction_identifier: RrcTransactionIdentifier(0),
            critical_extensions: CriticalExtensions::Current(RrcConnectionSetupCompleteR8 {
                selected_plmn_identity: 1,
                registered_mme: None,
                dedicated_info_nas: DedicatedInfoNas(vec![0x07, 0x41]),
            }),
        });
        let bytes = message.encode_to_vec().unwrap();
        // c1 4, identifier, c1 0, flags, selected PLMN, NAS with length
        assert_eq!(vec![0x20, 0x00, 0x04, 0x0E, 0x82], bytes);
        assert_eq!(message, UlDcchMessage::decode_from(&bytes).unwrap());
    }

    #[test]
    fn test_setup_complete_with_registered_mme() {
        let setup = RrcConnectionSetupCompleteR8 {
            selected_plmn_identity: 6,
            registered_mme: Some(RegisteredMme {
                plmn_identity: Some(PlmnIdentity {
                    mcc: Some([0, 0, 1]),
                    mnc: vec![0, 1],
                }),
                mmegi: 0x8001,
                mmec: 0x1A,
            }),
            dedicated_info_nas: DedicatedInfoNas(vec![0x17; 40]),
        };
        let mut writer = UperWriter::default();
        writer.write(&setup).unwrap();
        assert_eq!(setup, writer.as_reader().read::<RrcConnectionSetupCompleteR8>().unwrap());

        let mut writer = UperWriter::default();
        let invalid = RrcConnectionSetupCompleteR8 {
            selected_plmn_identity: 7,
            ..setup
        };
        assert!(writer.write(&invalid).unwrap_err().is_encode_error());
    }

    #[test]
    fn test_measurement_report() {
        let message = UlDcchMessage::MeasurementReport(Box::new(MeasurementReport {
            critical_extensions: CriticalExtensions::Current(MeasurementReportR8 {
                meas_results: MeasResults {
                    meas_id: 1,
                    rsrp_result_pcell: 97,
                    rsrq_result_pcell: 0,
                    meas_result_neigh_cells: None,
                    meas_result_for_ecid: None,
                    extension_r10: None,
                },
            }),
        }));
        let bytes = message.encode_to_vec().unwrap();
        assert_eq!(message, UlDcchMessage::decode_from(&bytes).unwrap());
    }

    #[test]
    fn test_capability_information_carries_eutra_capability() {
        let capability = sample_capability();
        let message = UlDcchMessage::UeCapabilityInformation(UeCapabilityInformation {
            rrc_transaction_identifier: RrcTransactionIdentifier(1),
            critical_extensions: CriticalExtensions::Current(UeCapabilityInformationR8 {
                ue_capability_rat_container_list: vec![
                    UeCapabilityRatContainer::eutra(&capability).unwrap()
                ],
            }),
        });
        let bytes = message.encode_to_vec().unwrap();
        let decoded = match UlDcchMessage::decode_from(&bytes).unwrap() {
            UlDcchMessage::UeCapabilityInformation(information) => information,
            other => panic!("Unexpected message {other:?}"),
        };
        let container = &decoded
            .critical_extensions
            .current()
            .unwrap()
            .ue_capability_rat_container_list[0];
        assert_eq!(Some(capability), container.decode_eutra().unwrap());
    }

    #[test]
    fn test_counter_check_response_may_be_empty() {
        let message = UlDcchMessage::CounterCheckResponse(CounterCheckResponse {
            rrc_transaction_identifier: RrcTransactionIdentifier(2),
            critical_extensions: CriticalExtensions::Current(CounterCheckResponseR8::default()),
        });
        let bytes = message.encode_to_vec().unwrap();
        // c1 10, identifier 2, body, no extension, empty list
        assert_eq!(vec![0x54, 0x00], bytes);
        assert_eq!(message, UlDcchMessage::decode_from(&bytes).unwrap());

        let full = CounterCheckResponseR8 {
            drb_count_info_list: vec![DrbCountInfo {
                drb_identity: 32,
                count_uplink: u32::MAX,
                count_downlink: 1,
            }],
        };
        let mut writer = UperWriter::default();
        writer.write(&full).unwrap();
        assert_eq!(1 + 4 + 5 + 32 + 32, writer.finish());
        assert_eq!(full, writer.as_reader().read::<CounterCheckResponseR8>().unwrap());
    }

    #[test]
    fn test_proximity_indication() {
        let message = UlDcchMessage::ProximityIndication(ProximityIndication {
            critical_extensions: CriticalExtensions::Current(ProximityIndicationR9 {
                proximity_type: ProximityType::Leaving,
                carrier_freq: ProximityCarrierFreq::Utra(10_700),
            }),
        });
        let bytes = message.encode_to_vec().unwrap();
        assert_eq!(message, UlDcchMessage::decode_from(&bytes).unwrap());
    }

    #[test]
    fn test_information_transfer_cdma2000() {
        let message = UlDcchMessage::UlInformationTransfer(UlInformationTransfer {
            critical_extensions: CriticalExtensions::Current(UlInformationTransferR8 {
                dedicated_info_type: DedicatedInfoType::Cdma2000Hrpd(vec![0xAB, 0xCD, 0xEF]),
            }),
        });
        let bytes = message.encode_to_vec().unwrap();
        assert_eq!(message, UlDcchMessage::decode_from(&bytes).unwrap());
    }
}
