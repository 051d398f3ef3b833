//! Messages exchanged between eNBs or between an eNB and the core network. They are not sent
//! on a logical channel but carried inside X2AP, S1AP or other RRC messages.

use crate::codec::LogicalChannelMessage;
use crate::ies::common::{
    CRnti, CellIdentity, PhysCellId, SecurityAlgorithmConfig, ShortMacI, ARFCN_EUTRA_MAX,
    read_phys_cell_id, write_phys_cell_id,
};
use crate::ies::measurement::MeasConfig;
use crate::ies::radio_resource::common::AntennaPortsCount;
use crate::ies::radio_resource::RadioResourceConfigDedicated;
use crate::ies::system_information::{
    MasterInformationBlock, SystemInformationBlockType1, SystemInformationBlockType2,
};
use crate::ies::ue_capability::{
    read_ue_capability_rat_container_list, write_ue_capability_rat_container_list,
    UeCapabilityRatContainer,
};
use crate::io::per::Error;
use crate::messages::dcch::uplink::UeCapabilityInformation;
use crate::messages::{skip_non_critical_extension, DlDcchMessage};
use crate::syn::critical::CriticalExtensions;
use crate::syn::extension::{addition, OpaqueExtension};
use crate::syn::{Readable, UperReader, UperWriter, Writable};

/// `maxReestabInfo`
const MAX_REESTAB_INFO: u64 = 32;

/// `HandoverCommand-r8-IEs`, the DL-DCCH message the target eNB prepared for the UE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoverCommandR8 {
    pub handover_command_message: Vec<u8>,
}

impl HandoverCommandR8 {
    pub fn new(message: &DlDcchMessage) -> Result<Self, Error> {
        Ok(HandoverCommandR8 {
            handover_command_message: message.encode_to_vec()?,
        })
    }

    /// Decodes the contained message, usually an `RRCConnectionReconfiguration`
    pub fn dl_dcch_message(&self) -> Result<DlDcchMessage, Error> {
        DlDcchMessage::decode_from(&self.handover_command_message)
    }
}

impl Writable for HandoverCommandR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write_octet_string(&self.handover_command_message, None, None)
    }
}

impl Readable for HandoverCommandR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = HandoverCommandR8 {
            handover_command_message: reader.read_octet_string(None, None)?,
        };
        skip_non_critical_extension(reader, non_critical, "HandoverCommand-r8-IEs")?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoverCommand {
    pub critical_extensions: CriticalExtensions<HandoverCommandR8, 8>,
}

impl Writable for HandoverCommand {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.critical_extensions)
    }
}

impl Readable for HandoverCommand {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(HandoverCommand {
            critical_extensions: reader.read()?,
        })
    }
}

impl LogicalChannelMessage for HandoverCommand {
    const NAME: &'static str = "HandoverCommand";
}

/// `AS-Config`, the configuration of the UE in the source cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsConfig {
    pub source_meas_config: MeasConfig,
    pub source_radio_resource_config: RadioResourceConfigDedicated,
    pub source_security_algorithm_config: SecurityAlgorithmConfig,
    pub source_ue_identity: CRnti,
    pub source_master_information_block: MasterInformationBlock,
    pub source_system_information_block_type1: SystemInformationBlockType1,
    pub source_system_information_block_type2: SystemInformationBlockType2,
    /// `AntennaInfoCommon`
    pub antenna_ports_count: AntennaPortsCount,
    pub source_dl_carrier_freq: u32,
    /// `sourceSystemInformationBlockType1Ext` and `sourceOtherConfig-r9`, kept as received
    pub extension_v9: Option<OpaqueExtension>,
    /// `sourceSCellConfigList-r10`, kept as received
    pub extension_r10: Option<OpaqueExtension>,
}

impl AsConfig {
    pub const NAME: &'static str = "AS-Config";
}

impl Writable for AsConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let additions = [addition(&self.extension_v9), addition(&self.extension_r10)];
        writer.write_extension_marker(&additions)?;
        writer.write(&self.source_meas_config)?;
        writer.write(&self.source_radio_resource_config)?;
        writer.write(&self.source_security_algorithm_config)?;
        writer.write_bits(u64::from(self.source_ue_identity), 16)?;
        writer.write(&self.source_master_information_block)?;
        writer.write(&self.source_system_information_block_type1)?;
        writer.write(&self.source_system_information_block_type2)?;
        writer.write(&self.antenna_ports_count)?;
        writer.write_int(self.source_dl_carrier_freq, 0, ARFCN_EUTRA_MAX)?;
        writer.write_extension_additions(&additions)
    }
}

impl Readable for AsConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let mut value = AsConfig {
            source_meas_config: reader.read()?,
            source_radio_resource_config: reader.read()?,
            source_security_algorithm_config: reader.read()?,
            source_ue_identity: reader.read_bits(16)?,
            source_master_information_block: reader.read()?,
            source_system_information_block_type1: reader.read()?,
            source_system_information_block_type2: reader.read()?,
            antenna_ports_count: reader.read()?,
            source_dl_carrier_freq: reader.read_int(0, ARFCN_EUTRA_MAX)?,
            extension_v9: None,
            extension_r10: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 2, |index, reader| {
            match index {
                0 => value.extension_v9 = Some(reader.read()?),
                _ => value.extension_r10 = Some(reader.read()?),
            }
            Ok(())
        })?;
        Ok(value)
    }
}

enumerated! {
    pub enum UeInactiveTime: "RRM-Config-ue-InactiveTime" {
        S1 = "s1",
        S2 = "s2",
        S3 = "s3",
        S5 = "s5",
        S7 = "s7",
        S10 = "s10",
        S15 = "s15",
        S20 = "s20",
        S25 = "s25",
        S30 = "s30",
        S40 = "s40",
        S50 = "s50",
        Min1 = "min1",
        Min1S20c = "min1s20c",
        Min1S40 = "min1s40",
        Min2 = "min2",
        Min2S30 = "min2s30",
        Min3 = "min3",
        Min3S30 = "min3s30",
        Min4 = "min4",
        Min5 = "min5",
        Min6 = "min6",
        Min7 = "min7",
        Min8 = "min8",
        Min9 = "min9",
        Min10 = "min10",
        Min12 = "min12",
        Min14 = "min14",
        Min17 = "min17",
        Min20 = "min20",
        Min24 = "min24",
        Min28 = "min28",
        Min33 = "min33",
        Min38 = "min38",
        Min44 = "min44",
        Min50 = "min50",
        Hr1 = "hr1",
        Hr1Min30 = "hr1min30",
        Hr2 = "hr2",
        Hr2Min30 = "hr2min30",
        Hr3 = "hr3",
        Hr3Min30 = "hr3min30",
        Hr4 = "hr4",
        Hr5 = "hr5",
        Hr6 = "hr6",
        Hr8 = "hr8",
        Hr10 = "hr10",
        Hr13 = "hr13",
        Hr16 = "hr16",
        Hr20 = "hr20",
        Day1 = "day1",
        Day1Hr12 = "day1hr12",
        Day2 = "day2",
        Day2Hr12 = "day2hr12",
        Day3 = "day3",
        Day4 = "day4",
        Day5 = "day5",
        Day7 = "day7",
        Day10 = "day10",
        Day14 = "day14",
        Day19 = "day19",
        Day24 = "day24",
        Day30 = "day30",
        DayMoreThan30 = "dayMoreThan30",
    }
}

/// `RRM-Config`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrmConfig {
    pub ue_inactive_time: Option<UeInactiveTime>,
    /// `candidateCellInfoList-r10`, kept as received
    pub extension_r10: Option<OpaqueExtension>,
}

impl RrmConfig {
    pub const NAME: &'static str = "RRM-Config";
}

impl Writable for RrmConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let additions = [addition(&self.extension_r10)];
        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[self.ue_inactive_time.is_some()])?;
        if let Some(time) = &self.ue_inactive_time {
            writer.write(time)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for RrmConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [ue_inactive_time] = reader.read_presence()?;
        let mut value = RrmConfig {
            ue_inactive_time: if ue_inactive_time {
                Some(reader.read()?)
            } else {
                None
            },
            extension_r10: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            value.extension_r10 = Some(reader.read()?);
            Ok(())
        })?;
        Ok(value)
    }
}

/// `AdditionalReestabInfo`, the keys for a re-establishment in another cell of the target eNB
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalReestabInfo {
    pub cell_identity: CellIdentity,
    /// `Key-eNodeB-Star ::= BIT STRING (SIZE (256))`
    pub key_enodeb_star: [u8; 32],
    pub short_mac_i: ShortMacI,
}

impl Writable for AdditionalReestabInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_bits(u64::from(self.cell_identity), 28)?;
        self.key_enodeb_star
            .iter()
            .try_for_each(|byte| writer.write_bits(u64::from(*byte), 8))?;
        writer.write_bits(u64::from(self.short_mac_i), 16)
    }
}

impl Readable for AdditionalReestabInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let cell_identity = reader.read_bits(28)?;
        let mut key_enodeb_star = [0_u8; 32];
        for byte in key_enodeb_star.iter_mut() {
            *byte = reader.read_bits(8)?;
        }
        Ok(AdditionalReestabInfo {
            cell_identity,
            key_enodeb_star,
            short_mac_i: reader.read_bits(16)?,
        })
    }
}

/// `ReestablishmentInfo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReestablishmentInfo {
    pub source_phys_cell_id: PhysCellId,
    pub target_cell_short_mac_i: ShortMacI,
    /// 1..32 entries
    pub additional_reestab_info_list: Option<Vec<AdditionalReestabInfo>>,
}

impl Writable for ReestablishmentInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[self.additional_reestab_info_list.is_some()])?;
        write_phys_cell_id(writer, self.source_phys_cell_id)?;
        writer.write_bits(u64::from(self.target_cell_short_mac_i), 16)?;
        if let Some(list) = &self.additional_reestab_info_list {
            writer.write_sequence_of(list, 1, MAX_REESTAB_INFO)?;
        }
        Ok(())
    }
}

impl Readable for ReestablishmentInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [list] = reader.read_presence()?;
        let value = ReestablishmentInfo {
            source_phys_cell_id: read_phys_cell_id(reader)?,
            target_cell_short_mac_i: reader.read_bits(16)?,
            additional_reestab_info_list: if list {
                Some(reader.read_sequence_of(1, MAX_REESTAB_INFO)?)
            } else {
                None
            },
        };
        reader.read_extension_additions("ReestablishmentInfo", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

/// `AS-Context`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsContext {
    pub reestablishment_info: Option<ReestablishmentInfo>,
}

impl Writable for AsContext {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[self.reestablishment_info.is_some()])?;
        if let Some(info) = &self.reestablishment_info {
            writer.write(info)?;
        }
        Ok(())
    }
}

impl Readable for AsContext {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [info] = reader.read_presence()?;
        let value = AsContext {
            reestablishment_info: if info { Some(reader.read()?) } else { None },
        };
        reader.read_extension_additions("AS-Context", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

/// `HandoverPreparationInformation-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoverPreparationInformationR8 {
    pub ue_radio_access_capability_info: Vec<UeCapabilityRatContainer>,
    pub as_config: Option<Box<AsConfig>>,
    pub rrm_config: Option<RrmConfig>,
    pub as_context: Option<AsContext>,
}

impl Writable for HandoverPreparationInformationR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.as_config.is_some(),
            self.rrm_config.is_some(),
            self.as_context.is_some(),
            false,
        ])?;
        write_ue_capability_rat_container_list(writer, &self.ue_radio_access_capability_info)?;
        if let Some(config) = &self.as_config {
            writer.write(config.as_ref())?;
        }
        if let Some(config) = &self.rrm_config {
            writer.write(config)?;
        }
        if let Some(context) = &self.as_context {
            writer.write(context)?;
        }
        Ok(())
    }
}

impl Readable for HandoverPreparationInformationR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [as_config, rrm_config, as_context, non_critical] = reader.read_presence()?;
        let value = HandoverPreparationInformationR8 {
            ue_radio_access_capability_info: read_ue_capability_rat_container_list(reader)?,
            as_config: if as_config {
                Some(Box::new(reader.read()?))
            } else {
                None
            },
            rrm_config: if rrm_config {
                Some(reader.read()?)
            } else {
                None
            },
            as_context: if as_context {
                Some(reader.read()?)
            } else {
                None
            },
        };
        skip_non_critical_extension(
            reader,
            non_critical,
            "HandoverPreparationInformation-v920-IEs",
        )?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoverPreparationInformation {
    pub critical_extensions: CriticalExtensions<HandoverPreparationInformationR8, 8>,
}

impl Writable for HandoverPreparationInformation {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.critical_extensions)
    }
}

impl Readable for HandoverPreparationInformation {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(HandoverPreparationInformation {
            critical_extensions: reader.read()?,
        })
    }
}

impl LogicalChannelMessage for HandoverPreparationInformation {
    const NAME: &'static str = "HandoverPreparationInformation";
}

/// `UERadioAccessCapabilityInformation-r8-IEs`, an encoded `UECapabilityInformation` as
/// stored by the MME
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UeRadioAccessCapabilityInformationR8 {
    pub ue_radio_access_capability_info: Vec<u8>,
}

impl UeRadioAccessCapabilityInformationR8 {
    pub fn new(information: &UeCapabilityInformation) -> Result<Self, Error> {
        let mut writer = UperWriter::default();
        writer.write(information)?;
        Ok(UeRadioAccessCapabilityInformationR8 {
            ue_radio_access_capability_info: writer.into_octets(),
        })
    }

    pub fn ue_capability_information(&self) -> Result<UeCapabilityInformation, Error> {
        UperReader::from(&self.ue_radio_access_capability_info[..]).read()
    }
}

impl Writable for UeRadioAccessCapabilityInformationR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write_octet_string(&self.ue_radio_access_capability_info, None, None)
    }
}

impl Readable for UeRadioAccessCapabilityInformationR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = UeRadioAccessCapabilityInformationR8 {
            ue_radio_access_capability_info: reader.read_octet_string(None, None)?,
        };
        skip_non_critical_extension(
            reader,
            non_critical,
            "UERadioAccessCapabilityInformation-r8-IEs",
        )?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UeRadioAccessCapabilityInformation {
    pub critical_extensions: CriticalExtensions<UeRadioAccessCapabilityInformationR8, 8>,
}

impl Writable for UeRadioAccessCapabilityInformation {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.critical_extensions)
    }
}

impl Readable for UeRadioAccessCapabilityInformation {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(UeRadioAccessCapabilityInformation {
            critical_extensions: reader.read()?,
        })
    }
}

impl LogicalChannelMessage for UeRadioAccessCapabilityInformation {
    const NAME: &'static str = "UERadioAccessCapabilityInformation";
}
