//! MBMS information elements, carried on the MCCH and in SIB2 and SIB13.

use crate::ies::bounds::{MAX_MBSFN_ALLOCATIONS, MAX_MBSFN_AREA, MAX_PMCH_PER_MBSFN, MAX_SESSION_PER_PMCH};
use crate::ies::common::PlmnIdentity;
use crate::io::per::Error;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

enumerated! {
    pub enum RadioframeAllocationPeriod: "MBSFN-SubframeConfig-radioframeAllocationPeriod", numeric u8 {
        N1 = "n1" => 1,
        N2 = "n2" => 2,
        N4 = "n4" => 4,
        N8 = "n8" => 8,
        N16 = "n16" => 16,
        N32 = "n32" => 32,
    }
}

/// Subframes allocated for MBSFN within the allocated radio frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubframeAllocation {
    /// `BIT STRING (SIZE (6))`
    OneFrame(u8),
    /// `BIT STRING (SIZE (24))`
    FourFrames(u32),
}

impl Writable for SubframeAllocation {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            SubframeAllocation::OneFrame(bits) => {
                writer.write_choice_index("subframeAllocation", 0, 2, false)?;
                writer.write_bits(u64::from(*bits), 6)
            }
            SubframeAllocation::FourFrames(bits) => {
                writer.write_choice_index("subframeAllocation", 1, 2, false)?;
                writer.write_bits(u64::from(*bits), 24)
            }
        }
    }
}

impl Readable for SubframeAllocation {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match reader.read_choice_index("subframeAllocation", 2, false)? {
            0 => SubframeAllocation::OneFrame(reader.read_bits(6)?),
            _ => SubframeAllocation::FourFrames(reader.read_bits(24)?),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbsfnSubframeConfig {
    pub radioframe_allocation_period: RadioframeAllocationPeriod,
    /// 0..7
    pub radioframe_allocation_offset: u8,
    pub subframe_allocation: SubframeAllocation,
}

impl Writable for MbsfnSubframeConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.radioframe_allocation_period)?;
        writer.write_int(self.radioframe_allocation_offset, 0, 7)?;
        writer.write(&self.subframe_allocation)
    }
}

impl Readable for MbsfnSubframeConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(MbsfnSubframeConfig {
            radioframe_allocation_period: reader.read()?,
            radioframe_allocation_offset: reader.read_int(0, 7)?,
            subframe_allocation: reader.read()?,
        })
    }
}

/// `MBSFN-SubframeConfigList ::= SEQUENCE (SIZE (1..maxMBSFN-Allocations)) OF MBSFN-SubframeConfig`
pub fn write_mbsfn_subframe_config_list(
    writer: &mut UperWriter,
    list: &[MbsfnSubframeConfig],
) -> Result<(), Error> {
    writer.write_sequence_of(list, 1, MAX_MBSFN_ALLOCATIONS)
}

pub fn read_mbsfn_subframe_config_list(
    reader: &mut UperReader<'_>,
) -> Result<Vec<MbsfnSubframeConfig>, Error> {
    reader.read_sequence_of(1, MAX_MBSFN_ALLOCATIONS)
}

/// The PLMN of a TMGI, either by index into the PLMN list of SIB1 or explicitly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TmgiPlmnId {
    /// 1..6
    PlmnIndex(u8),
    Explicit(PlmnIdentity),
}

/// Temporary mobile group identity of an MBMS service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tmgi {
    pub plmn_id: TmgiPlmnId,
    /// `OCTET STRING (SIZE (3))`
    pub service_id: [u8; 3],
}

impl Writable for Tmgi {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match &self.plmn_id {
            TmgiPlmnId::PlmnIndex(index) => {
                writer.write_choice_index("plmn-Id-r9", 0, 2, false)?;
                writer.write_int(*index, 1, 6)?;
            }
            TmgiPlmnId::Explicit(plmn) => {
                writer.write_choice_index("plmn-Id-r9", 1, 2, false)?;
                writer.write(plmn)?;
            }
        }
        writer.write_octet_string(&self.service_id[..], Some(3), Some(3))
    }
}

impl Readable for Tmgi {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let plmn_id = match reader.read_choice_index("plmn-Id-r9", 2, false)? {
            0 => TmgiPlmnId::PlmnIndex(reader.read_int(1, 6)?),
            _ => TmgiPlmnId::Explicit(reader.read()?),
        };
        let octets = reader.read_octet_string(Some(3), Some(3))?;
        Ok(Tmgi {
            plmn_id,
            service_id: [octets[0], octets[1], octets[2]],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbmsSessionInfo {
    pub tmgi: Tmgi,
    /// `OCTET STRING (SIZE (1))`
    pub session_id: Option<u8>,
    /// 0..28
    pub logical_channel_identity: u8,
}

impl Writable for MbmsSessionInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[self.session_id.is_some()])?;
        writer.write(&self.tmgi)?;
        if let Some(session_id) = self.session_id {
            writer.write_octet_string(&[session_id], Some(1), Some(1))?;
        }
        writer.write_int(self.logical_channel_identity, 0, MAX_SESSION_PER_PMCH as i64 - 1)
    }
}

impl Readable for MbmsSessionInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [session_id] = reader.read_presence()?;
        let value = MbmsSessionInfo {
            tmgi: reader.read()?,
            session_id: if session_id {
                Some(reader.read_octet_string(Some(1), Some(1))?[0])
            } else {
                None
            },
            logical_channel_identity: reader.read_int(0, MAX_SESSION_PER_PMCH as i64 - 1)?,
        };
        reader.read_extension_additions("MBMS-SessionInfo-r9", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

enumerated! {
    pub enum MchSchedulingPeriod: "PMCH-Config-r9-mch-SchedulingPeriod-r9", numeric u16 {
        Rf8 = "rf8" => 8,
        Rf16 = "rf16" => 16,
        Rf32 = "rf32" => 32,
        Rf64 = "rf64" => 64,
        Rf128 = "rf128" => 128,
        Rf256 = "rf256" => 256,
        Rf512 = "rf512" => 512,
        Rf1024 = "rf1024" => 1024,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmchConfig {
    /// 0..1535
    pub sf_alloc_end: u16,
    /// 0..28
    pub data_mcs: u8,
    pub mch_scheduling_period: MchSchedulingPeriod,
}

impl Writable for PmchConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_int(self.sf_alloc_end, 0, 1535)?;
        writer.write_int(self.data_mcs, 0, 28)?;
        writer.write(&self.mch_scheduling_period)
    }
}

impl Readable for PmchConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let value = PmchConfig {
            sf_alloc_end: reader.read_int(0, 1535)?,
            data_mcs: reader.read_int(0, 28)?,
            mch_scheduling_period: reader.read()?,
        };
        reader.read_extension_additions("PMCH-Config-r9", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmchInfo {
    pub pmch_config: PmchConfig,
    /// Up to 29 sessions
    pub mbms_session_info_list: Vec<MbmsSessionInfo>,
}

impl Writable for PmchInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write(&self.pmch_config)?;
        writer.write_sequence_of(&self.mbms_session_info_list, 0, MAX_SESSION_PER_PMCH)
    }
}

impl Readable for PmchInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let value = PmchInfo {
            pmch_config: reader.read()?,
            mbms_session_info_list: reader.read_sequence_of(0, MAX_SESSION_PER_PMCH)?,
        };
        reader.read_extension_additions("PMCH-Info-r9", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

enumerated! {
    pub enum CommonSfAllocPeriod: "MBSFNAreaConfiguration-r9-commonSF-AllocPeriod-r9", numeric u16 {
        Rf4 = "rf4" => 4,
        Rf8 = "rf8" => 8,
        Rf16 = "rf16" => 16,
        Rf32 = "rf32" => 32,
        Rf64 = "rf64" => 64,
        Rf128 = "rf128" => 128,
        Rf256 = "rf256" => 256,
    }
}

/// `MBSFNAreaConfiguration-v930-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MbsfnAreaConfigurationV930 {
    pub late_non_critical_extension: Option<Vec<u8>>,
}

impl Writable for MbsfnAreaConfigurationV930 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.late_non_critical_extension.is_some(), false])?;
        if let Some(octets) = &self.late_non_critical_extension {
            writer.write_octet_string(octets, None, None)?;
        }
        Ok(())
    }
}

impl Readable for MbsfnAreaConfigurationV930 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [late, non_critical] = reader.read_presence()?;
        let value = MbsfnAreaConfigurationV930 {
            late_non_critical_extension: if late {
                Some(reader.read_octet_string(None, None)?)
            } else {
                None
            },
        };
        if non_critical {
            reader.ignore_trailing_extension("MBSFNAreaConfiguration-v930-IEs")?;
        }
        Ok(value)
    }
}

/// The MBSFN area configuration, the only message of the MCCH
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbsfnAreaConfiguration {
    /// One to eight allocation patterns
    pub common_sf_alloc: Vec<MbsfnSubframeConfig>,
    pub common_sf_alloc_period: CommonSfAllocPeriod,
    /// Up to fifteen PMCHs
    pub pmch_info_list: Vec<PmchInfo>,
    pub non_critical_extension: Option<MbsfnAreaConfigurationV930>,
}

impl Writable for MbsfnAreaConfiguration {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.non_critical_extension.is_some()])?;
        write_mbsfn_subframe_config_list(writer, &self.common_sf_alloc)?;
        writer.write(&self.common_sf_alloc_period)?;
        writer.write_sequence_of(&self.pmch_info_list, 0, MAX_PMCH_PER_MBSFN)?;
        if let Some(extension) = &self.non_critical_extension {
            writer.write(extension)?;
        }
        Ok(())
    }
}

impl Readable for MbsfnAreaConfiguration {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        Ok(MbsfnAreaConfiguration {
            common_sf_alloc: read_mbsfn_subframe_config_list(reader)?,
            common_sf_alloc_period: reader.read()?,
            pmch_info_list: reader.read_sequence_of(0, MAX_PMCH_PER_MBSFN)?,
            non_critical_extension: if non_critical {
                Some(reader.read()?)
            } else {
                None
            },
        })
    }
}

enumerated! {
    pub enum NonMbsfnRegionLength: "MBSFN-AreaInfo-r9-non-MBSFNregionLength", numeric u8 {
        S1 = "s1" => 1,
        S2 = "s2" => 2,
    }
}

enumerated! {
    pub enum McchRepetitionPeriod: "mcch-RepetitionPeriod-r9", numeric u16 {
        Rf32 = "rf32" => 32,
        Rf64 = "rf64" => 64,
        Rf128 = "rf128" => 128,
        Rf256 = "rf256" => 256,
    }
}

enumerated! {
    pub enum McchModificationPeriod: "mcch-ModificationPeriod-r9", numeric u16 {
        Rf512 = "rf512" => 512,
        Rf1024 = "rf1024" => 1024,
    }
}

enumerated! {
    pub enum SignallingMcs: "signallingMCS-r9", numeric u8 {
        N2 = "n2" => 2,
        N7 = "n7" => 7,
        N13 = "n13" => 13,
        N19 = "n19" => 19,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct McchConfig {
    pub mcch_repetition_period: McchRepetitionPeriod,
    /// 0..10
    pub mcch_offset: u8,
    pub mcch_modification_period: McchModificationPeriod,
    /// `BIT STRING (SIZE (6))`
    pub sf_alloc_info: u8,
    pub signalling_mcs: SignallingMcs,
}

impl Writable for McchConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.mcch_repetition_period)?;
        writer.write_int(self.mcch_offset, 0, 10)?;
        writer.write(&self.mcch_modification_period)?;
        writer.write_bits(u64::from(self.sf_alloc_info), 6)?;
        writer.write(&self.signalling_mcs)
    }
}

impl Readable for McchConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(McchConfig {
            mcch_repetition_period: reader.read()?,
            mcch_offset: reader.read_int(0, 10)?,
            mcch_modification_period: reader.read()?,
            sf_alloc_info: reader.read_bits(6)?,
            signalling_mcs: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbsfnAreaInfo {
    /// 0..255
    pub mbsfn_area_id: u8,
    pub non_mbsfn_region_length: NonMbsfnRegionLength,
    /// 0..7
    pub notification_indicator: u8,
    pub mcch_config: McchConfig,
}

impl Writable for MbsfnAreaInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_int(self.mbsfn_area_id, 0, 255)?;
        writer.write(&self.non_mbsfn_region_length)?;
        writer.write_int(self.notification_indicator, 0, 7)?;
        writer.write(&self.mcch_config)
    }
}

impl Readable for MbsfnAreaInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let value = MbsfnAreaInfo {
            mbsfn_area_id: reader.read_int(0, 255)?,
            non_mbsfn_region_length: reader.read()?,
            notification_indicator: reader.read_int(0, 7)?,
            mcch_config: reader.read()?,
        };
        reader.read_extension_additions("MBSFN-AreaInfo-r9", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

/// `MBSFN-AreaInfoList-r9 ::= SEQUENCE (SIZE(1..maxMBSFN-Area)) OF MBSFN-AreaInfo-r9`
pub fn write_mbsfn_area_info_list(writer: &mut UperWriter, list: &[MbsfnAreaInfo]) -> Result<(), Error> {
    writer.write_sequence_of(list, 1, MAX_MBSFN_AREA)
}

pub fn read_mbsfn_area_info_list(reader: &mut UperReader<'_>) -> Result<Vec<MbsfnAreaInfo>, Error> {
    reader.read_sequence_of(1, MAX_MBSFN_AREA)
}

enumerated! {
    pub enum NotificationRepetitionCoeff: "notificationRepetitionCoeff-r9", numeric u8 {
        N2 = "n2" => 2,
        N4 = "n4" => 4,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbmsNotificationConfig {
    pub notification_repetition_coeff: NotificationRepetitionCoeff,
    /// 0..10
    pub notification_offset: u8,
    /// 1..6
    pub notification_sf_index: u8,
}

impl Writable for MbmsNotificationConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.notification_repetition_coeff)?;
        writer.write_int(self.notification_offset, 0, 10)?;
        writer.write_int(self.notification_sf_index, 1, 6)
    }
}

impl Readable for MbmsNotificationConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(MbmsNotificationConfig {
            notification_repetition_coeff: reader.read()?,
            notification_offset: reader.read_int(0, 10)?,
            notification_sf_index: reader.read_int(1, 6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subframe_config_widths() {
        let config = MbsfnSubframeConfig {
            radioframe_allocation_period: RadioframeAllocationPeriod::N32,
            radioframe_allocation_offset: 4,
            subframe_allocation: SubframeAllocation::OneFrame(0b11_1111),
        };
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        assert_eq!(3 + 3 + 1 + 6, writer.finish());
        assert_eq!(&[0b1011_0001, 0b1111_1000], writer.byte_content());
    }

    #[test]
    fn test_session_info_with_plmn_index() {
        let session = MbmsSessionInfo {
            tmgi: Tmgi {
                plmn_id: TmgiPlmnId::PlmnIndex(6),
                service_id: [0xAB, 0xCD, 0xEF],
            },
            session_id: None,
            logical_channel_identity: 28,
        };
        let mut writer = UperWriter::default();
        writer.write(&session).unwrap();
        // ext, presence, choice, index, service id, lcid
        assert_eq!(1 + 1 + 1 + 3 + 24 + 5, writer.finish());
        assert_eq!(session, writer.as_reader().read::<MbmsSessionInfo>().unwrap());
    }

    #[test]
    fn test_sf_alloc_end_beyond_range_is_rejected() {
        let config = PmchConfig {
            sf_alloc_end: 1536,
            data_mcs: 0,
            mch_scheduling_period: MchSchedulingPeriod::Rf8,
        };
        let mut writer = UperWriter::default();
        assert!(writer.write(&config).is_err());
    }

    #[test]
    fn test_area_info_round_trip() {
        let info = MbsfnAreaInfo {
            mbsfn_area_id: 200,
            non_mbsfn_region_length: NonMbsfnRegionLength::S2,
            notification_indicator: 7,
            mcch_config: McchConfig {
                mcch_repetition_period: McchRepetitionPeriod::Rf64,
                mcch_offset: 10,
                mcch_modification_period: McchModificationPeriod::Rf1024,
                sf_alloc_info: 0b10_0001,
                signalling_mcs: SignallingMcs::N13,
            },
        };
        let mut writer = UperWriter::default();
        write_mbsfn_area_info_list(&mut writer, &[info]).unwrap();
        assert_eq!(
            vec![info],
            read_mbsfn_area_info_list(&mut writer.as_reader()).unwrap()
        );
    }
}
