//! Broadcast system information: the `MasterInformationBlock`, `SystemInformationBlockType1`
//! and the blocks carried in `SystemInformation` messages.
//!
//! Most blocks end with a `lateNonCriticalExtension` addition. Its content is kept as the
//! octets received, the same way the `nonCriticalExtension` chains of messages are handled.

use crate::ies::bounds::{
    MAX_CELL_BLACK, MAX_CELL_INTER, MAX_CELL_INTRA, MAX_FREQ, MAX_GNFG, MAX_PLMN, MAX_SIB,
    MAX_SI_MESSAGE, MAX_UTRA_FDD_CARRIER, MAX_UTRA_TDD_CARRIER,
};
use crate::ies::common::{
    read_phys_cell_id, write_phys_cell_id, AllowedMeasBandwidth, CarrierFreqsGeran,
    CellIdentity, MobilityStateParameters, NeighCellConfig, PhysCellId, PhysCellIdRange,
    PlmnIdentity, QOffsetRange, SpeedStateScaleFactors, TrackingAreaCode, UeTimersAndConstants,
    ARFCN_EUTRA_MAX, ARFCN_UTRA_MAX,
};
use crate::ies::mbms::{
    read_mbsfn_area_info_list, read_mbsfn_subframe_config_list, write_mbsfn_area_info_list,
    write_mbsfn_subframe_config_list, MbmsNotificationConfig, MbsfnAreaInfo,
    MbsfnSubframeConfig,
};
use crate::ies::radio_resource::common::{
    PhichConfig, PMax, RadioResourceConfigCommonSib, TddConfig,
};
use crate::ies::radio_resource::mac::TimeAlignmentTimer;
use crate::io::per::Error;
use crate::syn::choice::UnknownAlternative;
use crate::syn::critical::CriticalExtensions;
use crate::syn::extension::addition;
use crate::syn::{Readable, UperReader, UperWriter, Writable, WriteWith};

/// `Q-RxLevMin ::= INTEGER (-70..-22)`
const Q_RX_LEV_MIN: (i64, i64) = (-70, -22);
/// `Q-QualMin-r9 ::= INTEGER (-34..-3)`
const Q_QUAL_MIN: (i64, i64) = (-34, -3);
/// `ReselectionThreshold ::= INTEGER (0..31)`, also `ReselectionThresholdQ-r9`
const RESELECTION_THRESHOLD_MAX: i64 = 31;

/// The slot of a `lateNonCriticalExtension` addition, an octet string of unparsed content
fn late_non_critical_extension(
    value: &Option<Vec<u8>>,
) -> Option<WriteWith<impl Fn(&mut UperWriter) -> Result<(), Error> + '_>> {
    value
        .as_ref()
        .map(|octets| WriteWith(move |w: &mut UperWriter| w.write_octet_string(octets, None, None)))
}

fn read_late_non_critical_extension(reader: &mut UperReader<'_>) -> Result<Vec<u8>, Error> {
    reader.read_octet_string(None, None)
}

fn write_opt_int<T: Copy + Into<i64>>(
    writer: &mut UperWriter,
    value: Option<T>,
    lower: i64,
    upper: i64,
) -> Result<(), Error> {
    match value {
        Some(value) => writer.write_int(value, lower, upper),
        None => Ok(()),
    }
}

fn read_opt_int<T: TryFrom<i64>>(
    reader: &mut UperReader<'_>,
    present: bool,
    lower: i64,
    upper: i64,
) -> Result<Option<T>, Error> {
    if present {
        Ok(Some(reader.read_int(lower, upper)?))
    } else {
        Ok(None)
    }
}

enumerated! {
    /// Transmission bandwidth in resource blocks, as broadcast in the MIB and SIB2
    pub enum CellBandwidth: "dl-Bandwidth", numeric u8 {
        N6 = "n6" => 6,
        N15 = "n15" => 15,
        N25 = "n25" => 25,
        N50 = "n50" => 50,
        N75 = "n75" => 75,
        N100 = "n100" => 100,
    }
}

/// `MasterInformationBlock`, always 24 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterInformationBlock {
    pub dl_bandwidth: CellBandwidth,
    pub phich_config: PhichConfig,
    /// The eight most significant bits of the system frame number
    pub system_frame_number: u8,
    /// 10 spare bits
    pub spare: u16,
}

impl Writable for MasterInformationBlock {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.dl_bandwidth)?;
        writer.write(&self.phich_config)?;
        writer.write_bits(u64::from(self.system_frame_number), 8)?;
        writer.write_bits(u64::from(self.spare), 10)
    }
}

impl Readable for MasterInformationBlock {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(MasterInformationBlock {
            dl_bandwidth: reader.read()?,
            phich_config: reader.read()?,
            system_frame_number: reader.read_bits(8)?,
            spare: reader.read_bits(10)?,
        })
    }
}

enumerated! {
    pub enum CellReservedForOperatorUse: "PLMN-IdentityInfo-cellReservedForOperatorUse" {
        Reserved = "reserved",
        NotReserved = "notReserved",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlmnIdentityInfo {
    pub plmn_identity: PlmnIdentity,
    pub cell_reserved_for_operator_use: CellReservedForOperatorUse,
}

impl Writable for PlmnIdentityInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.plmn_identity)?;
        writer.write(&self.cell_reserved_for_operator_use)
    }
}

impl Readable for PlmnIdentityInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PlmnIdentityInfo {
            plmn_identity: reader.read()?,
            cell_reserved_for_operator_use: reader.read()?,
        })
    }
}

enumerated! {
    pub enum CellBarred: "cellBarred" {
        Barred = "barred",
        NotBarred = "notBarred",
    }
}

enumerated! {
    pub enum IntraFreqReselection: "intraFreqReselection" {
        Allowed = "allowed",
        NotAllowed = "notAllowed",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellAccessRelatedInfo {
    /// 1..6 entries, the first one is the primary PLMN
    pub plmn_identity_list: Vec<PlmnIdentityInfo>,
    pub tracking_area_code: TrackingAreaCode,
    pub cell_identity: CellIdentity,
    pub cell_barred: CellBarred,
    pub intra_freq_reselection: IntraFreqReselection,
    pub csg_indication: bool,
    /// 27 bits
    pub csg_identity: Option<u32>,
}

impl Writable for CellAccessRelatedInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.csg_identity.is_some()])?;
        writer.write_sequence_of(&self.plmn_identity_list, 1, MAX_PLMN)?;
        writer.write_bits(u64::from(self.tracking_area_code), 16)?;
        writer.write_bits(u64::from(self.cell_identity), 28)?;
        writer.write(&self.cell_barred)?;
        writer.write(&self.intra_freq_reselection)?;
        writer.write_bit(self.csg_indication)?;
        if let Some(identity) = self.csg_identity {
            writer.write_bits(u64::from(identity), 27)?;
        }
        Ok(())
    }
}

impl Readable for CellAccessRelatedInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [csg_identity] = reader.read_presence()?;
        Ok(CellAccessRelatedInfo {
            plmn_identity_list: reader.read_sequence_of(1, MAX_PLMN)?,
            tracking_area_code: reader.read_bits(16)?,
            cell_identity: reader.read_bits(28)?,
            cell_barred: reader.read()?,
            intra_freq_reselection: reader.read()?,
            csg_indication: reader.read_bit()?,
            csg_identity: if csg_identity {
                Some(reader.read_bits(27)?)
            } else {
                None
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSelectionInfo {
    /// -70..-22, in steps of 2 dBm
    pub q_rx_lev_min: i8,
    /// 1..8
    pub q_rx_lev_min_offset: Option<u8>,
}

impl Writable for CellSelectionInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.q_rx_lev_min_offset.is_some()])?;
        writer.write_int(self.q_rx_lev_min, Q_RX_LEV_MIN.0, Q_RX_LEV_MIN.1)?;
        write_opt_int(writer, self.q_rx_lev_min_offset, 1, 8)
    }
}

impl Readable for CellSelectionInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [offset] = reader.read_presence()?;
        Ok(CellSelectionInfo {
            q_rx_lev_min: reader.read_int(Q_RX_LEV_MIN.0, Q_RX_LEV_MIN.1)?,
            q_rx_lev_min_offset: read_opt_int(reader, offset, 1, 8)?,
        })
    }
}

/// `CellSelectionInfo-v920`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSelectionInfoV920 {
    /// -34..-3
    pub q_qual_min: i8,
    /// 1..8
    pub q_qual_min_offset: Option<u8>,
}

impl Writable for CellSelectionInfoV920 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.q_qual_min_offset.is_some()])?;
        writer.write_int(self.q_qual_min, Q_QUAL_MIN.0, Q_QUAL_MIN.1)?;
        write_opt_int(writer, self.q_qual_min_offset, 1, 8)
    }
}

impl Readable for CellSelectionInfoV920 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [offset] = reader.read_presence()?;
        Ok(CellSelectionInfoV920 {
            q_qual_min: reader.read_int(Q_QUAL_MIN.0, Q_QUAL_MIN.1)?,
            q_qual_min_offset: read_opt_int(reader, offset, 1, 8)?,
        })
    }
}

enumerated! {
    pub enum SiPeriodicity: "SchedulingInfo-si-Periodicity", numeric u16 {
        Rf8 = "rf8" => 8,
        Rf16 = "rf16" => 16,
        Rf32 = "rf32" => 32,
        Rf64 = "rf64" => 64,
        Rf128 = "rf128" => 128,
        Rf256 = "rf256" => 256,
        Rf512 = "rf512" => 512,
    }
}

enumerated! {
    /// The blocks that can be mapped to a system information message, SIB2 is always mapped
    /// to the first one
    pub enum SibType: "SIB-Type", extensible numeric u8 {
        SibType3 = "sibType3" => 3,
        SibType4 = "sibType4" => 4,
        SibType5 = "sibType5" => 5,
        SibType6 = "sibType6" => 6,
        SibType7 = "sibType7" => 7,
        SibType8 = "sibType8" => 8,
        SibType9 = "sibType9" => 9,
        SibType10 = "sibType10" => 10,
        SibType11 = "sibType11" => 11,
        SibType12 = "sibType12-v920" => 12,
        SibType13 = "sibType13-v920" => 13,
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingInfo {
    pub si_periodicity: SiPeriodicity,
    /// 0..31 entries
    pub sib_mapping_info: Vec<SibType>,
}

impl Writable for SchedulingInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.si_periodicity)?;
        writer.write_sequence_of(&self.sib_mapping_info, 0, MAX_SIB - 1)
    }
}

impl Readable for SchedulingInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(SchedulingInfo {
            si_periodicity: reader.read()?,
            sib_mapping_info: reader.read_sequence_of(0, MAX_SIB - 1)?,
        })
    }
}

enumerated! {
    pub enum SiWindowLength: "SystemInformationBlockType1-si-WindowLength", numeric u8 {
        Ms1 = "ms1" => 1,
        Ms2 = "ms2" => 2,
        Ms5 = "ms5" => 5,
        Ms10 = "ms10" => 10,
        Ms15 = "ms15" => 15,
        Ms20 = "ms20" => 20,
        Ms40 = "ms40" => 40,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType1 {
    pub cell_access_related_info: CellAccessRelatedInfo,
    pub cell_selection_info: CellSelectionInfo,
    pub p_max: Option<PMax>,
    /// 1..64
    pub freq_band_indicator: u8,
    pub scheduling_info_list: Vec<SchedulingInfo>,
    pub tdd_config: Option<TddConfig>,
    pub si_window_length: SiWindowLength,
    /// 0..31
    pub system_info_value_tag: u8,
    /// `lateNonCriticalExtension` of the v890 extension
    pub late_non_critical_extension: Option<Vec<u8>>,
    /// `ims-EmergencySupport-r9` of the v920 extension
    pub ims_emergency_support: bool,
    pub cell_selection_info_v920: Option<CellSelectionInfoV920>,
}

impl SystemInformationBlockType1 {
    pub const NAME: &'static str = "SystemInformationBlockType1";

    fn has_v920(&self) -> bool {
        self.ims_emergency_support || self.cell_selection_info_v920.is_some()
    }

    fn has_v890(&self) -> bool {
        self.late_non_critical_extension.is_some() || self.has_v920()
    }
}

impl Writable for SystemInformationBlockType1 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.p_max.is_some(),
            self.tdd_config.is_some(),
            self.has_v890(),
        ])?;
        writer.write(&self.cell_access_related_info)?;
        writer.write(&self.cell_selection_info)?;
        write_opt_int(writer, self.p_max, -30, 33)?;
        writer.write_int(self.freq_band_indicator, 1, 64)?;
        writer.write_sequence_of(&self.scheduling_info_list, 1, MAX_SI_MESSAGE)?;
        if let Some(value) = &self.tdd_config {
            writer.write(value)?;
        }
        writer.write(&self.si_window_length)?;
        writer.write_int(self.system_info_value_tag, 0, 31)?;

        if self.has_v890() {
            writer.write_presence(&[
                self.late_non_critical_extension.is_some(),
                self.has_v920(),
            ])?;
            if let Some(octets) = &self.late_non_critical_extension {
                writer.write_octet_string(octets, None, None)?;
            }
            if self.has_v920() {
                writer.write_presence(&[
                    self.ims_emergency_support,
                    self.cell_selection_info_v920.is_some(),
                    false,
                ])?;
                if let Some(value) = &self.cell_selection_info_v920 {
                    writer.write(value)?;
                }
            }
        }
        Ok(())
    }
}

impl Readable for SystemInformationBlockType1 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [p_max, tdd, v890] = reader.read_presence()?;
        let mut value = SystemInformationBlockType1 {
            cell_access_related_info: reader.read()?,
            cell_selection_info: reader.read()?,
            p_max: read_opt_int(reader, p_max, -30, 33)?,
            freq_band_indicator: reader.read_int(1, 64)?,
            scheduling_info_list: reader.read_sequence_of(1, MAX_SI_MESSAGE)?,
            tdd_config: if tdd { Some(reader.read()?) } else { None },
            si_window_length: reader.read()?,
            system_info_value_tag: reader.read_int(0, 31)?,
            late_non_critical_extension: None,
            ims_emergency_support: false,
            cell_selection_info_v920: None,
        };

        if v890 {
            let [late, v920] = reader.read_presence()?;
            if late {
                value.late_non_critical_extension = Some(read_late_non_critical_extension(reader)?);
            }
            if v920 {
                let [ims, selection, later] = reader.read_presence()?;
                value.ims_emergency_support = ims;
                if selection {
                    value.cell_selection_info_v920 = Some(reader.read()?);
                }
                if later {
                    reader.ignore_trailing_extension(Self::NAME)?;
                }
            }
        }
        Ok(value)
    }
}

enumerated! {
    pub enum AcBarringFactor: "AC-BarringConfig-ac-BarringFactor", numeric u8 {
        P00 = "p00" => 0,
        P05 = "p05" => 5,
        P10 = "p10" => 10,
        P15 = "p15" => 15,
        P20 = "p20" => 20,
        P25 = "p25" => 25,
        P30 = "p30" => 30,
        P40 = "p40" => 40,
        P50 = "p50" => 50,
        P60 = "p60" => 60,
        P70 = "p70" => 70,
        P75 = "p75" => 75,
        P80 = "p80" => 80,
        P85 = "p85" => 85,
        P90 = "p90" => 90,
        P95 = "p95" => 95,
    }
}

enumerated! {
    pub enum AcBarringTime: "AC-BarringConfig-ac-BarringTime", numeric u16 {
        S4 = "s4" => 4,
        S8 = "s8" => 8,
        S16 = "s16" => 16,
        S32 = "s32" => 32,
        S64 = "s64" => 64,
        S128 = "s128" => 128,
        S256 = "s256" => 256,
        S512 = "s512" => 512,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcBarringConfig {
    /// Probability in percent
    pub ac_barring_factor: AcBarringFactor,
    pub ac_barring_time: AcBarringTime,
    /// Access classes 11 to 15, 5 bits
    pub ac_barring_for_special_ac: u8,
}

impl Writable for AcBarringConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.ac_barring_factor)?;
        writer.write(&self.ac_barring_time)?;
        writer.write_bits(u64::from(self.ac_barring_for_special_ac), 5)
    }
}

impl Readable for AcBarringConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(AcBarringConfig {
            ac_barring_factor: reader.read()?,
            ac_barring_time: reader.read()?,
            ac_barring_for_special_ac: reader.read_bits(5)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcBarringInfo {
    pub ac_barring_for_emergency: bool,
    pub ac_barring_for_mo_signalling: Option<AcBarringConfig>,
    pub ac_barring_for_mo_data: Option<AcBarringConfig>,
}

impl Writable for AcBarringInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.ac_barring_for_mo_signalling.is_some(),
            self.ac_barring_for_mo_data.is_some(),
        ])?;
        writer.write_bit(self.ac_barring_for_emergency)?;
        if let Some(value) = &self.ac_barring_for_mo_signalling {
            writer.write(value)?;
        }
        if let Some(value) = &self.ac_barring_for_mo_data {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for AcBarringInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [signalling, data] = reader.read_presence()?;
        Ok(AcBarringInfo {
            ac_barring_for_emergency: reader.read_bit()?,
            ac_barring_for_mo_signalling: if signalling { Some(reader.read()?) } else { None },
            ac_barring_for_mo_data: if data { Some(reader.read()?) } else { None },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreqInfo {
    pub ul_carrier_freq: Option<u32>,
    pub ul_bandwidth: Option<CellBandwidth>,
    /// 1..32
    pub additional_spectrum_emission: u8,
}

impl Writable for FreqInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.ul_carrier_freq.is_some(), self.ul_bandwidth.is_some()])?;
        write_opt_int(writer, self.ul_carrier_freq, 0, ARFCN_EUTRA_MAX)?;
        if let Some(value) = &self.ul_bandwidth {
            writer.write(value)?;
        }
        writer.write_int(self.additional_spectrum_emission, 1, 32)
    }
}

impl Readable for FreqInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [carrier, bandwidth] = reader.read_presence()?;
        Ok(FreqInfo {
            ul_carrier_freq: read_opt_int(reader, carrier, 0, ARFCN_EUTRA_MAX)?,
            ul_bandwidth: if bandwidth { Some(reader.read()?) } else { None },
            additional_spectrum_emission: reader.read_int(1, 32)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType2 {
    pub ac_barring_info: Option<AcBarringInfo>,
    pub radio_resource_config_common: RadioResourceConfigCommonSib,
    pub ue_timers_and_constants: UeTimersAndConstants,
    pub freq_info: FreqInfo,
    pub mbsfn_subframe_config_list: Option<Vec<MbsfnSubframeConfig>>,
    pub time_alignment_timer_common: TimeAlignmentTimer,
    pub late_non_critical_extension: Option<Vec<u8>>,
    pub ssac_barring_for_mmtel_voice: Option<AcBarringConfig>,
    pub ssac_barring_for_mmtel_video: Option<AcBarringConfig>,
    pub ac_barring_for_csfb: Option<AcBarringConfig>,
}

impl SystemInformationBlockType2 {
    pub const NAME: &'static str = "SystemInformationBlockType2";
}

impl Writable for SystemInformationBlockType2 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let late = late_non_critical_extension(&self.late_non_critical_extension);
        let v920 = Some(WriteWith(|w: &mut UperWriter| {
            w.write_presence(&[
                self.ssac_barring_for_mmtel_voice.is_some(),
                self.ssac_barring_for_mmtel_video.is_some(),
            ])?;
            if let Some(value) = &self.ssac_barring_for_mmtel_voice {
                w.write(value)?;
            }
            if let Some(value) = &self.ssac_barring_for_mmtel_video {
                w.write(value)?;
            }
            Ok(())
        }))
        .filter(|_| {
            self.ssac_barring_for_mmtel_voice.is_some()
                || self.ssac_barring_for_mmtel_video.is_some()
        });
        let v1020 = self.ac_barring_for_csfb.as_ref().map(|value| {
            WriteWith(move |w: &mut UperWriter| {
                w.write_presence(&[true])?;
                w.write(value)
            })
        });
        let additions = [addition(&late), addition(&v920), addition(&v1020)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.ac_barring_info.is_some(),
            self.mbsfn_subframe_config_list.is_some(),
        ])?;
        if let Some(value) = &self.ac_barring_info {
            writer.write(value)?;
        }
        writer.write(&self.radio_resource_config_common)?;
        writer.write(&self.ue_timers_and_constants)?;
        writer.write(&self.freq_info)?;
        if let Some(list) = &self.mbsfn_subframe_config_list {
            write_mbsfn_subframe_config_list(writer, list)?;
        }
        writer.write(&self.time_alignment_timer_common)?;
        writer.write_extension_additions(&additions)
    }
}

impl Readable for SystemInformationBlockType2 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [ac_barring, mbsfn] = reader.read_presence()?;
        let mut value = SystemInformationBlockType2 {
            ac_barring_info: if ac_barring { Some(reader.read()?) } else { None },
            radio_resource_config_common: reader.read()?,
            ue_timers_and_constants: reader.read()?,
            freq_info: reader.read()?,
            mbsfn_subframe_config_list: if mbsfn {
                Some(read_mbsfn_subframe_config_list(reader)?)
            } else {
                None
            },
            time_alignment_timer_common: reader.read()?,
            late_non_critical_extension: None,
            ssac_barring_for_mmtel_voice: None,
            ssac_barring_for_mmtel_video: None,
            ac_barring_for_csfb: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 3, |index, reader| {
            match index {
                0 => {
                    value.late_non_critical_extension =
                        Some(read_late_non_critical_extension(reader)?)
                }
                1 => {
                    let [voice, video] = reader.read_presence()?;
                    if voice {
                        value.ssac_barring_for_mmtel_voice = Some(reader.read()?);
                    }
                    if video {
                        value.ssac_barring_for_mmtel_video = Some(reader.read()?);
                    }
                }
                _ => {
                    let [csfb] = reader.read_presence()?;
                    if csfb {
                        value.ac_barring_for_csfb = Some(reader.read()?);
                    }
                }
            }
            Ok(())
        })?;
        Ok(value)
    }
}

enumerated! {
    pub enum QHyst: "SystemInformationBlockType3-q-Hyst", numeric u8 {
        Db0 = "dB0" => 0,
        Db1 = "dB1" => 1,
        Db2 = "dB2" => 2,
        Db3 = "dB3" => 3,
        Db4 = "dB4" => 4,
        Db5 = "dB5" => 5,
        Db6 = "dB6" => 6,
        Db8 = "dB8" => 8,
        Db10 = "dB10" => 10,
        Db12 = "dB12" => 12,
        Db14 = "dB14" => 14,
        Db16 = "dB16" => 16,
        Db18 = "dB18" => 18,
        Db20 = "dB20" => 20,
        Db22 = "dB22" => 22,
        Db24 = "dB24" => 24,
    }
}

enumerated! {
    pub enum QHystSf: "SystemInformationBlockType3-q-HystSF", numeric i8 {
        DbMinus6 = "dB-6" => -6,
        DbMinus4 = "dB-4" => -4,
        DbMinus2 = "dB-2" => -2,
        Db0 = "dB0" => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedStateReselectionPars {
    pub mobility_state_parameters: MobilityStateParameters,
    pub sf_medium: QHystSf,
    pub sf_high: QHystSf,
}

impl Writable for SpeedStateReselectionPars {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.mobility_state_parameters)?;
        writer.write(&self.sf_medium)?;
        writer.write(&self.sf_high)
    }
}

impl Readable for SpeedStateReselectionPars {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(SpeedStateReselectionPars {
            mobility_state_parameters: reader.read()?,
            sf_medium: reader.read()?,
            sf_high: reader.read()?,
        })
    }
}

/// A pair of reselection thresholds in units of 2 dB, each 0..31
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub first: u8,
    pub second: u8,
}

impl Writable for ThresholdPair {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.first, 0, RESELECTION_THRESHOLD_MAX)?;
        writer.write_int(self.second, 0, RESELECTION_THRESHOLD_MAX)
    }
}

impl Readable for ThresholdPair {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(ThresholdPair {
            first: reader.read_int(0, RESELECTION_THRESHOLD_MAX)?,
            second: reader.read_int(0, RESELECTION_THRESHOLD_MAX)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType3 {
    pub q_hyst: QHyst,
    pub speed_state_reselection_pars: Option<SpeedStateReselectionPars>,
    /// 0..31
    pub s_non_intra_search: Option<u8>,
    /// 0..31
    pub thresh_serving_low: u8,
    /// 0..7
    pub cell_reselection_priority: u8,
    /// -70..-22
    pub q_rx_lev_min: i8,
    pub p_max: Option<PMax>,
    /// 0..31
    pub s_intra_search: Option<u8>,
    pub allowed_meas_bandwidth: Option<AllowedMeasBandwidth>,
    pub presence_antenna_port1: bool,
    pub neigh_cell_config: NeighCellConfig,
    /// 0..7 seconds
    pub t_reselection_eutra: u8,
    pub t_reselection_eutra_sf: Option<SpeedStateScaleFactors>,
    pub late_non_critical_extension: Option<Vec<u8>>,
    /// `s-IntraSearchP-r9` and `s-IntraSearchQ-r9`
    pub s_intra_search_v920: Option<ThresholdPair>,
    /// `s-NonIntraSearchP-r9` and `s-NonIntraSearchQ-r9`
    pub s_non_intra_search_v920: Option<ThresholdPair>,
    /// -34..-3
    pub q_qual_min: Option<i8>,
    /// 0..31
    pub thresh_serving_low_q: Option<u8>,
}

impl SystemInformationBlockType3 {
    pub const NAME: &'static str = "SystemInformationBlockType3";

    fn has_v920(&self) -> bool {
        self.s_intra_search_v920.is_some()
            || self.s_non_intra_search_v920.is_some()
            || self.q_qual_min.is_some()
            || self.thresh_serving_low_q.is_some()
    }
}

impl Writable for SystemInformationBlockType3 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let late = late_non_critical_extension(&self.late_non_critical_extension);
        let v920 = Some(WriteWith(|w: &mut UperWriter| {
            w.write_presence(&[
                self.s_intra_search_v920.is_some(),
                self.s_non_intra_search_v920.is_some(),
                self.q_qual_min.is_some(),
                self.thresh_serving_low_q.is_some(),
            ])?;
            if let Some(value) = &self.s_intra_search_v920 {
                w.write(value)?;
            }
            if let Some(value) = &self.s_non_intra_search_v920 {
                w.write(value)?;
            }
            write_opt_int(w, self.q_qual_min, Q_QUAL_MIN.0, Q_QUAL_MIN.1)?;
            write_opt_int(w, self.thresh_serving_low_q, 0, RESELECTION_THRESHOLD_MAX)
        }))
        .filter(|_| self.has_v920());
        let additions = [addition(&late), addition(&v920)];

        writer.write_extension_marker(&additions)?;
        // cellReselectionInfoCommon
        writer.write_presence(&[self.speed_state_reselection_pars.is_some()])?;
        writer.write(&self.q_hyst)?;
        if let Some(value) = &self.speed_state_reselection_pars {
            writer.write(value)?;
        }
        // cellReselectionServingFreqInfo
        writer.write_presence(&[self.s_non_intra_search.is_some()])?;
        write_opt_int(writer, self.s_non_intra_search, 0, RESELECTION_THRESHOLD_MAX)?;
        writer.write_int(self.thresh_serving_low, 0, RESELECTION_THRESHOLD_MAX)?;
        writer.write_int(self.cell_reselection_priority, 0, 7)?;
        // intraFreqCellReselectionInfo
        writer.write_presence(&[
            self.p_max.is_some(),
            self.s_intra_search.is_some(),
            self.allowed_meas_bandwidth.is_some(),
            self.t_reselection_eutra_sf.is_some(),
        ])?;
        writer.write_int(self.q_rx_lev_min, Q_RX_LEV_MIN.0, Q_RX_LEV_MIN.1)?;
        write_opt_int(writer, self.p_max, -30, 33)?;
        write_opt_int(writer, self.s_intra_search, 0, RESELECTION_THRESHOLD_MAX)?;
        if let Some(value) = &self.allowed_meas_bandwidth {
            writer.write(value)?;
        }
        writer.write_bit(self.presence_antenna_port1)?;
        writer.write_bits(u64::from(self.neigh_cell_config), 2)?;
        writer.write_int(self.t_reselection_eutra, 0, 7)?;
        if let Some(value) = &self.t_reselection_eutra_sf {
            writer.write(value)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for SystemInformationBlockType3 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [speed] = reader.read_presence()?;
        let q_hyst = reader.read()?;
        let speed_state_reselection_pars = if speed { Some(reader.read()?) } else { None };
        let [non_intra] = reader.read_presence()?;
        let s_non_intra_search = read_opt_int(reader, non_intra, 0, RESELECTION_THRESHOLD_MAX)?;
        let thresh_serving_low = reader.read_int(0, RESELECTION_THRESHOLD_MAX)?;
        let cell_reselection_priority = reader.read_int(0, 7)?;
        let [p_max, intra, bandwidth, sf] = reader.read_presence()?;
        let mut value = SystemInformationBlockType3 {
            q_hyst,
            speed_state_reselection_pars,
            s_non_intra_search,
            thresh_serving_low,
            cell_reselection_priority,
            q_rx_lev_min: reader.read_int(Q_RX_LEV_MIN.0, Q_RX_LEV_MIN.1)?,
            p_max: read_opt_int(reader, p_max, -30, 33)?,
            s_intra_search: read_opt_int(reader, intra, 0, RESELECTION_THRESHOLD_MAX)?,
            allowed_meas_bandwidth: if bandwidth { Some(reader.read()?) } else { None },
            presence_antenna_port1: reader.read_bit()?,
            neigh_cell_config: reader.read_bits(2)?,
            t_reselection_eutra: reader.read_int(0, 7)?,
            t_reselection_eutra_sf: if sf { Some(reader.read()?) } else { None },
            late_non_critical_extension: None,
            s_intra_search_v920: None,
            s_non_intra_search_v920: None,
            q_qual_min: None,
            thresh_serving_low_q: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 2, |index, reader| {
            if index == 0 {
                value.late_non_critical_extension = Some(read_late_non_critical_extension(reader)?);
                return Ok(());
            }
            let [intra, non_intra, qual, low_q] = reader.read_presence()?;
            if intra {
                value.s_intra_search_v920 = Some(reader.read()?);
            }
            if non_intra {
                value.s_non_intra_search_v920 = Some(reader.read()?);
            }
            value.q_qual_min = read_opt_int(reader, qual, Q_QUAL_MIN.0, Q_QUAL_MIN.1)?;
            value.thresh_serving_low_q =
                read_opt_int(reader, low_q, 0, RESELECTION_THRESHOLD_MAX)?;
            Ok(())
        })?;
        Ok(value)
    }
}

/// A neighbour cell with its cell specific offset, `IntraFreqNeighCellInfo` and
/// `InterFreqNeighCellInfo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighCellInfo {
    pub phys_cell_id: PhysCellId,
    pub q_offset_cell: QOffsetRange,
}

impl NeighCellInfo {
    fn write_fields(&self, writer: &mut UperWriter) -> Result<(), Error> {
        write_phys_cell_id(writer, self.phys_cell_id)?;
        writer.write(&self.q_offset_cell)
    }

    fn read_fields(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(NeighCellInfo {
            phys_cell_id: read_phys_cell_id(reader)?,
            q_offset_cell: reader.read()?,
        })
    }

    /// The intra frequency variant is extensible
    fn write_intra(writer: &mut UperWriter, value: &Self) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        value.write_fields(writer)
    }

    fn read_intra(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let value = Self::read_fields(reader)?;
        reader.read_extension_additions("IntraFreqNeighCellInfo", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType4 {
    pub intra_freq_neigh_cell_list: Option<Vec<NeighCellInfo>>,
    pub intra_freq_black_cell_list: Option<Vec<PhysCellIdRange>>,
    pub csg_phys_cell_id_range: Option<PhysCellIdRange>,
    pub late_non_critical_extension: Option<Vec<u8>>,
}

impl SystemInformationBlockType4 {
    pub const NAME: &'static str = "SystemInformationBlockType4";
}

impl Writable for SystemInformationBlockType4 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let late = late_non_critical_extension(&self.late_non_critical_extension);
        let additions = [addition(&late)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.intra_freq_neigh_cell_list.is_some(),
            self.intra_freq_black_cell_list.is_some(),
            self.csg_phys_cell_id_range.is_some(),
        ])?;
        if let Some(list) = &self.intra_freq_neigh_cell_list {
            writer.write_sequence_of_with(list, 1, MAX_CELL_INTRA, NeighCellInfo::write_intra)?;
        }
        if let Some(list) = &self.intra_freq_black_cell_list {
            writer.write_sequence_of(list, 1, MAX_CELL_BLACK)?;
        }
        if let Some(value) = &self.csg_phys_cell_id_range {
            writer.write(value)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for SystemInformationBlockType4 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [neigh, black, csg] = reader.read_presence()?;
        let mut value = SystemInformationBlockType4 {
            intra_freq_neigh_cell_list: if neigh {
                Some(reader.read_sequence_of_with(1, MAX_CELL_INTRA, NeighCellInfo::read_intra)?)
            } else {
                None
            },
            intra_freq_black_cell_list: if black {
                Some(reader.read_sequence_of(1, MAX_CELL_BLACK)?)
            } else {
                None
            },
            csg_phys_cell_id_range: if csg { Some(reader.read()?) } else { None },
            late_non_critical_extension: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            value.late_non_critical_extension = Some(read_late_non_critical_extension(reader)?);
            Ok(())
        })?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterFreqCarrierFreqInfo {
    pub dl_carrier_freq: u32,
    /// -70..-22
    pub q_rx_lev_min: i8,
    pub p_max: Option<PMax>,
    /// 0..7
    pub t_reselection_eutra: u8,
    pub t_reselection_eutra_sf: Option<SpeedStateScaleFactors>,
    /// 0..31
    pub thresh_x_high: u8,
    /// 0..31
    pub thresh_x_low: u8,
    pub allowed_meas_bandwidth: AllowedMeasBandwidth,
    pub presence_antenna_port1: bool,
    /// 0..7
    pub cell_reselection_priority: Option<u8>,
    pub neigh_cell_config: NeighCellConfig,
    /// `None` is the default of dB0
    pub q_offset_freq: Option<QOffsetRange>,
    pub inter_freq_neigh_cell_list: Option<Vec<NeighCellInfo>>,
    pub inter_freq_black_cell_list: Option<Vec<PhysCellIdRange>>,
    /// -34..-3
    pub q_qual_min: Option<i8>,
    /// `threshX-HighQ-r9` and `threshX-LowQ-r9`
    pub thresh_x_q: Option<ThresholdPair>,
}

impl InterFreqCarrierFreqInfo {
    pub const NAME: &'static str = "InterFreqCarrierFreqInfo";
}

impl Writable for InterFreqCarrierFreqInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let v920 = Some(WriteWith(|w: &mut UperWriter| {
            w.write_presence(&[self.q_qual_min.is_some(), self.thresh_x_q.is_some()])?;
            write_opt_int(w, self.q_qual_min, Q_QUAL_MIN.0, Q_QUAL_MIN.1)?;
            if let Some(value) = &self.thresh_x_q {
                w.write(value)?;
            }
            Ok(())
        }))
        .filter(|_| self.q_qual_min.is_some() || self.thresh_x_q.is_some());
        let additions = [addition(&v920)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.p_max.is_some(),
            self.t_reselection_eutra_sf.is_some(),
            self.cell_reselection_priority.is_some(),
            self.q_offset_freq.is_some(),
            self.inter_freq_neigh_cell_list.is_some(),
            self.inter_freq_black_cell_list.is_some(),
        ])?;
        writer.write_int(self.dl_carrier_freq, 0, ARFCN_EUTRA_MAX)?;
        writer.write_int(self.q_rx_lev_min, Q_RX_LEV_MIN.0, Q_RX_LEV_MIN.1)?;
        write_opt_int(writer, self.p_max, -30, 33)?;
        writer.write_int(self.t_reselection_eutra, 0, 7)?;
        if let Some(value) = &self.t_reselection_eutra_sf {
            writer.write(value)?;
        }
        writer.write_int(self.thresh_x_high, 0, RESELECTION_THRESHOLD_MAX)?;
        writer.write_int(self.thresh_x_low, 0, RESELECTION_THRESHOLD_MAX)?;
        writer.write(&self.allowed_meas_bandwidth)?;
        writer.write_bit(self.presence_antenna_port1)?;
        write_opt_int(writer, self.cell_reselection_priority, 0, 7)?;
        writer.write_bits(u64::from(self.neigh_cell_config), 2)?;
        if let Some(value) = &self.q_offset_freq {
            writer.write(value)?;
        }
        if let Some(list) = &self.inter_freq_neigh_cell_list {
            writer.write_sequence_of_with(list, 1, MAX_CELL_INTER, |w, cell| cell.write_fields(w))?;
        }
        if let Some(list) = &self.inter_freq_black_cell_list {
            writer.write_sequence_of(list, 1, MAX_CELL_BLACK)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for InterFreqCarrierFreqInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [p_max, sf, priority, offset, neigh, black] = reader.read_presence()?;
        let mut value = InterFreqCarrierFreqInfo {
            dl_carrier_freq: reader.read_int(0, ARFCN_EUTRA_MAX)?,
            q_rx_lev_min: reader.read_int(Q_RX_LEV_MIN.0, Q_RX_LEV_MIN.1)?,
            p_max: read_opt_int(reader, p_max, -30, 33)?,
            t_reselection_eutra: reader.read_int(0, 7)?,
            t_reselection_eutra_sf: if sf { Some(reader.read()?) } else { None },
            thresh_x_high: reader.read_int(0, RESELECTION_THRESHOLD_MAX)?,
            thresh_x_low: reader.read_int(0, RESELECTION_THRESHOLD_MAX)?,
            allowed_meas_bandwidth: reader.read()?,
            presence_antenna_port1: reader.read_bit()?,
            cell_reselection_priority: read_opt_int(reader, priority, 0, 7)?,
            neigh_cell_config: reader.read_bits(2)?,
            q_offset_freq: if offset { Some(reader.read()?) } else { None },
            inter_freq_neigh_cell_list: if neigh {
                Some(reader.read_sequence_of_with(1, MAX_CELL_INTER, NeighCellInfo::read_fields)?)
            } else {
                None
            },
            inter_freq_black_cell_list: if black {
                Some(reader.read_sequence_of(1, MAX_CELL_BLACK)?)
            } else {
                None
            },
            q_qual_min: None,
            thresh_x_q: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            let [qual, thresh] = reader.read_presence()?;
            value.q_qual_min = read_opt_int(reader, qual, Q_QUAL_MIN.0, Q_QUAL_MIN.1)?;
            if thresh {
                value.thresh_x_q = Some(reader.read()?);
            }
            Ok(())
        })?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType5 {
    pub inter_freq_carrier_freq_list: Vec<InterFreqCarrierFreqInfo>,
    pub late_non_critical_extension: Option<Vec<u8>>,
}

impl SystemInformationBlockType5 {
    pub const NAME: &'static str = "SystemInformationBlockType5";
}

impl Writable for SystemInformationBlockType5 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let late = late_non_critical_extension(&self.late_non_critical_extension);
        let additions = [addition(&late)];
        writer.write_extension_marker(&additions)?;
        writer.write_sequence_of(&self.inter_freq_carrier_freq_list, 1, MAX_FREQ)?;
        writer.write_extension_additions(&additions)
    }
}

impl Readable for SystemInformationBlockType5 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let mut value = SystemInformationBlockType5 {
            inter_freq_carrier_freq_list: reader.read_sequence_of(1, MAX_FREQ)?,
            late_non_critical_extension: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            value.late_non_critical_extension = Some(read_late_non_critical_extension(reader)?);
            Ok(())
        })?;
        Ok(value)
    }
}

/// `CarrierFreqUTRA-FDD` and `CarrierFreqUTRA-TDD`, only the former carries `q-QualMin` and the
/// v920 thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierFreqUtra {
    pub carrier_freq: u16,
    /// 0..7
    pub cell_reselection_priority: Option<u8>,
    /// 0..31
    pub thresh_x_high: u8,
    /// 0..31
    pub thresh_x_low: u8,
    /// -60..-13
    pub q_rx_lev_min: i8,
    /// -50..33
    pub p_max_utra: i8,
    /// -24..0, FDD only
    pub q_qual_min: i8,
    /// FDD only
    pub thresh_x_q: Option<ThresholdPair>,
}

impl CarrierFreqUtra {
    fn write_common(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.cell_reselection_priority.is_some()])?;
        writer.write_int(self.carrier_freq, 0, ARFCN_UTRA_MAX)?;
        write_opt_int(writer, self.cell_reselection_priority, 0, 7)?;
        writer.write_int(self.thresh_x_high, 0, RESELECTION_THRESHOLD_MAX)?;
        writer.write_int(self.thresh_x_low, 0, RESELECTION_THRESHOLD_MAX)?;
        writer.write_int(self.q_rx_lev_min, -60, -13)?;
        writer.write_int(self.p_max_utra, -50, 33)
    }

    fn read_common(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [priority] = reader.read_presence()?;
        Ok(CarrierFreqUtra {
            carrier_freq: reader.read_int(0, ARFCN_UTRA_MAX)?,
            cell_reselection_priority: read_opt_int(reader, priority, 0, 7)?,
            thresh_x_high: reader.read_int(0, RESELECTION_THRESHOLD_MAX)?,
            thresh_x_low: reader.read_int(0, RESELECTION_THRESHOLD_MAX)?,
            q_rx_lev_min: reader.read_int(-60, -13)?,
            p_max_utra: reader.read_int(-50, 33)?,
            q_qual_min: 0,
            thresh_x_q: None,
        })
    }

    fn write_fdd(writer: &mut UperWriter, value: &Self) -> Result<(), Error> {
        let v920 = value.thresh_x_q.as_ref().map(|thresh| {
            WriteWith(move |w: &mut UperWriter| {
                w.write_presence(&[true])?;
                w.write(thresh)
            })
        });
        let additions = [addition(&v920)];
        writer.write_extension_marker(&additions)?;
        value.write_common(writer)?;
        writer.write_int(value.q_qual_min, -24, 0)?;
        writer.write_extension_additions(&additions)
    }

    fn read_fdd(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let mut value = Self::read_common(reader)?;
        value.q_qual_min = reader.read_int(-24, 0)?;
        reader.read_extension_additions("CarrierFreqUTRA-FDD", extended, 1, |_, reader| {
            let [thresh] = reader.read_presence()?;
            if thresh {
                value.thresh_x_q = Some(reader.read()?);
            }
            Ok(())
        })?;
        Ok(value)
    }

    fn write_tdd(writer: &mut UperWriter, value: &Self) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        value.write_common(writer)
    }

    fn read_tdd(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let value = Self::read_common(reader)?;
        reader.read_extension_additions("CarrierFreqUTRA-TDD", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType6 {
    pub carrier_freq_list_utra_fdd: Option<Vec<CarrierFreqUtra>>,
    pub carrier_freq_list_utra_tdd: Option<Vec<CarrierFreqUtra>>,
    /// 0..7
    pub t_reselection_utra: u8,
    pub t_reselection_utra_sf: Option<SpeedStateScaleFactors>,
    pub late_non_critical_extension: Option<Vec<u8>>,
}

impl SystemInformationBlockType6 {
    pub const NAME: &'static str = "SystemInformationBlockType6";
}

impl Writable for SystemInformationBlockType6 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let late = late_non_critical_extension(&self.late_non_critical_extension);
        let additions = [addition(&late)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.carrier_freq_list_utra_fdd.is_some(),
            self.carrier_freq_list_utra_tdd.is_some(),
            self.t_reselection_utra_sf.is_some(),
        ])?;
        if let Some(list) = &self.carrier_freq_list_utra_fdd {
            writer.write_sequence_of_with(list, 1, MAX_UTRA_FDD_CARRIER, CarrierFreqUtra::write_fdd)?;
        }
        if let Some(list) = &self.carrier_freq_list_utra_tdd {
            writer.write_sequence_of_with(list, 1, MAX_UTRA_TDD_CARRIER, CarrierFreqUtra::write_tdd)?;
        }
        writer.write_int(self.t_reselection_utra, 0, 7)?;
        if let Some(value) = &self.t_reselection_utra_sf {
            writer.write(value)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for SystemInformationBlockType6 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [fdd, tdd, sf] = reader.read_presence()?;
        let mut value = SystemInformationBlockType6 {
            carrier_freq_list_utra_fdd: if fdd {
                Some(reader.read_sequence_of_with(1, MAX_UTRA_FDD_CARRIER, CarrierFreqUtra::read_fdd)?)
            } else {
                None
            },
            carrier_freq_list_utra_tdd: if tdd {
                Some(reader.read_sequence_of_with(1, MAX_UTRA_TDD_CARRIER, CarrierFreqUtra::read_tdd)?)
            } else {
                None
            },
            t_reselection_utra: reader.read_int(0, 7)?,
            t_reselection_utra_sf: if sf { Some(reader.read()?) } else { None },
            late_non_critical_extension: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            value.late_non_critical_extension = Some(read_late_non_critical_extension(reader)?);
            Ok(())
        })?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierFreqsInfoGeran {
    pub carrier_freqs: CarrierFreqsGeran,
    /// 0..7
    pub cell_reselection_priority: Option<u8>,
    pub ncc_permitted: u8,
    /// 0..45
    pub q_rx_lev_min: u8,
    /// 0..39
    pub p_max_geran: Option<u8>,
    /// 0..31
    pub thresh_x_high: u8,
    /// 0..31
    pub thresh_x_low: u8,
}

impl Writable for CarrierFreqsInfoGeran {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write(&self.carrier_freqs)?;
        // commonInfo
        writer.write_presence(&[
            self.cell_reselection_priority.is_some(),
            self.p_max_geran.is_some(),
        ])?;
        write_opt_int(writer, self.cell_reselection_priority, 0, 7)?;
        writer.write_bits(u64::from(self.ncc_permitted), 8)?;
        writer.write_int(self.q_rx_lev_min, 0, 45)?;
        write_opt_int(writer, self.p_max_geran, 0, 39)?;
        writer.write_int(self.thresh_x_high, 0, RESELECTION_THRESHOLD_MAX)?;
        writer.write_int(self.thresh_x_low, 0, RESELECTION_THRESHOLD_MAX)
    }
}

impl Readable for CarrierFreqsInfoGeran {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let carrier_freqs = reader.read()?;
        let [priority, p_max] = reader.read_presence()?;
        let value = CarrierFreqsInfoGeran {
            carrier_freqs,
            cell_reselection_priority: read_opt_int(reader, priority, 0, 7)?,
            ncc_permitted: reader.read_bits(8)?,
            q_rx_lev_min: reader.read_int(0, 45)?,
            p_max_geran: read_opt_int(reader, p_max, 0, 39)?,
            thresh_x_high: reader.read_int(0, RESELECTION_THRESHOLD_MAX)?,
            thresh_x_low: reader.read_int(0, RESELECTION_THRESHOLD_MAX)?,
        };
        reader.read_extension_additions("CarrierFreqsInfoGERAN", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType7 {
    /// 0..7
    pub t_reselection_geran: u8,
    pub t_reselection_geran_sf: Option<SpeedStateScaleFactors>,
    pub carrier_freqs_info_list: Option<Vec<CarrierFreqsInfoGeran>>,
    pub late_non_critical_extension: Option<Vec<u8>>,
}

impl SystemInformationBlockType7 {
    pub const NAME: &'static str = "SystemInformationBlockType7";
}

impl Writable for SystemInformationBlockType7 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let late = late_non_critical_extension(&self.late_non_critical_extension);
        let additions = [addition(&late)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.t_reselection_geran_sf.is_some(),
            self.carrier_freqs_info_list.is_some(),
        ])?;
        writer.write_int(self.t_reselection_geran, 0, 7)?;
        if let Some(value) = &self.t_reselection_geran_sf {
            writer.write(value)?;
        }
        if let Some(list) = &self.carrier_freqs_info_list {
            writer.write_sequence_of(list, 1, MAX_GNFG)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for SystemInformationBlockType7 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [sf, list] = reader.read_presence()?;
        let mut value = SystemInformationBlockType7 {
            t_reselection_geran: reader.read_int(0, 7)?,
            t_reselection_geran_sf: if sf { Some(reader.read()?) } else { None },
            carrier_freqs_info_list: if list {
                Some(reader.read_sequence_of(1, MAX_GNFG)?)
            } else {
                None
            },
            late_non_critical_extension: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            value.late_non_critical_extension = Some(read_late_non_critical_extension(reader)?);
            Ok(())
        })?;
        Ok(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType9 {
    /// Home eNB name, 1..48 octets
    pub hnb_name: Option<Vec<u8>>,
    pub late_non_critical_extension: Option<Vec<u8>>,
}

impl SystemInformationBlockType9 {
    pub const NAME: &'static str = "SystemInformationBlockType9";
}

impl Writable for SystemInformationBlockType9 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let late = late_non_critical_extension(&self.late_non_critical_extension);
        let additions = [addition(&late)];
        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[self.hnb_name.is_some()])?;
        if let Some(name) = &self.hnb_name {
            writer.write_octet_string(name, Some(1), Some(48))?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for SystemInformationBlockType9 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [name] = reader.read_presence()?;
        let mut value = SystemInformationBlockType9 {
            hnb_name: if name {
                Some(reader.read_octet_string(Some(1), Some(48))?)
            } else {
                None
            },
            late_non_critical_extension: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            value.late_non_critical_extension = Some(read_late_non_critical_extension(reader)?);
            Ok(())
        })?;
        Ok(value)
    }
}

/// ETWS primary notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType10 {
    pub message_identifier: u16,
    pub serial_number: u16,
    pub warning_type: [u8; 2],
    pub warning_security_info: Option<Vec<u8>>,
    pub late_non_critical_extension: Option<Vec<u8>>,
}

impl SystemInformationBlockType10 {
    pub const NAME: &'static str = "SystemInformationBlockType10";
}

impl Writable for SystemInformationBlockType10 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let late = late_non_critical_extension(&self.late_non_critical_extension);
        let additions = [addition(&late)];
        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[self.warning_security_info.is_some()])?;
        writer.write_bits(u64::from(self.message_identifier), 16)?;
        writer.write_bits(u64::from(self.serial_number), 16)?;
        writer.write_octet_string(&self.warning_type, Some(2), Some(2))?;
        if let Some(info) = &self.warning_security_info {
            writer.write_octet_string(info, Some(50), Some(50))?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for SystemInformationBlockType10 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [security] = reader.read_presence()?;
        let message_identifier = reader.read_bits(16)?;
        let serial_number = reader.read_bits(16)?;
        let octets = reader.read_octet_string(Some(2), Some(2))?;
        let mut value = SystemInformationBlockType10 {
            message_identifier,
            serial_number,
            warning_type: [octets[0], octets[1]],
            warning_security_info: if security {
                Some(reader.read_octet_string(Some(50), Some(50))?)
            } else {
                None
            },
            late_non_critical_extension: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            value.late_non_critical_extension = Some(read_late_non_critical_extension(reader)?);
            Ok(())
        })?;
        Ok(value)
    }
}

enumerated! {
    pub enum WarningMessageSegmentType: "warningMessageSegmentType" {
        NotLastSegment = "notLastSegment",
        LastSegment = "lastSegment",
    }
}

/// A segment of a warning message, the content of SIB11 (ETWS secondary notification) and
/// SIB12 (CMAS notification)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningMessageSegment {
    pub message_identifier: u16,
    pub serial_number: u16,
    pub warning_message_segment_type: WarningMessageSegmentType,
    /// 0..63
    pub warning_message_segment_number: u8,
    pub warning_message_segment: Vec<u8>,
    pub data_coding_scheme: Option<u8>,
    pub late_non_critical_extension: Option<Vec<u8>>,
}

impl WarningMessageSegment {
    fn write_fields(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_bits(u64::from(self.message_identifier), 16)?;
        writer.write_bits(u64::from(self.serial_number), 16)?;
        writer.write(&self.warning_message_segment_type)?;
        writer.write_int(self.warning_message_segment_number, 0, 63)?;
        writer.write_octet_string(&self.warning_message_segment, None, None)?;
        if let Some(scheme) = self.data_coding_scheme {
            writer.write_octet_string(&[scheme], Some(1), Some(1))?;
        }
        Ok(())
    }

    fn read_fields(reader: &mut UperReader<'_>, scheme: bool) -> Result<Self, Error> {
        Ok(WarningMessageSegment {
            message_identifier: reader.read_bits(16)?,
            serial_number: reader.read_bits(16)?,
            warning_message_segment_type: reader.read()?,
            warning_message_segment_number: reader.read_int(0, 63)?,
            warning_message_segment: reader.read_octet_string(None, None)?,
            data_coding_scheme: if scheme {
                Some(reader.read_octet_string(Some(1), Some(1))?[0])
            } else {
                None
            },
            late_non_critical_extension: None,
        })
    }
}

/// ETWS secondary notification, the late non-critical extension is an extension addition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType11(pub WarningMessageSegment);

impl Writable for SystemInformationBlockType11 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let late = late_non_critical_extension(&self.0.late_non_critical_extension);
        let additions = [addition(&late)];
        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[self.0.data_coding_scheme.is_some()])?;
        self.0.write_fields(writer)?;
        writer.write_extension_additions(&additions)
    }
}

impl Readable for SystemInformationBlockType11 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [scheme] = reader.read_presence()?;
        let mut value = WarningMessageSegment::read_fields(reader, scheme)?;
        reader.read_extension_additions("SystemInformationBlockType11", extended, 1, |_, reader| {
            value.late_non_critical_extension = Some(read_late_non_critical_extension(reader)?);
            Ok(())
        })?;
        Ok(SystemInformationBlockType11(value))
    }
}

/// CMAS notification, the late non-critical extension is a root field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType12(pub WarningMessageSegment);

impl Writable for SystemInformationBlockType12 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[
            self.0.data_coding_scheme.is_some(),
            self.0.late_non_critical_extension.is_some(),
        ])?;
        self.0.write_fields(writer)?;
        if let Some(octets) = &self.0.late_non_critical_extension {
            writer.write_octet_string(octets, None, None)?;
        }
        Ok(())
    }
}

impl Readable for SystemInformationBlockType12 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [scheme, late] = reader.read_presence()?;
        let mut value = WarningMessageSegment::read_fields(reader, scheme)?;
        if late {
            value.late_non_critical_extension = Some(read_late_non_critical_extension(reader)?);
        }
        reader.read_extension_additions("SystemInformationBlockType12-r9", extended, 0, |_, _| {
            Ok(())
        })?;
        Ok(SystemInformationBlockType12(value))
    }
}

/// MBMS control information of the cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationBlockType13 {
    pub mbsfn_area_info_list: Vec<MbsfnAreaInfo>,
    pub notification_config: MbmsNotificationConfig,
    pub late_non_critical_extension: Option<Vec<u8>>,
}

impl Writable for SystemInformationBlockType13 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[self.late_non_critical_extension.is_some()])?;
        write_mbsfn_area_info_list(writer, &self.mbsfn_area_info_list)?;
        writer.write(&self.notification_config)?;
        if let Some(octets) = &self.late_non_critical_extension {
            writer.write_octet_string(octets, None, None)?;
        }
        Ok(())
    }
}

impl Readable for SystemInformationBlockType13 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [late] = reader.read_presence()?;
        let value = SystemInformationBlockType13 {
            mbsfn_area_info_list: read_mbsfn_area_info_list(reader)?,
            notification_config: reader.read()?,
            late_non_critical_extension: if late {
                Some(read_late_non_critical_extension(reader)?)
            } else {
                None
            },
        };
        reader.read_extension_additions("SystemInformationBlockType13-r9", extended, 0, |_, _| {
            Ok(())
        })?;
        Ok(value)
    }
}

/// An entry of `sib-TypeAndInfo`. SIB12 and SIB13 are extension alternatives and travel as
/// open types, SIB8 cannot be encoded nor decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SibTypeAndInfo {
    Sib2(Box<SystemInformationBlockType2>),
    Sib3(SystemInformationBlockType3),
    Sib4(SystemInformationBlockType4),
    Sib5(SystemInformationBlockType5),
    Sib6(SystemInformationBlockType6),
    Sib7(SystemInformationBlockType7),
    Sib9(SystemInformationBlockType9),
    Sib10(SystemInformationBlockType10),
    Sib11(SystemInformationBlockType11),
    Sib12(SystemInformationBlockType12),
    Sib13(SystemInformationBlockType13),
    Unknown(UnknownAlternative),
}

impl SibTypeAndInfo {
    pub const NAME: &'static str = "sib-TypeAndInfo";
    const ROOT_VARIANTS: u64 = 10;
    const KNOWN_VARIANTS: u64 = 12;

    fn index(&self) -> u64 {
        match self {
            SibTypeAndInfo::Sib2(_) => 0,
            SibTypeAndInfo::Sib3(_) => 1,
            SibTypeAndInfo::Sib4(_) => 2,
            SibTypeAndInfo::Sib5(_) => 3,
            SibTypeAndInfo::Sib6(_) => 4,
            SibTypeAndInfo::Sib7(_) => 5,
            SibTypeAndInfo::Sib9(_) => 7,
            SibTypeAndInfo::Sib10(_) => 8,
            SibTypeAndInfo::Sib11(_) => 9,
            SibTypeAndInfo::Sib12(_) => 10,
            SibTypeAndInfo::Sib13(_) => 11,
            SibTypeAndInfo::Unknown(unknown) => unknown.index,
        }
    }
}

impl Writable for SibTypeAndInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        if let SibTypeAndInfo::Unknown(unknown) = self {
            return unknown.write(writer, Self::NAME, Self::KNOWN_VARIANTS, Self::ROOT_VARIANTS);
        }
        writer.write_choice_index(Self::NAME, self.index(), Self::ROOT_VARIANTS, true)?;
        match self {
            SibTypeAndInfo::Sib2(sib) => writer.write(sib),
            SibTypeAndInfo::Sib3(sib) => writer.write(sib),
            SibTypeAndInfo::Sib4(sib) => writer.write(sib),
            SibTypeAndInfo::Sib5(sib) => writer.write(sib),
            SibTypeAndInfo::Sib6(sib) => writer.write(sib),
            SibTypeAndInfo::Sib7(sib) => writer.write(sib),
            SibTypeAndInfo::Sib9(sib) => writer.write(sib),
            SibTypeAndInfo::Sib10(sib) => writer.write(sib),
            SibTypeAndInfo::Sib11(sib) => writer.write(sib),
            SibTypeAndInfo::Sib12(sib) => writer.write_open_type(|w| w.write(sib)),
            SibTypeAndInfo::Sib13(sib) => writer.write_open_type(|w| w.write(sib)),
            SibTypeAndInfo::Unknown(_) => Ok(()),
        }
    }
}

impl Readable for SibTypeAndInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(
            match reader.read_choice_index(Self::NAME, Self::ROOT_VARIANTS, true)? {
                0 => SibTypeAndInfo::Sib2(reader.read()?),
                1 => SibTypeAndInfo::Sib3(reader.read()?),
                2 => SibTypeAndInfo::Sib4(reader.read()?),
                3 => SibTypeAndInfo::Sib5(reader.read()?),
                4 => SibTypeAndInfo::Sib6(reader.read()?),
                5 => SibTypeAndInfo::Sib7(reader.read()?),
                6 => return Err(Error::unsupported("SystemInformationBlockType8")),
                7 => SibTypeAndInfo::Sib9(reader.read()?),
                8 => SibTypeAndInfo::Sib10(reader.read()?),
                9 => SibTypeAndInfo::Sib11(reader.read()?),
                10 => SibTypeAndInfo::Sib12(reader.read_open_type(Self::NAME, |r| r.read())?),
                11 => SibTypeAndInfo::Sib13(reader.read_open_type(Self::NAME, |r| r.read())?),
                index => {
                    SibTypeAndInfo::Unknown(UnknownAlternative::read(reader, Self::NAME, index)?)
                }
            },
        )
    }
}

/// `SystemInformation-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInformationR8 {
    /// 1..32 blocks
    pub sib_type_and_info: Vec<SibTypeAndInfo>,
    /// `lateNonCriticalExtension` of the v8a0 extension
    pub late_non_critical_extension: Option<Vec<u8>>,
}

impl Writable for SystemInformationR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let v8a0 = self.late_non_critical_extension.is_some();
        writer.write_presence(&[v8a0])?;
        writer.write_sequence_of(&self.sib_type_and_info, 1, MAX_SIB)?;
        if let Some(octets) = &self.late_non_critical_extension {
            writer.write_presence(&[true, false])?;
            writer.write_octet_string(octets, None, None)?;
        }
        Ok(())
    }
}

impl Readable for SystemInformationR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [v8a0] = reader.read_presence()?;
        let mut value = SystemInformationR8 {
            sib_type_and_info: reader.read_sequence_of(1, MAX_SIB)?,
            late_non_critical_extension: None,
        };
        if v8a0 {
            let [late, later] = reader.read_presence()?;
            if late {
                value.late_non_critical_extension = Some(read_late_non_critical_extension(reader)?);
            }
            if later {
                reader.ignore_trailing_extension("SystemInformation-v8a0-IEs")?;
            }
        }
        Ok(value)
    }
}

/// `SystemInformation`, without a `c1` level
pub type SystemInformation = CriticalExtensions<SystemInformationR8, 0>;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::diag::CollectingSink;
    use crate::ies::common::{
        BandIndicatorGeran, FollowingArfcns, MobilityStateTime, PhysCellIdRangeSize,
        SpeedScaleFactor, N310, N311, T300, T310, T311,
    };
    use crate::ies::mbms::{
        McchConfig, McchModificationPeriod, McchRepetitionPeriod, NonMbsfnRegionLength,
        NotificationRepetitionCoeff, SignallingMcs,
    };
    use crate::ies::radio_resource::common::tests::sample_config_common_sib;
    use crate::ies::radio_resource::common::{PhichDuration, PhichResource};
    use crate::io::per::ErrorKind;

    #[test]
    fn test_mib_is_24_bits() {
        let mib = MasterInformationBlock {
            dl_bandwidth: CellBandwidth::N50,
            phich_config: PhichConfig {
                phich_duration: PhichDuration::Normal,
                phich_resource: PhichResource::One,
            },
            system_frame_number: 0xA5,
            spare: 0,
        };
        let mut writer = UperWriter::default();
        writer.write(&mib).unwrap();
        assert_eq!(24, writer.finish());
        // 011 0 10 10100101 0000000000
        assert_eq!(&[0b0110_1010, 0b1001_0100, 0b0000_0000], writer.byte_content());
        assert_eq!(mib, writer.as_reader().read().unwrap());
    }

    pub(crate) fn sample_sib1() -> SystemInformationBlockType1 {
        SystemInformationBlockType1 {
            cell_access_related_info: CellAccessRelatedInfo {
                plmn_identity_list: vec![PlmnIdentityInfo {
                    plmn_identity: PlmnIdentity {
                        mcc: Some([0, 0, 1]),
                        mnc: vec![0, 1],
                    },
                    cell_reserved_for_operator_use: CellReservedForOperatorUse::NotReserved,
                }],
                tracking_area_code: 0x0001,
                cell_identity: 0x0_1A2D_101,
                cell_barred: CellBarred::NotBarred,
                intra_freq_reselection: IntraFreqReselection::Allowed,
                csg_indication: false,
                csg_identity: None,
            },
            cell_selection_info: CellSelectionInfo {
                q_rx_lev_min: -65,
                q_rx_lev_min_offset: None,
            },
            p_max: Some(23),
            freq_band_indicator: 7,
            scheduling_info_list: vec![
                SchedulingInfo {
                    si_periodicity: SiPeriodicity::Rf16,
                    sib_mapping_info: vec![],
                },
                SchedulingInfo {
                    si_periodicity: SiPeriodicity::Rf64,
                    sib_mapping_info: vec![SibType::SibType3, SibType::SibType13],
                },
            ],
            tdd_config: None,
            si_window_length: SiWindowLength::Ms20,
            system_info_value_tag: 5,
            late_non_critical_extension: None,
            ims_emergency_support: false,
            cell_selection_info_v920: None,
        }
    }

    #[test]
    fn test_sib1_round_trip() {
        let sib1 = sample_sib1();
        let mut writer = UperWriter::default();
        writer.write(&sib1).unwrap();
        assert_eq!(sib1, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_sib1_non_critical_extensions() {
        let mut sib1 = sample_sib1();
        let mut writer = UperWriter::default();
        writer.write(&sib1).unwrap();
        let baseline = writer.finish();

        sib1.cell_selection_info_v920 = Some(CellSelectionInfoV920 {
            q_qual_min: -34,
            q_qual_min_offset: Some(8),
        });
        let mut writer = UperWriter::default();
        writer.write(&sib1).unwrap();
        // v890 presence bits, v920 presence bits, q-QualMin, offset
        assert_eq!(baseline + 2 + 3 + 1 + 5 + 3, writer.finish());
        assert_eq!(sib1, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_sib1_later_extension_is_ignored() {
        let sib1 = sample_sib1();
        let mut writer = UperWriter::default();
        writer.write(&sib1).unwrap();
        let mut data = writer.byte_content().to_vec();
        // set the v890 presence bit, then v920 present with only its nonCriticalExtension
        data[0] |= 0b0010_0000;
        let mut extended = UperWriter::default();
        let mut reader = UperReader::from_bits(&data, writer.finish());
        while reader.remaining_bits() > 0 {
            extended.write_bit(reader.read_bit().unwrap()).unwrap();
        }
        extended.write_presence(&[false, true]).unwrap();
        extended.write_presence(&[false, false, true]).unwrap();
        extended.write_bits(0xFF, 8).unwrap();

        let sink = CollectingSink::default();
        let mut reader = extended.as_reader().with_sink(&sink);
        assert_eq!(
            sib1,
            reader.read::<SystemInformationBlockType1>().unwrap()
        );
        assert_eq!(0, reader.remaining_bits());
        assert!(sink.contains(SystemInformationBlockType1::NAME));
    }

    pub(crate) fn sample_sib2() -> SystemInformationBlockType2 {
        SystemInformationBlockType2 {
            ac_barring_info: None,
            radio_resource_config_common: sample_config_common_sib(),
            ue_timers_and_constants: UeTimersAndConstants {
                t300: T300::Ms1000,
                t301: T300::Ms1000,
                t310: T310::Ms1000,
                n310: N310::N1,
                t311: T311::Ms10000,
                n311: N311::N1,
            },
            freq_info: FreqInfo {
                ul_carrier_freq: None,
                ul_bandwidth: None,
                additional_spectrum_emission: 1,
            },
            mbsfn_subframe_config_list: None,
            time_alignment_timer_common: TimeAlignmentTimer::Infinity,
            late_non_critical_extension: None,
            ssac_barring_for_mmtel_voice: None,
            ssac_barring_for_mmtel_video: None,
            ac_barring_for_csfb: None,
        }
    }

    #[test]
    fn test_sib2_extension_slots() {
        let mut sib2 = sample_sib2();
        sib2.ac_barring_for_csfb = Some(AcBarringConfig {
            ac_barring_factor: AcBarringFactor::P95,
            ac_barring_time: AcBarringTime::S512,
            ac_barring_for_special_ac: 0b10101,
        });
        sib2.late_non_critical_extension = Some(vec![0x12, 0x34]);
        let mut writer = UperWriter::default();
        writer.write(&sib2).unwrap();
        let mut reader = writer.as_reader();
        assert_eq!(sib2, reader.read().unwrap());
        assert_eq!(0, reader.remaining_bits());
    }

    fn sample_sib3() -> SystemInformationBlockType3 {
        SystemInformationBlockType3 {
            q_hyst: QHyst::Db4,
            speed_state_reselection_pars: Some(SpeedStateReselectionPars {
                mobility_state_parameters: MobilityStateParameters {
                    t_evaluation: MobilityStateTime::S60,
                    t_hyst_normal: MobilityStateTime::S30,
                    n_cell_change_medium: 4,
                    n_cell_change_high: 8,
                },
                sf_medium: QHystSf::DbMinus2,
                sf_high: QHystSf::DbMinus4,
            }),
            s_non_intra_search: Some(10),
            thresh_serving_low: 4,
            cell_reselection_priority: 7,
            q_rx_lev_min: -64,
            p_max: None,
            s_intra_search: Some(31),
            allowed_meas_bandwidth: None,
            presence_antenna_port1: true,
            neigh_cell_config: 0b01,
            t_reselection_eutra: 1,
            t_reselection_eutra_sf: Some(SpeedStateScaleFactors {
                sf_medium: SpeedScaleFactor::ODot5,
                sf_high: SpeedScaleFactor::ODot25,
            }),
            late_non_critical_extension: None,
            s_intra_search_v920: None,
            s_non_intra_search_v920: None,
            q_qual_min: Some(-20),
            thresh_serving_low_q: None,
        }
    }

    #[test]
    fn test_system_information_round_trip() {
        let si = SystemInformation::Current(SystemInformationR8 {
            sib_type_and_info: vec![
                SibTypeAndInfo::Sib2(Box::new(sample_sib2())),
                SibTypeAndInfo::Sib3(sample_sib3()),
                SibTypeAndInfo::Sib4(SystemInformationBlockType4 {
                    intra_freq_neigh_cell_list: Some(vec![NeighCellInfo {
                        phys_cell_id: 12,
                        q_offset_cell: QOffsetRange::Db2,
                    }]),
                    ..Default::default()
                }),
                SibTypeAndInfo::Sib13(SystemInformationBlockType13 {
                    mbsfn_area_info_list: vec![MbsfnAreaInfo {
                        mbsfn_area_id: 1,
                        non_mbsfn_region_length: NonMbsfnRegionLength::S1,
                        notification_indicator: 0,
                        mcch_config: McchConfig {
                            mcch_repetition_period: McchRepetitionPeriod::Rf32,
                            mcch_offset: 0,
                            mcch_modification_period: McchModificationPeriod::Rf512,
                            sf_alloc_info: 0b10_0000,
                            signalling_mcs: SignallingMcs::N2,
                        },
                    }],
                    notification_config: MbmsNotificationConfig {
                        notification_repetition_coeff: NotificationRepetitionCoeff::N2,
                        notification_offset: 0,
                        notification_sf_index: 1,
                    },
                    late_non_critical_extension: None,
                }),
            ],
            late_non_critical_extension: None,
        });
        let mut writer = UperWriter::default();
        writer.write(&si).unwrap();
        let mut reader = writer.as_reader();
        assert_eq!(si, reader.read().unwrap());
        assert_eq!(0, reader.remaining_bits());
    }

    #[test]
    fn test_sib8_is_unsupported() {
        let mut writer = UperWriter::default();
        writer
            .write_choice_index(SibTypeAndInfo::NAME, 6, SibTypeAndInfo::ROOT_VARIANTS, true)
            .unwrap();
        writer.write_bits(0, 16).unwrap();
        assert_eq!(
            &ErrorKind::Unsupported("SystemInformationBlockType8"),
            writer
                .as_reader()
                .read::<SibTypeAndInfo>()
                .unwrap_err()
                .kind()
        );
    }

    #[test]
    fn test_unknown_sib_is_kept() {
        let sib = SibTypeAndInfo::Unknown(UnknownAlternative {
            index: 12,
            data: vec![0x80],
        });
        let mut writer = UperWriter::default();
        writer.write(&sib).unwrap();
        assert_eq!(sib, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_warning_notifications() {
        let segment = WarningMessageSegment {
            message_identifier: 0x1112,
            serial_number: 0x3000,
            warning_message_segment_type: WarningMessageSegmentType::LastSegment,
            warning_message_segment_number: 0,
            warning_message_segment: b"test".to_vec(),
            data_coding_scheme: Some(0x0F),
            late_non_critical_extension: Some(vec![0x00]),
        };
        let sib11 = SystemInformationBlockType11(segment.clone());
        let sib12 = SystemInformationBlockType12(segment);
        let mut writer = UperWriter::default();
        writer.write(&sib11).unwrap();
        writer.write(&sib12).unwrap();
        let mut reader = writer.as_reader();
        assert_eq!(sib11, reader.read().unwrap());
        assert_eq!(sib12, reader.read().unwrap());
    }

    #[test]
    fn test_utra_carriers() {
        let fdd = CarrierFreqUtra {
            carrier_freq: 10700,
            cell_reselection_priority: Some(3),
            thresh_x_high: 10,
            thresh_x_low: 2,
            q_rx_lev_min: -58,
            p_max_utra: 24,
            q_qual_min: -18,
            thresh_x_q: Some(ThresholdPair {
                first: 5,
                second: 6,
            }),
        };
        let tdd = CarrierFreqUtra {
            q_qual_min: 0,
            thresh_x_q: None,
            ..fdd
        };
        let sib6 = SystemInformationBlockType6 {
            carrier_freq_list_utra_fdd: Some(vec![fdd]),
            carrier_freq_list_utra_tdd: Some(vec![tdd]),
            t_reselection_utra: 2,
            t_reselection_utra_sf: None,
            late_non_critical_extension: None,
        };
        let mut writer = UperWriter::default();
        writer.write(&sib6).unwrap();
        assert_eq!(sib6, writer.as_reader().read().unwrap());
    }

    fn assert_sib_round_trip(sib: SibTypeAndInfo, bits: usize) {
        let mut writer = UperWriter::default();
        writer.write(&sib).unwrap();
        assert_eq!(bits, writer.finish());
        let mut reader = writer.as_reader();
        assert_eq!(sib, reader.read().unwrap());
        assert_eq!(0, reader.bits_remaining());
    }

    fn inter_freq_carrier() -> InterFreqCarrierFreqInfo {
        InterFreqCarrierFreqInfo {
            dl_carrier_freq: 3100,
            q_rx_lev_min: -64,
            p_max: Some(23),
            t_reselection_eutra: 1,
            t_reselection_eutra_sf: Some(SpeedStateScaleFactors {
                sf_medium: SpeedScaleFactor::ODot5,
                sf_high: SpeedScaleFactor::LDot0,
            }),
            thresh_x_high: 12,
            thresh_x_low: 4,
            allowed_meas_bandwidth: AllowedMeasBandwidth::Mbw50,
            presence_antenna_port1: true,
            cell_reselection_priority: Some(5),
            neigh_cell_config: 1,
            q_offset_freq: Some(QOffsetRange::Db2),
            inter_freq_neigh_cell_list: Some(vec![NeighCellInfo {
                phys_cell_id: 101,
                q_offset_cell: QOffsetRange::DbMinus2,
            }]),
            inter_freq_black_cell_list: Some(vec![PhysCellIdRange {
                start: 200,
                range: Some(PhysCellIdRangeSize::N8),
            }]),
            q_qual_min: Some(-20),
            thresh_x_q: Some(ThresholdPair {
                first: 3,
                second: 2,
            }),
        }
    }

    #[test]
    fn test_inter_freq_carrier_without_v920_has_no_additions() {
        let carrier = InterFreqCarrierFreqInfo {
            q_qual_min: None,
            thresh_x_q: None,
            ..inter_freq_carrier()
        };
        let mut writer = UperWriter::default();
        writer.write(&carrier).unwrap();
        assert_eq!(102, writer.finish());
        assert_eq!(carrier, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_sib5_with_v920_and_late_extension() {
        let sib5 = SystemInformationBlockType5 {
            inter_freq_carrier_freq_list: vec![inter_freq_carrier()],
            late_non_critical_extension: Some(vec![0x00]),
        };
        // choice 5, extension bit, list size 3, carrier 102 + 40 for v920, late extension 32
        assert_sib_round_trip(SibTypeAndInfo::Sib5(sib5), 183);
    }

    #[test]
    fn test_sib7_geran_neighbours() {
        let sib7 = SystemInformationBlockType7 {
            t_reselection_geran: 3,
            t_reselection_geran_sf: Some(SpeedStateScaleFactors {
                sf_medium: SpeedScaleFactor::ODot25,
                sf_high: SpeedScaleFactor::ODot75,
            }),
            carrier_freqs_info_list: Some(vec![CarrierFreqsInfoGeran {
                carrier_freqs: CarrierFreqsGeran {
                    starting_arfcn: 512,
                    band_indicator: BandIndicatorGeran::Dcs1800,
                    following_arfcns: FollowingArfcns::EquallySpaced {
                        arfcn_spacing: 2,
                        number_of_following_arfcns: 3,
                    },
                },
                cell_reselection_priority: Some(1),
                ncc_permitted: 0xFF,
                q_rx_lev_min: 20,
                p_max_geran: None,
                thresh_x_high: 6,
                thresh_x_low: 2,
            }]),
            late_non_critical_extension: None,
        };
        assert_sib_round_trip(SibTypeAndInfo::Sib7(sib7), 70);
    }

    #[test]
    fn test_sib9_home_enb_name() {
        let sib9 = SystemInformationBlockType9 {
            hnb_name: Some(b"Home".to_vec()),
            late_non_critical_extension: None,
        };
        assert_sib_round_trip(SibTypeAndInfo::Sib9(sib9), 45);
        assert_sib_round_trip(
            SibTypeAndInfo::Sib9(SystemInformationBlockType9::default()),
            5 + 2,
        );
    }

    #[test]
    fn test_sib10_etws_primary_notification() {
        let sib10 = SystemInformationBlockType10 {
            message_identifier: 0x1100,
            serial_number: 0x3000,
            warning_type: [0x05, 0x80],
            warning_security_info: None,
            late_non_critical_extension: Some(vec![0xAB, 0xCD]),
        };
        assert_sib_round_trip(SibTypeAndInfo::Sib10(sib10), 95);
    }
}
