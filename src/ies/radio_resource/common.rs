//! Cell-wide radio resource configuration, broadcast in SIB2 and signalled on handover.

use crate::io::per::Error;
use crate::syn::choice::SetupRelease;
use crate::syn::extension::addition;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

enumerated! {
    pub enum NumberOfRaPreambles: "numberOfRA-Preambles", numeric u8 {
        N4 = "n4" => 4,
        N8 = "n8" => 8,
        N12 = "n12" => 12,
        N16 = "n16" => 16,
        N20 = "n20" => 20,
        N24 = "n24" => 24,
        N28 = "n28" => 28,
        N32 = "n32" => 32,
        N36 = "n36" => 36,
        N40 = "n40" => 40,
        N44 = "n44" => 44,
        N48 = "n48" => 48,
        N52 = "n52" => 52,
        N56 = "n56" => 56,
        N60 = "n60" => 60,
        N64 = "n64" => 64,
    }
}

enumerated! {
    pub enum SizeOfRaPreamblesGroupA: "sizeOfRA-PreamblesGroupA", numeric u8 {
        N4 = "n4" => 4,
        N8 = "n8" => 8,
        N12 = "n12" => 12,
        N16 = "n16" => 16,
        N20 = "n20" => 20,
        N24 = "n24" => 24,
        N28 = "n28" => 28,
        N32 = "n32" => 32,
        N36 = "n36" => 36,
        N40 = "n40" => 40,
        N44 = "n44" => 44,
        N48 = "n48" => 48,
        N52 = "n52" => 52,
        N56 = "n56" => 56,
        N60 = "n60" => 60,
    }
}

enumerated! {
    pub enum PreambleInitialReceivedTargetPower: "preambleInitialReceivedTargetPower", numeric i8 {
        DbmMinus120 = "dBm-120" => -120,
        DbmMinus118 = "dBm-118" => -118,
        DbmMinus116 = "dBm-116" => -116,
        DbmMinus114 = "dBm-114" => -114,
        DbmMinus112 = "dBm-112" => -112,
        DbmMinus110 = "dBm-110" => -110,
        DbmMinus108 = "dBm-108" => -108,
        DbmMinus106 = "dBm-106" => -106,
        DbmMinus104 = "dBm-104" => -104,
        DbmMinus102 = "dBm-102" => -102,
        DbmMinus100 = "dBm-100" => -100,
        DbmMinus98 = "dBm-98" => -98,
        DbmMinus96 = "dBm-96" => -96,
        DbmMinus94 = "dBm-94" => -94,
        DbmMinus92 = "dBm-92" => -92,
        DbmMinus90 = "dBm-90" => -90,
    }
}

enumerated! {
    pub enum MessageSizeGroupA: "messageSizeGroupA", numeric u16 {
        B56 = "b56" => 56,
        B144 = "b144" => 144,
        B208 = "b208" => 208,
        B256 = "b256" => 256,
    }
}

enumerated! {
    pub enum MessagePowerOffsetGroupB: "messagePowerOffsetGroupB", numeric i8 {
        MinusInfinity = "minusinfinity",
        Db0 = "dB0" => 0,
        Db5 = "dB5" => 5,
        Db8 = "dB8" => 8,
        Db10 = "dB10" => 10,
        Db12 = "dB12" => 12,
        Db15 = "dB15" => 15,
        Db18 = "dB18" => 18,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreamblesGroupAConfig {
    pub size_of_ra_preambles_group_a: SizeOfRaPreamblesGroupA,
    pub message_size_group_a: MessageSizeGroupA,
    pub message_power_offset_group_b: MessagePowerOffsetGroupB,
}

impl Writable for PreamblesGroupAConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write(&self.size_of_ra_preambles_group_a)?;
        writer.write(&self.message_size_group_a)?;
        writer.write(&self.message_power_offset_group_b)
    }
}

impl Readable for PreamblesGroupAConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let value = PreamblesGroupAConfig {
            size_of_ra_preambles_group_a: reader.read()?,
            message_size_group_a: reader.read()?,
            message_power_offset_group_b: reader.read()?,
        };
        reader.read_extension_additions("preamblesGroupAConfig", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

enumerated! {
    pub enum PowerRampingStep: "powerRampingStep", numeric u8 {
        Db0 = "dB0" => 0,
        Db2 = "dB2" => 2,
        Db4 = "dB4" => 4,
        Db6 = "dB6" => 6,
    }
}

enumerated! {
    pub enum PreambleTransMax: "PreambleTransMax", numeric u8 {
        N3 = "n3" => 3,
        N4 = "n4" => 4,
        N5 = "n5" => 5,
        N6 = "n6" => 6,
        N7 = "n7" => 7,
        N8 = "n8" => 8,
        N10 = "n10" => 10,
        N20 = "n20" => 20,
        N50 = "n50" => 50,
        N100 = "n100" => 100,
        N200 = "n200" => 200,
    }
}

enumerated! {
    pub enum RaResponseWindowSize: "ra-ResponseWindowSize", numeric u8 {
        Sf2 = "sf2" => 2,
        Sf3 = "sf3" => 3,
        Sf4 = "sf4" => 4,
        Sf5 = "sf5" => 5,
        Sf6 = "sf6" => 6,
        Sf7 = "sf7" => 7,
        Sf8 = "sf8" => 8,
        Sf10 = "sf10" => 10,
    }
}

enumerated! {
    pub enum MacContentionResolutionTimer: "mac-ContentionResolutionTimer", numeric u8 {
        Sf8 = "sf8" => 8,
        Sf16 = "sf16" => 16,
        Sf24 = "sf24" => 24,
        Sf32 = "sf32" => 32,
        Sf40 = "sf40" => 40,
        Sf48 = "sf48" => 48,
        Sf56 = "sf56" => 56,
        Sf64 = "sf64" => 64,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RachConfigCommon {
    pub number_of_ra_preambles: NumberOfRaPreambles,
    pub preambles_group_a_config: Option<PreamblesGroupAConfig>,
    pub power_ramping_step: PowerRampingStep,
    pub preamble_initial_received_target_power: PreambleInitialReceivedTargetPower,
    pub preamble_trans_max: PreambleTransMax,
    pub ra_response_window_size: RaResponseWindowSize,
    pub mac_contention_resolution_timer: MacContentionResolutionTimer,
    /// 1..8
    pub max_harq_msg3_tx: u8,
}

impl Writable for RachConfigCommon {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        // preambleInfo
        writer.write_presence(&[self.preambles_group_a_config.is_some()])?;
        writer.write(&self.number_of_ra_preambles)?;
        if let Some(config) = &self.preambles_group_a_config {
            writer.write(config)?;
        }
        // powerRampingParameters
        writer.write(&self.power_ramping_step)?;
        writer.write(&self.preamble_initial_received_target_power)?;
        // ra-SupervisionInfo
        writer.write(&self.preamble_trans_max)?;
        writer.write(&self.ra_response_window_size)?;
        writer.write(&self.mac_contention_resolution_timer)?;
        writer.write_int(self.max_harq_msg3_tx, 1, 8)
    }
}

impl Readable for RachConfigCommon {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [group_a] = reader.read_presence()?;
        let value = RachConfigCommon {
            number_of_ra_preambles: reader.read()?,
            preambles_group_a_config: if group_a { Some(reader.read()?) } else { None },
            power_ramping_step: reader.read()?,
            preamble_initial_received_target_power: reader.read()?,
            preamble_trans_max: reader.read()?,
            ra_response_window_size: reader.read()?,
            mac_contention_resolution_timer: reader.read()?,
            max_harq_msg3_tx: reader.read_int(1, 8)?,
        };
        reader.read_extension_additions("RACH-ConfigCommon", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

enumerated! {
    pub enum ModificationPeriodCoeff: "modificationPeriodCoeff", numeric u8 {
        N2 = "n2" => 2,
        N4 = "n4" => 4,
        N8 = "n8" => 8,
        N16 = "n16" => 16,
    }
}

enumerated! {
    pub enum DefaultPagingCycle: "defaultPagingCycle", numeric u16 {
        Rf32 = "rf32" => 32,
        Rf64 = "rf64" => 64,
        Rf128 = "rf128" => 128,
        Rf256 = "rf256" => 256,
    }
}

enumerated! {
    pub enum PagingNb: "PCCH-Config-nB" {
        FourT = "fourT",
        TwoT = "twoT",
        OneT = "oneT",
        HalfT = "halfT",
        QuarterT = "quarterT",
        OneEighthT = "oneEighthT",
        OneSixteenthT = "oneSixteenthT",
        OneThirtySecondT = "oneThirtySecondT",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcchConfig {
    pub default_paging_cycle: DefaultPagingCycle,
    pub nb: PagingNb,
}

impl Writable for PcchConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.default_paging_cycle)?;
        writer.write(&self.nb)
    }
}

impl Readable for PcchConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PcchConfig {
            default_paging_cycle: reader.read()?,
            nb: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrachConfigInfo {
    /// 0..63
    pub prach_config_index: u8,
    pub high_speed_flag: bool,
    /// 0..15
    pub zero_correlation_zone_config: u8,
    /// 0..94
    pub prach_freq_offset: u8,
}

impl Writable for PrachConfigInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.prach_config_index, 0, 63)?;
        writer.write_bit(self.high_speed_flag)?;
        writer.write_int(self.zero_correlation_zone_config, 0, 15)?;
        writer.write_int(self.prach_freq_offset, 0, 94)
    }
}

impl Readable for PrachConfigInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PrachConfigInfo {
            prach_config_index: reader.read_int(0, 63)?,
            high_speed_flag: reader.read_bit()?,
            zero_correlation_zone_config: reader.read_int(0, 15)?,
            prach_freq_offset: reader.read_int(0, 94)?,
        })
    }
}

/// `PRACH-Config` and `PRACH-ConfigSIB`, the latter always carries the config info
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrachConfig {
    /// 0..837
    pub root_sequence_index: u16,
    pub prach_config_info: Option<PrachConfigInfo>,
}

impl Writable for PrachConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.prach_config_info.is_some()])?;
        writer.write_int(self.root_sequence_index, 0, 837)?;
        if let Some(info) = &self.prach_config_info {
            writer.write(info)?;
        }
        Ok(())
    }
}

impl Readable for PrachConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [info] = reader.read_presence()?;
        Ok(PrachConfig {
            root_sequence_index: reader.read_int(0, 837)?,
            prach_config_info: if info { Some(reader.read()?) } else { None },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrachConfigSib {
    /// 0..837
    pub root_sequence_index: u16,
    pub prach_config_info: PrachConfigInfo,
}

impl Writable for PrachConfigSib {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.root_sequence_index, 0, 837)?;
        writer.write(&self.prach_config_info)
    }
}

impl Readable for PrachConfigSib {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PrachConfigSib {
            root_sequence_index: reader.read_int(0, 837)?,
            prach_config_info: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdschConfigCommon {
    /// -60..50 dBm
    pub reference_signal_power: i8,
    /// 0..3
    pub p_b: u8,
}

impl Writable for PdschConfigCommon {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.reference_signal_power, -60, 50)?;
        writer.write_int(self.p_b, 0, 3)
    }
}

impl Readable for PdschConfigCommon {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PdschConfigCommon {
            reference_signal_power: reader.read_int(-60, 50)?,
            p_b: reader.read_int(0, 3)?,
        })
    }
}

enumerated! {
    pub enum HoppingMode: "hoppingMode" {
        InterSubFrame = "interSubFrame",
        IntraAndInterSubFrame = "intraAndInterSubFrame",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UlReferenceSignalsPusch {
    pub group_hopping_enabled: bool,
    /// 0..29
    pub group_assignment_pusch: u8,
    pub sequence_hopping_enabled: bool,
    /// 0..7
    pub cyclic_shift: u8,
}

impl Writable for UlReferenceSignalsPusch {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_bit(self.group_hopping_enabled)?;
        writer.write_int(self.group_assignment_pusch, 0, 29)?;
        writer.write_bit(self.sequence_hopping_enabled)?;
        writer.write_int(self.cyclic_shift, 0, 7)
    }
}

impl Readable for UlReferenceSignalsPusch {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(UlReferenceSignalsPusch {
            group_hopping_enabled: reader.read_bit()?,
            group_assignment_pusch: reader.read_int(0, 29)?,
            sequence_hopping_enabled: reader.read_bit()?,
            cyclic_shift: reader.read_int(0, 7)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuschConfigCommon {
    /// 1..4
    pub n_sb: u8,
    pub hopping_mode: HoppingMode,
    /// 0..98
    pub pusch_hopping_offset: u8,
    pub enable_64qam: bool,
    pub ul_reference_signals_pusch: UlReferenceSignalsPusch,
}

impl Writable for PuschConfigCommon {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.n_sb, 1, 4)?;
        writer.write(&self.hopping_mode)?;
        writer.write_int(self.pusch_hopping_offset, 0, 98)?;
        writer.write_bit(self.enable_64qam)?;
        writer.write(&self.ul_reference_signals_pusch)
    }
}

impl Readable for PuschConfigCommon {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PuschConfigCommon {
            n_sb: reader.read_int(1, 4)?,
            hopping_mode: reader.read()?,
            pusch_hopping_offset: reader.read_int(0, 98)?,
            enable_64qam: reader.read_bit()?,
            ul_reference_signals_pusch: reader.read()?,
        })
    }
}

enumerated! {
    pub enum PhichDuration: "PHICH-Config-phich-Duration" {
        Normal = "normal",
        Extended = "extended",
    }
}

enumerated! {
    pub enum PhichResource: "PHICH-Config-phich-Resource", numeric f32 {
        OneSixth = "oneSixth" => 1.0 / 6.0,
        Half = "half" => 0.5,
        One = "one" => 1.0,
        Two = "two" => 2.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhichConfig {
    pub phich_duration: PhichDuration,
    pub phich_resource: PhichResource,
}

impl Writable for PhichConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.phich_duration)?;
        writer.write(&self.phich_resource)
    }
}

impl Readable for PhichConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PhichConfig {
            phich_duration: reader.read()?,
            phich_resource: reader.read()?,
        })
    }
}

enumerated! {
    pub enum DeltaPucchShift: "deltaPUCCH-Shift", numeric u8 {
        Ds1 = "ds1" => 1,
        Ds2 = "ds2" => 2,
        Ds3 = "ds3" => 3,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PucchConfigCommon {
    pub delta_pucch_shift: DeltaPucchShift,
    /// 0..98
    pub n_rb_cqi: u8,
    /// 0..7
    pub n_cs_an: u8,
    /// 0..2047
    pub n1_pucch_an: u16,
}

impl Writable for PucchConfigCommon {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.delta_pucch_shift)?;
        writer.write_int(self.n_rb_cqi, 0, 98)?;
        writer.write_int(self.n_cs_an, 0, 7)?;
        writer.write_int(self.n1_pucch_an, 0, 2047)
    }
}

impl Readable for PucchConfigCommon {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PucchConfigCommon {
            delta_pucch_shift: reader.read()?,
            n_rb_cqi: reader.read_int(0, 98)?,
            n_cs_an: reader.read_int(0, 7)?,
            n1_pucch_an: reader.read_int(0, 2047)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundingRsUlConfigCommonSetup {
    /// `bw0..bw7`
    pub srs_bandwidth_config: u8,
    /// `sc0..sc15`
    pub srs_subframe_config: u8,
    pub ack_nack_srs_simultaneous_transmission: bool,
    pub srs_max_up_pts: bool,
}

impl Writable for SoundingRsUlConfigCommonSetup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.srs_max_up_pts])?;
        writer.write_int(self.srs_bandwidth_config, 0, 7)?;
        writer.write_int(self.srs_subframe_config, 0, 15)?;
        writer.write_bit(self.ack_nack_srs_simultaneous_transmission)
        // srs-MaxUpPts ENUMERATED {true} takes no bits
    }
}

impl Readable for SoundingRsUlConfigCommonSetup {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [srs_max_up_pts] = reader.read_presence()?;
        Ok(SoundingRsUlConfigCommonSetup {
            srs_bandwidth_config: reader.read_int(0, 7)?,
            srs_subframe_config: reader.read_int(0, 15)?,
            ack_nack_srs_simultaneous_transmission: reader.read_bit()?,
            srs_max_up_pts,
        })
    }
}

pub type SoundingRsUlConfigCommon = SetupRelease<SoundingRsUlConfigCommonSetup>;

enumerated! {
    pub enum Alpha: "UplinkPowerControlCommon-alpha", numeric f32 {
        Al0 = "al0" => 0.0,
        Al04 = "al04" => 0.4,
        Al05 = "al05" => 0.5,
        Al06 = "al06" => 0.6,
        Al07 = "al07" => 0.7,
        Al08 = "al08" => 0.8,
        Al09 = "al09" => 0.9,
        Al1 = "al1" => 1.0,
    }
}

enumerated! {
    pub enum DeltaFPucchFormat1: "deltaF-PUCCH-Format1", numeric i8 {
        DeltaFMinus2 = "deltaF-2" => -2,
        DeltaF0 = "deltaF0" => 0,
        DeltaF2 = "deltaF2" => 2,
    }
}

enumerated! {
    pub enum DeltaFPucchFormat1b: "deltaF-PUCCH-Format1b", numeric i8 {
        DeltaF1 = "deltaF1" => 1,
        DeltaF3 = "deltaF3" => 3,
        DeltaF5 = "deltaF5" => 5,
    }
}

enumerated! {
    pub enum DeltaFPucchFormat2: "deltaF-PUCCH-Format2", numeric i8 {
        DeltaFMinus2 = "deltaF-2" => -2,
        DeltaF0 = "deltaF0" => 0,
        DeltaF1 = "deltaF1" => 1,
        DeltaF2 = "deltaF2" => 2,
    }
}

/// Formats 2a and 2b share the value set of format 1
pub type DeltaFPucchFormat2ab = DeltaFPucchFormat1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaFListPucch {
    pub format1: DeltaFPucchFormat1,
    pub format1b: DeltaFPucchFormat1b,
    pub format2: DeltaFPucchFormat2,
    pub format2a: DeltaFPucchFormat2ab,
    pub format2b: DeltaFPucchFormat2ab,
}

impl Writable for DeltaFListPucch {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.format1)?;
        writer.write(&self.format1b)?;
        writer.write(&self.format2)?;
        writer.write(&self.format2a)?;
        writer.write(&self.format2b)
    }
}

impl Readable for DeltaFListPucch {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(DeltaFListPucch {
            format1: reader.read()?,
            format1b: reader.read()?,
            format2: reader.read()?,
            format2a: reader.read()?,
            format2b: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UplinkPowerControlCommon {
    /// -126..24
    pub p0_nominal_pusch: i8,
    pub alpha: Alpha,
    /// -127..-96
    pub p0_nominal_pucch: i8,
    pub delta_f_list_pucch: DeltaFListPucch,
    /// -1..6
    pub delta_preamble_msg3: i8,
}

impl Writable for UplinkPowerControlCommon {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.p0_nominal_pusch, -126, 24)?;
        writer.write(&self.alpha)?;
        writer.write_int(self.p0_nominal_pucch, -127, -96)?;
        writer.write(&self.delta_f_list_pucch)?;
        writer.write_int(self.delta_preamble_msg3, -1, 6)
    }
}

impl Readable for UplinkPowerControlCommon {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(UplinkPowerControlCommon {
            p0_nominal_pusch: reader.read_int(-126, 24)?,
            alpha: reader.read()?,
            p0_nominal_pucch: reader.read_int(-127, -96)?,
            delta_f_list_pucch: reader.read()?,
            delta_preamble_msg3: reader.read_int(-1, 6)?,
        })
    }
}

enumerated! {
    pub enum DeltaFPucchFormat3: "deltaF-PUCCH-Format3-r10", numeric i8 {
        DeltaFMinus1 = "deltaF-1" => -1,
        DeltaF0 = "deltaF0" => 0,
        DeltaF1 = "deltaF1" => 1,
        DeltaF2 = "deltaF2" => 2,
        DeltaF3 = "deltaF3" => 3,
        DeltaF4 = "deltaF4" => 4,
        DeltaF5 = "deltaF5" => 5,
        DeltaF6 = "deltaF6" => 6,
    }
}

enumerated! {
    pub enum DeltaFPucchFormat1bCs: "deltaF-PUCCH-Format1bCS-r10", numeric i8 {
        DeltaF1 = "deltaF1" => 1,
        DeltaF2 = "deltaF2" => 2,
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UplinkPowerControlCommonV1020 {
    pub delta_f_pucch_format3: DeltaFPucchFormat3,
    pub delta_f_pucch_format1b_cs: DeltaFPucchFormat1bCs,
}

impl Writable for UplinkPowerControlCommonV1020 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.delta_f_pucch_format3)?;
        writer.write(&self.delta_f_pucch_format1b_cs)
    }
}

impl Readable for UplinkPowerControlCommonV1020 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(UplinkPowerControlCommonV1020 {
            delta_f_pucch_format3: reader.read()?,
            delta_f_pucch_format1b_cs: reader.read()?,
        })
    }
}

/// The Rel-10 extension group of both radio resource config variants, which has
/// `uplinkPowerControlCommon-v1020` as its only member
#[derive(Debug, Clone, Copy)]
struct UplinkPowerControlCommonGroup(UplinkPowerControlCommonV1020);

impl UplinkPowerControlCommonGroup {
    fn slot(value: &Option<UplinkPowerControlCommonV1020>) -> Option<Self> {
        value.map(UplinkPowerControlCommonGroup)
    }
}

impl Writable for UplinkPowerControlCommonGroup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[true])?;
        writer.write(&self.0)
    }
}

fn read_uplink_power_control_common_group(
    reader: &mut UperReader<'_>,
) -> Result<Option<UplinkPowerControlCommonV1020>, Error> {
    let [present] = reader.read_presence()?;
    if present {
        Ok(Some(reader.read()?))
    } else {
        Ok(None)
    }
}

enumerated! {
    pub enum AntennaPortsCount: "AntennaInfoCommon-antennaPortsCount", numeric u8 {
        An1 = "an1" => 1,
        An2 = "an2" => 2,
        An4 = "an4" => 4,
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum SubframeAssignment: "TDD-Config-subframeAssignment" {
        Sa0 = "sa0",
        Sa1 = "sa1",
        Sa2 = "sa2",
        Sa3 = "sa3",
        Sa4 = "sa4",
        Sa5 = "sa5",
        Sa6 = "sa6",
    }
}

enumerated! {
    pub enum SpecialSubframePatterns: "TDD-Config-specialSubframePatterns" {
        Ssp0 = "ssp0",
        Ssp1 = "ssp1",
        Ssp2 = "ssp2",
        Ssp3 = "ssp3",
        Ssp4 = "ssp4",
        Ssp5 = "ssp5",
        Ssp6 = "ssp6",
        Ssp7 = "ssp7",
        Ssp8 = "ssp8",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TddConfig {
    pub subframe_assignment: SubframeAssignment,
    pub special_subframe_patterns: SpecialSubframePatterns,
}

impl Writable for TddConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.subframe_assignment)?;
        writer.write(&self.special_subframe_patterns)
    }
}

impl Readable for TddConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(TddConfig {
            subframe_assignment: reader.read()?,
            special_subframe_patterns: reader.read()?,
        })
    }
}

enumerated! {
    pub enum UlCyclicPrefixLength: "UL-CyclicPrefixLength" {
        Len1 = "len1",
        Len2 = "len2",
    }
}

/// `P-Max ::= INTEGER (-30..33)`
pub type PMax = i8;

/// The common radio resource configuration broadcast in SIB2
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioResourceConfigCommonSib {
    pub rach_config_common: RachConfigCommon,
    pub modification_period_coeff: ModificationPeriodCoeff,
    pub pcch_config: PcchConfig,
    pub prach_config: PrachConfigSib,
    pub pdsch_config_common: PdschConfigCommon,
    pub pusch_config_common: PuschConfigCommon,
    pub pucch_config_common: PucchConfigCommon,
    pub sounding_rs_ul_config_common: SoundingRsUlConfigCommon,
    pub uplink_power_control_common: UplinkPowerControlCommon,
    pub ul_cyclic_prefix_length: UlCyclicPrefixLength,
    pub uplink_power_control_common_v1020: Option<UplinkPowerControlCommonV1020>,
}

impl Writable for RadioResourceConfigCommonSib {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let group = UplinkPowerControlCommonGroup::slot(&self.uplink_power_control_common_v1020);
        let additions = [addition(&group)];
        writer.write_extension_marker(&additions)?;
        writer.write(&self.rach_config_common)?;
        writer.write(&self.modification_period_coeff)?;
        writer.write(&self.pcch_config)?;
        writer.write(&self.prach_config)?;
        writer.write(&self.pdsch_config_common)?;
        writer.write(&self.pusch_config_common)?;
        writer.write(&self.pucch_config_common)?;
        writer.write(&self.sounding_rs_ul_config_common)?;
        writer.write(&self.uplink_power_control_common)?;
        writer.write(&self.ul_cyclic_prefix_length)?;
        writer.write_extension_additions(&additions)
    }
}

impl Readable for RadioResourceConfigCommonSib {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let mut value = RadioResourceConfigCommonSib {
            rach_config_common: reader.read()?,
            modification_period_coeff: reader.read()?,
            pcch_config: reader.read()?,
            prach_config: reader.read()?,
            pdsch_config_common: reader.read()?,
            pusch_config_common: reader.read()?,
            pucch_config_common: reader.read()?,
            sounding_rs_ul_config_common: reader.read()?,
            uplink_power_control_common: reader.read()?,
            ul_cyclic_prefix_length: reader.read()?,
            uplink_power_control_common_v1020: None,
        };
        reader.read_extension_additions(
            "RadioResourceConfigCommonSIB",
            extended,
            1,
            |_, reader| {
                value.uplink_power_control_common_v1020 =
                    read_uplink_power_control_common_group(reader)?;
                Ok(())
            },
        )?;
        Ok(value)
    }
}

/// The common radio resource configuration of the target cell of a handover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioResourceConfigCommon {
    pub rach_config_common: Option<RachConfigCommon>,
    pub prach_config: PrachConfig,
    pub pdsch_config_common: Option<PdschConfigCommon>,
    pub pusch_config_common: PuschConfigCommon,
    pub phich_config: Option<PhichConfig>,
    pub pucch_config_common: Option<PucchConfigCommon>,
    pub sounding_rs_ul_config_common: Option<SoundingRsUlConfigCommon>,
    pub uplink_power_control_common: Option<UplinkPowerControlCommon>,
    pub antenna_ports_count: Option<AntennaPortsCount>,
    pub p_max: Option<PMax>,
    pub tdd_config: Option<TddConfig>,
    pub ul_cyclic_prefix_length: UlCyclicPrefixLength,
    pub uplink_power_control_common_v1020: Option<UplinkPowerControlCommonV1020>,
}

impl RadioResourceConfigCommon {
    const NAME: &'static str = "RadioResourceConfigCommon";
}

impl Writable for RadioResourceConfigCommon {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let group = UplinkPowerControlCommonGroup::slot(&self.uplink_power_control_common_v1020);
        let additions = [addition(&group)];
        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.rach_config_common.is_some(),
            self.pdsch_config_common.is_some(),
            self.phich_config.is_some(),
            self.pucch_config_common.is_some(),
            self.sounding_rs_ul_config_common.is_some(),
            self.uplink_power_control_common.is_some(),
            self.antenna_ports_count.is_some(),
            self.p_max.is_some(),
            self.tdd_config.is_some(),
        ])?;
        if let Some(value) = &self.rach_config_common {
            writer.write(value)?;
        }
        writer.write(&self.prach_config)?;
        if let Some(value) = &self.pdsch_config_common {
            writer.write(value)?;
        }
        writer.write(&self.pusch_config_common)?;
        if let Some(value) = &self.phich_config {
            writer.write(value)?;
        }
        if let Some(value) = &self.pucch_config_common {
            writer.write(value)?;
        }
        if let Some(value) = &self.sounding_rs_ul_config_common {
            writer.write(value)?;
        }
        if let Some(value) = &self.uplink_power_control_common {
            writer.write(value)?;
        }
        if let Some(value) = &self.antenna_ports_count {
            writer.write(value)?;
        }
        if let Some(value) = self.p_max {
            writer.write_int(value, -30, 33)?;
        }
        if let Some(value) = &self.tdd_config {
            writer.write(value)?;
        }
        writer.write(&self.ul_cyclic_prefix_length)?;
        writer.write_extension_additions(&additions)
    }
}

impl Readable for RadioResourceConfigCommon {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [rach, pdsch, phich, pucch, srs, ul_power, antenna, p_max, tdd] =
            reader.read_presence()?;
        let mut value = RadioResourceConfigCommon {
            rach_config_common: if rach { Some(reader.read()?) } else { None },
            prach_config: reader.read()?,
            pdsch_config_common: if pdsch { Some(reader.read()?) } else { None },
            pusch_config_common: reader.read()?,
            phich_config: if phich { Some(reader.read()?) } else { None },
            pucch_config_common: if pucch { Some(reader.read()?) } else { None },
            sounding_rs_ul_config_common: if srs { Some(reader.read()?) } else { None },
            uplink_power_control_common: if ul_power { Some(reader.read()?) } else { None },
            antenna_ports_count: if antenna { Some(reader.read()?) } else { None },
            p_max: if p_max { Some(reader.read_int(-30, 33)?) } else { None },
            tdd_config: if tdd { Some(reader.read()?) } else { None },
            ul_cyclic_prefix_length: reader.read()?,
            uplink_power_control_common_v1020: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            value.uplink_power_control_common_v1020 =
                read_uplink_power_control_common_group(reader)?;
            Ok(())
        })?;
        Ok(value)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_rach_config_common() -> RachConfigCommon {
        RachConfigCommon {
            number_of_ra_preambles: NumberOfRaPreambles::N52,
            preambles_group_a_config: None,
            power_ramping_step: PowerRampingStep::Db2,
            preamble_initial_received_target_power: PreambleInitialReceivedTargetPower::DbmMinus104,
            preamble_trans_max: PreambleTransMax::N10,
            ra_response_window_size: RaResponseWindowSize::Sf10,
            mac_contention_resolution_timer: MacContentionResolutionTimer::Sf64,
            max_harq_msg3_tx: 4,
        }
    }

    pub(crate) fn sample_pusch_config_common() -> PuschConfigCommon {
        PuschConfigCommon {
            n_sb: 1,
            hopping_mode: HoppingMode::InterSubFrame,
            pusch_hopping_offset: 4,
            enable_64qam: false,
            ul_reference_signals_pusch: UlReferenceSignalsPusch {
                group_hopping_enabled: false,
                group_assignment_pusch: 0,
                sequence_hopping_enabled: false,
                cyclic_shift: 0,
            },
        }
    }

    pub(crate) fn sample_uplink_power_control_common() -> UplinkPowerControlCommon {
        UplinkPowerControlCommon {
            p0_nominal_pusch: -85,
            alpha: Alpha::Al07,
            p0_nominal_pucch: -117,
            delta_f_list_pucch: DeltaFListPucch {
                format1: DeltaFPucchFormat1::DeltaF0,
                format1b: DeltaFPucchFormat1b::DeltaF3,
                format2: DeltaFPucchFormat2::DeltaF1,
                format2a: DeltaFPucchFormat1::DeltaF2,
                format2b: DeltaFPucchFormat1::DeltaFMinus2,
            },
            delta_preamble_msg3: 4,
        }
    }

    /// A typical SIB2 radio resource configuration of a 10 MHz FDD cell
    pub(crate) fn sample_config_common_sib() -> RadioResourceConfigCommonSib {
        RadioResourceConfigCommonSib {
            rach_config_common: sample_rach_config_common(),
            modification_period_coeff: ModificationPeriodCoeff::N4,
            pcch_config: PcchConfig {
                default_paging_cycle: DefaultPagingCycle::Rf128,
                nb: PagingNb::OneT,
            },
            prach_config: PrachConfigSib {
                root_sequence_index: 22,
                prach_config_info: PrachConfigInfo {
                    prach_config_index: 3,
                    high_speed_flag: false,
                    zero_correlation_zone_config: 5,
                    prach_freq_offset: 2,
                },
            },
            pdsch_config_common: PdschConfigCommon {
                reference_signal_power: 18,
                p_b: 1,
            },
            pusch_config_common: sample_pusch_config_common(),
            pucch_config_common: PucchConfigCommon {
                delta_pucch_shift: DeltaPucchShift::Ds1,
                n_rb_cqi: 2,
                n_cs_an: 0,
                n1_pucch_an: 36,
            },
            sounding_rs_ul_config_common: SetupRelease::Release,
            uplink_power_control_common: sample_uplink_power_control_common(),
            ul_cyclic_prefix_length: UlCyclicPrefixLength::Len1,
            uplink_power_control_common_v1020: None,
        }
    }

    #[test]
    fn test_rach_config_common_layout() {
        let mut writer = UperWriter::default();
        writer.write(&sample_rach_config_common()).unwrap();
        // ext, presence, preambles, step, target power, trans max, window, timer, msg3
        assert_eq!(1 + 1 + 4 + 2 + 4 + 4 + 3 + 3 + 3, writer.finish());
    }

    #[test]
    fn test_config_common_sib_with_power_control_group() {
        let mut config = sample_config_common_sib();
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        assert_eq!(config, writer.as_reader().read().unwrap());

        config.uplink_power_control_common_v1020 = Some(UplinkPowerControlCommonV1020 {
            delta_f_pucch_format3: DeltaFPucchFormat3::DeltaF6,
            delta_f_pucch_format1b_cs: DeltaFPucchFormat1bCs::Spare1,
        });
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        let mut reader = writer.as_reader();
        assert_eq!(config, reader.read().unwrap());
        assert_eq!(0, reader.remaining_bits());
    }

    #[test]
    fn test_config_common_for_handover() {
        let config = RadioResourceConfigCommon {
            rach_config_common: Some(sample_rach_config_common()),
            prach_config: PrachConfig {
                root_sequence_index: 837,
                prach_config_info: None,
            },
            pdsch_config_common: None,
            pusch_config_common: sample_pusch_config_common(),
            phich_config: Some(PhichConfig {
                phich_duration: PhichDuration::Extended,
                phich_resource: PhichResource::OneSixth,
            }),
            pucch_config_common: None,
            sounding_rs_ul_config_common: None,
            uplink_power_control_common: Some(sample_uplink_power_control_common()),
            antenna_ports_count: Some(AntennaPortsCount::An2),
            p_max: Some(-30),
            tdd_config: None,
            ul_cyclic_prefix_length: UlCyclicPrefixLength::Len2,
            uplink_power_control_common_v1020: None,
        };
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        assert_eq!(config, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_root_sequence_index_out_of_range_is_rejected() {
        let mut writer = UperWriter::default();
        let prach = PrachConfig {
            root_sequence_index: 838,
            prach_config_info: None,
        };
        assert!(writer.write(&prach).is_err());
    }
}
