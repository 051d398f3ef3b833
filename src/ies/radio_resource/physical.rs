//! `PhysicalConfigDedicated` and the physical layer IEs it carries, including the Rel-9 and
//! Rel-10 extension groups.

use crate::ies::common::{CRnti, FilterCoefficient};
use crate::ies::radio_resource::mac::{read_n1_pucch_an_list, write_n1_pucch_an_list};
use crate::io::per::Error;
use crate::syn::bitstring::BitString;
use crate::syn::choice::{ExplicitOrDefault, SetupRelease};
use crate::syn::extension::{addition, OpaqueExtension};
use crate::syn::{Readable, UperReader, UperWriter, Writable, WriteWith};

enumerated! {
    pub enum Pa: "p-a", numeric f32 {
        DbMinus6 = "dB-6" => -6.0,
        DbMinus4dot77 = "dB-4dot77" => -4.77,
        DbMinus3 = "dB-3" => -3.0,
        DbMinus1dot77 = "dB-1dot77" => -1.77,
        Db0 = "dB0" => 0.0,
        Db1 = "dB1" => 1.0,
        Db2 = "dB2" => 2.0,
        Db3 = "dB3" => 3.0,
    }
}

enumerated! {
    pub enum RepetitionFactor: "repetitionFactor", numeric u8 {
        N2 = "n2" => 2,
        N4 = "n4" => 4,
        N6 = "n6" => 6,
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum TddAckNackFeedbackMode: "tdd-AckNackFeedbackMode" {
        Bundling = "bundling",
        Multiplexing = "multiplexing",
    }
}

enumerated! {
    pub enum DeltaMcsEnabled: "deltaMCS-Enabled", numeric f32 {
        En0 = "en0" => 0.0,
        En1 = "en1" => 1.25,
    }
}

enumerated! {
    pub enum CqiReportModeAperiodic: "CQI-ReportModeAperiodic" {
        Rm12 = "rm12",
        Rm20 = "rm20",
        Rm22 = "rm22",
        Rm30 = "rm30",
        Rm31 = "rm31",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum SrsBandwidth: "srs-Bandwidth", numeric u8 {
        Bw0 = "bw0" => 0,
        Bw1 = "bw1" => 1,
        Bw2 = "bw2" => 2,
        Bw3 = "bw3" => 3,
    }
}

enumerated! {
    pub enum SrsHoppingBandwidth: "srs-HoppingBandwidth", numeric u8 {
        Hbw0 = "hbw0" => 0,
        Hbw1 = "hbw1" => 1,
        Hbw2 = "hbw2" => 2,
        Hbw3 = "hbw3" => 3,
    }
}

enumerated! {
    pub enum CyclicShift: "cyclicShift", numeric u8 {
        Cs0 = "cs0" => 0,
        Cs1 = "cs1" => 1,
        Cs2 = "cs2" => 2,
        Cs3 = "cs3" => 3,
        Cs4 = "cs4" => 4,
        Cs5 = "cs5" => 5,
        Cs6 = "cs6" => 6,
        Cs7 = "cs7" => 7,
    }
}

enumerated! {
    pub enum TransmissionMode: "transmissionMode", numeric u8 {
        Tm1 = "tm1" => 1,
        Tm2 = "tm2" => 2,
        Tm3 = "tm3" => 3,
        Tm4 = "tm4" => 4,
        Tm5 = "tm5" => 5,
        Tm6 = "tm6" => 6,
        Tm7 = "tm7" => 7,
        Tm8 = "tm8-v920" => 8,
    }
}

enumerated! {
    pub enum UeTransmitAntennaSelection: "ue-TransmitAntennaSelection" {
        ClosedLoop = "closedLoop",
        OpenLoop = "openLoop",
    }
}

enumerated! {
    pub enum DsrTransMax: "dsr-TransMax", numeric u8 {
        N4 = "n4" => 4,
        N8 = "n8" => 8,
        N16 = "n16" => 16,
        N32 = "n32" => 32,
        N64 = "n64" => 64,
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum TransmissionModeR10: "transmissionMode-r10", numeric u8 {
        Tm1 = "tm1" => 1,
        Tm2 = "tm2" => 2,
        Tm3 = "tm3" => 3,
        Tm4 = "tm4" => 4,
        Tm5 = "tm5" => 5,
        Tm6 = "tm6" => 6,
        Tm7 = "tm7" => 7,
        Tm8 = "tm8-v920" => 8,
        Tm9 = "tm9-v1020" => 9,
        Spare7 = "spare7",
        Spare6 = "spare6",
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum TransmissionModeUl: "transmissionModeUL-r10", numeric u8 {
        Tm1 = "tm1" => 1,
        Tm2 = "tm2" => 2,
        Spare6 = "spare6",
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum SrsAntennaPort: "SRS-AntennaPort", numeric u8 {
        An1 = "an1" => 1,
        An2 = "an2" => 2,
        An4 = "an4" => 4,
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum DeltaTxDOffset: "deltaTxD-OffsetPUCCH-r10", numeric i8 {
        Db0 = "dB0" => 0,
        DbMinus2 = "dB-2" => -2,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdschConfigDedicated {
    pub p_a: Pa,
}

impl Writable for PdschConfigDedicated {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.p_a)
    }
}

impl Readable for PdschConfigDedicated {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PdschConfigDedicated { p_a: reader.read()? })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckNackRepetitionSetup {
    pub repetition_factor: RepetitionFactor,
    /// 0..2047
    pub n1_pucch_an_rep: u16,
}

impl Writable for AckNackRepetitionSetup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.repetition_factor)?;
        writer.write_int(self.n1_pucch_an_rep, 0, 2047)
    }
}

impl Readable for AckNackRepetitionSetup {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(AckNackRepetitionSetup {
            repetition_factor: reader.read()?,
            n1_pucch_an_rep: reader.read_int(0, 2047)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PucchConfigDedicated {
    pub ack_nack_repetition: SetupRelease<AckNackRepetitionSetup>,
    pub tdd_ack_nack_feedback_mode: Option<TddAckNackFeedbackMode>,
}

impl Writable for PucchConfigDedicated {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.tdd_ack_nack_feedback_mode.is_some()])?;
        writer.write(&self.ack_nack_repetition)?;
        if let Some(mode) = &self.tdd_ack_nack_feedback_mode {
            writer.write(mode)?;
        }
        Ok(())
    }
}

impl Readable for PucchConfigDedicated {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [mode] = reader.read_presence()?;
        Ok(PucchConfigDedicated {
            ack_nack_repetition: reader.read()?,
            tdd_ack_nack_feedback_mode: if mode { Some(reader.read()?) } else { None },
        })
    }
}

/// Three `betaOffset` indices, each 0..15
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetaOffsets {
    pub ack_index: u8,
    pub ri_index: u8,
    pub cqi_index: u8,
}

impl Writable for BetaOffsets {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.ack_index, 0, 15)?;
        writer.write_int(self.ri_index, 0, 15)?;
        writer.write_int(self.cqi_index, 0, 15)
    }
}

impl Readable for BetaOffsets {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(BetaOffsets {
            ack_index: reader.read_int(0, 15)?,
            ri_index: reader.read_int(0, 15)?,
            cqi_index: reader.read_int(0, 15)?,
        })
    }
}

/// `PUSCH-ConfigDedicated` only consists of its beta offsets
pub type PuschConfigDedicated = BetaOffsets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UplinkPowerControlDedicated {
    /// -8..7
    pub p0_ue_pusch: i8,
    pub delta_mcs_enabled: DeltaMcsEnabled,
    pub accumulation_enabled: bool,
    /// -8..7
    pub p0_ue_pucch: i8,
    /// 0..15
    pub p_srs_offset: u8,
    /// `None` stands for the default `fc4`
    pub filter_coefficient: Option<FilterCoefficient>,
}

impl Writable for UplinkPowerControlDedicated {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.filter_coefficient.is_some()])?;
        writer.write_int(self.p0_ue_pusch, -8, 7)?;
        writer.write(&self.delta_mcs_enabled)?;
        writer.write_bit(self.accumulation_enabled)?;
        writer.write_int(self.p0_ue_pucch, -8, 7)?;
        writer.write_int(self.p_srs_offset, 0, 15)?;
        if let Some(coefficient) = &self.filter_coefficient {
            writer.write(coefficient)?;
        }
        Ok(())
    }
}

impl Readable for UplinkPowerControlDedicated {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [filter_coefficient] = reader.read_presence()?;
        Ok(UplinkPowerControlDedicated {
            p0_ue_pusch: reader.read_int(-8, 7)?,
            delta_mcs_enabled: reader.read()?,
            accumulation_enabled: reader.read_bit()?,
            p0_ue_pucch: reader.read_int(-8, 7)?,
            p_srs_offset: reader.read_int(0, 15)?,
            filter_coefficient: if filter_coefficient {
                Some(reader.read()?)
            } else {
                None
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TpcIndex {
    /// 1..15
    IndexOfFormat3(u8),
    /// 1..31
    IndexOfFormat3A(u8),
}

impl Writable for TpcIndex {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            TpcIndex::IndexOfFormat3(index) => {
                writer.write_choice_index("TPC-Index", 0, 2, false)?;
                writer.write_int(*index, 1, 15)
            }
            TpcIndex::IndexOfFormat3A(index) => {
                writer.write_choice_index("TPC-Index", 1, 2, false)?;
                writer.write_int(*index, 1, 31)
            }
        }
    }
}

impl Readable for TpcIndex {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("TPC-Index", 2, false)? {
            0 => Ok(TpcIndex::IndexOfFormat3(reader.read_int(1, 15)?)),
            _ => Ok(TpcIndex::IndexOfFormat3A(reader.read_int(1, 31)?)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TpcPdcchConfigSetup {
    pub tpc_rnti: CRnti,
    pub tpc_index: TpcIndex,
}

impl Writable for TpcPdcchConfigSetup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_bits(u64::from(self.tpc_rnti), 16)?;
        writer.write(&self.tpc_index)
    }
}

impl Readable for TpcPdcchConfigSetup {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(TpcPdcchConfigSetup {
            tpc_rnti: reader.read_bits(16)?,
            tpc_index: reader.read()?,
        })
    }
}

pub type TpcPdcchConfig = SetupRelease<TpcPdcchConfigSetup>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CqiFormatIndicatorPeriodic {
    WidebandCqi,
    /// `k` of 1..4
    SubbandCqi(u8),
}

impl Writable for CqiFormatIndicatorPeriodic {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            CqiFormatIndicatorPeriodic::WidebandCqi => {
                writer.write_choice_index("cqi-FormatIndicatorPeriodic", 0, 2, false)
            }
            CqiFormatIndicatorPeriodic::SubbandCqi(k) => {
                writer.write_choice_index("cqi-FormatIndicatorPeriodic", 1, 2, false)?;
                writer.write_int(*k, 1, 4)
            }
        }
    }
}

impl Readable for CqiFormatIndicatorPeriodic {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("cqi-FormatIndicatorPeriodic", 2, false)? {
            0 => Ok(CqiFormatIndicatorPeriodic::WidebandCqi),
            _ => Ok(CqiFormatIndicatorPeriodic::SubbandCqi(reader.read_int(1, 4)?)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CqiReportPeriodicSetup {
    /// 0..1185
    pub cqi_pucch_resource_index: u16,
    /// 0..1023
    pub cqi_pmi_config_index: u16,
    pub cqi_format_indicator_periodic: CqiFormatIndicatorPeriodic,
    /// 0..1023
    pub ri_config_index: Option<u16>,
    pub simultaneous_ack_nack_and_cqi: bool,
}

impl Writable for CqiReportPeriodicSetup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.ri_config_index.is_some()])?;
        writer.write_int(self.cqi_pucch_resource_index, 0, 1185)?;
        writer.write_int(self.cqi_pmi_config_index, 0, 1023)?;
        writer.write(&self.cqi_format_indicator_periodic)?;
        if let Some(index) = self.ri_config_index {
            writer.write_int(index, 0, 1023)?;
        }
        writer.write_bit(self.simultaneous_ack_nack_and_cqi)
    }
}

impl Readable for CqiReportPeriodicSetup {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [ri_config_index] = reader.read_presence()?;
        Ok(CqiReportPeriodicSetup {
            cqi_pucch_resource_index: reader.read_int(0, 1185)?,
            cqi_pmi_config_index: reader.read_int(0, 1023)?,
            cqi_format_indicator_periodic: reader.read()?,
            ri_config_index: if ri_config_index {
                Some(reader.read_int(0, 1023)?)
            } else {
                None
            },
            simultaneous_ack_nack_and_cqi: reader.read_bit()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CqiReportConfig {
    pub cqi_report_mode_aperiodic: Option<CqiReportModeAperiodic>,
    /// -1..6
    pub nom_pdsch_rs_epre_offset: i8,
    pub cqi_report_periodic: Option<SetupRelease<CqiReportPeriodicSetup>>,
}

impl Writable for CqiReportConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.cqi_report_mode_aperiodic.is_some(),
            self.cqi_report_periodic.is_some(),
        ])?;
        if let Some(mode) = &self.cqi_report_mode_aperiodic {
            writer.write(mode)?;
        }
        writer.write_int(self.nom_pdsch_rs_epre_offset, -1, 6)?;
        if let Some(periodic) = &self.cqi_report_periodic {
            writer.write(periodic)?;
        }
        Ok(())
    }
}

impl Readable for CqiReportConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [aperiodic, periodic] = reader.read_presence()?;
        Ok(CqiReportConfig {
            cqi_report_mode_aperiodic: if aperiodic { Some(reader.read()?) } else { None },
            nom_pdsch_rs_epre_offset: reader.read_int(-1, 6)?,
            cqi_report_periodic: if periodic { Some(reader.read()?) } else { None },
        })
    }
}

/// Both members are `ENUMERATED {setup}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CqiReportConfigV920 {
    pub cqi_mask: bool,
    pub pmi_ri_report: bool,
}

impl Writable for CqiReportConfigV920 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.cqi_mask, self.pmi_ri_report])
    }
}

impl Readable for CqiReportConfigV920 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [cqi_mask, pmi_ri_report] = reader.read_presence()?;
        Ok(CqiReportConfigV920 {
            cqi_mask,
            pmi_ri_report,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundingRsUlConfigDedicatedSetup {
    pub srs_bandwidth: SrsBandwidth,
    pub srs_hopping_bandwidth: SrsHoppingBandwidth,
    /// 0..23
    pub freq_domain_position: u8,
    pub duration: bool,
    /// 0..1023
    pub srs_config_index: u16,
    /// 0..1
    pub transmission_comb: u8,
    pub cyclic_shift: CyclicShift,
}

impl Writable for SoundingRsUlConfigDedicatedSetup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.srs_bandwidth)?;
        writer.write(&self.srs_hopping_bandwidth)?;
        writer.write_int(self.freq_domain_position, 0, 23)?;
        writer.write_bit(self.duration)?;
        writer.write_int(self.srs_config_index, 0, 1023)?;
        writer.write_int(self.transmission_comb, 0, 1)?;
        writer.write(&self.cyclic_shift)
    }
}

impl Readable for SoundingRsUlConfigDedicatedSetup {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(SoundingRsUlConfigDedicatedSetup {
            srs_bandwidth: reader.read()?,
            srs_hopping_bandwidth: reader.read()?,
            freq_domain_position: reader.read_int(0, 23)?,
            duration: reader.read_bit()?,
            srs_config_index: reader.read_int(0, 1023)?,
            transmission_comb: reader.read_int(0, 1)?,
            cyclic_shift: reader.read()?,
        })
    }
}

pub type SoundingRsUlConfigDedicated = SetupRelease<SoundingRsUlConfigDedicatedSetup>;

/// `codebookSubsetRestriction` of `AntennaInfoDedicated`, each alternative a fixed size bit
/// string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodebookSubsetRestriction {
    N2TxAntennaTm3(u8),
    N4TxAntennaTm3(u8),
    N2TxAntennaTm4(u8),
    N4TxAntennaTm4(u64),
    N2TxAntennaTm5(u8),
    N4TxAntennaTm5(u16),
    N2TxAntennaTm6(u8),
    N4TxAntennaTm6(u16),
}

impl CodebookSubsetRestriction {
    const NAME: &'static str = "codebookSubsetRestriction";
    const WIDTHS: [usize; 8] = [2, 4, 6, 64, 4, 16, 4, 16];

    fn index_and_bits(&self) -> (u64, u64) {
        match *self {
            CodebookSubsetRestriction::N2TxAntennaTm3(bits) => (0, u64::from(bits)),
            CodebookSubsetRestriction::N4TxAntennaTm3(bits) => (1, u64::from(bits)),
            CodebookSubsetRestriction::N2TxAntennaTm4(bits) => (2, u64::from(bits)),
            CodebookSubsetRestriction::N4TxAntennaTm4(bits) => (3, bits),
            CodebookSubsetRestriction::N2TxAntennaTm5(bits) => (4, u64::from(bits)),
            CodebookSubsetRestriction::N4TxAntennaTm5(bits) => (5, u64::from(bits)),
            CodebookSubsetRestriction::N2TxAntennaTm6(bits) => (6, u64::from(bits)),
            CodebookSubsetRestriction::N4TxAntennaTm6(bits) => (7, u64::from(bits)),
        }
    }
}

impl Writable for CodebookSubsetRestriction {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let (index, bits) = self.index_and_bits();
        writer.write_choice_index(Self::NAME, index, 8, false)?;
        writer.write_bits(bits, Self::WIDTHS[index as usize])
    }
}

impl Readable for CodebookSubsetRestriction {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let index = reader.read_choice_index(Self::NAME, 8, false)?;
        let width = Self::WIDTHS[index as usize];
        Ok(match index {
            0 => CodebookSubsetRestriction::N2TxAntennaTm3(reader.read_bits(width)?),
            1 => CodebookSubsetRestriction::N4TxAntennaTm3(reader.read_bits(width)?),
            2 => CodebookSubsetRestriction::N2TxAntennaTm4(reader.read_bits(width)?),
            3 => CodebookSubsetRestriction::N4TxAntennaTm4(reader.read_bits(width)?),
            4 => CodebookSubsetRestriction::N2TxAntennaTm5(reader.read_bits(width)?),
            5 => CodebookSubsetRestriction::N4TxAntennaTm5(reader.read_bits(width)?),
            6 => CodebookSubsetRestriction::N2TxAntennaTm6(reader.read_bits(width)?),
            _ => CodebookSubsetRestriction::N4TxAntennaTm6(reader.read_bits(width)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntennaInfoDedicated {
    pub transmission_mode: TransmissionMode,
    pub codebook_subset_restriction: Option<CodebookSubsetRestriction>,
    pub ue_transmit_antenna_selection: SetupRelease<UeTransmitAntennaSelection>,
}

impl Writable for AntennaInfoDedicated {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.codebook_subset_restriction.is_some()])?;
        writer.write(&self.transmission_mode)?;
        if let Some(restriction) = &self.codebook_subset_restriction {
            writer.write(restriction)?;
        }
        writer.write(&self.ue_transmit_antenna_selection)
    }
}

impl Readable for AntennaInfoDedicated {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [restriction] = reader.read_presence()?;
        Ok(AntennaInfoDedicated {
            transmission_mode: reader.read()?,
            codebook_subset_restriction: if restriction { Some(reader.read()?) } else { None },
            ue_transmit_antenna_selection: reader.read()?,
        })
    }
}

/// `codebookSubsetRestriction-v920` for transmission mode 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodebookSubsetRestrictionV920 {
    /// 6 bits
    N2TxAntennaTm8(u8),
    /// 32 bits
    N4TxAntennaTm8(u32),
}

impl Writable for CodebookSubsetRestrictionV920 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            CodebookSubsetRestrictionV920::N2TxAntennaTm8(bits) => {
                writer.write_choice_index("codebookSubsetRestriction-v920", 0, 2, false)?;
                writer.write_bits(u64::from(*bits), 6)
            }
            CodebookSubsetRestrictionV920::N4TxAntennaTm8(bits) => {
                writer.write_choice_index("codebookSubsetRestriction-v920", 1, 2, false)?;
                writer.write_bits(u64::from(*bits), 32)
            }
        }
    }
}

impl Readable for CodebookSubsetRestrictionV920 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("codebookSubsetRestriction-v920", 2, false)? {
            0 => Ok(CodebookSubsetRestrictionV920::N2TxAntennaTm8(reader.read_bits(6)?)),
            _ => Ok(CodebookSubsetRestrictionV920::N4TxAntennaTm8(reader.read_bits(32)?)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AntennaInfoDedicatedV920 {
    pub codebook_subset_restriction: Option<CodebookSubsetRestrictionV920>,
}

impl Writable for AntennaInfoDedicatedV920 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.codebook_subset_restriction.is_some()])?;
        if let Some(restriction) = &self.codebook_subset_restriction {
            writer.write(restriction)?;
        }
        Ok(())
    }
}

impl Readable for AntennaInfoDedicatedV920 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [restriction] = reader.read_presence()?;
        Ok(AntennaInfoDedicatedV920 {
            codebook_subset_restriction: if restriction { Some(reader.read()?) } else { None },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntennaInfoDedicatedR10 {
    pub transmission_mode: TransmissionModeR10,
    /// Unconstrained in size
    pub codebook_subset_restriction: Option<BitString>,
    pub ue_transmit_antenna_selection: SetupRelease<UeTransmitAntennaSelection>,
}

impl Writable for AntennaInfoDedicatedR10 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.codebook_subset_restriction.is_some()])?;
        writer.write(&self.transmission_mode)?;
        if let Some(restriction) = &self.codebook_subset_restriction {
            restriction.write_sized(writer, 0, u64::MAX)?;
        }
        writer.write(&self.ue_transmit_antenna_selection)
    }
}

impl Readable for AntennaInfoDedicatedR10 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [restriction] = reader.read_presence()?;
        Ok(AntennaInfoDedicatedR10 {
            transmission_mode: reader.read()?,
            codebook_subset_restriction: if restriction {
                Some(BitString::read_sized(reader, 0, u64::MAX)?)
            } else {
                None
            },
            ue_transmit_antenna_selection: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AntennaInfoUlR10 {
    pub transmission_mode_ul: Option<TransmissionModeUl>,
    /// `ENUMERATED {setup}`
    pub four_antenna_port_activated: bool,
}

impl Writable for AntennaInfoUlR10 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.transmission_mode_ul.is_some(),
            self.four_antenna_port_activated,
        ])?;
        if let Some(mode) = &self.transmission_mode_ul {
            writer.write(mode)?;
        }
        Ok(())
    }
}

impl Readable for AntennaInfoUlR10 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [mode, four_antenna_port_activated] = reader.read_presence()?;
        Ok(AntennaInfoUlR10 {
            transmission_mode_ul: if mode { Some(reader.read()?) } else { None },
            four_antenna_port_activated,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingRequestConfigSetup {
    /// 0..2047
    pub sr_pucch_resource_index: u16,
    /// 0..157
    pub sr_config_index: u8,
    pub dsr_trans_max: DsrTransMax,
}

impl Writable for SchedulingRequestConfigSetup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.sr_pucch_resource_index, 0, 2047)?;
        writer.write_int(self.sr_config_index, 0, 157)?;
        writer.write(&self.dsr_trans_max)
    }
}

impl Readable for SchedulingRequestConfigSetup {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(SchedulingRequestConfigSetup {
            sr_pucch_resource_index: reader.read_int(0, 2047)?,
            sr_config_index: reader.read_int(0, 157)?,
            dsr_trans_max: reader.read()?,
        })
    }
}

pub type SchedulingRequestConfig = SetupRelease<SchedulingRequestConfigSetup>;

fn write_n3_pucch_an_list(writer: &mut UperWriter, list: &[u16]) -> Result<(), Error> {
    writer.write_sequence_of_with(list, 1, 4, |w, value| w.write_int(*value, 0, 549))
}

fn read_n3_pucch_an_list(reader: &mut UperReader<'_>) -> Result<Vec<u16>, Error> {
    reader.read_sequence_of_with(1, 4, |r| r.read_int(0, 549))
}

/// `PUCCH-Format3-Conf-r10`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PucchFormat3Conf {
    /// 1..4 resources, each 0..549
    pub n3_pucch_an_list: Option<Vec<u16>>,
    /// `twoAntennaPortActivatedPUCCH-Format3-r10`, the resources for antenna port one
    pub two_antenna_port_activated: Option<SetupRelease<Vec<u16>>>,
}

impl Writable for PucchFormat3Conf {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.n3_pucch_an_list.is_some(),
            self.two_antenna_port_activated.is_some(),
        ])?;
        if let Some(list) = &self.n3_pucch_an_list {
            write_n3_pucch_an_list(writer, list)?;
        }
        match &self.two_antenna_port_activated {
            None => Ok(()),
            Some(SetupRelease::Release) => writer.write_choice_index("SetupRelease", 0, 2, false),
            Some(SetupRelease::Setup(list)) => {
                writer.write_choice_index("SetupRelease", 1, 2, false)?;
                write_n3_pucch_an_list(writer, list)
            }
        }
    }
}

impl Readable for PucchFormat3Conf {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [list, two_antenna_port] = reader.read_presence()?;
        Ok(PucchFormat3Conf {
            n3_pucch_an_list: if list { Some(read_n3_pucch_an_list(reader)?) } else { None },
            two_antenna_port_activated: if two_antenna_port {
                Some(match reader.read_choice_index("SetupRelease", 2, false)? {
                    0 => SetupRelease::Release,
                    _ => SetupRelease::Setup(read_n3_pucch_an_list(reader)?),
                })
            } else {
                None
            },
        })
    }
}

/// `pucch-Format-r10`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PucchFormat {
    Format3(PucchFormat3Conf),
    /// `n1PUCCH-AN-CS-r10`: 1..2 lists of 1..4 resources, each 0..2047
    ChannelSelection(Option<SetupRelease<Vec<Vec<u16>>>>),
}

impl Writable for PucchFormat {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            PucchFormat::Format3(conf) => {
                writer.write_choice_index("pucch-Format-r10", 0, 2, false)?;
                writer.write(conf)
            }
            PucchFormat::ChannelSelection(n1_pucch_an_cs) => {
                writer.write_choice_index("pucch-Format-r10", 1, 2, false)?;
                writer.write_presence(&[n1_pucch_an_cs.is_some()])?;
                match n1_pucch_an_cs {
                    None => Ok(()),
                    Some(SetupRelease::Release) => {
                        writer.write_choice_index("SetupRelease", 0, 2, false)
                    }
                    Some(SetupRelease::Setup(lists)) => {
                        writer.write_choice_index("SetupRelease", 1, 2, false)?;
                        writer.write_sequence_of_with(lists, 1, 2, |w, list| {
                            write_n1_pucch_an_list(w, list)
                        })
                    }
                }
            }
        }
    }
}

impl Readable for PucchFormat {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("pucch-Format-r10", 2, false)? {
            0 => Ok(PucchFormat::Format3(reader.read()?)),
            _ => {
                let [present] = reader.read_presence()?;
                if !present {
                    return Ok(PucchFormat::ChannelSelection(None));
                }
                Ok(PucchFormat::ChannelSelection(Some(
                    match reader.read_choice_index("SetupRelease", 2, false)? {
                        0 => SetupRelease::Release,
                        _ => SetupRelease::Setup(
                            reader.read_sequence_of_with(1, 2, read_n1_pucch_an_list)?,
                        ),
                    },
                )))
            }
        }
    }
}

/// `PUCCH-ConfigDedicated-v1020`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PucchConfigDedicatedV1020 {
    pub pucch_format: Option<PucchFormat>,
    /// `ENUMERATED {true}`
    pub two_antenna_port_activated_pucch_format1a1b: bool,
    /// `ENUMERATED {true}`
    pub simultaneous_pucch_pusch: bool,
    /// 0..2047
    pub n1_pucch_an_rep_p1: Option<u16>,
}

impl Writable for PucchConfigDedicatedV1020 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.pucch_format.is_some(),
            self.two_antenna_port_activated_pucch_format1a1b,
            self.simultaneous_pucch_pusch,
            self.n1_pucch_an_rep_p1.is_some(),
        ])?;
        if let Some(format) = &self.pucch_format {
            writer.write(format)?;
        }
        if let Some(value) = self.n1_pucch_an_rep_p1 {
            writer.write_int(value, 0, 2047)?;
        }
        Ok(())
    }
}

impl Readable for PucchConfigDedicatedV1020 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [format, two_antenna_port, simultaneous, rep_p1] = reader.read_presence()?;
        Ok(PucchConfigDedicatedV1020 {
            pucch_format: if format { Some(reader.read()?) } else { None },
            two_antenna_port_activated_pucch_format1a1b: two_antenna_port,
            simultaneous_pucch_pusch: simultaneous,
            n1_pucch_an_rep_p1: if rep_p1 { Some(reader.read_int(0, 2047)?) } else { None },
        })
    }
}

/// `PUSCH-ConfigDedicated-v1020`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PuschConfigDedicatedV1020 {
    pub beta_offset_mc: Option<BetaOffsets>,
    /// `ENUMERATED {true}`
    pub group_hopping_disabled: bool,
    /// `ENUMERATED {true}`
    pub dmrs_with_occ_activated: bool,
}

impl Writable for PuschConfigDedicatedV1020 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.beta_offset_mc.is_some(),
            self.group_hopping_disabled,
            self.dmrs_with_occ_activated,
        ])?;
        if let Some(offsets) = &self.beta_offset_mc {
            writer.write(offsets)?;
        }
        Ok(())
    }
}

impl Readable for PuschConfigDedicatedV1020 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [offsets, group_hopping_disabled, dmrs_with_occ_activated] = reader.read_presence()?;
        Ok(PuschConfigDedicatedV1020 {
            beta_offset_mc: if offsets { Some(reader.read()?) } else { None },
            group_hopping_disabled,
            dmrs_with_occ_activated,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaTxDOffsetListPucch {
    pub format1: DeltaTxDOffset,
    pub format1a1b: DeltaTxDOffset,
    pub format22a2b: DeltaTxDOffset,
    pub format3: DeltaTxDOffset,
}

impl Writable for DeltaTxDOffsetListPucch {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write(&self.format1)?;
        writer.write(&self.format1a1b)?;
        writer.write(&self.format22a2b)?;
        writer.write(&self.format3)
    }
}

impl Readable for DeltaTxDOffsetListPucch {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let value = DeltaTxDOffsetListPucch {
            format1: reader.read()?,
            format1a1b: reader.read()?,
            format22a2b: reader.read()?,
            format3: reader.read()?,
        };
        reader.read_extension_additions("DeltaTxD-OffsetListPUCCH-r10", extended, 0, |_, _| {
            Ok(())
        })?;
        Ok(value)
    }
}

/// `UplinkPowerControlDedicated-v1020`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UplinkPowerControlDedicatedV1020 {
    pub delta_tx_d_offset_list_pucch: Option<DeltaTxDOffsetListPucch>,
    /// 0..15
    pub p_srs_offset_ap: Option<u8>,
}

impl Writable for UplinkPowerControlDedicatedV1020 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.delta_tx_d_offset_list_pucch.is_some(),
            self.p_srs_offset_ap.is_some(),
        ])?;
        if let Some(list) = &self.delta_tx_d_offset_list_pucch {
            writer.write(list)?;
        }
        if let Some(offset) = self.p_srs_offset_ap {
            writer.write_int(offset, 0, 15)?;
        }
        Ok(())
    }
}

impl Readable for UplinkPowerControlDedicatedV1020 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [list, offset] = reader.read_presence()?;
        Ok(UplinkPowerControlDedicatedV1020 {
            delta_tx_d_offset_list_pucch: if list { Some(reader.read()?) } else { None },
            p_srs_offset_ap: if offset { Some(reader.read_int(0, 15)?) } else { None },
        })
    }
}

/// The Rel-10 extension group of `PhysicalConfigDedicated`.
///
/// `cqi-ReportConfig-r10`, `csi-RS-Config-r10` and `soundingRS-UL-ConfigDedicatedAperiodic-r10`
/// are not supported: they are always encoded absent and decoding fails if one is present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhysicalConfigDedicatedR10 {
    pub antenna_info: Option<ExplicitOrDefault<AntennaInfoDedicatedR10>>,
    pub antenna_info_ul: Option<AntennaInfoUlR10>,
    pub cif_presence: Option<bool>,
    pub pucch_config_dedicated_v1020: Option<PucchConfigDedicatedV1020>,
    pub pusch_config_dedicated_v1020: Option<PuschConfigDedicatedV1020>,
    /// `sr-PUCCH-ResourceIndexP1-r10` of `SchedulingRequestConfig-v1020`, 0..2047
    pub scheduling_request_config_v1020: Option<Option<u16>>,
    /// `srs-AntennaPort-r10` of `SoundingRS-UL-ConfigDedicated-v1020`
    pub sounding_rs_ul_config_dedicated_v1020: Option<SrsAntennaPort>,
    pub uplink_power_control_dedicated_v1020: Option<UplinkPowerControlDedicatedV1020>,
}

impl Writable for PhysicalConfigDedicatedR10 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.antenna_info.is_some(),
            self.antenna_info_ul.is_some(),
            self.cif_presence.is_some(),
            false,
            false,
            self.pucch_config_dedicated_v1020.is_some(),
            self.pusch_config_dedicated_v1020.is_some(),
            self.scheduling_request_config_v1020.is_some(),
            self.sounding_rs_ul_config_dedicated_v1020.is_some(),
            false,
            self.uplink_power_control_dedicated_v1020.is_some(),
        ])?;
        if let Some(value) = &self.antenna_info {
            writer.write(value)?;
        }
        if let Some(value) = &self.antenna_info_ul {
            writer.write(value)?;
        }
        if let Some(value) = self.cif_presence {
            writer.write_bit(value)?;
        }
        if let Some(value) = &self.pucch_config_dedicated_v1020 {
            writer.write(value)?;
        }
        if let Some(value) = &self.pusch_config_dedicated_v1020 {
            writer.write(value)?;
        }
        if let Some(resource_index) = self.scheduling_request_config_v1020 {
            writer.write_presence(&[resource_index.is_some()])?;
            if let Some(index) = resource_index {
                writer.write_int(index, 0, 2047)?;
            }
        }
        if let Some(port) = &self.sounding_rs_ul_config_dedicated_v1020 {
            writer.write(port)?;
        }
        if let Some(value) = &self.uplink_power_control_dedicated_v1020 {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for PhysicalConfigDedicatedR10 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [antenna_info, antenna_info_ul, cif_presence, cqi_report_config, csi_rs_config, pucch, pusch, sr, srs, srs_aperiodic, power_control] =
            reader.read_presence()?;
        let antenna_info = if antenna_info { Some(reader.read()?) } else { None };
        let antenna_info_ul = if antenna_info_ul { Some(reader.read()?) } else { None };
        let cif_presence = if cif_presence { Some(reader.read_bit()?) } else { None };
        if cqi_report_config {
            return Err(Error::unsupported("cqi-ReportConfig-r10"));
        }
        if csi_rs_config {
            return Err(Error::unsupported("csi-RS-Config-r10"));
        }
        let pucch_config_dedicated_v1020 = if pucch { Some(reader.read()?) } else { None };
        let pusch_config_dedicated_v1020 = if pusch { Some(reader.read()?) } else { None };
        let scheduling_request_config_v1020 = if sr {
            let [present] = reader.read_presence()?;
            Some(if present { Some(reader.read_int(0, 2047)?) } else { None })
        } else {
            None
        };
        let sounding_rs_ul_config_dedicated_v1020 = if srs { Some(reader.read()?) } else { None };
        if srs_aperiodic {
            return Err(Error::unsupported("soundingRS-UL-ConfigDedicatedAperiodic-r10"));
        }
        Ok(PhysicalConfigDedicatedR10 {
            antenna_info,
            antenna_info_ul,
            cif_presence,
            pucch_config_dedicated_v1020,
            pusch_config_dedicated_v1020,
            scheduling_request_config_v1020,
            sounding_rs_ul_config_dedicated_v1020,
            uplink_power_control_dedicated_v1020: if power_control {
                Some(reader.read()?)
            } else {
                None
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhysicalConfigDedicated {
    pub pdsch_config_dedicated: Option<PdschConfigDedicated>,
    pub pucch_config_dedicated: Option<PucchConfigDedicated>,
    pub pusch_config_dedicated: Option<PuschConfigDedicated>,
    pub uplink_power_control_dedicated: Option<UplinkPowerControlDedicated>,
    pub tpc_pdcch_config_pucch: Option<TpcPdcchConfig>,
    pub tpc_pdcch_config_pusch: Option<TpcPdcchConfig>,
    pub cqi_report_config: Option<CqiReportConfig>,
    pub sounding_rs_ul_config_dedicated: Option<SoundingRsUlConfigDedicated>,
    pub antenna_info: Option<ExplicitOrDefault<AntennaInfoDedicated>>,
    pub scheduling_request_config: Option<SchedulingRequestConfig>,
    pub cqi_report_config_v920: Option<CqiReportConfigV920>,
    pub antenna_info_v920: Option<AntennaInfoDedicatedV920>,
    pub r10: Option<PhysicalConfigDedicatedR10>,
    /// `additionalSpectrumEmissionCA-r10`, `additionalSpectrumEmissionPCell-r10` of 1..32
    pub additional_spectrum_emission_ca: Option<SetupRelease<u8>>,
    /// The two Rel-11 groups, kept as received
    pub extension_v1130: Option<OpaqueExtension>,
    pub extension_v1180: Option<OpaqueExtension>,
}

impl PhysicalConfigDedicated {
    pub const NAME: &'static str = "PhysicalConfigDedicated";
}

impl Writable for PhysicalConfigDedicated {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let v920 = Some(WriteWith(|w: &mut UperWriter| {
            w.write_presence(&[
                self.cqi_report_config_v920.is_some(),
                self.antenna_info_v920.is_some(),
            ])?;
            if let Some(value) = &self.cqi_report_config_v920 {
                w.write(value)?;
            }
            if let Some(value) = &self.antenna_info_v920 {
                w.write(value)?;
            }
            Ok(())
        }))
        .filter(|_| self.cqi_report_config_v920.is_some() || self.antenna_info_v920.is_some());
        let emission = self.additional_spectrum_emission_ca.as_ref().map(|choice| {
            WriteWith(move |w: &mut UperWriter| {
                w.write_presence(&[true])?;
                match choice {
                    SetupRelease::Release => w.write_choice_index("SetupRelease", 0, 2, false),
                    SetupRelease::Setup(emission) => {
                        w.write_choice_index("SetupRelease", 1, 2, false)?;
                        w.write_int(*emission, 1, 32)
                    }
                }
            })
        });
        let additions = [
            addition(&v920),
            addition(&self.r10),
            addition(&emission),
            addition(&self.extension_v1130),
            addition(&self.extension_v1180),
        ];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.pdsch_config_dedicated.is_some(),
            self.pucch_config_dedicated.is_some(),
            self.pusch_config_dedicated.is_some(),
            self.uplink_power_control_dedicated.is_some(),
            self.tpc_pdcch_config_pucch.is_some(),
            self.tpc_pdcch_config_pusch.is_some(),
            self.cqi_report_config.is_some(),
            self.sounding_rs_ul_config_dedicated.is_some(),
            self.antenna_info.is_some(),
            self.scheduling_request_config.is_some(),
        ])?;
        if let Some(value) = &self.pdsch_config_dedicated {
            writer.write(value)?;
        }
        if let Some(value) = &self.pucch_config_dedicated {
            writer.write(value)?;
        }
        if let Some(value) = &self.pusch_config_dedicated {
            writer.write(value)?;
        }
        if let Some(value) = &self.uplink_power_control_dedicated {
            writer.write(value)?;
        }
        if let Some(value) = &self.tpc_pdcch_config_pucch {
            writer.write(value)?;
        }
        if let Some(value) = &self.tpc_pdcch_config_pusch {
            writer.write(value)?;
        }
        if let Some(value) = &self.cqi_report_config {
            writer.write(value)?;
        }
        if let Some(value) = &self.sounding_rs_ul_config_dedicated {
            writer.write(value)?;
        }
        if let Some(value) = &self.antenna_info {
            writer.write(value)?;
        }
        if let Some(value) = &self.scheduling_request_config {
            writer.write(value)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for PhysicalConfigDedicated {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [pdsch, pucch, pusch, power_control, tpc_pucch, tpc_pusch, cqi, srs, antenna_info, sr] =
            reader.read_presence()?;
        let mut value = PhysicalConfigDedicated {
            pdsch_config_dedicated: if pdsch { Some(reader.read()?) } else { None },
            pucch_config_dedicated: if pucch { Some(reader.read()?) } else { None },
            pusch_config_dedicated: if pusch { Some(reader.read()?) } else { None },
            uplink_power_control_dedicated: if power_control {
                Some(reader.read()?)
            } else {
                None
            },
            tpc_pdcch_config_pucch: if tpc_pucch { Some(reader.read()?) } else { None },
            tpc_pdcch_config_pusch: if tpc_pusch { Some(reader.read()?) } else { None },
            cqi_report_config: if cqi { Some(reader.read()?) } else { None },
            sounding_rs_ul_config_dedicated: if srs { Some(reader.read()?) } else { None },
            antenna_info: if antenna_info { Some(reader.read()?) } else { None },
            scheduling_request_config: if sr { Some(reader.read()?) } else { None },
            ..Default::default()
        };
        reader.read_extension_additions(Self::NAME, extended, 5, |index, reader| {
            match index {
                0 => {
                    let [cqi, antenna_info] = reader.read_presence()?;
                    if cqi {
                        value.cqi_report_config_v920 = Some(reader.read()?);
                    }
                    if antenna_info {
                        value.antenna_info_v920 = Some(reader.read()?);
                    }
                }
                1 => value.r10 = Some(reader.read()?),
                2 => {
                    let [present] = reader.read_presence()?;
                    if present {
                        value.additional_spectrum_emission_ca =
                            Some(match reader.read_choice_index("SetupRelease", 2, false)? {
                                0 => SetupRelease::Release,
                                _ => SetupRelease::Setup(reader.read_int(1, 32)?),
                            });
                    }
                }
                3 => value.extension_v1130 = Some(reader.read()?),
                _ => value.extension_v1180 = Some(reader.read()?),
            }
            Ok(())
        })?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::per::ErrorKind;

    fn format3() -> PhysicalConfigDedicated {
        PhysicalConfigDedicated {
            r10: Some(PhysicalConfigDedicatedR10 {
                pucch_config_dedicated_v1020: Some(PucchConfigDedicatedV1020 {
                    pucch_format: Some(PucchFormat::Format3(PucchFormat3Conf {
                        n3_pucch_an_list: Some(vec![25, 281, 0, 51]),
                        two_antenna_port_activated: None,
                    })),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_r10_group_is_second_of_five() {
        let mut writer = UperWriter::default();
        writer.write(&format3()).unwrap();
        // extension bit, ten presence bits, normally-small 4, bitmap, length, 64 content bits
        assert_eq!(1 + 10 + 7 + 5 + 8 + 64, writer.finish());

        let mut reader = writer.as_reader();
        assert_eq!(format3(), reader.read::<PhysicalConfigDedicated>().unwrap());
        assert_eq!(0, reader.remaining_bits());
    }

    #[test]
    fn test_unsupported_r10_member_is_rejected() {
        let mut writer = UperWriter::default();
        // antennaInfo-r10 .. csi-RS-Config-r10 with the fourth one present
        writer
            .write_presence(&[
                false, false, false, true, false, false, false, false, false, false, false,
            ])
            .unwrap();
        writer.write_bits(0, 16).unwrap();
        assert_eq!(
            &ErrorKind::Unsupported("cqi-ReportConfig-r10"),
            writer
                .as_reader()
                .read::<PhysicalConfigDedicatedR10>()
                .unwrap_err()
                .kind()
        );
    }

    #[test]
    fn test_root_members() {
        let config = PhysicalConfigDedicated {
            pdsch_config_dedicated: Some(PdschConfigDedicated { p_a: Pa::Db0 }),
            pucch_config_dedicated: Some(PucchConfigDedicated {
                ack_nack_repetition: SetupRelease::Release,
                tdd_ack_nack_feedback_mode: None,
            }),
            uplink_power_control_dedicated: Some(UplinkPowerControlDedicated {
                p0_ue_pusch: -8,
                delta_mcs_enabled: DeltaMcsEnabled::En0,
                accumulation_enabled: true,
                p0_ue_pucch: 7,
                p_srs_offset: 7,
                filter_coefficient: None,
            }),
            cqi_report_config: Some(CqiReportConfig {
                cqi_report_mode_aperiodic: Some(CqiReportModeAperiodic::Rm30),
                nom_pdsch_rs_epre_offset: -1,
                cqi_report_periodic: Some(SetupRelease::Setup(CqiReportPeriodicSetup {
                    cqi_pucch_resource_index: 1185,
                    cqi_pmi_config_index: 38,
                    cqi_format_indicator_periodic: CqiFormatIndicatorPeriodic::SubbandCqi(4),
                    ri_config_index: Some(483),
                    simultaneous_ack_nack_and_cqi: false,
                })),
            }),
            antenna_info: Some(ExplicitOrDefault::Explicit(AntennaInfoDedicated {
                transmission_mode: TransmissionMode::Tm4,
                codebook_subset_restriction: Some(CodebookSubsetRestriction::N4TxAntennaTm4(
                    u64::MAX,
                )),
                ue_transmit_antenna_selection: SetupRelease::Release,
            })),
            scheduling_request_config: Some(SetupRelease::Setup(SchedulingRequestConfigSetup {
                sr_pucch_resource_index: 2047,
                sr_config_index: 157,
                dsr_trans_max: DsrTransMax::N64,
            })),
            ..Default::default()
        };
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        assert_eq!(config, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_v920_and_emission_groups() {
        let config = PhysicalConfigDedicated {
            cqi_report_config_v920: Some(CqiReportConfigV920 {
                cqi_mask: true,
                pmi_ri_report: false,
            }),
            additional_spectrum_emission_ca: Some(SetupRelease::Setup(32)),
            ..Default::default()
        };
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        assert_eq!(config, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_channel_selection_lists() {
        let format = PucchFormat::ChannelSelection(Some(SetupRelease::Setup(vec![
            vec![1, 2, 3, 4],
            vec![2047],
        ])));
        let mut writer = UperWriter::default();
        writer.write(&format).unwrap();
        assert_eq!(format, writer.as_reader().read().unwrap());
    }
}
