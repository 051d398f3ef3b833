//! Measurement configuration and reporting: `MeasConfig` with its objects, report
//! configurations and identities, and `MeasResults` as sent in a `MeasurementReport`.

use crate::ies::bounds::{
    MAX_CELL_MEAS, MAX_CELL_REPORT, MAX_MEAS_ID, MAX_OBJECT_ID, MAX_PCI_RANGE,
    MAX_REPORT_CONFIG_ID,
};
use crate::ies::common::{
    read_phys_cell_id, read_plmn_identity_list2, write_phys_cell_id, write_plmn_identity_list2,
    AllowedMeasBandwidth, CarrierFreqGeran, CarrierFreqsGeran, CellGlobalIdEutra,
    CellGlobalIdGeran, CellGlobalIdUtra, FilterCoefficient, MobilityStateParameters,
    NeighCellConfig, PhysCellId, PhysCellIdGeran, PhysCellIdRange, PlmnIdentity, QOffsetRange,
    QOffsetRangeInterRat, SpeedStateScaleFactors, TrackingAreaCode, ARFCN_EUTRA_MAX,
    ARFCN_UTRA_MAX, RSRP_RANGE_MAX, RSRQ_RANGE_MAX,
};
use crate::ies::radio_resource::dedicated::MeasSubframePattern;
use crate::io::per::Error;
use crate::syn::choice::{SetupRelease, UnknownAlternative};
use crate::syn::extension::{addition, OpaqueExtension};
use crate::syn::{Readable, UperReader, UperWriter, Writable, WriteWith};

/// `MeasObjectId ::= INTEGER (1..maxObjectId)`
pub type MeasObjectId = u8;
/// `ReportConfigId ::= INTEGER (1..maxReportConfigId)`
pub type ReportConfigId = u8;
/// `MeasId ::= INTEGER (1..maxMeasId)`
pub type MeasId = u8;
/// `CellIndex ::= INTEGER (1..maxCellMeas)`
pub type CellIndex = u8;
/// `PhysCellIdUTRA-FDD ::= INTEGER (0..511)`
pub type PhysCellIdUtraFdd = u16;
/// `PhysCellIdUTRA-TDD ::= INTEGER (0..127)`
pub type PhysCellIdUtraTdd = u8;

const PHYS_CELL_ID_UTRA_FDD_MAX: i64 = 511;
const PHYS_CELL_ID_UTRA_TDD_MAX: i64 = 127;
const UTRA_RSCP_MIN: i64 = -5;
const UTRA_RSCP_MAX: i64 = 91;
const UTRA_ECN0_MAX: i64 = 49;

/// Writes a list of identities in `1..=max`, itself of size `1..=max`
fn write_id_list(writer: &mut UperWriter, list: &[u8], max: u64) -> Result<(), Error> {
    writer.write_sequence_of_with(list, 1, max, |w, id| w.write_int(*id, 1, max as i64))
}

fn read_id_list(reader: &mut UperReader<'_>, max: u64) -> Result<Vec<u8>, Error> {
    reader.read_sequence_of_with(1, max, |r| r.read_int(1, max as i64))
}

enumerated! {
    pub enum MeasCycleSCell: "MeasCycleSCell-r10", numeric u16 {
        Sf160 = "sf160" => 160,
        Sf256 = "sf256" => 256,
        Sf320 = "sf320" => 320,
        Sf512 = "sf512" => 512,
        Sf640 = "sf640" => 640,
        Sf1024 = "sf1024" => 1024,
        Sf1280 = "sf1280" => 1280,
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum TimeToTrigger: "TimeToTrigger", numeric u16 {
        Ms0 = "ms0" => 0,
        Ms40 = "ms40" => 40,
        Ms64 = "ms64" => 64,
        Ms80 = "ms80" => 80,
        Ms100 = "ms100" => 100,
        Ms128 = "ms128" => 128,
        Ms160 = "ms160" => 160,
        Ms256 = "ms256" => 256,
        Ms320 = "ms320" => 320,
        Ms480 = "ms480" => 480,
        Ms512 = "ms512" => 512,
        Ms640 = "ms640" => 640,
        Ms1024 = "ms1024" => 1024,
        Ms1280 = "ms1280" => 1280,
        Ms2560 = "ms2560" => 2560,
        Ms5120 = "ms5120" => 5120,
    }
}

enumerated! {
    /// Reporting interval, the numeric value in milliseconds
    pub enum ReportInterval: "ReportInterval", numeric u32 {
        Ms120 = "ms120" => 120,
        Ms240 = "ms240" => 240,
        Ms480 = "ms480" => 480,
        Ms640 = "ms640" => 640,
        Ms1024 = "ms1024" => 1024,
        Ms2048 = "ms2048" => 2048,
        Ms5120 = "ms5120" => 5120,
        Ms10240 = "ms10240" => 10240,
        Min1 = "min1" => 60_000,
        Min6 = "min6" => 360_000,
        Min12 = "min12" => 720_000,
        Min30 = "min30" => 1_800_000,
        Min60 = "min60" => 3_600_000,
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum ReportAmount: "ReportConfig-reportAmount", numeric u8 {
        R1 = "r1" => 1,
        R2 = "r2" => 2,
        R4 = "r4" => 4,
        R8 = "r8" => 8,
        R16 = "r16" => 16,
        R32 = "r32" => 32,
        R64 = "r64" => 64,
        Infinity = "infinity",
    }
}

enumerated! {
    pub enum TriggerQuantity: "ReportConfigEUTRA-triggerQuantity" {
        Rsrp = "rsrp",
        Rsrq = "rsrq",
    }
}

enumerated! {
    pub enum ReportQuantity: "ReportConfigEUTRA-reportQuantity" {
        SameAsTriggerQuantity = "sameAsTriggerQuantity",
        Both = "both",
    }
}

enumerated! {
    pub enum PurposeEutra: "ReportConfigEUTRA-purpose" {
        ReportStrongestCells = "reportStrongestCells",
        ReportCgi = "reportCGI",
    }
}

enumerated! {
    pub enum PurposeInterRat: "ReportConfigInterRAT-purpose" {
        ReportStrongestCells = "reportStrongestCells",
        ReportStrongestCellsForSon = "reportStrongestCellsForSON",
        ReportCgi = "reportCGI",
    }
}

enumerated! {
    pub enum MeasQuantityUtraFdd: "QuantityConfigUTRA-measQuantityUTRA-FDD" {
        CpichRscp = "cpich-RSCP",
        CpichEcN0 = "cpich-EcN0",
    }
}

enumerated! {
    pub enum MeasQuantityCdma2000: "QuantityConfigCDMA2000-measQuantityCDMA2000" {
        PilotStrength = "pilotStrength",
        PilotPnPhaseAndPilotStrength = "pilotPnPhaseAndPilotStrength",
    }
}

/// `CellsToAddMod` of an E-UTRA measurement object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellsToAddMod {
    pub cell_index: CellIndex,
    pub phys_cell_id: PhysCellId,
    pub cell_individual_offset: QOffsetRange,
}

impl Writable for CellsToAddMod {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.cell_index, 1, MAX_CELL_MEAS as i64)?;
        write_phys_cell_id(writer, self.phys_cell_id)?;
        writer.write(&self.cell_individual_offset)
    }
}

impl Readable for CellsToAddMod {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(CellsToAddMod {
            cell_index: reader.read_int(1, MAX_CELL_MEAS as i64)?,
            phys_cell_id: read_phys_cell_id(reader)?,
            cell_individual_offset: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackCellsToAddMod {
    pub cell_index: CellIndex,
    pub phys_cell_id_range: PhysCellIdRange,
}

impl Writable for BlackCellsToAddMod {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.cell_index, 1, MAX_CELL_MEAS as i64)?;
        writer.write(&self.phys_cell_id_range)
    }
}

impl Readable for BlackCellsToAddMod {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(BlackCellsToAddMod {
            cell_index: reader.read_int(1, MAX_CELL_MEAS as i64)?,
            phys_cell_id_range: reader.read()?,
        })
    }
}

/// Setup content of `MeasSubframePatternConfigNeigh-r10`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasSubframePatternNeigh {
    pub meas_subframe_pattern_neigh: MeasSubframePattern,
    pub meas_subframe_cell_list: Option<Vec<PhysCellIdRange>>,
}

impl Writable for MeasSubframePatternNeigh {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.meas_subframe_cell_list.is_some()])?;
        writer.write(&self.meas_subframe_pattern_neigh)?;
        if let Some(list) = &self.meas_subframe_cell_list {
            writer.write_sequence_of(list, 1, MAX_CELL_MEAS)?;
        }
        Ok(())
    }
}

impl Readable for MeasSubframePatternNeigh {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [cell_list] = reader.read_presence()?;
        Ok(MeasSubframePatternNeigh {
            meas_subframe_pattern_neigh: reader.read()?,
            meas_subframe_cell_list: if cell_list {
                Some(reader.read_sequence_of(1, MAX_CELL_MEAS)?)
            } else {
                None
            },
        })
    }
}

pub type MeasSubframePatternConfigNeigh = SetupRelease<MeasSubframePatternNeigh>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasObjectEutra {
    pub carrier_freq: u32,
    pub allowed_meas_bandwidth: AllowedMeasBandwidth,
    pub presence_antenna_port1: bool,
    pub neigh_cell_config: NeighCellConfig,
    /// `None` is the default of dB0
    pub offset_freq: Option<QOffsetRange>,
    pub cells_to_remove_list: Option<Vec<CellIndex>>,
    pub cells_to_add_mod_list: Option<Vec<CellsToAddMod>>,
    pub black_cells_to_remove_list: Option<Vec<CellIndex>>,
    pub black_cells_to_add_mod_list: Option<Vec<BlackCellsToAddMod>>,
    pub cell_for_which_to_report_cgi: Option<PhysCellId>,
    pub meas_cycle_scell: Option<MeasCycleSCell>,
    pub meas_subframe_pattern_config_neigh: Option<MeasSubframePatternConfigNeigh>,
}

impl MeasObjectEutra {
    pub const NAME: &'static str = "MeasObjectEUTRA";
}

impl Writable for MeasObjectEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let r10 = Some(WriteWith(|w: &mut UperWriter| {
            w.write_presence(&[
                self.meas_cycle_scell.is_some(),
                self.meas_subframe_pattern_config_neigh.is_some(),
            ])?;
            if let Some(value) = &self.meas_cycle_scell {
                w.write(value)?;
            }
            if let Some(value) = &self.meas_subframe_pattern_config_neigh {
                w.write(value)?;
            }
            Ok(())
        }))
        .filter(|_| {
            self.meas_cycle_scell.is_some() || self.meas_subframe_pattern_config_neigh.is_some()
        });
        let additions = [addition(&r10)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.offset_freq.is_some(),
            self.cells_to_remove_list.is_some(),
            self.cells_to_add_mod_list.is_some(),
            self.black_cells_to_remove_list.is_some(),
            self.black_cells_to_add_mod_list.is_some(),
            self.cell_for_which_to_report_cgi.is_some(),
        ])?;
        writer.write_int(self.carrier_freq, 0, ARFCN_EUTRA_MAX)?;
        writer.write(&self.allowed_meas_bandwidth)?;
        writer.write_bit(self.presence_antenna_port1)?;
        writer.write_bits(u64::from(self.neigh_cell_config), 2)?;
        if let Some(value) = &self.offset_freq {
            writer.write(value)?;
        }
        if let Some(list) = &self.cells_to_remove_list {
            write_id_list(writer, list, MAX_CELL_MEAS)?;
        }
        if let Some(list) = &self.cells_to_add_mod_list {
            writer.write_sequence_of(list, 1, MAX_CELL_MEAS)?;
        }
        if let Some(list) = &self.black_cells_to_remove_list {
            write_id_list(writer, list, MAX_CELL_MEAS)?;
        }
        if let Some(list) = &self.black_cells_to_add_mod_list {
            writer.write_sequence_of(list, 1, MAX_CELL_MEAS)?;
        }
        if let Some(value) = self.cell_for_which_to_report_cgi {
            write_phys_cell_id(writer, value)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for MeasObjectEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [offset, remove, add_mod, black_remove, black_add_mod, cgi] = reader.read_presence()?;
        let mut value = MeasObjectEutra {
            carrier_freq: reader.read_int(0, ARFCN_EUTRA_MAX)?,
            allowed_meas_bandwidth: reader.read()?,
            presence_antenna_port1: reader.read_bit()?,
            neigh_cell_config: reader.read_bits(2)?,
            offset_freq: if offset { Some(reader.read()?) } else { None },
            cells_to_remove_list: if remove {
                Some(read_id_list(reader, MAX_CELL_MEAS)?)
            } else {
                None
            },
            cells_to_add_mod_list: if add_mod {
                Some(reader.read_sequence_of(1, MAX_CELL_MEAS)?)
            } else {
                None
            },
            black_cells_to_remove_list: if black_remove {
                Some(read_id_list(reader, MAX_CELL_MEAS)?)
            } else {
                None
            },
            black_cells_to_add_mod_list: if black_add_mod {
                Some(reader.read_sequence_of(1, MAX_CELL_MEAS)?)
            } else {
                None
            },
            cell_for_which_to_report_cgi: if cgi {
                Some(read_phys_cell_id(reader)?)
            } else {
                None
            },
            meas_cycle_scell: None,
            meas_subframe_pattern_config_neigh: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            let [cycle, pattern] = reader.read_presence()?;
            if cycle {
                value.meas_cycle_scell = Some(reader.read()?);
            }
            if pattern {
                value.meas_subframe_pattern_config_neigh = Some(reader.read()?);
            }
            Ok(())
        })?;
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellsToAddModUtraFdd {
    pub cell_index: CellIndex,
    pub phys_cell_id: PhysCellIdUtraFdd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellsToAddModUtraTdd {
    pub cell_index: CellIndex,
    pub phys_cell_id: PhysCellIdUtraTdd,
}

/// `cellsToAddModList` of `MeasObjectUTRA`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellsToAddModListUtra {
    Fdd(Vec<CellsToAddModUtraFdd>),
    Tdd(Vec<CellsToAddModUtraTdd>),
}

impl Writable for CellsToAddModListUtra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            CellsToAddModListUtra::Fdd(list) => {
                writer.write_choice_index("cellsToAddModList", 0, 2, false)?;
                writer.write_sequence_of_with(list, 1, MAX_CELL_MEAS, |w, cell| {
                    w.write_int(cell.cell_index, 1, MAX_CELL_MEAS as i64)?;
                    w.write_int(cell.phys_cell_id, 0, PHYS_CELL_ID_UTRA_FDD_MAX)
                })
            }
            CellsToAddModListUtra::Tdd(list) => {
                writer.write_choice_index("cellsToAddModList", 1, 2, false)?;
                writer.write_sequence_of_with(list, 1, MAX_CELL_MEAS, |w, cell| {
                    w.write_int(cell.cell_index, 1, MAX_CELL_MEAS as i64)?;
                    w.write_int(cell.phys_cell_id, 0, PHYS_CELL_ID_UTRA_TDD_MAX)
                })
            }
        }
    }
}

impl Readable for CellsToAddModListUtra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("cellsToAddModList", 2, false)? {
            0 => Ok(CellsToAddModListUtra::Fdd(reader.read_sequence_of_with(
                1,
                MAX_CELL_MEAS,
                |r| {
                    Ok(CellsToAddModUtraFdd {
                        cell_index: r.read_int(1, MAX_CELL_MEAS as i64)?,
                        phys_cell_id: r.read_int(0, PHYS_CELL_ID_UTRA_FDD_MAX)?,
                    })
                },
            )?)),
            _ => Ok(CellsToAddModListUtra::Tdd(reader.read_sequence_of_with(
                1,
                MAX_CELL_MEAS,
                |r| {
                    Ok(CellsToAddModUtraTdd {
                        cell_index: r.read_int(1, MAX_CELL_MEAS as i64)?,
                        phys_cell_id: r.read_int(0, PHYS_CELL_ID_UTRA_TDD_MAX)?,
                    })
                },
            )?)),
        }
    }
}

/// A UTRA physical cell identity, FDD or TDD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysCellIdUtra {
    Fdd(PhysCellIdUtraFdd),
    Tdd(PhysCellIdUtraTdd),
}

impl Writable for PhysCellIdUtra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            PhysCellIdUtra::Fdd(id) => {
                writer.write_choice_index("physCellId", 0, 2, false)?;
                writer.write_int(*id, 0, PHYS_CELL_ID_UTRA_FDD_MAX)
            }
            PhysCellIdUtra::Tdd(id) => {
                writer.write_choice_index("physCellId", 1, 2, false)?;
                writer.write_int(*id, 0, PHYS_CELL_ID_UTRA_TDD_MAX)
            }
        }
    }
}

impl Readable for PhysCellIdUtra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("physCellId", 2, false)? {
            0 => Ok(PhysCellIdUtra::Fdd(reader.read_int(0, PHYS_CELL_ID_UTRA_FDD_MAX)?)),
            _ => Ok(PhysCellIdUtra::Tdd(reader.read_int(0, PHYS_CELL_ID_UTRA_TDD_MAX)?)),
        }
    }
}

/// `PhysCellIdRangeUTRA-FDD-r9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysCellIdRangeUtraFdd {
    pub start: PhysCellIdUtraFdd,
    /// 2..512
    pub range: Option<u16>,
}

impl Writable for PhysCellIdRangeUtraFdd {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.range.is_some()])?;
        writer.write_int(self.start, 0, PHYS_CELL_ID_UTRA_FDD_MAX)?;
        if let Some(range) = self.range {
            writer.write_int(range, 2, 512)?;
        }
        Ok(())
    }
}

impl Readable for PhysCellIdRangeUtraFdd {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [range] = reader.read_presence()?;
        Ok(PhysCellIdRangeUtraFdd {
            start: reader.read_int(0, PHYS_CELL_ID_UTRA_FDD_MAX)?,
            range: if range {
                Some(reader.read_int(2, 512)?)
            } else {
                None
            },
        })
    }
}

/// `CSG-AllowedReportingCells-r9`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsgAllowedReportingCells {
    pub phys_cell_id_range_utra_fdd_list: Option<Vec<PhysCellIdRangeUtraFdd>>,
}

impl Writable for CsgAllowedReportingCells {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.phys_cell_id_range_utra_fdd_list.is_some()])?;
        if let Some(list) = &self.phys_cell_id_range_utra_fdd_list {
            writer.write_sequence_of(list, 1, MAX_PCI_RANGE)?;
        }
        Ok(())
    }
}

impl Readable for CsgAllowedReportingCells {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [list] = reader.read_presence()?;
        Ok(CsgAllowedReportingCells {
            phys_cell_id_range_utra_fdd_list: if list {
                Some(reader.read_sequence_of(1, MAX_PCI_RANGE)?)
            } else {
                None
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasObjectUtra {
    pub carrier_freq: u16,
    /// `None` is the default of 0
    pub offset_freq: Option<QOffsetRangeInterRat>,
    pub cells_to_remove_list: Option<Vec<CellIndex>>,
    pub cells_to_add_mod_list: Option<CellsToAddModListUtra>,
    pub cell_for_which_to_report_cgi: Option<PhysCellIdUtra>,
    pub csg_allowed_reporting_cells: Option<CsgAllowedReportingCells>,
}

impl MeasObjectUtra {
    pub const NAME: &'static str = "MeasObjectUTRA";
}

impl Writable for MeasObjectUtra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let v930 = self.csg_allowed_reporting_cells.as_ref().map(|value| {
            WriteWith(move |w: &mut UperWriter| {
                w.write_presence(&[true])?;
                w.write(value)
            })
        });
        let additions = [addition(&v930)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.offset_freq.is_some(),
            self.cells_to_remove_list.is_some(),
            self.cells_to_add_mod_list.is_some(),
            self.cell_for_which_to_report_cgi.is_some(),
        ])?;
        writer.write_int(self.carrier_freq, 0, ARFCN_UTRA_MAX)?;
        if let Some(offset) = self.offset_freq {
            writer.write_int(offset, -15, 15)?;
        }
        if let Some(list) = &self.cells_to_remove_list {
            write_id_list(writer, list, MAX_CELL_MEAS)?;
        }
        if let Some(list) = &self.cells_to_add_mod_list {
            writer.write(list)?;
        }
        if let Some(value) = &self.cell_for_which_to_report_cgi {
            writer.write(value)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for MeasObjectUtra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [offset, remove, add_mod, cgi] = reader.read_presence()?;
        let mut value = MeasObjectUtra {
            carrier_freq: reader.read_int(0, ARFCN_UTRA_MAX)?,
            offset_freq: if offset {
                Some(reader.read_int(-15, 15)?)
            } else {
                None
            },
            cells_to_remove_list: if remove {
                Some(read_id_list(reader, MAX_CELL_MEAS)?)
            } else {
                None
            },
            cells_to_add_mod_list: if add_mod { Some(reader.read()?) } else { None },
            cell_for_which_to_report_cgi: if cgi { Some(reader.read()?) } else { None },
            csg_allowed_reporting_cells: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            let [present] = reader.read_presence()?;
            if present {
                value.csg_allowed_reporting_cells = Some(reader.read()?);
            }
            Ok(())
        })?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasObjectGeran {
    pub carrier_freqs: CarrierFreqsGeran,
    /// `None` is the default of 0
    pub offset_freq: Option<QOffsetRangeInterRat>,
    /// `None` is the default of all colour codes permitted
    pub ncc_permitted: Option<u8>,
    pub cell_for_which_to_report_cgi: Option<PhysCellIdGeran>,
}

impl Writable for MeasObjectGeran {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[
            self.offset_freq.is_some(),
            self.ncc_permitted.is_some(),
            self.cell_for_which_to_report_cgi.is_some(),
        ])?;
        writer.write(&self.carrier_freqs)?;
        if let Some(offset) = self.offset_freq {
            writer.write_int(offset, -15, 15)?;
        }
        if let Some(ncc) = self.ncc_permitted {
            writer.write_bits(u64::from(ncc), 8)?;
        }
        if let Some(value) = &self.cell_for_which_to_report_cgi {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for MeasObjectGeran {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [offset, ncc, cgi] = reader.read_presence()?;
        let value = MeasObjectGeran {
            carrier_freqs: reader.read()?,
            offset_freq: if offset {
                Some(reader.read_int(-15, 15)?)
            } else {
                None
            },
            ncc_permitted: if ncc { Some(reader.read_bits(8)?) } else { None },
            cell_for_which_to_report_cgi: if cgi { Some(reader.read()?) } else { None },
        };
        reader.read_extension_additions("MeasObjectGERAN", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

/// `measObject` of `MeasObjectToAddMod`. CDMA2000 objects cannot be encoded nor decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasObject {
    Eutra(MeasObjectEutra),
    Utra(MeasObjectUtra),
    Geran(MeasObjectGeran),
    Unknown(UnknownAlternative),
}

impl MeasObject {
    pub const NAME: &'static str = "MeasObjectToAddMod-measObject";
    const ROOT_VARIANTS: u64 = 4;
}

impl Writable for MeasObject {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            MeasObject::Eutra(value) => {
                writer.write_choice_index(Self::NAME, 0, Self::ROOT_VARIANTS, true)?;
                writer.write(value)
            }
            MeasObject::Utra(value) => {
                writer.write_choice_index(Self::NAME, 1, Self::ROOT_VARIANTS, true)?;
                writer.write(value)
            }
            MeasObject::Geran(value) => {
                writer.write_choice_index(Self::NAME, 2, Self::ROOT_VARIANTS, true)?;
                writer.write(value)
            }
            MeasObject::Unknown(unknown) => {
                unknown.write(writer, Self::NAME, Self::ROOT_VARIANTS, Self::ROOT_VARIANTS)
            }
        }
    }
}

impl Readable for MeasObject {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index(Self::NAME, Self::ROOT_VARIANTS, true)? {
            0 => Ok(MeasObject::Eutra(reader.read()?)),
            1 => Ok(MeasObject::Utra(reader.read()?)),
            2 => Ok(MeasObject::Geran(reader.read()?)),
            3 => Err(Error::unsupported("measObjectCDMA2000")),
            index => Ok(MeasObject::Unknown(UnknownAlternative::read(
                reader,
                Self::NAME,
                index,
            )?)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasObjectToAddMod {
    pub meas_object_id: MeasObjectId,
    pub meas_object: MeasObject,
}

impl Writable for MeasObjectToAddMod {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.meas_object_id, 1, MAX_OBJECT_ID as i64)?;
        writer.write(&self.meas_object)
    }
}

impl Readable for MeasObjectToAddMod {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(MeasObjectToAddMod {
            meas_object_id: reader.read_int(1, MAX_OBJECT_ID as i64)?,
            meas_object: reader.read()?,
        })
    }
}

/// `ThresholdEUTRA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdEutra {
    /// 0..97
    Rsrp(u8),
    /// 0..34
    Rsrq(u8),
}

impl Writable for ThresholdEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            ThresholdEutra::Rsrp(value) => {
                writer.write_choice_index("ThresholdEUTRA", 0, 2, false)?;
                writer.write_int(*value, 0, RSRP_RANGE_MAX)
            }
            ThresholdEutra::Rsrq(value) => {
                writer.write_choice_index("ThresholdEUTRA", 1, 2, false)?;
                writer.write_int(*value, 0, RSRQ_RANGE_MAX)
            }
        }
    }
}

impl Readable for ThresholdEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("ThresholdEUTRA", 2, false)? {
            0 => Ok(ThresholdEutra::Rsrp(reader.read_int(0, RSRP_RANGE_MAX)?)),
            _ => Ok(ThresholdEutra::Rsrq(reader.read_int(0, RSRQ_RANGE_MAX)?)),
        }
    }
}

/// `eventId` of `ReportConfigEUTRA`. A6 is the first extension alternative and travels as
/// open type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventEutra {
    A1 {
        threshold: ThresholdEutra,
    },
    A2 {
        threshold: ThresholdEutra,
    },
    A3 {
        /// -30..30
        offset: i8,
        report_on_leave: bool,
    },
    A4 {
        threshold: ThresholdEutra,
    },
    A5 {
        threshold1: ThresholdEutra,
        threshold2: ThresholdEutra,
    },
    A6 {
        /// -30..30
        offset: i8,
        report_on_leave: bool,
    },
    Unknown(UnknownAlternative),
}

impl EventEutra {
    pub const NAME: &'static str = "ReportConfigEUTRA-eventId";
    const ROOT_VARIANTS: u64 = 5;
    const KNOWN_VARIANTS: u64 = 6;
}

impl Writable for EventEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            EventEutra::A1 { threshold } => {
                writer.write_choice_index(Self::NAME, 0, Self::ROOT_VARIANTS, true)?;
                writer.write(threshold)
            }
            EventEutra::A2 { threshold } => {
                writer.write_choice_index(Self::NAME, 1, Self::ROOT_VARIANTS, true)?;
                writer.write(threshold)
            }
            EventEutra::A3 {
                offset,
                report_on_leave,
            } => {
                writer.write_choice_index(Self::NAME, 2, Self::ROOT_VARIANTS, true)?;
                writer.write_int(*offset, -30, 30)?;
                writer.write_bit(*report_on_leave)
            }
            EventEutra::A4 { threshold } => {
                writer.write_choice_index(Self::NAME, 3, Self::ROOT_VARIANTS, true)?;
                writer.write(threshold)
            }
            EventEutra::A5 {
                threshold1,
                threshold2,
            } => {
                writer.write_choice_index(Self::NAME, 4, Self::ROOT_VARIANTS, true)?;
                writer.write(threshold1)?;
                writer.write(threshold2)
            }
            EventEutra::A6 {
                offset,
                report_on_leave,
            } => {
                writer.write_choice_index(Self::NAME, 5, Self::ROOT_VARIANTS, true)?;
                writer.write_open_type(|w| {
                    w.write_int(*offset, -30, 30)?;
                    w.write_bit(*report_on_leave)
                })
            }
            EventEutra::Unknown(unknown) => {
                unknown.write(writer, Self::NAME, Self::KNOWN_VARIANTS, Self::ROOT_VARIANTS)
            }
        }
    }
}

impl Readable for EventEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(
            match reader.read_choice_index(Self::NAME, Self::ROOT_VARIANTS, true)? {
                0 => EventEutra::A1 {
                    threshold: reader.read()?,
                },
                1 => EventEutra::A2 {
                    threshold: reader.read()?,
                },
                2 => EventEutra::A3 {
                    offset: reader.read_int(-30, 30)?,
                    report_on_leave: reader.read_bit()?,
                },
                3 => EventEutra::A4 {
                    threshold: reader.read()?,
                },
                4 => EventEutra::A5 {
                    threshold1: reader.read()?,
                    threshold2: reader.read()?,
                },
                5 => reader.read_open_type(Self::NAME, |r| {
                    Ok(EventEutra::A6 {
                        offset: r.read_int(-30, 30)?,
                        report_on_leave: r.read_bit()?,
                    })
                })?,
                index => EventEutra::Unknown(UnknownAlternative::read(reader, Self::NAME, index)?),
            },
        )
    }
}

/// `triggerType` of a report configuration, generic over the event type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerType<E, P> {
    Event {
        event_id: E,
        /// `Hysteresis ::= INTEGER (0..30)`, in half dB
        hysteresis: u8,
        time_to_trigger: TimeToTrigger,
    },
    Periodical {
        purpose: P,
    },
}

impl<E: Writable, P: Writable> Writable for TriggerType<E, P> {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            TriggerType::Event {
                event_id,
                hysteresis,
                time_to_trigger,
            } => {
                writer.write_choice_index("triggerType", 0, 2, false)?;
                writer.write(event_id)?;
                writer.write_int(*hysteresis, 0, 30)?;
                writer.write(time_to_trigger)
            }
            TriggerType::Periodical { purpose } => {
                writer.write_choice_index("triggerType", 1, 2, false)?;
                writer.write(purpose)
            }
        }
    }
}

impl<E: Readable, P: Readable> Readable for TriggerType<E, P> {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("triggerType", 2, false)? {
            0 => Ok(TriggerType::Event {
                event_id: reader.read()?,
                hysteresis: reader.read_int(0, 30)?,
                time_to_trigger: reader.read()?,
            }),
            _ => Ok(TriggerType::Periodical {
                purpose: reader.read()?,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfigEutra {
    pub trigger_type: TriggerType<EventEutra, PurposeEutra>,
    pub trigger_quantity: TriggerQuantity,
    pub report_quantity: ReportQuantity,
    /// 1..maxCellReport
    pub max_report_cells: u8,
    pub report_interval: ReportInterval,
    pub report_amount: ReportAmount,
    pub si_request_for_ho: bool,
    pub ue_rx_tx_time_diff_periodical: bool,
    pub include_location_info: bool,
    pub report_add_neigh_meas: bool,
}

impl ReportConfigEutra {
    pub const NAME: &'static str = "ReportConfigEUTRA";
}

impl Writable for ReportConfigEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let r9_flags = [self.si_request_for_ho, self.ue_rx_tx_time_diff_periodical];
        let r10_flags = [self.include_location_info, self.report_add_neigh_meas];
        let r9 = Some(WriteWith(move |w: &mut UperWriter| w.write_presence(&r9_flags)))
            .filter(|_| r9_flags.contains(&true));
        let r10 = Some(WriteWith(move |w: &mut UperWriter| w.write_presence(&r10_flags)))
            .filter(|_| r10_flags.contains(&true));
        let additions = [addition(&r9), addition(&r10)];

        writer.write_extension_marker(&additions)?;
        writer.write(&self.trigger_type)?;
        writer.write(&self.trigger_quantity)?;
        writer.write(&self.report_quantity)?;
        writer.write_int(self.max_report_cells, 1, MAX_CELL_REPORT as i64)?;
        writer.write(&self.report_interval)?;
        writer.write(&self.report_amount)?;
        writer.write_extension_additions(&additions)
    }
}

impl Readable for ReportConfigEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let mut value = ReportConfigEutra {
            trigger_type: reader.read()?,
            trigger_quantity: reader.read()?,
            report_quantity: reader.read()?,
            max_report_cells: reader.read_int(1, MAX_CELL_REPORT as i64)?,
            report_interval: reader.read()?,
            report_amount: reader.read()?,
            si_request_for_ho: false,
            ue_rx_tx_time_diff_periodical: false,
            include_location_info: false,
            report_add_neigh_meas: false,
        };
        reader.read_extension_additions(Self::NAME, extended, 2, |index, reader| {
            let [first, second] = reader.read_presence()?;
            if index == 0 {
                value.si_request_for_ho = first;
                value.ue_rx_tx_time_diff_periodical = second;
            } else {
                value.include_location_info = first;
                value.report_add_neigh_meas = second;
            }
            Ok(())
        })?;
        Ok(value)
    }
}

/// `ThresholdUTRA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdUtra {
    /// -5..91
    Rscp(i8),
    /// 0..49
    EcN0(u8),
}

impl Writable for ThresholdUtra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            ThresholdUtra::Rscp(value) => {
                writer.write_choice_index("ThresholdUTRA", 0, 2, false)?;
                writer.write_int(*value, UTRA_RSCP_MIN, UTRA_RSCP_MAX)
            }
            ThresholdUtra::EcN0(value) => {
                writer.write_choice_index("ThresholdUTRA", 1, 2, false)?;
                writer.write_int(*value, 0, UTRA_ECN0_MAX)
            }
        }
    }
}

impl Readable for ThresholdUtra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("ThresholdUTRA", 2, false)? {
            0 => Ok(ThresholdUtra::Rscp(
                reader.read_int(UTRA_RSCP_MIN, UTRA_RSCP_MAX)?,
            )),
            _ => Ok(ThresholdUtra::EcN0(reader.read_int(0, UTRA_ECN0_MAX)?)),
        }
    }
}

/// Threshold of an inter-RAT event for the neighbouring system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdInterRat {
    Utra(ThresholdUtra),
    /// `ThresholdGERAN ::= RSSI-Range-GERAN`, 0..63
    Geran(u8),
    /// 0..63
    Cdma2000(u8),
}

impl Writable for ThresholdInterRat {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            ThresholdInterRat::Utra(value) => {
                writer.write_choice_index("threshold", 0, 3, false)?;
                writer.write(value)
            }
            ThresholdInterRat::Geran(value) => {
                writer.write_choice_index("threshold", 1, 3, false)?;
                writer.write_int(*value, 0, 63)
            }
            ThresholdInterRat::Cdma2000(value) => {
                writer.write_choice_index("threshold", 2, 3, false)?;
                writer.write_int(*value, 0, 63)
            }
        }
    }
}

impl Readable for ThresholdInterRat {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("threshold", 3, false)? {
            0 => Ok(ThresholdInterRat::Utra(reader.read()?)),
            1 => Ok(ThresholdInterRat::Geran(reader.read_int(0, 63)?)),
            _ => Ok(ThresholdInterRat::Cdma2000(reader.read_int(0, 63)?)),
        }
    }
}

/// `eventId` of `ReportConfigInterRAT`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventInterRat {
    B1 {
        threshold: ThresholdInterRat,
    },
    B2 {
        threshold1: ThresholdEutra,
        threshold2: ThresholdInterRat,
    },
    Unknown(UnknownAlternative),
}

impl EventInterRat {
    pub const NAME: &'static str = "ReportConfigInterRAT-eventId";
    const ROOT_VARIANTS: u64 = 2;
}

impl Writable for EventInterRat {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            EventInterRat::B1 { threshold } => {
                writer.write_choice_index(Self::NAME, 0, Self::ROOT_VARIANTS, true)?;
                writer.write(threshold)
            }
            EventInterRat::B2 {
                threshold1,
                threshold2,
            } => {
                writer.write_choice_index(Self::NAME, 1, Self::ROOT_VARIANTS, true)?;
                writer.write(threshold1)?;
                writer.write(threshold2)
            }
            EventInterRat::Unknown(unknown) => {
                unknown.write(writer, Self::NAME, Self::ROOT_VARIANTS, Self::ROOT_VARIANTS)
            }
        }
    }
}

impl Readable for EventInterRat {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(
            match reader.read_choice_index(Self::NAME, Self::ROOT_VARIANTS, true)? {
                0 => EventInterRat::B1 {
                    threshold: reader.read()?,
                },
                1 => EventInterRat::B2 {
                    threshold1: reader.read()?,
                    threshold2: reader.read()?,
                },
                index => {
                    EventInterRat::Unknown(UnknownAlternative::read(reader, Self::NAME, index)?)
                }
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfigInterRat {
    pub trigger_type: TriggerType<EventInterRat, PurposeInterRat>,
    /// 1..maxCellReport
    pub max_report_cells: u8,
    pub report_interval: ReportInterval,
    pub report_amount: ReportAmount,
    pub si_request_for_ho: bool,
    /// `reportQuantityUTRA-FDD-r10` set to `both`
    pub report_quantity_utra_fdd_both: bool,
}

impl ReportConfigInterRat {
    pub const NAME: &'static str = "ReportConfigInterRAT";
}

impl Writable for ReportConfigInterRat {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let r9 = Some(WriteWith(|w: &mut UperWriter| w.write_presence(&[true])))
            .filter(|_| self.si_request_for_ho);
        let r10 = Some(WriteWith(|w: &mut UperWriter| w.write_presence(&[true])))
            .filter(|_| self.report_quantity_utra_fdd_both);
        let additions = [addition(&r9), addition(&r10)];

        writer.write_extension_marker(&additions)?;
        writer.write(&self.trigger_type)?;
        writer.write_int(self.max_report_cells, 1, MAX_CELL_REPORT as i64)?;
        writer.write(&self.report_interval)?;
        writer.write(&self.report_amount)?;
        writer.write_extension_additions(&additions)
    }
}

impl Readable for ReportConfigInterRat {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let mut value = ReportConfigInterRat {
            trigger_type: reader.read()?,
            max_report_cells: reader.read_int(1, MAX_CELL_REPORT as i64)?,
            report_interval: reader.read()?,
            report_amount: reader.read()?,
            si_request_for_ho: false,
            report_quantity_utra_fdd_both: false,
        };
        reader.read_extension_additions(Self::NAME, extended, 2, |index, reader| {
            let [present] = reader.read_presence()?;
            match index {
                0 => value.si_request_for_ho = present,
                _ => value.report_quantity_utra_fdd_both = present,
            }
            Ok(())
        })?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportConfig {
    Eutra(ReportConfigEutra),
    InterRat(ReportConfigInterRat),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfigToAddMod {
    pub report_config_id: ReportConfigId,
    pub report_config: ReportConfig,
}

impl Writable for ReportConfigToAddMod {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.report_config_id, 1, MAX_REPORT_CONFIG_ID as i64)?;
        match &self.report_config {
            ReportConfig::Eutra(value) => {
                writer.write_choice_index("reportConfig", 0, 2, false)?;
                writer.write(value)
            }
            ReportConfig::InterRat(value) => {
                writer.write_choice_index("reportConfig", 1, 2, false)?;
                writer.write(value)
            }
        }
    }
}

impl Readable for ReportConfigToAddMod {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let report_config_id = reader.read_int(1, MAX_REPORT_CONFIG_ID as i64)?;
        let report_config = match reader.read_choice_index("reportConfig", 2, false)? {
            0 => ReportConfig::Eutra(reader.read()?),
            _ => ReportConfig::InterRat(reader.read()?),
        };
        Ok(ReportConfigToAddMod {
            report_config_id,
            report_config,
        })
    }
}

/// Links a measurement object with a report configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasIdToAddMod {
    pub meas_id: MeasId,
    pub meas_object_id: MeasObjectId,
    pub report_config_id: ReportConfigId,
}

impl Writable for MeasIdToAddMod {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.meas_id, 1, MAX_MEAS_ID as i64)?;
        writer.write_int(self.meas_object_id, 1, MAX_OBJECT_ID as i64)?;
        writer.write_int(self.report_config_id, 1, MAX_REPORT_CONFIG_ID as i64)
    }
}

impl Readable for MeasIdToAddMod {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(MeasIdToAddMod {
            meas_id: reader.read_int(1, MAX_MEAS_ID as i64)?,
            meas_object_id: reader.read_int(1, MAX_OBJECT_ID as i64)?,
            report_config_id: reader.read_int(1, MAX_REPORT_CONFIG_ID as i64)?,
        })
    }
}

/// Writes an optional filter coefficient whose presence bit was already written
fn write_filter(writer: &mut UperWriter, value: &Option<FilterCoefficient>) -> Result<(), Error> {
    match value {
        Some(value) => writer.write(value),
        None => Ok(()),
    }
}

fn read_filter(
    reader: &mut UperReader<'_>,
    present: bool,
) -> Result<Option<FilterCoefficient>, Error> {
    if present {
        Ok(Some(reader.read()?))
    } else {
        Ok(None)
    }
}

/// Layer 3 filtering of E-UTRA measurements, absent coefficients default to fc4
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityConfigEutra {
    pub filter_coefficient_rsrp: Option<FilterCoefficient>,
    pub filter_coefficient_rsrq: Option<FilterCoefficient>,
}

impl Writable for QuantityConfigEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.filter_coefficient_rsrp.is_some(),
            self.filter_coefficient_rsrq.is_some(),
        ])?;
        write_filter(writer, &self.filter_coefficient_rsrp)?;
        write_filter(writer, &self.filter_coefficient_rsrq)
    }
}

impl Readable for QuantityConfigEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [rsrp, rsrq] = reader.read_presence()?;
        Ok(QuantityConfigEutra {
            filter_coefficient_rsrp: read_filter(reader, rsrp)?,
            filter_coefficient_rsrq: read_filter(reader, rsrq)?,
        })
    }
}

/// The TDD quantity is always `pccpch-RSCP` and takes no bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityConfigUtra {
    pub meas_quantity_utra_fdd: MeasQuantityUtraFdd,
    pub filter_coefficient: Option<FilterCoefficient>,
}

impl Writable for QuantityConfigUtra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.filter_coefficient.is_some()])?;
        writer.write(&self.meas_quantity_utra_fdd)?;
        write_filter(writer, &self.filter_coefficient)
    }
}

impl Readable for QuantityConfigUtra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [filter] = reader.read_presence()?;
        Ok(QuantityConfigUtra {
            meas_quantity_utra_fdd: reader.read()?,
            filter_coefficient: read_filter(reader, filter)?,
        })
    }
}

/// The quantity is always `rssi`, the coefficient defaults to fc2
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityConfigGeran {
    pub filter_coefficient: Option<FilterCoefficient>,
}

impl Writable for QuantityConfigGeran {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.filter_coefficient.is_some()])?;
        write_filter(writer, &self.filter_coefficient)
    }
}

impl Readable for QuantityConfigGeran {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [filter] = reader.read_presence()?;
        Ok(QuantityConfigGeran {
            filter_coefficient: read_filter(reader, filter)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityConfig {
    pub quantity_config_eutra: Option<QuantityConfigEutra>,
    pub quantity_config_utra: Option<QuantityConfigUtra>,
    pub quantity_config_geran: Option<QuantityConfigGeran>,
    pub quantity_config_cdma2000: Option<MeasQuantityCdma2000>,
    /// `QuantityConfigUTRA-v1020` with its `filterCoefficient2-FDD-r10`
    pub quantity_config_utra_v1020: Option<Option<FilterCoefficient>>,
}

impl QuantityConfig {
    pub const NAME: &'static str = "QuantityConfig";
}

impl Writable for QuantityConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let v1020 = self.quantity_config_utra_v1020.map(|filter| {
            WriteWith(move |w: &mut UperWriter| {
                w.write_presence(&[true])?;
                w.write_presence(&[filter.is_some()])?;
                write_filter(w, &filter)
            })
        });
        let additions = [addition(&v1020)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.quantity_config_eutra.is_some(),
            self.quantity_config_utra.is_some(),
            self.quantity_config_geran.is_some(),
            self.quantity_config_cdma2000.is_some(),
        ])?;
        if let Some(value) = &self.quantity_config_eutra {
            writer.write(value)?;
        }
        if let Some(value) = &self.quantity_config_utra {
            writer.write(value)?;
        }
        if let Some(value) = &self.quantity_config_geran {
            writer.write(value)?;
        }
        if let Some(value) = &self.quantity_config_cdma2000 {
            writer.write(value)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for QuantityConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [eutra, utra, geran, cdma2000] = reader.read_presence()?;
        let mut value = QuantityConfig {
            quantity_config_eutra: if eutra { Some(reader.read()?) } else { None },
            quantity_config_utra: if utra { Some(reader.read()?) } else { None },
            quantity_config_geran: if geran { Some(reader.read()?) } else { None },
            quantity_config_cdma2000: if cdma2000 { Some(reader.read()?) } else { None },
            quantity_config_utra_v1020: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            let [present] = reader.read_presence()?;
            if present {
                let [filter] = reader.read_presence()?;
                value.quantity_config_utra_v1020 = Some(read_filter(reader, filter)?);
            }
            Ok(())
        })?;
        Ok(value)
    }
}

/// `gapOffset` of `MeasGapConfig`, pattern 0 with a period of 40 ms or pattern 1 with 80 ms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapOffset {
    /// 0..39
    Gp0(u8),
    /// 0..79
    Gp1(u8),
    Unknown(UnknownAlternative),
}

impl GapOffset {
    pub const NAME: &'static str = "MeasGapConfig-gapOffset";
    const ROOT_VARIANTS: u64 = 2;
}

impl Writable for GapOffset {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            GapOffset::Gp0(offset) => {
                writer.write_choice_index(Self::NAME, 0, Self::ROOT_VARIANTS, true)?;
                writer.write_int(*offset, 0, 39)
            }
            GapOffset::Gp1(offset) => {
                writer.write_choice_index(Self::NAME, 1, Self::ROOT_VARIANTS, true)?;
                writer.write_int(*offset, 0, 79)
            }
            GapOffset::Unknown(unknown) => {
                unknown.write(writer, Self::NAME, Self::ROOT_VARIANTS, Self::ROOT_VARIANTS)
            }
        }
    }
}

impl Readable for GapOffset {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index(Self::NAME, Self::ROOT_VARIANTS, true)? {
            0 => Ok(GapOffset::Gp0(reader.read_int(0, 39)?)),
            1 => Ok(GapOffset::Gp1(reader.read_int(0, 79)?)),
            index => Ok(GapOffset::Unknown(UnknownAlternative::read(
                reader,
                Self::NAME,
                index,
            )?)),
        }
    }
}

pub type MeasGapConfig = SetupRelease<GapOffset>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreRegistrationInfoHrpd {
    pub pre_registration_allowed: bool,
    pub pre_registration_zone_id: Option<u8>,
    /// 1..2 zone identities
    pub secondary_pre_registration_zone_id_list: Option<Vec<u8>>,
}

impl Writable for PreRegistrationInfoHrpd {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.pre_registration_zone_id.is_some(),
            self.secondary_pre_registration_zone_id_list.is_some(),
        ])?;
        writer.write_bit(self.pre_registration_allowed)?;
        if let Some(zone) = self.pre_registration_zone_id {
            writer.write_bits(u64::from(zone), 8)?;
        }
        if let Some(list) = &self.secondary_pre_registration_zone_id_list {
            writer.write_sequence_of_with(list, 1, 2, |w, zone| w.write_bits(u64::from(*zone), 8))?;
        }
        Ok(())
    }
}

impl Readable for PreRegistrationInfoHrpd {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [zone, secondary] = reader.read_presence()?;
        Ok(PreRegistrationInfoHrpd {
            pre_registration_allowed: reader.read_bit()?,
            pre_registration_zone_id: if zone { Some(reader.read_bits(8)?) } else { None },
            secondary_pre_registration_zone_id_list: if secondary {
                Some(reader.read_sequence_of_with(1, 2, |r| r.read_bits(8))?)
            } else {
                None
            },
        })
    }
}

/// Setup content of `speedStatePars`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedStateParameters {
    pub mobility_state_parameters: MobilityStateParameters,
    pub time_to_trigger_sf: SpeedStateScaleFactors,
}

impl Writable for SpeedStateParameters {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.mobility_state_parameters)?;
        writer.write(&self.time_to_trigger_sf)
    }
}

impl Readable for SpeedStateParameters {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(SpeedStateParameters {
            mobility_state_parameters: reader.read()?,
            time_to_trigger_sf: reader.read()?,
        })
    }
}

pub type SpeedStatePars = SetupRelease<SpeedStateParameters>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasConfig {
    pub meas_object_to_remove_list: Option<Vec<MeasObjectId>>,
    pub meas_object_to_add_mod_list: Option<Vec<MeasObjectToAddMod>>,
    pub report_config_to_remove_list: Option<Vec<ReportConfigId>>,
    pub report_config_to_add_mod_list: Option<Vec<ReportConfigToAddMod>>,
    pub meas_id_to_remove_list: Option<Vec<MeasId>>,
    pub meas_id_to_add_mod_list: Option<Vec<MeasIdToAddMod>>,
    pub quantity_config: Option<QuantityConfig>,
    pub meas_gap_config: Option<MeasGapConfig>,
    /// `RSRP-Range`, 0..97
    pub s_measure: Option<u8>,
    pub pre_registration_info_hrpd: Option<PreRegistrationInfoHrpd>,
    pub speed_state_pars: Option<SpeedStatePars>,
}

impl Writable for MeasConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[
            self.meas_object_to_remove_list.is_some(),
            self.meas_object_to_add_mod_list.is_some(),
            self.report_config_to_remove_list.is_some(),
            self.report_config_to_add_mod_list.is_some(),
            self.meas_id_to_remove_list.is_some(),
            self.meas_id_to_add_mod_list.is_some(),
            self.quantity_config.is_some(),
            self.meas_gap_config.is_some(),
            self.s_measure.is_some(),
            self.pre_registration_info_hrpd.is_some(),
            self.speed_state_pars.is_some(),
        ])?;
        if let Some(list) = &self.meas_object_to_remove_list {
            write_id_list(writer, list, MAX_OBJECT_ID)?;
        }
        if let Some(list) = &self.meas_object_to_add_mod_list {
            writer.write_sequence_of(list, 1, MAX_OBJECT_ID)?;
        }
        if let Some(list) = &self.report_config_to_remove_list {
            write_id_list(writer, list, MAX_REPORT_CONFIG_ID)?;
        }
        if let Some(list) = &self.report_config_to_add_mod_list {
            writer.write_sequence_of(list, 1, MAX_REPORT_CONFIG_ID)?;
        }
        if let Some(list) = &self.meas_id_to_remove_list {
            write_id_list(writer, list, MAX_MEAS_ID)?;
        }
        if let Some(list) = &self.meas_id_to_add_mod_list {
            writer.write_sequence_of(list, 1, MAX_MEAS_ID)?;
        }
        if let Some(value) = &self.quantity_config {
            writer.write(value)?;
        }
        if let Some(value) = &self.meas_gap_config {
            writer.write(value)?;
        }
        if let Some(value) = self.s_measure {
            writer.write_int(value, 0, RSRP_RANGE_MAX)?;
        }
        if let Some(value) = &self.pre_registration_info_hrpd {
            writer.write(value)?;
        }
        if let Some(value) = &self.speed_state_pars {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for MeasConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [
            object_remove,
            object_add,
            report_remove,
            report_add,
            id_remove,
            id_add,
            quantity,
            gap,
            s_measure,
            hrpd,
            speed,
        ] = reader.read_presence()?;
        let value = MeasConfig {
            meas_object_to_remove_list: if object_remove {
                Some(read_id_list(reader, MAX_OBJECT_ID)?)
            } else {
                None
            },
            meas_object_to_add_mod_list: if object_add {
                Some(reader.read_sequence_of(1, MAX_OBJECT_ID)?)
            } else {
                None
            },
            report_config_to_remove_list: if report_remove {
                Some(read_id_list(reader, MAX_REPORT_CONFIG_ID)?)
            } else {
                None
            },
            report_config_to_add_mod_list: if report_add {
                Some(reader.read_sequence_of(1, MAX_REPORT_CONFIG_ID)?)
            } else {
                None
            },
            meas_id_to_remove_list: if id_remove {
                Some(read_id_list(reader, MAX_MEAS_ID)?)
            } else {
                None
            },
            meas_id_to_add_mod_list: if id_add {
                Some(reader.read_sequence_of(1, MAX_MEAS_ID)?)
            } else {
                None
            },
            quantity_config: if quantity { Some(reader.read()?) } else { None },
            meas_gap_config: if gap { Some(reader.read()?) } else { None },
            s_measure: if s_measure {
                Some(reader.read_int(0, RSRP_RANGE_MAX)?)
            } else {
                None
            },
            pre_registration_info_hrpd: if hrpd { Some(reader.read()?) } else { None },
            speed_state_pars: if speed { Some(reader.read()?) } else { None },
        };
        reader.read_extension_additions("MeasConfig", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

/// `AdditionalSI-Info-r9`, the CSG membership of a reported cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalSiInfo {
    pub csg_member_status: bool,
    /// `CSG-Identity`, 27 bits
    pub csg_identity: Option<u32>,
}

impl Writable for AdditionalSiInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.csg_member_status, self.csg_identity.is_some()])?;
        if let Some(identity) = self.csg_identity {
            writer.write_bits(u64::from(identity), 27)?;
        }
        Ok(())
    }
}

impl Readable for AdditionalSiInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [member, identity] = reader.read_presence()?;
        Ok(AdditionalSiInfo {
            csg_member_status: member,
            csg_identity: if identity { Some(reader.read_bits(27)?) } else { None },
        })
    }
}

/// The extension group carrying `additionalSI-Info-r9` of a neighbour cell result
fn additional_si_info_group(
    value: &Option<AdditionalSiInfo>,
) -> Option<WriteWith<impl Fn(&mut UperWriter) -> Result<(), Error> + '_>> {
    value.as_ref().map(|info| {
        WriteWith(move |w: &mut UperWriter| {
            w.write_presence(&[true])?;
            w.write(info)
        })
    })
}

fn read_additional_si_info_group(
    reader: &mut UperReader<'_>,
) -> Result<Option<AdditionalSiInfo>, Error> {
    let [present] = reader.read_presence()?;
    if present {
        Ok(Some(reader.read()?))
    } else {
        Ok(None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CgiInfoEutra {
    pub cell_global_id: CellGlobalIdEutra,
    pub tracking_area_code: TrackingAreaCode,
    pub plmn_identity_list: Option<Vec<PlmnIdentity>>,
}

impl Writable for CgiInfoEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.plmn_identity_list.is_some()])?;
        writer.write(&self.cell_global_id)?;
        writer.write_bits(u64::from(self.tracking_area_code), 16)?;
        if let Some(list) = &self.plmn_identity_list {
            write_plmn_identity_list2(writer, list)?;
        }
        Ok(())
    }
}

impl Readable for CgiInfoEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [list] = reader.read_presence()?;
        Ok(CgiInfoEutra {
            cell_global_id: reader.read()?,
            tracking_area_code: reader.read_bits(16)?,
            plmn_identity_list: if list {
                Some(read_plmn_identity_list2(reader)?)
            } else {
                None
            },
        })
    }
}

/// `measResult` of `MeasResultEUTRA`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasResultQuantitiesEutra {
    pub rsrp_result: Option<u8>,
    pub rsrq_result: Option<u8>,
    pub additional_si_info: Option<AdditionalSiInfo>,
}

impl Writable for MeasResultQuantitiesEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let r9 = additional_si_info_group(&self.additional_si_info);
        let additions = [addition(&r9)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[self.rsrp_result.is_some(), self.rsrq_result.is_some()])?;
        if let Some(rsrp) = self.rsrp_result {
            writer.write_int(rsrp, 0, RSRP_RANGE_MAX)?;
        }
        if let Some(rsrq) = self.rsrq_result {
            writer.write_int(rsrq, 0, RSRQ_RANGE_MAX)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for MeasResultQuantitiesEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [rsrp, rsrq] = reader.read_presence()?;
        let mut value = MeasResultQuantitiesEutra {
            rsrp_result: if rsrp {
                Some(reader.read_int(0, RSRP_RANGE_MAX)?)
            } else {
                None
            },
            rsrq_result: if rsrq {
                Some(reader.read_int(0, RSRQ_RANGE_MAX)?)
            } else {
                None
            },
            additional_si_info: None,
        };
        reader.read_extension_additions("MeasResultEUTRA-measResult", extended, 1, |_, reader| {
            value.additional_si_info = read_additional_si_info_group(reader)?;
            Ok(())
        })?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasResultEutra {
    pub phys_cell_id: PhysCellId,
    pub cgi_info: Option<CgiInfoEutra>,
    pub meas_result: MeasResultQuantitiesEutra,
}

impl Writable for MeasResultEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.cgi_info.is_some()])?;
        write_phys_cell_id(writer, self.phys_cell_id)?;
        if let Some(value) = &self.cgi_info {
            writer.write(value)?;
        }
        writer.write(&self.meas_result)
    }
}

impl Readable for MeasResultEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [cgi] = reader.read_presence()?;
        Ok(MeasResultEutra {
            phys_cell_id: read_phys_cell_id(reader)?,
            cgi_info: if cgi { Some(reader.read()?) } else { None },
            meas_result: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CgiInfoUtra {
    pub cell_global_id: CellGlobalIdUtra,
    pub location_area_code: Option<u16>,
    pub routing_area_code: Option<u8>,
    pub plmn_identity_list: Option<Vec<PlmnIdentity>>,
}

impl Writable for CgiInfoUtra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.location_area_code.is_some(),
            self.routing_area_code.is_some(),
            self.plmn_identity_list.is_some(),
        ])?;
        writer.write(&self.cell_global_id)?;
        if let Some(lac) = self.location_area_code {
            writer.write_bits(u64::from(lac), 16)?;
        }
        if let Some(rac) = self.routing_area_code {
            writer.write_bits(u64::from(rac), 8)?;
        }
        if let Some(list) = &self.plmn_identity_list {
            write_plmn_identity_list2(writer, list)?;
        }
        Ok(())
    }
}

impl Readable for CgiInfoUtra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [lac, rac, list] = reader.read_presence()?;
        Ok(CgiInfoUtra {
            cell_global_id: reader.read()?,
            location_area_code: if lac { Some(reader.read_bits(16)?) } else { None },
            routing_area_code: if rac { Some(reader.read_bits(8)?) } else { None },
            plmn_identity_list: if list {
                Some(read_plmn_identity_list2(reader)?)
            } else {
                None
            },
        })
    }
}

/// `measResult` of `MeasResultUTRA`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasResultQuantitiesUtra {
    /// -5..91
    pub utra_rscp: Option<i8>,
    /// 0..49
    pub utra_ecn0: Option<u8>,
    pub additional_si_info: Option<AdditionalSiInfo>,
}

impl Writable for MeasResultQuantitiesUtra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let r9 = additional_si_info_group(&self.additional_si_info);
        let additions = [addition(&r9)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[self.utra_rscp.is_some(), self.utra_ecn0.is_some()])?;
        if let Some(rscp) = self.utra_rscp {
            writer.write_int(rscp, UTRA_RSCP_MIN, UTRA_RSCP_MAX)?;
        }
        if let Some(ecn0) = self.utra_ecn0 {
            writer.write_int(ecn0, 0, UTRA_ECN0_MAX)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for MeasResultQuantitiesUtra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [rscp, ecn0] = reader.read_presence()?;
        let mut value = MeasResultQuantitiesUtra {
            utra_rscp: if rscp {
                Some(reader.read_int(UTRA_RSCP_MIN, UTRA_RSCP_MAX)?)
            } else {
                None
            },
            utra_ecn0: if ecn0 {
                Some(reader.read_int(0, UTRA_ECN0_MAX)?)
            } else {
                None
            },
            additional_si_info: None,
        };
        reader.read_extension_additions("MeasResultUTRA-measResult", extended, 1, |_, reader| {
            value.additional_si_info = read_additional_si_info_group(reader)?;
            Ok(())
        })?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasResultUtra {
    pub phys_cell_id: PhysCellIdUtra,
    pub cgi_info: Option<CgiInfoUtra>,
    pub meas_result: MeasResultQuantitiesUtra,
}

impl Writable for MeasResultUtra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.cgi_info.is_some()])?;
        writer.write(&self.phys_cell_id)?;
        if let Some(value) = &self.cgi_info {
            writer.write(value)?;
        }
        writer.write(&self.meas_result)
    }
}

impl Readable for MeasResultUtra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [cgi] = reader.read_presence()?;
        Ok(MeasResultUtra {
            phys_cell_id: reader.read()?,
            cgi_info: if cgi { Some(reader.read()?) } else { None },
            meas_result: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CgiInfoGeran {
    pub cell_global_id: CellGlobalIdGeran,
    pub routing_area_code: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasResultGeran {
    pub carrier_freq: CarrierFreqGeran,
    pub phys_cell_id: PhysCellIdGeran,
    pub cgi_info: Option<CgiInfoGeran>,
    /// `RSSI-Range-GERAN`, 0..63
    pub rssi: u8,
}

impl Writable for MeasResultGeran {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.cgi_info.is_some()])?;
        writer.write(&self.carrier_freq)?;
        writer.write(&self.phys_cell_id)?;
        if let Some(cgi) = &self.cgi_info {
            writer.write_presence(&[cgi.routing_area_code.is_some()])?;
            writer.write(&cgi.cell_global_id)?;
            if let Some(rac) = cgi.routing_area_code {
                writer.write_bits(u64::from(rac), 8)?;
            }
        }
        writer.write_extension_marker(&[])?;
        writer.write_int(self.rssi, 0, 63)
    }
}

impl Readable for MeasResultGeran {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [cgi] = reader.read_presence()?;
        let carrier_freq = reader.read()?;
        let phys_cell_id = reader.read()?;
        let cgi_info = if cgi {
            let [rac] = reader.read_presence()?;
            Some(CgiInfoGeran {
                cell_global_id: reader.read()?,
                routing_area_code: if rac { Some(reader.read_bits(8)?) } else { None },
            })
        } else {
            None
        };
        let extended = reader.read_extension_marker()?;
        let rssi = reader.read_int(0, 63)?;
        reader.read_extension_additions("MeasResultGERAN-measResult", extended, 0, |_, _| Ok(()))?;
        Ok(MeasResultGeran {
            carrier_freq,
            phys_cell_id,
            cgi_info,
            rssi,
        })
    }
}

/// `measResultNeighCells` of `MeasResults`. CDMA2000 results cannot be encoded nor decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasResultNeighCells {
    Eutra(Vec<MeasResultEutra>),
    Utra(Vec<MeasResultUtra>),
    Geran(Vec<MeasResultGeran>),
    Unknown(UnknownAlternative),
}

impl MeasResultNeighCells {
    pub const NAME: &'static str = "MeasResults-measResultNeighCells";
    const ROOT_VARIANTS: u64 = 4;
}

impl Writable for MeasResultNeighCells {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            MeasResultNeighCells::Eutra(list) => {
                writer.write_choice_index(Self::NAME, 0, Self::ROOT_VARIANTS, true)?;
                writer.write_sequence_of(list, 1, MAX_CELL_REPORT)
            }
            MeasResultNeighCells::Utra(list) => {
                writer.write_choice_index(Self::NAME, 1, Self::ROOT_VARIANTS, true)?;
                writer.write_sequence_of(list, 1, MAX_CELL_REPORT)
            }
            MeasResultNeighCells::Geran(list) => {
                writer.write_choice_index(Self::NAME, 2, Self::ROOT_VARIANTS, true)?;
                writer.write_sequence_of(list, 1, MAX_CELL_REPORT)
            }
            MeasResultNeighCells::Unknown(unknown) => {
                unknown.write(writer, Self::NAME, Self::ROOT_VARIANTS, Self::ROOT_VARIANTS)
            }
        }
    }
}

impl Readable for MeasResultNeighCells {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index(Self::NAME, Self::ROOT_VARIANTS, true)? {
            0 => Ok(MeasResultNeighCells::Eutra(
                reader.read_sequence_of(1, MAX_CELL_REPORT)?,
            )),
            1 => Ok(MeasResultNeighCells::Utra(
                reader.read_sequence_of(1, MAX_CELL_REPORT)?,
            )),
            2 => Ok(MeasResultNeighCells::Geran(
                reader.read_sequence_of(1, MAX_CELL_REPORT)?,
            )),
            3 => Err(Error::unsupported("measResultsCDMA2000")),
            index => Ok(MeasResultNeighCells::Unknown(UnknownAlternative::read(
                reader,
                Self::NAME,
                index,
            )?)),
        }
    }
}

/// `MeasResultForECID-r9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasResultForEcid {
    /// 0..4095
    pub ue_rx_tx_time_diff_result: u16,
    /// 10 bits
    pub current_sfn: u16,
}

impl Writable for MeasResultForEcid {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.ue_rx_tx_time_diff_result, 0, 4095)?;
        writer.write_bits(u64::from(self.current_sfn), 10)
    }
}

impl Readable for MeasResultForEcid {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(MeasResultForEcid {
            ue_rx_tx_time_diff_result: reader.read_int(0, 4095)?,
            current_sfn: reader.read_bits(10)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasResults {
    pub meas_id: MeasId,
    /// 0..97
    pub rsrp_result_pcell: u8,
    /// 0..34
    pub rsrq_result_pcell: u8,
    pub meas_result_neigh_cells: Option<MeasResultNeighCells>,
    pub meas_result_for_ecid: Option<MeasResultForEcid>,
    /// `locationInfo-r10` and `measResultServFreqList-r10`, kept as received
    pub extension_r10: Option<OpaqueExtension>,
}

impl MeasResults {
    pub const NAME: &'static str = "MeasResults";
}

impl Writable for MeasResults {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let r9 = self.meas_result_for_ecid.as_ref().map(|value| {
            WriteWith(move |w: &mut UperWriter| {
                w.write_presence(&[true])?;
                w.write(value)
            })
        });
        let additions = [addition(&r9), addition(&self.extension_r10)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[self.meas_result_neigh_cells.is_some()])?;
        writer.write_int(self.meas_id, 1, MAX_MEAS_ID as i64)?;
        writer.write_int(self.rsrp_result_pcell, 0, RSRP_RANGE_MAX)?;
        writer.write_int(self.rsrq_result_pcell, 0, RSRQ_RANGE_MAX)?;
        if let Some(value) = &self.meas_result_neigh_cells {
            writer.write(value)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for MeasResults {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [neigh] = reader.read_presence()?;
        let mut value = MeasResults {
            meas_id: reader.read_int(1, MAX_MEAS_ID as i64)?,
            rsrp_result_pcell: reader.read_int(0, RSRP_RANGE_MAX)?,
            rsrq_result_pcell: reader.read_int(0, RSRQ_RANGE_MAX)?,
            meas_result_neigh_cells: if neigh { Some(reader.read()?) } else { None },
            meas_result_for_ecid: None,
            extension_r10: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 2, |index, reader| {
            if index == 1 {
                value.extension_r10 = Some(reader.read()?);
                return Ok(());
            }
            let [present] = reader.read_presence()?;
            if present {
                value.meas_result_for_ecid = Some(reader.read()?);
            }
            Ok(())
        })?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ies::common::{BandIndicatorGeran, FollowingArfcns};
    use crate::io::per::ErrorKind;

    fn a3_report_config() -> ReportConfigEutra {
        ReportConfigEutra {
            trigger_type: TriggerType::Event {
                event_id: EventEutra::A3 {
                    offset: 6,
                    report_on_leave: false,
                },
                hysteresis: 2,
                time_to_trigger: TimeToTrigger::Ms320,
            },
            trigger_quantity: TriggerQuantity::Rsrp,
            report_quantity: ReportQuantity::Both,
            max_report_cells: 4,
            report_interval: ReportInterval::Ms480,
            report_amount: ReportAmount::R4,
            si_request_for_ho: false,
            ue_rx_tx_time_diff_periodical: false,
            include_location_info: false,
            report_add_neigh_meas: false,
        }
    }

    #[test]
    fn test_report_config_a3_layout() {
        let config = a3_report_config();
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        // extension bit, trigger type, event id (extension bit and index), offset,
        // report on leave, hysteresis, time to trigger, quantities, cells, interval, amount
        assert_eq!(1 + 1 + 4 + 6 + 1 + 5 + 4 + 1 + 1 + 3 + 4 + 3, writer.finish());
        assert_eq!(config, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_event_a6_travels_as_open_type() {
        let mut config = a3_report_config();
        config.trigger_type = TriggerType::Event {
            event_id: EventEutra::A6 {
                offset: -30,
                report_on_leave: true,
            },
            hysteresis: 30,
            time_to_trigger: TimeToTrigger::Ms5120,
        };
        config.include_location_info = true;
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        assert_eq!(config, writer.as_reader().read().unwrap());

        let mut writer = UperWriter::default();
        writer
            .write(&EventEutra::A6 {
                offset: 0,
                report_on_leave: false,
            })
            .unwrap();
        // extension bit, normally small index, length octet, one content octet
        assert_eq!(1 + 7 + 8 + 8, writer.finish());
    }

    #[test]
    fn test_unknown_event_must_not_shadow_a6() {
        let event = EventEutra::Unknown(UnknownAlternative {
            index: 5,
            data: vec![0x00],
        });
        let mut writer = UperWriter::default();
        assert_eq!(
            &ErrorKind::ChoiceVariantMismatch {
                name: EventEutra::NAME,
                index: 5
            },
            writer.write(&event).unwrap_err().kind()
        );
    }

    #[test]
    fn test_meas_object_cdma2000_is_unsupported() {
        let mut writer = UperWriter::default();
        writer.write_choice_index(MeasObject::NAME, 3, 4, true).unwrap();
        writer.write_bits(0, 8).unwrap();
        assert_eq!(
            &ErrorKind::Unsupported("measObjectCDMA2000"),
            writer.as_reader().read::<MeasObject>().unwrap_err().kind()
        );
    }

    #[test]
    fn test_meas_config_round_trip() {
        let config = MeasConfig {
            meas_object_to_remove_list: Some(vec![1, 32]),
            meas_object_to_add_mod_list: Some(vec![
                MeasObjectToAddMod {
                    meas_object_id: 1,
                    meas_object: MeasObject::Eutra(MeasObjectEutra {
                        carrier_freq: 6300,
                        allowed_meas_bandwidth: AllowedMeasBandwidth::Mbw50,
                        presence_antenna_port1: true,
                        neigh_cell_config: 0b01,
                        offset_freq: None,
                        cells_to_remove_list: None,
                        cells_to_add_mod_list: Some(vec![CellsToAddMod {
                            cell_index: 1,
                            phys_cell_id: 503,
                            cell_individual_offset: QOffsetRange::DbMinus2,
                        }]),
                        black_cells_to_remove_list: None,
                        black_cells_to_add_mod_list: None,
                        cell_for_which_to_report_cgi: None,
                        meas_cycle_scell: Some(MeasCycleSCell::Sf640),
                        meas_subframe_pattern_config_neigh: Some(SetupRelease::Release),
                    }),
                },
                MeasObjectToAddMod {
                    meas_object_id: 2,
                    meas_object: MeasObject::Utra(MeasObjectUtra {
                        carrier_freq: 10700,
                        offset_freq: Some(-15),
                        cells_to_remove_list: None,
                        cells_to_add_mod_list: Some(CellsToAddModListUtra::Fdd(vec![
                            CellsToAddModUtraFdd {
                                cell_index: 3,
                                phys_cell_id: 511,
                            },
                        ])),
                        cell_for_which_to_report_cgi: Some(PhysCellIdUtra::Tdd(127)),
                        csg_allowed_reporting_cells: Some(CsgAllowedReportingCells::default()),
                    }),
                },
                MeasObjectToAddMod {
                    meas_object_id: 3,
                    meas_object: MeasObject::Geran(MeasObjectGeran {
                        carrier_freqs: CarrierFreqsGeran {
                            starting_arfcn: 20,
                            band_indicator: BandIndicatorGeran::Dcs1800,
                            following_arfcns: FollowingArfcns::ExplicitList(vec![]),
                        },
                        offset_freq: None,
                        ncc_permitted: Some(0b1111_0000),
                        cell_for_which_to_report_cgi: None,
                    }),
                },
            ]),
            report_config_to_add_mod_list: Some(vec![ReportConfigToAddMod {
                report_config_id: 1,
                report_config: ReportConfig::Eutra(a3_report_config()),
            }]),
            meas_id_to_add_mod_list: Some(vec![MeasIdToAddMod {
                meas_id: 1,
                meas_object_id: 1,
                report_config_id: 1,
            }]),
            quantity_config: Some(QuantityConfig {
                quantity_config_eutra: Some(QuantityConfigEutra::default()),
                quantity_config_utra_v1020: Some(Some(FilterCoefficient::Fc8)),
                ..Default::default()
            }),
            meas_gap_config: Some(SetupRelease::Setup(GapOffset::Gp1(79))),
            s_measure: Some(97),
            ..Default::default()
        };
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        assert_eq!(config, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_inter_rat_report_config_round_trip() {
        let config = ReportConfigInterRat {
            trigger_type: TriggerType::Event {
                event_id: EventInterRat::B2 {
                    threshold1: ThresholdEutra::Rsrq(34),
                    threshold2: ThresholdInterRat::Utra(ThresholdUtra::Rscp(-5)),
                },
                hysteresis: 0,
                time_to_trigger: TimeToTrigger::Ms0,
            },
            max_report_cells: 8,
            report_interval: ReportInterval::Min60,
            report_amount: ReportAmount::Infinity,
            si_request_for_ho: false,
            report_quantity_utra_fdd_both: true,
        };
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        assert_eq!(config, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_meas_results_baseline_layout() {
        let results = MeasResults {
            meas_id: 1,
            rsrp_result_pcell: 50,
            rsrq_result_pcell: 20,
            meas_result_neigh_cells: None,
            meas_result_for_ecid: None,
            extension_r10: None,
        };
        let mut writer = UperWriter::default();
        writer.write(&results).unwrap();
        // extension bit, presence, meas id, rsrp, rsrq
        assert_eq!(1 + 1 + 5 + 7 + 6, writer.finish());
        assert_eq!(results, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_meas_results_with_neighbours_and_groups() {
        let results = MeasResults {
            meas_id: 32,
            rsrp_result_pcell: 97,
            rsrq_result_pcell: 0,
            meas_result_neigh_cells: Some(MeasResultNeighCells::Eutra(vec![MeasResultEutra {
                phys_cell_id: 100,
                cgi_info: None,
                meas_result: MeasResultQuantitiesEutra {
                    rsrp_result: Some(40),
                    rsrq_result: None,
                    additional_si_info: Some(AdditionalSiInfo {
                        csg_member_status: true,
                        csg_identity: Some(0x7FF_FFFF),
                    }),
                },
            }])),
            meas_result_for_ecid: Some(MeasResultForEcid {
                ue_rx_tx_time_diff_result: 4095,
                current_sfn: 1023,
            }),
            extension_r10: Some(OpaqueExtension(vec![0x40])),
        };
        let mut writer = UperWriter::default();
        writer.write(&results).unwrap();
        let mut reader = writer.as_reader();
        assert_eq!(results, reader.read().unwrap());
        assert_eq!(0, reader.remaining_bits());
    }

    #[test]
    fn test_meas_results_geran_round_trip() {
        let results = MeasResults {
            meas_id: 2,
            rsrp_result_pcell: 1,
            rsrq_result_pcell: 2,
            meas_result_neigh_cells: Some(MeasResultNeighCells::Geran(vec![MeasResultGeran {
                carrier_freq: CarrierFreqGeran {
                    arfcn: 1023,
                    band_indicator: BandIndicatorGeran::Pcs1900,
                },
                phys_cell_id: PhysCellIdGeran {
                    network_colour_code: 7,
                    base_station_colour_code: 0,
                },
                cgi_info: Some(CgiInfoGeran {
                    cell_global_id: CellGlobalIdGeran {
                        plmn_identity: PlmnIdentity {
                            mcc: Some([0, 0, 1]),
                            mnc: vec![0, 1],
                        },
                        location_area_code: 0xBEEF,
                        cell_identity: 0x0102,
                    },
                    routing_area_code: None,
                }),
                rssi: 63,
            }])),
            meas_result_for_ecid: None,
            extension_r10: None,
        };
        let mut writer = UperWriter::default();
        writer.write(&results).unwrap();
        assert_eq!(results, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_unknown_neighbour_results_are_kept() {
        let results = MeasResults {
            meas_id: 3,
            rsrp_result_pcell: 10,
            rsrq_result_pcell: 10,
            meas_result_neigh_cells: Some(MeasResultNeighCells::Unknown(UnknownAlternative {
                index: 4,
                data: vec![0xA5, 0x5A],
            })),
            meas_result_for_ecid: None,
            extension_r10: None,
        };
        let mut writer = UperWriter::default();
        writer.write(&results).unwrap();
        assert_eq!(results, writer.as_reader().read().unwrap());
    }
}
