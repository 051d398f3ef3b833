//! Identities and small IEs shared by many messages.

use crate::io::per::Error;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

pub const PHYS_CELL_ID_MAX: i64 = 503;
pub const ARFCN_EUTRA_MAX: i64 = 65535;
pub const ARFCN_UTRA_MAX: i64 = 16383;
pub const ARFCN_GERAN_MAX: i64 = 1023;

/// `C-RNTI ::= BIT STRING (SIZE (16))`
pub type CRnti = u16;

/// `ShortMAC-I ::= BIT STRING (SIZE (16))`
pub type ShortMacI = u16;

/// `CellIdentity ::= BIT STRING (SIZE (28))`
pub type CellIdentity = u32;

/// `TrackingAreaCode ::= BIT STRING (SIZE (16))`
pub type TrackingAreaCode = u16;

/// `PhysCellId ::= INTEGER (0..503)`
pub type PhysCellId = u16;

#[inline]
pub fn write_phys_cell_id(writer: &mut UperWriter, value: PhysCellId) -> Result<(), Error> {
    writer.write_int(value, 0, PHYS_CELL_ID_MAX)
}

#[inline]
pub fn read_phys_cell_id(reader: &mut UperReader<'_>) -> Result<PhysCellId, Error> {
    reader.read_int(0, PHYS_CELL_ID_MAX)
}

/// A `SEQUENCE OF` digits `0..9`, each in four bits
fn write_digits(writer: &mut UperWriter, digits: &[u8], lower: u64, upper: u64) -> Result<(), Error> {
    writer.write_sequence_of_with(digits, lower, upper, |w, digit| w.write_int(*digit, 0, 9))
}

fn read_digits(reader: &mut UperReader<'_>, lower: u64, upper: u64) -> Result<Vec<u8>, Error> {
    reader.read_sequence_of_with(lower, upper, |r| r.read_int(0, 9))
}

/// The PLMN a cell or a TMGI belongs to. An absent MCC is the MCC of the previous PLMN in
/// the enclosing list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlmnIdentity {
    pub mcc: Option<[u8; 3]>,
    /// Two or three digits
    pub mnc: Vec<u8>,
}

impl Writable for PlmnIdentity {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.mcc.is_some()])?;
        if let Some(mcc) = &self.mcc {
            write_digits(writer, &mcc[..], 3, 3)?;
        }
        write_digits(writer, &self.mnc, 2, 3)
    }
}

impl Readable for PlmnIdentity {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [mcc_present] = reader.read_presence()?;
        let mcc = if mcc_present {
            let digits = read_digits(reader, 3, 3)?;
            Some([digits[0], digits[1], digits[2]])
        } else {
            None
        };
        Ok(PlmnIdentity {
            mcc,
            mnc: read_digits(reader, 2, 3)?,
        })
    }
}

/// `IMSI ::= SEQUENCE (SIZE (6..21)) OF IMSI-Digit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Imsi(pub Vec<u8>);

impl Writable for Imsi {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        write_digits(writer, &self.0, 6, 21)
    }
}

impl Readable for Imsi {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        read_digits(reader, 6, 21).map(Imsi)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct STmsi {
    pub mmec: u8,
    pub m_tmsi: u32,
}

impl Writable for STmsi {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_bits(u64::from(self.mmec), 8)?;
        writer.write_bits(u64::from(self.m_tmsi), 32)
    }
}

impl Readable for STmsi {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(STmsi {
            mmec: reader.read_bits(8)?,
            m_tmsi: reader.read_bits(32)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGlobalIdEutra {
    pub plmn_identity: PlmnIdentity,
    pub cell_identity: CellIdentity,
}

impl Writable for CellGlobalIdEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.plmn_identity)?;
        writer.write_bits(u64::from(self.cell_identity), 28)
    }
}

impl Readable for CellGlobalIdEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(CellGlobalIdEutra {
            plmn_identity: reader.read()?,
            cell_identity: reader.read_bits(28)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGlobalIdUtra {
    pub plmn_identity: PlmnIdentity,
    pub cell_identity: u32,
}

impl Writable for CellGlobalIdUtra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.plmn_identity)?;
        writer.write_bits(u64::from(self.cell_identity), 28)
    }
}

impl Readable for CellGlobalIdUtra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(CellGlobalIdUtra {
            plmn_identity: reader.read()?,
            cell_identity: reader.read_bits(28)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGlobalIdGeran {
    pub plmn_identity: PlmnIdentity,
    pub location_area_code: u16,
    pub cell_identity: u16,
}

impl Writable for CellGlobalIdGeran {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.plmn_identity)?;
        writer.write_bits(u64::from(self.location_area_code), 16)?;
        writer.write_bits(u64::from(self.cell_identity), 16)
    }
}

impl Readable for CellGlobalIdGeran {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(CellGlobalIdGeran {
            plmn_identity: reader.read()?,
            location_area_code: reader.read_bits(16)?,
            cell_identity: reader.read_bits(16)?,
        })
    }
}

/// `DedicatedInfoNAS ::= OCTET STRING`, a NAS PDU carried transparently
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DedicatedInfoNas(pub Vec<u8>);

impl Writable for DedicatedInfoNas {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_octet_string(&self.0, None, None)
    }
}

impl Readable for DedicatedInfoNas {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        reader.read_octet_string(None, None).map(DedicatedInfoNas)
    }
}

/// `RRC-TransactionIdentifier ::= INTEGER (0..3)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RrcTransactionIdentifier(pub u8);

impl Writable for RrcTransactionIdentifier {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.0, 0, 3)
    }
}

impl Readable for RrcTransactionIdentifier {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        reader.read_int(0, 3).map(RrcTransactionIdentifier)
    }
}

enumerated! {
    pub enum PhysCellIdRangeSize: "PhysCellIdRange-range", numeric u16 {
        N4 = "n4" => 4,
        N8 = "n8" => 8,
        N12 = "n12" => 12,
        N16 = "n16" => 16,
        N24 = "n24" => 24,
        N32 = "n32" => 32,
        N48 = "n48" => 48,
        N64 = "n64" => 64,
        N84 = "n84" => 84,
        N96 = "n96" => 96,
        N128 = "n128" => 128,
        N168 = "n168" => 168,
        N252 = "n252" => 252,
        N504 = "n504" => 504,
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

/// A range of physical cell identities starting at `start`, a single one if `range` is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysCellIdRange {
    pub start: PhysCellId,
    pub range: Option<PhysCellIdRangeSize>,
}

impl Writable for PhysCellIdRange {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.range.is_some()])?;
        write_phys_cell_id(writer, self.start)?;
        if let Some(range) = &self.range {
            writer.write(range)?;
        }
        Ok(())
    }
}

impl Readable for PhysCellIdRange {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [range] = reader.read_presence()?;
        Ok(PhysCellIdRange {
            start: read_phys_cell_id(reader)?,
            range: if range { Some(reader.read()?) } else { None },
        })
    }
}

enumerated! {
    pub enum QOffsetRange: "Q-OffsetRange", numeric i8 {
        DbMinus24 = "dB-24" => -24,
        DbMinus22 = "dB-22" => -22,
        DbMinus20 = "dB-20" => -20,
        DbMinus18 = "dB-18" => -18,
        DbMinus16 = "dB-16" => -16,
        DbMinus14 = "dB-14" => -14,
        DbMinus12 = "dB-12" => -12,
        DbMinus10 = "dB-10" => -10,
        DbMinus8 = "dB-8" => -8,
        DbMinus6 = "dB-6" => -6,
        DbMinus5 = "dB-5" => -5,
        DbMinus4 = "dB-4" => -4,
        DbMinus3 = "dB-3" => -3,
        DbMinus2 = "dB-2" => -2,
        DbMinus1 = "dB-1" => -1,
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
    pub enum AllowedMeasBandwidth: "AllowedMeasBandwidth", numeric u8 {
        Mbw6 = "mbw6" => 6,
        Mbw15 = "mbw15" => 15,
        Mbw25 = "mbw25" => 25,
        Mbw50 = "mbw50" => 50,
        Mbw75 = "mbw75" => 75,
        Mbw100 = "mbw100" => 100,
    }
}

enumerated! {
    pub enum T300: "T300", numeric u16 {
        Ms100 = "ms100" => 100,
        Ms200 = "ms200" => 200,
        Ms300 = "ms300" => 300,
        Ms400 = "ms400" => 400,
        Ms600 = "ms600" => 600,
        Ms1000 = "ms1000" => 1000,
        Ms1500 = "ms1500" => 1500,
        Ms2000 = "ms2000" => 2000,
    }
}

/// T301 shares the value set of T300
pub type T301 = T300;

enumerated! {
    pub enum T310: "T310", numeric u16 {
        Ms0 = "ms0" => 0,
        Ms50 = "ms50" => 50,
        Ms100 = "ms100" => 100,
        Ms200 = "ms200" => 200,
        Ms500 = "ms500" => 500,
        Ms1000 = "ms1000" => 1000,
        Ms2000 = "ms2000" => 2000,
    }
}

enumerated! {
    pub enum N310: "N310", numeric u8 {
        N1 = "n1" => 1,
        N2 = "n2" => 2,
        N3 = "n3" => 3,
        N4 = "n4" => 4,
        N6 = "n6" => 6,
        N8 = "n8" => 8,
        N10 = "n10" => 10,
        N20 = "n20" => 20,
    }
}

enumerated! {
    pub enum T311: "T311", numeric u16 {
        Ms1000 = "ms1000" => 1000,
        Ms3000 = "ms3000" => 3000,
        Ms5000 = "ms5000" => 5000,
        Ms10000 = "ms10000" => 10000,
        Ms15000 = "ms15000" => 15000,
        Ms20000 = "ms20000" => 20000,
        Ms30000 = "ms30000" => 30000,
    }
}

enumerated! {
    pub enum N311: "N311", numeric u8 {
        N1 = "n1" => 1,
        N2 = "n2" => 2,
        N3 = "n3" => 3,
        N4 = "n4" => 4,
        N5 = "n5" => 5,
        N6 = "n6" => 6,
        N8 = "n8" => 8,
        N10 = "n10" => 10,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UeTimersAndConstants {
    pub t300: T300,
    pub t301: T301,
    pub t310: T310,
    pub n310: N310,
    pub t311: T311,
    pub n311: N311,
}

impl Writable for UeTimersAndConstants {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write(&self.t300)?;
        writer.write(&self.t301)?;
        writer.write(&self.t310)?;
        writer.write(&self.n310)?;
        writer.write(&self.t311)?;
        writer.write(&self.n311)
    }
}

impl Readable for UeTimersAndConstants {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let value = UeTimersAndConstants {
            t300: reader.read()?,
            t301: reader.read()?,
            t310: reader.read()?,
            n310: reader.read()?,
            t311: reader.read()?,
            n311: reader.read()?,
        };
        reader.read_extension_additions("UE-TimersAndConstants", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

enumerated! {
    pub enum SpeedScaleFactor: "SpeedStateScaleFactors-sf", numeric f32 {
        ODot25 = "oDot25" => 0.25,
        ODot5 = "oDot5" => 0.5,
        ODot75 = "oDot75" => 0.75,
        LDot0 = "lDot0" => 1.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedStateScaleFactors {
    pub sf_medium: SpeedScaleFactor,
    pub sf_high: SpeedScaleFactor,
}

impl Writable for SpeedStateScaleFactors {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.sf_medium)?;
        writer.write(&self.sf_high)
    }
}

impl Readable for SpeedStateScaleFactors {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(SpeedStateScaleFactors {
            sf_medium: reader.read()?,
            sf_high: reader.read()?,
        })
    }
}

enumerated! {
    pub enum MobilityStateTime: "MobilityStateParameters-t", numeric u8 {
        S30 = "s30" => 30,
        S60 = "s60" => 60,
        S120 = "s120" => 120,
        S180 = "s180" => 180,
        S240 = "s240" => 240,
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobilityStateParameters {
    pub t_evaluation: MobilityStateTime,
    pub t_hyst_normal: MobilityStateTime,
    /// 1..16
    pub n_cell_change_medium: u8,
    /// 1..16
    pub n_cell_change_high: u8,
}

impl Writable for MobilityStateParameters {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.t_evaluation)?;
        writer.write(&self.t_hyst_normal)?;
        writer.write_int(self.n_cell_change_medium, 1, 16)?;
        writer.write_int(self.n_cell_change_high, 1, 16)
    }
}

impl Readable for MobilityStateParameters {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(MobilityStateParameters {
            t_evaluation: reader.read()?,
            t_hyst_normal: reader.read()?,
            n_cell_change_medium: reader.read_int(1, 16)?,
            n_cell_change_high: reader.read_int(1, 16)?,
        })
    }
}

enumerated! {
    pub enum BandIndicatorGeran: "BandIndicatorGERAN" {
        Dcs1800 = "dcs1800",
        Pcs1900 = "pcs1900",
    }
}

/// How the ARFCNs following the starting ARFCN of a [`CarrierFreqsGeran`] are given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowingArfcns {
    /// Up to 31 ARFCNs
    ExplicitList(Vec<u16>),
    EquallySpaced {
        /// 1..8
        arfcn_spacing: u8,
        /// 0..31
        number_of_following_arfcns: u8,
    },
    /// One to sixteen octets
    VariableBitMap(Vec<u8>),
}

impl Writable for FollowingArfcns {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        const NAME: &str = "followingARFCNs";
        match self {
            FollowingArfcns::ExplicitList(arfcns) => {
                writer.write_choice_index(NAME, 0, 3, false)?;
                writer.write_sequence_of_with(arfcns, 0, 31, |w, arfcn| {
                    w.write_int(*arfcn, 0, ARFCN_GERAN_MAX)
                })
            }
            FollowingArfcns::EquallySpaced {
                arfcn_spacing,
                number_of_following_arfcns,
            } => {
                writer.write_choice_index(NAME, 1, 3, false)?;
                writer.write_int(*arfcn_spacing, 1, 8)?;
                writer.write_int(*number_of_following_arfcns, 0, 31)
            }
            FollowingArfcns::VariableBitMap(octets) => {
                writer.write_choice_index(NAME, 2, 3, false)?;
                writer.write_octet_string(octets, Some(1), Some(16))
            }
        }
    }
}

impl Readable for FollowingArfcns {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match reader.read_choice_index("followingARFCNs", 3, false)? {
            0 => FollowingArfcns::ExplicitList(
                reader.read_sequence_of_with(0, 31, |r| r.read_int(0, ARFCN_GERAN_MAX))?,
            ),
            1 => FollowingArfcns::EquallySpaced {
                arfcn_spacing: reader.read_int(1, 8)?,
                number_of_following_arfcns: reader.read_int(0, 31)?,
            },
            _ => FollowingArfcns::VariableBitMap(reader.read_octet_string(Some(1), Some(16))?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierFreqsGeran {
    pub starting_arfcn: u16,
    pub band_indicator: BandIndicatorGeran,
    pub following_arfcns: FollowingArfcns,
}

impl Writable for CarrierFreqsGeran {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.starting_arfcn, 0, ARFCN_GERAN_MAX)?;
        writer.write(&self.band_indicator)?;
        writer.write(&self.following_arfcns)
    }
}

impl Readable for CarrierFreqsGeran {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(CarrierFreqsGeran {
            starting_arfcn: reader.read_int(0, ARFCN_GERAN_MAX)?,
            band_indicator: reader.read()?,
            following_arfcns: reader.read()?,
        })
    }
}

enumerated! {
    pub enum CipheringAlgorithm: "CipheringAlgorithm", extensible {
        Eea0 = "eea0",
        Eea1 = "eea1",
        Eea2 = "eea2",
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum IntegrityProtAlgorithm: "SecurityAlgorithmConfig-integrityProtAlgorithm", extensible {
        Eia0 = "eia0-v920",
        Eia1 = "eia1",
        Eia2 = "eia2",
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityAlgorithmConfig {
    pub ciphering_algorithm: CipheringAlgorithm,
    pub integrity_prot_algorithm: IntegrityProtAlgorithm,
}

impl Writable for SecurityAlgorithmConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.ciphering_algorithm)?;
        writer.write(&self.integrity_prot_algorithm)
    }
}

impl Readable for SecurityAlgorithmConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(SecurityAlgorithmConfig {
            ciphering_algorithm: reader.read()?,
            integrity_prot_algorithm: reader.read()?,
        })
    }
}

/// `NeighCellConfig ::= BIT STRING (SIZE (2))`
pub type NeighCellConfig = u8;

/// `Q-OffsetRangeInterRAT ::= INTEGER (-15..15)`
pub type QOffsetRangeInterRat = i8;

/// `RSRP-Range ::= INTEGER (0..97)`
pub const RSRP_RANGE_MAX: i64 = 97;

/// `RSRQ-Range ::= INTEGER (0..34)`
pub const RSRQ_RANGE_MAX: i64 = 34;

/// `PLMN-IdentityList2 ::= SEQUENCE (SIZE (1..5)) OF PLMN-Identity`
pub fn write_plmn_identity_list2(writer: &mut UperWriter, list: &[PlmnIdentity]) -> Result<(), Error> {
    writer.write_sequence_of(list, 1, 5)
}

pub fn read_plmn_identity_list2(reader: &mut UperReader<'_>) -> Result<Vec<PlmnIdentity>, Error> {
    reader.read_sequence_of(1, 5)
}

/// `PhysCellIdGERAN`, the network and base station colour codes of three bits each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysCellIdGeran {
    pub network_colour_code: u8,
    pub base_station_colour_code: u8,
}

impl Writable for PhysCellIdGeran {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_bits(u64::from(self.network_colour_code), 3)?;
        writer.write_bits(u64::from(self.base_station_colour_code), 3)
    }
}

impl Readable for PhysCellIdGeran {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PhysCellIdGeran {
            network_colour_code: reader.read_bits(3)?,
            base_station_colour_code: reader.read_bits(3)?,
        })
    }
}

/// `CarrierFreqGERAN`, a single GERAN carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierFreqGeran {
    pub arfcn: u16,
    pub band_indicator: BandIndicatorGeran,
}

impl Writable for CarrierFreqGeran {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.arfcn, 0, ARFCN_GERAN_MAX)?;
        writer.write(&self.band_indicator)
    }
}

impl Readable for CarrierFreqGeran {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(CarrierFreqGeran {
            arfcn: reader.read_int(0, ARFCN_GERAN_MAX)?,
            band_indicator: reader.read()?,
        })
    }
}

enumerated! {
    /// Layer 3 filtering coefficient, shared by uplink power control and measurement quantities
    pub enum FilterCoefficient: "FilterCoefficient", extensible numeric u8 {
        Fc0 = "fc0" => 0,
        Fc1 = "fc1" => 1,
        Fc2 = "fc2" => 2,
        Fc3 = "fc3" => 3,
        Fc4 = "fc4" => 4,
        Fc5 = "fc5" => 5,
        Fc6 = "fc6" => 6,
        Fc7 = "fc7" => 7,
        Fc8 = "fc8" => 8,
        Fc9 = "fc9" => 9,
        Fc11 = "fc11" => 11,
        Fc13 = "fc13" => 13,
        Fc15 = "fc15" => 15,
        Fc17 = "fc17" => 17,
        Fc19 = "fc19" => 19,
        Spare1 = "spare1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::per::ErrorKind;
    use crate::syn::enumerated::{Enumerated, EnumeratedNumeric};

    #[test]
    fn test_plmn_identity_layout() {
        let plmn = PlmnIdentity {
            mcc: Some([9, 8, 7]),
            mnc: vec![6, 5, 4],
        };
        let mut writer = UperWriter::default();
        writer.write(&plmn).unwrap();
        // presence, 3 digits, mnc length, 3 digits
        assert_eq!(1 + 12 + 1 + 12, writer.finish());
        assert_eq!(plmn, writer.as_reader().read::<PlmnIdentity>().unwrap());
    }

    #[test]
    fn test_two_digit_mnc_without_mcc() {
        let plmn = PlmnIdentity {
            mcc: None,
            mnc: vec![0, 1],
        };
        let mut writer = UperWriter::default();
        writer.write(&plmn).unwrap();
        assert_eq!(&[0b0000_0000, 0b0100_0000], writer.byte_content());
        assert_eq!(plmn, writer.as_reader().read::<PlmnIdentity>().unwrap());
    }

    #[test]
    fn test_digit_out_of_range() {
        let plmn = PlmnIdentity {
            mcc: None,
            mnc: vec![10, 1],
        };
        let mut writer = UperWriter::default();
        assert_eq!(
            &ErrorKind::ValueNotInRange(10, 0, 9),
            writer.write(&plmn).unwrap_err().kind()
        );
    }

    #[test]
    fn test_phys_cell_id_takes_nine_bits() {
        let mut writer = UperWriter::default();
        write_phys_cell_id(&mut writer, 357).unwrap();
        assert_eq!(9, writer.finish());
        assert_eq!(357, read_phys_cell_id(&mut writer.as_reader()).unwrap());
        assert!(write_phys_cell_id(&mut writer, 504).is_err());
    }

    #[test]
    fn test_q_offset_range_tables() {
        assert_eq!(31, QOffsetRange::ordinal_count());
        assert_eq!(Some(-24), QOffsetRange::DbMinus24.to_numeric());
        assert_eq!("dB24", QOffsetRange::Db24.to_text());
        assert_eq!(Some(QOffsetRange::Db0), QOffsetRange::from_ordinal(15));
    }

    #[test]
    fn test_spare_ciphering_algorithm_is_valid() {
        let mut writer = UperWriter::default();
        writer.write(&CipheringAlgorithm::Spare1).unwrap();
        // extension bit and three bits
        assert_eq!(4, writer.finish());
        let value: CipheringAlgorithm = writer.as_reader().read().unwrap();
        assert!(value.is_spare());
    }
}
