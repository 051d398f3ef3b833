//! UE radio access capabilities: the per-RAT container list exchanged in
//! `UECapabilityInformation` and the content of the E-UTRA container.

use crate::ies::bounds::{MAX_BANDS, MAX_CDMA_BAND_CLASS, MAX_RAT_CAPABILITIES};
use crate::io::per::Error;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

enumerated! {
    pub enum RatType: "RAT-Type", extensible {
        Eutra = "eutra",
        Utra = "utra",
        GeranCs = "geran-cs",
        GeranPs = "geran-ps",
        Cdma2000OneXRtt = "cdma2000-1XRTT",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

/// `UE-CapabilityRequest`, 1..8 RATs
pub fn write_ue_capability_request(writer: &mut UperWriter, rats: &[RatType]) -> Result<(), Error> {
    writer.write_sequence_of(rats, 1, MAX_RAT_CAPABILITIES)
}

pub fn read_ue_capability_request(reader: &mut UperReader<'_>) -> Result<Vec<RatType>, Error> {
    reader.read_sequence_of(1, MAX_RAT_CAPABILITIES)
}

/// The encoded capabilities of one RAT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UeCapabilityRatContainer {
    pub rat_type: RatType,
    pub ue_capability_rat_container: Vec<u8>,
}

impl UeCapabilityRatContainer {
    /// Wraps the encoding of `capability` in a container of [`RatType::Eutra`]
    pub fn eutra(capability: &UeEutraCapability) -> Result<Self, Error> {
        let mut writer = UperWriter::default();
        writer.write(capability)?;
        Ok(UeCapabilityRatContainer {
            rat_type: RatType::Eutra,
            ue_capability_rat_container: writer.into_octets(),
        })
    }

    /// Decodes the content of an E-UTRA container, `None` for any other RAT
    pub fn decode_eutra(&self) -> Result<Option<UeEutraCapability>, Error> {
        if self.rat_type != RatType::Eutra {
            return Ok(None);
        }
        UperReader::from(&self.ue_capability_rat_container[..])
            .read()
            .map(Some)
    }
}

impl Writable for UeCapabilityRatContainer {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.rat_type)?;
        writer.write_octet_string(&self.ue_capability_rat_container, None, None)
    }
}

impl Readable for UeCapabilityRatContainer {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(UeCapabilityRatContainer {
            rat_type: reader.read()?,
            ue_capability_rat_container: reader.read_octet_string(None, None)?,
        })
    }
}

/// `UE-CapabilityRAT-ContainerList`, 0..8 containers
pub fn write_ue_capability_rat_container_list(
    writer: &mut UperWriter,
    list: &[UeCapabilityRatContainer],
) -> Result<(), Error> {
    writer.write_sequence_of(list, 0, MAX_RAT_CAPABILITIES)
}

pub fn read_ue_capability_rat_container_list(
    reader: &mut UperReader<'_>,
) -> Result<Vec<UeCapabilityRatContainer>, Error> {
    reader.read_sequence_of(0, MAX_RAT_CAPABILITIES)
}

enumerated! {
    pub enum AccessStratumRelease: "AccessStratumRelease", extensible {
        Rel8 = "rel8",
        Rel9 = "rel9",
        Rel10 = "rel10",
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

/// Support of the ROHC profiles, in the order 0x0001, 0x0002, 0x0003, 0x0004, 0x0006, 0x0101,
/// 0x0102, 0x0103 and 0x0104
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedRohcProfiles(pub [bool; 9]);

impl Writable for SupportedRohcProfiles {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&self.0)
    }
}

impl Readable for SupportedRohcProfiles {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        reader.read_presence().map(SupportedRohcProfiles)
    }
}

enumerated! {
    pub enum MaxNumberRohcContextSessions: "PDCP-Parameters-maxNumberROHC-ContextSessions", numeric u16 {
        Cs2 = "cs2" => 2,
        Cs4 = "cs4" => 4,
        Cs8 = "cs8" => 8,
        Cs12 = "cs12" => 12,
        Cs16 = "cs16" => 16,
        Cs24 = "cs24" => 24,
        Cs32 = "cs32" => 32,
        Cs48 = "cs48" => 48,
        Cs64 = "cs64" => 64,
        Cs128 = "cs128" => 128,
        Cs256 = "cs256" => 256,
        Cs512 = "cs512" => 512,
        Cs1024 = "cs1024" => 1024,
        Cs16384 = "cs16384" => 16384,
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdcpParameters {
    pub supported_rohc_profiles: SupportedRohcProfiles,
    /// `None` is the default of cs16
    pub max_number_rohc_context_sessions: Option<MaxNumberRohcContextSessions>,
}

impl Writable for PdcpParameters {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[self.max_number_rohc_context_sessions.is_some()])?;
        writer.write(&self.supported_rohc_profiles)?;
        if let Some(value) = &self.max_number_rohc_context_sessions {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for PdcpParameters {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [sessions] = reader.read_presence()?;
        let value = PdcpParameters {
            supported_rohc_profiles: reader.read()?,
            max_number_rohc_context_sessions: if sessions { Some(reader.read()?) } else { None },
        };
        reader.read_extension_additions("PDCP-Parameters", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhyLayerParameters {
    pub ue_tx_antenna_selection_supported: bool,
    pub ue_specific_ref_sigs_supported: bool,
}

impl Writable for PhyLayerParameters {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_bit(self.ue_tx_antenna_selection_supported)?;
        writer.write_bit(self.ue_specific_ref_sigs_supported)
    }
}

impl Readable for PhyLayerParameters {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PhyLayerParameters {
            ue_tx_antenna_selection_supported: reader.read_bit()?,
            ue_specific_ref_sigs_supported: reader.read_bit()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedBandEutra {
    /// 1..64
    pub band_eutra: u8,
    pub half_duplex: bool,
}

impl Writable for SupportedBandEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.band_eutra, 1, 64)?;
        writer.write_bit(self.half_duplex)
    }
}

impl Readable for SupportedBandEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(SupportedBandEutra {
            band_eutra: reader.read_int(1, 64)?,
            half_duplex: reader.read_bit()?,
        })
    }
}

/// `RF-Parameters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfParameters {
    pub supported_band_list_eutra: Vec<SupportedBandEutra>,
}

impl Writable for RfParameters {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_sequence_of(&self.supported_band_list_eutra, 1, MAX_BANDS)
    }
}

impl Readable for RfParameters {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(RfParameters {
            supported_band_list_eutra: reader.read_sequence_of(1, MAX_BANDS)?,
        })
    }
}

/// `BandInfoEUTRA`: whether measurement gaps are needed on each E-UTRA band and each band of
/// the other RATs, in the order of the supported band lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandInfoEutra {
    pub inter_freq_need_for_gaps: Vec<bool>,
    pub inter_rat_need_for_gaps: Option<Vec<bool>>,
}

impl Writable for BandInfoEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.inter_rat_need_for_gaps.is_some()])?;
        writer.write_sequence_of(&self.inter_freq_need_for_gaps, 1, MAX_BANDS)?;
        if let Some(list) = &self.inter_rat_need_for_gaps {
            writer.write_sequence_of(list, 1, MAX_BANDS)?;
        }
        Ok(())
    }
}

impl Readable for BandInfoEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [inter_rat] = reader.read_presence()?;
        Ok(BandInfoEutra {
            inter_freq_need_for_gaps: reader.read_sequence_of(1, MAX_BANDS)?,
            inter_rat_need_for_gaps: if inter_rat {
                Some(reader.read_sequence_of(1, MAX_BANDS)?)
            } else {
                None
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasParameters {
    pub band_list_eutra: Vec<BandInfoEutra>,
}

impl Writable for MeasParameters {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_sequence_of(&self.band_list_eutra, 1, MAX_BANDS)
    }
}

impl Readable for MeasParameters {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(MeasParameters {
            band_list_eutra: reader.read_sequence_of(1, MAX_BANDS)?,
        })
    }
}

enumerated! {
    pub enum SupportedBandUtraFdd: "SupportedBandUTRA-FDD", extensible {
        BandI = "bandI",
        BandII = "bandII",
        BandIII = "bandIII",
        BandIV = "bandIV",
        BandV = "bandV",
        BandVI = "bandVI",
        BandVII = "bandVII",
        BandVIII = "bandVIII",
        BandIX = "bandIX",
        BandX = "bandX",
        BandXI = "bandXI",
        BandXII = "bandXII",
        BandXIII = "bandXIII",
        BandXIV = "bandXIV",
        BandXV = "bandXV",
        BandXVI = "bandXVI",
    }
}

enumerated! {
    /// The bands of UTRA TDD, shared by the 1.28, 3.84 and 7.68 Mcps options
    pub enum SupportedBandUtraTdd: "SupportedBandUTRA-TDD", extensible {
        A = "a",
        B = "b",
        C = "c",
        D = "d",
        E = "e",
        F = "f",
        G = "g",
        H = "h",
        I = "i",
        J = "j",
        K = "k",
        L = "l",
        M = "m",
        N = "n",
        O = "o",
        P = "p",
    }
}

enumerated! {
    pub enum SupportedBandGeran: "SupportedBandGERAN", extensible {
        Gsm450 = "gsm450",
        Gsm480 = "gsm480",
        Gsm710 = "gsm710",
        Gsm750 = "gsm750",
        Gsm810 = "gsm810",
        Gsm850 = "gsm850",
        Gsm900P = "gsm900P",
        Gsm900E = "gsm900E",
        Gsm900R = "gsm900R",
        Gsm1800 = "gsm1800",
        Gsm1900 = "gsm1900",
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum BandclassCdma2000: "BandclassCDMA2000", extensible {
        Bc0 = "bc0",
        Bc1 = "bc1",
        Bc2 = "bc2",
        Bc3 = "bc3",
        Bc4 = "bc4",
        Bc5 = "bc5",
        Bc6 = "bc6",
        Bc7 = "bc7",
        Bc8 = "bc8",
        Bc9 = "bc9",
        Bc10 = "bc10",
        Bc11 = "bc11",
        Bc12 = "bc12",
        Bc13 = "bc13",
        Bc14 = "bc14",
        Bc15 = "bc15",
        Bc16 = "bc16",
        Bc17 = "bc17",
        Spare14 = "spare14",
        Spare13 = "spare13",
        Spare12 = "spare12",
        Spare11 = "spare11",
        Spare10 = "spare10",
        Spare9 = "spare9",
        Spare8 = "spare8",
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
    pub enum AntennaConfigCdma2000: "IRAT-ParametersCDMA2000-config" {
        Single = "single",
        Dual = "dual",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IratParametersGeran {
    pub supported_band_list_geran: Vec<SupportedBandGeran>,
    pub inter_rat_ps_ho_to_geran: bool,
}

/// `IRAT-ParametersCDMA2000-HRPD` and `IRAT-ParametersCDMA2000-1XRTT`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IratParametersCdma2000 {
    pub supported_band_list: Vec<BandclassCdma2000>,
    pub tx_config: AntennaConfigCdma2000,
    pub rx_config: AntennaConfigCdma2000,
}

impl Writable for IratParametersCdma2000 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_sequence_of(&self.supported_band_list, 1, MAX_CDMA_BAND_CLASS)?;
        writer.write(&self.tx_config)?;
        writer.write(&self.rx_config)
    }
}

impl Readable for IratParametersCdma2000 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(IratParametersCdma2000 {
            supported_band_list: reader.read_sequence_of(1, MAX_CDMA_BAND_CLASS)?,
            tx_config: reader.read()?,
            rx_config: reader.read()?,
        })
    }
}

fn read_band_list<T: Readable>(
    reader: &mut UperReader<'_>,
    present: bool,
) -> Result<Option<Vec<T>>, Error> {
    if present {
        Ok(Some(reader.read_sequence_of(1, MAX_BANDS)?))
    } else {
        Ok(None)
    }
}

/// `interRAT-Parameters`, each RAT is given by its supported bands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterRatParameters {
    pub utra_fdd: Option<Vec<SupportedBandUtraFdd>>,
    pub utra_tdd128: Option<Vec<SupportedBandUtraTdd>>,
    pub utra_tdd384: Option<Vec<SupportedBandUtraTdd>>,
    pub utra_tdd768: Option<Vec<SupportedBandUtraTdd>>,
    pub geran: Option<IratParametersGeran>,
    pub cdma2000_hrpd: Option<IratParametersCdma2000>,
    pub cdma2000_1xrtt: Option<IratParametersCdma2000>,
}

impl Writable for InterRatParameters {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.utra_fdd.is_some(),
            self.utra_tdd128.is_some(),
            self.utra_tdd384.is_some(),
            self.utra_tdd768.is_some(),
            self.geran.is_some(),
            self.cdma2000_hrpd.is_some(),
            self.cdma2000_1xrtt.is_some(),
        ])?;
        if let Some(bands) = &self.utra_fdd {
            writer.write_sequence_of(bands, 1, MAX_BANDS)?;
        }
        for bands in [&self.utra_tdd128, &self.utra_tdd384, &self.utra_tdd768]
            .into_iter()
            .flatten()
        {
            writer.write_sequence_of(bands, 1, MAX_BANDS)?;
        }
        if let Some(geran) = &self.geran {
            writer.write_sequence_of(&geran.supported_band_list_geran, 1, MAX_BANDS)?;
            writer.write_bit(geran.inter_rat_ps_ho_to_geran)?;
        }
        if let Some(value) = &self.cdma2000_hrpd {
            writer.write(value)?;
        }
        if let Some(value) = &self.cdma2000_1xrtt {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for InterRatParameters {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [fdd, tdd128, tdd384, tdd768, geran, hrpd, one_x_rtt] = reader.read_presence()?;
        Ok(InterRatParameters {
            utra_fdd: read_band_list(reader, fdd)?,
            utra_tdd128: read_band_list(reader, tdd128)?,
            utra_tdd384: read_band_list(reader, tdd384)?,
            utra_tdd768: read_band_list(reader, tdd768)?,
            geran: if geran {
                Some(IratParametersGeran {
                    supported_band_list_geran: reader.read_sequence_of(1, MAX_BANDS)?,
                    inter_rat_ps_ho_to_geran: reader.read_bit()?,
                })
            } else {
                None
            },
            cdma2000_hrpd: if hrpd { Some(reader.read()?) } else { None },
            cdma2000_1xrtt: if one_x_rtt { Some(reader.read()?) } else { None },
        })
    }
}

/// `UE-EUTRA-Capability`. The v920 non-critical extension is never encoded, a received one is
/// reported and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UeEutraCapability {
    pub access_stratum_release: AccessStratumRelease,
    /// 1..5
    pub ue_category: u8,
    pub pdcp_parameters: PdcpParameters,
    pub phy_layer_parameters: PhyLayerParameters,
    pub rf_parameters: RfParameters,
    pub meas_parameters: MeasParameters,
    /// `BIT STRING (SIZE (32))`, the leftmost bit is feature group 1
    pub feature_group_indicators: Option<u32>,
    pub inter_rat_parameters: InterRatParameters,
}

impl UeEutraCapability {
    pub const NAME: &'static str = "UE-EUTRA-Capability";

    /// Whether the feature group with the 1-based `index` is indicated as supported
    pub fn supports_feature_group(&self, index: u8) -> bool {
        match self.feature_group_indicators {
            Some(indicators) if (1..=32).contains(&index) => {
                indicators & (1 << (32 - u32::from(index))) != 0
            }
            _ => false,
        }
    }
}

impl Writable for UeEutraCapability {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.feature_group_indicators.is_some(), false])?;
        writer.write(&self.access_stratum_release)?;
        writer.write_int(self.ue_category, 1, 5)?;
        writer.write(&self.pdcp_parameters)?;
        writer.write(&self.phy_layer_parameters)?;
        writer.write(&self.rf_parameters)?;
        writer.write(&self.meas_parameters)?;
        if let Some(indicators) = self.feature_group_indicators {
            writer.write_bits(u64::from(indicators), 32)?;
        }
        writer.write(&self.inter_rat_parameters)
    }
}

impl Readable for UeEutraCapability {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [indicators, non_critical] = reader.read_presence()?;
        let value = UeEutraCapability {
            access_stratum_release: reader.read()?,
            ue_category: reader.read_int(1, 5)?,
            pdcp_parameters: reader.read()?,
            phy_layer_parameters: reader.read()?,
            rf_parameters: reader.read()?,
            meas_parameters: reader.read()?,
            feature_group_indicators: if indicators {
                Some(reader.read_bits(32)?)
            } else {
                None
            },
            inter_rat_parameters: reader.read()?,
        };
        if non_critical {
            reader.ignore_trailing_extension(Self::NAME)?;
        }
        Ok(value)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::diag::CollectingSink;
    use crate::io::per::ErrorKind;

    pub(crate) fn sample_capability() -> UeEutraCapability {
        UeEutraCapability {
            access_stratum_release: AccessStratumRelease::Rel9,
            ue_category: 3,
            pdcp_parameters: PdcpParameters {
                supported_rohc_profiles: SupportedRohcProfiles([
                    true, true, false, false, false, false, false, false, false,
                ]),
                max_number_rohc_context_sessions: None,
            },
            phy_layer_parameters: PhyLayerParameters {
                ue_tx_antenna_selection_supported: false,
                ue_specific_ref_sigs_supported: true,
            },
            rf_parameters: RfParameters {
                supported_band_list_eutra: vec![
                    SupportedBandEutra {
                        band_eutra: 3,
                        half_duplex: false,
                    },
                    SupportedBandEutra {
                        band_eutra: 7,
                        half_duplex: false,
                    },
                ],
            },
            meas_parameters: MeasParameters {
                band_list_eutra: vec![
                    BandInfoEutra {
                        inter_freq_need_for_gaps: vec![false, true],
                        inter_rat_need_for_gaps: Some(vec![true]),
                    },
                    BandInfoEutra {
                        inter_freq_need_for_gaps: vec![true, false],
                        inter_rat_need_for_gaps: Some(vec![true]),
                    },
                ],
            },
            feature_group_indicators: Some(0x7F0C_9880),
            inter_rat_parameters: InterRatParameters {
                utra_fdd: Some(vec![SupportedBandUtraFdd::BandI]),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_pdcp_parameters_layout() {
        let parameters = PdcpParameters {
            supported_rohc_profiles: SupportedRohcProfiles::default(),
            max_number_rohc_context_sessions: Some(MaxNumberRohcContextSessions::Cs16384),
        };
        let mut writer = UperWriter::default();
        writer.write(&parameters).unwrap();
        // extension bit, presence bit, nine profiles, four bits of the enumeration
        assert_eq!(1 + 1 + 9 + 4, writer.finish());
        assert_eq!(parameters, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_capability_in_container() {
        let capability = sample_capability();
        let container = UeCapabilityRatContainer::eutra(&capability).unwrap();
        assert_eq!(RatType::Eutra, container.rat_type);

        let mut writer = UperWriter::default();
        write_ue_capability_rat_container_list(&mut writer, &[container.clone()]).unwrap();
        let list = read_ue_capability_rat_container_list(&mut writer.as_reader()).unwrap();
        assert_eq!(vec![container], list);
        assert_eq!(Some(capability), list[0].decode_eutra().unwrap());
    }

    #[test]
    fn test_foreign_container_is_not_decoded() {
        let container = UeCapabilityRatContainer {
            rat_type: RatType::GeranCs,
            ue_capability_rat_container: vec![0x01, 0x02],
        };
        assert_eq!(None, container.decode_eutra().unwrap());
    }

    #[test]
    fn test_feature_group_indicators() {
        let capability = sample_capability();
        assert!(!capability.supports_feature_group(1));
        assert!(capability.supports_feature_group(2));
        assert!(capability.supports_feature_group(8));
        assert!(!capability.supports_feature_group(9));
        assert!(!capability.supports_feature_group(0));
        assert!(!capability.supports_feature_group(33));
    }

    #[test]
    fn test_all_inter_rat_parameters() {
        let mut capability = sample_capability();
        capability.inter_rat_parameters = InterRatParameters {
            utra_fdd: Some(vec![SupportedBandUtraFdd::BandI, SupportedBandUtraFdd::BandVIII]),
            utra_tdd128: Some(vec![SupportedBandUtraTdd::A, SupportedBandUtraTdd::F]),
            utra_tdd384: None,
            utra_tdd768: Some(vec![SupportedBandUtraTdd::P]),
            geran: Some(IratParametersGeran {
                supported_band_list_geran: vec![
                    SupportedBandGeran::Gsm900E,
                    SupportedBandGeran::Gsm1800,
                ],
                inter_rat_ps_ho_to_geran: true,
            }),
            cdma2000_hrpd: Some(IratParametersCdma2000 {
                supported_band_list: vec![BandclassCdma2000::Bc0],
                tx_config: AntennaConfigCdma2000::Single,
                rx_config: AntennaConfigCdma2000::Dual,
            }),
            cdma2000_1xrtt: Some(IratParametersCdma2000 {
                supported_band_list: vec![BandclassCdma2000::Bc1, BandclassCdma2000::Bc17],
                tx_config: AntennaConfigCdma2000::Single,
                rx_config: AntennaConfigCdma2000::Single,
            }),
        };
        let mut writer = UperWriter::default();
        writer.write(&capability).unwrap();
        let mut reader = writer.as_reader();
        assert_eq!(capability, reader.read().unwrap());
        assert_eq!(0, reader.remaining_bits());
    }

    #[test]
    fn test_non_critical_extension_is_skipped() {
        let capability = sample_capability();
        let mut writer = UperWriter::default();
        writer.write(&capability).unwrap();
        let mut data = writer.byte_content().to_vec();
        data[0] |= 0b0100_0000;
        data.push(0xA5);

        let sink = CollectingSink::default();
        let mut reader = UperReader::from(&data[..]).with_sink(&sink);
        assert_eq!(capability, reader.read::<UeEutraCapability>().unwrap());
        assert_eq!(0, reader.remaining_bits());
        assert!(sink.contains(UeEutraCapability::NAME));
    }

    #[test]
    fn test_extension_band_is_rejected() {
        let mut writer = UperWriter::default();
        // extension bit set, normally small number 0
        writer.write_bit(true).unwrap();
        writer.write_bits(0, 7).unwrap();
        assert_eq!(
            &ErrorKind::UnknownExtensionValue {
                name: "SupportedBandUTRA-FDD",
                index: 16
            },
            writer
                .as_reader()
                .read::<SupportedBandUtraFdd>()
                .unwrap_err()
                .kind()
        );
    }
}
