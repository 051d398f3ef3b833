//! The messages of the DL-DCCH.

use crate::ies::bounds::{
    MAX_CDMA_BAND_CLASS, MAX_DRB, MAX_FREQ, MAX_GERAN_SI, MAX_GNFG, MAX_UTRA_FDD_CARRIER,
    MAX_UTRA_TDD_CARRIER,
};
use crate::ies::common::{
    CarrierFreqGeran, CarrierFreqsGeran, DedicatedInfoNas, PhysCellIdGeran,
    RrcTransactionIdentifier, SecurityAlgorithmConfig, ARFCN_EUTRA_MAX, ARFCN_UTRA_MAX,
};
use crate::ies::measurement::MeasConfig;
use crate::ies::radio_resource::{MobilityControlInfo, RadioResourceConfigDedicated, SecurityConfigHo};
use crate::ies::ue_capability::{
    read_ue_capability_request, write_ue_capability_request, BandclassCdma2000, RatType,
};
use crate::io::per::Error;
use crate::messages::dcch::DedicatedInfoType;
use crate::messages::skip_non_critical_extension;
use crate::syn::choice::UnknownAlternative;
use crate::syn::critical::CriticalExtensions;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

/// `CellReselectionPriority ::= INTEGER (0..7)`
const CELL_RESELECTION_PRIORITY_MAX: i64 = 7;

/// `ARFCN-ValueCDMA2000 ::= INTEGER (0..2047)`
const ARFCN_CDMA2000_MAX: i64 = 2047;

/// `CSFBParametersResponseCDMA2000-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsfbParametersResponseCdma2000R8 {
    /// `RAND-CDMA2000 ::= BIT STRING (SIZE (32))`
    pub rand: u32,
    pub mobility_parameters: Vec<u8>,
}

impl Writable for CsfbParametersResponseCdma2000R8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write_bits(u64::from(self.rand), 32)?;
        writer.write_octet_string(&self.mobility_parameters, None, None)
    }
}

impl Readable for CsfbParametersResponseCdma2000R8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = CsfbParametersResponseCdma2000R8 {
            rand: reader.read_bits(32)?,
            mobility_parameters: reader.read_octet_string(None, None)?,
        };
        skip_non_critical_extension(reader, non_critical, "CSFBParametersResponseCDMA2000-v8a0-IEs")?;
        Ok(value)
    }
}

transaction_message!(CsfbParametersResponseCdma2000, CsfbParametersResponseCdma2000R8, 0);

/// `DLInformationTransfer-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DlInformationTransferR8 {
    pub dedicated_info_type: DedicatedInfoType,
}

impl Writable for DlInformationTransferR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write(&self.dedicated_info_type)
    }
}

impl Readable for DlInformationTransferR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = DlInformationTransferR8 {
            dedicated_info_type: reader.read()?,
        };
        skip_non_critical_extension(reader, non_critical, "DLInformationTransfer-v8a0-IEs")?;
        Ok(value)
    }
}

transaction_message!(DlInformationTransfer, DlInformationTransferR8, 4);

enumerated! {
    pub enum Cdma2000Type: "CDMA2000-Type" {
        Type1Xrtt = "type1XRTT",
        TypeHrpd = "typeHRPD",
    }
}

/// `HandoverFromEUTRAPreparationRequest-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoverFromEutraPreparationRequestR8 {
    pub cdma2000_type: Cdma2000Type,
    pub rand: Option<u32>,
    pub mobility_parameters: Option<Vec<u8>>,
}

impl Writable for HandoverFromEutraPreparationRequestR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.rand.is_some(),
            self.mobility_parameters.is_some(),
            false,
        ])?;
        writer.write(&self.cdma2000_type)?;
        if let Some(rand) = self.rand {
            writer.write_bits(u64::from(rand), 32)?;
        }
        if let Some(parameters) = &self.mobility_parameters {
            writer.write_octet_string(parameters, None, None)?;
        }
        Ok(())
    }
}

impl Readable for HandoverFromEutraPreparationRequestR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [rand, mobility_parameters, non_critical] = reader.read_presence()?;
        let value = HandoverFromEutraPreparationRequestR8 {
            cdma2000_type: reader.read()?,
            rand: if rand {
                Some(reader.read_bits(32)?)
            } else {
                None
            },
            mobility_parameters: if mobility_parameters {
                Some(reader.read_octet_string(None, None)?)
            } else {
                None
            },
        };
        skip_non_critical_extension(
            reader,
            non_critical,
            "HandoverFromEUTRAPreparationRequest-v890-IEs",
        )?;
        Ok(value)
    }
}

transaction_message!(
    HandoverFromEutraPreparationRequest,
    HandoverFromEutraPreparationRequestR8,
    4
);

enumerated! {
    pub enum TargetRatType: "Handover-targetRAT-Type", extensible {
        Utra = "utra",
        Geran = "geran",
        Cdma2000OneXrtt = "cdma2000-1XRTT",
        Cdma2000Hrpd = "cdma2000-HRPD",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

/// `SI-OrPSI-GERAN`, each entry of the lists is a GERAN system information message of 1..23
/// octets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiOrPsiGeran {
    Si(Vec<Vec<u8>>),
    Psi(Vec<Vec<u8>>),
}

fn write_system_info_list_geran(writer: &mut UperWriter, list: &[Vec<u8>]) -> Result<(), Error> {
    writer.write_sequence_of_with(list, 1, MAX_GERAN_SI, |w, octets| {
        w.write_octet_string(octets, Some(1), Some(23))
    })
}

fn read_system_info_list_geran(reader: &mut UperReader<'_>) -> Result<Vec<Vec<u8>>, Error> {
    reader.read_sequence_of_with(1, MAX_GERAN_SI, |r| r.read_octet_string(Some(1), Some(23)))
}

impl Writable for SiOrPsiGeran {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            SiOrPsiGeran::Si(list) => {
                writer.write_choice_index("SI-OrPSI-GERAN", 0, 2, false)?;
                write_system_info_list_geran(writer, list)
            }
            SiOrPsiGeran::Psi(list) => {
                writer.write_choice_index("SI-OrPSI-GERAN", 1, 2, false)?;
                write_system_info_list_geran(writer, list)
            }
        }
    }
}

impl Readable for SiOrPsiGeran {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match reader.read_choice_index("SI-OrPSI-GERAN", 2, false)? {
            0 => SiOrPsiGeran::Si(read_system_info_list_geran(reader)?),
            _ => SiOrPsiGeran::Psi(read_system_info_list_geran(reader)?),
        })
    }
}

/// `Handover`, the purpose of a `MobilityFromEUTRACommand` that moves the UE to another RAT
/// with the handover command of that RAT in a container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handover {
    pub target_rat_type: TargetRatType,
    pub target_rat_message_container: Vec<u8>,
    /// `OCTET STRING (SIZE (1))`
    pub nas_security_param_from_eutra: Option<u8>,
    pub system_information: Option<SiOrPsiGeran>,
}

impl Writable for Handover {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.nas_security_param_from_eutra.is_some(),
            self.system_information.is_some(),
        ])?;
        writer.write(&self.target_rat_type)?;
        writer.write_octet_string(&self.target_rat_message_container, None, None)?;
        if let Some(param) = self.nas_security_param_from_eutra {
            writer.write_octet_string(&[param], Some(1), Some(1))?;
        }
        if let Some(system_information) = &self.system_information {
            writer.write(system_information)?;
        }
        Ok(())
    }
}

impl Readable for Handover {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [nas_security_param, system_information] = reader.read_presence()?;
        Ok(Handover {
            target_rat_type: reader.read()?,
            target_rat_message_container: reader.read_octet_string(None, None)?,
            nas_security_param_from_eutra: if nas_security_param {
                reader
                    .read_octet_string(Some(1), Some(1))?
                    .first()
                    .copied()
            } else {
                None
            },
            system_information: if system_information {
                Some(reader.read()?)
            } else {
                None
            },
        })
    }
}

enumerated! {
    pub enum T304CellChangeOrder: "CellChangeOrder-t304", numeric u16 {
        Ms100 = "ms100" => 100,
        Ms200 = "ms200" => 200,
        Ms500 = "ms500" => 500,
        Ms1000 = "ms1000" => 1000,
        Ms2000 = "ms2000" => 2000,
        Ms4000 = "ms4000" => 4000,
        Ms8000 = "ms8000" => 8000,
        Spare1 = "spare1",
    }
}

/// The GERAN cell a `CellChangeOrder` points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeranCellChangeOrder {
    pub phys_cell_id: PhysCellIdGeran,
    pub carrier_freq: CarrierFreqGeran,
    /// `BIT STRING (SIZE (2))`
    pub network_control_order: Option<u8>,
    pub system_information: Option<SiOrPsiGeran>,
}

impl Writable for GeranCellChangeOrder {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.network_control_order.is_some(),
            self.system_information.is_some(),
        ])?;
        writer.write(&self.phys_cell_id)?;
        writer.write(&self.carrier_freq)?;
        if let Some(order) = self.network_control_order {
            writer.write_bits(u64::from(order), 2)?;
        }
        if let Some(system_information) = &self.system_information {
            writer.write(system_information)?;
        }
        Ok(())
    }
}

impl Readable for GeranCellChangeOrder {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [network_control_order, system_information] = reader.read_presence()?;
        Ok(GeranCellChangeOrder {
            phys_cell_id: reader.read()?,
            carrier_freq: reader.read()?,
            network_control_order: if network_control_order {
                Some(reader.read_bits(2)?)
            } else {
                None
            },
            system_information: if system_information {
                Some(reader.read()?)
            } else {
                None
            },
        })
    }
}

/// `CellChangeOrder-targetRAT-Type`, with GERAN as its only root alternative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellChangeOrderTarget {
    Geran(GeranCellChangeOrder),
    Unknown(UnknownAlternative),
}

impl CellChangeOrderTarget {
    const NAME: &'static str = "CellChangeOrder-targetRAT-Type";
}

impl Writable for CellChangeOrderTarget {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            CellChangeOrderTarget::Geran(geran) => {
                writer.write_choice_index(Self::NAME, 0, 1, true)?;
                writer.write(geran)
            }
            CellChangeOrderTarget::Unknown(unknown) => unknown.write(writer, Self::NAME, 1, 1),
        }
    }
}

impl Readable for CellChangeOrderTarget {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match reader.read_choice_index(Self::NAME, 1, true)? {
            0 => CellChangeOrderTarget::Geran(reader.read()?),
            index => {
                CellChangeOrderTarget::Unknown(UnknownAlternative::read(reader, Self::NAME, index)?)
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChangeOrder {
    pub t304: T304CellChangeOrder,
    pub target_rat_type: CellChangeOrderTarget,
}

impl Writable for CellChangeOrder {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.t304)?;
        writer.write(&self.target_rat_type)
    }
}

impl Readable for CellChangeOrder {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(CellChangeOrder {
            t304: reader.read()?,
            target_rat_type: reader.read()?,
        })
    }
}

/// `MobilityFromEUTRACommand-r8-IEs-purpose`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MobilityPurpose {
    Handover(Handover),
    CellChangeOrder(CellChangeOrder),
    Unknown(UnknownAlternative),
}

impl MobilityPurpose {
    const NAME: &'static str = "MobilityFromEUTRACommand-purpose";
}

impl Writable for MobilityPurpose {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            MobilityPurpose::Handover(handover) => {
                writer.write_choice_index(Self::NAME, 0, 2, true)?;
                writer.write(handover)
            }
            MobilityPurpose::CellChangeOrder(order) => {
                writer.write_choice_index(Self::NAME, 1, 2, true)?;
                writer.write(order)
            }
            MobilityPurpose::Unknown(unknown) => unknown.write(writer, Self::NAME, 2, 2),
        }
    }
}

impl Readable for MobilityPurpose {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match reader.read_choice_index(Self::NAME, 2, true)? {
            0 => MobilityPurpose::Handover(reader.read()?),
            1 => MobilityPurpose::CellChangeOrder(reader.read()?),
            index => MobilityPurpose::Unknown(UnknownAlternative::read(reader, Self::NAME, index)?),
        })
    }
}

/// `MobilityFromEUTRACommand-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobilityFromEutraCommandR8 {
    pub cs_fallback_indicator: bool,
    pub purpose: MobilityPurpose,
}

impl Writable for MobilityFromEutraCommandR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write_bit(self.cs_fallback_indicator)?;
        writer.write(&self.purpose)
    }
}

impl Readable for MobilityFromEutraCommandR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = MobilityFromEutraCommandR8 {
            cs_fallback_indicator: reader.read_bit()?,
            purpose: reader.read()?,
        };
        skip_non_critical_extension(reader, non_critical, "MobilityFromEUTRACommand-v8a0-IEs")?;
        Ok(value)
    }
}

/// `MobilityFromEUTRACommand`. The second alternative of its `c1` is the `r9` body, which is
/// not supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobilityFromEutraCommand {
    pub rrc_transaction_identifier: RrcTransactionIdentifier,
    pub critical_extensions: CriticalExtensions<MobilityFromEutraCommandR8, 4>,
}

const MOBILITY_FROM_EUTRA_COMMAND_R9: &str = "MobilityFromEUTRACommand-r9-IEs";

impl Writable for MobilityFromEutraCommand {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        if let CriticalExtensions::Spare(1) = self.critical_extensions {
            return Err(Error::unsupported(MOBILITY_FROM_EUTRA_COMMAND_R9));
        }
        writer.write(&self.rrc_transaction_identifier)?;
        writer.write(&self.critical_extensions)
    }
}

impl Readable for MobilityFromEutraCommand {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let rrc_transaction_identifier = reader.read()?;
        match reader.read()? {
            CriticalExtensions::Spare(1) => Err(Error::unsupported(MOBILITY_FROM_EUTRA_COMMAND_R9)),
            critical_extensions => Ok(MobilityFromEutraCommand {
                rrc_transaction_identifier,
                critical_extensions,
            }),
        }
    }
}

/// `RRCConnectionReconfiguration-r8-IEs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionReconfigurationR8 {
    pub meas_config: Option<MeasConfig>,
    pub mobility_control_info: Option<MobilityControlInfo>,
    /// 1..11 NAS PDUs
    pub dedicated_info_nas_list: Option<Vec<DedicatedInfoNas>>,
    pub radio_resource_config_dedicated: Option<RadioResourceConfigDedicated>,
    pub security_config_ho: Option<SecurityConfigHo>,
}

impl Writable for RrcConnectionReconfigurationR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.meas_config.is_some(),
            self.mobility_control_info.is_some(),
            self.dedicated_info_nas_list.is_some(),
            self.radio_resource_config_dedicated.is_some(),
            self.security_config_ho.is_some(),
            false,
        ])?;
        if let Some(value) = &self.meas_config {
            writer.write(value)?;
        }
        if let Some(value) = &self.mobility_control_info {
            writer.write(value)?;
        }
        if let Some(list) = &self.dedicated_info_nas_list {
            writer.write_sequence_of(list, 1, MAX_DRB)?;
        }
        if let Some(value) = &self.radio_resource_config_dedicated {
            writer.write(value)?;
        }
        if let Some(value) = &self.security_config_ho {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for RrcConnectionReconfigurationR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [meas_config, mobility_control_info, nas_list, radio_resource_config, security_config, non_critical] =
            reader.read_presence()?;
        let mut value = RrcConnectionReconfigurationR8::default();
        if meas_config {
            value.meas_config = Some(reader.read()?);
        }
        if mobility_control_info {
            value.mobility_control_info = Some(reader.read()?);
        }
        if nas_list {
            value.dedicated_info_nas_list = Some(reader.read_sequence_of(1, MAX_DRB)?);
        }
        if radio_resource_config {
            value.radio_resource_config_dedicated = Some(reader.read()?);
        }
        if security_config {
            value.security_config_ho = Some(reader.read()?);
        }
        skip_non_critical_extension(reader, non_critical, "RRCConnectionReconfiguration-v890-IEs")?;
        Ok(value)
    }
}

transaction_message!(RrcConnectionReconfiguration, RrcConnectionReconfigurationR8, 8);

enumerated! {
    pub enum ReleaseCause: "ReleaseCause" {
        LoadBalancingTauRequired = "loadBalancingTAUrequired",
        Other = "other",
        CsFallbackHighPriority = "cs-FallbackHighPriority-v1020",
        Spare1 = "spare1",
    }
}

/// `CarrierFreqCDMA2000`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierFreqCdma2000 {
    pub band_class: BandclassCdma2000,
    /// 0..2047
    pub arfcn: u16,
}

impl Writable for CarrierFreqCdma2000 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.band_class)?;
        writer.write_int(self.arfcn, 0, ARFCN_CDMA2000_MAX)
    }
}

impl Readable for CarrierFreqCdma2000 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(CarrierFreqCdma2000 {
            band_class: reader.read()?,
            arfcn: reader.read_int(0, ARFCN_CDMA2000_MAX)?,
        })
    }
}

/// Where to look for a cell after the connection was released
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedirectedCarrierInfo {
    Eutra(u32),
    Geran(CarrierFreqsGeran),
    UtraFdd(u16),
    UtraTdd(u16),
    Cdma2000Hrpd(CarrierFreqCdma2000),
    Cdma2000OneXrtt(CarrierFreqCdma2000),
    /// Later alternatives such as `utra-TDD-r10`
    Unknown(UnknownAlternative),
}

impl RedirectedCarrierInfo {
    const NAME: &'static str = "RedirectedCarrierInfo";
    const ROOT_VARIANTS: u64 = 6;
}

impl Writable for RedirectedCarrierInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let index = match self {
            RedirectedCarrierInfo::Eutra(_) => 0,
            RedirectedCarrierInfo::Geran(_) => 1,
            RedirectedCarrierInfo::UtraFdd(_) => 2,
            RedirectedCarrierInfo::UtraTdd(_) => 3,
            RedirectedCarrierInfo::Cdma2000Hrpd(_) => 4,
            RedirectedCarrierInfo::Cdma2000OneXrtt(_) => 5,
            RedirectedCarrierInfo::Unknown(unknown) => {
                return unknown.write(writer, Self::NAME, Self::ROOT_VARIANTS, Self::ROOT_VARIANTS)
            }
        };
        writer.write_choice_index(Self::NAME, index, Self::ROOT_VARIANTS, true)?;
        match self {
            RedirectedCarrierInfo::Eutra(arfcn) => writer.write_int(*arfcn, 0, ARFCN_EUTRA_MAX),
            RedirectedCarrierInfo::Geran(carriers) => writer.write(carriers),
            RedirectedCarrierInfo::UtraFdd(arfcn) | RedirectedCarrierInfo::UtraTdd(arfcn) => {
                writer.write_int(*arfcn, 0, ARFCN_UTRA_MAX)
            }
            RedirectedCarrierInfo::Cdma2000Hrpd(carrier)
            | RedirectedCarrierInfo::Cdma2000OneXrtt(carrier) => writer.write(carrier),
            RedirectedCarrierInfo::Unknown(_) => Ok(()),
        }
    }
}

impl Readable for RedirectedCarrierInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(
            match reader.read_choice_index(Self::NAME, Self::ROOT_VARIANTS, true)? {
                0 => RedirectedCarrierInfo::Eutra(reader.read_int(0, ARFCN_EUTRA_MAX)?),
                1 => RedirectedCarrierInfo::Geran(reader.read()?),
                2 => RedirectedCarrierInfo::UtraFdd(reader.read_int(0, ARFCN_UTRA_MAX)?),
                3 => RedirectedCarrierInfo::UtraTdd(reader.read_int(0, ARFCN_UTRA_MAX)?),
                4 => RedirectedCarrierInfo::Cdma2000Hrpd(reader.read()?),
                5 => RedirectedCarrierInfo::Cdma2000OneXrtt(reader.read()?),
                index => RedirectedCarrierInfo::Unknown(UnknownAlternative::read(
                    reader,
                    Self::NAME,
                    index,
                )?),
            },
        )
    }
}

/// A carrier together with its `cellReselectionPriority`, the shape shared by all entries of
/// the dedicated priority lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreqPriority<T> {
    pub carrier: T,
    /// 0..7
    pub cell_reselection_priority: u8,
}

impl<T> FreqPriority<T> {
    fn write_with<F: FnOnce(&mut UperWriter, &T) -> Result<(), Error>>(
        &self,
        writer: &mut UperWriter,
        f: F,
    ) -> Result<(), Error> {
        f(writer, &self.carrier)?;
        writer.write_int(self.cell_reselection_priority, 0, CELL_RESELECTION_PRIORITY_MAX)
    }

    fn read_with<F: FnOnce(&mut UperReader<'_>) -> Result<T, Error>>(
        reader: &mut UperReader<'_>,
        f: F,
    ) -> Result<Self, Error> {
        Ok(FreqPriority {
            carrier: f(reader)?,
            cell_reselection_priority: reader.read_int(0, CELL_RESELECTION_PRIORITY_MAX)?,
        })
    }
}

enumerated! {
    pub enum T320: "IdleModeMobilityControlInfo-t320", numeric u8 {
        Min5 = "min5" => 5,
        Min10 = "min10" => 10,
        Min20 = "min20" => 20,
        Min30 = "min30" => 30,
        Min60 = "min60" => 60,
        Min120 = "min120" => 120,
        Min180 = "min180" => 180,
        Spare1 = "spare1",
    }
}

/// Dedicated cell reselection priorities, valid until `t320` expires
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleModeMobilityControlInfo {
    /// E-UTRA carriers, 1..8
    pub freq_priority_list_eutra: Option<Vec<FreqPriority<u32>>>,
    /// 1..16
    pub freq_priority_list_geran: Option<Vec<FreqPriority<CarrierFreqsGeran>>>,
    /// 1..16
    pub freq_priority_list_utra_fdd: Option<Vec<FreqPriority<u16>>>,
    /// 1..16
    pub freq_priority_list_utra_tdd: Option<Vec<FreqPriority<u16>>>,
    /// 1..32
    pub band_class_priority_list_hrpd: Option<Vec<FreqPriority<BandclassCdma2000>>>,
    /// 1..32
    pub band_class_priority_list_one_xrtt: Option<Vec<FreqPriority<BandclassCdma2000>>>,
    pub t320: Option<T320>,
}

impl Writable for IdleModeMobilityControlInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[
            self.freq_priority_list_eutra.is_some(),
            self.freq_priority_list_geran.is_some(),
            self.freq_priority_list_utra_fdd.is_some(),
            self.freq_priority_list_utra_tdd.is_some(),
            self.band_class_priority_list_hrpd.is_some(),
            self.band_class_priority_list_one_xrtt.is_some(),
            self.t320.is_some(),
        ])?;
        if let Some(list) = &self.freq_priority_list_eutra {
            writer.write_sequence_of_with(list, 1, MAX_FREQ, |w, entry| {
                entry.write_with(w, |w, arfcn| w.write_int(*arfcn, 0, ARFCN_EUTRA_MAX))
            })?;
        }
        if let Some(list) = &self.freq_priority_list_geran {
            writer.write_sequence_of_with(list, 1, MAX_GNFG, |w, entry| {
                entry.write_with(w, |w, carriers| w.write(carriers))
            })?;
        }
        for (list, max) in [
            (&self.freq_priority_list_utra_fdd, MAX_UTRA_FDD_CARRIER),
            (&self.freq_priority_list_utra_tdd, MAX_UTRA_TDD_CARRIER),
        ] {
            if let Some(list) = list {
                writer.write_sequence_of_with(list, 1, max, |w, entry| {
                    entry.write_with(w, |w, arfcn| w.write_int(*arfcn, 0, ARFCN_UTRA_MAX))
                })?;
            }
        }
        for list in [
            &self.band_class_priority_list_hrpd,
            &self.band_class_priority_list_one_xrtt,
        ]
        .into_iter()
        .flatten()
        {
            writer.write_sequence_of_with(list, 1, MAX_CDMA_BAND_CLASS, |w, entry| {
                entry.write_with(w, |w, band_class| w.write(band_class))
            })?;
        }
        if let Some(t320) = &self.t320 {
            writer.write(t320)?;
        }
        Ok(())
    }
}

impl Readable for IdleModeMobilityControlInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [eutra, geran, utra_fdd, utra_tdd, hrpd, one_xrtt, t320] = reader.read_presence()?;
        let mut value = IdleModeMobilityControlInfo::default();
        if eutra {
            value.freq_priority_list_eutra =
                Some(reader.read_sequence_of_with(1, MAX_FREQ, |r| {
                    FreqPriority::read_with(r, |r| r.read_int(0, ARFCN_EUTRA_MAX))
                })?);
        }
        if geran {
            value.freq_priority_list_geran =
                Some(reader.read_sequence_of_with(1, MAX_GNFG, |r| {
                    FreqPriority::read_with(r, |r| r.read())
                })?);
        }
        if utra_fdd {
            value.freq_priority_list_utra_fdd =
                Some(reader.read_sequence_of_with(1, MAX_UTRA_FDD_CARRIER, |r| {
                    FreqPriority::read_with(r, |r| r.read_int(0, ARFCN_UTRA_MAX))
                })?);
        }
        if utra_tdd {
            value.freq_priority_list_utra_tdd =
                Some(reader.read_sequence_of_with(1, MAX_UTRA_TDD_CARRIER, |r| {
                    FreqPriority::read_with(r, |r| r.read_int(0, ARFCN_UTRA_MAX))
                })?);
        }
        if hrpd {
            value.band_class_priority_list_hrpd =
                Some(reader.read_sequence_of_with(1, MAX_CDMA_BAND_CLASS, |r| {
                    FreqPriority::read_with(r, |r| r.read())
                })?);
        }
        if one_xrtt {
            value.band_class_priority_list_one_xrtt =
                Some(reader.read_sequence_of_with(1, MAX_CDMA_BAND_CLASS, |r| {
                    FreqPriority::read_with(r, |r| r.read())
                })?);
        }
        if t320 {
            value.t320 = Some(reader.read()?);
        }
        reader.read_extension_additions("IdleModeMobilityControlInfo", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

/// `RRCConnectionRelease-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrcConnectionReleaseR8 {
    pub release_cause: ReleaseCause,
    pub redirected_carrier_info: Option<RedirectedCarrierInfo>,
    pub idle_mode_mobility_control_info: Option<IdleModeMobilityControlInfo>,
}

impl Writable for RrcConnectionReleaseR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.redirected_carrier_info.is_some(),
            self.idle_mode_mobility_control_info.is_some(),
            false,
        ])?;
        writer.write(&self.release_cause)?;
        if let Some(value) = &self.redirected_carrier_info {
            writer.write(value)?;
        }
        if let Some(value) = &self.idle_mode_mobility_control_info {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for RrcConnectionReleaseR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [redirected, idle_mode, non_critical] = reader.read_presence()?;
        let value = RrcConnectionReleaseR8 {
            release_cause: reader.read()?,
            redirected_carrier_info: if redirected {
                Some(reader.read()?)
            } else {
                None
            },
            idle_mode_mobility_control_info: if idle_mode {
                Some(reader.read()?)
            } else {
                None
            },
        };
        skip_non_critical_extension(reader, non_critical, "RRCConnectionRelease-v890-IEs")?;
        Ok(value)
    }
}

transaction_message!(RrcConnectionRelease, RrcConnectionReleaseR8, 4);

/// `SecurityModeCommand-r8-IEs`, carrying the extensible `SecurityConfigSMC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityModeCommandR8 {
    pub security_algorithm_config: SecurityAlgorithmConfig,
}

impl Writable for SecurityModeCommandR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write_extension_marker(&[])?;
        writer.write(&self.security_algorithm_config)
    }
}

impl Readable for SecurityModeCommandR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let extended = reader.read_extension_marker()?;
        let value = SecurityModeCommandR8 {
            security_algorithm_config: reader.read()?,
        };
        reader.read_extension_additions("SecurityConfigSMC", extended, 0, |_, _| Ok(()))?;
        skip_non_critical_extension(reader, non_critical, "SecurityModeCommand-v8a0-IEs")?;
        Ok(value)
    }
}

transaction_message!(SecurityModeCommand, SecurityModeCommandR8, 4);

/// `UECapabilityEnquiry-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UeCapabilityEnquiryR8 {
    /// 1..8 RATs
    pub ue_capability_request: Vec<RatType>,
}

impl Writable for UeCapabilityEnquiryR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        write_ue_capability_request(writer, &self.ue_capability_request)
    }
}

impl Readable for UeCapabilityEnquiryR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = UeCapabilityEnquiryR8 {
            ue_capability_request: read_ue_capability_request(reader)?,
        };
        skip_non_critical_extension(reader, non_critical, "UECapabilityEnquiry-v8a0-IEs")?;
        Ok(value)
    }
}

transaction_message!(UeCapabilityEnquiry, UeCapabilityEnquiryR8, 4);

/// `DRB-CountMSB-Info`, the 25 most significant bits of the COUNT values of a DRB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrbCountMsbInfo {
    /// 1..32
    pub drb_identity: u8,
    pub count_msb_uplink: u32,
    pub count_msb_downlink: u32,
}

const COUNT_MSB_MAX: i64 = 33_554_431;

impl Writable for DrbCountMsbInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.drb_identity, 1, 32)?;
        writer.write_int(self.count_msb_uplink, 0, COUNT_MSB_MAX)?;
        writer.write_int(self.count_msb_downlink, 0, COUNT_MSB_MAX)
    }
}

impl Readable for DrbCountMsbInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(DrbCountMsbInfo {
            drb_identity: reader.read_int(1, 32)?,
            count_msb_uplink: reader.read_int(0, COUNT_MSB_MAX)?,
            count_msb_downlink: reader.read_int(0, COUNT_MSB_MAX)?,
        })
    }
}

/// `CounterCheck-r8-IEs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterCheckR8 {
    /// 1..11 entries
    pub drb_count_msb_info_list: Vec<DrbCountMsbInfo>,
}

impl Writable for CounterCheckR8 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[false])?;
        writer.write_sequence_of(&self.drb_count_msb_info_list, 1, MAX_DRB)
    }
}

impl Readable for CounterCheckR8 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [non_critical] = reader.read_presence()?;
        let value = CounterCheckR8 {
            drb_count_msb_info_list: reader.read_sequence_of(1, MAX_DRB)?,
        };
        skip_non_critical_extension(reader, non_critical, "CounterCheck-v8a0-IEs")?;
        Ok(value)
    }
}

transaction_message!(CounterCheck, CounterCheckR8, 4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ies::common::{
        BandIndicatorGeran, CipheringAlgorithm, FollowingArfcns, IntegrityProtAlgorithm,
    };
    use crate::io::per::ErrorKind;

    #[test]
    fn test_security_mode_command_layout() {
        let message = SecurityModeCommand {
            rrc_transaction_identifier: RrcTransactionIdentifier(1),
            critical_extensions: CriticalExtensions::Current(SecurityModeCommandR8 {
                security_algorithm_config: SecurityAlgorithmConfig {
                    ciphering_algorithm: CipheringAlgorithm::Eea2,
                    integrity_prot_algorithm: IntegrityProtAlgorithm::Eia2,
                },
            }),
        };
        let mut writer = UperWriter::default();
        writer.write(&message).unwrap();
        // identifier, criticalExtensions with c1, non-critical flag, extension bit, algorithms
        assert_eq!(2 + 3 + 1 + 1 + 4 + 4, writer.finish());
        // 01 0 00 0 0 0010 0010
        assert_eq!(&[0b0100_0000, 0b0100_0100], writer.byte_content());
        assert_eq!(message, writer.as_reader().read::<SecurityModeCommand>().unwrap());
    }

    #[test]
    fn test_release_with_redirection_and_priorities() {
        let message = RrcConnectionRelease {
            rrc_transaction_identifier: RrcTransactionIdentifier(2),
            critical_extensions: CriticalExtensions::Current(RrcConnectionReleaseR8 {
                release_cause: ReleaseCause::Other,
                redirected_carrier_info: Some(RedirectedCarrierInfo::Cdma2000Hrpd(
                    CarrierFreqCdma2000 {
                        band_class: BandclassCdma2000::Bc0,
                        arfcn: 2047,
                    },
                )),
                idle_mode_mobility_control_info: Some(IdleModeMobilityControlInfo {
                    freq_priority_list_eutra: Some(vec![
                        FreqPriority {
                            carrier: 1575,
                            cell_reselection_priority: 7,
                        },
                        FreqPriority {
                            carrier: 65535,
                            cell_reselection_priority: 0,
                        },
                    ]),
                    freq_priority_list_utra_tdd: Some(vec![FreqPriority {
                        carrier: 10_054,
                        cell_reselection_priority: 3,
                    }]),
                    band_class_priority_list_one_xrtt: Some(vec![FreqPriority {
                        carrier: BandclassCdma2000::Bc1,
                        cell_reselection_priority: 4,
                    }]),
                    t320: Some(T320::Min30),
                    ..Default::default()
                }),
            }),
        };
        let mut writer = UperWriter::default();
        writer.write(&message).unwrap();
        assert_eq!(message, writer.as_reader().read::<RrcConnectionRelease>().unwrap());
    }

    #[test]
    fn test_redirection_to_geran() {
        let info = RedirectedCarrierInfo::Geran(CarrierFreqsGeran {
            starting_arfcn: 512,
            band_indicator: BandIndicatorGeran::Dcs1800,
            following_arfcns: FollowingArfcns::ExplicitList(vec![514, 516]),
        });
        let mut writer = UperWriter::default();
        writer.write(&info).unwrap();
        assert_eq!(info, writer.as_reader().read::<RedirectedCarrierInfo>().unwrap());
    }

    #[test]
    fn test_mobility_to_geran_with_container() {
        let command = MobilityFromEutraCommandR8 {
            cs_fallback_indicator: true,
            purpose: MobilityPurpose::Handover(Handover {
                target_rat_type: TargetRatType::Geran,
                target_rat_message_container: vec![0x06, 0x2B, 0x00, 0x11],
                nas_security_param_from_eutra: Some(0x5C),
                system_information: Some(SiOrPsiGeran::Si(vec![vec![0x01; 23], vec![0x02]])),
            }),
        };
        let mut writer = UperWriter::default();
        writer.write(&command).unwrap();
        assert_eq!(command, writer.as_reader().read::<MobilityFromEutraCommandR8>().unwrap());
    }

    #[test]
    fn test_cell_change_order() {
        let command = MobilityFromEutraCommandR8 {
            cs_fallback_indicator: false,
            purpose: MobilityPurpose::CellChangeOrder(CellChangeOrder {
                t304: T304CellChangeOrder::Ms8000,
                target_rat_type: CellChangeOrderTarget::Geran(GeranCellChangeOrder {
                    phys_cell_id: PhysCellIdGeran {
                        network_colour_code: 5,
                        base_station_colour_code: 2,
                    },
                    carrier_freq: CarrierFreqGeran {
                        arfcn: 871,
                        band_indicator: BandIndicatorGeran::Dcs1800,
                    },
                    network_control_order: Some(0b10),
                    system_information: None,
                }),
            }),
        };
        let mut writer = UperWriter::default();
        writer.write(&command).unwrap();
        // flag, indicator, purpose, t304, target, flags, cell id, carrier, order
        assert_eq!(1 + 1 + 2 + 3 + 1 + 2 + 6 + 11 + 2, writer.finish());
        assert_eq!(command, writer.as_reader().read::<MobilityFromEutraCommandR8>().unwrap());
    }

    #[test]
    fn test_mobility_r9_is_unsupported() {
        let message = MobilityFromEutraCommand {
            rrc_transaction_identifier: RrcTransactionIdentifier(0),
            critical_extensions: CriticalExtensions::Spare(1),
        };
        assert_eq!(
            &ErrorKind::Unsupported("MobilityFromEUTRACommand-r9-IEs"),
            UperWriter::default().write(&message).unwrap_err().kind()
        );

        // identifier, criticalExtensions, c1 index 1
        let data = [0b0000_1000];
        assert_eq!(
            &ErrorKind::Unsupported("MobilityFromEUTRACommand-r9-IEs"),
            UperReader::from(&data[..])
                .read::<MobilityFromEutraCommand>()
                .unwrap_err()
                .kind()
        );

        let spare = MobilityFromEutraCommand {
            rrc_transaction_identifier: RrcTransactionIdentifier(0),
            critical_extensions: CriticalExtensions::Spare(3),
        };
        let mut writer = UperWriter::default();
        writer.write(&spare).unwrap();
        assert_eq!(spare, writer.as_reader().read::<MobilityFromEutraCommand>().unwrap());
    }

    #[test]
    fn test_counter_check_bounds() {
        let check = CounterCheckR8 {
            drb_count_msb_info_list: vec![DrbCountMsbInfo {
                drb_identity: 3,
                count_msb_uplink: 33_554_431,
                count_msb_downlink: 0,
            }],
        };
        let mut writer = UperWriter::default();
        writer.write(&check).unwrap();
        // flag, list size, identity, two counts
        assert_eq!(1 + 4 + 5 + 25 + 25, writer.finish());
        assert_eq!(check, writer.as_reader().read::<CounterCheckR8>().unwrap());

        let empty = CounterCheckR8 {
            drb_count_msb_info_list: vec![],
        };
        assert_eq!(
            &ErrorKind::SizeNotInRange(0, 1, 11),
            UperWriter::default().write(&empty).unwrap_err().kind()
        );
    }

    #[test]
    fn test_handover_preparation_request() {
        let request = HandoverFromEutraPreparationRequest {
            rrc_transaction_identifier: RrcTransactionIdentifier(3),
            critical_extensions: CriticalExtensions::Current(
                HandoverFromEutraPreparationRequestR8 {
                    cdma2000_type: Cdma2000Type::TypeHrpd,
                    rand: Some(0xDEAD_BEEF),
                    mobility_parameters: None,
                },
            ),
        };
        let mut writer = UperWriter::default();
        writer.write(&request).unwrap();
        assert_eq!(2 + 3 + 3 + 1 + 32, writer.finish());
        assert_eq!(
            request,
            writer
                .as_reader()
                .read::<HandoverFromEutraPreparationRequest>()
                .unwrap()
        );
    }
}
