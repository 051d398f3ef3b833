//! Handover related IEs: `MobilityControlInfo` and `SecurityConfigHO`.

use crate::ies::common::{
    read_phys_cell_id, write_phys_cell_id, CRnti, PhysCellId, SecurityAlgorithmConfig,
    ARFCN_EUTRA_MAX,
};
use crate::ies::radio_resource::common::RadioResourceConfigCommon;
use crate::io::per::Error;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

enumerated! {
    pub enum Bandwidth: "CarrierBandwidthEUTRA-dl-Bandwidth", numeric u8 {
        N6 = "n6" => 6,
        N15 = "n15" => 15,
        N25 = "n25" => 25,
        N50 = "n50" => 50,
        N75 = "n75" => 75,
        N100 = "n100" => 100,
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
    pub enum T304: "MobilityControlInfo-t304", numeric u16 {
        Ms50 = "ms50" => 50,
        Ms100 = "ms100" => 100,
        Ms150 = "ms150" => 150,
        Ms200 = "ms200" => 200,
        Ms500 = "ms500" => 500,
        Ms1000 = "ms1000" => 1000,
        Ms2000 = "ms2000" => 2000,
        Spare1 = "spare1",
    }
}

/// `CarrierFreqEUTRA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierFreqEutra {
    pub dl_carrier_freq: u32,
    pub ul_carrier_freq: Option<u32>,
}

impl Writable for CarrierFreqEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.ul_carrier_freq.is_some()])?;
        writer.write_int(self.dl_carrier_freq, 0, ARFCN_EUTRA_MAX)?;
        if let Some(ul) = self.ul_carrier_freq {
            writer.write_int(ul, 0, ARFCN_EUTRA_MAX)?;
        }
        Ok(())
    }
}

impl Readable for CarrierFreqEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [ul] = reader.read_presence()?;
        Ok(CarrierFreqEutra {
            dl_carrier_freq: reader.read_int(0, ARFCN_EUTRA_MAX)?,
            ul_carrier_freq: if ul {
                Some(reader.read_int(0, ARFCN_EUTRA_MAX)?)
            } else {
                None
            },
        })
    }
}

/// `CarrierBandwidthEUTRA`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierBandwidthEutra {
    pub dl_bandwidth: Bandwidth,
    pub ul_bandwidth: Option<Bandwidth>,
}

impl Writable for CarrierBandwidthEutra {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.ul_bandwidth.is_some()])?;
        writer.write(&self.dl_bandwidth)?;
        if let Some(ul) = &self.ul_bandwidth {
            writer.write(ul)?;
        }
        Ok(())
    }
}

impl Readable for CarrierBandwidthEutra {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [ul] = reader.read_presence()?;
        Ok(CarrierBandwidthEutra {
            dl_bandwidth: reader.read()?,
            ul_bandwidth: if ul { Some(reader.read()?) } else { None },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RachConfigDedicated {
    /// 0..63
    pub ra_preamble_index: u8,
    /// 0..15
    pub ra_prach_mask_index: u8,
}

impl Writable for RachConfigDedicated {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.ra_preamble_index, 0, 63)?;
        writer.write_int(self.ra_prach_mask_index, 0, 15)
    }
}

impl Readable for RachConfigDedicated {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(RachConfigDedicated {
            ra_preamble_index: reader.read_int(0, 63)?,
            ra_prach_mask_index: reader.read_int(0, 15)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobilityControlInfo {
    pub target_phys_cell_id: PhysCellId,
    pub carrier_freq: Option<CarrierFreqEutra>,
    pub carrier_bandwidth: Option<CarrierBandwidthEutra>,
    /// 1..32
    pub additional_spectrum_emission: Option<u8>,
    pub t304: T304,
    pub new_ue_identity: CRnti,
    pub radio_resource_config_common: RadioResourceConfigCommon,
    pub rach_config_dedicated: Option<RachConfigDedicated>,
}

impl Writable for MobilityControlInfo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[
            self.carrier_freq.is_some(),
            self.carrier_bandwidth.is_some(),
            self.additional_spectrum_emission.is_some(),
            self.rach_config_dedicated.is_some(),
        ])?;
        write_phys_cell_id(writer, self.target_phys_cell_id)?;
        if let Some(value) = &self.carrier_freq {
            writer.write(value)?;
        }
        if let Some(value) = &self.carrier_bandwidth {
            writer.write(value)?;
        }
        if let Some(value) = self.additional_spectrum_emission {
            writer.write_int(value, 1, 32)?;
        }
        writer.write(&self.t304)?;
        writer.write_bits(u64::from(self.new_ue_identity), 16)?;
        writer.write(&self.radio_resource_config_common)?;
        if let Some(value) = &self.rach_config_dedicated {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for MobilityControlInfo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [carrier_freq, carrier_bandwidth, emission, rach] = reader.read_presence()?;
        let value = MobilityControlInfo {
            target_phys_cell_id: read_phys_cell_id(reader)?,
            carrier_freq: if carrier_freq { Some(reader.read()?) } else { None },
            carrier_bandwidth: if carrier_bandwidth {
                Some(reader.read()?)
            } else {
                None
            },
            additional_spectrum_emission: if emission {
                Some(reader.read_int(1, 32)?)
            } else {
                None
            },
            t304: reader.read()?,
            new_ue_identity: reader.read_bits(16)?,
            radio_resource_config_common: reader.read()?,
            rach_config_dedicated: if rach { Some(reader.read()?) } else { None },
        };
        reader.read_extension_additions("MobilityControlInfo", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

/// `handoverType` of `SecurityConfigHO`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandoverType {
    IntraLte {
        security_algorithm_config: Option<SecurityAlgorithmConfig>,
        key_change_indicator: bool,
        /// 0..7
        next_hop_chaining_count: u8,
    },
    InterRat {
        security_algorithm_config: SecurityAlgorithmConfig,
        nas_security_param_to_eutra: [u8; 6],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityConfigHo {
    pub handover_type: HandoverType,
}

impl Writable for SecurityConfigHo {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        match &self.handover_type {
            HandoverType::IntraLte {
                security_algorithm_config,
                key_change_indicator,
                next_hop_chaining_count,
            } => {
                writer.write_choice_index("handoverType", 0, 2, false)?;
                writer.write_presence(&[security_algorithm_config.is_some()])?;
                if let Some(config) = security_algorithm_config {
                    writer.write(config)?;
                }
                writer.write_bit(*key_change_indicator)?;
                writer.write_int(*next_hop_chaining_count, 0, 7)
            }
            HandoverType::InterRat {
                security_algorithm_config,
                nas_security_param_to_eutra,
            } => {
                writer.write_choice_index("handoverType", 1, 2, false)?;
                writer.write(security_algorithm_config)?;
                writer.write_octet_string(&nas_security_param_to_eutra[..], Some(6), Some(6))
            }
        }
    }
}

impl Readable for SecurityConfigHo {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let handover_type = match reader.read_choice_index("handoverType", 2, false)? {
            0 => {
                let [config] = reader.read_presence()?;
                HandoverType::IntraLte {
                    security_algorithm_config: if config { Some(reader.read()?) } else { None },
                    key_change_indicator: reader.read_bit()?,
                    next_hop_chaining_count: reader.read_int(0, 7)?,
                }
            }
            _ => {
                let security_algorithm_config = reader.read()?;
                let octets = reader.read_octet_string(Some(6), Some(6))?;
                let mut nas_security_param_to_eutra = [0_u8; 6];
                nas_security_param_to_eutra.copy_from_slice(&octets);
                HandoverType::InterRat {
                    security_algorithm_config,
                    nas_security_param_to_eutra,
                }
            }
        };
        reader.read_extension_additions("SecurityConfigHO", extended, 0, |_, _| Ok(()))?;
        Ok(SecurityConfigHo { handover_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ies::common::{CipheringAlgorithm, IntegrityProtAlgorithm};

    #[test]
    fn test_security_config_intra_lte() {
        let config = SecurityConfigHo {
            handover_type: HandoverType::IntraLte {
                security_algorithm_config: None,
                key_change_indicator: false,
                next_hop_chaining_count: 7,
            },
        };
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        // extension bit, choice, presence, indicator, count
        assert_eq!(1 + 1 + 1 + 1 + 3, writer.finish());
        assert_eq!(config, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_security_config_inter_rat() {
        let config = SecurityConfigHo {
            handover_type: HandoverType::InterRat {
                security_algorithm_config: SecurityAlgorithmConfig {
                    ciphering_algorithm: CipheringAlgorithm::Eea2,
                    integrity_prot_algorithm: IntegrityProtAlgorithm::Eia2,
                },
                nas_security_param_to_eutra: [1, 2, 3, 4, 5, 6],
            },
        };
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        assert_eq!(config, writer.as_reader().read().unwrap());
    }

    #[test]
    fn test_carrier_bandwidth_spare_is_accepted() {
        let value = CarrierBandwidthEutra {
            dl_bandwidth: Bandwidth::Spare1,
            ul_bandwidth: Some(Bandwidth::N100),
        };
        let mut writer = UperWriter::default();
        writer.write(&value).unwrap();
        assert_eq!(value, writer.as_reader().read().unwrap());
    }
}
