//! Paging control channel.

use crate::codec::LogicalChannelMessage;
use crate::ies::bounds::MAX_PAGE_REC;
use crate::ies::common::{Imsi, STmsi};
use crate::io::per::Error;
use crate::messages::{read_c1_index, write_c1_index, write_message_class_extension};
use crate::syn::choice::UnknownAlternative;
use crate::syn::{Readable, UperReader, UperWriter, Writable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PagingUeIdentity {
    STmsi(STmsi),
    Imsi(Imsi),
    Unknown(UnknownAlternative),
}

impl PagingUeIdentity {
    const NAME: &'static str = "PagingUE-Identity";
    const ROOT_VARIANTS: u64 = 2;
}

impl Writable for PagingUeIdentity {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            PagingUeIdentity::STmsi(s_tmsi) => {
                writer.write_choice_index(Self::NAME, 0, Self::ROOT_VARIANTS, true)?;
                writer.write(s_tmsi)
            }
            PagingUeIdentity::Imsi(imsi) => {
                writer.write_choice_index(Self::NAME, 1, Self::ROOT_VARIANTS, true)?;
                writer.write(imsi)
            }
            PagingUeIdentity::Unknown(unknown) => unknown.write(
                writer,
                Self::NAME,
                Self::ROOT_VARIANTS,
                Self::ROOT_VARIANTS,
            ),
        }
    }
}

impl Readable for PagingUeIdentity {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(
            match reader.read_choice_index(Self::NAME, Self::ROOT_VARIANTS, true)? {
                0 => PagingUeIdentity::STmsi(reader.read()?),
                1 => PagingUeIdentity::Imsi(reader.read()?),
                index => {
                    PagingUeIdentity::Unknown(UnknownAlternative::read(reader, Self::NAME, index)?)
                }
            },
        )
    }
}

enumerated! {
    pub enum CnDomain: "PagingRecord-cn-Domain" {
        Ps = "ps",
        Cs = "cs",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingRecord {
    pub ue_identity: PagingUeIdentity,
    pub cn_domain: CnDomain,
}

impl Writable for PagingRecord {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write(&self.ue_identity)?;
        writer.write(&self.cn_domain)
    }
}

impl Readable for PagingRecord {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let value = PagingRecord {
            ue_identity: reader.read()?,
            cn_domain: reader.read()?,
        };
        reader.read_extension_additions("PagingRecord", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

/// `Paging` including its `v890` and `v920` non-critical extensions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// 1..16 records
    pub paging_record_list: Option<Vec<PagingRecord>>,
    pub system_info_modification: bool,
    pub etws_indication: bool,
    pub late_non_critical_extension: Option<Vec<u8>>,
    pub cmas_indication: bool,
}

impl Paging {
    pub const NAME: &'static str = "Paging";
}

impl Writable for Paging {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let v920 = self.cmas_indication;
        let v890 = self.late_non_critical_extension.is_some() || v920;
        writer.write_presence(&[
            self.paging_record_list.is_some(),
            self.system_info_modification,
            self.etws_indication,
            v890,
        ])?;
        if let Some(records) = &self.paging_record_list {
            writer.write_sequence_of(records, 1, MAX_PAGE_REC)?;
        }
        if v890 {
            writer.write_presence(&[self.late_non_critical_extension.is_some(), v920])?;
            if let Some(octets) = &self.late_non_critical_extension {
                writer.write_octet_string(octets, None, None)?;
            }
            if v920 {
                writer.write_presence(&[self.cmas_indication, false])?;
            }
        }
        Ok(())
    }
}

impl Readable for Paging {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [records, system_info_modification, etws_indication, v890] =
            reader.read_presence()?;
        let mut value = Paging {
            paging_record_list: if records {
                Some(reader.read_sequence_of(1, MAX_PAGE_REC)?)
            } else {
                None
            },
            system_info_modification,
            etws_indication,
            ..Default::default()
        };
        if v890 {
            let [late, v920] = reader.read_presence()?;
            if late {
                value.late_non_critical_extension = Some(reader.read_octet_string(None, None)?);
            }
            if v920 {
                let [cmas_indication, later] = reader.read_presence()?;
                value.cmas_indication = cmas_indication;
                if later {
                    reader.ignore_trailing_extension("Paging-v920-IEs")?;
                }
            }
        }
        Ok(value)
    }
}

/// `PCCH-Message`, whose `c1` holds `Paging` only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PcchMessage {
    Paging(Paging),
    MessageClassExtension,
}

impl Writable for PcchMessage {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            PcchMessage::Paging(paging) => {
                write_c1_index(writer, Self::NAME, 0, 1)?;
                writer.write(paging)
            }
            PcchMessage::MessageClassExtension => {
                write_message_class_extension(writer, Self::NAME)
            }
        }
    }
}

impl Readable for PcchMessage {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match read_c1_index(reader, Self::NAME, 1)? {
            Some(_) => PcchMessage::Paging(reader.read()?),
            None => PcchMessage::MessageClassExtension,
        })
    }
}

impl LogicalChannelMessage for PcchMessage {
    const NAME: &'static str = "PCCH-Message";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectingSink;

    fn s_tmsi_record() -> PagingRecord {
        PagingRecord {
            ue_identity: PagingUeIdentity::STmsi(STmsi {
                mmec: 0x1A,
                m_tmsi: 0xC0FF_EE01,
            }),
            cn_domain: CnDomain::Ps,
        }
    }

    #[test]
    fn test_paging_s_tmsi_layout() {
        let message = PcchMessage::Paging(Paging {
            paging_record_list: Some(vec![s_tmsi_record()]),
            ..Default::default()
        });
        let mut writer = UperWriter::default();
        writer.write(&message).unwrap();
        // message type, four flags, list size, extension bit, choice, S-TMSI, cn-Domain
        assert_eq!(1 + 4 + 4 + 1 + 2 + 40 + 1, writer.finish());
        let bytes = message.encode_to_vec().unwrap();
        assert_eq!(vec![0x40, 0x01, 0xAC, 0x0F, 0xFE, 0xE0, 0x10], bytes);
        assert_eq!(message, PcchMessage::decode_from(&bytes).unwrap());
    }

    #[test]
    fn test_paging_imsi_and_indications() {
        let message = PcchMessage::Paging(Paging {
            paging_record_list: Some(vec![
                s_tmsi_record(),
                PagingRecord {
                    ue_identity: PagingUeIdentity::Imsi(Imsi(vec![
                        0, 0, 1, 0, 1, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0,
                    ])),
                    cn_domain: CnDomain::Cs,
                },
            ]),
            system_info_modification: true,
            etws_indication: true,
            late_non_critical_extension: None,
            cmas_indication: false,
        });
        let bytes = message.encode_to_vec().unwrap();
        assert_eq!(message, PcchMessage::decode_from(&bytes).unwrap());
    }

    #[test]
    fn test_paging_extension_chain() {
        let paging = Paging {
            late_non_critical_extension: Some(vec![0x12, 0x34]),
            cmas_indication: true,
            ..Default::default()
        };
        let mut writer = UperWriter::default();
        writer.write(&paging).unwrap();
        // four flags, v890 flags, octet string, v920 flags
        assert_eq!(4 + 2 + 8 + 16 + 2, writer.finish());
        assert_eq!(paging, writer.as_reader().read::<Paging>().unwrap());

        let cmas_only = Paging {
            cmas_indication: true,
            ..Default::default()
        };
        let mut writer = UperWriter::default();
        writer.write(&cmas_only).unwrap();
        assert_eq!(4 + 2 + 2, writer.finish());
        assert_eq!(&[0b0001_0110], writer.byte_content());
        assert_eq!(cmas_only, writer.as_reader().read::<Paging>().unwrap());
    }

    #[test]
    fn test_later_extension_is_ignored() {
        let sink = CollectingSink::default();
        // no records, v890 without late extension, v920 with cmas and a later extension
        let data = [0b0001_0111, 0b1010_1010];
        let mut reader = UperReader::from(&data[..]).with_sink(&sink);
        let paging = reader.read::<Paging>().unwrap();
        assert!(paging.cmas_indication);
        assert_eq!(0, reader.remaining_bits());
        assert!(sink.contains("Paging-v920-IEs"));
    }

    #[test]
    fn test_unknown_ue_identity_is_kept() {
        let sink = CollectingSink::default();
        let identity = PagingUeIdentity::Unknown(UnknownAlternative {
            index: 2,
            data: vec![0xA5],
        });
        let mut writer = UperWriter::default();
        writer.write(&identity).unwrap();
        let mut reader = writer.as_reader().with_sink(&sink);
        assert_eq!(identity, reader.read::<PagingUeIdentity>().unwrap());
        assert!(sink.contains("PagingUE-Identity"));
    }
}
