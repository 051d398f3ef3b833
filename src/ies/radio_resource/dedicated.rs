//! Dedicated radio resources: signalling and data radio bearers with their RLC, PDCP and
//! logical channel configuration, and `RadioResourceConfigDedicated` itself.

use crate::ies::common::{N310, N311, T301, T310, T311};
use crate::ies::radio_resource::mac::MacMainConfig;
use crate::ies::radio_resource::mac::SpsConfig;
use crate::ies::radio_resource::physical::PhysicalConfigDedicated;
use crate::io::per::Error;
use crate::syn::bitstring::BitString;
use crate::syn::choice::{ExplicitOrDefault, SetupRelease, UnknownAlternative};
use crate::syn::extension::{addition, OpaqueExtension};
use crate::syn::{Readable, UperReader, UperWriter, Writable, WriteWith};

enumerated! {
    pub enum TPollRetransmit: "T-PollRetransmit", numeric u16 {
        Ms5 = "ms5" => 5,
        Ms10 = "ms10" => 10,
        Ms15 = "ms15" => 15,
        Ms20 = "ms20" => 20,
        Ms25 = "ms25" => 25,
        Ms30 = "ms30" => 30,
        Ms35 = "ms35" => 35,
        Ms40 = "ms40" => 40,
        Ms45 = "ms45" => 45,
        Ms50 = "ms50" => 50,
        Ms55 = "ms55" => 55,
        Ms60 = "ms60" => 60,
        Ms65 = "ms65" => 65,
        Ms70 = "ms70" => 70,
        Ms75 = "ms75" => 75,
        Ms80 = "ms80" => 80,
        Ms85 = "ms85" => 85,
        Ms90 = "ms90" => 90,
        Ms95 = "ms95" => 95,
        Ms100 = "ms100" => 100,
        Ms105 = "ms105" => 105,
        Ms110 = "ms110" => 110,
        Ms115 = "ms115" => 115,
        Ms120 = "ms120" => 120,
        Ms125 = "ms125" => 125,
        Ms130 = "ms130" => 130,
        Ms135 = "ms135" => 135,
        Ms140 = "ms140" => 140,
        Ms145 = "ms145" => 145,
        Ms150 = "ms150" => 150,
        Ms155 = "ms155" => 155,
        Ms160 = "ms160" => 160,
        Ms165 = "ms165" => 165,
        Ms170 = "ms170" => 170,
        Ms175 = "ms175" => 175,
        Ms180 = "ms180" => 180,
        Ms185 = "ms185" => 185,
        Ms190 = "ms190" => 190,
        Ms195 = "ms195" => 195,
        Ms200 = "ms200" => 200,
        Ms205 = "ms205" => 205,
        Ms210 = "ms210" => 210,
        Ms215 = "ms215" => 215,
        Ms220 = "ms220" => 220,
        Ms225 = "ms225" => 225,
        Ms230 = "ms230" => 230,
        Ms235 = "ms235" => 235,
        Ms240 = "ms240" => 240,
        Ms245 = "ms245" => 245,
        Ms250 = "ms250" => 250,
        Ms300 = "ms300" => 300,
        Ms350 = "ms350" => 350,
        Ms400 = "ms400" => 400,
        Ms450 = "ms450" => 450,
        Ms500 = "ms500" => 500,
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
    pub enum TReordering: "T-Reordering", numeric u16 {
        Ms0 = "ms0" => 0,
        Ms5 = "ms5" => 5,
        Ms10 = "ms10" => 10,
        Ms15 = "ms15" => 15,
        Ms20 = "ms20" => 20,
        Ms25 = "ms25" => 25,
        Ms30 = "ms30" => 30,
        Ms35 = "ms35" => 35,
        Ms40 = "ms40" => 40,
        Ms45 = "ms45" => 45,
        Ms50 = "ms50" => 50,
        Ms55 = "ms55" => 55,
        Ms60 = "ms60" => 60,
        Ms65 = "ms65" => 65,
        Ms70 = "ms70" => 70,
        Ms75 = "ms75" => 75,
        Ms80 = "ms80" => 80,
        Ms85 = "ms85" => 85,
        Ms90 = "ms90" => 90,
        Ms95 = "ms95" => 95,
        Ms100 = "ms100" => 100,
        Ms110 = "ms110" => 110,
        Ms120 = "ms120" => 120,
        Ms130 = "ms130" => 130,
        Ms140 = "ms140" => 140,
        Ms150 = "ms150" => 150,
        Ms160 = "ms160" => 160,
        Ms170 = "ms170" => 170,
        Ms180 = "ms180" => 180,
        Ms190 = "ms190" => 190,
        Ms200 = "ms200" => 200,
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum TStatusProhibit: "T-StatusProhibit", numeric u16 {
        Ms0 = "ms0" => 0,
        Ms5 = "ms5" => 5,
        Ms10 = "ms10" => 10,
        Ms15 = "ms15" => 15,
        Ms20 = "ms20" => 20,
        Ms25 = "ms25" => 25,
        Ms30 = "ms30" => 30,
        Ms35 = "ms35" => 35,
        Ms40 = "ms40" => 40,
        Ms45 = "ms45" => 45,
        Ms50 = "ms50" => 50,
        Ms55 = "ms55" => 55,
        Ms60 = "ms60" => 60,
        Ms65 = "ms65" => 65,
        Ms70 = "ms70" => 70,
        Ms75 = "ms75" => 75,
        Ms80 = "ms80" => 80,
        Ms85 = "ms85" => 85,
        Ms90 = "ms90" => 90,
        Ms95 = "ms95" => 95,
        Ms100 = "ms100" => 100,
        Ms105 = "ms105" => 105,
        Ms110 = "ms110" => 110,
        Ms115 = "ms115" => 115,
        Ms120 = "ms120" => 120,
        Ms125 = "ms125" => 125,
        Ms130 = "ms130" => 130,
        Ms135 = "ms135" => 135,
        Ms140 = "ms140" => 140,
        Ms145 = "ms145" => 145,
        Ms150 = "ms150" => 150,
        Ms155 = "ms155" => 155,
        Ms160 = "ms160" => 160,
        Ms165 = "ms165" => 165,
        Ms170 = "ms170" => 170,
        Ms175 = "ms175" => 175,
        Ms180 = "ms180" => 180,
        Ms185 = "ms185" => 185,
        Ms190 = "ms190" => 190,
        Ms195 = "ms195" => 195,
        Ms200 = "ms200" => 200,
        Ms205 = "ms205" => 205,
        Ms210 = "ms210" => 210,
        Ms215 = "ms215" => 215,
        Ms220 = "ms220" => 220,
        Ms225 = "ms225" => 225,
        Ms230 = "ms230" => 230,
        Ms235 = "ms235" => 235,
        Ms240 = "ms240" => 240,
        Ms245 = "ms245" => 245,
        Ms250 = "ms250" => 250,
        Ms300 = "ms300" => 300,
        Ms350 = "ms350" => 350,
        Ms400 = "ms400" => 400,
        Ms450 = "ms450" => 450,
        Ms500 = "ms500" => 500,
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
    pub enum PollPdu: "PollPDU", numeric u16 {
        P4 = "p4" => 4,
        P8 = "p8" => 8,
        P16 = "p16" => 16,
        P32 = "p32" => 32,
        P64 = "p64" => 64,
        P128 = "p128" => 128,
        P256 = "p256" => 256,
        PInfinity = "pInfinity",
    }
}

enumerated! {
    pub enum PollByte: "PollByte", numeric u16 {
        Kb25 = "kB25" => 25,
        Kb50 = "kB50" => 50,
        Kb75 = "kB75" => 75,
        Kb100 = "kB100" => 100,
        Kb125 = "kB125" => 125,
        Kb250 = "kB250" => 250,
        Kb375 = "kB375" => 375,
        Kb500 = "kB500" => 500,
        Kb750 = "kB750" => 750,
        Kb1000 = "kB1000" => 1000,
        Kb1250 = "kB1250" => 1250,
        Kb1500 = "kB1500" => 1500,
        Kb2000 = "kB2000" => 2000,
        Kb3000 = "kB3000" => 3000,
        KbInfinity = "kBinfinity",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum UlMaxRetxThreshold: "UL-AM-RLC-maxRetxThreshold", numeric u8 {
        T1 = "t1" => 1,
        T2 = "t2" => 2,
        T3 = "t3" => 3,
        T4 = "t4" => 4,
        T6 = "t6" => 6,
        T8 = "t8" => 8,
        T16 = "t16" => 16,
        T32 = "t32" => 32,
    }
}

enumerated! {
    pub enum PrioritisedBitRate: "prioritisedBitRate", numeric u16 {
        Kbps0 = "kBps0" => 0,
        Kbps8 = "kBps8" => 8,
        Kbps16 = "kBps16" => 16,
        Kbps32 = "kBps32" => 32,
        Kbps64 = "kBps64" => 64,
        Kbps128 = "kBps128" => 128,
        Kbps256 = "kBps256" => 256,
        Infinity = "infinity",
        Kbps512 = "kBps512-v1020" => 512,
        Kbps1024 = "kBps1024-v1020" => 1024,
        Kbps2048 = "kBps2048-v1020" => 2048,
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum BucketSizeDuration: "bucketSizeDuration", numeric u16 {
        Ms50 = "ms50" => 50,
        Ms100 = "ms100" => 100,
        Ms150 = "ms150" => 150,
        Ms300 = "ms300" => 300,
        Ms500 = "ms500" => 500,
        Ms1000 = "ms1000" => 1000,
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum DiscardTimer: "PDCP-Config-discardTimer", numeric u16 {
        Ms50 = "ms50" => 50,
        Ms100 = "ms100" => 100,
        Ms150 = "ms150" => 150,
        Ms300 = "ms300" => 300,
        Ms500 = "ms500" => 500,
        Ms750 = "ms750" => 750,
        Ms1500 = "ms1500" => 1500,
        Infinity = "infinity",
    }
}

enumerated! {
    pub enum SnFieldLength: "SN-FieldLength", numeric u8 {
        Size5 = "size5" => 5,
        Size10 = "size10" => 10,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UlAmRlc {
    pub t_poll_retransmit: TPollRetransmit,
    pub poll_pdu: PollPdu,
    pub poll_byte: PollByte,
    pub max_retx_threshold: UlMaxRetxThreshold,
}

impl Writable for UlAmRlc {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.t_poll_retransmit)?;
        writer.write(&self.poll_pdu)?;
        writer.write(&self.poll_byte)?;
        writer.write(&self.max_retx_threshold)
    }
}

impl Readable for UlAmRlc {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(UlAmRlc {
            t_poll_retransmit: reader.read()?,
            poll_pdu: reader.read()?,
            poll_byte: reader.read()?,
            max_retx_threshold: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DlAmRlc {
    pub t_reordering: TReordering,
    pub t_status_prohibit: TStatusProhibit,
}

impl Writable for DlAmRlc {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.t_reordering)?;
        writer.write(&self.t_status_prohibit)
    }
}

impl Readable for DlAmRlc {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(DlAmRlc {
            t_reordering: reader.read()?,
            t_status_prohibit: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UlUmRlc {
    pub sn_field_length: SnFieldLength,
}

impl Writable for UlUmRlc {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.sn_field_length)
    }
}

impl Readable for UlUmRlc {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(UlUmRlc {
            sn_field_length: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DlUmRlc {
    pub sn_field_length: SnFieldLength,
    pub t_reordering: TReordering,
}

impl Writable for DlUmRlc {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.sn_field_length)?;
        writer.write(&self.t_reordering)
    }
}

impl Readable for DlUmRlc {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(DlUmRlc {
            sn_field_length: reader.read()?,
            t_reordering: reader.read()?,
        })
    }
}

/// `RLC-Config`, an extensible choice of the RLC mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RlcConfig {
    Am { ul: UlAmRlc, dl: DlAmRlc },
    UmBiDirectional { ul: UlUmRlc, dl: DlUmRlc },
    UmUniDirectionalUl(UlUmRlc),
    UmUniDirectionalDl(DlUmRlc),
    Unknown(UnknownAlternative),
}

impl RlcConfig {
    pub const NAME: &'static str = "RLC-Config";
    const ROOT_VARIANTS: u64 = 4;
}

impl Writable for RlcConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let index = match self {
            RlcConfig::Am { .. } => 0,
            RlcConfig::UmBiDirectional { .. } => 1,
            RlcConfig::UmUniDirectionalUl(_) => 2,
            RlcConfig::UmUniDirectionalDl(_) => 3,
            RlcConfig::Unknown(unknown) => {
                return unknown.write(writer, Self::NAME, Self::ROOT_VARIANTS, Self::ROOT_VARIANTS)
            }
        };
        writer.write_choice_index(Self::NAME, index, Self::ROOT_VARIANTS, true)?;
        match self {
            RlcConfig::Am { ul, dl } => {
                writer.write(ul)?;
                writer.write(dl)
            }
            RlcConfig::UmBiDirectional { ul, dl } => {
                writer.write(ul)?;
                writer.write(dl)
            }
            RlcConfig::UmUniDirectionalUl(ul) => writer.write(ul),
            RlcConfig::UmUniDirectionalDl(dl) => writer.write(dl),
            RlcConfig::Unknown(_) => Ok(()),
        }
    }
}

impl Readable for RlcConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(
            match reader.read_choice_index(Self::NAME, Self::ROOT_VARIANTS, true)? {
                0 => RlcConfig::Am {
                    ul: reader.read()?,
                    dl: reader.read()?,
                },
                1 => RlcConfig::UmBiDirectional {
                    ul: reader.read()?,
                    dl: reader.read()?,
                },
                2 => RlcConfig::UmUniDirectionalUl(reader.read()?),
                3 => RlcConfig::UmUniDirectionalDl(reader.read()?),
                index => RlcConfig::Unknown(UnknownAlternative::read(reader, Self::NAME, index)?),
            },
        )
    }
}

enumerated! {
    pub enum PdcpSnSize: "pdcp-SN-Size", numeric u8 {
        Len7Bits = "len7bits" => 7,
        Len12Bits = "len12bits" => 12,
    }
}

/// ROHC profiles in the order `0x0001, 0x0002, 0x0003, 0x0004, 0x0006, 0x0101, 0x0102, 0x0103,
/// 0x0104`
pub const ROHC_PROFILES: [u16; 9] = [
    0x0001, 0x0002, 0x0003, 0x0004, 0x0006, 0x0101, 0x0102, 0x0103, 0x0104,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rohc {
    /// 1..16383, `None` stands for the default of 15
    pub max_cid: Option<u16>,
    /// Whether each of [`ROHC_PROFILES`] is supported
    pub profiles: [bool; 9],
}

impl Rohc {
    pub const DEFAULT_MAX_CID: u16 = 15;

    pub fn max_cid(&self) -> u16 {
        self.max_cid.unwrap_or(Self::DEFAULT_MAX_CID)
    }
}

impl Writable for Rohc {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[self.max_cid.is_some()])?;
        if let Some(max_cid) = self.max_cid {
            writer.write_int(max_cid, 1, 16383)?;
        }
        writer.write_presence(&self.profiles)
    }
}

impl Readable for Rohc {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [max_cid] = reader.read_presence()?;
        let value = Rohc {
            max_cid: if max_cid { Some(reader.read_int(1, 16383)?) } else { None },
            profiles: reader.read_presence()?,
        };
        reader.read_extension_additions("PDCP-Config.rohc", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderCompression {
    NotUsed,
    Rohc(Rohc),
}

impl Writable for HeaderCompression {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            HeaderCompression::NotUsed => writer.write_choice_index("headerCompression", 0, 2, false),
            HeaderCompression::Rohc(rohc) => {
                writer.write_choice_index("headerCompression", 1, 2, false)?;
                writer.write(rohc)
            }
        }
    }
}

impl Readable for HeaderCompression {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        match reader.read_choice_index("headerCompression", 2, false)? {
            0 => Ok(HeaderCompression::NotUsed),
            _ => Ok(HeaderCompression::Rohc(reader.read()?)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdcpConfig {
    pub discard_timer: Option<DiscardTimer>,
    /// `rlc-AM.statusReportRequired`
    pub rlc_am_status_report_required: Option<bool>,
    /// `rlc-UM.pdcp-SN-Size`
    pub rlc_um_pdcp_sn_size: Option<PdcpSnSize>,
    pub header_compression: HeaderCompression,
    /// `rn-IntegrityProtection-r10 ENUMERATED {enabled}`
    pub rn_integrity_protection: bool,
}

impl PdcpConfig {
    pub const NAME: &'static str = "PDCP-Config";
}

impl Writable for PdcpConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let rn_integrity_protection = Some(WriteWith(|w: &mut UperWriter| w.write_presence(&[true])))
            .filter(|_| self.rn_integrity_protection);
        let additions = [addition(&rn_integrity_protection)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.discard_timer.is_some(),
            self.rlc_am_status_report_required.is_some(),
            self.rlc_um_pdcp_sn_size.is_some(),
        ])?;
        if let Some(value) = &self.discard_timer {
            writer.write(value)?;
        }
        if let Some(value) = self.rlc_am_status_report_required {
            writer.write_bit(value)?;
        }
        if let Some(value) = &self.rlc_um_pdcp_sn_size {
            writer.write(value)?;
        }
        writer.write(&self.header_compression)?;
        writer.write_extension_additions(&additions)
    }
}

impl Readable for PdcpConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [discard_timer, rlc_am, rlc_um] = reader.read_presence()?;
        let mut value = PdcpConfig {
            discard_timer: if discard_timer { Some(reader.read()?) } else { None },
            rlc_am_status_report_required: if rlc_am { Some(reader.read_bit()?) } else { None },
            rlc_um_pdcp_sn_size: if rlc_um { Some(reader.read()?) } else { None },
            header_compression: reader.read()?,
            rn_integrity_protection: false,
        };
        reader.read_extension_additions(Self::NAME, extended, 1, |_, reader| {
            let [present] = reader.read_presence()?;
            value.rn_integrity_protection = present;
            Ok(())
        })?;
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UlSpecificParameters {
    /// 1..16
    pub priority: u8,
    pub prioritised_bit_rate: PrioritisedBitRate,
    pub bucket_size_duration: BucketSizeDuration,
    /// 0..3
    pub logical_channel_group: Option<u8>,
}

impl Writable for UlSpecificParameters {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.logical_channel_group.is_some()])?;
        writer.write_int(self.priority, 1, 16)?;
        writer.write(&self.prioritised_bit_rate)?;
        writer.write(&self.bucket_size_duration)?;
        if let Some(group) = self.logical_channel_group {
            writer.write_int(group, 0, 3)?;
        }
        Ok(())
    }
}

impl Readable for UlSpecificParameters {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [group] = reader.read_presence()?;
        Ok(UlSpecificParameters {
            priority: reader.read_int(1, 16)?,
            prioritised_bit_rate: reader.read()?,
            bucket_size_duration: reader.read()?,
            logical_channel_group: if group { Some(reader.read_int(0, 3)?) } else { None },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogicalChannelConfig {
    pub ul_specific_parameters: Option<UlSpecificParameters>,
    /// `logicalChannelSR-Mask-r9 ENUMERATED {setup}`
    pub logical_channel_sr_mask: bool,
}

impl Writable for LogicalChannelConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let sr_mask = Some(WriteWith(|w: &mut UperWriter| w.write_presence(&[true])))
            .filter(|_| self.logical_channel_sr_mask);
        let additions = [addition(&sr_mask)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[self.ul_specific_parameters.is_some()])?;
        if let Some(value) = &self.ul_specific_parameters {
            writer.write(value)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for LogicalChannelConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [ul_specific_parameters] = reader.read_presence()?;
        let mut value = LogicalChannelConfig {
            ul_specific_parameters: if ul_specific_parameters {
                Some(reader.read()?)
            } else {
                None
            },
            logical_channel_sr_mask: false,
        };
        reader.read_extension_additions("LogicalChannelConfig", extended, 1, |_, reader| {
            let [present] = reader.read_presence()?;
            value.logical_channel_sr_mask = present;
            Ok(())
        })?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrbToAddMod {
    /// 1..2
    pub srb_identity: u8,
    pub rlc_config: Option<ExplicitOrDefault<RlcConfig>>,
    pub logical_channel_config: Option<ExplicitOrDefault<LogicalChannelConfig>>,
}

impl Writable for SrbToAddMod {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[
            self.rlc_config.is_some(),
            self.logical_channel_config.is_some(),
        ])?;
        writer.write_int(self.srb_identity, 1, 2)?;
        if let Some(value) = &self.rlc_config {
            writer.write(value)?;
        }
        if let Some(value) = &self.logical_channel_config {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for SrbToAddMod {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [rlc_config, logical_channel_config] = reader.read_presence()?;
        let value = SrbToAddMod {
            srb_identity: reader.read_int(1, 2)?,
            rlc_config: if rlc_config { Some(reader.read()?) } else { None },
            logical_channel_config: if logical_channel_config {
                Some(reader.read()?)
            } else {
                None
            },
        };
        reader.read_extension_additions("SRB-ToAddMod", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrbToAddMod {
    /// 0..15
    pub eps_bearer_identity: Option<u8>,
    /// 1..32
    pub drb_identity: u8,
    pub pdcp_config: Option<PdcpConfig>,
    pub rlc_config: Option<RlcConfig>,
    /// 3..10
    pub logical_channel_identity: Option<u8>,
    pub logical_channel_config: Option<LogicalChannelConfig>,
}

impl Writable for DrbToAddMod {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[
            self.eps_bearer_identity.is_some(),
            self.pdcp_config.is_some(),
            self.rlc_config.is_some(),
            self.logical_channel_identity.is_some(),
            self.logical_channel_config.is_some(),
        ])?;
        if let Some(value) = self.eps_bearer_identity {
            writer.write_int(value, 0, 15)?;
        }
        writer.write_int(self.drb_identity, 1, 32)?;
        if let Some(value) = &self.pdcp_config {
            writer.write(value)?;
        }
        if let Some(value) = &self.rlc_config {
            writer.write(value)?;
        }
        if let Some(value) = self.logical_channel_identity {
            writer.write_int(value, 3, 10)?;
        }
        if let Some(value) = &self.logical_channel_config {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for DrbToAddMod {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [eps, pdcp, rlc, lcid, lcc] = reader.read_presence()?;
        let value = DrbToAddMod {
            eps_bearer_identity: if eps { Some(reader.read_int(0, 15)?) } else { None },
            drb_identity: reader.read_int(1, 32)?,
            pdcp_config: if pdcp { Some(reader.read()?) } else { None },
            rlc_config: if rlc { Some(reader.read()?) } else { None },
            logical_channel_identity: if lcid { Some(reader.read_int(3, 10)?) } else { None },
            logical_channel_config: if lcc { Some(reader.read()?) } else { None },
        };
        reader.read_extension_additions("DRB-ToAddMod", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RlfTimersAndConstants {
    pub t301: T301,
    pub t310: T310,
    pub n310: N310,
    pub t311: T311,
    pub n311: N311,
}

impl Writable for RlfTimersAndConstants {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write(&self.t301)?;
        writer.write(&self.t310)?;
        writer.write(&self.n310)?;
        writer.write(&self.t311)?;
        writer.write(&self.n311)
    }
}

impl Readable for RlfTimersAndConstants {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let value = RlfTimersAndConstants {
            t301: reader.read()?,
            t310: reader.read()?,
            n310: reader.read()?,
            t311: reader.read()?,
            n311: reader.read()?,
        };
        reader.read_extension_additions("RLF-TimersAndConstants-r9", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

/// The TDD alternative of `MeasSubframePattern-r10`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubframePatternTdd {
    /// 20 bits
    Config1To5(u32),
    /// 70 bits
    Config0(BitString),
    /// 60 bits
    Config6(u64),
    Unknown(UnknownAlternative),
}

impl SubframePatternTdd {
    const NAME: &'static str = "subframePatternTDD-r10";
}

impl Writable for SubframePatternTdd {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            SubframePatternTdd::Config1To5(pattern) => {
                writer.write_choice_index(Self::NAME, 0, 3, true)?;
                writer.write_bits(u64::from(*pattern), 20)
            }
            SubframePatternTdd::Config0(pattern) => {
                writer.write_choice_index(Self::NAME, 1, 3, true)?;
                pattern.write_sized(writer, 70, 70)
            }
            SubframePatternTdd::Config6(pattern) => {
                writer.write_choice_index(Self::NAME, 2, 3, true)?;
                writer.write_bits(*pattern, 60)
            }
            SubframePatternTdd::Unknown(unknown) => unknown.write(writer, Self::NAME, 3, 3),
        }
    }
}

impl Readable for SubframePatternTdd {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match reader.read_choice_index(Self::NAME, 3, true)? {
            0 => SubframePatternTdd::Config1To5(reader.read_bits(20)?),
            1 => SubframePatternTdd::Config0(BitString::read_sized(reader, 70, 70)?),
            2 => SubframePatternTdd::Config6(reader.read_bits(60)?),
            index => SubframePatternTdd::Unknown(UnknownAlternative::read(reader, Self::NAME, index)?),
        })
    }
}

/// `MeasSubframePattern-r10`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasSubframePattern {
    /// 40 bits
    Fdd(u64),
    Tdd(SubframePatternTdd),
    Unknown(UnknownAlternative),
}

impl MeasSubframePattern {
    const NAME: &'static str = "MeasSubframePattern-r10";
}

impl Writable for MeasSubframePattern {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        match self {
            MeasSubframePattern::Fdd(pattern) => {
                writer.write_choice_index(Self::NAME, 0, 2, true)?;
                writer.write_bits(*pattern, 40)
            }
            MeasSubframePattern::Tdd(pattern) => {
                writer.write_choice_index(Self::NAME, 1, 2, true)?;
                writer.write(pattern)
            }
            MeasSubframePattern::Unknown(unknown) => unknown.write(writer, Self::NAME, 2, 2),
        }
    }
}

impl Readable for MeasSubframePattern {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(match reader.read_choice_index(Self::NAME, 2, true)? {
            0 => MeasSubframePattern::Fdd(reader.read_bits(40)?),
            1 => MeasSubframePattern::Tdd(reader.read()?),
            index => MeasSubframePattern::Unknown(UnknownAlternative::read(reader, Self::NAME, index)?),
        })
    }
}

pub fn write_drb_to_release_list(writer: &mut UperWriter, list: &[u8]) -> Result<(), Error> {
    writer.write_sequence_of_with(list, 1, crate::ies::bounds::MAX_DRB, |w, drb| {
        w.write_int(*drb, 1, 32)
    })
}

pub fn read_drb_to_release_list(reader: &mut UperReader<'_>) -> Result<Vec<u8>, Error> {
    reader.read_sequence_of_with(1, crate::ies::bounds::MAX_DRB, |r| r.read_int(1, 32))
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RadioResourceConfigDedicated {
    /// 1..2 entries
    pub srb_to_add_mod_list: Option<Vec<SrbToAddMod>>,
    /// 1..maxDRB entries
    pub drb_to_add_mod_list: Option<Vec<DrbToAddMod>>,
    /// 1..maxDRB identities, each 1..32
    pub drb_to_release_list: Option<Vec<u8>>,
    pub mac_main_config: Option<ExplicitOrDefault<MacMainConfig>>,
    pub sps_config: Option<SpsConfig>,
    pub physical_config_dedicated: Option<PhysicalConfigDedicated>,
    pub rlf_timers_and_constants: Option<SetupRelease<RlfTimersAndConstants>>,
    pub meas_subframe_pattern_pcell: Option<SetupRelease<MeasSubframePattern>>,
    /// The Rel-11 group, kept as received
    pub extension_v1130: Option<OpaqueExtension>,
}

impl RadioResourceConfigDedicated {
    pub const NAME: &'static str = "RadioResourceConfigDedicated";
}

impl Writable for RadioResourceConfigDedicated {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let rlf = self.rlf_timers_and_constants.as_ref().map(|value| {
            WriteWith(move |w: &mut UperWriter| {
                w.write_presence(&[true])?;
                w.write(value)
            })
        });
        let pattern = self.meas_subframe_pattern_pcell.as_ref().map(|value| {
            WriteWith(move |w: &mut UperWriter| {
                w.write_presence(&[true])?;
                w.write(value)
            })
        });
        let additions = [
            addition(&rlf),
            addition(&pattern),
            addition(&self.extension_v1130),
        ];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.srb_to_add_mod_list.is_some(),
            self.drb_to_add_mod_list.is_some(),
            self.drb_to_release_list.is_some(),
            self.mac_main_config.is_some(),
            self.sps_config.is_some(),
            self.physical_config_dedicated.is_some(),
        ])?;
        if let Some(list) = &self.srb_to_add_mod_list {
            writer.write_sequence_of(list, 1, 2)?;
        }
        if let Some(list) = &self.drb_to_add_mod_list {
            writer.write_sequence_of(list, 1, crate::ies::bounds::MAX_DRB)?;
        }
        if let Some(list) = &self.drb_to_release_list {
            write_drb_to_release_list(writer, list)?;
        }
        if let Some(value) = &self.mac_main_config {
            writer.write(value)?;
        }
        if let Some(value) = &self.sps_config {
            writer.write(value)?;
        }
        if let Some(value) = &self.physical_config_dedicated {
            writer.write(value)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for RadioResourceConfigDedicated {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [srb, drb, drb_release, mac, sps, physical] = reader.read_presence()?;
        let mut value = RadioResourceConfigDedicated {
            srb_to_add_mod_list: if srb {
                Some(reader.read_sequence_of(1, 2)?)
            } else {
                None
            },
            drb_to_add_mod_list: if drb {
                Some(reader.read_sequence_of(1, crate::ies::bounds::MAX_DRB)?)
            } else {
                None
            },
            drb_to_release_list: if drb_release {
                Some(read_drb_to_release_list(reader)?)
            } else {
                None
            },
            mac_main_config: if mac { Some(reader.read()?) } else { None },
            sps_config: if sps { Some(reader.read()?) } else { None },
            physical_config_dedicated: if physical { Some(reader.read()?) } else { None },
            rlf_timers_and_constants: None,
            meas_subframe_pattern_pcell: None,
            extension_v1130: None,
        };
        reader.read_extension_additions(Self::NAME, extended, 3, |index, reader| {
            if index == 2 {
                value.extension_v1130 = Some(reader.read()?);
                return Ok(());
            }
            let [present] = reader.read_presence()?;
            if present {
                match index {
                    0 => value.rlf_timers_and_constants = Some(reader.read()?),
                    _ => value.meas_subframe_pattern_pcell = Some(reader.read()?),
                }
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

    fn am() -> RlcConfig {
        RlcConfig::Am {
            ul: UlAmRlc {
                t_poll_retransmit: TPollRetransmit::Ms45,
                poll_pdu: PollPdu::PInfinity,
                poll_byte: PollByte::KbInfinity,
                max_retx_threshold: UlMaxRetxThreshold::T4,
            },
            dl: DlAmRlc {
                t_reordering: TReordering::Ms35,
                t_status_prohibit: TStatusProhibit::Ms0,
            },
        }
    }

    #[test]
    fn test_rlc_am_layout() {
        let mut writer = UperWriter::default();
        writer.write(&am()).unwrap();
        // extension bit, two index bits, 6+3+4+3 for UL, 5+6 for DL
        assert_eq!(1 + 2 + 16 + 11, writer.finish());
        assert_eq!(am(), writer.as_reader().read::<RlcConfig>().unwrap());
    }

    #[test]
    fn test_rlc_unknown_mode_is_kept() {
        let unknown = RlcConfig::Unknown(UnknownAlternative {
            index: 5,
            data: vec![0xA5],
        });
        let mut writer = UperWriter::default();
        writer.write(&unknown).unwrap();
        assert_eq!(unknown, writer.as_reader().read::<RlcConfig>().unwrap());

        let shadowing = RlcConfig::Unknown(UnknownAlternative {
            index: 1,
            data: Vec::new(),
        });
        assert_eq!(
            &ErrorKind::ChoiceVariantMismatch {
                name: RlcConfig::NAME,
                index: 1
            },
            UperWriter::default().write(&shadowing).unwrap_err().kind()
        );
    }

    #[test]
    fn test_srb_with_defaults() {
        let srb = SrbToAddMod {
            srb_identity: 1,
            rlc_config: Some(ExplicitOrDefault::Default),
            logical_channel_config: Some(ExplicitOrDefault::Default),
        };
        let mut writer = UperWriter::default();
        writer.write(&srb).unwrap();
        // extension bit, two presence bits, identity, two choice indices
        assert_eq!(1 + 2 + 1 + 1 + 1, writer.finish());
        assert_eq!(srb, writer.as_reader().read::<SrbToAddMod>().unwrap());
    }

    #[test]
    fn test_drb_identity_out_of_range() {
        let drb = DrbToAddMod {
            eps_bearer_identity: Some(5),
            drb_identity: 33,
            pdcp_config: None,
            rlc_config: None,
            logical_channel_identity: None,
            logical_channel_config: None,
        };
        assert_eq!(
            &ErrorKind::ValueNotInRange(33, 1, 32),
            UperWriter::default().write(&drb).unwrap_err().kind()
        );
    }

    #[test]
    fn test_drb_with_pdcp_and_logical_channel() {
        let drb = DrbToAddMod {
            eps_bearer_identity: Some(5),
            drb_identity: 1,
            pdcp_config: Some(PdcpConfig {
                discard_timer: Some(DiscardTimer::Infinity),
                rlc_am_status_report_required: Some(true),
                rlc_um_pdcp_sn_size: None,
                header_compression: HeaderCompression::Rohc(Rohc {
                    max_cid: None,
                    profiles: [true, true, false, false, false, false, false, false, false],
                }),
                rn_integrity_protection: true,
            }),
            rlc_config: Some(am()),
            logical_channel_identity: Some(3),
            logical_channel_config: Some(LogicalChannelConfig {
                ul_specific_parameters: Some(UlSpecificParameters {
                    priority: 2,
                    prioritised_bit_rate: PrioritisedBitRate::Kbps1024,
                    bucket_size_duration: BucketSizeDuration::Ms300,
                    logical_channel_group: Some(2),
                }),
                logical_channel_sr_mask: true,
            }),
        };
        let mut writer = UperWriter::default();
        writer.write(&drb).unwrap();
        assert_eq!(drb, writer.as_reader().read::<DrbToAddMod>().unwrap());
    }

    #[test]
    fn test_rrcd_with_rlf_timers_group() {
        use crate::ies::common::{N310, N311, T301, T310, T311};
        let config = RadioResourceConfigDedicated {
            drb_to_release_list: Some(vec![1, 32]),
            rlf_timers_and_constants: Some(SetupRelease::Setup(RlfTimersAndConstants {
                t301: T301::Ms400,
                t310: T310::Ms1000,
                n310: N310::N1,
                t311: T311::Ms10000,
                n311: N311::N1,
            })),
            meas_subframe_pattern_pcell: Some(SetupRelease::Setup(MeasSubframePattern::Tdd(
                SubframePatternTdd::Config0(BitString::with_len(70)),
            ))),
            ..Default::default()
        };
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        assert_eq!(
            config,
            writer.as_reader().read::<RadioResourceConfigDedicated>().unwrap()
        );
    }
}
