//! MAC configuration: `MAC-MainConfig` with DRX and power headroom reporting, and
//! semi-persistent scheduling.

use crate::ies::common::CRnti;
use crate::io::per::Error;
use crate::syn::choice::SetupRelease;
use crate::syn::extension::addition;
use crate::syn::{Readable, UperReader, UperWriter, Writable, WriteWith};

enumerated! {
    pub enum MaxHarqTx: "maxHARQ-Tx", numeric u8 {
        N1 = "n1" => 1,
        N2 = "n2" => 2,
        N3 = "n3" => 3,
        N4 = "n4" => 4,
        N5 = "n5" => 5,
        N6 = "n6" => 6,
        N7 = "n7" => 7,
        N8 = "n8" => 8,
        N10 = "n10" => 10,
        N12 = "n12" => 12,
        N16 = "n16" => 16,
        N20 = "n20" => 20,
        N24 = "n24" => 24,
        N28 = "n28" => 28,
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum PeriodicBsrTimer: "periodicBSR-Timer", numeric u16 {
        Sf5 = "sf5" => 5,
        Sf10 = "sf10" => 10,
        Sf16 = "sf16" => 16,
        Sf20 = "sf20" => 20,
        Sf32 = "sf32" => 32,
        Sf40 = "sf40" => 40,
        Sf64 = "sf64" => 64,
        Sf80 = "sf80" => 80,
        Sf128 = "sf128" => 128,
        Sf160 = "sf160" => 160,
        Sf320 = "sf320" => 320,
        Sf640 = "sf640" => 640,
        Sf1280 = "sf1280" => 1280,
        Sf2560 = "sf2560" => 2560,
        Infinity = "infinity",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum RetxBsrTimer: "retxBSR-Timer", numeric u16 {
        Sf320 = "sf320" => 320,
        Sf640 = "sf640" => 640,
        Sf1280 = "sf1280" => 1280,
        Sf2560 = "sf2560" => 2560,
        Sf5120 = "sf5120" => 5120,
        Sf10240 = "sf10240" => 10240,
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

enumerated! {
    pub enum OnDurationTimer: "onDurationTimer", numeric u8 {
        Psf1 = "psf1" => 1,
        Psf2 = "psf2" => 2,
        Psf3 = "psf3" => 3,
        Psf4 = "psf4" => 4,
        Psf5 = "psf5" => 5,
        Psf6 = "psf6" => 6,
        Psf8 = "psf8" => 8,
        Psf10 = "psf10" => 10,
        Psf20 = "psf20" => 20,
        Psf30 = "psf30" => 30,
        Psf40 = "psf40" => 40,
        Psf50 = "psf50" => 50,
        Psf60 = "psf60" => 60,
        Psf80 = "psf80" => 80,
        Psf100 = "psf100" => 100,
        Psf200 = "psf200" => 200,
    }
}

enumerated! {
    pub enum DrxInactivityTimer: "drx-InactivityTimer", numeric u16 {
        Psf1 = "psf1" => 1,
        Psf2 = "psf2" => 2,
        Psf3 = "psf3" => 3,
        Psf4 = "psf4" => 4,
        Psf5 = "psf5" => 5,
        Psf6 = "psf6" => 6,
        Psf8 = "psf8" => 8,
        Psf10 = "psf10" => 10,
        Psf20 = "psf20" => 20,
        Psf30 = "psf30" => 30,
        Psf40 = "psf40" => 40,
        Psf50 = "psf50" => 50,
        Psf60 = "psf60" => 60,
        Psf80 = "psf80" => 80,
        Psf100 = "psf100" => 100,
        Psf200 = "psf200" => 200,
        Psf300 = "psf300" => 300,
        Psf500 = "psf500" => 500,
        Psf750 = "psf750" => 750,
        Psf1280 = "psf1280" => 1280,
        Psf1920 = "psf1920" => 1920,
        Psf2560 = "psf2560" => 2560,
        Psf0 = "psf0-v1020" => 0,
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
    pub enum DrxRetransmissionTimer: "drx-RetransmissionTimer", numeric u8 {
        Psf1 = "psf1" => 1,
        Psf2 = "psf2" => 2,
        Psf4 = "psf4" => 4,
        Psf6 = "psf6" => 6,
        Psf8 = "psf8" => 8,
        Psf16 = "psf16" => 16,
        Psf24 = "psf24" => 24,
        Psf33 = "psf33" => 33,
    }
}

enumerated! {
    pub enum LongDrxCycle: "longDRX-CycleStartOffset", numeric u16 {
        Sf10 = "sf10" => 10,
        Sf20 = "sf20" => 20,
        Sf32 = "sf32" => 32,
        Sf40 = "sf40" => 40,
        Sf64 = "sf64" => 64,
        Sf80 = "sf80" => 80,
        Sf128 = "sf128" => 128,
        Sf160 = "sf160" => 160,
        Sf256 = "sf256" => 256,
        Sf320 = "sf320" => 320,
        Sf512 = "sf512" => 512,
        Sf640 = "sf640" => 640,
        Sf1024 = "sf1024" => 1024,
        Sf1280 = "sf1280" => 1280,
        Sf2048 = "sf2048" => 2048,
        Sf2560 = "sf2560" => 2560,
    }
}

enumerated! {
    pub enum ShortDrxCycle: "shortDRX-Cycle", numeric u16 {
        Sf2 = "sf2" => 2,
        Sf5 = "sf5" => 5,
        Sf8 = "sf8" => 8,
        Sf10 = "sf10" => 10,
        Sf16 = "sf16" => 16,
        Sf20 = "sf20" => 20,
        Sf32 = "sf32" => 32,
        Sf40 = "sf40" => 40,
        Sf64 = "sf64" => 64,
        Sf80 = "sf80" => 80,
        Sf128 = "sf128" => 128,
        Sf160 = "sf160" => 160,
        Sf256 = "sf256" => 256,
        Sf320 = "sf320" => 320,
        Sf512 = "sf512" => 512,
        Sf640 = "sf640" => 640,
    }
}

enumerated! {
    pub enum TimeAlignmentTimer: "TimeAlignmentTimer", numeric u16 {
        Sf500 = "sf500" => 500,
        Sf750 = "sf750" => 750,
        Sf1280 = "sf1280" => 1280,
        Sf1920 = "sf1920" => 1920,
        Sf2560 = "sf2560" => 2560,
        Sf5120 = "sf5120" => 5120,
        Sf10240 = "sf10240" => 10240,
        Infinity = "infinity",
    }
}

enumerated! {
    pub enum PeriodicPhrTimer: "periodicPHR-Timer", numeric u16 {
        Sf10 = "sf10" => 10,
        Sf20 = "sf20" => 20,
        Sf50 = "sf50" => 50,
        Sf100 = "sf100" => 100,
        Sf200 = "sf200" => 200,
        Sf500 = "sf500" => 500,
        Sf1000 = "sf1000" => 1000,
        Infinity = "infinity",
    }
}

enumerated! {
    pub enum ProhibitPhrTimer: "prohibitPHR-Timer", numeric u16 {
        Sf0 = "sf0" => 0,
        Sf10 = "sf10" => 10,
        Sf20 = "sf20" => 20,
        Sf50 = "sf50" => 50,
        Sf100 = "sf100" => 100,
        Sf200 = "sf200" => 200,
        Sf500 = "sf500" => 500,
        Sf1000 = "sf1000" => 1000,
    }
}

enumerated! {
    pub enum DlPathlossChange: "dl-PathlossChange", numeric u8 {
        Db1 = "dB1" => 1,
        Db3 = "dB3" => 3,
        Db6 = "dB6" => 6,
        Infinity = "infinity",
    }
}

enumerated! {
    pub enum SCellDeactivationTimer: "sCellDeactivationTimer-r10", numeric u8 {
        Rf2 = "rf2" => 2,
        Rf4 = "rf4" => 4,
        Rf8 = "rf8" => 8,
        Rf16 = "rf16" => 16,
        Rf32 = "rf32" => 32,
        Rf64 = "rf64" => 64,
        Rf128 = "rf128" => 128,
        Spare = "spare",
    }
}

enumerated! {
    pub enum SemiPersistSchedInterval: "semiPersistSchedInterval", numeric u16 {
        Sf10 = "sf10" => 10,
        Sf20 = "sf20" => 20,
        Sf32 = "sf32" => 32,
        Sf40 = "sf40" => 40,
        Sf64 = "sf64" => 64,
        Sf80 = "sf80" => 80,
        Sf128 = "sf128" => 128,
        Sf160 = "sf160" => 160,
        Sf320 = "sf320" => 320,
        Sf640 = "sf640" => 640,
        Spare6 = "spare6",
        Spare5 = "spare5",
        Spare4 = "spare4",
        Spare3 = "spare3",
        Spare2 = "spare2",
        Spare1 = "spare1",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UlSchConfig {
    pub max_harq_tx: Option<MaxHarqTx>,
    pub periodic_bsr_timer: Option<PeriodicBsrTimer>,
    pub retx_bsr_timer: RetxBsrTimer,
    pub tti_bundling: bool,
}

impl Writable for UlSchConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.max_harq_tx.is_some(), self.periodic_bsr_timer.is_some()])?;
        if let Some(value) = &self.max_harq_tx {
            writer.write(value)?;
        }
        if let Some(value) = &self.periodic_bsr_timer {
            writer.write(value)?;
        }
        writer.write(&self.retx_bsr_timer)?;
        writer.write_bit(self.tti_bundling)
    }
}

impl Readable for UlSchConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [max_harq_tx, periodic_bsr_timer] = reader.read_presence()?;
        Ok(UlSchConfig {
            max_harq_tx: if max_harq_tx { Some(reader.read()?) } else { None },
            periodic_bsr_timer: if periodic_bsr_timer {
                Some(reader.read()?)
            } else {
                None
            },
            retx_bsr_timer: reader.read()?,
            tti_bundling: reader.read_bit()?,
        })
    }
}

/// `longDRX-CycleStartOffset`, a choice of the cycle length whose alternative carries the
/// offset within `0..cycle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongDrxCycleStartOffset {
    pub cycle: LongDrxCycle,
    pub offset: u16,
}

impl Writable for LongDrxCycleStartOffset {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        use crate::syn::enumerated::{Enumerated, EnumeratedNumeric};
        let length = self.cycle.to_numeric().unwrap_or(1);
        writer.write_choice_index(
            LongDrxCycle::NAME,
            self.cycle.ordinal(),
            LongDrxCycle::ordinal_count(),
            false,
        )?;
        writer.write_int(self.offset, 0, i64::from(length) - 1)
    }
}

impl Readable for LongDrxCycleStartOffset {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        use crate::syn::enumerated::{Enumerated, EnumeratedNumeric};
        let index =
            reader.read_choice_index(LongDrxCycle::NAME, LongDrxCycle::ordinal_count(), false)?;
        let cycle = LongDrxCycle::from_ordinal(index).ok_or_else(|| {
            Error::invalid_choice_index(LongDrxCycle::NAME, index, LongDrxCycle::ordinal_count())
        })?;
        let length = cycle.to_numeric().unwrap_or(1);
        Ok(LongDrxCycleStartOffset {
            cycle,
            offset: reader.read_int(0, i64::from(length) - 1)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortDrx {
    pub short_drx_cycle: ShortDrxCycle,
    /// 1..16
    pub drx_short_cycle_timer: u8,
}

impl Writable for ShortDrx {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.short_drx_cycle)?;
        writer.write_int(self.drx_short_cycle_timer, 1, 16)
    }
}

impl Readable for ShortDrx {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(ShortDrx {
            short_drx_cycle: reader.read()?,
            drx_short_cycle_timer: reader.read_int(1, 16)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrxConfigSetup {
    pub on_duration_timer: OnDurationTimer,
    pub drx_inactivity_timer: DrxInactivityTimer,
    pub drx_retransmission_timer: DrxRetransmissionTimer,
    pub long_drx_cycle_start_offset: LongDrxCycleStartOffset,
    pub short_drx: Option<ShortDrx>,
}

impl Writable for DrxConfigSetup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[self.short_drx.is_some()])?;
        writer.write(&self.on_duration_timer)?;
        writer.write(&self.drx_inactivity_timer)?;
        writer.write(&self.drx_retransmission_timer)?;
        writer.write(&self.long_drx_cycle_start_offset)?;
        if let Some(short_drx) = &self.short_drx {
            writer.write(short_drx)?;
        }
        Ok(())
    }
}

impl Readable for DrxConfigSetup {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [short_drx] = reader.read_presence()?;
        Ok(DrxConfigSetup {
            on_duration_timer: reader.read()?,
            drx_inactivity_timer: reader.read()?,
            drx_retransmission_timer: reader.read()?,
            long_drx_cycle_start_offset: reader.read()?,
            short_drx: if short_drx { Some(reader.read()?) } else { None },
        })
    }
}

pub type DrxConfig = SetupRelease<DrxConfigSetup>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhrConfigSetup {
    pub periodic_phr_timer: PeriodicPhrTimer,
    pub prohibit_phr_timer: ProhibitPhrTimer,
    pub dl_pathloss_change: DlPathlossChange,
}

impl Writable for PhrConfigSetup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write(&self.periodic_phr_timer)?;
        writer.write(&self.prohibit_phr_timer)?;
        writer.write(&self.dl_pathloss_change)
    }
}

impl Readable for PhrConfigSetup {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(PhrConfigSetup {
            periodic_phr_timer: reader.read()?,
            prohibit_phr_timer: reader.read()?,
            dl_pathloss_change: reader.read()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MacMainConfigV1020 {
    pub s_cell_deactivation_timer: Option<SCellDeactivationTimer>,
    /// `ENUMERATED {setup}`
    pub extended_bsr_sizes: bool,
    /// `ENUMERATED {setup}`
    pub extended_phr: bool,
}

impl Writable for MacMainConfigV1020 {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.s_cell_deactivation_timer.is_some(),
            self.extended_bsr_sizes,
            self.extended_phr,
        ])?;
        if let Some(timer) = &self.s_cell_deactivation_timer {
            writer.write(timer)?;
        }
        Ok(())
    }
}

impl Readable for MacMainConfigV1020 {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [timer, extended_bsr_sizes, extended_phr] = reader.read_presence()?;
        Ok(MacMainConfigV1020 {
            s_cell_deactivation_timer: if timer { Some(reader.read()?) } else { None },
            extended_bsr_sizes,
            extended_phr,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacMainConfig {
    pub ul_sch_config: Option<UlSchConfig>,
    pub drx_config: Option<DrxConfig>,
    pub time_alignment_timer_dedicated: TimeAlignmentTimer,
    pub phr_config: Option<SetupRelease<PhrConfigSetup>>,
    /// 0..7, Rel-9 extension
    pub sr_prohibit_timer: Option<u8>,
    pub mac_main_config_v1020: Option<MacMainConfigV1020>,
}

impl Writable for MacMainConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let sr_prohibit_timer = self.sr_prohibit_timer.map(|timer| {
            WriteWith(move |w: &mut UperWriter| {
                w.write_presence(&[true])?;
                w.write_int(timer, 0, 7)
            })
        });
        let v1020 = self.mac_main_config_v1020.map(|config| {
            WriteWith(move |w: &mut UperWriter| {
                w.write_presence(&[true])?;
                w.write(&config)
            })
        });
        let additions = [addition(&sr_prohibit_timer), addition(&v1020)];

        writer.write_extension_marker(&additions)?;
        writer.write_presence(&[
            self.ul_sch_config.is_some(),
            self.drx_config.is_some(),
            self.phr_config.is_some(),
        ])?;
        if let Some(value) = &self.ul_sch_config {
            writer.write(value)?;
        }
        if let Some(value) = &self.drx_config {
            writer.write(value)?;
        }
        writer.write(&self.time_alignment_timer_dedicated)?;
        if let Some(value) = &self.phr_config {
            writer.write(value)?;
        }
        writer.write_extension_additions(&additions)
    }
}

impl Readable for MacMainConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [ul_sch, drx, phr] = reader.read_presence()?;
        let mut value = MacMainConfig {
            ul_sch_config: if ul_sch { Some(reader.read()?) } else { None },
            drx_config: if drx { Some(reader.read()?) } else { None },
            time_alignment_timer_dedicated: reader.read()?,
            phr_config: if phr { Some(reader.read()?) } else { None },
            sr_prohibit_timer: None,
            mac_main_config_v1020: None,
        };
        reader.read_extension_additions("MAC-MainConfig", extended, 2, |index, reader| {
            let [present] = reader.read_presence()?;
            if present {
                match index {
                    0 => value.sr_prohibit_timer = Some(reader.read_int(0, 7)?),
                    _ => value.mac_main_config_v1020 = Some(reader.read()?),
                }
            }
            Ok(())
        })?;
        Ok(value)
    }
}

/// `N1PUCCH-AN-PersistentList ::= SEQUENCE (SIZE (1..4)) OF INTEGER (0..2047)`
pub(crate) fn write_n1_pucch_an_list(writer: &mut UperWriter, list: &[u16]) -> Result<(), Error> {
    writer.write_sequence_of_with(list, 1, 4, |w, value| w.write_int(*value, 0, 2047))
}

pub(crate) fn read_n1_pucch_an_list(reader: &mut UperReader<'_>) -> Result<Vec<u16>, Error> {
    reader.read_sequence_of_with(1, 4, |r| r.read_int(0, 2047))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpsConfigDlSetup {
    pub semi_persist_sched_interval_dl: SemiPersistSchedInterval,
    /// 1..8
    pub number_of_conf_sps_processes: u8,
    pub n1_pucch_an_persistent_list: Vec<u16>,
    /// Rel-10 `twoAntennaPortActivated-r10`, the list for antenna port one
    pub two_antenna_port_activated: Option<SetupRelease<Vec<u16>>>,
}

impl Writable for SpsConfigDlSetup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        let two_antenna_port = self.two_antenna_port_activated.as_ref().map(|choice| {
            WriteWith(move |w: &mut UperWriter| {
                w.write_presence(&[true])?;
                match choice {
                    SetupRelease::Release => w.write_choice_index("SetupRelease", 0, 2, false),
                    SetupRelease::Setup(list) => {
                        w.write_choice_index("SetupRelease", 1, 2, false)?;
                        write_n1_pucch_an_list(w, list)
                    }
                }
            })
        });
        let additions = [addition(&two_antenna_port)];

        writer.write_extension_marker(&additions)?;
        writer.write(&self.semi_persist_sched_interval_dl)?;
        writer.write_int(self.number_of_conf_sps_processes, 1, 8)?;
        write_n1_pucch_an_list(writer, &self.n1_pucch_an_persistent_list)?;
        writer.write_extension_additions(&additions)
    }
}

impl Readable for SpsConfigDlSetup {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let mut value = SpsConfigDlSetup {
            semi_persist_sched_interval_dl: reader.read()?,
            number_of_conf_sps_processes: reader.read_int(1, 8)?,
            n1_pucch_an_persistent_list: read_n1_pucch_an_list(reader)?,
            two_antenna_port_activated: None,
        };
        reader.read_extension_additions("SPS-ConfigDL", extended, 1, |_, reader| {
            let [present] = reader.read_presence()?;
            if present {
                value.two_antenna_port_activated =
                    Some(match reader.read_choice_index("SetupRelease", 2, false)? {
                        0 => SetupRelease::Release,
                        _ => SetupRelease::Setup(read_n1_pucch_an_list(reader)?),
                    });
            }
            Ok(())
        })?;
        Ok(value)
    }
}

enumerated! {
    pub enum ImplicitReleaseAfter: "implicitReleaseAfter", numeric u8 {
        E2 = "e2" => 2,
        E3 = "e3" => 3,
        E4 = "e4" => 4,
        E8 = "e8" => 8,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct P0Persistent {
    /// -126..24
    pub p0_nominal_pusch_persistent: i8,
    /// -8..7
    pub p0_ue_pusch_persistent: i8,
}

impl Writable for P0Persistent {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_int(self.p0_nominal_pusch_persistent, -126, 24)?;
        writer.write_int(self.p0_ue_pusch_persistent, -8, 7)
    }
}

impl Readable for P0Persistent {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        Ok(P0Persistent {
            p0_nominal_pusch_persistent: reader.read_int(-126, 24)?,
            p0_ue_pusch_persistent: reader.read_int(-8, 7)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpsConfigUlSetup {
    pub semi_persist_sched_interval_ul: SemiPersistSchedInterval,
    pub implicit_release_after: ImplicitReleaseAfter,
    pub p0_persistent: Option<P0Persistent>,
    /// `ENUMERATED {true}`
    pub two_intervals_config: bool,
}

impl Writable for SpsConfigUlSetup {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_extension_marker(&[])?;
        writer.write_presence(&[self.p0_persistent.is_some(), self.two_intervals_config])?;
        writer.write(&self.semi_persist_sched_interval_ul)?;
        writer.write(&self.implicit_release_after)?;
        if let Some(value) = &self.p0_persistent {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for SpsConfigUlSetup {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let extended = reader.read_extension_marker()?;
        let [p0_persistent, two_intervals_config] = reader.read_presence()?;
        let value = SpsConfigUlSetup {
            semi_persist_sched_interval_ul: reader.read()?,
            implicit_release_after: reader.read()?,
            p0_persistent: if p0_persistent {
                Some(reader.read()?)
            } else {
                None
            },
            two_intervals_config,
        };
        reader.read_extension_additions("SPS-ConfigUL", extended, 0, |_, _| Ok(()))?;
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpsConfig {
    pub semi_persist_sched_c_rnti: Option<CRnti>,
    pub sps_config_dl: Option<SetupRelease<SpsConfigDlSetup>>,
    pub sps_config_ul: Option<SetupRelease<SpsConfigUlSetup>>,
}

impl Writable for SpsConfig {
    fn write(&self, writer: &mut UperWriter) -> Result<(), Error> {
        writer.write_presence(&[
            self.semi_persist_sched_c_rnti.is_some(),
            self.sps_config_dl.is_some(),
            self.sps_config_ul.is_some(),
        ])?;
        if let Some(c_rnti) = self.semi_persist_sched_c_rnti {
            writer.write_bits(u64::from(c_rnti), 16)?;
        }
        if let Some(value) = &self.sps_config_dl {
            writer.write(value)?;
        }
        if let Some(value) = &self.sps_config_ul {
            writer.write(value)?;
        }
        Ok(())
    }
}

impl Readable for SpsConfig {
    fn read(reader: &mut UperReader<'_>) -> Result<Self, Error> {
        let [c_rnti, dl, ul] = reader.read_presence()?;
        Ok(SpsConfig {
            semi_persist_sched_c_rnti: if c_rnti { Some(reader.read_bits(16)?) } else { None },
            sps_config_dl: if dl { Some(reader.read()?) } else { None },
            sps_config_ul: if ul { Some(reader.read()?) } else { None },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::per::ErrorKind;

    #[test]
    fn test_long_drx_offset_depends_on_cycle() {
        let value = LongDrxCycleStartOffset {
            cycle: LongDrxCycle::Sf40,
            offset: 39,
        };
        let mut writer = UperWriter::default();
        writer.write(&value).unwrap();
        // four bits for the cycle, six for 0..39
        assert_eq!(4 + 6, writer.finish());
        assert_eq!(value, writer.as_reader().read().unwrap());

        let value = LongDrxCycleStartOffset {
            cycle: LongDrxCycle::Sf10,
            offset: 10,
        };
        assert_eq!(
            &ErrorKind::ValueNotInRange(10, 0, 9),
            UperWriter::default().write(&value).unwrap_err().kind()
        );
    }

    #[test]
    fn test_mac_main_config_with_both_groups() {
        let config = MacMainConfig {
            ul_sch_config: Some(UlSchConfig {
                max_harq_tx: Some(MaxHarqTx::N5),
                periodic_bsr_timer: None,
                retx_bsr_timer: RetxBsrTimer::Sf2560,
                tti_bundling: false,
            }),
            drx_config: Some(SetupRelease::Release),
            time_alignment_timer_dedicated: TimeAlignmentTimer::Infinity,
            phr_config: Some(SetupRelease::Setup(PhrConfigSetup {
                periodic_phr_timer: PeriodicPhrTimer::Sf20,
                prohibit_phr_timer: ProhibitPhrTimer::Sf0,
                dl_pathloss_change: DlPathlossChange::Db1,
            })),
            sr_prohibit_timer: Some(3),
            mac_main_config_v1020: Some(MacMainConfigV1020 {
                s_cell_deactivation_timer: Some(SCellDeactivationTimer::Rf8),
                extended_bsr_sizes: true,
                extended_phr: false,
            }),
        };
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        assert_eq!(config, writer.as_reader().read::<MacMainConfig>().unwrap());
    }

    #[test]
    fn test_mac_main_config_baseline_has_no_additions() {
        let config = MacMainConfig {
            ul_sch_config: None,
            drx_config: None,
            time_alignment_timer_dedicated: TimeAlignmentTimer::Sf500,
            phr_config: None,
            sr_prohibit_timer: None,
            mac_main_config_v1020: None,
        };
        let mut writer = UperWriter::default();
        writer.write(&config).unwrap();
        // extension bit, three presence bits, the timer
        assert_eq!(1 + 3 + 3, writer.finish());
    }
}
