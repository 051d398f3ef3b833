//! The information element catalog of TS 36.331, Rel-10 layout.
//!
//! IEs are grouped by the area they belong to. Bounded integers are stored in the smallest
//! unsigned (or signed) Rust integer fitting their range, the range itself is checked when
//! encoding and when decoding. Fixed size bit strings of up to 64 bits are stored as integers.

pub mod common;
pub mod mbms;
pub mod measurement;
pub mod radio_resource;
pub mod system_information;
pub mod ue_capability;

/// Upper bounds of the standard, named like `maxXyz` in the ASN.1
pub mod bounds {
    pub const MAX_BANDS: u64 = 64;
    pub const MAX_CDMA_BAND_CLASS: u64 = 32;
    pub const MAX_CELL_BLACK: u64 = 16;
    pub const MAX_CELL_INTER: u64 = 16;
    pub const MAX_CELL_INTRA: u64 = 16;
    pub const MAX_CELL_MEAS: u64 = 32;
    pub const MAX_CELL_REPORT: u64 = 8;
    pub const MAX_DRB: u64 = 11;
    pub const MAX_EARFCN: i64 = 65535;
    pub const MAX_FREQ: u64 = 8;
    pub const MAX_GERAN_SI: u64 = 10;
    pub const MAX_GNFG: u64 = 16;
    pub const MAX_MBSFN_ALLOCATIONS: u64 = 8;
    pub const MAX_MBSFN_AREA: u64 = 8;
    pub const MAX_MEAS_ID: u64 = 32;
    pub const MAX_OBJECT_ID: u64 = 32;
    pub const MAX_PAGE_REC: u64 = 16;
    pub const MAX_PCI_RANGE: u64 = 4;
    pub const MAX_PLMN: u64 = 6;
    pub const MAX_PMCH_PER_MBSFN: u64 = 15;
    pub const MAX_RAT_CAPABILITIES: u64 = 8;
    pub const MAX_REPORT_CONFIG_ID: u64 = 32;
    pub const MAX_SESSION_PER_PMCH: u64 = 29;
    pub const MAX_SIB: u64 = 32;
    pub const MAX_SI_MESSAGE: u64 = 32;
    pub const MAX_UTRA_FDD_CARRIER: u64 = 16;
    pub const MAX_UTRA_TDD_CARRIER: u64 = 16;
    pub const MAX_DRX_PATTERN: u64 = 2;
}
