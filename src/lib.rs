#![deny(rustdoc::broken_intra_doc_links)]
#![warn(unused_extern_crates)]

//! Bit-exact UPER codec for the LTE RRC messages and information elements of 3GPP TS 36.331.
//!
//! Every information element is a plain Rust type implementing [`syn::Writable`] and
//! [`syn::Readable`]. Messages are grouped by the logical channel they are sent on, see
//! [`messages`], and are usually encoded and decoded through a [`codec::Codec`].

#[macro_use]
pub mod internal_macros;

#[macro_use]
pub extern crate serde_derive;

pub mod codec;
pub mod diag;
pub mod ies;
pub mod io;
pub mod messages;
pub mod prelude;
pub mod syn;

pub use crate::codec::{Codec, CodecConfig, LogicalChannelMessage};
pub use crate::io::per::{Error, ErrorKind};
pub use crate::messages::{
    BcchBchMessage, BcchDlSchMessage, DlCcchMessage, DlDcchMessage, HandoverCommand,
    HandoverPreparationInformation, McchMessage, PcchMessage, UeRadioAccessCapabilityInformation,
    UlCcchMessage, UlDcchMessage,
};
