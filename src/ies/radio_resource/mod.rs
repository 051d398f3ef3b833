//! Radio resource configuration, common (broadcast or handover target) and dedicated.

pub mod common;
pub mod dedicated;
pub mod mac;
pub mod mobility;
pub mod physical;

pub use common::{RadioResourceConfigCommon, RadioResourceConfigCommonSib};
pub use dedicated::RadioResourceConfigDedicated;
pub use mobility::{MobilityControlInfo, SecurityConfigHo};
pub use physical::PhysicalConfigDedicated;
