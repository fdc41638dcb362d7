//! Domain logic for the geomark placement service.
//!
//! Pure, I/O-free building blocks shared by the storage and HTTP layers:
//! the error taxonomy, the placement ownership policy, and the naming
//! scheme for uploaded assets.

pub mod asset_naming;
pub mod error;
pub mod placement;
