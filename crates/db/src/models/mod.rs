//! Row structs and request DTOs.

pub mod placed_object;
