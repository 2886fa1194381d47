//! # Metadata Tools
//!
//! Store-agnostic helpers built on the accessor contract: identifier
//! generation, copying between stores, populating the pixel metadata a
//! format reader always knows, and repairing documents so they satisfy the
//! schema's required fields.
//!
//! Everything here works on `dyn` stores as well as concrete ones.

mod convert;
mod lsid;
mod populate;
mod verify;

#[cfg(test)]
mod tests;

pub use convert::{convert_metadata, for_each_slot};
pub use lsid::{create_lsid, sane_dimension_order, zct_coords};
pub use populate::{populate_pixels, set_default_acquisition_date, PixelsDescription, PopulateOptions};
pub use verify::{ensure_valid, verify_minimum_populated};
