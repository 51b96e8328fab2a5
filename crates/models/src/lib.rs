//! Record models and input shapes for the catalog.
//! - `car` / `brand` hold the stored records plus their create/update inputs.
//! - Inputs are built from raw JSON by explicit validation functions that
//!   collect every field-level problem into a `ModelError`.

pub mod errors;
pub mod validate;
pub mod car;
pub mod brand;
