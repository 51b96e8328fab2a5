//! Service layer owning the in-memory catalogs.
//! - `storage` provides the ordered list store shared by both catalogs.
//! - `cars` / `brands` implement the CRUD contract behind trait seams.
//! - `seed` bulk-loads fixture records at startup or on demand.

pub mod errors;
pub mod storage;
pub mod cars;
pub mod brands;
pub mod seed;
