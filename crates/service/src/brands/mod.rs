pub mod catalog;
pub mod service;

pub use catalog::BrandCatalog;
pub use service::BrandsService;
