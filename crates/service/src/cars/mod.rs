pub mod catalog;
pub mod service;

pub use catalog::CarCatalog;
pub use service::CarsService;
