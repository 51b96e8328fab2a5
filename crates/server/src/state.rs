use std::sync::Arc;

use service::{brands::BrandCatalog, cars::CarCatalog, seed::SeedService};

/// Shared handler state. The catalogs live as long as the router that owns this state.
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<dyn CarCatalog>,
    pub brands: Arc<dyn BrandCatalog>,
    pub seed: SeedService,
}

impl AppState {
    pub fn new(cars: Arc<dyn CarCatalog>, brands: Arc<dyn BrandCatalog>) -> Self {
        let seed = SeedService::new(Arc::clone(&cars), Arc::clone(&brands));
        Self { cars, brands, seed }
    }
}
