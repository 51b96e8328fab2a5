use async_trait::async_trait;
use models::brand::{Brand, CreateBrand, UpdateBrand};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Trait abstraction for the brand catalog.
#[async_trait]
pub trait BrandCatalog: Send + Sync {
    async fn find_all(&self) -> Vec<Brand>;
    async fn find_by_id(&self, id: Uuid) -> Result<Brand, ServiceError>;
    async fn create(&self, input: CreateBrand) -> Brand;
    async fn update(&self, id: Uuid, patch: UpdateBrand) -> Result<Brand, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
    async fn fill_with_seed_data(&self, brands: Vec<Brand>) -> usize;
}
