use async_trait::async_trait;
use models::car::{Car, CreateCar, UpdateCar};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Trait abstraction for the car catalog.
/// Handlers depend on this seam; the in-memory `CarsService` is the only implementation today.
#[async_trait]
pub trait CarCatalog: Send + Sync {
    async fn find_all(&self) -> Vec<Car>;
    async fn find_by_sku(&self, sku: i64) -> Result<Car, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Car, ServiceError>;
    async fn create(&self, input: CreateCar) -> Car;
    async fn update(&self, id: Uuid, patch: UpdateCar) -> Result<Car, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
    async fn fill_with_seed_data(&self, cars: Vec<Car>) -> usize;
}
