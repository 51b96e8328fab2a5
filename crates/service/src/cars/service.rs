use models::car::{Car, CreateCar, UpdateCar};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::cars::catalog::CarCatalog;
use crate::errors::ServiceError;
use crate::storage::MemoryListStore;

/// In-memory car catalog.
///
/// SKUs are not checked for uniqueness; `find_by_sku` returns the first
/// record in insertion order when several share a SKU.
#[derive(Clone, Default)]
pub struct CarsService {
    store: MemoryListStore<Car>,
}

impl CarsService {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog starting with the given records.
    pub fn with_cars(cars: Vec<Car>) -> Self {
        Self { store: MemoryListStore::with_items(cars) }
    }

    pub async fn find_all(&self) -> Vec<Car> {
        self.store.list().await
    }

    pub async fn find_by_sku(&self, sku: i64) -> Result<Car, ServiceError> {
        self.store
            .find(|car| car.sku == sku)
            .await
            .ok_or_else(|| ServiceError::not_found("Car", "sku", sku))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Car, ServiceError> {
        self.store
            .find(|car| car.id == id)
            .await
            .ok_or_else(|| ServiceError::not_found("Car", "id", id))
    }

    /// Append a new record with a generated id.
    #[instrument(skip(self, input), fields(sku = input.sku))]
    pub async fn create(&self, input: CreateCar) -> Car {
        let car = Car::new(input);
        self.store.push(car.clone()).await;
        info!(event = "car_created", id = %car.id, "created car");
        car
    }

    /// Merge `patch` into the record with `id`, keeping its position in the list.
    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update(&self, id: Uuid, patch: UpdateCar) -> Result<Car, ServiceError> {
        let merged = self
            .store
            .update_list(|cars| {
                let idx = cars
                    .iter()
                    .position(|car| car.id == id)
                    .ok_or_else(|| ServiceError::not_found("Car", "id", id))?;
                if patch.id.is_some_and(|body_id| body_id != id) {
                    return Err(ServiceError::BadRequest("Car id is not valid inside body".into()));
                }
                let merged = cars[idx].merge(&patch);
                cars[idx] = merged.clone();
                Ok(merged)
            })
            .await?;
        info!(event = "car_updated", "updated car");
        Ok(merged)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.store
            .update_list(|cars| {
                if !cars.iter().any(|car| car.id == id) {
                    return Err(ServiceError::not_found("Car", "id", id));
                }
                cars.retain(|car| car.id != id);
                Ok(())
            })
            .await?;
        info!(event = "car_deleted", "deleted car");
        Ok(())
    }

    /// Append pre-built records unchanged. Calling it twice duplicates them.
    pub async fn fill_with_seed_data(&self, cars: Vec<Car>) -> usize {
        let added = self.store.extend(cars).await;
        debug!(event = "cars_seeded", added, "bulk loaded cars");
        added
    }
}

#[async_trait::async_trait]
impl CarCatalog for CarsService {
    async fn find_all(&self) -> Vec<Car> {
        self.find_all().await
    }
    async fn find_by_sku(&self, sku: i64) -> Result<Car, ServiceError> {
        self.find_by_sku(sku).await
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Car, ServiceError> {
        self.find_by_id(id).await
    }
    async fn create(&self, input: CreateCar) -> Car {
        self.create(input).await
    }
    async fn update(&self, id: Uuid, patch: UpdateCar) -> Result<Car, ServiceError> {
        self.update(id, patch).await
    }
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.delete(id).await
    }
    async fn fill_with_seed_data(&self, cars: Vec<Car>) -> usize {
        self.fill_with_seed_data(cars).await
    }
}
