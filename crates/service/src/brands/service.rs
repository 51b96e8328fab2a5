use chrono::Utc;
use models::brand::{Brand, CreateBrand, UpdateBrand};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::brands::catalog::BrandCatalog;
use crate::errors::ServiceError;
use crate::storage::MemoryListStore;

/// 品牌目录：与车辆目录相同的内存列表语义
#[derive(Clone, Default)]
pub struct BrandsService {
    store: MemoryListStore<Brand>,
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl BrandsService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brands(brands: Vec<Brand>) -> Self {
        Self { store: MemoryListStore::with_items(brands) }
    }

    pub async fn find_all(&self) -> Vec<Brand> {
        self.store.list().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Brand, ServiceError> {
        self.store
            .find(|b| b.id == id)
            .await
            .ok_or_else(|| ServiceError::not_found("Brand", "id", id))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateBrand) -> Brand {
        let brand = Brand::new(input, now_millis());
        self.store.push(brand.clone()).await;
        info!(event = "brand_created", id = %brand.id, name = %brand.name, "created brand");
        brand
    }

    #[instrument(skip(self, patch), fields(id = %id))]
    pub async fn update(&self, id: Uuid, patch: UpdateBrand) -> Result<Brand, ServiceError> {
        let merged = self
            .store
            .update_list(|brands| {
                let idx = brands
                    .iter()
                    .position(|b| b.id == id)
                    .ok_or_else(|| ServiceError::not_found("Brand", "id", id))?;
                if patch.id.is_some_and(|body_id| body_id != id) {
                    return Err(ServiceError::BadRequest("Brand id is not valid inside body".into()));
                }
                let merged = brands[idx].merge(&patch, now_millis());
                brands[idx] = merged.clone();
                Ok(merged)
            })
            .await?;
        info!(event = "brand_updated", "updated brand");
        Ok(merged)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.store
            .update_list(|brands| {
                if !brands.iter().any(|b| b.id == id) {
                    return Err(ServiceError::not_found("Brand", "id", id));
                }
                brands.retain(|b| b.id != id);
                Ok(())
            })
            .await?;
        info!(event = "brand_deleted", "deleted brand");
        Ok(())
    }

    pub async fn fill_with_seed_data(&self, brands: Vec<Brand>) -> usize {
        let added = self.store.extend(brands).await;
        debug!(event = "brands_seeded", added, "bulk loaded brands");
        added
    }
}

#[async_trait::async_trait]
impl BrandCatalog for BrandsService {
    async fn find_all(&self) -> Vec<Brand> {
        self.find_all().await
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Brand, ServiceError> {
        self.find_by_id(id).await
    }
    async fn create(&self, input: CreateBrand) -> Brand {
        self.create(input).await
    }
    async fn update(&self, id: Uuid, patch: UpdateBrand) -> Result<Brand, ServiceError> {
        self.update(id, patch).await
    }
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.delete(id).await
    }
    async fn fill_with_seed_data(&self, brands: Vec<Brand>) -> usize {
        self.fill_with_seed_data(brands).await
    }
}
