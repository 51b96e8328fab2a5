use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{errors::ModelError, validate};

pub const MODEL_MIN_LEN: usize = 3;

const BRAND_NOT_STRING: &str = "The brand must be a string";
const SKU_NOT_NUMBER: &str = "The SKU must be a number";

const CREATE_FIELDS: &[&str] = &["brand", "model", "sku"];
const UPDATE_FIELDS: &[&str] = &["id", "brand", "model", "sku"];

/// Car record as stored in the catalog.
/// - id: generated on create, never changes afterwards
/// - sku: caller supplied; duplicates are allowed
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Car {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub sku: i64,
}

impl Car {
    /// Build a new record with a fresh id from validated input.
    pub fn new(input: CreateCar) -> Self {
        Self {
            id: Uuid::new_v4(),
            brand: input.brand,
            model: input.model,
            sku: input.sku,
        }
    }

    /// Field-by-field merge: values present in `patch` win, the rest are kept.
    /// The id is always this record's id.
    pub fn merge(&self, patch: &UpdateCar) -> Car {
        Car {
            id: self.id,
            brand: patch.brand.clone().unwrap_or_else(|| self.brand.clone()),
            model: patch.model.clone().unwrap_or_else(|| self.model.clone()),
            sku: patch.sku.unwrap_or(self.sku),
        }
    }
}

/// Validated create payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateCar {
    pub brand: String,
    pub model: String,
    pub sku: i64,
}

impl CreateCar {
    /// Validate a raw JSON body. Unknown keys (including `id`) are rejected.
    pub fn from_json(body: &Value) -> Result<Self, ModelError> {
        let mut errors = Vec::new();
        let Some(obj) = validate::whitelisted_object(body, CREATE_FIELDS, &mut errors) else {
            return Err(ModelError::Validation(errors));
        };

        let brand = validate::string(obj.get("brand"), BRAND_NOT_STRING, &mut errors);
        let model = validate::string_min_len(obj.get("model"), "model", MODEL_MIN_LEN, &mut errors);
        let sku = validate::integer(obj.get("sku"), SKU_NOT_NUMBER, &mut errors);

        match (brand, model, sku) {
            (Some(brand), Some(model), Some(sku)) if errors.is_empty() => Ok(Self { brand, model, sku }),
            _ => Err(ModelError::Validation(errors)),
        }
    }
}

/// Validated update payload; absent fields are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateCar {
    pub id: Option<Uuid>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub sku: Option<i64>,
}

impl UpdateCar {
    /// Validate a raw JSON body. Every field is optional, but a present field
    /// (explicit `null` included) must satisfy the same rule as on create.
    pub fn from_json(body: &Value) -> Result<Self, ModelError> {
        let mut errors = Vec::new();
        let Some(obj) = validate::whitelisted_object(body, UPDATE_FIELDS, &mut errors) else {
            return Err(ModelError::Validation(errors));
        };

        let id = obj.get("id").and_then(|v| validate::uuid(v, "id", &mut errors));
        let brand = obj
            .get("brand")
            .and_then(|v| validate::string(Some(v), BRAND_NOT_STRING, &mut errors));
        let model = obj
            .get("model")
            .and_then(|v| validate::string_min_len(Some(v), "model", MODEL_MIN_LEN, &mut errors));
        let sku = obj
            .get("sku")
            .and_then(|v| validate::integer(Some(v), SKU_NOT_NUMBER, &mut errors));

        if !errors.is_empty() {
            return Err(ModelError::Validation(errors));
        }
        Ok(Self { id, brand, model, sku })
    }
}
