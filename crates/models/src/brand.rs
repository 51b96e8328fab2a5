use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{errors::ModelError, validate};

pub const NAME_MIN_LEN: usize = 1;

const CREATE_FIELDS: &[&str] = &["name"];
const UPDATE_FIELDS: &[&str] = &["id", "name"];

/// Brand record. Timestamps are epoch milliseconds.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Brand {
    /// Names are stored lower-cased.
    pub fn new(input: CreateBrand, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name.to_lowercase(),
            created_at,
            updated_at: None,
        }
    }

    /// Merge a patch into this record, stamping `updated_at`; the id never changes.
    pub fn merge(&self, patch: &UpdateBrand, updated_at: i64) -> Brand {
        Brand {
            id: self.id,
            name: patch
                .name
                .as_ref()
                .map(|n| n.to_lowercase())
                .unwrap_or_else(|| self.name.clone()),
            created_at: self.created_at,
            updated_at: Some(updated_at),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateBrand {
    pub name: String,
}

impl CreateBrand {
    pub fn from_json(body: &Value) -> Result<Self, ModelError> {
        let mut errors = Vec::new();
        let Some(obj) = validate::whitelisted_object(body, CREATE_FIELDS, &mut errors) else {
            return Err(ModelError::Validation(errors));
        };
        let name = validate::string_min_len(obj.get("name"), "name", NAME_MIN_LEN, &mut errors);
        match name {
            Some(name) if errors.is_empty() => Ok(Self { name }),
            _ => Err(ModelError::Validation(errors)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateBrand {
    pub id: Option<Uuid>,
    pub name: Option<String>,
}

impl UpdateBrand {
    pub fn from_json(body: &Value) -> Result<Self, ModelError> {
        let mut errors = Vec::new();
        let Some(obj) = validate::whitelisted_object(body, UPDATE_FIELDS, &mut errors) else {
            return Err(ModelError::Validation(errors));
        };
        let id = obj.get("id").and_then(|v| validate::uuid(v, "id", &mut errors));
        let name = obj
            .get("name")
            .and_then(|v| validate::string_min_len(Some(v), "name", NAME_MIN_LEN, &mut errors));
        if !errors.is_empty() {
            return Err(ModelError::Validation(errors));
        }
        Ok(Self { id, name })
    }
}
