use crate::modules::products_api::core::missing_letter::missing_letter;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored product. The id is assigned by the service on create.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub sku: String,
}

/// Request body for create and update. Every field is optional so missing
/// values surface as rule violations instead of decode failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub sku: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub sku: String,
    pub missing_letter: char,
}

impl From<&ProductRecord> for ProductResponse {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            price: record.price,
            sku: record.sku.clone(),
            missing_letter: missing_letter(&record.name),
        }
    }
}
