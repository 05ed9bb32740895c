// Pure product rules for create and update.
//
// - name and sku must not be blank, price must be a positive finite number.
// - sku is unique across the collection; an update is only compared against other products.
// - a create request must not carry an id.
// - Never perform input or output.

use crate::modules::products_api::core::product::{ProductPayload, ProductRecord};
use uuid::Uuid;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Id must not be informed")]
    IdNotAllowed,

    #[error("Name can not be null")]
    BlankName,

    #[error("Price must be bigger than zero")]
    NonPositivePrice,

    #[error("SKU can not be null")]
    BlankSku,

    #[error("SKU already registered")]
    DuplicateSku,
}

/// Field values that passed every rule, trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub name: String,
    pub price: f64,
    pub sku: String,
}

pub enum Target {
    Create,
    Update(Uuid),
}

pub fn decide_product(
    payload: &ProductPayload,
    existing: &[ProductRecord],
    target: &Target,
) -> Result<ValidProduct, RuleViolation> {
    if matches!(target, Target::Create) && payload.id.as_ref().is_some_and(|id| !id.is_null()) {
        return Err(RuleViolation::IdNotAllowed);
    }

    let name = payload.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(RuleViolation::BlankName);
    }

    let price = match payload.price {
        Some(price) if price.is_finite() && price > 0.0 => price,
        _ => return Err(RuleViolation::NonPositivePrice),
    };

    let sku = payload.sku.as_deref().map(str::trim).unwrap_or_default();
    if sku.is_empty() {
        return Err(RuleViolation::BlankSku);
    }

    let own_id = match target {
        Target::Create => None,
        Target::Update(id) => Some(*id),
    };
    if existing
        .iter()
        .any(|record| record.sku == sku && Some(record.id) != own_id)
    {
        return Err(RuleViolation::DuplicateSku);
    }

    Ok(ValidProduct {
        name: name.to_string(),
        price,
        sku: sku.to_string(),
    })
}
