// Form draft: unsaved field values for the product being created or edited.
//
// Responsibilities
// - Hold the raw text the user typed, price included.
// - Validate presence and positivity before any write request is issued.
// - Never perform input or output.

use crate::modules::catalog::core::product::{Product, ProductInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Price,
    Sku,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub sku: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Por favor, preencha todos os campos")]
    MissingFields,

    #[error("O preço deve ser maior que zero")]
    NonPositivePrice,
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            sku: product.sku.clone(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Price => self.price = value,
            DraftField::Sku => self.sku = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.price.is_empty() && self.sku.is_empty()
    }

    pub fn validate(&self) -> Result<ProductInput, DraftError> {
        let name = self.name.trim();
        let sku = self.sku.trim();
        let price = self.price.trim();
        if name.is_empty() || sku.is_empty() || price.is_empty() {
            return Err(DraftError::MissingFields);
        }

        let price = price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or(DraftError::NonPositivePrice)?;

        Ok(ProductInput {
            name: name.to_string(),
            price,
            sku: sku.to_string(),
        })
    }
}
