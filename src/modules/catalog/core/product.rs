// Client-side product records.
//
// Purpose
// - Product: a remote-owned record as returned by the products endpoint.
// - ProductInput: the write body sent on create and update.
//
// Boundaries
// - The server owns `id` and `missing_letter`. Neither is ever written back.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub sku: String,
    #[serde(default)]
    pub missing_letter: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub sku: String,
}
