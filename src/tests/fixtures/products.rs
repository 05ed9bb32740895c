// Shared test fixture for catalog products.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::catalog::core::product::Product;
use std::fs;

pub struct ProductBuilder {
    inner: Product,
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProductBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/product.json").unwrap();
        let inner: Product = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn price(mut self, v: f64) -> Self {
        self.inner.price = v;
        self
    }

    pub fn sku(mut self, v: impl Into<String>) -> Self {
        self.inner.sku = v.into();
        self
    }

    pub fn missing_letter(mut self, v: Option<char>) -> Self {
        self.inner.missing_letter = v;
        self
    }

    pub fn build(self) -> Product {
        self.inner
    }
}

#[cfg(test)]
mod product_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ProductBuilder::default().build();
        assert_eq!(built.id, "0190a1b2-0000-7000-8000-000000000001");
        assert_eq!(built.name, "Laptop Gamer");
        assert_eq!(built.price, 999.99);
        assert_eq!(built.sku, "PROD-001");
        assert_eq!(built.missing_letter, Some('b'));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ProductBuilder::new()
            .id("p-9")
            .name("Cadeira")
            .price(300.0)
            .sku("CAD-9")
            .missing_letter(Some('b'))
            .build();
        assert_eq!(custom.id, "p-9");
        assert_eq!(custom.name, "Cadeira");
        assert_eq!(custom.price, 300.0);
        assert_eq!(custom.sku, "CAD-9");
        assert_eq!(custom.missing_letter, Some('b'));
    }
}
