use crate::modules::products_api::adapters::outbound::repository_in_memory::InMemoryProductRepository;
use crate::modules::products_api::use_cases::manage_products::handler::ProductsHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductsHandler<InMemoryProductRepository>>,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self {
            products: Arc::new(ProductsHandler::new(Arc::new(
                InMemoryProductRepository::new(),
            ))),
        }
    }
}
