// HTTP implementation of the ProductStore port.
//
// Responsibilities
// - Map the four operations onto the `/products` REST collection.
// - Treat any non-success status as a failure. Create and update read `{message}`
//   from the failure body; list and delete ignore it.
//
// Boundaries
// - Single shot. No retries, no cancellation.

use crate::modules::catalog::core::product::{Product, ProductInput};
use crate::modules::catalog::ports::{ProductStore, StoreError};
use crate::shared::core::error_body::ErrorBody;
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct HttpProductStore {
    client: Client,
    collection_url: Url,
}

impl HttpProductStore {
    pub fn new(client: Client, collection_url: Url) -> Self {
        Self {
            client,
            collection_url,
        }
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    fn item_url(&self, id: &str) -> Url {
        let mut url = self.collection_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }
}

fn network(error: reqwest::Error) -> StoreError {
    StoreError::Network(error.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

async fn rejection(response: Response) -> StoreError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message);
    warn!(status, ?message, "product write rejected");
    StoreError::Rejected { status, message }
}

#[async_trait]
impl ProductStore for HttpProductStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        debug!(url = %self.collection_url, "GET products");
        let response = self
            .client
            .get(self.collection_url.clone())
            .send()
            .await
            .map_err(network)?;
        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
            });
        }
        decode(response).await
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Product, StoreError> {
        debug!(url = %self.collection_url, sku = %input.sku, "POST product");
        let response = self
            .client
            .post(self.collection_url.clone())
            .json(input)
            .send()
            .await
            .map_err(network)?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        decode(response).await
    }

    async fn update_product(
        &self,
        id: &str,
        input: &ProductInput,
    ) -> Result<Product, StoreError> {
        let url = self.item_url(id);
        debug!(url = %url, sku = %input.sku, "PUT product");
        let response = self
            .client
            .put(url)
            .json(input)
            .send()
            .await
            .map_err(network)?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        decode(response).await
    }

    async fn delete_product(&self, id: &str) -> Result<(), StoreError> {
        let url = self.item_url(id);
        debug!(url = %url, "DELETE product");
        let response = self.client.delete(url).send().await.map_err(network)?;
        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}
