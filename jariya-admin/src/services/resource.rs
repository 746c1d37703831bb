//! Shared CRUD plumbing for upstream resources
//!
//! Upstream exposes every entity under `/<resource>/{getAll,getById,add,update,deleteById}`.
//! Bulk reads are GET; lookups and mutations are POST with a JSON body.

use crate::api::{ApiClient, ApiResponse};
use serde::Serialize;
use serde_json::{json, Value};

/// Normalizer turning one raw upstream record into a typed entity
pub type Normalize<T> = fn(&Value) -> T;

/// CRUD calls for one upstream resource
#[derive(Clone)]
pub struct Resource {
    client: ApiClient,
    name: &'static str,
}

impl Resource {
    pub fn new(client: ApiClient, name: &'static str) -> Self {
        Self { client, name }
    }

    pub fn endpoint(&self, operation: &str) -> String {
        format!("/{}/{}", self.name, operation)
    }

    /// Fetch and normalize every record
    pub async fn get_all<T>(&self, normalize: Normalize<T>) -> ApiResponse<Vec<T>> {
        let result = self
            .client
            .get::<Vec<Value>>(&self.endpoint("getAll"))
            .await
            .map(|items| items.iter().map(normalize).collect::<Vec<T>>());

        match &result {
            ApiResponse::Success { data, .. } => {
                tracing::debug!(resource = self.name, count = data.len(), "Fetched records")
            }
            ApiResponse::Failure { message } => {
                tracing::warn!(resource = self.name, "Fetch failed: {}", message)
            }
        }
        result
    }

    /// Fetch one record by id
    pub async fn get_by_id<T>(&self, id: &str, normalize: Normalize<T>) -> ApiResponse<T> {
        self.post_record("getById", &json!({ "id": id }), normalize)
            .await
    }

    pub async fn create<T, B>(&self, body: &B, normalize: Normalize<T>) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
    {
        let result = self.post_record("add", body, normalize).await;
        tracing::info!(resource = self.name, success = result.is_success(), "Create");
        result
    }

    pub async fn update<T, B>(&self, body: &B, normalize: Normalize<T>) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
    {
        let result = self.post_record("update", body, normalize).await;
        tracing::info!(resource = self.name, success = result.is_success(), "Update");
        result
    }

    /// Delete by id. Upstream may or may not echo data back; it is ignored.
    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        let result = self
            .client
            .post::<Value, _>(&self.endpoint("deleteById"), Some(&json!({ "id": id })))
            .await
            .map(|_| ());
        tracing::info!(resource = self.name, id, success = result.is_success(), "Delete");
        result
    }

    /// POST a body and normalize the returned record.
    ///
    /// A success without a record payload normalizes an empty object, so the
    /// caller still gets a value with defaulted fields.
    pub async fn post_record<T, B>(
        &self,
        operation: &str,
        body: &B,
        normalize: Normalize<T>,
    ) -> ApiResponse<T>
    where
        B: Serialize + ?Sized,
    {
        self.client
            .post::<Value, _>(&self.endpoint(operation), Some(body))
            .await
            .map(|raw| match raw {
                Value::Null => normalize(&json!({})),
                raw => normalize(&raw),
            })
    }
}
