use crate::domain::model::Customer;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Remote customer directory, `GET /users/{id}`.
#[async_trait]
pub trait CustomerClient: Send + Sync {
    async fn get_customer_by_id(&self, id: &str) -> Result<Customer>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LookupSource {
    /// Built-in directory, no network.
    #[default]
    Canned,
    /// The configured customer API.
    Remote,
}

pub trait ConfigProvider: Send + Sync {
    fn customer_api_base_url(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn lookup_source(&self) -> LookupSource;
}

#[async_trait]
impl<T: CustomerClient + ?Sized> CustomerClient for Box<T> {
    async fn get_customer_by_id(&self, id: &str) -> Result<Customer> {
        (**self).get_customer_by_id(id).await
    }
}
