use crate::domain::model::Customer;
use crate::domain::ports::{ConfigProvider, CustomerClient};
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// reqwest binding of [`CustomerClient`]. Single attempt per lookup.
#[derive(Debug, Clone)]
pub struct HttpCustomerClient {
    client: Client,
    base_url: Url,
}

impl HttpCustomerClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        validate_url("customer_api.base_url", base_url)?;
        let base_url = Url::parse(base_url).map_err(|e| LookupError::ConfigError {
            message: format!("Invalid customer API URL: {}", e),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.customer_api_base_url(),
            config.timeout_seconds().map(Duration::from_secs),
        )
    }

    /// `{base_url}/users/{id}`, with `id` encoded as a single path segment.
    pub fn user_url(&self, id: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::ConfigError {
                message: format!("Customer API URL cannot be a base: {}", self.base_url),
            })?
            .pop_if_empty()
            .push("users")
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl CustomerClient for HttpCustomerClient {
    async fn get_customer_by_id(&self, id: &str) -> Result<Customer> {
        let url = self.user_url(id)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus {
                status: status.as_u16(),
                customer_id: id.to_string(),
            });
        }

        let customer: Customer = response.json().await?;
        Ok(customer)
    }
}
