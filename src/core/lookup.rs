use crate::adapters::{known_customer, CannedCustomerClient};
use crate::domain::model::Customer;
use crate::domain::ports::CustomerClient;
use crate::utils::error::Result;

/// Resolves customer ids. The fixed "123"/"456" records answer first; any
/// other id goes to the injected [`CustomerClient`].
pub struct CustomerLookup<C: CustomerClient> {
    client: C,
}

impl CustomerLookup<CannedCustomerClient> {
    pub fn canned() -> Self {
        Self::new(CannedCustomerClient::new())
    }
}

impl<C: CustomerClient> CustomerLookup<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Surfaces client failures to the caller.
    pub async fn try_fetch_customer(&self, customer_id: &str) -> Result<Customer> {
        if let Some(customer) = known_customer(customer_id) {
            tracing::debug!(customer_id = %customer_id, "Answered from fixed customer table");
            return Ok(customer);
        }
        self.client.get_customer_by_id(customer_id).await
    }

    /// Never fails: a failed lookup yields [`Customer::fallback`] for the
    /// same id and is reported only through the log.
    pub async fn fetch_customer(&self, customer_id: &str) -> Customer {
        match self.try_fetch_customer(customer_id).await {
            Ok(customer) => customer,
            Err(e) => {
                tracing::error!(
                    customer_id = %customer_id,
                    error = %e,
                    "Customer lookup failed, returning fallback customer"
                );
                Customer::fallback(customer_id)
            }
        }
    }
}
