use crate::domain::model::Customer;
use crate::domain::ports::CustomerClient;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Customers answered locally whatever client is configured. Exact match only.
pub fn known_customer(id: &str) -> Option<Customer> {
    match id {
        "123" => Some(Customer::new("123", "John Doe", "john@example.com")),
        "456" => Some(Customer::new("456", "Jane Smith", "jane@example.com")),
        _ => None,
    }
}

/// In-memory customer directory. Ids it does not hold resolve to
/// [`Customer::unknown`], so a lookup here never fails.
#[derive(Debug, Clone, Copy)]
pub struct CannedCustomerClient;

impl CannedCustomerClient {
    pub fn new() -> Self {
        Self
    }

    pub fn get(&self, id: &str) -> Customer {
        known_customer(id).unwrap_or_else(|| Customer::unknown(id))
    }
}

impl Default for CannedCustomerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerClient for CannedCustomerClient {
    async fn get_customer_by_id(&self, id: &str) -> Result<Customer> {
        tracing::debug!(customer_id = %id, "Answering from canned directory");
        Ok(self.get(id))
    }
}
