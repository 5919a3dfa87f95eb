// Adapters layer: concrete implementations of the customer directory port.

pub mod canned;
pub mod http;

pub use canned::{known_customer, CannedCustomerClient};
pub use http::HttpCustomerClient;

use crate::domain::ports::{ConfigProvider, CustomerClient, LookupSource};
use crate::utils::error::Result;

/// Picks the directory named by the configured lookup source.
pub fn client_from_config<C: ConfigProvider>(config: &C) -> Result<Box<dyn CustomerClient>> {
    match config.lookup_source() {
        LookupSource::Canned => Ok(Box::new(CannedCustomerClient::new())),
        LookupSource::Remote => Ok(Box::new(HttpCustomerClient::from_config(config)?)),
    }
}
