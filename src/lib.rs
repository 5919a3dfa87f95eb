pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::{LookupSettings, TomlConfig};

pub use adapters::{client_from_config, CannedCustomerClient, HttpCustomerClient};
pub use crate::core::lookup::CustomerLookup;
pub use domain::model::{Customer, Order};
pub use domain::ports::{ConfigProvider, CustomerClient, LookupSource};
pub use utils::error::{LookupError, Result};
