pub mod core;
pub mod cryptocurrency;

pub use crate::core::config::CmcConfig;
pub use crate::core::errors::CmcError;
pub use crate::core::types::{ApiResponse, ListResponse, MapResponse, ResponseStatus};
pub use cryptocurrency::{create_cryptocurrency_client, CryptocurrencyClient};
