pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod symbols;

pub use config::Config;
pub use error::PriceError;
pub use fetch::PriceClient;
pub use model::{build_price_map, PriceEntry, ProviderQuote};
