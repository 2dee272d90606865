mod client;
mod errors;
pub mod filter;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::filter::{raw_filter, FilterSet, FilterValue};
