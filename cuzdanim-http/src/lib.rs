#![doc = include_str!("../README.md")]
pub mod error;
pub mod types;

mod traits;

pub use self::error::{Error, Result};
pub use self::traits::{ApiClient, HttpClient};
pub use self::types::{ApiRequest, ApiResponse, AuthorizationToken, Header};
