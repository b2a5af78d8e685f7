#![doc = include_str!("../README.md")]
pub mod agent;
pub mod client;
pub mod types;

pub use self::agent::Agent;
pub use self::client::Service;
