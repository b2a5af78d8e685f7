#![doc = include_str!("../README.md")]
#[cfg(feature = "reqwest")]
pub mod reqwest;

#[cfg(all(test, feature = "reqwest"))]
mod tests;
