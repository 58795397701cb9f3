//! Adapters - Implementations of port interfaces.
//!
//! - `bank` - Template bank loaders (in-memory, filesystem)
//! - `http` - Axum routes for the catalog

pub mod bank;
pub mod http;

pub use bank::{FsTemplateBankLoader, InMemoryTemplateBanks};
