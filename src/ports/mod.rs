//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Catalog Ports
//!
//! - `TemplateBankLoader` - Source of precomputed per-department template banks

mod template_bank_loader;

pub use template_bank_loader::{BankLoadError, TemplateBankLoader};
