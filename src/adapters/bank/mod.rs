//! Template bank loader adapters.
//!
//! - `InMemoryTemplateBanks` - pre-seeded or lazily built banks held in memory
//! - `FsTemplateBankLoader` - banks materialized as JSON files

mod filesystem;
mod in_memory;

pub use filesystem::FsTemplateBankLoader;
pub use in_memory::{build_bank, InMemoryTemplateBanks, InMemoryTemplateBanksBuilder};
