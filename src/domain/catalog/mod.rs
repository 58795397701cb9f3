//! Catalog of industries and their department dashboards.

mod industry;
mod registry;

pub use industry::{build_departments, Department, Industry};
pub use registry::{IndustryRegistry, IndustryRegistryBuilder};
