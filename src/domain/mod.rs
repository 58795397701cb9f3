//! Domain layer containing the catalog and dashboard generation logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (template categories, errors)
//! - `catalog` - Industry and department registry
//! - `dashboard` - Dashboard view models and template banks
//! - `generation` - Seeded KPI, chart, table and insight generators

pub mod catalog;
pub mod dashboard;
pub mod foundation;
pub mod generation;
