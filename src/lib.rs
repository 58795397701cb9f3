//! Dashboard Catalog - Industry and department dashboard templates
//!
//! Generates deterministic dashboard configurations (KPIs, charts, a data
//! table and insights) for every (industry, department, template) triple and
//! resolves requests against pre-built template banks with a fallback chain.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
