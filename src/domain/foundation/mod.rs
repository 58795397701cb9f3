//! Foundation module - Shared domain primitives.
//!
//! Contains the template category vocabulary and the error types
//! shared by the catalog, generation and resolution layers.

mod errors;
mod template_category;

pub use errors::ValidationError;
pub use template_category::{
    CategoryMetadata, TemplateAudience, TemplateCategory, TemplateTimeframe,
};
