//! Catalog query handlers.

mod get_available_templates;
mod get_template_config;

pub use get_available_templates::{
    standard_templates, GetAvailableTemplatesHandler, GetAvailableTemplatesQuery,
};
pub use get_template_config::{
    GetTemplateConfigHandler, GetTemplateConfigQuery, ResolutionSource, ResolvedTemplate,
};
