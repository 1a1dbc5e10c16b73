use thiserror::Error;

use crate::category::PluginCategory;

/// Plugin error types
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Unknown plugin category: {0}")]
    UnknownCategory(String),

    #[error("Plugin not found: {name} ({})", .category.label())]
    PluginNotFound {
        category: PluginCategory,
        name: String,
    },
}
