use serde::{
    Deserialize,
    Serialize,
};

use crate::category::PluginCategory;

/// Plugin metadata - describes the plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Display name, unique within its category (e.g., "Pulse Audio Source")
    pub name: String,
    /// Capability slot the plugin fills
    pub category: PluginCategory,
    /// Plugin version
    pub version: String,
    /// Plugin description
    pub description: String,
    /// Plugin author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// Main plugin trait - every recording plugin exposes its metadata through it
pub trait Plugin: Send + Sync {
    fn metadata(&self) -> &PluginMetadata;

    fn name(&self) -> &str {
        &self.metadata().name
    }

    fn category(&self) -> PluginCategory {
        self.metadata().category
    }
}
