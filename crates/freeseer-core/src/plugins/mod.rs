mod builtin;

pub use builtin::BuiltinPlugin;
use freeseer_plugin_api::{
    PluginCategory,
    PluginError,
    PluginMetadata,
    PluginRegistry,
};

use crate::config::FreeseerConfig;
use crate::profile::Profile;

pub fn create_plugin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();

    for &(category, name, description) in builtin::CATALOG {
        registry.register(Box::new(BuiltinPlugin::new(category, name, description)));
    }

    registry
}

/// Answers plugin catalog queries on behalf of one profile.
pub struct PluginManager {
    profile: Profile,
    registry: PluginRegistry,
}

impl PluginManager {
    pub fn new(profile: Profile) -> Self {
        Self::with_registry(profile, create_plugin_registry())
    }

    pub fn with_registry(profile: Profile, registry: PluginRegistry) -> Self {
        tracing::debug!(
            profile = %profile.name(),
            plugins = registry.count(),
            "Plugin manager ready"
        );
        Self { profile, registry }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn plugin_count(&self) -> usize {
        self.registry.count()
    }

    /// Available plugins of `category`, sorted by name
    pub fn get_plugins_of_category(&self, category: PluginCategory) -> Vec<PluginMetadata> {
        let plugins: Vec<PluginMetadata> = self
            .registry
            .plugins_of_category(category)
            .into_iter()
            .map(|p| p.metadata().clone())
            .collect();

        tracing::debug!(
            profile = %self.profile.name(),
            category = category.label(),
            count = plugins.len(),
            "Listed plugins"
        );
        plugins
    }

    pub fn get_plugin(&self, category: PluginCategory, name: &str) -> Option<PluginMetadata> {
        self.registry
            .get(category, name)
            .map(|p| p.metadata().clone())
    }

    /// One message for every plugin `config` selects that the catalog lacks.
    pub fn validate_selection(&self, config: &FreeseerConfig) -> Vec<String> {
        config
            .selected_plugins()
            .into_iter()
            .filter(|(category, name)| !self.registry.is_registered(*category, name))
            .map(|(category, name)| {
                PluginError::PluginNotFound {
                    category,
                    name: name.to_string(),
                }
                .to_string()
            })
            .collect()
    }
}
