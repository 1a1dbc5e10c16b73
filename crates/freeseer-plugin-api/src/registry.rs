use std::collections::HashMap;

use crate::category::PluginCategory;
use crate::plugin::Plugin;

/// Plugin registry - manages all registered plugins, grouped by category
pub struct PluginRegistry {
    plugins: HashMap<PluginCategory, HashMap<String, Box<dyn Plugin>>>,
}

impl PluginRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Register a plugin, replacing any plugin of the same name in its category
    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        let category = plugin.category();
        let name = plugin.name().to_string();
        self.plugins
            .entry(category)
            .or_default()
            .insert(name, plugin);
    }

    /// Get a plugin by category and name
    pub fn get(&self, category: PluginCategory, name: &str) -> Option<&dyn Plugin> {
        self.plugins
            .get(&category)
            .and_then(|plugins| plugins.get(name))
            .map(|p| p.as_ref())
    }

    /// Check if a plugin is registered
    pub fn is_registered(&self, category: PluginCategory, name: &str) -> bool {
        self.get(category, name).is_some()
    }

    /// All plugins of a category, sorted by name
    pub fn plugins_of_category(&self, category: PluginCategory) -> Vec<&dyn Plugin> {
        let mut plugins: Vec<&dyn Plugin> = self
            .plugins
            .get(&category)
            .map(|plugins| plugins.values().map(|p| p.as_ref()).collect())
            .unwrap_or_default();
        plugins.sort_by(|a, b| a.name().cmp(b.name()));
        plugins
    }

    /// Get count of registered plugins
    pub fn count(&self) -> usize {
        self.plugins.values().map(HashMap::len).sum()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
