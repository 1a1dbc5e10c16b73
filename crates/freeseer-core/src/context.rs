use crate::config::{
    ConfigHandle,
    FreeseerConfig,
    CONFIG_FILE_NAME,
    GLOBAL_SECTION,
};
use crate::error::CoreResult;
use crate::plugins::PluginManager;
use crate::profile::{
    Profile,
    ProfileManager,
};

/// Profile, global settings and plugin catalog the configuration API reads
/// from. Built once at startup and shared read-only afterwards.
pub struct ConfigurationContext {
    pub profile: Profile,

    pub config: ConfigHandle<FreeseerConfig>,

    pub plugin_manager: PluginManager,
}

impl ConfigurationContext {
    pub fn initialize(profiles: &ProfileManager, profile_name: Option<&str>) -> CoreResult<Self> {
        let profile = profiles.get(profile_name)?;

        let config =
            profile.get_config::<FreeseerConfig>(CONFIG_FILE_NAME, &[GLOBAL_SECTION], true)?;

        let plugin_manager = PluginManager::new(profile.clone());

        for problem in plugin_manager.validate_selection(config.get()) {
            tracing::warn!(profile = %profile.name(), "Configured plugin unavailable: {}", problem);
        }

        tracing::info!(
            profile = %profile.name(),
            config = %config.path().display(),
            plugins = plugin_manager.plugin_count(),
            "Configuration context initialized"
        );

        Ok(Self {
            profile,
            config,
            plugin_manager,
        })
    }
}
