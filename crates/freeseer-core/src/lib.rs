pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod plugins;
pub mod profile;

pub use config::{
    ConfigHandle,
    FreeseerConfig,
};
pub use context::ConfigurationContext;
pub use error::{
    CoreError,
    CoreResult,
};
pub use plugins::PluginManager;
pub use profile::{
    Profile,
    ProfileManager,
};
