pub mod category;
pub mod error;
pub mod plugin;
pub mod registry;

pub use category::PluginCategory;
pub use error::PluginError;
pub use plugin::{
    Plugin,
    PluginMetadata,
};
pub use registry::PluginRegistry;
