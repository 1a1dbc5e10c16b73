pub mod schema;
pub mod storage;

pub use schema::FreeseerConfig;
pub use storage::ConfigHandle;

/// File holding the main settings inside a profile directory
pub const CONFIG_FILE_NAME: &str = "freeseer.conf";

/// Section of [`CONFIG_FILE_NAME`] the main settings live under
pub const GLOBAL_SECTION: &str = "Global";
