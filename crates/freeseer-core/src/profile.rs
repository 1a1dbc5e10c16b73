use std::path::{
    Path,
    PathBuf,
};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ConfigHandle;
use crate::error::{
    CoreError,
    CoreResult,
};

pub const DEFAULT_PROFILE: &str = "default";

const PROFILES_DIR: &str = "profiles";

/// A named settings environment, backed by one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    path: PathBuf,
}

impl Profile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open `file_name` inside this profile, scoped to the `storage_args`
    /// section path.
    pub fn get_config<T>(
        &self, file_name: &str, storage_args: &[&str], read_only: bool,
    ) -> CoreResult<ConfigHandle<T>>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        ConfigHandle::open(self.path.join(file_name), storage_args, read_only)
    }
}

pub struct ProfileManager {
    base_dir: PathBuf,
}

impl ProfileManager {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(Self::default_base_dir())
    }

    pub fn default_base_dir() -> PathBuf {
        std::env::var("FREESEER_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::config_dir()
                    .map(|p| p.join("freeseer"))
                    .unwrap_or_else(|| PathBuf::from(".freeseer"))
            })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get a profile by name, creating its directory on first use.
    /// `None` selects [`DEFAULT_PROFILE`].
    pub fn get(&self, name: Option<&str>) -> CoreResult<Profile> {
        let name = name.unwrap_or(DEFAULT_PROFILE);
        validate_profile_name(name)?;

        let path = self.profiles_dir().join(name);
        std::fs::create_dir_all(&path).map_err(|e| {
            CoreError::ProfileUnavailable(format!("{}: {}", path.display(), e))
        })?;

        tracing::debug!(profile = %name, path = %path.display(), "Loaded profile");

        Ok(Profile {
            name: name.to_string(),
            path,
        })
    }

    /// Names of the profiles that exist on disk, sorted.
    pub fn list(&self) -> CoreResult<Vec<String>> {
        let dir = self.profiles_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        Ok(names)
    }

    fn profiles_dir(&self) -> PathBuf {
        self.base_dir.join(PROFILES_DIR)
    }
}

fn validate_profile_name(name: &str) -> CoreResult<()> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name.contains("..")
        || name.contains(['/', '\\']);

    if invalid {
        return Err(CoreError::InvalidProfileName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::FreeseerConfig;

    #[test]
    fn test_get_default_profile_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ProfileManager::new(temp_dir.path());

        let profile = manager.get(None).unwrap();
        assert_eq!(profile.name(), "default");
        assert!(profile.path().is_dir());
        assert_eq!(profile.path(), temp_dir.path().join("profiles").join("default"));
    }

    #[test]
    fn test_get_is_stable() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ProfileManager::new(temp_dir.path());

        let first = manager.get(Some("lecture")).unwrap();
        let second = manager.get(Some("lecture")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_profile_names() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ProfileManager::new(temp_dir.path());

        for name in ["", "  ", ".", "..", "../escape", "a/b", "a\\b"] {
            let err = manager.get(Some(name)).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidProfileName(_)),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_list_profiles() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ProfileManager::new(temp_dir.path());
        assert!(manager.list().unwrap().is_empty());

        manager.get(Some("talks")).unwrap();
        manager.get(None).unwrap();

        assert_eq!(manager.list().unwrap(), vec!["default", "talks"]);
    }

    #[test]
    fn test_profile_get_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ProfileManager::new(temp_dir.path());
        let profile = manager.get(None).unwrap();

        std::fs::write(
            profile.path().join("freeseer.conf"),
            "[Global]\naudiomixer = \"Multiple Audio Inputs\"\n",
        )
        .unwrap();

        let config = profile
            .get_config::<FreeseerConfig>("freeseer.conf", &["Global"], true)
            .unwrap();
        assert_eq!(config.get().audiomixer, "Multiple Audio Inputs");
        assert!(config.is_read_only());
    }

    #[test]
    fn test_default_base_dir_env_override() {
        std::env::set_var("FREESEER_CONFIG_DIR", "/custom/freeseer");
        let path = ProfileManager::default_base_dir();
        assert_eq!(path, PathBuf::from("/custom/freeseer"));
        std::env::remove_var("FREESEER_CONFIG_DIR");
    }
}
