use serde::{
    Deserialize,
    Serialize,
};

use crate::error::PluginError;

/// The fixed capability slots a plugin can fill.
///
/// Route keys are lowercase (`audioinput`), catalog labels are the
/// CamelCase names the plugin catalog groups plugins under (`AudioInput`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginCategory {
    AudioInput,
    AudioMixer,
    VideoInput,
    VideoMixer,
    Importer,
    Output,
}

impl PluginCategory {
    pub const ALL: [PluginCategory; 6] = [
        Self::AudioInput,
        Self::AudioMixer,
        Self::VideoInput,
        Self::VideoMixer,
        Self::Importer,
        Self::Output,
    ];

    /// Key used in `/configuration/recording/{plugins}`
    pub fn key(&self) -> &'static str {
        match self {
            Self::AudioInput => "audioinput",
            Self::AudioMixer => "audiomixer",
            Self::VideoInput => "videoinput",
            Self::VideoMixer => "videomixer",
            Self::Importer => "importer",
            Self::Output => "output",
        }
    }

    /// Category label in the plugin catalog
    pub fn label(&self) -> &'static str {
        match self {
            Self::AudioInput => "AudioInput",
            Self::AudioMixer => "AudioMixer",
            Self::VideoInput => "VideoInput",
            Self::VideoMixer => "VideoMixer",
            Self::Importer => "Importer",
            Self::Output => "Output",
        }
    }
}

impl std::fmt::Display for PluginCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for PluginCategory {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| PluginError::UnknownCategory(s.to_string()))
    }
}
