use std::path::PathBuf;

use freeseer_plugin_api::PluginCategory;
use serde::{
    Deserialize,
    Serialize,
};

pub(super) const DEFAULT_AUDIO_MIXER: &str = "Audio Passthrough";

pub(super) const DEFAULT_VIDEO_MIXER: &str = "Video Passthrough";

pub(super) const DEFAULT_FILE_OUTPUT: &str = "Ogg Output";

pub(super) const DEFAULT_STREAM_OUTPUT: &str = "RTMP Streaming";

pub(super) const DEFAULT_RESOLUTION: &str = "default";

/// Settings stored in the `Global` section of `freeseer.conf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeseerConfig {
    /// Directory recordings are written to
    pub videodir: PathBuf,

    pub auto_hide: bool,

    pub close_to_system_tray: bool,

    pub enable_audio_recording: bool,

    pub enable_video_recording: bool,

    pub audiomixer: String,

    pub videomixer: String,

    pub record_to_file: bool,

    pub record_to_file_plugin: String,

    pub record_to_stream: bool,

    pub record_to_stream_plugin: String,

    pub audio_feedback: bool,

    pub video_preview: bool,

    pub resolution: String,
}

impl FreeseerConfig {
    pub fn default_videodir() -> PathBuf {
        dirs::video_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join("Videos")))
            .map(|dir| dir.join("Freeseer"))
            .unwrap_or_else(|| PathBuf::from("Videos"))
    }

    /// Plugins this configuration would load when recording, as
    /// `(category, name)` pairs. Disabled outputs and mixers are left out.
    pub fn selected_plugins(&self) -> Vec<(PluginCategory, &str)> {
        let mut selected = Vec::new();

        if self.enable_audio_recording {
            selected.push((PluginCategory::AudioMixer, self.audiomixer.as_str()));
        }
        if self.enable_video_recording {
            selected.push((PluginCategory::VideoMixer, self.videomixer.as_str()));
        }
        if self.record_to_file {
            selected.push((PluginCategory::Output, self.record_to_file_plugin.as_str()));
        }
        if self.record_to_stream {
            selected.push((PluginCategory::Output, self.record_to_stream_plugin.as_str()));
        }

        selected
    }
}

impl Default for FreeseerConfig {
    fn default() -> Self {
        Self {
            videodir: Self::default_videodir(),
            auto_hide: true,
            close_to_system_tray: false,
            enable_audio_recording: true,
            enable_video_recording: true,
            audiomixer: DEFAULT_AUDIO_MIXER.to_string(),
            videomixer: DEFAULT_VIDEO_MIXER.to_string(),
            record_to_file: true,
            record_to_file_plugin: DEFAULT_FILE_OUTPUT.to_string(),
            record_to_stream: false,
            record_to_stream_plugin: DEFAULT_STREAM_OUTPUT.to_string(),
            audio_feedback: false,
            video_preview: true,
            resolution: DEFAULT_RESOLUTION.to_string(),
        }
    }
}
