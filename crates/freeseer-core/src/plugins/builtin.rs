use freeseer_plugin_api::{
    Plugin,
    PluginCategory,
    PluginMetadata,
};

/// A plugin shipped with Freeseer. Only its catalog entry lives here; the
/// media pipeline that drives it is owned by the recorder.
pub struct BuiltinPlugin {
    metadata: PluginMetadata,
}

impl BuiltinPlugin {
    pub fn new(category: PluginCategory, name: &str, description: &str) -> Self {
        Self {
            metadata: PluginMetadata {
                name: name.to_string(),
                category,
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: description.to_string(),
                author: Some("Freeseer Team".to_string()),
            },
        }
    }
}

impl Plugin for BuiltinPlugin {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }
}

pub(super) const CATALOG: &[(PluginCategory, &str, &str)] = &[
    (PluginCategory::AudioInput, "ALSA Source", "Capture audio through ALSA"),
    (PluginCategory::AudioInput, "Audio Test Source", "Generate a test tone"),
    (PluginCategory::AudioInput, "Auto Audio Source", "Pick the default system audio source"),
    (PluginCategory::AudioInput, "Jack Audio Source", "Capture audio from a JACK server"),
    (PluginCategory::AudioInput, "Pulse Audio Source", "Capture audio through PulseAudio"),
    (PluginCategory::AudioMixer, "Audio Passthrough", "Forward a single audio input unchanged"),
    (PluginCategory::AudioMixer, "Multiple Audio Inputs", "Mix two audio inputs together"),
    (PluginCategory::VideoInput, "Desktop-Linux Source", "Capture the X11 desktop or a window"),
    (PluginCategory::VideoInput, "Firewire Source", "Capture from a FireWire (DV) camera"),
    (PluginCategory::VideoInput, "USB Source", "Capture from a Video4Linux device"),
    (PluginCategory::VideoInput, "Video Test Source", "Generate a test pattern"),
    (PluginCategory::VideoMixer, "Picture-In-Picture", "Overlay one video input on another"),
    (PluginCategory::VideoMixer, "Video Passthrough", "Forward a single video input unchanged"),
    (PluginCategory::Importer, "CSV Importer", "Import talks from a CSV file"),
    (PluginCategory::Importer, "Rss FeedParser", "Import talks from an RSS feed"),
    (PluginCategory::Output, "Audio Feedback", "Play recorded audio back while recording"),
    (PluginCategory::Output, "Ogg Icecast", "Stream Ogg to an Icecast server"),
    (PluginCategory::Output, "Ogg Output", "Record to an Ogg Theora/Vorbis file"),
    (PluginCategory::Output, "RTMP Streaming", "Stream to an RTMP server"),
    (PluginCategory::Output, "Video Preview", "Show the recorded video in a window"),
    (PluginCategory::Output, "WebM Output", "Record to a WebM file"),
];
