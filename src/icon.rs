/// Glyph shown next to a cognitive state. Keys without a dedicated glyph get `Default`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum_macros::Display)]
pub enum PresetIcon {
    #[strum(to_string = "🚀")]
    Initialization,
    #[strum(to_string = "🧠")]
    DeepFocus,
    #[strum(to_string = "⚡")]
    FlowState,
    #[strum(to_string = "🔍")]
    Debugging,
    #[strum(to_string = "🚢")]
    Deployment,
    #[strum(to_string = "🎵")]
    Default,
}

impl PresetIcon {
    pub fn for_key(key: &str) -> Self {
        match key {
            "initialization" => PresetIcon::Initialization,
            "deep_focus" => PresetIcon::DeepFocus,
            "flow_state" => PresetIcon::FlowState,
            "debugging" => PresetIcon::Debugging,
            "deployment" => PresetIcon::Deployment,
            _ => PresetIcon::Default,
        }
    }
}
