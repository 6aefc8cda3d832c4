use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

/// Root option tree for a wizard.
///
/// Keys use the camelCase names accepted by [`crate::config::OptionStore::set`],
/// so a serialized tree and a dotted option path always agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardOptions {
    /// Consult the validation gate before leaving a step.
    pub validate: bool,
    /// Emit per-transition debug traces.
    pub debug: bool,
    /// Hide the title bar.
    #[serde(alias = "titleHide")]
    pub hide_title: bool,
    /// Show the step menu.
    pub menu_enable: bool,
    pub buttons: ButtonOptions,
    pub counter: CounterOptions,
    pub effects: EffectsOptions,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            validate: false,
            debug: false,
            hide_title: false,
            menu_enable: false,
            buttons: ButtonOptions::default(),
            counter: CounterOptions::default(),
            effects: EffectsOptions::default(),
        }
    }
}

impl WizardOptions {
    /// Decode a partial option tree, merging it key by key over the defaults.
    ///
    /// Nested tables only replace the keys they name, so
    /// `effects.step.hide.type = "fade"` keeps the default slide direction.
    pub fn overlaid(partial: Value) -> Result<Self, serde_json::Error> {
        let mut partial = partial;
        if let Value::Object(map) = &mut partial {
            if let Some(value) = map.remove("titleHide") {
                map.entry("hideTitle").or_insert(value);
            }
        }

        let mut tree = serde_json::to_value(Self::default())?;
        merge(&mut tree, partial);
        serde_json::from_value(tree)
    }
}

fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Behaviour attribute of the cancel and finish buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

/// Labels and flags for the navigation buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonOptions {
    pub cancel_hide: bool,
    pub cancel_type: ButtonType,
    pub finish_type: ButtonType,
    pub cancel_text: String,
    pub previous_text: String,
    pub next_text: String,
    pub finish_text: String,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            cancel_hide: false,
            cancel_type: ButtonType::Button,
            finish_type: ButtonType::Button,
            cancel_text: "Cancel".to_string(),
            previous_text: "Previous".to_string(),
            next_text: "Next".to_string(),
            finish_text: "Finish".to_string(),
        }
    }
}

/// How the counter renders its text.
///
/// Unknown names are kept verbatim and render as `N/A`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CounterType {
    Percentage,
    #[default]
    Count,
    Other(String),
}

impl From<String> for CounterType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "percentage" => CounterType::Percentage,
            "count" => CounterType::Count,
            _ => CounterType::Other(value),
        }
    }
}

impl From<CounterType> for String {
    fn from(value: CounterType) -> Self {
        match value {
            CounterType::Percentage => "percentage".to_string(),
            CounterType::Count => "count".to_string(),
            CounterType::Other(name) => name,
        }
    }
}

/// Side of the footer the counter text is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextOrient {
    #[default]
    Left,
    Right,
}

/// Progress counter options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CounterOptions {
    pub enable: bool,
    #[serde(rename = "type")]
    pub counter_type: CounterType,
    pub progressbar: bool,
    /// Count the first step in progress math.
    pub start_count: bool,
    /// Hide the counter on the first step.
    pub start_hide: bool,
    /// Count the last step in progress math.
    pub finish_count: bool,
    /// Hide the counter on the last step.
    pub finish_hide: bool,
    /// Suffix appended after the counter text (empty disables it).
    pub append_text: String,
    pub orient_text: TextOrient,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            enable: false,
            counter_type: CounterType::Count,
            progressbar: false,
            start_count: true,
            start_hide: false,
            finish_count: true,
            finish_hide: false,
            append_text: "Complete".to_string(),
            orient_text: TextOrient::Left,
        }
    }
}

/// Effect duration: milliseconds or one of `fast`, `normal`, `slow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EffectDuration {
    Millis(u64),
    Named(String),
}

impl Default for EffectDuration {
    fn default() -> Self {
        EffectDuration::Named("normal".to_string())
    }
}

impl EffectDuration {
    /// Resolve to a wall-clock duration. Unknown names fall back to `normal`.
    pub fn as_duration(&self) -> Duration {
        match self {
            EffectDuration::Millis(ms) => Duration::from_millis(*ms),
            EffectDuration::Named(name) => match name.as_str() {
                "fast" => Duration::from_millis(200),
                "slow" => Duration::from_millis(600),
                _ => Duration::from_millis(400),
            },
        }
    }
}

/// One animation: effect name, free-form effect options, duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub options: Map<String, Value>,
    pub duration: EffectDuration,
}

impl Default for EffectSpec {
    fn default() -> Self {
        Self::named("slide")
    }
}

impl EffectSpec {
    pub fn named(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            options: Map::new(),
            duration: EffectDuration::default(),
        }
    }

    fn with_option(mut self, key: &str, value: Value) -> Self {
        self.options.insert(key.to_string(), value);
        self
    }
}

/// Hide/show pair used by the step panels and the title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionEffects {
    pub enable: bool,
    pub hide: EffectSpec,
    pub show: EffectSpec,
}

impl Default for TransitionEffects {
    fn default() -> Self {
        Self {
            enable: true,
            hide: EffectSpec::named("slide"),
            show: EffectSpec::named("slide"),
        }
    }
}

/// Single "change" highlight used by the menu and the counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightEffects {
    pub enable: bool,
    pub change: EffectSpec,
}

impl Default for HighlightEffects {
    fn default() -> Self {
        Self {
            enable: true,
            change: EffectSpec::named("highlight"),
        }
    }
}

/// Animation settings, grouped by the element they apply to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsOptions {
    /// Master switch; when off every effect plays instantly.
    pub enable: bool,
    #[serde(default = "default_step_effects")]
    pub step: TransitionEffects,
    pub title: TransitionEffects,
    pub menu: HighlightEffects,
    pub counter: HighlightEffects,
}

fn default_step_effects() -> TransitionEffects {
    let slide_left = EffectSpec::named("slide").with_option("direction", Value::from("left"));
    TransitionEffects {
        enable: true,
        hide: slide_left.clone(),
        show: slide_left,
    }
}

impl Default for EffectsOptions {
    fn default() -> Self {
        Self {
            enable: false,
            step: default_step_effects(),
            title: TransitionEffects::default(),
            menu: HighlightEffects::default(),
            counter: HighlightEffects::default(),
        }
    }
}

/// Element an effect group animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectGroup {
    Step,
    Title,
    Menu,
    Counter,
}

/// Phase within an effect group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectPhase {
    Hide,
    Show,
    Change,
}

impl EffectGroup {
    pub const ALL: [EffectGroup; 4] = [
        EffectGroup::Step,
        EffectGroup::Title,
        EffectGroup::Menu,
        EffectGroup::Counter,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EffectGroup::Step => "step",
            EffectGroup::Title => "title",
            EffectGroup::Menu => "menu",
            EffectGroup::Counter => "counter",
        }
    }

    /// Phases that exist for this group.
    pub fn phases(self) -> &'static [EffectPhase] {
        match self {
            EffectGroup::Step | EffectGroup::Title => &[EffectPhase::Hide, EffectPhase::Show],
            EffectGroup::Menu | EffectGroup::Counter => &[EffectPhase::Change],
        }
    }
}

impl EffectPhase {
    pub fn key(self) -> &'static str {
        match self {
            EffectPhase::Hide => "hide",
            EffectPhase::Show => "show",
            EffectPhase::Change => "change",
        }
    }
}

impl EffectsOptions {
    pub fn group_enabled(&self, group: EffectGroup) -> bool {
        match group {
            EffectGroup::Step => self.step.enable,
            EffectGroup::Title => self.title.enable,
            EffectGroup::Menu => self.menu.enable,
            EffectGroup::Counter => self.counter.enable,
        }
    }

    /// Look up the spec for a group/phase pair, `None` when the pair does not exist.
    pub fn spec(&self, group: EffectGroup, phase: EffectPhase) -> Option<&EffectSpec> {
        match (group, phase) {
            (EffectGroup::Step, EffectPhase::Hide) => Some(&self.step.hide),
            (EffectGroup::Step, EffectPhase::Show) => Some(&self.step.show),
            (EffectGroup::Title, EffectPhase::Hide) => Some(&self.title.hide),
            (EffectGroup::Title, EffectPhase::Show) => Some(&self.title.show),
            (EffectGroup::Menu, EffectPhase::Change) => Some(&self.menu.change),
            (EffectGroup::Counter, EffectPhase::Change) => Some(&self.counter.change),
            _ => None,
        }
    }
}
