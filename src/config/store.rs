//! Option storage with path-based writes.
//!
//! The store is owned by exactly one wizard. Every write is synchronous and
//! visible to the next read; the returned [`OptionChange`] tells the owner
//! which dependent component has to re-render.

use serde_json::Value;
use thiserror::Error;

use crate::config::path::{ButtonField, CounterField, OptionPath};
use crate::config::types::WizardOptions;

/// Errors raised by option reads and writes.
#[derive(Debug, Error)]
pub enum OptionError {
    #[error("Unrecognized option path '{path}'")]
    UnrecognizedPath { path: String },

    #[error("Invalid value for option '{path}': {source}")]
    InvalidValue {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Narrowest re-render a write requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionChange {
    /// Stored; nothing re-renders until it is next read.
    Inert,
    /// Title bar visibility flipped.
    TitleVisibility,
    /// Menu must be built (`true`) or torn down (`false`).
    Menu { enabled: bool },
    /// The whole button group was replaced.
    Buttons,
    /// A single button attribute changed.
    Button(ButtonField),
    /// The whole counter group was replaced; rebuild it.
    CounterRebuild,
    /// Counter must be built (`true`) or torn down (`false`).
    CounterToggle { enabled: bool },
    /// A counter sub-option changed; recompute if the counter exists.
    CounterRefresh(CounterField),
}

impl OptionChange {
    fn for_path(path: &OptionPath, options: &WizardOptions) -> Self {
        match path {
            OptionPath::HideTitle => OptionChange::TitleVisibility,
            OptionPath::MenuEnable => OptionChange::Menu {
                enabled: options.menu_enable,
            },
            OptionPath::Buttons => OptionChange::Buttons,
            OptionPath::Button(field) => OptionChange::Button(*field),
            OptionPath::Counter => OptionChange::CounterRebuild,
            OptionPath::CounterField(CounterField::Enable) => OptionChange::CounterToggle {
                enabled: options.counter.enable,
            },
            OptionPath::CounterField(field) => OptionChange::CounterRefresh(*field),
            OptionPath::Validate
            | OptionPath::Debug
            | OptionPath::Effects
            | OptionPath::EffectsEnable
            | OptionPath::EffectGroup(_)
            | OptionPath::EffectGroupEnable(_)
            | OptionPath::Effect(..)
            | OptionPath::EffectField(..)
            | OptionPath::EffectOption(..) => OptionChange::Inert,
        }
    }
}

/// Owned option tree.
#[derive(Debug, Clone, Default)]
pub struct OptionStore {
    options: WizardOptions,
}

impl OptionStore {
    pub fn new(options: WizardOptions) -> Self {
        Self { options }
    }

    /// Current options.
    pub fn options(&self) -> &WizardOptions {
        &self.options
    }

    /// Read the value at a dotted path.
    pub fn get(&self, path: &str) -> Result<Value, OptionError> {
        let parsed: OptionPath = path.parse()?;
        let tree = self.tree(path)?;
        Ok(tree
            .pointer(&pointer_for(&parsed))
            .cloned()
            .unwrap_or(Value::Null))
    }

    /// Write a value at a dotted path.
    ///
    /// The write is applied to a serialized copy of the tree and decoded back,
    /// so a value of the wrong shape leaves the current options untouched.
    pub fn set(&mut self, path: &str, value: Value) -> Result<OptionChange, OptionError> {
        let parsed: OptionPath = path.parse()?;
        let mut tree = self.tree(path)?;

        let mut segments = parsed.segments();
        let leaf = segments.pop().unwrap_or_default();
        let parent_pointer = pointer_from(&segments);
        let parent = tree
            .pointer_mut(&parent_pointer)
            .and_then(Value::as_object_mut)
            .ok_or_else(|| OptionError::UnrecognizedPath {
                path: path.to_string(),
            })?;
        parent.insert(leaf, value);

        let options: WizardOptions =
            serde_json::from_value(tree).map_err(|source| OptionError::InvalidValue {
                path: path.to_string(),
                source,
            })?;
        self.options = options;

        let change = OptionChange::for_path(&parsed, &self.options);
        tracing::debug!(path = %parsed, ?change, "Option updated");
        Ok(change)
    }

    fn tree(&self, path: &str) -> Result<Value, OptionError> {
        serde_json::to_value(&self.options).map_err(|source| OptionError::InvalidValue {
            path: path.to_string(),
            source,
        })
    }
}

fn pointer_for(path: &OptionPath) -> String {
    pointer_from(&path.segments())
}

/// JSON pointer for `segments`, escaped per RFC 6901 (`~` as `~0`, `/` as `~1`).
fn pointer_from(segments: &[String]) -> String {
    segments
        .iter()
        .map(|s| format!("/{}", s.replace('~', "~0").replace('/', "~1")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{ButtonType, CounterType, EffectDuration};
    use serde_json::json;

    #[test]
    fn button_text_is_a_narrow_change() {
        let mut store = OptionStore::default();
        let change = store.set("buttons.cancelText", json!("Abort")).unwrap();
        assert_eq!(change, OptionChange::Button(ButtonField::CancelText));
        assert_eq!(store.options().buttons.cancel_text, "Abort");
        assert_eq!(store.options().buttons.next_text, "Next");
    }

    #[test]
    fn writes_are_visible_to_reads() {
        let mut store = OptionStore::default();
        store.set("counter.startCount", json!(false)).unwrap();
        assert_eq!(store.get("counter.startCount").unwrap(), json!(false));
        assert_eq!(store.get("hideTitle").unwrap(), json!(false));
    }

    #[test]
    fn counter_enable_toggles() {
        let mut store = OptionStore::default();
        assert_eq!(
            store.set("counter.enable", json!(true)).unwrap(),
            OptionChange::CounterToggle { enabled: true }
        );
        assert_eq!(
            store.set("counter.type", json!("percentage")).unwrap(),
            OptionChange::CounterRefresh(CounterField::Type)
        );
        assert_eq!(
            store.options().counter.counter_type,
            CounterType::Percentage
        );
    }

    #[test]
    fn whole_counter_group_rebuilds() {
        let mut store = OptionStore::default();
        let change = store
            .set("counter", json!({ "enable": true, "startHide": true }))
            .unwrap();
        assert_eq!(change, OptionChange::CounterRebuild);
        assert!(store.options().counter.start_hide);
        // Unspecified members fall back to their defaults.
        assert_eq!(store.options().counter.append_text, "Complete");
    }

    #[test]
    fn menu_enable_reports_new_value() {
        let mut store = OptionStore::default();
        assert_eq!(
            store.set("menuEnable", json!(true)).unwrap(),
            OptionChange::Menu { enabled: true }
        );
        assert_eq!(
            store.set("menuEnable", json!(false)).unwrap(),
            OptionChange::Menu { enabled: false }
        );
    }

    #[test]
    fn effect_writes_are_inert() {
        let mut store = OptionStore::default();
        assert_eq!(
            store.set("effects.enable", json!(true)).unwrap(),
            OptionChange::Inert
        );
        assert_eq!(
            store.set("effects.step.hide.type", json!("fade")).unwrap(),
            OptionChange::Inert
        );
        assert_eq!(
            store.set("effects.title.show.duration", json!(120)).unwrap(),
            OptionChange::Inert
        );
        assert_eq!(
            store
                .set("effects.title.show.options.direction", json!("up"))
                .unwrap(),
            OptionChange::Inert
        );
        let effects = &store.options().effects;
        assert!(effects.enable);
        assert_eq!(effects.step.hide.kind, "fade");
        assert_eq!(effects.title.show.duration, EffectDuration::Millis(120));
        assert_eq!(effects.title.show.options["direction"], json!("up"));
    }

    #[test]
    fn unrecognized_path_is_rejected() {
        let mut store = OptionStore::default();
        let err = store.set("buttons.okText", json!("OK")).unwrap_err();
        assert!(matches!(err, OptionError::UnrecognizedPath { path } if path == "buttons.okText"));
        assert!(store.get("nope").is_err());
    }

    #[test]
    fn wrong_value_shape_leaves_options_untouched() {
        let mut store = OptionStore::default();
        let err = store.set("buttons.cancelType", json!("explode")).unwrap_err();
        assert!(matches!(err, OptionError::InvalidValue { .. }));
        assert_eq!(store.options().buttons.cancel_type, ButtonType::Button);

        let err = store.set("counter.startCount", json!("yes")).unwrap_err();
        assert!(matches!(err, OptionError::InvalidValue { .. }));
        assert!(store.options().counter.start_count);
    }

    #[test]
    fn effect_option_keys_with_pointer_characters_read_back() {
        let mut store = OptionStore::default();
        store
            .set("effects.step.hide.options.a/b", json!(7))
            .unwrap();
        store
            .set("effects.step.hide.options.x~y", json!("tilde"))
            .unwrap();

        assert_eq!(store.get("effects.step.hide.options.a/b").unwrap(), json!(7));
        assert_eq!(
            store.get("effects.step.hide.options.x~y").unwrap(),
            json!("tilde")
        );
        let options = &store.options().effects.step.hide.options;
        assert_eq!(options["a/b"], json!(7));
        assert_eq!(options["direction"], json!("left"));
    }
}
