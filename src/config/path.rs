//! Typed union of every recognized option path.
//!
//! Dotted paths (`counter.startCount`, `effects.step.hide.type`) are parsed
//! once at the boundary. Anything outside this union is rejected with
//! [`OptionError::UnrecognizedPath`] instead of being stored inertly.

use std::fmt;
use std::str::FromStr;

use super::store::OptionError;
use super::types::{EffectGroup, EffectPhase};

/// Field inside the `buttons` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonField {
    CancelHide,
    CancelType,
    FinishType,
    CancelText,
    PreviousText,
    NextText,
    FinishText,
}

impl ButtonField {
    const ALL: [(ButtonField, &'static str); 7] = [
        (ButtonField::CancelHide, "cancelHide"),
        (ButtonField::CancelType, "cancelType"),
        (ButtonField::FinishType, "finishType"),
        (ButtonField::CancelText, "cancelText"),
        (ButtonField::PreviousText, "previousText"),
        (ButtonField::NextText, "nextText"),
        (ButtonField::FinishText, "finishText"),
    ];

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().find(|(_, k)| *k == key).map(|(f, _)| *f)
    }

    pub fn key(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(f, _)| *f == self)
            .map(|(_, k)| *k)
            .unwrap_or_default()
    }
}

/// Field inside the `counter` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterField {
    Enable,
    Type,
    Progressbar,
    StartCount,
    StartHide,
    FinishCount,
    FinishHide,
    AppendText,
    OrientText,
}

impl CounterField {
    const ALL: [(CounterField, &'static str); 9] = [
        (CounterField::Enable, "enable"),
        (CounterField::Type, "type"),
        (CounterField::Progressbar, "progressbar"),
        (CounterField::StartCount, "startCount"),
        (CounterField::StartHide, "startHide"),
        (CounterField::FinishCount, "finishCount"),
        (CounterField::FinishHide, "finishHide"),
        (CounterField::AppendText, "appendText"),
        (CounterField::OrientText, "orientText"),
    ];

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().find(|(_, k)| *k == key).map(|(f, _)| *f)
    }

    pub fn key(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(f, _)| *f == self)
            .map(|(_, k)| *k)
            .unwrap_or_default()
    }
}

/// Field inside one effect spec (`effects.<group>.<phase>.<field>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectField {
    Type,
    Options,
    Duration,
}

impl EffectField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "type" => Some(EffectField::Type),
            "options" => Some(EffectField::Options),
            "duration" => Some(EffectField::Duration),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            EffectField::Type => "type",
            EffectField::Options => "options",
            EffectField::Duration => "duration",
        }
    }
}

/// A recognized option path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionPath {
    Validate,
    Debug,
    HideTitle,
    MenuEnable,
    /// The whole `buttons` group.
    Buttons,
    Button(ButtonField),
    /// The whole `counter` group.
    Counter,
    CounterField(CounterField),
    /// The whole `effects` group.
    Effects,
    EffectsEnable,
    /// `effects.<group>`
    EffectGroup(EffectGroup),
    /// `effects.<group>.enable`
    EffectGroupEnable(EffectGroup),
    /// `effects.<group>.<phase>`
    Effect(EffectGroup, EffectPhase),
    /// `effects.<group>.<phase>.<field>`
    EffectField(EffectGroup, EffectPhase, EffectField),
    /// `effects.<group>.<phase>.options.<key>`
    EffectOption(EffectGroup, EffectPhase, String),
}

impl OptionPath {
    /// Number of dotted segments in the path.
    pub fn depth(&self) -> usize {
        match self {
            OptionPath::Validate
            | OptionPath::Debug
            | OptionPath::HideTitle
            | OptionPath::MenuEnable
            | OptionPath::Buttons
            | OptionPath::Counter
            | OptionPath::Effects => 1,
            OptionPath::Button(_)
            | OptionPath::CounterField(_)
            | OptionPath::EffectsEnable
            | OptionPath::EffectGroup(_) => 2,
            OptionPath::EffectGroupEnable(_) | OptionPath::Effect(..) => 3,
            OptionPath::EffectField(..) => 4,
            OptionPath::EffectOption(..) => 5,
        }
    }

    /// Segments of the path, in the same camelCase spelling the option tree serializes to.
    pub fn segments(&self) -> Vec<String> {
        let parts: Vec<&str> = match self {
            OptionPath::Validate => vec!["validate"],
            OptionPath::Debug => vec!["debug"],
            OptionPath::HideTitle => vec!["hideTitle"],
            OptionPath::MenuEnable => vec!["menuEnable"],
            OptionPath::Buttons => vec!["buttons"],
            OptionPath::Button(field) => vec!["buttons", field.key()],
            OptionPath::Counter => vec!["counter"],
            OptionPath::CounterField(field) => vec!["counter", field.key()],
            OptionPath::Effects => vec!["effects"],
            OptionPath::EffectsEnable => vec!["effects", "enable"],
            OptionPath::EffectGroup(group) => vec!["effects", group.key()],
            OptionPath::EffectGroupEnable(group) => vec!["effects", group.key(), "enable"],
            OptionPath::Effect(group, phase) => vec!["effects", group.key(), phase.key()],
            OptionPath::EffectField(group, phase, field) => {
                vec!["effects", group.key(), phase.key(), field.key()]
            }
            OptionPath::EffectOption(group, phase, key) => {
                vec!["effects", group.key(), phase.key(), "options", key.as_str()]
            }
        };
        parts.into_iter().map(str::to_string).collect()
    }

    fn parse_effects(path: &str, rest: &[&str]) -> Result<Self, OptionError> {
        let unrecognized = || OptionError::UnrecognizedPath {
            path: path.to_string(),
        };

        let Some((&first, rest)) = rest.split_first() else {
            return Ok(OptionPath::Effects);
        };
        if first == "enable" {
            return if rest.is_empty() {
                Ok(OptionPath::EffectsEnable)
            } else {
                Err(unrecognized())
            };
        }

        let group = EffectGroup::ALL
            .into_iter()
            .find(|g| g.key() == first)
            .ok_or_else(unrecognized)?;

        let Some((&second, rest)) = rest.split_first() else {
            return Ok(OptionPath::EffectGroup(group));
        };
        if second == "enable" {
            return if rest.is_empty() {
                Ok(OptionPath::EffectGroupEnable(group))
            } else {
                Err(unrecognized())
            };
        }

        let phase = group
            .phases()
            .iter()
            .copied()
            .find(|p| p.key() == second)
            .ok_or_else(unrecognized)?;

        match rest {
            [] => Ok(OptionPath::Effect(group, phase)),
            [field] => EffectField::from_key(field)
                .map(|f| OptionPath::EffectField(group, phase, f))
                .ok_or_else(unrecognized),
            ["options", key] if !key.is_empty() => {
                Ok(OptionPath::EffectOption(group, phase, key.to_string()))
            }
            _ => Err(unrecognized()),
        }
    }
}

impl FromStr for OptionPath {
    type Err = OptionError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let unrecognized = || OptionError::UnrecognizedPath {
            path: path.to_string(),
        };
        let segments: Vec<&str> = path.split('.').collect();

        match segments.as_slice() {
            ["validate"] => Ok(OptionPath::Validate),
            ["debug"] => Ok(OptionPath::Debug),
            ["hideTitle"] | ["titleHide"] => Ok(OptionPath::HideTitle),
            ["menuEnable"] => Ok(OptionPath::MenuEnable),
            ["buttons"] => Ok(OptionPath::Buttons),
            ["buttons", field] => ButtonField::from_key(field)
                .map(OptionPath::Button)
                .ok_or_else(unrecognized),
            ["counter"] => Ok(OptionPath::Counter),
            ["counter", field] => CounterField::from_key(field)
                .map(OptionPath::CounterField)
                .ok_or_else(unrecognized),
            ["effects", rest @ ..] => Self::parse_effects(path, rest),
            _ => Err(unrecognized()),
        }
    }
}

impl fmt::Display for OptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> OptionPath {
        path.parse().unwrap()
    }

    #[test]
    fn parses_scalars_and_groups() {
        assert_eq!(parse("validate"), OptionPath::Validate);
        assert_eq!(parse("titleHide"), OptionPath::HideTitle);
        assert_eq!(parse("counter"), OptionPath::Counter);
        assert_eq!(
            parse("buttons.cancelText"),
            OptionPath::Button(ButtonField::CancelText)
        );
        assert_eq!(
            parse("counter.progressbar"),
            OptionPath::CounterField(CounterField::Progressbar)
        );
    }

    #[test]
    fn parses_effect_paths_by_depth() {
        assert_eq!(parse("effects.enable").depth(), 2);
        assert_eq!(
            parse("effects.title"),
            OptionPath::EffectGroup(EffectGroup::Title)
        );
        assert_eq!(
            parse("effects.step.enable"),
            OptionPath::EffectGroupEnable(EffectGroup::Step)
        );
        assert_eq!(
            parse("effects.step.hide.type"),
            OptionPath::EffectField(EffectGroup::Step, EffectPhase::Hide, EffectField::Type)
        );
        assert_eq!(
            parse("effects.step.show.options.direction"),
            OptionPath::EffectOption(EffectGroup::Step, EffectPhase::Show, "direction".into())
        );
    }

    #[test]
    fn rejects_unknown_paths() {
        for path in [
            "",
            "colour",
            "buttons.okText",
            "counter.start",
            "effects.menu.hide",
            "effects.counter.change.speed",
            "effects.enable.now",
            "effects.step.hide.options.",
            "effects.title.show.options.a.b",
            "validate.deep",
        ] {
            let err = path.parse::<OptionPath>().unwrap_err();
            assert!(
                matches!(err, OptionError::UnrecognizedPath { .. }),
                "expected {path:?} to be rejected"
            );
        }
    }

    #[test]
    fn display_round_trips_canonical_spelling() {
        assert_eq!(parse("titleHide").to_string(), "hideTitle");
        assert_eq!(
            parse("effects.menu.change.duration").to_string(),
            "effects.menu.change.duration"
        );
    }
}
