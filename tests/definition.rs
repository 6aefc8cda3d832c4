mod common;

use std::fs;

use common::{Call, RecordingPresenter};
use stepwise::config::{DefinitionError, WizardDefinition};
use stepwise::wizard::{RegistryError, Wizard};

const DEFINITION: &str = r#"
[options]
menuEnable = true
validate = true

[options.counter]
enable = true
type = "percentage"
appendText = ""

[options.buttons]
finishText = "Create account"

[[steps]]
id = "intro"
title = "Welcome"

[[steps]]
id = "account"
title = "Account"

[[steps.fields]]
name = "email"
required = true

[[steps]]
legend = "Review"
"#;

fn write(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wizard.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn wizard_starts_from_a_definition_file() {
    let (_dir, path) = write(DEFINITION);
    let definition = WizardDefinition::load_from(&path).unwrap();
    let mut wizard = Wizard::from_definition(definition, RecordingPresenter::default()).unwrap();

    assert_eq!(wizard.state().total_steps, 3);
    assert_eq!(wizard.title_view().text, "Welcome");
    assert_eq!(wizard.counter_view().unwrap().text, "0%");
    assert_eq!(wizard.menu_view().unwrap().entries[2].title, "Review");
    assert!(wizard
        .presenter()
        .calls
        .iter()
        .any(|c| matches!(c, Call::Menu(Some(_)))));

    wizard.next_step().unwrap();
    assert!(!wizard.next_step().unwrap().moved(), "email is required");

    wizard
        .update_field(&"account".into(), "email", "a@b.c")
        .unwrap();
    wizard.next_step().unwrap();
    assert_eq!(wizard.counter_view().unwrap().percentage, 67);
    assert_eq!(wizard.buttons_view().finish.label, "Create account");
    assert!(wizard.buttons_view().finish.visible);
}

#[test]
fn overrides_apply_before_start() {
    let (_dir, path) = write(DEFINITION);
    let mut definition = WizardDefinition::load_from(&path).unwrap();
    definition
        .set_option("menuEnable", serde_json::json!(false))
        .unwrap();
    definition
        .set_option("counter.type", serde_json::json!("count"))
        .unwrap();

    let wizard = Wizard::from_definition(definition, RecordingPresenter::default()).unwrap();
    assert!(wizard.menu_view().is_none());
    assert_eq!(wizard.counter_view().unwrap().text, "0 of 3");
}

#[test]
fn duplicate_ids_are_rejected() {
    let (_dir, path) = write(
        r#"
[[steps]]
id = "same"

[[steps]]
id = "same"
"#,
    );
    let definition = WizardDefinition::load_from(&path).unwrap();
    let err = Wizard::from_definition(definition, RecordingPresenter::default())
        .err()
        .expect("duplicate ids");
    assert!(matches!(
        err,
        DefinitionError::Registry(RegistryError::DuplicateStepId { .. })
    ));
}

#[test]
fn malformed_options_fail_to_parse() {
    let (_dir, path) = write("[options]\nmenuEnable = \"yes\"\n");
    assert!(matches!(
        WizardDefinition::load_from(&path),
        Err(DefinitionError::Parse { .. })
    ));
}
