use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use stepwise::cli::Cli;
use stepwise::config::WizardDefinition;
use stepwise::logging;
use stepwise::ui::{self, App, ExitReason, TerminalPresenter};
use stepwise::wizard::Wizard;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    if let Some(path) = logging::init_tracing(cli.debug) {
        tracing::info!(log = %path.display(), "Logging initialized");
    }

    let path = cli
        .definition
        .clone()
        .unwrap_or_else(WizardDefinition::default_path);
    let mut definition = WizardDefinition::load_from(&path)?;
    for assignment in &cli.set {
        definition
            .set_option(&assignment.path, assignment.value.clone())
            .with_context(|| format!("Invalid --set {}", assignment.path))?;
    }
    if cli.debug {
        definition.options.debug = true;
    }

    if cli.check {
        let (registry, _) = definition.into_parts()?;
        println!("{}: {} steps", path.display(), registry.len());
        for (index, step) in registry.iter().enumerate() {
            println!("{:>3}. {} ({})", index + 1, step.title(), step.id());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let wizard = Wizard::from_definition(definition, TerminalPresenter::new())?;
    let (app, reason) = ui::run(App::new(wizard)).context("Terminal session failed")?;
    tracing::info!(?reason, "Wizard closed");

    match reason {
        ExitReason::Finished => {
            println!("{}", serde_json::to_string_pretty(&app.form_values())?);
            Ok(ExitCode::SUCCESS)
        }
        ExitReason::Cancelled => {
            eprintln!("Wizard cancelled");
            Ok(ExitCode::FAILURE)
        }
        ExitReason::Quit => Ok(ExitCode::SUCCESS),
    }
}
