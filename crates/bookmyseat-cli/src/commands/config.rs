use super::{config_path, load_config, prompts};
use crate::output::Output;
use crate::progress::is_interactive;
use bookmyseat_config::{Config, Profile};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

pub enum ConfigAction {
    Show,
    Init { profile: Profile, force: bool },
}

pub fn run_config(action: ConfigAction, explicit: Option<&Path>, output: &Output) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(explicit, output),
        ConfigAction::Init { profile, force } => init_config(explicit, profile, force, output),
    }
}

fn section(title: &str, rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![Cell::new(title).fg(Color::Cyan).add_attribute(Attribute::Bold)]);
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn check(ok: bool) -> String {
    if ok {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

fn show_config(explicit: Option<&Path>, output: &Output) -> Result<()> {
    let path = config_path(explicit);
    let config = match load_config(explicit) {
        Ok(config) => config,
        Err(e) => {
            report_unreadable(&path, &e.to_string(), output);
            return Ok(());
        }
    };
    let validation = config.validate();
    let movie_url = config.services.movie_base_url();
    let review_url = config.services.review_base_url();

    if !output.is_human() {
        output.json(&json!({
            "file": path.display().to_string(),
            "fileExists": path.exists(),
            "config": serde_json::to_value(&config)?,
            "resolved": {
                "movieService": movie_url.as_ref().ok(),
                "reviewService": review_url.as_ref().ok(),
            },
            "valid": validation.is_ok(),
            "error": validation.as_ref().err().map(|e| e.to_string()),
        }));
        return Ok(());
    }
    if output.is_quiet() {
        return Ok(());
    }

    if !path.exists() {
        output.warn(format!("Configuration file not found at: {}", path.display()));
        output.info("Showing development defaults. Create a file with 'bookmyseat config init'.");
    }

    let resolved = |url: Result<String, bookmyseat_config::ConfigError>| match url {
        Ok(url) => url,
        Err(e) => e.to_string().red().to_string(),
    };

    println!(
        "{}",
        section(
            "Services",
            vec![
                ("Config File", path.display().to_string()),
                ("Movie service", config.services.movie_service_url.clone()),
                ("Review service", config.services.review_service_url.clone()),
                ("Origin", config.services.origin.clone().unwrap_or_else(|| "-".to_string())),
                ("Movie base URL", resolved(movie_url)),
                ("Review base URL", resolved(review_url)),
            ],
        )
    );
    println!(
        "{}",
        section(
            "Reviews",
            vec![
                ("Page size", config.reviews.page_size.to_string()),
                ("Refresh delay", format!("{} ms", config.reviews.refresh_delay_ms)),
                ("Success message", format!("{} ms", config.reviews.success_message_ms)),
            ],
        )
    );
    println!(
        "{}",
        section(
            "Diagnostics",
            vec![
                ("Tracing headers", check(config.tracing.enabled)),
                ("Log level", config.logging.level.clone()),
                (
                    "Log file",
                    config
                        .logging
                        .file
                        .as_ref()
                        .map(|f| f.display().to_string())
                        .unwrap_or_else(|| "stderr".to_string()),
                ),
            ],
        )
    );

    match validation {
        Ok(()) => output.success("Configuration is valid"),
        Err(e) => output.error(format!("Configuration is invalid: {}", e)),
    }
    Ok(())
}

fn report_unreadable(path: &Path, error: &str, output: &Output) {
    if !output.is_human() {
        output.json(&json!({
            "file": path.display().to_string(),
            "fileExists": path.exists(),
            "valid": false,
            "error": error,
        }));
        return;
    }
    output.error(error);
    output.info("Fix the file or replace it with 'bookmyseat config init --force'.");
}

fn init_config(explicit: Option<&Path>, profile: Profile, force: bool, output: &Output) -> Result<()> {
    let path = config_path(explicit);

    if path.exists() && !force {
        let overwrite = is_interactive()
            && output.is_human()
            && prompts::prompt_yes_no(&format!("{} already exists. Overwrite?", path.display()), false)?;
        if !overwrite {
            return Err(eyre!(
                "Configuration already exists at {} (use --force to overwrite)",
                path.display()
            ));
        }
    }

    let config = Config::for_profile(profile);
    config
        .save_to_file(&path)
        .map_err(|e| eyre!("Failed to save config to {}: {}", path.display(), e))?;

    output.success(format!("Wrote {:?} configuration to {}", profile, path.display()));
    if profile == Profile::Production && config.services.origin.is_none() {
        output.info("Set services.origin (or BOOKMYSEAT_ORIGIN) so the relative /api paths can be resolved.");
    }
    Ok(())
}
