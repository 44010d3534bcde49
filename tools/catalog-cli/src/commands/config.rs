//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.info(&format!("Loaded from {}", path.display())),
        None => ctx.output.info("No config file found, using defaults"),
    }

    ctx.output.section("index");
    ctx.output.kv("index_name", &ctx.config.index.index_name);
    ctx.output.kv("suggest_field", &ctx.config.index.suggest_field);
    ctx.output.kv("weight", &ctx.config.index.weight.to_string());
    ctx.output.kv("min_keyword_len", &ctx.config.index.min_keyword_len.to_string());

    ctx.output.section("suggest");
    ctx.output.kv("size", &ctx.config.suggest.size.to_string());
    ctx.output.kv("pre_tag", &ctx.config.suggest.pre_tag);
    ctx.output.kv("post_tag", &ctx.config.suggest.post_tag);

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        let overwrite = !ctx.output.is_json()
            && Confirm::new()
                .with_prompt(format!("{} already exists. Overwrite?", config_path.display()))
                .default(false)
                .interact()
                .unwrap_or(false);

        if !overwrite {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
    }

    fs::write(&config_path, generate_default_config())?;
    tracing::info!(path = %config_path.display(), "wrote default config");

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.check();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<serde_json::Value> {
    let parts: Vec<&str> = key.split('.').collect();

    let value = match parts.as_slice() {
        ["index", "index_name"] => config.index.index_name.clone().into(),
        ["index", "suggest_field"] => config.index.suggest_field.clone().into(),
        ["index", "weight"] => config.index.weight.into(),
        ["index", "min_keyword_len"] => config.index.min_keyword_len.into(),
        ["suggest", "size"] => config.suggest.size.into(),
        ["suggest", "pre_tag"] => config.suggest.pre_tag.clone().into(),
        ["suggest", "post_tag"] => config.suggest.post_tag.clone().into(),
        _ => bail!("Unknown config key: {}", key),
    };

    Ok(value)
}
