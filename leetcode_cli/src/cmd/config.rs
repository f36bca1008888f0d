use crate::modules::config::Config;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use leetcode_cli_libs::language::Language;
use leetcode_cli_libs::leetcode::client::Site;
use std::str::FromStr;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: Option<ConfigAction>,
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Set a configuration value (keys: language, site, cookie)
    Set { key: String, value: String },
}

pub async fn run(args: ConfigArgs) -> Result<()> {
    match args.action {
        None => show().await,
        Some(ConfigAction::Set { key, value }) => set(&key, &value).await,
    }
}

async fn show() -> Result<()> {
    let config = Config::load().await.with_context(|| {
        let message = "no configuration found, run `leetcode_cli init` first";
        tracing::error!(message);
        message
    })?;

    println!("Current configuration:");
    println!("  Language: {}", config.language);
    println!("  Site:     {}", config.site);

    let cookie = if config.cookie.is_empty() {
        String::from("Not set")
    } else if config.cookie.chars().count() > 20 {
        let preview: String = config.cookie.chars().take(20).collect();
        format!("{}...", preview)
    } else {
        config.cookie.clone()
    };
    println!("  Cookie:   {}", cookie);

    Ok(())
}

async fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load().await.with_context(|| {
        let message = "no configuration found, run `leetcode_cli init` first";
        tracing::error!(message);
        message
    })?;

    match key.to_ascii_lowercase().as_str() {
        "language" | "lang" => {
            if Language::from_slug(value).is_none() {
                tracing::warn!(
                    "unknown language [{}], the default language template will be used",
                    value
                );
            }
            config.language = String::from(value);
        }
        "site" => {
            config.site = Site::from_str(value).map_err(anyhow::Error::msg)?;
        }
        "cookie" => {
            config.cookie = String::from(value);
        }
        _ => anyhow::bail!("unknown configuration key: {}", key),
    }

    config.save().await?;
    println!("✅ Updated {} to '{}'", key, value);

    Ok(())
}
