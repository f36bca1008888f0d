use crate::modules::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use leetcode_cli_libs::leetcode::client::{LeetCodeClient, Site};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Args)]
pub struct InitArgs {}

/// サイトと Cookie を対話で受け取り、検証してから保存する
pub async fn run(_args: InitArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    print!("Choose site (cn/com) [default: cn]: ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let site = line.trim();
    let site = if site.is_empty() {
        Site::Cn
    } else {
        Site::from_str(site).map_err(anyhow::Error::msg)?
    };

    println!("Please paste your LeetCode cookie (from browser developer tools):");
    println!("(Include LEETCODE_SESSION and csrftoken)");
    print!("> ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let cookie = line.trim();

    println!();
    println!("Verifying your cookie...");

    let config = Config {
        site,
        cookie: String::from(cookie),
        ..Config::default()
    };
    let client = LeetCodeClient::new(config.site, &config.cookie)?;
    let user = client
        .fetch_user_status()
        .await
        .context("couldn't reach leetcode, check your network and cookie")?;

    if !user.is_signed_in {
        anyhow::bail!("cookie is invalid or expired (not signed in), try again with a fresh one");
    }

    println!("✅ Welcome, {}!", user.username);

    config.save().await?;
    println!("🎉 Configuration saved successfully!");

    Ok(())
}
