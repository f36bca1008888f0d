use crate::modules::config::Config;
use crate::modules::render;
use crate::modules::solution::reader;
use anyhow::{Context, Result};
use clap::Args;
use leetcode_cli_libs::leetcode::client::LeetCodeClient;
use leetcode_cli_libs::leetcode::judge::JudgeSession;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Solution file to run
    file: PathBuf,
}

/// 解答ファイルをサンプル入力に対してドライランする。採点はされない。
pub async fn run(args: RunArgs) -> Result<()> {
    let slug = reader::read_slug(&args.file)
        .await
        .with_context(|| format!("couldn't determine the problem of {}", args.file.display()))?;
    let language = reader::read_language(&args.file).await?;
    let code = reader::read_code(&args.file)
        .await
        .with_context(|| format!("couldn't extract code from {}", args.file.display()))?;

    let config = Config::load().await.with_context(|| {
        let message = "no configuration found, run `leetcode_cli init` first";
        tracing::error!(message);
        message
    })?;
    let client = LeetCodeClient::new(config.site, &config.cookie)?;

    tracing::info!("fetching question info for {}", slug);
    let detail = client.fetch_problem_detail(&slug).await?;

    println!("🚀 Sending code ({}) to the judge...", language.slug());
    let session = JudgeSession::new(&client);
    let outcome = session.run(&detail, &code, language).await?;

    println!();
    render::render_run_outcome(&outcome);

    Ok(())
}
