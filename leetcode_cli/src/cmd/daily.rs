use crate::cmd::resolve_save_dir;
use crate::modules::config::Config;
use crate::modules::solution::generator::SolutionGenerator;
use anyhow::{Context, Result};
use clap::Args;
use leetcode_cli_libs::leetcode::client::LeetCodeClient;
use std::ffi::OsString;

#[derive(Debug, Args)]
pub struct DailyArgs {
    #[arg(long)]
    save_dir: Option<OsString>,
}

/// 本日のデイリーチャレンジを取得して解答ファイルを生成する
pub async fn run(args: DailyArgs) -> Result<()> {
    let config = Config::load().await.with_context(|| {
        let message = "no configuration found, run `leetcode_cli init` first";
        tracing::error!(message);
        message
    })?;
    let client = LeetCodeClient::new(config.site, &config.cookie)?;

    tracing::info!("fetching the daily challenge");
    let daily = client.fetch_daily_challenge().await?;
    let question = &daily.question;
    println!(
        "📅 Today's question ({}): [{}] {} ({})",
        daily.date,
        question.question_frontend_id,
        question.title,
        question.difficulty,
    );

    let detail = client.fetch_problem_detail(&question.title_slug).await?;
    let generator = SolutionGenerator::new(
        &detail,
        resolve_save_dir(args.save_dir),
        config.site,
        config.language(),
    );
    let path = generator.generate().await?;

    println!("Generated {}", path.display());
    println!("Done! Happy coding! 🚀");

    Ok(())
}
