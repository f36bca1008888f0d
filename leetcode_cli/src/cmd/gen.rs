use crate::cmd::resolve_save_dir;
use crate::modules::config::Config;
use crate::modules::resolver::{self, Resolution};
use crate::modules::solution::generator::SolutionGenerator;
use anyhow::{Context, Result};
use clap::Args;
use leetcode_cli_libs::leetcode::client::LeetCodeClient;
use std::ffi::OsString;

#[derive(Debug, Args)]
pub struct GenArgs {
    /// Search keyword, exact slug, or frontend id
    query: String,
    /// Restrict the match to an exact frontend id
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    save_dir: Option<OsString>,
}

/// 検索 → 候補の決定 → 解答ファイル生成
pub async fn run(args: GenArgs) -> Result<()> {
    let config = Config::load().await.with_context(|| {
        let message = "no configuration found, run `leetcode_cli init` first";
        tracing::error!(message);
        message
    })?;
    let client = LeetCodeClient::new(config.site, &config.cookie)?;

    println!("Searching for '{}'...", args.query);
    let candidates = client.search_problems(&args.query).await?;

    let target = match resolver::resolve(&args.query, args.id.as_deref(), candidates) {
        Resolution::Selected(target) => {
            println!(
                "🎯 Found: [{}] {}",
                target.question_frontend_id, target.title
            );
            target
        }
        Resolution::Ambiguous(candidates) => {
            println!("Multiple questions found:");
            for candidate in &candidates {
                println!(
                    " - [{}] {}",
                    candidate.question_frontend_id, candidate.title
                );
            }
            println!();
            println!("⚠️  Use the exact id or slug to generate.");
            return Ok(());
        }
        Resolution::Empty => {
            println!("❌ No questions found.");
            return Ok(());
        }
    };

    tracing::info!("fetching details for {}", target.title_slug);
    let detail = client.fetch_problem_detail(&target.title_slug).await?;

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
