use crate::modules::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use leetcode_cli_libs::leetcode::client::LeetCodeClient;
use leetcode_cli_libs::leetcode::model::SolveStatus;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page number
    #[arg(short, long, default_value_t = 1)]
    page: u32,
    /// Questions per page
    #[arg(short, long, default_value_t = 50)]
    limit: u32,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let config = Config::load().await.with_context(|| {
        let message = "no configuration found, run `leetcode_cli init` first";
        tracing::error!(message);
        message
    })?;
    let client = LeetCodeClient::new(config.site, &config.cookie)?;

    let page = args.page.max(1);
    let limit = args.limit.max(1);
    let skip = (page - 1) * limit;

    tracing::info!("fetching questions (page {}, {} per page)", page, limit);
    let problems = client.fetch_problems(limit, skip).await?;

    println!("{:6} {:6} {:<56} {}", "Status", "ID", "Title", "Difficulty");
    println!("{:6} {:6} {:<56} {}", "------", "--", "-----", "----------");
    for problem in &problems {
        let mark = match problem.solve_status() {
            SolveStatus::Solved => "✓",
            SolveStatus::Attempted => "?",
            _ => " ",
        };
        println!(
            "[{}]    {:6} {:<56} {}",
            mark,
            problem.question_frontend_id,
            problem.display_title(),
            problem.difficulty,
        );
    }
    println!();
    println!("(Show more: leetcode_cli list -p {})", page + 1);

    Ok(())
}
