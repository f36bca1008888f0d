mod cmd;
mod modules;

use crate::cmd::{
    config::{self, ConfigArgs},
    daily::{self, DailyArgs},
    gen::{self, GenArgs},
    init::{self, InitArgs},
    list::{self, ListArgs},
    run::{self, RunArgs},
    submit::{self, SubmitArgs},
};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::{env, str::FromStr};
use tokio::runtime::Builder;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{self, time::OffsetTime},
};

#[derive(Debug, Parser)]
#[command(name = "leetcode_cli")]
#[command(about = "LeetCode CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Init(InitArgs),
    Config(ConfigArgs),
    List(ListArgs),
    Daily(DailyArgs),
    Gen(GenArgs),
    Run(RunArgs),
    Submit(SubmitArgs),
}

fn main() {
    dotenv().ok();

    let log_level = env::var("RUST_LOG").unwrap_or(String::from("info"));
    let filter = EnvFilter::builder()
        .with_default_directive(
            LevelFilter::from_str(&log_level)
                .expect("couldn't parse specified log level")
                .into(),
        )
        .from_env_lossy();
    let format = fmt::format()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_timer(OffsetTime::local_rfc_3339().unwrap());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(format)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    let runtime = Builder::new_multi_thread().enable_all().build().unwrap();

    match Cli::parse().command {
        Commands::Init(args) => runtime.block_on(init::run(args)),
        Commands::Config(args) => runtime.block_on(config::run(args)),
        Commands::List(args) => runtime.block_on(list::run(args)),
        Commands::Daily(args) => runtime.block_on(daily::run(args)),
        Commands::Gen(args) => runtime.block_on(gen::run(args)),
        Commands::Run(args) => runtime.block_on(run::run(args)),
        Commands::Submit(args) => runtime.block_on(submit::run(args)),
    }
    .expect("command failed");
}
