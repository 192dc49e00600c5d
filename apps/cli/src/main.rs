mod commands;
mod config;
mod main_lib;

use config::Config;
use main_lib::{build_planner, init_tracing, run};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    let mut planner = build_planner(&config)?;

    run(
        &mut planner,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
