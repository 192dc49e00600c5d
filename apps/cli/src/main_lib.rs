use std::sync::Arc;

use investment_planner_connect::InvestmentApiClient;
use investment_planner_core::investments::{InvestmentGateway, InvestmentPlanner};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::commands::{execute, Command, Flow, HELP};
use crate::config::{Config, LogFormat};

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the screen, logs go to stderr
    match log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn build_planner(config: &Config) -> anyhow::Result<InvestmentPlanner> {
    let client = InvestmentApiClient::with_timeout(&config.api_url, config.request_timeout)?;
    tracing::info!("Using investments API at {}", client.base_url());
    let gateway: Arc<dyn InvestmentGateway> = Arc::new(client);
    Ok(InvestmentPlanner::new(gateway))
}

/// Runs the event loop: one command per input line until `quit` or end of input.
pub async fn run<R, W>(planner: &mut InvestmentPlanner, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    planner.load().await;
    write_screen(planner, &mut writer).await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let flow = match line.parse::<Command>() {
            Ok(command) => execute(planner, command).await,
            Err(e) => {
                writer
                    .write_all(format!("error: {}\n{}\n", e, HELP).as_bytes())
                    .await?;
                writer.flush().await?;
                continue;
            }
        };
        match flow {
            Flow::Render => write_screen(planner, &mut writer).await?,
            Flow::Help => {
                writer.write_all(format!("{}\n", HELP).as_bytes()).await?;
                writer.flush().await?;
            }
            Flow::Quit => break,
        }
    }
    Ok(())
}

async fn write_screen<W: AsyncWrite + Unpin>(
    planner: &InvestmentPlanner,
    writer: &mut W,
) -> anyhow::Result<()> {
    writer
        .write_all(format!("{}\n", planner.view()).as_bytes())
        .await?;
    writer.flush().await?;
    Ok(())
}
