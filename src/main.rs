use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use account_holder::{AccountRecord, AccountSession, MemoryStorage, SessionPlan};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: account-holder [session].json [log_level:optional] > [output].json");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let plan = read_session_plan(path).await?;
    let mut session = AccountSession::new(MemoryStorage::new(plan.seed));

    for planned in plan.saves {
        let identifier = session.persist(planned.account, planned.identifier).await?;
        info!("Saved account [{identifier}]");
    }

    match session.resolve().await? {
        Some(identifier) => info!("Account resolved to [{identifier}]"),
        None => info!("Account lookup unavailable for in-memory storage")
    }

    write_account_to_stdout(session.restore().await?)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Because we are doing stdout redirection, we will need to utilize stderr to display logging
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn read_session_plan(path: &str) -> Result<SessionPlan> {
    let content = tokio::fs::read_to_string(path).await
        .with_context(|| format!("Error opening session plan at path: {path}"))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Error parsing session plan at path: {path}"))
}

fn write_account_to_stdout(account: Option<AccountRecord>) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, &account)?;
    writeln!(output)?;

    output.flush()?;

    Ok(())
}
