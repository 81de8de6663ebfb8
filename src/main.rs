use ffscript::{
    cli::Cli,
    config,
    planner::{self, PlanOutcome},
    tools,
};

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

fn run(cli: &Cli) -> Result<()> {
    let file_config = config::load_config_or_default(cli.config.as_deref())?;
    let config = config::resolve(cli, &file_config)?;

    let ffmpeg = tools::check_tool(&config.ffmpeg);
    if !ffmpeg.available {
        tracing::warn!(
            "{} was not found on PATH; the script will fail where it is not installed",
            ffmpeg.name
        );
    }

    match planner::generate_script(&config)? {
        PlanOutcome::Written { .. } => {}
        PlanOutcome::Preview { content, .. } => print!("{}", content),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "ffscript=debug,ffscript_script=debug,ffscript_common=debug".to_string()
        } else {
            "ffscript=info,ffscript_script=info,ffscript_common=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<ffscript_common::Error>() {
            Some(ffscript_common::Error::NoFiles) => {
                tracing::error!("No video files to process. exiting...");
            }
            _ => tracing::error!("{:#}", e),
        }
        std::process::exit(1);
    }
}
