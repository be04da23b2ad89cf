//! `heroicon` binary

use anyhow::Context;
use clap::ArgMatches;
use heroicon_cli::{cli, logging, run_publish, run_resolve, run_search, run_serve, HeroiconConfig};
use heroicon_index::StyleOutcome;
use std::path::PathBuf;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    logging::init(matches.get_flag("log-json"));

    match run(&matches).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => HeroiconConfig::load(path)?,
        None => HeroiconConfig::default(),
    };

    match matches.subcommand() {
        Some(("publish", args)) => {
            let force = args.get_flag("force");
            let outcome = run_publish(&config, force)?;

            println!("Indexes:");
            for report in outcome.indexes.styles() {
                match &report.outcome {
                    StyleOutcome::Written { path, count } => {
                        println!("  {}: {} icons -> {}", report.style, count, path.display());
                    }
                    StyleOutcome::Skipped(reason) => {
                        println!("  {}: skipped ({})", report.style, reason);
                    }
                }
            }
            println!(
                "Published: {} copied, {} skipped",
                outcome.assets.copied, outcome.assets.skipped
            );
            println!("Done.");
            Ok(ExitCode::SUCCESS)
        }
        Some(("serve", _)) => {
            run_serve(&config, async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!("Failed to listen for shutdown signal: {}", e);
                    std::future::pending::<()>().await;
                }
            })
            .await
            .context("server failed")?;
            Ok(ExitCode::SUCCESS)
        }
        Some(("resolve", args)) => {
            let value = args
                .get_one::<String>("value")
                .map(String::as_str)
                .unwrap_or_default();

            match run_resolve(&config, value) {
                Some(url) => {
                    println!("{url}");
                    Ok(ExitCode::SUCCESS)
                }
                None => Ok(ExitCode::FAILURE),
            }
        }
        Some(("search", args)) => {
            let style = args
                .get_one::<String>("style")
                .map(String::as_str)
                .unwrap_or_default();
            let query = args
                .get_one::<String>("query")
                .map(String::as_str)
                .unwrap_or_default();

            for name in run_search(&config, style, query)? {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::FAILURE),
    }
}
