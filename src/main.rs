//! ror-engine binary entry point.
//!
//! Usage: `ror-engine <problem-file> [aggregator]`
//!
//! Loads a JSON or YAML problem, ranks it and prints the result as JSON on
//! stdout. All logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use ror_engine::adapters::{FileDatasetStore, GoodLpSolver, TracingProgressReporter};
use ror_engine::application::{SolveProblemCommand, SolveProblemHandler};
use ror_engine::config::AppConfig;
use ror_engine::domain::aggregation::AggregatorKind;

const USAGE: &str = "usage: ror-engine <problem-file> [default|weighted|borda|copeland]";

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    // Logs to stderr only; stdout carries the result
    let filter = config
        .logging
        .env_filter()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if config.logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .init();
    }

    let mut args = std::env::args().skip(1);
    let Some(problem_path) = args.next().map(PathBuf::from) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };
    let aggregator = match args.next().map(|name| name.parse::<AggregatorKind>()) {
        None => None,
        Some(Ok(kind)) => Some(kind),
        Some(Err(e)) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let store = FileDatasetStore::new().with_defaults(config.solver.default_parameters());
    let handler = SolveProblemHandler::new(Arc::new(GoodLpSolver::new()), Arc::new(store))
        .with_max_alpha_values(config.solver.max_number_of_alpha_values);
    let command = SolveProblemCommand {
        problem_path,
        aggregator,
    };

    let solved = match handler
        .handle(command, Arc::new(TracingProgressReporter::new()), None)
        .await
    {
        Ok(solved) => solved,
        Err(e) => {
            tracing::error!(code = %e.code(), "{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = &solved.result;
    let output = serde_json::json!({
        "solve_id": result.solve_id,
        "aggregator": result.aggregator,
        "final_rank": result.final_rank(),
        "unresolved_rank": result.aggregation.final_rank.unresolved,
        "intermediate_ranks": result.intermediate_ranks,
        "table": result.result_table().rounded(result.parameters.precision),
    });
    match serde_json::to_string_pretty(&output) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to render result: {e}");
            ExitCode::FAILURE
        }
    }
}
