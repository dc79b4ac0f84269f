//! Command-line interface for aggtest-gen
//!
//! # Usage Examples
//!
//! ```bash
//! # Default fixtures: example_data_log.csv (200000 rows) and
//! # example_data_log.xml (50000 rows), generated concurrently
//! aggtest-gen
//!
//! # Reproducible run with a metrics summary
//! aggtest-gen --seed 42 \
//!   --csv-output visits.csv --csv-rows 1000 \
//!   --xml-output visits.xml --xml-rows 1000 --pretty-xml \
//!   --emit-metrics metrics.json
//!
//! # Verbose progress
//! RUST_LOG=debug aggtest-gen --sequential
//! ```

use aggtest_gen::{dispatch, dispatch_sequential, WorkItem};
use aggtest_populate::CommonPopulateArgs;
use aggtest_populate_csv::CSVPopulateArgs;
use aggtest_populate_xml::XMLPopulateArgs;
use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(name = "aggtest-gen")]
#[command(about = "Generate random CSV and XML fixtures for aggregation tests")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    csv: CSVPopulateArgs,

    #[command(flatten)]
    xml: XMLPopulateArgs,

    #[command(flatten)]
    common: CommonPopulateArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let seed = cli.common.seed.unwrap_or_else(rand::random);

    tracing::info!("Start (seed={})", seed);

    let items = vec![
        WorkItem::csv(cli.csv.csv_output, cli.csv.csv_rows),
        WorkItem::xml(cli.xml.xml_output, cli.xml.xml_rows).with_indent(cli.xml.pretty_xml),
    ];

    let report = if cli.common.sequential {
        dispatch_sequential(items, seed)
    } else {
        dispatch(items, seed).await
    };

    if let Some(path) = &cli.common.emit_metrics {
        report
            .write_metrics(path)
            .with_context(|| format!("Failed to write metrics to {path:?}"))?;
    }

    tracing::info!("Done");

    let failures: Vec<String> = report
        .failures()
        .filter_map(|o| {
            o.result
                .as_ref()
                .err()
                .map(|e| format!("{}: {e}", o.item.path.display()))
        })
        .collect();
    if !failures.is_empty() {
        anyhow::bail!(
            "{} of {} generation tasks failed: {}",
            failures.len(),
            report.outcomes.len(),
            failures.join("; ")
        );
    }

    Ok(())
}
