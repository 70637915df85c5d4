//! CLI for linesheet — converts a Shopify product export into an InDesign
//! data-merge CSV and downloads the referenced photos.
//!
//! Usage:
//!   linesheet shopify.csv indesign.csv 0.5 ./assets
//!   linesheet shopify.csv indesign.csv 0.5 ./assets --skip-unsupported
//!   linesheet shopify.csv out.csv 0.5 ./assets --dump-sets   # inspect parsing

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};

use linesheet::download::fetch_all;
use linesheet::export::write_linesheet_csv;
use linesheet::pipeline::{build_entries, ErrorPolicy};
use linesheet::shopify::parse_catalog;

#[derive(Parser)]
#[command(name = "linesheet", version, about = "Shopify export → InDesign data-merge line sheet")]
struct Cli {
    /// Shopify product export CSV
    input: PathBuf,

    /// InDesign data-merge CSV to write
    output: PathBuf,

    /// Wholesale discount factor applied to retail prices (e.g. 0.5)
    discount: f64,

    /// Directory where photo assets are downloaded and linked from
    asset_root: PathBuf,

    /// Max concurrent photo downloads
    #[arg(long, default_value_t = 10)]
    jobs: usize,

    /// Skip sets that fit no supported layout instead of aborting
    #[arg(long)]
    skip_unsupported: bool,

    /// Parse and write the line sheet without downloading photos
    #[arg(long)]
    no_download: bool,

    /// Print the parsed catalog as JSON and exit
    #[arg(long)]
    dump_sets: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> linesheet::Result<()> {
    info!(path = %cli.input.display(), "reading Shopify export");
    let text = fs::read_to_string(&cli.input)?;

    let catalog = parse_catalog(&text, cli.discount, &cli.asset_root)?;
    info!(
        sets = catalog.sets.len(),
        assets = catalog.assets.len(),
        "parsed product sets"
    );

    if cli.dump_sets {
        println!("{}", serde_json::to_string_pretty(&catalog.sets)?);
        return Ok(());
    }

    let policy = if cli.skip_unsupported {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    };
    let outcome = build_entries(&catalog.sets, policy)?;
    for skipped in &outcome.skipped {
        warn!(handle = %skipped.handle, reason = %skipped.reason, "set left out of the line sheet");
    }

    fs::write(&cli.output, write_linesheet_csv(&outcome.entries))?;
    info!(
        path = %cli.output.display(),
        entries = outcome.entries.len(),
        "wrote line sheet"
    );

    if !cli.no_download {
        fs::create_dir_all(&cli.asset_root)?;
        info!(
            assets = catalog.assets.len(),
            jobs = cli.jobs,
            "downloading photo assets"
        );
        let report = fetch_all(&catalog.assets, cli.jobs)?;
        info!(
            fetched = report.fetched,
            cached = report.skipped,
            failed = report.failed,
            "downloads finished"
        );
    }

    Ok(())
}
