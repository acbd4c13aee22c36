//! Extract a naked-eye star map CSV from the HYG catalog.
//!
//! Downloads the gzip-compressed catalog, keeps stars at or below the
//! magnitude ceiling, and writes a fixed-precision CSV for the renderer.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use starmap::{pipeline, Config, StarmapError, DEFAULT_CATALOG_URL, NAKED_EYE_MAG_LIMIT};

#[derive(Parser, Debug)]
#[command(
    name = "starmap",
    about = "Extract a naked-eye star map CSV from the HYG catalog"
)]
struct Args {
    /// Catalog URL (gzip-compressed CSV with a header row)
    #[arg(long, default_value = DEFAULT_CATALOG_URL)]
    url: String,

    /// Output CSV path
    #[arg(long)]
    out: PathBuf,

    /// Maximum apparent magnitude to keep (naked eye is about 6.0)
    #[arg(long, default_value_t = NAKED_EYE_MAG_LIMIT)]
    mag_max: f64,

    /// Download timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    /// Stop after this many input rows, 0 for no limit (debugging aid)
    #[arg(long, default_value_t = 0)]
    max_rows: u64,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config {
        url: args.url,
        out: args.out,
        mag_max: args.mag_max,
        timeout: Duration::from_secs(args.timeout),
        max_rows: args.max_rows,
    };

    match pipeline::run(&config) {
        Ok(counters) => {
            println!(
                "total={} kept={} dropped_missing={} dropped_mag={}",
                counters.total, counters.kept, counters.dropped_missing, counters.dropped_mag
            );
            println!("wrote {}", config.out.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Print the failure plus any diagnostics that help fix the invocation.
fn report_failure(err: &StarmapError) {
    eprintln!("error: {err}");
    match err {
        StarmapError::MissingColumns { found, .. } => {
            let sample: Vec<&str> = found.iter().take(50).map(String::as_str).collect();
            eprintln!("columns found: {}", sample.join(", "));
        }
        StarmapError::EmptyCatalog { .. } => {
            eprintln!("likely causes:");
            eprintln!("  - magnitude values in the source are not parseable");
            eprintln!("  - the --mag-max ceiling is too strict");
            eprintln!("  - the source file is not the expected catalog export");
        }
        _ => {}
    }
}
