use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use map_coverage::report;

#[derive(Parser)]
#[command(name = "mapcov")]
#[command(
    about = "Verifies that every feature line from the feature map is present in the migration plan (exact line match)"
)]
struct Cli {
    /// Path to the feature map document
    #[arg(long, default_value = "FEATURE_MAP.md")]
    feature_map: PathBuf,

    /// Path to the migration plan document
    #[arg(long, default_value = "Frontend_Migration_Plan.md")]
    plan: PathBuf,
}

/// Initialize tracing with output to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "map_coverage=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!(
        feature_map = %cli.feature_map.display(),
        plan = %cli.plan.display(),
        "checking plan coverage"
    );

    let report = report::check_files(&cli.feature_map, &cli.plan)?;

    // process::exit skips the implicit stdout flush, so flush first.
    let mut stdout = std::io::stdout();
    stdout.write_all(report.render().as_bytes())?;
    stdout.flush()?;

    std::process::exit(report.exit_code());
}
