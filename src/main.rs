use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use waterdash::{Dashboard, DatasetSource, source::DEFAULT_SOURCE};

#[derive(Parser)]
#[command(name = "waterdash")]
#[command(about = "Map, charts and table for water-infrastructure projects")]
struct Cli {
    /// Dataset location: http(s):// URL, file:// URL or local path
    #[arg(short, long, value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
    source: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the table, aggregates and marker count instead of opening a window
    #[arg(long)]
    summary: bool,

    /// With --summary, emit JSON instead of text
    #[arg(long, requires = "summary")]
    json: bool,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let filter = match args.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let source: DatasetSource = match args.source.parse() {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };

    let result = if args.summary || !cfg!(feature = "gui") {
        run_summary(&source, args.json)
    } else {
        run_gui(source)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(feature = "gui")]
fn run_gui(source: DatasetSource) -> anyhow::Result<()> {
    waterdash::gui::run(source).map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

#[cfg(not(feature = "gui"))]
fn run_gui(_source: DatasetSource) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; use --summary")
}

fn run_summary(source: &DatasetSource, json: bool) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let dashboard = runtime.block_on(Dashboard::bootstrap(source))?;

    if json {
        let summary = serde_json::json!({
            "rows": dashboard.rows(),
            "markers": dashboard.markers(),
            "charts": dashboard.charts(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("\n=== Projects ({}) ===", dashboard.rows().len());
    for row in dashboard.rows() {
        println!(
            "  {} | {} | {} | {} | {} | {} | {} - {} | {}%",
            row.name,
            row.country,
            row.region,
            row.project_type,
            row.status,
            row.cost,
            row.start_date,
            row.end_date,
            row.progress_percent
        );
    }

    let aggregates = dashboard.aggregates();
    println!("\n=== Investment by Region ===");
    for (region, billions) in aggregates.by_region.iter() {
        println!("  {}: {}", region, waterdash::core::format_billions(*billions));
    }
    println!("\n=== Projects by Type ===");
    for (project_type, count) in aggregates.by_type.iter() {
        println!("  {}: {}", project_type, count);
    }
    println!("\n=== Projects by Status ===");
    for (status, count) in aggregates.by_status.iter() {
        println!("  {}: {}", status, count);
    }

    println!("\nMap markers: {}", dashboard.markers().len());
    Ok(())
}
