// Newsletter recap entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr; stdout is reserved for the summary text)
// 2. Load config
// 3. Resolve the week (CLI argument wins over config default)
// 4. Generate the weekly league snapshot
// 5. Compute awards, matchup results, and standings
// 6. Print the formatted summary; optionally dump the snapshot as JSON

use gridiron_recap::awards::{compute_awards, format_awards_summary};
use gridiron_recap::config;
use gridiron_recap::sim::generate_mock_league_data;

use anyhow::Context;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("failed to load configuration")?;
    init_tracing(&config.log_filter)?;

    let week = resolve_week(&config)?;
    info!(week, "generating league snapshot");

    let data = generate_mock_league_data(week);
    info!(
        matchups = data.matchups.len(),
        transactions = data.transactions.len(),
        "snapshot ready"
    );

    let awards = compute_awards(&data).context("failed to compute weekly awards")?;
    println!("{}", format_awards_summary(&awards));

    if let Some(dir) = &config.snapshot_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create snapshot directory {}", dir.display()))?;
        let path = dir.join(format!("week_{week:02}.json"));
        let json = serde_json::to_string_pretty(&data).context("failed to serialize snapshot")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        info!(path = %path.display(), "snapshot written");
    }

    Ok(())
}

/// First CLI argument is the week number; falls back to the configured
/// default when absent.
fn resolve_week(config: &config::Config) -> anyhow::Result<u32> {
    match std::env::args().nth(1) {
        Some(arg) => {
            let week: u32 = arg
                .parse()
                .with_context(|| format!("invalid week argument: {arg}"))?;
            anyhow::ensure!(
                (1..=18).contains(&week),
                "week must be between 1 and 18, got {week}"
            );
            Ok(week)
        }
        None => Ok(config.default_week),
    }
}

/// Initialize tracing to stderr. `RUST_LOG` overrides the configured filter.
fn init_tracing(filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
