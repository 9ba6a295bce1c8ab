use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use u_courier::config::BatchConfig;
use u_courier::dispatcher::{DispatchKpi, Dispatcher};
use u_courier::logging;
use u_courier::models::{Courier, CourierReport};

#[derive(Parser, Debug)]
#[command(name = "u-courier")]
#[command(about = "Dispatch a batch of store deliveries to couriers and report payouts")]
struct Cli {
    /// TOML batch file with [[stores]] and [[couriers]] tables
    #[arg(short, long)]
    config: PathBuf,

    /// Show a single courier, by 1-based position or by name
    #[arg(long)]
    courier: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Append batch KPIs to the report
    #[arg(long)]
    kpi: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Resolves a selector against the courier list. Unknown selectors yield
/// `None`, which means "show everyone".
fn select<'a>(couriers: &'a [Courier], selector: &str) -> Option<&'a Courier> {
    if let Ok(position) = selector.trim().parse::<usize>() {
        if let Some(courier) = position.checked_sub(1).and_then(|i| couriers.get(i)) {
            return Some(courier);
        }
    }
    couriers.iter().find(|c| c.name == selector)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let config = BatchConfig::from_file(&cli.config)
        .with_context(|| format!("failed to load batch file {}", cli.config.display()))?;
    let mut batch = config.build().context("invalid batch definition")?;

    let log = Dispatcher::new()
        .run_batch(&mut batch)
        .context("dispatch failed")?;

    let selected = cli
        .courier
        .as_deref()
        .and_then(|s| select(&batch.couriers, s));
    if let (Some(selector), None) = (cli.courier.as_deref(), selected) {
        tracing::warn!(selector, "no such courier, showing the full report");
    }

    let reports: Vec<CourierReport> = match selected {
        Some(courier) => vec![courier.report()],
        None => batch.couriers.iter().map(Courier::report).collect(),
    };

    match cli.format {
        Format::Text => {
            for report in &reports {
                println!("{report}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    if cli.kpi {
        let kpi = DispatchKpi::calculate(&log, &batch.couriers);
        println!(
            "Deliveries: {} - Payout: {:?} - Load: {}..{} (spread {}) - Idle couriers: {}",
            kpi.total_deliveries,
            kpi.total_payout,
            kpi.min_load,
            kpi.max_load,
            kpi.load_spread(),
            kpi.idle_couriers
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn couriers() -> Vec<Courier> {
        vec![
            Courier::new("Motoboy 1", 2.0, ["Store 1"]),
            Courier::new("Motoboy 2", 2.0, ["Store 1"]),
            Courier::new("Motoboy 3", 3.0, ["Store 1"]),
        ]
    }

    #[test]
    fn test_select_by_position() {
        let couriers = couriers();
        for (i, expected) in couriers.iter().enumerate() {
            let selected = select(&couriers, &(i + 1).to_string()).unwrap();
            assert_eq!(selected.name, expected.name);
        }
        assert_eq!(select(&couriers, " 2 ").unwrap().name, "Motoboy 2");
    }

    #[test]
    fn test_select_position_out_of_range() {
        let couriers = couriers();
        assert!(select(&couriers, "0").is_none());
        assert!(select(&couriers, "4").is_none());
    }

    #[test]
    fn test_select_by_name() {
        let couriers = couriers();
        assert_eq!(select(&couriers, "Motoboy 3").unwrap().name, "Motoboy 3");
    }

    #[test]
    fn test_select_unknown_falls_back() {
        let couriers = couriers();
        assert!(select(&couriers, "Nobody").is_none());
        assert!(select(&couriers, "").is_none());
        assert!(select(&[], "1").is_none());
    }
}
