//! # Garden Planner CLI
//!
//! Costs one garden design and prints the report.
//!
//! ```text
//! garden_cli                                   # example prices, default layout
//! garden_cli <soilPrice> <wallPrice>           # custom prices, default layout
//! garden_cli <soilPrice> <wallPrice> <design>  # custom prices, beds from a design file
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use garden_core::{default_layout, load_design, CostReport, GardenPlanner, GardenResult, Prices};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(name = "garden_cli", version)]
#[command(about = "Calculates material costs for a garden bed layout")]
#[command(allow_negative_numbers = true)]
struct CliArgs {
    /// Price of garden soil per cubic metre
    #[arg(requires = "wall_price")]
    soil_price: Option<f64>,

    /// Price of bed wall material per metre
    wall_price: Option<f64>,

    /// Design file with one `rectangle <width> <height>` line per bed
    design_file: Option<PathBuf>,

    /// Also print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl CliArgs {
    fn prices(&self) -> Prices {
        match (self.soil_price, self.wall_price) {
            (Some(soil), Some(wall)) => Prices::new(soil, wall),
            _ => Prices::default(),
        }
    }
}

/// Log to stderr so the report on stdout stays clean.
fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("garden_core=debug,garden_cli=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("garden_core=warn,garden_cli=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn build_report(args: &CliArgs) -> GardenResult<CostReport> {
    let prices = args.prices();
    prices.validate()?;

    let mut planner = GardenPlanner::with_prices(prices);
    match &args.design_file {
        Some(path) => {
            load_design(path, &mut planner)?;
        }
        None => {
            tracing::debug!("no design file given, using default layout");
            planner.add_beds(default_layout());
        }
    }

    planner.recalculate_totals();
    Ok(CostReport::from_planner(&planner))
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logger(args.verbose);
    tracing::debug!(?args, "starting garden planner");

    let report = match build_report(&args) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(code = e.error_code(), "garden planner failed: {}", e);
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };

    print!("{}", report.render_text());

    if args.json {
        match report.to_json() {
            Ok(json) => {
                println!();
                println!("{}", json);
            }
            Err(e) => {
                eprintln!("ERROR: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::Bed;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let args = CliArgs::try_parse_from(["garden_cli"]).unwrap();
        assert_eq!(args.prices(), Prices::default());
        assert!(args.design_file.is_none());

        let report = build_report(&args).unwrap();
        assert_eq!(report.beds, default_layout());
        assert!((report.total_cost - 469.6).abs() < 1e-9);
    }

    #[test]
    fn test_price_arguments_override_defaults() {
        let args = CliArgs::try_parse_from(["garden_cli", "100", "10"]).unwrap();
        assert_eq!(args.prices(), Prices::new(100.0, 10.0));

        // 1.6 m3 * 100 + 20 m * 10
        let report = build_report(&args).unwrap();
        assert!((report.total_cost - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_design_file_argument() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("garden.txt");
        std::fs::write(&path, "# one bed\nrectangle 3 4\n").unwrap();

        let args = CliArgs::try_parse_from(["garden_cli", "81", "17", path.to_str().unwrap()]).unwrap();
        let report = build_report(&args).unwrap();
        assert_eq!(report.beds, vec![Bed::rectangle(3.0, 4.0)]);
        assert!((report.total_area.0 - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_soil_price_alone_is_rejected() {
        assert!(CliArgs::try_parse_from(["garden_cli", "81"]).is_err());
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        assert!(CliArgs::try_parse_from(["garden_cli", "cheap", "17"]).is_err());
    }

    #[test]
    fn test_negative_price_fails_validation() {
        let args = CliArgs::try_parse_from(["garden_cli", "-5", "17"]).unwrap();
        let err = build_report(&args).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_missing_design_file_fails() {
        let args = CliArgs::try_parse_from(["garden_cli", "81", "17", "/no/such/garden.txt"]).unwrap();
        let err = build_report(&args).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
