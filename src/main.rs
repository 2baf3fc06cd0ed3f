//! # Bridge-triage CLI
//!
//! Command-line interface for the bridge-triage library.
//! Loads a bridge inventory CSV and answers one query or update per run.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use bridge_triage::{
    assign_inspectors, load_bridges, suggest_highway, validate_date, BridgeId, BridgeTable,
    IngestOptions, Location, RehabKind, TriageConfig,
};
use clap::{Parser, Subcommand};
use log::{error, warn};
use serde::Serialize;
use serde_json::json;

mod cli;

/// Command-line interface for bridge-triage
#[derive(Parser)]
#[command(name = "bridge-triage")]
#[command(version)]
#[command(about = "Bridge condition queries and inspector dispatch")]
#[command(long_about = "Answers questions about a highway bridge inventory:
  bridge-triage -d bridges.csv get 3                      # Show bridge 3
  bridge-triage -d bridges.csv closest 3                  # Nearest bridge to bridge 3
  bridge-triage -d bridges.csv radius 43.10,-80.15 50     # Bridges within 50 km
  bridge-triage -d bridges.csv assign -n 5 -i 43.10,-80.15 -i 45.03,-81.33

Updates (inspect, rehab) are applied in memory and the updated records are
printed; the inventory file is never rewritten.")]
struct Cli {
    /// Bridge inventory CSV file
    #[arg(short, long, value_name = "CSV", global = true)]
    data: Option<PathBuf>,

    /// JSON configuration file (dispatch tiers, default capacity, header rows)
    #[arg(short, long, value_name = "JSON", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Show a progress bar while loading the inventory
    #[arg(long, global = true)]
    progress: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show one bridge record
    Get { id: BridgeId },

    /// Average BCI of a bridge (null when there is no data)
    AvgBci { id: BridgeId },

    /// Total length of all bridges on a highway
    Length { highway: String },

    /// Distance in kilometers between two bridges
    Distance { from: BridgeId, to: BridgeId },

    /// Nearest other bridge
    Closest { id: BridgeId },

    /// Bridges within a radius of a location
    Radius {
        /// Center as LAT,LON
        #[arg(value_parser = cli::parse_location, allow_hyphen_values = true)]
        center: Location,

        /// Radius in kilometers
        radius_km: f64,
    },

    /// Bridges whose most recent BCI is at or below a threshold
    BciBelow {
        bci: f64,

        /// Candidate bridges (all bridges when omitted)
        ids: Vec<BridgeId>,
    },

    /// Bridges whose name contains a string (case-insensitive)
    Search { text: String },

    /// Assign bridges to inspectors
    Assign {
        /// Maximum bridges per inspector (defaults to the configured capacity)
        #[arg(short = 'n', long)]
        max: Option<usize>,

        /// Inspector location as LAT,LON (repeat for each inspector, in priority order)
        #[arg(
            short,
            long = "inspector",
            value_parser = cli::parse_location,
            allow_hyphen_values = true,
            required = true
        )]
        inspectors: Vec<Location>,
    },

    /// Record a new inspection on one or more bridges
    Inspect {
        /// Inspection date as MM/DD/YYYY
        date: String,

        /// New BCI score
        bci: f64,

        #[arg(required = true)]
        ids: Vec<BridgeId>,
    },

    /// Record a rehabilitation on a bridge
    Rehab {
        id: BridgeId,

        /// Rehabilitation date as MM/DD/YYYY
        date: String,

        /// Major rehabilitation (minor otherwise)
        #[arg(long)]
        major: bool,
    },
}

#[derive(Serialize)]
struct InspectorPlan<'a> {
    inspector: &'a Location,
    bridges: Vec<BridgeId>,
}

fn main() {
    if let Err(e) = run() {
        error!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let config = match &cli.config {
        Some(path) => TriageConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TriageConfig::default(),
    };

    let data = cli
        .data
        .as_ref()
        .ok_or_else(|| anyhow!("no inventory given, pass --data <CSV>"))?;
    let mut table = load_table(data, &config, cli.progress)?;

    execute(cli.command, &mut table, &config)
}

/// Load the inventory, with a progress bar if requested
fn load_table(path: &Path, config: &TriageConfig, progress: bool) -> Result<BridgeTable> {
    let manager = progress.then(|| cli::ProgressManager::new(0, &format!("📂 Loading {}", path.display())));

    let options = IngestOptions {
        header_rows: config.header_rows,
        progress: manager.as_ref().map(|m| m.callback()),
    };

    load_bridges(path, &options).with_context(|| format!("loading inventory {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn execute(command: Command, table: &mut BridgeTable, config: &TriageConfig) -> Result<()> {
    match command {
        Command::Get { id } => {
            let bridge = table.get(id).ok_or_else(|| anyhow!("bridge {id} not found"))?;
            print_json(bridge)
        }
        Command::AvgBci { id } => print_json(&json!({
            "id": id,
            "average_bci": table.average_bci_checked(id),
        })),
        Command::Length { highway } => {
            let total = table.total_length_on_highway(&highway);
            if total == 0.0 {
                if let Some(suggestion) = suggest_highway(&highway, table.highways()) {
                    eprintln!("💡 No bridges on highway '{highway}'. Did you mean '{suggestion}'?");
                }
            }
            print_json(&json!({ "highway": highway, "total_length": total }))
        }
        Command::Distance { from, to } => {
            let distance = table
                .distance_between_ids(from, to)
                .ok_or_else(|| anyhow!("bridge {from} or {to} not found"))?;
            print_json(&json!({ "from": from, "to": to, "distance_km": distance }))
        }
        Command::Closest { id } => {
            let closest = table.closest_bridge(id).ok_or_else(|| {
                anyhow!("bridge {id} not found or the inventory has no other bridge")
            })?;
            print_json(&json!({ "id": id, "closest": closest }))
        }
        Command::Radius { center, radius_km } => {
            print_json(&table.bridges_in_radius(center, radius_km))
        }
        Command::BciBelow { bci, ids } => {
            let candidates = if ids.is_empty() { table.ids() } else { ids };
            print_json(&table.bridges_with_bci_below(&candidates, bci))
        }
        Command::Search { text } => print_json(&table.bridges_containing(&text)),
        Command::Assign { max, inspectors } => {
            let max = max.unwrap_or(config.max_bridges_per_inspector);
            let plan = assign_inspectors(table, &inspectors, max, &config.tiers);
            let plans: Vec<InspectorPlan> = inspectors
                .iter()
                .zip(plan)
                .map(|(inspector, bridges)| InspectorPlan { inspector, bridges })
                .collect();
            print_json(&plans)
        }
        Command::Inspect { date, bci, ids } => {
            validate_date(&date)?;
            if !bci.is_finite() {
                bail!("BCI must be a finite number");
            }
            let updated = table.record_inspection(&ids, &date, bci);
            if updated == 0 {
                warn!("No listed bridge exists in the inventory");
            }
            let records: Vec<_> = table.iter().filter(|r| ids.contains(&r.id)).collect();
            print_json(&records)
        }
        Command::Rehab { id, date, major } => {
            validate_date(&date)?;
            if !table.record_rehab(id, &date, RehabKind::from_major_flag(major)) {
                bail!("bridge {id} not found");
            }
            let bridge = table.get(id).ok_or_else(|| anyhow!("bridge {id} not found"))?;
            print_json(bridge)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_assign() {
        let cli = Cli::try_parse_from([
            "bridge-triage",
            "--data",
            "bridges.csv",
            "assign",
            "-n",
            "2",
            "-i",
            "43.20,-80.35",
            "--inspector",
            "43.10,-80.15",
        ])
        .unwrap();

        match cli.command {
            Command::Assign { max, inspectors } => {
                assert_eq!(max, Some(2));
                assert_eq!(
                    inspectors,
                    vec![Location::new(43.20, -80.35), Location::new(43.10, -80.15)]
                );
            }
            _ => panic!("Expected assign command"),
        }
    }

    #[test]
    fn test_cli_parses_radius_after_subcommand_args() {
        let cli = Cli::try_parse_from([
            "bridge-triage",
            "radius",
            "43.10,-80.15",
            "10",
            "--data",
            "bridges.csv",
        ])
        .unwrap();

        match cli.command {
            Command::Radius { center, radius_km } => {
                assert_eq!(center, Location::new(43.10, -80.15));
                assert_eq!(radius_km, 10.0);
            }
            _ => panic!("Expected radius command"),
        }
    }

    #[test]
    fn test_cli_requires_inspector() {
        assert!(Cli::try_parse_from(["bridge-triage", "assign", "-n", "2"]).is_err());
    }

    #[test]
    fn test_cli_rehab_flag() {
        let cli = Cli::try_parse_from(["bridge-triage", "rehab", "2", "09/15/2019", "--major"])
            .unwrap();
        match cli.command {
            Command::Rehab { id, date, major } => {
                assert_eq!(id, 2);
                assert_eq!(date, "09/15/2019");
                assert!(major);
            }
            _ => panic!("Expected rehab command"),
        }
    }
}
