use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::model::assess::{assess, assess_batch, AssessRequest};
use crate::model::assess_error::AssessError;
use crate::model::factors::FactorRepository;
use crate::model::train::compare_train_vs_flight;

/// Command line tool for assessing travel carbon footprints and finding
/// lower-impact alternatives
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TripcarbonApp {
    #[command(subcommand)]
    pub op: TripcarbonOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TripcarbonOperation {
    /// assess one itinerary from a JSON request file
    Assess {
        /// path to the itinerary JSON
        input: PathBuf,
        /// path to a TOML flight-factor override
        #[arg(long)]
        flight_factors: Option<PathBuf>,
        /// pretty-print the result
        #[arg(long)]
        pretty: bool,
    },
    /// assess a JSON array of itineraries with per-item failure isolation
    Batch {
        /// path to the itinerary array JSON
        input: PathBuf,
        /// pretty-print the result
        #[arg(long)]
        pretty: bool,
    },
    /// compare the direct rail connection against the equivalent flight
    CompareTrains {
        /// origin IATA code, e.g. LHR
        origin: String,
        /// destination IATA code, e.g. CDG
        destination: String,
        /// travel date for booking links (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// pretty-print the result
        #[arg(long)]
        pretty: bool,
    },
}

impl TripcarbonOperation {
    pub fn run(self) -> Result<(), AssessError> {
        match self {
            TripcarbonOperation::Assess {
                input,
                flight_factors,
                pretty,
            } => {
                let repository = match flight_factors {
                    Some(path) => {
                        FactorRepository::with_flight_factors_toml(&read_file(&path)?)?
                    }
                    None => FactorRepository::builtin(),
                };
                let request: AssessRequest = parse_json(&read_file(&input)?)?;
                let assessment = assess(&repository, &request)?;
                print_json(&assessment, pretty)
            }
            TripcarbonOperation::Batch { input, pretty } => {
                let repository = FactorRepository::builtin();
                let requests: Vec<AssessRequest> = parse_json(&read_file(&input)?)?;
                let outcome = assess_batch(&repository, &requests)?;
                print_json(&outcome, pretty)
            }
            TripcarbonOperation::CompareTrains {
                origin,
                destination,
                date,
                pretty,
            } => {
                let repository = FactorRepository::builtin();
                let comparison =
                    compare_train_vs_flight(&repository, &origin, &destination, date)?;
                print_json(&comparison, pretty)
            }
        }
    }
}

fn read_file(path: &PathBuf) -> Result<String, AssessError> {
    fs::read_to_string(path)
        .map_err(|e| AssessError::Internal(format!("failed to read {}: {}", path.display(), e)))
}

fn parse_json<T: serde::de::DeserializeOwned>(document: &str) -> Result<T, AssessError> {
    serde_json::from_str(document)
        .map_err(|e| AssessError::Internal(format!("failed to parse request JSON: {}", e)))
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), AssessError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| AssessError::Internal(format!("failed to serialize result: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
