use super::assessment::Assessment;
use super::orchestrator::assess_at;
use super::request::AssessRequest;
use crate::model::assess_error::{AssessError, FieldViolation};
use crate::model::factors::FactorRepository;
use crate::util::round_ops;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use uuid::Uuid;

pub const MAX_BATCH_SIZE: usize = 100;

#[derive(Serialize, Debug, Clone)]
pub struct BatchOutcome {
    pub batch_id: String,
    pub total_itineraries: usize,
    pub succeeded: Vec<BatchSuccess>,
    pub failed: Vec<BatchFailure>,
    pub aggregate: BatchAggregate,
}

#[derive(Serialize, Debug, Clone)]
pub struct BatchSuccess {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    pub assessment: Assessment,
}

#[derive(Serialize, Debug, Clone)]
pub struct BatchFailure {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    pub error: BatchError,
}

/// wire form of an [`AssessError`] inside a batch result.
#[derive(Serialize, Debug, Clone)]
pub struct BatchError {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldViolation>>,
}

impl From<&AssessError> for BatchError {
    fn from(error: &AssessError) -> BatchError {
        BatchError {
            code: error.code(),
            message: error.to_string(),
            fields: error.violations().map(<[FieldViolation]>::to_vec),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct BatchAggregate {
    pub total_emissions_kg: f64,
    pub average_per_trip_kg: f64,
}

/// assesses up to [`MAX_BATCH_SIZE`] itineraries. items are independent:
/// one bad itinerary lands in `failed` without touching the others, and
/// the call itself only fails on an oversized or empty batch.
pub fn assess_batch(
    repository: &FactorRepository,
    requests: &[AssessRequest],
) -> Result<BatchOutcome, AssessError> {
    assess_batch_at(repository, requests, Utc::now())
}

pub fn assess_batch_at(
    repository: &FactorRepository,
    requests: &[AssessRequest],
    now: DateTime<Utc>,
) -> Result<BatchOutcome, AssessError> {
    if requests.is_empty() {
        return Err(AssessError::Validation(vec![FieldViolation::new(
            "itineraries",
            "at least one itinerary is required",
        )]));
    }
    if requests.len() > MAX_BATCH_SIZE {
        return Err(AssessError::Validation(vec![FieldViolation::new(
            "itineraries",
            format!("at most {} itineraries per batch", MAX_BATCH_SIZE),
        )]));
    }

    // indexed collect keeps the output ordered regardless of which
    // worker finishes first
    let results: Vec<(usize, Result<Assessment, AssessError>)> = requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| (index, assess_at(repository, request, now)))
        .collect();

    let mut succeeded = Vec::new();
    let mut failed = Vec::new();
    for (index, result) in results {
        let trip_id = requests[index].trip_id.clone();
        match result {
            Ok(assessment) => succeeded.push(BatchSuccess {
                index,
                trip_id,
                assessment,
            }),
            Err(error) => {
                log::warn!("itinerary {} failed: {}", index, error);
                failed.push(BatchFailure {
                    index,
                    trip_id,
                    error: BatchError::from(&error),
                });
            }
        }
    }

    let total_emissions_kg: f64 = succeeded
        .iter()
        .map(|success| success.assessment.total_emissions.co2e_kg)
        .sum();
    let average_per_trip_kg = if succeeded.is_empty() {
        0.0
    } else {
        total_emissions_kg / succeeded.len() as f64
    };

    Ok(BatchOutcome {
        batch_id: format!("batch_{}", Uuid::new_v4()),
        total_itineraries: requests.len(),
        succeeded,
        failed,
        aggregate: BatchAggregate {
            total_emissions_kg: round_ops::round1(total_emissions_kg),
            average_per_trip_kg: round_ops::round1(average_per_trip_kg),
        },
    })
}
