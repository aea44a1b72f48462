pub mod assessment;
pub mod batch;
pub mod orchestrator;
pub mod request;
pub mod validate;

pub use assessment::{
    Assessment, EmissionBreakdown, EmissionsTotal, Equivalents, Methodology, SegmentResult,
};
pub use batch::{assess_batch, BatchOutcome};
pub use orchestrator::{assess, assess_at};
pub use request::{AssessOptions, AssessRequest, CalculationMethod};
pub use validate::validate_request;
