//! Job posting verification: intake guard, trust scoring rubric, and HTTP surface.
//!
//! The scoring engine is a pure function of the normalized posting and an
//! injected [`NoiseSource`]; everything stateful (ids, timestamps, storage)
//! lives in the service and repository layers.

pub mod domain;
pub mod evaluation;
pub mod guard;
pub mod noise;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{EvidenceImage, JobPosting, JobSubmission, VerificationId};
pub use evaluation::{
    CheckResult, CheckSeverity, ScoreComponent, ScoreSheet, ScoringConfig, ScoringEngine,
    TrustSignal, TrustVerdict,
};
pub use guard::{GuardPolicy, SubmissionViolation, VerificationGuard};
pub use noise::{FixedNoise, NoiseSource, SeededNoise};
pub use repository::{
    RepositoryError, VerdictTally, VerificationOutcome, VerificationRecord,
    VerificationRepository, VerificationSummary,
};
pub use router::{verification_router, VerificationRouteState};
pub use service::{VerificationService, VerificationServiceError};
