pub mod bsn;
pub mod engine;
pub mod generator;
pub mod workspace;

pub use crate::domain::model::{Bsn, BsnRecord, BsnSource, Candidate, JobOutcome};
pub use crate::domain::ports::{Job, Storage};
pub use crate::utils::error::Result;
