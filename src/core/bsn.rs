//! The Dutch 11-proof for BSNs.
//!
//! Digits d1..d9 are weighted 9, 8, 7, 6, 5, 4, 3, 2 and -1. A number is
//! valid when the weighted sum is a multiple of 11 and it is not `000000000`.

use crate::domain::model::{Bsn, Candidate};
use crate::utils::error::Result;

const WEIGHTS: [i32; 9] = [9, 8, 7, 6, 5, 4, 3, 2, -1];

/// Weighted digit sum of a well-formed BSN.
pub fn checksum(bsn: &Bsn) -> i32 {
    bsn.digits()
        .iter()
        .zip(WEIGHTS)
        .map(|(&digit, weight)| i32::from(digit) * weight)
        .sum()
}

/// Applies the 11-proof to an already normalised BSN.
pub fn passes_eleven_proof(bsn: &Bsn) -> bool {
    !bsn.is_all_zero() && checksum(bsn).rem_euclid(11) == 0
}

/// Checks a number or digit string against the 11-proof.
///
/// Inputs shorter than nine digits are zero-padded on the left. Well-formed
/// but failing input yields `Ok(false)`; input that is not a run of at most
/// nine digits yields [`crate::ToolsError::InvalidFormat`].
///
/// This function does not log; see [`BsnValidator`] for that.
pub fn is_valid_bsn<'a>(candidate: impl Into<Candidate<'a>>) -> Result<bool> {
    let bsn = Bsn::parse(candidate)?;
    Ok(passes_eleven_proof(&bsn))
}

/// Validator that reports every verdict through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BsnValidator;

impl BsnValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate<'a>(&self, candidate: impl Into<Candidate<'a>>) -> Result<bool> {
        let candidate = candidate.into();
        let bsn = match Bsn::parse(candidate) {
            Ok(bsn) => bsn,
            Err(e) => {
                tracing::error!("{}", e);
                return Err(e);
            }
        };
        Ok(self.validate_bsn(&bsn))
    }

    pub fn validate_bsn(&self, bsn: &Bsn) -> bool {
        let valid = passes_eleven_proof(bsn);
        if valid {
            tracing::info!("valid BSN {}", bsn);
        } else {
            tracing::warn!("invalid BSN {}", bsn);
        }
        valid
    }
}
