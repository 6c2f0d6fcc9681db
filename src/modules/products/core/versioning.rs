// Version rule for optimistic concurrency control.
//
// Purpose
// - Decide, for a stored version and the version a caller claims to have read,
//   whether a mutation may proceed and which version it produces.
//
// Boundaries
// - Pure. Stores call this inside their exclusive section so that the compare
//   and the write form one step.

use crate::modules::products::core::product::Version;
use thiserror::Error;

pub const INITIAL_VERSION: Version = 0;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("version mismatch: expected {expected}, actual {actual}")]
pub struct VersionMismatch {
    pub expected: Version,
    pub actual: Version,
}

/// Checks a claim against the stored version without producing a successor.
pub fn check(stored: Version, claimed: Version) -> Result<(), VersionMismatch> {
    if stored != claimed {
        return Err(VersionMismatch {
            expected: claimed,
            actual: stored,
        });
    }
    Ok(())
}

/// Returns the version a successful mutation writes.
pub fn advance(stored: Version, claimed: Version) -> Result<Version, VersionMismatch> {
    check(stored, claimed)?;
    Ok(stored + 1)
}
