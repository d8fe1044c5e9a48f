//! Error types for zone-resolver operations.

use chrono::{FixedOffset, NaiveDateTime};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The local date-time falls in a gap and the active resolver rejects gaps.
    #[error("Local time {local} does not exist in time zone {zone} due to a gap in the local time-line")]
    Gap { local: NaiveDateTime, zone: Tz },

    /// The local date-time falls in an overlap and the active resolver rejects overlaps.
    #[error("Local time {local} has two matching offsets, {before} and {after}, in time zone {zone}")]
    Overlap {
        local: NaiveDateTime,
        zone: Tz,
        before: FixedOffset,
        after: FixedOffset,
    },

    #[error("Invalid discontinuity: {0}")]
    InvalidDiscontinuity(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid resolver policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid resolver config: {0}")]
    InvalidConfig(String),

    /// Date-time arithmetic left the range chrono can represent.
    #[error("Local time {local} is out of the supported range")]
    OutOfRange { local: NaiveDateTime },

    #[error("No transition found around local time {local} in time zone {zone}")]
    TransitionNotFound { local: NaiveDateTime, zone: Tz },

    /// A resolver produced an offset that the zone never uses at that local time.
    #[error("Resolver returned offset {offset} for local time {local}, which is not valid in time zone {zone}")]
    InvalidResolution {
        local: NaiveDateTime,
        zone: Tz,
        offset: FixedOffset,
    },
}

impl ResolveError {
    /// True for the two rejections produced by the strict resolver.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ResolveError::Gap { .. } | ResolveError::Overlap { .. })
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
