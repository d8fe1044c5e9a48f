//! The resolution strategy contract.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use chrono_tz::Tz;

use crate::discontinuity::Discontinuity;
use crate::error::Result;

/// Decides which offset date-time an ambiguous local date-time denotes.
///
/// Exactly one hook is called per resolution: [`handle_gap`](Self::handle_gap)
/// when `local` never occurs in `zone`, [`handle_overlap`](Self::handle_overlap)
/// when it occurs under both offsets of `discontinuity`.
///
/// `previous` is the offset date-time the local value was derived from, if any
/// (for example the base of an addition). Implementations must be pure
/// functions of their four inputs.
pub trait ZoneResolver: fmt::Debug + Send + Sync {
    /// Resolve a local date-time that falls in a gap.
    ///
    /// The result's offset must be valid for the result's own local component.
    /// The local component may differ from `local`.
    fn handle_gap(
        &self,
        zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>>;

    /// Resolve a local date-time that falls in an overlap.
    ///
    /// The result keeps `local` and pairs it with one of the two offsets of
    /// `discontinuity`.
    fn handle_overlap(
        &self,
        zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>>;

    /// Short label used in log events.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// A resolver shared across threads. Two handles name the same resolver iff
/// `Arc::ptr_eq` holds.
pub type SharedResolver = Arc<dyn ZoneResolver>;
