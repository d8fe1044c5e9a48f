//! A resolver assembled from one gap strategy and one overlap strategy.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use chrono_tz::Tz;

use crate::discontinuity::Discontinuity;
use crate::error::Result;
use crate::resolver::{SharedResolver, ZoneResolver};

/// Delegates gaps to one resolver and overlaps to another.
///
/// Build one with [`crate::resolvers::combination`], which also applies the
/// strict default and returns a single resolver unwrapped when both roles are
/// the same instance.
#[derive(Debug, Clone)]
pub struct Combination {
    gap: SharedResolver,
    overlap: SharedResolver,
}

impl Combination {
    pub fn new(gap: SharedResolver, overlap: SharedResolver) -> Self {
        Self { gap, overlap }
    }

    pub fn gap_resolver(&self) -> &SharedResolver {
        &self.gap
    }

    pub fn overlap_resolver(&self) -> &SharedResolver {
        &self.overlap
    }
}

impl ZoneResolver for Combination {
    fn handle_gap(
        &self,
        zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        self.gap.handle_gap(zone, discontinuity, local, previous)
    }

    fn handle_overlap(
        &self,
        zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        self.overlap
            .handle_overlap(zone, discontinuity, local, previous)
    }

    fn name(&self) -> &'static str {
        "combination"
    }
}
