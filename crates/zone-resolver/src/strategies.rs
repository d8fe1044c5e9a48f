//! The built-in resolution strategies.
//!
//! All five are stateless unit structs. Obtain the shared instances through the
//! factory functions in [`crate::resolvers`].

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};
use chrono_tz::Tz;
use tracing::trace;

use crate::discontinuity::{at_offset, Discontinuity};
use crate::error::{ResolveError, Result};
use crate::resolver::ZoneResolver;

/// Rejects every gap and overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strict;

impl ZoneResolver for Strict {
    fn handle_gap(
        &self,
        zone: Tz,
        _discontinuity: &Discontinuity,
        local: NaiveDateTime,
        _previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        Err(ResolveError::Gap { local, zone })
    }

    fn handle_overlap(
        &self,
        zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        _previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        Err(ResolveError::Overlap {
            local,
            zone,
            before: discontinuity.offset_before(),
            after: discontinuity.offset_after(),
        })
    }

    fn name(&self) -> &'static str {
        "strict"
    }
}

/// Steps back to the last instant before a gap, and picks the earlier offset
/// of an overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreTransition;

impl ZoneResolver for PreTransition {
    fn handle_gap(
        &self,
        _zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        _previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        let instant = discontinuity
            .transition()
            .checked_sub_signed(TimeDelta::nanoseconds(1))
            .ok_or(ResolveError::OutOfRange { local })?;
        let resolved = instant.with_timezone(&discontinuity.offset_before());
        trace!(policy = self.name(), %local, %resolved, "gap resolved");
        Ok(resolved)
    }

    fn handle_overlap(
        &self,
        _zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        _previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        let resolved = at_offset(local, discontinuity.offset_before())?;
        trace!(policy = self.name(), %local, %resolved, "overlap resolved");
        Ok(resolved)
    }

    fn name(&self) -> &'static str {
        "pre-transition"
    }
}

/// Jumps to the first instant after a gap, and picks the later offset of an
/// overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostTransition;

impl ZoneResolver for PostTransition {
    fn handle_gap(
        &self,
        _zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        _previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        let resolved = discontinuity.date_time_after();
        trace!(policy = self.name(), %local, %resolved, "gap resolved");
        Ok(resolved)
    }

    fn handle_overlap(
        &self,
        _zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        _previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        let resolved = at_offset(local, discontinuity.offset_after())?;
        trace!(policy = self.name(), %local, %resolved, "overlap resolved");
        Ok(resolved)
    }

    fn name(&self) -> &'static str {
        "post-transition"
    }
}

/// Like [`PostTransition`], except that an overlap keeps the offset of the
/// previous date-time when that offset is one of the two valid ones.
///
/// Meant for adding or subtracting time from a zoned value: the result stays
/// on the same side of the overlap as the value it was derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetainOffset;

impl ZoneResolver for RetainOffset {
    fn handle_gap(
        &self,
        _zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        _previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        let resolved = discontinuity.date_time_after();
        trace!(policy = self.name(), %local, %resolved, "gap resolved");
        Ok(resolved)
    }

    fn handle_overlap(
        &self,
        _zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        let offset = match previous {
            Some(prev) if discontinuity.is_valid_offset(*prev.offset()) => *prev.offset(),
            _ => discontinuity.offset_after(),
        };
        let resolved = at_offset(local, offset)?;
        trace!(
            policy = self.name(),
            %local,
            %resolved,
            retained = previous.is_some_and(|p| *p.offset() == offset),
            "overlap resolved"
        );
        Ok(resolved)
    }

    fn name(&self) -> &'static str {
        "retain-offset"
    }
}

/// Pushes a local time in a gap forward by the width of the gap, and picks the
/// later offset of an overlap.
///
/// Given a gap from 01:00 to 02:00 and a local time of 01:20, the result is
/// 02:20 in the later offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PushForward;

impl ZoneResolver for PushForward {
    fn handle_gap(
        &self,
        _zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        _previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        let pushed = local
            .checked_add_signed(discontinuity.size())
            .ok_or(ResolveError::OutOfRange { local })?;
        let resolved = at_offset(pushed, discontinuity.offset_after())?;
        trace!(policy = self.name(), %local, %resolved, "gap resolved");
        Ok(resolved)
    }

    fn handle_overlap(
        &self,
        _zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        _previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        let resolved = at_offset(local, discontinuity.offset_after())?;
        trace!(policy = self.name(), %local, %resolved, "overlap resolved");
        Ok(resolved)
    }

    fn name(&self) -> &'static str {
        "push-forward"
    }
}
