//! A single transition in a zone's offset function.
//!
//! A [`Discontinuity`] is bracketed by the offset in effect immediately before the
//! transition instant and the offset in effect from that instant on. When the
//! offset jumps forward the wall clock skips a span (a gap); when it jumps
//! backward the wall clock repeats a span (an overlap).

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};

use crate::error::{ResolveError, Result};

/// One transition point, with the offsets on either side of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discontinuity {
    transition: DateTime<Utc>,
    before: FixedOffset,
    after: FixedOffset,
}

impl Discontinuity {
    /// Create a discontinuity at `transition`.
    ///
    /// # Errors
    /// Returns `ResolveError::InvalidDiscontinuity` if `before == after`, since a
    /// transition that keeps the same offset creates neither a gap nor an overlap.
    pub fn new(transition: DateTime<Utc>, before: FixedOffset, after: FixedOffset) -> Result<Self> {
        if before == after {
            return Err(ResolveError::InvalidDiscontinuity(format!(
                "offset {} is the same on both sides of {}",
                before, transition
            )));
        }
        Ok(Self {
            transition,
            before,
            after,
        })
    }

    /// The instant at which the offset changes.
    pub fn transition(&self) -> DateTime<Utc> {
        self.transition
    }

    pub fn offset_before(&self) -> FixedOffset {
        self.before
    }

    pub fn offset_after(&self) -> FixedOffset {
        self.after
    }

    /// The width of the discontinuity: `after - before`.
    ///
    /// Positive for a gap (the span of skipped wall-clock time), negative for an
    /// overlap.
    pub fn size(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(
            self.after.local_minus_utc() - self.before.local_minus_utc(),
        ))
    }

    pub fn is_gap(&self) -> bool {
        self.after.local_minus_utc() > self.before.local_minus_utc()
    }

    pub fn is_overlap(&self) -> bool {
        !self.is_gap()
    }

    /// Whether `offset` is one of the two offsets bracketing the transition.
    pub fn is_valid_offset(&self, offset: FixedOffset) -> bool {
        offset == self.before || offset == self.after
    }

    /// The transition instant expressed in the offset before it.
    pub fn date_time_before(&self) -> DateTime<FixedOffset> {
        self.transition.with_timezone(&self.before)
    }

    /// The first valid date-time after the transition, in the offset after it.
    pub fn date_time_after(&self) -> DateTime<FixedOffset> {
        self.transition.with_timezone(&self.after)
    }

    /// Wall-clock reading at the transition, just before the jump.
    pub fn local_before(&self) -> NaiveDateTime {
        self.date_time_before().naive_local()
    }

    /// Wall-clock reading at the transition, just after the jump.
    pub fn local_after(&self) -> NaiveDateTime {
        self.date_time_after().naive_local()
    }

    /// Whether `local` lies in the span of wall-clock time this transition
    /// skips (gap) or repeats (overlap).
    pub fn contains_local(&self, local: NaiveDateTime) -> bool {
        let (start, end) = if self.is_gap() {
            (self.local_before(), self.local_after())
        } else {
            (self.local_after(), self.local_before())
        };
        start <= local && local < end
    }
}

/// Pair a local date-time with an offset.
pub(crate) fn at_offset(local: NaiveDateTime, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    local
        .and_local_timezone(offset)
        .single()
        .ok_or(ResolveError::OutOfRange { local })
}
