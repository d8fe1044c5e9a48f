//! Transition lookup backed by `chrono-tz`.
//!
//! `chrono-tz` reports whether a local date-time is unique, ambiguous or
//! nonexistent, but not the transition that caused it. [`classify`] recovers the
//! [`Discontinuity`] by bisecting the UTC range between the two candidate
//! instants. Zone transitions fall on whole seconds, so the search runs on
//! Unix seconds.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::discontinuity::{at_offset, Discontinuity};
use crate::error::{ResolveError, Result};

/// How a local date-time maps onto a zone's time-line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalTimeKind {
    /// Exactly one offset is valid.
    Unique(DateTime<FixedOffset>),
    /// The local time was skipped by a forward transition.
    Gap(Discontinuity),
    /// The local time occurs twice because of a backward transition.
    Overlap(Discontinuity),
}

impl LocalTimeKind {
    pub fn label(&self) -> &'static str {
        match self {
            LocalTimeKind::Unique(_) => "unique",
            LocalTimeKind::Gap(_) => "gap",
            LocalTimeKind::Overlap(_) => "overlap",
        }
    }

    pub fn discontinuity(&self) -> Option<&Discontinuity> {
        match self {
            LocalTimeKind::Unique(_) => None,
            LocalTimeKind::Gap(d) | LocalTimeKind::Overlap(d) => Some(d),
        }
    }
}

/// Parse an IANA time zone name.
///
/// # Errors
/// Returns `ResolveError::InvalidTimezone` if `name` is not a known identifier.
pub fn parse_zone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| ResolveError::InvalidTimezone(name.to_string()))
}

/// The offset `zone` uses at `instant`.
pub fn offset_at(zone: Tz, instant: DateTime<Utc>) -> FixedOffset {
    zone.offset_from_utc_datetime(&instant.naive_utc()).fix()
}

/// Classify `local` in `zone`, locating the discontinuity for gaps and overlaps.
///
/// # Errors
/// Returns `ResolveError::OutOfRange` if the search leaves chrono's range, or
/// `ResolveError::TransitionNotFound` if the zone data has no single transition
/// explaining the ambiguity.
pub fn classify(zone: Tz, local: NaiveDateTime) -> Result<LocalTimeKind> {
    let kind = match zone.from_local_datetime(&local) {
        LocalResult::Single(dt) => LocalTimeKind::Unique(dt.fixed_offset()),
        LocalResult::Ambiguous(a, b) => {
            let (a, b) = (a.with_timezone(&Utc), b.with_timezone(&Utc));
            let discontinuity = find_transition(zone, local, a.min(b), a.max(b))?;
            if !discontinuity.is_overlap() {
                return Err(ResolveError::TransitionNotFound { local, zone });
            }
            LocalTimeKind::Overlap(discontinuity)
        }
        LocalResult::None => {
            // Offsets a day either side bracket the gap.
            let day = TimeDelta::days(1);
            let probe = Utc.from_utc_datetime(&local);
            let early = probe
                .checked_sub_signed(day)
                .ok_or(ResolveError::OutOfRange { local })?;
            let late = probe
                .checked_add_signed(day)
                .ok_or(ResolveError::OutOfRange { local })?;
            let (before, after) = (offset_at(zone, early), offset_at(zone, late));
            if after.local_minus_utc() <= before.local_minus_utc() {
                return Err(ResolveError::TransitionNotFound { local, zone });
            }
            let lo = at_offset(local, after)?.with_timezone(&Utc);
            let hi = at_offset(local, before)?.with_timezone(&Utc);
            let discontinuity = find_transition(zone, local, lo, hi)?;
            if !discontinuity.is_gap() {
                return Err(ResolveError::TransitionNotFound { local, zone });
            }
            LocalTimeKind::Gap(discontinuity)
        }
    };

    if let Some(d) = kind.discontinuity() {
        debug!(
            %zone,
            %local,
            kind = kind.label(),
            transition = %d.transition(),
            before = %d.offset_before(),
            after = %d.offset_after(),
            "discontinuity found"
        );
    }
    Ok(kind)
}

/// Find the single transition in `(lo, hi]`.
fn find_transition(
    zone: Tz,
    local: NaiveDateTime,
    lo: DateTime<Utc>,
    hi: DateTime<Utc>,
) -> Result<Discontinuity> {
    let not_found = || ResolveError::TransitionNotFound { local, zone };
    let at = |secs: i64| DateTime::from_timestamp(secs, 0).ok_or(ResolveError::OutOfRange { local });

    let mut lo_secs = lo.timestamp();
    let mut hi_secs = if hi.timestamp_subsec_nanos() > 0 {
        hi.timestamp() + 1
    } else {
        hi.timestamp()
    };
    let target = offset_at(zone, at(hi_secs)?);
    if offset_at(zone, at(lo_secs)?) == target {
        return Err(not_found());
    }

    while hi_secs - lo_secs > 1 {
        let mid = lo_secs + (hi_secs - lo_secs) / 2;
        if offset_at(zone, at(mid)?) == target {
            hi_secs = mid;
        } else {
            lo_secs = mid;
        }
    }

    let before = offset_at(zone, at(lo_secs)?);
    let discontinuity = Discontinuity::new(at(hi_secs)?, before, target)?;
    if !discontinuity.contains_local(local) {
        return Err(not_found());
    }
    Ok(discontinuity)
}
