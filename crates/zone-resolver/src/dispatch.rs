//! Resolve local date-times in a zone through a [`ZoneResolver`].

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::resolver::ZoneResolver;
use crate::transition::{classify, LocalTimeKind};

/// Resolve `local` in `zone` with no previous context.
///
/// Unique local times are returned with their only offset; gaps and overlaps
/// are handed to `resolver`.
pub fn resolve(
    zone: Tz,
    local: NaiveDateTime,
    resolver: &dyn ZoneResolver,
) -> Result<DateTime<FixedOffset>> {
    resolve_with_previous(zone, local, None, resolver)
}

/// Resolve `local` in `zone`, passing `previous` to the resolver hook.
///
/// # Errors
/// Propagates resolver rejections unchanged. Returns
/// `ResolveError::InvalidResolution` if the resolver produced an offset the
/// zone does not use at the resolved local time.
pub fn resolve_with_previous(
    zone: Tz,
    local: NaiveDateTime,
    previous: Option<DateTime<FixedOffset>>,
    resolver: &dyn ZoneResolver,
) -> Result<DateTime<FixedOffset>> {
    let resolved = match classify(zone, local)? {
        LocalTimeKind::Unique(dt) => return Ok(dt),
        LocalTimeKind::Gap(d) => resolver.handle_gap(zone, &d, local, previous)?,
        LocalTimeKind::Overlap(d) => resolver.handle_overlap(zone, &d, local, previous)?,
    };
    debug!(%zone, %local, %resolved, resolver = resolver.name(), "local time resolved");
    check_offset(zone, resolved)?;
    Ok(resolved)
}

/// Add `delta` to the local component of `base` and resolve the result, with
/// `base` as the previous context.
///
/// With [`crate::resolvers::retain_offset`] a result inside an overlap stays on
/// the same offset as `base`.
pub fn plus(
    zone: Tz,
    base: DateTime<FixedOffset>,
    delta: TimeDelta,
    resolver: &dyn ZoneResolver,
) -> Result<DateTime<FixedOffset>> {
    let local = base
        .naive_local()
        .checked_add_signed(delta)
        .ok_or(ResolveError::OutOfRange {
            local: base.naive_local(),
        })?;
    resolve_with_previous(zone, local, Some(base), resolver)
}

fn check_offset(zone: Tz, resolved: DateTime<FixedOffset>) -> Result<()> {
    let local = resolved.naive_local();
    let offset = *resolved.offset();
    let valid = match classify(zone, local)? {
        LocalTimeKind::Unique(dt) => *dt.offset() == offset,
        LocalTimeKind::Overlap(d) => d.is_valid_offset(offset),
        LocalTimeKind::Gap(_) => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ResolveError::InvalidResolution {
            local,
            zone,
            offset,
        })
    }
}
