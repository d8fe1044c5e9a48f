//! Tests for transition lookup and end-to-end resolution against real zones.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use zone_resolver::error::Result;
use zone_resolver::{
    classify, offset_at, parse_zone, plus, resolve, resolve_with_previous, resolvers,
    Discontinuity, LocalTimeKind, ResolveError, ZoneResolver,
};

const PARIS: Tz = chrono_tz::Europe::Paris;

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn offset(seconds: i32) -> FixedOffset {
    FixedOffset::east_opt(seconds).unwrap()
}

const HOUR: i32 = 3600;

fn gap_of(kind: LocalTimeKind) -> Discontinuity {
    match kind {
        LocalTimeKind::Gap(d) => d,
        other => panic!("expected a gap, got {:?}", other),
    }
}

fn overlap_of(kind: LocalTimeKind) -> Discontinuity {
    match kind {
        LocalTimeKind::Overlap(d) => d,
        other => panic!("expected an overlap, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

#[test]
fn classify_unique_summer_time() {
    let kind = classify(PARIS, local(2026, 6, 1, 12, 0)).unwrap();
    match kind {
        LocalTimeKind::Unique(dt) => assert_eq!(dt.to_rfc3339(), "2026-06-01T12:00:00+02:00"),
        other => panic!("expected unique, got {:?}", other),
    }
    assert_eq!(kind.label(), "unique");
    assert!(kind.discontinuity().is_none());
}

#[test]
fn classify_spring_forward_gap() {
    let d = gap_of(classify(PARIS, local(2026, 3, 29, 2, 30)).unwrap());
    assert_eq!(d.transition(), Utc.with_ymd_and_hms(2026, 3, 29, 1, 0, 0).unwrap());
    assert_eq!(d.offset_before(), offset(HOUR));
    assert_eq!(d.offset_after(), offset(2 * HOUR));
    assert_eq!(d.size(), TimeDelta::hours(1));
    assert_eq!(d.local_before(), local(2026, 3, 29, 2, 0));
    assert_eq!(d.local_after(), local(2026, 3, 29, 3, 0));
}

#[test]
fn classify_gap_start_boundary_is_in_gap() {
    let kind = classify(PARIS, local(2026, 3, 29, 2, 0)).unwrap();
    assert!(matches!(kind, LocalTimeKind::Gap(_)));
    let kind = classify(PARIS, local(2026, 3, 29, 3, 0)).unwrap();
    assert!(matches!(kind, LocalTimeKind::Unique(_)));
}

#[test]
fn classify_fall_back_overlap() {
    let d = overlap_of(classify(PARIS, local(2026, 10, 25, 2, 30)).unwrap());
    assert_eq!(d.transition(), Utc.with_ymd_and_hms(2026, 10, 25, 1, 0, 0).unwrap());
    assert_eq!(d.offset_before(), offset(2 * HOUR));
    assert_eq!(d.offset_after(), offset(HOUR));
    assert_eq!(d.size(), TimeDelta::hours(-1));
    assert!(d.contains_local(local(2026, 10, 25, 2, 0)));
    assert!(!d.contains_local(local(2026, 10, 25, 3, 0)));
}

#[test]
fn classify_new_york_gap() {
    let d = gap_of(classify(chrono_tz::America::New_York, local(2026, 3, 8, 2, 30)).unwrap());
    assert_eq!(d.transition(), Utc.with_ymd_and_hms(2026, 3, 8, 7, 0, 0).unwrap());
    assert_eq!(d.offset_before(), offset(-5 * HOUR));
    assert_eq!(d.offset_after(), offset(-4 * HOUR));
}

#[test]
fn classify_half_hour_transition() {
    // Lord Howe Island shifts by 30 minutes: 02:00 +10:30 becomes 02:30 +11:00.
    let d = gap_of(classify(chrono_tz::Australia::Lord_Howe, local(2026, 10, 4, 2, 10)).unwrap());
    assert_eq!(d.size(), TimeDelta::minutes(30));
    assert_eq!(d.offset_after(), offset(11 * HOUR));
    assert_eq!(d.transition(), Utc.with_ymd_and_hms(2026, 10, 3, 15, 30, 0).unwrap());
}

#[test]
fn classify_whole_day_gap() {
    // Samoa skipped 30 December 2011 when it moved across the date line.
    let d = gap_of(classify(chrono_tz::Pacific::Apia, local(2011, 12, 30, 12, 0)).unwrap());
    assert_eq!(d.size(), TimeDelta::hours(24));
    assert_eq!(d.local_before(), local(2011, 12, 30, 0, 0));
    assert_eq!(d.local_after(), local(2011, 12, 31, 0, 0));
}

#[test]
fn zone_without_transitions_is_always_unique() {
    let kind = classify(chrono_tz::Asia::Kolkata, local(2026, 3, 29, 2, 30)).unwrap();
    assert!(matches!(kind, LocalTimeKind::Unique(_)));
}

#[test]
fn parse_zone_accepts_iana_names() {
    assert_eq!(parse_zone("Europe/Paris").unwrap(), PARIS);
    assert_eq!(
        parse_zone("Mars/Olympus_Mons").unwrap_err(),
        ResolveError::InvalidTimezone("Mars/Olympus_Mons".to_string())
    );
}

#[test]
fn offset_at_reads_zone_offset() {
    let summer = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
    let winter = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(offset_at(PARIS, summer), offset(2 * HOUR));
    assert_eq!(offset_at(PARIS, winter), offset(HOUR));
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

#[test]
fn resolve_unique_ignores_resolver() {
    let resolved = resolve(PARIS, local(2026, 6, 1, 12, 0), resolvers::strict().as_ref()).unwrap();
    assert_eq!(resolved.to_rfc3339(), "2026-06-01T12:00:00+02:00");
}

#[test]
fn resolve_gap_with_each_policy() {
    let at = local(2026, 3, 29, 2, 30);
    let cases = [
        (resolvers::pre_transition(), "2026-03-29T01:59:59.999999999+01:00"),
        (resolvers::post_transition(), "2026-03-29T03:00:00+02:00"),
        (resolvers::retain_offset(), "2026-03-29T03:00:00+02:00"),
        (resolvers::push_forward(), "2026-03-29T03:30:00+02:00"),
    ];
    for (resolver, expected) in cases {
        let resolved = resolve(PARIS, at, resolver.as_ref()).unwrap();
        assert_eq!(resolved.to_rfc3339(), expected, "{:?}", resolver);
    }
    let err = resolve(PARIS, at, resolvers::strict().as_ref()).unwrap_err();
    assert!(matches!(err, ResolveError::Gap { zone, .. } if zone == PARIS));
}

#[test]
fn resolve_overlap_with_each_policy() {
    let at = local(2026, 10, 25, 2, 30);
    let cases = [
        (resolvers::pre_transition(), "2026-10-25T02:30:00+02:00"),
        (resolvers::post_transition(), "2026-10-25T02:30:00+01:00"),
        (resolvers::retain_offset(), "2026-10-25T02:30:00+01:00"),
        (resolvers::push_forward(), "2026-10-25T02:30:00+01:00"),
    ];
    for (resolver, expected) in cases {
        let resolved = resolve(PARIS, at, resolver.as_ref()).unwrap();
        assert_eq!(resolved.to_rfc3339(), expected, "{:?}", resolver);
    }
    let err = resolve(PARIS, at, resolvers::strict().as_ref()).unwrap_err();
    assert!(matches!(err, ResolveError::Overlap { .. }));
}

#[test]
fn resolve_with_previous_forwards_context() {
    let at = local(2026, 10, 25, 2, 30);
    let previous = offset(2 * HOUR).from_local_datetime(&at).unwrap();
    let resolved =
        resolve_with_previous(PARIS, at, Some(previous), resolvers::retain_offset().as_ref())
            .unwrap();
    assert_eq!(resolved.to_rfc3339(), "2026-10-25T02:30:00+02:00");
}

#[test]
fn resolve_push_forward_across_half_hour_gap() {
    let resolved = resolve(
        chrono_tz::Australia::Lord_Howe,
        local(2026, 10, 4, 2, 10),
        resolvers::push_forward().as_ref(),
    )
    .unwrap();
    assert_eq!(resolved.to_rfc3339(), "2026-10-04T02:40:00+11:00");
}

// ---------------------------------------------------------------------------
// plus
// ---------------------------------------------------------------------------

#[test]
fn plus_into_overlap_retains_earlier_offset() {
    let base = offset(2 * HOUR).with_ymd_and_hms(2026, 10, 25, 1, 45, 0).unwrap();
    let resolved = plus(PARIS, base, TimeDelta::hours(1), resolvers::retain_offset().as_ref()).unwrap();
    assert_eq!(resolved.to_rfc3339(), "2026-10-25T02:45:00+02:00");

    let post = plus(PARIS, base, TimeDelta::hours(1), resolvers::post_transition().as_ref()).unwrap();
    assert_eq!(post.to_rfc3339(), "2026-10-25T02:45:00+01:00");
}

#[test]
fn minus_into_overlap_retains_later_offset() {
    let base = offset(HOUR).with_ymd_and_hms(2026, 10, 25, 3, 15, 0).unwrap();
    let resolved = plus(
        PARIS,
        base,
        TimeDelta::minutes(-30),
        resolvers::retain_offset().as_ref(),
    )
    .unwrap();
    assert_eq!(resolved.to_rfc3339(), "2026-10-25T02:45:00+01:00");
}

#[test]
fn plus_into_gap_uses_gap_policy() {
    let base = offset(HOUR).with_ymd_and_hms(2026, 3, 29, 1, 30, 0).unwrap();
    let resolved = plus(PARIS, base, TimeDelta::hours(1), resolvers::retain_offset().as_ref()).unwrap();
    assert_eq!(resolved.to_rfc3339(), "2026-03-29T03:00:00+02:00");
}

// ---------------------------------------------------------------------------
// Result validation
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct WrongOffset;

impl ZoneResolver for WrongOffset {
    fn handle_gap(
        &self,
        _zone: Tz,
        discontinuity: &Discontinuity,
        local: NaiveDateTime,
        _previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        // The local time is still inside the gap, so no offset is valid.
        Ok(discontinuity.offset_before().from_local_datetime(&local).unwrap())
    }

    fn handle_overlap(
        &self,
        _zone: Tz,
        _discontinuity: &Discontinuity,
        local: NaiveDateTime,
        _previous: Option<DateTime<FixedOffset>>,
    ) -> Result<DateTime<FixedOffset>> {
        Ok(offset(5 * HOUR).from_local_datetime(&local).unwrap())
    }
}

#[test]
fn invalid_gap_resolution_is_rejected() {
    let err = resolve(PARIS, local(2026, 3, 29, 2, 30), &WrongOffset).unwrap_err();
    assert_eq!(
        err,
        ResolveError::InvalidResolution {
            local: local(2026, 3, 29, 2, 30),
            zone: PARIS,
            offset: offset(HOUR),
        }
    );
}

#[test]
fn invalid_overlap_resolution_is_rejected() {
    let err = resolve(PARIS, local(2026, 10, 25, 2, 30), &WrongOffset).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidResolution { offset: o, .. } if o == offset(5 * HOUR)));
}

#[test]
fn discontinuity_requires_distinct_offsets() {
    let err = Discontinuity::new(Utc::now(), offset(HOUR), offset(HOUR)).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidDiscontinuity(_)));
}
