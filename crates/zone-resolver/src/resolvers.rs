//! Factory functions for the shared resolver instances.
//!
//! Each named resolver is a process-wide singleton: every call returns a handle
//! to the same allocation, so `Arc::ptr_eq` can be used as an identity check.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::combination::Combination;
use crate::resolver::SharedResolver;
use crate::strategies::{PostTransition, PreTransition, PushForward, RetainOffset, Strict};

static STRICT: Lazy<SharedResolver> = Lazy::new(|| Arc::new(Strict));
static PRE_TRANSITION: Lazy<SharedResolver> = Lazy::new(|| Arc::new(PreTransition));
static POST_TRANSITION: Lazy<SharedResolver> = Lazy::new(|| Arc::new(PostTransition));
static RETAIN_OFFSET: Lazy<SharedResolver> = Lazy::new(|| Arc::new(RetainOffset));
static PUSH_FORWARD: Lazy<SharedResolver> = Lazy::new(|| Arc::new(PushForward));

/// The resolver that rejects every gap and overlap with an error.
pub fn strict() -> SharedResolver {
    Arc::clone(&STRICT)
}

/// Gaps resolve to one nanosecond before the transition, overlaps to the
/// earlier offset.
pub fn pre_transition() -> SharedResolver {
    Arc::clone(&PRE_TRANSITION)
}

/// Gaps resolve to the first instant after the transition, overlaps to the
/// later offset.
pub fn post_transition() -> SharedResolver {
    Arc::clone(&POST_TRANSITION)
}

/// As [`post_transition`], but overlaps keep the previous offset when it is
/// still valid. Use when adding or subtracting time from a zoned value.
pub fn retain_offset() -> SharedResolver {
    Arc::clone(&RETAIN_OFFSET)
}

/// Gaps push the local time forward by the width of the gap, overlaps take the
/// later offset.
pub fn push_forward() -> SharedResolver {
    Arc::clone(&PUSH_FORWARD)
}

/// Combine a gap resolver and an overlap resolver.
///
/// `None` in either position means [`strict`]. If both positions end up holding
/// the same instance, that instance is returned as-is instead of being wrapped.
pub fn combination(gap: Option<SharedResolver>, overlap: Option<SharedResolver>) -> SharedResolver {
    let gap = gap.unwrap_or_else(strict);
    let overlap = overlap.unwrap_or_else(strict);
    if Arc::ptr_eq(&gap, &overlap) {
        return gap;
    }
    Arc::new(Combination::new(gap, overlap))
}
