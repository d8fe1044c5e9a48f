//! Named resolution policies and the serializable resolver configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, Result};
use crate::resolver::SharedResolver;
use crate::resolvers;

/// The built-in policies for handling local times in a DST gap or overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolverPolicy {
    /// Reject the local time with an error
    #[default]
    Strict,
    /// Last instant before a gap; earlier offset of an overlap
    PreTransition,
    /// First instant after a gap; later offset of an overlap
    PostTransition,
    /// First instant after a gap; previous offset of an overlap if still valid
    RetainOffset,
    /// Shift a gap time forward by the gap width; later offset of an overlap
    PushForward,
}

impl ResolverPolicy {
    pub const ALL: [ResolverPolicy; 5] = [
        ResolverPolicy::Strict,
        ResolverPolicy::PreTransition,
        ResolverPolicy::PostTransition,
        ResolverPolicy::RetainOffset,
        ResolverPolicy::PushForward,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResolverPolicy::Strict => "strict",
            ResolverPolicy::PreTransition => "pre-transition",
            ResolverPolicy::PostTransition => "post-transition",
            ResolverPolicy::RetainOffset => "retain-offset",
            ResolverPolicy::PushForward => "push-forward",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ResolverPolicy::Strict => "reject gaps and overlaps with an error",
            ResolverPolicy::PreTransition => {
                "gap: instant before the transition; overlap: earlier offset"
            }
            ResolverPolicy::PostTransition => {
                "gap: first instant after the transition; overlap: later offset"
            }
            ResolverPolicy::RetainOffset => {
                "gap: first instant after the transition; overlap: keep previous offset, else later"
            }
            ResolverPolicy::PushForward => {
                "gap: push local time forward by the gap length; overlap: later offset"
            }
        }
    }

    /// The shared resolver instance for this policy.
    pub fn resolver(self) -> SharedResolver {
        match self {
            ResolverPolicy::Strict => resolvers::strict(),
            ResolverPolicy::PreTransition => resolvers::pre_transition(),
            ResolverPolicy::PostTransition => resolvers::post_transition(),
            ResolverPolicy::RetainOffset => resolvers::retain_offset(),
            ResolverPolicy::PushForward => resolvers::push_forward(),
        }
    }
}

impl fmt::Display for ResolverPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolverPolicy {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ResolverPolicy::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ResolveError::InvalidPolicy(s.to_string()))
    }
}

/// Which policy to apply to gaps and which to overlaps.
///
/// A missing entry means strict. Deserializes from JSON such as
/// `{"gap": "push-forward", "overlap": "retain-offset"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<ResolverPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap: Option<ResolverPolicy>,
}

impl ResolverConfig {
    pub fn new(gap: Option<ResolverPolicy>, overlap: Option<ResolverPolicy>) -> Self {
        Self { gap, overlap }
    }

    /// Parse a configuration from a JSON document.
    ///
    /// # Errors
    /// Returns `ResolveError::InvalidConfig` if the JSON is malformed, names an
    /// unknown policy, or contains unknown fields.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ResolveError::InvalidConfig(e.to_string()))
    }

    /// Replace each role that `other` sets.
    pub fn merge(self, other: ResolverConfig) -> Self {
        Self {
            gap: other.gap.or(self.gap),
            overlap: other.overlap.or(self.overlap),
        }
    }

    /// Build the resolver this configuration describes.
    pub fn build(&self) -> SharedResolver {
        resolvers::combination(
            self.gap.map(ResolverPolicy::resolver),
            self.overlap.map(ResolverPolicy::resolver),
        )
    }
}
